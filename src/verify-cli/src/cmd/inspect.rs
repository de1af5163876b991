use std::collections::BTreeMap;

use clap::Args;
use verify_core::DynamicValue;

use super::Command;
use crate::cli::DecodeArgs;

/// Subcommand for describing the contents of a JSON document.
#[derive(Debug, Args)]
pub struct Inspect {
    #[clap(flatten)]
    args: DecodeArgs,
}

impl Command for Inspect {
    fn handle(self) -> eyre::Result<()> {
        let value = self.args.decode()?;
        let summary = Summary::collect(&value);

        println!("Type: {}", value.type_name());
        println!("Depth: {}", summary.depth);
        println!("Display: {value}");
        println!("Debug: {value:?}");

        println!("Values:");
        for (name, count) in &summary.counts {
            println!("  {name}: {count}");
        }

        Ok(())
    }
}

/// Statistics about the values in a tree.
#[derive(Debug, Default, PartialEq)]
struct Summary {
    counts: BTreeMap<&'static str, usize>,
    depth: usize,
}

impl Summary {
    fn collect(root: &DynamicValue) -> Self {
        let mut summary = Self::default();

        let mut stack = vec![(root, 0)];
        while let Some((value, depth)) = stack.pop() {
            *summary.counts.entry(value.type_name()).or_default() += 1;
            summary.depth = summary.depth.max(depth);

            match value {
                DynamicValue::Array(arr) => stack.extend(arr.iter().map(|v| (v, depth + 1))),
                DynamicValue::Object(obj) => stack.extend(obj.values().map(|v| (v, depth + 1))),
                _ => {}
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_every_node() {
        let value = verify_core::from_str(r#"{"a": [1, 2.5, "x", null], "b": {"c": true}}"#).unwrap();
        let summary = Summary::collect(&value);

        assert_eq!(summary.depth, 2);
        assert_eq!(summary.counts["object"], 2);
        assert_eq!(summary.counts["array"], 1);
        assert_eq!(summary.counts["int64"], 1);
        assert_eq!(summary.counts["null"], 1);
        assert_eq!(summary.counts.values().sum::<usize>(), 8);
    }
}
