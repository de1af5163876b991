use std::fmt;

/// A single step from a container into one of its children.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A member of an object.
    Key(String),
    /// An element of an array.
    Index(usize),
}

/// The position of a value relative to the root of the document
/// being decoded or encoded.
///
/// Renders as `$` for the root, followed by `.key` and `[index]`
/// steps, i.e. `$.attributes[0].ns`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CodingPath(Vec<PathSegment>);

impl CodingPath {
    /// Creates a path pointing at the document root.
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Whether this path points at the document root.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The nesting depth of the position.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// The individual steps of the path, outermost first.
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub(crate) fn push(&mut self, segment: PathSegment) {
        self.0.push(segment);
    }

    pub(crate) fn pop(&mut self) {
        self.0.pop();
    }

    /// Returns a copy of this path extended by `key`.
    pub fn join_key(&self, key: impl Into<String>) -> Self {
        let mut path = self.clone();
        path.push(PathSegment::Key(key.into()));
        path
    }

    /// Returns a copy of this path extended by `index`.
    pub fn join_index(&self, index: usize) -> Self {
        let mut path = self.clone();
        path.push(PathSegment::Index(index));
        path
    }
}

impl FromIterator<PathSegment> for CodingPath {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for CodingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.0 {
            match segment {
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(idx) => write!(f, "[{idx}]")?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_root() {
        assert_eq!(CodingPath::root().to_string(), "$");
    }

    #[test]
    fn render_nested() {
        let path = CodingPath::root()
            .join_key("attributes")
            .join_index(0)
            .join_key("ns");

        assert_eq!(path.to_string(), "$.attributes[0].ns");
        assert_eq!(path.depth(), 3);
    }
}
