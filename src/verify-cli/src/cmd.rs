pub mod fmt;
pub mod get;
pub mod inspect;

/// Represents a command in the verify application.
pub trait Command {
    /// Consumes a command object and executes the handler actions
    /// associated with it.
    ///
    /// On failure, an error will be reported.
    fn handle(self) -> eyre::Result<()>;
}
