/// Failures dispatching a command id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
	/// The id is not one of the registered bookmark commands.
	#[error("unknown bookmark command: {0:?}")]
	Unknown(String),
}
