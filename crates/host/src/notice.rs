use std::fmt;

/// Severity level for notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
	/// Informational message (default).
	#[default]
	Info,
	/// Warning message.
	Warn,
	/// Error message.
	Error,
}

/// A transient message surfaced to the user by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
	pub level: Level,
	pub message: String,
}

impl Notice {
	pub fn new(level: Level, message: impl Into<String>) -> Self {
		Self {
			level,
			message: message.into(),
		}
	}

	pub fn info(message: impl Into<String>) -> Self {
		Self::new(Level::Info, message)
	}

	pub fn warn(message: impl Into<String>) -> Self {
		Self::new(Level::Warn, message)
	}

	pub fn error(message: impl Into<String>) -> Self {
		Self::new(Level::Error, message)
	}
}

impl fmt::Display for Notice {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.message)
	}
}
