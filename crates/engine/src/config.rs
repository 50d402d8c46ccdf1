use serde::Deserialize;

/// Tunable engine behavior, deserialized from host settings.
///
/// Unknown fields are ignored so hosts can carry extra keys alongside.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
	/// Ask for confirmation before the destructive toggle and remove
	/// paths. `false` deletes immediately, for hosts without a blocking
	/// dialog.
	pub confirm_destructive: bool,
	/// Maximum length of a list panel preview, in characters.
	pub preview_max_len: usize,
}

impl Default for EngineConfig {
	fn default() -> Self {
		Self {
			confirm_destructive: true,
			preview_max_len: 120,
		}
	}
}
