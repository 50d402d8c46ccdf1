use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;
use waymark_primitives::{BookmarkEntry, Slot};

use crate::table::BookmarkTable;

/// Wire layout:
/// `{ "bookmarks": { "<slot 1-9>": { "file": <str>, "line": <int>, "ch": <int> } } }`.
#[derive(Debug, Serialize)]
struct PersistedState {
	bookmarks: BTreeMap<String, PersistedEntry>,
}

/// Decode-side counterpart of [`PersistedState`].
///
/// Entries stay raw JSON values so one malformed record cannot poison the
/// rest of the table; unknown top-level keys are ignored.
#[derive(Debug, Default, Deserialize)]
struct RawState {
	#[serde(default)]
	bookmarks: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedEntry {
	file: String,
	line: usize,
	ch: usize,
}

impl From<&BookmarkEntry> for PersistedEntry {
	fn from(entry: &BookmarkEntry) -> Self {
		Self {
			file: entry.document.as_str().to_owned(),
			line: entry.position.line,
			ch: entry.position.column,
		}
	}
}

/// Failures encoding or decoding the persisted blob.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
	#[error("failed to encode bookmark state: {0}")]
	Encode(#[source] serde_json::Error),

	#[error("failed to decode bookmark state: {0}")]
	Decode(#[source] serde_json::Error),
}

/// Encodes the full table to the wire layout.
pub fn encode(table: &BookmarkTable) -> Result<String, PersistError> {
	let state = PersistedState {
		bookmarks: table
			.iter()
			.map(|(slot, entry)| (slot.to_string(), PersistedEntry::from(entry)))
			.collect(),
	};
	serde_json::to_string(&state).map_err(PersistError::Encode)
}

/// Decodes a blob, merging well-formed entries over an empty table.
///
/// Out-of-range slot keys and malformed entries are skipped rather than
/// failing the whole load.
pub fn decode(blob: &str) -> Result<BookmarkTable, PersistError> {
	let raw: RawState = serde_json::from_str(blob).map_err(PersistError::Decode)?;
	let mut table = BookmarkTable::new();
	for (key, value) in raw.bookmarks {
		let Ok(slot) = key.parse::<Slot>() else {
			debug!(%key, "skipping bookmark under unknown slot key");
			continue;
		};
		match serde_json::from_value::<PersistedEntry>(value) {
			Ok(wire) => {
				table.set(slot, BookmarkEntry::new(wire.file, wire.line, wire.ch));
			}
			Err(err) => debug!(%slot, %err, "skipping malformed bookmark entry"),
		}
	}
	Ok(table)
}
