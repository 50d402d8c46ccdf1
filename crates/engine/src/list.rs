use tracing::debug;
use waymark_host::DocumentHost;
use waymark_primitives::{BookmarkEntry, DocumentId, Position, Slot, clamp_line};
use waymark_store::BookmarkStore;

use crate::config::EngineConfig;

/// One row of the bookmark list panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkListItem {
	pub slot: Slot,
	pub document: DocumentId,
	/// Position as authored, not clamped.
	pub position: Position,
	/// The document no longer resolves; the entry is dangling.
	pub missing: bool,
	/// The bookmarked line's text, when the document could be read.
	pub preview: Option<String>,
}

/// Assembles list rows for every bound slot, ascending.
///
/// A missing document yields a row flagged `missing` with no preview; a
/// failed content read degrades to no preview rather than an error.
pub fn list_items(
	store: &BookmarkStore,
	documents: &dyn DocumentHost,
	config: &EngineConfig,
) -> Vec<BookmarkListItem> {
	store
		.all()
		.map(|(slot, entry)| {
			let missing = !documents.exists(&entry.document);
			let preview = if missing {
				None
			} else {
				read_preview(documents, entry, config.preview_max_len)
			};
			BookmarkListItem {
				slot,
				document: entry.document.clone(),
				position: entry.position,
				missing,
				preview,
			}
		})
		.collect()
}

/// Reads the bookmarked line's current text, clamped the same way the
/// highlight projection clamps it.
fn read_preview(
	documents: &dyn DocumentHost,
	entry: &BookmarkEntry,
	max_len: usize,
) -> Option<String> {
	let content = match documents.read_content(&entry.document) {
		Ok(content) => content,
		Err(err) => {
			debug!(document = %entry.document, %err, "preview read failed");
			return None;
		}
	};
	let line_count = content.lines().count();
	if line_count == 0 {
		return None;
	}
	let line = clamp_line(entry.position.line, line_count);
	let text = content.lines().nth(line)?;
	Some(text.trim_end().chars().take(max_len).collect())
}
