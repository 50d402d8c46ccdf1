use waymark_primitives::{DocumentId, Position, ResolvedPosition};

use crate::error::HostError;
use crate::notice::Notice;

/// The active document and cursor, captured at command time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveContext {
	pub document: DocumentId,
	pub cursor: Position,
}

/// The currently visible document as a projection target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveView {
	pub document: DocumentId,
	pub line_count: usize,
}

/// Opaque settings blob persistence.
///
/// The engine hands the host a fully encoded blob on every mutation and
/// reads it back once at startup; the host never interprets the contents.
pub trait SettingsStore {
	/// Loads the previously saved blob, if any.
	fn load(&self) -> Result<Option<String>, HostError>;

	/// Saves the blob, replacing any previous value.
	fn save(&mut self, blob: &str) -> Result<(), HostError>;
}

/// Document lookup, opening, and content access.
pub trait DocumentHost {
	/// The active document and cursor, if an editor has focus.
	fn active_context(&self) -> Option<ActiveContext>;

	/// The active document and its current line count, if one is visible.
	fn active_view(&self) -> Option<ActiveView>;

	/// Whether `id` currently resolves to an existing document.
	fn exists(&self, id: &DocumentId) -> bool;

	/// Opens `id` and returns an editor surface for it.
	fn open(&mut self, id: &DocumentId) -> Result<Box<dyn EditorSurface + '_>, HostError>;

	/// Reads the document's current text content.
	fn read_content(&self, id: &DocumentId) -> Result<String, HostError>;

	/// Reveals and focuses the bookmark list panel.
	fn reveal_list_panel(&mut self);
}

/// An open editor over a single document.
pub trait EditorSurface {
	fn line_count(&self) -> usize;

	/// Length of the given line, in columns.
	fn line_len(&self, line: usize) -> usize;

	fn set_cursor(&mut self, position: ResolvedPosition);

	/// Scrolls the view so `line` is visible.
	fn scroll_into_view(&mut self, line: usize);
}

/// Line-addressed decoration surface for the active editor.
///
/// The host picks the concrete implementation once at mount time; the
/// engine addresses lines directly by index and never re-detects the
/// underlying decoration API.
pub trait HighlightSurface {
	fn add_line_class(&mut self, line: usize, class: &str);

	fn remove_line_class(&mut self, line: usize, class: &str);
}

/// Transient notices and blocking confirmation.
pub trait NoticeSink {
	fn notice(&mut self, notice: Notice);

	/// Shows a blocking confirm dialog; `true` means the user accepted.
	fn confirm(&mut self, prompt: &str) -> bool;
}
