use tracing::debug;
use waymark_host::{
	ActiveContext, DocumentHost, HighlightSurface, Notice, NoticeSink, SettingsStore,
};
use waymark_primitives::{BookmarkEntry, DocumentId, Slot, SlotSet, resolve};
use waymark_store::BookmarkStore;

use crate::commands::{self, CommandAction};
use crate::config::EngineConfig;
use crate::error::CommandError;
use crate::list::{self, BookmarkListItem};
use crate::observer::{Observer, ObserverHub, ObserverId, RenderContext};
use crate::projector::HighlightProjector;


/// Bound-slot summary for ribbon indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSummary {
	pub bound: SlotSet,
	pub count: usize,
}

/// Orchestrates bookmark commands and host lifecycle events.
///
/// Owns the store and both fan-out paths (highlight projection and
/// observer notification); every mutation ends by driving both, so all
/// views derive from the same authoritative state.
pub struct BookmarkController {
	store: BookmarkStore,
	projector: HighlightProjector,
	hub: ObserverHub,
	documents: Box<dyn DocumentHost>,
	notices: Box<dyn NoticeSink>,
	highlight: Box<dyn HighlightSurface>,
	config: EngineConfig,
}

impl BookmarkController {
	/// Loads persisted state and projects onto the current active
	/// document.
	pub fn new(
		settings: Box<dyn SettingsStore>,
		documents: Box<dyn DocumentHost>,
		notices: Box<dyn NoticeSink>,
		highlight: Box<dyn HighlightSurface>,
		config: EngineConfig,
	) -> Self {
		let store = BookmarkStore::load(settings);
		let mut controller = Self {
			store,
			projector: HighlightProjector::new(),
			hub: ObserverHub::new(),
			documents,
			notices,
			highlight,
			config,
		};
		controller.refresh_highlights();
		controller
	}

	/// Runs the command registered under `id`.
	pub fn dispatch(&mut self, id: &str) -> Result<(), CommandError> {
		let def = commands::find(id).ok_or_else(|| CommandError::Unknown(id.to_owned()))?;
		debug!(command = def.id, "dispatching bookmark command");
		match def.action {
			CommandAction::Set(slot) => self.set_bookmark(slot),
			CommandAction::Jump(slot) => self.jump_to_bookmark(slot),
			CommandAction::ShowList => self.show_list(),
		}
		Ok(())
	}

	/// Binds `slot` at the active cursor.
	///
	/// Setting a slot that already holds exactly the active position is a
	/// toggle: after confirmation the slot is unbound. A slot bound
	/// elsewhere is overwritten silently.
	pub fn set_bookmark(&mut self, slot: Slot) {
		let Some(ActiveContext { document, cursor }) = self.documents.active_context() else {
			self.notices
				.notice(Notice::warn("No active editor to bookmark"));
			return;
		};
		let entry = BookmarkEntry {
			document,
			position: cursor,
		};

		let is_toggle = self
			.store
			.get(slot)
			.is_some_and(|existing| *existing == entry);
		if is_toggle {
			if !self.confirm_destructive(&format!("Remove bookmark {slot}?")) {
				return;
			}
			self.store.remove(slot);
			self.notices
				.notice(Notice::info(format!("Bookmark {slot} removed")));
		} else {
			self.store.set(slot, entry);
			self.notices
				.notice(Notice::info(format!("Bookmark {slot} set")));
		}
		self.refresh_and_notify();
	}

	/// Removes `slot` after confirmation; a no-op when unbound.
	pub fn remove_bookmark(&mut self, slot: Slot) {
		if self.store.get(slot).is_none() {
			return;
		}
		if !self.confirm_destructive(&format!("Remove bookmark {slot}?")) {
			return;
		}
		self.store.remove(slot);
		self.notices
			.notice(Notice::info(format!("Bookmark {slot} removed")));
		self.refresh_and_notify();
	}

	/// Jumps to `slot`'s saved position, clamped to the live document.
	pub fn jump_to_bookmark(&mut self, slot: Slot) {
		let Some(entry) = self.store.get(slot).cloned() else {
			self.notices
				.notice(Notice::info(format!("Bookmark {slot} is not set")));
			return;
		};
		if !self.documents.exists(&entry.document) {
			// Dangling entries are kept for the user to review; only the
			// document-delete event prunes them.
			self.notices.notice(Notice::warn(format!(
				"Bookmark {slot}: {} is missing",
				entry.document
			)));
			return;
		}

		match self.documents.open(&entry.document) {
			Ok(mut editor) => {
				let resolved = resolve(entry.position, editor.line_count(), |line| {
					editor.line_len(line)
				});
				editor.set_cursor(resolved);
				editor.scroll_into_view(resolved.line);
			}
			Err(err) => {
				self.notices.notice(Notice::error(format!(
					"Bookmark {slot}: failed to open {}: {err}",
					entry.document
				)));
				return;
			}
		}
		self.refresh_and_notify();
	}

	/// Reveals the bookmark list panel.
	pub fn show_list(&mut self) {
		self.documents.reveal_list_panel();
	}

	/// Host callback: a document was renamed.
	pub fn document_renamed(&mut self, old: &DocumentId, new: &DocumentId) {
		if self.store.rename_document(old, new) {
			debug!(%old, %new, "rewrote bookmarks for renamed document");
			self.refresh_and_notify();
		}
	}

	/// Host callback: a document was deleted.
	pub fn document_deleted(&mut self, id: &DocumentId) {
		if self.store.remove_by_document(id) {
			debug!(%id, "dropped bookmarks for deleted document");
			self.refresh_and_notify();
		}
	}

	/// Host callback: the active document changed, or none is visible.
	pub fn active_document_changed(&mut self) {
		self.refresh_highlights();
	}

	/// Registers a view; it renders immediately and on every change.
	pub fn register_observer(&mut self, observer: Box<dyn Observer>) -> ObserverId {
		let cx = RenderContext {
			store: &self.store,
			documents: self.documents.as_ref(),
			config: &self.config,
		};
		self.hub.register(observer, &cx)
	}

	pub fn unregister_observer(&mut self, id: ObserverId) {
		self.hub.unregister(id);
	}

	/// Host callback: an observer's asynchronous render finished.
	pub fn render_complete(&mut self, id: ObserverId) {
		let cx = RenderContext {
			store: &self.store,
			documents: self.documents.as_ref(),
			config: &self.config,
		};
		self.hub.render_complete(id, &cx);
	}

	/// Rows for the list panel, ascending by slot.
	pub fn list_items(&self) -> Vec<BookmarkListItem> {
		list::list_items(&self.store, self.documents.as_ref(), &self.config)
	}

	/// Bound-slot summary for ribbon indicators.
	pub fn slot_summary(&self) -> SlotSummary {
		SlotSummary {
			bound: self.store.bound_slots(),
			count: self.store.len(),
		}
	}

	pub fn store(&self) -> &BookmarkStore {
		&self.store
	}

	fn confirm_destructive(&mut self, prompt: &str) -> bool {
		!self.config.confirm_destructive || self.notices.confirm(prompt)
	}

	fn refresh_and_notify(&mut self) {
		self.refresh_highlights();
		let cx = RenderContext {
			store: &self.store,
			documents: self.documents.as_ref(),
			config: &self.config,
		};
		self.hub.notify_all(&cx);
	}

	fn refresh_highlights(&mut self) {
		match self.documents.active_view() {
			Some(view) => self.projector.project(
				&self.store,
				&view.document,
				view.line_count,
				self.highlight.as_mut(),
			),
			None => self.projector.clear(self.highlight.as_mut()),
		}
	}
}
