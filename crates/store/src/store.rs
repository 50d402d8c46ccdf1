use std::fmt;

use tracing::{debug, warn};
use waymark_host::SettingsStore;
use waymark_primitives::{BookmarkEntry, DocumentId, Slot, SlotSet};

use crate::persist;
use crate::table::BookmarkTable;

/// Canonical slot → entry mapping with write-through persistence.
///
/// Every mutation commits in memory first, then hands the encoded table
/// to the settings store before returning. In-memory state is
/// authoritative for the running session: a failed save is logged and
/// implicitly retried by the next mutation, which re-encodes the full
/// current state.
pub struct BookmarkStore {
	table: BookmarkTable,
	settings: Box<dyn SettingsStore>,
}

impl BookmarkStore {
	/// Loads persisted state, defaulting to an empty table.
	///
	/// An unreadable or undecodable blob degrades to empty rather than
	/// failing startup.
	pub fn load(settings: Box<dyn SettingsStore>) -> Self {
		let table = match settings.load() {
			Ok(Some(blob)) => match persist::decode(&blob) {
				Ok(table) => table,
				Err(err) => {
					warn!(%err, "discarding undecodable bookmark state");
					BookmarkTable::new()
				}
			},
			Ok(None) => BookmarkTable::new(),
			Err(err) => {
				warn!(%err, "failed to load bookmark state");
				BookmarkTable::new()
			}
		};
		Self { table, settings }
	}

	/// Inserts or overwrites, returning the previous entry.
	pub fn set(&mut self, slot: Slot, entry: BookmarkEntry) -> Option<BookmarkEntry> {
		let previous = self.table.set(slot, entry);
		self.persist();
		previous
	}

	/// Deletes the entry if present.
	pub fn remove(&mut self, slot: Slot) -> Option<BookmarkEntry> {
		let removed = self.table.remove(slot);
		if removed.is_some() {
			self.persist();
		}
		removed
	}

	pub fn get(&self, slot: Slot) -> Option<&BookmarkEntry> {
		self.table.get(slot)
	}

	/// Iterates bound slots in ascending numeric order.
	pub fn all(&self) -> impl Iterator<Item = (Slot, &BookmarkEntry)> {
		self.table.iter()
	}

	/// Entries bound to `document`, ascending by slot.
	pub fn for_document<'a>(
		&'a self,
		document: &'a DocumentId,
	) -> impl Iterator<Item = (Slot, &'a BookmarkEntry)> {
		self.table.for_document(document)
	}

	pub fn len(&self) -> usize {
		self.table.len()
	}

	pub fn is_empty(&self) -> bool {
		self.table.is_empty()
	}

	/// The set of slots currently bound.
	pub fn bound_slots(&self) -> SlotSet {
		self.table.bound_slots()
	}

	/// Rewrites the document id on every matching entry, preserving slot
	/// identity. Persists when anything changed.
	pub fn rename_document(&mut self, old: &DocumentId, new: &DocumentId) -> bool {
		let changed = self.table.rename_document(old, new);
		if changed {
			self.persist();
		}
		changed
	}

	/// Deletes every entry bound to `document`. Persists when anything
	/// changed.
	pub fn remove_by_document(&mut self, document: &DocumentId) -> bool {
		let changed = self.table.remove_by_document(document);
		if changed {
			self.persist();
		}
		changed
	}

	fn persist(&mut self) {
		let blob = match persist::encode(&self.table) {
			Ok(blob) => blob,
			Err(err) => {
				warn!(%err, "failed to encode bookmark state");
				return;
			}
		};
		if let Err(err) = self.settings.save(&blob) {
			warn!(%err, "failed to persist bookmark state");
		} else {
			debug!(entries = self.table.len(), "persisted bookmark state");
		}
	}
}

impl fmt::Debug for BookmarkStore {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BookmarkStore")
			.field("table", &self.table)
			.finish_non_exhaustive()
	}
}
