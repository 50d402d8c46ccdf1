use waymark_primitives::{BookmarkEntry, DocumentId, SLOT_COUNT, Slot, SlotSet};

/// Mapping from slot to bookmark entry.
///
/// Backed by a fixed array indexed by slot number, which makes the
/// one-entry-per-slot and at-most-nine-entries invariants structural.
/// Iteration is always in ascending slot order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookmarkTable {
	entries: [Option<BookmarkEntry>; SLOT_COUNT],
}

impl BookmarkTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts or overwrites, returning the previous entry.
	pub fn set(&mut self, slot: Slot, entry: BookmarkEntry) -> Option<BookmarkEntry> {
		self.entries[slot.index()].replace(entry)
	}

	/// Deletes the entry if present.
	pub fn remove(&mut self, slot: Slot) -> Option<BookmarkEntry> {
		self.entries[slot.index()].take()
	}

	pub fn get(&self, slot: Slot) -> Option<&BookmarkEntry> {
		self.entries[slot.index()].as_ref()
	}

	/// Iterates bound slots in ascending numeric order.
	pub fn iter(&self) -> impl Iterator<Item = (Slot, &BookmarkEntry)> {
		Slot::ALL
			.into_iter()
			.filter_map(|slot| self.entries[slot.index()].as_ref().map(|entry| (slot, entry)))
	}

	/// Entries bound to `document`, ascending by slot.
	pub fn for_document<'a>(
		&'a self,
		document: &'a DocumentId,
	) -> impl Iterator<Item = (Slot, &'a BookmarkEntry)> {
		self.iter().filter(move |(_, entry)| &entry.document == document)
	}

	pub fn len(&self) -> usize {
		self.entries.iter().flatten().count()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.iter().all(Option::is_none)
	}

	/// The set of slots currently bound.
	pub fn bound_slots(&self) -> SlotSet {
		self.iter().map(|(slot, _)| slot).collect()
	}

	/// Rewrites the document id in place on every matching entry.
	///
	/// Slot identity is preserved; this is not a delete-and-reinsert.
	/// Returns whether any entry changed.
	pub fn rename_document(&mut self, old: &DocumentId, new: &DocumentId) -> bool {
		let mut changed = false;
		for entry in self.entries.iter_mut().flatten() {
			if &entry.document == old {
				entry.document = new.clone();
				changed = true;
			}
		}
		changed
	}

	/// Deletes every entry bound to `document`.
	///
	/// Returns whether any entry was deleted.
	pub fn remove_by_document(&mut self, document: &DocumentId) -> bool {
		let mut changed = false;
		for slot_entry in &mut self.entries {
			if slot_entry
				.as_ref()
				.is_some_and(|entry| &entry.document == document)
			{
				*slot_entry = None;
				changed = true;
			}
		}
		changed
	}
}
