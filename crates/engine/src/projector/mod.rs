use std::collections::BTreeMap;

use tracing::trace;
use waymark_host::HighlightSurface;
use waymark_primitives::{DocumentId, SLOT_COUNT, Slot, SlotSet, clamp_line};
use waymark_store::BookmarkStore;


/// Generic class carried by any bookmarked line.
pub const BOOKMARK_CLASS: &str = "bookmarked";

const SLOT_CLASSES: [&str; SLOT_COUNT] = [
	"slot-highlight-1",
	"slot-highlight-2",
	"slot-highlight-3",
	"slot-highlight-4",
	"slot-highlight-5",
	"slot-highlight-6",
	"slot-highlight-7",
	"slot-highlight-8",
	"slot-highlight-9",
];

/// Stable per-slot class for a line carrying that slot's badge.
pub fn slot_class(slot: Slot) -> &'static str {
	SLOT_CLASSES[slot.index()]
}

/// Projects store state onto the active document's highlight surface.
///
/// Retains the previously applied line → slots mapping for exactly one
/// document and emits only the difference on each projection, so lines
/// untouched by a change see zero surface calls. Switching documents
/// fully clears the old document's lines first; at most one document is
/// highlighted at a time.
#[derive(Debug, Default)]
pub struct HighlightProjector {
	applied: Option<(DocumentId, BTreeMap<usize, SlotSet>)>,
}

impl HighlightProjector {
	pub fn new() -> Self {
		Self::default()
	}

	/// Recomputes highlights for `document` and applies the delta.
	pub fn project(
		&mut self,
		store: &BookmarkStore,
		document: &DocumentId,
		line_count: usize,
		surface: &mut dyn HighlightSurface,
	) {
		if self
			.applied
			.as_ref()
			.is_some_and(|(applied_doc, _)| applied_doc != document)
		{
			self.clear(surface);
		}

		let desired = desired_lines(store, document, line_count);
		let previous = match self.applied.take() {
			Some((_, lines)) => lines,
			None => BTreeMap::new(),
		};

		apply_delta(&previous, &desired, surface);
		trace!(document = %document, lines = desired.len(), "projected highlights");
		self.applied = Some((document.clone(), desired));
	}

	/// Removes every applied highlight and drops the retained state.
	///
	/// Used when no document is visible; the projector then holds no
	/// reference to a stale surface's lines.
	pub fn clear(&mut self, surface: &mut dyn HighlightSurface) {
		if let Some((document, lines)) = self.applied.take() {
			trace!(document = %document, lines = lines.len(), "clearing highlights");
			for (line, slots) in lines {
				clear_line(line, slots, surface);
			}
		}
	}
}

/// Groups the document's entries by resolved line.
fn desired_lines(
	store: &BookmarkStore,
	document: &DocumentId,
	line_count: usize,
) -> BTreeMap<usize, SlotSet> {
	let mut lines: BTreeMap<usize, SlotSet> = BTreeMap::new();
	for (slot, entry) in store.for_document(document) {
		let line = clamp_line(entry.position.line, line_count);
		lines.entry(line).or_default().insert(slot);
	}
	lines
}

fn apply_delta(
	previous: &BTreeMap<usize, SlotSet>,
	desired: &BTreeMap<usize, SlotSet>,
	surface: &mut dyn HighlightSurface,
) {
	for (&line, &had) in previous {
		match desired.get(&line) {
			None => clear_line(line, had, surface),
			Some(&want) => {
				for slot in had.iter() {
					if !want.contains(slot) {
						surface.remove_line_class(line, slot_class(slot));
					}
				}
			}
		}
	}

	for (&line, &want) in desired {
		match previous.get(&line) {
			None => {
				surface.add_line_class(line, BOOKMARK_CLASS);
				for slot in want.iter() {
					surface.add_line_class(line, slot_class(slot));
				}
			}
			Some(&had) => {
				for slot in want.iter() {
					if !had.contains(slot) {
						surface.add_line_class(line, slot_class(slot));
					}
				}
			}
		}
	}
}

fn clear_line(line: usize, slots: SlotSet, surface: &mut dyn HighlightSurface) {
	for slot in slots.iter() {
		surface.remove_line_class(line, slot_class(slot));
	}
	surface.remove_line_class(line, BOOKMARK_CLASS);
}
