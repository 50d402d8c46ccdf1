#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Core value types for slot-based bookmarks.
//!
//! Everything here is pure data: no I/O, no host types. The store and
//! engine crates build on these.
//!
//! # Main Types
//!
//! - [`Slot`] - One of the nine numbered bookmark identifiers
//! - [`BookmarkEntry`] - A saved (document, line, column) triple
//! - [`resolve`] - Clamps a stored position against live document bounds

/// Document identifiers and bookmark entries.
pub mod entry;
/// Authored and resolved text positions.
pub mod position;
/// Numbered bookmark slots and slot sets.
pub mod slot;

pub use entry::{BookmarkEntry, DocumentId};
pub use position::{Position, ResolvedPosition, clamp_line, resolve};
pub use slot::{InvalidSlot, SLOT_COUNT, Slot, SlotSet};
