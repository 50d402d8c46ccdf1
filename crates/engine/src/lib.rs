#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Bookmark state and cross-view synchronization engine.
//!
//! A single [`BookmarkController`] owns the canonical store and drives
//! every view of it:
//!
//! ```text
//! command / lifecycle event
//!         │
//!         ▼
//! BookmarkController
//!         ├── BookmarkStore        // slot → entry, write-through persistence
//!         ├── HighlightProjector   // minimal-delta line decorations
//!         └── ObserverHub          // list panel + ribbon, coalesced renders
//! ```
//!
//! The host is reached only through the capability traits in
//! [`waymark_host`]; commands arrive as ids through
//! [`BookmarkController::dispatch`].

/// Command surface: static definitions and dispatch actions.
pub mod commands;
/// Engine configuration.
pub mod config;
/// Command orchestration over the host capability seam.
pub mod controller;
/// Engine error types.
pub mod error;
/// List panel row assembly.
pub mod list;
/// Observer registry with per-observer render coalescing.
pub mod observer;
/// Minimal-delta projection of bookmarks onto line decorations.
pub mod projector;
#[cfg(test)]
pub(crate) mod testing;

pub use commands::{COMMANDS, CommandAction, CommandDef};
pub use config::EngineConfig;
pub use controller::{BookmarkController, SlotSummary};
pub use error::CommandError;
pub use list::BookmarkListItem;
pub use observer::{Observer, ObserverHub, ObserverId, RenderContext};
pub use projector::{BOOKMARK_CLASS, HighlightProjector, slot_class};
