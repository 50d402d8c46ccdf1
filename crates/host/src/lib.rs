//! Host capability seam for the bookmark engine.
//!
//! The engine never talks to a concrete editor. Everything it needs from
//! the host (settings persistence, document lookup, cursor movement,
//! line decorations, user notices) is expressed as a narrow object-safe
//! trait here, implemented host-side and handed to the engine at
//! construction time.
//!
//! Mock implementations of these traits are what the engine's tests run
//! against.

/// Capability traits implemented by the host.
pub mod capabilities;
/// Errors crossing the host seam.
pub mod error;
/// Transient user-facing notices.
pub mod notice;

pub use capabilities::{
	ActiveContext, ActiveView, DocumentHost, EditorSurface, HighlightSurface, NoticeSink,
	SettingsStore,
};
pub use error::HostError;
pub use notice::{Level, Notice};
