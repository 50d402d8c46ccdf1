use waymark_primitives::DocumentId;

/// Failures reported by host capabilities.
///
/// Nothing here is fatal: the engine degrades (missing preview, aborted
/// jump) and surfaces a notice instead of propagating.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
	/// The id no longer resolves to an existing document.
	#[error("document not found: {0}")]
	DocumentNotFound(DocumentId),

	/// An underlying host I/O operation failed.
	#[error("host i/o failed: {0}")]
	Io(String),
}
