/// A stored cursor position, kept exactly as authored.
///
/// Stored positions are never clamped in place; clamping happens at read
/// time via [`resolve`] so that a document growing back reveals the
/// original position again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
	/// Zero-based line.
	pub line: usize,
	/// Zero-based column within the line.
	pub column: usize,
}

impl Position {
	pub const fn new(line: usize, column: usize) -> Self {
		Self { line, column }
	}
}

/// A position clamped against a live document's bounds.
///
/// Always recomputed fresh; never stored or cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPosition {
	pub line: usize,
	pub column: usize,
}

/// Clamps a stored line into `[0, line_count - 1]`.
///
/// An empty document resolves to line 0.
pub fn clamp_line(line: usize, line_count: usize) -> usize {
	line.min(line_count.saturating_sub(1))
}

/// Resolves a stored position against a document's current bounds.
///
/// The line is clamped first; the column is then clamped to the resolved
/// line's length. `line_len` is only consulted for the resolved line.
pub fn resolve(
	position: Position,
	line_count: usize,
	line_len: impl FnOnce(usize) -> usize,
) -> ResolvedPosition {
	let line = clamp_line(position.line, line_count);
	let column = position.column.min(line_len(line));
	ResolvedPosition { line, column }
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case::past_end(100, 10, 9)]
	#[case::in_bounds(5, 10, 5)]
	#[case::last_line(9, 10, 9)]
	#[case::empty_document(3, 0, 0)]
	#[case::single_line(1, 1, 0)]
	fn line_clamping(#[case] line: usize, #[case] line_count: usize, #[case] expected: usize) {
		assert_eq!(clamp_line(line, line_count), expected);
	}

	#[test]
	fn column_clamps_to_resolved_line_length() {
		let resolved = resolve(Position::new(2, 50), 10, |line| {
			assert_eq!(line, 2);
			5
		});
		assert_eq!(resolved, ResolvedPosition { line: 2, column: 5 });
	}

	#[test]
	fn column_within_bounds_is_preserved() {
		let resolved = resolve(Position::new(0, 3), 1, |_| 8);
		assert_eq!(resolved, ResolvedPosition { line: 0, column: 3 });
	}

	#[test]
	fn line_clamp_happens_before_column_clamp() {
		// The column must be measured against the *resolved* line, not the
		// authored one.
		let resolved = resolve(Position::new(100, 4), 10, |line| {
			assert_eq!(line, 9);
			2
		});
		assert_eq!(resolved, ResolvedPosition { line: 9, column: 2 });
	}

	#[test]
	fn empty_document_resolves_to_origin() {
		let resolved = resolve(Position::new(7, 12), 0, |_| 0);
		assert_eq!(resolved, ResolvedPosition { line: 0, column: 0 });
	}
}
