//! DoS prevention constants.
//!
//! These limits keep pathological inputs (deep emphasis nesting, very
//! wide tables) from blowing up time or memory.

/// Maximum nesting depth for inline elements (bold, italic, underline, links).
///
/// Content nested deeper than this is kept as plain text.
pub const MAX_INLINE_NESTING: usize = 32;

/// Maximum table columns kept per row. Extra cells are dropped.
pub const MAX_TABLE_COLUMNS: usize = 128;

/// Maximum heading level (`######`).
pub const MAX_HEADING_LEVEL: usize = 6;

/// Minimum backtick run that opens or closes a code fence.
pub const MIN_FENCE_LEN: usize = 3;
