//! Error types for trait building and configuration.

use thiserror::Error;

/// A sample word contains a symbol that no known glyph matches.
///
/// Aborts the whole trait-building step: no partial result is produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("encountered unknown symbol {symbol:?} at position {position} in {word:?}")]
pub struct DecodeError {
	/// The sample word being decomposed.
	pub word: String,
	/// The first character that could not be matched.
	pub symbol: char,
	/// Character offset of `symbol` within `word`.
	pub position: usize,
}

/// Invalid value passed to an `Options` setter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionsError {
	/// Length bounds must satisfy `1 <= min <= max`.
	#[error("invalid length bounds {min}..={max}")]
	InvalidBounds { min: usize, max: usize },

	#[error("glyph inventory is empty")]
	EmptyInventory,

	/// Glyphs are one or two characters long.
	#[error("invalid glyph {0:?}, expected 1 or 2 characters")]
	InvalidGlyph(String),
}
