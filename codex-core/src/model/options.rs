use crate::error::OptionsError;
use crate::set::Set;

/// Default minimum word length, in characters (inclusive).
pub const MIN_LEN: usize = 2;

/// Default maximum word length, in characters (inclusive).
pub const MAX_LEN: usize = 64;

/// Digraphs known by default, on top of the ASCII lowercase letters.
pub const DEFAULT_DIGRAPHS: [&str; 20] = [
	"ch", "sh", "th", "ph", "wh", "gh", "ck", "ng", "qu", "kh",
	"zh", "ee", "oo", "ou", "ai", "ea", "ie", "oa", "ay", "ey",
];

/// Configuration shared by trait building and word synthesis.
///
/// # Responsibilities
/// - Hold the glyph inventory the decomposer may draw from
/// - Hold the inclusive length bounds a synthesized word must respect
/// - Tell whether sample words may appear in the results
///
/// # Invariants
/// - `1 <= min_len <= max_len`
/// - The inventory is non-empty and only holds 1 or 2 character glyphs
#[derive(Clone, Debug)]
pub struct Options {
	/// Drop words that are already part of the sample from the results.
	pub exclude_samples: bool,

	min_len: usize,
	max_len: usize,
	inventory: Set,
}

impl Default for Options {
	/// Lowercase ASCII letters plus `DEFAULT_DIGRAPHS`, words of 2 to 64
	/// characters, sample words kept.
	fn default() -> Self {
		let mut inventory: Set = ('a'..='z').map(String::from).collect();
		inventory.extend(DEFAULT_DIGRAPHS);

		Self {
			exclude_samples: false,
			min_len: MIN_LEN,
			max_len: MAX_LEN,
			inventory,
		}
	}
}

impl Options {
	pub fn min_len(&self) -> usize {
		self.min_len
	}

	pub fn max_len(&self) -> usize {
		self.max_len
	}

	/// Glyphs the decomposer is allowed to use.
	pub fn inventory(&self) -> &Set {
		&self.inventory
	}

	/// Returns `true` if a word of `len` characters is within bounds.
	pub fn valid_length(&self, len: usize) -> bool {
		len >= self.min_len && len <= self.max_len
	}

	/// Sets the inclusive length bounds, in characters.
	///
	/// # Errors
	/// Returns an error if `min` is zero or greater than `max`.
	pub fn set_length_bounds(&mut self, min: usize, max: usize) -> Result<(), OptionsError> {
		if min == 0 || min > max {
			return Err(OptionsError::InvalidBounds { min, max });
		}
		self.min_len = min;
		self.max_len = max;
		Ok(())
	}

	/// Replaces the glyph inventory.
	///
	/// # Errors
	/// Returns an error if the inventory is empty or holds a glyph that is
	/// not 1 or 2 characters long. The current inventory is kept on error.
	pub fn set_inventory<I, S>(&mut self, glyphs: I) -> Result<(), OptionsError>
	where
		I: IntoIterator<Item=S>,
		S: Into<String>,
	{
		let mut inventory = Set::new();
		for glyph in glyphs {
			let glyph = glyph.into();
			if !(1..=2).contains(&glyph.chars().count()) {
				return Err(OptionsError::InvalidGlyph(glyph));
			}
			inventory.add(glyph);
		}
		if inventory.is_empty() {
			return Err(OptionsError::EmptyInventory);
		}
		self.inventory = inventory;
		Ok(())
	}
}
