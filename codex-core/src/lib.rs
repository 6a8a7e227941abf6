//! Word synthesis from the phonetic structure of a small sample.
//!
//! A sample of words is split into glyphs (sound units of one or two
//! characters), and the glyphs seen next to each other form a symmetric
//! transition graph. New words are synthesized by walking that graph:
//! - exhaustively, with `words`
//! - at random and bounded by a count, with `words_n`
//!
//! ```
//! let words = codex_core::words(&["cat", "can", "bat"]).unwrap();
//! assert!(words.has("tab"));
//!
//! let sample = codex_core::words_n(&["cat", "can", "bat"], 5).unwrap();
//! assert_eq!(sample.len(), 5);
//! assert!(sample.is_subset(&words));
//! ```

/// Error types.
pub mod error;

/// String and string pair sets.
pub mod set;

/// Sample analysis, graph building and synthesis.
pub mod model;

pub use error::{DecodeError, OptionsError};
pub use model::generator::Generator;
pub use model::options::Options;
pub use model::traits::Traits;
pub use set::{PairSet, Set};

/// Builds every synthetic word derivable from a sample.
///
/// Only suitable for very small samples: the number of results grows
/// combinatorially and can reach hundreds of thousands for a dozen words.
///
/// # Errors
/// Returns a `DecodeError` if a sample word holds an unknown symbol.
pub fn words<S: AsRef<str>>(samples: &[S]) -> Result<Set, DecodeError> {
	words_with(samples, &Options::default())
}

/// Same as `words`, with explicit options.
pub fn words_with<S: AsRef<str>>(samples: &[S], options: &Options) -> Result<Set, DecodeError> {
	Ok(Traits::new(samples, options)?.words(options))
}

/// Builds a random sample of at most `count` synthetic words.
///
/// The random source is seeded from the clock on every call, so results
/// differ between calls. Use `Generator::seeded` for reproducible draws.
///
/// # Errors
/// Returns a `DecodeError` if a sample word holds an unknown symbol.
pub fn words_n<S: AsRef<str>>(samples: &[S], count: usize) -> Result<Set, DecodeError> {
	words_n_with(samples, count, Options::default())
}

/// Same as `words_n`, with explicit options.
pub fn words_n_with<S: AsRef<str>>(samples: &[S], count: usize, options: Options) -> Result<Set, DecodeError> {
	Ok(Generator::with_options(samples, options)?.words_n(count))
}
