use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::DecodeError;
use crate::model::options::Options;
use crate::model::traits::Traits;
use crate::set::Set;

/// High-level generator built from a sample of words.
///
/// # Responsibilities
/// - Build and own the `Traits` of a sample along with its `Options`
/// - Own the random source used for bounded sampling
/// - Expose exhaustive and bounded word synthesis
///
/// Each generator owns its random source, so separate generators can be
/// used from separate threads without sharing state.
#[derive(Debug)]
pub struct Generator {
	traits: Traits,
	options: Options,
	rng: StdRng,
}

impl Generator {
	/// Creates a generator with default options, seeded from the clock.
	///
	/// # Errors
	/// Returns a `DecodeError` if a sample word cannot be decomposed.
	pub fn new<S: AsRef<str>>(samples: &[S]) -> Result<Self, DecodeError> {
		Self::with_options(samples, Options::default())
	}

	/// Creates a generator with the given options, seeded from the clock.
	pub fn with_options<S: AsRef<str>>(samples: &[S], options: Options) -> Result<Self, DecodeError> {
		Self::seeded(samples, options, clock_seed())
	}

	/// Creates a generator whose random source is seeded with `seed`.
	///
	/// Two generators built from the same sample, options and seed draw the
	/// same words.
	pub fn seeded<S: AsRef<str>>(samples: &[S], options: Options, seed: u64) -> Result<Self, DecodeError> {
		let traits = Traits::new(samples, &options)?;
		Ok(Self { traits, options, rng: StdRng::seed_from_u64(seed) })
	}

	/// Resets the random source with `seed`.
	pub fn reseed(&mut self, seed: u64) {
		self.rng = StdRng::seed_from_u64(seed);
	}

	pub fn traits(&self) -> &Traits {
		&self.traits
	}

	pub fn options(&self) -> &Options {
		&self.options
	}

	/// Adds one more sample word.
	///
	/// # Errors
	/// Returns a `DecodeError` if the word cannot be decomposed; the
	/// generator is left untouched.
	pub fn add_word(&mut self, word: &str) -> Result<(), DecodeError> {
		self.traits.add_word(word, &self.options)
	}

	/// Merges the traits of another generator into this one.
	///
	/// Options and random source of `self` are kept.
	pub fn merge(&mut self, other: &Self) {
		self.traits.merge(&other.traits);
	}

	/// Every word derivable from the sample. See `Traits::words`.
	pub fn words(&self) -> Set {
		self.traits.words(&self.options)
	}

	/// Up to `count` random derivable words. See `Traits::words_n`.
	pub fn words_n(&mut self, count: usize) -> Set {
		self.traits.words_n(count, &self.options, &mut self.rng)
	}
}

/// Seed taken from the wall clock, in nanoseconds since the Unix epoch.
fn clock_seed() -> u64 {
	SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.map(|elapsed| elapsed.as_nanos() as u64)
		.unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn same_seed_draws_same_words() {
		let mut first = Generator::seeded(&["cat", "can", "bat"], Options::default(), 5).unwrap();
		let mut second = Generator::seeded(&["cat", "can", "bat"], Options::default(), 5).unwrap();
		assert_eq!(first.words_n(8), second.words_n(8));

		first.reseed(9);
		second.reseed(9);
		assert_eq!(first.words_n(3), second.words_n(3));
	}

	#[test]
	fn sample_is_subset_of_all_words() {
		let mut generator = Generator::new(&["cat", "can", "bat"]).unwrap();
		let all = generator.words();
		let sample = generator.words_n(20);
		assert_eq!(sample.len(), 20);
		assert!(sample.is_subset(&all));
	}

	#[test]
	fn add_word_and_merge() {
		let mut generator = Generator::seeded(&["cat"], Options::default(), 1).unwrap();
		assert!(!generator.words().has("tab"));
		generator.add_word("bat").unwrap();
		assert!(generator.words().has("tab"));

		let other = Generator::seeded(&["can"], Options::default(), 2).unwrap();
		generator.merge(&other);
		assert!(generator.words().has("nac"));
		assert!(generator.add_word("Cat").is_err());
	}

	#[test]
	fn options_are_applied() {
		let mut options = Options::default();
		options.set_length_bounds(3, 3).unwrap();
		let mut generator = Generator::seeded(&["cat", "can", "bat"], options, 3).unwrap();
		assert!(generator.words().iter().all(|word| word.len() == 3));
		assert!(generator.words_n(4).iter().all(|word| word.len() == 3));
		assert_eq!(generator.options().max_len(), 3);
	}
}
