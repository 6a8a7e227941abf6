use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::model::graph;
use crate::model::interrupt::{self, Flow};
use crate::model::options::Options;
use crate::model::sounds::{decompose, known_glyphs};
use crate::model::walker::Walker;
use crate::set::{PairSet, Set};

/// Phonetic traits of a sample of words.
///
/// `Traits` holds which glyphs occur in the sample and which glyph was seen
/// next to which. New words are synthesized by walking that transition graph.
///
/// # Responsibilities
/// - Decompose sample words into glyphs and record their transitions
/// - Enumerate every word derivable from the graph (`words`)
/// - Draw a bounded random sample of derivable words (`words_n`)
/// - Merge with the traits of another sample
///
/// # Invariants
/// - `graph` is symmetric: `(a, b)` present implies `(b, a)` present
/// - Every glyph of `graph` is in `glyphs`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Traits {
	/// Glyphs found while decomposing the sample.
	glyphs: Set,
	/// Symmetric transition graph between glyphs.
	graph: PairSet,
	/// The sample words themselves.
	samples: Set,
}

impl Traits {
	/// Builds the traits of a sample.
	///
	/// The known glyph set is the part of the inventory of `options` that
	/// occurs in the sample. Every word is decomposed against it, then the
	/// transition graph of all words is symmetrized.
	///
	/// # Errors
	/// Returns a `DecodeError` if any word cannot be decomposed. No partial
	/// traits are returned.
	pub fn new<S: AsRef<str>>(samples: &[S], options: &Options) -> Result<Self, DecodeError> {
		let known = known_glyphs(samples, options.inventory());
		let mut traits = Self::default();
		for word in samples {
			traits.learn(word.as_ref(), &known)?;
		}
		graph::symmetrize(&mut traits.graph);

		log::debug!(
			"built traits from {} samples: {} glyphs, {} pairs",
			samples.len(),
			traits.glyphs.len(),
			traits.graph.len()
		);
		Ok(traits)
	}

	/// Adds one more sample word to the traits.
	///
	/// # Errors
	/// Returns a `DecodeError` if the word cannot be decomposed. The traits
	/// are left untouched in that case.
	pub fn add_word(&mut self, word: &str, options: &Options) -> Result<(), DecodeError> {
		let known = known_glyphs(&[word], options.inventory());
		self.learn(word, &known)?;
		graph::symmetrize(&mut self.graph);
		Ok(())
	}

	/// Decomposes `word` and records its glyphs and transitions.
	///
	/// Does not symmetrize the graph.
	fn learn(&mut self, word: &str, known: &Set) -> Result<(), DecodeError> {
		let sounds = decompose(word, known)?;
		self.glyphs.extend(sounds.iter().map(String::as_str));
		graph::add_pairs(&mut self.graph, &sounds);
		self.samples.add(word);
		Ok(())
	}

	/// Merges the traits of another sample into this one.
	///
	/// The union of two symmetric graphs is symmetric.
	pub fn merge(&mut self, other: &Self) {
		self.glyphs.merge(&other.glyphs);
		self.graph.merge(&other.graph);
		self.samples.merge(&other.samples);
	}

	pub fn glyphs(&self) -> &Set {
		&self.glyphs
	}

	pub fn graph(&self) -> &PairSet {
		&self.graph
	}

	pub fn samples(&self) -> &Set {
		&self.samples
	}

	/// Returns `true` if `word` must not appear in the results.
	fn excluded(&self, word: &str, options: &Options) -> bool {
		options.exclude_samples && self.samples.has(word)
	}

	/// Enumerates every word derivable from the traits.
	///
	/// A walk starts from every glyph. Each walk emits every prefix whose
	/// length is within the bounds of `options`.
	///
	/// # Notes
	/// - Deterministic: the same traits always give the same set.
	/// - Meant for very small samples. The number of results grows
	///   combinatorially with the number of glyphs and transitions and can
	///   reach hundreds of thousands for a dozen sample words. Use
	///   `words_n` to bound the cost.
	pub fn words(&self, options: &Options) -> Set {
		let neighbours = graph::neighbours(&self.graph);
		let mut walker = Walker::new(&neighbours, options);
		let mut words = Set::new();

		let mut visit = |word: &str| -> Flow {
			if !self.excluded(word, options) {
				words.add(word);
			}
			Ok(())
		};
		let mut keep_order = |_: &mut Vec<&str>| ();

		let flow = self
			.glyphs
			.iter()
			.try_for_each(|glyph| walker.walk(glyph, &mut visit, &mut keep_order));
		match interrupt::recover(flow) {
			Ok(_) => (),
			Err(never) => match never {},
		}

		log::debug!("synthesized {} words", words.len());
		words
	}

	/// Draws up to `count` distinct derivable words at random.
	///
	/// Walks start from every glyph in random order, as in `words`, and
	/// neighbours are descended into in random order. The search stops
	/// as soon as `count` words are found, or when every walk is exhausted.
	///
	/// # Notes
	/// - The result is always a subset of `words`.
	/// - It holds exactly `count` words whenever `words` holds at least
	///   `count` words.
	pub fn words_n<R: Rng + ?Sized>(&self, count: usize, options: &Options, rng: &mut R) -> Set {
		let mut words = Set::new();
		if count == 0 {
			return words;
		}

		let neighbours = graph::neighbours(&self.graph);
		let mut walker = Walker::new(&neighbours, options);

		let mut starts: Vec<&str> = self.glyphs.iter().collect();
		starts.sort_unstable();
		starts.shuffle(rng);

		let mut visit = |word: &str| -> Flow {
			if self.excluded(word, options) {
				return Ok(());
			}
			words.add(word);
			if words.len() >= count {
				return interrupt::interrupt();
			}
			Ok(())
		};
		let mut shuffle = |next: &mut Vec<&str>| next.shuffle(rng);

		let flow = starts
			.iter()
			.try_for_each(|start| walker.walk(start, &mut visit, &mut shuffle));
		let interrupted = match interrupt::recover(flow) {
			Ok(interrupted) => interrupted,
			Err(never) => match never {},
		};

		log::debug!(
			"sampled {} of {} requested words (interrupted: {})",
			words.len(),
			count,
			interrupted
		);
		words
	}
}
