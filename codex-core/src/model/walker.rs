use std::collections::{HashMap, HashSet};

use crate::model::interrupt::Flow;
use crate::model::options::Options;

/// Depth-first walker over a transition graph.
///
/// A walk starts from one glyph and appends the glyph of every node it
/// enters. Each candidate whose length is within bounds is handed to a
/// visitor. Walks keep descending after a valid candidate, since a longer
/// word sharing the same prefix is valid too.
///
/// # Invariants
/// - A directed edge is traversed at most once per path
/// - A path stops growing once its length reaches `max_len`
/// - Between two walks `used` is empty and `word` is empty, unless the
///   previous walk was interrupted
pub(crate) struct Walker<'a> {
	/// Right-hand neighbours of every glyph.
	neighbours: &'a HashMap<String, Vec<String>>,
	options: &'a Options,
	/// Edges taken by the current path, borrowed from `neighbours`.
	used: HashSet<(&'a str, &'a str)>,
	/// Concatenation of the glyphs of the current path.
	word: String,
}

impl<'a> Walker<'a> {
	pub fn new(neighbours: &'a HashMap<String, Vec<String>>, options: &'a Options) -> Self {
		Self {
			neighbours,
			options,
			used: HashSet::new(),
			word: String::new(),
		}
	}

	/// Walks every path starting at `start`.
	///
	/// - `visit` receives each candidate within bounds and may interrupt
	///   the walk.
	/// - `order` arranges the neighbours of a node before they are
	///   descended into (shuffle them, or leave them as they are).
	pub fn walk<E, V, O>(&mut self, start: &str, visit: &mut V, order: &mut O) -> Flow<E>
	where
		V: FnMut(&str) -> Flow<E>,
		O: FnMut(&mut Vec<&'a str>),
	{
		self.descend(start, 0, visit, order)
	}

	fn descend<E, V, O>(&mut self, sound: &str, len: usize, visit: &mut V, order: &mut O) -> Flow<E>
	where
		V: FnMut(&str) -> Flow<E>,
		O: FnMut(&mut Vec<&'a str>),
	{
		let mark = self.word.len();
		self.word.push_str(sound);
		let len = len + sound.chars().count();

		if self.options.valid_length(len) {
			visit(&self.word)?;
		}

		// Any further glyph would overflow the upper bound
		let neighbours = self.neighbours;
		if len < self.options.max_len() {
			if let Some((first, seconds)) = neighbours.get_key_value(sound) {
				let mut next: Vec<&'a str> = seconds.iter().map(String::as_str).collect();
				order(&mut next);

				for second in next {
					let edge = (first.as_str(), second);
					if !self.used.insert(edge) {
						continue;
					}
					self.descend(second, len, visit, order)?;
					self.used.remove(&edge);
				}
			}
		}

		self.word.truncate(mark);
		Ok(())
	}
}
