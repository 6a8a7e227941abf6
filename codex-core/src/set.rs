use std::collections::HashSet;
use std::collections::hash_set;

use serde::{Deserialize, Serialize};

/// Unordered collection of unique strings.
///
/// Used both for glyph sets and for synthesized words. Iteration order is
/// unspecified; compare sets with `==`, never by sequence.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Set {
	values: HashSet<String>
}

impl Set {
	/// Creates an empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds the given value. Adding an existing value does nothing.
	pub fn add<S: Into<String>>(&mut self, value: S) {
		self.values.insert(value.into());
	}

	/// Deletes the given value. Deleting a missing value does nothing.
	pub fn del(&mut self, value: &str) {
		self.values.remove(value);
	}

	/// Checks for the presence of the given value.
	pub fn has(&self, value: &str) -> bool {
		self.values.contains(value)
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item=&str> {
		self.values.iter().map(String::as_str)
	}

	/// Returns `true` if every value of `self` is also in `other`.
	pub fn is_subset(&self, other: &Set) -> bool {
		self.values.is_subset(&other.values)
	}

	/// Adds every value of `other` into this set.
	pub fn merge(&mut self, other: &Set) {
		self.values.extend(other.values.iter().cloned());
	}

	/// Keeps only the values for which `keep` returns `true`.
	pub fn retain<F: FnMut(&str) -> bool>(&mut self, mut keep: F) {
		self.values.retain(|value| keep(value));
	}
}

impl<S: Into<String>> FromIterator<S> for Set {
	fn from_iter<I: IntoIterator<Item=S>>(iter: I) -> Self {
		let mut set = Set::new();
		set.extend(iter);
		set
	}
}

impl<S: Into<String>> Extend<S> for Set {
	fn extend<I: IntoIterator<Item=S>>(&mut self, iter: I) {
		for value in iter {
			self.add(value);
		}
	}
}

impl<const N: usize> From<[&str; N]> for Set {
	fn from(values: [&str; N]) -> Self {
		values.into_iter().collect()
	}
}

impl IntoIterator for Set {
	type Item = String;
	type IntoIter = hash_set::IntoIter<String>;

	fn into_iter(self) -> Self::IntoIter {
		self.values.into_iter()
	}
}

/// Unordered collection of unique ordered string pairs.
///
/// A pair `(a, b)` is a directed edge of a transition graph: glyph `b` was
/// observed right after glyph `a`. Membership only, no weights.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PairSet {
	pairs: HashSet<(String, String)>
}

impl PairSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds the pair `(first, second)`. Idempotent.
	pub fn add<A: Into<String>, B: Into<String>>(&mut self, first: A, second: B) {
		self.pairs.insert((first.into(), second.into()));
	}

	/// Deletes the pair `(first, second)` if present.
	pub fn del(&mut self, first: &str, second: &str) {
		self.pairs.remove(&(first.to_owned(), second.to_owned()));
	}

	/// Checks for the presence of the pair `(first, second)`.
	pub fn has(&self, first: &str, second: &str) -> bool {
		self.pairs.contains(&(first.to_owned(), second.to_owned()))
	}

	pub fn len(&self) -> usize {
		self.pairs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.pairs.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item=(&str, &str)> {
		self.pairs.iter().map(|(a, b)| (a.as_str(), b.as_str()))
	}

	/// Adds every pair of `other` into this set.
	pub fn merge(&mut self, other: &PairSet) {
		self.pairs.extend(other.pairs.iter().cloned());
	}
}

impl<A: Into<String>, B: Into<String>> FromIterator<(A, B)> for PairSet {
	fn from_iter<I: IntoIterator<Item=(A, B)>>(iter: I) -> Self {
		let mut set = PairSet::new();
		for (first, second) in iter {
			set.add(first, second);
		}
		set
	}
}

impl<const N: usize> From<[(&str, &str); N]> for PairSet {
	fn from(pairs: [(&str, &str); N]) -> Self {
		pairs.into_iter().collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn set_add_is_idempotent() {
		let mut set = Set::new();
		set.add("ka");
		set.add("ka");
		assert_eq!(set.len(), 1);
		assert!(set.has("ka"));
	}

	#[test]
	fn set_del_missing_is_noop() {
		let mut set = Set::from(["a", "b"]);
		set.del("z");
		assert_eq!(set, Set::from(["a", "b"]));
		set.del("a");
		assert!(!set.has("a"));
		assert_eq!(set.len(), 1);
	}

	#[test]
	fn set_equality_ignores_insertion_order() {
		let left = Set::from(["x", "y", "z"]);
		let right: Set = vec!["z", "x", "y", "x"].into_iter().collect();
		assert_eq!(left, right);
	}

	#[test]
	fn set_merge_and_subset() {
		let mut set = Set::from(["a"]);
		let other = Set::from(["b", "c"]);
		assert!(!other.is_subset(&set));
		set.merge(&other);
		assert!(other.is_subset(&set));
		assert_eq!(set.len(), 3);
	}

	#[test]
	fn pair_set_is_directed() {
		let mut pairs = PairSet::new();
		pairs.add("c", "a");
		pairs.add("c", "a");
		assert_eq!(pairs.len(), 1);
		assert!(pairs.has("c", "a"));
		assert!(!pairs.has("a", "c"));
	}

	#[test]
	fn pair_set_del() {
		let mut pairs = PairSet::from([("a", "t"), ("t", "a")]);
		pairs.del("a", "t");
		pairs.del("x", "y");
		assert_eq!(pairs, PairSet::from([("t", "a")]));
	}
}
