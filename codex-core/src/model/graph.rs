use std::collections::HashMap;

use crate::set::PairSet;

/// Adds the consecutive pairs of a glyph sequence to `graph`.
///
/// A sequence of length `L` contributes its `L - 1` pairs
/// `(sequence[i], sequence[i + 1])`. Calling this for several sequences on
/// the same graph accumulates their union.
pub fn add_pairs<S: AsRef<str>>(graph: &mut PairSet, sequence: &[S]) {
	for window in sequence.windows(2) {
		graph.add(window[0].as_ref(), window[1].as_ref());
	}
}

/// Returns the set of consecutive pairs occurring in a glyph sequence.
pub fn pairs<S: AsRef<str>>(sequence: &[S]) -> PairSet {
	let mut graph = PairSet::new();
	add_pairs(&mut graph, sequence);
	graph
}

/// Adds the reverse of every pair of `graph`.
///
/// Works on a snapshot of the pairs present before the call, so this is a
/// single pass and not a transitive closure. Afterwards the graph is
/// symmetric: `(a, b)` present implies `(b, a)` present.
pub fn symmetrize(graph: &mut PairSet) {
	let reversed: Vec<(String, String)> = graph
		.iter()
		.map(|(a, b)| (b.to_owned(), a.to_owned()))
		.collect();
	for (first, second) in reversed {
		graph.add(first, second);
	}
}

/// Returns `true` if every pair of `graph` has its reverse in `graph`.
pub fn is_symmetric(graph: &PairSet) -> bool {
	graph.iter().all(|(a, b)| graph.has(b, a))
}

/// Right-hand neighbours of every left-hand glyph, in one pass.
///
/// Lists are sorted so that callers shuffling them start from a
/// reproducible order.
pub fn neighbours(graph: &PairSet) -> HashMap<String, Vec<String>> {
	let mut index: HashMap<String, Vec<String>> = HashMap::new();
	for (first, second) in graph.iter() {
		index.entry(first.to_owned()).or_default().push(second.to_owned());
	}
	for list in index.values_mut() {
		list.sort_unstable();
	}
	index
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pairs_of_sequence() {
		assert_eq!(pairs(&["c", "a", "t"]), PairSet::from([("c", "a"), ("a", "t")]));
		assert!(pairs(&["c"]).is_empty());
		assert!(pairs::<&str>(&[]).is_empty());
	}

	#[test]
	fn pairs_accumulate_across_sequences() {
		let mut graph = PairSet::new();
		add_pairs(&mut graph, &["c", "a", "t"]);
		add_pairs(&mut graph, &["c", "a", "n"]);
		add_pairs(&mut graph, &["b", "a", "t"]);
		assert_eq!(graph, PairSet::from([("c", "a"), ("a", "t"), ("a", "n"), ("b", "a")]));
	}

	#[test]
	fn symmetrize_adds_reverse_pairs_once() {
		let mut graph = PairSet::from([("c", "a"), ("a", "t"), ("a", "n"), ("b", "a")]);
		assert!(!is_symmetric(&graph));
		symmetrize(&mut graph);
		assert!(is_symmetric(&graph));
		assert_eq!(graph.len(), 8);
		assert!(graph.has("a", "c"));
		assert!(graph.has("t", "a"));
		assert!(!graph.has("c", "t"));

		symmetrize(&mut graph);
		assert_eq!(graph.len(), 8);
	}

	#[test]
	fn self_loop_is_its_own_reverse() {
		let mut graph = PairSet::from([("o", "o")]);
		symmetrize(&mut graph);
		assert_eq!(graph, PairSet::from([("o", "o")]));
	}

	#[test]
	fn neighbours_by_left_glyph() {
		let mut graph = PairSet::from([("c", "a"), ("a", "t"), ("a", "n")]);
		assert_eq!(neighbours(&graph).len(), 2);
		assert_eq!(neighbours(&graph)["a"], vec!["n", "t"]);
		assert!(!neighbours(&graph).contains_key("t"));

		symmetrize(&mut graph);
		let index = neighbours(&graph);
		assert_eq!(index["a"], vec!["c", "n", "t"]);
		assert_eq!(index["t"], vec!["a"]);
		assert_eq!(index.len(), 4);
	}
}
