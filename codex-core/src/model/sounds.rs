use crate::error::DecodeError;
use crate::set::Set;

/// Returns the glyphs of `inventory` that occur in at least one sample word.
///
/// This is the known glyph set the sample is decomposed against.
pub fn known_glyphs<S: AsRef<str>>(samples: &[S], inventory: &Set) -> Set {
	inventory
		.iter()
		.filter(|glyph| samples.iter().any(|word| word.as_ref().contains(glyph)))
		.collect()
}

/// Splits a word into a sequence of known glyphs (sounds).
///
/// The word is scanned left to right. At each position a known two-character
/// glyph is preferred over a known one-character glyph. Concatenating the
/// result gives back `word` exactly.
///
/// # Errors
/// Returns a `DecodeError` at the first position where neither matches.
/// No partial sequence is returned.
pub fn decompose(word: &str, known: &Set) -> Result<Vec<String>, DecodeError> {
	// Byte offsets of every char boundary, including the end of the word
	let bounds: Vec<usize> = word
		.char_indices()
		.map(|(i, _)| i)
		.chain(std::iter::once(word.len()))
		.collect();

	let mut sounds = Vec::with_capacity(bounds.len());
	let mut cursor = 0;
	while cursor + 1 < bounds.len() {
		let start = bounds[cursor];

		if cursor + 2 < bounds.len() {
			let digraph = &word[start..bounds[cursor + 2]];
			if known.has(digraph) {
				sounds.push(digraph.to_owned());
				cursor += 2;
				continue;
			}
		}

		let monograph = &word[start..bounds[cursor + 1]];
		if known.has(monograph) {
			sounds.push(monograph.to_owned());
			cursor += 1;
			continue;
		}

		log::debug!("cannot decompose {word:?}: unknown symbol {monograph:?} at {cursor}");
		return Err(DecodeError {
			word: word.to_owned(),
			symbol: monograph.chars().next().unwrap_or_default(),
			position: cursor,
		});
	}

	Ok(sounds)
}
