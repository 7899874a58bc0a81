use std::collections::HashSet;

/// A word occurrence located in the original content.
///
/// Unlike a clean word, a `PositionalToken` keeps the original case and
/// records exactly where the word sits so the span can be reconstructed
/// byte for byte.
///
/// # Invariants
/// - `offset` and `length` are byte positions on character boundaries
/// - Tokens produced by `words_with_positions` are sorted by `offset` and
///   their `[offset, offset + length)` ranges never overlap
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositionalToken {
	/// The word as it appears in the content (original case).
	pub text: String,
	/// Byte offset of the first character in the content.
	pub offset: usize,
	/// Byte length of the word.
	pub length: usize,
}

/// Returns true for characters that belong to a word.
///
/// Matches the usual word class: letters, digits and underscore.
fn is_word_char(c: char) -> bool {
	c.is_alphanumeric() || c == '_'
}

/// Extracts a deduplicated, ordered vocabulary from raw content.
///
/// # Behavior
/// - Lowercases everything.
/// - Strips every character that is not a letter or a space; when
///   `preserve_punctuation` is set, apostrophes and hyphens survive too.
/// - Splits on whitespace and rejects tokens shorter than `min_length`.
/// - Keeps only fully alphabetic tokens (plus `'`/`-` when preserved).
/// - Removes duplicates, keeping the first occurrence order.
///
/// # Notes
/// Deterministic: two calls on identical content return identical lists.
pub fn clean_words(content: &str, min_length: usize, preserve_punctuation: bool) -> Vec<String> {
	let lowered = content.to_lowercase();

	let stripped: String = lowered
		.chars()
		.map(|c| {
			if c.is_ascii_lowercase() || c.is_whitespace() {
				c
			} else if preserve_punctuation && (c == '\'' || c == '-') {
				c
			} else {
				' '
			}
		})
		.collect();

	let mut seen: HashSet<&str> = HashSet::new();
	let mut words = Vec::new();
	for token in stripped.split_whitespace() {
		if token.chars().count() < min_length {
			continue;
		}
		if !token.chars().all(|c| {
			c.is_ascii_lowercase() || (preserve_punctuation && (c == '\'' || c == '-'))
		}) {
			continue;
		}
		if seen.insert(token) {
			words.push(token.to_owned());
		}
	}

	words
}

/// Extracts every word occurrence with its exact position.
///
/// A word is a maximal run of word characters. No filtering, no
/// deduplication and no case folding happen here: the sequence must allow
/// exact reconstruction of any span of the content.
pub fn words_with_positions(content: &str) -> Vec<PositionalToken> {
	let mut tokens = Vec::new();
	let mut start: Option<usize> = None;

	for (index, c) in content.char_indices() {
		if is_word_char(c) {
			if start.is_none() {
				start = Some(index);
			}
		} else if let Some(begin) = start.take() {
			tokens.push(PositionalToken {
				text: content[begin..index].to_owned(),
				offset: begin,
				length: index - begin,
			});
		}
	}
	if let Some(begin) = start {
		tokens.push(PositionalToken {
			text: content[begin..].to_owned(),
			offset: begin,
			length: content.len() - begin,
		});
	}

	tokens
}

/// Splits content into trimmed, punctuation-stripped sentences.
///
/// # Behavior
/// - Collapses all whitespace runs to single spaces.
/// - Splits on runs of `.`, `!` and `?`.
/// - Strips the remaining punctuation from each sentence.
/// - Rejects sentences shorter than `min_length` characters or with fewer
///   than `min_words` words.
pub fn sentences(content: &str, min_length: usize, min_words: usize) -> Vec<String> {
	let collapsed = content.split_whitespace().collect::<Vec<_>>().join(" ");

	collapsed
		.split(['.', '!', '?'])
		.map(|raw| {
			raw.chars()
				.filter(|c| !c.is_ascii_punctuation() || *c == '\'' || *c == '-')
				.collect::<String>()
				.trim()
				.to_owned()
		})
		.filter(|sentence| {
			sentence.chars().count() >= min_length
				&& sentence.split_whitespace().count() >= min_words
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn clean_words_lowercases_filters_and_dedupes() {
		let words = clean_words("The cat, the CAT and a mat!", 2, false);
		assert_eq!(words, vec!["the", "cat", "and", "mat"]);
	}

	#[test]
	fn clean_words_is_order_stable() {
		let content = "Winter stars burn over the quiet winter river.";
		assert_eq!(clean_words(content, 2, false), clean_words(content, 2, false));
	}

	#[test]
	fn clean_words_can_preserve_apostrophes_and_hyphens() {
		let words = clean_words("Don't half-listen", 2, true);
		assert_eq!(words, vec!["don't", "half-listen"]);
		let plain = clean_words("Don't half-listen", 2, false);
		assert_eq!(plain, vec!["don", "half", "listen"]);
	}

	#[test]
	fn positional_tokens_keep_case_offsets_and_duplicates() {
		let tokens = words_with_positions("The cat, the cat.");
		let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
		assert_eq!(texts, vec!["The", "cat", "the", "cat"]);
		assert_eq!(tokens[0].offset, 0);
		assert_eq!(tokens[1].offset, 4);
		for pair in tokens.windows(2) {
			assert!(pair[0].offset + pair[0].length <= pair[1].offset);
		}
	}

	#[test]
	fn positional_tokens_cover_trailing_word() {
		let tokens = words_with_positions("last word");
		assert_eq!(tokens[1].text, "word");
		assert_eq!(tokens[1].offset + tokens[1].length, "last word".len());
	}

	#[test]
	fn sentences_filters_short_ones() {
		let list = sentences("Ok. The river runs cold tonight! No?", 10, 3);
		assert_eq!(list, vec!["The river runs cold tonight"]);
	}
}
