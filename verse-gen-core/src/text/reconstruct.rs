use std::collections::HashMap;

use super::extract::PositionalToken;

/// Rebuilds the span covered by `tokens`, substituting replacements.
///
/// The span is `content[min(offset) .. max(offset + length))`. Replacements
/// are keyed by index into `tokens` and spliced in descending offset order
/// so that an earlier splice never invalidates the offset of a later one.
///
/// # Parameters
/// - `content`: the full original content (never mutated).
/// - `tokens`: the selected tokens, sorted and non-overlapping (guaranteed
///   by `words_with_positions` construction).
/// - `replacements`: token index -> replacement text; indices without an
///   entry keep their original text.
///
/// # Behavior
/// - An empty token slice returns an empty string (there is no span).
/// - An empty replacement map returns the original segment unchanged.
pub fn reconstruct(
	content: &str,
	tokens: &[PositionalToken],
	replacements: &HashMap<usize, String>,
) -> String {
	let (Some(first), Some(last)) = (tokens.first(), tokens.last()) else {
		return String::new();
	};

	let start = first.offset;
	let end = last.offset + last.length;
	let mut segment = content[start..end].to_owned();

	// Descending offset order keeps pending splice positions valid.
	let mut ordered: Vec<(&PositionalToken, &String)> = replacements
		.iter()
		.filter_map(|(index, text)| tokens.get(*index).map(|token| (token, text)))
		.collect();
	ordered.sort_by(|a, b| b.0.offset.cmp(&a.0.offset));

	for (token, replacement) in ordered {
		let at = token.offset - start;
		segment.replace_range(at..at + token.length, replacement);
	}

	segment
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::text::extract::words_with_positions;

	#[test]
	fn empty_replacement_map_is_identity() {
		let content = "The cat sat on the mat.";
		let tokens = words_with_positions(content);
		let rebuilt = reconstruct(content, &tokens, &HashMap::new());
		assert_eq!(rebuilt, "The cat sat on the mat");
	}

	#[test]
	fn no_tokens_means_no_span() {
		assert_eq!(reconstruct("anything", &[], &HashMap::new()), "");
	}

	#[test]
	fn splices_longer_and_shorter_replacements() {
		let content = "one two three";
		let tokens = words_with_positions(content);
		let mut replacements = HashMap::new();
		replacements.insert(0, "1".to_owned());
		replacements.insert(1, "twenty-two".to_owned());
		assert_eq!(reconstruct(content, &tokens, &replacements), "1 twenty-two three");
	}

	#[test]
	fn untouched_characters_stay_byte_identical() {
		let content = "pad: left, middle; right (pad)";
		let tokens = words_with_positions(content);
		let mut replacements = HashMap::new();
		replacements.insert(2, "center".to_owned());
		let rebuilt = reconstruct(content, &tokens[1..4], &replacements);
		// Index 2 of the passed slice is "right"; gaps survive verbatim.
		assert_eq!(rebuilt, "left, middle; center");
	}
}
