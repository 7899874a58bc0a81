use crate::generate::options::Options;
use crate::generate::output::{GenerationError, GenerationOutput};
use crate::generate::validate;
use crate::text::extract;

/// Mesostic: the spine word's letters appear at fixed positions down the
/// poem.
///
/// Each space-separated spine word becomes a stanza. For the spine letter
/// at index `p`, the stanza's cursor scans forward through the clean-word
/// stream for the next word whose character at index `p` equals that letter
/// (case-insensitive). A matched word stays available to the next letter;
/// the cursor only ever advances past rejected words and never resets
/// mid-stanza. When no match remains the stanza stops early, keeping the
/// lines found so far. Stanzas are separated by a blank line.
///
/// The only technique with no randomness at all: fixed input, fixed output.
pub(crate) fn generate(content: &str, options: &Options) -> Result<GenerationOutput, GenerationError> {
	let spine = options.str("spine_word")?;
	validate::check(validate::required_param(spine, "spine_word"))?;
	let spine = spine.unwrap_or_default();

	let words = extract::clean_words(content, 1, false);
	validate::check(validate::minimum_words(&words, 3))?;

	let mut stanzas = Vec::new();
	for spine_word in spine.split_whitespace() {
		let letters: Vec<char> = spine_word
			.to_lowercase()
			.chars()
			.filter(|c| c.is_ascii_alphabetic())
			.collect();

		let mut lines = Vec::new();
		let mut cursor = 0;
		for (position, letter) in letters.iter().enumerate() {
			let hit = (cursor..words.len())
				.find(|&index| words[index].chars().nth(position) == Some(*letter));
			match hit {
				Some(index) => {
					lines.push(words[index].clone());
					cursor = index;
				}
				None => break,
			}
		}
		stanzas.push(lines.join("\n"));
	}

	Ok(GenerationOutput::Text(stanzas.join("\n\n")))
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::{json, Value};

	fn options(spine: Value) -> Options {
		let mut supplied = serde_json::Map::new();
		supplied.insert("spine_word".to_owned(), spine);
		Options::merged(&[("spine_word", Value::Null)], &supplied)
	}

	#[test]
	fn spine_letters_sit_at_their_index() {
		let output = generate("dog open gift", &options(json!("dog"))).unwrap();
		let lines: Vec<&str> = output.as_text().unwrap().split('\n').collect();
		assert_eq!(lines.len(), 3);
		assert_eq!(lines[0].chars().next(), Some('d'));
		assert_eq!(lines[1].chars().nth(1), Some('o'));
		assert_eq!(lines[2].chars().nth(2), Some('g'));
	}

	#[test]
	fn stanza_stops_early_when_no_word_matches() {
		// 'q' at index 1 exists nowhere: only the first line survives.
		let output = generate("dog open gift", &options(json!("dq"))).unwrap();
		assert_eq!(output.as_text().unwrap(), "dog");
	}

	#[test]
	fn multiple_spine_words_become_stanzas() {
		let output = generate("dog open gift dig", &options(json!("do go"))).unwrap();
		let text = output.as_text().unwrap().to_owned();
		let stanzas: Vec<&str> = text.split("\n\n").collect();
		assert_eq!(stanzas.len(), 2);
		assert_eq!(stanzas[0].split('\n').count(), 2);
	}

	#[test]
	fn missing_spine_word_is_the_documented_message() {
		let result = generate("dog open gift", &options(Value::Null));
		assert_eq!(
			result,
			Err(GenerationError::Validation("Missing required option: spine_word".to_owned()))
		);
	}

	#[test]
	fn case_is_folded_on_both_sides() {
		let output = generate("Dog OPEN gift", &options(json!("DOG"))).unwrap();
		assert_eq!(output.as_text().unwrap().split('\n').count(), 3);
	}
}
