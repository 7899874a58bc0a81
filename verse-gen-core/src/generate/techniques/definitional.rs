use std::collections::HashMap;

use rand::Rng;

use super::window;
use crate::dictionary::DictionaryLookup;
use crate::generate::options::Options;
use crate::generate::output::{GenerationError, GenerationOutput};
use crate::generate::validate;
use crate::text::{extract, reconstruct};

/// Definitional: replace defined words with their definitions.
///
/// Same window selection as N+7; within the window every token the
/// dictionary defines is swapped for its definition text, with
/// parenthetical asides stripped and whitespace collapsed. Words the
/// dictionary does not know stay as they were.
pub(crate) fn generate<R: Rng>(
	content: &str,
	options: &Options,
	dictionary: &dyn DictionaryLookup,
	rng: &mut R,
) -> Result<GenerationOutput, GenerationError> {
	let window_size = options.usize("window_size")?;
	validate::check(validate::range(window_size, "window_size", 5, 200))?;

	let tokens = extract::words_with_positions(content);
	validate::check(validate::minimum_words(&tokens, 5))?;

	let selected = window::select(rng, &tokens, window_size);

	let mut replacements: HashMap<usize, String> = HashMap::new();
	for (index, token) in selected.iter().enumerate() {
		let lower = token.text.to_lowercase();
		if let Some(entry) = dictionary.find_with_definition(&lower) {
			let definition = clean_definition(&entry.definition);
			if !definition.is_empty() {
				replacements.insert(index, definition);
			}
		}
	}

	Ok(GenerationOutput::Text(reconstruct::reconstruct(content, selected, &replacements)))
}

/// Strips parenthetical asides and collapses whitespace.
///
/// Innermost pairs are removed first and the pass repeats until no pair
/// remains, so nested parentheses disappear completely.
fn clean_definition(definition: &str) -> String {
	let mut text = definition.to_owned();
	loop {
		let Some(close) = text.find(')') else { break };
		let Some(open) = text[..close].rfind('(') else { break };
		text.replace_range(open..=close, " ");
	}
	text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::dictionary::DictionaryEntry;
	use serde_json::json;
	use rand::SeedableRng;
	use rand_chacha::ChaCha20Rng;

	struct TestDictionary {
		entries: Vec<(&'static str, &'static str)>,
	}

	impl DictionaryLookup for TestDictionary {
		fn exists_as_noun(&self, _word: &str) -> bool {
			false
		}

		fn find_with_definition(&self, word: &str) -> Option<DictionaryEntry> {
			self.entries.iter().find(|(w, _)| *w == word).map(|(w, d)| DictionaryEntry {
				word: (*w).to_owned(),
				part_of_speech: "noun".to_owned(),
				definition: (*d).to_owned(),
				synsets: Vec::new(),
			})
		}

		fn find_offset_sibling(&self, _word: &str, _offset: i64, _pos: &str) -> Option<String> {
			None
		}
	}

	fn options() -> Options {
		Options::merged(&[("window_size", json!(40))], &serde_json::Map::new())
	}

	#[test]
	fn defined_words_become_their_definitions() {
		let dictionary = TestDictionary {
			entries: vec![("cat", "a small domesticated feline")],
		};
		let mut rng = ChaCha20Rng::seed_from_u64(5);
		let output = generate("The cat sat on the mat", &options(), &dictionary, &mut rng).unwrap();
		assert_eq!(
			output.as_text().unwrap(),
			"The a small domesticated feline sat on the mat"
		);
	}

	#[test]
	fn nested_parentheticals_are_fully_stripped() {
		assert_eq!(
			clean_definition("a feline (genus Felis (but see (also) Panthera)) kept as a pet"),
			"a feline kept as a pet"
		);
		assert_eq!(clean_definition("plain  text   here"), "plain text here");
		assert_eq!(clean_definition("(all aside)"), "");
	}

	#[test]
	fn unknown_words_stay_put() {
		let dictionary = TestDictionary { entries: vec![] };
		let mut rng = ChaCha20Rng::seed_from_u64(1);
		let output = generate("Nothing here is defined at all", &options(), &dictionary, &mut rng).unwrap();
		assert_eq!(output.as_text().unwrap(), "Nothing here is defined at all");
	}
}
