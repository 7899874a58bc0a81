use std::collections::HashMap;

use rand::Rng;

use super::window;
use crate::dictionary::DictionaryLookup;
use crate::generate::options::Options;
use crate::generate::output::{GenerationError, GenerationOutput};
use crate::generate::validate;
use crate::text::{extract, reconstruct};

/// N+7: replace every dictionary noun with its Nth alphabetical successor.
///
/// A random contiguous window of positional tokens is selected; within it,
/// each token the dictionary knows as a noun is swapped for the noun
/// `offset` places away in alphabetical order (same part of speech), and
/// the window is rebuilt around the untouched characters. Non-nouns and
/// nouns without a sibling at that offset are left exactly as they were.
pub(crate) fn generate<R: Rng>(
	content: &str,
	options: &Options,
	dictionary: &dyn DictionaryLookup,
	rng: &mut R,
) -> Result<GenerationOutput, GenerationError> {
	let offset = options.i64("offset")?;
	let window_size = options.usize("window_size")?;
	if offset == 0 || offset.unsigned_abs() > 50 {
		return Err(GenerationError::Validation(
			"Option 'offset' must be between -50 and 50 and not zero".to_owned(),
		));
	}
	validate::check(validate::range(window_size, "window_size", 10, 200))?;

	let tokens = extract::words_with_positions(content);
	validate::check(validate::minimum_words(&tokens, 5))?;

	let selected = window::select(rng, &tokens, window_size);

	let mut replacements: HashMap<usize, String> = HashMap::new();
	for (index, token) in selected.iter().enumerate() {
		let lower = token.text.to_lowercase();
		if !dictionary.exists_as_noun(&lower) {
			continue;
		}
		if let Some(sibling) = dictionary.find_offset_sibling(&lower, offset, "noun") {
			replacements.insert(index, match_case(&token.text, &sibling));
		}
	}

	log::debug!("n+7 replaced {} of {} window tokens", replacements.len(), selected.len());
	Ok(GenerationOutput::Text(reconstruct::reconstruct(content, selected, &replacements)))
}

/// Carries an initial capital over from the replaced word.
fn match_case(original: &str, replacement: &str) -> String {
	if original.chars().next().is_some_and(|c| c.is_uppercase()) {
		let mut chars = replacement.chars();
		match chars.next() {
			Some(first) => first.to_uppercase().chain(chars).collect(),
			None => String::new(),
		}
	} else {
		replacement.to_owned()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::dictionary::DictionaryEntry;
	use serde_json::json;
	use rand::SeedableRng;
	use rand_chacha::ChaCha20Rng;

	/// Fixed-content dictionary for tests.
	struct TestDictionary {
		nouns: Vec<(&'static str, Option<&'static str>)>,
	}

	impl DictionaryLookup for TestDictionary {
		fn exists_as_noun(&self, word: &str) -> bool {
			self.nouns.iter().any(|(w, _)| *w == word)
		}

		fn find_with_definition(&self, _word: &str) -> Option<DictionaryEntry> {
			None
		}

		fn find_offset_sibling(&self, word: &str, _offset: i64, part_of_speech: &str) -> Option<String> {
			if part_of_speech != "noun" {
				return None;
			}
			self.nouns
				.iter()
				.find(|(w, _)| *w == word)
				.and_then(|(_, sibling)| sibling.map(str::to_owned))
		}
	}

	fn options() -> Options {
		Options::merged(&[("offset", json!(7)), ("window_size", json!(60))], &serde_json::Map::new())
	}

	#[test]
	fn only_the_replaced_noun_span_changes() {
		let content = "The cat sat on the mat. The dog ran fast.";
		let dictionary = TestDictionary {
			nouns: vec![("cat", Some("cauldron")), ("mat", None), ("dog", None)],
		};
		let mut rng = ChaCha20Rng::seed_from_u64(3);
		let output = generate(content, &options(), &dictionary, &mut rng).unwrap();
		let text = output.as_text().unwrap();

		// The window covers the whole text (window_size > token count);
		// the span runs from the first to the last word character.
		assert_eq!(text, "The cauldron sat on the mat. The dog ran fast");
	}

	#[test]
	fn capitalized_nouns_keep_their_capital() {
		let content = "Cat and cat and cat and more";
		let dictionary = TestDictionary { nouns: vec![("cat", Some("cauldron"))] };
		let mut rng = ChaCha20Rng::seed_from_u64(1);
		let output = generate(content, &options(), &dictionary, &mut rng).unwrap();
		let text = output.as_text().unwrap();
		assert!(text.starts_with("Cauldron"));
		assert!(text.contains("cauldron and cauldron"));
	}

	#[test]
	fn siblingless_nouns_are_left_untouched() {
		let content = "The mat waits under the door all day";
		let dictionary = TestDictionary { nouns: vec![("mat", None)] };
		let mut rng = ChaCha20Rng::seed_from_u64(2);
		let output = generate(content, &options(), &dictionary, &mut rng).unwrap();
		assert_eq!(output.as_text().unwrap(), "The mat waits under the door all day");
	}

	#[test]
	fn zero_offset_is_rejected() {
		let supplied = [("offset".to_owned(), json!(0))].into_iter().collect();
		let options = Options::merged(&[("offset", json!(7)), ("window_size", json!(60))], &supplied);
		let dictionary = TestDictionary { nouns: vec![] };
		let mut rng = ChaCha20Rng::seed_from_u64(1);
		assert!(matches!(
			generate("some words here for the check", &options, &dictionary, &mut rng),
			Err(GenerationError::Validation(_))
		));
	}
}
