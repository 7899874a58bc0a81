use rand::Rng;

use crate::generate::options::Options;
use crate::generate::output::{GenerationError, GenerationOutput};
use crate::generate::{sample, validate};
use crate::text::extract;

/// Beautiful outlaw: one stanza per letter of a hidden word, each stanza
/// refusing that letter.
///
/// Non-alphabetic characters are stripped from `hidden_word` first. Every
/// stanza gets `lines_per_stanza` lines of `words_per_line` words sampled
/// from the vocabulary that avoids the stanza's letter; a stanza whose pool
/// cannot even fill one line fails the whole generation.
pub(crate) fn generate<R: Rng>(
	content: &str,
	options: &Options,
	rng: &mut R,
) -> Result<GenerationOutput, GenerationError> {
	let hidden = options.str("hidden_word")?;
	validate::check(validate::required_param(hidden, "hidden_word"))?;
	let letters: Vec<char> = hidden
		.unwrap_or_default()
		.to_lowercase()
		.chars()
		.filter(|c| c.is_ascii_alphabetic())
		.collect();
	if letters.is_empty() {
		return Err(GenerationError::Validation(
			"Option 'hidden_word' must contain at least one letter".to_owned(),
		));
	}
	let lines_per_stanza = options.usize("lines_per_stanza")?;
	let words_per_line = options.usize("words_per_line")?;
	validate::check(validate::range(lines_per_stanza, "lines_per_stanza", 1, 10))?;
	validate::check(validate::range(words_per_line, "words_per_line", 1, 12))?;

	let words = extract::clean_words(content, 2, false);

	let mut stanzas = Vec::with_capacity(letters.len());
	for letter in letters {
		let pool: Vec<String> = words.iter().filter(|w| !w.contains(letter)).cloned().collect();
		if pool.len() < words_per_line {
			return Err(GenerationError::Validation(format!(
				"Not enough words without the letter '{}'",
				letter
			)));
		}

		let mut lines = Vec::with_capacity(lines_per_stanza);
		for _ in 0..lines_per_stanza {
			lines.push(sample::distinct(rng, &pool, words_per_line).join(" "));
		}
		stanzas.push(lines.join("\n"));
	}

	Ok(GenerationOutput::Text(stanzas.join("\n\n")))
}
