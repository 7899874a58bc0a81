use rand::Rng;

use crate::generate::options::Options;
use crate::generate::output::{GenerationError, GenerationOutput};
use crate::generate::{sample, validate};
use crate::text::extract;

/// Alliterative: every word opens with the same letter.
///
/// The vocabulary is filtered to words starting with the given letter, and
/// each of `num_lines` lines samples a bucket-sized handful from that pool.
/// Repetition across lines is allowed — only within a line are words
/// distinct, and a line quietly takes fewer words when the pool is smaller
/// than the drawn length.
pub(crate) fn generate<R: Rng>(
	content: &str,
	options: &Options,
	rng: &mut R,
) -> Result<GenerationOutput, GenerationError> {
	let letter = match validate::single_letter(options.str("letter")?.unwrap_or_default(), "letter") {
		Ok(letter) => letter,
		Err(message) => return Err(GenerationError::Validation(message)),
	};
	let num_lines = options.usize("num_lines")?;
	validate::check(validate::range(num_lines, "num_lines", 1, 50))?;
	let (min_words, max_words) = options.line_length()?.word_range();

	let words = extract::clean_words(content, 2, false);
	let pool: Vec<String> = words.into_iter().filter(|w| w.starts_with(letter)).collect();
	if pool.len() < 3 {
		return Err(GenerationError::Validation(format!(
			"Not enough words starting with the letter '{}'",
			letter
		)));
	}

	let mut lines = Vec::with_capacity(num_lines);
	for _ in 0..num_lines {
		let length = sample::range_size(rng, min_words, max_words);
		lines.push(sample::distinct(rng, &pool, length).join(" "));
	}

	Ok(GenerationOutput::from_lines(lines))
}
