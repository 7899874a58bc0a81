use rand::Rng;

use crate::generate::options::Options;
use crate::generate::output::{GenerationError, GenerationOutput};
use crate::generate::{sample, validate};
use crate::text::extract;

/// Resolves the words-per-line override table.
///
/// The requested count maps to an explicit range rather than being used
/// directly: 3 -> 3-4, 6 -> 5-8, 10 -> 8-12, 15 -> 12-18, anything else
/// falls back to 5-7.
fn line_range(words_per_line: usize) -> (usize, usize) {
	match words_per_line {
		3 => (3, 4),
		6 => (5, 8),
		10 => (8, 12),
		15 => (12, 18),
		_ => (5, 7),
	}
}

/// Cut-up: lines of words sampled at random from the whole vocabulary.
///
/// Each line draws its length from the override table, then samples that
/// many words without replacement *within* the line; the pool is reused
/// across lines, so the poem as a whole samples with replacement.
///
/// The vocabulary must cover the largest possible line — a shortfall here
/// is a hard validation failure, not a silent clamp.
pub(crate) fn generate<R: Rng>(
	content: &str,
	options: &Options,
	rng: &mut R,
) -> Result<GenerationOutput, GenerationError> {
	let num_lines = options.usize("num_lines")?;
	let words_per_line = options.usize("words_per_line")?;
	validate::check(validate::range(num_lines, "num_lines", 1, 100))?;
	validate::check(validate::range(words_per_line, "words_per_line", 1, 20))?;

	let words = extract::clean_words(content, 2, false);
	let (min_words, max_words) = line_range(words_per_line);
	validate::check(validate::minimum_words(&words, max_words))?;

	let mut lines = Vec::with_capacity(num_lines);
	for _ in 0..num_lines {
		let length = sample::range_size(rng, min_words, max_words);
		lines.push(sample::distinct(rng, &words, length).join(" "));
	}

	Ok(GenerationOutput::from_lines(lines))
}
