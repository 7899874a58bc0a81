use rand::Rng;

use crate::generate::options::Options;
use crate::generate::output::{GenerationError, GenerationOutput};
use crate::generate::{sample, validate};
use crate::text::extract;

/// How many fresh random lines a section tries before settling.
const MAX_ATTEMPTS: usize = 50;

/// Found poem: consecutive runs lifted from evenly spaced sections.
///
/// The clean-word stream is partitioned into `num_lines` near-equal
/// sections. Each section picks a random start and a bucket-sized run of
/// consecutive words; a run that overshoots the section is retried with a
/// fresh start and length, up to 50 attempts, after which the section
/// settles for a minimal-length run. The result always has exactly
/// `num_lines` lines unless the text itself is too short.
pub(crate) fn generate<R: Rng>(
	content: &str,
	options: &Options,
	rng: &mut R,
) -> Result<GenerationOutput, GenerationError> {
	let num_lines = options.usize("num_lines")?;
	validate::check(validate::range(num_lines, "num_lines", 1, 50))?;
	let (min_words, max_words) = options.line_length()?.word_range();

	let words = extract::clean_words(content, 2, false);
	validate::check(validate::minimum_words(&words, num_lines * min_words))?;

	let mut lines = Vec::with_capacity(num_lines);
	for index in 0..num_lines {
		let begin = index * words.len() / num_lines;
		let finish = (index + 1) * words.len() / num_lines;
		let section = &words[begin..finish];
		lines.push(section_line(section, min_words, max_words, rng));
	}

	Ok(GenerationOutput::from_lines(lines))
}

/// Lifts one run from a section, retrying overshoots a bounded number of
/// times before degrading to a best-effort minimal line.
fn section_line<R: Rng>(section: &[String], min_words: usize, max_words: usize, rng: &mut R) -> String {
	for _ in 0..MAX_ATTEMPTS {
		let length = sample::range_size(rng, min_words, max_words);
		let start = rng.random_range(0..section.len());
		if start + length <= section.len() {
			return section[start..start + length].join(" ");
		}
	}

	// Degrade: a minimal-length run from wherever it still fits.
	let length = min_words.min(section.len());
	let start = if section.len() > length {
		rng.random_range(0..=section.len() - length)
	} else {
		0
	};
	section[start..start + length].join(" ")
}
