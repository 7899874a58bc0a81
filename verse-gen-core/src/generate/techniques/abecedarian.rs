use std::collections::HashSet;

use rand::Rng;

use crate::generate::options::Options;
use crate::generate::output::{GenerationError, GenerationOutput};
use crate::generate::{sample, validate};
use crate::text::extract;

/// Abecedarian: twenty-six lines, one per letter, in order.
///
/// For each letter a..z the engine looks for a random contiguous run of
/// `words_per_line` clean words whose first word starts with that letter,
/// drawing only from word indices no earlier letter has claimed. Letters
/// with no available run contribute an empty line, so the output always has
/// exactly 26 lines.
pub(crate) fn generate<R: Rng>(
	content: &str,
	options: &Options,
	rng: &mut R,
) -> Result<GenerationOutput, GenerationError> {
	let words_per_line = options.usize("words_per_line")?;
	validate::check(validate::range(words_per_line, "words_per_line", 1, 10))?;

	let words = extract::clean_words(content, 1, false);
	validate::check(validate::minimum_words(&words, 26))?;

	// Claimed indices persist across all 26 letters.
	let mut used: HashSet<usize> = HashSet::new();
	let mut lines = Vec::with_capacity(26);

	for letter in 'a'..='z' {
		let starts: Vec<usize> = (0..words.len())
			.filter(|&index| {
				if !words[index].starts_with(letter) {
					return false;
				}
				let finish = (index + words_per_line).min(words.len());
				(index..finish).all(|j| !used.contains(&j))
			})
			.collect();

		match sample::pick(rng, &starts) {
			Some(&start) => {
				let finish = (start + words_per_line).min(words.len());
				used.extend(start..finish);
				lines.push(words[start..finish].join(" "));
			}
			None => lines.push(String::new()),
		}
	}

	Ok(GenerationOutput::from_lines(lines))
}
