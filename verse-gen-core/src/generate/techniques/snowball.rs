use std::collections::HashMap;

use rand::Rng;

use crate::generate::options::Options;
use crate::generate::output::{GenerationError, GenerationOutput};
use crate::generate::validate;
use crate::text::extract;

/// Snowball: each line one word longer than the last.
///
/// Clean words are grouped by length once; line `i` draws a random unused
/// word of length `min_word_length + i`, or stays empty when that group is
/// exhausted. The used set spans the whole poem, so no word appears twice.
pub(crate) fn generate<R: Rng>(
	content: &str,
	options: &Options,
	rng: &mut R,
) -> Result<GenerationOutput, GenerationError> {
	let num_lines = options.usize("num_lines")?;
	let min_word_length = options.usize("min_word_length")?;
	validate::check(validate::range(num_lines, "num_lines", 1, 30))?;
	validate::check(validate::range(min_word_length, "min_word_length", 1, 10))?;

	let words = extract::clean_words(content, 1, false);

	let mut groups: HashMap<usize, Vec<String>> = HashMap::new();
	for word in words {
		groups.entry(word.chars().count()).or_default().push(word);
	}
	if groups.len() < 3 {
		return Err(GenerationError::Validation(
			"Not enough word length variety in source text".to_owned(),
		));
	}

	let mut lines = Vec::with_capacity(num_lines);
	for index in 0..num_lines {
		let target = min_word_length + index;
		let line = match groups.get_mut(&target) {
			Some(pool) if !pool.is_empty() => {
				let at = rng.random_range(0..pool.len());
				pool.swap_remove(at)
			}
			_ => String::new(),
		};
		lines.push(line);
	}

	Ok(GenerationOutput::from_lines(lines))
}
