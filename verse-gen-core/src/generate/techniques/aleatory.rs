use std::collections::HashSet;

use rand::Rng;

use crate::generate::options::Options;
use crate::generate::output::{GenerationError, GenerationOutput};
use crate::generate::{sample, validate};
use crate::text::extract;

/// How far back the low-randomness policy avoids repeating itself.
const RECENT_WINDOW: usize = 10;

/// Aleatory: chance-driven lines with tunable repetition.
///
/// Draws `num_lines` bucket-sized lines from the vocabulary while keeping a
/// poem-scoped record of everything used so far. With
/// `randomness_factor >= 0.5` each slot samples uniformly from never-used
/// words; below that it samples from the whole vocabulary minus the 10 most
/// recently used words, so older words may return. Both policies fall back
/// to the full vocabulary when their pool runs too thin for the line.
pub(crate) fn generate<R: Rng>(
	content: &str,
	options: &Options,
	rng: &mut R,
) -> Result<GenerationOutput, GenerationError> {
	let num_lines = options.usize("num_lines")?;
	validate::check(validate::range(num_lines, "num_lines", 1, 50))?;
	let (min_words, max_words) = options.line_length()?.word_range();
	let randomness_factor = options.f64("randomness_factor")?;
	if !(0.0..=1.0).contains(&randomness_factor) {
		return Err(GenerationError::Validation(
			"Option 'randomness_factor' must be between 0.0 and 1.0".to_owned(),
		));
	}

	let words = extract::clean_words(content, 2, false);
	validate::check(validate::minimum_words(&words, max_words))?;

	let mut used_order: Vec<String> = Vec::new();
	let mut used: HashSet<String> = HashSet::new();

	let mut lines = Vec::with_capacity(num_lines);
	for _ in 0..num_lines {
		let length = sample::range_size(rng, min_words, max_words);
		let mut line_words = Vec::with_capacity(length);
		for _ in 0..length {
			let word = if randomness_factor >= 0.5 {
				pick_unused(&words, &used, rng)
			} else {
				pick_avoiding_recent(&words, &used_order, length, rng)
			};
			used.insert(word.clone());
			used_order.push(word.clone());
			line_words.push(word);
		}
		lines.push(line_words.join(" "));
	}

	Ok(GenerationOutput::from_lines(lines))
}

/// Uniform pick over never-used words, whole vocabulary once exhausted.
fn pick_unused<R: Rng>(words: &[String], used: &HashSet<String>, rng: &mut R) -> String {
	let unused: Vec<&String> = words.iter().filter(|w| !used.contains(*w)).collect();
	match sample::pick(rng, &unused) {
		Some(word) => (*word).clone(),
		None => sample::pick(rng, words).cloned().unwrap_or_default(),
	}
}

/// Uniform pick avoiding the most recently used words, whole vocabulary
/// when avoidance leaves fewer candidates than the line still needs.
fn pick_avoiding_recent<R: Rng>(
	words: &[String],
	used_order: &[String],
	needed: usize,
	rng: &mut R,
) -> String {
	let recent: HashSet<&str> = used_order
		.iter()
		.rev()
		.take(RECENT_WINDOW)
		.map(String::as_str)
		.collect();
	let fresh: Vec<&String> = words.iter().filter(|w| !recent.contains(w.as_str())).collect();
	if fresh.len() < needed {
		return sample::pick(rng, words).cloned().unwrap_or_default();
	}
	match sample::pick(rng, &fresh) {
		Some(word) => (*word).clone(),
		None => sample::pick(rng, words).cloned().unwrap_or_default(),
	}
}
