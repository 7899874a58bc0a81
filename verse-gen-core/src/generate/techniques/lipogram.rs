use std::collections::BTreeSet;

use rand::Rng;

use crate::generate::options::Options;
use crate::generate::output::{GenerationError, GenerationOutput};
use crate::generate::{sample, validate};
use crate::text::extract;

/// Smallest filtered pool any of the letter-filter techniques accepts.
const MIN_POOL: usize = 5;

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Lipogram: a poem that never uses one forbidden letter.
///
/// The vocabulary is filtered to words free of the letter, `num_words`
/// words are sampled — clamped to the pool, this family tolerates
/// shortfall — and consumed greedily into bucket-sized lines.
pub(crate) fn lipogram<R: Rng>(
	content: &str,
	options: &Options,
	rng: &mut R,
) -> Result<GenerationOutput, GenerationError> {
	let letter = match validate::single_letter(
		options.str("forbidden_letter")?.unwrap_or_default(),
		"forbidden_letter",
	) {
		Ok(letter) => letter,
		Err(message) => return Err(GenerationError::Validation(message)),
	};

	let words = extract::clean_words(content, 2, false);
	let pool: Vec<String> = words.into_iter().filter(|w| !w.contains(letter)).collect();
	if pool.len() < MIN_POOL {
		return Err(GenerationError::Validation(format!(
			"Not enough words without the letter '{}'",
			letter
		)));
	}

	build_lines(sampled_word_count(options)?, pool, options, rng)
}

/// Reverse lipogram: every word drawn only from a required letter set.
pub(crate) fn reverse_lipogram<R: Rng>(
	content: &str,
	options: &Options,
	rng: &mut R,
) -> Result<GenerationOutput, GenerationError> {
	let required = options.str("required_letters")?;
	validate::check(validate::required_param(required, "required_letters"))?;
	let allowed: BTreeSet<char> = required
		.unwrap_or_default()
		.to_lowercase()
		.chars()
		.filter(|c| c.is_ascii_alphabetic())
		.collect();
	if allowed.is_empty() {
		return Err(GenerationError::Validation(
			"Option 'required_letters' must contain letters".to_owned(),
		));
	}

	let words = extract::clean_words(content, 2, false);
	let pool: Vec<String> = words
		.into_iter()
		.filter(|w| w.chars().all(|c| allowed.contains(&c)))
		.collect();
	if pool.len() < MIN_POOL {
		let letters: String = allowed.iter().collect();
		return Err(GenerationError::Validation(format!(
			"Not enough words using only the letters '{}'",
			letters
		)));
	}

	build_lines(sampled_word_count(options)?, pool, options, rng)
}

/// Univocal: exactly one vowel allowed, every word must carry it.
pub(crate) fn univocal<R: Rng>(
	content: &str,
	options: &Options,
	rng: &mut R,
) -> Result<GenerationOutput, GenerationError> {
	let vowel = match validate::single_letter(options.str("vowel")?.unwrap_or_default(), "vowel") {
		Ok(vowel) => vowel,
		Err(message) => return Err(GenerationError::Validation(message)),
	};
	if !VOWELS.contains(&vowel) {
		return Err(GenerationError::Validation(
			"Option 'vowel' must be one of a, e, i, o, u".to_owned(),
		));
	}

	let words = extract::clean_words(content, 2, false);
	let pool: Vec<String> = words
		.into_iter()
		.filter(|w| {
			w.contains(vowel) && !w.chars().any(|c| VOWELS.contains(&c) && c != vowel)
		})
		.collect();
	if pool.len() < MIN_POOL {
		return Err(GenerationError::Validation(format!(
			"Not enough words containing only the vowel '{}'",
			vowel
		)));
	}

	build_lines(sampled_word_count(options)?, pool, options, rng)
}

/// Reads and range-checks the shared word-budget option.
fn sampled_word_count(options: &Options) -> Result<usize, GenerationError> {
	let num_words = options.usize("num_words")?;
	validate::check(validate::range(num_words, "num_words", 1, 300))?;
	Ok(num_words)
}

/// Samples from the pool (clamped, never a failure here) and consumes the
/// sample greedily into bucket-sized lines.
fn build_lines<R: Rng>(
	num_words: usize,
	pool: Vec<String>,
	options: &Options,
	rng: &mut R,
) -> Result<GenerationOutput, GenerationError> {
	let (min_words, max_words) = options.line_length()?.word_range();
	let picked = sample::distinct(rng, &pool, num_words);

	let mut lines = Vec::new();
	let mut cursor = 0;
	while cursor < picked.len() {
		let take = sample::range_size(rng, min_words, max_words).min(picked.len() - cursor);
		lines.push(picked[cursor..cursor + take].join(" "));
		cursor += take;
	}

	Ok(GenerationOutput::from_lines(lines))
}
