use std::collections::HashSet;

use rand::Rng;

use crate::generate::options::Options;
use crate::generate::output::{GenerationError, GenerationOutput};
use crate::generate::{sample, validate};
use crate::text::extract;

/// KWIC (keyword in context): windows around every hit of a keyword.
///
/// Sentences are filtered first, then every case-insensitive whole-word
/// occurrence of the keyword contributes a ±`context_window`-word line.
/// Identical lines are deduplicated before sampling; a pool smaller than
/// `num_lines` after dedup is a hard validation failure (this technique
/// pre-validates sufficiency rather than clamping).
pub(crate) fn generate<R: Rng>(
	content: &str,
	options: &Options,
	rng: &mut R,
) -> Result<GenerationOutput, GenerationError> {
	let keyword = options.str("keyword")?;
	validate::check(validate::required_param(keyword, "keyword"))?;
	let keyword = keyword.unwrap_or_default().trim().to_owned();
	let num_lines = options.usize("num_lines")?;
	let context_window = options.usize("context_window")?;
	validate::check(validate::range(num_lines, "num_lines", 1, 50))?;
	validate::check(validate::range(context_window, "context_window", 1, 20))?;

	let sentence_list = extract::sentences(content, 10, 3);
	if sentence_list.is_empty() {
		return Err(GenerationError::Validation(
			"Not enough sentences in source text".to_owned(),
		));
	}

	let needle = keyword.to_lowercase();
	let mut seen: HashSet<String> = HashSet::new();
	let mut lines: Vec<String> = Vec::new();
	for sentence in &sentence_list {
		let words: Vec<&str> = sentence.split_whitespace().collect();
		for (index, word) in words.iter().enumerate() {
			if word.to_lowercase() != needle {
				continue;
			}
			let from = index.saturating_sub(context_window);
			let to = (index + context_window + 1).min(words.len());
			let line = words[from..to].join(" ");
			if seen.insert(line.clone()) {
				lines.push(line);
			}
		}
	}

	if lines.is_empty() {
		return Err(GenerationError::Validation(format!(
			"Keyword '{}' not found in source text",
			keyword
		)));
	}
	if lines.len() < num_lines {
		return Err(GenerationError::Validation(format!(
			"Not enough distinct contexts for keyword '{}'",
			keyword
		)));
	}

	Ok(GenerationOutput::from_lines(sample::distinct(rng, &lines, num_lines)))
}
