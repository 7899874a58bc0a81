use std::collections::HashSet;

use rand::Rng;

use crate::generate::options::Options;
use crate::generate::output::{ErasurePage, GenerationError, GenerationOutput};
use crate::generate::{sample, validate};

/// Rough characters-per-word estimate used to cut excerpts.
const CHARS_PER_WORD: usize = 7;

/// Erasure and blackout: pick random word-boundary-snapped excerpts from
/// the raw content, keep a handful of words verbatim, and erase the rest —
/// to spaces for erasure, to equal-width blackout spans for blackout.
/// Unlike every other technique this one returns a structured document,
/// not joined lines.
pub(crate) fn generate<R: Rng>(
	content: &str,
	options: &Options,
	rng: &mut R,
) -> Result<GenerationOutput, GenerationError> {
	let num_pages = options.usize("num_pages")?;
	let words_per_page = options.usize("words_per_page")?;
	let words_to_keep = options.usize("words_to_keep")?;
	let is_blackout = options.bool("is_blackout")?;
	validate::check(validate::range(num_pages, "num_pages", 1, 20))?;
	validate::check(validate::range(words_per_page, "words_per_page", 5, 400))?;
	validate::check(validate::range(words_to_keep, "words_to_keep", 1, 100))?;
	validate::check(validate::minimum_content(content, 100))?;

	let chars: Vec<char> = content.chars().collect();
	let excerpt_len = (words_per_page * CHARS_PER_WORD).min(chars.len());

	let mut pages = Vec::with_capacity(num_pages);
	for number in 1..=num_pages {
		let page = build_page(&chars, excerpt_len, words_per_page, words_to_keep, is_blackout, rng);
		pages.push(ErasurePage { number, content: page });
	}

	log::debug!("erasure produced {} page(s), blackout={}", pages.len(), is_blackout);
	Ok(GenerationOutput::erasure(is_blackout, pages))
}

/// Cuts one word-boundary-snapped excerpt and erases all but a few words.
fn build_page<R: Rng>(
	chars: &[char],
	excerpt_len: usize,
	words_per_page: usize,
	words_to_keep: usize,
	is_blackout: bool,
	rng: &mut R,
) -> String {
	let max_start = chars.len() - excerpt_len;
	let mut start = if max_start == 0 { 0 } else { rng.random_range(0..=max_start) };

	// Snap to a word boundary: walk backward to the previous whitespace,
	// then forward past any leading whitespace.
	while start > 0 && !chars[start].is_whitespace() {
		start -= 1;
	}
	while start < chars.len() && chars[start].is_whitespace() {
		start += 1;
	}

	let end = (start + excerpt_len).min(chars.len());
	let excerpt = &chars[start..end];

	// Word spans inside the excerpt: maximal runs of non-whitespace,
	// truncated after words_per_page tokens.
	let mut spans: Vec<(usize, usize)> = Vec::new();
	let mut word_start: Option<usize> = None;
	for (index, c) in excerpt.iter().enumerate() {
		if !c.is_whitespace() {
			if word_start.is_none() {
				word_start = Some(index);
			}
		} else if let Some(begin) = word_start.take() {
			spans.push((begin, index));
		}
	}
	if let Some(begin) = word_start {
		spans.push((begin, excerpt.len()));
	}
	spans.truncate(words_per_page);

	let tail = spans.last().map(|(_, e)| *e).unwrap_or(0);

	let span_indices: Vec<usize> = (0..spans.len()).collect();
	let kept: HashSet<usize> = sample::distinct(rng, &span_indices, words_to_keep)
		.into_iter()
		.collect();

	let mut page = String::new();
	let mut cursor = 0;
	for (index, (begin, finish)) in spans.iter().enumerate() {
		page.extend(excerpt[cursor..*begin].iter());
		if kept.contains(&index) {
			page.extend(excerpt[*begin..*finish].iter());
		} else if is_blackout {
			page.push_str("<span class='blackout-word'>");
			for _ in *begin..*finish {
				page.push('█');
			}
			page.push_str("</span>");
		} else {
			for _ in *begin..*finish {
				page.push(' ');
			}
		}
		cursor = *finish;
	}
	page.extend(excerpt[cursor..tail].iter());

	page
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;
	use rand::SeedableRng;
	use rand_chacha::ChaCha20Rng;

	fn source() -> String {
		"The tide comes in without asking and leaves without apology. \
		 Gulls argue over the wrack line while the lighthouse keeps its \
		 one opinion. Sand remembers every heel and forgets it by noon. \
		 Salt stiffens the ropes and softens the names painted on hulls. \
		 Somewhere past the shelf the water stops pretending to be green. \
		 The pier creaks a slow inventory of everyone who ever leaned on it. \
		 Nets dry on racks like punctuation waiting for a sentence to claim \
		 them. A dog patrols the seawall with the gravity of a harbormaster. \
		 By dusk the horizon trades its colors for a single long gray vowel."
			.to_owned()
	}

	fn options(pairs: &[(&str, serde_json::Value)]) -> Options {
		let supplied = pairs.iter().map(|(k, v)| ((*k).to_owned(), v.clone())).collect();
		Options::merged(
			&[
				("num_pages", json!(3)),
				("words_per_page", json!(60)),
				("words_to_keep", json!(6)),
				("is_blackout", json!(false)),
			],
			&supplied,
		)
	}

	#[test]
	fn blackout_pages_keep_the_requested_visible_words() {
		let content = source();
		assert!(content.chars().count() >= 500);
		let mut rng = ChaCha20Rng::seed_from_u64(21);
		let output = generate(
			&content,
			&options(&[
				("num_pages", json!(2)),
				("words_per_page", json!(30)),
				("words_to_keep", json!(5)),
				("is_blackout", json!(true)),
			]),
			&mut rng,
		)
		.unwrap();

		let GenerationOutput::Erasure { is_blackout, pages, .. } = output else {
			panic!("expected a structured erasure document");
		};
		assert!(is_blackout);
		assert_eq!(pages.len(), 2);
		for page in &pages {
			let stripped = strip_blackout_spans(&page.content);
			let visible = stripped.split_whitespace().count();
			assert!(visible <= 5, "page {} shows {} words", page.number, visible);
			assert!(page.content.contains("<span class='blackout-word'>"));
		}
	}

	#[test]
	fn erasure_pages_replace_words_with_spaces() {
		let content = source();
		let mut rng = ChaCha20Rng::seed_from_u64(4);
		let output = generate(&content, &options(&[("words_to_keep", json!(4))]), &mut rng).unwrap();
		let GenerationOutput::Erasure { is_blackout, pages, .. } = output else {
			panic!("expected a structured erasure document");
		};
		assert!(!is_blackout);
		assert_eq!(pages.len(), 3);
		for page in &pages {
			assert!(!page.content.contains("<span"));
			assert!(page.content.split_whitespace().count() <= 4);
		}
	}

	#[test]
	fn pages_start_on_word_boundaries() {
		let content = source();
		let mut rng = ChaCha20Rng::seed_from_u64(8);
		let output = generate(&content, &options(&[("words_per_page", json!(10))]), &mut rng).unwrap();
		let GenerationOutput::Erasure { pages, .. } = output else {
			panic!("expected a structured erasure document");
		};
		for page in &pages {
			assert!(!page.content.starts_with(char::is_whitespace));
		}
	}

	#[test]
	fn short_content_is_a_validation_failure() {
		let mut rng = ChaCha20Rng::seed_from_u64(1);
		let result = generate("Too short.", &options(&[]), &mut rng);
		assert_eq!(
			result,
			Err(GenerationError::Validation("Not enough content in source text".to_owned()))
		);
	}

	fn strip_blackout_spans(content: &str) -> String {
		let mut out = String::new();
		let mut rest = content;
		while let Some(open) = rest.find("<span class='blackout-word'>") {
			out.push_str(&rest[..open]);
			match rest[open..].find("</span>") {
				Some(close) => rest = &rest[open + close + "</span>".len()..],
				None => return out,
			}
		}
		out.push_str(rest);
		out
	}
}
