use rand::Rng;

use crate::generate::options::Options;
use crate::generate::output::{GenerationError, GenerationOutput};
use crate::generate::{sample, validate};
use crate::text::extract;

/// Letters that extend above the standard letter body.
const ASCENDERS: [char; 7] = ['b', 'd', 'f', 'h', 'k', 'l', 't'];
/// Letters that extend below the baseline.
const DESCENDERS: [char; 5] = ['g', 'j', 'p', 'q', 'y'];

/// Prisoner's constraint: only letters that stay inside the line.
///
/// The vocabulary is filtered by a letter-class constraint, `num_words`
/// words are sampled (clamped to the filtered pool), and the result is
/// lineated with the weighted policy: 40% one-word lines, 30% two, 20%
/// three, 10% four. Three or fewer sampled words skip lineation and come
/// back as a single line.
pub(crate) fn generate<R: Rng>(
	content: &str,
	options: &Options,
	rng: &mut R,
) -> Result<GenerationOutput, GenerationError> {
	let constraint_type = options.str("constraint_type")?.unwrap_or_default().to_owned();
	let num_words = options.usize("num_words")?;
	validate::check(validate::range(num_words, "num_words", 1, 200))?;

	let forbidden: Vec<char> = match constraint_type.as_str() {
		"no_ascenders" => ASCENDERS.to_vec(),
		"no_descenders" => DESCENDERS.to_vec(),
		"full_constraint" => ASCENDERS.iter().chain(DESCENDERS.iter()).copied().collect(),
		_ => {
			return Err(GenerationError::Validation(
				"Constraint type must be one of no_ascenders, no_descenders, full_constraint"
					.to_owned(),
			));
		}
	};

	let words = extract::clean_words(content, 2, false);
	let filtered: Vec<String> = words
		.into_iter()
		.filter(|word| !word.chars().any(|c| forbidden.contains(&c)))
		.collect();
	if filtered.len() < 3 {
		let class = match constraint_type.as_str() {
			"no_ascenders" => "ascenders",
			"no_descenders" => "descenders",
			_ => "ascenders or descenders",
		};
		return Err(GenerationError::Validation(format!("Not enough words without {}", class)));
	}

	let picked = sample::distinct(rng, &filtered, num_words);
	if picked.len() <= 3 {
		return Ok(GenerationOutput::Text(picked.join(" ")));
	}

	let mut lines = Vec::new();
	let mut cursor = 0;
	while cursor < picked.len() {
		let take = sample::weighted_line_len(rng, picked.len() - cursor);
		lines.push(picked[cursor..cursor + take].join(" "));
		cursor += take;
	}

	Ok(GenerationOutput::from_lines(lines))
}
