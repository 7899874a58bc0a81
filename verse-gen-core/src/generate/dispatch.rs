use std::str::FromStr;

use rand::Rng;
use serde_json::{json, Map, Value};

use super::options::Options;
use super::output::{GenerationError, GenerationOutput};
use super::techniques;
use crate::dictionary::DictionaryLookup;

/// The sixteen supported generation techniques.
///
/// The wire identifiers (snake_case strings) round-trip through
/// `FromStr`/`as_str`. Dispatch is a compile-time `match`: adding a
/// technique without wiring it in refuses to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Technique {
	CutUp,
	Erasure,
	Snowball,
	Mesostic,
	NPlusSeven,
	Definitional,
	Found,
	Kwic,
	PrisonersConstraint,
	BeautifulOutlaw,
	Lipogram,
	ReverseLipogram,
	Abecedarian,
	Univocal,
	Aleatory,
	Alliterative,
}

/// Every technique, in wire-identifier order. Useful for enumeration.
pub const ALL_TECHNIQUES: [Technique; 16] = [
	Technique::CutUp,
	Technique::Erasure,
	Technique::Snowball,
	Technique::Mesostic,
	Technique::NPlusSeven,
	Technique::Definitional,
	Technique::Found,
	Technique::Kwic,
	Technique::PrisonersConstraint,
	Technique::BeautifulOutlaw,
	Technique::Lipogram,
	Technique::ReverseLipogram,
	Technique::Abecedarian,
	Technique::Univocal,
	Technique::Aleatory,
	Technique::Alliterative,
];

impl Technique {
	/// The technique's wire identifier.
	pub fn as_str(self) -> &'static str {
		match self {
			Technique::CutUp => "cut_up",
			Technique::Erasure => "erasure",
			Technique::Snowball => "snowball",
			Technique::Mesostic => "mesostic",
			Technique::NPlusSeven => "n_plus_seven",
			Technique::Definitional => "definitional",
			Technique::Found => "found",
			Technique::Kwic => "kwic",
			Technique::PrisonersConstraint => "prisoners_constraint",
			Technique::BeautifulOutlaw => "beautiful_outlaw",
			Technique::Lipogram => "lipogram",
			Technique::ReverseLipogram => "reverse_lipogram",
			Technique::Abecedarian => "abecedarian",
			Technique::Univocal => "univocal",
			Technique::Aleatory => "aleatory",
			Technique::Alliterative => "alliterative",
		}
	}
}

impl FromStr for Technique {
	type Err = GenerationError;

	/// Parses a wire identifier.
	///
	/// # Errors
	/// An unknown identifier is caller misconfiguration, not user input, so
	/// it fails as `Configuration` rather than a validation message.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		ALL_TECHNIQUES
			.iter()
			.copied()
			.find(|t| t.as_str() == s)
			.ok_or_else(|| GenerationError::Configuration(format!("Unknown technique: {}", s)))
	}
}

impl std::fmt::Display for Technique {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Fixed per-technique defaults; supplied options merge over these.
///
/// `Null` marks a required option with no usable default — the technique's
/// `required_param` validation turns its absence into the user-facing
/// message.
fn defaults(technique: Technique) -> Vec<(&'static str, Value)> {
	match technique {
		Technique::CutUp => vec![("num_lines", json!(10)), ("words_per_line", json!(6))],
		Technique::Erasure => vec![
			("num_pages", json!(3)),
			("words_per_page", json!(60)),
			("words_to_keep", json!(6)),
			("is_blackout", json!(false)),
		],
		Technique::Snowball => vec![("num_lines", json!(8)), ("min_word_length", json!(2))],
		Technique::Mesostic => vec![("spine_word", Value::Null)],
		Technique::NPlusSeven => vec![("offset", json!(7)), ("window_size", json!(60))],
		Technique::Definitional => vec![("window_size", json!(40))],
		Technique::Found => vec![("num_lines", json!(8)), ("line_length", json!("medium"))],
		Technique::Kwic => vec![
			("keyword", Value::Null),
			("num_lines", json!(10)),
			("context_window", json!(4)),
		],
		Technique::PrisonersConstraint => vec![
			("constraint_type", json!("full_constraint")),
			("num_words", json!(40)),
		],
		Technique::BeautifulOutlaw => vec![
			("hidden_word", Value::Null),
			("lines_per_stanza", json!(3)),
			("words_per_line", json!(5)),
		],
		Technique::Lipogram => vec![
			("forbidden_letter", json!("e")),
			("num_words", json!(50)),
			("line_length", json!("medium")),
		],
		Technique::ReverseLipogram => vec![
			("required_letters", Value::Null),
			("num_words", json!(30)),
			("line_length", json!("medium")),
		],
		Technique::Abecedarian => vec![("words_per_line", json!(3))],
		Technique::Univocal => vec![
			("vowel", json!("a")),
			("num_words", json!(40)),
			("line_length", json!("medium")),
		],
		Technique::Aleatory => vec![
			("num_lines", json!(10)),
			("line_length", json!("medium")),
			("randomness_factor", json!(0.7)),
		],
		Technique::Alliterative => vec![
			("letter", Value::Null),
			("num_lines", json!(8)),
			("line_length", json!("medium")),
		],
	}
}

/// Generates a text artifact from `content` with the given technique.
///
/// # Parameters
/// - `content`: read-only source text.
/// - `supplied`: technique-specific options; merged over fixed defaults.
/// - `dictionary`: lookup collaborator; only N+7 and definitional consult
///   it (`EmptyDictionary` serves everywhere else).
/// - `rng`: caller-owned randomness. A fixed seed reproduces output
///   exactly; no hidden global source exists.
///
/// # Returns
/// - `Ok(GenerationOutput)` on success.
/// - `Err(GenerationError::Validation)` for expected user-facing failures
///   (bad parameter values, source material too thin).
/// - `Err(GenerationError::Configuration)` for caller bugs (mistyped
///   option values; unknown identifiers fail earlier, in `FromStr`).
pub fn generate<R: Rng>(
	content: &str,
	technique: Technique,
	supplied: &Map<String, Value>,
	dictionary: &dyn DictionaryLookup,
	rng: &mut R,
) -> Result<GenerationOutput, GenerationError> {
	let options = Options::merged(&defaults(technique), supplied);
	log::debug!("generating '{}' from {} bytes of source", technique, content.len());

	match technique {
		Technique::CutUp => techniques::cut_up::generate(content, &options, rng),
		Technique::Erasure => techniques::erasure::generate(content, &options, rng),
		Technique::Snowball => techniques::snowball::generate(content, &options, rng),
		Technique::Mesostic => techniques::mesostic::generate(content, &options),
		Technique::NPlusSeven => {
			techniques::n_plus_seven::generate(content, &options, dictionary, rng)
		}
		Technique::Definitional => {
			techniques::definitional::generate(content, &options, dictionary, rng)
		}
		Technique::Found => techniques::found::generate(content, &options, rng),
		Technique::Kwic => techniques::kwic::generate(content, &options, rng),
		Technique::PrisonersConstraint => {
			techniques::prisoners::generate(content, &options, rng)
		}
		Technique::BeautifulOutlaw => {
			techniques::beautiful_outlaw::generate(content, &options, rng)
		}
		Technique::Lipogram => techniques::lipogram::lipogram(content, &options, rng),
		Technique::ReverseLipogram => {
			techniques::lipogram::reverse_lipogram(content, &options, rng)
		}
		Technique::Abecedarian => techniques::abecedarian::generate(content, &options, rng),
		Technique::Univocal => techniques::lipogram::univocal(content, &options, rng),
		Technique::Aleatory => techniques::aleatory::generate(content, &options, rng),
		Technique::Alliterative => techniques::alliterative::generate(content, &options, rng),
	}
}
