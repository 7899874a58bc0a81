use serde::{Deserialize, Serialize};

/// One page of an erasure (or blackout) document.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ErasurePage {
	/// 1-based page number.
	pub number: usize,
	/// The page content: kept words verbatim, the rest erased.
	pub content: String,
}

/// The value a successful generation returns.
///
/// # Variants
/// - `Text`: lines joined by `\n`; what fifteen of the sixteen techniques
///   produce.
/// - `Erasure`: the structured document produced by erasure/blackout,
///   serializing as `{"type": "erasure_pages", ...}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum GenerationOutput {
	Text(String),
	Erasure {
		/// Discriminator kept in the serialized form.
		#[serde(rename = "type")]
		kind: ErasureKind,
		is_blackout: bool,
		pages: Vec<ErasurePage>,
	},
}

/// The fixed `type` discriminator of the erasure document.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErasureKind {
	#[serde(rename = "erasure_pages")]
	ErasurePages,
}

impl GenerationOutput {
	/// Builds a plain-text output from generated lines.
	pub fn from_lines(lines: Vec<String>) -> Self {
		GenerationOutput::Text(lines.join("\n"))
	}

	/// Builds the structured erasure document.
	pub fn erasure(is_blackout: bool, pages: Vec<ErasurePage>) -> Self {
		GenerationOutput::Erasure { kind: ErasureKind::ErasurePages, is_blackout, pages }
	}

	/// Returns the plain text, if this output is textual.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			GenerationOutput::Text(text) => Some(text),
			GenerationOutput::Erasure { .. } => None,
		}
	}
}

/// Why a generation did not produce an artifact.
///
/// # Variants
/// - `Validation`: an expected, user-facing failure — a missing or
///   out-of-range option, or source material too thin for the requested
///   constraints. The message is the result; callers display it.
/// - `Configuration`: a caller bug — unknown technique identifier or a
///   malformed option value. Not recoverable at this layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerationError {
	Validation(String),
	Configuration(String),
}

impl GenerationError {
	/// The human-readable message, whichever class it is.
	pub fn message(&self) -> &str {
		match self {
			GenerationError::Validation(msg) | GenerationError::Configuration(msg) => msg,
		}
	}
}

impl std::fmt::Display for GenerationError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			GenerationError::Validation(msg) => write!(f, "{}", msg),
			GenerationError::Configuration(msg) => write!(f, "configuration error: {}", msg),
		}
	}
}

impl std::error::Error for GenerationError {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn erasure_document_serializes_to_the_documented_shape() {
		let output = GenerationOutput::erasure(
			true,
			vec![ErasurePage { number: 1, content: "still here".to_owned() }],
		);
		let json = serde_json::to_value(&output).unwrap();
		assert_eq!(json["type"], "erasure_pages");
		assert_eq!(json["is_blackout"], true);
		assert_eq!(json["pages"][0]["number"], 1);
		assert_eq!(json["pages"][0]["content"], "still here");
	}

	#[test]
	fn text_output_joins_lines_with_newlines() {
		let output = GenerationOutput::from_lines(vec!["a".to_owned(), "b".to_owned()]);
		assert_eq!(output.as_text(), Some("a\nb"));
	}
}
