use serde::{Deserialize, Serialize};

/// A dictionary record as exposed by the lookup boundary.
///
/// The storage engine behind the dictionary is out of scope; generation only
/// ever sees this shape.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DictionaryEntry {
	/// The headword, lowercase.
	pub word: String,
	/// Part of speech tag, e.g. `"noun"`.
	pub part_of_speech: String,
	/// The definition text, unprocessed.
	pub definition: String,
	/// Synset identifiers the word belongs to.
	pub synsets: Vec<String>,
}

/// Synchronous lookup contract supplied by the caller.
///
/// Two techniques consult it: N+7 (`exists_as_noun` + `find_offset_sibling`)
/// and definitional (`find_with_definition`). Lookups are assumed fast; no
/// batching or caching contract exists at this layer.
pub trait DictionaryLookup {
	/// Returns true if `word` exists in the dictionary as a noun.
	fn exists_as_noun(&self, word: &str) -> bool;

	/// Returns the entry for `word`, if the dictionary defines it.
	fn find_with_definition(&self, word: &str) -> Option<DictionaryEntry>;

	/// Returns the word sitting `offset` places away from `word` in
	/// alphabetical order, restricted to the same part of speech.
	///
	/// Negative offsets walk backward. `None` when the dictionary runs out
	/// of siblings in that direction.
	fn find_offset_sibling(&self, word: &str, offset: i64, part_of_speech: &str) -> Option<String>;
}

/// A dictionary that knows no words.
///
/// Useful for the fourteen techniques that never consult the dictionary, and
/// as the degenerate case for the two that do (they leave every word
/// untouched).
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyDictionary;

impl DictionaryLookup for EmptyDictionary {
	fn exists_as_noun(&self, _word: &str) -> bool {
		false
	}

	fn find_with_definition(&self, _word: &str) -> Option<DictionaryEntry> {
		None
	}

	fn find_offset_sibling(&self, _word: &str, _offset: i64, _part_of_speech: &str) -> Option<String> {
		None
	}
}
