use serde_json::{Map, Value};

use super::output::GenerationError;

/// Named word-count range used to size generated lines.
///
/// The ranges are fixed:
/// very_short 1-2, short 3-4, medium 5-7, long 8-10, very_long 10-15.
/// Techniques default to `Medium` when the option is absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineLength {
	VeryShort,
	Short,
	Medium,
	Long,
	VeryLong,
}

impl LineLength {
	/// Inclusive word-count bounds for this bucket.
	pub fn word_range(self) -> (usize, usize) {
		match self {
			LineLength::VeryShort => (1, 2),
			LineLength::Short => (3, 4),
			LineLength::Medium => (5, 7),
			LineLength::Long => (8, 10),
			LineLength::VeryLong => (10, 15),
		}
	}

	/// Parses the closed set of bucket names.
	pub fn parse(name: &str) -> Option<Self> {
		match name {
			"very_short" => Some(LineLength::VeryShort),
			"short" => Some(LineLength::Short),
			"medium" => Some(LineLength::Medium),
			"long" => Some(LineLength::Long),
			"very_long" => Some(LineLength::VeryLong),
			_ => None,
		}
	}
}

/// A technique's option map: supplied values merged over fixed defaults.
///
/// # Responsibilities
/// - Merge `{defaults ∪ supplied}` with supplied values winning
/// - Provide typed access; a present-but-mistyped value is a
///   `Configuration` error (caller bug), while out-of-range *values* are
///   left to the per-technique validators
///
/// # Invariants
/// - Every key a technique reads has a default, so typed getters never
///   miss unless the defaults table itself is wrong (also `Configuration`).
#[derive(Clone, Debug)]
pub struct Options {
	values: Map<String, Value>,
}

impl Options {
	/// Merges supplied options over a defaults table.
	pub fn merged(defaults: &[(&str, Value)], supplied: &Map<String, Value>) -> Self {
		let mut values = Map::new();
		for (key, value) in defaults {
			values.insert((*key).to_owned(), value.clone());
		}
		for (key, value) in supplied {
			values.insert(key.clone(), value.clone());
		}
		Self { values }
	}

	fn get(&self, name: &str) -> Result<&Value, GenerationError> {
		self.values.get(name).ok_or_else(|| {
			GenerationError::Configuration(format!("Option '{}' has no default", name))
		})
	}

	/// Reads a non-negative integer option.
	pub fn usize(&self, name: &str) -> Result<usize, GenerationError> {
		match self.get(name)? {
			Value::Number(n) => n
				.as_u64()
				.map(|v| v as usize)
				.ok_or_else(|| mistyped(name, "a non-negative integer")),
			_ => Err(mistyped(name, "a non-negative integer")),
		}
	}

	/// Reads a signed integer option.
	pub fn i64(&self, name: &str) -> Result<i64, GenerationError> {
		match self.get(name)? {
			Value::Number(n) => n.as_i64().ok_or_else(|| mistyped(name, "an integer")),
			_ => Err(mistyped(name, "an integer")),
		}
	}

	/// Reads a float option (integers are accepted and widened).
	pub fn f64(&self, name: &str) -> Result<f64, GenerationError> {
		match self.get(name)? {
			Value::Number(n) => n.as_f64().ok_or_else(|| mistyped(name, "a number")),
			_ => Err(mistyped(name, "a number")),
		}
	}

	/// Reads a boolean option.
	pub fn bool(&self, name: &str) -> Result<bool, GenerationError> {
		match self.get(name)? {
			Value::Bool(b) => Ok(*b),
			_ => Err(mistyped(name, "a boolean")),
		}
	}

	/// Reads a string option. `Null` reads as `None` so required-parameter
	/// validation can produce the user-facing message instead.
	pub fn str(&self, name: &str) -> Result<Option<&str>, GenerationError> {
		match self.get(name)? {
			Value::String(s) => Ok(Some(s.as_str())),
			Value::Null => Ok(None),
			_ => Err(mistyped(name, "a string")),
		}
	}

	/// Resolves the `line_length` bucket, defaulting to `Medium`.
	///
	/// An unknown bucket name is user input, so it fails as validation
	/// rather than configuration.
	pub fn line_length(&self) -> Result<LineLength, GenerationError> {
		match self.values.get("line_length") {
			None | Some(Value::Null) => Ok(LineLength::Medium),
			Some(Value::String(name)) => LineLength::parse(name).ok_or_else(|| {
				GenerationError::Validation(format!(
					"Line length must be one of very_short, short, medium, long, very_long (got '{}')",
					name
				))
			}),
			Some(_) => Err(mistyped("line_length", "a string")),
		}
	}
}

fn mistyped(name: &str, expected: &str) -> GenerationError {
	GenerationError::Configuration(format!("Option '{}' must be {}", name, expected))
}
