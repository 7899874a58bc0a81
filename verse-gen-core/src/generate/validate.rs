//! Pure validators shared by every technique.
//!
//! Each returns `None` on success, or a fixed-format human-readable message.
//! Techniques run their validators before any generation work and
//! short-circuit on the first message, which becomes the
//! `GenerationError::Validation` result.

use super::output::GenerationError;

/// Turns a validator's message into the short-circuiting error value.
pub fn check(result: Option<String>) -> Result<(), GenerationError> {
	match result {
		Some(message) => Err(GenerationError::Validation(message)),
		None => Ok(()),
	}
}

/// Checks that the vocabulary holds at least `min` words.
pub fn minimum_words<T>(words: &[T], min: usize) -> Option<String> {
	if words.len() < min {
		Some("Not enough words in source text".to_owned())
	} else {
		None
	}
}

/// Checks that raw content is at least `min` characters long.
pub fn minimum_content(content: &str, min: usize) -> Option<String> {
	if content.chars().count() < min {
		Some("Not enough content in source text".to_owned())
	} else {
		None
	}
}

/// Checks that a required string option was supplied and is not blank.
pub fn required_param(value: Option<&str>, name: &str) -> Option<String> {
	match value {
		Some(v) if !v.trim().is_empty() => None,
		_ => Some(format!("Missing required option: {}", name)),
	}
}

/// Checks that a numeric option sits inside its documented closed range.
pub fn range(value: usize, name: &str, min: usize, max: usize) -> Option<String> {
	if value < min || value > max {
		Some(format!("Option '{}' must be between {} and {}", name, min, max))
	} else {
		None
	}
}

/// Checks a lower bound only.
pub fn at_least(value: usize, name: &str, min: usize) -> Option<String> {
	if value < min {
		Some(format!("Option '{}' must be at least {}", name, min))
	} else {
		None
	}
}

/// Checks an upper bound only.
pub fn at_most(value: usize, name: &str, max: usize) -> Option<String> {
	if value > max {
		Some(format!("Option '{}' must be at most {}", name, max))
	} else {
		None
	}
}

/// Checks that a string option is a single alphabetic character.
///
/// Returns the lowercased letter on success.
pub fn single_letter(value: &str, name: &str) -> Result<char, String> {
	let trimmed = value.trim();
	let mut chars = trimmed.chars();
	match (chars.next(), chars.next()) {
		(Some(c), None) if c.is_ascii_alphabetic() => Ok(c.to_ascii_lowercase()),
		_ => Err(format!("Option '{}' must be a single letter", name)),
	}
}
