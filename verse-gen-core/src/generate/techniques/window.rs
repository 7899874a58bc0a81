use rand::Rng;

use crate::text::PositionalToken;

/// Picks a random contiguous window of `size` positional tokens.
///
/// Sequences no longer than `size` are returned whole. Used by the two
/// substitution techniques (N+7, definitional) to bound how much of the
/// source they rework.
pub(super) fn select<'a, R: Rng>(
	rng: &mut R,
	tokens: &'a [PositionalToken],
	size: usize,
) -> &'a [PositionalToken] {
	if tokens.len() <= size {
		return tokens;
	}
	let start = rng.random_range(0..=tokens.len() - size);
	&tokens[start..start + size]
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::text::extract::words_with_positions;
	use rand::SeedableRng;
	use rand_chacha::ChaCha20Rng;

	#[test]
	fn short_sequences_are_returned_whole() {
		let mut rng = ChaCha20Rng::seed_from_u64(1);
		let tokens = words_with_positions("three little words");
		assert_eq!(select(&mut rng, &tokens, 10).len(), 3);
	}

	#[test]
	fn windows_are_contiguous_and_sized() {
		let mut rng = ChaCha20Rng::seed_from_u64(9);
		let content = "a b c d e f g h i j k l m n o p";
		let tokens = words_with_positions(content);
		for _ in 0..20 {
			let window = select(&mut rng, &tokens, 4);
			assert_eq!(window.len(), 4);
			for pair in window.windows(2) {
				assert!(pair[0].offset < pair[1].offset);
			}
		}
	}
}
