use rand::Rng;

/// Picks `k` distinct elements uniformly at random, cloning them out.
///
/// Implemented as a partial Fisher-Yates shuffle over an index vector, so
/// the cost is `O(pool + k)` and the result order is itself random.
///
/// # Notes
/// `k` larger than the pool is clamped to the pool size here; whether a
/// shortfall is acceptable (lipogram family) or a validation failure
/// (cut-up, KWIC) is each technique's contract, enforced before calling.
pub fn distinct<T: Clone, R: Rng>(rng: &mut R, pool: &[T], k: usize) -> Vec<T> {
	let k = k.min(pool.len());
	let mut indices: Vec<usize> = (0..pool.len()).collect();

	let mut picked = Vec::with_capacity(k);
	for i in 0..k {
		let j = rng.random_range(i..indices.len());
		indices.swap(i, j);
		picked.push(pool[indices[i]].clone());
	}

	picked
}

/// Picks one element uniformly at random. `None` on an empty pool.
pub fn pick<'a, T, R: Rng>(rng: &mut R, pool: &'a [T]) -> Option<&'a T> {
	if pool.is_empty() {
		None
	} else {
		Some(&pool[rng.random_range(0..pool.len())])
	}
}

/// Uniform line length in the inclusive range `[min, max]`.
pub fn range_size<R: Rng>(rng: &mut R, min: usize, max: usize) -> usize {
	if min >= max {
		min
	} else {
		rng.random_range(min..=max)
	}
}

/// Weighted line length for prisoner's-constraint lineation.
///
/// 40% chance of a 1-word line, 30% of 2, 20% of 3, 10% of 4, clamped to
/// the words still remaining. Same cumulative-bucket walk as any weighted
/// choice: draw once, subtract weights until the draw lands.
pub fn weighted_line_len<R: Rng>(rng: &mut R, remaining: usize) -> usize {
	const WEIGHTS: [(usize, u32); 4] = [(1, 40), (2, 30), (3, 20), (4, 10)];

	let mut roll = rng.random_range(0..100u32);
	for (length, weight) in WEIGHTS {
		if roll < weight {
			return length.min(remaining);
		}
		roll -= weight;
	}

	// Unreachable: the weights sum to 100. Kept for safety.
	1.min(remaining)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand_chacha::ChaCha20Rng;

	#[test]
	fn distinct_never_repeats_and_clamps() {
		let mut rng = ChaCha20Rng::seed_from_u64(7);
		let pool = vec!["a", "b", "c", "d", "e"];

		let picked = distinct(&mut rng, &pool, 3);
		assert_eq!(picked.len(), 3);
		let mut unique = picked.clone();
		unique.sort();
		unique.dedup();
		assert_eq!(unique.len(), 3);

		let all = distinct(&mut rng, &pool, 99);
		assert_eq!(all.len(), 5);
	}

	#[test]
	fn same_seed_reproduces_the_sample() {
		let pool: Vec<usize> = (0..50).collect();
		let a = distinct(&mut ChaCha20Rng::seed_from_u64(42), &pool, 10);
		let b = distinct(&mut ChaCha20Rng::seed_from_u64(42), &pool, 10);
		assert_eq!(a, b);
	}

	#[test]
	fn weighted_line_len_stays_in_bounds() {
		let mut rng = ChaCha20Rng::seed_from_u64(3);
		for _ in 0..200 {
			let length = weighted_line_len(&mut rng, 10);
			assert!((1..=4).contains(&length));
		}
		assert_eq!(weighted_line_len(&mut rng, 0), 0);
	}

	#[test]
	fn range_size_handles_degenerate_ranges() {
		let mut rng = ChaCha20Rng::seed_from_u64(1);
		assert_eq!(range_size(&mut rng, 4, 4), 4);
		for _ in 0..50 {
			let n = range_size(&mut rng, 5, 7);
			assert!((5..=7).contains(&n));
		}
	}
}
