// Copyright 2025 Irreducible Inc.
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use super::table::RadixInfo;
use crate::{
	bigint::BigInt,
	consts::{MAX_RADIX, MIN_RADIX},
	error::Error,
};

static GLOBAL: OnceLock<PowerCache> = OnceLock::new();

/// Memoized table of `radix^(2^n)`, indexed by radix and then by `n`.
///
/// Entries are computed on first request by repeatedly squaring the last cached power and are
/// never evicted, so each radix's line only grows. Lookups of cached entries take a shared lock;
/// growth takes the exclusive lock and re-checks the line, so concurrent callers asking for the
/// same missing entry compute it once and all observe the same value.
#[derive(Debug)]
pub struct PowerCache {
	lines: RwLock<Vec<Vec<Arc<BigInt>>>>,
}

impl PowerCache {
	/// Creates an empty cache.
	pub fn new() -> Self {
		Self {
			lines: RwLock::new(vec![Vec::new(); (MAX_RADIX + 1) as usize]),
		}
	}

	/// Returns the process-wide cache used by [`BigInt::to_str_radix`] and the formatting traits.
	pub fn global() -> &'static PowerCache {
		GLOBAL.get_or_init(PowerCache::new)
	}

	/// Returns `radix^(2^exponent)`, computing and caching any missing entries below it.
	///
	/// # Errors
	/// [`Error::RadixOutOfRange`] unless `MIN_RADIX <= radix <= MAX_RADIX`.
	pub fn get(&self, radix: u32, exponent: usize) -> Result<Arc<BigInt>, Error> {
		RadixInfo::get(radix)?;
		let index = radix as usize;

		{
			let lines = self.lines.read().unwrap_or_else(PoisonError::into_inner);
			if let Some(power) = lines[index].get(exponent) {
				return Ok(Arc::clone(power));
			}
		}

		let mut lines = self.lines.write().unwrap_or_else(PoisonError::into_inner);
		let line = &mut lines[index];
		while line.len() <= exponent {
			let next = match line.last() {
				Some(previous) => previous.square(),
				None => BigInt::from(radix),
			};
			tracing::debug!(
				radix,
				exponent = line.len(),
				bits = next.bit_length(),
				"caching radix power"
			);
			line.push(Arc::new(next));
		}
		Ok(Arc::clone(&line[exponent]))
	}

	/// Number of powers cached for `radix`.
	pub fn cached_len(&self, radix: u32) -> usize {
		if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
			return 0;
		}
		let lines = self.lines.read().unwrap_or_else(PoisonError::into_inner);
		lines[radix as usize].len()
	}
}

impl Default for PowerCache {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use std::thread;

	use super::*;

	#[test]
	fn test_powers_are_repeated_squares() {
		let cache = PowerCache::new();
		assert_eq!(*cache.get(10, 0).unwrap(), BigInt::from(10));
		assert_eq!(*cache.get(10, 3).unwrap(), BigInt::from(100_000_000));
		assert_eq!(cache.cached_len(10), 4);
		assert_eq!(cache.cached_len(16), 0);

		let power = cache.get(2, 7).unwrap();
		assert_eq!(*power, BigInt::one().shift_left(128));
	}

	#[test]
	fn test_cached_entries_are_shared() {
		let cache = PowerCache::new();
		let first = cache.get(7, 5).unwrap();
		let second = cache.get(7, 5).unwrap();
		assert!(Arc::ptr_eq(&first, &second));
	}

	#[test]
	fn test_radix_out_of_range() {
		let cache = PowerCache::new();
		assert_eq!(cache.get(37, 0), Err(Error::RadixOutOfRange { radix: 37 }));
		assert_eq!(cache.get(0, 2), Err(Error::RadixOutOfRange { radix: 0 }));
		assert_eq!(cache.cached_len(37), 0);
	}

	#[test]
	fn test_concurrent_growth_fills_each_slot_once() {
		let cache = PowerCache::new();
		let powers: Vec<Arc<BigInt>> = thread::scope(|s| {
			let handles: Vec<_> = (0..8).map(|_| s.spawn(|| cache.get(10, 9).unwrap())).collect();
			handles
				.into_iter()
				.map(|handle| handle.join().unwrap())
				.collect()
		});

		assert_eq!(cache.cached_len(10), 10);
		for power in &powers[1..] {
			assert!(Arc::ptr_eq(&powers[0], power));
		}
		assert_eq!(*powers[0], BigInt::from(10).pow(512));
	}
}
