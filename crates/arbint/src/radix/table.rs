// Copyright 2025 Irreducible Inc.
use crate::{
	consts::{MAX_RADIX, MIN_RADIX},
	error::Error,
};

/// Per-radix constants used to process digits in machine-word sized chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadixInfo {
	/// Base the other fields describe.
	pub radix: u32,
	/// Largest `k` such that `radix^k` fits in a `u32`.
	pub digits_per_word: usize,
	/// `radix^digits_per_word`.
	pub word_radix: u32,
	/// Largest `k` such that `radix^k` fits in an `i64`.
	pub digits_per_long: usize,
	/// `radix^digits_per_long`.
	pub long_radix: u64,
}

impl RadixInfo {
	const fn new(radix: u32) -> Self {
		let mut digits_per_word = 0;
		let mut word_radix = 1u64;
		while word_radix * radix as u64 <= u32::MAX as u64 {
			word_radix *= radix as u64;
			digits_per_word += 1;
		}

		let mut digits_per_long = 0;
		let mut long_radix = 1u128;
		while long_radix * radix as u128 <= i64::MAX as u128 {
			long_radix *= radix as u128;
			digits_per_long += 1;
		}

		Self {
			radix,
			digits_per_word,
			word_radix: word_radix as u32,
			digits_per_long,
			long_radix: long_radix as u64,
		}
	}

	/// Looks up the constants of `radix`.
	///
	/// # Errors
	/// [`Error::RadixOutOfRange`] unless `MIN_RADIX <= radix <= MAX_RADIX`.
	pub fn get(radix: u32) -> Result<&'static RadixInfo, Error> {
		if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
			return Err(Error::RadixOutOfRange { radix });
		}
		Ok(&RADIX_TABLE[(radix - MIN_RADIX) as usize])
	}

	/// Natural logarithm of the radix.
	pub fn ln(&self) -> f64 {
		(self.radix as f64).ln()
	}

	/// Upper bound on the number of bits one digit contributes.
	pub fn bits_per_digit(&self) -> usize {
		self.radix.ilog2() as usize + 1
	}

	/// `long_radix` as a magnitude.
	pub fn long_radix_words(&self) -> [u32; 2] {
		[(self.long_radix >> 32) as u32, self.long_radix as u32]
	}
}

static RADIX_TABLE: [RadixInfo; (MAX_RADIX - MIN_RADIX + 1) as usize] = {
	let mut table = [RadixInfo::new(MIN_RADIX); (MAX_RADIX - MIN_RADIX + 1) as usize];
	let mut radix = MIN_RADIX;
	while radix <= MAX_RADIX {
		table[(radix - MIN_RADIX) as usize] = RadixInfo::new(radix);
		radix += 1;
	}
	table
};
