// Copyright 2025 Irreducible Inc.
//! Word-array primitives.
//!
//! Every routine here works on plain `u32` sequences stored most-significant word first and has
//! no notion of sign. Callers are responsible for normalizing results before wrapping them in a
//! [`BigInt`](super::BigInt).

use std::{cmp::Ordering, iter};

use crate::consts::{LOG_WORD_SIZE_BITS, WORD_SIZE_BITS};

/// Returns the words of `words` after any leading zero words.
pub fn strip_leading_zeros(words: &[u32]) -> &[u32] {
	let keep = words.iter().take_while(|&&w| w == 0).count();
	&words[keep..]
}

/// Removes leading zero words in place.
pub fn normalize(words: &mut Vec<u32>) {
	let keep = words.iter().take_while(|&&w| w == 0).count();
	if keep != 0 {
		words.drain(..keep);
	}
}

/// Compares two normalized magnitudes.
///
/// Since neither operand carries leading zero words the longer one is larger; equal lengths fall
/// back to a word-by-word unsigned comparison from the most significant end.
pub fn compare(x: &[u32], y: &[u32]) -> Ordering {
	x.len().cmp(&y.len()).then_with(|| x.cmp(y))
}

/// Adds two magnitudes.
///
/// The result is one word longer than the longer operand only when the final carry escapes the
/// most significant word.
pub fn add(x: &[u32], y: &[u32]) -> Vec<u32> {
	let (x, y) = if x.len() < y.len() { (y, x) } else { (x, y) };

	let mut result = vec![0u32; x.len()];
	let mut carry = 0u64;
	let y_padded = y.iter().rev().chain(iter::repeat(&0));
	for ((r, &x_word), &y_word) in result.iter_mut().rev().zip(x.iter().rev()).zip(y_padded) {
		let sum = x_word as u64 + y_word as u64 + carry;
		*r = sum as u32;
		carry = sum >> WORD_SIZE_BITS;
	}

	if carry != 0 {
		result.insert(0, carry as u32);
	}
	result
}

/// Subtracts `little` from `big`.
///
/// # Preconditions
///
/// `big` must be greater than or equal to `little` as a magnitude. The result keeps the length of
/// `big` and may carry leading zero words.
pub fn subtract(big: &[u32], little: &[u32]) -> Vec<u32> {
	debug_assert!(compare(strip_leading_zeros(big), strip_leading_zeros(little)) != Ordering::Less);

	let mut result = vec![0u32; big.len()];
	let mut borrow = 0i64;
	let little_padded = little.iter().rev().chain(iter::repeat(&0));
	for ((r, &big_word), &little_word) in result
		.iter_mut()
		.rev()
		.zip(big.iter().rev())
		.zip(little_padded)
	{
		let difference = big_word as i64 - little_word as i64 + borrow;
		*r = difference as u32;
		// Arithmetic shift leaves 0 or -1.
		borrow = difference >> WORD_SIZE_BITS;
	}

	debug_assert_eq!(borrow, 0, "subtract: borrow escaped the most significant word");
	result
}

/// Adds one to a magnitude, growing it by a word when the carry escapes.
pub fn increment(mut words: Vec<u32>) -> Vec<u32> {
	for word in words.iter_mut().rev() {
		*word = word.wrapping_add(1);
		if *word != 0 {
			return words;
		}
	}
	words.insert(0, 1);
	words
}

/// Shifts a magnitude left by `n` bits.
///
/// The whole-word part of the shift appends zero words at the least significant end; the
/// intra-word part ripples each word left, pulling in the high bits of its less significant
/// neighbour. An extra most significant word is produced only when bits overflow the top word.
pub fn shift_left(words: &[u32], n: usize) -> Vec<u32> {
	let n_words = n >> LOG_WORD_SIZE_BITS;
	let n_bits = (n % WORD_SIZE_BITS) as u32;

	if words.is_empty() {
		return Vec::new();
	}

	let mut result = Vec::with_capacity(words.len() + n_words + 1);
	if n_bits == 0 {
		result.extend_from_slice(words);
	} else {
		let n_bits2 = WORD_SIZE_BITS as u32 - n_bits;
		let high_bits = words[0] >> n_bits2;
		if high_bits != 0 {
			result.push(high_bits);
		}
		for pair in words.windows(2) {
			result.push(pair[0] << n_bits | pair[1] >> n_bits2);
		}
		result.push(words[words.len() - 1] << n_bits);
	}
	result.resize(result.len() + n_words, 0);
	result
}

/// Shifts a magnitude right by `n` bits, discarding the bits shifted out.
///
/// The result is normalized.
pub fn shift_right(words: &[u32], n: usize) -> Vec<u32> {
	let n_words = n >> LOG_WORD_SIZE_BITS;
	let n_bits = (n % WORD_SIZE_BITS) as u32;

	if n_words >= words.len() {
		return Vec::new();
	}

	let kept = &words[..words.len() - n_words];
	let mut result = Vec::with_capacity(kept.len());
	if n_bits == 0 {
		result.extend_from_slice(kept);
	} else {
		let n_bits2 = WORD_SIZE_BITS as u32 - n_bits;
		let high_bits = kept[0] >> n_bits;
		if high_bits != 0 {
			result.push(high_bits);
		}
		for pair in kept.windows(2) {
			result.push(pair[0] << n_bits2 | pair[1] >> n_bits);
		}
	}
	normalize(&mut result);
	result
}

/// Reports whether any of the low `n` bits of a magnitude are set.
pub fn any_low_bits_set(words: &[u32], n: usize) -> bool {
	let n_words = n >> LOG_WORD_SIZE_BITS;
	let n_bits = n % WORD_SIZE_BITS;

	let len = words.len();
	if n_words >= len {
		return words.iter().any(|&w| w != 0);
	}
	if words[len - n_words..].iter().any(|&w| w != 0) {
		return true;
	}
	n_bits != 0 && words[len - n_words - 1] << (WORD_SIZE_BITS - n_bits) != 0
}

/// Converts a two's-complement encoded negative word array into its magnitude.
///
/// Leading all-ones words are sign extension and are dropped; the remaining words are inverted
/// and incremented. If every remaining word is zero the magnitude needs one more word than the
/// input to hold the carry (for example `[0xFFFF_FFFF, 0]` encodes `-2^32`).
pub fn make_positive(words: &[u32]) -> Vec<u32> {
	let keep = words.iter().take_while(|&&w| w == u32::MAX).count();
	let all_zero_tail = words[keep..].iter().all(|&w| w == 0);
	let extra_word = usize::from(all_zero_tail);

	let mut result = vec![0u32; words.len() - keep + extra_word];
	for (r, &w) in result[extra_word..].iter_mut().zip(&words[keep..]) {
		*r = !w;
	}
	for r in result.iter_mut().rev() {
		*r = r.wrapping_add(1);
		if *r != 0 {
			break;
		}
	}
	result
}

/// Number of significant bits in a single word; zero for zero.
pub fn bit_length_of_word(word: u32) -> usize {
	WORD_SIZE_BITS - word.leading_zeros() as usize
}
