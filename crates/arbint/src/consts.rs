// Copyright 2025 Irreducible Inc.
//! Word layout, radix bounds and algorithm thresholds.

/// Magnitudes are stored as sequences of 32-bit words.
pub const WORD_SIZE_BITS: usize = 32;

/// log2 of [`WORD_SIZE_BITS`].
pub const LOG_WORD_SIZE_BITS: usize = WORD_SIZE_BITS.ilog2() as usize;

/// Mask selecting the low word of a 64-bit accumulator.
pub const WORD_MASK: u64 = u32::MAX as u64;

/// Smallest radix accepted by parsing and formatting.
pub const MIN_RADIX: u32 = 2;

/// Largest radix accepted by parsing and formatting.
pub const MAX_RADIX: u32 = 36;

/// Radix used by [`Display`](std::fmt::Display) and [`FromStr`](std::str::FromStr).
pub const DEFAULT_RADIX: u32 = 10;

/// Operand size, in words, that both factors must reach before multiplication switches from the
/// schoolbook algorithm to Karatsuba.
pub const KARATSUBA_THRESHOLD: usize = 80;

/// Magnitude size, in words, from which formatting switches from repeated division to recursive
/// divide-and-conquer splitting.
pub const RADIX_CONVERSION_THRESHOLD: usize = 20;
