// Copyright 2025 Irreducible Inc.
//! Arbitrary-precision signed integers.
//!
//! A [`BigInt`] stores its sign separately from its magnitude, which is a vector of 32-bit words
//! in big-endian word order: the most significant word sits at index 0. Arithmetic runs on the
//! magnitudes first and the sign of the result is applied afterwards.

mod addsub;
#[allow(clippy::module_inception)]
mod bigint;
mod cmp;
pub(crate) mod div;
pub(crate) mod mul;
mod ops;
mod shift;
pub(crate) mod words;

#[cfg(test)]
mod tests;

pub use bigint::{BigInt, Sign};
