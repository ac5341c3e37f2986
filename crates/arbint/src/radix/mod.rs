// Copyright 2025 Irreducible Inc.
//! Conversion between [`BigInt`](crate::BigInt) and digit strings in radix 2 to 36.

mod cache;
mod format;
mod parse;
mod table;

pub use cache::PowerCache;
