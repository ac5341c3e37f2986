// Copyright 2025 Irreducible Inc.
//! Arbitrary-precision signed integer arithmetic.
//!
//! The central type is [`BigInt`], an immutable sign-magnitude integer whose magnitude is a
//! sequence of 32-bit words stored most significant word first. It supports
//!
//! - addition, subtraction and multiplication, switching to Karatsuba for long operands
//! - truncating division and remainder via Knuth's Algorithm D
//! - shifts with two's-complement semantics, so right shifts of negative values round toward
//!   negative infinity
//! - parsing from and formatting to strings in any radix from 2 to 36
//!
//! Fallible operations return [`Error`]; the [`std::ops`] operators panic where the primitive
//! integer operators would.
//!
//! Formatting of large values splits them around powers of the radix held in a [`PowerCache`].
//! The process-wide cache is shared by all threads, and callers that want an isolated one can
//! pass their own to [`BigInt::to_str_radix_with_cache`].
//!
//! ```
//! use arbint::BigInt;
//!
//! let a: BigInt = "5894082498674691308000005".parse().unwrap();
//! let (q, r) = a.div_rem(&BigInt::from(38594)).unwrap();
//! assert_eq!(q.to_string(), "152720176677066158159");
//! assert_eq!(r, BigInt::from(11559));
//! assert_eq!(format!("{:x}", BigInt::from(-255)), "-ff");
//! ```

#![warn(missing_docs)]

mod bigint;
pub mod consts;
pub mod error;
mod radix;

pub use bigint::{BigInt, Sign};
pub use error::{Error, ErrorKind};
pub use radix::PowerCache;
