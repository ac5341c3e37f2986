// Copyright 2025 Irreducible Inc.
//! Hosts error definitions for the crate.

use crate::consts::{MAX_RADIX, MIN_RADIX};

/// Failure of a single arbitrary-precision operation.
#[allow(missing_docs)] // errors are self-documenting
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("division by zero")]
	DivisionByZero,
	#[error("invalid argument: {reason}")]
	InvalidArgument { reason: &'static str },
	#[error("radix {radix} is outside the supported range {MIN_RADIX}..={MAX_RADIX}")]
	RadixOutOfRange { radix: u32 },
	#[error("cannot parse an integer from an empty string")]
	EmptyInput,
	#[error("invalid digit {digit:?} at position {position} for radix {radix}")]
	InvalidDigit {
		digit: char,
		position: usize,
		radix: u32,
	},
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// The divisor of `/` or `%` was zero.
	DivisionByZero,
	/// A constructor was given input it cannot represent.
	InvalidArgument,
	/// A radix string or the radix itself was malformed.
	Parse,
}

impl Error {
	/// Returns the class this error belongs to.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::DivisionByZero => ErrorKind::DivisionByZero,
			Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
			Self::RadixOutOfRange { .. } | Self::EmptyInput | Self::InvalidDigit { .. } => {
				ErrorKind::Parse
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_kind_classification() {
		assert_eq!(Error::DivisionByZero.kind(), ErrorKind::DivisionByZero);
		assert_eq!(Error::InvalidArgument { reason: "empty" }.kind(), ErrorKind::InvalidArgument);
		assert_eq!(Error::RadixOutOfRange { radix: 1 }.kind(), ErrorKind::Parse);
		assert_eq!(Error::EmptyInput.kind(), ErrorKind::Parse);
		assert_eq!(
			Error::InvalidDigit {
				digit: 'z',
				position: 0,
				radix: 10
			}
			.kind(),
			ErrorKind::Parse
		);
	}

	#[test]
	fn test_messages() {
		assert_eq!(
			Error::RadixOutOfRange { radix: 37 }.to_string(),
			"radix 37 is outside the supported range 2..=36"
		);
		assert_eq!(
			Error::InvalidDigit {
				digit: '9',
				position: 3,
				radix: 8
			}
			.to_string(),
			"invalid digit '9' at position 3 for radix 8"
		);
	}
}
