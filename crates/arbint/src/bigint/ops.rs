// Copyright 2025 Irreducible Inc.
//! Operator overloads.
//!
//! Every operator is available on owned values and references in any combination. Division and
//! remainder panic on a zero divisor just like the primitive integer operators; use
//! [`BigInt::div_rem`] to handle that case as an [`Error`](crate::Error).

use std::{
	iter::{Product, Sum},
	ops::{
		Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Shl, ShlAssign, Shr,
		ShrAssign, Sub, SubAssign,
	},
};

use super::bigint::BigInt;

fn div_or_panic(lhs: &BigInt, rhs: &BigInt) -> BigInt {
	match lhs.divide(rhs) {
		Ok(quotient) => quotient,
		Err(err) => panic!("attempt to divide: {err}"),
	}
}

fn rem_or_panic(lhs: &BigInt, rhs: &BigInt) -> BigInt {
	match lhs.remainder(rhs) {
		Ok(rem) => rem,
		Err(err) => panic!("attempt to calculate the remainder: {err}"),
	}
}

macro_rules! impl_binary_op {
	($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:path) => {
		impl $trait<&BigInt> for &BigInt {
			type Output = BigInt;

			#[inline]
			fn $method(self, rhs: &BigInt) -> BigInt {
				$op(self, rhs)
			}
		}

		impl $trait<BigInt> for &BigInt {
			type Output = BigInt;

			#[inline]
			fn $method(self, rhs: BigInt) -> BigInt {
				$op(self, &rhs)
			}
		}

		impl $trait<&BigInt> for BigInt {
			type Output = BigInt;

			#[inline]
			fn $method(self, rhs: &BigInt) -> BigInt {
				$op(&self, rhs)
			}
		}

		impl $trait<BigInt> for BigInt {
			type Output = BigInt;

			#[inline]
			fn $method(self, rhs: BigInt) -> BigInt {
				$op(&self, &rhs)
			}
		}

		impl $assign_trait<&BigInt> for BigInt {
			#[inline]
			fn $assign_method(&mut self, rhs: &BigInt) {
				*self = $op(self, rhs);
			}
		}

		impl $assign_trait<BigInt> for BigInt {
			#[inline]
			fn $assign_method(&mut self, rhs: BigInt) {
				*self = $op(self, &rhs);
			}
		}
	};
}

impl_binary_op!(Add, add, AddAssign, add_assign, BigInt::add);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, BigInt::subtract);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, BigInt::multiply);
impl_binary_op!(Div, div, DivAssign, div_assign, div_or_panic);
impl_binary_op!(Rem, rem, RemAssign, rem_assign, rem_or_panic);

impl Neg for BigInt {
	type Output = BigInt;

	#[inline]
	fn neg(self) -> BigInt {
		self.into_negated()
	}
}

impl Neg for &BigInt {
	type Output = BigInt;

	#[inline]
	fn neg(self) -> BigInt {
		self.negate()
	}
}

/// Saturates a shift amount; anything past `usize::MAX` bits behaves the same.
fn shift_amount<T: TryInto<usize>>(n: T) -> usize {
	n.try_into().unwrap_or(usize::MAX)
}

macro_rules! impl_shift_owned {
	($t:ty) => {
		impl Shl<$t> for BigInt {
			type Output = BigInt;

			#[inline]
			fn shl(self, n: $t) -> BigInt {
				&self << n
			}
		}

		impl Shr<$t> for BigInt {
			type Output = BigInt;

			#[inline]
			fn shr(self, n: $t) -> BigInt {
				&self >> n
			}
		}

		impl ShlAssign<$t> for BigInt {
			#[inline]
			fn shl_assign(&mut self, n: $t) {
				*self = &*self << n;
			}
		}

		impl ShrAssign<$t> for BigInt {
			#[inline]
			fn shr_assign(&mut self, n: $t) {
				*self = &*self >> n;
			}
		}
	};
}

macro_rules! impl_shift_unsigned {
	($($t:ty),*) => {
		$(
			impl Shl<$t> for &BigInt {
				type Output = BigInt;

				#[inline]
				fn shl(self, n: $t) -> BigInt {
					self.shl_bits(shift_amount(n))
				}
			}

			impl Shr<$t> for &BigInt {
				type Output = BigInt;

				#[inline]
				fn shr(self, n: $t) -> BigInt {
					self.shr_bits(shift_amount(n))
				}
			}

			impl_shift_owned!($t);
		)*
	};
}

macro_rules! impl_shift_signed {
	($($t:ty),*) => {
		$(
			impl Shl<$t> for &BigInt {
				type Output = BigInt;

				#[inline]
				fn shl(self, n: $t) -> BigInt {
					let bits = shift_amount(n.unsigned_abs());
					if n >= 0 { self.shl_bits(bits) } else { self.shr_bits(bits) }
				}
			}

			impl Shr<$t> for &BigInt {
				type Output = BigInt;

				#[inline]
				fn shr(self, n: $t) -> BigInt {
					let bits = shift_amount(n.unsigned_abs());
					if n >= 0 { self.shr_bits(bits) } else { self.shl_bits(bits) }
				}
			}

			impl_shift_owned!($t);
		)*
	};
}

impl_shift_unsigned!(u32, u64, usize);
impl_shift_signed!(i32, i64, isize);

impl Sum for BigInt {
	fn sum<I: Iterator<Item = BigInt>>(iter: I) -> Self {
		iter.fold(BigInt::zero(), |acc, x| BigInt::add(&acc, &x))
	}
}

impl<'a> Sum<&'a BigInt> for BigInt {
	fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
		iter.fold(BigInt::zero(), |acc, x| BigInt::add(&acc, x))
	}
}

impl Product for BigInt {
	fn product<I: Iterator<Item = BigInt>>(iter: I) -> Self {
		iter.fold(BigInt::one(), |acc, x| acc.multiply(&x))
	}
}

impl<'a> Product<&'a BigInt> for BigInt {
	fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
		iter.fold(BigInt::one(), |acc, x| acc.multiply(x))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn big(value: i128) -> BigInt {
		BigInt::from(value)
	}

	#[test]
	fn test_operators_match_methods() {
		let a = big(-(1 << 90) + 12345);
		let b = big(987_654_321);

		assert_eq!(&a + &b, BigInt::add(&a, &b));
		assert_eq!(a.clone() - &b, a.subtract(&b));
		assert_eq!(&a * b.clone(), a.multiply(&b));
		assert_eq!(&a / &b, big((-(1 << 90) + 12345) / 987_654_321));
		assert_eq!(&a % &b, big((-(1 << 90) + 12345) % 987_654_321));
		assert_eq!(-&a, a.negate());
		assert_eq!(-(-a.clone()), a);
	}

	#[test]
	fn test_assign_operators() {
		let mut x = big(10);
		x += big(5);
		x -= &big(3);
		x *= big(-4);
		x /= big(5);
		x %= big(7);
		assert_eq!(x, big(((10 + 5 - 3) * -4 / 5) % 7));

		x <<= 70u32;
		x >>= 69usize;
		assert_eq!(x, big(((10 + 5 - 3) * -4 / 5) % 7 * 2));
	}

	#[test]
	fn test_shift_operators() {
		assert_eq!(big(3) << 64u32, big(3 << 64));
		assert_eq!(big(-9) >> 2i32, big(-3));
		assert_eq!(&big(1) << -1i64, BigInt::zero());
		assert_eq!(big(-1) >> -3isize, big(-8));
		assert_eq!(big(-5) >> u64::MAX, big(-1));
	}

	#[test]
	#[should_panic(expected = "division by zero")]
	fn test_div_operator_panics_on_zero() {
		let _ = big(1) / BigInt::zero();
	}

	#[test]
	#[should_panic(expected = "division by zero")]
	fn test_rem_operator_panics_on_zero() {
		let _ = big(1) % BigInt::zero();
	}

	#[test]
	fn test_sum_and_product() {
		let values: Vec<BigInt> = (1..=30).map(BigInt::from).collect();
		let sum: BigInt = values.iter().sum();
		assert_eq!(sum, big(465));
		let factorial: BigInt = values.into_iter().product();
		assert_eq!(factorial.to_string(), "265252859812191058636308480000000");

		assert!(std::iter::empty::<BigInt>().sum::<BigInt>().is_zero());
		assert_eq!(std::iter::empty::<BigInt>().product::<BigInt>(), BigInt::one());
	}
}
