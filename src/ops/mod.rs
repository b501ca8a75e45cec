// ============================================================================
// Arithmetic Module
// Add, subtract, multiply, divide, round and compare on packed words
// ============================================================================
//
// Every operation checks for NaN/infinity operands first and handles them
// on a cold path. Finite operations run on i64 mantissas where the result
// is exact or exactly roundable, and fall back to the arbitrary-precision
// collaborator otherwise (multiply overflow, division, rounding).
//
// Nothing here returns Result: overflow saturates to an infinity, underflow
// flushes to zero and undefined results are NaN.

mod add;
mod compare;
mod div;
mod mul;
mod round;

use crate::numeric::Decimal64;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// ============================================================================
// Operator Traits
// ============================================================================

macro_rules! forward_binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl $trait for Decimal64 {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self::Output {
                Decimal64::$method(self, rhs)
            }
        }

        impl $assign_trait for Decimal64 {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = Decimal64::$method(*self, rhs);
            }
        }
    };
}

forward_binary_op!(Add, add, AddAssign, add_assign);
forward_binary_op!(Sub, sub, SubAssign, sub_assign);
forward_binary_op!(Mul, mul, MulAssign, mul_assign);
forward_binary_op!(Div, div, DivAssign, div_assign);

impl Neg for Decimal64 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Sum for Decimal64 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Decimal64::ZERO, Decimal64::add)
    }
}

impl<'a> Sum<&'a Decimal64> for Decimal64 {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Product for Decimal64 {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Decimal64::ONE, Decimal64::mul)
    }
}

impl<'a> Product<&'a Decimal64> for Decimal64 {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().product()
    }
}
