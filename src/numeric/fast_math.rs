// ============================================================================
// Fast Integer Helpers
// Digit counting, power-of-ten tables and half-even shifting on i64
// ============================================================================

/// Compute 10^n at compile time
const fn pow10(n: usize) -> i64 {
    let mut result: i64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

const fn pow10_table<const N: usize>() -> [i64; N] {
    let mut table = [0i64; N];
    let mut i = 0;
    while i < N {
        table[i] = pow10(i);
        i += 1;
    }
    table
}

/// 10^0 ..= 10^18, every power of ten an i64 can hold.
pub const POW10: [i64; 19] = pow10_table::<19>();

/// 10^0 ..= 10^22, every power of ten an f64 represents exactly.
pub const F64_POW10: [f64; 23] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15, 1e16,
    1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
];

// LOG10_THRESHOLDS[k] is the largest value with k + 1 digits.
const LOG10_THRESHOLDS: [u64; 19] = {
    let mut table = [0u64; 19];
    let mut i = 0;
    while i < 18 {
        table[i] = pow10(i + 1) as u64 - 1;
        i += 1;
    }
    table[18] = 10_000_000_000_000_000_000 - 1;
    table
};

/// Floor of log10(|value|); 0 for zero.
///
/// Estimates from the bit length (19/64 is just under log10(2)) and corrects
/// the estimate with one table lookup. Exact over the whole i64 range,
/// `i64::MIN` included.
#[inline]
pub const fn log10(value: i64) -> u32 {
    let v = value.unsigned_abs();
    if v == 0 {
        return 0;
    }
    let guess = ((63 - v.leading_zeros()) * 19) >> 6;
    if v > LOG10_THRESHOLDS[guess as usize] {
        guess + 1
    } else {
        guess
    }
}

/// Number of decimal digits in |value|. `digit_count(0) == 1`.
#[inline]
pub const fn digit_count(value: i64) -> u32 {
    log10(value) + 1
}

/// 10^exp for `exp` in 0..=18.
///
/// # Panics
/// Panics if `exp` is outside the table.
#[inline]
pub const fn pow_ten(exp: u32) -> i64 {
    POW10[exp as usize]
}

/// 10^exp as f64 for `exp` in 0..=22.
#[inline]
pub const fn f64_pow_ten(exp: u32) -> f64 {
    F64_POW10[exp as usize]
}

/// True when both values have the same sign. Zero counts as positive.
#[inline]
pub const fn same_sign(a: i64, b: i64) -> bool {
    (a ^ b) >= 0
}

/// Divide by 10^drop, rounding half to even.
///
/// `drop` must be in 0..=18. When every digit is dropped the retained value
/// is zero, which is even, so only a remainder above one half rounds away.
#[inline]
pub const fn shift_right_half_even(value: i64, drop: u32) -> i64 {
    if drop == 0 {
        return value;
    }
    let divisor = pow_ten(drop);
    let mut quotient = value / divisor;
    let remainder = (value % divisor).unsigned_abs();
    let half = (divisor / 2) as u64;
    if remainder > half || (remainder == half && quotient % 2 != 0) {
        quotient += value.signum();
    }
    quotient
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn test_pow10_table() {
        assert_eq!(POW10[0], 1);
        assert_eq!(POW10[16], 10_000_000_000_000_000);
        assert_eq!(POW10[18], 1_000_000_000_000_000_000);
        for (i, p) in F64_POW10.iter().enumerate() {
            assert_eq!(*p, format!("1e{}", i).parse::<f64>().unwrap());
        }
    }

    #[test]
    fn test_digit_count_boundaries() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(-10), 2);
        for i in 1..19 {
            assert_eq!(digit_count(POW10[i] - 1), i as u32);
            assert_eq!(digit_count(POW10[i]), i as u32 + 1);
            assert_eq!(digit_count(-POW10[i]), i as u32 + 1);
        }
        assert_eq!(digit_count(i64::MAX), 19);
        assert_eq!(digit_count(i64::MIN), 19);
    }

    #[test]
    fn test_log10() {
        assert_eq!(log10(0), 0);
        assert_eq!(log10(1), 0);
        assert_eq!(log10(999), 2);
        assert_eq!(log10(1000), 3);
        assert_eq!(log10(-9_999_999_999_999_999), 15);
    }

    #[test]
    fn test_same_sign() {
        assert!(same_sign(1, 2));
        assert!(same_sign(-1, -2));
        assert!(same_sign(0, 5));
        assert!(!same_sign(0, -5));
        assert!(!same_sign(-1, 1));
    }

    #[test]
    fn test_shift_right_half_even() {
        assert_eq!(shift_right_half_even(15, 1), 2);
        assert_eq!(shift_right_half_even(25, 1), 2);
        assert_eq!(shift_right_half_even(26, 1), 3);
        assert_eq!(shift_right_half_even(-15, 1), -2);
        assert_eq!(shift_right_half_even(-25, 1), -2);
        assert_eq!(shift_right_half_even(-67, 1), -7);
        assert_eq!(shift_right_half_even(1250, 2), 12);
        assert_eq!(shift_right_half_even(1251, 2), 13);
        assert_eq!(shift_right_half_even(42, 0), 42);
    }

    #[test]
    fn test_shift_right_half_even_drops_all_digits() {
        assert_eq!(shift_right_half_even(5, 1), 0);
        assert_eq!(shift_right_half_even(6, 1), 1);
        assert_eq!(shift_right_half_even(-6, 1), -1);
        assert_eq!(shift_right_half_even(4999, 4), 0);
        assert_eq!(shift_right_half_even(5001, 4), 1);
    }

    quickcheck! {
        fn prop_digit_count_matches_text(value: i64) -> bool {
            digit_count(value) as usize == value.unsigned_abs().to_string().len()
        }

        fn prop_shift_is_nearest(value: i64, drop: u8) -> bool {
            let drop = (drop % 18) as u32 + 1;
            let value = value / 4;
            let q = shift_right_half_even(value, drop) as i128;
            let exact = value as i128;
            let scale = pow_ten(drop) as i128;
            // The rounded value is never more than half a unit away.
            (q * scale - exact).abs() * 2 <= scale
        }
    }
}
