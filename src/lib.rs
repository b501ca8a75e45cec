// ============================================================================
// Decimal64 Library
// 16-digit decimal floating point packed into a single 64-bit word
// ============================================================================

//! # Decimal64
//!
//! A compact decimal number for prices, quantities and other financial
//! values. Each value is one `i64`: a 55-bit signed mantissa of at most 16
//! digits and a 9-bit exponent counting digits right of the point.
//!
//! ## Features
//!
//! - **Exact decimal arithmetic** with half-even rounding to 16 digits
//! - **Saturating semantics**: overflow gives ±Infinity, underflow gives zero,
//!   undefined results give NaN
//! - **Allocation-free text codec** for plain and scientific notation
//! - **Canonical encoding**: equal values have equal words, so `Eq` and
//!   `Hash` are bitwise
//! - **Conversions** to and from integers, `f64`, `BigDecimal` and
//!   `rust_decimal::Decimal`, plus optional serde support
//!
//! ## Example
//!
//! ```rust
//! use decimal64::prelude::*;
//!
//! let price: Decimal64 = "101.25".parse().unwrap();
//! let quantity = Decimal64::from(3);
//!
//! let notional = price * quantity;
//! assert_eq!(notional.to_string(), "303.75");
//! assert_eq!(notional.to_i64_scaled(2).unwrap(), 30375);
//!
//! let third = Decimal64::ONE / Decimal64::from(3);
//! assert_eq!(third.to_string(), "0.3333333333333333");
//! assert!((Decimal64::ONE / Decimal64::ZERO).is_nan());
//! ```

pub mod codec;
pub mod convert;
pub mod numeric;
pub mod ops;

pub use convert::ArbitraryPrecision;
pub use numeric::{Decimal64, NumericError, NumericResult};

// Re-exports for convenience
pub mod prelude {
    pub use crate::codec::MAX_ASCII_LEN;
    pub use crate::convert::ArbitraryPrecision;
    pub use crate::numeric::{Decimal64, NumericError, NumericResult, PRECISION};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    fn parse(text: &str) -> Decimal64 {
        text.parse().unwrap()
    }

    #[test]
    fn test_end_to_end_fill_ledger() {
        let fills = [("101.25", "3"), ("101.5", "0.5"), ("100.875", "12")];

        let notional: Decimal64 = fills
            .iter()
            .map(|(price, qty)| parse(price) * parse(qty))
            .sum();
        let quantity: Decimal64 = fills.iter().map(|(_, qty)| parse(qty)).sum();

        assert_eq!(notional.to_string(), "1565");
        assert_eq!(quantity.to_string(), "15.5");

        let average = (notional / quantity).round(4);
        assert_eq!(average.to_string(), "100.9677");
        assert_eq!(average.to_i64_scaled(2).unwrap(), 10097);
        assert!(average.validate().is_ok());
    }

    #[test]
    fn test_end_to_end_text_round_trip() {
        for text in ["0", "-0.005", "3.1415", "-12300", "NaN", "+Infinity", "-Infinity"] {
            let value = parse(text);
            assert_eq!(value.to_string(), text);

            let mut buf = [0u8; MAX_ASCII_LEN];
            let len = value.write_ascii(&mut buf).unwrap();
            let reparsed = Decimal64::parse_ascii(&buf[..len]).unwrap();
            assert_eq!(reparsed.raw_value(), value.raw_value());
        }
    }

    #[test]
    fn test_end_to_end_special_values() {
        assert!((Decimal64::ONE / Decimal64::ZERO).is_nan());
        assert!((Decimal64::INFINITY - Decimal64::INFINITY).is_nan());
        assert_eq!(Decimal64::MAX + Decimal64::MAX, Decimal64::INFINITY);
        assert_eq!(Decimal64::from_parts(1, 255) / Decimal64::from(10), Decimal64::ZERO);
        assert!(Decimal64::NAN > Decimal64::INFINITY);

        let mut sorted = vec![
            Decimal64::NAN,
            Decimal64::ONE,
            Decimal64::NEG_INFINITY,
            Decimal64::ZERO,
        ];
        sorted.sort();
        assert_eq!(
            sorted,
            vec![Decimal64::NEG_INFINITY, Decimal64::ZERO, Decimal64::ONE, Decimal64::NAN]
        );
    }

    #[test]
    fn test_end_to_end_conversions() {
        let x = parse("-3.1415");
        assert_eq!(x.to_f64(), -3.1415);
        assert_eq!(Decimal64::from_f64(-3.1415), x);
        assert_eq!(x.to_i64().unwrap(), -3);
        assert_eq!(Decimal64::from(x.to_big_decimal().unwrap()), x);
        assert_eq!(Decimal64::from(x.to_rust_decimal().unwrap()), x);
    }

    #[test]
    fn test_slow_paths_emit_trace_events() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            assert!("1e-300".parse::<Decimal64>().unwrap().is_zero());
            assert!("bogus".parse::<Decimal64>().is_err());
            assert_eq!(Decimal64::MAX * Decimal64::from(10), Decimal64::INFINITY);
        });
    }
}
