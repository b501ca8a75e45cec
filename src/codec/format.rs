// ============================================================================
// Formatting
// Decimal64 to plain ASCII, straight into a caller buffer
// ============================================================================
//
// Output is the shortest plain form, never scientific notation:
//
//   (0, 0)        -> 0
//   (123, 0)      -> 123
//   (-123, -2)    -> -12300
//   (31415, 4)    -> 3.1415
//   (-5, 3)       -> -0.005
//   specials      -> NaN, +Infinity, -Infinity

use crate::numeric::fast_math::digit_count;
use crate::numeric::{Decimal64, NumericError, NumericResult};
use std::fmt;

/// Upper bound on the formatted length of any word, canonical or not.
///
/// A raw mantissa has at most 17 digits and the exponent field at most 256
/// in magnitude: sign + 17 digits + 255 trailing zeros, or sign + "0." +
/// 255 fractional digits.
pub const MAX_ASCII_LEN: usize = 276;

const NAN_TEXT: &[u8] = b"NaN";
const INFINITY_TEXT: &[u8] = b"+Infinity";
const NEG_INFINITY_TEXT: &[u8] = b"-Infinity";

const DIGIT_PAIRS: &[u8; 200] = b"\
    0001020304050607080910111213141516171819\
    2021222324252627282930313233343536373839\
    4041424344454647484950515253545556575859\
    6061626364656667686970717273747576777879\
    8081828384858687888990919293949596979899";

impl Decimal64 {
    /// Upper bound on the bytes [`Decimal64::write_ascii`] needs for this
    /// value: digits + sign + point + |exponent|.
    #[inline]
    pub fn max_ascii_len(self) -> usize {
        if !self.is_finite() {
            return INFINITY_TEXT.len();
        }
        digit_count(self.mantissa()) as usize + 2 + self.exponent().unsigned_abs() as usize
    }

    /// Write the plain text form into `out`, returning the bytes written.
    ///
    /// # Errors
    /// Returns `BufferTooSmall` without touching `out` if it cannot hold the
    /// text. A buffer of [`Decimal64::max_ascii_len`] (or [`MAX_ASCII_LEN`])
    /// bytes always suffices.
    ///
    /// # Example
    /// ```
    /// use decimal64::Decimal64;
    ///
    /// let mut buf = [0u8; 32];
    /// let n = Decimal64::from_parts(-5, 3).write_ascii(&mut buf).unwrap();
    /// assert_eq!(&buf[..n], b"-0.005");
    /// ```
    pub fn write_ascii(self, out: &mut [u8]) -> NumericResult<usize> {
        let needed = formatted_len(self);
        if out.len() < needed {
            return Err(NumericError::BufferTooSmall {
                needed,
                available: out.len(),
            });
        }
        let mut writer = AsciiWriter { buf: out, pos: 0 };
        write_value(self, &mut writer);
        Ok(writer.pos)
    }
}

/// Exact length of the text form.
fn formatted_len(value: Decimal64) -> usize {
    if value.is_nan() {
        return NAN_TEXT.len();
    }
    if !value.is_finite() {
        return INFINITY_TEXT.len();
    }
    let mantissa = value.mantissa();
    if mantissa == 0 {
        return 1;
    }
    let sign = usize::from(mantissa < 0);
    let digits = digit_count(mantissa) as usize;
    let exponent = value.exponent();
    if exponent <= 0 {
        sign + digits + exponent.unsigned_abs() as usize
    } else if (exponent as usize) < digits {
        sign + digits + 1
    } else {
        sign + 2 + exponent as usize
    }
}

fn write_value(value: Decimal64, w: &mut AsciiWriter<'_>) {
    if !value.is_finite() {
        w.push_slice(if value.is_nan() {
            NAN_TEXT
        } else if value.is_negative() {
            NEG_INFINITY_TEXT
        } else {
            INFINITY_TEXT
        });
        return;
    }

    let mantissa = value.mantissa();
    if mantissa == 0 {
        w.push(b'0');
        return;
    }
    if mantissa < 0 {
        w.push(b'-');
    }

    let magnitude = mantissa.unsigned_abs();
    let digits = digit_count(mantissa) as usize;
    let exponent = value.exponent();

    if exponent <= 0 {
        w.push_digits(magnitude, digits);
        w.push_zeros(exponent.unsigned_abs() as usize);
    } else if (exponent as usize) < digits {
        let int_len = digits - exponent as usize;
        let start = w.pos;
        // Write every digit one byte to the right, then slide the integer
        // part back over the gap and drop the point in.
        w.pos += 1;
        w.push_digits(magnitude, digits);
        w.buf.copy_within(start + 1..start + 1 + int_len, start);
        w.buf[start + int_len] = b'.';
    } else {
        w.push_slice(b"0.");
        w.push_zeros(exponent as usize - digits);
        w.push_digits(magnitude, digits);
    }
}

/// Cursor over a buffer whose capacity has already been checked.
struct AsciiWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl AsciiWriter<'_> {
    #[inline]
    fn push(&mut self, byte: u8) {
        self.buf[self.pos] = byte;
        self.pos += 1;
    }

    #[inline]
    fn push_slice(&mut self, bytes: &[u8]) {
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
    }

    #[inline]
    fn push_zeros(&mut self, count: usize) {
        self.buf[self.pos..self.pos + count].fill(b'0');
        self.pos += count;
    }

    /// Write exactly `digits` digits of `value`, two at a time from the end.
    fn push_digits(&mut self, mut value: u64, digits: usize) {
        let end = self.pos + digits;
        let mut cursor = end;
        while value >= 100 {
            let pair = (value % 100) as usize * 2;
            value /= 100;
            cursor -= 2;
            self.buf[cursor..cursor + 2].copy_from_slice(&DIGIT_PAIRS[pair..pair + 2]);
        }
        if value >= 10 {
            let pair = value as usize * 2;
            cursor -= 2;
            self.buf[cursor..cursor + 2].copy_from_slice(&DIGIT_PAIRS[pair..pair + 2]);
        } else {
            cursor -= 1;
            self.buf[cursor] = b'0' + value as u8;
        }
        self.pos = end;
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Decimal64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; MAX_ASCII_LEN];
        let len = self.write_ascii(&mut buf).map_err(|_| fmt::Error)?;
        let text = std::str::from_utf8(&buf[..len]).map_err(|_| fmt::Error)?;
        f.pad(text)
    }
}
