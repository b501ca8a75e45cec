// ============================================================================
// Text Codec
// ASCII parsing and formatting for Decimal64
// ============================================================================
//
// Both directions work on byte slices so callers can parse a field out of a
// larger message or format into a reusable buffer without allocating.

mod format;
mod parse;

pub use format::MAX_ASCII_LEN;
