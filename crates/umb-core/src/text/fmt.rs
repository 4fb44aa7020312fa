// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Locale-independent fixed-precision number rendering and parsing.
//!
//! Output is deterministic on every host: the decimal separator is always
//! `.` and grouping is never used. Values closer to a whole number than
//! [`EPSILON`](crate::math::EPSILON) render in integer form.

use crate::math::EPSILON;
use thiserror::Error;

/// Milliseconds per second.
pub const SECOND_MS: u64 = 1000;
/// Milliseconds per minute.
pub const MINUTE_MS: u64 = 60 * SECOND_MS;
/// Milliseconds per hour.
pub const HOUR_MS: u64 = 60 * MINUTE_MS;

const KB: u64 = 1 << 10;
const MB: u64 = 1 << 20;

/// Error raised when a numeric string fails to parse.
///
/// Numeric parsing is deliberately fail-fast, unlike color parsing: callers
/// validate upstream and propagate this with `?`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The input was not a valid integer literal.
    #[error("invalid integer literal {0:?}")]
    Int(String),
    /// The input was not a valid float literal.
    #[error("invalid float literal {0:?}")]
    Float(String),
}

/// Formats a float with at least `lead` integer digits and exactly
/// `decimals` fraction digits.
///
/// Values whose fractional remainder is below [`EPSILON`] print in integer
/// form instead — no decimal point, no trailing zeros. The integer digits
/// are zero-padded on the left; the sign is not counted as a digit.
///
/// # Examples
///
/// ```
/// use umb_core::text::fmt_float;
/// assert_eq!(fmt_float(3.14159, 1, 2), "3.14");
/// assert_eq!(fmt_float(3.14159, 3, 2), "003.14");
/// assert_eq!(fmt_float(2.0, 1, 3), "2");
/// ```
pub fn fmt_float(value: f32, lead: usize, decimals: usize) -> String {
    if value - value.floor() < EPSILON {
        return fmt_int(value as i64, lead);
    }
    pad_integer_digits(&format!("{value:.decimals$}"), lead)
}

/// The common three-decimal form of [`fmt_float`].
pub fn fmt_float3(value: f32) -> String {
    fmt_float(value, 0, 3)
}

/// Formats an integer zero-padded to at least `digits` digits.
///
/// Wider values are never truncated; the sign is not counted as a digit.
///
/// # Examples
///
/// ```
/// use umb_core::text::fmt_int;
/// assert_eq!(fmt_int(7, 3), "007");
/// assert_eq!(fmt_int(-7, 3), "-007");
/// assert_eq!(fmt_int(12345, 2), "12345");
/// ```
pub fn fmt_int(value: i64, digits: usize) -> String {
    let width = if value < 0 { digits + 1 } else { digits };
    format!("{value:0width$}")
}

/// Zero-pads the integer part of an already formatted number.
fn pad_integer_digits(formatted: &str, lead: usize) -> String {
    let (sign, rest) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let int_len = rest.find('.').unwrap_or(rest.len());
    if int_len >= lead {
        return formatted.to_owned();
    }

    let mut out = String::with_capacity(formatted.len() + lead - int_len);
    out.push_str(sign);
    for _ in 0..lead - int_len {
        out.push('0');
    }
    out.push_str(rest);
    out
}

/// Parses a trimmed integer literal.
pub fn parse_int(s: &str) -> Result<i32, ParseError> {
    s.trim().parse().map_err(|_| ParseError::Int(s.to_owned()))
}

/// Parses a trimmed float literal.
pub fn parse_float(s: &str) -> Result<f32, ParseError> {
    s.trim()
        .parse()
        .map_err(|_| ParseError::Float(s.to_owned()))
}

/// Parses a slice of float literals, failing on the first bad entry.
pub fn parse_floats(items: &[&str]) -> Result<Vec<f32>, ParseError> {
    items.iter().map(|s| parse_float(s)).collect()
}

/// Renders a byte count as a short human-readable size.
///
/// # Examples
///
/// ```
/// use umb_core::text::fmt::file_size_str;
/// assert_eq!(file_size_str(512), "512b");
/// assert_eq!(file_size_str(1536), "1.5 KB");
/// ```
pub fn file_size_str(bytes: u64) -> String {
    if bytes > MB {
        format!("{} MB", fmt_float(bytes as f32 / MB as f32, 1, 1))
    } else if bytes > KB {
        format!("{} KB", fmt_float(bytes as f32 / KB as f32, 1, 1))
    } else {
        format!("{bytes}b")
    }
}

/// Renders a millisecond count as `HH:MM:SS`.
///
/// # Examples
///
/// ```
/// use umb_core::text::fmt::duration_hms;
/// assert_eq!(duration_hms(3_723_000), "01:02:03");
/// ```
pub fn duration_hms(ms: u64) -> String {
    let hours = ms / HOUR_MS;
    let minutes = (ms % HOUR_MS) / MINUTE_MS;
    let seconds = (ms % MINUTE_MS) / SECOND_MS;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floats_near_whole_numbers_print_as_integers() {
        assert_eq!(fmt_float(2.0, 1, 3), "2");
        assert_eq!(fmt_float(2.000005, 1, 3), "2");
        assert_eq!(fmt_float(-2.0, 1, 3), "-2");
    }

    #[test]
    fn floats_keep_exactly_the_requested_decimals() {
        assert_eq!(fmt_float(3.14159, 1, 2), "3.14");
        assert_eq!(fmt_float(3.14159, 1, 4), "3.1416");
        assert_eq!(fmt_float(0.5, 1, 2), "0.50");
    }

    #[test]
    fn lead_pads_the_integer_part_only() {
        assert_eq!(fmt_float(3.14159, 3, 2), "003.14");
        assert_eq!(fmt_float(-3.14159, 3, 2), "-003.14");
        assert_eq!(fmt_float(123.456, 2, 1), "123.5");
    }

    #[test]
    fn separator_is_always_a_period() {
        // Deterministic regardless of host locale settings.
        let s = fmt_float(1234.5, 1, 1);
        assert_eq!(s, "1234.5");
        assert!(!s.contains(','));
    }

    #[test]
    fn fmt_int_pads_and_never_truncates() {
        assert_eq!(fmt_int(0, 2), "00");
        assert_eq!(fmt_int(7, 3), "007");
        assert_eq!(fmt_int(-7, 3), "-007");
        assert_eq!(fmt_int(12345, 2), "12345");
        assert_eq!(fmt_int(9, 0), "9");
    }

    #[test]
    fn fmt_float3_default() {
        assert_eq!(fmt_float3(0.123456), "0.123");
    }

    #[test]
    fn parsing_trims_whitespace() {
        assert_eq!(parse_int(" 42 "), Ok(42));
        assert_eq!(parse_float(" 2.5 "), Ok(2.5));
    }

    #[test]
    fn parsing_propagates_failures() {
        assert_eq!(parse_int("4x"), Err(ParseError::Int("4x".to_owned())));
        assert_eq!(
            parse_float("oops"),
            Err(ParseError::Float("oops".to_owned()))
        );
        assert!(parse_floats(&["1.0", "bad", "3.0"]).is_err());
        assert_eq!(parse_floats(&["1.0", "2.0"]), Ok(vec![1.0, 2.0]));
    }

    #[test]
    fn file_sizes_pick_sensible_units() {
        assert_eq!(file_size_str(0), "0b");
        assert_eq!(file_size_str(1024), "1024b");
        assert_eq!(file_size_str(1536), "1.5 KB");
        assert_eq!(file_size_str(3 * 1024 * 1024 / 2), "1.5 MB");
    }

    #[test]
    fn durations_render_zero_padded() {
        assert_eq!(duration_hms(0), "00:00:00");
        assert_eq!(duration_hms(59_999), "00:00:59");
        assert_eq!(duration_hms(3_723_000), "01:02:03");
    }
}
