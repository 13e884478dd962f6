//! Fixed-width text report of all speedups.

use crate::ratio::RatioTable;
use std::io::{self, Write};

/// Width of every report column
pub const COLUMN_WIDTH: usize = 12;

/// Significant digits of the speedup column
pub const SPEEDUP_PRECISION: usize = 3;

/// Write a header and one row per (separator length, string length, string count)
pub fn write_table<W: Write>(table: &RatioTable, out: &mut W) -> io::Result<()> {
    let w = COLUMN_WIDTH;
    writeln!(
        out,
        "{:>w$}{:>w$}{:>w$}{:>w$}",
        "len_separator", "len_string", "n_strings", "speedup"
    )?;
    for (point, ratio) in table.rows() {
        writeln!(
            out,
            "{:>w$}{:>w$}{:>w$}{:>w$}",
            point.separator_len,
            point.string_len,
            point.string_count,
            format_general(ratio, SPEEDUP_PRECISION)
        )?;
    }
    Ok(())
}

/// Format with `precision` significant digits.
///
/// Uses scientific notation when the decimal exponent is below -4 or at
/// least `precision - 1`, fixed notation otherwise. Trailing zeros are
/// dropped, but fixed notation always keeps one digit after the point:
/// `2.0`, `1.23`, `0.0123`, `1.23e+02`, `1e-05`.
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let precision = precision.max(1);
    // rounding to `precision` digits first decides the exponent (99.99 -> 1.00e2)
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let decimal_point = exponent + 1;

    if decimal_point <= -4 || decimal_point > precision as i32 - 1 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.abs()
        )
    } else {
        let decimals = (precision as i32 - decimal_point) as usize;
        let fixed = format!("{:.*}", decimals, value);
        let trimmed = trim_fraction(&fixed);
        if trimmed.contains('.') {
            trimmed.to_string()
        } else {
            format!("{trimmed}.0")
        }
    }
}

/// Drop trailing zeros of the fractional part, and the point if nothing is left
fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::key::{BenchmarkKey, Point};
    use crate::ratio::RatioConfig;

    #[test]
    fn general_format_matches_known_values() {
        let cases = [
            (2.0, "2.0"),
            (1.5, "1.5"),
            (1.234, "1.23"),
            (12.0, "12.0"),
            (123.0, "1.23e+02"),
            (99.99, "1e+02"),
            (999.6, "1e+03"),
            (0.5, "0.5"),
            (0.0123, "0.0123"),
            (0.0001234, "0.000123"),
            (1.234e-5, "1.23e-05"),
            (1e-5, "1e-05"),
            (1234.5, "1.23e+03"),
            (1.0, "1.0"),
            (0.99995, "1.0"),
            (0.0, "0.0"),
            (-2.5, "-2.5"),
        ];
        for (value, expected) in cases {
            assert_eq!(format_general(value, 3), expected, "{value}");
        }
        assert_eq!(format_general(f64::INFINITY, 3), "inf");
        assert_eq!(format_general(f64::NAN, 3), "nan");
    }

    #[test]
    fn table_has_header_and_one_row_per_combination() {
        let mut estimates = Vec::new();
        for len in [10, 100, 1000] {
            for n in [10, 100] {
                for sep in [4, 10] {
                    let point = Point::new(len, n, sep);
                    estimates.push((BenchmarkKey::new(point, "old"), 3.0));
                    estimates.push((BenchmarkKey::new(point, "new"), 2.0));
                }
            }
        }
        let table =
            RatioTable::compute(&Dataset::from_estimates(estimates), &RatioConfig::default())
                .unwrap();

        let mut out = Vec::new();
        write_table(&table, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 1 + 3 * 2 * 2);
        assert_eq!(
            lines[0],
            "len_separator  len_string   n_strings     speedup"
        );
        assert_eq!(
            lines[1],
            "           4          10          10         1.5"
        );
        assert!(lines[1..].iter().all(|l| l.len() == 4 * COLUMN_WIDTH));
    }
}
