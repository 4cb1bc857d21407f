//! Text and number formatting for SVG output.

/// Abbreviation suffixes for axis tick labels, largest first.
pub const TICK_SUFFIXES: &[(f64, &str)] = &[(1e9, "G"), (1e6, "M"), (1e3, "k")];

/// Abbreviation suffixes for chart totals, largest first.
pub const TOTAL_SUFFIXES: &[(f64, &str)] = &[(1e12, "T"), (1e9, "G"), (1e6, "M"), (1e3, "k")];

/// Escape text for use inside SVG/HTML text nodes and attribute values.
#[must_use]
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Significant digits kept by [`format_plain`]; drops float noise such as
/// `0.1 + 0.2 = 0.30000000000000004`.
const PLAIN_DIGITS: i32 = 12;

/// Shortest decimal rendering: `10.0` → `"10"`, `0.5` → `"0.5"`,
/// `1e-11` → `"0.00000000001"`.
#[must_use]
pub fn format_plain(value: f64) -> String {
    let rounded = round_significant(value, PLAIN_DIGITS);
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

/// Round to `digits` significant digits.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_significant(value: f64, digits: i32) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let magnitude = value.abs().log10().floor() as i32;
    let factor = 10f64.powi(digits - 1 - magnitude);
    if !factor.is_normal() {
        return value;
    }
    (value * factor).round() / factor
}

/// Three-significant-digit number with an optional magnitude suffix.
///
/// `suffixes` must be sorted by threshold, largest first. A value is shown
/// with the first suffix whose threshold it reaches; values below every
/// threshold are shown plain.
#[must_use]
pub fn format_abbreviated(value: f64, suffixes: &[(f64, &str)]) -> String {
    for (i, &(threshold, suffix)) in suffixes.iter().enumerate() {
        if value < threshold {
            continue;
        }
        let scaled = round_significant(value / threshold, 3);
        // 999.96k rounds up to 1000k: show it as 1M instead
        if scaled >= 1000.0 && i > 0 {
            let (bigger, bigger_suffix) = suffixes[i - 1];
            let promoted = round_significant(value / bigger, 3);
            return format!("{}{bigger_suffix}", format_plain(promoted));
        }
        return format!("{}{suffix}", format_plain(scaled));
    }
    format_plain(round_significant(value, 3))
}

/// Tick label: plain below 1,000, otherwise k/M/G abbreviated.
#[must_use]
pub fn format_tick(value: f64) -> String {
    format_abbreviated(value, TICK_SUFFIXES)
}

/// Total shown next to a chart title: integers verbatim below 1,000,
/// otherwise three significant digits with a k/M/G/T suffix.
#[must_use]
pub fn format_total(value: f64) -> String {
    if value.abs() < 1000.0 && value.fract() == 0.0 {
        return format_plain(value);
    }
    format_abbreviated(value, TOTAL_SUFFIXES)
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
