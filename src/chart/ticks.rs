//! "Nice number" Y axis ticks.
//!
//! The increment follows a 1/2/5-per-decade cadence derived from the leading
//! digit of the maximum value, and ticks run from one increment up to the
//! maximum.

use serde::Serialize;

use crate::output::svg::format_tick;

/// Relative slack when comparing a tick value against the maximum, so that
/// `3 × 0.1` still counts as reaching `0.3`.
const TICK_TOLERANCE: f64 = 1e-9;

/// Y axis ticks for one maximum value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ticks {
    /// Distance between ticks; `None` for a degenerate maximum
    pub increment: Option<f64>,
    /// Formatted labels for `increment, 2 × increment, ...`
    pub labels: Vec<String>,
}

impl Ticks {
    /// Generate ticks for `max_value`.
    #[must_use]
    pub fn for_max(max_value: f64) -> Self {
        let Some((base, exp)) = base_exp(max_value) else {
            return Self {
                increment: None,
                labels: Vec::new(),
            };
        };

        let increment = if base < 2.0 {
            5.0 * 10f64.powi(exp - 1)
        } else {
            10f64.powi(exp)
        };
        // near the bottom of the f64 range the increment underflows
        if !increment.is_normal() {
            return Self {
                increment: None,
                labels: Vec::new(),
            };
        }

        let labels = (1..=last_tick(max_value, increment))
            .map(|k| tick_value(increment, k))
            .take_while(|&v| within(v, max_value))
            .map(format_tick)
            .collect();

        Self {
            increment: Some(increment),
            labels,
        }
    }

    /// Numeric tick values paired with their labels.
    pub fn values(&self) -> impl Iterator<Item = (f64, &str)> {
        let increment = self.increment.unwrap_or(0.0);
        self.labels
            .iter()
            .zip(1..)
            .map(move |(label, k)| (tick_value(increment, k), label.as_str()))
    }
}

/// Whether `value` lies at or below `max` (with float tolerance).
#[must_use]
pub fn within(value: f64, max: f64) -> bool {
    value <= max * (1.0 + TICK_TOLERANCE)
}

/// Upper bound for the tick index; the tolerance check decides the last one.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn last_tick(max_value: f64, increment: f64) -> u32 {
    (max_value / increment).floor() as u32 + 1
}

fn tick_value(increment: f64, k: u32) -> f64 {
    increment * f64::from(k)
}

/// Split a positive value into `base ∈ [1, 10)` and exponent, with
/// `value = base × 10^exp`. `None` for zero, negative, subnormal, or non-finite input.
#[allow(clippy::cast_possible_truncation)]
fn base_exp(value: f64) -> Option<(f64, i32)> {
    if !value.is_normal() || value <= 0.0 {
        return None;
    }
    let mut exp = value.log10().trunc() as i32;
    let mut base = value / 10f64.powi(exp);
    if base < 1.0 {
        base *= 10.0;
        exp -= 1;
    } else if base >= 10.0 {
        // log10 of an exact power of ten may land just below the integer
        base /= 10.0;
        exp += 1;
    }
    Some((base, exp))
}

#[cfg(test)]
#[path = "ticks_tests.rs"]
mod tests;
