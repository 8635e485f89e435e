use serde::{Deserialize, Serialize};

use crate::core::DataRange;
use crate::core::domain::DEFAULT_MIN_DOMAIN_SPAN;

/// Axis a tick belongs to. Decides the label precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickAxis {
    /// Vertical gridlines, labelled with whole numbers.
    X,
    /// Horizontal gridlines, labelled with one decimal.
    Y,
}

impl TickAxis {
    #[must_use]
    pub const fn label_decimals(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
        }
    }
}

/// One labelled gridline position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub value: f64,
    pub pixel: f64,
    pub label: String,
    /// Set on the value-zero tick, which anchors the main axis line.
    pub is_zero: bool,
}

/// Gridline spacing for a numeric span.
///
/// The multiplier ladder is `index^2 + 1` over six buckets of the mantissa
/// (1, 2, 5, 10, 17, 26), applied to `10^(floor(log10(span)) - 1)`.
#[must_use]
pub fn tick_step(span: f64) -> f64 {
    let span = if span.is_finite() && span > 0.0 {
        span
    } else {
        DEFAULT_MIN_DOMAIN_SPAN
    };

    let magnitude = span.log10();
    let exponent = magnitude.floor() - 1.0;
    let base = 10f64.powf(exponent);
    let fraction = magnitude - magnitude.floor();
    let index = ((fraction * 6.0).floor() as i64).clamp(0, 5);
    let multiplier = (index * index + 1) as f64;
    base * multiplier
}

/// Candidate tick values `n * step` for every integer `n` in
/// `[floor(min / step), floor(max / step)]`.
///
/// The first candidate may sit below `domain.min`; pixel clipping is the
/// caller's job.
#[must_use]
pub fn tick_values(domain: DataRange, step: f64) -> Vec<(i64, f64)> {
    if !step.is_finite() || step <= 0.0 || !domain.min.is_finite() || !domain.max.is_finite() {
        return Vec::new();
    }

    let start = (domain.min / step).floor() as i64;
    let end = (domain.max / step).floor() as i64;
    (start..=end).map(|n| (n, n as f64 * step)).collect()
}

/// Formats a tick label for `axis`, never producing `-0`.
#[must_use]
pub fn format_tick_label(value: f64, axis: TickAxis) -> String {
    let decimals = axis.label_decimals();
    let text = format!("{value:.decimals$}");
    match text.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_owned(),
        _ => text,
    }
}
