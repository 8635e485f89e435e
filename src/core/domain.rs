use crate::core::{DataPoint, DataRange};

/// Span substituted for a degenerate (zero-width) range.
pub const DEFAULT_MIN_DOMAIN_SPAN: f64 = 1.0;

/// Returns min/max of `accessor` over `points` in one pass.
///
/// An empty slice yields `[0, 0]`; callers normally hold a non-empty series.
#[must_use]
pub fn raw_range<F>(points: &[DataPoint], accessor: F) -> DataRange
where
    F: Fn(&DataPoint) -> f64,
{
    let mut iter = points.iter().map(accessor);
    let Some(first) = iter.next() else {
        return DataRange::new(0.0, 0.0);
    };

    let (min, max) = iter.fold((first, first), |(min, max), value| {
        (min.min(value), max.max(value))
    });
    DataRange { min, max }
}

#[must_use]
pub fn x_range(points: &[DataPoint]) -> DataRange {
    raw_range(points, |point| point.x)
}

/// Raw y range folded with the active goal and the zero baseline.
#[must_use]
pub fn y_range_with_extras(points: &[DataPoint], goal: Option<f64>) -> DataRange {
    let mut range = raw_range(points, |point| point.y);
    if let Some(goal) = goal.filter(|value| value.is_finite()) {
        range = range.including(goal);
    }
    range.including(0.0)
}

/// Largest magnitude a plot domain bound may take. Keeps every domain span
/// finite, so scales and tick planning never see an overflowed span.
pub const MAX_DOMAIN_MAGNITUDE: f64 = f64::MAX / 4.0;

/// Widens a zero-span range symmetrically to `min_span`.
///
/// The widening grows with the magnitude of the bounds: far from zero a
/// half-width of `min_span / 2` would round back onto the bound itself.
/// Subnormal spans that vanish once halved count as zero.
#[must_use]
pub fn guard_span(range: DataRange, min_span: f64) -> DataRange {
    if range.max / 2.0 > range.min / 2.0 {
        return range;
    }
    let min_span = if min_span.is_finite() && min_span > 0.0 {
        min_span
    } else {
        DEFAULT_MIN_DOMAIN_SPAN
    };
    let magnitude = range.min.abs().max(range.max.abs());
    let half = (min_span / 2.0).max(magnitude * f64::EPSILON * 4.0);
    DataRange {
        min: range.min - half,
        max: range.max + half,
    }
}

/// Expands `range` by fractions of its own span on each side.
///
/// `pad_before` extends below `min`, `pad_after` above `max`. Negative or
/// non-finite fractions count as zero. Bounds are clamped to
/// `MAX_DOMAIN_MAGNITUDE` before and after padding, so the result always has
/// a finite, positive span.
#[must_use]
pub fn padded_domain(range: DataRange, pad_before: f64, pad_after: f64, min_span: f64) -> DataRange {
    let base = clamp_bounds(guard_span(clamp_bounds(range), min_span));
    let span = base.span();
    clamp_bounds(DataRange {
        min: base.min - span * sanitize_ratio(pad_before),
        max: base.max + span * sanitize_ratio(pad_after),
    })
}

fn clamp_bounds(range: DataRange) -> DataRange {
    DataRange {
        min: range.min.clamp(-MAX_DOMAIN_MAGNITUDE, MAX_DOMAIN_MAGNITUDE),
        max: range.max.clamp(-MAX_DOMAIN_MAGNITUDE, MAX_DOMAIN_MAGNITUDE),
    }
}

fn sanitize_ratio(ratio: f64) -> f64 {
    if ratio.is_finite() { ratio.max(0.0) } else { 0.0 }
}
