use serde::{Deserialize, Serialize};

use crate::core::{DataRange, Viewport};
use crate::error::{ChartError, ChartResult};

const PIXEL_TOLERANCE: f64 = 1e-6;

/// Immutable affine map from a data domain onto a pixel interval.
///
/// The pixel interval may be descending; the y axis maps onto
/// `[height, 0]` so larger values land higher on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain: DataRange,
    pixel_start: f64,
    pixel_end: f64,
}

impl LinearScale {
    pub fn new(domain: DataRange, pixel_start: f64, pixel_end: f64) -> ChartResult<Self> {
        validate_domain(domain)?;
        if !pixel_start.is_finite() || !pixel_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale pixel range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain,
            pixel_start,
            pixel_end,
        })
    }

    /// Horizontal scale over `[0, viewport.width]`.
    pub fn horizontal(domain: DataRange, viewport: Viewport) -> ChartResult<Self> {
        Self::new(domain, 0.0, f64::from(viewport.validate()?.width))
    }

    /// Vertical scale over `[viewport.height, 0]`.
    pub fn vertical(domain: DataRange, viewport: Viewport) -> ChartResult<Self> {
        Self::new(domain, f64::from(viewport.validate()?.height), 0.0)
    }

    #[must_use]
    pub fn domain(self) -> DataRange {
        self.domain
    }

    #[must_use]
    pub fn pixel_range(self) -> (f64, f64) {
        (self.pixel_start, self.pixel_end)
    }

    /// Same domain, new pixel interval.
    pub fn with_pixel_range(self, pixel_start: f64, pixel_end: f64) -> ChartResult<Self> {
        Self::new(self.domain, pixel_start, pixel_end)
    }

    /// Same pixel interval, new domain.
    pub fn with_domain(self, domain: DataRange) -> ChartResult<Self> {
        Self::new(domain, self.pixel_start, self.pixel_end)
    }

    /// Maps `value` to a pixel. Values outside the domain extrapolate.
    ///
    /// Differences are taken on halved operands, so any finite value maps to
    /// a finite pixel even when `value - domain.min` would overflow.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let half_span = self.domain.max / 2.0 - self.domain.min / 2.0;
        let normalized = (value / 2.0 - self.domain.min / 2.0) / half_span;
        self.pixel_start + normalized * (self.pixel_end - self.pixel_start)
    }

    /// Inverse of `map`. A zero-width pixel interval maps everything to `domain.min`.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let pixel_span = self.pixel_end - self.pixel_start;
        if pixel_span == 0.0 {
            return self.domain.min;
        }
        let normalized = (pixel - self.pixel_start) / pixel_span;
        self.domain.min + normalized * self.domain.span()
    }

    /// Whether `pixel` falls inside the pixel interval, in either orientation.
    ///
    /// Endpoints are matched within `PIXEL_TOLERANCE` so a tick computed as
    /// `n * step` is not lost to rounding at the surface edge.
    #[must_use]
    pub fn contains_pixel(self, pixel: f64) -> bool {
        let low = self.pixel_start.min(self.pixel_end) - PIXEL_TOLERANCE;
        let high = self.pixel_start.max(self.pixel_end) + PIXEL_TOLERANCE;
        pixel >= low && pixel <= high
    }
}

fn validate_domain(domain: DataRange) -> ChartResult<()> {
    let span = domain.span();
    let halves_apart = domain.max / 2.0 > domain.min / 2.0;
    if !domain.min.is_finite() || !domain.max.is_finite() || !span.is_finite() || !halves_apart {
        return Err(ChartError::InvalidData(
            "scale domain must be finite and non-zero".to_owned(),
        ));
    }
    Ok(())
}
