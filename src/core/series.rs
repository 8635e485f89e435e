use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::DataPoint;

/// Ordered, never-empty sample sequence backing one chart.
///
/// Points stay sorted by `x` after every mutation. The sort is stable, so
/// samples sharing an `x` keep their insertion order. Serialized as a plain
/// point list; deserializing goes through [`DataSeries::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<DataPoint>", into = "Vec<DataPoint>")]
pub struct DataSeries {
    points: Vec<DataPoint>,
}

impl DataSeries {
    /// Builds a series from owned points, substituting the origin when empty.
    #[must_use]
    pub fn new(points: Vec<DataPoint>) -> Self {
        let mut series = Self { points };
        series.ensure_non_empty();
        series.sort();
        series
    }

    /// Interprets `values` as `[x1, y1, x2, y2, ...]`.
    ///
    /// A trailing unpaired value is ignored and pairs with a non-finite
    /// coordinate are dropped.
    #[must_use]
    pub fn from_flat(values: &[f64]) -> Self {
        if values.len() % 2 == 1 {
            warn!(len = values.len(), "ignoring unpaired trailing value");
        }

        let mut points = Vec::with_capacity(values.len() / 2);
        for pair in values.chunks_exact(2) {
            let point = DataPoint::new(pair[0], pair[1]);
            if !point.is_finite() {
                warn!(x = pair[0], y = pair[1], "dropping non-finite sample");
                continue;
            }
            points.push(point);
        }
        Self::new(points)
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Appends one sample and restores the x ordering.
    pub fn push(&mut self, point: DataPoint) {
        self.points.push(point);
        self.sort();
    }

    /// Slides the window by one sample, keeping the length.
    ///
    /// The evicted sample is the front of the window as it stood before
    /// `point` arrived, so a late sample with the smallest `x` is kept.
    pub fn shift(&mut self, point: DataPoint) -> DataPoint {
        let evicted = self.points.remove(0);
        self.points.push(point);
        self.sort();
        evicted
    }

    fn sort(&mut self) {
        self.points.sort_by(|left, right| left.x.total_cmp(&right.x));
    }

    fn ensure_non_empty(&mut self) {
        if self.points.is_empty() {
            self.points.push(DataPoint::origin());
        }
    }
}

impl Default for DataSeries {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<DataPoint>> for DataSeries {
    fn from(points: Vec<DataPoint>) -> Self {
        Self::new(points)
    }
}

impl From<DataSeries> for Vec<DataPoint> {
    fn from(series: DataSeries) -> Self {
        series.points
    }
}
