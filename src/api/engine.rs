use crate::core::{DataPoint, LinearScale, PathDescription, Tick, Viewport};
use crate::render::Surface;

use super::{LineChartConfig, chart_model::ChartModel, element_handles::ChartHandles};

/// Live line/area chart bound to one drawing surface.
///
/// Every mutation recomputes domains, scales, ticks and geometry in
/// dependency order, then swaps exactly the surface elements that changed.
/// The chart owns every handle it draws and never touches foreign elements.
pub struct LineChart<S: Surface> {
    pub(super) surface: S,
    pub(super) config: LineChartConfig,
    pub(super) model: ChartModel,
    pub(super) handles: ChartHandles,
}

impl<S: Surface> LineChart<S> {
    #[must_use]
    pub fn config(&self) -> &LineChartConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.model.viewport
    }

    /// Samples, sorted by x.
    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        self.model.series.points()
    }

    #[must_use]
    pub fn x_scale(&self) -> LinearScale {
        self.model.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> LinearScale {
        self.model.y_scale
    }

    #[must_use]
    pub fn x_ticks(&self) -> &[Tick] {
        &self.model.x_ticks
    }

    #[must_use]
    pub fn y_ticks(&self) -> &[Tick] {
        &self.model.y_ticks
    }

    #[must_use]
    pub fn polyline(&self) -> &PathDescription {
        &self.model.polyline
    }

    #[must_use]
    pub fn filled_region(&self) -> &PathDescription {
        &self.model.filled_region
    }

    /// Current goal value; `None` while goal display is off.
    #[must_use]
    pub fn goal(&self) -> Option<f64> {
        self.config.active_goal()
    }

    /// Number of point markers currently on the surface.
    #[must_use]
    pub fn dot_count(&self) -> usize {
        self.handles.dots.len()
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }
}
