use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, DataRange, PathDescription, Tick, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Surface;

use super::LineChart;

/// Which optional parts of the chart are currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerVisibility {
    pub dots: bool,
    pub grid_lines: bool,
    pub line: bool,
    pub shaded_area: bool,
    pub goal: bool,
}

/// Serializable deterministic state snapshot used by regression tests and
/// host diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    pub points: Vec<DataPoint>,
    pub x_domain: DataRange,
    pub y_domain: DataRange,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub polyline: PathDescription,
    pub filled_region: PathDescription,
    pub goal: Option<f64>,
    pub layers: LayerVisibility,
    pub dot_count: usize,
}

impl ChartSnapshot {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse snapshot json: {e}")))
    }
}

impl<S: Surface> LineChart<S> {
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot {
            viewport: self.model.viewport,
            points: self.model.series.points().to_vec(),
            x_domain: self.model.x_scale.domain(),
            y_domain: self.model.y_scale.domain(),
            x_ticks: self.model.x_ticks.clone(),
            y_ticks: self.model.y_ticks.clone(),
            polyline: self.model.polyline.clone(),
            filled_region: self.model.filled_region.clone(),
            goal: self.config.active_goal(),
            layers: LayerVisibility {
                dots: self.config.show_dots,
                grid_lines: self.config.show_grid_lines,
                line: self.config.show_line,
                shaded_area: self.config.show_shaded_area,
                goal: self.config.show_goal,
            },
            dot_count: self.handles.dots.len(),
        }
    }

    /// Serializes the snapshot as pretty JSON for fixture-based checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        self.snapshot().to_json_pretty()
    }
}
