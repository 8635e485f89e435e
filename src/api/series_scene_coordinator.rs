use tracing::trace;

use crate::core::{DataPoint, project_point};
use crate::error::ChartResult;
use crate::render::{PathStyle, SceneLayer, Surface};

use super::LineChart;

const DOT_STROKE_WIDTH: f64 = 1.5;

impl<S: Surface> LineChart<S> {
    /// Replaces the shaded area and the line with the current geometry.
    ///
    /// Hidden parts are only cleared.
    pub(super) fn draw_series(&mut self) -> ChartResult<()> {
        self.handles.area.clear_from(&mut self.surface);
        self.handles.line.clear_from(&mut self.surface);

        if self.config.show_shaded_area {
            let style = PathStyle::filled(self.config.fill_color, SceneLayer::Area);
            let handle = self.surface.draw_path(&self.model.filled_region, &style)?;
            self.handles.area.push(handle);
        }
        if self.config.show_line {
            let style = PathStyle::stroked(
                self.config.line_stroke,
                self.config.line_width,
                SceneLayer::Line,
            );
            let handle = self.surface.draw_path(&self.model.polyline, &style)?;
            self.handles.line.push(handle);
        }
        trace!(
            vertices = self.model.polyline.len(),
            area = self.config.show_shaded_area,
            line = self.config.show_line,
            "draw series"
        );
        Ok(())
    }

    /// Replaces every marker with one per current sample.
    pub(super) fn draw_all_dots(&mut self) -> ChartResult<()> {
        self.clear_dots();
        let points = self.model.series.points().to_vec();
        for point in points {
            self.draw_dot(point)?;
        }
        trace!(dots = self.handles.dots.len(), "draw all dots");
        Ok(())
    }

    /// Draws one marker at `point` with the current scales, leaving existing
    /// markers where they are.
    pub(super) fn append_dot(&mut self, point: DataPoint) -> ChartResult<()> {
        self.draw_dot(point)
    }

    pub(super) fn clear_dots(&mut self) {
        self.handles.dots.clear_from(&mut self.surface);
    }

    fn dot_style(&self) -> PathStyle {
        PathStyle::filled(self.config.dot_color, SceneLayer::Markers)
            .with_stroke(self.config.dot_stroke, DOT_STROKE_WIDTH)
    }

    fn draw_dot(&mut self, point: DataPoint) -> ChartResult<()> {
        let center = project_point(point, self.model.x_scale, self.model.y_scale);
        let style = self.dot_style();
        let handle = self
            .surface
            .draw_circle(center, self.config.dot_radius, &style)?;
        self.handles.dots.push(handle);
        Ok(())
    }
}
