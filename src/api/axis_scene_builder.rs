use tracing::trace;

use crate::core::{PathDescription, Tick, Vertex};
use crate::error::ChartResult;
use crate::render::{PathStyle, SceneLayer, Surface, TextExtent, TextHAlign, TextStyle, TextVAlign};

use super::LineChart;

const GRID_LINE_WIDTH: f64 = 1.0;
const MAIN_AXIS_WIDTH: f64 = 2.0;

impl<S: Surface> LineChart<S> {
    /// Replaces gridlines, tick labels and main axes with ones for the
    /// current ticks.
    ///
    /// Each label is drawn first and measured; its gridline (or the main
    /// axis, for the zero tick) starts past the measured extent.
    pub(super) fn draw_axes(&mut self) -> ChartResult<()> {
        self.clear_axes();

        let width = f64::from(self.model.viewport.width);
        let height = f64::from(self.model.viewport.height);
        let padding = self.config.text_padding;
        let label_style = TextStyle::new(
            self.config.font_height,
            self.config.label_color,
            SceneLayer::Axis,
        );

        let y_ticks = self.model.y_ticks.clone();
        for tick in &y_ticks {
            let style = label_style
                .aligned(TextHAlign::Left, TextVAlign::Middle)
                .with_bold(tick.is_zero);
            let extent = self.draw_tick_label(Vertex::new(padding, tick.pixel), tick, &style)?;
            let line_start = extent.width + 2.0 * padding;
            let path = PathDescription::segment(line_start, tick.pixel, width, tick.pixel);
            self.draw_tick_line(&path, tick.is_zero)?;
        }

        let x_ticks = self.model.x_ticks.clone();
        for tick in &x_ticks {
            let style = label_style
                .aligned(TextHAlign::Center, TextVAlign::Bottom)
                .with_bold(tick.is_zero);
            let anchor = Vertex::new(tick.pixel, height - padding);
            let extent = self.draw_tick_label(anchor, tick, &style)?;
            let line_end = height - extent.height - 2.0 * padding;
            let path = PathDescription::segment(tick.pixel, 0.0, tick.pixel, line_end);
            self.draw_tick_line(&path, tick.is_zero)?;
        }

        trace!(
            grid = self.handles.grid.len(),
            axes = self.handles.axes.len(),
            "draw axes"
        );
        Ok(())
    }

    pub(super) fn clear_axes(&mut self) {
        self.handles.grid.clear_from(&mut self.surface);
        self.handles.axes.clear_from(&mut self.surface);
    }

    pub(super) fn clear_grid_lines(&mut self) {
        self.handles.grid.clear_from(&mut self.surface);
    }

    fn draw_tick_label(
        &mut self,
        anchor: Vertex,
        tick: &Tick,
        style: &TextStyle,
    ) -> ChartResult<TextExtent> {
        let handle = self.surface.draw_text(anchor, &tick.label, style)?;
        self.handles.axes.push(handle);
        Ok(self
            .surface
            .measure_text(handle)
            .unwrap_or_else(TextExtent::zero))
    }

    /// The zero tick gets the bold main axis; other ticks get a gridline
    /// when gridlines are enabled.
    fn draw_tick_line(&mut self, path: &PathDescription, is_zero: bool) -> ChartResult<()> {
        if is_zero {
            let style =
                PathStyle::stroked(self.config.axis_color, MAIN_AXIS_WIDTH, SceneLayer::Axis);
            let handle = self.surface.draw_path(path, &style)?;
            self.handles.axes.push(handle);
        } else if self.config.show_grid_lines {
            let style =
                PathStyle::stroked(self.config.grid_color, GRID_LINE_WIDTH, SceneLayer::Grid);
            let handle = self.surface.draw_path(path, &style)?;
            self.handles.grid.push(handle);
        }
        Ok(())
    }
}
