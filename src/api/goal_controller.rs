use tracing::{debug, trace};

use crate::core::{PathDescription, TickAxis, Vertex, format_tick_label};
use crate::error::{ChartError, ChartResult};
use crate::render::{PathStyle, SceneLayer, Surface, TextExtent, TextHAlign, TextStyle, TextVAlign};

use super::{LineChart, LineChartConfig};

const GOAL_LINE_WIDTH: f64 = 1.5;

impl<S: Surface> LineChart<S> {
    /// Moves the goal threshold.
    ///
    /// Does nothing while goal display is off. Otherwise the y domain is
    /// recomputed around the new goal, then ticks, series and the goal
    /// indicator are redrawn. The x scale is untouched.
    pub fn set_goal(&mut self, goal: f64) -> ChartResult<()> {
        if !self.config.show_goal {
            trace!(goal, "goal display off, ignoring set_goal");
            return Ok(());
        }
        if !goal.is_finite() {
            return Err(ChartError::InvalidData("goal must be finite".to_owned()));
        }
        let mut config = self.config.clone();
        config.goal = goal;
        debug!(goal, "set goal");
        self.relayout_for_goal(config)
    }

    /// Shows or hides the goal indicator.
    ///
    /// The goal only takes part in the y domain while shown, so this also
    /// recomputes the y scale.
    pub fn set_show_goal(&mut self, show: bool) -> ChartResult<()> {
        if self.config.show_goal == show {
            return Ok(());
        }
        let mut config = self.config.clone();
        config.show_goal = show;
        debug!(show, goal = config.goal, "toggle goal");
        self.relayout_for_goal(config)
    }

    fn relayout_for_goal(&mut self, config: LineChartConfig) -> ChartResult<()> {
        let mut staged = self.model.clone();
        staged.relayout_y(&config)?;
        self.commit(config, staged, Self::redraw_data_layers)
    }

    /// Replaces the goal label and line. Clears them while goal display is off.
    ///
    /// The label is drawn right-aligned at the viewport edge; the line then
    /// runs from the left edge up to the measured label.
    pub(super) fn draw_goal(&mut self) -> ChartResult<()> {
        self.handles.goal.clear_from(&mut self.surface);
        let Some(goal) = self.config.active_goal() else {
            return Ok(());
        };

        let width = f64::from(self.model.viewport.width);
        let padding = self.config.goal_text_padding;
        let y = self.model.y_scale.map(goal);

        let style = TextStyle::new(
            self.config.font_height,
            self.config.goal_color,
            SceneLayer::Goal,
        )
        .aligned(TextHAlign::Right, TextVAlign::Middle);
        let label = format_tick_label(goal, TickAxis::Y);
        let text = self
            .surface
            .draw_text(Vertex::new(width - padding, y), &label, &style)?;
        self.handles.goal.push(text);
        let extent = self
            .surface
            .measure_text(text)
            .unwrap_or_else(TextExtent::zero);

        let line_end = (width - extent.width - 2.0 * padding).max(0.0);
        let path = PathDescription::segment(0.0, y, line_end, y);
        let style = PathStyle::stroked(self.config.goal_color, GOAL_LINE_WIDTH, SceneLayer::Goal);
        let line = self.surface.draw_path(&path, &style)?;
        self.handles.goal.push(line);

        trace!(goal, pixel = y, "draw goal");
        Ok(())
    }
}
