use tracing::debug;

use crate::error::ChartResult;
use crate::render::Surface;

use super::LineChart;

impl<S: Surface> LineChart<S> {
    /// Shows or hides point markers. Showing rebuilds one marker per sample
    /// from the current scales.
    pub fn set_show_dots(&mut self, show: bool) -> ChartResult<()> {
        if self.config.show_dots == show {
            return Ok(());
        }
        self.config.show_dots = show;
        debug!(show, "toggle dots");
        if show {
            self.draw_all_dots()
        } else {
            self.clear_dots();
            Ok(())
        }
    }

    /// Shows or hides the faint gridlines. Tick labels and main axes stay.
    pub fn set_show_grid_lines(&mut self, show: bool) -> ChartResult<()> {
        if self.config.show_grid_lines == show {
            return Ok(());
        }
        self.config.show_grid_lines = show;
        debug!(show, "toggle grid lines");
        if show {
            self.draw_axes()
        } else {
            self.clear_grid_lines();
            Ok(())
        }
    }

    pub fn set_show_line(&mut self, show: bool) -> ChartResult<()> {
        if self.config.show_line == show {
            return Ok(());
        }
        self.config.show_line = show;
        debug!(show, "toggle line");
        self.draw_series()
    }

    pub fn set_show_shaded_area(&mut self, show: bool) -> ChartResult<()> {
        if self.config.show_shaded_area == show {
            return Ok(());
        }
        self.config.show_shaded_area = show;
        debug!(show, "toggle shaded area");
        self.draw_series()
    }
}
