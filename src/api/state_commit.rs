use tracing::warn;

use crate::error::ChartResult;
use crate::render::Surface;

use super::{LineChart, LineChartConfig, chart_model::ChartModel};

impl<S: Surface> LineChart<S> {
    /// Swaps in a fully recomputed config and model, then runs `redraw`.
    ///
    /// When `redraw` fails the previous config and model are restored and
    /// every element is redrawn from them, so callers never observe a chart
    /// whose data, layout and surface disagree.
    pub(super) fn commit<F>(
        &mut self,
        config: LineChartConfig,
        model: ChartModel,
        redraw: F,
    ) -> ChartResult<()>
    where
        F: FnOnce(&mut Self) -> ChartResult<()>,
    {
        let previous_config = std::mem::replace(&mut self.config, config);
        let previous_model = std::mem::replace(&mut self.model, model);

        let Err(err) = redraw(self) else {
            return Ok(());
        };
        warn!(error = %err, "redraw failed, restoring previous chart state");
        self.config = previous_config;
        self.model = previous_model;
        if let Err(restore_err) = self.redraw_all() {
            warn!(error = %restore_err, "failed to redraw restored chart state");
        }
        Err(err)
    }

    /// Draws every element from the current model: axes, series, dots when
    /// shown, goal and captions.
    pub(super) fn redraw_all(&mut self) -> ChartResult<()> {
        self.draw_axes()?;
        self.draw_series()?;
        if self.config.show_dots {
            self.draw_all_dots()?;
        } else {
            self.clear_dots();
        }
        self.draw_goal()?;
        self.draw_captions()
    }

    /// Redraws what depends on the scales but not on the markers.
    pub(super) fn redraw_data_layers(&mut self) -> ChartResult<()> {
        self.draw_axes()?;
        self.draw_series()?;
        self.draw_goal()
    }
}
