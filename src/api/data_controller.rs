use tracing::{debug, trace};

use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};
use crate::render::Surface;

use super::{LineChart, chart_model::ChartModel};

impl<S: Surface> LineChart<S> {
    /// Appends one sample, keeping the series sorted by x.
    ///
    /// Both scales, the ticks and the series are redrawn. When dots are shown
    /// a single marker is added for `point`; existing markers keep their
    /// previous positions until the next full dot rebuild. On error the chart
    /// is left as it was.
    pub fn add_point(&mut self, point: DataPoint) -> ChartResult<()> {
        validate_point(point)?;
        let mut staged = self.model.clone();
        staged.series.push(point);
        staged.relayout(&self.config)?;
        debug!(
            x = point.x,
            y = point.y,
            count = staged.series.len(),
            "add point"
        );
        log_layout(&staged);

        self.commit(self.config.clone(), staged, |chart| {
            chart.redraw_data_layers()?;
            if chart.config.show_dots {
                chart.append_dot(point)?;
            }
            Ok(())
        })
    }

    /// Appends `point` and evicts the oldest sample, so the series length is
    /// unchanged. Returns the evicted sample.
    ///
    /// The evicted sample is the first one of the window before `point`
    /// arrived: a `point` with the smallest x is kept and the previous first
    /// sample goes. Markers are not touched. On error the chart is left as
    /// it was.
    pub fn shift_point(&mut self, point: DataPoint) -> ChartResult<DataPoint> {
        validate_point(point)?;
        let mut staged = self.model.clone();
        let evicted = staged.series.shift(point);
        staged.relayout(&self.config)?;
        debug!(
            x = point.x,
            y = point.y,
            evicted_x = evicted.x,
            count = staged.series.len(),
            "shift point"
        );
        log_layout(&staged);

        self.commit(self.config.clone(), staged, Self::redraw_data_layers)?;
        Ok(evicted)
    }
}

fn log_layout(model: &ChartModel) {
    trace!(
        x_domain_min = model.x_scale.domain().min,
        x_domain_max = model.x_scale.domain().max,
        y_domain_min = model.y_scale.domain().min,
        y_domain_max = model.y_scale.domain().max,
        "relayout after data change"
    );
}

fn validate_point(point: DataPoint) -> ChartResult<()> {
    if !point.is_finite() {
        return Err(ChartError::InvalidData(format!(
            "point coordinates must be finite: ({}, {})",
            point.x, point.y
        )));
    }
    Ok(())
}
