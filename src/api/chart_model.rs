use tracing::trace;

use crate::core::{
    DataSeries, LinearScale, PathDescription, Tick, TickAxis, Viewport, format_tick_label,
    padded_domain, project_filled_region, project_polyline, tick_step, tick_values, x_range,
    y_range_with_extras,
};
use crate::error::ChartResult;

use super::LineChartConfig;

/// Data and derived layout state owned by one chart.
///
/// Scales, ticks and geometry are replaced wholesale by the `refresh_*`
/// methods, in dependency order (x/y scale, then ticks, then geometry).
/// Controllers recompute on a clone and swap it in only once every step
/// has succeeded.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct ChartModel {
    pub(super) series: DataSeries,
    pub(super) viewport: Viewport,
    pub(super) x_scale: LinearScale,
    pub(super) y_scale: LinearScale,
    pub(super) x_ticks: Vec<Tick>,
    pub(super) y_ticks: Vec<Tick>,
    pub(super) polyline: PathDescription,
    pub(super) filled_region: PathDescription,
}

impl ChartModel {
    pub(super) fn bootstrap(series: DataSeries, config: &LineChartConfig) -> ChartResult<Self> {
        let viewport = config.viewport.validate()?;
        let x_scale = compute_x_scale(&series, config, viewport)?;
        let y_scale = compute_y_scale(&series, config, viewport)?;
        let mut model = Self {
            series,
            viewport,
            x_scale,
            y_scale,
            x_ticks: Vec::new(),
            y_ticks: Vec::new(),
            polyline: PathDescription::open(Vec::new()),
            filled_region: PathDescription::closed(Vec::new()),
        };
        model.refresh_ticks();
        model.refresh_geometry();
        Ok(model)
    }

    pub(super) fn refresh_x_scale(&mut self, config: &LineChartConfig) -> ChartResult<()> {
        self.x_scale = compute_x_scale(&self.series, config, self.viewport)?;
        Ok(())
    }

    pub(super) fn refresh_y_scale(&mut self, config: &LineChartConfig) -> ChartResult<()> {
        self.y_scale = compute_y_scale(&self.series, config, self.viewport)?;
        Ok(())
    }

    /// Recomputes both scales, then ticks and geometry, after a data change.
    pub(super) fn relayout(&mut self, config: &LineChartConfig) -> ChartResult<()> {
        self.refresh_x_scale(config)?;
        self.relayout_y(config)
    }

    /// Recomputes the y scale, then ticks and geometry. The x scale is kept.
    pub(super) fn relayout_y(&mut self, config: &LineChartConfig) -> ChartResult<()> {
        self.refresh_y_scale(config)?;
        self.refresh_ticks();
        self.refresh_geometry();
        Ok(())
    }

    /// Keeps the x domain and remaps it onto `[0, width]`.
    pub(super) fn resize_width(&mut self, width: u32) -> ChartResult<()> {
        let viewport = Viewport::new(width, self.viewport.height).validate()?;
        self.x_scale = self.x_scale.with_pixel_range(0.0, f64::from(width))?;
        self.viewport = viewport;
        Ok(())
    }

    pub(super) fn refresh_ticks(&mut self) {
        self.x_ticks = plan_ticks(self.x_scale, TickAxis::X);
        self.y_ticks = plan_ticks(self.y_scale, TickAxis::Y);
        trace!(
            x_ticks = self.x_ticks.len(),
            y_ticks = self.y_ticks.len(),
            "refresh ticks"
        );
    }

    pub(super) fn refresh_geometry(&mut self) {
        self.polyline = project_polyline(self.series.points(), self.x_scale, self.y_scale);
        self.filled_region = project_filled_region(&self.polyline, self.y_scale);
    }
}

fn compute_x_scale(
    series: &DataSeries,
    config: &LineChartConfig,
    viewport: Viewport,
) -> ChartResult<LinearScale> {
    let domain = padded_domain(
        x_range(series.points()),
        config.padding.left,
        config.padding.right,
        config.min_domain_span,
    );
    LinearScale::horizontal(domain, viewport)
}

fn compute_y_scale(
    series: &DataSeries,
    config: &LineChartConfig,
    viewport: Viewport,
) -> ChartResult<LinearScale> {
    let domain = padded_domain(
        y_range_with_extras(series.points(), config.active_goal()),
        config.padding.bottom,
        config.padding.top,
        config.min_domain_span,
    );
    LinearScale::vertical(domain, viewport)
}

/// Ticks at multiples of the nice step that land inside the pixel range.
pub(super) fn plan_ticks(scale: LinearScale, axis: TickAxis) -> Vec<Tick> {
    let domain = scale.domain();
    let step = tick_step(domain.span());
    tick_values(domain, step)
        .into_iter()
        .filter_map(|(n, value)| {
            let pixel = scale.map(value);
            scale.contains_pixel(pixel).then(|| Tick {
                value,
                pixel,
                label: format_tick_label(value, axis),
                is_zero: n == 0,
            })
        })
        .collect()
}
