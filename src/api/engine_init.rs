use tracing::debug;

use crate::core::{DataPoint, DataSeries};
use crate::error::ChartResult;
use crate::render::Surface;

use super::{LineChart, LineChartConfig, chart_model::ChartModel, element_handles::ChartHandles};

impl<S: Surface> LineChart<S> {
    /// Creates a chart from a flat `[x1, y1, x2, y2, ...]` sample list and
    /// draws it onto `surface`.
    ///
    /// An unpaired trailing value is ignored; an empty list charts the single
    /// origin sample.
    pub fn new(surface: S, config: LineChartConfig, flat: &[f64]) -> ChartResult<Self> {
        Self::with_series(surface, config, DataSeries::from_flat(flat))
    }

    /// Same as `new`, from already paired samples.
    pub fn from_points(
        surface: S,
        config: LineChartConfig,
        points: Vec<DataPoint>,
    ) -> ChartResult<Self> {
        Self::with_series(surface, config, DataSeries::new(points))
    }

    fn with_series(surface: S, config: LineChartConfig, series: DataSeries) -> ChartResult<Self> {
        config.validate()?;
        let model = ChartModel::bootstrap(series, &config)?;
        debug!(
            points = model.series.len(),
            width = model.viewport.width,
            height = model.viewport.height,
            show_goal = config.show_goal,
            "create line chart"
        );

        let mut chart = Self {
            surface,
            config,
            model,
            handles: ChartHandles::default(),
        };

        chart.redraw_all()?;
        Ok(chart)
    }
}
