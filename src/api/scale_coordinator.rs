use tracing::debug;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::Surface;

use super::LineChart;

impl<S: Surface> LineChart<S> {
    /// Changes the surface width.
    ///
    /// The x domain is kept and remapped onto `[0, width]`; the y scale does
    /// not change. Everything that spans the width is redrawn. On error the
    /// chart is left as it was.
    pub fn set_width(&mut self, width: u32) -> ChartResult<()> {
        if width == 0 {
            return Err(ChartError::InvalidViewport {
                width,
                height: self.model.viewport.height,
            });
        }
        if width == self.model.viewport.width {
            return Ok(());
        }

        let previous = self.model.viewport;
        let mut staged = self.model.clone();
        staged.resize_width(width)?;
        staged.refresh_ticks();
        staged.refresh_geometry();
        let mut config = self.config.clone();
        config.viewport = Viewport::new(width, previous.height);
        debug!(from = previous.width, to = width, "resize width");

        self.commit(config, staged, Self::redraw_all)
    }
}
