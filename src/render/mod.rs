mod null_surface;
mod primitives;
mod scene;

pub use null_surface::NullSurface;
pub use primitives::{
    Color, ElementHandle, PathStyle, SceneLayer, TextExtent, TextHAlign, TextStyle, TextVAlign,
};
pub use scene::{Scene, SceneElement, text_box_origin};

use crate::core::{PathDescription, Vertex};
use crate::error::ChartResult;

/// Retained drawing surface the chart draws into.
///
/// Every draw call returns a handle the chart keeps so it can later remove
/// exactly what it drew. Text must be measurable right after it is drawn:
/// the chart places axis and goal lines next to labels using the measured
/// extent.
pub trait Surface {
    fn draw_path(&mut self, path: &PathDescription, style: &PathStyle)
    -> ChartResult<ElementHandle>;

    fn draw_circle(
        &mut self,
        center: Vertex,
        radius: f64,
        style: &PathStyle,
    ) -> ChartResult<ElementHandle>;

    fn draw_text(
        &mut self,
        anchor: Vertex,
        text: &str,
        style: &TextStyle,
    ) -> ChartResult<ElementHandle>;

    /// Removes one element. Returns `false` for unknown or already removed handles.
    fn remove(&mut self, handle: ElementHandle) -> bool;

    /// Extent of a drawn text element; `None` for non-text or unknown handles.
    fn measure_text(&self, handle: ElementHandle) -> Option<TextExtent>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoPaintStats, CairoSurface};
