use crate::core::{PathDescription, Vertex};
use crate::error::ChartResult;
use crate::render::{
    ElementHandle, PathStyle, Scene, SceneElement, Surface, TextExtent, TextStyle,
};

/// Average glyph advance as a fraction of the font size.
const GLYPH_WIDTH_RATIO: f64 = 0.6;

/// Headless surface used by tests and server-side chart state.
///
/// It keeps a validated retained scene and measures text with fixed-advance
/// metrics so layouts are deterministic across machines.
#[derive(Debug, Default)]
pub struct NullSurface {
    scene: Scene,
    pub draw_calls: usize,
    pub remove_calls: usize,
}

impl NullSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[must_use]
    pub fn element(&self, handle: ElementHandle) -> Option<&SceneElement> {
        self.scene.get(handle)
    }

    #[must_use]
    pub fn measure(text: &str, font_size_px: f64) -> TextExtent {
        let chars = text.chars().count() as f64;
        TextExtent::new(chars * font_size_px * GLYPH_WIDTH_RATIO, font_size_px)
    }

    fn insert(&mut self, element: SceneElement) -> ChartResult<ElementHandle> {
        let handle = self.scene.insert(element)?;
        self.draw_calls += 1;
        Ok(handle)
    }
}

impl Surface for NullSurface {
    fn draw_path(
        &mut self,
        path: &PathDescription,
        style: &PathStyle,
    ) -> ChartResult<ElementHandle> {
        self.insert(SceneElement::Path {
            path: path.clone(),
            style: *style,
        })
    }

    fn draw_circle(
        &mut self,
        center: Vertex,
        radius: f64,
        style: &PathStyle,
    ) -> ChartResult<ElementHandle> {
        self.insert(SceneElement::Circle {
            center,
            radius,
            style: *style,
        })
    }

    fn draw_text(
        &mut self,
        anchor: Vertex,
        text: &str,
        style: &TextStyle,
    ) -> ChartResult<ElementHandle> {
        self.insert(SceneElement::Text {
            anchor,
            text: text.to_owned(),
            style: *style,
            extent: Self::measure(text, style.font_size_px),
        })
    }

    fn remove(&mut self, handle: ElementHandle) -> bool {
        self.remove_calls += 1;
        self.scene.remove(handle).is_some()
    }

    fn measure_text(&self, handle: ElementHandle) -> Option<TextExtent> {
        self.scene.text_extent(handle)
    }
}
