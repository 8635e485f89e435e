use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::TAU;
use std::path::Path;

use crate::core::{PathDescription, Vertex};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, ElementHandle, PathStyle, Scene, SceneElement, Surface, TextExtent, TextStyle,
    text_box_origin,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoPaintStats {
    pub paths_painted: usize,
    pub circles_painted: usize,
    pub texts_painted: usize,
}

/// Cairo + Pango surface backend.
///
/// Elements are retained in a `Scene`; text is measured with a Pango layout
/// when it is drawn. `paint` rasterizes the scene into the owned image
/// surface, `paint_on_context` into an external context (for example a GTK
/// draw callback).
#[derive(Debug)]
pub struct CairoSurface {
    surface: ImageSurface,
    scene: Scene,
    clear_color: Color,
    font_family: String,
    last_stats: CairoPaintStats,
}

impl CairoSurface {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            scene: Scene::new(),
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            font_family: "Sans".to_owned(),
            last_stats: CairoPaintStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn image(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.font_family = family.into();
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoPaintStats {
        self.last_stats
    }

    /// Rasterizes the retained scene into the owned image surface.
    pub fn paint(&mut self) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.paint_on_context(&context)
    }

    /// Rasterizes the retained scene into `context`.
    pub fn paint_on_context(&mut self, context: &Context) -> ChartResult<()> {
        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoPaintStats::default();
        for (_, element) in self.scene.painting_order() {
            match element {
                SceneElement::Path { path, style } => {
                    append_path(context, path);
                    finish_shape(context, style)?;
                    stats.paths_painted += 1;
                }
                SceneElement::Circle {
                    center,
                    radius,
                    style,
                } => {
                    context.new_path();
                    context.arc(center.x, center.y, *radius, 0.0, TAU);
                    context.close_path();
                    finish_shape(context, style)?;
                    stats.circles_painted += 1;
                }
                SceneElement::Text {
                    anchor,
                    text,
                    style,
                    extent,
                } => {
                    let layout = self.layout(context, text, style);
                    let origin = text_box_origin(*anchor, *extent, style);
                    apply_color(context, style.color);
                    context.move_to(origin.x, origin.y);
                    pangocairo::functions::show_layout(context, &layout);
                    stats.texts_painted += 1;
                }
            }
        }

        self.last_stats = stats;
        Ok(())
    }

    /// Writes the last painted image as PNG.
    pub fn write_png(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let mut file = std::fs::File::create(path.as_ref())
            .map_err(|err| ChartError::Surface(format!("failed to create png file: {err}")))?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| ChartError::Surface(format!("failed to encode png: {err}")))
    }

    fn layout(&self, context: &Context, text: &str, style: &TextStyle) -> pango::Layout {
        let layout = pangocairo::functions::create_layout(context);
        let mut font_description =
            FontDescription::from_string(&format!("{} {}", self.font_family, style.font_size_px));
        if style.bold {
            font_description.set_weight(pango::Weight::Bold);
        }
        layout.set_font_description(Some(&font_description));
        layout.set_text(text);
        layout
    }

    fn measure(&self, text: &str, style: &TextStyle) -> ChartResult<TextExtent> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        let (width, height) = self.layout(&context, text, style).pixel_size();
        Ok(TextExtent::new(f64::from(width), f64::from(height)))
    }
}

impl Surface for CairoSurface {
    fn draw_path(
        &mut self,
        path: &PathDescription,
        style: &PathStyle,
    ) -> ChartResult<ElementHandle> {
        self.scene.insert(SceneElement::Path {
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
        self.scene.insert(SceneElement::Circle {
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
        let extent = self.measure(text, style)?;
        self.scene.insert(SceneElement::Text {
            anchor,
            text: text.to_owned(),
            style: *style,
            extent,
        })
    }

    fn remove(&mut self, handle: ElementHandle) -> bool {
        self.scene.remove(handle).is_some()
    }

    fn measure_text(&self, handle: ElementHandle) -> Option<TextExtent> {
        self.scene.text_extent(handle)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn append_path(context: &Context, path: &PathDescription) {
    context.new_path();
    let mut vertices = path.vertices.iter();
    if let Some(first) = vertices.next() {
        context.move_to(first.x, first.y);
        if path.len() == 1 {
            // Zero-length segment so round caps still mark a lone sample.
            context.line_to(first.x, first.y);
        }
    }
    for vertex in vertices {
        context.line_to(vertex.x, vertex.y);
    }
    if path.closed {
        context.close_path();
    }
}

fn finish_shape(context: &Context, style: &PathStyle) -> ChartResult<()> {
    if let Some(fill) = style.fill {
        apply_color(context, fill);
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill shape", err))?;
    }
    if let Some(stroke) = style.stroke {
        apply_color(context, stroke);
        context.set_line_width(style.stroke_width);
        context.set_line_cap(cairo::LineCap::Round);
        context
            .stroke_preserve()
            .map_err(|err| map_backend_error("failed to stroke shape", err))?;
    }
    context.new_path();
    Ok(())
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Surface(format!("{prefix}: {err}"))
}
