use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 8-bit channels, e.g. values copied from CSS.
    #[must_use]
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self::rgba(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            alpha,
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Opaque identifier of one element drawn on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementHandle(u64);

impl ElementHandle {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Z-order bucket. Retained surfaces paint lower layers first, and keep
/// insertion order inside one layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SceneLayer {
    Grid,
    Axis,
    Area,
    Line,
    Markers,
    Goal,
    Caption,
}

impl SceneLayer {
    pub const ALL: [Self; 7] = [
        Self::Grid,
        Self::Axis,
        Self::Area,
        Self::Line,
        Self::Markers,
        Self::Goal,
        Self::Caption,
    ];
}

/// Stroke/fill style for paths and circles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathStyle {
    pub stroke: Option<Color>,
    pub stroke_width: f64,
    pub fill: Option<Color>,
    pub layer: SceneLayer,
}

impl PathStyle {
    #[must_use]
    pub const fn stroked(color: Color, stroke_width: f64, layer: SceneLayer) -> Self {
        Self {
            stroke: Some(color),
            stroke_width,
            fill: None,
            layer,
        }
    }

    #[must_use]
    pub const fn filled(color: Color, layer: SceneLayer) -> Self {
        Self {
            stroke: None,
            stroke_width: 0.0,
            fill: Some(color),
            layer,
        }
    }

    #[must_use]
    pub const fn with_stroke(mut self, color: Color, stroke_width: f64) -> Self {
        self.stroke = Some(color);
        self.stroke_width = stroke_width;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if self.stroke.is_none() && self.fill.is_none() {
            return Err(ChartError::InvalidData(
                "path style needs a stroke or a fill".to_owned(),
            ));
        }
        if let Some(stroke) = self.stroke {
            stroke.validate()?;
            if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
                return Err(ChartError::InvalidData(
                    "stroke width must be finite and > 0".to_owned(),
                ));
            }
        }
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        Ok(())
    }
}

/// Horizontal text alignment relative to the anchor x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment relative to the anchor y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextVAlign {
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
    pub bold: bool,
    pub layer: SceneLayer,
}

impl TextStyle {
    #[must_use]
    pub const fn new(font_size_px: f64, color: Color, layer: SceneLayer) -> Self {
        Self {
            font_size_px,
            color,
            h_align: TextHAlign::Left,
            v_align: TextVAlign::Bottom,
            bold: false,
            layer,
        }
    }

    #[must_use]
    pub const fn aligned(mut self, h_align: TextHAlign, v_align: TextVAlign) -> Self {
        self.h_align = h_align;
        self.v_align = v_align;
        self
    }

    #[must_use]
    pub const fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Rendered size of one text element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextExtent {
    pub width: f64,
    pub height: f64,
}

impl TextExtent {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }
}
