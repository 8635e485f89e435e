use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_MIN_DOMAIN_SPAN, Padding, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Public chart bootstrap configuration.
///
/// Serializable so host applications can persist chart setup as JSON; every
/// field has a default, so partial documents are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub padding: Padding,
    #[serde(default = "default_min_domain_span")]
    pub min_domain_span: f64,

    #[serde(default)]
    pub show_dots: bool,
    #[serde(default = "default_dot_radius")]
    pub dot_radius: f64,
    #[serde(default = "default_dot_color")]
    pub dot_color: Color,
    #[serde(default = "default_dot_stroke")]
    pub dot_stroke: Color,

    #[serde(default = "default_true")]
    pub show_grid_lines: bool,
    #[serde(default = "default_grid_color")]
    pub grid_color: Color,
    #[serde(default = "default_axis_color")]
    pub axis_color: Color,

    #[serde(default = "default_true")]
    pub show_line: bool,
    #[serde(default = "default_line_stroke")]
    pub line_stroke: Color,
    #[serde(default = "default_line_width")]
    pub line_width: f64,

    #[serde(default = "default_true")]
    pub show_shaded_area: bool,
    #[serde(default = "default_fill_color")]
    pub fill_color: Color,

    #[serde(default = "default_font_height")]
    pub font_height: f64,
    #[serde(default = "default_text_padding")]
    pub text_padding: f64,
    #[serde(default = "default_label_color")]
    pub label_color: Color,

    #[serde(default)]
    pub show_goal: bool,
    #[serde(default)]
    pub goal: f64,
    #[serde(default = "default_text_padding")]
    pub goal_text_padding: f64,
    #[serde(default = "default_goal_color")]
    pub goal_color: Color,

    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub x_label: String,
    #[serde(default)]
    pub y_label: String,
}

impl LineChartConfig {
    /// Creates a config with default styling for `viewport`.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            padding: Padding::default(),
            min_domain_span: default_min_domain_span(),
            show_dots: false,
            dot_radius: default_dot_radius(),
            dot_color: default_dot_color(),
            dot_stroke: default_dot_stroke(),
            show_grid_lines: true,
            grid_color: default_grid_color(),
            axis_color: default_axis_color(),
            show_line: true,
            line_stroke: default_line_stroke(),
            line_width: default_line_width(),
            show_shaded_area: true,
            fill_color: default_fill_color(),
            font_height: default_font_height(),
            text_padding: default_text_padding(),
            label_color: default_label_color(),
            show_goal: false,
            goal: 0.0,
            goal_text_padding: default_text_padding(),
            goal_color: default_goal_color(),
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_min_domain_span(mut self, min_domain_span: f64) -> Self {
        self.min_domain_span = min_domain_span;
        self
    }

    #[must_use]
    pub fn with_dots(mut self, show_dots: bool, dot_radius: f64) -> Self {
        self.show_dots = show_dots;
        self.dot_radius = dot_radius;
        self
    }

    #[must_use]
    pub fn with_grid_lines(mut self, show_grid_lines: bool) -> Self {
        self.show_grid_lines = show_grid_lines;
        self
    }

    #[must_use]
    pub fn with_line(mut self, show_line: bool, line_width: f64) -> Self {
        self.show_line = show_line;
        self.line_width = line_width;
        self
    }

    #[must_use]
    pub fn with_shaded_area(mut self, show_shaded_area: bool) -> Self {
        self.show_shaded_area = show_shaded_area;
        self
    }

    #[must_use]
    pub fn with_typography(mut self, font_height: f64, text_padding: f64) -> Self {
        self.font_height = font_height;
        self.text_padding = text_padding;
        self
    }

    /// Enables goal display at `goal`.
    #[must_use]
    pub fn with_goal(mut self, goal: f64) -> Self {
        self.show_goal = true;
        self.goal = goal;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_axis_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    /// Goal value folded into the y domain, when goal display is on.
    #[must_use]
    pub fn active_goal(&self) -> Option<f64> {
        self.show_goal.then_some(self.goal)
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.viewport.validate()?;
        self.padding.validate()?;
        require_positive("min_domain_span", self.min_domain_span)?;
        require_positive("dot_radius", self.dot_radius)?;
        require_positive("line_width", self.line_width)?;
        require_positive("font_height", self.font_height)?;
        require_non_negative("text_padding", self.text_padding)?;
        require_non_negative("goal_text_padding", self.goal_text_padding)?;
        if !self.goal.is_finite() {
            return Err(ChartError::InvalidData("goal must be finite".to_owned()));
        }
        for color in [
            self.dot_color,
            self.dot_stroke,
            self.grid_color,
            self.axis_color,
            self.line_stroke,
            self.fill_color,
            self.label_color,
            self.goal_color,
        ] {
            color.validate()?;
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

fn require_positive(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "`{name}` must be finite and > 0"
        )));
    }
    Ok(())
}

fn require_non_negative(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::InvalidData(format!(
            "`{name}` must be finite and >= 0"
        )));
    }
    Ok(())
}

fn default_true() -> bool {
    true
}

fn default_min_domain_span() -> f64 {
    DEFAULT_MIN_DOMAIN_SPAN
}

fn default_dot_radius() -> f64 {
    3.0
}

fn default_dot_color() -> Color {
    Color::rgb(1.0, 1.0, 1.0)
}

fn default_dot_stroke() -> Color {
    Color::from_rgba8(0x1f, 0x77, 0xb4, 1.0)
}

fn default_grid_color() -> Color {
    Color::rgba(0.0, 0.0, 0.0, 0.1)
}

fn default_axis_color() -> Color {
    Color::rgb(0.2, 0.2, 0.2)
}

fn default_line_stroke() -> Color {
    Color::from_rgba8(0x1f, 0x77, 0xb4, 1.0)
}

fn default_line_width() -> f64 {
    2.0
}

fn default_fill_color() -> Color {
    Color::from_rgba8(0x1f, 0x77, 0xb4, 0.25)
}

fn default_font_height() -> f64 {
    11.0
}

fn default_text_padding() -> f64 {
    4.0
}

fn default_label_color() -> Color {
    Color::rgb(0.3, 0.3, 0.3)
}

fn default_goal_color() -> Color {
    Color::from_rgba8(0xd6, 0x27, 0x28, 1.0)
}
