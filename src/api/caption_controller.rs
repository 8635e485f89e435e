use tracing::trace;

use crate::core::Vertex;
use crate::error::ChartResult;
use crate::render::{SceneLayer, Surface, TextHAlign, TextStyle, TextVAlign};

use super::LineChart;

const TITLE_SCALE: f64 = 1.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Caption {
    Title,
    XLabel,
    YLabel,
}

impl<S: Surface> LineChart<S> {
    pub fn set_title(&mut self, text: impl Into<String>) -> ChartResult<()> {
        self.config.title = text.into();
        self.draw_caption(Caption::Title)
    }

    pub fn set_x_label(&mut self, text: impl Into<String>) -> ChartResult<()> {
        self.config.x_label = text.into();
        self.draw_caption(Caption::XLabel)
    }

    pub fn set_y_label(&mut self, text: impl Into<String>) -> ChartResult<()> {
        self.config.y_label = text.into();
        self.draw_caption(Caption::YLabel)
    }

    pub(super) fn draw_captions(&mut self) -> ChartResult<()> {
        self.draw_caption(Caption::Title)?;
        self.draw_caption(Caption::XLabel)?;
        self.draw_caption(Caption::YLabel)
    }

    /// Replaces one caption. An empty text leaves nothing drawn.
    fn draw_caption(&mut self, caption: Caption) -> ChartResult<()> {
        let width = f64::from(self.model.viewport.width);
        let height = f64::from(self.model.viewport.height);
        let padding = self.config.text_padding;
        let font = self.config.font_height;
        let base = TextStyle::new(font, self.config.label_color, SceneLayer::Caption);

        let (text, anchor, style) = match caption {
            Caption::Title => (
                &self.config.title,
                Vertex::new(width / 2.0, padding),
                TextStyle {
                    font_size_px: font * TITLE_SCALE,
                    ..base
                }
                .aligned(TextHAlign::Center, TextVAlign::Top)
                .with_bold(true),
            ),
            // Sits above the x tick labels.
            Caption::XLabel => (
                &self.config.x_label,
                Vertex::new(width - padding, height - font - 3.0 * padding),
                base.aligned(TextHAlign::Right, TextVAlign::Bottom),
            ),
            Caption::YLabel => (
                &self.config.y_label,
                Vertex::new(padding, padding),
                base.aligned(TextHAlign::Left, TextVAlign::Top),
            ),
        };
        let text = text.clone();

        let group = match caption {
            Caption::Title => &mut self.handles.title,
            Caption::XLabel => &mut self.handles.x_label,
            Caption::YLabel => &mut self.handles.y_label,
        };
        group.clear_from(&mut self.surface);
        if text.is_empty() {
            return Ok(());
        }
        let handle = self.surface.draw_text(anchor, &text, &style)?;
        group.push(handle);
        trace!(?caption, text = %text, "draw caption");
        Ok(())
    }
}
