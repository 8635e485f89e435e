use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{PathDescription, Vertex};
use crate::error::{ChartError, ChartResult};

use super::{ElementHandle, PathStyle, SceneLayer, TextExtent, TextHAlign, TextStyle, TextVAlign};

/// One retained draw command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneElement {
    Path {
        path: PathDescription,
        style: PathStyle,
    },
    Circle {
        center: Vertex,
        radius: f64,
        style: PathStyle,
    },
    Text {
        anchor: Vertex,
        text: String,
        style: TextStyle,
        extent: TextExtent,
    },
}

impl SceneElement {
    #[must_use]
    pub fn layer(&self) -> SceneLayer {
        match self {
            Self::Path { style, .. } | Self::Circle { style, .. } => style.layer,
            Self::Text { style, .. } => style.layer,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Path { path, style } => {
                if path.is_empty() {
                    return Err(ChartError::InvalidData(
                        "path must contain at least one vertex".to_owned(),
                    ));
                }
                if path.vertices.iter().any(|vertex| !vertex.is_finite()) {
                    return Err(ChartError::InvalidData(
                        "path vertices must be finite".to_owned(),
                    ));
                }
                style.validate()
            }
            Self::Circle {
                center,
                radius,
                style,
            } => {
                if !center.is_finite() {
                    return Err(ChartError::InvalidData(
                        "circle center must be finite".to_owned(),
                    ));
                }
                if !radius.is_finite() || *radius <= 0.0 {
                    return Err(ChartError::InvalidData(
                        "circle radius must be finite and > 0".to_owned(),
                    ));
                }
                style.validate()
            }
            Self::Text {
                anchor,
                text,
                style,
                ..
            } => {
                if text.is_empty() {
                    return Err(ChartError::InvalidData(
                        "text element must not be empty".to_owned(),
                    ));
                }
                if !anchor.is_finite() {
                    return Err(ChartError::InvalidData(
                        "text anchor must be finite".to_owned(),
                    ));
                }
                style.validate()
            }
        }
    }
}

/// Top-left corner of a text box placed at `anchor` with the given alignment.
#[must_use]
pub fn text_box_origin(anchor: Vertex, extent: TextExtent, style: &TextStyle) -> Vertex {
    let x = match style.h_align {
        TextHAlign::Left => anchor.x,
        TextHAlign::Center => anchor.x - extent.width / 2.0,
        TextHAlign::Right => anchor.x - extent.width,
    };
    let y = match style.v_align {
        TextVAlign::Top => anchor.y,
        TextVAlign::Middle => anchor.y - extent.height / 2.0,
        TextVAlign::Bottom => anchor.y - extent.height,
    };
    Vertex::new(x, y)
}

/// Retained element store shared by surface backends.
///
/// Handles are never reused. Elements keep insertion order, and
/// `painting_order` sorts them by layer without disturbing that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    elements: IndexMap<ElementHandle, SceneElement>,
    next_handle: u64,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and stores `element`, returning its fresh handle.
    pub fn insert(&mut self, element: SceneElement) -> ChartResult<ElementHandle> {
        element.validate()?;
        self.next_handle += 1;
        let handle = ElementHandle::new(self.next_handle);
        self.elements.insert(handle, element);
        Ok(handle)
    }

    pub fn remove(&mut self, handle: ElementHandle) -> Option<SceneElement> {
        self.elements.shift_remove(&handle)
    }

    #[must_use]
    pub fn get(&self, handle: ElementHandle) -> Option<&SceneElement> {
        self.elements.get(&handle)
    }

    #[must_use]
    pub fn text_extent(&self, handle: ElementHandle) -> Option<TextExtent> {
        match self.elements.get(&handle)? {
            SceneElement::Text { extent, .. } => Some(*extent),
            _ => None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    #[must_use]
    pub fn count_in_layer(&self, layer: SceneLayer) -> usize {
        self.elements
            .values()
            .filter(|element| element.layer() == layer)
            .count()
    }

    /// Texts of every text element in `layer`, in insertion order.
    #[must_use]
    pub fn texts_in_layer(&self, layer: SceneLayer) -> Vec<&str> {
        self.elements
            .values()
            .filter_map(|element| match element {
                SceneElement::Text { text, style, .. } if style.layer == layer => {
                    Some(text.as_str())
                }
                _ => None,
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ElementHandle, &SceneElement)> {
        self.elements.iter().map(|(handle, element)| (*handle, element))
    }

    /// Elements sorted by layer; insertion order is kept within a layer.
    #[must_use]
    pub fn painting_order(&self) -> Vec<(ElementHandle, &SceneElement)> {
        let mut ordered: Vec<_> = self.iter().collect();
        ordered.sort_by_key(|(_, element)| element.layer());
        ordered
    }
}
