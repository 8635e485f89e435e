use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, LinearScale};

/// Vertex in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Backend-agnostic path: vertices joined by straight segments.
///
/// `closed` paths are filled; open paths are stroked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathDescription {
    pub vertices: Vec<Vertex>,
    pub closed: bool,
}

impl PathDescription {
    #[must_use]
    pub fn open(vertices: Vec<Vertex>) -> Self {
        Self {
            vertices,
            closed: false,
        }
    }

    #[must_use]
    pub fn closed(vertices: Vec<Vertex>) -> Self {
        Self {
            vertices,
            closed: true,
        }
    }

    /// Straight segment between two pixel positions.
    #[must_use]
    pub fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::open(vec![Vertex::new(x1, y1), Vertex::new(x2, y2)])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<Vertex> {
        self.vertices.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<Vertex> {
        self.vertices.last().copied()
    }
}

/// Maps one sample into pixel space.
#[must_use]
pub fn project_point(point: DataPoint, x_scale: LinearScale, y_scale: LinearScale) -> Vertex {
    Vertex::new(x_scale.map(point.x), y_scale.map(point.y))
}

/// One vertex per sample, in series order.
///
/// A single sample yields a one-vertex path, i.e. a zero-length stroke.
#[must_use]
pub fn project_polyline(
    points: &[DataPoint],
    x_scale: LinearScale,
    y_scale: LinearScale,
) -> PathDescription {
    PathDescription::open(
        points
            .iter()
            .map(|point| project_point(*point, x_scale, y_scale))
            .collect(),
    )
}

/// Closes `polyline` against the `y = 0` baseline.
///
/// Appends `(last.x, y(0))` and `(first.x, y(0))` so the polygon runs down
/// from the last sample and back across to the first one.
#[must_use]
pub fn project_filled_region(polyline: &PathDescription, y_scale: LinearScale) -> PathDescription {
    let (Some(first), Some(last)) = (polyline.first(), polyline.last()) else {
        return PathDescription::closed(Vec::new());
    };

    let baseline_y = y_scale.map(0.0);
    let mut vertices = Vec::with_capacity(polyline.len() + 2);
    vertices.extend(polyline.vertices.iter().copied());
    vertices.push(Vertex::new(last.x, baseline_y));
    vertices.push(Vertex::new(first.x, baseline_y));
    PathDescription::closed(vertices)
}
