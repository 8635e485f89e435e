//! goal-line-chart: live line/area chart engine with an optional goal line.
//!
//! The crate computes domains, nice tick steps, linear scales and path
//! geometry for a sorted series of `(x, y)` samples, and keeps a retained
//! drawing surface in sync as samples are appended, shifted through a
//! sliding window, resized or restyled.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartSnapshot, LayerVisibility, LineChart, LineChartConfig};
pub use error::{ChartError, ChartResult};
