pub mod domain;
pub mod geometry;
pub mod scale;
pub mod series;
pub mod ticks;
pub mod types;

pub use domain::{
    DEFAULT_MIN_DOMAIN_SPAN, MAX_DOMAIN_MAGNITUDE, guard_span, padded_domain, raw_range, x_range,
    y_range_with_extras,
};
pub use geometry::{
    PathDescription, Vertex, project_filled_region, project_point, project_polyline,
};
pub use scale::LinearScale;
pub use series::DataSeries;
pub use ticks::{Tick, TickAxis, format_tick_label, tick_step, tick_values};
pub use types::{DataPoint, DataRange, Padding, Viewport};
