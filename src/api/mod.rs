mod axis_scene_builder;
mod caption_controller;
mod chart_config;
mod chart_model;
mod data_controller;
mod element_handles;
mod engine;
mod engine_init;
mod engine_snapshot;
mod goal_controller;
mod layer_controller;
mod scale_coordinator;
mod series_scene_coordinator;
mod state_commit;

pub use chart_config::LineChartConfig;
pub use engine::LineChart;
pub use engine_snapshot::{ChartSnapshot, LayerVisibility};
