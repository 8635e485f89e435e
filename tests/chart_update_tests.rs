use std::cell::Cell;
use std::rc::Rc;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use goal_line_chart::core::{DataPoint, PathDescription, Vertex, project_point};
use goal_line_chart::render::{
    ElementHandle, NullSurface, PathStyle, SceneElement, SceneLayer, Surface, TextExtent,
    TextStyle,
};
use goal_line_chart::{ChartError, ChartResult, LineChart, LineChartConfig};

fn chart(config: LineChartConfig, flat: &[f64]) -> LineChart<NullSurface> {
    LineChart::new(NullSurface::new(), config, flat).expect("chart init")
}

fn dot_centers(chart: &LineChart<NullSurface>) -> Vec<Vertex> {
    chart
        .surface()
        .scene()
        .iter()
        .filter_map(|(_, element)| match element {
            SceneElement::Circle { center, .. } => Some(*center),
            _ => None,
        })
        .collect()
}

fn paths_in_layer(chart: &LineChart<NullSurface>, layer: SceneLayer) -> Vec<Vec<Vertex>> {
    chart
        .surface()
        .scene()
        .iter()
        .filter_map(|(_, element)| match element {
            SceneElement::Path { path, style } if style.layer == layer => {
                Some(path.vertices.clone())
            }
            _ => None,
        })
        .collect()
}

fn tick_label_count(chart: &LineChart<NullSurface>) -> usize {
    chart
        .surface()
        .scene()
        .texts_in_layer(SceneLayer::Axis)
        .len()
}

/// Scene-backed surface whose next `failures` path draws are refused.
struct FailingSurface {
    inner: NullSurface,
    failures: Rc<Cell<u32>>,
}

impl FailingSurface {
    fn new() -> (Self, Rc<Cell<u32>>) {
        let failures = Rc::new(Cell::new(0));
        let surface = Self {
            inner: NullSurface::new(),
            failures: Rc::clone(&failures),
        };
        (surface, failures)
    }
}

impl Surface for FailingSurface {
    fn draw_path(&mut self, path: &PathDescription, style: &PathStyle) -> ChartResult<ElementHandle> {
        let remaining = self.failures.get();
        if remaining > 0 {
            self.failures.set(remaining - 1);
            return Err(ChartError::Surface("path refused".to_owned()));
        }
        self.inner.draw_path(path, style)
    }

    fn draw_circle(
        &mut self,
        center: Vertex,
        radius: f64,
        style: &PathStyle,
    ) -> ChartResult<ElementHandle> {
        self.inner.draw_circle(center, radius, style)
    }

    fn draw_text(
        &mut self,
        anchor: Vertex,
        text: &str,
        style: &TextStyle,
    ) -> ChartResult<ElementHandle> {
        self.inner.draw_text(anchor, text, style)
    }

    fn remove(&mut self, handle: ElementHandle) -> bool {
        self.inner.remove(handle)
    }

    fn measure_text(&self, handle: ElementHandle) -> Option<TextExtent> {
        self.inner.measure_text(handle)
    }
}

fn failing_chart(config: LineChartConfig, flat: &[f64]) -> (LineChart<FailingSurface>, Rc<Cell<u32>>) {
    let (surface, failures) = FailingSurface::new();
    let chart = LineChart::new(surface, config, flat).expect("chart init");
    (chart, failures)
}

fn assert_scene_matches_model(chart: &LineChart<FailingSurface>) {
    let scene = chart.surface().inner.scene();
    assert_eq!(scene.count_in_layer(SceneLayer::Line), 1);
    assert_eq!(scene.count_in_layer(SceneLayer::Area), 1);
    assert_eq!(
        scene.texts_in_layer(SceneLayer::Axis).len(),
        chart.x_ticks().len() + chart.y_ticks().len()
    );
    assert_eq!(scene.count_in_layer(SceneLayer::Markers), chart.dot_count());
}

fn assert_finite_geometry<S: Surface>(chart: &LineChart<S>) {
    assert!(chart.x_scale().domain().span() > 0.0);
    assert!(chart.y_scale().domain().span() > 0.0);
    assert!(chart.y_scale().domain().span().is_finite());
    assert!(
        chart
            .polyline()
            .vertices
            .iter()
            .all(|v| v.x.is_finite() && v.y.is_finite())
    );
    assert!(chart.y_ticks().iter().all(|t| t.pixel.is_finite()));
}

#[test]
fn construction_draws_axes_area_and_line() {
    let chart = chart(LineChartConfig::default(), &[0.0, 0.0, 1.0, 1.0, 2.0, 4.0]);
    let scene = chart.surface().scene();

    assert_eq!(chart.points().len(), 3);
    assert_eq!(chart.x_scale().domain().min, 0.0);
    assert_eq!(chart.x_scale().domain().max, 2.0);
    assert_eq!(scene.count_in_layer(SceneLayer::Area), 1);
    assert_eq!(scene.count_in_layer(SceneLayer::Line), 1);
    assert_eq!(scene.count_in_layer(SceneLayer::Markers), 0);
    assert_eq!(scene.count_in_layer(SceneLayer::Goal), 0);
    assert_eq!(scene.count_in_layer(SceneLayer::Caption), 0);
    assert_eq!(
        tick_label_count(&chart),
        chart.x_ticks().len() + chart.y_ticks().len()
    );
}

#[test]
fn y_ticks_use_one_decimal_and_mark_zero() {
    let chart = chart(LineChartConfig::default(), &[0.0, 0.0, 1.0, 1.0, 2.0, 4.0]);
    let labels: Vec<&str> = chart.y_ticks().iter().map(|t| t.label.as_str()).collect();

    assert_eq!(labels, vec!["0.0", "1.0", "2.0", "3.0", "4.0"]);
    assert!(chart.y_ticks()[0].is_zero);
    assert!(chart.y_ticks()[1..].iter().all(|t| !t.is_zero));
    assert!(chart.x_ticks().iter().any(|t| t.is_zero));
}

#[test]
fn horizontal_gridlines_start_past_measured_label() {
    let chart = chart(LineChartConfig::default(), &[0.0, 0.0, 1.0, 1.0, 2.0, 4.0]);
    let label_width = NullSurface::measure("1.0", chart.config().font_height).width;
    let expected_start = label_width + 2.0 * chart.config().text_padding;

    let horizontal: Vec<_> = paths_in_layer(&chart, SceneLayer::Grid)
        .into_iter()
        .filter(|vertices| vertices[0].y == vertices[1].y)
        .collect();
    assert_eq!(horizontal.len(), chart.y_ticks().len() - 1);
    for vertices in horizontal {
        assert_abs_diff_eq!(vertices[0].x, expected_start, epsilon = 1e-9);
        assert_relative_eq!(vertices[1].x, 600.0);
    }
}

#[test]
fn main_axes_are_drawn_even_without_gridlines() {
    let config = LineChartConfig::default().with_grid_lines(false);
    let chart = chart(config, &[0.0, 0.0, 1.0, 1.0, 2.0, 4.0]);

    assert_eq!(chart.surface().scene().count_in_layer(SceneLayer::Grid), 0);
    assert_eq!(paths_in_layer(&chart, SceneLayer::Axis).len(), 2);
}

#[test]
fn set_goal_extends_y_domain() {
    let config = LineChartConfig::default().with_goal(10.0);
    let mut chart = chart(config, &[0.0, 0.0, 1.0, 50.0]);
    assert!(!chart.y_scale().domain().contains(100.0));

    chart.set_goal(100.0).expect("set goal");

    assert_eq!(chart.goal(), Some(100.0));
    assert!(chart.y_scale().domain().contains(100.0));
    let texts = chart.surface().scene().texts_in_layer(SceneLayer::Goal);
    assert_eq!(texts, vec!["100.0"]);
    assert_eq!(chart.surface().scene().count_in_layer(SceneLayer::Goal), 2);
}

#[test]
fn goal_line_stops_before_measured_label() {
    let config = LineChartConfig::default().with_goal(100.0);
    let chart = chart(config, &[0.0, 0.0, 1.0, 50.0]);
    let label_width = NullSurface::measure("100.0", chart.config().font_height).width;
    let expected_end = 600.0 - label_width - 2.0 * chart.config().goal_text_padding;

    let lines = paths_in_layer(&chart, SceneLayer::Goal);
    assert_eq!(lines.len(), 1);
    let goal_y = chart.y_scale().map(100.0);
    assert_relative_eq!(lines[0][0].x, 0.0);
    assert_abs_diff_eq!(lines[0][1].x, expected_end, epsilon = 1e-9);
    assert_abs_diff_eq!(lines[0][0].y, goal_y, epsilon = 1e-9);
}

#[test]
fn set_goal_is_noop_while_goal_display_off() {
    let mut chart = chart(LineChartConfig::default(), &[0.0, 0.0, 1.0, 50.0]);
    let before = chart.snapshot();
    let draws = chart.surface().draw_calls;

    chart.set_goal(100.0).expect("no-op succeeds");

    assert_eq!(chart.goal(), None);
    assert_eq!(chart.snapshot(), before);
    assert_eq!(chart.surface().draw_calls, draws);
}

#[test]
fn non_finite_goal_is_rejected() {
    let config = LineChartConfig::default().with_goal(10.0);
    let mut chart = chart(config, &[0.0, 0.0, 1.0, 50.0]);
    let result = chart.set_goal(f64::NAN);
    assert!(matches!(result, Err(ChartError::InvalidData(_))));
    assert_eq!(chart.goal(), Some(10.0));
}

#[test]
fn toggling_goal_folds_it_into_y_domain() {
    let mut config = LineChartConfig::default();
    config.goal = 200.0;
    let mut chart = chart(config, &[0.0, 0.0, 1.0, 50.0]);
    assert!(!chart.y_scale().domain().contains(200.0));

    chart.set_show_goal(true).expect("show goal");
    assert!(chart.y_scale().domain().contains(200.0));
    assert_eq!(chart.surface().scene().count_in_layer(SceneLayer::Goal), 2);

    chart.set_show_goal(false).expect("hide goal");
    assert!(!chart.y_scale().domain().contains(200.0));
    assert_eq!(chart.surface().scene().count_in_layer(SceneLayer::Goal), 0);
}

#[test]
fn resize_remaps_x_and_keeps_y() {
    let mut chart = chart(LineChartConfig::default(), &[0.0, 0.0, 1.0, 1.0, 2.0, 4.0]);
    let y_before = chart.y_scale();
    let x_domain_before = chart.x_scale().domain();

    chart.set_width(800).expect("resize");

    assert_eq!(chart.x_scale().pixel_range(), (0.0, 800.0));
    assert_eq!(chart.x_scale().domain(), x_domain_before);
    assert_eq!(chart.y_scale(), y_before);
    assert_eq!(chart.viewport().width, 800);
    assert_relative_eq!(chart.polyline().last().expect("vertex").x, 800.0);
}

#[test]
fn resize_extends_gridlines_and_rebuilds_dots() {
    let config = LineChartConfig::default().with_dots(true, 3.0);
    let mut chart = chart(config, &[0.0, 0.0, 1.0, 1.0, 2.0, 4.0]);

    chart.set_width(800).expect("resize");

    for vertices in paths_in_layer(&chart, SceneLayer::Grid)
        .into_iter()
        .filter(|vertices| vertices[0].y == vertices[1].y)
    {
        assert_relative_eq!(vertices[1].x, 800.0);
    }
    let centers = dot_centers(&chart);
    assert_eq!(centers.len(), 3);
    assert_relative_eq!(centers[2].x, 800.0);
}

#[test]
fn zero_width_is_rejected() {
    let mut chart = chart(LineChartConfig::default(), &[0.0, 0.0, 1.0, 1.0]);
    let result = chart.set_width(0);
    assert!(matches!(
        result,
        Err(ChartError::InvalidViewport { width: 0, .. })
    ));
    assert_eq!(chart.viewport().width, 600);
}

#[test]
fn add_point_appends_single_dot_and_leaves_others() {
    let config = LineChartConfig::default().with_dots(true, 3.0);
    let mut chart = chart(config, &[0.0, 0.0, 1.0, 1.0, 2.0, 4.0]);
    let before = dot_centers(&chart);

    chart.add_point(DataPoint::new(4.0, 8.0)).expect("add point");

    assert_eq!(chart.points().len(), 4);
    assert_eq!(chart.dot_count(), 4);
    let after = dot_centers(&chart);
    assert_eq!(&after[..3], &before[..]);
    let expected = project_point(DataPoint::new(4.0, 8.0), chart.x_scale(), chart.y_scale());
    assert_eq!(after[3], expected);
}

#[test]
fn shift_point_keeps_length_and_leaves_dots() {
    let config = LineChartConfig::default().with_dots(true, 3.0);
    let mut chart = chart(config, &[0.0, 0.0, 1.0, 1.0]);
    let before = dot_centers(&chart);

    let evicted = chart.shift_point(DataPoint::new(2.0, 4.0)).expect("shift");

    assert_eq!(evicted, DataPoint::new(0.0, 0.0));
    assert_eq!(
        chart.points(),
        &[DataPoint::new(1.0, 1.0), DataPoint::new(2.0, 4.0)]
    );
    assert_eq!(dot_centers(&chart), before);
}

#[test]
fn mutations_replace_previous_tick_elements() {
    let mut chart = chart(LineChartConfig::default(), &[0.0, 0.0, 1.0, 1.0, 2.0, 4.0]);

    for i in 3..20 {
        let x = f64::from(i);
        chart.add_point(DataPoint::new(x, x * 3.0)).expect("add point");
        assert_eq!(
            tick_label_count(&chart),
            chart.x_ticks().len() + chart.y_ticks().len()
        );
        assert_eq!(chart.surface().scene().count_in_layer(SceneLayer::Line), 1);
        assert_eq!(chart.surface().scene().count_in_layer(SceneLayer::Area), 1);
    }
    assert!(chart.surface().remove_calls > 0);
}

#[test]
fn non_finite_point_is_rejected_without_changes() {
    let mut chart = chart(LineChartConfig::default(), &[0.0, 0.0, 1.0, 1.0]);
    let before = chart.snapshot();

    assert!(chart.add_point(DataPoint::new(f64::NAN, 1.0)).is_err());
    assert!(chart.shift_point(DataPoint::new(2.0, f64::INFINITY)).is_err());
    assert_eq!(chart.snapshot(), before);
}

#[test]
fn toggles_add_and_remove_only_their_layer() {
    let mut chart = chart(LineChartConfig::default(), &[0.0, 0.0, 1.0, 1.0, 2.0, 4.0]);
    let labels = tick_label_count(&chart);
    let grid = chart.surface().scene().count_in_layer(SceneLayer::Grid);
    assert!(grid > 0);

    chart.set_show_grid_lines(false).expect("hide grid");
    assert_eq!(chart.surface().scene().count_in_layer(SceneLayer::Grid), 0);
    assert_eq!(tick_label_count(&chart), labels);

    chart.set_show_grid_lines(true).expect("show grid");
    assert_eq!(chart.surface().scene().count_in_layer(SceneLayer::Grid), grid);

    chart.set_show_line(false).expect("hide line");
    assert_eq!(chart.surface().scene().count_in_layer(SceneLayer::Line), 0);
    assert_eq!(chart.surface().scene().count_in_layer(SceneLayer::Area), 1);

    chart.set_show_shaded_area(false).expect("hide area");
    assert_eq!(chart.surface().scene().count_in_layer(SceneLayer::Area), 0);

    chart.set_show_dots(true).expect("show dots");
    assert_eq!(chart.dot_count(), 3);
    chart.set_show_dots(false).expect("hide dots");
    assert_eq!(chart.surface().scene().count_in_layer(SceneLayer::Markers), 0);
}

#[test]
fn unchanged_toggle_draws_nothing() {
    let mut chart = chart(LineChartConfig::default(), &[0.0, 0.0, 1.0, 1.0]);
    let draws = chart.surface().draw_calls;

    chart.set_show_line(true).expect("same");
    chart.set_show_grid_lines(true).expect("same");
    chart.set_show_dots(false).expect("same");

    assert_eq!(chart.surface().draw_calls, draws);
}

#[test]
fn captions_replace_previous_text() {
    let config = LineChartConfig::default().with_title("Sales");
    let mut chart = chart(config, &[0.0, 0.0, 1.0, 1.0]);
    let scene_texts = |chart: &LineChart<NullSurface>| {
        chart
            .surface()
            .scene()
            .texts_in_layer(SceneLayer::Caption)
            .into_iter()
            .map(str::to_owned)
            .collect::<Vec<_>>()
    };
    assert_eq!(scene_texts(&chart), vec!["Sales"]);

    chart.set_title("Revenue").expect("title");
    chart.set_x_label("day").expect("x label");
    chart.set_y_label("units").expect("y label");
    assert_eq!(scene_texts(&chart), vec!["Revenue", "day", "units"]);

    chart.set_title("").expect("clear title");
    assert_eq!(scene_texts(&chart), vec!["day", "units"]);
}

#[test]
fn empty_input_charts_origin() {
    let chart = chart(LineChartConfig::default(), &[]);
    assert_eq!(chart.points(), &[DataPoint::origin()]);
    assert!(chart.x_scale().domain().span() > 0.0);
    assert_eq!(chart.polyline().len(), 1);
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let config = LineChartConfig::default().with_dots(true, -1.0);
    let result = LineChart::new(NullSurface::new(), config, &[0.0, 0.0]);
    assert!(matches!(result, Err(ChartError::InvalidData(_))));
}

#[test]
fn single_sample_far_from_zero_gets_a_usable_domain() {
    let chart = chart(LineChartConfig::default(), &[1.7e18, 5.0]);
    assert_finite_geometry(&chart);
    assert!(chart.x_scale().domain().contains(1.7e18));
    assert!(!chart.x_ticks().is_empty());
}

#[test]
fn opposite_extreme_samples_keep_a_finite_domain() {
    let mut chart = chart(LineChartConfig::default(), &[0.0, -1e308]);
    chart
        .add_point(DataPoint::new(1.0, 1e308))
        .expect("add extreme point");

    assert_eq!(chart.points().len(), 2);
    assert_finite_geometry(&chart);
}

#[test]
fn shifting_in_a_distant_sample_succeeds() {
    let mut chart = chart(LineChartConfig::default(), &[0.0, 0.0]);
    let evicted = chart
        .shift_point(DataPoint::new(1.7e18, 3.0))
        .expect("shift distant point");

    assert_eq!(evicted, DataPoint::origin());
    assert_eq!(chart.points(), &[DataPoint::new(1.7e18, 3.0)]);
    assert_finite_geometry(&chart);
}

#[test]
fn failed_redraw_restores_previous_state() {
    let config = LineChartConfig::default().with_dots(true, 3.0);
    let (mut chart, failures) = failing_chart(config, &[0.0, 0.0, 1.0, 1.0, 2.0, 4.0]);
    let before = chart.snapshot();

    failures.set(1);
    let result = chart.add_point(DataPoint::new(3.0, 9.0));
    assert!(matches!(result, Err(ChartError::Surface(_))));
    assert_eq!(chart.snapshot(), before);
    assert_eq!(chart.points().len(), 3);
    assert_scene_matches_model(&chart);

    failures.set(1);
    assert!(chart.shift_point(DataPoint::new(3.0, 9.0)).is_err());
    assert_eq!(chart.snapshot(), before);
    assert_scene_matches_model(&chart);

    chart.add_point(DataPoint::new(3.0, 9.0)).expect("add after recovery");
    assert_eq!(chart.points().len(), 4);
    assert_scene_matches_model(&chart);
}

#[test]
fn failed_goal_and_resize_leave_config_untouched() {
    let config = LineChartConfig::default().with_goal(5.0);
    let (mut chart, failures) = failing_chart(config, &[0.0, 0.0, 1.0, 1.0]);
    let before = chart.snapshot();
    let width = chart.viewport().width;

    failures.set(1);
    assert!(chart.set_goal(20.0).is_err());
    assert_eq!(chart.goal(), Some(5.0));
    assert_eq!(chart.config().goal, 5.0);

    failures.set(1);
    assert!(chart.set_width(width * 2).is_err());
    assert_eq!(chart.viewport().width, width);
    assert_eq!(chart.config().viewport.width, width);

    failures.set(1);
    assert!(chart.set_show_goal(false).is_err());
    assert!(chart.config().show_goal);

    assert_eq!(chart.snapshot(), before);
    assert_scene_matches_model(&chart);
}

#[test]
fn shifting_in_a_late_sample_evicts_previous_front() {
    let mut chart = chart(LineChartConfig::default(), &[5.0, 0.0, 6.0, 1.0]);
    let evicted = chart
        .shift_point(DataPoint::new(1.0, 9.0))
        .expect("shift late point");

    assert_eq!(evicted, DataPoint::new(5.0, 0.0));
    assert_eq!(
        chart.points(),
        &[DataPoint::new(1.0, 9.0), DataPoint::new(6.0, 1.0)]
    );
    assert_eq!(chart.x_scale().domain().min, 1.0);
}
