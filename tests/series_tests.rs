use goal_line_chart::core::{DataPoint, DataSeries};

#[test]
fn flat_input_pairs_into_sorted_points() {
    let series = DataSeries::from_flat(&[0.0, 0.0, 1.0, 1.0, 2.0, 4.0]);
    assert_eq!(
        series.points(),
        &[
            DataPoint::new(0.0, 0.0),
            DataPoint::new(1.0, 1.0),
            DataPoint::new(2.0, 4.0),
        ]
    );
}

#[test]
fn unordered_input_is_sorted_by_x() {
    let series = DataSeries::from_flat(&[2.0, 4.0, 0.0, 0.0, 1.0, 1.0]);
    let xs: Vec<f64> = series.points().iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![0.0, 1.0, 2.0]);
}

#[test]
fn equal_x_keeps_insertion_order() {
    let series = DataSeries::from_flat(&[1.0, 10.0, 0.0, 0.0, 1.0, 20.0]);
    assert_eq!(series.points()[1], DataPoint::new(1.0, 10.0));
    assert_eq!(series.points()[2], DataPoint::new(1.0, 20.0));
}

#[test]
fn odd_trailing_value_is_ignored() {
    let series = DataSeries::from_flat(&[0.0, 1.0, 2.0, 3.0, 9.0]);
    assert_eq!(series.len(), 2);
}

#[test]
fn empty_input_falls_back_to_origin() {
    let series = DataSeries::from_flat(&[]);
    assert_eq!(series.points(), &[DataPoint::origin()]);
    assert!(!series.is_empty());

    let only_trailing = DataSeries::from_flat(&[7.0]);
    assert_eq!(only_trailing.points(), &[DataPoint::origin()]);
}

#[test]
fn non_finite_pairs_are_dropped() {
    let series = DataSeries::from_flat(&[0.0, 1.0, f64::NAN, 2.0, 3.0, f64::INFINITY, 4.0, 5.0]);
    assert_eq!(
        series.points(),
        &[DataPoint::new(0.0, 1.0), DataPoint::new(4.0, 5.0)]
    );
}

#[test]
fn push_restores_ordering() {
    let mut series = DataSeries::from_flat(&[0.0, 0.0, 2.0, 2.0]);
    series.push(DataPoint::new(1.0, 1.0));
    let xs: Vec<f64> = series.points().iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![0.0, 1.0, 2.0]);
}

#[test]
fn shift_slides_window_by_one() {
    let mut series = DataSeries::from_flat(&[0.0, 0.0, 1.0, 1.0]);
    let evicted = series.shift(DataPoint::new(2.0, 4.0));

    assert_eq!(evicted, DataPoint::new(0.0, 0.0));
    assert_eq!(
        series.points(),
        &[DataPoint::new(1.0, 1.0), DataPoint::new(2.0, 4.0)]
    );
}

#[test]
fn shift_evicts_previous_front_even_for_late_sample() {
    let mut series = DataSeries::from_flat(&[5.0, 0.0, 6.0, 1.0]);
    let evicted = series.shift(DataPoint::new(1.0, 9.0));

    assert_eq!(evicted, DataPoint::new(5.0, 0.0));
    assert_eq!(
        series.points(),
        &[DataPoint::new(1.0, 9.0), DataPoint::new(6.0, 1.0)]
    );
}

#[test]
fn single_point_shift_replaces_it() {
    let mut series = DataSeries::default();
    let evicted = series.shift(DataPoint::new(3.0, 3.0));
    assert_eq!(evicted, DataPoint::origin());
    assert_eq!(series.points(), &[DataPoint::new(3.0, 3.0)]);
}

#[test]
fn deserialized_empty_list_falls_back_to_origin() {
    let mut series: DataSeries = serde_json::from_str("[]").expect("parse empty list");
    assert_eq!(series.points(), &[DataPoint::origin()]);

    let evicted = series.shift(DataPoint::new(1.0, 2.0));
    assert_eq!(evicted, DataPoint::origin());
    assert_eq!(series.len(), 1);
}

#[test]
fn deserialized_points_are_sorted_by_x() {
    let series: DataSeries =
        serde_json::from_str(r#"[{"x":2.0,"y":4.0},{"x":0.0,"y":1.0}]"#).expect("parse points");
    assert_eq!(
        series.points(),
        &[DataPoint::new(0.0, 1.0), DataPoint::new(2.0, 4.0)]
    );

    let json = serde_json::to_string(&series).expect("serialize series");
    assert!(json.starts_with('['));
}
