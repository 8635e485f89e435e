use approx::assert_relative_eq;
use goal_line_chart::core::{
    DataPoint, DataRange, LinearScale, Vertex, project_filled_region, project_point,
    project_polyline,
};

fn scales() -> (LinearScale, LinearScale) {
    let x = LinearScale::new(DataRange::new(0.0, 2.0), 0.0, 200.0).expect("x scale");
    let y = LinearScale::new(DataRange::new(0.0, 4.0), 100.0, 0.0).expect("y scale");
    (x, y)
}

#[test]
fn polyline_has_one_vertex_per_point() {
    let (x, y) = scales();
    let points = [
        DataPoint::new(0.0, 0.0),
        DataPoint::new(1.0, 1.0),
        DataPoint::new(2.0, 4.0),
    ];
    let path = project_polyline(&points, x, y);

    assert!(!path.closed);
    assert_eq!(path.len(), 3);
    assert_eq!(path.vertices[0], Vertex::new(0.0, 100.0));
    assert_relative_eq!(path.vertices[1].x, 100.0);
    assert_relative_eq!(path.vertices[1].y, 75.0);
    assert_eq!(path.vertices[2], Vertex::new(200.0, 0.0));
}

#[test]
fn single_point_yields_zero_length_path() {
    let (x, y) = scales();
    let path = project_polyline(&[DataPoint::new(1.0, 2.0)], x, y);
    assert_eq!(path.len(), 1);
    assert_eq!(path.first(), path.last());
}

#[test]
fn filled_region_closes_against_zero_baseline() {
    let (x, y) = scales();
    let points = [DataPoint::new(0.5, 2.0), DataPoint::new(1.5, 3.0)];
    let polyline = project_polyline(&points, x, y);
    let region = project_filled_region(&polyline, y);

    assert!(region.closed);
    assert_eq!(region.len(), 4);
    assert_eq!(&region.vertices[..2], &polyline.vertices[..]);
    assert_eq!(region.vertices[2], Vertex::new(150.0, 100.0));
    assert_eq!(region.vertices[3], Vertex::new(50.0, 100.0));
}

#[test]
fn filled_region_of_empty_polyline_is_empty() {
    let (x, y) = scales();
    let polyline = project_polyline(&[], x, y);
    assert!(project_filled_region(&polyline, y).is_empty());
}

#[test]
fn projected_point_matches_scales() {
    let (x, y) = scales();
    let vertex = project_point(DataPoint::new(2.0, 4.0), x, y);
    assert_eq!(vertex, Vertex::new(x.map(2.0), y.map(4.0)));
}
