use trend_chart::core::{Sample, TrendGeometry, Viewport, build_geometry, max_sample_value};

fn dashboard_viewport(width: f64) -> Viewport {
    Viewport::new(width, 400.0).with_padding(40.0, 35.0)
}

fn week_samples() -> Vec<Sample> {
    vec![
        Sample::new("Mon", 10.0),
        Sample::new("Tue", 20.0),
        Sample::new("Wed", 5.0),
    ]
}

#[test]
fn empty_series_yields_empty_geometry() {
    let geometry = build_geometry(&[], dashboard_viewport(300.0));
    assert_eq!(geometry, TrendGeometry::empty());
    assert!(geometry.points.is_empty());
    assert_eq!(geometry.line_path.to_svg(), "");
    assert_eq!(geometry.area_path.to_svg(), "");
    assert_eq!(geometry.max_value, 0.0);
}

#[test]
fn three_samples_spread_across_width() {
    let geometry = build_geometry(&week_samples(), dashboard_viewport(300.0));

    assert_eq!(geometry.max_value, 20.0);
    assert_eq!(geometry.points.len(), 3);
    assert_eq!(geometry.points[0].x, 0.0);
    assert_eq!(geometry.points[1].x, 150.0);
    assert_eq!(geometry.points[2].x, 300.0);

    // plotting height = 400 - 40 - 35 = 325
    assert!((geometry.points[0].y - 202.5).abs() <= 1e-9);
    assert!((geometry.points[1].y - 40.0).abs() <= 1e-9);
    assert!((geometry.points[2].y - 283.75).abs() <= 1e-9);

    let min_y_index = geometry
        .points
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.y.total_cmp(&b.1.y))
        .map(|(index, _)| index);
    assert_eq!(min_y_index, Some(1));
}

#[test]
fn percentages_follow_pixel_positions() {
    let geometry = build_geometry(&week_samples(), dashboard_viewport(300.0));

    assert_eq!(geometry.points[0].left_percent, 0.0);
    assert_eq!(geometry.points[1].left_percent, 50.0);
    assert_eq!(geometry.points[2].left_percent, 100.0);
    assert!((geometry.points[1].top_percent - 10.0).abs() <= 1e-9);
}

#[test]
fn only_last_point_is_today() {
    let geometry = build_geometry(&week_samples(), dashboard_viewport(300.0));
    let flags: Vec<bool> = geometry.points.iter().map(|point| point.is_today).collect();
    assert_eq!(flags, vec![false, false, true]);
}

#[test]
fn sample_fields_are_carried_into_points() {
    let samples = vec![
        Sample::new("Mon", 3.0).with_sub_value(12.0),
        Sample::new("Tue", 4.0),
    ];
    let geometry = build_geometry(&samples, dashboard_viewport(300.0));

    assert_eq!(geometry.points[0].date, "Mon");
    assert_eq!(geometry.points[0].sub_value, Some(12.0));
    assert_eq!(geometry.points[1].sub_value, None);
}

#[test]
fn all_zero_series_uses_unit_max() {
    let geometry = build_geometry(&[Sample::new("Mon", 0.0)], dashboard_viewport(300.0));

    assert_eq!(geometry.max_value, 1.0);
    assert_eq!(geometry.points.len(), 1);
    assert_eq!(geometry.points[0].x, 0.0);
    // zero sits on the bottom of the plotting band
    assert!((geometry.points[0].y - 365.0).abs() <= 1e-9);
}

#[test]
fn single_sample_has_no_paths() {
    let geometry = build_geometry(&[Sample::new("Mon", 7.0)], dashboard_viewport(300.0));

    assert_eq!(geometry.points[0].x, 0.0);
    assert!(geometry.points[0].is_today);
    assert_eq!(geometry.line_path.to_svg(), "");
    assert_eq!(geometry.area_path.to_svg(), "");
}

#[test]
fn line_path_has_one_cubic_per_gap() {
    let geometry = build_geometry(&week_samples(), dashboard_viewport(300.0));
    let line = geometry.line_path.to_svg();

    assert!(line.starts_with("M 0 202.5 C "));
    assert_eq!(line.matches(" C ").count(), 2);
    assert!(line.contains(", 150 40 C "));
    assert!(line.ends_with(", 300 283.75"));
}

#[test]
fn area_path_closes_line_to_viewport_floor() {
    let geometry = build_geometry(&week_samples(), dashboard_viewport(300.0));

    assert_eq!(
        geometry.area_path.to_svg(),
        format!("{} L 300 400 L 0 400 Z", geometry.line_path)
    );
}

#[test]
fn max_value_ignores_order() {
    let samples = vec![
        Sample::new("a", 3.0),
        Sample::new("b", 9.5),
        Sample::new("c", 1.0),
    ];
    assert_eq!(max_sample_value(&samples), 9.5);
    assert_eq!(max_sample_value(&[]), 0.0);
}

#[test]
fn negative_values_map_linearly_below_zero_line() {
    let samples = vec![Sample::new("a", 10.0), Sample::new("b", -5.0)];
    let geometry = build_geometry(&samples, dashboard_viewport(300.0));

    // zero line at 365, -5 is half a band (162.5px) further down
    assert!((geometry.points[1].y - 527.5).abs() <= 1e-9);
}

#[test]
fn resizing_only_moves_x() {
    let narrow = build_geometry(&week_samples(), dashboard_viewport(300.0));
    let wide = build_geometry(&week_samples(), dashboard_viewport(600.0));

    for (a, b) in narrow.points.iter().zip(&wide.points) {
        assert!((b.x - 2.0 * a.x).abs() <= 1e-9);
        assert_eq!(a.y, b.y);
        assert_eq!(a.hit_left, b.hit_left);
    }
}
