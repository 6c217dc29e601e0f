use trend_chart::api::{grid_label, grid_level_y};
use trend_chart::core::{PathData, Sample, Vertex, Viewport};
use trend_chart::interaction::MarkerKind;
use trend_chart::render::{
    Color, LinePrimitive, LineStrokeStyle, NullRenderer, RectPrimitive, RenderFrame, Renderer,
    SvgRenderer, TextHAlign,
};
use trend_chart::{TrendChart, TrendChartConfig};

fn week() -> Vec<Sample> {
    vec![
        Sample::new("Mon", 10.0),
        Sample::new("Tue", 20.0),
        Sample::new("Wed", 5.0),
    ]
}

fn chart_with<R: Renderer>(renderer: R) -> TrendChart<R> {
    let mut chart = TrendChart::new(renderer, TrendChartConfig::default()).expect("chart init");
    chart.set_samples(week());
    chart
}

#[test]
fn frame_contains_grid_labels_and_dates() {
    let mut chart = chart_with(NullRenderer::default());
    let frame = chart.build_frame().expect("frame");

    assert_eq!(frame.grid_lines.len(), 3);
    assert!(
        frame
            .grid_lines
            .iter()
            .all(|line| line.stroke_style == LineStrokeStyle::Dashed)
    );

    let texts: Vec<&str> = frame.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(texts, vec!["0", "50%", "max: 20", "Mon", "Tue", "Wed"]);

    assert_eq!(frame.texts[3].h_align, TextHAlign::Left);
    assert_eq!(frame.texts[4].h_align, TextHAlign::Center);
    assert_eq!(frame.texts[5].h_align, TextHAlign::Right);
    assert_eq!(frame.texts[5].color, chart.color());
}

#[test]
fn grid_levels_sit_inside_plotting_band() {
    let viewport = Viewport::new(300.0, 400.0).with_padding(40.0, 35.0);
    assert_eq!(grid_level_y(viewport, 0.0), 365.0);
    assert_eq!(grid_level_y(viewport, 0.5), 202.5);
    assert_eq!(grid_level_y(viewport, 1.0), 40.0);

    assert_eq!(grid_label(0.0, 20.0, "max"), "0");
    assert_eq!(grid_label(0.25, 20.0, "max"), "25%");
    assert_eq!(grid_label(1.0, 12.5, "peak"), "peak: 12.5");
}

#[test]
fn markers_follow_hover_state() {
    let mut chart = chart_with(NullRenderer::default());

    let idle = chart.build_frame().expect("frame");
    assert_eq!(idle.markers.len(), 1);
    assert_eq!(idle.markers[0].index, 2);
    assert_eq!(idle.markers[0].kind, MarkerKind::Today);
    assert!(idle.tooltip.is_none());

    chart.pointer_enter(0);
    let hovered = chart.build_frame().expect("frame");
    let kinds: Vec<(usize, MarkerKind)> = hovered
        .markers
        .iter()
        .map(|marker| (marker.index, marker.kind))
        .collect();
    assert_eq!(kinds, vec![(0, MarkerKind::Hovered), (2, MarkerKind::Today)]);
    assert_eq!(hovered.tooltip.map(|tooltip| tooltip.index), Some(0));

    chart.pointer_enter(2);
    let latest = chart.build_frame().expect("frame");
    assert_eq!(latest.markers.len(), 1);
    assert_eq!(latest.markers[0].kind, MarkerKind::Hovered);
}

#[test]
fn empty_frame_shows_empty_state_only() {
    let mut chart =
        TrendChart::new(NullRenderer::default(), TrendChartConfig::default()).expect("chart init");
    let frame = chart.build_frame().expect("frame");

    let empty = frame.empty_state.as_ref().expect("empty state");
    assert_eq!(empty.text, "No trend samples yet");
    assert!(frame.line_path.is_empty());
    assert!(frame.grid_lines.is_empty());
    assert!(frame.markers.is_empty());
    assert!(frame.is_empty());
}

#[test]
fn single_sample_frame_has_marker_but_no_curve() {
    let mut chart =
        TrendChart::new(NullRenderer::default(), TrendChartConfig::default()).expect("chart init");
    chart.set_samples(vec![Sample::new("Mon", 4.0)]);
    let frame = chart.build_frame().expect("frame");

    assert!(frame.line_path.is_empty());
    assert!(frame.area_path.is_empty());
    assert_eq!(frame.markers.len(), 1);
    assert_eq!(frame.markers[0].x, 0.0);
}

#[test]
fn frame_validation_rejects_bad_primitives() {
    let viewport = Viewport::new(100.0, 100.0);
    let frame = RenderFrame::new(viewport, Color::rgb(0.0, 0.0, 1.0)).with_grid_line(
        LinePrimitive::new(0.0, f64::INFINITY, 100.0, 0.0, 1.0, Color::rgb(0.0, 0.0, 0.0)),
    );
    assert!(frame.validate().is_err());

    let bad_viewport = RenderFrame::new(Viewport::new(0.0, 100.0), Color::rgb(0.0, 0.0, 0.0));
    assert!(NullRenderer::default().render(&bad_viewport).is_err());
}

#[test]
fn svg_document_contains_area_and_curve() {
    let mut chart = chart_with(SvgRenderer::new());
    chart.pointer_enter(1);
    chart.render().expect("render");
    let geometry = chart.geometry().clone();
    let svg = chart.renderer().document();

    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 1000 400""#));
    assert!(svg.contains(&format!(r#"<path d="{}" fill="url(#trendAreaGradient)""#, geometry.area_path)));
    assert_eq!(svg.matches(&format!(r#"<path d="{}" fill="none""#, geometry.line_path)).count(), 2);
    assert!(svg.contains(r##"stop-color="#3b82f6""##));
    assert!(svg.contains(r#"stroke-dasharray="4 4""#));
    assert!(svg.contains(r#"<g class="tooltip">"#));
    assert!(svg.contains(">max: 20</text>"));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn svg_escapes_labels() {
    let mut chart =
        TrendChart::new(SvgRenderer::new(), TrendChartConfig::default()).expect("chart init");
    chart.set_samples(vec![Sample::new("<Mon & Tue>", 1.0), Sample::new("Wed", 2.0)]);
    chart.render().expect("render");

    let svg = chart.into_renderer().take_document();
    assert!(svg.contains("&lt;Mon &amp; Tue&gt;"));
    assert!(!svg.contains("<Mon"));
}

#[test]
fn svg_empty_state_has_no_paths() {
    let mut chart = TrendChart::new(
        SvgRenderer::new(),
        TrendChartConfig::default().with_empty_label("Nothing yet"),
    )
    .expect("chart init");
    chart.render().expect("render");

    let svg = chart.renderer().document();
    assert!(svg.contains(">Nothing yet</text>"));
    assert!(!svg.contains("<path"));
}

#[test]
fn non_finite_paths_fail_validation() {
    let mut line = PathData::new();
    line.move_to(Vertex::new(f64::NAN, f64::NAN)).cubic_to(
        Vertex::new(1.0, 2.0),
        Vertex::new(3.0, 4.0),
        Vertex::new(5.0, 6.0),
    );
    let frame = RenderFrame::new(Viewport::new(100.0, 100.0), Color::rgb(0.0, 0.0, 1.0))
        .with_paths(line, PathData::new());

    assert!(frame.validate().is_err());
    assert!(NullRenderer::default().render(&frame).is_err());

    let mut svg = SvgRenderer::new();
    assert!(svg.render(&frame).is_err());
    assert!(svg.document().is_empty());
}

#[test]
fn non_finite_tooltip_position_fails_validation() {
    let mut chart = chart_with(NullRenderer::default());
    chart.pointer_enter(1);
    let frame = chart.build_frame().expect("frame");
    assert!(frame.validate().is_ok());

    let mut broken = frame.clone();
    if let Some(tooltip) = broken.tooltip.as_mut() {
        tooltip.left_percent = f64::NAN;
    }
    assert!(broken.validate().is_err());

    let mut broken = frame;
    if let Some(tooltip) = broken.tooltip.as_mut() {
        tooltip.bottom_percent = f64::INFINITY;
    }
    assert!(SvgRenderer::new().render(&broken).is_err());
}

#[test]
fn hover_adds_guide_line_and_column_highlight() {
    let mut chart = chart_with(NullRenderer::default());
    let idle = chart.build_frame().expect("frame");
    assert!(idle.hover_guide.is_none());
    assert!(idle.hover_column.is_none());

    chart.pointer_enter(1);
    let frame = chart.build_frame().expect("frame");

    let guide = frame.hover_guide.expect("guide line");
    assert_eq!(guide.stroke_style, LineStrokeStyle::Dashed);
    assert_eq!((guide.x1, guide.x2), (500.0, 500.0));
    assert_eq!((guide.y1, guide.y2), (0.0, 370.0));

    let column = frame.hover_column.expect("column highlight");
    assert_eq!(column.x, 250.0);
    assert_eq!(column.width, 500.0);
    assert_eq!(column.right(), 750.0);
    assert_eq!(column.height, 400.0);
    assert!(column.fill_fade);

    chart.pointer_enter(0);
    let first = chart.build_frame().expect("frame");
    let column = first.hover_column.expect("column highlight");
    assert_eq!((column.x, column.width), (0.0, 250.0));
}

#[test]
fn rect_validation_rejects_negative_size() {
    let rect = RectPrimitive::new(0.0, 0.0, -1.0, 10.0, Color::rgb(0.0, 0.0, 0.0));
    assert!(rect.validate().is_err());
    assert!(RectPrimitive::new(0.0, 0.0, 0.0, 10.0, Color::rgb(0.0, 0.0, 0.0)).validate().is_ok());
}

#[test]
fn svg_strokes_core_line_with_horizontal_gradient() {
    let mut chart = chart_with(SvgRenderer::new());
    chart.render().expect("render");
    let svg = chart.renderer().document();

    assert!(svg.contains(r#"<linearGradient id="trendLineGradient" x1="0" y1="0" x2="1" y2="0">"#));
    assert!(svg.contains(r##"<stop offset="0%" stop-color="#3b82f6" stop-opacity="0.8"/>"##));
    assert!(svg.contains(r##"<stop offset="50%" stop-color="#3b82f6" stop-opacity="1"/>"##));
    assert!(svg.contains(r##"<stop offset="100%" stop-color="#3b82f6" stop-opacity="0.9"/>"##));
    assert!(svg.contains(r#"stroke="url(#trendLineGradient)""#));
    assert!(!svg.contains("<rect"));
}

#[test]
fn svg_draws_hover_overlay() {
    let mut chart = chart_with(SvgRenderer::new());
    chart.pointer_enter(1);
    chart.render().expect("render");
    let svg = chart.renderer().document();

    assert!(svg.contains(r#"<rect x="250" y="0" width="500" height="400" fill="url(#trendColumnGradient)"/>"#));
    assert!(svg.contains(r#"<linearGradient id="trendColumnGradient""#));
    assert!(svg.contains(r#"<line x1="500" y1="0" x2="500" y2="370" stroke-width="2""#));
}

#[test]
fn svg_tooltip_labels_value_rows() {
    let config = TrendChartConfig::default().with_tooltip_labels("chats", "replies");
    let mut chart = TrendChart::new(SvgRenderer::new(), config).expect("chart init");
    chart.set_samples(vec![
        Sample::new("Mon", 10.0),
        Sample::new("Tue", 20.0).with_sub_value(48.0),
        Sample::new("Wed", 5.0),
    ]);
    chart.pointer_enter(1);
    chart.render().expect("render");
    let svg = chart.renderer().document();

    assert!(svg.contains(">20 chats</text>"));
    assert!(svg.contains(">replies: 48</text>"));
}
