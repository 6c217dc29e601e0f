use crate::error::ChartResult;
use crate::interaction::{MarkerKind, Tooltip, TooltipAnchor};
use crate::render::{
    Color, LinePrimitive, LineStrokeStyle, MarkerPrimitive, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

const AREA_GRADIENT_ID: &str = "trendAreaGradient";
const LINE_GRADIENT_ID: &str = "trendLineGradient";
const COLUMN_GRADIENT_ID: &str = "trendColumnGradient";
const GLOW_FILTER_ID: &str = "trendGlow";
const AREA_GRADIENT_STOPS: [(u8, f64); 4] = [(0, 0.12), (40, 0.05), (75, 0.01), (100, 0.0)];
const LINE_GRADIENT_STOPS: [(u8, f64); 3] = [(0, 0.8), (50, 1.0), (100, 0.9)];
const HALO_STROKE_WIDTH: f64 = 5.0;
const HALO_OPACITY: f64 = 0.2;
const CORE_STROKE_WIDTH: f64 = 2.0;
const TOOLTIP_GAP_PX: f64 = 12.0;
const TOOLTIP_FONT_SIZE_PX: f64 = 12.0;

/// Renders frames into a standalone SVG document.
///
/// The document of the most recent `render` call is kept in memory; hosts
/// read it with [`SvgRenderer::document`] or take it with
/// [`SvgRenderer::take_document`].
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn take_document(&mut self) -> String {
        std::mem::take(&mut self.document)
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.document = frame_to_svg(frame);
        Ok(())
    }
}

/// Serializes one frame as an SVG document string.
#[must_use]
pub fn frame_to_svg(frame: &RenderFrame) -> String {
    let width = frame.viewport.width;
    let height = frame.viewport.height;
    let mut out = String::new();

    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        r#"viewBox="0 0 {width} {height}" width="{width}" height="{height}" preserveAspectRatio="none">"#
    ));
    out.push('\n');

    if let Some(text) = &frame.empty_state {
        write_text(&mut out, text);
        out.push_str("</svg>\n");
        return out;
    }

    write_defs(&mut out, frame);

    if let Some(column) = frame.hover_column {
        write_rect(&mut out, column);
    }
    for line in &frame.grid_lines {
        write_line(&mut out, line);
    }

    if !frame.area_path.is_empty() {
        out.push_str(&format!(
            r#"<path d="{}" fill="url(#{AREA_GRADIENT_ID})" stroke="none"/>"#,
            frame.area_path
        ));
        out.push('\n');
    }

    if !frame.line_path.is_empty() {
        out.push_str(&format!(
            r#"<path d="{}" fill="none" stroke-width="{HALO_STROKE_WIDTH}" stroke-linecap="round" stroke-linejoin="round" filter="url(#{GLOW_FILTER_ID})""#,
            frame.line_path
        ));
        write_paint_attr(&mut out, "stroke", frame.color.with_alpha(HALO_OPACITY));
        out.push_str("/>\n");

        out.push_str(&format!(
            r#"<path d="{}" fill="none" stroke="url(#{LINE_GRADIENT_ID})" stroke-width="{CORE_STROKE_WIDTH}" stroke-linecap="round" stroke-linejoin="round"/>"#,
            frame.line_path
        ));
        out.push('\n');
    }

    if let Some(guide) = &frame.hover_guide {
        write_line(&mut out, guide);
    }

    for text in &frame.texts {
        write_text(&mut out, text);
    }
    for marker in &frame.markers {
        write_marker(&mut out, marker);
    }
    if let Some(tooltip) = &frame.tooltip {
        write_tooltip(&mut out, tooltip, frame);
    }

    out.push_str("</svg>\n");
    out
}

fn write_defs(out: &mut String, frame: &RenderFrame) {
    out.push_str("<defs>\n");
    write_gradient(
        out,
        AREA_GRADIENT_ID,
        (0, 0, 0, 1),
        frame.color,
        &AREA_GRADIENT_STOPS,
    );
    write_gradient(
        out,
        LINE_GRADIENT_ID,
        (0, 0, 1, 0),
        frame.color,
        &LINE_GRADIENT_STOPS,
    );
    if let Some(column) = frame.hover_column.filter(|column| column.fill_fade) {
        let alpha = column.fill_color.alpha;
        write_gradient(
            out,
            COLUMN_GRADIENT_ID,
            (0, 1, 0, 0),
            column.fill_color,
            &[(0, alpha), (50, 0.0), (100, 0.0)],
        );
    }
    out.push_str(&format!(
        r#"<filter id="{GLOW_FILTER_ID}" x="-20%" y="-20%" width="140%" height="140%"><feGaussianBlur stdDeviation="3.5"/></filter>"#
    ));
    out.push('\n');
    out.push_str("</defs>\n");
}

fn write_gradient(
    out: &mut String,
    id: &str,
    (x1, y1, x2, y2): (u8, u8, u8, u8),
    color: Color,
    stops: &[(u8, f64)],
) {
    let hex = color.to_hex();
    out.push_str(&format!(
        r#"<linearGradient id="{id}" x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}">"#
    ));
    out.push('\n');
    for (offset, opacity) in stops {
        out.push_str(&format!(
            r#"<stop offset="{offset}%" stop-color="{hex}" stop-opacity="{opacity}"/>"#
        ));
        out.push('\n');
    }
    out.push_str("</linearGradient>\n");
}

fn write_line(out: &mut String, line: &LinePrimitive) {
    out.push_str(&format!(
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke-width="{}""#,
        line.x1, line.y1, line.x2, line.y2, line.stroke_width
    ));
    write_paint_attr(out, "stroke", line.color);
    if line.stroke_style == LineStrokeStyle::Dashed {
        out.push_str(r#" stroke-dasharray="4 4""#);
    }
    out.push_str("/>\n");
}

fn write_rect(out: &mut String, rect: RectPrimitive) {
    out.push_str(&format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
        rect.x, rect.y, rect.width, rect.height
    ));
    if rect.fill_fade {
        out.push_str(&format!(r#" fill="url(#{COLUMN_GRADIENT_ID})""#));
    } else {
        write_paint_attr(out, "fill", rect.fill_color);
    }
    out.push_str("/>\n");
}

fn write_text(out: &mut String, text: &TextPrimitive) {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    out.push_str(&format!(
        r#"<text x="{}" y="{}" font-size="{}" text-anchor="{anchor}""#,
        text.x, text.y, text.font_size_px
    ));
    write_paint_attr(out, "fill", text.color);
    out.push('>');
    out.push_str(&escape_xml(&text.text));
    out.push_str("</text>\n");
}

fn write_marker(out: &mut String, marker: &MarkerPrimitive) {
    let (x, y) = (marker.x, marker.y);
    match marker.kind {
        MarkerKind::Hidden => {}
        MarkerKind::Today => {
            out.push_str(&format!(r#"<circle cx="{x}" cy="{y}" r="8""#));
            write_paint_attr(out, "fill", marker.color.with_alpha(0.25));
            out.push_str("/>\n");
            out.push_str(&format!(r#"<circle cx="{x}" cy="{y}" r="3""#));
            write_paint_attr(out, "fill", marker.color);
            out.push_str("/>\n");
        }
        MarkerKind::Hovered => {
            out.push_str(&format!(r#"<circle cx="{x}" cy="{y}" r="10""#));
            write_paint_attr(out, "fill", marker.color.with_alpha(0.1));
            out.push_str("/>\n");
            out.push_str(&format!(
                r##"<circle cx="{x}" cy="{y}" r="6" fill="#ffffff" stroke-width="2""##
            ));
            write_paint_attr(out, "stroke", marker.color);
            out.push_str("/>\n");
            out.push_str(&format!(r#"<circle cx="{x}" cy="{y}" r="2""#));
            write_paint_attr(out, "fill", marker.color);
            out.push_str("/>\n");
        }
    }
}

fn write_tooltip(out: &mut String, tooltip: &Tooltip, frame: &RenderFrame) {
    let x = tooltip.left_percent / 100.0 * frame.viewport.width;
    let bottom =
        frame.viewport.height - tooltip.bottom_percent / 100.0 * frame.viewport.height - TOOLTIP_GAP_PX;
    let h_align = match tooltip.anchor {
        TooltipAnchor::Start => TextHAlign::Left,
        TooltipAnchor::Center => TextHAlign::Center,
        TooltipAnchor::End => TextHAlign::Right,
    };
    let ink = Color::rgb(0.06, 0.09, 0.16);

    let mut lines = vec![tooltip.date.clone(), tooltip.value_text()];
    lines.extend(tooltip.sub_value_text());

    out.push_str(r#"<g class="tooltip">"#);
    out.push('\n');
    let line_height = TOOLTIP_FONT_SIZE_PX * 1.4;
    let count = lines.len();
    for (row, line) in lines.into_iter().enumerate() {
        let y = bottom - (count - 1 - row) as f64 * line_height;
        write_text(
            out,
            &TextPrimitive::new(line, x, y, TOOLTIP_FONT_SIZE_PX, ink, h_align),
        );
    }
    out.push_str("</g>\n");
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    out.push_str(&format!(r#" {name}="{}""#, color.to_hex()));
    if color.alpha < 1.0 {
        out.push_str(&format!(r#" {name}-opacity="{}""#, color.alpha));
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
