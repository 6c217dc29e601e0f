use crate::core::{Coordinate, TrendGeometry, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HoverState, MarkerKind, Tooltip, TooltipAnchor};
use crate::render::{
    Color, LinePrimitive, MarkerPrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::TrendChartConfig;

const GRID_OPACITY: f64 = 0.3;
const GRID_STROKE_WIDTH: f64 = 1.0;
const GRID_LABEL_FONT_SIZE_PX: f64 = 10.0;
const GRID_LABEL_INSET_PX: f64 = 4.0;
const GRID_LABEL_LIFT_PX: f64 = 8.0;
const DATE_LABEL_FONT_SIZE_PX: f64 = 10.0;
const DATE_LABEL_BASELINE_OFFSET_PX: f64 = 12.0;
const EMPTY_STATE_FONT_SIZE_PX: f64 = 14.0;
const HOVER_GUIDE_OPACITY: f64 = 0.2;
const HOVER_GUIDE_STROKE_WIDTH: f64 = 2.0;
/// Guide stops above the date labels.
const HOVER_GUIDE_BOTTOM_INSET_PX: f64 = 30.0;
const HOVER_COLUMN_OPACITY: f64 = 0.06;

/// Turns cached geometry plus hover state into a `RenderFrame`.
pub(super) struct FrameBuilder<'a> {
    config: &'a TrendChartConfig,
    viewport: Viewport,
    color: Color,
}

impl<'a> FrameBuilder<'a> {
    pub(super) fn new(config: &'a TrendChartConfig, viewport: Viewport, color: Color) -> Self {
        Self {
            config,
            viewport,
            color,
        }
    }

    pub(super) fn build(
        &self,
        geometry: &TrendGeometry,
        hover: HoverState,
    ) -> ChartResult<RenderFrame> {
        let frame = RenderFrame::new(self.viewport, self.color);
        if geometry.is_empty() {
            let label_color = Color::from_hex(&self.config.label_color)?;
            return Ok(frame.with_empty_state(TextPrimitive::new(
                self.config.empty_label.clone(),
                self.viewport.width / 2.0,
                self.viewport.height / 2.0,
                EMPTY_STATE_FONT_SIZE_PX,
                label_color,
                TextHAlign::Center,
            )));
        }

        if geometry
            .points
            .iter()
            .any(|point| !point.x.is_finite() || !point.y.is_finite())
        {
            return Err(ChartError::InvalidData(
                "sample values must be finite".to_owned(),
            ));
        }

        let mut frame = frame.with_paths(geometry.line_path.clone(), geometry.area_path.clone());
        frame = self.push_grid(frame, geometry.max_value)?;
        frame = self.push_date_labels(frame, geometry)?;

        let len = geometry.points.len();
        for (index, point) in geometry.points.iter().enumerate() {
            let kind = hover.marker_kind(index, len);
            if kind == MarkerKind::Hidden {
                continue;
            }
            frame = frame.with_marker(MarkerPrimitive {
                index,
                x: point.x,
                y: point.y,
                kind,
                color: self.color,
            });
        }

        let Some(index) = hover.index() else {
            return Ok(frame);
        };
        if let Some(point) = geometry.points.get(index) {
            let (guide, column) = self.hover_overlay(point);
            frame = frame.with_hover_overlay(guide, column);
        }
        let tooltip = Tooltip::for_point(&geometry.points, index).map(|tooltip| {
            tooltip.with_labels(&self.config.value_label, &self.config.sub_value_label)
        });
        Ok(frame.with_tooltip(tooltip))
    }

    fn hover_overlay(&self, point: &Coordinate) -> (LinePrimitive, RectPrimitive) {
        let width = self.viewport.width;
        let height = self.viewport.height;
        let guide = LinePrimitive::new(
            point.x,
            0.0,
            point.x,
            height - HOVER_GUIDE_BOTTOM_INSET_PX,
            HOVER_GUIDE_STROKE_WIDTH,
            self.color.with_alpha(HOVER_GUIDE_OPACITY),
        )
        .dashed();
        let column = RectPrimitive::new(
            point.hit_left / 100.0 * width,
            0.0,
            point.hit_width / 100.0 * width,
            height,
            self.color.with_alpha(HOVER_COLUMN_OPACITY),
        )
        .faded_upwards();
        (guide, column)
    }

    fn push_grid(&self, mut frame: RenderFrame, max_value: f64) -> ChartResult<RenderFrame> {
        let grid_color = Color::from_hex(&self.config.grid_color)?.with_alpha(GRID_OPACITY);
        let label_color = Color::from_hex(&self.config.label_color)?;
        let width = self.viewport.width;

        for &level in &self.config.grid_levels {
            let y = grid_level_y(self.viewport, level);
            frame = frame
                .with_grid_line(
                    LinePrimitive::new(0.0, y, width, y, GRID_STROKE_WIDTH, grid_color).dashed(),
                )
                .with_text(TextPrimitive::new(
                    grid_label(level, max_value, &self.config.max_label),
                    width - GRID_LABEL_INSET_PX,
                    y - GRID_LABEL_LIFT_PX,
                    GRID_LABEL_FONT_SIZE_PX,
                    label_color,
                    TextHAlign::Right,
                ));
        }
        Ok(frame)
    }

    fn push_date_labels(
        &self,
        mut frame: RenderFrame,
        geometry: &TrendGeometry,
    ) -> ChartResult<RenderFrame> {
        let label_color = Color::from_hex(&self.config.label_color)?;
        let baseline = self.viewport.height - DATE_LABEL_BASELINE_OFFSET_PX;
        let len = geometry.points.len();

        for (index, point) in geometry.points.iter().enumerate() {
            if point.date.is_empty() {
                continue;
            }
            let h_align = match TooltipAnchor::for_index(index, len) {
                TooltipAnchor::Start => TextHAlign::Left,
                TooltipAnchor::Center => TextHAlign::Center,
                TooltipAnchor::End => TextHAlign::Right,
            };
            let color = if point.is_today {
                self.color
            } else {
                label_color
            };
            frame = frame.with_text(TextPrimitive::new(
                point.date.clone(),
                point.x,
                baseline,
                DATE_LABEL_FONT_SIZE_PX,
                color,
                h_align,
            ));
        }
        Ok(frame)
    }
}

/// Vertical pixel position of a grid guide at `level` (fraction of max).
#[must_use]
pub fn grid_level_y(viewport: Viewport, level: f64) -> f64 {
    viewport.padding_top + viewport.plotting_height() * (1.0 - level)
}

/// Label of a grid guide: `0`, a percentage, or `<prefix>: <max>` at the top.
#[must_use]
pub fn grid_label(level: f64, max_value: f64, max_prefix: &str) -> String {
    if level <= 0.0 {
        "0".to_owned()
    } else if level >= 1.0 {
        format!("{max_prefix}: {max_value}")
    } else {
        format!("{}%", (level * 100.0).round())
    }
}
