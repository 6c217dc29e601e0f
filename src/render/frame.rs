use serde::{Deserialize, Serialize};

use crate::core::{PathData, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::Tooltip;
use crate::render::{Color, LinePrimitive, MarkerPrimitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one trend-chart draw pass.
///
/// Paths are in viewport pixel space; an empty frame carries `empty_state`
/// text and no paths. `hover_guide` and `hover_column` are only set while a
/// sample is hovered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub color: Color,
    pub line_path: PathData,
    pub area_path: PathData,
    pub grid_lines: Vec<LinePrimitive>,
    pub hover_guide: Option<LinePrimitive>,
    pub hover_column: Option<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub markers: Vec<MarkerPrimitive>,
    pub tooltip: Option<Tooltip>,
    pub empty_state: Option<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, color: Color) -> Self {
        Self {
            viewport,
            color,
            line_path: PathData::new(),
            area_path: PathData::new(),
            grid_lines: Vec::new(),
            hover_guide: None,
            hover_column: None,
            texts: Vec::new(),
            markers: Vec::new(),
            tooltip: None,
            empty_state: None,
        }
    }

    #[must_use]
    pub fn with_paths(mut self, line_path: PathData, area_path: PathData) -> Self {
        self.line_path = line_path;
        self.area_path = area_path;
        self
    }

    #[must_use]
    pub fn with_grid_line(mut self, line: LinePrimitive) -> Self {
        self.grid_lines.push(line);
        self
    }

    /// Sets the dotted guide and the highlighted column of the hovered sample.
    #[must_use]
    pub fn with_hover_overlay(mut self, guide: LinePrimitive, column: RectPrimitive) -> Self {
        self.hover_guide = Some(guide);
        self.hover_column = Some(column);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: MarkerPrimitive) -> Self {
        self.markers.push(marker);
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: Option<Tooltip>) -> Self {
        self.tooltip = tooltip;
        self
    }

    #[must_use]
    pub fn with_empty_state(mut self, text: TextPrimitive) -> Self {
        self.empty_state = Some(text);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.viewport.validate()?;
        self.color.validate()?;

        if !self.line_path.is_finite() || !self.area_path.is_finite() {
            return Err(ChartError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }
        for line in self.grid_lines.iter().chain(&self.hover_guide) {
            line.validate()?;
        }
        if let Some(column) = self.hover_column {
            column.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        for marker in &self.markers {
            marker.validate()?;
        }
        if let Some(tooltip) = &self.tooltip {
            tooltip.validate()?;
        }
        if let Some(text) = &self.empty_state {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.line_path.is_empty() && self.markers.is_empty() && self.texts.is_empty()
    }
}
