use serde::{Deserialize, Serialize};

use crate::core::{Sample, TrendGeometry, Viewport};
use crate::error::ChartResult;
use crate::interaction::Tooltip;
use crate::render::Renderer;

use super::TrendChart;

/// Serializable state snapshot used by regression tests and debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    pub samples: Vec<Sample>,
    pub geometry: TrendGeometry,
    pub hovered_index: Option<usize>,
    pub tooltip: Option<Tooltip>,
}

impl<R: Renderer> TrendChart<R> {
    #[must_use]
    pub fn snapshot(&mut self) -> ChartSnapshot {
        let tooltip = self.tooltip();
        ChartSnapshot {
            viewport: self.viewport(),
            samples: self.samples().to_vec(),
            geometry: self.geometry().clone(),
            hovered_index: self.hovered_index(),
            tooltip,
        }
    }

    pub fn snapshot_json_pretty(&mut self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }
}
