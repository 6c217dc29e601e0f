use serde::{Deserialize, Serialize};

use crate::core::{Coordinate, hit_index_at};
use crate::error::{ChartError, ChartResult};

/// Visual state of a sample's point marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerKind {
    Hidden,
    /// Pulsing marker on the latest sample while it is not hovered.
    Today,
    Hovered,
}

/// Which edge of the tooltip box is pinned to the sample position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TooltipAnchor {
    /// Box starts at the sample and grows right (first sample).
    Start,
    Center,
    /// Box ends at the sample and grows left (last sample).
    End,
}

impl TooltipAnchor {
    #[must_use]
    pub fn for_index(index: usize, len: usize) -> Self {
        if index == 0 {
            Self::Start
        } else if index + 1 == len {
            Self::End
        } else {
            Self::Center
        }
    }
}

/// Tooltip content for the hovered sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub index: usize,
    pub date: String,
    pub value: f64,
    pub sub_value: Option<f64>,
    pub anchor: TooltipAnchor,
    pub left_percent: f64,
    /// Distance of the tooltip's bottom edge from the viewport bottom, in percent.
    pub bottom_percent: f64,
    /// Unit shown after `value`; empty prints the bare number.
    #[serde(default)]
    pub value_label: String,
    /// Caption of the `sub_value` row.
    #[serde(default)]
    pub sub_value_label: String,
}

impl Tooltip {
    #[must_use]
    pub fn for_point(points: &[Coordinate], index: usize) -> Option<Self> {
        let point = points.get(index)?;
        Some(Self {
            index,
            date: point.date.clone(),
            value: point.value,
            sub_value: point.sub_value,
            anchor: TooltipAnchor::for_index(index, points.len()),
            left_percent: point.left_percent,
            bottom_percent: 100.0 - point.top_percent,
            value_label: String::new(),
            sub_value_label: String::new(),
        })
    }

    #[must_use]
    pub fn with_labels(mut self, value_label: &str, sub_value_label: &str) -> Self {
        self.value_label = value_label.to_owned();
        self.sub_value_label = sub_value_label.to_owned();
        self
    }

    /// Value row text, e.g. `20 sessions`.
    #[must_use]
    pub fn value_text(&self) -> String {
        labelled(self.value, &self.value_label, false)
    }

    /// Secondary row text, e.g. `messages: 48`, when a secondary value exists.
    #[must_use]
    pub fn sub_value_text(&self) -> Option<String> {
        self.sub_value
            .map(|value| labelled(value, &self.sub_value_label, true))
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.left_percent.is_finite() || !self.bottom_percent.is_finite() {
            return Err(ChartError::InvalidData(
                "tooltip position must be finite".to_owned(),
            ));
        }
        if !self.value.is_finite() || self.sub_value.is_some_and(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(
                "tooltip values must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

fn labelled(value: f64, label: &str, caption_first: bool) -> String {
    match (label.is_empty(), caption_first) {
        (true, _) => value.to_string(),
        (false, true) => format!("{label}: {value}"),
        (false, false) => format!("{value} {label}"),
    }
}

/// Hover index owned by one chart.
///
/// Set by pointer enter/move over a hit region, cleared on pointer leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HoverState {
    index: Option<usize>,
}

impl HoverState {
    #[must_use]
    pub fn index(self) -> Option<usize> {
        self.index
    }

    /// Pointer entered the hit region of `index`.
    ///
    /// Indices outside the current series clear the hover instead.
    /// Returns `true` when the hovered index changed.
    pub fn on_pointer_enter(&mut self, index: usize, len: usize) -> bool {
        let next = (index < len).then_some(index);
        self.replace(next)
    }

    /// Pointer moved to `percent` of the viewport width.
    pub fn on_pointer_move(&mut self, percent: f64, points: &[Coordinate]) -> bool {
        self.replace(hit_index_at(points, percent))
    }

    pub fn on_pointer_leave(&mut self) -> bool {
        self.replace(None)
    }

    #[must_use]
    pub fn marker_kind(self, index: usize, len: usize) -> MarkerKind {
        if self.index == Some(index) {
            MarkerKind::Hovered
        } else if index + 1 == len {
            MarkerKind::Today
        } else {
            MarkerKind::Hidden
        }
    }

    fn replace(&mut self, next: Option<usize>) -> bool {
        let changed = self.index != next;
        self.index = next;
        changed
    }
}
