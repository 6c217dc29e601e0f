use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Public chart bootstrap configuration.
///
/// Serializable so host applications can persist and load chart setup
/// without inventing their own format. Missing JSON fields fall back to the
/// defaults of the admin dashboard trend chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendChartConfig {
    #[serde(default = "default_view_height")]
    pub view_height: f64,
    #[serde(default = "default_padding_top")]
    pub padding_top: f64,
    #[serde(default = "default_padding_bottom")]
    pub padding_bottom: f64,
    /// Width used until the host reports a measured container width.
    #[serde(default = "default_width")]
    pub default_width: f64,
    /// Stroke and fill color as `#rgb` or `#rrggbb`.
    #[serde(default = "default_color")]
    pub color: String,
    /// Horizontal guides as fractions of the maximum value.
    #[serde(default = "default_grid_levels")]
    pub grid_levels: Vec<f64>,
    #[serde(default = "default_grid_color")]
    pub grid_color: String,
    #[serde(default = "default_label_color")]
    pub label_color: String,
    /// Prefix of the label on the top (`1.0`) grid level.
    #[serde(default = "default_max_label")]
    pub max_label: String,
    /// Text shown instead of the chart when there are no samples.
    #[serde(default = "default_empty_label")]
    pub empty_label: String,
    /// Unit printed after the value in the tooltip.
    #[serde(default = "default_value_label")]
    pub value_label: String,
    /// Caption of the tooltip row holding the secondary value.
    #[serde(default = "default_sub_value_label")]
    pub sub_value_label: String,
}

impl Default for TrendChartConfig {
    fn default() -> Self {
        Self {
            view_height: default_view_height(),
            padding_top: default_padding_top(),
            padding_bottom: default_padding_bottom(),
            default_width: default_width(),
            color: default_color(),
            grid_levels: default_grid_levels(),
            grid_color: default_grid_color(),
            label_color: default_label_color(),
            max_label: default_max_label(),
            empty_label: default_empty_label(),
            value_label: default_value_label(),
            sub_value_label: default_sub_value_label(),
        }
    }
}

impl TrendChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stroke/fill color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the internal viewport height and the label paddings.
    #[must_use]
    pub fn with_view_height(mut self, view_height: f64, padding_top: f64, padding_bottom: f64) -> Self {
        self.view_height = view_height;
        self.padding_top = padding_top;
        self.padding_bottom = padding_bottom;
        self
    }

    #[must_use]
    pub fn with_default_width(mut self, width: f64) -> Self {
        self.default_width = width;
        self
    }

    #[must_use]
    pub fn with_grid_levels(mut self, levels: Vec<f64>) -> Self {
        self.grid_levels = levels;
        self
    }

    #[must_use]
    pub fn with_empty_label(mut self, label: impl Into<String>) -> Self {
        self.empty_label = label.into();
        self
    }

    /// Sets the tooltip unit and secondary-value caption.
    #[must_use]
    pub fn with_tooltip_labels(
        mut self,
        value_label: impl Into<String>,
        sub_value_label: impl Into<String>,
    ) -> Self {
        self.value_label = value_label.into();
        self.sub_value_label = sub_value_label.into();
        self
    }

    /// Viewport for a given measured width.
    #[must_use]
    pub fn viewport(&self, width: f64) -> Viewport {
        Viewport::new(width, self.view_height).with_padding(self.padding_top, self.padding_bottom)
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.viewport(self.default_width).validate()?;
        Color::from_hex(&self.color)?;
        Color::from_hex(&self.grid_color)?;
        Color::from_hex(&self.label_color)?;
        if let Some(level) = self
            .grid_levels
            .iter()
            .find(|level| !level.is_finite() || !(0.0..=1.0).contains(*level))
        {
            return Err(ChartError::InvalidData(format!(
                "grid level {level} must be finite and in [0, 1]"
            )));
        }
        if self.empty_label.is_empty() {
            return Err(ChartError::InvalidData(
                "empty-state label must not be empty".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_view_height() -> f64 {
    400.0
}

fn default_padding_top() -> f64 {
    40.0
}

fn default_padding_bottom() -> f64 {
    35.0
}

fn default_width() -> f64 {
    1000.0
}

fn default_color() -> String {
    "#3b82f6".to_owned()
}

fn default_grid_levels() -> Vec<f64> {
    vec![0.0, 0.5, 1.0]
}

fn default_grid_color() -> String {
    "#e2e8f0".to_owned()
}

fn default_label_color() -> String {
    "#94a3b8".to_owned()
}

fn default_max_label() -> String {
    "max".to_owned()
}

fn default_empty_label() -> String {
    "No trend samples yet".to_owned()
}

fn default_value_label() -> String {
    "sessions".to_owned()
}

fn default_sub_value_label() -> String {
    "messages".to_owned()
}
