use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{day_label, decimal_to_f64};
use crate::error::{ChartError, ChartResult};

/// Abstract drawing surface the geometry is computed against.
///
/// `padding_top` and `padding_bottom` reserve room for labels above the
/// maximum and below the zero line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            padding_top: 0.0,
            padding_bottom: 0.0,
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding_top: f64, padding_bottom: f64) -> Self {
        self.padding_top = padding_top;
        self.padding_bottom = padding_bottom;
        self
    }

    #[must_use]
    pub fn plotting_height(self) -> f64 {
        self.height - self.padding_top - self.padding_bottom
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
            && self.padding_top.is_finite()
            && self.padding_bottom.is_finite()
            && self.padding_top >= 0.0
            && self.padding_bottom >= 0.0
            && self.plotting_height() > 0.0
    }

    pub fn validate(self) -> ChartResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// One raw input point of the trend series.
///
/// `date` is an opaque label; the position of a sample in its series, not
/// the label, decides where it is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub date: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_value: Option<f64>,
}

impl Sample {
    #[must_use]
    pub fn new(date: impl Into<String>, value: f64) -> Self {
        Self {
            date: date.into(),
            value,
            sub_value: None,
        }
    }

    #[must_use]
    pub fn with_sub_value(mut self, sub_value: f64) -> Self {
        self.sub_value = Some(sub_value);
        self
    }

    pub fn from_decimal(date: impl Into<String>, value: Decimal) -> ChartResult<Self> {
        Ok(Self::new(date, decimal_to_f64(value, "value")?))
    }

    #[must_use]
    pub fn from_day(day: NaiveDate, value: f64) -> Self {
        Self::new(day_label(day), value)
    }
}
