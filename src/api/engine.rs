use tracing::{debug, trace, warn};

use crate::core::{Sample, TrendGeometry, Viewport, build_geometry};
use crate::error::ChartResult;
use crate::interaction::{HoverState, Tooltip};
use crate::render::{Color, RenderFrame, Renderer};

use super::TrendChartConfig;
use super::frame_builder::FrameBuilder;

/// Main facade consumed by host applications.
///
/// Owns the sample series, the observed container width and the hover
/// state. Geometry is derived lazily and cached until samples or width
/// change.
pub struct TrendChart<R: Renderer> {
    renderer: R,
    config: TrendChartConfig,
    color: Color,
    samples: Vec<Sample>,
    width: f64,
    hover: HoverState,
    geometry: Option<TrendGeometry>,
    geometry_generation: u64,
}

impl<R: Renderer> TrendChart<R> {
    /// Creates a chart with no samples at the configured default width.
    pub fn new(renderer: R, config: TrendChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let color = Color::from_hex(&config.color)?;
        Ok(Self {
            renderer,
            width: config.default_width,
            config,
            color,
            samples: Vec::new(),
            hover: HoverState::default(),
            geometry: None,
            geometry_generation: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &TrendChartConfig {
        &self.config
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, hex: &str) -> ChartResult<()> {
        self.color = Color::from_hex(hex)?;
        self.config.color = hex.to_owned();
        Ok(())
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport(self.width)
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Replaces the sample series.
    ///
    /// Hover is cleared because indices of the old series are meaningless
    /// for the new one.
    pub fn set_samples(&mut self, samples: Vec<Sample>) {
        debug!(count = samples.len(), "set trend samples");
        self.samples = samples;
        self.geometry = None;
        if self.hover.on_pointer_leave() {
            trace!("hover cleared after data replacement");
        }
    }

    /// Applies a measured container width.
    ///
    /// Non-positive and non-finite widths are ignored, as are repeats of the
    /// current width. Returns `true` when the width changed.
    pub fn on_resize(&mut self, width: f64) -> bool {
        if !width.is_finite() || width <= 0.0 {
            warn!(width, "ignoring resize to unusable width");
            return false;
        }
        if width == self.width {
            return false;
        }
        trace!(from = self.width, to = width, "resize");
        self.width = width;
        self.geometry = None;
        true
    }

    /// Returns geometry for the current samples and width.
    pub fn geometry(&mut self) -> &TrendGeometry {
        let viewport = self.viewport();
        cached_geometry(
            &mut self.geometry,
            &mut self.geometry_generation,
            &self.samples,
            viewport,
        )
    }

    /// Number of geometry recomputations so far.
    #[must_use]
    pub fn geometry_generation(&self) -> u64 {
        self.geometry_generation
    }

    #[must_use]
    pub fn hovered_index(&self) -> Option<usize> {
        self.hover.index()
    }

    /// Pointer entered the hit region of sample `index`.
    pub fn pointer_enter(&mut self, index: usize) -> bool {
        let changed = self.hover.on_pointer_enter(index, self.samples.len());
        if changed {
            trace!(index = ?self.hover.index(), "hover enter");
        }
        changed
    }

    /// Pointer moved to `x` pixels from the left edge of the viewport.
    pub fn pointer_move(&mut self, x: f64) -> bool {
        let percent = x / self.width * 100.0;
        let viewport = self.viewport();
        let geometry = cached_geometry(
            &mut self.geometry,
            &mut self.geometry_generation,
            &self.samples,
            viewport,
        );
        let changed = self.hover.on_pointer_move(percent, &geometry.points);
        if changed {
            trace!(index = ?self.hover.index(), percent, "hover move");
        }
        changed
    }

    pub fn pointer_leave(&mut self) -> bool {
        let changed = self.hover.on_pointer_leave();
        if changed {
            trace!("hover leave");
        }
        changed
    }

    /// Tooltip for the hovered sample, if any, with the configured labels.
    pub fn tooltip(&mut self) -> Option<Tooltip> {
        let index = self.hover.index()?;
        let tooltip = Tooltip::for_point(&self.geometry().points, index)?;
        Some(tooltip.with_labels(&self.config.value_label, &self.config.sub_value_label))
    }

    /// Builds the backend-agnostic frame for the current state.
    pub fn build_frame(&mut self) -> ChartResult<RenderFrame> {
        let viewport = self.viewport();
        let geometry = cached_geometry(
            &mut self.geometry,
            &mut self.geometry_generation,
            &self.samples,
            viewport,
        );
        FrameBuilder::new(&self.config, viewport, self.color).build(geometry, self.hover)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_frame()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

fn cached_geometry<'a>(
    slot: &'a mut Option<TrendGeometry>,
    generation: &mut u64,
    samples: &[Sample],
    viewport: Viewport,
) -> &'a TrendGeometry {
    slot.get_or_insert_with(|| {
        *generation += 1;
        debug!(
            count = samples.len(),
            width = viewport.width,
            generation = *generation,
            "recompute trend geometry"
        );
        build_geometry(samples, viewport)
    })
}
