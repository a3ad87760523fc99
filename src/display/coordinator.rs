use std::sync::Arc;

use parking_lot::Mutex;

use crate::{
    display::pass::RenderPass,
    display::region::{Region, RegionHandler, RegionState, Shared, teardown_regions},
    foundation::core::{Frame, Placement, Size, VideoFormat},
    foundation::error::{SplitError, SplitResult},
    render::backend::RendererFactory,
    splitter::engine::create_splitter,
    surface::system::{EventSink, SurfaceConfig, SurfaceSystem},
};

/// Configuration for opening a [`SplitDisplay`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct DisplayConfig {
    /// Format of the composite source stream.
    pub source: VideoFormat,
    /// Placement of the composite display. Only
    /// [`Placement::Fullscreen`] is accepted.
    pub placement: Placement,
    /// Splitting engine selector, e.g. `"wall"` or `"wall:3x1"`. See
    /// [`create_splitter`].
    pub splitter: String,
}

/// Composite-level change notifications delivered to the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ControlQuery {
    /// Source aspect ratio changed.
    SourceAspect,
    /// Source crop rectangle changed.
    SourceCrop,
    /// Source placement within the display changed.
    SourcePlace,
    /// Composite display size changed.
    DisplaySize,
    /// Zoom factor changed.
    Zoom,
}

/// Fans one composite frame stream out across N output regions, each a
/// window plus renderer of its own.
///
/// The render scheduler drives one frame at a time through the two-phase
/// cycle: [`prepare`](Self::prepare) returns a [`RenderPass`] holding the
/// per-region guards, and [`RenderPass::commit`] presents and releases
/// them. Surface events (resize, close, pointer, key) arrive concurrently
/// on the surfaces' own threads and synchronize on the same guards.
///
/// Dropping the display closes it: every region is torn down in index
/// order, renderers destroyed outside their region guard, then the
/// surfaces, then the splitting engine.
pub struct SplitDisplay {
    shared: Arc<Shared>,
    regions: Vec<Region>,
}

impl std::fmt::Debug for SplitDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SplitDisplay")
            .field("regions", &self.regions.len())
            .finish_non_exhaustive()
    }
}

impl SplitDisplay {
    /// Open the display: resolve the splitting engine by name, then build
    /// one region per engine output, in order.
    ///
    /// Construction is all-or-nothing. A failure at region k tears down
    /// exactly regions 0..k (and nothing beyond) before returning the
    /// error.
    #[tracing::instrument(skip(surfaces, renderers, sink))]
    pub fn open(
        config: &DisplayConfig,
        surfaces: Arc<dyn SurfaceSystem>,
        renderers: Arc<dyn RendererFactory>,
        sink: Arc<dyn EventSink>,
    ) -> SplitResult<Self> {
        if config.placement == Placement::Windowed {
            return Err(SplitError::unsupported(
                "windowed composition is not supported by the split display",
            ));
        }

        let engine = create_splitter(&config.splitter, &config.source)?;
        let specs = engine.outputs().to_vec();
        if specs.is_empty() {
            return Err(SplitError::construction(format!(
                "splitter {:?} reports no outputs",
                config.splitter
            )));
        }

        let shared = Arc::new(Shared {
            engine: Mutex::new(engine),
            sink,
        });

        let mut regions: Vec<Region> = Vec::with_capacity(specs.len());
        for (index, spec) in specs.iter().enumerate() {
            let state = Arc::new(Mutex::new(RegionState {
                renderer: None,
                size: Size::MIN,
            }));
            let handler = Arc::new(RegionHandler {
                index,
                state: state.clone(),
                shared: shared.clone(),
            });
            let surface_config = SurfaceConfig {
                default_size: spec.format.size,
                decorated: true,
            };

            let surface = match surfaces.create_surface(&surface_config, handler) {
                Ok(surface) => surface,
                Err(err) => {
                    teardown_regions(&mut regions);
                    return Err(SplitError::construction(format!(
                        "creating surface for region {index}: {err}"
                    )));
                }
            };
            if let Err(err) = surface.enable() {
                drop(surface);
                teardown_regions(&mut regions);
                return Err(SplitError::construction(format!(
                    "enabling surface for region {index}: {err}"
                )));
            }

            // A resize callback may already have raced in between enable
            // and here; the snapshot honors it over the 1x1 default.
            let mut state_guard = state.lock();
            let initial_size = state_guard.size;
            match renderers.create_renderer(surface.as_ref(), initial_size, &spec.format) {
                Ok(renderer) => {
                    state_guard.renderer = Some(renderer);
                    drop(state_guard);
                    regions.push(Region { surface, state });
                }
                Err(err) => {
                    drop(state_guard);
                    surface.disable();
                    drop(surface);
                    teardown_regions(&mut regions);
                    return Err(SplitError::construction(format!(
                        "creating renderer for region {index}: {err}"
                    )));
                }
            }
        }

        Ok(Self { shared, regions })
    }

    /// Number of output regions. Fixed after open.
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Phase 1 of the render cycle: split `frame` under the global guard,
    /// then, in index order, acquire each region's guard and prepare that
    /// region's frame on its bound renderer at the region's current size.
    ///
    /// If the engine declines the frame the returned pass is skipped: no
    /// region guard was taken and committing it does nothing, so the
    /// whole cycle is a no-op for every region.
    pub fn prepare(&self, frame: &Frame) -> RenderPass<'_> {
        let mut slots: Vec<Option<Frame>> = self.regions.iter().map(|_| None).collect();

        {
            let mut engine = self.shared.engine.lock();
            if let Err(err) = engine.split(frame, &mut slots) {
                drop(engine);
                tracing::debug!(error = %err, "splitter declined frame, skipping cycle");
                return RenderPass::skipped();
            }
        }

        let mut guards = Vec::with_capacity(self.regions.len());
        for (region, slot) in self.regions.iter().zip(slots.iter_mut()) {
            let mut guard = region.state.lock();
            let state = &mut *guard;
            if let Some(renderer) = state.renderer.as_mut() {
                if let Some(produced) = slot.take() {
                    *slot = Some(renderer.prepare(produced, state.size));
                }
            }
            guards.push(guard);
        }
        RenderPass::new(slots, guards)
    }

    /// Acknowledge composite-level source changes. Aspect, crop, and
    /// placement changes need no work here (every region re-derives its
    /// own geometry from the engine); anything else is unsupported.
    pub fn control(&self, query: ControlQuery) -> SplitResult<()> {
        match query {
            ControlQuery::SourceAspect | ControlQuery::SourceCrop | ControlQuery::SourcePlace => {
                Ok(())
            }
            other => Err(SplitError::unsupported(format!("control query {other:?}"))),
        }
    }
}

impl Drop for SplitDisplay {
    fn drop(&mut self) {
        teardown_regions(&mut self.regions);
        // The engine itself is released when the last surface handler
        // drops its handle to the shared state.
    }
}

#[cfg(test)]
#[path = "../../tests/unit/display/coordinator.rs"]
mod tests;
