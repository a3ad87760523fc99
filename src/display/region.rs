use std::sync::Arc;

use parking_lot::Mutex;

use crate::{
    foundation::core::Size,
    render::backend::Renderer,
    splitter::engine::SplitterEngine,
    surface::event::{Key, PointerEvent},
    surface::system::{EventSink, Surface, SurfaceHandler},
};

/// State a region's surface callbacks and the render cycle contend for.
/// Held behind the region guard; `renderer` is read or written only while
/// the guard is held.
pub(crate) struct RegionState {
    /// Bound renderer. `None` before binding, after teardown, and after an
    /// asynchronous close.
    pub(crate) renderer: Option<Box<dyn Renderer>>,
    /// Last size reported by the surface. 1x1 until the first resize.
    pub(crate) size: Size,
}

/// One constructed output region: an enabled surface plus its guarded
/// state. The vector of these inside the display only ever holds fully
/// constructed regions, so rollback and teardown never index past the
/// constructed prefix.
pub(crate) struct Region {
    pub(crate) surface: Box<dyn Surface>,
    pub(crate) state: Arc<Mutex<RegionState>>,
}

impl Region {
    /// Shared by mid-construction rollback and display drop: clear the
    /// renderer under the guard, destroy it outside the guard, then
    /// disable and destroy the surface. A renderer already cleared by an
    /// asynchronous close is simply absent here.
    pub(crate) fn teardown(self) {
        let renderer = self.state.lock().renderer.take();
        drop(renderer);
        self.surface.disable();
    }
}

/// Tear down every constructed region, in index order.
pub(crate) fn teardown_regions(regions: &mut Vec<Region>) {
    for region in regions.drain(..) {
        region.teardown();
    }
}

/// Engine state shared between the render cycle and every region's
/// pointer/key callbacks. The mutex is the display's global guard.
pub(crate) struct Shared {
    pub(crate) engine: Mutex<Box<dyn SplitterEngine>>,
    pub(crate) sink: Arc<dyn EventSink>,
}

/// Surface-callback handler for one region, registered at surface
/// creation. Carries the region's index and shared handles instead of a
/// back-reference into the display.
pub(crate) struct RegionHandler {
    pub(crate) index: usize,
    pub(crate) state: Arc<Mutex<RegionState>>,
    pub(crate) shared: Arc<Shared>,
}

impl SurfaceHandler for RegionHandler {
    fn resized(&self, size: Size, ack: Option<&dyn Fn(Size)>) {
        let mut state = self.state.lock();
        state.size = size;
        if let Some(renderer) = state.renderer.as_mut() {
            renderer.resize(size);
        }
        // The ack may read the just-applied size, so it runs before the
        // guard is released.
        if let Some(ack) = ack {
            ack(size);
        }
    }

    fn closed(&self) {
        let renderer = self.state.lock().renderer.take();
        // Destroyed outside the guard; the surface itself stays with the
        // display until teardown.
        drop(renderer);
    }

    fn pointer(&self, event: PointerEvent) {
        let mut engine = self.shared.engine.lock();
        match engine.remap_pointer(self.index, event) {
            Ok(remapped) => self.shared.sink.send_pointer(remapped),
            Err(err) => tracing::trace!(region = self.index, error = %err, "pointer event dropped"),
        }
    }

    fn key(&self, key: Key) {
        // Touches no engine state, but stays serialized with pointer
        // remapping and the filter call so event ordering is stable.
        let _engine = self.shared.engine.lock();
        self.shared.sink.send_key(key);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/display/region.rs"]
mod tests;
