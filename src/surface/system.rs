use std::sync::Arc;

use crate::{
    foundation::core::Size,
    foundation::error::SplitResult,
    surface::event::{Key, PointerEvent},
};

/// Window-creation parameters for one region surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SurfaceConfig {
    /// Initial window size, derived from the output's declared format.
    pub default_size: Size,
    /// Whether the window should carry decorations.
    pub decorated: bool,
}

/// Callbacks a surface delivers on its own thread.
///
/// The display registers exactly one handler per region surface at
/// creation time; the handler carries the region's identity, so the
/// subsystem never sees raw back-references. A handler may be invoked
/// concurrently with render cycles and with handlers of other regions,
/// but the subsystem delivers events for one surface sequentially.
pub trait SurfaceHandler: Send + Sync {
    /// The surface was resized. `ack` (when supplied) must be invoked
    /// after the new size has been applied; the subsystem may read the
    /// applied state from within it.
    fn resized(&self, size: Size, ack: Option<&dyn Fn(Size)>);

    /// The surface was closed from outside.
    fn closed(&self);

    /// Pointer activity in surface-local coordinates.
    fn pointer(&self, event: PointerEvent);

    /// Key press on the surface.
    fn key(&self, key: Key);
}

/// One live output window. Dropping the handle destroys the window; the
/// subsystem stops delivering callbacks for it before destruction
/// completes, so a region always outlives its pending callbacks.
pub trait Surface: Send {
    /// Make the window visible and start callback delivery.
    fn enable(&self) -> SplitResult<()>;

    /// Hide the window and stop callback delivery.
    fn disable(&self);
}

/// The window subsystem the display creates its region surfaces through.
pub trait SurfaceSystem: Send + Sync {
    /// Create one window wired to `handler`. The window starts disabled.
    fn create_surface(
        &self,
        config: &SurfaceConfig,
        handler: Arc<dyn SurfaceHandler>,
    ) -> SplitResult<Box<dyn Surface>>;
}

/// Event sink of the composite window. Remapped pointer events and key
/// presses from every region surface funnel into it.
pub trait EventSink: Send + Sync {
    /// Deliver a pointer event in composite-space coordinates.
    fn send_pointer(&self, event: PointerEvent);

    /// Deliver a key press.
    fn send_key(&self, key: Key);
}
