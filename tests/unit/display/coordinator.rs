use super::*;

use crate::{
    foundation::core::PixelFormat,
    render::backend::Renderer,
    surface::event::{Key, PointerEvent},
    surface::system::{Surface, SurfaceHandler},
};

// Collaborators that must never be reached: both rejection paths below
// fail before any region is constructed.
struct Unreachable;

impl SurfaceSystem for Unreachable {
    fn create_surface(
        &self,
        _config: &SurfaceConfig,
        _handler: Arc<dyn SurfaceHandler>,
    ) -> SplitResult<Box<dyn Surface>> {
        unreachable!("no surface may be created")
    }
}

impl RendererFactory for Unreachable {
    fn create_renderer(
        &self,
        _surface: &dyn Surface,
        _initial_size: Size,
        _format: &VideoFormat,
    ) -> SplitResult<Box<dyn Renderer>> {
        unreachable!("no renderer may be created")
    }
}

impl EventSink for Unreachable {
    fn send_pointer(&self, _event: PointerEvent) {
        unreachable!()
    }

    fn send_key(&self, _key: Key) {
        unreachable!()
    }
}

fn config(placement: Placement, splitter: &str) -> DisplayConfig {
    DisplayConfig {
        source: VideoFormat {
            size: Size::new(64, 64).unwrap(),
            pixel_format: PixelFormat::Rgba8,
        },
        placement,
        splitter: splitter.to_string(),
    }
}

fn open(config: &DisplayConfig) -> SplitResult<SplitDisplay> {
    SplitDisplay::open(
        config,
        Arc::new(Unreachable),
        Arc::new(Unreachable),
        Arc::new(Unreachable),
    )
}

#[test]
fn windowed_placement_is_rejected_outright() {
    let err = open(&config(Placement::Windowed, "wall")).unwrap_err();
    assert!(matches!(err, SplitError::Unsupported(_)));
}

#[test]
fn unknown_engine_aborts_before_any_region() {
    let err = open(&config(Placement::Fullscreen, "nonexistent")).unwrap_err();
    assert!(matches!(err, SplitError::Construction(_)));
}
