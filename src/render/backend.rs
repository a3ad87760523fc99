use crate::{
    foundation::core::{Frame, Size, VideoFormat},
    foundation::error::SplitResult,
    surface::system::Surface,
};

/// Renderer bound to one region surface.
///
/// Every call except destruction happens under the owning region's guard;
/// destruction (`Drop`) is always performed outside any guard so a slow
/// renderer teardown cannot block concurrent surface callbacks.
pub trait Renderer: Send {
    /// Get `frame` ready for presentation at `size`. The renderer may
    /// return a substituted frame (e.g. converted or padded); the caller
    /// presents whatever comes back.
    fn prepare(&mut self, frame: Frame, size: Size) -> Frame;

    /// Put the prepared frame on screen.
    fn present(&mut self, frame: &Frame);

    /// The surface changed size; adjust output scaling.
    fn resize(&mut self, size: Size);
}

/// Creates renderers for region surfaces. Called once per region during
/// open, under that region's guard.
pub trait RendererFactory: Send + Sync {
    /// Build a renderer targeting `surface` at `initial_size`, producing
    /// output in `format`.
    fn create_renderer(
        &self,
        surface: &dyn Surface,
        initial_size: Size,
        format: &VideoFormat,
    ) -> SplitResult<Box<dyn Renderer>>;
}
