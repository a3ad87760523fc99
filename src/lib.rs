//! Vidsplit fans a single composited video frame stream out across N
//! independently rendered regions, one output window plus renderer per
//! region.
//!
//! The crate is a coordination layer, not a rendering engine. Frame
//! splitting, window management, and per-region rendering are pluggable
//! collaborators ([`SplitterEngine`], [`SurfaceSystem`], [`Renderer`]);
//! what lives here is the concurrency protocol that keeps N surfaces
//! consistent under two concurrently active event sources:
//!
//! 1. **The render scheduler** — one frame at a time, in two phases.
//!    [`SplitDisplay::prepare`] splits the frame and acquires every
//!    region's guard; the returned [`RenderPass`] carries those guards to
//!    [`RenderPass::commit`], which presents and releases them. A guard is
//!    therefore acquired in one operation and released in a later,
//!    different one; the pass token makes that handoff explicit and the
//!    borrow checker enforces that phases alternate.
//! 2. **Surface events** — resize, close, pointer, and key callbacks
//!    arriving on each surface's own thread, synchronizing on the same
//!    per-region guards (and on the display-wide engine guard for pointer
//!    and key events).
//!
//! Construction is ordered and all-or-nothing: regions are built one at a
//! time and a failure at region k tears down exactly the regions built
//! before it. Teardown mirrors that order and tolerates renderers already
//! torn down by an asynchronous close.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use vidsplit::{DisplayConfig, Placement, PixelFormat, Size, SplitDisplay, VideoFormat};
//! # fn collaborators() -> (Arc<dyn vidsplit::SurfaceSystem>, Arc<dyn vidsplit::RendererFactory>, Arc<dyn vidsplit::EventSink>) { unimplemented!() }
//! # fn next_frame() -> vidsplit::Frame { unimplemented!() }
//!
//! let (surfaces, renderers, sink) = collaborators();
//! let config = DisplayConfig {
//!     source: VideoFormat {
//!         size: Size::new(1920, 1080)?,
//!         pixel_format: PixelFormat::Rgba8,
//!     },
//!     placement: Placement::Fullscreen,
//!     splitter: "wall:2x2".to_string(),
//! };
//! let display = SplitDisplay::open(&config, surfaces, renderers, sink)?;
//!
//! for _ in 0..3 {
//!     let frame = next_frame();
//!     let pass = display.prepare(&frame);
//!     // ...wait for the presentation deadline...
//!     pass.commit();
//! }
//! # Ok::<(), vidsplit::SplitError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod display;
mod foundation;
mod render;
mod splitter;
mod surface;

pub use display::coordinator::{ControlQuery, DisplayConfig, SplitDisplay};
pub use display::pass::RenderPass;
pub use foundation::core::{Frame, PixelFormat, Placement, Size, VideoFormat};
pub use foundation::error::{SplitError, SplitResult};
pub use render::backend::{Renderer, RendererFactory};
pub use splitter::engine::{create_splitter, OutputSpec, SplitterEngine};
pub use splitter::wall::WallSplitter;
pub use surface::event::{Key, PointerAction, PointerButton, PointerEvent};
pub use surface::system::{EventSink, Surface, SurfaceConfig, SurfaceHandler, SurfaceSystem};
