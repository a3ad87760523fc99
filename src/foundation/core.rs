use std::sync::Arc;

use crate::foundation::error::{SplitError, SplitResult};

/// Pixel dimensions of a surface or frame. Both axes are always > 0.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Smallest valid size, used as the negotiated size of a region before
    /// its surface reports a real one.
    pub const MIN: Self = Self {
        width: 1,
        height: 1,
    };

    /// Build a validated size; zero on either axis is rejected.
    pub fn new(width: u32, height: u32) -> SplitResult<Self> {
        if width == 0 || height == 0 {
            return Err(SplitError::unsupported("Size axes must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Pixel count, saturating.
    pub fn area(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Memory layout of a frame's pixel buffer. Opaque to the coordination
/// core; only the built-in wall splitter interprets it.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, Default,
)]
pub enum PixelFormat {
    /// 8-bit RGBA, 4 bytes per pixel.
    #[default]
    Rgba8,
    /// 8-bit BGRA, 4 bytes per pixel.
    Bgra8,
}

impl PixelFormat {
    /// Bytes per pixel for this format.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgba8 | Self::Bgra8 => 4,
        }
    }
}

/// Negotiated format of a video stream: dimensions plus pixel layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VideoFormat {
    /// Frame dimensions.
    pub size: Size,
    /// Pixel buffer layout.
    pub pixel_format: PixelFormat,
}

/// Placement of the composite display on screen.
///
/// Windowed composition is not supported by the split display; `open`
/// rejects it outright.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Placement {
    /// Full-screen / exclusive placement.
    Fullscreen,
    /// Ordinary windowed placement.
    Windowed,
}

/// A refcounted, immutable video frame.
///
/// `Clone` holds another reference to the same pixel buffer and `Drop`
/// releases it, so frames can be handed between the coordinator, the
/// splitting engine, and renderers without copies. Renderers may substitute
/// a different `Frame` during prepare; the original is released when the
/// substituted one overwrites it.
#[derive(Clone, Debug)]
pub struct Frame {
    format: VideoFormat,
    data: Arc<[u8]>,
}

impl Frame {
    /// Build a frame from a pixel buffer, validating the buffer length
    /// against the format.
    pub fn new(format: VideoFormat, data: Vec<u8>) -> SplitResult<Self> {
        let expected = format.size.area() as usize * format.pixel_format.bytes_per_pixel();
        if data.len() != expected {
            return Err(SplitError::unsupported(format!(
                "frame buffer is {} bytes, format requires {expected}",
                data.len()
            )));
        }
        Ok(Self {
            format,
            data: data.into(),
        })
    }

    /// Format this frame was produced in.
    pub fn format(&self) -> VideoFormat {
        self.format
    }

    /// Raw pixel bytes, row-major, no padding.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Copy out the `size` rectangle whose top-left corner is at
    /// `(x, y)`. The rectangle must lie fully inside the frame.
    pub fn crop(&self, x: u32, y: u32, size: Size) -> SplitResult<Self> {
        let src = self.format.size;
        if x.saturating_add(size.width) > src.width || y.saturating_add(size.height) > src.height {
            return Err(SplitError::unsupported(format!(
                "crop {}x{}+{x}+{y} exceeds source {}x{}",
                size.width, size.height, src.width, src.height
            )));
        }
        let bpp = self.format.pixel_format.bytes_per_pixel();
        let src_stride = src.width as usize * bpp;
        let out_stride = size.width as usize * bpp;
        let mut out = Vec::with_capacity(out_stride * size.height as usize);
        for row in 0..size.height as usize {
            let start = (y as usize + row) * src_stride + x as usize * bpp;
            out.extend_from_slice(&self.data[start..start + out_stride]);
        }
        Frame::new(
            VideoFormat {
                size,
                pixel_format: self.format.pixel_format,
            },
            out,
        )
    }

    /// Whether two frames share the same underlying pixel buffer.
    pub fn same_buffer(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
