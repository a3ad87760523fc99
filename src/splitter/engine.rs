use crate::{
    foundation::core::{Frame, VideoFormat},
    foundation::error::{SplitError, SplitResult},
    surface::event::PointerEvent,
};

/// Declared format of one splitter output, reported once at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OutputSpec {
    /// Format frames for this output will be produced in. Also the target
    /// format the output's renderer is created with.
    pub format: VideoFormat,
}

/// A pluggable splitting engine: turns one composite frame into up to N
/// output frames and remaps pointer events between per-output and
/// composite coordinate spaces.
///
/// Engines may hold internal mutable filter state; the display serializes
/// every call through one global lock, so implementations never need their
/// own synchronization.
pub trait SplitterEngine: Send {
    /// Per-output formats. The slice length is the output count N and is
    /// fixed for the life of the engine, N >= 1.
    fn outputs(&self) -> &[OutputSpec];

    /// Produce this cycle's output frames into `slots` (one slot per
    /// output; a slot may be left empty). `slots.len()` equals
    /// `outputs().len()`.
    ///
    /// An `Err` means the engine cannot handle this frame; the caller
    /// skips the whole cycle and no slot content is used.
    fn split(&mut self, frame: &Frame, slots: &mut [Option<Frame>]) -> SplitResult<()>;

    /// Remap a pointer event from output `index`'s local space into
    /// composite space. An `Err` drops the event.
    fn remap_pointer(&mut self, index: usize, event: PointerEvent) -> SplitResult<PointerEvent>;
}

impl std::fmt::Debug for dyn SplitterEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SplitterEngine")
            .field("outputs", &self.outputs().len())
            .finish_non_exhaustive()
    }
}

/// Resolve a splitting engine by name for the given source format.
///
/// The only built-in engine is `"wall"`, an equal grid of 2x2 by default;
/// `"wall:CxR"` selects the grid explicitly (e.g. `"wall:3x1"`). Unknown
/// names fail construction.
pub fn create_splitter(
    name: &str,
    source: &VideoFormat,
) -> SplitResult<Box<dyn SplitterEngine>> {
    let (base, arg) = match name.split_once(':') {
        Some((base, arg)) => (base, Some(arg)),
        None => (name, None),
    };
    match base {
        "wall" => {
            let (cols, rows) = match arg {
                None => (2, 2),
                Some(arg) => parse_grid(arg)?,
            };
            Ok(Box::new(crate::splitter::wall::WallSplitter::new(
                source, cols, rows,
            )?))
        }
        _ => Err(SplitError::construction(format!(
            "unknown video splitter {name:?}"
        ))),
    }
}

fn parse_grid(arg: &str) -> SplitResult<(u32, u32)> {
    let bad = || SplitError::construction(format!("malformed wall grid {arg:?}, expected CxR"));
    let (cols, rows) = arg.split_once('x').ok_or_else(bad)?;
    let cols: u32 = cols.parse().map_err(|_| bad())?;
    let rows: u32 = rows.parse().map_err(|_| bad())?;
    if cols == 0 || rows == 0 {
        return Err(bad());
    }
    Ok((cols, rows))
}

#[cfg(test)]
#[path = "../../tests/unit/splitter/engine.rs"]
mod tests;
