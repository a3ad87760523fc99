use crate::{
    foundation::core::{Frame, Size, VideoFormat},
    foundation::error::{SplitError, SplitResult},
    splitter::engine::{OutputSpec, SplitterEngine},
    surface::event::PointerEvent,
};

struct Cell {
    x: u32,
    y: u32,
    size: Size,
}

/// Built-in grid splitter: divides the source into an equal `cols x rows`
/// wall of crops, in row-major output order. Remainder pixels go to the
/// last column/row.
pub struct WallSplitter {
    source: VideoFormat,
    cells: Vec<Cell>,
    specs: Vec<OutputSpec>,
}

impl WallSplitter {
    /// Build a wall over `source`. Fails if the grid would produce
    /// zero-pixel cells.
    pub fn new(source: &VideoFormat, cols: u32, rows: u32) -> SplitResult<Self> {
        if cols > source.size.width || rows > source.size.height {
            return Err(SplitError::construction(format!(
                "wall {cols}x{rows} does not fit a {}x{} source",
                source.size.width, source.size.height
            )));
        }
        let cell_w = source.size.width / cols;
        let cell_h = source.size.height / rows;
        let mut cells = Vec::with_capacity((cols * rows) as usize);
        let mut specs = Vec::with_capacity(cells.capacity());
        for row in 0..rows {
            for col in 0..cols {
                // Last column/row absorbs the division remainder.
                let w = if col == cols - 1 {
                    source.size.width - col * cell_w
                } else {
                    cell_w
                };
                let h = if row == rows - 1 {
                    source.size.height - row * cell_h
                } else {
                    cell_h
                };
                let size = Size::new(w, h)?;
                cells.push(Cell {
                    x: col * cell_w,
                    y: row * cell_h,
                    size,
                });
                specs.push(OutputSpec {
                    format: VideoFormat {
                        size,
                        pixel_format: source.pixel_format,
                    },
                });
            }
        }
        Ok(Self {
            source: *source,
            cells,
            specs,
        })
    }
}

impl SplitterEngine for WallSplitter {
    fn outputs(&self) -> &[OutputSpec] {
        &self.specs
    }

    fn split(&mut self, frame: &Frame, slots: &mut [Option<Frame>]) -> SplitResult<()> {
        if frame.format() != self.source {
            return Err(SplitError::filter(format!(
                "frame format {:?} does not match negotiated source {:?}",
                frame.format(),
                self.source
            )));
        }
        for (slot, cell) in slots.iter_mut().zip(&self.cells) {
            *slot = Some(frame.crop(cell.x, cell.y, cell.size)?);
        }
        Ok(())
    }

    fn remap_pointer(&mut self, index: usize, event: PointerEvent) -> SplitResult<PointerEvent> {
        let cell = self
            .cells
            .get(index)
            .ok_or_else(|| SplitError::remap(format!("no output {index}")))?;
        let inside = event.x >= 0
            && event.y >= 0
            && (event.x as u32) < cell.size.width
            && (event.y as u32) < cell.size.height;
        if !inside {
            return Err(SplitError::remap(format!(
                "event at ({}, {}) outside {}x{} output {index}",
                event.x, event.y, cell.size.width, cell.size.height
            )));
        }
        Ok(event.translated(cell.x as i32, cell.y as i32))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/splitter/wall.rs"]
mod tests;
