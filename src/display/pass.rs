use parking_lot::MutexGuard;

use crate::{display::region::RegionState, foundation::core::Frame};

/// In-flight render cycle: the token handed from phase 1 (prepare) to
/// phase 2 (commit).
///
/// The pass owns this cycle's frame slots and, for a successful cycle,
/// the guard of every region, acquired in index order during
/// [`SplitDisplay::prepare`]. Holding the guards across the
/// prepare-to-present span is what keeps an asynchronous resize or close
/// from mutating or destroying a renderer while its frame is mid-flight.
///
/// [`commit`](Self::commit) is the only place those guards are released.
/// Because the pass borrows the display, the borrow checker rules out
/// starting another cycle before this one is committed (or dropped, which
/// releases the guards without presenting).
///
/// [`SplitDisplay::prepare`]: crate::SplitDisplay::prepare
#[must_use = "an uncommitted pass releases its region guards without presenting"]
pub struct RenderPass<'d> {
    slots: Vec<Option<Frame>>,
    guards: Vec<MutexGuard<'d, RegionState>>,
}

impl<'d> RenderPass<'d> {
    /// A cycle the splitting engine declined: no slots, no guards, and a
    /// [`commit`](Self::commit) that does nothing.
    pub(crate) fn skipped() -> Self {
        Self {
            slots: Vec::new(),
            guards: Vec::new(),
        }
    }

    pub(crate) fn new(slots: Vec<Option<Frame>>, guards: Vec<MutexGuard<'d, RegionState>>) -> Self {
        debug_assert_eq!(slots.len(), guards.len());
        Self { slots, guards }
    }

    /// Whether this cycle was skipped by the splitting engine. A skipped
    /// pass holds no guards and presents nothing.
    pub fn is_skipped(&self) -> bool {
        self.guards.is_empty()
    }

    /// Phase 2: for each region in index order, present the prepared
    /// frame on its bound renderer (if any), release the frame, then
    /// release that region's guard.
    pub fn commit(self) {
        let Self { slots, guards } = self;
        for (slot, mut guard) in slots.into_iter().zip(guards) {
            if let Some(frame) = slot {
                if let Some(renderer) = guard.renderer.as_mut() {
                    renderer.present(&frame);
                }
                drop(frame);
            }
            // Guard i is released before region i + 1 is touched.
            drop(guard);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/display/pass.rs"]
mod tests;
