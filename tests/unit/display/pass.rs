use super::*;

use std::sync::Arc;

use parking_lot::Mutex;

use crate::{
    foundation::core::{PixelFormat, Size, VideoFormat},
    render::backend::Renderer,
};

type CallLog = Arc<Mutex<Vec<String>>>;

struct RecordingRenderer {
    name: &'static str,
    log: CallLog,
}

impl Renderer for RecordingRenderer {
    fn prepare(&mut self, frame: Frame, _size: Size) -> Frame {
        self.log.lock().push(format!("{}.prepare", self.name));
        frame
    }

    fn present(&mut self, _frame: &Frame) {
        self.log.lock().push(format!("{}.present", self.name));
    }

    fn resize(&mut self, _size: Size) {}
}

fn frame() -> Frame {
    let format = VideoFormat {
        size: Size::new(2, 2).unwrap(),
        pixel_format: PixelFormat::Rgba8,
    };
    Frame::new(format, vec![0; 16]).unwrap()
}

fn state(name: &'static str, log: &CallLog) -> Mutex<RegionState> {
    Mutex::new(RegionState {
        renderer: Some(Box::new(RecordingRenderer {
            name,
            log: log.clone(),
        })),
        size: Size::MIN,
    })
}

#[test]
fn skipped_pass_commits_to_nothing() {
    let pass = RenderPass::skipped();
    assert!(pass.is_skipped());
    pass.commit();
}

#[test]
fn commit_presents_in_order_and_releases_the_guards() {
    let log: CallLog = Arc::new(Mutex::new(Vec::new()));
    let a = state("a", &log);
    let b = state("b", &log);

    let pass = RenderPass::new(
        vec![Some(frame()), Some(frame())],
        vec![a.lock(), b.lock()],
    );
    assert!(!pass.is_skipped());
    assert!(a.try_lock().is_none(), "guard held while pass is alive");
    pass.commit();

    assert_eq!(log.lock().as_slice(), ["a.present", "b.present"]);
    assert!(a.try_lock().is_some());
    assert!(b.try_lock().is_some());
}

#[test]
fn commit_skips_empty_slots_and_missing_renderers() {
    let log: CallLog = Arc::new(Mutex::new(Vec::new()));
    let with_renderer = state("a", &log);
    let without = Mutex::new(RegionState {
        renderer: None,
        size: Size::MIN,
    });

    // Slot a is empty, slot b has a frame but no renderer to show it.
    let pass = RenderPass::new(
        vec![None, Some(frame())],
        vec![with_renderer.lock(), without.lock()],
    );
    pass.commit();

    assert!(log.lock().is_empty());
    assert!(with_renderer.try_lock().is_some());
    assert!(without.try_lock().is_some());
}

#[test]
fn dropping_a_pass_releases_guards_without_presenting() {
    let log: CallLog = Arc::new(Mutex::new(Vec::new()));
    let a = state("a", &log);

    let pass = RenderPass::new(vec![Some(frame())], vec![a.lock()]);
    drop(pass);

    assert!(log.lock().is_empty());
    assert!(a.try_lock().is_some());
}
