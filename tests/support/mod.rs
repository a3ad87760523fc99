//! Mock collaborators shared by the integration tests. Every mock records
//! its calls into one shared log so tests can assert cross-collaborator
//! ordering.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use vidsplit::{
    DisplayConfig, EventSink, Frame, Key, PixelFormat, Placement, PointerEvent, Renderer,
    RendererFactory, Size, SplitDisplay, SplitError, SplitResult, Surface, SurfaceConfig,
    SurfaceHandler, SurfaceSystem, VideoFormat,
};

pub type Log = Arc<Mutex<Vec<String>>>;

/// Route crate tracing through the test harness; safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn new_log() -> Log {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn record(log: &Log, entry: impl Into<String>) {
    log.lock().unwrap().push(entry.into());
}

pub fn entries(log: &Log) -> Vec<String> {
    log.lock().unwrap().clone()
}

pub fn count_of(log: &Log, entry: &str) -> usize {
    log.lock().unwrap().iter().filter(|e| *e == entry).count()
}

pub fn source(width: u32, height: u32) -> VideoFormat {
    VideoFormat {
        size: Size::new(width, height).unwrap(),
        pixel_format: PixelFormat::Rgba8,
    }
}

/// Frame whose red channel encodes each pixel's x coordinate and green
/// channel its y coordinate, so crops are identifiable downstream.
pub fn coordinate_frame(format: VideoFormat) -> Frame {
    let size = format.size;
    let mut data = vec![0u8; size.area() as usize * 4];
    for y in 0..size.height as usize {
        for x in 0..size.width as usize {
            let px = (y * size.width as usize + x) * 4;
            data[px] = x as u8;
            data[px + 1] = y as u8;
        }
    }
    Frame::new(format, data).unwrap()
}

pub struct MockSurfaceSystem {
    log: Log,
    fail_create_at: Option<usize>,
    fail_enable_at: Option<usize>,
    next: Mutex<usize>,
    handlers: Mutex<Vec<Arc<dyn SurfaceHandler>>>,
}

impl MockSurfaceSystem {
    pub fn new(log: &Log) -> Self {
        Self::failing(log, None, None)
    }

    pub fn failing(log: &Log, fail_create_at: Option<usize>, fail_enable_at: Option<usize>) -> Self {
        Self {
            log: log.clone(),
            fail_create_at,
            fail_enable_at,
            next: Mutex::new(0),
            handlers: Mutex::new(Vec::new()),
        }
    }

    /// Handler registered for the `index`-th created surface; this is how
    /// tests play the role of the window subsystem delivering events.
    pub fn handler(&self, index: usize) -> Arc<dyn SurfaceHandler> {
        self.handlers.lock().unwrap()[index].clone()
    }
}

impl SurfaceSystem for MockSurfaceSystem {
    fn create_surface(
        &self,
        config: &SurfaceConfig,
        handler: Arc<dyn SurfaceHandler>,
    ) -> SplitResult<Box<dyn Surface>> {
        let index = {
            let mut next = self.next.lock().unwrap();
            let index = *next;
            *next += 1;
            index
        };
        if self.fail_create_at == Some(index) {
            record(&self.log, format!("surface{index}.create failed"));
            return Err(SplitError::construction("window creation refused"));
        }
        record(
            &self.log,
            format!(
                "surface{index}.create {}x{}",
                config.default_size.width, config.default_size.height
            ),
        );
        self.handlers.lock().unwrap().push(handler);
        Ok(Box::new(MockSurface {
            index,
            fail_enable: self.fail_enable_at == Some(index),
            log: self.log.clone(),
        }))
    }
}

pub struct MockSurface {
    index: usize,
    fail_enable: bool,
    log: Log,
}

impl Surface for MockSurface {
    fn enable(&self) -> SplitResult<()> {
        if self.fail_enable {
            record(&self.log, format!("surface{}.enable failed", self.index));
            return Err(SplitError::construction("window enable refused"));
        }
        record(&self.log, format!("surface{}.enable", self.index));
        Ok(())
    }

    fn disable(&self) {
        record(&self.log, format!("surface{}.disable", self.index));
    }
}

impl Drop for MockSurface {
    fn drop(&mut self) {
        record(&self.log, format!("surface{}.drop", self.index));
    }
}

pub struct MockRendererFactory {
    log: Log,
    fail_at: Option<usize>,
    next: Mutex<usize>,
}

impl MockRendererFactory {
    pub fn new(log: &Log) -> Self {
        Self::failing(log, None)
    }

    pub fn failing(log: &Log, fail_at: Option<usize>) -> Self {
        Self {
            log: log.clone(),
            fail_at,
            next: Mutex::new(0),
        }
    }
}

impl RendererFactory for MockRendererFactory {
    fn create_renderer(
        &self,
        _surface: &dyn Surface,
        initial_size: Size,
        _format: &VideoFormat,
    ) -> SplitResult<Box<dyn Renderer>> {
        let index = {
            let mut next = self.next.lock().unwrap();
            let index = *next;
            *next += 1;
            index
        };
        if self.fail_at == Some(index) {
            record(&self.log, format!("renderer{index}.create failed"));
            return Err(SplitError::construction("no renderer for this output"));
        }
        record(
            &self.log,
            format!(
                "renderer{index}.create {}x{}",
                initial_size.width, initial_size.height
            ),
        );
        Ok(Box::new(MockRenderer {
            index,
            log: self.log.clone(),
        }))
    }
}

pub struct MockRenderer {
    index: usize,
    log: Log,
}

impl Renderer for MockRenderer {
    fn prepare(&mut self, frame: Frame, size: Size) -> Frame {
        // The @ suffix identifies which crop arrived (x of its top-left
        // pixel, for frames built by `coordinate_frame`); the trailing
        // dimensions are the negotiated size the prepare was asked for.
        record(
            &self.log,
            format!(
                "renderer{}.prepare@{} {}x{}",
                self.index,
                frame.data()[0],
                size.width,
                size.height
            ),
        );
        frame
    }

    fn present(&mut self, _frame: &Frame) {
        record(&self.log, format!("renderer{}.present", self.index));
    }

    fn resize(&mut self, size: Size) {
        record(
            &self.log,
            format!("renderer{}.resize {}x{}", self.index, size.width, size.height),
        );
    }
}

impl Drop for MockRenderer {
    fn drop(&mut self) {
        record(&self.log, format!("renderer{}.drop", self.index));
    }
}

pub struct MockSink {
    log: Log,
}

impl MockSink {
    pub fn new(log: &Log) -> Self {
        Self { log: log.clone() }
    }
}

impl EventSink for MockSink {
    fn send_pointer(&self, event: PointerEvent) {
        record(&self.log, format!("sink.pointer {},{}", event.x, event.y));
    }

    fn send_key(&self, key: Key) {
        record(&self.log, format!("sink.key {}", key.0));
    }
}

pub fn config(source_format: VideoFormat, splitter: &str) -> DisplayConfig {
    DisplayConfig {
        source: source_format,
        placement: Placement::Fullscreen,
        splitter: splitter.to_string(),
    }
}

/// Open a display over fresh mocks sharing `log`. Returns the surface
/// system too so tests can reach the registered handlers.
pub fn open_display(
    log: &Log,
    source_format: VideoFormat,
    splitter: &str,
) -> (SplitDisplay, Arc<MockSurfaceSystem>) {
    let surfaces = Arc::new(MockSurfaceSystem::new(log));
    let display = SplitDisplay::open(
        &config(source_format, splitter),
        surfaces.clone(),
        Arc::new(MockRendererFactory::new(log)),
        Arc::new(MockSink::new(log)),
    )
    .expect("open");
    (display, surfaces)
}
