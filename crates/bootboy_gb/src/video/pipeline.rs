use crate::error::Result;
use crate::memory::Memory;

use super::{Background, Frame};

/// Receives every rendered frame.
pub trait FrameSink {
    fn present(&mut self, frame: &Frame) -> Result<()>;
}

/// Collecting sink, mostly useful in tests and tools.
impl FrameSink for Vec<Frame> {
    fn present(&mut self, frame: &Frame) -> Result<()> {
        self.push(frame.clone());
        Ok(())
    }
}

/// Render scheduler.
///
/// Re-renders only when SCY differs from the value seen at the previous
/// render. Nothing has been rendered before the first tick, so the first
/// tick always produces a frame.
#[derive(Debug, Default)]
pub struct Graphics {
    last_scy: Option<u8>,
    frames: u64,
}

impl Graphics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames handed to a sink so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Forget the last render so the next tick draws again.
    pub fn invalidate(&mut self) {
        self.last_scy = None;
    }

    /// Render and present a frame if SCY changed. Returns whether a frame
    /// was emitted.
    pub fn tick(&mut self, memory: &Memory, sink: &mut dyn FrameSink) -> Result<bool> {
        let scy = memory.scy();
        if self.last_scy == Some(scy) {
            return Ok(false);
        }

        let scx = memory.scx();
        log::debug!(
            "SCY {:?} -> {scy}, rendering frame {} (SCX {scx})",
            self.last_scy,
            self.frames
        );

        let background = Background::compose(memory);
        let frame = Frame::extract(&background, scx, scy);
        sink.present(&frame)?;

        self.last_scy = Some(scy);
        self.frames += 1;
        Ok(true)
    }
}
