//! Frame sinks: where the animator sends each snapshot.

use std::io::Write;

use sonar_core::state::FrameSnapshot;

use crate::error::AppError;

/// Consumer of the per-frame snapshots.
pub trait FrameSink {
    fn write_frame(&mut self, frame: &FrameSnapshot) -> Result<(), AppError>;

    /// Called once after the last frame.
    fn finish(&mut self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Writes one JSON snapshot per line.
pub struct JsonLinesSink<W: Write> {
    writer: W,
    frames_written: u64,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            frames_written: 0,
        }
    }

    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> FrameSink for JsonLinesSink<W> {
    fn write_frame(&mut self, frame: &FrameSnapshot) -> Result<(), AppError> {
        serde_json::to_writer(&mut self.writer, frame)?;
        self.writer.write_all(b"\n")?;
        self.frames_written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), AppError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Discards every frame.
#[derive(Debug, Default)]
pub struct NullSink;

impl FrameSink for NullSink {
    fn write_frame(&mut self, _frame: &FrameSnapshot) -> Result<(), AppError> {
        Ok(())
    }
}
