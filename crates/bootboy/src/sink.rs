//! Netpbm frame writers.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use bootboy_common::Color;
use bootboy_gb::{EmuError, Frame, FrameSink};

use crate::cli::ImageFormat;

/// Plain PBM: `P1`, one digit per pixel, non-zero indices are set.
pub fn write_pbm<W: Write>(out: &mut W, frame: &Frame) -> io::Result<()> {
    writeln!(out, "P1")?;
    writeln!(out, "{} {}", frame.width(), frame.height())?;
    for row in frame.rows() {
        for &pixel in row {
            write!(out, "{} ", u8::from(pixel != 0))?;
        }
        writeln!(out)?;
    }
    writeln!(out)
}

/// Plain PPM: `P3` with index 0 drawn as the DMG background tint and
/// everything else black.
pub fn write_ppm<W: Write>(out: &mut W, frame: &Frame) -> io::Result<()> {
    writeln!(out, "P3 {} {} 255", frame.width(), frame.height())?;
    for row in frame.rows() {
        for &pixel in row {
            let (r, g, b) = Color::for_color_index(pixel).rgb();
            write!(out, " {r} {g} {b}")?;
        }
        writeln!(out)?;
    }
    writeln!(out)
}

pub fn write_frame<W: Write>(out: &mut W, format: ImageFormat, frame: &Frame) -> io::Result<()> {
    match format {
        ImageFormat::Pbm => write_pbm(out, frame),
        ImageFormat::Ppm => write_ppm(out, frame),
    }
}

/// Writes each frame to its own numbered file in a directory.
#[derive(Debug)]
pub struct DirectorySink {
    dir: PathBuf,
    format: ImageFormat,
    next: u64,
}

impl DirectorySink {
    /// Create the sink, creating `dir` if needed.
    pub fn create(dir: impl Into<PathBuf>, format: ImageFormat) -> io::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            format,
            next: 0,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of files written so far.
    pub fn written(&self) -> u64 {
        self.next
    }

    fn path_for(&self, index: u64) -> PathBuf {
        self.dir
            .join(format!("frame-{index:05}.{}", self.format.extension()))
    }

    fn write(&mut self, frame: &Frame) -> io::Result<PathBuf> {
        let path = self.path_for(self.next);
        let mut out = BufWriter::new(File::create(&path)?);
        write_frame(&mut out, self.format, frame)?;
        out.flush()?;
        self.next += 1;
        Ok(path)
    }
}

impl FrameSink for DirectorySink {
    fn present(&mut self, frame: &Frame) -> bootboy_gb::Result<()> {
        let path = self.write(frame).map_err(|e| EmuError::Sink(Box::new(e)))?;
        log::debug!("Wrote {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use bootboy_gb::video::Background;
    use bootboy_gb::{Memory, SCREEN_HEIGHT, SCREEN_WIDTH};

    use super::*;

    /// Frame whose top-left pixel is set and everything else is blank.
    fn corner_frame() -> Frame {
        let mut memory = Memory::new();
        memory.write8(0x8000, 0x80);
        // Every map cell points at tile 0, so give the other cells tile 1.
        for cell in 1..0x400u16 {
            memory.write8(0x9800 + cell, 1);
        }
        Frame::extract(&Background::compose(&memory), 0, 0)
    }

    fn encode(format: ImageFormat, frame: &Frame) -> String {
        let mut out = Vec::new();
        write_frame(&mut out, format, frame).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn pbm_layout() {
        let text = encode(ImageFormat::Pbm, &corner_frame());
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("P1"));
        assert_eq!(lines.next(), Some("160 144"));

        let first = lines.next().unwrap();
        assert!(first.starts_with("1 0 0 "));
        assert_eq!(first.split_whitespace().count(), SCREEN_WIDTH);

        let second = lines.next().unwrap();
        assert!(second.split_whitespace().all(|v| v == "0"));
        assert_eq!(text.lines().count(), 2 + SCREEN_HEIGHT + 1);
    }

    #[test]
    fn ppm_layout() {
        let text = encode(ImageFormat::Ppm, &corner_frame());
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("P3 160 144 255"));

        let first = lines.next().unwrap();
        assert!(first.starts_with(" 0 0 0 222 249 208"));
        assert_eq!(first.split_whitespace().count(), SCREEN_WIDTH * 3);
    }

    #[test]
    fn directory_sink_numbers_files() {
        let dir = std::env::temp_dir().join(format!("bootboy-sink-{}", std::process::id()));
        let mut sink = DirectorySink::create(&dir, ImageFormat::Pbm).unwrap();
        let frame = corner_frame();

        sink.present(&frame).unwrap();
        sink.present(&frame).unwrap();

        assert_eq!(sink.written(), 2);
        assert!(dir.join("frame-00000.pbm").is_file());
        assert!(dir.join("frame-00001.pbm").is_file());
        let text = std::fs::read_to_string(dir.join("frame-00001.pbm")).unwrap();
        assert!(text.starts_with("P1\n160 144\n"));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
