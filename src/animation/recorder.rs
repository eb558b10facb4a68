//! Numbered frame capture.
//!
//! While recording, the event loop reads back the rendered frame and hands
//! the raw RGB pixels here; each capture writes one uncompressed true-color
//! BMP into the output directory, created on first use. Numbering is
//! sequential and rewound by [`FrameRecorder::reset`] when a new recording
//! starts.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::Result;

pub struct FrameRecorder {
    dir: PathBuf,
    next_index: u32,
    dir_ready: bool,
}

impl FrameRecorder {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            next_index: 0,
            dir_ready: false,
        }
    }

    /// Index the next capture will use.
    #[inline]
    #[must_use]
    pub fn next_index(&self) -> u32 {
        self.next_index
    }

    /// Rewinds numbering to 0 for a fresh recording.
    pub fn reset(&mut self) {
        self.next_index = 0;
    }

    /// Writes one frame of tightly packed 8-bit RGB pixels and returns the
    /// path written. The output directory is created on the first capture.
    pub fn capture(&mut self, width: u32, height: u32, rgb: &[u8]) -> Result<PathBuf> {
        if !self.dir_ready {
            fs::create_dir_all(&self.dir)?;
            self.dir_ready = true;
        }
        let path = self.frame_path(self.next_index);
        image::save_buffer(&path, rgb, width, height, image::ExtendedColorType::Rgb8)?;
        log::debug!("captured frame {} to {}", self.next_index, path.display());
        self.next_index += 1;
        Ok(path)
    }

    #[must_use]
    pub fn frame_path(&self, index: u32) -> PathBuf {
        self.dir.join(format!("frame_{index:04}.bmp"))
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
