//! Recorded detector output.
//!
//! The hand detector runs outside this crate. Its output is recorded as JSON
//! Lines, one frame per line:
//!
//! ```text
//! {"width":640,"height":480,"hands":[{"handedness":"Right","landmarks":[{"x":0.5,"y":0.9,"z":0.0}, ...]}]}
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

use crate::recognition::landmarks::{FrameSize, HandDetection};

/// Detector output for one video frame
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DetectorFrame {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub hands: Vec<HandDetection>,
}

impl DetectorFrame {
    pub fn size(&self) -> FrameSize {
        FrameSize::new(self.width, self.height)
    }
}

/// Parse every frame from a JSON Lines stream. Blank lines are skipped.
pub fn parse_frames<R: BufRead>(reader: R) -> Result<Vec<DetectorFrame>> {
    let mut frames = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", i + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        let frame: DetectorFrame = serde_json::from_str(&line)
            .with_context(|| format!("Failed to parse frame on line {}", i + 1))?;
        frames.push(frame);
    }

    Ok(frames)
}

pub fn read_frames<P: AsRef<Path>>(path: P) -> Result<Vec<DetectorFrame>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open recording {}", path.display()))?;
    parse_frames(BufReader::new(file))
}

/// Serialize one frame as a single JSON line (no trailing newline)
pub fn to_json_line(frame: &DetectorFrame) -> Result<String> {
    Ok(serde_json::to_string(frame)?)
}
