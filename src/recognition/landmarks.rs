//! Landmark topology and the detector-to-pixel adapter.
//!
//! The detector reports 21 normalized keypoints per hand plus a handedness
//! label. Everything downstream works in pixel space, so each hand is scaled
//! against the frame size here before classification.

use crate::models::{Handedness, InvalidLandmarkInput, Landmark, NormalizedLandmark};

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

pub const LANDMARK_COUNT: usize = 21;

/// Bones and palm edges, used when drawing a hand
pub const HAND_CONNECTIONS: [(usize, usize); 23] = [
    (WRIST, THUMB_CMC), (THUMB_CMC, THUMB_MCP), (THUMB_MCP, THUMB_IP), (THUMB_IP, THUMB_TIP),
    (WRIST, INDEX_MCP), (INDEX_MCP, INDEX_PIP), (INDEX_PIP, INDEX_DIP), (INDEX_DIP, INDEX_TIP),
    (WRIST, MIDDLE_MCP), (MIDDLE_MCP, MIDDLE_PIP), (MIDDLE_PIP, MIDDLE_DIP), (MIDDLE_DIP, MIDDLE_TIP),
    (WRIST, RING_MCP), (RING_MCP, RING_PIP), (RING_PIP, RING_DIP), (RING_DIP, RING_TIP),
    (WRIST, PINKY_MCP), (PINKY_MCP, PINKY_PIP), (PINKY_PIP, PINKY_DIP), (PINKY_DIP, PINKY_TIP),
    (INDEX_MCP, MIDDLE_MCP), (MIDDLE_MCP, RING_MCP), (RING_MCP, PINKY_MCP),
];

/// Fingertips and wrist, drawn larger in overlays
pub const PROMINENT_LANDMARKS: [usize; 6] = [WRIST, THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

/// All 21 landmarks of one hand in pixel space
pub type HandLandmarks = [Landmark; LANDMARK_COUNT];

/// Pixel dimensions of the frame the detector ran on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl FrameSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Scale a normalized point to whole pixels (truncated toward zero)
    pub fn to_pixels(&self, point: &NormalizedLandmark) -> Landmark {
        Landmark {
            x: (point.x * self.width as f32).trunc(),
            y: (point.y * self.height as f32).trunc(),
        }
    }
}

/// Raw detector output for one hand
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct HandDetection {
    pub landmarks: Vec<NormalizedLandmark>,
    /// Detector label, "Left" or "Right"
    #[serde(default)]
    pub handedness: Option<String>,
}

impl HandDetection {
    pub fn new(landmarks: Vec<NormalizedLandmark>, handedness: Handedness) -> Self {
        Self {
            landmarks,
            handedness: Some(handedness.as_str().to_string()),
        }
    }
}

/// Validate one detected hand and convert it to pixel space.
///
/// `slot` is the hand's position in the detector output and is only used to
/// label the error.
pub fn adapt_hand(
    detection: &HandDetection,
    size: FrameSize,
    slot: usize,
) -> Result<(HandLandmarks, Handedness), InvalidLandmarkInput> {
    if detection.landmarks.len() != LANDMARK_COUNT {
        return Err(InvalidLandmarkInput::new(
            slot,
            format!("expected {} landmarks, got {}", LANDMARK_COUNT, detection.landmarks.len()),
        ));
    }

    let label = detection
        .handedness
        .as_deref()
        .ok_or_else(|| InvalidLandmarkInput::new(slot, "missing handedness"))?;
    let handedness = Handedness::try_from(label)
        .map_err(|e| InvalidLandmarkInput::new(slot, e.to_string()))?;

    if let Some(i) = detection.landmarks.iter().position(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(InvalidLandmarkInput::new(slot, format!("landmark {} is not finite", i)));
    }

    let mut landmarks = [Landmark::default(); LANDMARK_COUNT];
    for (pixel, point) in landmarks.iter_mut().zip(&detection.landmarks) {
        *pixel = size.to_pixels(point);
    }

    Ok((landmarks, handedness))
}
