use std::fmt;

/// A hand keypoint in pixel space (y grows downward)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A hand keypoint as reported by the detector, normalized to [0, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NormalizedLandmark {
    pub x: f32,
    pub y: f32,
    /// Depth relative to the wrist; carried through but never used for classification
    #[serde(default)]
    pub z: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Handedness::Left => "Left",
            Handedness::Right => "Right",
        }
    }
}

impl TryFrom<&str> for Handedness {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Handedness::Left),
            "right" => Ok(Handedness::Right),
            other => Err(anyhow::anyhow!("Unknown handedness label: {:?}", other)),
        }
    }
}

impl fmt::Display for Handedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Open/closed state of each finger for one hand in one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FingerState {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerState {
    /// Fingers in thumb-to-pinky order
    pub fn as_array(&self) -> [bool; 5] {
        [self.thumb, self.index, self.middle, self.ring, self.pinky]
    }

    pub fn open_count(&self) -> usize {
        self.as_array().iter().filter(|open| **open).count()
    }
}

impl From<[bool; 5]> for FingerState {
    fn from(fingers: [bool; 5]) -> Self {
        let [thumb, index, middle, ring, pinky] = fingers;
        Self { thumb, index, middle, ring, pinky }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    OpenPalm,
    Fist,
    Peace,
    Pointing,
    ThumbsUp,
    Rock,
    OkSign,
    Unknown,
}

impl Gesture {
    pub const ALL: [Gesture; 8] = [
        Gesture::OpenPalm,
        Gesture::Fist,
        Gesture::Peace,
        Gesture::Pointing,
        Gesture::ThumbsUp,
        Gesture::Rock,
        Gesture::OkSign,
        Gesture::Unknown,
    ];

    /// Human-readable label used on status lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Gesture::OpenPalm => "Open Palm",
            Gesture::Fist => "Fist",
            Gesture::Peace => "Peace",
            Gesture::Pointing => "Pointing",
            Gesture::ThumbsUp => "Thumbs Up",
            Gesture::Rock => "Rock",
            Gesture::OkSign => "OK Sign",
            Gesture::Unknown => "Unknown",
        }
    }

    /// Overlay color for this gesture (presentation only)
    pub fn display_color(&self) -> Color {
        match self {
            Gesture::OpenPalm => Color { r: 0, g: 255, b: 0 },
            Gesture::Fist => Color { r: 255, g: 0, b: 0 },
            Gesture::Peace => Color { r: 0, g: 255, b: 255 },
            Gesture::Pointing => Color { r: 255, g: 0, b: 255 },
            Gesture::ThumbsUp => Color { r: 255, g: 165, b: 0 },
            Gesture::Rock => Color { r: 127, g: 0, b: 255 },
            Gesture::OkSign => Color { r: 255, g: 255, b: 0 },
            Gesture::Unknown => Color { r: 128, g: 128, b: 128 },
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b]
    }
}

/// Per-hand output of one processed frame
#[derive(Debug, Clone, PartialEq)]
pub struct HandResult {
    /// Detector output position this hand occupied (its hand slot)
    pub slot: usize,
    pub handedness: Handedness,
    /// Stabilized gesture
    pub gesture: Gesture,
    /// Gesture classified from this frame alone, before stabilization
    pub raw_gesture: Gesture,
    pub action: Option<String>,
}

/// A detected hand that could not be classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLandmarkInput {
    pub slot: usize,
    pub reason: String,
}

impl InvalidLandmarkInput {
    pub fn new(slot: usize, reason: impl Into<String>) -> Self {
        Self {
            slot,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for InvalidLandmarkInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid landmark input for hand {}: {}", self.slot, self.reason)
    }
}

impl std::error::Error for InvalidLandmarkInput {}
