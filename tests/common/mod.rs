mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from handsign for tests
pub use handsign::{
    FingerState, FrameSize, Gesture, HandDetection, HandLandmarks, Handedness, Landmark, Session,
    SessionConfig, StabilityPolicy,
};
