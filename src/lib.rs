pub mod actions;
pub mod models;
pub mod pipeline;
pub mod recognition;
pub mod replay;
pub mod session;
pub mod tracking;

pub use actions::ActionMap;
pub use models::{FingerState, Gesture, HandResult, Handedness, InvalidLandmarkInput, Landmark};
pub use pipeline::{DebugConfig, HandData, Pipeline, PipelineContext, PipelineStep};
pub use recognition::{FrameSize, HandDetection, HandLandmarks, classify_fingers, classify_gesture};
pub use session::{FrameClock, FrameOutput, Session, SessionConfig};
pub use tracking::{GestureHistory, SlotTracker, StabilityPolicy};

#[cfg(feature = "overlay")]
pub mod overlay;
