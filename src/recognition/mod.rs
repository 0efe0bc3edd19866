pub mod landmarks;
pub mod fingers;
pub mod gestures;
pub mod steps;

use std::sync::Arc;
use crate::pipeline::Pipeline;

pub use fingers::classify_fingers;
pub use gestures::classify_gesture;
pub use landmarks::{FrameSize, HandDetection, HandLandmarks};

/// Build the standard per-frame recognition pipeline:
/// adapt -> finger state -> gesture
pub fn build_standard_pipeline() -> Pipeline {
    use crate::recognition::steps::*;

    Pipeline::new()
        .add_step(Arc::new(AdaptStep))
        .add_step(Arc::new(FingerStateStep))
        .add_step(Arc::new(GestureStep))
}
