use anyhow::Result;
use tracing::{debug, warn};

use crate::pipeline::{HandData, PipelineContext, PipelineStep};
use crate::recognition::{fingers, gestures, landmarks};

/// Validate detector output and convert landmarks to pixel space
pub struct AdaptStep;

impl PipelineStep for AdaptStep {
    fn process(&self, data: Vec<HandData>, _context: &PipelineContext) -> Result<Vec<HandData>> {
        let mut result = Vec::with_capacity(data.len());

        for mut item in data {
            match landmarks::adapt_hand(&item.detection, item.frame, item.slot) {
                Ok((pixels, handedness)) => {
                    item.landmarks = Some(pixels);
                    item.handedness = Some(handedness);
                }
                Err(rejection) => {
                    warn!("{}", rejection);
                    item.rejection = Some(rejection);
                }
            }
            result.push(item);
        }

        Ok(result)
    }

    fn name(&self) -> &str {
        "Landmark Adapter"
    }
}

/// Derive the open/closed state of each finger
pub struct FingerStateStep;

impl PipelineStep for FingerStateStep {
    fn process(&self, data: Vec<HandData>, _context: &PipelineContext) -> Result<Vec<HandData>> {
        let mut result = Vec::with_capacity(data.len());

        for mut item in data {
            if !item.is_rejected() {
                let (pixels, handedness) = item.adapted()?;
                let state = fingers::classify_fingers(pixels, handedness);
                item.fingers = Some(state);
            }
            result.push(item);
        }

        Ok(result)
    }

    fn name(&self) -> &str {
        "Finger State"
    }
}

/// Map finger states to a gesture label
pub struct GestureStep;

impl PipelineStep for GestureStep {
    fn process(&self, data: Vec<HandData>, _context: &PipelineContext) -> Result<Vec<HandData>> {
        let mut result = Vec::with_capacity(data.len());

        for mut item in data {
            if !item.is_rejected() {
                let state = item
                    .fingers
                    .ok_or_else(|| anyhow::anyhow!("Missing finger state for hand {}", item.slot))?;
                let gesture = gestures::classify_gesture(state);

                debug!(
                    "Hand {}: fingers {:?} -> {}",
                    item.slot,
                    state.as_array(),
                    gesture
                );
                item.raw_gesture = Some(gesture);
            }
            result.push(item);
        }

        Ok(result)
    }

    fn name(&self) -> &str {
        "Gesture Classification"
    }
}
