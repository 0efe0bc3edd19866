//! Per-frame driver: adapt, classify, stabilize, map to actions.
//!
//! A [`Session`] owns the hand slot histories for its whole lifetime, so one
//! session should be fed the frames of one video stream in order.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use tracing::{debug, info};

use crate::actions::ActionMap;
use crate::models::{Gesture, HandResult, Handedness, InvalidLandmarkInput};
use crate::pipeline::Pipeline;
use crate::recognition::{self, FrameSize, HandDetection, HandLandmarks};
use crate::tracking::{SlotTracker, StabilityPolicy};

/// Processing-rate meter based on the time between consecutive frames
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<Instant>,
    fps: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame at `now` and return the instantaneous frames/second.
    /// The first tick, and a tick with no elapsed time, report 0.
    pub fn tick(&mut self, now: Instant) -> f32 {
        self.fps = match self.last {
            Some(prev) => {
                let elapsed = now.saturating_duration_since(prev).as_secs_f32();
                if elapsed > 0.0 { 1.0 / elapsed } else { 0.0 }
            }
            None => 0.0,
        };
        self.last = Some(now);
        self.fps
    }

    /// Rate measured at the last tick
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    pub policy: StabilityPolicy,
    pub actions: ActionMap,
    /// Save an annotated PNG per frame here (requires the `overlay` feature)
    pub debug_dir: Option<PathBuf>,
}

impl SessionConfig {
    pub fn with_policy(mut self, policy: StabilityPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_actions(mut self, actions: ActionMap) -> Self {
        self.actions = actions;
        self
    }

    pub fn with_debug_dir(mut self, dir: PathBuf) -> Self {
        self.debug_dir = Some(dir);
        self
    }
}

/// Everything the presentation layer needs about one frame
#[derive(Debug, Clone, Default)]
pub struct FrameOutput {
    /// One entry per valid hand, in detector order
    pub hands: Vec<HandResult>,
    /// Hands dropped from this frame because their input was malformed
    pub rejected: Vec<InvalidLandmarkInput>,
    pub fps: f32,
}

pub struct Session {
    pipeline: Pipeline,
    slots: SlotTracker,
    actions: ActionMap,
    clock: FrameClock,
    frame_index: u64,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Self> {
        let mut pipeline = recognition::build_standard_pipeline();
        if let Some(dir) = config.debug_dir {
            if !cfg!(feature = "overlay") {
                anyhow::bail!("Debug output requires the 'overlay' feature");
            }
            pipeline = pipeline.with_debug(dir)?;
        }

        Ok(Self {
            pipeline,
            slots: SlotTracker::new(config.policy),
            actions: config.actions,
            clock: FrameClock::new(),
            frame_index: 0,
        })
    }

    /// Process the detector output for one frame.
    ///
    /// Malformed hands are reported in [`FrameOutput::rejected`] and skipped;
    /// the remaining hands keep the slot of their detector position.
    pub fn process(&mut self, frame: FrameSize, hands: &[HandDetection]) -> Result<FrameOutput> {
        let fps = self.clock.tick(Instant::now());
        self.frame_index += 1;

        let mut output = FrameOutput {
            fps,
            ..Default::default()
        };
        if hands.is_empty() {
            return Ok(output);
        }

        let data = self.pipeline.run(frame, hands)?;

        #[cfg(feature = "overlay")]
        let mut drawn: Vec<(HandLandmarks, Gesture)> = Vec::new();

        for item in data {
            if let Some(rejection) = item.rejection {
                output.rejected.push(rejection);
                continue;
            }

            let (_landmarks, handedness) = item.adapted()?;
            let raw = item
                .raw_gesture
                .ok_or_else(|| anyhow::anyhow!("Missing gesture for hand {}", item.slot))?;

            let result = self.finish_hand(item.slot, handedness, raw);

            #[cfg(feature = "overlay")]
            drawn.push((*_landmarks, result.gesture));

            output.hands.push(result);
        }

        #[cfg(feature = "overlay")]
        if let Some(dir) = self.pipeline.context().debug_dir() {
            let path = dir.join(format!("frame_{:05}.png", self.frame_index));
            crate::overlay::render_overlay(frame, &drawn)
                .save(&path)
                .map_err(|e| anyhow::anyhow!("Failed to save debug image: {}", e))?;
            debug!("Debug: saved {}", path.display());
        }

        Ok(output)
    }

    /// Classify and stabilize hands that are already in pixel space.
    /// Returns one stabilized gesture per input hand, in order.
    pub fn process_landmarks(&mut self, hands: &[(HandLandmarks, Handedness)]) -> Vec<Gesture> {
        self.clock.tick(Instant::now());
        self.frame_index += 1;

        hands
            .iter()
            .enumerate()
            .map(|(slot, (landmarks, handedness))| {
                let state = recognition::classify_fingers(landmarks, *handedness);
                let raw = recognition::classify_gesture(state);
                self.finish_hand(slot, *handedness, raw).gesture
            })
            .collect()
    }

    fn finish_hand(&mut self, slot: usize, handedness: Handedness, raw: Gesture) -> HandResult {
        let gesture = self.slots.stabilize(raw, slot);
        let action = self.actions.lookup(gesture).map(str::to_string);

        if gesture != raw {
            debug!("Hand {}: {} smoothed to {}", slot, raw, gesture);
        }
        if let Some(action) = &action {
            info!("[Hand {} - {}] {} -> Command: {}", slot + 1, handedness, gesture, action);
        }

        HandResult {
            slot,
            handedness,
            gesture,
            raw_gesture: raw,
            action,
        }
    }

    pub fn slots(&self) -> &SlotTracker {
        &self.slots
    }

    pub fn actions(&self) -> &ActionMap {
        &self.actions
    }

    /// Rate measured at the most recent frame
    pub fn fps(&self) -> f32 {
        self.clock.fps()
    }

    pub fn frames_processed(&self) -> u64 {
        self.frame_index
    }

    /// Forget gesture history; slot count is kept
    pub fn reset(&mut self) {
        self.slots.reset();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self {
            pipeline: recognition::build_standard_pipeline(),
            slots: SlotTracker::default(),
            actions: ActionMap::default(),
            clock: FrameClock::new(),
            frame_index: 0,
        }
    }
}
