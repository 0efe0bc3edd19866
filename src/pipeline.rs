use std::sync::Arc;
use anyhow::Result;
use tracing::trace;

use crate::models::{FingerState, Gesture, Handedness, InvalidLandmarkInput};
use crate::recognition::landmarks::{FrameSize, HandDetection, HandLandmarks};

/// Data that flows through the pipeline
/// Each HandData represents one detected hand in one frame; later steps fill
/// in the fields earlier steps leave empty
#[derive(Debug, Clone)]
pub struct HandData {
    /// Position of this hand in the detector output (its hand slot)
    pub slot: usize,

    /// Size of the frame the detector ran on
    pub frame: FrameSize,

    /// Raw detector output for this hand
    pub detection: HandDetection,

    /// Pixel-space landmarks, set by the adapter
    pub landmarks: Option<HandLandmarks>,

    pub handedness: Option<Handedness>,

    pub fingers: Option<FingerState>,

    /// Per-frame gesture before stabilization
    pub raw_gesture: Option<Gesture>,

    /// Set when the hand failed validation; later steps pass it through untouched
    pub rejection: Option<InvalidLandmarkInput>,
}

impl HandData {
    pub fn from_detection(slot: usize, frame: FrameSize, detection: HandDetection) -> Self {
        Self {
            slot,
            frame,
            detection,
            landmarks: None,
            handedness: None,
            fingers: None,
            raw_gesture: None,
            rejection: None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        self.rejection.is_some()
    }

    /// Landmarks and handedness, or an error if the adapter has not run
    pub fn adapted(&self) -> Result<(&HandLandmarks, Handedness)> {
        match (&self.landmarks, self.handedness) {
            (Some(landmarks), Some(handedness)) => Ok((landmarks, handedness)),
            _ => Err(anyhow::anyhow!("Hand {} has no pixel landmarks", self.slot)),
        }
    }
}

/// Debug configuration for pipeline execution
#[derive(Clone, Debug)]
pub struct DebugConfig {
    /// Root directory for debug outputs
    pub output_dir: std::path::PathBuf,
    /// Whether debug mode is enabled
    pub enabled: bool,
}

/// Context available to all pipeline steps
#[derive(Clone, Debug, Default)]
pub struct PipelineContext {
    pub debug: Option<DebugConfig>,
}

impl PipelineContext {
    /// Debug output directory, if debug mode is on
    pub fn debug_dir(&self) -> Option<&std::path::Path> {
        self.debug
            .as_ref()
            .filter(|config| config.enabled)
            .map(|config| config.output_dir.as_path())
    }
}

/// Trait that all pipeline steps must implement
pub trait PipelineStep: Send + Sync {
    /// Process the hands of one frame and return them transformed.
    /// Steps must keep one entry per input hand, in order.
    fn process(&self, data: Vec<HandData>, context: &PipelineContext) -> Result<Vec<HandData>>;

    /// Human-readable name for this step (used in trace output)
    fn name(&self) -> &str;
}

/// Composable pipeline builder
pub struct Pipeline {
    steps: Vec<Arc<dyn PipelineStep>>,
    context: PipelineContext,
}

impl Pipeline {
    /// Create a new empty pipeline
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            context: PipelineContext::default(),
        }
    }

    /// Enable debug mode with output directory
    /// The directory must be empty or non-existent
    pub fn with_debug(mut self, output_dir: std::path::PathBuf) -> Result<Self> {
        if output_dir.exists() {
            let entries = std::fs::read_dir(&output_dir)?;
            if entries.count() > 0 {
                return Err(anyhow::anyhow!(
                    "Debug directory is not empty: {}",
                    output_dir.display()
                ));
            }
        } else {
            std::fs::create_dir_all(&output_dir)?;
        }

        self.context.debug = Some(DebugConfig {
            output_dir,
            enabled: true,
        });

        Ok(self)
    }

    /// Add a processing step to the pipeline
    pub fn add_step(mut self, step: Arc<dyn PipelineStep>) -> Self {
        self.steps.push(step);
        self
    }

    /// Helper method to add a step from a Box (for convenience)
    pub fn add_step_boxed(mut self, step: Box<dyn PipelineStep>) -> Self {
        self.steps.push(Arc::from(step));
        self
    }

    pub fn context(&self) -> &PipelineContext {
        &self.context
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|step| step.name()).collect()
    }

    /// Run every step over the hands detected in one frame
    pub fn run(&self, frame: FrameSize, hands: &[HandDetection]) -> Result<Vec<HandData>> {
        let mut data: Vec<HandData> = hands
            .iter()
            .enumerate()
            .map(|(slot, detection)| HandData::from_detection(slot, frame, detection.clone()))
            .collect();

        for step in &self.steps {
            let expected = data.len();
            data = step.process(data, &self.context)?;

            if data.len() != expected {
                anyhow::bail!(
                    "Step '{}' returned {} hands for {} inputs",
                    step.name(),
                    data.len(),
                    expected
                );
            }

            trace!("Step '{}' done ({} hands)", step.name(), data.len());
        }

        Ok(data)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
