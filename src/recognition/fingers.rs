use crate::models::{FingerState, Handedness};
use crate::recognition::landmarks::*;

/// (tip, pip) landmark pairs for the four non-thumb fingers
const FINGER_JOINTS: [(usize, usize); 4] = [
    (INDEX_TIP, INDEX_PIP),
    (MIDDLE_TIP, MIDDLE_PIP),
    (RING_TIP, RING_PIP),
    (PINKY_TIP, PINKY_PIP),
];

/// A finger is extended when its tip sits strictly above its PIP joint
pub fn is_finger_open(landmarks: &HandLandmarks, tip: usize, pip: usize) -> bool {
    landmarks[tip].y < landmarks[pip].y
}

/// The thumb extends sideways, away from the palm.
///
/// Frames are mirrored before detection, so a right thumb points toward
/// larger x and a left thumb toward smaller x.
pub fn is_thumb_open(landmarks: &HandLandmarks, handedness: Handedness) -> bool {
    let tip = landmarks[THUMB_TIP];
    let ip = landmarks[THUMB_IP];

    match handedness {
        Handedness::Right => tip.x > ip.x,
        Handedness::Left => tip.x < ip.x,
    }
}

pub fn classify_fingers(landmarks: &HandLandmarks, handedness: Handedness) -> FingerState {
    let [index, middle, ring, pinky] =
        FINGER_JOINTS.map(|(tip, pip)| is_finger_open(landmarks, tip, pip));

    FingerState {
        thumb: is_thumb_open(landmarks, handedness),
        index,
        middle,
        ring,
        pinky,
    }
}
