#![allow(dead_code)]

use handsign::models::NormalizedLandmark;
use handsign::recognition::landmarks::*;
use handsign::{FrameSize, HandDetection, HandLandmarks, Handedness, Landmark};

pub const TEST_FRAME: FrameSize = FrameSize { width: 640, height: 480 };

/// Finger vectors (thumb, index, middle, ring, pinky) for each named gesture
pub const FIST: [bool; 5] = [false, false, false, false, false];
pub const OPEN_PALM: [bool; 5] = [true, true, true, true, true];
pub const THUMBS_UP: [bool; 5] = [true, false, false, false, false];
pub const POINTING: [bool; 5] = [false, true, false, false, false];
pub const PEACE: [bool; 5] = [false, true, true, false, false];
pub const ROCK: [bool; 5] = [false, true, false, false, true];
pub const OK_SIGN: [bool; 5] = [true, false, true, true, false];

/// Builds a pixel-space hand whose fingers are open exactly as given.
///
/// Every joint not involved in the open/closed tests sits at the palm center.
pub fn make_hand(fingers: [bool; 5], handedness: Handedness) -> HandLandmarks {
    let palm = Landmark::new(320.0, 300.0);
    let mut hand = [palm; 21];

    // Thumb extends toward +x for a right hand, -x for a left hand
    let outward = match handedness {
        Handedness::Right => 1.0,
        Handedness::Left => -1.0,
    };
    let reach = if fingers[0] { 40.0 } else { -20.0 };
    hand[THUMB_IP] = Landmark::new(300.0, 280.0);
    hand[THUMB_TIP] = Landmark::new(300.0 + outward * reach, 280.0);

    let joints = [
        (INDEX_TIP, INDEX_PIP),
        (MIDDLE_TIP, MIDDLE_PIP),
        (RING_TIP, RING_PIP),
        (PINKY_TIP, PINKY_PIP),
    ];
    for (i, (tip, pip)) in joints.into_iter().enumerate() {
        let x = 300.0 + 15.0 * i as f32;
        hand[pip] = Landmark::new(x, 250.0);
        hand[tip] = if fingers[i + 1] {
            Landmark::new(x, 200.0)
        } else {
            Landmark::new(x, 280.0)
        };
    }

    hand
}

/// Normalizes a pixel-space hand against `frame`, as the detector reports it
pub fn to_detection(hand: &HandLandmarks, handedness: Handedness, frame: FrameSize) -> HandDetection {
    let landmarks = hand
        .iter()
        .map(|p| NormalizedLandmark {
            x: p.x / frame.width as f32,
            y: p.y / frame.height as f32,
            z: 0.0,
        })
        .collect();
    HandDetection::new(landmarks, handedness)
}

/// Detector output for a hand showing the given finger vector in [`TEST_FRAME`]
pub fn make_detection(fingers: [bool; 5], handedness: Handedness) -> HandDetection {
    to_detection(&make_hand(fingers, handedness), handedness, TEST_FRAME)
}
