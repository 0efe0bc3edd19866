//! Finger-state to gesture mapping.
//!
//! Rules are evaluated top to bottom and the first match wins. Each rule
//! checks both the open-finger count and the exact fingers that are open.

use crate::models::{FingerState, Gesture};

pub struct GestureRule {
    pub name: &'static str,
    pub matches: fn(&FingerState) -> bool,
    pub gesture: Gesture,
}

pub static GESTURE_RULES: [GestureRule; 7] = [
    GestureRule {
        name: "no fingers open",
        matches: |f| f.open_count() == 0,
        gesture: Gesture::Fist,
    },
    GestureRule {
        name: "all fingers open",
        matches: |f| f.open_count() == 5,
        gesture: Gesture::OpenPalm,
    },
    GestureRule {
        name: "thumb only",
        matches: |f| f.open_count() == 1 && f.thumb,
        gesture: Gesture::ThumbsUp,
    },
    GestureRule {
        name: "index and middle",
        matches: |f| f.open_count() == 2 && f.index && f.middle,
        gesture: Gesture::Peace,
    },
    GestureRule {
        name: "index only",
        matches: |f| f.open_count() == 1 && f.index,
        gesture: Gesture::Pointing,
    },
    GestureRule {
        name: "index and pinky",
        matches: |f| f.open_count() == 2 && f.index && f.pinky,
        gesture: Gesture::Rock,
    },
    GestureRule {
        name: "thumb, middle and ring",
        matches: |f| f.open_count() == 3 && f.thumb && f.middle && f.ring,
        gesture: Gesture::OkSign,
    },
];

/// First rule in [`GESTURE_RULES`] that accepts `state`, if any
pub fn matching_rule(state: &FingerState) -> Option<&'static GestureRule> {
    GESTURE_RULES.iter().find(|rule| (rule.matches)(state))
}

pub fn classify_gesture(state: FingerState) -> Gesture {
    matching_rule(&state)
        .map(|rule| rule.gesture)
        .unwrap_or(Gesture::Unknown)
}
