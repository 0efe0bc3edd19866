//! Tests for gesture history and hand slot smoothing.
//!
//! Tests cover:
//! - Ring buffer eviction order and mode queries
//! - Majority-vote convergence and responsiveness
//! - Slot independence, lazy slot growth and reset

mod common;

use handsign::{GestureHistory, SlotTracker};

use common::*;

#[test]
fn test_history_evicts_oldest() {
    let mut history = GestureHistory::new(3);
    assert!(history.is_empty());

    history.push(Gesture::Fist);
    history.push(Gesture::Peace);
    assert_eq!(history.len(), 2);
    assert!(!history.is_full());

    history.push(Gesture::Rock);
    history.push(Gesture::OpenPalm);
    history.push(Gesture::Pointing);

    assert_eq!(history.len(), 3);
    assert!(history.is_full());
    assert_eq!(
        history.iter().collect::<Vec<_>>(),
        vec![Gesture::Rock, Gesture::OpenPalm, Gesture::Pointing]
    );

    history.clear();
    assert!(history.is_empty());
    assert_eq!(history.capacity(), 3);
}

#[test]
fn test_history_zero_capacity_is_clamped() {
    let mut history = GestureHistory::new(0);
    history.push(Gesture::Fist);
    history.push(Gesture::Peace);
    assert_eq!(history.capacity(), 1);
    assert_eq!(history.iter().collect::<Vec<_>>(), vec![Gesture::Peace]);
}

#[test]
fn test_history_mode() {
    let mut history = GestureHistory::new(5);
    assert_eq!(history.mode(), None);

    for gesture in [Gesture::Fist, Gesture::Peace, Gesture::Peace, Gesture::Rock] {
        history.push(gesture);
    }
    assert_eq!(history.mode(), Some((Gesture::Peace, 2)));
}

#[test]
fn test_history_mode_tie_is_deterministic() {
    let mut a = GestureHistory::new(4);
    let mut b = GestureHistory::new(4);
    for gesture in [Gesture::Fist, Gesture::Peace, Gesture::Fist, Gesture::Peace] {
        a.push(gesture);
        b.push(gesture);
    }

    let mode = a.mode().expect("non-empty history has a mode");
    assert_eq!(mode.1, 2);
    assert_eq!(a.mode(), b.mode());
}

#[test]
fn test_policy_validation() {
    assert!(StabilityPolicy::new(0, 0.6).is_err());
    assert!(StabilityPolicy::new(5, 0.0).is_err());
    assert!(StabilityPolicy::new(5, 1.5).is_err());
    assert!(StabilityPolicy::new(5, f64::NAN).is_err());

    let policy = StabilityPolicy::new(5, 1.0).expect("valid policy");
    assert_eq!(policy.required_votes(5), 5);

    let default = StabilityPolicy::default();
    assert_eq!(default.capacity, 5);
    assert_eq!(default.required_votes(5), 3);
    assert_eq!(default.required_votes(4), 3);
    assert_eq!(default.required_votes(3), 2);
    assert_eq!(default.required_votes(1), 1);
}

#[test]
fn test_constant_stream_is_stable() {
    let mut tracker = SlotTracker::default();

    for _ in 0..10 {
        assert_eq!(tracker.stabilize(Gesture::Peace, 0), Gesture::Peace);
    }
    assert_eq!(tracker.history(0).map(|h| h.len()), Some(5));
}

#[test]
fn test_switches_after_three_consistent_frames() {
    let mut tracker = SlotTracker::default();
    for _ in 0..5 {
        tracker.stabilize(Gesture::Fist, 0);
    }

    // Two frames of a new gesture are treated as noise
    assert_eq!(tracker.stabilize(Gesture::OpenPalm, 0), Gesture::Fist);
    assert_eq!(tracker.stabilize(Gesture::OpenPalm, 0), Gesture::Fist);

    // The third gives it 3 of 5 votes
    assert_eq!(tracker.stabilize(Gesture::OpenPalm, 0), Gesture::OpenPalm);
}

#[test]
fn test_single_glitch_is_suppressed() {
    let mut tracker = SlotTracker::default();
    for _ in 0..4 {
        tracker.stabilize(Gesture::Pointing, 0);
    }

    assert_eq!(tracker.stabilize(Gesture::Unknown, 0), Gesture::Pointing);
    assert_eq!(tracker.stabilize(Gesture::Pointing, 0), Gesture::Pointing);
}

#[test]
fn test_noisy_window_passes_raw_gesture_through() {
    let mut tracker = SlotTracker::default();
    let stream = [Gesture::Fist, Gesture::Peace, Gesture::Rock, Gesture::OkSign, Gesture::Pointing];

    // No gesture ever holds 60% of the window
    assert_eq!(tracker.stabilize(stream[0], 0), Gesture::Fist);
    for gesture in &stream[1..] {
        assert_eq!(tracker.stabilize(*gesture, 0), *gesture);
    }
}

#[test]
fn test_slots_are_independent() {
    let sequence = [
        Gesture::Fist,
        Gesture::Fist,
        Gesture::Peace,
        Gesture::Peace,
        Gesture::Peace,
        Gesture::Rock,
    ];

    let mut alone = SlotTracker::default();
    let expected: Vec<Gesture> = sequence.iter().map(|g| alone.stabilize(*g, 0)).collect();

    let mut shared = SlotTracker::default();
    let mut slot0 = Vec::new();
    let mut slot1 = Vec::new();
    for gesture in sequence {
        slot0.push(shared.stabilize(gesture, 0));
        // Interleave unrelated input on another slot
        shared.stabilize(Gesture::OpenPalm, 2);
        slot1.push(shared.stabilize(gesture, 1));
    }

    assert_eq!(slot0, expected);
    assert_eq!(slot1, expected);
}

#[test]
fn test_slots_grow_lazily_and_never_shrink() {
    let mut tracker = SlotTracker::default();
    assert_eq!(tracker.slot_count(), 0);
    assert!(tracker.history(0).is_none());

    tracker.stabilize(Gesture::Fist, 0);
    assert_eq!(tracker.slot_count(), 1);

    tracker.stabilize(Gesture::Fist, 3);
    assert_eq!(tracker.slot_count(), 4);
    assert_eq!(tracker.history(2).map(|h| h.len()), Some(0));

    tracker.stabilize(Gesture::Fist, 1);
    assert_eq!(tracker.slot_count(), 4);

    tracker.reset();
    assert_eq!(tracker.slot_count(), 4);
    assert!(tracker.history(0).is_some_and(|h| h.is_empty()));
}

#[test]
fn test_custom_capacity() {
    let policy = StabilityPolicy::new(3, 0.6).expect("valid policy");
    let mut tracker = SlotTracker::new(policy);
    for _ in 0..3 {
        tracker.stabilize(Gesture::Rock, 0);
    }

    // ceil(0.6 * 3) = 2 new frames are enough
    assert_eq!(tracker.stabilize(Gesture::Peace, 0), Gesture::Rock);
    assert_eq!(tracker.stabilize(Gesture::Peace, 0), Gesture::Peace);
    assert_eq!(tracker.history(0).map(|h| h.capacity()), Some(3));
}
