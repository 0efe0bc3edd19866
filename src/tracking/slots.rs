use tracing::debug;

use crate::models::Gesture;
use crate::tracking::history::GestureHistory;

/// Majority-vote settings shared by every hand slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilityPolicy {
    /// Number of recent frames each slot remembers
    pub capacity: usize,
    /// Share of the window the most frequent gesture must reach
    pub threshold: f64,
}

impl StabilityPolicy {
    pub const DEFAULT_CAPACITY: usize = 5;
    pub const DEFAULT_THRESHOLD: f64 = 0.6;

    pub fn new(capacity: usize, threshold: f64) -> anyhow::Result<Self> {
        if capacity == 0 {
            anyhow::bail!("History capacity must be at least 1");
        }
        if !(threshold > 0.0 && threshold <= 1.0) {
            anyhow::bail!("Vote threshold must be in (0, 1], got {}", threshold);
        }
        Ok(Self { capacity, threshold })
    }

    /// Votes the mode needs in a window of `len` entries
    pub fn required_votes(&self, len: usize) -> usize {
        // Small epsilon keeps 0.6 * 5 at exactly 3 votes
        ((len as f64 * self.threshold) - 1e-9).ceil().max(1.0) as usize
    }
}

impl Default for StabilityPolicy {
    fn default() -> Self {
        Self {
            capacity: Self::DEFAULT_CAPACITY,
            threshold: Self::DEFAULT_THRESHOLD,
        }
    }
}

/// One gesture history per detector output position.
///
/// Slots are positional: slot `i` is whichever hand the detector lists
/// `i`-th in a frame. They are created the first time a position is seen
/// and never removed.
#[derive(Debug, Clone, Default)]
pub struct SlotTracker {
    slots: Vec<GestureHistory>,
    policy: StabilityPolicy,
}

impl SlotTracker {
    pub fn new(policy: StabilityPolicy) -> Self {
        Self {
            slots: Vec::new(),
            policy,
        }
    }

    pub fn policy(&self) -> StabilityPolicy {
        self.policy
    }

    /// Record `raw` for `slot` and return the smoothed gesture.
    ///
    /// Returns the window's most frequent gesture when it holds enough of the
    /// votes, otherwise `raw` unchanged.
    pub fn stabilize(&mut self, raw: Gesture, slot: usize) -> Gesture {
        while self.slots.len() <= slot {
            debug!("Allocating gesture history for hand slot {}", self.slots.len());
            self.slots.push(GestureHistory::new(self.policy.capacity));
        }

        let history = &mut self.slots[slot];
        history.push(raw);

        match history.mode() {
            Some((mode, count)) if count >= self.policy.required_votes(history.len()) => mode,
            _ => raw,
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn history(&self, slot: usize) -> Option<&GestureHistory> {
        self.slots.get(slot)
    }

    /// Forget every recorded gesture; the slots themselves are kept
    pub fn reset(&mut self) {
        for history in &mut self.slots {
            history.clear();
        }
    }
}
