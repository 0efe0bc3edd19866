use crate::models::Gesture;

/// Fixed-capacity window of the most recent raw gestures for one hand slot.
///
/// Once full, every push overwrites the oldest entry.
#[derive(Debug, Clone)]
pub struct GestureHistory {
    /// Ring storage, never longer than `capacity`
    data: Vec<Gesture>,

    /// Next position to overwrite once the window is full
    write_index: usize,

    capacity: usize,
}

impl GestureHistory {
    /// `capacity` is clamped to at least one entry
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: Vec::with_capacity(capacity),
            write_index: 0,
            capacity,
        }
    }

    pub fn push(&mut self, gesture: Gesture) {
        if self.data.len() < self.capacity {
            self.data.push(gesture);
        } else {
            self.data[self.write_index] = gesture;
            self.write_index = (self.write_index + 1) % self.capacity;
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = Gesture> + '_ {
        let (newer, older) = self.data.split_at(self.write_index);
        older.iter().chain(newer.iter()).copied()
    }

    pub fn clear(&mut self) {
        self.data.clear();
        self.write_index = 0;
    }

    /// Most frequent gesture in the window and its count.
    ///
    /// Ties go to the gesture whose earliest occurrence is oldest.
    pub fn mode(&self) -> Option<(Gesture, usize)> {
        let mut counts: Vec<(Gesture, usize)> = Vec::with_capacity(Gesture::ALL.len());
        for gesture in self.iter() {
            match counts.iter_mut().find(|(g, _)| *g == gesture) {
                Some((_, count)) => *count += 1,
                None => counts.push((gesture, 1)),
            }
        }

        let mut best: Option<(Gesture, usize)> = None;
        for (gesture, count) in counts {
            if best.is_none_or(|(_, best_count)| count > best_count) {
                best = Some((gesture, count));
            }
        }
        best
    }
}
