pub mod history;
pub mod slots;

pub use history::GestureHistory;
pub use slots::{SlotTracker, StabilityPolicy};
