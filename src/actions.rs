use std::collections::HashMap;

use crate::models::Gesture;

/// Fixed gesture -> command table
#[derive(Debug, Clone)]
pub struct ActionMap {
    actions: HashMap<Gesture, String>,
}

impl ActionMap {
    /// A map with no actions at all
    pub fn empty() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }

    /// Override or add the action for `gesture`
    pub fn with_action(mut self, gesture: Gesture, action: impl Into<String>) -> Self {
        self.actions.insert(gesture, action.into());
        self
    }

    pub fn lookup(&self, gesture: Gesture) -> Option<&str> {
        self.actions.get(&gesture).map(String::as_str)
    }

    /// Status-line form of the action, e.g. "Command: Stop"
    pub fn describe(&self, gesture: Gesture) -> Option<String> {
        self.lookup(gesture).map(|action| format!("Command: {}", action))
    }
}

impl Default for ActionMap {
    fn default() -> Self {
        Self::empty()
            .with_action(Gesture::Fist, "Stop")
            .with_action(Gesture::OpenPalm, "Activate")
            .with_action(Gesture::ThumbsUp, "Approve")
            .with_action(Gesture::Peace, "Next")
            .with_action(Gesture::Pointing, "Select")
    }
}
