//! Consumable counters (Edge uses, loaded rounds, actions per round).

use serde::{Deserialize, Serialize};

/// A named counter clamped between zero and a maximum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Display name.
    pub name: String,
    /// Current value.
    pub current: i32,
    /// Maximum value.
    pub max: i32,
}

impl Track {
    /// A full track.
    pub fn new(name: impl Into<String>, max: i32) -> Self {
        Self {
            name: name.into(),
            current: max.max(0),
            max: max.max(0),
        }
    }

    /// A track starting at `current`, clamped into range.
    pub fn with_current(name: impl Into<String>, current: i32, max: i32) -> Self {
        let max = max.max(0);
        Self {
            name: name.into(),
            current: current.clamp(0, max),
            max,
        }
    }

    /// Returns true if at least `amount` is left.
    pub fn has(&self, amount: i32) -> bool {
        self.current >= amount
    }

    /// Take `amount` if that much is left. Returns false and changes
    /// nothing otherwise.
    pub fn try_spend(&mut self, amount: i32) -> bool {
        if amount < 0 || !self.has(amount) {
            return false;
        }
        self.current -= amount;
        true
    }

    /// Add `amount`, clamped to the maximum. Returns the new value.
    pub fn restore(&mut self, amount: i32) -> i32 {
        self.current = (self.current + amount).clamp(0, self.max);
        self.current
    }

    /// Returns true if nothing is left.
    pub fn is_empty(&self) -> bool {
        self.current <= 0
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}/{}", self.name, self.current, self.max)
    }
}
