//! Situational modifier types.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::MechError;

/// A kind of situational modifier an actor can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierType {
    /// Catch-all situational modifier.
    Global,
    /// Wound penalties.
    Wounds,
    /// Light, visibility, wind, and range.
    Environmental,
    /// Modifiers to resisting drain.
    Drain,
    /// Modifiers to defending against attacks.
    Defense,
}

impl ModifierType {
    /// All modifier types.
    pub const ALL: [Self; 5] = [
        Self::Global,
        Self::Wounds,
        Self::Environmental,
        Self::Drain,
        Self::Defense,
    ];

    /// Name of the pool contribution this modifier produces.
    pub fn label(self) -> &'static str {
        match self {
            Self::Global => "Global",
            Self::Wounds => "Wounds",
            Self::Environmental => "Environmental",
            Self::Drain => "Drain",
            Self::Defense => "Defense",
        }
    }
}

impl std::fmt::Display for ModifierType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ModifierType {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MechError::UnknownModifierType(s.trim().to_string()))
    }
}

/// A single environmental condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentalFactor {
    /// Lighting conditions.
    Light,
    /// Fog, smoke, rain.
    Visibility,
    /// Wind strength.
    Wind,
    /// Distance to target.
    Range,
}

/// What a test wants an actor to take into account when reporting modifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifierContext {
    /// Environmental factors that do not apply to this test.
    pub ignored: BTreeSet<EnvironmentalFactor>,
}

impl ModifierContext {
    /// A context that ignores the given environmental factors.
    pub fn ignoring(factors: impl IntoIterator<Item = EnvironmentalFactor>) -> Self {
        Self {
            ignored: factors.into_iter().collect(),
        }
    }

    /// Returns true if the factor applies to this test.
    pub fn applies(&self, factor: EnvironmentalFactor) -> bool {
        !self.ignored.contains(&factor)
    }
}
