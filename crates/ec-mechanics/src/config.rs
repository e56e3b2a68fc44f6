//! Engine settings.
//!
//! Replaces the table-wide switches a game master toggles: whether limits
//! cap hits, whether manually reported dice are accepted, and whether
//! resources must be available before a test may run. Loadable from TOML;
//! every key is optional.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// Settings shared by every test the engine runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Limits cap the number of hits a test can count.
    pub apply_limits: bool,
    /// Manually reported hits and glitches replace the dice roll.
    pub allow_manual_hits: bool,
    /// Action budgets and ammunition must be available before rolling.
    pub must_have_resources: bool,
    /// Die size and the faces counted as hits and glitches.
    pub dice: FaceRules,
    /// Caps on gaining Edge back during play.
    pub edge: EdgeCaps,
    /// Extended test escalation.
    pub extended: ExtendedRules,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            apply_limits: true,
            allow_manual_hits: true,
            must_have_resources: true,
            dice: FaceRules::default(),
            edge: EdgeCaps::default(),
            extended: ExtendedRules::default(),
        }
    }
}

impl EngineSettings {
    /// Parse settings from a TOML document.
    pub fn from_toml_str(source: &str) -> MechResult<Self> {
        let settings: Self = toml::from_str(source)?;
        settings.dice.validate()?;
        Ok(settings)
    }

    /// Read settings from a TOML file.
    pub fn load(path: &Path) -> MechResult<Self> {
        let source = std::fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "loaded engine settings");
        Ok(settings)
    }

    /// Enable or disable limits.
    pub fn with_limits(mut self, apply: bool) -> Self {
        self.apply_limits = apply;
        self
    }

    /// Enable or disable manual hit entry.
    pub fn with_manual_hits(mut self, allow: bool) -> Self {
        self.allow_manual_hits = allow;
        self
    }

    /// Enable or disable resource availability checks.
    pub fn with_resource_checks(mut self, required: bool) -> Self {
        self.must_have_resources = required;
        self
    }

    /// Cap every extended test at `max` iterations.
    pub fn with_max_extended_iterations(mut self, max: u32) -> Self {
        self.extended.max_iterations = Some(max);
        self
    }
}

/// Die size and face classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceRules {
    /// Number of sides on each die. The highest face explodes.
    pub sides: u32,
    /// Faces counted as hits.
    pub success: Vec<u32>,
    /// Faces counted as glitches.
    pub glitch: Vec<u32>,
}

impl Default for FaceRules {
    fn default() -> Self {
        Self {
            sides: 6,
            success: vec![5, 6],
            glitch: vec![1],
        }
    }
}

impl FaceRules {
    /// Reject dice that cannot be rolled. A one-sided die would explode forever.
    pub fn validate(&self) -> MechResult<()> {
        if self.sides < 2 {
            return Err(MechError::InvalidDice(format!(
                "dice need at least 2 sides, got {}",
                self.sides
            )));
        }
        Ok(())
    }

    /// Returns true if the face counts as a hit.
    pub fn is_hit(&self, face: u32) -> bool {
        self.success.contains(&face)
    }

    /// Returns true if the face counts as a glitch.
    pub fn is_glitch(&self, face: u32) -> bool {
        self.glitch.contains(&face)
    }

    /// Returns true if the face triggers an exploding die.
    pub fn explodes(&self, face: u32) -> bool {
        face == self.sides
    }

    /// The lowest face counted as a hit.
    pub fn lowest_hit(&self) -> u32 {
        self.success.iter().copied().min().unwrap_or(self.sides)
    }
}

/// Caps on regaining Edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeCaps {
    /// Edge uses at or above this value cannot grow further.
    pub pool_cap: i32,
    /// Edge an actor may gain within one combat round.
    pub gain_per_round: i32,
}

impl Default for EdgeCaps {
    fn default() -> Self {
        Self {
            pool_cap: 7,
            gain_per_round: 2,
        }
    }
}

/// Extended test escalation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtendedRules {
    /// Dice lost per iteration.
    pub step: i32,
    /// Optional cap on iterations for every extended test.
    pub max_iterations: Option<u32>,
}

impl Default for ExtendedRules {
    fn default() -> Self {
        Self {
            step: 1,
            max_iterations: None,
        }
    }
}
