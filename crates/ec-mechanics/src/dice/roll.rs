//! A single roll of a dice pool.

use serde::{Deserialize, Serialize};

use super::DieRoller;
use crate::config::FaceRules;
use crate::error::{MechError, MechResult};

/// A request for a number of dice, and the faces once rolled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolRoll {
    /// Dice requested.
    pub pool: u32,
    /// Whether the highest face adds another die.
    pub explode: bool,
    /// Face classification used for counting.
    pub faces: FaceRules,
    /// Every face rolled, exploded dice included.
    pub results: Vec<u32>,
    /// Whether the roll has been resolved.
    pub evaluated: bool,
}

impl PoolRoll {
    /// Create an unrolled pool of `pool` dice.
    pub fn new(pool: u32, explode: bool, faces: FaceRules) -> Self {
        Self {
            pool,
            explode,
            faces,
            results: Vec::new(),
            evaluated: false,
        }
    }

    /// Create an already resolved roll from known faces.
    pub fn from_results(pool: u32, explode: bool, faces: FaceRules, results: Vec<u32>) -> Self {
        Self {
            pool,
            explode,
            faces,
            results,
            evaluated: true,
        }
    }

    /// Roll the dice. Rolling a resolved pool again is an error.
    pub fn evaluate(&mut self, roller: &mut dyn DieRoller) -> MechResult<()> {
        if self.evaluated {
            return Err(MechError::RollAlreadyEvaluated);
        }
        self.faces.validate()?;
        let mut remaining = self.pool;
        while remaining > 0 {
            remaining -= 1;
            let face = roller.roll_die(self.faces.sides);
            self.results.push(face);
            if self.explode && self.faces.explodes(face) {
                remaining += 1;
            }
        }
        self.evaluated = true;
        tracing::debug!(
            pool = self.pool,
            thrown = self.results.len(),
            hits = self.hits(),
            glitches = self.glitches(),
            "rolled {}",
            self.formula()
        );
        Ok(())
    }

    /// Faces counted as hits, exploded dice included.
    pub fn hits(&self) -> u32 {
        self.count(|face| self.faces.is_hit(face))
    }

    /// Faces counted as glitches, exploded dice included.
    pub fn glitches(&self) -> u32 {
        self.count(|face| self.faces.is_glitch(face))
    }

    /// Dice thrown that did not score a hit.
    pub fn failures(&self) -> u32 {
        self.pool_thrown().saturating_sub(self.hits())
    }

    /// Dice originally requested.
    pub fn pool(&self) -> u32 {
        self.pool
    }

    /// Dice actually thrown after explosions.
    pub fn pool_thrown(&self) -> u32 {
        u32::try_from(self.results.len()).unwrap_or(u32::MAX)
    }

    /// Dice notation, e.g. `(6)d6cs>=5x6` for an exploding pool of six.
    pub fn formula(&self) -> String {
        let mut formula = format!(
            "({})d{}cs>={}",
            self.pool,
            self.faces.sides,
            self.faces.lowest_hit()
        );
        if self.explode {
            formula.push_str(&format!("x{}", self.faces.sides));
        }
        formula
    }

    fn count(&self, pred: impl Fn(u32) -> bool) -> u32 {
        let n = self.results.iter().filter(|&&face| pred(face)).count();
        u32::try_from(n).unwrap_or(u32::MAX)
    }
}

impl std::fmt::Display for PoolRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let faces: Vec<String> = self.results.iter().map(|v| v.to_string()).collect();
        write!(
            f,
            "{}d{}{} [{}] = {} hit{}",
            self.pool,
            self.faces.sides,
            if self.explode { "!" } else { "" },
            faces.join(", "),
            self.hits(),
            if self.hits() == 1 { "" } else { "s" }
        )
    }
}
