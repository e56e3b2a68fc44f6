//! Dice sources and pool rolls.
//!
//! The engine never talks to a random number generator directly. Every die
//! comes from a [`DieRoller`], so tests can script exact faces and a table
//! can type in dice rolled by hand.

pub mod roll;

pub use roll::PoolRoll;

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of individual die faces.
pub trait DieRoller {
    /// Roll one die with the given number of sides, returning a face in `1..=sides`.
    fn roll_die(&mut self, sides: u32) -> u32;
}

/// Pseudo-random dice backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct RandomDice {
    rng: StdRng,
}

impl RandomDice {
    /// Reproducible dice from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Dice seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl DieRoller for RandomDice {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.rng.random_range(1..=sides.max(1))
    }
}

/// Dice that replay a fixed sequence of faces.
///
/// Once the sequence runs out every further die shows the fallback face
/// (1 unless changed with [`ScriptedDice::with_fallback`]).
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    faces: VecDeque<u32>,
    fallback: Option<u32>,
}

impl ScriptedDice {
    /// Replay the given faces in order.
    pub fn new(faces: impl IntoIterator<Item = u32>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
            fallback: None,
        }
    }

    /// Face shown once the script is exhausted.
    pub fn with_fallback(mut self, face: u32) -> Self {
        self.fallback = Some(face);
        self
    }

    /// Queue more faces at the end of the script.
    pub fn push(&mut self, faces: impl IntoIterator<Item = u32>) {
        self.faces.extend(faces);
    }

    /// Number of scripted faces not yet used.
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl DieRoller for ScriptedDice {
    fn roll_die(&mut self, sides: u32) -> u32 {
        let face = self
            .faces
            .pop_front()
            .unwrap_or(self.fallback.unwrap_or(1));
        face.clamp(1, sides.max(1))
    }
}
