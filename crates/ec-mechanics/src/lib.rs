//! Dice-pool test engine for Edgecast.
//!
//! Resolves Shadowrun-style tests: a pool of six-sided dice against a
//! threshold and limit, with hits, glitches, Edge actions (push the limit,
//! second chance), extended tests that accumulate hits, and opposed tests
//! seeded from another test's result. Values are built from named parts so
//! every contribution to a pool stays visible.

pub mod action;
pub mod config;
pub mod dice;
pub mod error;
pub mod modifier;
pub mod parts;
pub mod rules;
pub mod sheet;
pub mod test;
pub mod value;

pub use action::{ActionConfig, ActionType, Category, DamageData, DamageKind};
pub use config::EngineSettings;
pub use dice::{DieRoller, PoolRoll, RandomDice, ScriptedDice};
pub use error::{MechError, MechResult, Warning};
pub use modifier::{ModifierContext, ModifierType};
pub use parts::PartsList;
pub use sheet::{
    ActorRef, Character, CharacterSheet, DocumentId, DocumentResolver, Gear, GearSheet, ItemRef,
    Registry, TestActor, TestItem,
};
pub use test::{
    AcceptAll, ActionOutcome, Execution, ExecutionStatus, PendingReview, ReviewResponse, Reviewer,
    Step, SuccessTest, TestData, TestKind, TestRecord,
};
pub use value::{Bounds, ModPart, ValueField};
