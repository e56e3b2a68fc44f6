//! Error and warning types for the test engine.
//!
//! [`MechError`] covers programming errors and malformed input. Expected,
//! recoverable game situations (no Edge left, no ammunition, an Edge action
//! on an ineligible test) are [`Warning`]s and travel on the execution result.

/// Errors that can occur during mechanics operations.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A test kind name did not match any known kind.
    #[error("unknown test kind: {0}")]
    UnknownTestKind(String),

    /// A modifier type name did not match any known type.
    #[error("unknown modifier type: {0}")]
    UnknownModifierType(String),

    /// A dice pool configuration is invalid.
    #[error("invalid pool: {0}")]
    InvalidPool(String),

    /// A dice roll was evaluated a second time.
    #[error("roll has already been evaluated")]
    RollAlreadyEvaluated,

    /// A persisted test record cannot be rehydrated.
    #[error("invalid test record: {0}")]
    InvalidRecord(String),

    /// A test record could not be (de)serialized.
    #[error("record serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The engine settings file is malformed.
    #[error("invalid settings: {0}")]
    InvalidConfig(#[from] toml::de::Error),

    /// The dice rules in the settings cannot be rolled.
    #[error("invalid dice rules: {0}")]
    InvalidDice(String),

    /// The engine settings file could not be read.
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;

/// A user-facing, recoverable condition raised while running a test.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Warning {
    /// The actor has no Edge uses left.
    #[error("{actor} has no Edge left")]
    MissingEdge {
        /// Actor name.
        actor: String,
    },

    /// A second Edge action was requested on the same test.
    #[error("only one point of Edge may be spent on a test")]
    MultipleEdgeActions,

    /// An Edge action was requested on a test without an actor.
    #[error("Edge actions need an acting character")]
    EdgeNeedsActor,

    /// An Edge action was requested on hand-reported hits.
    #[error("Edge cannot be spent on hand-reported hits")]
    ManualRoll,

    /// Second chance was requested before the dice were rolled.
    #[error("second chance can only be used after rolling")]
    SecondChanceBeforeRoll,

    /// Second chance was requested on a glitched test.
    #[error("second chance cannot be used on a glitched test")]
    SecondChanceOnGlitch,

    /// An Edge action was requested on a critical glitch.
    #[error("Edge cannot rescue a critical glitch")]
    CriticalGlitch,

    /// Second chance found no non-hit dice to reroll.
    #[error("no dice without hits left to reroll")]
    NothingToReroll,

    /// Failures were already rerolled for this test.
    #[error("failures have already been rerolled for this test")]
    AlreadyRerolled,

    /// A reroll was requested but every die is a hit.
    #[error("there are no failures to reroll")]
    NoFailuresToReroll,

    /// The weapon has no ammunition left.
    #[error("{item} has no ammunition left")]
    MissingAmmo {
        /// Item name.
        item: String,
    },

    /// The weapon has fewer rounds than its fire mode uses.
    #[error("{item} has only {available} of {needed} rounds left")]
    SomeAmmo {
        /// Item name.
        item: String,
        /// Rounds the fire mode uses.
        needed: i32,
        /// Rounds actually loaded.
        available: i32,
    },

    /// The actor has no major action left this round.
    #[error("{actor} has no major actions left")]
    NoMajorActions {
        /// Actor name.
        actor: String,
    },

    /// The actor has no minor action left this round.
    #[error("{actor} has no minor actions left")]
    NoMinorActions {
        /// Actor name.
        actor: String,
    },

    /// The test kind cannot be run as an extended test.
    #[error("{kind} cannot be extended")]
    CannotExtend {
        /// Test kind name.
        kind: String,
    },

    /// The extended test has run out of dice or iterations.
    #[error("the extended test cannot be continued")]
    CannotExtendFurther,

    /// The test declares no opposed test.
    #[error("this test has no opposed test")]
    NoOpposedTest,

    /// The operation needs an evaluated test.
    #[error("the test has not been rolled yet")]
    NotEvaluated,
}
