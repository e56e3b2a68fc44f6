//! Action configuration supplied by items and templates.
//!
//! Every field is optional in JSON; absent fields fall back to neutral
//! defaults (no threshold, no limit, no categories, no chained tests).

use serde::{Deserialize, Serialize};

use crate::modifier::ModifierType;
use crate::test::TestKind;
use crate::value::ValueField;

/// Broad classification of a test, used by effects and chained tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Any attack.
    Attack,
    /// Close combat attack.
    AttackMelee,
    /// Firearm or projectile attack.
    AttackRanged,
    /// Thrown weapon attack.
    AttackThrown,
    /// Defending against an attack.
    Defense,
    /// Resisting drain.
    Drain,
    /// Resisting damage.
    Resist,
    /// Spellcasting and other magic.
    Magic,
    /// Matrix actions.
    Matrix,
    /// Social interaction.
    Social,
    /// Technical skills.
    Technical,
    /// Physical skills.
    Physical,
}

/// How much of the actor's turn an action takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    /// Takes a major action.
    Major,
    /// Takes a minor action.
    Minor,
    /// Costs nothing.
    Free,
    /// Cost depends on circumstances; not tracked.
    Varies,
    /// Not an action.
    #[default]
    None,
}

/// Limit source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitConfig {
    /// Fixed part of the limit.
    pub base: f64,
    /// Actor attribute added to the limit.
    pub attribute: Option<String>,
}

/// Threshold source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Hits required.
    pub base: f64,
}

/// The test an opponent rolls against this action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpposedConfig {
    /// Kind of the opposing test.
    pub test: Option<TestKind>,
    /// Dice added to (or removed from) the opposing pool.
    #[serde(rename = "mod")]
    pub modifier: f64,
    /// First opposing attribute, if not the kind's default.
    pub attribute: Option<String>,
    /// Second opposing attribute.
    pub attribute2: Option<String>,
    /// Opposing skill.
    pub skill: Option<String>,
}

/// The test the same actor rolls after this one completes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowedConfig {
    /// Kind of the follow-up test.
    pub test: Option<TestKind>,
}

/// Kind of damage an attack or drain deals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageKind {
    /// Physical damage.
    #[default]
    Physical,
    /// Stun damage.
    Stun,
    /// Matrix damage.
    Matrix,
}

/// Damage carried by an attack, a defense, or drain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DamageData {
    /// Damage value.
    pub value: ValueField,
    /// Damage kind.
    pub kind: DamageKind,
    /// Armor penetration.
    pub ap: ValueField,
    /// Actor attribute added to the damage value (e.g. strength).
    pub attribute: Option<String>,
}

impl Default for DamageData {
    fn default() -> Self {
        Self {
            value: ValueField::new("Damage", 0.0),
            kind: DamageKind::default(),
            ap: ValueField::new("AP", 0.0),
            attribute: None,
        }
    }
}

impl DamageData {
    /// Damage of the given kind and base value.
    pub fn new(kind: DamageKind, base: f64) -> Self {
        Self {
            value: ValueField::new("Damage", base),
            kind,
            ..Self::default()
        }
    }
}

impl std::fmt::Display for DamageData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.kind {
            DamageKind::Physical => "P",
            DamageKind::Stun => "S",
            DamageKind::Matrix => "M",
        };
        write!(f, "{}{kind}", self.value.value)?;
        if self.ap.value != 0 {
            write!(f, " AP {}", self.ap.value)?;
        }
        Ok(())
    }
}

/// An action template describing how to build a test.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionConfig {
    /// Display name.
    pub name: String,
    /// Kind of test this action rolls.
    pub test: Option<TestKind>,
    /// Turn cost.
    #[serde(rename = "type")]
    pub action_type: ActionType,
    /// First pool attribute.
    pub attribute: Option<String>,
    /// Second pool attribute.
    pub attribute2: Option<String>,
    /// Pool skill.
    pub skill: Option<String>,
    /// Limit source.
    pub limit: LimitConfig,
    /// Threshold source.
    pub threshold: ThresholdConfig,
    /// Categories, replacing the kind's defaults when not empty.
    pub categories: Vec<Category>,
    /// Modifier types, replacing the kind's defaults when not empty.
    pub modifiers: Vec<ModifierType>,
    /// Opposing test.
    pub opposed: OpposedConfig,
    /// Follow-up test.
    pub followed: FollowedConfig,
    /// Damage dealt.
    pub damage: Option<DamageData>,
    /// Drain caused by the action.
    pub drain: Option<i32>,
    /// Repeat the test, accumulating hits.
    pub extended: bool,
}
