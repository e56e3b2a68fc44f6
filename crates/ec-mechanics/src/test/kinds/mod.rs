//! Test kinds and their rule variations.
//!
//! [`TestKind`] is the closed set of tests the engine knows. Each kind hands
//! the engine a [`TestBehavior`] with the few lifecycle hooks it changes;
//! the lifecycle itself lives in one place, on [`SuccessTest`].

mod drain;
mod melee;
mod ranged;
mod resist;
mod spell;

pub use defense::DefenseBehavior;
pub use drain::DrainBehavior;
pub use melee::MeleeAttackBehavior;
pub use ranged::RangedAttackBehavior;
pub use resist::PhysicalResistBehavior;
pub use spell::SpellCastingBehavior;

use serde::{Deserialize, Serialize};

use super::SuccessTest;
use crate::action::{ActionConfig, Category};
use crate::error::{MechError, Warning};
use crate::modifier::{ModifierContext, ModifierType};

/// A known kind of test, serialized under its registry name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TestKind {
    /// A plain dice-pool test.
    #[default]
    #[serde(rename = "SuccessTest")]
    Success,
    /// A generic counter-roll against another test.
    #[serde(rename = "OpposedTest")]
    Opposed,
    /// Defending against an attack.
    #[serde(rename = "DefenseTest")]
    Defense,
    /// A close combat attack.
    #[serde(rename = "MeleeAttackTest")]
    MeleeAttack,
    /// A firearm or projectile attack.
    #[serde(rename = "RangedAttackTest")]
    RangedAttack,
    /// Resisting drain after casting.
    #[serde(rename = "DrainTest")]
    Drain,
    /// Casting a spell.
    #[serde(rename = "SpellCastingTest")]
    SpellCasting,
    /// Soaking damage that got through a defense.
    #[serde(rename = "PhysicalResistTest")]
    PhysicalResist,
}

impl TestKind {
    /// Every kind.
    pub const ALL: [Self; 8] = [
        Self::Success,
        Self::Opposed,
        Self::Defense,
        Self::MeleeAttack,
        Self::RangedAttack,
        Self::Drain,
        Self::SpellCasting,
        Self::PhysicalResist,
    ];

    /// Registry name, as used in action configuration.
    pub fn name(self) -> &'static str {
        match self {
            Self::Success => "SuccessTest",
            Self::Opposed => "OpposedTest",
            Self::Defense => "DefenseTest",
            Self::MeleeAttack => "MeleeAttackTest",
            Self::RangedAttack => "RangedAttackTest",
            Self::Drain => "DrainTest",
            Self::SpellCasting => "SpellCastingTest",
            Self::PhysicalResist => "PhysicalResistTest",
        }
    }

    /// Rule variations for this kind.
    pub fn behavior(self) -> &'static dyn TestBehavior {
        match self {
            Self::Success => &SuccessBehavior,
            Self::Opposed => &OpposedBehavior,
            Self::Defense => &DefenseBehavior,
            Self::MeleeAttack => &MeleeAttackBehavior,
            Self::RangedAttack => &RangedAttackBehavior,
            Self::Drain => &DrainBehavior,
            Self::SpellCasting => &SpellCastingBehavior,
            Self::PhysicalResist => &PhysicalResistBehavior,
        }
    }
}

impl std::fmt::Display for TestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for TestKind {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| {
                kind.name().eq_ignore_ascii_case(wanted)
                    || kind
                        .name()
                        .strip_suffix("Test")
                        .is_some_and(|short| short.eq_ignore_ascii_case(wanted))
            })
            .ok_or_else(|| MechError::UnknownTestKind(s.to_string()))
    }
}

/// Lifecycle hooks a test kind may change.
///
/// Every hook has the behavior of a plain success test by default.
pub trait TestBehavior: Send + Sync {
    /// Categories used when the action declares none.
    fn categories(&self) -> &'static [Category] {
        &[]
    }

    /// Modifier types asked of the actor when the action declares none.
    fn modifier_types(&self) -> &'static [ModifierType] {
        &[ModifierType::Global, ModifierType::Wounds]
    }

    /// Context handed to the actor and item when collecting modifiers.
    fn modifier_context(&self) -> ModifierContext {
        ModifierContext::default()
    }

    /// Pool sources when this kind is rolled as an opposed or follow-up test.
    fn default_action(&self) -> ActionConfig {
        ActionConfig::default()
    }

    /// Prepare damage and other document-derived data before base values.
    fn prepare_document_data(&self, _test: &mut SuccessTest) {}

    /// Test the same actor rolls next when the action names none.
    fn follow_up(&self, _test: &SuccessTest) -> Option<TestKind> {
        None
    }

    /// Whether this kind can run as an extended test.
    fn can_be_extended(&self) -> bool {
        true
    }

    /// Check kind-specific resources before anything is consumed.
    fn check_resources(&self, _test: &SuccessTest) -> Result<(), Warning> {
        Ok(())
    }

    /// Consume kind-specific resources.
    fn consume_resources(&self, _test: &mut SuccessTest) -> Result<(), Warning> {
        Ok(())
    }

    /// Success condition replacing hits against threshold.
    fn success(&self, _test: &SuccessTest) -> Option<bool> {
        None
    }

    /// Post-process results after every evaluation.
    fn process_results(&self, _test: &mut SuccessTest) {}
}

/// A plain dice-pool test.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuccessBehavior;

impl TestBehavior for SuccessBehavior {}

/// A generic counter-roll. Its threshold comes from the opposed test.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpposedBehavior;

impl TestBehavior for OpposedBehavior {
    fn can_be_extended(&self) -> bool {
        false
    }
}

/// Build an action rolling two attributes.
pub(crate) fn attribute_pair(kind: TestKind, first: &str, second: &str) -> ActionConfig {
    ActionConfig {
        name: kind.to_string(),
        test: Some(kind),
        attribute: Some(first.to_string()),
        attribute2: Some(second.to_string()),
        ..ActionConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_registry_and_short_names() {
        assert_eq!("SuccessTest".parse::<TestKind>().unwrap(), TestKind::Success);
        assert_eq!("defense".parse::<TestKind>().unwrap(), TestKind::Defense);
        assert_eq!(
            "rangedattacktest".parse::<TestKind>().unwrap(),
            TestKind::RangedAttack
        );
        assert!(matches!(
            "SpellTest".parse::<TestKind>(),
            Err(MechError::UnknownTestKind(_))
        ));
    }

    #[test]
    fn serde_uses_registry_names() {
        for kind in TestKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
            let back: TestKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }

    #[test]
    fn only_plain_tests_extend() {
        let extendable: Vec<TestKind> = TestKind::ALL
            .into_iter()
            .filter(|kind| kind.behavior().can_be_extended())
            .collect();
        assert_eq!(extendable, vec![TestKind::Success]);
    }

    #[test]
    fn default_categories() {
        assert!(TestKind::Success.behavior().categories().is_empty());
        assert_eq!(
            TestKind::MeleeAttack.behavior().categories(),
            &[Category::Attack, Category::AttackMelee]
        );
        assert_eq!(TestKind::Drain.behavior().categories(), &[Category::Drain]);
        assert_eq!(
            TestKind::SpellCasting.behavior().categories(),
            &[Category::Magic]
        );
    }
}
