//! Ranged attack tests.

use super::TestBehavior;
use crate::action::Category;
use crate::error::Warning;
use crate::modifier::ModifierType;
use crate::test::SuccessTest;

/// A firearm or projectile attack. Needs at least one round loaded and
/// fires as many rounds as the selected fire mode uses.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangedAttackBehavior;

impl TestBehavior for RangedAttackBehavior {
    fn categories(&self) -> &'static [Category] {
        &[Category::Attack, Category::AttackRanged]
    }

    fn modifier_types(&self) -> &'static [ModifierType] {
        &[
            ModifierType::Global,
            ModifierType::Wounds,
            ModifierType::Environmental,
        ]
    }

    fn can_be_extended(&self) -> bool {
        false
    }

    fn check_resources(&self, test: &SuccessTest) -> Result<(), Warning> {
        if !test.settings().must_have_resources {
            return Ok(());
        }
        match test.item() {
            Some(item) if item.is_ranged_weapon() && !item.has_ammo(1) => {
                Err(Warning::MissingAmmo { item: item.name() })
            }
            _ => Ok(()),
        }
    }

    fn consume_resources(&self, test: &mut SuccessTest) -> Result<(), Warning> {
        let Some(item) = test.item().cloned() else {
            return Ok(());
        };
        if !item.is_ranged_weapon() {
            return Ok(());
        }
        let needed = item.fire_mode().map_or(1, |mode| mode.rounds.max(1));
        let mut fired = needed;
        if let Some(available) = item.ammo_left().filter(|&left| left < needed) {
            test.warn(Warning::SomeAmmo {
                item: item.name(),
                needed,
                available,
            });
            fired = available.max(0);
        }
        if !item.use_ammo(fired) {
            return Err(Warning::MissingAmmo { item: item.name() });
        }
        tracing::debug!(item = %item.name(), rounds = fired, "fired");
        Ok(())
    }
}
