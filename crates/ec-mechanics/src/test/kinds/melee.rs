//! Melee attack tests.

use super::TestBehavior;
use crate::action::Category;
use crate::modifier::{EnvironmentalFactor, ModifierContext, ModifierType};

/// A close combat attack. Wind and range do not affect melee.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeleeAttackBehavior;

impl TestBehavior for MeleeAttackBehavior {
    fn categories(&self) -> &'static [Category] {
        &[Category::Attack, Category::AttackMelee]
    }

    fn modifier_types(&self) -> &'static [ModifierType] {
        &[
            ModifierType::Global,
            ModifierType::Wounds,
            ModifierType::Environmental,
        ]
    }

    fn modifier_context(&self) -> ModifierContext {
        ModifierContext::ignoring([EnvironmentalFactor::Wind, EnvironmentalFactor::Range])
    }

    fn can_be_extended(&self) -> bool {
        false
    }
}
