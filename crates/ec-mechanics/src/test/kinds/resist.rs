//! Damage resistance tests.

use super::{TestBehavior, TestKind, attribute_pair};
use crate::action::{ActionConfig, Category};
use crate::modifier::ModifierType;
use crate::test::SuccessTest;
use crate::test::data::part;
use crate::value::{Bounds, ValueField};

/// Soaking damage that got through a defense with body and armor. Armor
/// penetration is taken off the pool and every hit removes one point of
/// damage; the test succeeds when no damage is left.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhysicalResistBehavior;

impl TestBehavior for PhysicalResistBehavior {
    fn categories(&self) -> &'static [Category] {
        &[Category::Resist]
    }

    fn modifier_types(&self) -> &'static [ModifierType] {
        &[ModifierType::Global]
    }

    fn default_action(&self) -> ActionConfig {
        attribute_pair(TestKind::PhysicalResist, "body", "armor")
    }

    fn prepare_document_data(&self, test: &mut SuccessTest) {
        let Some(mut incoming) = test
            .data
            .against
            .as_ref()
            .and_then(|against| against.damage.clone())
        else {
            return;
        };
        // Only the amount that got through matters here.
        incoming.value =
            ValueField::new(incoming.value.label.clone(), f64::from(incoming.value.value));
        test.data
            .pool
            .parts()
            .add_unique_part(part::ARMOR_PENETRATION, f64::from(incoming.ap.value), false);
        test.data.modified_damage = Some(incoming.clone());
        test.data.incoming_damage = Some(incoming);
    }

    fn can_be_extended(&self) -> bool {
        false
    }

    fn success(&self, test: &SuccessTest) -> Option<bool> {
        test.data
            .modified_damage
            .as_ref()
            .map(|damage| damage.value.value <= 0)
    }

    fn process_results(&self, test: &mut SuccessTest) {
        let Some(mut modified) = test.data.incoming_damage.clone() else {
            return;
        };
        modified
            .value
            .parts()
            .add_unique_part(part::HITS, -f64::from(test.hits()), false);
        modified.value.recompute(Bounds::at_least(0));
        tracing::debug!(damage = modified.value.value, "damage soaked");
        test.data.modified_damage = Some(modified);
    }
}
