//! Drain resistance tests.

use super::{TestBehavior, TestKind, attribute_pair};
use crate::action::{ActionConfig, Category, DamageData, DamageKind};
use crate::modifier::ModifierType;
use crate::test::SuccessTest;
use crate::test::data::part;
use crate::value::Bounds;

/// Resisting drain after spellcasting. Every hit removes one point of drain;
/// the test succeeds when no drain is left.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrainBehavior;

impl TestBehavior for DrainBehavior {
    fn categories(&self) -> &'static [Category] {
        &[Category::Drain]
    }

    fn modifier_types(&self) -> &'static [ModifierType] {
        &[ModifierType::Global, ModifierType::Drain]
    }

    fn default_action(&self) -> ActionConfig {
        attribute_pair(TestKind::Drain, "willpower", "logic")
    }

    fn prepare_document_data(&self, test: &mut SuccessTest) {
        let drain = test
            .data
            .against
            .as_ref()
            .and_then(|against| against.drain)
            .unwrap_or(0);
        let mut incoming = DamageData::new(DamageKind::Stun, f64::from(drain));
        incoming.value.label = "Drain".into();
        incoming.value.recompute(Bounds::at_least(0));
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
            .map(|drain| drain.value.value <= 0)
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
        tracing::debug!(drain = modified.value.value, "drain resisted");
        test.data.modified_damage = Some(modified);
    }
}
