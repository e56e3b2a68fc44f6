//! Spellcasting tests.

use super::{TestBehavior, TestKind};
use crate::action::{ActionConfig, Category};
use crate::rules;
use crate::test::SuccessTest;

/// Casting a spell. The caster resists the spell's drain afterwards unless
/// the action names another follow-up.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpellCastingBehavior;

impl TestBehavior for SpellCastingBehavior {
    fn categories(&self) -> &'static [Category] {
        &[Category::Magic]
    }

    fn default_action(&self) -> ActionConfig {
        ActionConfig {
            name: TestKind::SpellCasting.to_string(),
            test: Some(TestKind::SpellCasting),
            attribute: Some("magic".into()),
            skill: Some("spellcasting".into()),
            ..ActionConfig::default()
        }
    }

    fn prepare_document_data(&self, test: &mut SuccessTest) {
        let drain = rules::spell_drain(test.data.action.drain.unwrap_or(0));
        test.data.action.drain = Some(drain);
    }

    fn follow_up(&self, _test: &SuccessTest) -> Option<TestKind> {
        Some(TestKind::Drain)
    }

    fn can_be_extended(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::action::{ActionConfig, Category};
    use crate::config::EngineSettings;
    use crate::dice::ScriptedDice;
    use crate::sheet::{Character, CharacterSheet};
    use crate::test::{AcceptAll, SuccessTest, TestKind};

    fn settings() -> Arc<EngineSettings> {
        Arc::new(EngineSettings::default())
    }

    fn mage() -> Arc<Character> {
        Character::shared(
            CharacterSheet::named("Lotus")
                .with_attribute("magic", 5)
                .with_attribute("willpower", 4)
                .with_attribute("logic", 2)
                .with_skill("spellcasting", 4),
        )
    }

    #[test]
    fn casting_chains_into_drain() {
        let spell = ActionConfig {
            name: "Stunbolt".into(),
            drain: Some(3),
            ..TestKind::SpellCasting.behavior().default_action()
        };
        let mut dice = ScriptedDice::new([5, 6, 2, 2, 2, 2, 2, 2, 2]);
        dice.push([5, 2, 2, 2, 2, 2]);
        let execution = SuccessTest::from_action(spell, Some(mage()), None, settings())
            .execute(&mut dice, &mut AcceptAll)
            .unwrap();

        let cast = &execution.test;
        assert_eq!(cast.pool(), 9);
        assert_eq!(cast.hits(), 2);
        assert!(cast.data.categories.contains(&Category::Magic));

        assert_eq!(execution.chained.len(), 1);
        let drain = &execution.chained[0].test;
        assert_eq!(drain.data.kind, TestKind::Drain);
        assert_eq!(drain.pool(), 6);
        assert_eq!(drain.hits(), 1);
        assert_eq!(
            drain.data.modified_damage.as_ref().unwrap().value.value,
            2
        );
    }

    #[test]
    fn light_spells_still_drain_two() {
        let spell = ActionConfig {
            drain: Some(1),
            ..TestKind::SpellCasting.behavior().default_action()
        };
        let execution = SuccessTest::from_action(spell, Some(mage()), None, settings())
            .execute(&mut ScriptedDice::default(), &mut AcceptAll)
            .unwrap();
        assert_eq!(execution.test.data.action.drain, Some(2));
        let drain = &execution.chained[0].test;
        assert_eq!(drain.data.incoming_damage.as_ref().unwrap().value.value, 2);
    }
}
