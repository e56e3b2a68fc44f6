use std::path::Path;
use std::sync::Arc;

use colored::Colorize;
use ec_mechanics::{ActionOutcome, ActorRef, EngineSettings, Registry, SuccessTest};

use crate::EdgeAction;

pub fn run(
    settings: Arc<EngineSettings>,
    record: &Path,
    action: EdgeAction,
    actor_path: &Path,
    seed: Option<u64>,
    persist: bool,
) -> Result<(), String> {
    let actor = super::load_actor(actor_path)?;
    let mut registry = Registry::new();
    registry.insert_actor(actor.clone());

    let stored = super::load_record(record)?;
    let mut test =
        SuccessTest::from_record(stored, &registry, settings).map_err(|e| e.to_string())?;
    if test.actor().is_none() {
        test = test.with_actor(actor.clone() as ActorRef);
    }

    let mut dice = super::roller(seed);
    let outcome = match action {
        EdgeAction::Push => test.execute_with_push_the_limit(&mut dice),
        EdgeAction::SecondChance => test.execute_with_second_chance(&mut dice),
    }
    .map_err(|e| e.to_string())?;

    if let ActionOutcome::Rejected(warning) = outcome {
        return Err(warning.to_string());
    }

    let label = match action {
        EdgeAction::Push => "Push the Limit",
        EdgeAction::SecondChance => "Second Chance",
    };
    println!("{} {}", test.data.title.bold(), format!("({label})").dimmed());
    super::print_tests(&[&test]);
    super::save_record(record, &test)?;
    if persist {
        super::save_actor(actor_path, &actor)?;
    }
    Ok(())
}
