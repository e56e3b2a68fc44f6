use std::path::Path;
use std::sync::Arc;

use colored::Colorize;
use ec_mechanics::{AcceptAll, ActorRef, EngineSettings, Registry, SuccessTest};

pub fn run(
    settings: Arc<EngineSettings>,
    record: &Path,
    actor: Option<&Path>,
    seed: Option<u64>,
    save: Option<&Path>,
) -> Result<(), String> {
    let defender = actor.map(super::load_actor).transpose()?;
    let stored = super::load_record(record)?;
    let origin =
        SuccessTest::from_record(stored, &Registry::new(), settings).map_err(|e| e.to_string())?;

    let opposed = origin
        .create_opposed(defender.map(|actor| actor as ActorRef))
        .map_err(|warning| warning.to_string())?;

    let mut dice = super::roller(seed);
    let execution = opposed
        .execute(&mut dice, &mut AcceptAll)
        .map_err(|e| e.to_string())?;

    println!("{}", execution.test.data.title.bold());
    super::print_execution(&execution);

    if execution.is_completed() {
        let verdict = if execution.test.success() {
            format!("{} holds", execution.test.data.kind).green()
        } else {
            format!("{} prevails", origin.data.title).red()
        };
        println!("  {verdict}");
        if let Some(path) = save {
            super::save_record(path, &execution.test)?;
        }
    }
    Ok(())
}
