use std::path::Path;
use std::sync::Arc;

use colored::Colorize;
use ec_mechanics::{ActionOutcome, EngineSettings, Registry, SuccessTest};

pub fn run(
    settings: Arc<EngineSettings>,
    record: &Path,
    count: u32,
    seed: Option<u64>,
) -> Result<(), String> {
    let stored = super::load_record(record)?;
    let mut test =
        SuccessTest::from_record(stored, &Registry::new(), settings).map_err(|e| e.to_string())?;

    let mut dice = super::roller(seed);
    if let ActionOutcome::Rejected(warning) = test
        .reroll_failures(count, &mut dice)
        .map_err(|e| e.to_string())?
    {
        return Err(warning.to_string());
    }

    println!("{} {}", test.data.title.bold(), "(rerolled)".dimmed());
    super::print_tests(&[&test]);
    super::save_record(record, &test)
}
