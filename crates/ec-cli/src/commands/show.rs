use std::path::Path;
use std::sync::Arc;

use colored::Colorize;
use ec_mechanics::{EngineSettings, Registry, SuccessTest};

pub fn run(settings: Arc<EngineSettings>, record: &Path) -> Result<(), String> {
    let stored = super::load_record(record)?;
    let recorded_at = stored.recorded_at;
    let test =
        SuccessTest::from_record(stored, &Registry::new(), settings).map_err(|e| e.to_string())?;

    println!(
        "{} {}",
        test.data.title.bold(),
        format!("(recorded {})", recorded_at.format("%Y-%m-%d %H:%M UTC")).dimmed()
    );
    super::print_tests(&[&test]);

    if let Some(against) = &test.data.against {
        println!(
            "  {} {} with {} net hits",
            "Opposing".dimmed(),
            against.title,
            against.net_hits
        );
    }
    Ok(())
}
