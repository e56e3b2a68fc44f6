pub mod edge;
pub mod oppose;
pub mod reroll;
pub mod review;
pub mod roll;
pub mod show;

use std::fs;
use std::path::Path;
use std::sync::Arc;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;
use serde::de::DeserializeOwned;

use ec_mechanics::{
    Character, CharacterSheet, EngineSettings, Execution, ExecutionStatus, Gear, GearSheet,
    RandomDice, SuccessTest, TestRecord, Warning,
};

/// Settings from `--config`, or the defaults.
pub fn load_settings(path: Option<&Path>) -> Result<Arc<EngineSettings>, String> {
    let settings = match path {
        Some(path) => EngineSettings::load(path)
            .map_err(|e| format!("failed to load {}: {e}", path.display()))?,
        None => EngineSettings::default(),
    };
    Ok(Arc::new(settings))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let source =
        fs::read_to_string(path).map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&source).map_err(|e| format!("invalid {}: {e}", path.display()))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("failed to serialize {}: {e}", path.display()))?;
    fs::write(path, json + "\n").map_err(|e| format!("failed to write {}: {e}", path.display()))
}

/// Load a character sheet.
pub fn load_actor(path: &Path) -> Result<Arc<Character>, String> {
    let sheet: CharacterSheet = read_json(path)?;
    tracing::debug!(name = %sheet.name, path = %path.display(), "loaded actor");
    Ok(Character::shared(sheet))
}

/// Load an item sheet.
pub fn load_item(path: &Path) -> Result<Arc<Gear>, String> {
    let sheet: GearSheet = read_json(path)?;
    tracing::debug!(name = %sheet.name, path = %path.display(), "loaded item");
    Ok(Gear::shared(sheet))
}

/// Write a character's current sheet back to its file.
pub fn save_actor(path: &Path, actor: &Character) -> Result<(), String> {
    write_json(path, &actor.snapshot())
}

/// Write an item's current sheet back to its file.
pub fn save_item(path: &Path, item: &Gear) -> Result<(), String> {
    write_json(path, &item.snapshot())
}

/// Load a test record.
pub fn load_record(path: &Path) -> Result<TestRecord, String> {
    let source =
        fs::read_to_string(path).map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    TestRecord::from_json(&source).map_err(|e| format!("invalid {}: {e}", path.display()))
}

/// Write a test record.
pub fn save_record(path: &Path, test: &SuccessTest) -> Result<(), String> {
    let json = test
        .to_record()
        .to_json()
        .map_err(|e| format!("failed to serialize record: {e}"))?;
    fs::write(path, json + "\n").map_err(|e| format!("failed to write {}: {e}", path.display()))?;
    println!("  {} {}", "Saved".dimmed(), path.display());
    Ok(())
}

/// Dice for this run.
pub fn roller(seed: Option<u64>) -> RandomDice {
    match seed {
        Some(seed) => RandomDice::seeded(seed),
        None => RandomDice::from_os_rng(),
    }
}

fn outcome(test: &SuccessTest) -> String {
    if !test.data.evaluated {
        return "not rolled".dimmed().to_string();
    }
    if test.critical_glitched() {
        return "critical glitch".red().bold().to_string();
    }
    let mut label = if test.show_success_label() {
        "success".green().bold().to_string()
    } else if test.failure() {
        "failure".red().to_string()
    } else {
        format!("{} hits", test.hits())
    };
    if test.glitched() {
        label.push_str(&format!(" + {}", "glitch".yellow()));
    }
    label
}

/// Print tests as a result table followed by their rolls.
pub fn print_tests(tests: &[&SuccessTest]) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Test",
        "Pool",
        "Threshold",
        "Limit",
        "Hits",
        "Net Hits",
        "Result",
    ]);

    for test in tests {
        let hits = if test.is_extended() {
            format!("{} ({} total)", test.hits(), test.extended_hits())
        } else {
            test.hits().to_string()
        };
        table.add_row(vec![
            test.data.title.clone(),
            test.code(),
            test.threshold().to_string(),
            if test.has_limit() {
                test.limit().to_string()
            } else {
                "-".to_string()
            },
            hits,
            test.net_hits().to_string(),
            outcome(test),
        ]);
    }
    println!("{table}");

    for test in tests {
        for roll in &test.rolls {
            println!("  {} {roll}", test.data.title.dimmed());
        }
        if let Some(damage) = &test.data.modified_damage {
            println!("  {} {damage}", "Damage taken".bold());
        } else if let Some(damage) = &test.data.damage {
            println!("  {} {damage}", "Damage".bold());
        }
        let gain = &test.data.edge_gain;
        if gain.gained {
            println!(
                "  {} Edge regained ({})",
                "+1".green(),
                gain.effect.as_deref().unwrap_or_default()
            );
        } else if let Some(reason) = gain.reason.as_deref().filter(|_| gain.discarded) {
            println!("  {} {reason}", "Edge discarded:".yellow());
        }
    }
}

/// Print warnings raised while running a test.
pub fn print_warnings(warnings: &[Warning]) {
    for warning in warnings {
        println!("  {} {warning}", "warning:".yellow().bold());
    }
}

/// Print an execution and everything it chained into.
pub fn print_execution(execution: &Execution) {
    match execution.status {
        ExecutionStatus::Cancelled => {
            println!("  {}", "Test cancelled.".dimmed());
            return;
        }
        ExecutionStatus::Halted => {
            print_warnings(&execution.warnings);
            println!("  {}", "Test halted before rolling.".red());
            return;
        }
        ExecutionStatus::Completed => {}
    }

    let runs = execution.flatten();
    let tests: Vec<&SuccessTest> = runs.iter().map(|run| &run.test).collect();
    print_tests(&tests);
    for run in runs {
        print_warnings(&run.warnings);
    }
}
