use std::path::Path;
use std::sync::Arc;

use colored::Colorize;
use ec_mechanics::{AcceptAll, EngineSettings, SuccessTest, TestData};

pub struct RollArgs {
    pub pool: i32,
    pub threshold: i32,
    pub limit: i32,
    pub explode: bool,
}

pub fn run(
    settings: Arc<EngineSettings>,
    args: RollArgs,
    seed: Option<u64>,
    save: Option<&Path>,
) -> Result<(), String> {
    if args.pool < 0 {
        return Err(format!("pool must not be negative, got {}", args.pool));
    }
    let mut dice = super::roller(seed);
    let data = TestData::from_pool(args.pool)
        .with_title(format!("{} dice", args.pool))
        .with_threshold(args.threshold)
        .with_limit(args.limit);

    let test = if args.explode {
        // A bare pool has no Edge to push with; explode the roll directly.
        let mut test = SuccessTest::new(data, settings);
        test.prepare_base_values();
        test.calculate_base_values();
        test.create_roll();
        for roll in &mut test.rolls {
            roll.explode = true;
        }
        test.evaluate(&mut dice).map_err(|e| e.to_string())?;
        test.process_results();
        test
    } else {
        let execution = SuccessTest::new(data, settings)
            .execute(&mut dice, &mut AcceptAll)
            .map_err(|e| e.to_string())?;
        super::print_warnings(&execution.warnings);
        execution.test
    };

    println!("{}", "Roll".bold());
    super::print_tests(&[&test]);

    if let Some(path) = save {
        super::save_record(path, &test)?;
    }
    Ok(())
}
