use std::io::BufRead;

use colored::Colorize;
use ec_mechanics::{ReviewResponse, Reviewer, TestData};

const OVERRIDE: &str = "Review";

const HELP: &str = "pool N | threshold N | limit N | modifier N | hits N | push | extended | roll | cancel";

/// Line-based review prompt.
///
/// Each line edits the pending data; `roll` (or end of input) accepts it.
pub struct PromptReviewer<R> {
    input: R,
}

impl<R: BufRead> PromptReviewer<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

enum Edit {
    Applied,
    Accept,
    Cancel,
    Invalid(String),
}

fn apply(data: &mut TestData, line: &str) -> Edit {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Edit::Applied;
    };
    let number = words.next().map(str::parse::<i32>);

    let field = match command {
        "pool" => &mut data.pool,
        "threshold" => &mut data.threshold,
        "limit" => &mut data.limit,
        "modifier" => &mut data.modifiers,
        "hits" => &mut data.manual_hits,
        "push" => {
            data.push_the_limit = !data.push_the_limit;
            return Edit::Applied;
        }
        "extended" => {
            data.extended = !data.extended;
            return Edit::Applied;
        }
        "roll" | "ok" => return Edit::Accept,
        "cancel" => return Edit::Cancel,
        other => return Edit::Invalid(format!("unknown command '{other}'")),
    };

    match number {
        Some(Ok(value)) => {
            field.set_override(OVERRIDE, f64::from(value));
            Edit::Applied
        }
        Some(Err(e)) => Edit::Invalid(format!("{command}: {e}")),
        None => Edit::Invalid(format!("{command} needs a number")),
    }
}

fn print_pending(data: &TestData) {
    let flag = |on: bool| if on { "on".green() } else { "off".dimmed() };
    println!("{} {}", "Review".bold(), data.title);
    println!(
        "  pool {}  threshold {}  limit {}  modifiers {}",
        data.pool.value, data.threshold.value, data.limit.value, data.modifiers.value
    );
    println!(
        "  push the limit {}  extended {}",
        flag(data.push_the_limit),
        flag(data.extended)
    );
    println!("  {}", HELP.dimmed());
}

impl<R: BufRead> Reviewer for PromptReviewer<R> {
    fn review(&mut self, data: &TestData) -> ReviewResponse {
        let mut edited = data.clone();
        print_pending(&edited);

        let mut line = String::new();
        loop {
            line.clear();
            match self.input.read_line(&mut line) {
                Ok(0) => return ReviewResponse::Accept(edited),
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!("review input failed: {e}");
                    return ReviewResponse::Cancel;
                }
            }
            match apply(&mut edited, line.trim()) {
                Edit::Applied => {}
                Edit::Accept => return ReviewResponse::Accept(edited),
                Edit::Cancel => return ReviewResponse::Cancel,
                Edit::Invalid(message) => {
                    println!("  {} {message}", "?".yellow());
                    println!("  {}", HELP.dimmed());
                }
            }
        }
    }
}
