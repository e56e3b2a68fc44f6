//! CLI frontend for the Edgecast dice-pool test engine.

mod commands;

use std::env;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(
    name = "edgecast",
    about = "Edgecast: roll Shadowrun-style dice-pool tests",
    version,
    propagate_version = true
)]
struct Cli {
    /// Engine settings file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a bare dice pool
    Roll {
        /// Number of dice
        pool: i32,

        /// Hits needed
        #[arg(short, long, default_value = "0")]
        threshold: i32,

        /// Maximum hits counted
        #[arg(short, long, default_value = "0")]
        limit: i32,

        /// Sixes explode
        #[arg(long)]
        explode: bool,

        /// RNG seed for a reproducible roll
        #[arg(long)]
        seed: Option<u64>,

        /// Write the test record to this file
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Run a test from an action file
    Test {
        /// Action configuration (JSON); defaults to the item's action
        #[arg(long, required_unless_present = "item")]
        action: Option<PathBuf>,

        /// Acting character sheet (JSON)
        #[arg(long)]
        actor: Option<PathBuf>,

        /// Item sheet (JSON)
        #[arg(long)]
        item: Option<PathBuf>,

        /// Review and edit the test before rolling
        #[arg(long)]
        review: bool,

        /// Push the limit: add Edge to the pool and explode sixes
        #[arg(long)]
        push_the_limit: bool,

        /// Repeat the test, accumulating hits
        #[arg(long)]
        extended: bool,

        /// RNG seed for a reproducible roll
        #[arg(long)]
        seed: Option<u64>,

        /// Write the test record to this file
        #[arg(long)]
        save: Option<PathBuf>,

        /// Write updated actor and item sheets back to their files
        #[arg(long)]
        persist: bool,
    },

    /// Spend Edge on a recorded test
    Edge {
        /// Test record (JSON)
        record: PathBuf,

        /// Edge action to apply
        #[arg(value_enum)]
        action: EdgeAction,

        /// Character sheet spending the Edge (JSON)
        #[arg(long)]
        actor: PathBuf,

        /// RNG seed for a reproducible roll
        #[arg(long)]
        seed: Option<u64>,

        /// Write the updated actor sheet back to its file
        #[arg(long)]
        persist: bool,
    },

    /// Reroll failed dice of a recorded test
    Reroll {
        /// Test record (JSON)
        record: PathBuf,

        /// Dice to reroll at most
        #[arg(short, long)]
        count: u32,

        /// RNG seed for a reproducible roll
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Roll the opposing test against a recorded test
    Oppose {
        /// Test record (JSON)
        record: PathBuf,

        /// Opposing character sheet (JSON)
        #[arg(long)]
        actor: Option<PathBuf>,

        /// RNG seed for a reproducible roll
        #[arg(long)]
        seed: Option<u64>,

        /// Write the opposing test record to this file
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Display a recorded test without rolling
    Show {
        /// Test record (JSON)
        record: PathBuf,
    },
}

/// Edge actions available on an evaluated test.
#[derive(Clone, Copy, ValueEnum)]
pub enum EdgeAction {
    /// Roll Edge extra dice that explode
    Push,
    /// Reroll every die that missed
    SecondChance,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("EDGECAST_LOG")
        .unwrap_or_else(|_| EnvFilter::new("edgecast=info,ec_mechanics=warn"));

    let format = env::var("EDGECAST_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let settings = match commands::load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Roll {
            pool,
            threshold,
            limit,
            explode,
            seed,
            save,
        } => commands::roll::run(
            settings,
            commands::roll::RollArgs {
                pool,
                threshold,
                limit,
                explode,
            },
            seed,
            save.as_deref(),
        ),
        Commands::Test {
            action,
            actor,
            item,
            review,
            push_the_limit,
            extended,
            seed,
            save,
            persist,
        } => commands::test::run(
            settings,
            commands::test::TestArgs {
                action,
                actor,
                item,
                review,
                push_the_limit,
                extended,
                persist,
            },
            seed,
            save.as_deref(),
        ),
        Commands::Edge {
            record,
            action,
            actor,
            seed,
            persist,
        } => commands::edge::run(settings, &record, action, &actor, seed, persist),
        Commands::Reroll {
            record,
            count,
            seed,
        } => commands::reroll::run(settings, &record, count, seed),
        Commands::Oppose {
            record,
            actor,
            seed,
            save,
        } => commands::oppose::run(settings, &record, actor.as_deref(), seed, save.as_deref()),
        Commands::Show { record } => commands::show::run(settings, &record),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
