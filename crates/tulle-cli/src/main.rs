//! Tulle CLI — simulation, benchmarking, and inspection.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tulle")]
#[command(version, about = "Tulle — seeded cloth simulation engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation from a config file or the defaults.
    Simulate {
        /// Path to a cloth config (TOML). Built-in defaults when omitted.
        #[arg(short, long)]
        config: Option<String>,

        /// Number of ticks to run.
        #[arg(short, long, default_value_t = 60)]
        ticks: u64,

        /// Execution strategy (scalar, batched, offloaded).
        #[arg(short, long, default_value = "scalar")]
        strategy: String,

        /// Write the final state snapshot to this path.
        #[arg(long)]
        snapshot: Option<String>,

        /// Write a JSON wireframe animation to this path.
        #[arg(long)]
        export: Option<String>,
    },

    /// Run benchmark scenarios.
    Benchmark {
        /// Which scenario to run (curtain, curtain_small, becalmed, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Which strategy to run (scalar, batched, offloaded, all).
        #[arg(long, default_value = "all")]
        strategy: String,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Inspect a state snapshot file.
    Inspect {
        /// Path to snapshot file.
        path: String,
    },

    /// Validate a cloth config file.
    Validate {
        /// Path to config file (TOML).
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            config,
            ticks,
            strategy,
            snapshot,
            export,
        } => commands::simulate(
            config.as_deref(),
            ticks,
            &strategy,
            snapshot.as_deref(),
            export.as_deref(),
        ),
        Commands::Benchmark {
            scenario,
            strategy,
            output,
        } => commands::benchmark(&scenario, &strategy, output.as_deref()),
        Commands::Inspect { path } => commands::inspect(&path),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
