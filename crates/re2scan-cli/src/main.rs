use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod shutdown;

#[derive(Parser)]
#[command(name = "re2scan")]
#[command(about = "Live memory scanner for the RE2 remake")]
struct Args {
    /// Process image name of the game executable.
    #[arg(long, default_value = re2scan_core::GAME_PROCESS_NAME)]
    process: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Attach to the game and print live state until interrupted.
    Watch {
        /// Refresh interval in milliseconds.
        #[arg(short, long, default_value_t = 500)]
        interval: u64,
    },
    /// Take a single snapshot and emit it as JSON.
    Dump {
        /// Write JSON to a file instead of stdout.
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("re2scan=info".parse()?))
        .init();

    let args = Args::parse();

    match args.command {
        Command::Watch { interval } => commands::watch::run(&args.process, interval),
        Command::Dump { output } => commands::dump::run(&args.process, output.as_deref()),
    }
}
