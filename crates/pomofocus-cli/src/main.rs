use clap::{Parser, Subcommand};
use pomofocus_core::Config;
use tracing_subscriber::EnvFilter;

mod commands;
mod input;
mod surface;

#[derive(Parser)]
#[command(name = "pomofocus", version, about = "Pomodoro focus timer with a to-do list")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive timer session
    Run(commands::run::RunArgs),
    /// List timer modes and their durations
    Modes,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    let config = Config::load_or_default();
    init_tracing(&config.log.filter);

    let result = match cli.command {
        Commands::Run(args) => commands::run::run(args, &config),
        Commands::Modes => commands::modes::run(),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
