use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use keyeval::config::Settings;
use keyeval::error::{KeResult, KeyEvalError};
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON settings file; flags typed on the command line take precedence.
    #[arg(global = true, long)]
    settings: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Full metrics report for one keyboard + layout + corpus.
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Filter and truncate a corpus, then save it.
    Clean(cmd::clean::CleanArgs),
    /// Side-by-side metrics of several layouts on one corpus.
    Compare(cmd::compare::CompareArgs),
}

fn resolve_settings(cli: &Cli, matches: &ArgMatches) -> KeResult<Settings> {
    let (name, cli_settings) = match &cli.command {
        Commands::Analyze(args) => ("analyze", &args.settings),
        Commands::Clean(args) => ("clean", &args.settings),
        Commands::Compare(args) => ("compare", &args.settings),
    };

    let settings = match &cli.settings {
        Some(path) => {
            info!("⚙️  Loading settings from: {}", path);
            let mut file_settings = Settings::load_from_file(path)?;
            let sub_matches = matches
                .subcommand_matches(name)
                .ok_or_else(|| KeyEvalError::Config(format!("missing '{}' arguments", name)))?;
            file_settings.merge_from_cli(cli_settings, sub_matches);
            file_settings
        }
        None => cli_settings.clone(),
    };

    settings.validate()?;
    Ok(settings)
}

fn run(cli: &Cli, matches: &ArgMatches) -> KeResult<()> {
    let settings = resolve_settings(cli, matches)?;
    match &cli.command {
        Commands::Analyze(args) => cmd::analyze::run(args, &settings),
        Commands::Clean(args) => cmd::clean::run(args, &settings),
        Commands::Compare(args) => cmd::compare::run(args, &settings),
    }
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}
