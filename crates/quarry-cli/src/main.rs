mod context;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use quarry_dispatch::{standard_registry, Dispatcher};
use quarry_types::DispatchError;

/// quarry -- package manager command line driver.
#[derive(Parser, Debug)]
#[command(name = "quarry", version, about)]
struct Cli {
    /// Repository configuration file (TOML)
    #[arg(short = 'c', long, default_value = "/etc/quarry/repos.toml")]
    repo_config: PathBuf,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Subcommand verb (install, update, search, ...)
    verb: String,

    /// Remaining arguments for the verb
    #[arg(trailing_var_arg = true)]
    args: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise -v selects the tier.
    let default_filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();

    let registry = standard_registry().map_err(|err| anyhow::anyhow!(err))?;
    let dispatcher = Dispatcher::new(registry);
    let mut ctx = context::OfflineContext::load(&cli.repo_config)?;

    match dispatcher.dispatch(&mut ctx, &cli.verb, &cli.args) {
        Ok(result) => {
            for message in &result.messages {
                if result.status.is_error() {
                    eprintln!("{message}");
                } else {
                    println!("{message}");
                }
            }
            process::exit(result.exit_code());
        }
        Err(DispatchError::UnknownCommand(verb)) => {
            match dispatcher.suggest(&verb) {
                Some(suggestion) => {
                    eprintln!("No such command: '{verb}'. Did you mean '{suggestion}'?")
                }
                None => eprintln!("No such command: '{verb}'"),
            }
            process::exit(1);
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
