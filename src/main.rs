mod accounts;
mod cli;
mod config;
mod error;
mod external;
mod logging;
mod remote;
mod selection;
#[cfg(test)]
mod testing;

use std::process::ExitCode;

use clap::Parser;
use cli::Commands;

#[derive(Parser)]
#[command(name = "heroku-accounts")]
#[command(version, about = "Manage multiple Heroku accounts")]
struct Cli {
    /// Print debug logs to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli::run(cli.command) {
        Ok(code) => Ok(code),
        Err(e) => {
            eprintln!("{e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
