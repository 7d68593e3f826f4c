use std::process::ExitCode;

use clap::Parser as _;
use roster_cli::cli::Cli;
use roster_cli::commands::run_list;
use roster_cli::output::Output;
use roster_cli::timing::init_tracing;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing with timing support
    init_tracing(cli.verbose, cli.timing);

    let config = cli.config();
    let options = cli.list_options();

    match run_list(&config, &options, cli.json).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            Output::stderr().error(format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}
