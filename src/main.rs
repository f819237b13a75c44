use cidr_expand::logging::{init_logging, log_level, LOG_ENV};
use cidr_expand::{run, Cli};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let level = log_level(cli.verbose, std::env::var(LOG_ENV).ok().as_deref());
    if let Err(e) = init_logging(cli.log_config.as_deref(), level) {
        eprintln!("Error initializing logging: {e}");
        return ExitCode::FAILURE;
    }
    log::info!("#Start main()");

    match run(&cli) {
        Ok(summary) => {
            log::info!(
                "#Done cidrs={} rejected={} addresses={}",
                summary.cidrs,
                summary.rejected,
                summary.addresses
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
