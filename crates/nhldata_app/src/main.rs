use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::{error, info};

use nhldata_crawler::crawler::{CrawlSummary, Crawler};
use nhldata_crawler::logger;
use nhldata_infrastructure::{services::ServiceRegistry, settings::Settings};
use nhldata_interface::errors::{AppError, Result};

mod cli;

use cli::Cli;

async fn run(cli: Cli, settings: Settings) -> Result<CrawlSummary> {
    let range = cli.date_range()?;
    info!(destination = %settings.storage, api = %settings.api.base_url, "configured");

    let services = ServiceRegistry::new(&settings).await?;

    Crawler::new(services.nhl_service, services.storage_service)
        .crawl(&range)
        .await
}

// Only --help and --version succeed; every argument error is fatal.
fn cli_exit_code(error: &clap::Error) -> ExitCode {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

fn exit_code(result: &Result<CrawlSummary>) -> ExitCode {
    match result {
        Ok(summary) => {
            info!(
                dates = summary.dates,
                games = summary.games,
                rows = summary.rows,
                "job complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(category = e.category(), error = %e, "error executing job");
            ExitCode::FAILURE
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return cli_exit_code(&e);
        }
    };

    let settings = Settings::new();
    logger::setup(
        settings
            .as_ref()
            .map(|settings| settings.logger.level.as_str())
            .unwrap_or("info"),
    );

    let result = match settings {
        Ok(settings) => run(cli, settings).await,
        Err(e) => Err(AppError::ConfigError { msg: e.to_string() }),
    };

    exit_code(&result)
}
