use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bbc_radio::Error;
use bbc_radio::domain::Programme;
use bbc_radio::fetch::{FetcherConfig, HttpFetcher};
use bbc_radio::schedule::Schedule;
use bbc_radio::stations::{DEFAULT_STATIONS_URL, StationDirectory};

#[derive(Parser)]
#[command(name = "bbc-radio", about = "BBC radio station schedules", version)]
struct Cli {
    /// Station listing page
    #[arg(long, default_value = DEFAULT_STATIONS_URL)]
    stations_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List stations
    Stations,
    /// Retrieve a schedule
    Schedule {
        /// Name of a station, e.g. "BBC Radio 1"
        station_name: String,
        /// Date in YYYY-MM-DD format
        date: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, Error> {
    let fetcher = HttpFetcher::new(FetcherConfig::default().with_timeout(cli.timeout))?;
    let directory = StationDirectory::new(fetcher).with_stations_url(&cli.stations_url)?;

    match cli.command {
        Command::Stations => {
            for (name, url) in directory.urls().await?.iter() {
                println!("{name} {url}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Schedule { station_name, date } => {
            let station = directory.select(&station_name).await?;
            let schedule = Schedule::new(station, &date)?;

            let programmes = match schedule.programmes(directory.fetcher()).await {
                Ok(programmes) => programmes,
                Err(Error::Fetch(e)) => {
                    tracing::debug!(error = %e, "schedule fetch failed");
                    println!("Unable to retrieve schedule for {station_name} on {date}.");
                    return Ok(ExitCode::FAILURE);
                }
                Err(e) => return Err(e),
            };

            println!(
                "Schedule for {} on {}",
                schedule.station().name(),
                schedule.date()
            );
            for programme in &programmes {
                for line in programme_lines(programme) {
                    println!("{line}");
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// The four lines printed for each programme.
fn programme_lines(programme: &Programme) -> [String; 4] {
    let summary = [
        programme.series_name().unwrap_or("<No series name found>"),
        programme.name().unwrap_or("<No programme name found>"),
        programme
            .description()
            .unwrap_or("<No programme description found>"),
    ]
    .join("|");

    [
        "*".to_string(),
        programme
            .start_date()
            .unwrap_or("<No start date found>")
            .to_string(),
        summary,
        programme
            .url()
            .unwrap_or("<No programme URL found>")
            .to_string(),
    ]
}
