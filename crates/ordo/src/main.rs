//! ordo CLI entry point.

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ordo::cli::{Cli, Commands, OutputFormat};
use ordo::generator::build_generator;
use ordo::output::{format_output, pretty};
use ordo::{commands, Config};
use ordo_core::liturgy::{liturgical_year_of, season_catalog};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON on stdout stays parseable
    let default_filter = if cli.quiet {
        "ordo=warn,ordo_core=warn"
    } else {
        "ordo=info,ordo_core=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().with_overrides(cli.data_dir.clone(), cli.lang.clone());
    let language = config.language();
    let format = cli.format;

    match cli.command {
        Commands::Year { year } => {
            let end_year = match year {
                Some(year) => year,
                None => liturgical_year_of(Local::now().date_naive())?,
            };
            let generator = build_generator(&config, cli.sample);
            let year = commands::year(generator.as_ref(), end_year, language).await?;
            match format {
                OutputFormat::Json => println!("{}", format_output(&year, format)?),
                OutputFormat::Pretty => println!("{}", pretty::format_year(&year)),
            }
        }
        Commands::Day { date } => {
            let now = Local::now();
            let date = date.unwrap_or_else(|| now.date_naive());
            let generator = build_generator(&config, cli.sample);
            let report = commands::day(generator.as_ref(), date, now.time(), language).await?;
            match format {
                OutputFormat::Json => println!("{}", format_output(&report, format)?),
                OutputFormat::Pretty => println!("{}", pretty::format_day(&report)),
            }
        }
        Commands::Window { year } => {
            let report = commands::window(year)?;
            match format {
                OutputFormat::Json => println!("{}", format_output(&report, format)?),
                OutputFormat::Pretty => println!("{}", pretty::format_window(&report)),
            }
        }
        Commands::Cycle { year } => {
            let cycle = commands::cycle(year)?;
            match format {
                OutputFormat::Json => println!("{}", format_output(&cycle, format)?),
                OutputFormat::Pretty => println!("{}", pretty::format_cycle(&cycle, language)),
            }
        }
        Commands::Seasons => {
            let seasons = season_catalog(language);
            match format {
                OutputFormat::Json => println!("{}", format_output(&seasons, format)?),
                OutputFormat::Pretty => println!("{}", pretty::format_seasons(&seasons)),
            }
        }
    }

    Ok(())
}
