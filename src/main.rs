use clap::Parser;
use quotesync::cli::commands::{Cli, Commands};
use quotesync::config::Config;
use quotesync::domain::values::category::CategoryFilter;
use quotesync::QuoteSync;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading configuration: {e}");
            std::process::exit(1);
        }
    };

    let qs = match QuoteSync::new(&config) {
        Ok(qs) => qs,
        Err(e) => {
            eprintln!("Error initializing quotesync: {e}");
            std::process::exit(1);
        }
    };

    let result = run_command(qs, &config, cli.command).await;
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("QUOTESYNC_LOG")
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run_command(
    qs: QuoteSync,
    config: &Config,
    cmd: Commands,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Add {
            text,
            category,
            publish,
        } => {
            let quote = qs.add_quote(text, category, publish).await?;
            println!("{}", serde_json::to_string_pretty(&quote)?);
        }
        Commands::Random { category } => {
            let filter = parse_filter(category)?;
            match qs.random_quote(filter)? {
                Some(quote) => println!("\"{}\" ({})", quote.text, quote.category),
                None => println!("No quotes available for this category."),
            }
        }
        Commands::List { category } => {
            let filter = parse_filter(category)?;
            let quotes = qs.list(filter)?;
            println!("{}", serde_json::to_string_pretty(&quotes)?);
        }
        Commands::Categories => {
            for category in qs.categories()? {
                println!("{category}");
            }
        }
        Commands::Import { path } => {
            let report = qs.import(&path)?;
            println!(
                "Imported {} quotes ({} new, {} updated, {} skipped); {} total",
                report.read, report.added, report.updated, report.skipped, report.total
            );
        }
        Commands::Export { path } => match path {
            Some(path) => {
                let count = qs.export(&path)?;
                println!("Exported {count} quotes to {}", path.display());
            }
            None => println!("{}", qs.export_json()?),
        },
        Commands::Sync => {
            let report = qs.sync().await?;
            if report.has_conflicts() {
                println!("{} conflicts resolved using remote data", report.updated);
            }
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Watch { interval, rounds } => {
            let interval = interval
                .map(Duration::from_secs)
                .unwrap_or(config.sync_interval);
            if interval.is_zero() {
                return Err("interval must be at least 1 second".into());
            }
            let shutdown = async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::error!(error = %e, "failed to listen for ctrl-c");
                    std::future::pending::<()>().await;
                }
            };
            let summary = qs.watch(interval, rounds, shutdown).await;
            println!(
                "Ran {} sync rounds ({} failed)",
                summary.rounds, summary.failures
            );
        }
    }
    Ok(())
}

fn parse_filter(category: Option<String>) -> Result<Option<CategoryFilter>, String> {
    category.map(|c| c.parse()).transpose()
}
