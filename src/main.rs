use anyhow::Result;
use clap::Parser;

use clean_dest::cleaner::CleanDestination;
use clean_dest::cli::Cli;
use clean_dest::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    // Load configuration, then let CLI arguments override it
    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply_to(&mut config)?;

    tracing::debug!(?config, "Loaded configuration");

    let cleaner = CleanDestination::new(config.clean.clone());
    let removed = cleaner.execute()?;

    report(removed, config.clean.dry_run, cli.json, cli.quiet)?;

    Ok(())
}

fn report(removed: Option<Vec<String>>, dry_run: bool, json: bool, quiet: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&removed)?);
        return Ok(());
    }
    if quiet {
        return Ok(());
    }

    match removed {
        Some(paths) => {
            let label = if dry_run {
                "[DRY RUN] Would remove"
            } else {
                "Removed"
            };
            println!(
                "{} {} entr{}",
                label,
                paths.len(),
                if paths.len() == 1 { "y" } else { "ies" }
            );
            for path in &paths {
                println!("  {path}");
            }
        }
        None => println!("Done (no removal report)."),
    }
    Ok(())
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "warn"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("clean_dest={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
