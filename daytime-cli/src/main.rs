use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use daytime_cli::{command::Command, config::Config, setup_logger};
use tracing::{debug, error, warn};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Set desired logging level, overrides the level from the config file
    #[clap(short, long)]
    loglevel: Option<log::LevelFilter>,

    /// Read the demo values and log level from this TOML file
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Print results as JSON instead of plain text
    #[clap(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Could not load config {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    let (level, ignored_level) = resolve_loglevel(args.loglevel, &config);

    if let Err(e) = setup_logger(level) {
        eprintln!("Could not setup logging: {e}");
        return ExitCode::FAILURE;
    }

    if let Some(raw) = ignored_level {
        warn!("Ignoring unknown log level {raw:?} in config.");
    }

    debug!(?config, "configuration loaded");
    if args.config.is_some() {
        config.check();
    }

    let report = match args.command.execute(&config.demo) {
        Ok(report) => report,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!("Could not serialize report: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{report}");
    }

    ExitCode::SUCCESS
}

/// Pick the log level, the command line winning over the config. Also
/// returns the config's level when it had to be ignored, so it can be
/// reported once the logger is set up.
fn resolve_loglevel(
    cli: Option<log::LevelFilter>,
    config: &Config,
) -> (log::LevelFilter, Option<&str>) {
    let (from_config, ignored) = match config.loglevel() {
        Ok(level) => (level, None),
        Err(_) => (None, config.loglevel.as_deref()),
    };

    (
        cli.or(from_config).unwrap_or(log::LevelFilter::Info),
        ignored,
    )
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_args() {
        Args::command().debug_assert();
    }

    #[test]
    fn parse_args() {
        let args = Args::try_parse_from([
            "daytime", "--loglevel", "trace", "--json", "plus", "23:00:00", "2:00:00",
        ])
        .unwrap();

        assert_eq!(args.loglevel, Some(log::LevelFilter::Trace));
        assert!(args.json);
        assert!(args.config.is_none());
        assert!(matches!(args.command, Command::Plus { .. }));
    }

    #[test]
    fn loglevel_resolution() {
        let config = |raw: Option<&str>| Config {
            loglevel: raw.map(String::from),
            ..Config::default()
        };

        assert_eq!(
            resolve_loglevel(None, &Config::default()),
            (log::LevelFilter::Info, None)
        );
        assert_eq!(
            resolve_loglevel(None, &config(Some("debug"))),
            (log::LevelFilter::Debug, None)
        );
        assert_eq!(
            resolve_loglevel(Some(log::LevelFilter::Warn), &config(Some("debug"))),
            (log::LevelFilter::Warn, None)
        );
        assert_eq!(
            resolve_loglevel(None, &config(Some("chatty"))),
            (log::LevelFilter::Info, Some("chatty"))
        );
        assert_eq!(
            resolve_loglevel(Some(log::LevelFilter::Trace), &config(Some("chatty"))),
            (log::LevelFilter::Trace, Some("chatty"))
        );
    }

    #[test]
    fn reject_invalid_time() {
        assert!(Args::try_parse_from(["daytime", "compare", "24:00:00", "00:00:00"]).is_err());
    }
}
