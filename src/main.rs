//! Demo driver: recovers a known polynomial from its samples, then fits four
//! arbitrary points. With `--points` it interpolates the given JSON instead.

use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::{Arg, ArgMatches, Command};
use log::LevelFilter;
use poly_interpolate::fixtures::{known_points, ARBITRARY_POINTS, KNOWN_COEFFICIENTS};
use poly_interpolate::{Interpolator, InterpolatorConfig, SolverKind};

fn command() -> Command {
    Command::new("poly_interpolate")
        .about("Finds the polynomial that passes through a set of points.")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("points")
                .long("points")
                .help("JSON array of [x, y] pairs to interpolate, e.g. '[[0, 0], [1, 2]]'")
                .value_name("JSON"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path of a TOML file with interpolator settings")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("solver")
                .long("solver")
                .help("Linear solver to use, overrides the config file")
                .value_parser(["lu", "inverse"]),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("Log filter: off, error, warn, info, debug, trace")
                .value_name("LEVEL")
                .default_value("warn"),
        )
}

fn load_config(matches: &ArgMatches) -> Result<InterpolatorConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => InterpolatorConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path))?,
        None => InterpolatorConfig::default(),
    };

    if let Some(solver) = matches.get_one::<String>("solver") {
        config.solver = solver.parse::<SolverKind>()?;
    }

    Ok(config)
}

fn run() -> Result<()> {
    let matches = command().get_matches();

    let level_name = matches
        .get_one::<String>("log-level")
        .ok_or(anyhow!("Failed to read log level"))?;
    let level = level_name
        .parse::<LevelFilter>()
        .map_err(|_| anyhow!("Invalid log level '{}'", level_name))?;
    env_logger::builder().filter_level(level).init();

    let config = load_config(&matches)?;
    let interpolator = Interpolator::new(config);
    log::info!("Using {} solver", interpolator.solver_name());

    if let Some(json) = matches.get_one::<String>("points") {
        let value: serde_json::Value =
            serde_json::from_str(json).context("Points must be valid JSON")?;
        println!("{:?}", interpolator.interpolate_json(&value)?);
        return Ok(());
    }

    println!("------Example 1------");
    println!("{:?}", KNOWN_COEFFICIENTS);
    println!("{:?}", interpolator.interpolate(&known_points())?);

    println!("------Example 2------");
    println!("{:?}", ARBITRARY_POINTS);
    println!("{:?}", interpolator.interpolate(&ARBITRARY_POINTS)?);

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
