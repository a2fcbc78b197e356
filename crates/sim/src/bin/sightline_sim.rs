//! Replay a measurement through the triangulation engine.
//!
//! Usage:
//!   cargo run -p sightline_sim -- [OPTIONS]
//!
//! Options:
//!   --scenario <FILE>         Replay a JSON scenario
//!   --synthetic <DIST>        Generate sightings for an object at DIST
//!   --known-distance <DIST>   Known distance (default: 10.0)
//!   --decimals <N>            Display decimals (default: 1)
//!   --feet                    Label distances in feet
//!   --noise <DEG>             Synthetic heading noise stddev (default: 0.0)
//!   --seed <N>                Synthetic RNG seed
//!   --inverted                Synthetic device held upside down
//!   --rate-hz <HZ>            Replay pace, 0 = as fast as possible (default: 0)

use std::env;
use std::path::PathBuf;
use std::process;

use log::{error, info};
use sightline_core::parameters::{MeasureParams, ParamValue, ParameterStore};
use sightline_sim::{
    pacing_period, LocalDriver, MeasurementDriver, Scenario, ScriptedFeed, SightingGeometry, SimError,
    SyntheticConfig, SyntheticSighting,
};

enum Source {
    Scenario(PathBuf),
    Synthetic(f32),
}

struct Args {
    source: Option<Source>,
    known_distance: Option<f32>,
    decimals: Option<i32>,
    feet: bool,
    noise: f32,
    seed: Option<u64>,
    inverted: bool,
    rate_hz: f32,
}

fn parse_args() -> Result<Args, SimError> {
    let mut args = Args {
        source: None,
        known_distance: None,
        decimals: None,
        feet: false,
        noise: 0.0,
        seed: None,
        inverted: false,
        rate_hz: 0.0,
    };

    let raw: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < raw.len() {
        match raw[i].as_str() {
            "--scenario" => {
                i += 1;
                args.source = Some(Source::Scenario(PathBuf::from(value(&raw, i, "scenario")?)));
            }
            "--synthetic" => {
                i += 1;
                args.source = Some(Source::Synthetic(parse_value(&raw, i, "synthetic")?));
            }
            "--known-distance" => {
                i += 1;
                args.known_distance = Some(parse_value(&raw, i, "known-distance")?);
            }
            "--decimals" => {
                i += 1;
                args.decimals = Some(parse_value(&raw, i, "decimals")?);
            }
            "--feet" => args.feet = true,
            "--noise" => {
                i += 1;
                args.noise = parse_value(&raw, i, "noise")?;
            }
            "--seed" => {
                i += 1;
                args.seed = Some(parse_value(&raw, i, "seed")?);
            }
            "--inverted" => args.inverted = true,
            "--rate-hz" => {
                i += 1;
                args.rate_hz = parse_value(&raw, i, "rate-hz")?;
                pacing_period(args.rate_hz)?;
            }
            "-h" | "--help" => {
                print_usage();
                process::exit(0);
            }
            other => {
                return Err(SimError::InvalidArgument(format!("unknown option: {other}")));
            }
        }
        i += 1;
    }

    if args.source.is_none() {
        return Err(SimError::InvalidArgument(
            "one of --scenario or --synthetic is required".to_string(),
        ));
    }
    Ok(args)
}

fn value<'a>(raw: &'a [String], i: usize, name: &str) -> Result<&'a str, SimError> {
    raw.get(i)
        .map(String::as_str)
        .ok_or_else(|| SimError::InvalidArgument(format!("--{name} requires a value")))
}

fn parse_value<T: std::str::FromStr>(raw: &[String], i: usize, name: &str) -> Result<T, SimError> {
    value(raw, i, name)?
        .parse()
        .map_err(|_| SimError::InvalidArgument(format!("invalid value for --{name}")))
}

fn print_usage() {
    eprintln!(
        "Usage: sightline_sim [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --scenario <FILE>         Replay a JSON scenario\n\
         \x20 --synthetic <DIST>        Generate sightings for an object at DIST\n\
         \x20 --known-distance <DIST>   Known distance (default: 10.0)\n\
         \x20 --decimals <N>            Display decimals (default: 1)\n\
         \x20 --feet                    Label distances in feet\n\
         \x20 --noise <DEG>             Synthetic heading noise stddev (default: 0.0)\n\
         \x20 --seed <N>                Synthetic RNG seed\n\
         \x20 --inverted                Synthetic device held upside down\n\
         \x20 --rate-hz <HZ>            Replay pace, 0 = as fast as possible (default: 0)\n\
         \x20 -h, --help                Show this help"
    );
}

/// Build measurement parameters from the command line and scenario.
fn load_params(args: &Args, scenario_distance: Option<f32>) -> Result<MeasureParams, SimError> {
    let mut store = ParameterStore::new();
    MeasureParams::register_defaults(&mut store)?;

    if let Some(d) = args.known_distance.or(scenario_distance) {
        store.set("MEAS_KNOWN_DIST", ParamValue::Float(d))?;
    }
    if let Some(n) = args.decimals {
        store.set("MEAS_DECIMALS", ParamValue::Int(n))?;
    }
    if args.feet {
        store.set("MEAS_UNIT_FT", ParamValue::Bool(true))?;
    }

    Ok(MeasureParams::from_store(&store))
}

fn build_scenario(args: &Args) -> Result<Scenario, SimError> {
    match &args.source {
        Some(Source::Scenario(path)) => Scenario::load(path),
        Some(Source::Synthetic(object_distance)) => {
            let known = args.known_distance.unwrap_or(MeasureParams::default().known_distance);
            let geometry = SightingGeometry::perpendicular(known, *object_distance);
            let config = SyntheticConfig {
                heading_noise_deg: args.noise,
                seed: args.seed,
                inverted: args.inverted,
            };
            Ok(SyntheticSighting::new(geometry, config).scenario())
        }
        None => Err(SimError::InvalidArgument("no input source".to_string())),
    }
}

async fn run(args: Args) -> Result<(), SimError> {
    let scenario = build_scenario(&args)?;
    let params = load_params(&args, scenario.known_distance)?;
    if !params.is_valid() {
        return Err(SimError::InvalidArgument(format!("{params:?}")));
    }

    let mut driver: LocalDriver<ScriptedFeed> =
        MeasurementDriver::local(ScriptedFeed::new(&scenario), params);

    let mut pacer = pacing_period(args.rate_hz)?.map(tokio::time::interval);

    let mut steps = 0usize;
    loop {
        if let Some(pacer) = pacer.as_mut() {
            pacer.tick().await;
        }
        let Some(frame) = driver.step() else {
            break;
        };
        steps += 1;
        println!("{:>4}  {}", steps, driver.render(&frame));
    }

    info!("replayed {steps} steps");
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = run(args).await {
        error!("{e}");
        process::exit(1);
    }
}
