//! Generator entry point — CLI wiring and sequential scenario runs.

use std::path::Path;
use std::process;

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use gas_sim::config::GeneratorConfig;
use gas_sim::io::export::export_csv;
use gas_sim::io::temps::TemperatureSeries;
use gas_sim::scenario::{self, Scenario};
use gas_sim::sim::engine::Engine;
use gas_sim::sim::kpi::UsageSummary;

/// Parsed CLI arguments.
struct CliArgs {
    config_path: Option<String>,
    scenarios_path: Option<String>,
    seed_override: Option<u64>,
}

fn print_help() {
    eprintln!("gas-sim — Household natural-gas usage synthesizer");
    eprintln!();
    eprintln!("Usage: gas-sim [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>       Load generator settings from a TOML file");
    eprintln!("  --scenarios <path>    Scenario table CSV (default: scenarios.csv)");
    eprintln!("  --seed <u64>          Override the global seed");
    eprintln!("  --help                Show this help message");
    eprintln!();
    eprintln!("Each scenario row names its own temperature input and output CSV.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        config_path: None,
        scenarios_path: None,
        seed_override: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --config requires a path argument");
                    process::exit(1);
                }
                cli.config_path = Some(args[i].clone());
            }
            "--scenarios" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --scenarios requires a path argument");
                    process::exit(1);
                }
                cli.scenarios_path = Some(args[i].clone());
            }
            "--seed" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --seed requires a u64 argument");
                    process::exit(1);
                }
                if let Ok(s) = args[i].parse::<u64>() {
                    cli.seed_override = Some(s);
                } else {
                    eprintln!("error: --seed value \"{}\" is not a valid u64", args[i]);
                    process::exit(1);
                }
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Runs one scenario end to end: temperature load, synthesis, CSV export.
fn run_scenario(sc: &Scenario, global_seed: u64) -> anyhow::Result<()> {
    let temps = TemperatureSeries::from_path(&sc.temps_csv)
        .with_context(|| format!("loading temperatures for \"{}\"", sc.id))?;
    info!(
        scenario = %sc.id,
        hours = sc.total_hours(),
        temps = temps.len(),
        "synthesizing"
    );

    let records = Engine::new(sc, &temps, global_seed).run();
    export_csv(&records, &sc.out_csv)
        .with_context(|| format!("writing \"{}\"", sc.out_csv.display()))?;

    let summary = UsageSummary::from_records(&records);
    info!(scenario = %sc.id, out = %sc.out_csv.display(), %summary, "scenario complete");
    Ok(())
}

fn run(cli: CliArgs) -> anyhow::Result<()> {
    // Load config: --config file if given, built-in defaults otherwise.
    let mut config = match cli.config_path {
        Some(ref path) => GeneratorConfig::from_toml_file(Path::new(path))?,
        None => GeneratorConfig::default(),
    };

    // Apply CLI overrides.
    if let Some(path) = cli.scenarios_path {
        config.generator.scenarios_csv = path;
    }
    if let Some(seed) = cli.seed_override {
        config.generator.seed = seed;
    }

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            error!("{e}");
        }
        anyhow::bail!("invalid configuration");
    }

    let scenarios = scenario::load_scenarios(Path::new(&config.generator.scenarios_csv))?;
    info!(
        scenarios = scenarios.len(),
        seed = config.generator.seed,
        table = %config.generator.scenarios_csv,
        "scenario table loaded"
    );

    // Scenarios run strictly one at a time; a failed scenario is abandoned
    // and the remaining ones still run.
    let mut failed = 0_usize;
    for sc in &scenarios {
        if let Err(e) = run_scenario(sc, config.generator.seed) {
            failed += 1;
            error!(scenario = %sc.id, "scenario abandoned: {e:#}");
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} scenarios failed", scenarios.len());
    }
    Ok(())
}

fn main() {
    init_tracing();
    let cli = parse_args();
    if let Err(e) = run(cli) {
        error!("{e:#}");
        process::exit(1);
    }
}
