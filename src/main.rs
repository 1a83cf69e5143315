use nbody::{Parameters, Scenario, ScenarioConfig, Universe, Viewport};
use nbody::{bench_step, decode, format_elapsed, run};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Headless n-body driver: read a universe, step it to T, print the result
#[derive(Parser, Debug)]
struct Args {
    /// Total simulated time in seconds
    t_end: Option<f64>,

    /// Step size in seconds
    dt: Option<f64>,

    /// Snapshot file to load instead of standard input
    #[arg(short, long, conflicts_with = "scenario")]
    input: Option<PathBuf>,

    /// YAML scenario to load instead of a snapshot
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Write the final snapshot here instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Time the step function for a range of body counts and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_universe(args: &Args) -> Result<(Universe, Option<Parameters>)> {
    if let Some(path) = &args.scenario {
        let cfg = ScenarioConfig::from_yaml_file(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        let scenario = Scenario::build_scenario(cfg)?;
        return Ok((scenario.universe, scenario.parameters));
    }

    let universe = match &args.input {
        Some(path) => Universe::load(path)
            .with_context(|| format!("failed to load snapshot {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            decode(&text).context("failed to decode snapshot from stdin")?
        }
    };
    Ok((universe, None))
}

fn resolve_parameters(args: &Args, defaults: Option<Parameters>) -> Result<Parameters> {
    let t_end = args
        .t_end
        .or(defaults.map(|p| p.t_end))
        .context("no total time given (usage: nbody T deltaT)")?;
    let dt = args
        .dt
        .or(defaults.map(|p| p.dt))
        .context("no step size given (usage: nbody T deltaT)")?;
    Ok(Parameters::new(t_end, dt)?)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    if args.bench {
        bench_step();
        return Ok(());
    }

    let (mut universe, defaults) = load_universe(&args)?;
    let params = resolve_parameters(&args, defaults)?;
    log::info!(
        "simulating {} bodies for {} in steps of {} s",
        universe.len(),
        format_elapsed(params.t_end),
        params.dt
    );

    let viewport = Viewport::default();
    let steps = run(&mut universe, &params, |u, elapsed| {
        log::debug!("NBody Simulation - Time: {}", format_elapsed(elapsed));
        if log::log_enabled!(log::Level::Trace) {
            for (i, (sx, sy)) in viewport.project(u).into_iter().enumerate() {
                log::trace!("body {i} at screen ({sx:.1}, {sy:.1})");
            }
        }
    })?;
    log::info!("finished after {} steps", steps);

    match &args.output {
        Some(path) => universe
            .save(path)
            .with_context(|| format!("failed to write snapshot {}", path.display()))?,
        None => print!("{}", universe),
    }

    Ok(())
}
