use vacuum_rust::config::{Cli, Config};
use vacuum_rust::planner::{DepthFirst, Planner, UniformCost};
use vacuum_rust::scenario;
use vacuum_rust::stat::Stats;
use vacuum_rust::world::World;

use anyhow::{anyhow, Context};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::{info, Level};
use tracing_subscriber;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the plan and the counters.
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let config = if let Some(config_file) = cli.config.as_ref() {
        let config_str = std::fs::read_to_string(config_file)?;
        Config::from_yaml_str(&config_str)
            .with_context(|| format!("error with config file: {config_file}"))?
    } else {
        info!("No config file specified, using default config");
        Config::default()
    }
    .override_from_command_line(&cli)?;

    let mut world = World::from_file(&config.world_path)?;
    if let Some(num_dirt) = config.random_dirt {
        let mut rng = StdRng::seed_from_u64(config.seed as u64);
        world = scenario::scatter_dirt(&world, num_dirt, &mut rng).map_err(|err| anyhow!(err))?;
        if config.debug_yaml {
            scenario::write_dirt_to_yaml("debug.yaml", world.dirt())?;
        }
    }
    assert!(world.verify());

    let mut planner: Box<dyn Planner> = match config.strategy.as_str() {
        "uniform-cost" => Box::new(UniformCost::new(&world)),
        "depth-first" => Box::new(DepthFirst::new(&world)),
        _ => unreachable!(),
    };

    let plan = planner.solve();
    match &plan {
        Some(plan) => {
            assert!(plan.verify(&world));
            for action in &plan.actions {
                println!("{action}");
            }
        }
        None => println!("No solution found."),
    }
    let stats = planner.stats();
    println!("{} nodes generated", stats.nodes_generated);
    println!("{} nodes expanded", stats.nodes_expanded);

    if let Some(output_path) = config.output_path.as_ref() {
        write_run_record(output_path, &config, plan.as_ref().map(|plan| plan.len()), stats)?;
    }

    Ok(())
}

fn write_run_record(
    path: &str,
    config: &Config,
    plan_length: Option<usize>,
    stats: &Stats,
) -> anyhow::Result<()> {
    let record = serde_json::json!({
        "config": config,
        "solved": plan_length.is_some(),
        "plan_length": plan_length,
        "stats": stats,
    });
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open run record file {path}"))?;
    writeln!(file, "{record}")?;
    Ok(())
}
