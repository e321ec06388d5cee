use anyhow::{anyhow, Context};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(
    name = "Vacuum Rust",
    about = "Grid vacuum robot planner implemented in Rust.",
    version = "1.0"
)]
pub struct Cli {
    #[arg(long, help = "Path to the YAML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Path to the world file")]
    pub world_path: Option<String>,

    #[arg(long, help = "Search strategy, uniform-cost or depth-first")]
    pub strategy: Option<String>,

    #[arg(long, help = "Path to the run record file")]
    pub output_path: Option<String>,

    #[arg(long, help = "Replace the world dirt with this many random cells")]
    pub random_dirt: Option<usize>,

    #[arg(long, help = "Seed for the random number generator")]
    pub seed: Option<usize>,

    #[arg(
        long,
        help = "Write the scattered dirt cells to debug.yaml",
        default_value_t = false
    )]
    pub debug_yaml: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub world_path: String,
    pub strategy: String,
    pub output_path: Option<String>,
    pub random_dirt: Option<usize>,
    pub seed: usize,
    pub debug_yaml: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            world_path: "worlds/lobby-7x5.vw".to_string(),
            strategy: "uniform-cost".to_string(),
            output_path: None,
            random_dirt: None,
            seed: 0,
            debug_yaml: false,
        }
    }
}

impl Config {
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Config> {
        let config: Config = serde_yaml::from_str(yaml).context("failed to parse YAML config")?;
        Ok(config)
    }

    pub fn override_from_command_line(mut self, cli: &Cli) -> anyhow::Result<Config> {
        if let Some(world_path) = cli.world_path.as_ref() {
            self.world_path = world_path.clone();
        }
        if let Some(strategy) = cli.strategy.as_ref() {
            self.strategy = strategy.clone();
        }
        if let Some(output_path) = cli.output_path.as_ref() {
            self.output_path = Some(output_path.clone());
        }
        if let Some(random_dirt) = cli.random_dirt {
            self.random_dirt = Some(random_dirt);
        }
        if let Some(seed) = cli.seed {
            self.seed = seed;
        }
        if cli.debug_yaml {
            self.debug_yaml = true;
        }

        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        match self.strategy.as_str() {
            "uniform-cost" | "depth-first" => Ok(()),
            other => Err(anyhow!(
                "unrecognized strategy {other:?}, expected \"uniform-cost\" or \"depth-first\""
            )),
        }
    }
}
