//! attack-sim - Command-line attack roll simulator
//!
//! Runs one Monte Carlo sample of an attack and prints hit/crit chances,
//! damage statistics and the damage distribution.

mod report;

use anyhow::{Context, Result};
use attack_core::ScenarioConfig;
use clap::Parser;
use report::Report;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Attack roll simulator
#[derive(Parser, Debug)]
#[command(
    name = "attack-sim",
    version,
    about = "Simulate tabletop attack rolls against a target AC"
)]
struct Args {
    /// TOML scenario file (flags override its values)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Damage roll notation, e.g. "2d8+4"
    #[arg(short, long)]
    damage: Option<String>,

    /// Attack modifier added to the d20
    #[arg(short, long, allow_negative_numbers = true)]
    modifier: Option<i64>,

    /// Target armour class
    #[arg(long, allow_negative_numbers = true)]
    ac: Option<i64>,

    /// Number of attacks to simulate
    #[arg(short = 'n', long)]
    samples: Option<usize>,

    /// Seed for a reproducible sample
    #[arg(long)]
    seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Width of histogram bars
    #[arg(long, default_value_t = 40)]
    width: usize,
}

impl Args {
    /// Start from the scenario file (or defaults) and apply flag overrides
    fn scenario(&self) -> Result<ScenarioConfig> {
        let mut scenario = match &self.config {
            Some(path) => ScenarioConfig::load_from_path(path)
                .with_context(|| format!("Failed to load scenario {}", path.display()))?,
            None => ScenarioConfig::default(),
        };

        if let Some(damage) = &self.damage {
            scenario.damage = damage.clone();
        }
        if let Some(modifier) = self.modifier {
            scenario.attack_modifier = modifier;
        }
        if let Some(ac) = self.ac {
            scenario.target.ac = ac;
        }
        if let Some(samples) = self.samples {
            scenario.sample_size = samples;
        }
        if self.seed.is_some() {
            scenario.seed = self.seed;
        }

        scenario.validate().context("Invalid scenario")?;
        Ok(scenario)
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so the report can be piped
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "attack_sim=info,attack_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let scenario = args.scenario()?;
    let attack = scenario.build_attack()?;

    info!(
        damage = %attack.damage,
        modifier = attack.modifier,
        ac = attack.target.ac,
        samples = scenario.sample_size,
        "Running simulation"
    );

    let sample = match scenario.seed {
        Some(seed) => attack.sample_seeded(scenario.sample_size, seed)?,
        None => attack.sample(scenario.sample_size)?,
    };

    let report = Report::new(&attack, &sample);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render(args.width));
    }

    Ok(())
}
