use std::path::PathBuf;

use clap::Parser;
use linear_lens::{
    display::{interpretation, metrics_report, DataTable, CONCEPTS},
    error::Result,
    Session, Settings,
};

/// Generate advertising-spend vs. sales data, fit a line to it, and explain the result.
#[derive(Parser, Debug)]
#[command(name = "linear_lens", version, about)]
struct Args {
    /// TOML file with settings. Flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of observations to generate (10-200)
    #[arg(long)]
    sample_size: Option<usize>,

    /// True slope of the generating line (0.5-5)
    #[arg(long)]
    slope: Option<f64>,

    /// True intercept, or base sales (0-10000)
    #[arg(long)]
    intercept: Option<f64>,

    /// Width of the noise band on sales (0-10000)
    #[arg(long)]
    noise: Option<f64>,

    /// Share of the data held out for testing (0.1-0.5)
    #[arg(long)]
    test_size: Option<f64>,

    /// Seed for reproducible data and splits
    #[arg(long)]
    seed: Option<u64>,

    /// Write the whole session (settings, data, model, metrics) to this JSON file
    #[arg(long)]
    json: Option<PathBuf>,

    /// Print an explanation of linear regression and its metrics before the results
    #[arg(long)]
    explain: bool,
}
impl Args {
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::from_toml_file(path)?,
            None => Settings::default(),
        };

        if let Some(v) = self.sample_size {
            settings.sample_size = v;
        }
        if let Some(v) = self.slope {
            settings.slope = v;
        }
        if let Some(v) = self.intercept {
            settings.intercept = v;
        }
        if let Some(v) = self.noise {
            settings.noise = v;
        }
        if let Some(v) = self.test_size {
            settings.test_size = v;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }

        settings.validate()?;
        Ok(settings)
    }
}

fn run(args: &Args) -> Result<()> {
    let settings = args.settings()?;
    log::debug!("settings: {settings:?}");

    let mut session = Session::new(settings)?;
    session.generate_data()?;
    let training = session.run_model()?;

    if args.explain {
        println!("{CONCEPTS}");
    }
    println!("{}", metrics_report(&training.model, &training.metrics));
    println!("Interpretation");
    for bullet in interpretation(&training.model, &training.metrics) {
        println!("  - {bullet}");
    }
    println!();
    println!("{}", DataTable::new("Training Data", &training.train));
    println!("{}", DataTable::new("Test Data", &training.test));

    if let Some(path) = &args.json {
        std::fs::write(path, session.snapshot().to_json()?)?;
        log::info!("Session written to {}", path.display());
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
