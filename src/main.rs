use orbsim::{ScenarioConfig, Scenario};
use orbsim::{run_2d, run_headless};

use clap::Parser;
use anyhow::{Context, Result};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`; the built-in system when omitted
    #[arg(short, long)]
    file_name: Option<String>,

    /// Print body positions instead of opening a window
    #[arg(long)]
    headless: bool,

    /// Frames to run in headless mode
    #[arg(long, default_value_t = 10)]
    frames: u64,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    let Some(file_name) = &args.file_name else {
        return Ok(ScenarioConfig::builtin());
    };

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let scenario_cfg = load_scenario(&args)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    if args.headless {
        run_headless(scenario, args.frames.max(1));
    } else {
        run_2d(scenario);
    }

    Ok(())
}
