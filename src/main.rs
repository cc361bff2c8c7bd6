use std::process::ExitCode;

use clap::Parser;

use groundstation::{run_groundstation, StationConfig};

#[derive(Parser)]
#[command(name = "groundstation")]
#[command(about = "XBee rocket ground-station console (simulated telemetry)")]
struct Cli {
    /// Seed for the simulated telemetry, for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,
    /// Simulation tick period in milliseconds
    #[arg(long, default_value_t = 100)]
    tick_ms: u64,
    /// Degrees the rocket rotates per tick
    #[arg(long, default_value_t = 2.0)]
    rotation_step: f64,
    /// Show the pressure chart on startup
    #[arg(long)]
    pressure_chart: bool,
    /// Window title
    #[arg(long)]
    title: Option<String>,
    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

impl Cli {
    fn into_config(self) -> StationConfig {
        let mut cfg = StationConfig {
            seed: self.seed,
            tick_period_ms: self.tick_ms,
            rotation_step_deg: self.rotation_step,
            ..Default::default()
        };
        cfg.features.pressure_chart = self.pressure_chart;
        if let Some(title) = self.title {
            cfg.title = title;
        }
        cfg
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let dump = cli.dump_config;
    let cfg = cli.into_config();

    if dump {
        return match serde_json::to_string_pretty(&cfg) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("failed to serialize configuration: {e}");
                ExitCode::FAILURE
            }
        };
    }

    match run_groundstation(cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
