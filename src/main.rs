use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use polar_orbit_sim::config::Scenario;
use polar_orbit_sim::mission::MissionType;
use polar_orbit_sim::report::Report;
use polar_orbit_sim::simulation::Simulation;
use polar_orbit_sim::sites::GroundSite;

#[derive(Parser)]
#[command(name = "polar-orbit-sim")]
#[command(about = "Constellation ground coverage simulator")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a scenario file
    Validate { scenario: PathBuf },
    /// Run a scenario and emit tracks and metrics
    Simulate {
        scenario: PathBuf,
        #[command(flatten)]
        overrides: Overrides,
        /// Write the JSON report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print a text summary instead of JSON
        #[arg(long)]
        summary: bool,
    },
    /// List mission types and their sensor geometry
    Missions,
}

#[derive(clap::Args)]
struct Overrides {
    #[arg(long, value_enum)]
    mission: Option<MissionType>,
    #[arg(long)]
    altitude_km: Option<f64>,
    #[arg(long)]
    inclination_deg: Option<f64>,
    #[arg(long)]
    satellites: Option<u32>,
    /// e.g. "6h", "90m"
    #[arg(long)]
    duration: Option<String>,
    /// Extra ground site, repeatable
    #[arg(long = "site", value_name = "NAME=LAT,LON")]
    sites: Vec<String>,
}

impl Overrides {
    fn apply(self, scenario: &mut Scenario) -> Result<(), String> {
        if let Some(mission) = self.mission {
            scenario.mission = mission;
        }
        if let Some(altitude_km) = self.altitude_km {
            scenario.altitude_km = Some(altitude_km);
        }
        if let Some(inclination_deg) = self.inclination_deg {
            scenario.inclination_deg = inclination_deg;
        }
        if let Some(satellites) = self.satellites {
            scenario.num_satellites = satellites;
        }
        if let Some(duration) = self.duration {
            scenario.duration = duration;
        }
        for spec in self.sites {
            let site = spec
                .split_once('=')
                .and_then(|(name, coordinates)| {
                    GroundSite::from_coordinates(name.trim(), coordinates)
                })
                .ok_or_else(|| format!("invalid --site '{}', expected NAME=LAT,LON", spec))?;
            scenario.sites.push(site);
        }
        Ok(())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Validate { scenario } => validate(&scenario),
        Commands::Simulate {
            scenario,
            overrides,
            output,
            summary,
        } => simulate(&scenario, overrides, output.as_deref(), summary),
        Commands::Missions => missions(),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn validate(path: &Path) -> ExitCode {
    let scenario = match Scenario::from_file(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading scenario: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let config = match scenario.simulation_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Invalid scenario: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match scenario.site_table() {
        Ok(sites) => {
            println!(
                "Scenario is valid: {} x {} satellites at {} km, {} samples, {} sites",
                scenario.mission,
                config.num_satellites,
                config.altitude_km,
                config.sample_count(),
                sites.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Invalid ground sites: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn simulate(path: &Path, overrides: Overrides, output: Option<&Path>, summary: bool) -> ExitCode {
    let mut scenario = match Scenario::from_file(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading scenario: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = overrides.apply(&mut scenario) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    let simulation = match Simulation::from_scenario(&scenario) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let outcome = match simulation.run() {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Simulation failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let report = Report::new(&outcome, &simulation.sites);
    let rendered = if summary {
        report.summary()
    } else {
        match report.to_json() {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Error serializing report: {}", e);
                return ExitCode::FAILURE;
            }
        }
    };

    match output {
        Some(path) => {
            if let Err(e) = fs::write(path, rendered) {
                eprintln!("Error writing {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
            log::info!("Report written to {}", path.display());
        }
        None => println!("{}", rendered),
    }
    ExitCode::SUCCESS
}

fn missions() -> ExitCode {
    for mission in MissionType::ALL {
        let (min, max) = mission.altitude_range_km();
        println!(
            "{:<24} half-angle {:>4}°  altitude {}-{} km (default {} km)",
            mission.to_string(),
            mission.footprint_half_angle_deg(),
            min,
            max,
            mission.default_altitude_km()
        );
    }
    ExitCode::SUCCESS
}
