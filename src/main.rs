use std::path::PathBuf;

use clap::Parser;
use free_fall_simulation::*;
use log::info;

/// Free fall of a sphere through the standard atmosphere
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Scenario file (TOML); flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Mass of the sphere [kg]
    #[arg(long)]
    mass: Option<f64>,

    /// Diameter of the sphere [mm]
    #[arg(long)]
    diameter: Option<f64>,

    /// Coefficient of drag [-]
    #[arg(long)]
    drag_coefficient: Option<f64>,

    /// Drop altitude above sea level [m]
    #[arg(long)]
    altitude: Option<f64>,

    /// Integration time step [s]
    #[arg(long)]
    time_step: Option<f64>,

    /// Downward velocity at release [m/s]
    #[arg(long)]
    initial_velocity: Option<f64>,

    /// Print the trajectory every N seconds of flight
    #[arg(long, value_name = "SECONDS")]
    table: Option<f64>,

    /// Run one drop per altitude instead of a single drop
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    sweep: Vec<f64>,

    /// Suppress warnings and the result report
    #[arg(long, short, default_value_t = false)]
    quiet: bool,
}

impl Cli {
    fn scenario(&self) -> Result<ScenarioConfig, ConfigError> {
        let mut scenario = match &self.config {
            Some(path) => ScenarioConfig::load(path)?,
            None => ScenarioConfig::default(),
        };

        if let Some(mass) = self.mass {
            scenario.object.mass = mass;
        }
        if let Some(diameter) = self.diameter {
            scenario.object.diameter = diameter;
        }
        if let Some(drag_coefficient) = self.drag_coefficient {
            scenario.object.drag_coefficient = drag_coefficient;
        }
        if let Some(altitude) = self.altitude {
            scenario.drop_altitude = altitude;
        }
        if let Some(time_step) = self.time_step {
            scenario.simulation.time_step = time_step;
        }
        if let Some(initial_velocity) = self.initial_velocity {
            scenario.initial_velocity = initial_velocity;
        }

        Ok(scenario)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let scenario = cli.scenario()?;
    let object = scenario.object.build()?;
    let integrator = FallIntegrator::new(scenario.simulation.clone())?;
    let limits = (scenario.simulation.mach_limit, scenario.simulation.reynolds_limit);

    if !cli.sweep.is_empty() {
        info!("sweeping {} drop altitudes", cli.sweep.len());
        for (altitude, result) in cli
            .sweep
            .iter()
            .zip(simulate_batch(
                &integrator,
                &object,
                &cli.sweep,
                scenario.initial_velocity,
            ))
        {
            let trajectory = result?;
            let warnings = Telemetry::from_trajectory(&object, &trajectory)
                .with_limits(limits.0, limits.1)
                .warnings();
            println!(
                "{:>10.1} m | falling time {:>9.3} s | impact velocity {:>9.3} m/s{}",
                altitude,
                trajectory.falling_time(),
                trajectory.impact_velocity(),
                if !cli.quiet && !warnings.is_empty() {
                    format!(" | {}", warnings.join(" "))
                } else {
                    String::new()
                }
            );
        }
        return Ok(());
    }

    let trajectory =
        integrator.simulate(&object, scenario.drop_altitude, scenario.initial_velocity)?;

    let mut telemetry =
        Telemetry::from_trajectory(&object, &trajectory).with_limits(limits.0, limits.1);
    if let Some(every) = cli.table {
        telemetry.sample_table(&trajectory, every)?;
    }
    if !cli.quiet {
        telemetry.display_data();
    }

    Ok(())
}
