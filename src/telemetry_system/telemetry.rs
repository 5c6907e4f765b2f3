use crate::control::falling_object::FallingObject;
use crate::errors::{require_positive, SimulationError};
use crate::trajectory_system::aerodynamics::RegimeFlags;
use crate::trajectory_system::integrator::{Trajectory, TrajectorySample};

pub struct Telemetry {
    pub log: Vec<String>,
    cross_section: f64,
    falling_time: f64,
    impact_velocity: f64,
    max_velocity: f64,
    peak_mach: f64,
    peak_reynolds: f64,
    steps: usize,
    flags: RegimeFlags,
    mach_limit: f64,
    reynolds_limit: f64,
}

impl Telemetry {
    pub fn from_trajectory(object: &FallingObject, trajectory: &Trajectory) -> Self {
        Telemetry {
            log: Vec::new(),
            cross_section: object.cross_section(),
            falling_time: trajectory.falling_time(),
            impact_velocity: trajectory.impact_velocity(),
            max_velocity: trajectory.max_velocity(),
            peak_mach: trajectory.peak_mach,
            peak_reynolds: trajectory.peak_reynolds,
            steps: trajectory.len().saturating_sub(1),
            flags: trajectory.flags,
            mach_limit: crate::constants::MACH_LIMIT,
            reynolds_limit: crate::constants::REYNOLDS_LIMIT,
        }
    }

    /// Use the limits the run was configured with in the warning text.
    pub fn with_limits(mut self, mach_limit: f64, reynolds_limit: f64) -> Self {
        self.mach_limit = mach_limit;
        self.reynolds_limit = reynolds_limit;
        self
    }

    pub fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    pub fn format_altitude(altitude: f64) -> String {
        if altitude.abs() >= 1000.0 {
            format!("{:.2} km", altitude / 1000.0)
        } else {
            format!("{:.2} m", altitude)
        }
    }

    fn format_sample(sample: &TrajectorySample) -> String {
        format!(
            "Time: {:>10} | Altitude: {:>10} | Velocity: {:.2} m/s",
            Self::format_time(sample.time),
            Self::format_altitude(sample.altitude),
            sample.velocity
        )
    }

    /// Logs one line per `every_seconds` of flight, plus the impact sample.
    /// Intervals shorter than the time step log every sample.
    pub fn sample_table(
        &mut self,
        trajectory: &Trajectory,
        every_seconds: f64,
    ) -> Result<(), SimulationError> {
        let every = require_positive("table_interval", every_seconds)?;
        let mut next_time = 0.0;
        let last_index = trajectory.len().saturating_sub(1);

        for (index, sample) in trajectory.samples().enumerate() {
            // Small slack so accumulated time drift does not skip a row.
            let time = sample.time + 1e-9;
            if time >= next_time || index == last_index {
                self.log.push(Self::format_sample(&sample));
                next_time = (time / every).floor() * every + every;
            }
        }

        Ok(())
    }

    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.flags.mach_exceeded {
            warnings.push(format!(
                "WARNING: Mach number above {}! Compression effects may occur.",
                self.mach_limit
            ));
        }
        if self.flags.reynolds_exceeded {
            warnings.push(format!(
                "WARNING: Reynolds number above {}!",
                self.reynolds_limit
            ));
        }
        warnings
    }

    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = self.warnings();
        lines.push(format!(
            "Sphere cross sectional area is: {:.6e} m2",
            self.cross_section
        ));
        lines.push("RESULTS:".to_string());
        lines.push(format!("Falling time is: {:.3} s", self.falling_time));
        lines.push(format!("Impact velocity is {:.3} m/s", self.impact_velocity));
        lines.push(format!("Max velocity is {:.3} m/s", self.max_velocity));
        lines.push(format!("Max Mach number is {:.3}", self.peak_mach));
        lines.push(format!("Max Reynolds number is {:.0}", self.peak_reynolds));
        lines.push(format!("Integration steps: {}", self.steps));
        lines
    }

    pub fn display_data(&self) {
        if !self.log.is_empty() {
            println!("--- Trajectory ---");
            for entry in &self.log {
                println!("{}", entry);
            }
            println!("--- End of Trajectory ---\n");
        }

        for line in self.summary_lines() {
            println!("{}", line);
        }
    }
}
