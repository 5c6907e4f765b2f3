use log::{debug, trace, warn};

use crate::control::{
    atmosphere::Atmosphere, config::SimulationConfig, falling_object::FallingObject,
};
use crate::errors::{require_non_negative, require_positive, SimulationError};

use super::aerodynamics::{Aerodynamics, RegimeFlags};
use super::kinematics::Kinematics;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySample {
    pub time: f64,     // s
    pub altitude: f64, // m
    pub velocity: f64, // m/s, positive downwards
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegratorState {
    Running,
    Terminated,
}

/// Full history of one drop. The three series always have the same length
/// and index 0 is the release state.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub time: Vec<f64>,
    pub altitude: Vec<f64>,
    pub velocity: Vec<f64>,
    pub drop_altitude: f64,
    pub flags: RegimeFlags,
    /// Highest Mach and Reynolds numbers seen by the regime checks.
    pub peak_mach: f64,
    pub peak_reynolds: f64,
}

impl Trajectory {
    fn new(drop_altitude: f64) -> Self {
        Trajectory {
            time: Vec::new(),
            altitude: Vec::new(),
            velocity: Vec::new(),
            drop_altitude,
            flags: RegimeFlags::default(),
            peak_mach: 0.0,
            peak_reynolds: 0.0,
        }
    }

    fn push(&mut self, sample: TrajectorySample) {
        self.time.push(sample.time);
        self.altitude.push(sample.altitude);
        self.velocity.push(sample.velocity);
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn samples(&self) -> impl Iterator<Item = TrajectorySample> + '_ {
        self.time
            .iter()
            .zip(&self.altitude)
            .zip(&self.velocity)
            .map(|((&time, &altitude), &velocity)| TrajectorySample {
                time,
                altitude,
                velocity,
            })
    }

    pub fn last(&self) -> Option<TrajectorySample> {
        Some(TrajectorySample {
            time: *self.time.last()?,
            altitude: *self.altitude.last()?,
            velocity: *self.velocity.last()?,
        })
    }

    pub fn falling_time(&self) -> f64 {
        self.time.last().copied().unwrap_or(0.0)
    }

    pub fn impact_velocity(&self) -> f64 {
        self.velocity.last().copied().unwrap_or(0.0)
    }

    pub fn max_velocity(&self) -> f64 {
        self.velocity.iter().copied().fold(0.0, f64::max)
    }

    /// Distance travelled since release, per sample.
    pub fn distance_fallen(&self) -> Vec<f64> {
        self.altitude
            .iter()
            .map(|altitude| self.drop_altitude - altitude)
            .collect()
    }
}

/// Lazily advances a drop one time step per item. Yields the release state
/// first and stops after the first sample at or below ground level.
///
/// Iteration also stops, still `Running`, once `max_steps` steps have been
/// taken without reaching the ground; `limit_reached` reports that case.
#[derive(Debug, Clone)]
pub struct FallSteps<'a> {
    object: &'a FallingObject,
    aerodynamics: Aerodynamics,
    kinematics: Kinematics,
    time_step: f64,
    max_steps: usize,
    current: TrajectorySample,
    flags: RegimeFlags,
    peak_mach: f64,
    peak_reynolds: f64,
    state: IntegratorState,
    release_pending: bool,
    limit_reached: bool,
    step_count: usize,
}

impl FallSteps<'_> {
    pub fn flags(&self) -> RegimeFlags {
        self.flags
    }

    pub fn state(&self) -> IntegratorState {
        self.state
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn peak_mach(&self) -> f64 {
        self.peak_mach
    }

    pub fn peak_reynolds(&self) -> f64 {
        self.peak_reynolds
    }

    pub fn limit_reached(&self) -> bool {
        self.limit_reached
    }

    fn advance(&mut self) -> TrajectorySample {
        let previous = self.current;
        let air = Atmosphere::query(previous.altitude);

        let conditions = self.aerodynamics.check_flight_conditions(
            &air,
            previous.velocity,
            self.object,
            &mut self.flags,
        );
        self.peak_mach = self.peak_mach.max(conditions.mach);
        self.peak_reynolds = self.peak_reynolds.max(conditions.reynolds);

        let raised = conditions.raised;
        if raised.mach_exceeded {
            warn!(
                "Mach number above {} at {:.1} m, compression effects may occur",
                self.aerodynamics.mach_limit, previous.altitude
            );
        }
        if raised.reynolds_exceeded {
            warn!(
                "Reynolds number above {} at {:.1} m",
                self.aerodynamics.reynolds_limit, previous.altitude
            );
        }

        let drag_term = Aerodynamics::calculate_drag_term(&air, self.object);
        let terminal_velocity = Aerodynamics::calculate_terminal_velocity(
            self.object.mass(),
            self.kinematics.gravity,
            drag_term,
        );

        let time = previous.time + self.time_step;
        let velocity = self.kinematics.calculate_velocity(terminal_velocity, time);
        let step_distance =
            Kinematics::calculate_step_distance(previous.velocity, velocity, self.time_step);

        self.current = TrajectorySample {
            time,
            altitude: previous.altitude - step_distance,
            velocity,
        };
        self.step_count += 1;

        trace!(
            "t={:.3}s alt={:.3}m v={:.3}m/s v_t={:.3}m/s",
            self.current.time,
            self.current.altitude,
            self.current.velocity,
            terminal_velocity
        );

        self.current
    }
}

impl Iterator for FallSteps<'_> {
    type Item = TrajectorySample;

    fn next(&mut self) -> Option<Self::Item> {
        if self.release_pending {
            self.release_pending = false;
            return Some(self.current);
        }

        match self.state {
            IntegratorState::Terminated => None,
            IntegratorState::Running if self.step_count >= self.max_steps => {
                if !self.limit_reached {
                    self.limit_reached = true;
                    warn!(
                        "no ground impact after {} steps, stopped at {:.1} m",
                        self.step_count, self.current.altitude
                    );
                }
                None
            }
            IntegratorState::Running => {
                let sample = self.advance();
                if sample.altitude <= 0.0 {
                    self.state = IntegratorState::Terminated;
                    debug!(
                        "ground impact after {} steps: t={:.3}s v={:.3}m/s",
                        self.step_count, sample.time, sample.velocity
                    );
                }
                Some(sample)
            }
        }
    }
}

/// Fixed-step drop integrator. Holds only validated settings, so one
/// instance can run any number of independent drops.
#[derive(Debug, Clone)]
pub struct FallIntegrator {
    config: SimulationConfig,
}

impl FallIntegrator {
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        Ok(FallIntegrator { config })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn steps<'a>(
        &self,
        object: &'a FallingObject,
        drop_altitude: f64,
        initial_velocity: f64,
    ) -> Result<FallSteps<'a>, SimulationError> {
        let drop_altitude = require_positive("drop_altitude", drop_altitude)?;
        let initial_velocity = require_non_negative("initial_velocity", initial_velocity)?;

        if !Atmosphere::is_within_model_range(drop_altitude) {
            warn!(
                "drop altitude {:.1} m is outside the atmosphere model range, results are extrapolated",
                drop_altitude
            );
        }
        debug!(
            "dropping {:?} from {:.1} m with dt={}s",
            object, drop_altitude, self.config.time_step
        );

        // m·g overflow does not depend on altitude and density only vanishes
        // at the top of the drop, so the release state covers every step.
        let air = Atmosphere::query(drop_altitude);
        let terminal_velocity = Aerodynamics::calculate_terminal_velocity(
            object.mass(),
            self.config.gravity,
            Aerodynamics::calculate_drag_term(&air, object),
        );
        if !terminal_velocity.is_finite() {
            return Err(if air.density > 0.0 {
                SimulationError::InvalidParameter {
                    name: "mass",
                    value: object.mass(),
                }
            } else {
                SimulationError::InvalidParameter {
                    name: "drop_altitude",
                    value: drop_altitude,
                }
            });
        }

        Ok(FallSteps {
            object,
            aerodynamics: Aerodynamics::new(self.config.mach_limit, self.config.reynolds_limit),
            kinematics: Kinematics::new(self.config.gravity, initial_velocity),
            time_step: self.config.time_step,
            max_steps: self.config.max_steps,
            current: TrajectorySample {
                time: 0.0,
                altitude: drop_altitude,
                velocity: initial_velocity,
            },
            flags: RegimeFlags::default(),
            peak_mach: 0.0,
            peak_reynolds: 0.0,
            state: IntegratorState::Running,
            release_pending: true,
            limit_reached: false,
            step_count: 0,
        })
    }

    pub fn simulate(
        &self,
        object: &FallingObject,
        drop_altitude: f64,
        initial_velocity: f64,
    ) -> Result<Trajectory, SimulationError> {
        let mut steps = self.steps(object, drop_altitude, initial_velocity)?;
        let mut trajectory = Trajectory::new(drop_altitude);

        for sample in steps.by_ref() {
            trajectory.push(sample);
        }
        if steps.limit_reached() {
            return Err(SimulationError::StepLimitExceeded(self.config.max_steps));
        }
        trajectory.flags = steps.flags();
        trajectory.peak_mach = steps.peak_mach();
        trajectory.peak_reynolds = steps.peak_reynolds();

        Ok(trajectory)
    }
}

/// Drops `object` from rest with default settings and the given time step.
pub fn simulate(
    object: &FallingObject,
    drop_altitude: f64,
    time_step: f64,
) -> Result<Trajectory, SimulationError> {
    FallIntegrator::new(SimulationConfig::with_time_step(time_step))?.simulate(
        object,
        drop_altitude,
        0.0,
    )
}
