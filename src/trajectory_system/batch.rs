use rayon::prelude::*;

use crate::control::falling_object::FallingObject;
use crate::errors::SimulationError;

use super::integrator::{FallIntegrator, Trajectory};

/// Runs one independent drop per altitude in parallel, every drop released
/// at `initial_velocity`. Results keep the order of `drop_altitudes`; a bad
/// altitude fails only its own entry.
pub fn simulate_batch(
    integrator: &FallIntegrator,
    object: &FallingObject,
    drop_altitudes: &[f64],
    initial_velocity: f64,
) -> Vec<Result<Trajectory, SimulationError>> {
    drop_altitudes
        .par_iter()
        .map(|&altitude| integrator.simulate(object, altitude, initial_velocity))
        .collect()
}
