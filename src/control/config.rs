//! Simulation settings and scenario files.

use std::path::Path;

use serde::Deserialize;

use crate::constants::{
    DEFAULT_DIAMETER, DEFAULT_DRAG_COEFFICIENT, DEFAULT_DROP_ALTITUDE, DEFAULT_MASS, GRAVITY,
    MACH_LIMIT, MAX_STEPS, REYNOLDS_LIMIT, TIME_STEP,
};
use crate::control::falling_object::FallingObject;
use crate::errors::{require_positive, ConfigError, SimulationError};

/// Integrator settings. All physical constants enter the simulation through here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub time_step: f64, // s
    pub gravity: f64,   // m/s²
    pub mach_limit: f64,
    pub reynolds_limit: f64,
    pub max_steps: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            time_step: TIME_STEP,
            gravity: GRAVITY,
            mach_limit: MACH_LIMIT,
            reynolds_limit: REYNOLDS_LIMIT,
            max_steps: MAX_STEPS,
        }
    }
}

impl SimulationConfig {
    pub fn with_time_step(time_step: f64) -> Self {
        SimulationConfig {
            time_step,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        require_positive("time_step", self.time_step)?;
        require_positive("gravity", self.gravity)?;
        require_positive("mach_limit", self.mach_limit)?;
        require_positive("reynolds_limit", self.reynolds_limit)?;
        if self.max_steps == 0 {
            return Err(SimulationError::InvalidParameter {
                name: "max_steps",
                value: 0.0,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ObjectConfig {
    pub mass: f64,     // kg
    pub diameter: f64, // mm
    pub drag_coefficient: f64,
}

impl Default for ObjectConfig {
    fn default() -> Self {
        ObjectConfig {
            mass: DEFAULT_MASS,
            diameter: DEFAULT_DIAMETER,
            drag_coefficient: DEFAULT_DRAG_COEFFICIENT,
        }
    }
}

impl ObjectConfig {
    pub fn build(&self) -> Result<FallingObject, SimulationError> {
        FallingObject::new(self.mass, self.diameter, self.drag_coefficient)
    }
}

/// A complete drop scenario as read from a TOML file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    pub drop_altitude: f64,    // m
    pub initial_velocity: f64, // m/s
    pub object: ObjectConfig,
    pub simulation: SimulationConfig,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        ScenarioConfig {
            drop_altitude: DEFAULT_DROP_ALTITUDE,
            initial_velocity: 0.0,
            object: ObjectConfig::default(),
            simulation: SimulationConfig::default(),
        }
    }
}

impl ScenarioConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}
