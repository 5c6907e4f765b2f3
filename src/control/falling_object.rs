use std::f64::consts::PI;

use crate::errors::{require_positive, SimulationError};

/// A sphere to be dropped. Validated on construction, immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FallingObject {
    mass: f64,             // kg
    diameter: f64,         // mm
    drag_coefficient: f64, // dimensionless
    cross_section: f64,    // m²
}

impl FallingObject {
    pub fn new(mass: f64, diameter: f64, drag_coefficient: f64) -> Result<Self, SimulationError> {
        let mass = require_positive("mass", mass)?;
        let diameter = require_positive("diameter", diameter)?;
        let drag_coefficient = require_positive("drag_coefficient", drag_coefficient)?;

        Ok(FallingObject {
            mass,
            diameter,
            drag_coefficient,
            cross_section: Self::calculate_sphere_cross_section(diameter),
        })
    }

    /// Frontal area in m² of a sphere whose diameter is given in millimeters.
    pub fn calculate_sphere_cross_section(diameter: f64) -> f64 {
        let diameter_m = diameter * 1e-3;
        PI * diameter_m.powi(2) / 4.0
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn diameter_m(&self) -> f64 {
        self.diameter * 1e-3
    }

    pub fn drag_coefficient(&self) -> f64 {
        self.drag_coefficient
    }

    pub fn cross_section(&self) -> f64 {
        self.cross_section
    }
}
