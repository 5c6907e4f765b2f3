use crate::control::{atmosphere::AirState, falling_object::FallingObject};

/// Latched flow-regime warnings. Once a flag is set it is never cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegimeFlags {
    pub mach_exceeded: bool,
    pub reynolds_exceeded: bool,
}

impl RegimeFlags {
    pub fn any(&self) -> bool {
        self.mach_exceeded || self.reynolds_exceeded
    }
}

/// Flow regime at one step, along with the flags that step newly raised.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlowConditions {
    pub mach: f64,
    pub reynolds: f64,
    pub raised: RegimeFlags,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aerodynamics {
    pub mach_limit: f64,
    pub reynolds_limit: f64,
}

impl Aerodynamics {
    pub fn new(mach_limit: f64, reynolds_limit: f64) -> Self {
        Aerodynamics {
            mach_limit,
            reynolds_limit,
        }
    }

    pub fn calculate_mach_number(velocity: f64, speed_of_sound: f64) -> f64 {
        velocity / speed_of_sound
    }

    pub fn calculate_reynolds(
        density: f64,
        velocity: f64,
        diameter_m: f64,
        viscosity: f64,
    ) -> f64 {
        density * velocity * diameter_m / viscosity
    }

    /// Lumped quadratic drag term k, so that drag force = k·v².
    pub fn calculate_drag_term(air: &AirState, object: &FallingObject) -> f64 {
        air.density * object.cross_section() * object.drag_coefficient() / 2.0
    }

    pub fn calculate_terminal_velocity(mass: f64, gravity: f64, drag_term: f64) -> f64 {
        (mass * gravity / drag_term).sqrt()
    }

    /// Latches the flags for the given flight condition and reports the Mach
    /// and Reynolds numbers together with the flags newly raised by this call.
    pub fn check_flight_conditions(
        &self,
        air: &AirState,
        velocity: f64,
        object: &FallingObject,
        flags: &mut RegimeFlags,
    ) -> FlowConditions {
        let mach = Self::calculate_mach_number(velocity, air.speed_of_sound);
        let reynolds = Self::calculate_reynolds(
            air.density,
            velocity,
            object.diameter_m(),
            air.dynamic_viscosity,
        );

        let raised = RegimeFlags {
            mach_exceeded: mach > self.mach_limit && !flags.mach_exceeded,
            reynolds_exceeded: reynolds > self.reynolds_limit && !flags.reynolds_exceeded,
        };
        flags.mach_exceeded |= raised.mach_exceeded;
        flags.reynolds_exceeded |= raised.reynolds_exceeded;

        FlowConditions {
            mach,
            reynolds,
            raised,
        }
    }
}

impl Default for Aerodynamics {
    fn default() -> Self {
        Aerodynamics::new(crate::constants::MACH_LIMIT, crate::constants::REYNOLDS_LIMIT)
    }
}
