pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;

pub use constants::*;
pub use control::atmosphere::{AirState, Atmosphere, AtmosphericLayer};
pub use control::config::{ObjectConfig, ScenarioConfig, SimulationConfig};
pub use control::falling_object::FallingObject;
pub use errors::{ConfigError, SimulationError};

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::{Aerodynamics, FlowConditions, RegimeFlags};
pub use trajectory_system::batch::simulate_batch;
pub use trajectory_system::integrator::{
    simulate, FallIntegrator, FallSteps, IntegratorState, Trajectory, TrajectorySample,
};
pub use trajectory_system::kinematics::Kinematics;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::Telemetry;
