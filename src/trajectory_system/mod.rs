pub mod aerodynamics;
pub mod batch;
pub mod integrator;
pub mod kinematics;
