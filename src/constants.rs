// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²
pub const HEAT_CAPACITY_RATIO: f64 = 1.4; // air, dimensionless

// Atmosphere Model Constants
pub const TROPOPAUSE_ALTITUDE: f64 = 11_000.0; // m
pub const MODEL_CEILING_ALTITUDE: f64 = 25_000.0; // m
pub const KELVIN_OFFSET: f64 = 273.1; // K, offset used by the fitted ISA curves
pub const AIR_GAS_CONSTANT: f64 = 0.2869; // kJ/(kg·K)
pub const SEA_LEVEL_TEMPERATURE_C: f64 = 15.04; // °C
pub const TROPOSPHERE_LAPSE_RATE: f64 = 0.00649; // °C per meter
pub const TROPOSPHERE_PRESSURE_BASE: f64 = 101.29; // kPa
pub const TROPOSPHERE_TEMPERATURE_REF: f64 = 288.08; // K
pub const TROPOSPHERE_PRESSURE_EXPONENT: f64 = 5.256;
pub const STRATOSPHERE_TEMPERATURE_C: f64 = -56.46; // °C
pub const STRATOSPHERE_PRESSURE_BASE: f64 = 22.65; // kPa
pub const STRATOSPHERE_PRESSURE_OFFSET: f64 = 1.73;
pub const STRATOSPHERE_PRESSURE_DECAY: f64 = 0.000157; // 1/m

// Sutherland's law
pub const SUTHERLAND_CONSTANT: f64 = 110.4; // K
pub const SUTHERLAND_REFERENCE: f64 = 1.46e-6; // Pa·s/K^0.5

// Flow Regime Limits
pub const MACH_LIMIT: f64 = 0.6;
pub const REYNOLDS_LIMIT: f64 = 200_000.0;

// Simulation Parameters
pub const TIME_STEP: f64 = 0.05; // s
pub const MAX_STEPS: usize = 5_000_000;

// Default Scenario (a 10 mm ball dropped from 10 km)
pub const DEFAULT_MASS: f64 = 0.04; // kg
pub const DEFAULT_DIAMETER: f64 = 10.0; // mm
pub const DEFAULT_DRAG_COEFFICIENT: f64 = 0.44;
pub const DEFAULT_DROP_ALTITUDE: f64 = 10_000.0; // m
