use crate::constants::{
    AIR_GAS_CONSTANT, HEAT_CAPACITY_RATIO, KELVIN_OFFSET, MODEL_CEILING_ALTITUDE,
    SEA_LEVEL_TEMPERATURE_C, STRATOSPHERE_PRESSURE_BASE, STRATOSPHERE_PRESSURE_DECAY,
    STRATOSPHERE_PRESSURE_OFFSET, STRATOSPHERE_TEMPERATURE_C, SUTHERLAND_CONSTANT,
    SUTHERLAND_REFERENCE, TROPOPAUSE_ALTITUDE, TROPOSPHERE_LAPSE_RATE, TROPOSPHERE_PRESSURE_BASE,
    TROPOSPHERE_PRESSURE_EXPONENT, TROPOSPHERE_TEMPERATURE_REF,
};

/// Air parameters at a single altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirState {
    pub temperature: f64,       // °C
    pub pressure: f64,          // kPa
    pub density: f64,           // kg/m³
    pub speed_of_sound: f64,    // m/s
    pub dynamic_viscosity: f64, // Pa·s
}

impl AirState {
    pub fn temperature_kelvin(&self) -> f64 {
        self.temperature + KELVIN_OFFSET
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtmosphericLayer {
    Troposphere,
    Stratosphere,
}

/// Two-band ISA approximation (NASA curve fits), valid from sea level to 25 km.
///
/// Altitudes outside that band are not rejected; the formulas simply
/// extrapolate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Atmosphere;

impl Atmosphere {
    pub fn query(altitude: f64) -> AirState {
        let (temperature, pressure) = match Self::layer(altitude) {
            AtmosphericLayer::Troposphere => Self::tropospheric_model(altitude),
            AtmosphericLayer::Stratosphere => Self::stratospheric_model(altitude),
        };
        let density = pressure / (AIR_GAS_CONSTANT * (temperature + KELVIN_OFFSET));

        AirState {
            temperature,
            pressure,
            density,
            speed_of_sound: Self::calculate_speed_of_sound(pressure, density),
            dynamic_viscosity: Self::calculate_viscosity(temperature),
        }
    }

    /// Hard switch at the tropopause, no blending.
    pub fn layer(altitude: f64) -> AtmosphericLayer {
        if altitude > TROPOPAUSE_ALTITUDE {
            AtmosphericLayer::Stratosphere
        } else {
            AtmosphericLayer::Troposphere
        }
    }

    pub fn is_within_model_range(altitude: f64) -> bool {
        (0.0..=MODEL_CEILING_ALTITUDE).contains(&altitude)
    }

    // (°C, kPa)
    fn tropospheric_model(altitude: f64) -> (f64, f64) {
        let temperature = SEA_LEVEL_TEMPERATURE_C - TROPOSPHERE_LAPSE_RATE * altitude;
        let pressure = TROPOSPHERE_PRESSURE_BASE
            * ((temperature + KELVIN_OFFSET) / TROPOSPHERE_TEMPERATURE_REF)
                .powf(TROPOSPHERE_PRESSURE_EXPONENT);
        (temperature, pressure)
    }

    fn stratospheric_model(altitude: f64) -> (f64, f64) {
        let pressure = STRATOSPHERE_PRESSURE_BASE
            * (STRATOSPHERE_PRESSURE_OFFSET - STRATOSPHERE_PRESSURE_DECAY * altitude).exp();
        (STRATOSPHERE_TEMPERATURE_C, pressure)
    }

    /// Ideal-gas acoustic velocity, pressure given in kPa.
    pub fn calculate_speed_of_sound(pressure: f64, density: f64) -> f64 {
        (HEAT_CAPACITY_RATIO * pressure * 1000.0 / density).sqrt()
    }

    /// Sutherland's law, temperature given in °C.
    pub fn calculate_viscosity(temperature: f64) -> f64 {
        let temp_kelvin = temperature + KELVIN_OFFSET;
        SUTHERLAND_REFERENCE * temp_kelvin.powf(1.5) / (temp_kelvin + SUTHERLAND_CONSTANT)
    }
}
