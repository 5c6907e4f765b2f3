/// Closed-form solution of m·dv/dt = m·g − k·v² for constant air density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    pub gravity: f64,
    pub initial_velocity: f64,
}

impl Kinematics {
    pub fn new(gravity: f64, initial_velocity: f64) -> Self {
        Kinematics {
            gravity,
            initial_velocity,
        }
    }

    /// Velocity after `elapsed_time` seconds since release, as if the whole
    /// fall had happened in air with the given terminal velocity.
    ///
    /// `elapsed_time` is the total flight time, not the step length. Each
    /// step re-derives the curve from t = 0 with the current terminal
    /// velocity.
    pub fn calculate_velocity(&self, terminal_velocity: f64, elapsed_time: f64) -> f64 {
        let phase = self.gravity * elapsed_time / terminal_velocity;
        let ratio = self.initial_velocity / terminal_velocity;

        if ratio < 1.0 {
            terminal_velocity * (phase + ratio.atanh()).tanh()
        } else if ratio == 1.0 {
            terminal_velocity
        } else {
            // Released faster than terminal velocity: decays from above.
            let offset = 0.5 * ((ratio + 1.0) / (ratio - 1.0)).ln();
            terminal_velocity / (phase + offset).tanh()
        }
    }

    /// Trapezoidal rule over one step.
    pub fn calculate_step_distance(
        previous_velocity: f64,
        current_velocity: f64,
        time_step: f64,
    ) -> f64 {
        (previous_velocity + current_velocity) / 2.0 * time_step
    }
}
