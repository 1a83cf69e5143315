//! Run parameters for the driver loop
//!
//! `Parameters` holds:
//! - the total simulated time `t_end`,
//! - the fixed step size `dt`

use super::error::{Result, SimError};

/// Most steps a run may take. Below 2^52 steps `elapsed += dt` always
/// advances the clock, whatever the magnitude of `dt`.
pub const MAX_STEPS: f64 = 4_503_599_627_370_496.0; // 2^52

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub t_end: f64, // time end
    pub dt: f64, // step size
}

impl Parameters {
    pub fn new(t_end: f64, dt: f64) -> Result<Self> {
        let params = Self { t_end, dt };
        params.validate()?;
        Ok(params)
    }

    /// Reject settings the run loop could never finish with
    pub fn validate(&self) -> Result<()> {
        if !self.t_end.is_finite() || !self.dt.is_finite() {
            return Err(SimError::Config(format!(
                "t_end and dt must be finite (t_end = {}, dt = {})",
                self.t_end, self.dt
            )));
        }
        if self.t_end > 0.0 && self.dt <= 0.0 {
            return Err(SimError::Config(format!(
                "dt must be positive to reach t_end = {}, got {}",
                self.t_end, self.dt
            )));
        }
        if self.t_end > 0.0 && self.t_end / self.dt > MAX_STEPS {
            return Err(SimError::Config(format!(
                "t_end = {} needs more than 2^52 steps of dt = {}",
                self.t_end, self.dt
            )));
        }
        Ok(())
    }
}
