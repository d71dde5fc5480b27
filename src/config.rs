//! Controller configuration parameters
//!
//! Supplied programmatically at construction; there is no config file.
//! Both values are fixed for the lifetime of a controller.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Setpoint and dead-band width, in whole degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Desired temperature.  At or above it the heater is switched off.
    pub target: i32,
    /// Width of the dead-band below `target`.  Must satisfy
    /// `0 <= hysteresis < target`.
    pub hysteresis: i32,
}

impl ControllerConfig {
    pub const fn new(target: i32, hysteresis: i32) -> Self {
        Self { target, hysteresis }
    }

    /// Reject out-of-range parameters.  Never clamps.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hysteresis < 0 {
            return Err(ConfigError::NegativeHysteresis {
                hysteresis: self.hysteresis,
            });
        }
        if self.hysteresis >= self.target {
            return Err(ConfigError::HysteresisNotBelowTarget {
                target: self.target,
                hysteresis: self.hysteresis,
            });
        }
        Ok(())
    }

    /// Lowest reading still inside the dead-band.  Anything strictly
    /// below switches the heater on.
    pub const fn on_threshold(&self) -> i32 {
        self.target - self.hysteresis
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            target: 23,
            hysteresis: 2,
        }
    }
}
