//! Two-point heater policy with hysteresis and a two-strike fault rule.
//!
//! Pure decision logic: given this step's reading and the previous step's
//! health status, say what the heater should do.  No I/O happens here; the
//! [`Controller`](crate::app::controller::Controller) applies the result.
//!
//! ```text
//!             off                 hold              on
//!   ──────────────────┤├───────────────────┤├────────────────
//!                  target        target - hysteresis
//! ```

use crate::app::ports::{HealthStatus, TemperatureReading};
use crate::config::ControllerConfig;

/// Outcome of one control step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Good reading below the dead-band.
    HeaterOn,
    /// Good reading at or above target.
    HeaterOff,
    /// Good reading inside `[target - hysteresis, target)`: no command.
    Hold,
    /// First bad reading: no command, keep going.
    Tolerate,
    /// Second consecutive bad reading: heater off, stop for good.
    ShutDown,
}

impl Decision {
    /// Whether the control loop may keep running after this decision.
    pub const fn keeps_running(self) -> bool {
        !matches!(self, Self::ShutDown)
    }
}

/// Decide what to do with `reading`, given the status of the read before it.
pub fn decide(
    config: &ControllerConfig,
    reading: TemperatureReading,
    previous: HealthStatus,
) -> Decision {
    match (reading.status, previous) {
        (HealthStatus::Bad, HealthStatus::Bad) => Decision::ShutDown,
        (HealthStatus::Bad, HealthStatus::Good) => Decision::Tolerate,
        (HealthStatus::Good, _) => {
            if reading.value >= config.target {
                Decision::HeaterOff
            } else if reading.value < config.on_threshold() {
                Decision::HeaterOn
            } else {
                Decision::Hold
            }
        }
    }
}
