//! Heater controller — the hexagonal core.
//!
//! [`Controller`] owns a [`TemperatureSource`] and a [`HeaterPort`] and runs
//! the read → decide → act cycle against them.  All I/O flows through the
//! port traits, so the controller is testable with mock adapters.
//!
//! ```text
//!  TemperatureSource ──▶ ┌──────────────────────┐ ──▶ HeaterPort
//!                        │      Controller      │
//!                        │  bang-bang · 2-strike│
//!                        └──────────────────────┘
//! ```
//!
//! ## Lifecycle
//!
//! The controller starts in the operating state.  Two consecutive `Bad`
//! readings force the heater off and make [`step`](Controller::step) return
//! `false`; that is terminal.  Stepping again afterwards is not supported,
//! build a fresh controller instead.

use log::{debug, error, info, warn};

use crate::config::ControllerConfig;
use crate::control::bang_bang::{Decision, decide};
use crate::error::ConfigError;

use super::ports::{HealthStatus, HeaterPort, TemperatureSource};

pub struct Controller<S, H> {
    source: S,
    heater: H,
    config: ControllerConfig,
    current_status: HealthStatus,
    /// One-step-lagged copy of `current_status`.
    previous_status: HealthStatus,
}

impl<S: TemperatureSource, H: HeaterPort> Controller<S, H> {
    /// Build a controller.
    ///
    /// # Panics
    ///
    /// If `hysteresis < 0` or `hysteresis >= target`.  Invalid parameters are
    /// a programming error; use [`try_new`](Self::try_new) to get the typed
    /// [`ConfigError`] instead.
    pub fn new(source: S, heater: H, target: i32, hysteresis: i32) -> Self {
        match Self::try_new(source, heater, ControllerConfig::new(target, hysteresis)) {
            Ok(controller) => controller,
            Err(e) => panic!("invalid controller parameters: {e}"),
        }
    }

    /// Build a controller, returning the validation error instead of panicking.
    pub fn try_new(source: S, heater: H, config: ControllerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        info!(
            "Controller ready: target={} hysteresis={}",
            config.target, config.hysteresis
        );
        Ok(Self {
            source,
            heater,
            config,
            current_status: HealthStatus::Good,
            previous_status: HealthStatus::Good,
        })
    }

    /// Run one read → decide → act cycle.
    ///
    /// Returns `false` once the controller has given up after two
    /// consecutive bad readings; the heater has been switched off by then.
    pub fn step(&mut self) -> bool {
        let reading = self.source.read();
        self.current_status = reading.status;

        let decision = decide(&self.config, reading, self.previous_status);
        match decision {
            Decision::HeaterOff => {
                debug!("T={} >= {}: heater off", reading.value, self.config.target);
                self.heater.off();
            }
            Decision::HeaterOn => {
                debug!(
                    "T={} < {}: heater on",
                    reading.value,
                    self.config.on_threshold()
                );
                self.heater.on();
            }
            Decision::Hold => {
                debug!("T={} in dead-band: hold", reading.value);
            }
            Decision::Tolerate => {
                warn!("Bad sensor reading tolerated");
            }
            Decision::ShutDown => {
                error!("Second consecutive bad sensor reading: heater off, giving up");
                self.heater.off();
            }
        }

        // The terminal step leaves the lagged status as it was.
        if !decision.keeps_running() {
            return false;
        }
        self.previous_status = self.current_status;
        true
    }

    /// Step until the controller gives up.
    ///
    /// Returns the number of steps taken, the terminal one included.
    pub fn run(&mut self) -> u64 {
        let mut steps = 1;
        while self.step() {
            steps += 1;
        }
        info!("Controller stopped after {steps} steps");
        steps
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Status of the most recent reading.
    pub fn current_status(&self) -> HealthStatus {
        self.current_status
    }

    pub fn previous_status(&self) -> HealthStatus {
        self.previous_status
    }

    /// Hand the collaborators back.
    pub fn into_parts(self) -> (S, H) {
        (self.source, self.heater)
    }
}
