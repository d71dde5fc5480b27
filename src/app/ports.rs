//! Port traits — the hexagonal boundary between the controller and the
//! outside world.
//!
//! ```text
//!   TemperatureSource ──▶ Controller ──▶ HeaterPort
//! ```
//!
//! Hardware adapters ([`NtcSource`](crate::sensors::temperature::NtcSource),
//! [`GpioHeater`](crate::drivers::heater::GpioHeater)) and test doubles
//! implement these traits.  The [`Controller`](super::controller::Controller)
//! consumes them via generics, so the control logic never touches hardware
//! directly.
//!
//! Neither port can fail observably.  Adapters absorb their own errors: a
//! sensor fault is reported as [`HealthStatus::Bad`], an actuator fault is
//! logged by the adapter.

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Health flag attached to every reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HealthStatus {
    #[default]
    Good,
    /// The value is untrustworthy and may be noise.
    Bad,
}

/// One sample from a [`TemperatureSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemperatureReading {
    /// Whole degrees.  Meaningless when `status` is `Bad`.
    pub value: i32,
    pub status: HealthStatus,
}

impl TemperatureReading {
    pub const fn good(value: i32) -> Self {
        Self {
            value,
            status: HealthStatus::Good,
        }
    }

    pub const fn bad(value: i32) -> Self {
        Self {
            value,
            status: HealthStatus::Bad,
        }
    }
}

/// Read-side port: the controller calls this once per step.
///
/// Implementations must return in bounded time.
pub trait TemperatureSource {
    fn read(&mut self) -> TemperatureReading;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port for a binary heater.
///
/// Commands are fire-and-forget and idempotent: the controller keeps no
/// record of the heater state and may repeat a command.
pub trait HeaterPort {
    fn on(&mut self);
    fn off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Borrowed collaborators
// ───────────────────────────────────────────────────────────────

impl<T: TemperatureSource + ?Sized> TemperatureSource for &mut T {
    fn read(&mut self) -> TemperatureReading {
        (**self).read()
    }
}

impl<T: HeaterPort + ?Sized> HeaterPort for &mut T {
    fn on(&mut self) {
        (**self).on();
    }

    fn off(&mut self) {
        (**self).off();
    }
}
