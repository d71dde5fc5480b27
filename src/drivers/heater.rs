//! Relay / SSR heater driver.
//!
//! Drives a single GPIO through the `embedded-hal` [`OutputPin`] trait, so it
//! works on any HAL.  Pin errors are logged and swallowed: the controller
//! treats the heater as a fire-and-forget sink.

use embedded_hal::digital::OutputPin;
use log::warn;

use crate::app::ports::HeaterPort;
use crate::error::ActuatorError;

/// Electrical level that energises the heater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    #[default]
    ActiveHigh,
    ActiveLow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaterState {
    Off,
    On,
    /// The last write failed; the real output level is unknown.
    Faulted(ActuatorError),
}

pub struct GpioHeater<P> {
    pin: P,
    polarity: Polarity,
    state: HeaterState,
}

impl<P: OutputPin> GpioHeater<P> {
    /// Take the pin and drive it to the de-energised level straight away.
    pub fn new(pin: P, polarity: Polarity) -> Self {
        let mut heater = Self {
            pin,
            polarity,
            state: HeaterState::Off,
        };
        heater.drive(false);
        heater
    }

    /// Last state written to the pin.  Diagnostic only.
    pub fn state(&self) -> HeaterState {
        self.state
    }

    pub fn release(self) -> P {
        self.pin
    }

    fn drive(&mut self, energise: bool) {
        let high = match self.polarity {
            Polarity::ActiveHigh => energise,
            Polarity::ActiveLow => !energise,
        };
        let res = if high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        self.state = match res {
            Ok(()) if energise => HeaterState::On,
            Ok(()) => HeaterState::Off,
            Err(e) => {
                warn!("Heater pin write failed (energise={energise}): {e:?}");
                HeaterState::Faulted(ActuatorError::GpioWriteFailed)
            }
        };
    }
}

impl<P: OutputPin> HeaterPort for GpioHeater<P> {
    fn on(&mut self) {
        self.drive(true);
    }

    fn off(&mut self) {
        self.drive(false);
    }
}
