//! NTC thermistor temperature source (10 kOhm @ 25 C, B = 3950).
//!
//! Wired as the low side of a voltage-divider with a fixed 10 kOhm resistor
//! and sampled by a 12-bit ADC. The simplified Beta (Steinhart-Hart)
//! equation converts resistance to temperature, rounded to whole degrees.
//!
//! Every failure mode maps to a `Bad` reading rather than an error:
//! - the ADC read itself fails,
//! - the divider sits at a rail (open or shorted thermistor),
//! - the converted value is outside the plausible range.

use log::warn;

use crate::app::ports::{TemperatureReading, TemperatureSource};
use crate::error::{self, SensorError};

const R25: f32 = 10_000.0;
const BETA: f32 = 3950.0;
const T25_K: f32 = 298.15;
const R_DIVIDER: f32 = 10_000.0;
const ADC_MAX: f32 = 4095.0;
const V_REF: f32 = 3.3;
const RAIL_MARGIN_V: f32 = 0.01;

/// Plausible range for the thermistor, inclusive.
pub const MIN_CELSIUS: i32 = -40;
pub const MAX_CELSIUS: i32 = 125;

/// Raw single-channel ADC access.  `embedded-hal` 1.0 has no ADC trait, so
/// HAL glue implements this one.
pub trait AdcChannel {
    type Error: core::fmt::Debug;

    /// One 12-bit conversion.
    fn read_raw(&mut self) -> Result<u16, Self::Error>;
}

pub struct NtcSource<A> {
    adc: A,
    /// Value reported alongside a `Bad` status.
    last_good: i32,
}

impl<A: AdcChannel> NtcSource<A> {
    pub fn new(adc: A) -> Self {
        Self { adc, last_good: 0 }
    }

    /// Sample and convert, surfacing the failure reason.
    pub fn sample(&mut self) -> error::Result<i32> {
        let raw = self.adc.read_raw().map_err(|e| {
            warn!("NTC ADC read failed: {e:?}");
            SensorError::AdcReadFailed
        })?;
        Ok(adc_to_celsius(raw)?)
    }
}

impl<A: AdcChannel> TemperatureSource for NtcSource<A> {
    fn read(&mut self) -> TemperatureReading {
        match self.sample() {
            Ok(celsius) => {
                self.last_good = celsius;
                TemperatureReading::good(celsius)
            }
            Err(e) => {
                warn!("NTC reading marked bad: {e}");
                TemperatureReading::bad(self.last_good)
            }
        }
    }
}

/// Convert a raw 12-bit ADC count to whole degrees Celsius.
pub fn adc_to_celsius(raw: u16) -> Result<i32, SensorError> {
    let voltage = (f32::from(raw) / ADC_MAX) * V_REF;
    if voltage <= RAIL_MARGIN_V || voltage >= (V_REF - RAIL_MARGIN_V) {
        return Err(SensorError::OutOfRange);
    }
    let r_ntc = R_DIVIDER * voltage / (V_REF - voltage);
    let inv_t = (1.0 / T25_K) + (1.0 / BETA) * (r_ntc / R25).ln();
    if inv_t <= 0.0 {
        return Err(SensorError::OutOfRange);
    }
    let celsius = ((1.0 / inv_t) - 273.15).round() as i32;
    if (MIN_CELSIUS..=MAX_CELSIUS).contains(&celsius) {
        Ok(celsius)
    } else {
        Err(SensorError::OutOfRange)
    }
}
