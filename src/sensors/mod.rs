//! Sensor drivers.
//!
//! Each driver implements [`TemperatureSource`](crate::app::ports::TemperatureSource)
//! and turns its own failures into `Bad` readings.

pub mod temperature;
