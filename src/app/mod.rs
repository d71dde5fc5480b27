//! Application core — pure domain logic, zero I/O.
//!
//! The [`controller`] runs the read → decide → act cycle.  All interaction
//! with hardware happens through the **port traits** defined in [`ports`],
//! keeping this layer fully testable without real peripherals.

pub mod controller;
pub mod ports;
