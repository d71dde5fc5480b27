//! Two-point heater controller.
//!
//! Reads a temperature source, compares against a target with a dead-band
//! below it, and switches a heater on or off.  Two consecutive bad sensor
//! readings force the heater off and stop the controller for good.
//!
//! The control logic lives in [`app`] and [`control`] and touches hardware
//! only through the port traits in [`app::ports`].  [`sensors`] and
//! [`drivers`] hold the hardware-backed adapters.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod control;
pub mod drivers;
pub mod error;
pub mod sensors;
