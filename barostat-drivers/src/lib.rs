//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in barostat-core for the controller's peripherals:
//!
//! - Shift-register display link and digit multiplexer (74HC595 pair)
//! - Pump relay output (GPIO, either polarity)
//! - Hysteresis pump controller (sensor + flow interlock + relay)
//! - Ratiometric pressure transducer (ADC-backed)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
pub mod pump;
pub mod sensor;
