//! Display logic: segment encoding, numeric formatting, frame buffer
//!
//! Everything here is pure; the shift-register driver that pushes frames
//! onto the wire lives in barostat-drivers.

pub mod format;
pub mod frame;
pub mod segment;

pub use format::{format_pressure, render, render_pressure, FAULT_TEXT};
pub use frame::{DisplayFrame, DIGIT_COUNT};
pub use segment::encode;
