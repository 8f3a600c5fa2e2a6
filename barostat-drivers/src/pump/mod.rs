//! Pump control implementations

pub mod hysteresis;
pub mod relay;

pub use hysteresis::HysteresisController;
pub use relay::GpioRelay;
