//! Display driver implementations

pub mod hc595;

pub use hc595::{Hc595Link, MuxDisplay, DIGIT_SELECT};
