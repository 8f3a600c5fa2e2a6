//! Pressure sensor implementations

pub mod transducer;

pub use transducer::{AdcReader, Transducer};
