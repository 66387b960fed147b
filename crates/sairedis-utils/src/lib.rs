//! SAIREDIS Utils
//!
//! - `clear`: null out every object id embedded in attribute records,
//!   driven by the metadata registry
//! - `decay`: half-life arithmetic for counter and telemetry aging

pub mod clear;
pub mod config;
pub mod decay;

pub use clear::*;
pub use config::*;
pub use decay::*;
