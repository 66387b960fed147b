//! SAIREDIS Notifications
//!
//! Notifications arrive from the switch already decoded. This crate gives
//! them a common shape: which switch they belong to, a representative
//! object id, metadata checks and callback dispatch.

pub mod notification;
pub mod twamp;

pub use notification::*;
pub use twamp::*;
