//! # Actor Sample Library
//!
//! Sample actors built on `tiny-actor`, exposed for the demo binary and integration
//! tests.

pub mod clients;
pub mod counter_actor;
pub mod lifecycle;
pub mod model;
pub mod rally_actor;
