//! MELIAF Form - Study submission form engine
//!
//! This crate derives the state of the MELIAF study submission form:
//! geographic selection cascades, conditional disclosure of Section C,
//! section completeness and debounced draft recovery.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
