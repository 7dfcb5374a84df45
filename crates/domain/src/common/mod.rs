//! Common utility functions shared by the domain and the engine.
//!
//! Pure functions only: no side effects, no I/O.

pub mod datetime;

pub use datetime::parse_datetime;
