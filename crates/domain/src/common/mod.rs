//! Small helpers shared by the entity types.
//!
//! Pure functions only, no I/O.

pub mod datetime;

pub use datetime::parse_datetime;
