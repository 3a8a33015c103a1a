//! Deadlock-free dining philosophers.
//!
//! A [`table::Table`] grants both forks to a philosopher from a single
//! serialized decision point, and hands them to hungry neighbours on release.

pub mod config;
pub mod dinner;
pub mod philosopher;
pub mod progress;
pub mod sync;
pub mod table;
