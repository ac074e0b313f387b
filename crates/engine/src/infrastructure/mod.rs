//! Infrastructure - configuration, port traits and their adapters.

pub mod config;
pub mod ports;
pub mod sqlite;
