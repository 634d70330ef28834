pub mod coerce;
pub mod config;
pub mod models;
pub mod protocol;
