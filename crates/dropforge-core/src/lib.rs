// Re-export types from the protocol crate so they are accessible via dropforge_core::*
pub use dropforge_protocol::coerce;
pub use dropforge_protocol::config;
pub use dropforge_protocol::models;
pub use dropforge_protocol::protocol;

// Internal Modules
pub mod catalog;
pub mod cohort;
pub mod error;
pub mod ranking;
pub mod runs;
pub mod scorer;
pub mod stats;
pub mod store;
pub mod util;
