//! Configuration module for ecskit
//!
//! - `root`: Main configuration and CLI overrides
//! - `ecs`: EDNS Client Subnet defaults
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod ecs;
pub mod errors;
pub mod logging;
pub mod root;

pub use ecs::EcsConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
