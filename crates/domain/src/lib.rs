//! ecskit domain layer
//!
//! Library-independent types shared by the DNS glue and the binary: the
//! EDNS Client Subnet descriptor and its parser, record types, errors and
//! configuration.
pub mod client_subnet;
pub mod config;
pub mod dns_record;
pub mod errors;

pub use client_subnet::{parse_subnet, AddressFamily, ClientSubnet};
pub use config::{CliOverrides, Config, ConfigError, EcsConfig, LoggingConfig};
pub use dns_record::RecordType;
pub use errors::DomainError;
