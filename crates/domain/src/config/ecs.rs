use crate::client_subnet::{parse_subnet, ClientSubnet};
use crate::DomainError;
use serde::{Deserialize, Serialize};

/// EDNS Client Subnet configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EcsConfig {
    /// Subnet attached to built queries when none is given on the command
    /// line. Accepts an address or CIDR; empty disables ECS.
    #[serde(default)]
    pub default_subnet: String,
}

impl EcsConfig {
    pub fn subnet(&self) -> Result<Option<ClientSubnet>, DomainError> {
        parse_subnet(&self.default_subnet)
    }
}
