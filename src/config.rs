//! Plan configuration structures and validation.
//!
//! Mirrors the YAML plan file: the base network block, the named host
//! subnet requests, and the number of point-to-point links to carve out.

use serde::{Deserialize, Serialize};

use crate::addr;

/// Top-level plan configuration, deserialized from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    pub network: NetworkConfig,
    #[serde(default)]
    pub subnets: Vec<SubnetRequest>,
    #[serde(default)]
    pub links: u32,
}

/// The base address block to subdivide
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Dotted-quad base address, e.g. "192.168.1.0"
    pub base_address: String,
    /// CIDR prefix length of the base block
    pub prefix: u8,
}

/// One named host-subnet request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubnetRequest {
    pub name: String,
    pub hosts: u32,
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid network configuration: {0}")]
    InvalidNetwork(String),
    #[error("Invalid subnet configuration: {0}")]
    InvalidSubnet(String),
    #[error("Plan is empty: add at least one subnet or link")]
    EmptyPlan,
}

impl PlanConfig {
    /// Validate the upstream input rules before the allocator runs.
    ///
    /// The allocator itself tolerates bad requests by dropping them; this
    /// check exists so an operator's typo fails loudly instead.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if addr::parse_ipv4(&self.network.base_address).is_err() {
            return Err(ValidationError::InvalidNetwork(format!(
                "base address '{}' is not a dotted-quad IPv4 address",
                self.network.base_address
            )));
        }

        if self.network.prefix < 8 || self.network.prefix > 30 {
            return Err(ValidationError::InvalidNetwork(format!(
                "prefix /{} is outside the supported range /8-/30",
                self.network.prefix
            )));
        }

        if self.subnets.is_empty() && self.links == 0 {
            return Err(ValidationError::EmptyPlan);
        }

        for subnet in &self.subnets {
            if subnet.name.trim().is_empty() {
                return Err(ValidationError::InvalidSubnet(
                    "every subnet needs a name".to_string(),
                ));
            }
            if subnet.hosts == 0 {
                return Err(ValidationError::InvalidSubnet(format!(
                    "subnet '{}' must request at least 1 host",
                    subnet.name
                )));
            }
        }

        Ok(())
    }
}
