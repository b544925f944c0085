//! Plan orchestrator.
//!
//! This module coordinates one allocation run: it normalizes the base
//! block, builds sized items from the configured requests, runs first-fit
//! placement, derives the per-subnet address records, and serializes the
//! finished plan.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::addr::{self, AddrError};
use crate::alloc::{
    block_size_for, derive_entry, place_items, ItemKind, PlacementDiagnostic, PlanEntry,
    SizedItem,
};
use crate::config::PlanConfig;

/// Structural errors that stop a run before placement starts
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error(transparent)]
    Addr(#[from] AddrError),
    #[error("Prefix /{0} is outside the representable range 0-32")]
    PrefixOutOfRange(u8),
}

/// The complete output of one allocation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubnetPlan {
    /// Base network address the offsets are relative to
    pub base_network: String,
    /// Prefix length of the base block
    pub base_prefix: u8,
    /// Placed subnets in allocation order (descending block size)
    pub entries: Vec<PlanEntry>,
    /// Total addresses in the base block
    pub capacity: u64,
    /// Highest placed `offset + block_size`; measured after placement
    pub capacity_used: u64,
    /// One record per request that could not be placed
    pub diagnostics: Vec<PlacementDiagnostic>,
}

/// Run one allocation over the validated configuration.
///
/// Host requests with an empty name or a zero host count are dropped here
/// rather than reported; config validation already rejects them for
/// operator input, so anything reaching this point is a caller that chose
/// to skip validation. Link items are synthesized after the host items and
/// named `Z1`, `Z2`, ...
///
/// `capacity_used` is measured after placement, from the actual offsets.
/// The figure counts placed blocks only and can never exceed `capacity`;
/// requests that did not fit show up in `diagnostics` instead.
pub fn generate_plan(config: &PlanConfig) -> Result<SubnetPlan, PlanError> {
    let prefix = config.network.prefix;
    if prefix > 32 {
        return Err(PlanError::PrefixOutOfRange(prefix));
    }

    let base = addr::parse_ipv4(&config.network.base_address)?;
    // Normalize to the block's network address before applying offsets
    let network_base = base & addr::mask_bits(prefix);
    let capacity = 1u64 << (32 - u32::from(prefix));

    let mut items = Vec::new();
    for request in &config.subnets {
        if request.name.trim().is_empty() || request.hosts == 0 {
            debug!("Skipping unusable subnet request {:?}", request.name);
            continue;
        }
        items.push(SizedItem::new(
            request.name.clone(),
            ItemKind::Host,
            request.hosts,
            block_size_for(request.hosts, ItemKind::Host),
        ));
    }
    for i in 0..config.links {
        items.push(SizedItem::new(
            format!("Z{}", i + 1),
            ItemKind::Link,
            2,
            block_size_for(2, ItemKind::Link),
        ));
    }

    info!(
        "Placing {} item(s) into {}/{} ({} addresses)",
        items.len(),
        addr::format_ipv4(network_base),
        prefix,
        capacity
    );

    let placement = place_items(capacity, items);
    debug!(
        "{} free interval(s) remain, {} addresses unallocated",
        placement.free.len(),
        placement.free.iter().map(|iv| iv.len()).sum::<u64>()
    );

    let mut entries = Vec::new();
    let mut capacity_used = 0;
    for item in &placement.items {
        if let Some(offset) = item.offset {
            entries.push(derive_entry(network_base, item, offset));
            capacity_used = capacity_used.max(offset + item.block_size);
        }
    }

    if !placement.diagnostics.is_empty() {
        warn!(
            "{} request(s) did not fit into {} addresses",
            placement.diagnostics.len(),
            capacity
        );
    }

    Ok(SubnetPlan {
        base_network: addr::format_ipv4(network_base),
        base_prefix: prefix,
        entries,
        capacity,
        capacity_used,
        diagnostics: placement.diagnostics,
    })
}

/// Write the plan as JSON and YAML files into the output directory
pub fn write_plan_files(plan: &SubnetPlan, output_dir: &Path) -> color_eyre::eyre::Result<()> {
    let json_path = output_dir.join("subnet_plan.json");
    let plan_json = serde_json::to_string_pretty(plan)?;
    std::fs::write(&json_path, &plan_json)?;
    info!("Wrote {:?}", json_path);

    let yaml_path = output_dir.join("subnet_plan.yaml");
    let plan_yaml = serde_yaml::to_string(plan)?;
    std::fs::write(&yaml_path, plan_yaml)?;
    info!("Wrote {:?}", yaml_path);

    Ok(())
}
