//! Derived per-subnet address records.
//!
//! Given a placed item and the base network address, computes the full set
//! of addresses a network plan reports for that subnet. This stage is
//! total: every placed item yields a record.

use serde::{Deserialize, Serialize};

use crate::addr::{format_ipv4, mask_for};

use super::types::{ItemKind, SizedItem};

/// Read-only view of one placed subnet: everything the plan reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub name: String,
    pub kind: ItemKind,
    pub hosts_requested: u32,
    pub block_size: u64,
    pub prefix: u8,
    pub network: String,
    pub router: String,
    pub broadcast: String,
    pub usable_start: String,
    pub usable_end: String,
    pub mask: String,
    pub offset: u64,
}

/// Derive the address record for a placed item.
///
/// `network_base` is the base block's network address (already masked to
/// its prefix); `offset` is the item's placed offset within that block.
/// Host subnets report usable addresses from `network + 2` (the first
/// address past the router) through `broadcast - 1`. Links hold exactly
/// two endpoints: endpoint A sits in the router field at `network + 1`
/// and the usable range collapses onto endpoint B at `network + 2`.
pub fn derive_entry(network_base: u32, item: &SizedItem, offset: u64) -> PlanEntry {
    let network = u64::from(network_base) + offset;
    let bs = item.block_size;
    let prefix = 32 - bs.trailing_zeros() as u8;

    let usable_end = match item.kind {
        ItemKind::Link => network + 2,
        ItemKind::Host => network + bs - 2,
    };

    PlanEntry {
        name: item.name.clone(),
        kind: item.kind,
        hosts_requested: item.hosts_requested,
        block_size: bs,
        prefix,
        network: format_ipv4(network as u32),
        router: format_ipv4((network + 1) as u32),
        broadcast: format_ipv4((network + bs - 1) as u32),
        usable_start: format_ipv4((network + 2) as u32),
        usable_end: format_ipv4(usable_end as u32),
        mask: mask_for(prefix),
        offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addr::parse_ipv4;

    #[test]
    fn test_host_subnet_addresses() {
        // 192.251.123.0/24 base, 16-block at offset 0
        let base = parse_ipv4("192.251.123.0").unwrap();
        let item = SizedItem::new("A1", ItemKind::Host, 12, 16);
        let entry = derive_entry(base, &item, 0);

        assert_eq!(entry.prefix, 28);
        assert_eq!(entry.network, "192.251.123.0");
        assert_eq!(entry.router, "192.251.123.1");
        assert_eq!(entry.broadcast, "192.251.123.15");
        assert_eq!(entry.usable_start, "192.251.123.2");
        assert_eq!(entry.usable_end, "192.251.123.14");
        assert_eq!(entry.mask, "255.255.255.240");
        assert_eq!(entry.offset, 0);
    }

    #[test]
    fn test_link_usable_range_collapses() {
        // /30 link at offset 16: endpoint A at .17, endpoint B at .18
        let base = parse_ipv4("192.251.123.0").unwrap();
        let item = SizedItem::new("Z1", ItemKind::Link, 2, 4);
        let entry = derive_entry(base, &item, 16);

        assert_eq!(entry.prefix, 30);
        assert_eq!(entry.network, "192.251.123.16");
        assert_eq!(entry.router, "192.251.123.17");
        assert_eq!(entry.broadcast, "192.251.123.19");
        assert_eq!(entry.usable_start, "192.251.123.18");
        assert_eq!(entry.usable_end, "192.251.123.18");
        assert_eq!(entry.mask, "255.255.255.252");
    }

    #[test]
    fn test_offset_crosses_octet_boundary() {
        let base = parse_ipv4("10.20.0.0").unwrap();
        let item = SizedItem::new("wide", ItemKind::Host, 500, 512);
        let entry = derive_entry(base, &item, 512);

        assert_eq!(entry.prefix, 23);
        assert_eq!(entry.network, "10.20.2.0");
        assert_eq!(entry.broadcast, "10.20.3.255");
        assert_eq!(entry.usable_end, "10.20.3.254");
        assert_eq!(entry.mask, "255.255.254.0");
    }
}
