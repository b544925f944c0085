//! Block sizing policy.
//!
//! Converts a requested host count into the smallest power-of-two block
//! that can hold it plus the fixed per-subnet overhead.

use super::types::ItemKind;

/// Fixed block size for point-to-point links: network + two endpoints +
/// broadcast, a /30.
pub const LINK_BLOCK_SIZE: u64 = 4;

/// Addresses reserved in every host subnet beyond the usable hosts:
/// network, router and broadcast.
pub const HOST_OVERHEAD: u64 = 3;

/// Smallest block size any subnet can occupy.
const MIN_BLOCK_SIZE: u64 = 4;

/// Compute the block size for a request.
///
/// Links always get [`LINK_BLOCK_SIZE`] regardless of the host count; a
/// point-to-point link needs exactly two endpoint addresses. Host subnets
/// get the smallest power of two that covers `hosts + 3`, floored at 4.
///
/// Requests with a non-positive host count never reach this function; the
/// orchestrator drops them while building the item set.
pub fn block_size_for(hosts: u32, kind: ItemKind) -> u64 {
    match kind {
        ItemKind::Link => LINK_BLOCK_SIZE,
        ItemKind::Host => {
            let needed = u64::from(hosts) + HOST_OVERHEAD;
            needed.next_power_of_two().max(MIN_BLOCK_SIZE)
        }
    }
}
