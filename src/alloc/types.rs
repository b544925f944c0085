//! Shared types for the allocation engine.

use serde::{Deserialize, Serialize};

/// Classification of an allocation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ItemKind {
    /// A host subnet: usable hosts plus network, router and broadcast
    Host,
    /// A point-to-point link: exactly two endpoint addresses (/30)
    Link,
}

/// One request carried through sizing and placement.
///
/// `offset` starts as `None` and is set exactly once by the allocator;
/// an item that stays `None` could not be placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizedItem {
    pub name: String,
    pub kind: ItemKind,
    pub hosts_requested: u32,
    pub block_size: u64,
    pub offset: Option<u64>,
}

impl SizedItem {
    pub fn new(name: impl Into<String>, kind: ItemKind, hosts_requested: u32, block_size: u64) -> Self {
        SizedItem {
            name: name.into(),
            kind,
            hosts_requested,
            block_size,
            offset: None,
        }
    }
}

/// A contiguous unallocated region of the address space, as the half-open
/// range `[start, end)` in host-address units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeInterval {
    pub start: u64,
    pub end: u64,
}

impl FreeInterval {
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Record of a request that could not be placed.
///
/// Diagnostics are data carried alongside the plan, never an error: one
/// unplaceable request must not abort the rest of the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementDiagnostic {
    pub name: String,
    pub block_size: u64,
    pub reason: String,
}
