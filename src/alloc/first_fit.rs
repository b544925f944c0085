//! Aligned first-fit placement.
//!
//! Places sized items into a base block of the given capacity, largest
//! blocks first, each at the first free interval that can hold it at an
//! offset aligned to its own size. The free-interval set is rebuilt after
//! every placement so the scan order never depends on split insertion
//! order.

use log::{debug, warn};

use super::types::{FreeInterval, PlacementDiagnostic, SizedItem};

/// Outcome of one placement batch.
#[derive(Debug, Clone)]
pub struct Placement {
    /// All items in allocation order (descending block size, stable within
    /// equal sizes); unplaced items keep `offset = None`.
    pub items: Vec<SizedItem>,
    /// Free intervals remaining after placement, sorted by start.
    pub free: Vec<FreeInterval>,
    /// One entry per item that could not be placed.
    pub diagnostics: Vec<PlacementDiagnostic>,
}

/// Place items into `[0, capacity)` using aligned first-fit.
///
/// Items are sorted by descending block size with a stable sort, so
/// equally-sized items keep their input order. Larger blocks place first;
/// the small blocks (notably /30 links) then fill the aligned gaps the
/// large blocks leave behind. A block's candidate offset inside an
/// interval is the interval start rounded up to a multiple of the block
/// size, which keeps every network address a multiple of its own block
/// size.
///
/// Items that fit nowhere are recorded in `diagnostics` and left unplaced;
/// they never abort the batch.
pub fn place_items(capacity: u64, mut items: Vec<SizedItem>) -> Placement {
    items.sort_by(|a, b| b.block_size.cmp(&a.block_size));

    let mut free = vec![FreeInterval {
        start: 0,
        end: capacity,
    }];
    let mut diagnostics = Vec::new();

    for item in &mut items {
        let bs = item.block_size;

        let slot = free.iter().enumerate().find_map(|(index, interval)| {
            let aligned = interval.start.next_multiple_of(bs);
            (aligned + bs <= interval.end).then_some((index, aligned))
        });

        match slot {
            Some((index, aligned)) => {
                let FreeInterval { start, end } = free.remove(index);
                item.offset = Some(aligned);
                debug!(
                    "Placed {} ({} addresses) at offset {}",
                    item.name, bs, aligned
                );

                if start < aligned {
                    free.push(FreeInterval {
                        start,
                        end: aligned,
                    });
                }
                if aligned + bs < end {
                    free.push(FreeInterval {
                        start: aligned + bs,
                        end,
                    });
                }
                free.sort_by_key(|interval| interval.start);
            }
            None => {
                warn!(
                    "Failed to place {}: no free interval can hold an aligned block of {} addresses",
                    item.name, bs
                );
                diagnostics.push(PlacementDiagnostic {
                    name: item.name.clone(),
                    block_size: bs,
                    reason: format!(
                        "no free interval can hold an aligned block of {} addresses",
                        bs
                    ),
                });
            }
        }
    }

    Placement {
        items,
        free,
        diagnostics,
    }
}
