//! VLSM allocation engine.
//!
//! This module turns named capacity requests into placed, power-of-two
//! aligned sub-blocks of a base address block: sizing, first-fit placement
//! over a free-interval set, and derivation of the per-subnet addresses.

pub mod types;
pub mod sizing;
pub mod first_fit;
pub mod derive;

// Re-export commonly used types
pub use types::{FreeInterval, ItemKind, PlacementDiagnostic, SizedItem};
pub use sizing::{block_size_for, LINK_BLOCK_SIZE};
pub use first_fit::{place_items, Placement};
pub use derive::{derive_entry, PlanEntry};
