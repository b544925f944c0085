//! # VLSMPlan - VLSM subnet planning utility for IPv4 address blocks
//!
//! This library partitions a base IPv4 block into minimally-sized,
//! power-of-two-aligned sub-blocks (Variable-Length Subnet Masking) and
//! derives the canonical addresses for each placed subnet.
//!
//! ## Overview
//!
//! Given a base block, a list of named host-count requests, and a number
//! of point-to-point links, VLSMPlan sizes each request to the smallest
//! power-of-two block that can hold it, places the blocks largest-first
//! into the base block with first-fit over a free-interval set, and
//! reports network, router, broadcast, usable range and mask per subnet.
//!
//! ## Key Properties
//!
//! - **Aligned blocks**: every block starts at a multiple of its own size,
//!   so each subnet has a simple, contiguous CIDR prefix
//! - **Deterministic**: identical inputs always produce identical plans
//! - **Partial failure as data**: requests that do not fit are reported as
//!   diagnostics alongside the plan, never as errors
//! - **Pure core**: one plan is a pure function of its inputs; no state
//!   survives between runs
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - `config`: plan configuration structures, YAML shape and validation
//! - `config_loader`: configuration file loading
//! - `addr`: dotted-quad address codec and mask derivation
//! - `alloc`: block sizing, first-fit placement and address derivation
//! - `orchestrator`: high-level plan generation and serialization
//! - `report`: plain-text rendering of a finished plan
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use vlsmplan::{config_loader, orchestrator};
//!
//! // Load the plan configuration from a YAML file
//! let config = config_loader::load_config("plan.yaml".as_ref())?;
//!
//! // Run one allocation
//! let plan = orchestrator::generate_plan(&config)?;
//!
//! for entry in &plan.entries {
//!     println!("{} -> {}/{}", entry.name, entry.network, entry.prefix);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Configuration Format
//!
//! Plans use YAML format:
//!
//! ```yaml
//! network:
//!   base_address: "192.251.123.0"
//!   prefix: 24
//!
//! subnets:
//!   - name: "A1"
//!     hosts: 12
//!   - name: "A2"
//!     hosts: 50
//!
//! links: 2
//! ```
//!
//! ## Error Handling
//!
//! Leaf modules use `thiserror` enums (`AddrError`, `ValidationError`,
//! `PlanError`) for structural failures; the application layer wraps them
//! with `color_eyre` for contextual reporting. Placement failures are not
//! errors: they travel as `PlacementDiagnostic` data in the plan.

pub mod addr;
pub mod alloc;
pub mod config;
pub mod config_loader;
pub mod orchestrator;
pub mod report;
