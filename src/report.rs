//! Plain-text plan report.
//!
//! Renders a finished plan as the table and line-by-line usable-range
//! listing an operator reads off, plus a capacity summary and any
//! placement diagnostics. Pure string building; the caller prints it.

use crate::alloc::ItemKind;
use crate::orchestrator::SubnetPlan;

/// Render the whole plan as display text
pub fn render_plan(plan: &SubnetPlan) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Subnet plan for {}/{}\n\n",
        plan.base_network, plan.base_prefix
    ));

    out.push_str(&format!(
        "{:<12} {:<5} {:>6}  {:<20} {:<16} {:<16} {:<16}\n",
        "NAME", "TYPE", "HOSTS", "NETWORK", "MASK", "ROUTER", "BROADCAST"
    ));
    for entry in &plan.entries {
        let kind = match entry.kind {
            ItemKind::Host => "HOST",
            ItemKind::Link => "LINK",
        };
        out.push_str(&format!(
            "{:<12} {:<5} {:>6}  {:<20} {:<16} {:<16} {:<16}\n",
            entry.name,
            kind,
            entry.hosts_requested,
            format!("{}/{}", entry.network, entry.prefix),
            entry.mask,
            entry.router,
            entry.broadcast
        ));
    }

    out.push_str("\nUsable ranges:\n");
    for entry in &plan.entries {
        match entry.kind {
            ItemKind::Host => {
                // Network, router and broadcast are carved out of the block
                let usable = entry.block_size - 3;
                out.push_str(&format!(
                    "  {}: {} - {} ({} addresses)\n",
                    entry.name, entry.usable_start, entry.usable_end, usable
                ));
            }
            ItemKind::Link => {
                out.push_str(&format!(
                    "  {}: endpoints {} and {}\n",
                    entry.name, entry.router, entry.usable_end
                ));
            }
        }
    }

    out.push_str(&format!(
        "\nCapacity: {} of {} addresses used\n",
        plan.capacity_used, plan.capacity
    ));

    if !plan.diagnostics.is_empty() {
        out.push_str("\nUnplaced requests:\n");
        for diag in &plan.diagnostics {
            out.push_str(&format!(
                "  {} ({} addresses): {}\n",
                diag.name, diag.block_size, diag.reason
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NetworkConfig, PlanConfig, SubnetRequest};
    use crate::orchestrator::generate_plan;

    fn sample_plan(links: u32) -> SubnetPlan {
        let config = PlanConfig {
            network: NetworkConfig {
                base_address: "192.251.123.0".to_string(),
                prefix: 24,
            },
            subnets: vec![SubnetRequest {
                name: "A1".to_string(),
                hosts: 12,
            }],
            links,
        };
        generate_plan(&config).unwrap()
    }

    #[test]
    fn test_report_lists_every_entry() {
        let text = render_plan(&sample_plan(1));
        assert!(text.contains("Subnet plan for 192.251.123.0/24"));
        assert!(text.contains("A1"));
        assert!(text.contains("192.251.123.0/28"));
        assert!(text.contains("255.255.255.240"));
        assert!(text.contains("A1: 192.251.123.2 - 192.251.123.14 (13 addresses)"));
        assert!(text.contains("Z1: endpoints 192.251.123.17 and 192.251.123.18"));
        assert!(text.contains("Capacity: 20 of 256 addresses used"));
        assert!(!text.contains("Unplaced"));
    }

    #[test]
    fn test_report_shows_diagnostics() {
        let config = PlanConfig {
            network: NetworkConfig {
                base_address: "10.0.0.0".to_string(),
                prefix: 28,
            },
            subnets: vec![SubnetRequest {
                name: "toobig".to_string(),
                hosts: 100,
            }],
            links: 1,
        };
        let plan = generate_plan(&config).unwrap();
        let text = render_plan(&plan);
        assert!(text.contains("Unplaced requests:"));
        assert!(text.contains("toobig (128 addresses)"));
    }
}
