//! IPv4 address codec.
//!
//! This module converts dotted-quad address strings to and from their
//! 32-bit integer form and derives CIDR subnet masks from prefix lengths.
//! All functions are pure; no allocation state lives here.

use std::net::Ipv4Addr;

/// Errors that can occur when decoding an address string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddrError {
    #[error("Invalid IPv4 address: {address}")]
    Format { address: String },
}

/// Parse a dotted-quad address into its 32-bit integer form.
///
/// The input must be exactly four dot-separated integers, each in 0..=255.
/// Anything else (missing octets, out-of-range values, stray characters)
/// fails with [`AddrError::Format`].
///
/// # Examples
/// ```
/// use vlsmplan::addr::parse_ipv4;
///
/// assert_eq!(parse_ipv4("10.0.0.0"), Ok(0x0a000000));
/// assert!(parse_ipv4("10.0.0.256").is_err());
/// assert!(parse_ipv4("10.0.0").is_err());
/// ```
pub fn parse_ipv4(address: &str) -> Result<u32, AddrError> {
    address
        .trim()
        .parse::<Ipv4Addr>()
        .map(u32::from)
        .map_err(|_| AddrError::Format {
            address: address.to_string(),
        })
}

/// Format a 32-bit integer as a dotted-quad address string.
///
/// Total function; inverse of [`parse_ipv4`] for every `u32`.
pub fn format_ipv4(value: u32) -> String {
    Ipv4Addr::from(value).to_string()
}

/// Subnet mask for a prefix length, as a 32-bit integer.
///
/// The high `prefix` bits are set, the rest are zero. Inputs above 32 are
/// clamped to the all-ones mask; prefix-range policy belongs to the caller.
pub fn mask_bits(prefix: u8) -> u32 {
    match prefix {
        0 => 0,
        p if p >= 32 => u32::MAX,
        p => u32::MAX << (32 - p),
    }
}

/// Subnet mask for a prefix length, formatted as a dotted quad.
pub fn mask_for(prefix: u8) -> String {
    format_ipv4(mask_bits(prefix))
}
