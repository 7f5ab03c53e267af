//! hs-core: stable foundation for hydrosim.
//!
//! Contains:
//! - zones (zone-name inference from identifier prefixes)

pub mod zones;

pub use zones::{ZONE_DELIMITER, extract_zones, zone_of};
