//! The read-only view of a network that downstream analysis consumes.

use std::collections::BTreeSet;

/// Anything that can list the identifiers of its nodes and links.
///
/// Implemented by [`Network`](crate::Network); tests and alternative
/// providers can implement it directly.
pub trait NetworkModel {
    /// All node identifiers, in model order.
    fn node_ids(&self) -> Vec<&str>;

    /// All link identifiers, in model order.
    fn link_ids(&self) -> Vec<&str>;
}

/// Zones present in a model's node and link identifiers.
pub fn zones_of<M: NetworkModel + ?Sized>(model: &M) -> BTreeSet<String> {
    hs_core::extract_zones(model.node_ids(), model.link_ids())
}
