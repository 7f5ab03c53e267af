//! Zone inference from element identifiers.
//!
//! A zone is the part of a node or link identifier before its first `-`,
//! e.g. `north-J12` belongs to zone `north`. Identifiers without a hyphen
//! belong to no zone.

use std::collections::BTreeSet;

/// Separator between the zone prefix and the rest of an identifier.
pub const ZONE_DELIMITER: char = '-';

/// Zone prefix of a single identifier, split on the first hyphen only.
///
/// ```
/// use hs_core::zone_of;
///
/// assert_eq!(zone_of("zone1-sub-pump1"), Some("zone1"));
/// assert_eq!(zone_of("-pump1"), Some(""));
/// assert_eq!(zone_of("nozone"), None);
/// ```
pub fn zone_of(id: &str) -> Option<&str> {
    id.split_once(ZONE_DELIMITER).map(|(zone, _)| zone)
}

/// Collect the distinct zone names found across node and link identifiers.
pub fn extract_zones<N, L>(node_ids: N, link_ids: L) -> BTreeSet<String>
where
    N: IntoIterator,
    N::Item: AsRef<str>,
    L: IntoIterator,
    L::Item: AsRef<str>,
{
    let nodes = node_ids.into_iter().map(|id| zone_of(id.as_ref()).map(str::to_owned));
    let links = link_ids.into_iter().map(|id| zone_of(id.as_ref()).map(str::to_owned));
    nodes.chain(links).flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn zones_from_nodes_and_links() {
        let zones = extract_zones(["zone1-n1", "zone2-n1"], ["zone1-l1", "nozone"]);
        assert_eq!(zones, set(&["zone1", "zone2"]));
    }

    #[test]
    fn empty_inputs_give_empty_set() {
        let zones = extract_zones(Vec::<String>::new(), Vec::<String>::new());
        assert!(zones.is_empty());
    }

    #[test]
    fn leading_hyphen_is_empty_zone() {
        let zones = extract_zones(["-x"], Vec::<&str>::new());
        assert_eq!(zones, set(&[""]));
    }

    #[test]
    fn splits_on_first_hyphen_only() {
        assert_eq!(extract_zones(["a-b-c"], Vec::<&str>::new()), set(&["a"]));
        assert_eq!(zone_of("a--b"), Some("a"));
        assert_eq!(zone_of("a-"), Some("a"));
    }

    #[test]
    fn no_hyphen_contributes_nothing() {
        let zones = extract_zones(["J1", "J2"], ["P1"]);
        assert!(zones.is_empty());
    }

    #[test]
    fn accepts_owned_strings() {
        let nodes = vec!["east-J1".to_string()];
        let links = vec!["west-P1".to_string()];
        assert_eq!(extract_zones(&nodes, &links), set(&["east", "west"]));
    }

    proptest! {
        /// Every reported zone is the first-hyphen prefix of some input, and every such prefix is reported.
        #[test]
        fn prop_zones_are_exact_prefixes(
            nodes in prop::collection::vec("[a-c-]{0,6}", 0..12),
            links in prop::collection::vec("[a-c-]{0,6}", 0..12),
        ) {
            let zones = extract_zones(&nodes, &links);
            let expected: BTreeSet<String> = nodes
                .iter()
                .chain(links.iter())
                .filter_map(|id| id.find('-').map(|pos| id[..pos].to_string()))
                .collect();
            prop_assert_eq!(zones, expected);
        }

        #[test]
        fn prop_idempotent(
            nodes in prop::collection::vec("[a-z0-9-]{0,8}", 0..10),
            links in prop::collection::vec("[a-z0-9-]{0,8}", 0..10),
        ) {
            prop_assert_eq!(extract_zones(&nodes, &links), extract_zones(&nodes, &links));
        }

        /// Swapping which list an identifier comes from does not change the result.
        #[test]
        fn prop_source_order_irrelevant(
            nodes in prop::collection::vec("[a-z-]{0,8}", 0..10),
            links in prop::collection::vec("[a-z-]{0,8}", 0..10),
        ) {
            prop_assert_eq!(extract_zones(&nodes, &links), extract_zones(&links, &nodes));
        }
    }
}
