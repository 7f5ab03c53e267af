//! Network validation logic.

use std::collections::HashSet;

use crate::error::{NetworkError, NetworkResult};
use crate::network::{Link, Node};

/// Validate the network structure: unique names and resolvable link endpoints.
pub(crate) fn validate_structure(nodes: &[Node], links: &[Link]) -> NetworkResult<()> {
    let mut node_names = HashSet::with_capacity(nodes.len());
    for node in nodes {
        if !node_names.insert(node.name.as_str()) {
            return Err(NetworkError::DuplicateNode {
                id: node.name.clone(),
                line: None,
            });
        }
    }

    let mut link_names = HashSet::with_capacity(links.len());
    for link in links {
        if !link_names.insert(link.name.as_str()) {
            return Err(NetworkError::DuplicateLink {
                id: link.name.clone(),
                line: None,
            });
        }

        for endpoint in [&link.from, &link.to] {
            if !node_names.contains(endpoint.as_str()) {
                return Err(NetworkError::UnknownNode {
                    link: link.name.clone(),
                    node: endpoint.clone(),
                    line: None,
                });
            }
        }
    }

    Ok(())
}
