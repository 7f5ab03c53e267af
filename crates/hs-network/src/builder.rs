//! Incremental network builder.

use crate::error::NetworkResult;
use crate::network::{Link, LinkKind, Network, Node, NodeKind};
use crate::validate;

/// Builder for constructing a network incrementally.
///
/// Use `add_node` and `add_link` to build up the network,
/// then call `build()` to validate and freeze it into an immutable `Network`.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    nodes: Vec<Node>,
    links: Vec<Link>,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, name: impl Into<String>, kind: NodeKind) -> &mut Self {
        self.nodes.push(Node {
            name: name.into(),
            kind,
        });
        self
    }

    /// Add a link between two nodes, given by ID. Endpoints are checked in `build()`.
    pub fn add_link(
        &mut self,
        name: impl Into<String>,
        kind: LinkKind,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> &mut Self {
        self.links.push(Link {
            name: name.into(),
            kind,
            from: from.into(),
            to: to.into(),
        });
        self
    }

    /// Validate and freeze.
    pub fn build(self) -> NetworkResult<Network> {
        validate::validate_structure(&self.nodes, &self.links)?;
        tracing::debug!(
            nodes = self.nodes.len(),
            links = self.links.len(),
            "network built"
        );
        Ok(Network {
            nodes: self.nodes,
            links: self.links,
        })
    }
}
