//! Summary of a completed run.

use std::collections::BTreeSet;
use std::path::PathBuf;

use hs_network::{LinkKind, Network, NodeKind};
use serde::Serialize;

use crate::error::AppResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementCounts {
    pub junctions: usize,
    pub reservoirs: usize,
    pub tanks: usize,
    pub pipes: usize,
    pub pumps: usize,
    pub valves: usize,
}

/// Result of one invocation: what was loaded and which zones it contains.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub input: PathBuf,
    pub node_count: usize,
    pub link_count: usize,
    pub counts: ElementCounts,
    /// Sorted, deduplicated zone names.
    pub zones: Vec<String>,
}

impl RunReport {
    pub fn new(input: PathBuf, network: &Network, zones: BTreeSet<String>) -> Self {
        Self {
            input,
            node_count: network.nodes().len(),
            link_count: network.links().len(),
            counts: ElementCounts {
                junctions: network.count_nodes(NodeKind::Junction),
                reservoirs: network.count_nodes(NodeKind::Reservoir),
                tanks: network.count_nodes(NodeKind::Tank),
                pipes: network.count_links(LinkKind::Pipe),
                pumps: network.count_links(LinkKind::Pump),
                valves: network.count_links(LinkKind::Valve),
            },
            zones: zones.into_iter().collect(),
        }
    }

    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
