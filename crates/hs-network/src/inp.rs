//! Identifier reader for EPANET `.inp` network files.
//!
//! Only the ID columns of the node and link sections are read:
//!
//! | Section        | Fields used          |
//! |----------------|----------------------|
//! | `[JUNCTIONS]`  | ID                   |
//! | `[RESERVOIRS]` | ID                   |
//! | `[TANKS]`      | ID                   |
//! | `[PIPES]`      | ID, Node1, Node2     |
//! | `[PUMPS]`      | ID, Node1, Node2     |
//! | `[VALVES]`     | ID, Node1, Node2     |
//!
//! Every other section is skipped. Hydraulic parameters are left to the
//! simulation engine.

use std::collections::HashMap;
use std::path::Path;

use crate::builder::NetworkBuilder;
use crate::error::{NetworkError, NetworkResult};
use crate::network::{LinkKind, Network, NodeKind};

const COMMENT: char = ';';
const LINK_FIELDS: usize = 3;
const BYTE_ORDER_MARK: char = '\u{FEFF}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Node(NodeKind),
    Link(LinkKind),
    Other,
}

impl Section {
    fn from_header(name: &str) -> Self {
        match name.trim().to_ascii_uppercase().as_str() {
            "JUNCTIONS" => Section::Node(NodeKind::Junction),
            "RESERVOIRS" => Section::Node(NodeKind::Reservoir),
            "TANKS" => Section::Node(NodeKind::Tank),
            "PIPES" => Section::Link(LinkKind::Pipe),
            "PUMPS" => Section::Link(LinkKind::Pump),
            "VALVES" => Section::Link(LinkKind::Valve),
            _ => Section::Other,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Section::Node(NodeKind::Junction) => "JUNCTIONS",
            Section::Node(NodeKind::Reservoir) => "RESERVOIRS",
            Section::Node(NodeKind::Tank) => "TANKS",
            Section::Link(LinkKind::Pipe) => "PIPES",
            Section::Link(LinkKind::Pump) => "PUMPS",
            Section::Link(LinkKind::Valve) => "VALVES",
            Section::Other => "OTHER",
        }
    }
}

struct LinkRecord<'a> {
    line: usize,
    kind: LinkKind,
    id: &'a str,
    from: &'a str,
    to: &'a str,
}

/// Read the network identifiers from an `.inp` file on disk.
///
/// Bytes that are not valid UTF-8 (e.g. Latin-1 text in `[TITLE]`) are
/// replaced rather than rejected; only the ASCII ID columns are used.
pub fn read_inp(path: &Path) -> NetworkResult<Network> {
    let bytes = std::fs::read(path).map_err(|source| NetworkError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let _span = tracing::debug_span!("read_inp", path = %path.display()).entered();
    let content = String::from_utf8_lossy(&bytes);
    if let std::borrow::Cow::Owned(_) = content {
        tracing::warn!("network file is not valid UTF-8; invalid bytes replaced");
    }
    parse_inp(&content)
}

/// Parse `.inp` text into a network of node and link identifiers.
///
/// Sections may come in any order; links are resolved after every node
/// section has been seen.
pub fn parse_inp(content: &str) -> NetworkResult<Network> {
    let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);
    let mut builder = NetworkBuilder::new();
    let mut node_lines: HashMap<&str, usize> = HashMap::new();
    let mut link_lines: HashMap<&str, usize> = HashMap::new();
    let mut link_records = Vec::new();
    let mut section = Section::Other;

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let data = strip_comment(raw).trim();
        if data.is_empty() {
            continue;
        }

        if let Some(header) = data.strip_prefix('[') {
            let name = header.split(']').next().unwrap_or_default();
            section = Section::from_header(name);
            tracing::trace!(line = line_no, section = section.label(), "section");
            continue;
        }

        match section {
            Section::Node(kind) => {
                // A non-empty trimmed line always has a first token.
                let Some(id) = data.split_whitespace().next() else {
                    continue;
                };
                if node_lines.insert(id, line_no).is_some() {
                    return Err(NetworkError::DuplicateNode {
                        id: id.to_string(),
                        line: Some(line_no),
                    });
                }
                builder.add_node(id, kind);
            }
            Section::Link(kind) => {
                let fields: Vec<&str> = data.split_whitespace().take(LINK_FIELDS).collect();
                let [id, from, to] = fields[..] else {
                    return Err(NetworkError::MalformedLine {
                        section: section.label().to_string(),
                        line: line_no,
                        expected: LINK_FIELDS,
                    });
                };
                if link_lines.insert(id, line_no).is_some() {
                    return Err(NetworkError::DuplicateLink {
                        id: id.to_string(),
                        line: Some(line_no),
                    });
                }
                link_records.push(LinkRecord {
                    line: line_no,
                    kind,
                    id,
                    from,
                    to,
                });
            }
            Section::Other => {}
        }
    }

    for record in link_records {
        for endpoint in [record.from, record.to] {
            if !node_lines.contains_key(endpoint) {
                return Err(NetworkError::UnknownNode {
                    link: record.id.to_string(),
                    node: endpoint.to_string(),
                    line: Some(record.line),
                });
            }
        }
        builder.add_link(record.id, record.kind, record.from, record.to);
    }

    builder.build()
}

fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT) {
        Some(pos) => &line[..pos],
        None => line,
    }
}
