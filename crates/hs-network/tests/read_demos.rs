//! Integration tests reading the demo networks from disk.

use std::io::Write;
use std::path::PathBuf;

use hs_network::{LinkKind, NetworkError, NetworkModel, NodeKind, read_inp, zones_of};

fn demo(name: &str) -> PathBuf {
    let crate_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    crate_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root")
        .join("demos")
        .join("networks")
        .join(name)
}

#[test]
fn two_zone_demo_loads() {
    let net = read_inp(&demo("two_zone.inp")).expect("demo network should load");

    assert_eq!(net.nodes().len(), 6);
    assert_eq!(net.links().len(), 6);
    assert_eq!(net.count_nodes(NodeKind::Junction), 4);
    assert_eq!(net.count_nodes(NodeKind::Reservoir), 1);
    assert_eq!(net.count_nodes(NodeKind::Tank), 1);
    assert_eq!(net.count_links(LinkKind::Pump), 1);
    assert_eq!(net.count_links(LinkKind::Valve), 1);

    let zones: Vec<String> = zones_of(&net).into_iter().collect();
    assert_eq!(zones, vec!["north", "south"]);
}

#[test]
fn no_zone_demo_has_no_zones() {
    let net = read_inp(&demo("no_zones.inp")).expect("demo network should load");
    assert_eq!(net.node_ids(), vec!["J1", "J2", "R1"]);
    assert!(zones_of(&net).is_empty());
}

#[test]
fn missing_file_is_read_error() {
    let err = read_inp(&demo("does_not_exist.inp")).unwrap_err();
    assert!(matches!(err, NetworkError::Read { .. }));
    assert!(err.to_string().contains("does_not_exist.inp"));
}

#[test]
fn reads_from_temp_file() {
    let mut file = tempfile::Builder::new().suffix(".inp").tempfile().unwrap();
    writeln!(file, "[JUNCTIONS]\nzoneA-1 0\n[RESERVOIRS]\nzoneB-R 10\n[PIPES]\n-x zoneB-R zoneA-1 1 1 1").unwrap();

    let net = read_inp(file.path()).unwrap();
    let zones: Vec<String> = zones_of(&net).into_iter().collect();
    assert_eq!(zones, vec!["", "zoneA", "zoneB"]);
}

#[test]
fn latin1_title_does_not_block_ids() {
    let mut file = tempfile::Builder::new().suffix(".inp").tempfile().unwrap();
    file.write_all(b"[TITLE]\nTemp 20\xB0C\n[JUNCTIONS]\nnorth-J1 10\n")
        .unwrap();

    let net = read_inp(file.path()).expect("non-UTF-8 title should be tolerated");
    assert_eq!(net.node_ids(), vec!["north-J1"]);
    assert_eq!(zones_of(&net).into_iter().collect::<Vec<_>>(), vec!["north"]);
}
