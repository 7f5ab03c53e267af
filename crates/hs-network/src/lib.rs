//! hs-network: network model layer for hydrosim.
//!
//! Provides:
//! - Network data structures (Node, Link, Network)
//! - Incremental builder with validation
//! - The `NetworkModel` trait consumed by zone extraction
//! - A reader for the identifier sections of EPANET `.inp` files
//!
//! # Example
//!
//! ```
//! use hs_network::{LinkKind, NetworkBuilder, NetworkModel, NodeKind};
//!
//! let mut builder = NetworkBuilder::new();
//! builder
//!     .add_node("north-R1", NodeKind::Reservoir)
//!     .add_node("north-J1", NodeKind::Junction)
//!     .add_link("north-P1", LinkKind::Pipe, "north-R1", "north-J1");
//! let network = builder.build().unwrap();
//!
//! assert_eq!(network.node_ids(), vec!["north-R1", "north-J1"]);
//! assert_eq!(hs_network::zones_of(&network).len(), 1);
//! ```

pub mod builder;
pub mod error;
pub mod inp;
pub mod model;
pub mod network;
pub(crate) mod validate;

pub use builder::NetworkBuilder;
pub use error::{NetworkError, NetworkResult};
pub use inp::{parse_inp, read_inp};
pub use model::{NetworkModel, zones_of};
pub use network::{Link, LinkKind, Network, Node, NodeKind};
