//! statechain SDK — graph store clients for the statechain loader
//!
//! Provides two client implementations:
//!
//! - **`RemoteClient`** — talks to a Neo4j server over its REST API.
//! - **`EmbeddedClient`** — in-process, no network. Writes into a
//!   `GraphStore` directly. Used for offline runs and tests.
//!
//! Both implement the `GraphClient` trait.
//!
//! # Quick Start
//!
//! ```rust
//! use statechain_sdk::{EmbeddedClient, GraphClient, Label, PropertyMap};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = EmbeddedClient::new();
//!
//!     let node = client.create_node(&PropertyMap::new()).await.unwrap();
//!     client.add_label(node, &Label::new("Entity")).await.unwrap();
//!
//!     assert_eq!(client.count_nodes().await.unwrap(), 1);
//! }
//! ```

pub mod client;
pub mod embedded;
pub mod error;
pub mod models;
pub mod remote;

pub use client::{GraphClient, COUNT_NODES, DELETE_ALL};
pub use embedded::EmbeddedClient;
pub use error::{SdkError, SdkResult};
pub use models::QueryResult;
pub use remote::{RemoteClient, DEFAULT_URL};

// Graph types (re-exported from statechain core)
pub use statechain::graph::{
    EdgeId, EdgeType, GraphStore, Label, NodeId, PropertyMap, PropertyValue,
};
