//! Network graph and the file loader that feeds it.

mod graph;
pub mod loader;

pub use graph::{Connection, Edge, NetworkGraph};
pub use loader::{LoadError, load_connections, read_connections};
