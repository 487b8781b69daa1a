//! Graph implementation and associated functionality


mod digraph;
mod graph_traits;
mod path;
mod traversal;

// Re-export all public items
pub use digraph::*;
pub use graph_traits::*;
pub use path::*;
pub use traversal::*;
