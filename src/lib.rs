pub mod data_handling;
pub mod graph;
pub mod heap;
pub mod maze;
pub mod search;
pub mod shortest_path;
pub mod util;
