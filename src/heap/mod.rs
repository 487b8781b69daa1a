//! Priority queues used by the shortest-path solvers

mod indexed;

pub use indexed::*;
