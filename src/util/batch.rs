//! running many independent searches in parallel

use rayon::prelude::*;
use tracing::debug;

use crate::graph::{Graph, Path, VertexId};
use crate::search::Strategy;

/// Answers every `(source, target)` query with `strategy`, in parallel.
///
/// Each query gets its own traversal state, so the shared graph is only read.
/// Results come back in query order.
pub fn solve_batch<G>(graph: &G, queries: &[(VertexId, VertexId)], strategy: Strategy) -> Vec<Option<Path>>
where
    G: Graph + Sync + ?Sized,
{
    let results: Vec<Option<Path>> = queries
        .par_iter()
        .map(|&(source, target)| strategy.run(graph, source, target))
        .collect();

    debug!(
        %strategy,
        queries = queries.len(),
        found = results.iter().filter(|r| r.is_some()).count(),
        "batch finished"
    );
    results
}
