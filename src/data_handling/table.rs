//! CSV export of per-vertex weights and predecessors

use std::io::Write;
use std::path::Path;

use crate::graph::{TraversalState, INFINITE};

/// Writes one `vertex,weight,predecessor` record per vertex. Unreached
/// weights and missing predecessors are written as empty fields.
pub fn write_weight_table<W: Write>(writer: W, state: &TraversalState) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(["vertex", "weight", "predecessor"])?;

    for v in 0..state.vertex_count() as u32 {
        let weight = match state.weight(v) {
            INFINITE => String::new(),
            w => w.to_string(),
        };
        let pred = state
            .predecessor(v)
            .map(|p| p.to_string())
            .unwrap_or_default();
        writer.write_record([v.to_string(), weight, pred])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn save_weight_table(path: &Path, state: &TraversalState) -> Result<(), csv::Error> {
    let file = std::fs::File::create(path)?;
    write_weight_table(file, state)
}
