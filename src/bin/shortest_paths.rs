use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::{Arg, ArgAction, Command};
use tracing::{info, Level};

use mazegraph::data_handling::edge_list::read_edge_list;
use mazegraph::data_handling::table::save_weight_table;
use mazegraph::graph::{Digraph, VertexId};
use mazegraph::shortest_path::{bellman_ford, dijkstra, ShortestPathTree, SolverError, Verdict};
use mazegraph::util::logging;

fn main() {
    let matches = Command::new("shortest_paths")
        .about("Single-source shortest paths with Dijkstra and Bellman-Ford")
        .arg(
            Arg::new("graph")
                .long("graph")
                .short('g')
                .value_name("FILE")
                .help("Edge-list file: V source target, then `from to weight` triples ending in -1")
                .required(true),
        )
        .arg(
            Arg::new("algorithm")
                .long("algorithm")
                .short('a')
                .value_parser(["dijkstra", "bellman-ford", "both"])
                .default_value("both")
                .help("Solver to run"),
        )
        .arg(
            Arg::new("table")
                .long("table")
                .value_name("FILE")
                .help("Write vertex,weight,predecessor CSV tables next to this path"),
        )
        .arg(
            Arg::new("dump")
                .long("dump")
                .action(ArgAction::SetTrue)
                .help("Print the full per-vertex and per-edge state after each run"),
        )
        .get_matches();

    logging::init(Level::INFO);

    let graph_path = PathBuf::from(matches.get_one::<String>("graph").unwrap());
    let start = Instant::now();
    let list = match read_edge_list(&graph_path) {
        Ok(list) => list,
        Err(e) => {
            eprintln!("Error reading graph file {}: {}", graph_path.display(), e);
            process::exit(1);
        }
    };
    let graph = list.to_graph();
    info!(
        vertices = list.vertex_count,
        edges = list.edges.len(),
        "read graph in {:.3} seconds",
        start.elapsed().as_secs_f64()
    );

    let algorithm = matches.get_one::<String>("algorithm").unwrap().as_str();
    let mut runs: Vec<(&str, Result<ShortestPathTree, SolverError>)> = Vec::new();
    if algorithm != "bellman-ford" {
        runs.push(("dijkstra", dijkstra(&graph, list.source)));
    }
    if algorithm != "dijkstra" {
        runs.push(("bellman-ford", Ok(bellman_ford(&graph, list.source))));
    }

    for (name, result) in runs {
        println!("== {name}");
        let tree = match result {
            Ok(tree) => tree,
            Err(e) => {
                println!("{name} failed: {e}");
                continue;
            }
        };
        report(&graph, &tree, list.target);

        if matches.get_flag("dump") {
            print!("{}", tree.state().dump(&graph));
        }

        if let Some(table) = matches.get_one::<String>("table") {
            let path = PathBuf::from(table).with_extension(format!("{name}.csv"));
            match save_weight_table(&path, tree.state()) {
                Ok(()) => println!("wrote weights to {}", path.display()),
                Err(e) => eprintln!("Error writing {}: {}", path.display(), e),
            }
        }
    }
}

fn report(graph: &Digraph, tree: &ShortestPathTree, target: VertexId) {
    match tree.verdict() {
        Verdict::Feasible => println!("All vertices reachable from {}", tree.source()),
        Verdict::Unreachable => println!("Some vertices are unreachable from {}", tree.source()),
        Verdict::NegativeCycle => {
            println!("A negative cycle is reachable from {}", tree.source());
            println!("No path exists.");
            return;
        }
    }

    for v in graph.vertices() {
        match tree.distance(v) {
            Some(w) => println!("  {v}: {w}"),
            None => println!("  {v}: unreachable"),
        }
    }

    match tree.path_to(target) {
        Some(path) => println!("Shortest path to {target} (weight {}): {path}", tree.weight(target)),
        None => println!("No path exists."),
    }
}
