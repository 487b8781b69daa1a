use std::collections::HashMap;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::{Arg, ArgAction, Command};
use tracing::Level;

use mazegraph::data_handling::edge_list::read_edge_list;
use mazegraph::data_handling::maze_file::read_maze;
use mazegraph::graph::{Digraph, Graph, TraversalState};
use mazegraph::maze::{MazeFormat, MazeGraph};
use mazegraph::util::logging;

fn main() {
    let matches = Command::new("graph_info")
        .about("Print statistics about a maze graph or an edge-list graph")
        .arg(
            Arg::new("maze")
                .long("maze")
                .value_name("FILE")
                .help("Maze file to map to a graph")
                .conflicts_with("graph")
                .required_unless_present("graph"),
        )
        .arg(
            Arg::new("graph")
                .long("graph")
                .value_name("FILE")
                .help("Edge-list file"),
        )
        .arg(
            Arg::new("dump")
                .long("dump")
                .action(ArgAction::SetTrue)
                .help("Print every vertex and edge with its (fresh) traversal state"),
        )
        .get_matches();

    logging::init(Level::WARN);

    // Measure the time it takes to build the graph
    let start = Instant::now();
    let graph: Digraph = if let Some(path) = matches.get_one::<String>("maze") {
        println!("Reading maze from file: {}", path);
        match read_maze(&PathBuf::from(path), &MazeFormat::default()) {
            Ok(maze) => {
                println!("Maze size: {} x {}", maze.rows(), maze.cols());
                MazeGraph::build(&maze).into_graph()
            }
            Err(e) => {
                eprintln!("Error reading maze file: {}", e);
                process::exit(1);
            }
        }
    } else {
        let path = matches.get_one::<String>("graph").unwrap();
        println!("Reading graph from file: {}", path);
        match read_edge_list(&PathBuf::from(path)) {
            Ok(list) => {
                println!("Designated source {} and target {}", list.source, list.target);
                list.to_graph()
            }
            Err(e) => {
                eprintln!("Error reading graph file: {}", e);
                process::exit(1);
            }
        }
    };
    let elapsed = start.elapsed();

    // Basic graph statistics
    println!("Graph loaded in {:.3} seconds", elapsed.as_secs_f64());
    println!("Number of vertices: {}", graph.size());
    println!("Number of edges: {}", graph.edge_count());

    if graph.size() == 0 {
        println!("\nGraph info summary complete");
        return;
    }

    let mut min_degree = graph.max_degree();
    let mut degree_distribution = HashMap::new();
    for v in graph.vertices() {
        let degree = graph.neighbors(v).len();
        min_degree = min_degree.min(degree);
        *degree_distribution.entry(degree).or_insert(0) += 1;
    }

    println!(
        "Average out-degree: {:.2}",
        graph.edge_count() as f64 / graph.size() as f64
    );
    println!("Minimum out-degree: {}", min_degree);
    println!("Maximum out-degree: {}", graph.max_degree());

    println!("\nDegree distribution:");
    let mut distribution: Vec<_> = degree_distribution.into_iter().collect();
    distribution.sort_by(|a, b| b.1.cmp(&a.1)); // Sort by frequency (descending)
    for (degree, count) in distribution {
        println!(
            "  {} vertices with out-degree {} ({:.2}%)",
            count,
            degree,
            (count as f64 / graph.size() as f64) * 100.0
        );
    }

    let negative_edges = graph.edges().filter(|(_, e)| e.weight < 0).count();
    if negative_edges > 0 {
        println!("\nNote: {} edges have negative weight; Dijkstra will refuse this graph", negative_edges);
    }
    let self_loops = graph.edges().filter(|(_, e)| e.source == e.target).count();
    if self_loops > 0 {
        println!("\nNote: Detected {} self-loops in the graph", self_loops);
    }

    // Sample some vertices and their neighborhoods
    println!("\nSample of neighborhoods:");
    for v in graph.vertices().take(5) {
        let label = match graph.cell(v) {
            Some((row, col)) => format!("Vertex {} at ({}, {})", v, row, col),
            None => format!("Vertex {}", v),
        };
        println!("{} -> {:?}", label, graph.neighbors(v));
    }

    if matches.get_flag("dump") {
        println!();
        print!("{}", TraversalState::for_graph(&graph).dump(&graph));
    }

    println!("\nGraph info summary complete");
}
