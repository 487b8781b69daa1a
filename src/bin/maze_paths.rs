use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::{Arg, ArgAction, Command};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, Level};

use mazegraph::data_handling::maze_file::read_maze;
use mazegraph::graph::{Cell, Graph, Path, VertexId};
use mazegraph::maze::generate::random_maze;
use mazegraph::maze::{Maze, MazeFormat, MazeGraph};
use mazegraph::search::Strategy;
use mazegraph::util::batch::solve_batch;
use mazegraph::util::cli::{parse_cell, parse_density, parse_dimensions};
use mazegraph::util::logging;

fn main() {
    let matches = Command::new("maze_paths")
        .about("Find paths through a maze with depth-first and breadth-first search")
        .arg(
            Arg::new("maze")
                .long("maze")
                .short('m')
                .value_name("FILE")
                .help("Path to a maze file (rows, cols, then O/X cells)")
                .required_unless_present("random")
                .conflicts_with("random"),
        )
        .arg(
            Arg::new("random")
                .long("random")
                .value_name("ROWSxCOLS")
                .value_parser(parse_dimensions)
                .help("Generate a random maze instead of reading one"),
        )
        .arg(
            Arg::new("density")
                .long("density")
                .value_parser(parse_density)
                .default_value("0.7")
                .help("Fraction of open cells in a random maze"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_parser(clap::value_parser!(u64))
                .default_value("0")
                .help("Seed for random mazes and batch queries"),
        )
        .arg(
            Arg::new("start")
                .long("start")
                .value_name("ROW,COL")
                .value_parser(parse_cell)
                .help("Start cell [default: top-left]"),
        )
        .arg(
            Arg::new("goal")
                .long("goal")
                .value_name("ROW,COL")
                .value_parser(parse_cell)
                .help("Goal cell [default: bottom-right]"),
        )
        .arg(
            Arg::new("algorithm")
                .long("algorithm")
                .short('a')
                .value_parser(["recursive-dfs", "stack-dfs", "shortest-dfs", "bfs", "all"])
                .default_value("all")
                .help("Search strategy to run"),
        )
        .arg(
            Arg::new("steps")
                .long("steps")
                .action(ArgAction::SetTrue)
                .help("Print the maze once per step of each path found"),
        )
        .arg(
            Arg::new("queries")
                .long("queries")
                .value_parser(clap::value_parser!(usize))
                .help("Also time this many random start/goal queries in parallel"),
        )
        .get_matches();

    logging::init(Level::INFO);

    let seed = *matches.get_one::<u64>("seed").unwrap();
    let mut rng = StdRng::seed_from_u64(seed);

    let start = Instant::now();
    let maze = match matches.get_one::<String>("maze") {
        Some(path) => match read_maze(&PathBuf::from(path), &MazeFormat::default()) {
            Ok(maze) => maze,
            Err(e) => {
                eprintln!("Error reading maze file {}: {}", path, e);
                process::exit(1);
            }
        },
        None => {
            let &(rows, cols) = matches.get_one::<(usize, usize)>("random").unwrap();
            let density = *matches.get_one::<f64>("density").unwrap();
            random_maze(rows, cols, density, &mut rng)
        }
    };
    let maze_graph = MazeGraph::build(&maze);
    info!(
        rows = maze.rows(),
        cols = maze.cols(),
        vertices = maze_graph.graph().size(),
        "maze ready in {:.3} seconds",
        start.elapsed().as_secs_f64()
    );

    let Some((top_left, bottom_right)) = maze.corners() else {
        eprintln!("The maze has no cells");
        process::exit(1);
    };
    let start_cell = matches.get_one::<Cell>("start").copied().unwrap_or(top_left);
    let goal_cell = matches.get_one::<Cell>("goal").copied().unwrap_or(bottom_right);

    let source = endpoint(&maze_graph, start_cell, "start");
    let target = endpoint(&maze_graph, goal_cell, "goal");

    match maze.render(goal_cell, start_cell) {
        Ok(text) => println!("\n{text}"),
        Err(e) => eprintln!("Error rendering maze: {}", e),
    }

    let algorithm = matches.get_one::<String>("algorithm").unwrap();
    let strategies: Vec<Strategy> = if algorithm == "all" {
        Strategy::ALL.to_vec()
    } else {
        // the value parser only admits known names
        vec![algorithm.parse().unwrap()]
    };
    let show_steps = matches.get_flag("steps");

    for strategy in strategies {
        let start = Instant::now();
        let path = strategy.run(maze_graph.graph(), source, target);
        let elapsed = start.elapsed();

        println!("== {strategy} ({:.3} ms)", elapsed.as_secs_f64() * 1000.0);
        match path {
            Some(path) => {
                println!("Path with {} steps: {}", path.edge_count(), path);
                if show_steps {
                    print_steps(&maze, &maze_graph, &path, goal_cell);
                }
            }
            None => println!("No path exists."),
        }
    }

    if let Some(&count) = matches.get_one::<usize>("queries") {
        let n = maze_graph.graph().size() as VertexId;
        let queries: Vec<(VertexId, VertexId)> = (0..count)
            .map(|_| (rng.random_range(0..n), rng.random_range(0..n)))
            .collect();

        let start = Instant::now();
        let results = solve_batch(maze_graph.graph(), &queries, Strategy::Bfs);
        let elapsed = start.elapsed();
        let found = results.iter().filter(|r| r.is_some()).count();
        println!(
            "ran {} bfs queries in {}.{:03} seconds ({} QPS), {} connected",
            count,
            elapsed.as_secs(),
            elapsed.subsec_millis(),
            count as f64 / elapsed.as_secs_f64(),
            found
        );
    }
}

/// looks up the vertex for a cell, exiting on blocked or out-of-range cells
fn endpoint(maze_graph: &MazeGraph, (row, col): Cell, what: &str) -> VertexId {
    match maze_graph.vertex_at(row, col) {
        Ok(Some(v)) => v,
        Ok(None) => {
            eprintln!("The {} cell ({}, {}) is blocked", what, row, col);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Bad {} cell: {}", what, e);
            process::exit(1);
        }
    }
}

fn print_steps(maze: &Maze, maze_graph: &MazeGraph, path: &Path, goal: Cell) {
    for &v in path.vertices() {
        let Some(cell) = maze_graph.cell_of(v) else {
            continue;
        };
        match maze.render(goal, cell) {
            Ok(text) => println!("\n{text}"),
            Err(e) => eprintln!("Error rendering maze: {}", e),
        }
    }
}
