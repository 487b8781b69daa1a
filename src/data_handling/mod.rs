//! Reading mazes and weighted graphs from text, writing result tables

pub mod edge_list;
pub mod maze_file;
pub mod table;

use thiserror::Error;

use crate::graph::VertexId;
use crate::maze::MazeError;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid maze: {0}")]
    Maze(#[from] MazeError),
    #[error("unexpected end of input while reading {what}")]
    MissingToken { what: &'static str },
    #[error("could not parse {what} from {token:?}")]
    InvalidToken { what: &'static str, token: String },
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: i64, vertex_count: usize },
    #[error("a graph of {vertex_count} vertices does not fit 32-bit vertex ids")]
    TooManyVertices { vertex_count: usize },
    #[error("edge {from} -> {to} appears more than once")]
    DuplicateEdge { from: VertexId, to: VertexId },
}

/// whitespace-separated token reader shared by the text formats
struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Tokens<'a> {
        Tokens {
            inner: text.split_whitespace(),
        }
    }

    fn next_token(&mut self, what: &'static str) -> Result<&'a str, InputError> {
        self.inner.next().ok_or(InputError::MissingToken { what })
    }

    fn try_next(&mut self) -> Option<&'a str> {
        self.inner.next()
    }

    fn parse<T: std::str::FromStr>(&mut self, what: &'static str) -> Result<T, InputError> {
        let token = self.next_token(what)?;
        parse_token(token, what)
    }
}

fn parse_token<T: std::str::FromStr>(token: &str, what: &'static str) -> Result<T, InputError> {
    token.parse().map_err(|_| InputError::InvalidToken {
        what,
        token: token.to_string(),
    })
}

/// converts a signed id read from a file into a vertex of a graph with
/// `vertex_count` vertices
fn vertex_id(raw: i64, vertex_count: usize) -> Result<VertexId, InputError> {
    let out_of_range = InputError::VertexOutOfRange {
        vertex: raw,
        vertex_count,
    };
    if raw < 0 || raw as u64 >= vertex_count as u64 {
        return Err(out_of_range);
    }
    VertexId::try_from(raw).map_err(|_| out_of_range)
}
