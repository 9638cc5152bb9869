use std::io::Read;
use std::str::{FromStr, SplitWhitespace};

use log::debug;

use crate::graph::{DirectedGraph, MutableGraph};

/// Errors raised while reading a routing problem
#[derive(thiserror::Error, Debug)]
pub enum InputError {
    #[error("Unexpected end of input: missing {0}")]
    MissingToken(&'static str),

    #[error("Invalid {field}: {token:?}")]
    InvalidNumber { field: &'static str, token: String },

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Graph(#[from] crate::Error),
}

/// A parsed routing problem: the network plus one query
#[derive(Debug, Clone)]
pub struct RouteProblem {
    /// Declared node count, reported as given
    pub node_count: usize,
    /// Declared edge count, equal to the number of edges read
    pub edge_count: usize,
    pub graph: DirectedGraph<String, f64>,
    pub source: String,
    pub target: String,
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn next(&mut self, field: &'static str) -> Result<&'a str, InputError> {
        self.inner.next().ok_or(InputError::MissingToken(field))
    }

    fn number<T: FromStr>(&mut self, field: &'static str) -> Result<T, InputError> {
        let token = self.next(field)?;
        token.parse().map_err(|_| InputError::InvalidNumber {
            field,
            token: token.to_string(),
        })
    }
}

/// Parses `<nodes> <edges>`, `edges` triples `<from> <to> <weight>` and
/// finally `<source> <target>`. Tokens are whitespace separated.
///
/// Vertex tokens are kept verbatim and are never read as integers, so edge
/// endpoints such as `01` and `1` name different vertices and non-numeric
/// names like `depot` are accepted. The node count is only reported back,
/// never used to size anything.
pub fn parse_problem(text: &str) -> Result<RouteProblem, InputError> {
    let mut tokens = Tokens {
        inner: text.split_whitespace(),
    };

    let node_count: usize = tokens.number("node count")?;
    let edge_count: usize = tokens.number("edge count")?;

    let mut graph = DirectedGraph::new();
    for _ in 0..edge_count {
        let from = tokens.next("edge origin")?;
        let to = tokens.next("edge destination")?;
        let weight: f64 = tokens.number("edge weight")?;
        graph.add_edge(from.to_string(), to.to_string(), weight)?;
    }

    let source = tokens.next("source")?.to_string();
    let target = tokens.next("target")?.to_string();

    debug!(
        "Parsed problem: {} nodes declared, {} edges, {} -> {}",
        node_count, edge_count, source, target
    );

    Ok(RouteProblem {
        node_count,
        edge_count,
        graph,
        source,
        target,
    })
}

/// Reads the whole of `reader` and parses it with [`parse_problem`]
pub fn read_problem<R: Read>(mut reader: R) -> Result<RouteProblem, InputError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_problem(&text)
}
