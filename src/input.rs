//! Text input for graphs: `A-B` edge strings, integer weight strings and
//! edge-list documents with one `A-B weight` entry per line.
//!
//! ```text
//! # office network
//! A-B 4
//! B - C : 2
//! A-C,-1
//! ```
//!
//! In a document, `#` starts a comment wherever it appears, so labels read
//! from an edge list cannot contain `#`. Build the [`Graph`] directly for such
//! labels.
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::graph::{Edge, Graph, GraphError, Weight};

static EDGE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<edge>.+?)\s*[:,\s]\s*(?P<weight>[+-]?\d+)$").expect("edge line pattern")
});

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("both an edge and a weight are required")]
    Missing,
    #[error("edge {0:?} should have the form A-B")]
    EdgeFormat(String),
    #[error("weight {0:?} must be an integer")]
    Weight(String),
    #[error("expected `A-B weight`, got {0:?}")]
    Syntax(String),
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<InputError>,
    },
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Parses an `A-B` edge string and a separate weight string.
///
/// Labels are trimmed. An empty label such as in `A-` is not caught here;
/// [`Graph::push_edge`] rejects it.
pub fn parse_edge(edge_text: &str, weight_text: &str) -> Result<Edge, InputError> {
    let edge_text = edge_text.trim();
    let weight_text = weight_text.trim();
    if edge_text.is_empty() || weight_text.is_empty() {
        return Err(InputError::Missing);
    }

    let (a, b) = match edge_text.split('-').collect::<Vec<_>>().as_slice() {
        [a, b] => (a.trim(), b.trim()),
        _ => return Err(InputError::EdgeFormat(edge_text.to_owned())),
    };
    let weight = weight_text
        .parse::<Weight>()
        .map_err(|_| InputError::Weight(weight_text.to_owned()))?;

    Ok(Edge::new(a, b, weight))
}

/// Parses a single `A-B weight` entry. The weight may be separated by
/// whitespace, `:` or `,`.
pub fn parse_line(line: &str) -> Result<Edge, InputError> {
    let line = line.trim();
    let captures = EDGE_LINE
        .captures(line)
        .ok_or_else(|| InputError::Syntax(line.to_owned()))?;
    parse_edge(&captures["edge"], &captures["weight"])
}

/// Validates and appends one edge given as separate edge and weight text.
pub fn add_edge_text(
    graph: &mut Graph,
    edge_text: &str,
    weight_text: &str,
) -> Result<Edge, InputError> {
    let edge = parse_edge(edge_text, weight_text)?;
    graph.push_edge(edge.clone())?;
    log::debug!("added edge {}", edge);
    Ok(edge)
}

/// Appends every entry of an edge-list document to `graph`. Blank lines and
/// `#` comments are skipped. Stops at the first bad line; edges from earlier
/// lines stay in the graph.
pub fn extend_from_edge_list(graph: &mut Graph, text: &str) -> Result<usize, InputError> {
    let mut added = 0;
    for (idx, raw) in text.lines().enumerate() {
        let content = raw.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }
        let at_line = |source: InputError| InputError::Line {
            line: idx + 1,
            source: Box::new(source),
        };
        let edge = parse_line(content).map_err(at_line)?;
        graph
            .push_edge(edge)
            .map_err(|err| at_line(InputError::Graph(err)))?;
        added += 1;
    }
    Ok(added)
}

pub fn parse_edge_list(text: &str) -> Result<Graph, InputError> {
    let mut graph = Graph::new();
    extend_from_edge_list(&mut graph, text)?;
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_and_weight_fields() {
        assert_eq!(parse_edge(" A - B ", " 12 "), Ok(Edge::new("A", "B", 12)));
        assert_eq!(parse_edge("x-y", "-3"), Ok(Edge::new("x", "y", -3)));
        assert_eq!(parse_edge("", "1"), Err(InputError::Missing));
        assert_eq!(parse_edge("A-B", "  "), Err(InputError::Missing));
        assert_eq!(
            parse_edge("A-B-C", "1"),
            Err(InputError::EdgeFormat("A-B-C".to_owned()))
        );
        assert_eq!(
            parse_edge("AB", "1"),
            Err(InputError::EdgeFormat("AB".to_owned()))
        );
        assert_eq!(
            parse_edge("A-B", "1.5"),
            Err(InputError::Weight("1.5".to_owned()))
        );
    }

    #[test]
    fn empty_label_is_refused_by_the_graph() {
        let mut graph = Graph::new();
        let err = add_edge_text(&mut graph, "A-", "3").unwrap_err();

        assert!(matches!(err, InputError::Graph(GraphError::EmptyLabel { .. })));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn line_separators() {
        assert_eq!(parse_line("A-B 4"), Ok(Edge::new("A", "B", 4)));
        assert_eq!(parse_line("A - B : -2"), Ok(Edge::new("A", "B", -2)));
        assert_eq!(parse_line("A-B,0"), Ok(Edge::new("A", "B", 0)));
        assert_eq!(parse_line("A-B -7"), Ok(Edge::new("A", "B", -7)));
        assert_eq!(
            parse_line("A-B"),
            Err(InputError::Syntax("A-B".to_owned()))
        );
    }

    #[test]
    fn edge_list_document() {
        let graph = parse_edge_list(
            "# triangle\n\
             A-B 1\n\
             \n\
             B-C 2   # cheap\n\
             A-C 3\n",
        )
        .unwrap();

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn hash_in_a_label_starts_a_comment() {
        let err = parse_edge_list("A-B#2 5\n").unwrap_err();

        assert_eq!(
            err,
            InputError::Line {
                line: 1,
                source: Box::new(InputError::Syntax("A-B".to_owned())),
            }
        );
    }

    #[test]
    fn weights_at_the_i64_limits() {
        assert_eq!(
            parse_line("A-B 9223372036854775807"),
            Ok(Edge::new("A", "B", Weight::MAX))
        );
        assert_eq!(
            parse_line("A-B -9223372036854775808"),
            Ok(Edge::new("A", "B", Weight::MIN))
        );
        assert_eq!(
            parse_line("A-B 9223372036854775808"),
            Err(InputError::Weight("9223372036854775808".to_owned()))
        );
    }

    #[test]
    fn edge_list_reports_line_numbers() {
        let err = parse_edge_list("A-B 1\nB-C two\n").unwrap_err();

        assert_eq!(
            err,
            InputError::Line {
                line: 2,
                source: Box::new(InputError::Syntax("B-C two".to_owned())),
            }
        );
        assert_eq!(err.to_string(), "line 2: expected `A-B weight`, got \"B-C two\"");
    }
}
