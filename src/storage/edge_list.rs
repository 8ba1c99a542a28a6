//! Edge-list text ingestion
//!
//! # Format
//!
//! ```text
//! n m
//! u1 v1 [extra...]
//! ...
//! um vm [extra...]
//! ```
//!
//! Vertices are `1..=n`. Trailing columns are read according to [`ParseMode`]:
//! `Weighted` reads `w`, `Capacitated` reads `c`, `WeightedCapacitated` reads `w c`
//! (the weight is also the per-unit cost for min-cost flow).

use super::graph::{EdgeAttributes, NodeId, RawGraph};
use crate::config::ParseMode;
use crate::error::{GraphError, Result};

/// Parse an edge list into a raw adjacency mapping
///
/// Every vertex `1..=n` is registered even if isolated, and each edge is appended to both
/// endpoints' lists.
///
/// # Errors
///
/// Returns [`GraphError::Parse`] if the header is malformed, fewer than `m` edge lines
/// are present, a token is not an integer, an endpoint is outside `1..=n`, or a line lacks
/// the columns `mode` requires.
///
/// # Example
///
/// ```
/// use graph_oracle::{parse_edge_list, Graph, ParseMode};
///
/// let raw = parse_edge_list("3 2\n1 2 5\n2 3 1", ParseMode::Weighted).unwrap();
/// let graph = Graph::from_raw(&raw);
/// assert_eq!(graph.num_vertices(), 3);
/// assert_eq!(graph.edges()[0].weight, 5.0);
/// ```
pub fn parse_edge_list(text: &str, mode: ParseMode) -> Result<RawGraph> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_line, header) = lines.next().ok_or_else(|| GraphError::Parse {
        line: 1,
        message: "missing `n m` header".to_string(),
    })?;
    let header = parse_numbers(header_line, header)?;
    let [n, m] = header[..] else {
        return Err(GraphError::Parse {
            line: header_line,
            message: format!("header must be `n m`, found {} values", header.len()),
        });
    };
    let n = to_count(header_line, n, "vertex count")?;
    let m = to_count(header_line, m, "edge count")?;

    let mut raw = RawGraph::new();
    for id in 1..=n {
        raw.add_vertex(NodeId(id));
    }

    let mut last_line = header_line;
    for _ in 0..m {
        let (line_no, line) = lines.next().ok_or_else(|| GraphError::Parse {
            line: last_line + 1,
            message: format!("expected {m} edge lines"),
        })?;
        last_line = line_no;

        let values = parse_numbers(line_no, line)?;
        let required = 2 + mode.extra_columns();
        if values.len() < required {
            return Err(GraphError::Parse {
                line: line_no,
                message: format!(
                    "{mode} edge needs {required} columns, found {}",
                    values.len()
                ),
            });
        }

        let u = endpoint(line_no, values[0], n)?;
        let v = endpoint(line_no, values[1], n)?;
        let attributes = match mode {
            ParseMode::Plain => None,
            #[allow(clippy::cast_precision_loss)]
            ParseMode::Weighted => Some(EdgeAttributes {
                weight: Some(values[2] as f64),
                ..EdgeAttributes::default()
            }),
            ParseMode::Capacitated => Some(EdgeAttributes {
                capacity: Some(values[2]),
                ..EdgeAttributes::default()
            }),
            #[allow(clippy::cast_precision_loss)]
            ParseMode::WeightedCapacitated => Some(EdgeAttributes {
                weight: Some(values[2] as f64),
                capacity: Some(values[3]),
                cost: Some(values[2]),
            }),
        };
        raw.add_edge(u, v, attributes);
    }

    Ok(raw)
}

/// Read and parse an edge-list file
///
/// # Errors
///
/// Returns an error if the file cannot be read or its contents fail [`parse_edge_list`]
#[cfg(feature = "io")]
pub async fn read_edge_list<P: AsRef<std::path::Path>>(
    path: P,
    mode: ParseMode,
) -> anyhow::Result<RawGraph> {
    use anyhow::Context;

    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read edge list {}", path.display()))?;

    parse_edge_list(&text, mode)
        .with_context(|| format!("Failed to parse edge list {}", path.display()))
}

fn parse_numbers(line_no: usize, line: &str) -> Result<Vec<i64>> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|_| GraphError::Parse {
                line: line_no,
                message: format!("`{token}` is not an integer"),
            })
        })
        .collect()
}

fn to_count(line_no: usize, value: i64, what: &str) -> Result<u32> {
    u32::try_from(value).map_err(|_| GraphError::Parse {
        line: line_no,
        message: format!("{what} must be a non-negative integer, found {value}"),
    })
}

fn endpoint(line_no: usize, value: i64, n: u32) -> Result<NodeId> {
    match u32::try_from(value) {
        Ok(id) if (1..=n).contains(&id) => Ok(NodeId(id)),
        _ => Err(GraphError::Parse {
            line: line_no,
            message: format!("vertex {value} outside 1..={n}"),
        }),
    }
}
