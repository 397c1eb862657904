use std::{fmt::Display, io::Write};

use anyhow::Context;
use gradus::{
    core::{id::IdType, marker::EdgeType, EdgeSet, VertexSet},
    puzzle::Grid,
    storage::AdjList,
};
use log::debug;

use crate::input::Tokens;

/// Reads `n m` followed by `m` edges of one-based vertices.
pub fn read_graph<Ty: EdgeType>(tokens: &mut Tokens) -> anyhow::Result<AdjList<(), Ty>> {
    let (mut graph, edge_count) = read_header(tokens)?;
    read_edges(tokens, &mut graph, edge_count)?;
    Ok(graph)
}

/// Reads `n m` and creates a graph with `n` vertices.
pub fn read_header<E, Ty: EdgeType>(tokens: &mut Tokens) -> anyhow::Result<(AdjList<E, Ty>, usize)> {
    let vertex_count = tokens.next("vertex count")?;
    let edge_count = tokens.next("edge count")?;

    Ok((AdjList::with_vertices(vertex_count), edge_count))
}

pub fn read_edges<Ty: EdgeType>(
    tokens: &mut Tokens,
    graph: &mut AdjList<(), Ty>,
    edge_count: usize,
) -> anyhow::Result<()> {
    let vertex_count = graph.vertex_count();

    for i in 0..edge_count {
        let src = tokens.vertex(vertex_count)?;
        let dst = tokens.vertex(vertex_count)?;
        graph
            .try_add_edge(src, dst, ())
            .with_context(|| format!("failed to add edge {}", i + 1))?;
    }

    debug!(
        "read graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    Ok(())
}

/// Reads `h w` followed by `h * w` values of a grid.
pub fn read_grid<T: std::str::FromStr>(
    tokens: &mut Tokens,
    expected: &'static str,
) -> anyhow::Result<Grid<T>> {
    let rows = tokens.next::<usize>("grid height")?;
    let cols = tokens.next::<usize>("grid width")?;

    let values = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| tokens.next(expected))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Grid::from_rows(values)?)
}

/// One-based number of a vertex or edge.
pub fn one_based<I: IdType>(id: &I) -> usize {
    id.as_usize() + 1
}

/// Writes the items on one line, separated by spaces.
pub fn write_line<W, I>(output: &mut W, items: I) -> anyhow::Result<()>
where
    W: Write,
    I: IntoIterator,
    I::Item: Display,
{
    let mut first = true;

    for item in items {
        if !first {
            write!(output, " ")?;
        }
        write!(output, "{item}")?;
        first = false;
    }

    writeln!(output)?;
    Ok(())
}

#[cfg(test)]
pub fn run_on<F>(command: F, input: &str) -> String
where
    F: FnOnce(&[u8], &mut Vec<u8>) -> anyhow::Result<()>,
{
    let mut output = Vec::new();
    command(input.as_bytes(), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[cfg(test)]
mod tests {
    use gradus::core::marker::Undirected;

    use super::*;

    #[test]
    fn graph_from_tokens() {
        let mut tokens = Tokens::new("3 2\n1 2\n2 3\n");
        let graph = read_graph::<Undirected>(&mut tokens).unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn missing_edges() {
        let mut tokens = Tokens::new("3 2\n1 2\n");
        assert!(read_graph::<Undirected>(&mut tokens).is_err());
    }

    #[test]
    fn grid_from_tokens() {
        let mut tokens = Tokens::new("2 3\n1 2 3\n4 5 6\n");
        let grid = read_grid::<u8>(&mut tokens, "height").unwrap();

        assert_eq!(grid.dimensions(), (2, 3));
        assert_eq!(grid.row(1), &[4, 5, 6]);
    }

    #[test]
    fn line() {
        let mut output = Vec::new();
        write_line(&mut output, [1, 2, 3]).unwrap();
        write_line(&mut output, Vec::<usize>::new()).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "1 2 3\n\n");
    }
}
