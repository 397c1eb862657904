use std::io::{Read, Write};

use anyhow::Context;
use gradus::{
    algo::{shortest_paths, ShortestPaths},
    core::{marker::Directed, VertexSet},
    storage::AdjList,
};

use crate::{commands::common::read_header, input::Tokens};

/// Prints the length of the shortest path over weighted directed edges, or
/// `-1` if the end is unreachable. Every weight must be in
/// `0..=max_weight`.
pub fn run(input: impl Read, output: &mut impl Write, max_weight: usize) -> anyhow::Result<()> {
    let mut tokens = Tokens::read(input)?;

    let (mut graph, edge_count): (AdjList<i64, Directed>, _) = read_header(&mut tokens)?;
    let vertex_count = graph.vertex_count();
    let start = tokens.vertex(vertex_count)?;
    let end = tokens.vertex(vertex_count)?;

    for i in 0..edge_count {
        let src = tokens.vertex(vertex_count)?;
        let dst = tokens.vertex(vertex_count)?;
        let weight = tokens.next("edge weight")?;
        graph
            .try_add_edge(src, dst, weight)
            .with_context(|| format!("failed to add edge {}", i + 1))?;
    }

    let paths = ShortestPaths::on(&graph)
        .goal(end)
        .dial(max_weight)
        .run(start);

    match paths {
        Ok(paths) => writeln!(output, "{}", paths.dist(end).copied().unwrap_or_default())?,
        Err(shortest_paths::Error::GoalNotReached) => writeln!(output, "-1")?,
        Err(error) => return Err(error).context("invalid edge weights"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(input: &str, max_weight: usize) -> String {
        let mut output = Vec::new();
        run(input.as_bytes(), &mut output, max_weight).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn cheaper_detour() {
        let input = "4 4\n1 4\n1 4 10\n1 2 3\n2 3 3\n3 4 3\n";
        assert_eq!(solve(input, 10), "9\n");
    }

    #[test]
    fn zero_weights() {
        assert_eq!(solve("3 2\n1 3\n1 2 0\n2 3 0\n", 10), "0\n");
    }

    #[test]
    fn one_way() {
        assert_eq!(solve("2 1\n2 1\n1 2 5\n", 10), "-1\n");
    }

    #[test]
    fn weight_above_maximum() {
        let mut output = Vec::new();
        let input = "2 1\n1 2\n1 2 31\n";

        assert!(run(input.as_bytes(), &mut output, 30).is_err());
        assert_eq!(solve(input, 31), "31\n");
    }

    #[test]
    fn unbounded_maximum() {
        assert_eq!(solve("2 1\n1 2\n1 2 3\n", usize::MAX), "3\n");
    }

    #[test]
    fn weight_too_large_for_buckets() {
        let mut output = Vec::new();
        let input = "2 1\n1 2\n1 2 1000000000000000000\n";

        assert!(run(input.as_bytes(), &mut output, usize::MAX).is_err());
    }
}
