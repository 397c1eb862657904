use std::io::{Read, Write};

use anyhow::Context;
use gradus::{
    algo::is_bipartite,
    core::{error::AddEdgeErrorKind, marker::Undirected},
    storage::AdjMatrix,
};
use log::debug;

use crate::input::Tokens;

/// Prints `YES` if the graph is bipartite, `NO` otherwise.
pub fn run(input: impl Read, output: &mut impl Write) -> anyhow::Result<()> {
    let mut tokens = Tokens::read(input)?;

    let vertex_count = tokens.next("vertex count")?;
    let edge_count = tokens.next::<usize>("edge count")?;
    let mut graph = AdjMatrix::<(), Undirected>::with_vertices(vertex_count);

    for i in 0..edge_count {
        let src = tokens.vertex(vertex_count)?;
        let dst = tokens.vertex(vertex_count)?;

        match graph.try_add_edge(src, dst, ()) {
            Ok(_) => {}
            // A repeated edge does not change the coloring.
            Err(error) if error.kind == AddEdgeErrorKind::MultiEdge => {
                debug!("skipping repeated edge {}", i + 1);
            }
            Err(error) => {
                return Err(error).with_context(|| format!("failed to add edge {}", i + 1));
            }
        }
    }

    let answer = if is_bipartite(&graph) { "YES" } else { "NO" };
    writeln!(output, "{answer}")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::commands::common::run_on;

    use super::*;

    fn solve(input: &str) -> String {
        run_on(|input, output| run(input, output), input)
    }

    #[test]
    fn even_cycle() {
        assert_eq!(solve("4 4\n1 2\n2 3\n3 4\n4 1\n"), "YES\n");
    }

    #[test]
    fn triangle() {
        assert_eq!(solve("3 3\n1 2\n2 3\n3 1\n"), "NO\n");
    }

    #[test]
    fn repeated_edges_and_components() {
        assert_eq!(solve("5 3\n1 2\n2 1\n4 5\n"), "YES\n");
    }

    #[test]
    fn self_loop() {
        assert_eq!(solve("2 1\n1 1\n"), "NO\n");
    }
}
