use std::io::{Read, Write};

use anyhow::Context;
use gradus::{
    algo::{shortest_paths, ShortestPaths},
    core::{marker::Directed, VertexSet},
    storage::AdjList,
};
use log::debug;

use crate::{commands::common::read_header, input::Tokens};

/// For every query, prints the minimum number of edges that need to be
/// reversed to get from the first vertex to the second, or `-1` if that is
/// not possible.
pub fn run(input: impl Read, output: &mut impl Write) -> anyhow::Result<()> {
    let mut tokens = Tokens::read(input)?;

    // Each edge can be used as is for free or reversed for a cost of one.
    let (mut graph, edge_count): (AdjList<u32, Directed>, _) = read_header(&mut tokens)?;
    let vertex_count = graph.vertex_count();

    for i in 0..edge_count {
        let src = tokens.vertex(vertex_count)?;
        let dst = tokens.vertex(vertex_count)?;
        graph
            .try_add_edge(src, dst, 0)
            .and_then(|_| graph.try_add_edge(dst, src, 1))
            .with_context(|| format!("failed to add edge {}", i + 1))?;
    }

    let query_count = tokens.next::<usize>("query count")?;
    debug!("answering {query_count} queries");

    for _ in 0..query_count {
        let start = tokens.vertex(vertex_count)?;
        let end = tokens.vertex(vertex_count)?;

        let paths = ShortestPaths::on(&graph).goal(end).zero_one().run(start);

        match paths {
            Ok(paths) => writeln!(output, "{}", paths.dist(end).copied().unwrap_or_default())?,
            Err(shortest_paths::Error::GoalNotReached) => writeln!(output, "-1")?,
            Err(error) => return Err(error.into()),
        }
    }

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
    fn queries() {
        let input = "4 3\n1 2\n3 2\n3 4\n3\n1 4\n4 1\n2 2\n";
        assert_eq!(solve(input), "1\n2\n0\n");
    }

    #[test]
    fn disconnected() {
        assert_eq!(solve("3 1\n1 2\n1\n1 3\n"), "-1\n");
    }
}
