use std::io::{Read, Write};

use gradus::{
    algo::{shortest_paths, ShortestPaths},
    core::{marker::Undirected, VertexSet},
    storage::AdjList,
};

use crate::{
    commands::common::{one_based, read_edges, read_header, write_line},
    input::Tokens,
};

/// Prints the number of edges on a shortest path followed by its vertices,
/// or `-1` if the end is unreachable.
pub fn run(input: impl Read, output: &mut impl Write) -> anyhow::Result<()> {
    let mut tokens = Tokens::read(input)?;

    let (mut graph, edge_count): (AdjList<(), Undirected>, _) = read_header(&mut tokens)?;
    let start = tokens.vertex(graph.vertex_count())?;
    let end = tokens.vertex(graph.vertex_count())?;
    read_edges(&mut tokens, &mut graph, edge_count)?;

    let paths = ShortestPaths::on(&graph)
        .unit_weight()
        .bfs()
        .goal(end)
        .run(start);

    match paths {
        Ok(paths) => {
            let path = paths.path_to(end).unwrap_or_default();
            writeln!(output, "{}", path.len().saturating_sub(1))?;
            write_line(output, path.iter().map(one_based))?;
        }
        Err(shortest_paths::Error::GoalNotReached) => writeln!(output, "-1")?,
        Err(error) => return Err(error.into()),
    }

    Ok(())
}
