use std::io::{Read, Write};

use anyhow::Context;
use gradus::{
    algo::StronglyConnectedComponents,
    core::{marker::Directed, VertexSet},
};

use crate::{
    commands::common::{read_graph, write_line},
    input::Tokens,
};

/// Prints the number of strongly connected components and then the
/// one-based component label of every vertex.
pub fn run(input: impl Read, output: &mut impl Write) -> anyhow::Result<()> {
    let mut tokens = Tokens::read(input)?;
    let graph = read_graph::<Directed>(&mut tokens)?;

    let components = StronglyConnectedComponents::on(&graph).kosaraju().run();

    let labels = graph
        .vertices_by_id()
        .map(|v| {
            components
                .component_of(&v)
                .map(|index| index + 1)
                .with_context(|| format!("vertex {v:?} has no component"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    writeln!(output, "{}", components.len())?;
    write_line(output, labels)?;

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
    fn condensation_order() {
        // {1, 2} -> {3, 4} -> {5}
        let input = "5 6\n1 2\n2 1\n2 3\n3 4\n4 3\n4 5\n";
        assert_eq!(solve(input), "3\n1 1 2 2 3\n");
    }

    #[test]
    fn isolated() {
        // Components are labeled in reverse finishing order of the first pass.
        assert_eq!(solve("2 0\n"), "2\n2 1\n");
        assert_eq!(solve("3 0\n"), "3\n3 2 1\n");
    }

    #[test]
    fn isolated_after_edge() {
        // Finishing order is 2, 1, 3, 4.
        assert_eq!(solve("4 1\n1 2\n"), "4\n3 4 2 1\n");
    }
}
