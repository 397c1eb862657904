use std::io::{Read, Write};

use gradus::{
    algo::{toposort, TopoSort},
    core::marker::Directed,
};
use log::debug;

use crate::{
    commands::common::{one_based, read_graph, write_line},
    input::Tokens,
};

/// Prints the vertices in a topological order, or `-1` if the graph has a
/// cycle.
pub fn run(input: impl Read, output: &mut impl Write) -> anyhow::Result<()> {
    let mut tokens = Tokens::read(input)?;
    let graph = read_graph::<Directed>(&mut tokens)?;

    match TopoSort::on(&graph).dfs().run() {
        Ok(order) => write_line(output, order.iter().map(one_based))?,
        Err(toposort::Error::Cycle(cycle)) => {
            debug!("cycle through {:?}", cycle.vertices());
            writeln!(output, "-1")?;
        }
        Err(error) => anyhow::bail!("{error}"),
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
    fn order() {
        let output = solve("4 4\n1 2\n1 3\n3 2\n2 4\n");
        assert_eq!(output, "1 3 2 4\n");
    }

    #[test]
    fn cycle() {
        assert_eq!(solve("3 3\n1 2\n2 3\n3 1\n"), "-1\n");
    }
}
