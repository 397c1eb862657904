use std::io::{Read, Write};

use gradus::{algo::augmentation_count, core::marker::Undirected};

use crate::{commands::common::read_graph, input::Tokens};

/// Prints the minimum number of edges to add so that the graph has no
/// bridge.
pub fn run(input: impl Read, output: &mut impl Write) -> anyhow::Result<()> {
    let mut tokens = Tokens::read(input)?;
    let graph = read_graph::<Undirected>(&mut tokens)?;

    writeln!(output, "{}", augmentation_count(&graph))?;
    Ok(())
}
