use std::io::{Read, Write};

use gradus::{algo::ConnectedComponents, core::marker::Undirected};

use crate::{
    commands::common::{one_based, read_graph, write_line},
    input::Tokens,
};

/// Prints the number of connected components, then the size and the
/// members of each.
pub fn run(input: impl Read, output: &mut impl Write) -> anyhow::Result<()> {
    let mut tokens = Tokens::read(input)?;
    let graph = read_graph::<Undirected>(&mut tokens)?;

    let components = ConnectedComponents::on(&graph).dfs().run();

    writeln!(output, "{}", components.len())?;
    for component in components.iter() {
        writeln!(output, "{}", component.len())?;
        write_line(output, component.iter().map(one_based))?;
    }

    Ok(())
}
