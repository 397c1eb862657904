use std::io::{Read, Write};

use anyhow::Context;
use gradus::{
    algo::EulerCircuit,
    core::{error::ErrorKind, marker::Directed},
    storage::AdjList,
};
use log::debug;

use crate::{
    commands::common::{one_based, write_line},
    input::Tokens,
};

/// Joins routes into a single closed walk using every route segment
/// exactly once. Prints the number of vertices on the walk followed by the
/// vertices, starting and ending at the smallest vertex, or `0` if there is
/// no such walk.
pub fn run(input: impl Read, output: &mut impl Write) -> anyhow::Result<()> {
    let mut tokens = Tokens::read(input)?;

    let route_count = tokens.next::<usize>("route count")?;
    let vertex_count = tokens.next("vertex count")?;
    let mut graph = AdjList::<(), Directed>::with_vertices(vertex_count);

    for i in 0..route_count {
        let len = tokens.next::<usize>("route length")?;
        let mut prev = tokens.vertex(vertex_count)?;

        for _ in 0..len {
            let next = tokens.vertex(vertex_count)?;
            graph
                .try_add_edge(prev, next, ())
                .with_context(|| format!("failed to add segment of route {}", i + 1))?;
            prev = next;
        }
    }

    match EulerCircuit::on(&graph).run() {
        Ok(circuit) => {
            let vertices = circuit.vertices();
            write!(output, "{} ", vertices.len())?;
            write_line(output, vertices.iter().map(one_based))?;
        }
        Err(error) if error.kind() == ErrorKind::NotFound => {
            debug!("no circuit: {error}");
            writeln!(output, "0")?;
        }
        Err(error) => return Err(error).context("failed to build circuit"),
    }

    Ok(())
}
