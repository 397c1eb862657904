use std::io::{Read, Write};

use anyhow::Context;
use gradus::{
    algo::is_cyclic,
    core::{id::VertexId, marker::Directed},
    storage::AdjList,
};

use crate::input::{InputError, Tokens};

/// Every pair of cities is connected by a one-way road, red or blue. Red
/// roads lead from the smaller city to the larger, blue roads the other way.
/// Prints `YES` if no route returns to its start, `NO` otherwise.
pub fn run(input: impl Read, output: &mut impl Write) -> anyhow::Result<()> {
    let mut tokens = Tokens::read(input)?;

    let city_count = tokens.next::<usize>("city count")?;
    let mut graph = AdjList::<(), Directed>::with_vertices(city_count);

    for i in 0..city_count.saturating_sub(1) {
        let row = tokens.word("road colors")?;
        let expected = city_count - 1 - i;

        if row.len() != expected {
            return Err(InputError::RowLength {
                row: i + 1,
                len: row.len(),
                expected,
            }
            .into());
        }

        for (j, color) in row.chars().enumerate() {
            let (near, far) = (VertexId::from(i), VertexId::from(i + j + 1));

            let (src, dst) = match color {
                'R' => (near, far),
                'B' => (far, near),
                _ => anyhow::bail!("invalid road color `{color}` in row {}", i + 1),
            };

            graph
                .try_add_edge(src, dst, ())
                .context("failed to add road")?;
        }
    }

    let answer = if is_cyclic(&graph) { "NO" } else { "YES" };
    writeln!(output, "{answer}")?;

    Ok(())
}
