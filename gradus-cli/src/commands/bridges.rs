use std::io::{Read, Write};

use gradus::{algo::Cuts, core::marker::Undirected};

use crate::{
    commands::common::{one_based, read_graph},
    input::Tokens,
};

/// Prints the number of bridges followed by their one-based input
/// positions in ascending order, one per line.
pub fn run(input: impl Read, output: &mut impl Write) -> anyhow::Result<()> {
    let mut tokens = Tokens::read(input)?;
    let graph = read_graph::<Undirected>(&mut tokens)?;

    // Edge IDs follow the input order.
    let cuts = Cuts::on(&graph).run();
    let bridges = cuts.bridges();

    writeln!(output, "{}", bridges.len())?;
    for bridge in bridges {
        writeln!(output, "{}", one_based(bridge))?;
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
    fn triangle_with_tail() {
        let input = "5 5\n1 2\n2 3\n3 1\n3 4\n4 5\n";
        assert_eq!(solve(input), "2\n4\n5\n");
    }

    #[test]
    fn doubled_edge_is_not_a_bridge() {
        assert_eq!(solve("3 3\n1 2\n2 1\n2 3\n"), "1\n3\n");
    }
}
