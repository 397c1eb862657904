use std::io::{Read, Write};

use gradus::{algo::Cycle, core::marker::Directed};

use crate::{
    commands::common::{one_based, read_graph, write_line},
    input::Tokens,
};

/// Prints `NO` for an acyclic graph, otherwise `YES` followed by the
/// vertices of a cycle in the order of the edges.
pub fn run(input: impl Read, output: &mut impl Write) -> anyhow::Result<()> {
    let mut tokens = Tokens::read(input)?;
    let graph = read_graph::<Directed>(&mut tokens)?;

    match Cycle::on(&graph).run() {
        Some(cycle) => {
            // The closing vertex repeats the first one.
            let vertices = cycle.vertices();
            let open = &vertices[..vertices.len() - 1];

            writeln!(output, "YES")?;
            write_line(output, open.iter().map(one_based))?;
        }
        None => writeln!(output, "NO")?,
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
    fn cycle_found() {
        assert_eq!(solve("4 4\n1 2\n2 3\n3 4\n4 2\n"), "YES\n2 3 4\n");
    }

    #[test]
    fn acyclic() {
        assert_eq!(solve("3 3\n1 2\n1 3\n2 3\n"), "NO\n");
    }

    #[test]
    fn self_loop() {
        assert_eq!(solve("2 1\n2 2\n"), "YES\n2\n");
    }
}
