use std::io::{Read, Write};

use gradus::{algo::Cuts, core::marker::Undirected};

use crate::{
    commands::common::{one_based, read_graph},
    input::Tokens,
};

/// Prints the number of articulation points followed by the points in
/// ascending order, one per line.
pub fn run(input: impl Read, output: &mut impl Write) -> anyhow::Result<()> {
    let mut tokens = Tokens::read(input)?;
    let graph = read_graph::<Undirected>(&mut tokens)?;

    let cuts = Cuts::on(&graph).run();
    let points = cuts.articulation_points();

    writeln!(output, "{}", points.len())?;
    for point in points {
        writeln!(output, "{}", one_based(point))?;
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
    fn bowtie() {
        let input = "5 6\n1 2\n2 3\n3 1\n3 4\n4 5\n5 3\n";
        assert_eq!(solve(input), "1\n3\n");
    }

    #[test]
    fn path() {
        assert_eq!(solve("4 3\n1 2\n2 3\n3 4\n"), "2\n2\n3\n");
    }

    #[test]
    fn cycle() {
        assert_eq!(solve("3 3\n1 2\n2 3\n3 1\n"), "0\n");
    }
}
