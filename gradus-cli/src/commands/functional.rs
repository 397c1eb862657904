use std::io::{Read, Write};

use gradus::{algo::FunctionalCycles, storage::Functional};
use log::debug;

use crate::input::Tokens;

/// Prints the number of cycles of a function given by the successor of
/// each of its `n` elements.
pub fn run(input: impl Read, output: &mut impl Write) -> anyhow::Result<()> {
    let mut tokens = Tokens::read(input)?;

    let count = tokens.next("element count")?;
    let successors = (0..count)
        .map(|_| tokens.index("successor", count).map(|next| next - 1))
        .collect::<Result<Vec<_>, _>>()?;

    let graph = Functional::from_successors(successors)?;
    let cycles = FunctionalCycles::on(&graph).run();
    debug!(
        "{} of {} elements lie on cycles",
        (0..count).filter(|&v| cycles.is_on_cycle(v.into())).count(),
        count
    );

    writeln!(output, "{}", cycles.count())?;
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
    fn two_cycles_with_tails() {
        assert_eq!(solve("6\n2 3 1 5 5 4\n"), "2\n");
    }

    #[test]
    fn identity() {
        assert_eq!(solve("3\n1 2 3\n"), "3\n");
    }

    #[test]
    fn successor_out_of_range() {
        let mut output = Vec::new();
        assert!(run(&b"2\n1 3\n"[..], &mut output).is_err());
    }
}
