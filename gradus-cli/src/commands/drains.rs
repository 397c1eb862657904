use std::io::{Read, Write};

use gradus::puzzle::Plateaus;

use crate::{commands::common::read_grid, input::Tokens};

/// Prints the number of plateaus from which water cannot flow to a lower
/// cell.
pub fn run(input: impl Read, output: &mut impl Write) -> anyhow::Result<()> {
    let mut tokens = Tokens::read(input)?;

    let heights = read_grid::<i64>(&mut tokens, "height")?;
    writeln!(output, "{}", Plateaus::new(&heights).drain_count())?;

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
    fn basins() {
        let input = "3 4\n1 1 3 3\n1 2 3 0\n4 4 4 0\n";
        assert_eq!(solve(input), "2\n");
    }

    #[test]
    fn flat() {
        assert_eq!(solve("2 2\n5 5\n5 5\n"), "1\n");
    }
}
