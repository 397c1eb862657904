use std::io::{Read, Write};

use gradus::{core::error::ErrorKind, puzzle::DigitMoves};

use crate::input::Tokens;

/// Prints the number of values on the shortest sequence of moves followed by
/// the values one per line, or `-1` if there is no such sequence.
pub fn run(input: impl Read, output: &mut impl Write) -> anyhow::Result<()> {
    let mut tokens = Tokens::read(input)?;

    let start = tokens.next("number")?;
    let end = tokens.next("number")?;

    match DigitMoves::new().path(start, end) {
        Ok(path) => {
            writeln!(output, "{}", path.len())?;
            for number in path {
                writeln!(output, "{number}")?;
            }
        }
        Err(error) if error.kind() == ErrorKind::NotFound => writeln!(output, "-1")?,
        Err(error) => return Err(error.into()),
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
    fn rotation() {
        assert_eq!(solve("1234 4123"), "2\n1234\n4123\n");
    }

    #[test]
    fn same_number() {
        assert_eq!(solve("5555 5555"), "1\n5555\n");
    }

    #[test]
    fn zero_digit() {
        let mut output = Vec::new();
        assert!(run(&b"1204 1111"[..], &mut output).is_err());
    }
}
