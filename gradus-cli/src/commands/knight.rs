use std::io::{Read, Write};

use gradus::{
    core::error::ErrorKind,
    puzzle::{KnightMoves, Square},
};

use crate::input::Tokens;

/// Prints the number of moves followed by the visited squares, one `x y`
/// pair per line, or `-1` if the end cannot be reached.
pub fn run(input: impl Read, output: &mut impl Write) -> anyhow::Result<()> {
    let mut tokens = Tokens::read(input)?;

    let size = tokens.next("board size")?;
    let mut square = || -> anyhow::Result<Square> {
        let x = tokens.index("coordinate", size)?;
        let y = tokens.index("coordinate", size)?;
        Ok(Square::new(x - 1, y - 1))
    };
    let start = square()?;
    let end = square()?;

    match KnightMoves::new(size).path(start, end) {
        Ok(path) => {
            writeln!(output, "{}", path.len() - 1)?;
            for square in path {
                writeln!(output, "{} {}", square.row + 1, square.col + 1)?;
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
    fn one_move() {
        assert_eq!(solve("8\n1 1\n2 3\n"), "1\n1 1\n2 3\n");
    }

    #[test]
    fn corner_to_corner() {
        let output = solve("8\n1 1\n8 8\n");
        let mut lines = output.lines();

        assert_eq!(lines.next(), Some("6"));
        assert_eq!(lines.next(), Some("1 1"));
        assert_eq!(lines.last(), Some("8 8"));
    }

    #[test]
    fn unreachable() {
        assert_eq!(solve("3\n1 1\n2 2\n"), "-1\n");
    }

    #[test]
    fn off_board() {
        let mut output = Vec::new();
        assert!(run(&b"3\n1 1\n4 1\n"[..], &mut output).is_err());
    }
}
