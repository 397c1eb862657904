use std::io::{Read, Write};

use gradus::{core::error::ErrorKind, puzzle::SlideMoves};

use crate::input::{InputError, Tokens};

/// Prints the minimum number of slides from `S` to `T`, or `-1` if the
/// target cannot be reached.
pub fn run(input: impl Read, output: &mut impl Write) -> anyhow::Result<()> {
    let mut tokens = Tokens::read(input)?;

    let rows = tokens.next::<usize>("map height")?;
    let cols = tokens.next::<usize>("map width")?;

    let map = (0..rows)
        .map(|row| read_row(&mut tokens, row, cols))
        .collect::<Result<Vec<_>, _>>()?;

    let moves = SlideMoves::parse(map.iter().map(String::as_str))?;

    match moves.min_moves() {
        Ok(count) => writeln!(output, "{count}")?,
        Err(error) if error.kind() == ErrorKind::NotFound => writeln!(output, "-1")?,
        Err(error) => return Err(error.into()),
    }

    Ok(())
}

/// Reads one map row of `cols` tiles. The tiles may be written as one word
/// or separated by whitespace, but a word never spans two rows.
fn read_row(tokens: &mut Tokens, row: usize, cols: usize) -> Result<String, InputError> {
    let mut line = String::new();
    let mut len = 0;

    while len < cols {
        let word = tokens.word("map row")?;
        len += word.chars().count();
        line.push_str(&word);
    }

    if len != cols {
        return Err(InputError::RowLength {
            row: row + 1,
            len,
            expected: cols,
        });
    }

    Ok(line)
}
