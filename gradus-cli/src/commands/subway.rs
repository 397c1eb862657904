use std::io::{Read, Write};

use crate::{
    commands::common::{read_grid, write_line},
    input::Tokens,
};

/// Prints the distance of every cell to the nearest cell marked with `1`,
/// walking between orthogonal neighbors. Cells get `-1` if there is no
/// marked cell at all.
pub fn run(input: impl Read, output: &mut impl Write) -> anyhow::Result<()> {
    let mut tokens = Tokens::read(input)?;

    let map = read_grid::<u8>(&mut tokens, "cell")?;
    let dist = map.distance_map(|&cell| cell == 1)?;

    for row in 0..dist.rows() {
        write_line(
            output,
            dist.row(row).iter().map(|d| match d {
                Some(d) => d.to_string(),
                None => "-1".to_string(),
            }),
        )?;
    }

    Ok(())
}
