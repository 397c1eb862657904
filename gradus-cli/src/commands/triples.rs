use std::io::{Read, Write};

use gradus::algo::critical_groups;

use crate::{commands::common::write_line, input::Tokens};

/// Every triple of points is a connection between all three. Prints the
/// number of triples whose removal disconnects some of their points,
/// followed by their one-based indices.
pub fn run(input: impl Read, output: &mut impl Write) -> anyhow::Result<()> {
    let mut tokens = Tokens::read(input)?;

    let point_count = tokens.next("point count")?;
    let triple_count = tokens.next::<usize>("triple count")?;

    let triples = (0..triple_count)
        .map(|_| {
            let mut triple = [0; 3];
            for point in &mut triple {
                *point = tokens.index("point", point_count)? - 1;
            }
            Ok(triple)
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let critical = critical_groups(point_count, triples)?;

    writeln!(output, "{}", critical.len())?;
    write_line(output, critical.iter().map(|index| index + 1))?;

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
    fn shared_points() {
        // Point 4 is only in the third triple.
        let input = "4 3\n1 2 3\n1 2 3\n3 4 1\n";
        assert_eq!(solve(input), "1\n3\n");
    }

    #[test]
    fn redundant_triples() {
        assert_eq!(solve("3 2\n1 2 3\n3 2 1\n"), "0\n\n");
    }

    #[test]
    fn bridging_triple() {
        // The middle triple is the only link between the two halves.
        let input = "6 5\n1 2 3\n1 2 3\n3 4 5\n4 5 6\n4 5 6\n";
        assert_eq!(solve(input), "1\n3\n");
    }

    #[test]
    fn single_triple() {
        assert_eq!(solve("3 1\n1 2 3\n"), "1\n1\n");
    }
}
