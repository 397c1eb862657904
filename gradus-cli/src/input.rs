//! Whitespace-separated tokens of a problem instance.

use std::{io::Read, str::FromStr, vec};

use gradus::core::{error::ErrorKind, id::VertexId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input")]
    Io(#[from] std::io::Error),

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("invalid {expected} `{token}` (token {position})")]
    Invalid {
        token: String,
        expected: &'static str,
        position: usize,
    },

    #[error("{expected} {value} out of range 1..={bound}")]
    OutOfRange {
        value: usize,
        expected: &'static str,
        bound: usize,
    },

    #[error("row {row} has length {len}, expected {expected}")]
    RowLength {
        row: usize,
        len: usize,
        expected: usize,
    },
}

impl InputError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InputFormat
    }
}

#[derive(Debug)]
pub struct Tokens {
    tokens: vec::IntoIter<String>,
    position: usize,
}

impl Tokens {
    pub fn read<R: Read>(mut reader: R) -> Result<Self, InputError> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Ok(Self::new(&input))
    }

    pub fn new(input: &str) -> Self {
        let tokens = input
            .split_ascii_whitespace()
            .map(String::from)
            .collect::<Vec<_>>();

        Self {
            tokens: tokens.into_iter(),
            position: 0,
        }
    }

    pub fn word(&mut self, expected: &'static str) -> Result<String, InputError> {
        let token = self
            .tokens
            .next()
            .ok_or(InputError::UnexpectedEnd { expected })?;
        self.position += 1;
        Ok(token)
    }

    pub fn next<T: FromStr>(&mut self, expected: &'static str) -> Result<T, InputError> {
        let token = self.word(expected)?;

        token.parse().map_err(|_| InputError::Invalid {
            token,
            expected,
            position: self.position,
        })
    }

    /// Reads a number in `1..=bound`.
    pub fn index(&mut self, expected: &'static str, bound: usize) -> Result<usize, InputError> {
        let value = self.next::<usize>(expected)?;

        if value == 0 || value > bound {
            return Err(InputError::OutOfRange {
                value,
                expected,
                bound,
            });
        }

        Ok(value)
    }

    /// Reads a one-based vertex number of a graph with `vertex_count`
    /// vertices.
    pub fn vertex(&mut self, vertex_count: usize) -> Result<VertexId, InputError> {
        let value = self.index("vertex", vertex_count)?;
        Ok(VertexId::from(value - 1))
    }

    /// Number of tokens not consumed yet.
    #[cfg(test)]
    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn numbers_and_words() {
        let mut tokens = Tokens::new(" 3 4\n\tS.#  -7 ");

        assert_matches!(tokens.next::<usize>("count"), Ok(3));
        assert_matches!(tokens.next::<u32>("count"), Ok(4));
        assert_eq!(tokens.word("row").unwrap(), "S.#");
        assert_matches!(tokens.next::<i64>("height"), Ok(-7));
        assert_eq!(tokens.remaining(), 0);
        assert_matches!(
            tokens.next::<usize>("count"),
            Err(InputError::UnexpectedEnd { expected: "count" })
        );
    }

    #[test]
    fn invalid_token() {
        let mut tokens = Tokens::new("1 x");
        tokens.next::<usize>("count").unwrap();

        let error = tokens.next::<usize>("edge count").unwrap_err();
        assert_matches!(
            &error,
            InputError::Invalid { token, position: 2, .. } if token == "x"
        );
        assert_eq!(error.kind(), ErrorKind::InputFormat);
    }

    #[test]
    fn vertices_are_one_based() {
        let mut tokens = Tokens::new("1 3 0 4");

        assert_eq!(tokens.vertex(3).unwrap(), VertexId::from(0usize));
        assert_eq!(tokens.vertex(3).unwrap(), VertexId::from(2usize));
        assert_matches!(
            tokens.vertex(3),
            Err(InputError::OutOfRange { value: 0, bound: 3, .. })
        );
        assert_matches!(
            tokens.vertex(3),
            Err(InputError::OutOfRange { value: 4, .. })
        );
    }

    #[test]
    fn read_from_reader() {
        let mut tokens = Tokens::read(&b"5\n6\n"[..]).unwrap();
        assert_eq!(tokens.remaining(), 2);
        assert_matches!(tokens.next::<u8>("number"), Ok(5));
    }
}
