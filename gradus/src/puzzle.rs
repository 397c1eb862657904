//! Implicit graphs of classic puzzles.
//!
//! None of these graphs is stored. Vertices and edges are computed on demand
//! from the puzzle rules, and all of them implement the capability traits so
//! that the generic algorithms (shortest paths, connected components) apply
//! directly.

use thiserror::Error;

use crate::{algo::shortest_paths, core::error::ErrorKind};

pub mod digits;
pub mod grid;
pub mod knight;
pub mod plateaus;
pub mod slide;

pub use digits::DigitMoves;
pub use grid::{Cell, Grid};
pub use knight::{KnightMoves, Square};
pub use plateaus::Plateaus;
pub use slide::{SlideMoves, Tile};

/// The error encountered while building or solving a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("unknown tile {0:?}")]
    InvalidTile(char),

    #[error("the map has no {0:?} tile")]
    MissingTile(char),

    #[error("{0} is not a four-digit number without zeros")]
    InvalidNumber(u32),

    #[error(transparent)]
    Search(#[from] shortest_paths::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Search(error) => error.kind(),
            _ => ErrorKind::InputFormat,
        }
    }
}
