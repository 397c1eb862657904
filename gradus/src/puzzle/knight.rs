//! Knight's moves on a square chessboard.
//!
//! # Examples
//!
//! ```
//! use gradus::puzzle::{KnightMoves, Square};
//!
//! let board = KnightMoves::new(8);
//! let path = board.path(Square::new(0, 0), Square::new(1, 2)).unwrap();
//!
//! assert_eq!(path, vec![Square::new(0, 0), Square::new(1, 2)]);
//! ```

use crate::{
    algo::ShortestPaths,
    core::{
        marker::{Direction, Undirected},
        GraphBase, Neighbors, VertexSet,
    },
};

use super::{
    grid::{CellsIter, OffsetNeighbors},
    Cell, Error,
};

/// A square of the board, zero-based.
pub type Square = Cell;

const JUMPS: [(isize, isize); 8] = [
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

/// Graph of knight's moves on a `size`×`size` board. A move is reversible,
/// so the graph is undirected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnightMoves {
    size: usize,
}

impl KnightMoves {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Shortest sequence of squares from `from` to `to`, both included.
    ///
    /// Fails with a [`NotFound`](crate::core::error::ErrorKind::NotFound)
    /// error when the target cannot be reached, which happens only on boards
    /// smaller than 4×4.
    pub fn path(&self, from: Square, to: Square) -> Result<Vec<Square>, Error> {
        let paths = ShortestPaths::on(self)
            .unit_weight()
            .bfs()
            .goal(to)
            .run(from)?;

        // The goal was reached, so it has a path.
        Ok(paths.path_to(to).unwrap_or_default())
    }
}

impl GraphBase for KnightMoves {
    type VertexId = Square;
    type EdgeId = (Square, Square);
    type EdgeType = Undirected;

    fn vertex_count_hint(&self) -> Option<usize> {
        Some(self.size * self.size)
    }
}

impl VertexSet for KnightMoves {
    type VerticesByIdIter<'a> = CellsIter
    where
        Self: 'a;

    fn vertices_by_id(&self) -> Self::VerticesByIdIter<'_> {
        CellsIter::new(self.size, self.size)
    }

    fn vertex_count(&self) -> usize {
        self.size * self.size
    }

    fn contains_vertex(&self, id: &Square) -> bool {
        id.row < self.size && id.col < self.size
    }
}

impl Neighbors for KnightMoves {
    type NeighborsIter<'a> = OffsetNeighbors
    where
        Self: 'a;

    fn neighbors_undirected(&self, src: &Square) -> Self::NeighborsIter<'_> {
        OffsetNeighbors::new(*src, (self.size, self.size), &JUMPS)
    }

    fn neighbors_directed(&self, src: &Square, _dir: Direction) -> Self::NeighborsIter<'_> {
        self.neighbors_undirected(src)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::{algo::shortest_paths, core::error::ErrorKind};

    use super::*;

    fn assert_knight_path(path: &[Square]) {
        for pair in path.windows(2) {
            let dr = pair[0].row.abs_diff(pair[1].row);
            let dc = pair[0].col.abs_diff(pair[1].col);
            assert!(matches!((dr, dc), (1, 2) | (2, 1)), "{pair:?}");
        }
    }

    #[test]
    fn corner_to_corner() {
        let board = KnightMoves::new(8);
        let path = board.path(Square::new(0, 0), Square::new(7, 7)).unwrap();

        assert_eq!(path.len(), 7);
        assert_eq!(path.first(), Some(&Square::new(0, 0)));
        assert_eq!(path.last(), Some(&Square::new(7, 7)));
        assert_knight_path(&path);
    }

    #[test]
    fn adjacent_square_is_far() {
        let board = KnightMoves::new(8);
        let path = board.path(Square::new(0, 0), Square::new(0, 1)).unwrap();

        assert_eq!(path.len(), 4);
        assert_knight_path(&path);
    }

    #[test]
    fn same_square() {
        let board = KnightMoves::new(3);
        assert_eq!(
            board.path(Square::new(1, 1), Square::new(1, 1)),
            Ok(vec![Square::new(1, 1)])
        );
    }

    #[test]
    fn unreachable_center() {
        let board = KnightMoves::new(3);
        let error = board.path(Square::new(0, 0), Square::new(1, 1)).unwrap_err();

        assert_matches!(
            error,
            Error::Search(shortest_paths::Error::GoalNotReached)
        );
        assert_eq!(error.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn off_board_start() {
        let board = KnightMoves::new(4);
        let error = board.path(Square::new(4, 0), Square::new(0, 0)).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::InputFormat);
    }

    #[test]
    fn neighbor_count() {
        let board = KnightMoves::new(8);

        assert_eq!(board.neighbors_undirected(&Square::new(0, 0)).count(), 2);
        assert_eq!(board.neighbors_undirected(&Square::new(3, 3)).count(), 8);
        assert_eq!(board.degree_undirected(&Square::new(0, 1)), 3);
    }
}
