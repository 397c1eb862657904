//! Sliding through corridors of a map.
//!
//! From a free cell, a move goes in one of the four directions to the middle
//! of the free run in front of it: with `k` free cells before the wall (or
//! the map edge), the move advances by `(k + 1) / 2` cells. A move that would
//! not advance is not a move.

use std::vec;

use crate::{
    algo::ShortestPaths,
    core::{
        marker::{Directed, Direction},
        GraphBase, NeighborRef, Neighbors, VertexSet,
    },
};

use super::{grid::ORTHOGONAL, Cell, Error, Grid};

/// A cell of the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Free,
    Wall,
    Start,
    Target,
}

impl Tile {
    pub fn is_free(&self) -> bool {
        !matches!(self, Tile::Wall)
    }
}

impl TryFrom<char> for Tile {
    type Error = Error;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '.' => Ok(Tile::Free),
            '#' => Ok(Tile::Wall),
            'S' => Ok(Tile::Start),
            'T' => Ok(Tile::Target),
            _ => Err(Error::InvalidTile(c)),
        }
    }
}

/// Graph of slide moves between the free cells of a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideMoves {
    free: Grid<bool>,
    start: Cell,
    target: Cell,
}

impl SlideMoves {
    /// Builds the graph from a map. If there are more start or target tiles,
    /// the last one in row order is used.
    pub fn new(tiles: &Grid<Tile>) -> Result<Self, Error> {
        let find = |tile: Tile, c: char| {
            tiles
                .iter()
                .filter(|(_, t)| **t == tile)
                .map(|(cell, _)| cell)
                .last()
                .ok_or(Error::MissingTile(c))
        };

        Ok(Self {
            start: find(Tile::Start, 'S')?,
            target: find(Tile::Target, 'T')?,
            free: tiles.map(Tile::is_free),
        })
    }

    /// Parses a map given as rows of `.`, `#`, `S` and `T` characters.
    pub fn parse<'a, I>(rows: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.chars().map(Tile::try_from).collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(&Grid::from_rows(rows)?)
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn target(&self) -> Cell {
        self.target
    }

    /// Where a move from `from` in direction `step` ends, if it advances at
    /// all.
    pub fn slide(&self, from: Cell, step: (isize, isize)) -> Option<Cell> {
        if !self.is_free(&from) {
            return None;
        }

        let run = self.free_run(from, step);
        let advance = ((run + 1) / 2) as isize;

        if advance == 0 {
            return None;
        }

        from.offset((step.0 * advance, step.1 * advance), self.free.dimensions())
    }

    /// Minimum number of moves from the start to the target.
    pub fn min_moves(&self) -> Result<usize, Error> {
        let paths = ShortestPaths::on(self)
            .unit_weight()
            .bfs()
            .goal(self.target)
            .run(self.start)?;

        Ok(paths.dist(self.target).copied().unwrap_or_default())
    }

    fn is_free(&self, cell: &Cell) -> bool {
        self.free.get(cell).copied().unwrap_or(false)
    }

    // Number of free cells in front of `from` in direction `step`.
    fn free_run(&self, from: Cell, step: (isize, isize)) -> usize {
        let bounds = self.free.dimensions();
        let mut run = 0;
        let mut current = from;

        while let Some(next) = current.offset(step, bounds) {
            if !self.is_free(&next) {
                break;
            }
            run += 1;
            current = next;
        }

        run
    }

    fn incoming(&self, dst: Cell) -> Vec<Cell> {
        let bounds = self.free.dimensions();
        let mut sources = Vec::new();

        for step in ORTHOGONAL {
            // A source lands on `dst` only if it is `run` or `run + 1` cells
            // behind it.
            let run = self.free_run(dst, step);
            let back = (-step.0, -step.1);
            let mut current = dst;

            for distance in 1..=run + 1 {
                current = match current.offset(back, bounds) {
                    Some(cell) if self.is_free(&cell) => cell,
                    _ => break,
                };

                if distance >= run && self.slide(current, step) == Some(dst) {
                    sources.push(current);
                }
            }
        }

        sources
    }
}

impl GraphBase for SlideMoves {
    type VertexId = Cell;
    type EdgeId = (Cell, Cell);
    type EdgeType = Directed;

    fn vertex_count_hint(&self) -> Option<usize> {
        Some(self.free.rows() * self.free.cols())
    }
}

impl VertexSet for SlideMoves {
    type VerticesByIdIter<'a> = vec::IntoIter<Cell>
    where
        Self: 'a;

    fn vertices_by_id(&self) -> Self::VerticesByIdIter<'_> {
        self.free
            .iter()
            .filter(|(_, free)| **free)
            .map(|(cell, _)| cell)
            .collect::<Vec<_>>()
            .into_iter()
    }

    fn contains_vertex(&self, id: &Cell) -> bool {
        self.is_free(id)
    }
}

impl Neighbors for SlideMoves {
    type NeighborsIter<'a> = vec::IntoIter<NeighborRef<Cell, (Cell, Cell)>>
    where
        Self: 'a;

    fn neighbors_undirected(&self, src: &Cell) -> Self::NeighborsIter<'_> {
        let mut neighbors = self.outgoing_refs(*src);
        neighbors.extend(self.incoming_refs(*src));
        neighbors.into_iter()
    }

    fn neighbors_directed(&self, src: &Cell, dir: Direction) -> Self::NeighborsIter<'_> {
        match dir {
            Direction::Outgoing => self.outgoing_refs(*src).into_iter(),
            Direction::Incoming => self.incoming_refs(*src).into_iter(),
        }
    }
}

impl SlideMoves {
    fn outgoing_refs(&self, src: Cell) -> Vec<NeighborRef<Cell, (Cell, Cell)>> {
        ORTHOGONAL
            .iter()
            .filter_map(|&step| self.slide(src, step))
            .map(|id| NeighborRef {
                id,
                edge: (src, id),
                src,
                dir: Direction::Outgoing,
            })
            .collect()
    }

    fn incoming_refs(&self, src: Cell) -> Vec<NeighborRef<Cell, (Cell, Cell)>> {
        if !self.is_free(&src) {
            return Vec::new();
        }

        self.incoming(src)
            .into_iter()
            .map(|id| NeighborRef {
                id,
                edge: (id, src),
                src,
                dir: Direction::Incoming,
            })
            .collect()
    }
}
