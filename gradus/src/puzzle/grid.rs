use std::ops::Index;

use crate::{
    algo::ShortestPaths,
    core::{
        id::IdType,
        marker::{Direction, Undirected},
        GraphBase, NeighborRef, Neighbors, VertexSet,
    },
};

use super::Error;

/// Position in a rectangular grid, ordered row by row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Cell shifted by `(rows, cols)` if it stays inside a grid of given
    /// dimensions.
    pub fn offset(&self, (rows, cols): (isize, isize), bounds: (usize, usize)) -> Option<Cell> {
        let row = self.row.checked_add_signed(rows)?;
        let col = self.col.checked_add_signed(cols)?;

        (row < bounds.0 && col < bounds.1).then_some(Cell { row, col })
    }
}

impl IdType for Cell {
    fn is_integer() -> bool {
        false
    }

    fn as_bits(&self) -> u64 {
        (self.row as u64) << 32 | (self.col as u64 & u32::MAX as u64)
    }

    fn from_bits(bits: u64) -> Self {
        Self {
            row: (bits >> 32) as usize,
            col: (bits & u32::MAX as u64) as usize,
        }
    }
}

pub(crate) const ORTHOGONAL: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Rectangular grid of values, stored row by row.
///
/// As a graph, every cell is a vertex connected to its four orthogonal
/// neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Builds the grid from its rows. All rows must have the same length.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        let mut cells = Vec::new();
        let mut cols = None;
        let mut count = 0;

        for (row, values) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(values);
            let len = cells.len() - before;

            match cols {
                None => cols = Some(len),
                Some(expected) if expected != len => {
                    return Err(Error::RaggedRow { row, len, expected })
                }
                Some(_) => {}
            }

            count += 1;
        }

        Ok(Self {
            rows: count,
            cols: cols.unwrap_or_default(),
            cells,
        })
    }

    /// Grid of given dimensions filled with values produced for each cell.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(Cell) -> T,
    {
        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Cell { row, col }))
            .map(&mut f)
            .collect();

        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, cell: &Cell) -> Option<&T> {
        self.index_of(cell).map(|index| &self.cells[index])
    }

    pub fn row(&self, row: usize) -> &[T] {
        let start = (row * self.cols).min(self.cells.len());
        let end = (start + self.cols).min(self.cells.len());
        &self.cells[start..end]
    }

    /// Values with their cells, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &T)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, value)| (self.cell_at(index), value))
    }

    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Distance of every cell to the nearest cell marked as a source, walking
    /// between orthogonal neighbors. `None` if there is no source at all.
    pub fn distance_map<F>(&self, is_source: F) -> Result<Grid<Option<usize>>, Error>
    where
        F: Fn(&T) -> bool,
    {
        let sources = self
            .iter()
            .filter(|(_, value)| is_source(value))
            .map(|(cell, _)| cell)
            .collect::<Vec<_>>();

        let paths = ShortestPaths::on(self)
            .unit_weight()
            .bfs()
            .run_multi(sources)?;

        Ok(Grid::from_fn(self.rows, self.cols, |cell| {
            paths.dist(cell).copied()
        }))
    }

    fn index_of(&self, cell: &Cell) -> Option<usize> {
        (cell.row < self.rows && cell.col < self.cols).then(|| cell.row * self.cols + cell.col)
    }

    fn cell_at(&self, index: usize) -> Cell {
        Cell {
            row: index / self.cols,
            col: index % self.cols,
        }
    }
}

impl<T> Index<Cell> for Grid<T> {
    type Output = T;

    fn index(&self, cell: Cell) -> &T {
        match self.get(&cell) {
            Some(value) => value,
            None => panic!(
                "cell ({}, {}) out of range for {}x{} grid",
                cell.row, cell.col, self.rows, self.cols
            ),
        }
    }
}

impl<T> GraphBase for Grid<T> {
    type VertexId = Cell;
    type EdgeId = (Cell, Cell);
    type EdgeType = Undirected;

    fn vertex_count_hint(&self) -> Option<usize> {
        Some(self.cells.len())
    }
}

impl<T> VertexSet for Grid<T> {
    type VerticesByIdIter<'a> = CellsIter
    where
        Self: 'a;

    fn vertices_by_id(&self) -> Self::VerticesByIdIter<'_> {
        CellsIter::new(self.rows, self.cols)
    }

    fn vertex_count(&self) -> usize {
        self.cells.len()
    }

    fn contains_vertex(&self, id: &Cell) -> bool {
        self.index_of(id).is_some()
    }
}

impl<T> Neighbors for Grid<T> {
    type NeighborsIter<'a> = OffsetNeighbors
    where
        Self: 'a;

    fn neighbors_undirected(&self, src: &Cell) -> Self::NeighborsIter<'_> {
        OffsetNeighbors::new(*src, self.dimensions(), &ORTHOGONAL)
    }

    fn neighbors_directed(&self, src: &Cell, _dir: Direction) -> Self::NeighborsIter<'_> {
        self.neighbors_undirected(src)
    }
}

/// All cells of a grid, row by row.
#[derive(Debug, Clone)]
pub struct CellsIter {
    cols: usize,
    next: usize,
    end: usize,
}

impl CellsIter {
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            next: 0,
            end: rows * cols,
        }
    }
}

impl Iterator for CellsIter {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }

        let index = self.next;
        self.next += 1;

        Some(Cell {
            row: index / self.cols,
            col: index % self.cols,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.next;
        (len, Some(len))
    }
}

/// Neighbors of a cell given by a fixed set of offsets, in the order of the
/// offsets. The edge between two cells is identified by the ordered pair of
/// its endpoints, so it is the same from both sides.
#[derive(Debug, Clone)]
pub struct OffsetNeighbors {
    src: Cell,
    bounds: (usize, usize),
    offsets: &'static [(isize, isize)],
    next: usize,
}

impl OffsetNeighbors {
    pub(crate) fn new(src: Cell, bounds: (usize, usize), offsets: &'static [(isize, isize)]) -> Self {
        // Cell outside of the grid has no neighbors.
        let offsets = if src.row < bounds.0 && src.col < bounds.1 {
            offsets
        } else {
            &[]
        };

        Self {
            src,
            bounds,
            offsets,
            next: 0,
        }
    }
}

impl Iterator for OffsetNeighbors {
    type Item = NeighborRef<Cell, (Cell, Cell)>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(offset) = self.offsets.get(self.next) {
            self.next += 1;

            if let Some(id) = self.src.offset(*offset, self.bounds) {
                let edge = if self.src < id {
                    (self.src, id)
                } else {
                    (id, self.src)
                };

                return Some(NeighborRef {
                    id,
                    edge,
                    src: self.src,
                    dir: Direction::Outgoing,
                });
            }
        }

        None
    }
}
