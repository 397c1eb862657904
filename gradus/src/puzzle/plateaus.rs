use std::iter::Filter;

use crate::{
    algo::ConnectedComponents,
    core::{
        marker::{Direction, Undirected},
        GraphBase, NeighborRef, Neighbors, VertexSet,
    },
};

use super::{
    grid::{CellsIter, OffsetNeighbors, ORTHOGONAL},
    Cell, Grid,
};

/// Height map where orthogonally adjacent cells of equal height are
/// connected. The connected components are the plateaus of the map.
#[derive(Debug)]
pub struct Plateaus<'a, T> {
    heights: &'a Grid<T>,
}

impl<'a, T: Ord> Plateaus<'a, T> {
    pub fn new(heights: &'a Grid<T>) -> Self {
        Self { heights }
    }

    /// Groups the cells into plateaus.
    pub fn components(&self) -> ConnectedComponents<Self> {
        ConnectedComponents::on(self).run()
    }

    /// Whether water poured on the plateau can flow to a strictly lower
    /// neighboring cell.
    pub fn has_outflow(&self, plateau: &[Cell]) -> bool {
        let bounds = self.heights.dimensions();

        plateau.iter().any(|cell| {
            let height = &self.heights[*cell];

            ORTHOGONAL
                .iter()
                .filter_map(|&step| cell.offset(step, bounds))
                .any(|other| &self.heights[other] < height)
        })
    }

    /// Number of plateaus without any outflow, that is, where water
    /// accumulates and a drain is needed.
    pub fn drain_count(&self) -> usize {
        let components = self.components();

        components
            .iter()
            .filter(|plateau| !self.has_outflow(plateau))
            .count()
    }
}

impl<'a, T> GraphBase for Plateaus<'a, T> {
    type VertexId = Cell;
    type EdgeId = (Cell, Cell);
    type EdgeType = Undirected;

    fn vertex_count_hint(&self) -> Option<usize> {
        Some(self.heights.rows() * self.heights.cols())
    }
}

impl<'a, T> VertexSet for Plateaus<'a, T> {
    type VerticesByIdIter<'b> = CellsIter
    where
        Self: 'b;

    fn vertices_by_id(&self) -> Self::VerticesByIdIter<'_> {
        self.heights.vertices_by_id()
    }

    fn vertex_count(&self) -> usize {
        self.heights.vertex_count()
    }

    fn contains_vertex(&self, id: &Cell) -> bool {
        self.heights.contains_vertex(id)
    }
}

type SameHeight<'b> = Box<dyn FnMut(&NeighborRef<Cell, (Cell, Cell)>) -> bool + 'b>;

impl<'a, T: PartialEq> Neighbors for Plateaus<'a, T> {
    type NeighborsIter<'b> = Filter<OffsetNeighbors, SameHeight<'b>>
    where
        Self: 'b;

    fn neighbors_undirected(&self, src: &Cell) -> Self::NeighborsIter<'_> {
        let heights = self.heights;
        let height = heights.get(src);

        let same_height: SameHeight<'_> =
            Box::new(move |neighbor| heights.get(&neighbor.id) == height);

        self.heights.neighbors_undirected(src).filter(same_height)
    }

    fn neighbors_directed(&self, src: &Cell, _dir: Direction) -> Self::NeighborsIter<'_> {
        self.neighbors_undirected(src)
    }
}
