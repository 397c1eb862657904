use std::iter::Filter;

use crate::{
    algo::ShortestPaths,
    core::{
        id::{IdType, VertexId},
        marker::{Directed, Direction},
        GraphBase, NeighborRef, Neighbors, RangeIds, VertexSet,
    },
};

use super::Error;

type Move = fn(u32) -> Option<u32>;

const FORWARD: [Move; 4] = [add_thousand, subtract_one, rotate_right, rotate_left];

// Inverses of the forward moves.
const BACKWARD: [Move; 4] = [subtract_thousand, add_one, rotate_left, rotate_right];

/// Four-digit numbers without zero digits and the moves between them:
///
/// * add 1000 unless the first digit is 9,
/// * subtract 1 unless the last digit is 1,
/// * rotate the digits right (`1234 -> 4123`),
/// * rotate the digits left (`1234 -> 2341`).
///
/// The vertex ID of a number is the number itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigitMoves;

impl DigitMoves {
    pub fn new() -> Self {
        Self
    }

    pub fn is_valid(number: u32) -> bool {
        (1111..=9999).contains(&number) && !has_zero(number)
    }

    /// Shortest sequence of numbers turning `from` into `to`, both included.
    pub fn path(&self, from: u32, to: u32) -> Result<Vec<u32>, Error> {
        for number in [from, to] {
            if !Self::is_valid(number) {
                return Err(Error::InvalidNumber(number));
            }
        }

        let (from, to) = (VertexId::from_usize(from as usize), VertexId::from_usize(to as usize));

        let paths = ShortestPaths::on(self)
            .unit_weight()
            .bfs()
            .goal(to)
            .run(from)?;

        let path = paths.path_to(to).unwrap_or_default();
        Ok(path.into_iter().map(|v| v.as_usize() as u32).collect())
    }
}

fn has_zero(mut number: u32) -> bool {
    while number > 0 {
        if number % 10 == 0 {
            return true;
        }
        number /= 10;
    }
    false
}

fn add_thousand(number: u32) -> Option<u32> {
    (number / 1000 != 9).then_some(number + 1000)
}

fn subtract_thousand(number: u32) -> Option<u32> {
    (number / 1000 != 1).then(|| number - 1000)
}

fn subtract_one(number: u32) -> Option<u32> {
    (number % 10 != 1).then(|| number - 1)
}

fn add_one(number: u32) -> Option<u32> {
    (number % 10 != 9).then_some(number + 1)
}

fn rotate_right(number: u32) -> Option<u32> {
    Some((number % 10) * 1000 + number / 10)
}

fn rotate_left(number: u32) -> Option<u32> {
    Some((number % 1000) * 10 + number / 1000)
}

impl GraphBase for DigitMoves {
    type VertexId = VertexId;
    type EdgeId = (VertexId, VertexId);
    type EdgeType = Directed;

    fn vertex_count_hint(&self) -> Option<usize> {
        Some(10000)
    }
}

fn is_valid_id(id: &VertexId) -> bool {
    DigitMoves::is_valid(id.as_usize() as u32)
}

impl VertexSet for DigitMoves {
    type VerticesByIdIter<'a> = Filter<RangeIds<VertexId>, fn(&VertexId) -> bool>
    where
        Self: 'a;

    fn vertices_by_id(&self) -> Self::VerticesByIdIter<'_> {
        RangeIds::from(1111..10000).filter(is_valid_id as fn(&VertexId) -> bool)
    }

    fn vertex_count(&self) -> usize {
        9 * 9 * 9 * 9
    }

    fn vertex_bound(&self) -> usize {
        10000
    }

    fn contains_vertex(&self, id: &VertexId) -> bool {
        is_valid_id(id)
    }
}

impl Neighbors for DigitMoves {
    type NeighborsIter<'a> = NeighborsIter
    where
        Self: 'a;

    fn neighbors_undirected(&self, src: &VertexId) -> Self::NeighborsIter<'_> {
        NeighborsIter::new(
            *src,
            [
                (&FORWARD[..], Direction::Outgoing),
                (&BACKWARD[..], Direction::Incoming),
            ],
        )
    }

    fn neighbors_directed(&self, src: &VertexId, dir: Direction) -> Self::NeighborsIter<'_> {
        let moves: &'static [Move] = match dir {
            Direction::Outgoing => &FORWARD,
            Direction::Incoming => &BACKWARD,
        };
        let none: &'static [Move] = &[];

        NeighborsIter::new(*src, [(moves, dir), (none, dir)])
    }
}

pub struct NeighborsIter {
    src: VertexId,
    lists: [(&'static [Move], Direction); 2],
    current: usize,
    next: usize,
}

impl NeighborsIter {
    fn new(src: VertexId, lists: [(&'static [Move], Direction); 2]) -> Self {
        // Invalid number has no neighbors.
        let current = if is_valid_id(&src) { 0 } else { lists.len() };

        Self {
            src,
            lists,
            current,
            next: 0,
        }
    }
}

impl Iterator for NeighborsIter {
    type Item = NeighborRef<VertexId, (VertexId, VertexId)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (moves, dir) = *self.lists.get(self.current)?;

            let step = match moves.get(self.next) {
                Some(step) => step,
                None => {
                    self.current += 1;
                    self.next = 0;
                    continue;
                }
            };
            self.next += 1;

            let number = self.src.as_usize() as u32;

            // Moves that do not change the number are not edges.
            let id = match step(number) {
                Some(other) if other != number => VertexId::from_usize(other as usize),
                _ => continue,
            };

            let edge = match dir {
                Direction::Outgoing => (self.src, id),
                Direction::Incoming => (id, self.src),
            };

            return Some(NeighborRef {
                id,
                edge,
                src: self.src,
                dir,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::core::error::ErrorKind;

    use super::*;

    fn v(number: u32) -> VertexId {
        VertexId::from_usize(number as usize)
    }

    #[test]
    fn moves() {
        let graph = DigitMoves::new();
        let next = graph
            .neighbors_directed(&v(1234), Direction::Outgoing)
            .map(|n| n.id)
            .collect::<Vec<_>>();

        assert_eq!(next, vec![v(2234), v(1233), v(4123), v(2341)]);
    }

    #[test]
    fn blocked_moves() {
        let graph = DigitMoves::new();
        let next = graph
            .neighbors_directed(&v(9871), Direction::Outgoing)
            .map(|n| n.id)
            .collect::<Vec<_>>();

        assert_eq!(next, vec![v(1987), v(8719)]);

        // Rotations of a repdigit are loops.
        assert_eq!(
            graph
                .neighbors_directed(&v(9999), Direction::Outgoing)
                .map(|n| n.id)
                .collect::<Vec<_>>(),
            vec![v(9998)]
        );
    }

    #[test]
    fn incoming_inverts_outgoing() {
        let graph = DigitMoves::new();

        for u in graph.vertices_by_id() {
            for n in graph.neighbors_directed(&u, Direction::Outgoing) {
                assert!(
                    graph
                        .neighbors_directed(&n.id, Direction::Incoming)
                        .any(|m| m.id == u && m.edge == n.edge),
                    "{u:?} -> {:?}",
                    n.id
                );
            }
        }
    }

    #[test]
    fn vertex_space() {
        let graph = DigitMoves::new();

        assert_eq!(graph.vertices_by_id().count(), graph.vertex_count());
        assert!(graph.contains_vertex(&v(1111)));
        assert!(!graph.contains_vertex(&v(1011)));
        assert!(!graph.contains_vertex(&v(999)));
    }

    #[test]
    fn path() {
        let graph = DigitMoves::new();

        assert_eq!(graph.path(1234, 4123), Ok(vec![1234, 4123]));
        assert_eq!(graph.path(1234, 1234), Ok(vec![1234]));

        let path = graph.path(1111, 9999).unwrap();
        assert_eq!(path.first(), Some(&1111));
        assert_eq!(path.last(), Some(&9999));
        for pair in path.windows(2) {
            assert!(graph
                .neighbors_directed(&v(pair[0]), Direction::Outgoing)
                .any(|n| n.id == v(pair[1])));
        }
    }

    #[test]
    fn invalid_numbers() {
        let graph = DigitMoves::new();

        assert_matches!(graph.path(1023, 1111), Err(Error::InvalidNumber(1023)));
        assert_matches!(graph.path(1111, 10000), Err(Error::InvalidNumber(10000)));
        assert_eq!(
            graph.path(1111, 0).unwrap_err().kind(),
            ErrorKind::InputFormat
        );
    }

    #[test]
    fn every_number_reachable() {
        let graph = DigitMoves::new();
        let paths = ShortestPaths::on(&graph)
            .unit_weight()
            .bfs()
            .run(v(5555))
            .unwrap();

        assert_eq!(paths.reached_count(), graph.vertex_count());
        assert_matches!(
            graph.path(5555, 1111).map(|path| path.len() > 1),
            Ok(true)
        );
    }
}
