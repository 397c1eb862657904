//! Construct an [Euler circuit], a closed walk using every edge exactly once.
//!
//! The preconditions are checked before the construction: all vertices with
//! an edge lie in one (weakly) connected component, and every vertex has an
//! even degree (undirected) or the same in-degree and out-degree (directed).
//! The circuit is then built by Hierholzer's algorithm with an explicit stack.
//! Parallel edges are tracked by a remaining-multiplicity counter per pair of
//! endpoints.
//!
//! [Euler circuit]: https://en.wikipedia.org/wiki/Eulerian_path
//!
//! # Examples
//!
//! ```
//! use gradus::{
//!     algo::EulerCircuit,
//!     core::{id::VertexId, marker::Directed},
//!     storage::AdjList,
//! };
//!
//! let v = |index: usize| VertexId::from(index);
//! let mut graph = AdjList::<(), Directed>::with_vertices(3);
//!
//! graph.add_edge(v(0), v(1), ());
//! graph.add_edge(v(1), v(2), ());
//! graph.add_edge(v(2), v(0), ());
//! graph.add_edge(v(1), v(0), ());
//! graph.add_edge(v(0), v(1), ());
//!
//! let circuit = EulerCircuit::on(&graph).run().unwrap();
//! assert_eq!(circuit.vertices(), &[v(0), v(1), v(2), v(0), v(1), v(0)]);
//! ```

use std::fmt;

use log::{debug, trace};
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::{error::ErrorKind, marker::Direction, GraphBase, Neighbors, VertexSet};

use super::ConnectedComponents;

/// A closed walk over all edges, the first vertex repeated at the end.
///
/// See [module](self) documentation for more details and example.
pub struct EulerCircuit<G: GraphBase> {
    vertices: Vec<G::VertexId>,
}

impl<G> fmt::Debug for EulerCircuit<G>
where
    G: GraphBase,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.vertices).finish()
    }
}

impl<G> EulerCircuit<G>
where
    G: GraphBase,
{
    pub fn on(graph: &G) -> EulerCircuitBuilder<'_, G> {
        EulerCircuitBuilder { graph, start: None }
    }

    pub fn vertices(&self) -> &[G::VertexId] {
        &self.vertices
    }

    /// Number of edges in the circuit.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.vertices.len() - 1
    }

    pub fn into_vec(self) -> Vec<G::VertexId> {
        self.vertices
    }
}

/// The error encountered during an [`EulerCircuit`] run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error<VI> {
    /// The graph has no edges to walk.
    #[error("graph has no edges")]
    NoEdges,

    /// The requested start vertex is not in the graph.
    #[error("start vertex {vertex:?} does not exist")]
    StartAbsent { vertex: VI },

    /// Some edges cannot be reached from the start vertex.
    #[error("edges are not in a single component with {start:?}")]
    Disconnected { start: VI },

    /// The vertex has an odd degree, or a different in-degree and out-degree.
    #[error("vertex {vertex:?} has unbalanced degree")]
    DegreeParity { vertex: VI },

    /// The walk did not return to its start or did not use all edges.
    #[error("walk is not a closed circuit over all edges")]
    NotClosed,

    /// The graph reported an edge that is not counted among its edges.
    #[error("edge multiplicity of {from:?} -> {to:?} underflowed")]
    MultiplicityUnderflow { from: VI, to: VI },
}

impl<VI> Error<VI> {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::StartAbsent { .. } => ErrorKind::InputFormat,
            Error::NoEdges
            | Error::Disconnected { .. }
            | Error::DegreeParity { .. }
            | Error::NotClosed => ErrorKind::NotFound,
            Error::MultiplicityUnderflow { .. } => ErrorKind::Logic,
        }
    }
}

pub struct EulerCircuitBuilder<'a, G>
where
    G: GraphBase,
{
    graph: &'a G,
    start: Option<G::VertexId>,
}

impl<'a, G> EulerCircuitBuilder<'a, G>
where
    G: GraphBase,
{
    /// Starts the circuit at given vertex. By default it starts at the
    /// smallest vertex with an edge.
    pub fn start(self, start: G::VertexId) -> Self {
        Self {
            start: Some(start),
            ..self
        }
    }
}

impl<'a, G> EulerCircuitBuilder<'a, G>
where
    G: Neighbors + VertexSet,
{
    pub fn run(self) -> Result<EulerCircuit<G>, Error<G::VertexId>> {
        let graph = self.graph;
        let is_directed = graph.is_directed();

        // Pairs of endpoints are normalized in undirected graphs so that both
        // sides consume the same counter.
        let key = |from: &G::VertexId, to: &G::VertexId| {
            if !is_directed && to < from {
                (to.clone(), from.clone())
            } else {
                (from.clone(), to.clone())
            }
        };

        let mut counts = FxHashMap::<(G::VertexId, G::VertexId), usize>::default();
        let mut adjacency = FxHashMap::<G::VertexId, Vec<G::VertexId>>::default();

        for v in graph.vertices_by_id() {
            let mut neighbors = Vec::new();

            for n in graph.neighbors_directed(&v, Direction::Outgoing) {
                // An undirected edge is reported from both endpoints, a
                // self-loop just once.
                if is_directed || v <= n.id {
                    *counts.entry(key(&v, &n.id)).or_default() += 1;
                }

                if !neighbors.contains(&n.id) {
                    neighbors.push(n.id);
                }
            }

            if !neighbors.is_empty() {
                adjacency.insert(v, neighbors);
            }
        }

        let edge_count = counts.values().sum::<usize>();

        if edge_count == 0 {
            return Err(Error::NoEdges);
        }

        let start = match self.start {
            Some(start) if !graph.contains_vertex(&start) => {
                return Err(Error::StartAbsent { vertex: start });
            }
            Some(start) => start,
            None => graph
                .vertices_by_id()
                .find(|v| graph.degree_undirected(v) > 0)
                .ok_or(Error::NoEdges)?,
        };

        check_degrees(graph)?;
        check_connected(graph, &start)?;

        let mut cursors = FxHashMap::<G::VertexId, usize>::default();
        let mut stack = vec![start.clone()];
        let mut circuit = Vec::with_capacity(edge_count + 1);

        while let Some(v) = stack.last().cloned() {
            let neighbors = adjacency.get(&v).map(Vec::as_slice).unwrap_or_default();
            let cursor = cursors.entry(v.clone()).or_default();
            let mut next = None;

            while let Some(u) = neighbors.get(*cursor) {
                let remaining = counts.get_mut(&key(&v, u)).ok_or_else(|| {
                    Error::MultiplicityUnderflow {
                        from: v.clone(),
                        to: u.clone(),
                    }
                })?;

                match remaining.checked_sub(1) {
                    Some(rest) => {
                        *remaining = rest;
                        next = Some(u.clone());
                        break;
                    }
                    None => *cursor += 1,
                }
            }

            match next {
                Some(u) => {
                    trace!("euler: walk {v:?} -> {u:?}");
                    stack.push(u);
                }
                None => {
                    stack.pop();
                    circuit.push(v);
                }
            }
        }

        circuit.reverse();

        if circuit.len() != edge_count + 1 || circuit.first() != circuit.last() {
            debug!(
                "euler: walk of {} vertices does not close over {edge_count} edges",
                circuit.len()
            );
            return Err(Error::NotClosed);
        }

        Ok(EulerCircuit { vertices: circuit })
    }
}

fn check_degrees<G>(graph: &G) -> Result<(), Error<G::VertexId>>
where
    G: Neighbors + VertexSet,
{
    for v in graph.vertices_by_id() {
        let balanced = if graph.is_directed() {
            graph.degree_directed(&v, Direction::Outgoing)
                == graph.degree_directed(&v, Direction::Incoming)
        } else {
            graph.degree_undirected(&v) % 2 == 0
        };

        if !balanced {
            return Err(Error::DegreeParity { vertex: v });
        }
    }

    Ok(())
}

fn check_connected<G>(graph: &G, start: &G::VertexId) -> Result<(), Error<G::VertexId>>
where
    G: Neighbors + VertexSet,
{
    let components = ConnectedComponents::on(graph).run();
    let component = components.component_of(start);

    let connected = graph
        .vertices_by_id()
        .filter(|v| graph.degree_undirected(v) > 0)
        .all(|v| components.component_of(&v) == component);

    if connected && graph.degree_undirected(start) > 0 {
        Ok(())
    } else {
        Err(Error::Disconnected {
            start: start.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;
    use rustc_hash::FxHashMap;

    use crate::{
        core::{
            id::VertexId,
            marker::{Directed, EdgeType, Undirected},
            EdgeSet,
        },
        infra::testing::{create_bowtie, create_cycle, create_path},
        storage::{AdjList, AdjMatrix},
    };

    use super::*;

    fn v(index: usize) -> VertexId {
        index.into()
    }

    fn assert_uses_every_edge<Ty: EdgeType>(circuit: &[VertexId], graph: &AdjList<(), Ty>) {
        let normalize = |a: VertexId, b: VertexId| {
            if !Ty::is_directed() && b < a {
                (b, a)
            } else {
                (a, b)
            }
        };

        let mut expected = FxHashMap::default();
        for edge in graph.edges_by_id() {
            let (from, to) = graph.endpoints(&edge).unwrap();
            *expected.entry(normalize(from, to)).or_insert(0usize) += 1;
        }

        let mut walked = FxHashMap::default();
        for pair in circuit.windows(2) {
            *walked.entry(normalize(pair[0], pair[1])).or_insert(0usize) += 1;
        }

        assert_eq!(walked, expected);
        assert_eq!(circuit.first(), circuit.last());
    }

    #[test]
    fn directed_cycle() {
        let graph = create_cycle::<Directed>(4);
        let circuit = EulerCircuit::on(&graph).run().unwrap();

        assert_eq!(circuit.vertices(), &[v(0), v(1), v(2), v(3), v(0)]);
        assert_eq!(circuit.len(), 4);
    }

    #[test]
    fn undirected_bowtie() {
        let graph = create_bowtie::<Undirected>();
        let circuit = EulerCircuit::on(&graph).run().unwrap();

        assert_eq!(circuit.len(), 6);
        assert_uses_every_edge(circuit.vertices(), &graph);
    }

    #[test]
    fn custom_start() {
        let graph = create_bowtie::<Undirected>();
        let circuit = EulerCircuit::on(&graph).start(v(4)).run().unwrap();

        assert_eq!(circuit.vertices().first(), Some(&v(4)));
        assert_uses_every_edge(circuit.vertices(), &graph);
    }

    #[test]
    fn parallel_edges_and_self_loop() {
        let mut graph = AdjList::<(), Directed>::with_vertices(2);

        graph.add_edge(v(0), v(1), ());
        graph.add_edge(v(0), v(1), ());
        graph.add_edge(v(1), v(0), ());
        graph.add_edge(v(1), v(1), ());
        graph.add_edge(v(1), v(0), ());

        let circuit = EulerCircuit::on(&graph).run().unwrap();

        assert_eq!(circuit.vertices(), &[v(0), v(1), v(0), v(1), v(1), v(0)]);
        assert_uses_every_edge(circuit.vertices(), &graph);
    }

    #[test]
    fn isolated_vertices_are_ignored() {
        let mut graph = AdjList::<(), Undirected>::with_vertices(5);

        graph.add_edge(v(2), v(3), ());
        graph.add_edge(v(3), v(4), ());
        graph.add_edge(v(4), v(2), ());

        let circuit = EulerCircuit::on(&graph).run().unwrap();

        assert_eq!(circuit.vertices(), &[v(2), v(3), v(4), v(2)]);
    }

    #[test]
    fn odd_degree() {
        let graph = create_path::<Undirected>(3);

        let error = EulerCircuit::on(&graph).run().unwrap_err();

        assert_eq!(error, Error::DegreeParity { vertex: v(0) });
        assert_eq!(error.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn unbalanced_directed() {
        let mut graph = create_cycle::<Directed>(3);
        graph.add_edge(v(0), v(2), ());

        assert_matches!(
            EulerCircuit::on(&graph).run(),
            Err(Error::DegreeParity { vertex }) if vertex == v(0)
        );
    }

    #[test]
    fn disconnected() {
        let mut graph = AdjList::<(), Directed>::with_vertices(6);

        graph.add_edge(v(0), v(1), ());
        graph.add_edge(v(1), v(0), ());
        graph.add_edge(v(3), v(4), ());
        graph.add_edge(v(4), v(3), ());

        assert_matches!(
            EulerCircuit::on(&graph).run(),
            Err(Error::Disconnected { start }) if start == v(0)
        );
    }

    #[test]
    fn start_without_edges() {
        let mut graph = create_cycle::<Undirected>(3);
        graph.add_vertex();

        assert_matches!(
            EulerCircuit::on(&graph).start(v(3)).run(),
            Err(Error::Disconnected { .. })
        );
        assert_matches!(
            EulerCircuit::on(&graph).start(v(9)).run(),
            Err(Error::StartAbsent { .. })
        );
    }

    #[test]
    fn no_edges() {
        let graph = AdjMatrix::<(), Undirected>::with_vertices(3);

        assert_matches!(EulerCircuit::on(&graph).run(), Err(Error::NoEdges));
    }

    #[test]
    fn matrix() {
        let mut graph = AdjMatrix::<(), Undirected>::with_vertices(3);

        graph.add_edge(v(0), v(1), ());
        graph.add_edge(v(1), v(2), ());
        graph.add_edge(v(2), v(0), ());

        let circuit = EulerCircuit::on(&graph).run().unwrap();

        assert_eq!(circuit.vertices(), &[v(0), v(1), v(2), v(0)]);
    }

    fn closed_walk() -> impl Strategy<Value = (usize, Vec<usize>)> {
        (2usize..10).prop_flat_map(|n| {
            (Just(n), proptest::collection::vec(0..n, 1..40)).prop_map(|(n, mut walk)| {
                walk.push(walk[0]);
                (n, walk)
            })
        })
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_euler_round_trip_directed((n, walk) in closed_walk()) {
            let mut graph = AdjList::<(), Directed>::with_vertices(n);
            for pair in walk.windows(2) {
                graph.add_edge(v(pair[0]), v(pair[1]), ());
            }

            let circuit = EulerCircuit::on(&graph).start(v(walk[0])).run().unwrap();

            prop_assert_eq!(circuit.len(), walk.len() - 1);
            assert_uses_every_edge(circuit.vertices(), &graph);
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_euler_round_trip_undirected((n, walk) in closed_walk()) {
            let mut graph = AdjList::<(), Undirected>::with_vertices(n);
            for pair in walk.windows(2) {
                graph.add_edge(v(pair[0]), v(pair[1]), ());
            }

            let circuit = EulerCircuit::on(&graph).start(v(walk[0])).run().unwrap();

            prop_assert_eq!(circuit.len(), walk.len() - 1);
            assert_uses_every_edge(circuit.vertices(), &graph);
        }
    }
}
