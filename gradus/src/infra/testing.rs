use thiserror::Error;

use crate::{
    core::{
        id::{IdType, IntegerIdType, VertexId},
        marker::{Direction, EdgeType},
        EdgeSet, Neighbors, VertexSet,
    },
    storage::AdjList,
};

pub fn create_complete<Ty: EdgeType>(vertex_count: usize) -> AdjList<(), Ty> {
    let mut graph = AdjList::with_vertices(vertex_count);

    for u in 0..vertex_count {
        for v in 0..vertex_count {
            if u == v {
                continue;
            }

            if !Ty::is_directed() && v > u {
                break;
            }

            graph.add_edge(VertexId::from(u), VertexId::from(v), ());
        }
    }

    graph
}

pub fn create_path<Ty: EdgeType>(vertex_count: usize) -> AdjList<(), Ty> {
    let mut graph = AdjList::with_vertices(vertex_count);

    for v in 1..vertex_count {
        graph.add_edge(VertexId::from(v - 1), VertexId::from(v), ());
    }

    graph
}

pub fn create_cycle<Ty: EdgeType>(vertex_count: usize) -> AdjList<(), Ty> {
    let mut graph = create_path(vertex_count);

    if vertex_count > 1 {
        graph.add_edge(VertexId::from(vertex_count - 1), VertexId::from(0), ());
    }

    graph
}

/// Two triangles `0 - 1 - 2` and `2 - 3 - 4` sharing vertex 2.
pub fn create_bowtie<Ty: EdgeType>() -> AdjList<(), Ty> {
    let mut graph = AdjList::with_vertices(5);

    for (src, dst) in [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)] {
        graph.add_edge(VertexId::from(src), VertexId::from(dst), ());
    }

    graph
}

/// Converts the graph to a directed petgraph graph with the same vertex
/// indices. Undirected edges become two opposite edges, self-loops stay single.
#[cfg(test)]
pub fn to_petgraph<E: Clone, Ty: EdgeType>(
    graph: &AdjList<E, Ty>,
) -> petgraph::Graph<(), E, petgraph::Directed> {
    use crate::core::GraphRef;
    use petgraph::graph::NodeIndex;

    let mut pet = petgraph::Graph::with_capacity(graph.vertex_count(), 2 * graph.edge_count());

    for _ in graph.vertices_by_id() {
        pet.add_node(());
    }

    for id in graph.edges_by_id() {
        let (src, dst) = match graph.endpoints(&id) {
            Some(endpoints) => endpoints,
            None => continue,
        };
        let attr = match graph.edge(&id) {
            Some(attr) => attr.clone(),
            None => continue,
        };

        let (src, dst) = (NodeIndex::new(src.as_usize()), NodeIndex::new(dst.as_usize()));
        pet.add_edge(src, dst, attr.clone());

        if !Ty::is_directed() && src != dst {
            pet.add_edge(dst, src, attr);
        }
    }

    pet
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("vertex ids iterator count ({0}) is not equal to vertex count ({1})")]
    VertexIdsVertexCountMismatch(usize, usize),
    #[error("vertex bound ({0}) is less than vertex count ({1})")]
    VertexBoundInvalid(usize, usize),
    #[error("edge ids iterator count ({0}) is not equal to edge count ({1})")]
    EdgeIdsEdgeCountMismatch(usize, usize),
    #[error("edge id {0} (zero-based) has no endpoints or is not reported by its source")]
    EdgeIdsInvalid(usize),
    #[error("sum of outgoing degrees ({0}) is not equal to the expected {1}")]
    HandshakingLemma(usize, usize),
    #[error("sum of incoming degrees ({0}) is not equal to edge count ({1})")]
    HandshakingLemmaIncoming(usize, usize),
}

/// Checks that the counts, the edge endpoints and the neighbor lists of a
/// storage agree with each other.
pub fn check_consistency<G>(graph: &G) -> Result<(), ConsistencyCheckError>
where
    G: Neighbors + VertexSet + EdgeSet,
    G::VertexId: IntegerIdType,
{
    fn equal<F>(actual: usize, expected: usize, error: F) -> Result<(), ConsistencyCheckError>
    where
        F: FnOnce(usize, usize) -> ConsistencyCheckError,
    {
        if actual == expected {
            Ok(())
        } else {
            Err(error(actual, expected))
        }
    }

    let vertex_count = graph.vertex_count();

    equal(
        graph.vertices_by_id().count(),
        vertex_count,
        ConsistencyCheckError::VertexIdsVertexCountMismatch,
    )?;

    if graph.vertex_bound() < vertex_count {
        return Err(ConsistencyCheckError::VertexBoundInvalid(
            graph.vertex_bound(),
            vertex_count,
        ));
    }

    let edge_count = graph.edge_count();

    equal(
        graph.edges_by_id().count(),
        edge_count,
        ConsistencyCheckError::EdgeIdsEdgeCountMismatch,
    )?;

    for (i, id) in graph.edges_by_id().enumerate() {
        let valid = graph.endpoints(&id).map_or(false, |(src, dst)| {
            graph
                .neighbors_directed(&src, Direction::Outgoing)
                .any(|n| n.edge == id && (n.id == dst || !G::EdgeType::is_directed()))
        });

        if !valid {
            return Err(ConsistencyCheckError::EdgeIdsInvalid(i));
        }
    }

    let out_deg_sum = graph
        .vertices_by_id()
        .map(|id| graph.degree_directed(&id, Direction::Outgoing))
        .sum::<usize>();

    if G::EdgeType::is_directed() {
        let in_deg_sum = graph
            .vertices_by_id()
            .map(|id| graph.degree_directed(&id, Direction::Incoming))
            .sum::<usize>();

        // https://en.wikipedia.org/wiki/Handshaking_lemma
        equal(out_deg_sum, edge_count, ConsistencyCheckError::HandshakingLemma)?;
        equal(
            in_deg_sum,
            edge_count,
            ConsistencyCheckError::HandshakingLemmaIncoming,
        )?;
    } else {
        // A self-loop adds two to the degree of its only endpoint.
        equal(
            out_deg_sum,
            2 * edge_count,
            ConsistencyCheckError::HandshakingLemma,
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::{
        core::marker::{Directed, Undirected},
        storage::AdjMatrix,
    };

    use super::*;

    #[test]
    fn generators_are_consistent() {
        assert_matches!(check_consistency(&create_complete::<Directed>(5)), Ok(()));
        assert_matches!(check_consistency(&create_complete::<Undirected>(5)), Ok(()));
        assert_matches!(check_consistency(&create_cycle::<Directed>(4)), Ok(()));
        assert_matches!(check_consistency(&create_bowtie::<Undirected>()), Ok(()));
    }

    #[test]
    fn generator_sizes() {
        assert_eq!(create_complete::<Directed>(4).edge_count(), 12);
        assert_eq!(create_complete::<Undirected>(4).edge_count(), 6);
        assert_eq!(create_path::<Undirected>(0).edge_count(), 0);
        assert_eq!(create_path::<Undirected>(4).edge_count(), 3);
        assert_eq!(create_cycle::<Undirected>(4).edge_count(), 4);
        assert_eq!(create_cycle::<Undirected>(1).edge_count(), 0);
    }

    #[test]
    fn self_loops_are_consistent() {
        let v = |index: usize| VertexId::from(index);

        let mut list = AdjList::<(), Undirected>::with_vertices(2);
        list.add_edge(v(0), v(0), ());
        list.add_edge(v(0), v(1), ());
        assert_matches!(check_consistency(&list), Ok(()));

        let mut matrix = AdjMatrix::<(), Directed>::with_vertices(2);
        matrix.add_edge(v(1), v(1), ());
        matrix.add_edge(v(1), v(0), ());
        assert_matches!(check_consistency(&matrix), Ok(()));

        let mut matrix = AdjMatrix::<(), Undirected>::with_vertices(3);
        matrix.add_edge(v(2), v(2), ());
        matrix.add_edge(v(0), v(2), ());
        assert_eq!(matrix.degree_directed(&v(2), Direction::Outgoing), 3);
        assert_matches!(check_consistency(&matrix), Ok(()));
    }

    #[test]
    fn petgraph_conversion_doubles_undirected_edges() {
        let graph = create_cycle::<Undirected>(3);
        assert_eq!(to_petgraph(&graph).edge_count(), 6);

        let graph = create_cycle::<Directed>(3);
        assert_eq!(to_petgraph(&graph).edge_count(), 3);
    }
}
