use std::fmt;

use arbitrary::{Arbitrary, Unstructured};

use crate::{
    core::{
        error::AddEdgeError,
        id::{EdgeId, VertexId},
        marker::EdgeType,
        VertexSet,
    },
    storage::{AdjList, AdjMatrix},
};

#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }
}

/// Storages that can grow by single vertices and edges.
pub trait Grow<E>: VertexSet<VertexId = VertexId> {
    fn grow_vertex(&mut self) -> VertexId;

    fn grow_edge(
        &mut self,
        src: VertexId,
        dst: VertexId,
        attr: E,
    ) -> Result<EdgeId, AddEdgeError<E>>;
}

impl<E, Ty: EdgeType> Grow<E> for AdjList<E, Ty> {
    fn grow_vertex(&mut self) -> VertexId {
        self.add_vertex()
    }

    fn grow_edge(
        &mut self,
        src: VertexId,
        dst: VertexId,
        attr: E,
    ) -> Result<EdgeId, AddEdgeError<E>> {
        self.try_add_edge(src, dst, attr)
    }
}

impl<E, Ty: EdgeType> Grow<E> for AdjMatrix<E, Ty> {
    fn grow_vertex(&mut self) -> VertexId {
        self.add_vertex()
    }

    fn grow_edge(
        &mut self,
        src: VertexId,
        dst: VertexId,
        attr: E,
    ) -> Result<EdgeId, AddEdgeError<E>> {
        self.try_add_edge(src, dst, attr)
    }
}

#[derive(Debug, Arbitrary, Clone)]
pub enum GrowOp<E> {
    AddVertex,
    AddEdge(Index, Index, E),
}

#[derive(Debug, PartialEq)]
pub enum GrowOpResult<E> {
    AddVertex(VertexId),
    /// An edge was requested in a graph without vertices.
    Skipped,
    AddEdge(Result<EdgeId, AddEdgeError<E>>),
}

impl<E> GrowOp<E> {
    pub fn apply<G: Grow<E>>(self, graph: &mut G) -> GrowOpResult<E> {
        let n = graph.vertex_count();

        match self {
            GrowOp::AddVertex => GrowOpResult::AddVertex(graph.grow_vertex()),
            GrowOp::AddEdge(src, dst, edge) => match (src.get(n), dst.get(n)) {
                (Some(src), Some(dst)) => {
                    GrowOpResult::AddEdge(graph.grow_edge(src.into(), dst.into(), edge))
                }
                _ => GrowOpResult::Skipped,
            },
        }
    }
}

pub struct GrowOpsSeq<E>(pub Vec<GrowOp<E>>);

impl<E> IntoIterator for GrowOpsSeq<E> {
    type Item = GrowOp<E>;
    type IntoIter = std::vec::IntoIter<GrowOp<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<E: fmt::Debug> fmt::Debug for GrowOpsSeq<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "GrowOpsSeq(vec![")?;

        for op in self.0.iter() {
            writeln!(f, "    GrowOp::{:?},", op)?;
        }

        writeln!(f, "])")
    }
}

impl<'a, E: Arbitrary<'a>> Arbitrary<'a> for GrowOpsSeq<E> {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let n_target = u.int_in_range(2..=200)?;
        let r = nice_f64(u)?;

        let m_target = ((n_target * (n_target - 1) / 2) as f64 * r).round().max(1.0);

        let total = u.len().max(1);

        let mut n = 0usize;
        let mut m = 0usize;
        let mut seq = Vec::with_capacity(n_target);

        while !u.is_empty() {
            let rv = (n as f64 / n_target as f64).min(1.0);
            let re = (m as f64 / m_target).min(1.0);
            let progress = (total - u.len()) as f64 / total as f64;

            // The more vertices/edges are in the graph, the less is needed to
            // add them. Progress biases the choice so that edges keep coming
            // until the end.
            let wv = non_linear_decrease(0.4 * rv + 0.6 * progress);
            let we = non_linear_decrease(0.6 * re + 0.4 * progress);

            let add_vertex = match nice_f64(u) {
                Ok(choice) => choice * (wv + we) < wv,
                Err(_) => break,
            };

            let op = if add_vertex {
                n += 1;
                GrowOp::AddVertex
            } else {
                match (u.arbitrary(), u.arbitrary(), u.arbitrary()) {
                    (Ok(src), Ok(dst), Ok(edge)) => {
                        m += 1;
                        GrowOp::AddEdge(src, dst, edge)
                    }
                    _ => break,
                }
            };

            seq.push(op);
        }

        Ok(GrowOpsSeq(seq))
    }
}

fn nice_f64(u: &mut Unstructured<'_>) -> arbitrary::Result<f64> {
    const RESOLUTION: u8 = 100;
    let int = u.int_in_range(0..=RESOLUTION)?;
    Ok(int as f64 / RESOLUTION as f64)
}

// f(0) = 1, f(1) ~= 0.152
fn non_linear_decrease(x: f64) -> f64 {
    1.0 / (x + 1.0).powf(std::f64::consts::E)
}

#[cfg(test)]
mod tests {
    use fastrand::Rng;

    use crate::{
        core::{marker::Directed, EdgeSet},
        infra::testing::check_consistency,
    };

    use super::*;

    #[test]
    fn grow_ops_seq_builds_graphs() {
        let mut raw = vec![0; 4096];
        let mut edges = 0;

        for seed in [0, 3, 7, 13, 23, 42] {
            let mut rng = Rng::with_seed(seed);
            rng.fill(&mut raw);

            let mut u = Unstructured::new(&raw);
            let seq: GrowOpsSeq<i8> = u.arbitrary().unwrap();

            let mut graph = AdjList::<i8, Directed>::new();
            for op in seq {
                op.apply(&mut graph);
            }

            assert_eq!(check_consistency(&graph), Ok(()));
            edges += graph.edge_count();
        }

        assert!(edges > 0);
    }

    #[test]
    fn matrix_rejects_multi_edges() {
        let mut graph = AdjMatrix::<i8, Directed>::new();

        GrowOp::AddVertex.apply(&mut graph);
        GrowOp::AddVertex.apply(&mut graph);

        assert!(matches!(
            GrowOp::AddEdge(Index(0), Index(1), 1).apply(&mut graph),
            GrowOpResult::AddEdge(Ok(_))
        ));
        assert!(matches!(
            GrowOp::AddEdge(Index(2), Index(3), 2).apply(&mut graph),
            GrowOpResult::AddEdge(Err(_))
        ));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn edges_need_vertices() {
        let mut graph = AdjList::<(), Directed>::new();
        assert_eq!(
            GrowOp::AddEdge(Index(0), Index(0), ()).apply(&mut graph),
            GrowOpResult::Skipped
        );
    }
}
