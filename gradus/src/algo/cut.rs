//! Find [articulation points] and [bridges] of a graph.
//!
//! A single iterative depth-first search computes, for every vertex, its
//! discovery time and its low-link: the lowest discovery time reachable from
//! its subtree by at most one back edge. Edge directions are ignored.
//!
//! The search never walks back over the very edge it came by, but it does
//! walk a parallel copy of it. A doubled edge is therefore a cycle of length
//! two and never a bridge.
//!
//! [articulation points]: https://en.wikipedia.org/wiki/Biconnected_component
//! [bridges]: https://en.wikipedia.org/wiki/Bridge_(graph_theory)
//!
//! # Examples
//!
//! ```
//! use gradus::{
//!     algo::Cuts,
//!     core::{id::{EdgeId, VertexId}, marker::Undirected},
//!     storage::AdjList,
//! };
//!
//! let v = |index: usize| VertexId::from(index);
//!
//! // Two triangles joined by the edge 2 - 3.
//! let mut graph = AdjList::<(), Undirected>::with_vertices(6);
//! graph.add_edge(v(0), v(1), ());
//! graph.add_edge(v(1), v(2), ());
//! graph.add_edge(v(2), v(0), ());
//! let bridge = graph.add_edge(v(2), v(3), ());
//! graph.add_edge(v(3), v(4), ());
//! graph.add_edge(v(4), v(5), ());
//! graph.add_edge(v(5), v(3), ());
//!
//! let cuts = Cuts::on(&graph).run();
//! assert_eq!(cuts.articulation_points(), &[v(2), v(3)]);
//! assert_eq!(cuts.bridges(), &[bridge]);
//! ```

use std::fmt;

use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    adapt::Undirect,
    core::{
        error::IndexError,
        id::{IdType, VertexId},
        marker::Undirected,
        GraphBase, Neighbors, VertexSet,
    },
    storage::AdjList,
    visit::{DfsEvent, DfsEvents, Time, Visitor},
};

/// Articulation points and bridges of a graph, both sorted by ID.
pub struct Cuts<G: GraphBase> {
    articulation_points: Vec<G::VertexId>,
    bridges: Vec<G::EdgeId>,
}

impl<G> fmt::Debug for Cuts<G>
where
    G: GraphBase,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cuts")
            .field("articulation_points", &self.articulation_points)
            .field("bridges", &self.bridges)
            .finish()
    }
}

impl<G> Cuts<G>
where
    G: GraphBase,
{
    pub fn on(graph: &G) -> CutsBuilder<'_, G> {
        CutsBuilder { graph }
    }

    /// Vertices whose removal increases the number of connected components.
    pub fn articulation_points(&self) -> &[G::VertexId] {
        &self.articulation_points
    }

    /// Edges whose removal increases the number of connected components.
    pub fn bridges(&self) -> &[G::EdgeId] {
        &self.bridges
    }

    pub fn is_articulation_point(&self, vertex: &G::VertexId) -> bool {
        self.articulation_points.binary_search(vertex).is_ok()
    }

    pub fn is_bridge(&self, edge: &G::EdgeId) -> bool {
        self.bridges.binary_search(edge).is_ok()
    }
}

pub struct CutsBuilder<'a, G> {
    graph: &'a G,
}

struct Frame<EI> {
    disc: Time,
    low: Time,
    parent: Option<EI>,
    children: usize,
}

impl<'a, G> CutsBuilder<'a, G>
where
    G: Neighbors + VertexSet,
{
    pub fn run(self) -> Cuts<G> {
        let graph = Undirect::new(self.graph);

        let mut frames = FxHashMap::<G::VertexId, Frame<G::EdgeId>>::default();
        let mut parent = FxHashMap::<G::VertexId, G::VertexId>::default();
        let mut articulation_points = FxHashSet::default();
        let mut bridges = Vec::new();

        for event in DfsEvents::new(&graph).start_all(&graph).iter(&graph) {
            match event {
                DfsEvent::Open { vertex, time } => {
                    // Vertices other than roots already have a frame from their
                    // tree edge.
                    let frame = frames.entry(vertex).or_insert(Frame {
                        disc: time,
                        low: time,
                        parent: None,
                        children: 0,
                    });
                    frame.disc = time;
                    frame.low = time;
                }
                DfsEvent::TreeEdge { from, to, edge } => {
                    if let Some(frame) = frames.get_mut(&from) {
                        frame.children += 1;
                    }

                    parent.insert(to.clone(), from);
                    frames.insert(
                        to,
                        Frame {
                            disc: Time::MAX,
                            low: Time::MAX,
                            parent: Some(edge),
                            children: 0,
                        },
                    );
                }
                DfsEvent::BackEdge { from, to, .. } => {
                    let disc = frames.get(&to).map(|frame| frame.disc);

                    if let (Some(disc), Some(frame)) = (disc, frames.get_mut(&from)) {
                        frame.low = frame.low.min(disc);
                    }
                }
                DfsEvent::CrossForwardEdge { .. } => {}
                DfsEvent::Close { vertex, .. } => {
                    let Some((low, via, children)) = frames
                        .get(&vertex)
                        .map(|frame| (frame.low, frame.parent.clone(), frame.children))
                    else {
                        continue;
                    };

                    let Some(p) = parent.get(&vertex).cloned() else {
                        // The root cuts the graph if it has more than one subtree.
                        if children > 1 {
                            articulation_points.insert(vertex);
                        }
                        continue;
                    };

                    let is_root = parent.get(&p).is_none();

                    if let Some(frame) = frames.get_mut(&p) {
                        frame.low = frame.low.min(low);

                        if low > frame.disc {
                            bridges.extend(via);
                        }

                        if !is_root && low >= frame.disc {
                            articulation_points.insert(p);
                        }
                    }
                }
            }
        }

        let mut articulation_points = articulation_points.into_iter().collect::<Vec<_>>();
        articulation_points.sort();
        bridges.sort();

        debug!(
            "found {} articulation points and {} bridges",
            articulation_points.len(),
            bridges.len()
        );

        Cuts {
            articulation_points,
            bridges,
        }
    }
}

/// Finds the groups that are critical for connectivity.
///
/// Every group of vertices of `0..vertex_count` becomes an auxiliary vertex
/// connected to all its members. A group is critical when its auxiliary
/// vertex is an articulation point, that is, when removing the group's
/// connections disconnects some of its members from each other. Returns
/// the indices of the critical groups in ascending order.
pub fn critical_groups<I, M>(vertex_count: usize, groups: I) -> Result<Vec<usize>, IndexError>
where
    I: IntoIterator<Item = M>,
    M: IntoIterator<Item = usize>,
{
    let v = |index: usize| VertexId::from(index);
    let mut graph = AdjList::<(), Undirected>::with_vertices(vertex_count);

    for group in groups {
        let aux = graph.add_vertex();

        for member in group {
            if member >= vertex_count {
                return Err(IndexError {
                    index: member,
                    bound: vertex_count,
                });
            }

            graph.add_edge(aux, v(member), ());
        }
    }

    let cuts = Cuts::on(&graph).run();

    Ok(cuts
        .articulation_points()
        .iter()
        .map(|aux| aux.as_usize())
        .filter_map(|index| index.checked_sub(vertex_count))
        .collect())
}

/// Returns the minimum number of edges that need to be added so that no
/// connected component has a bridge.
///
/// The 2-edge-connected components joined by bridges form a tree per
/// connected component. Its leaves need to be paired up, which takes
/// `(leaves + 1) / 2` new edges. Leaves of all connected components are
/// counted together.
pub fn augmentation_count<G>(graph: &G) -> usize
where
    G: Neighbors + VertexSet,
{
    let cuts = Cuts::on(graph).run();
    let bridges = cuts.bridges().iter().cloned().collect::<FxHashSet<_>>();

    if bridges.is_empty() {
        return 0;
    }

    let undirected = Undirect::new(graph);
    let mut assigned = FxHashSet::default();
    let mut leaves = 0;

    for root in graph.vertices_by_id() {
        if !assigned.insert(root.clone()) {
            continue;
        }

        // Flood fill of one 2-edge-connected component, counting the bridges
        // leaving it.
        let mut stack = vec![root];
        let mut degree = 0;

        while let Some(v) = stack.pop() {
            for n in undirected.neighbors_undirected(&v) {
                if bridges.contains(&n.edge) {
                    degree += 1;
                } else if assigned.insert(n.id.clone()) {
                    stack.push(n.id);
                }
            }
        }

        if degree == 1 {
            leaves += 1;
        }
    }

    debug!("bridge tree has {leaves} leaves");

    (leaves + 1) / 2
}
