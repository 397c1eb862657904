use std::{
    collections::{HashSet, VecDeque},
    hash::BuildHasherDefault,
    marker::PhantomData,
};

use rustc_hash::FxHashSet;

use super::{VisitRoots, VisitSet};
use crate::core::{marker::Direction, GraphBase, Neighbors};

pub trait TraversalCollection<T>: Default {
    fn push(&mut self, value: T);
    fn pop(&mut self) -> Option<T>;
    fn clear(&mut self);
}

pub struct Queue<T>(pub VecDeque<T>);

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self(VecDeque::new())
    }
}

impl<T> TraversalCollection<T> for Queue<T> {
    fn push(&mut self, value: T) {
        self.0.push_back(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

pub struct Stack<T>(pub Vec<T>);

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> TraversalCollection<T> for Stack<T> {
    fn push(&mut self, value: T) {
        self.0.push(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

pub(crate) trait RawAlgo<G: GraphBase> {
    type Item;
    type Collection: TraversalCollection<Self::Item>;

    fn vertex(item: &Self::Item) -> G::VertexId;
    fn start(root: G::VertexId) -> Self::Item;
    fn visit_on_start() -> bool;
}

pub(crate) struct RawVisit<G: GraphBase, A: RawAlgo<G>> {
    pub collection: A::Collection,
    // Visitors are detached from the graph, so the visited set cannot rely on
    // a fixed vertex bound.
    pub visited: FxHashSet<G::VertexId>,
}

impl<G: GraphBase, A: RawAlgo<G>> RawVisit<G, A> {
    pub fn new(count_hint: Option<usize>) -> Self {
        let visited = count_hint
            .map(|count| HashSet::with_capacity_and_hasher(count, BuildHasherDefault::default()))
            .unwrap_or_default();

        Self {
            collection: A::Collection::default(),
            visited,
        }
    }

    pub fn start(&mut self, root: G::VertexId) {
        let item = A::start(root);

        if A::visit_on_start() {
            self.visited.visit(A::vertex(&item));
        }

        self.collection.clear();
        self.collection.push(item);
    }
}

pub(crate) struct RawVisitMulti<G, A, S> {
    pub roots: S,
    ty: PhantomData<fn() -> (G, A)>,
}

impl<G: GraphBase, A: RawAlgo<G>, S: VisitRoots<G::VertexId>> RawVisitMulti<G, A, S> {
    pub fn new(roots: S) -> Self {
        Self {
            roots,
            ty: PhantomData,
        }
    }

    pub fn next_multi<F, R, V>(
        &mut self,
        raw: &mut RawVisit<G, A>,
        mut get_next: F,
        is_still_valid: V,
    ) -> Option<R>
    where
        F: FnMut(&mut RawVisit<G, A>) -> Option<R>,
        V: Fn(&G::VertexId) -> bool,
    {
        if let Some(next) = get_next(raw) {
            return Some(next);
        }

        if self.roots.is_done(&raw.visited) {
            return None;
        }

        let root = loop {
            let root = self.roots.next_root()?;
            if !raw.visited.is_visited(&root) && is_still_valid(&root) {
                break root;
            }
        };

        raw.start(root);
        get_next(raw)
    }
}

pub enum RawEvent<G: GraphBase> {
    /// Neighbor discovered for the first time.
    Push {
        vertex: G::VertexId,
        from: (G::VertexId, G::EdgeId),
    },
    /// Neighbor already discovered.
    Skip {
        vertex: G::VertexId,
        from: (G::VertexId, G::EdgeId),
    },
}

pub enum RawBfs {}

impl<G: GraphBase> RawAlgo<G> for RawBfs {
    type Item = G::VertexId;
    type Collection = Queue<G::VertexId>;

    fn vertex(item: &G::VertexId) -> G::VertexId {
        item.clone()
    }

    fn start(root: G::VertexId) -> G::VertexId {
        root
    }

    fn visit_on_start() -> bool {
        true
    }
}

impl<G: GraphBase> RawVisit<G, RawBfs> {
    pub fn next<F>(&mut self, graph: &G, mut f: F) -> Option<G::VertexId>
    where
        G: Neighbors,
        F: FnMut(RawEvent<G>),
    {
        let v = self.collection.pop()?;

        for n in graph.neighbors_directed(&v, Direction::Outgoing) {
            let from = (v.clone(), n.edge);
            if self.visited.visit(n.id.clone()) {
                f(RawEvent::Push {
                    vertex: n.id.clone(),
                    from,
                });
                self.collection.push(n.id);
            } else {
                f(RawEvent::Skip { vertex: n.id, from });
            }
        }

        Some(v)
    }
}

pub enum RawDfsExtra {}

pub struct RawDfsExtraItem<G: GraphBase> {
    vertex: G::VertexId,
    via: Option<G::EdgeId>,
    // Remaining neighbors in reverse order so that popping yields them in the
    // order the graph reports them. `None` until the vertex is opened.
    neighbors: Option<Vec<(G::VertexId, G::EdgeId)>>,
}

impl<G: Neighbors> RawDfsExtraItem<G> {
    fn open(vertex: G::VertexId, via: Option<G::EdgeId>, graph: &G) -> Self {
        let mut neighbors = graph
            .neighbors_directed(&vertex, Direction::Outgoing)
            .map(|n| (n.id, n.edge))
            .collect::<Vec<_>>();
        neighbors.reverse();

        Self {
            vertex,
            via,
            neighbors: Some(neighbors),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawDfsExtraEvent<VI> {
    Open(VI),
    Close(VI),
}

// Stack of "iterators" as described in
// https://11011110.github.io/blog/2013/12/17/stack-based-graph-traversal.html.
// Each frame remembers the neighbors it has not examined yet, which gives a
// true DFS order and lets back edges be told apart from tree edges.
impl<G: GraphBase> RawAlgo<G> for RawDfsExtra {
    type Item = RawDfsExtraItem<G>;
    type Collection = Stack<RawDfsExtraItem<G>>;

    fn vertex(item: &RawDfsExtraItem<G>) -> G::VertexId {
        item.vertex.clone()
    }

    fn start(root: G::VertexId) -> RawDfsExtraItem<G> {
        RawDfsExtraItem {
            vertex: root,
            via: None,
            neighbors: None,
        }
    }

    fn visit_on_start() -> bool {
        false
    }
}

impl<G: GraphBase> RawVisit<G, RawDfsExtra> {
    /// Advances the traversal by one open or close step.
    ///
    /// The edge over which a vertex was discovered is never examined again
    /// from the other side. In undirected graphs this prevents the tree edge
    /// from being reported as a back edge, while a parallel edge to the parent
    /// is still reported.
    pub fn next<F>(&mut self, graph: &G, mut f: F) -> Option<RawDfsExtraEvent<G::VertexId>>
    where
        G: Neighbors,
        F: FnMut(RawEvent<G>),
    {
        loop {
            let mut item = self.collection.pop()?;

            let neighbors = match item.neighbors.as_mut() {
                Some(neighbors) => neighbors,
                None => {
                    if !self.visited.visit(item.vertex.clone()) {
                        continue;
                    }

                    let vertex = item.vertex;
                    self.collection
                        .push(RawDfsExtraItem::open(vertex.clone(), None, graph));
                    return Some(RawDfsExtraEvent::Open(vertex));
                }
            };

            while let Some((u, e)) = neighbors.pop() {
                if item.via.as_ref() == Some(&e) {
                    continue;
                }

                let from = (item.vertex.clone(), e.clone());

                if self.visited.visit(u.clone()) {
                    f(RawEvent::Push {
                        vertex: u.clone(),
                        from,
                    });

                    // Not all neighbors processed yet. Return the vertex back
                    // to the stack before descending.
                    self.collection.push(item);
                    self.collection
                        .push(RawDfsExtraItem::open(u.clone(), Some(e), graph));
                    return Some(RawDfsExtraEvent::Open(u));
                } else {
                    f(RawEvent::Skip { vertex: u, from });
                }
            }

            return Some(RawDfsExtraEvent::Close(item.vertex));
        }
    }
}
