use std::{fmt, marker::PhantomData};

use proptest::{
    prelude::Rng,
    strategy::{NewTree, Strategy, ValueTree},
    test_runner::TestRunner,
};
use rustc_hash::FxHashSet;

use crate::{
    core::{
        id::VertexId,
        marker::{Directed, EdgeType, Undirected},
    },
    storage::AdjList,
};

pub fn graph<E: Strategy, Ty: EdgeType>(edge: E) -> GraphStrategy<E, Ty> {
    GraphStrategy::new(edge)
}

pub fn graph_undirected<E: Strategy>(edge: E) -> GraphStrategy<E, Undirected> {
    GraphStrategy::new(edge)
}

pub fn graph_directed<E: Strategy>(edge: E) -> GraphStrategy<E, Directed> {
    GraphStrategy::new(edge)
}

/// Generates [`AdjList`] graphs with edge attributes drawn from the inner
/// strategy.
///
/// Vertices carry no data, so shrinking removes vertices and edges first and
/// then simplifies the edge attributes.
pub struct GraphStrategy<E: Strategy, Ty: EdgeType> {
    edge: E,
    ty: PhantomData<fn() -> Ty>,
    params: StrategyParams,
}

// Ty is a marker, it should not need to implement Debug.
impl<E: Strategy, Ty: EdgeType> fmt::Debug for GraphStrategy<E, Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphStrategy")
            .field("edge", &self.edge)
            .field("directed", &Ty::is_directed())
            .field("params", &self.params)
            .finish()
    }
}

macro_rules! delegate_builder_fn {
    ($name:ident$(, $param:ident: $param_type:ty)*) => {
        #[doc = concat!("See [StrategyParams::", stringify!($name), "](StrategyParams::", stringify!($name), ") for details.")]
        pub fn $name(self, $($param: $param_type),*) -> Self {
            Self {
                params: self.params.$name($($param,)*),
                ..self
            }
        }
    }
}

impl<E: Strategy, Ty: EdgeType> GraphStrategy<E, Ty> {
    pub fn new(edge: E) -> Self {
        Self::with_params(edge, StrategyParams::default())
    }

    pub fn with_params(edge: E, params: StrategyParams) -> Self {
        Self {
            edge,
            ty: PhantomData,
            params,
        }
    }

    // Builder pattern on the strategy itself to allow usage as in
    // `graph_directed(0..10).max_size(100).acyclic()`.
    delegate_builder_fn!(max_size, max_size: usize);
    delegate_builder_fn!(acyclic);
    delegate_builder_fn!(allow_loops);
    delegate_builder_fn!(multi_edge_prob, multi_edge_prob: f32);
    delegate_builder_fn!(density, density: f32);
    delegate_builder_fn!(sparse);
}

#[derive(Debug, Clone)]
pub struct StrategyParams {
    max_size: usize,
    acyclic: bool,
    allow_loops: bool,
    multi_edge_prob: f32,
    // (0, 1] - 1 means no limitation in choosing p, lower values artificially decrease chosen p
    density: f32,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_size: 256,
            acyclic: false,
            allow_loops: false,
            multi_edge_prob: 0.0,
            density: 1.0,
        }
    }
}

impl StrategyParams {
    pub fn max_size(self, max_size: usize) -> Self {
        Self { max_size, ..self }
    }

    /// For directed graphs, all edges go from a higher to a lower vertex. For
    /// undirected graphs, the result is a forest.
    pub fn acyclic(self) -> Self {
        Self {
            acyclic: true,
            ..self
        }
    }

    pub fn allow_loops(self) -> Self {
        Self {
            allow_loops: true,
            ..self
        }
    }

    pub fn multi_edge_prob(self, multi_edge_prob: f32) -> Self {
        assert!(
            (0.0..=0.1).contains(&multi_edge_prob),
            "multi edge probability must be in [0, 0.1] range"
        );
        Self {
            multi_edge_prob,
            ..self
        }
    }

    pub fn density(self, density: f32) -> Self {
        assert!(
            density > 0.0 && density <= 1.0,
            "density must be in (0, 1] range"
        );
        Self { density, ..self }
    }

    pub fn sparse(self) -> Self {
        self.density(0.05)
    }
}

impl<E: Strategy, Ty: EdgeType + fmt::Debug> Strategy for GraphStrategy<E, Ty> {
    type Tree = GraphValueTree<E::Tree, Ty>;
    type Value = AdjList<E::Value, Ty>;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        let params = &self.params;
        let n = runner.rng().gen_range(0..=params.max_size);
        let p = runner.rng().gen::<f32>() * params.density;

        // Efficient generation of large random networks
        // http://vlado.fmf.uni-lj.si/pub/networks/doc/ms/rndgen.pdf

        let m_guess = if n > 0 {
            ((n * (n - 1) / 2) as f32 * p).round() as usize
        } else {
            0
        };
        let mut edges = Vec::with_capacity(m_guess);

        // Undirected acyclic graphs are kept a forest by refusing edges that
        // join two vertices of the same tree.
        let forest = !Ty::is_directed() && params.acyclic;
        let mut roots = (0..n).collect::<Vec<_>>();

        let mut v = 1;
        let mut w = usize::MAX; // -1

        while v < n {
            let r: f32 = runner.rng().gen();
            let skip = ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;
            w = w.wrapping_add(1).saturating_add(skip);

            let loops = params.allow_loops && !params.acyclic;

            if loops {
                // Using `w > v` instead of `w >= v` to allow loops.
                while w > v && v < n {
                    w -= v;
                    v += 1;
                }
            } else {
                while w >= v && v < n {
                    w -= v;
                    v += 1;
                }
            }

            if v >= n {
                break;
            }

            if forest {
                let (rv, rw) = (find_root(&mut roots, v), find_root(&mut roots, w));
                if rv == rw {
                    continue;
                }
                roots[rv] = rw;
            }

            // For directed acyclic graph or in half of the cases, pick the
            // vertices such that the source is the greater one. In other
            // cases, swap the vertices so that a directed cycle is possible.
            let (s, t) = if Ty::is_directed() && params.acyclic || runner.rng().gen_bool(0.5) {
                (v, w)
            } else {
                (w, v)
            };

            edges.push((s, t, self.edge.new_tree(runner)?));

            if forest {
                continue;
            }

            while runner.rng().gen_bool(params.multi_edge_prob as f64) {
                edges.push((s, t, self.edge.new_tree(runner)?));
            }
        }

        Ok(GraphValueTree {
            vertex_count: n,
            edges,
            structure: None,
            attr: None,
            ty: PhantomData,
        })
    }
}

fn find_root(roots: &mut [usize], mut v: usize) -> usize {
    while roots[v] != v {
        roots[v] = roots[roots[v]];
        v = roots[v];
    }
    v
}

pub struct GraphValueTree<E: ValueTree, Ty: EdgeType> {
    vertex_count: usize,
    edges: Vec<(usize, usize, E)>,
    structure: Option<ShrinkStructureState>,
    attr: Option<ShrinkAttrState>,
    ty: PhantomData<fn() -> Ty>,
}

impl<E: ValueTree + Clone, Ty: EdgeType> Clone for GraphValueTree<E, Ty> {
    fn clone(&self) -> Self {
        Self {
            vertex_count: self.vertex_count,
            edges: self.edges.clone(),
            structure: self.structure.clone(),
            attr: self.attr.clone(),
            ty: PhantomData,
        }
    }
}

impl<E: ValueTree, Ty: EdgeType> fmt::Debug for GraphValueTree<E, Ty>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphValueTree")
            .field("vertex_count", &self.vertex_count)
            .field("edges", &self.edges)
            .field("structure", &self.structure)
            .field("attr", &self.attr)
            .finish()
    }
}

impl<E: ValueTree, Ty: EdgeType + fmt::Debug> ValueTree for GraphValueTree<E, Ty> {
    type Value = AdjList<E::Value, Ty>;

    fn current(&self) -> Self::Value {
        let empty = Removed::default();
        let removed = self
            .structure
            .as_ref()
            .map(|state| &state.current)
            .unwrap_or(&empty);

        let mut graph = AdjList::new();

        // Surviving vertices are renumbered densely.
        let ids = (0..self.vertex_count)
            .map(|v| (!removed.vertices.contains(&v)).then(|| graph.add_vertex()))
            .collect::<Vec<Option<VertexId>>>();

        for (e, (src, dst, edge)) in self.edges.iter().enumerate() {
            if removed.edges.contains(&e) {
                continue;
            }

            if let (Some(src), Some(dst)) = (ids[*src], ids[*dst]) {
                graph.add_edge(src, dst, edge.current());
            }
        }

        graph
    }

    fn simplify(&mut self) -> bool {
        // The structure is simplified first, starting with aggressive removal
        // of all vertices with the lowest degree, then one vertex at a time and
        // one edge at a time. Removing a vertex drops its edges too, so it has
        // a larger effect than removing the edges individually. Only then the
        // edge attributes are simplified.

        let structure = self
            .structure
            .get_or_insert_with(ShrinkStructureState::new);
        let attr = self.attr.get_or_insert_with(ShrinkAttrState::new);

        structure.simplify(self.vertex_count, &self.edges)
            || attr.simplify(&mut self.edges, structure)
    }

    fn complicate(&mut self) -> bool {
        let (structure, attr) = match (self.structure.as_mut(), self.attr.as_mut()) {
            (Some(structure), Some(attr)) => (structure, attr),
            // Nothing was simplified yet.
            _ => return false,
        };

        structure.complicate(self.vertex_count, &self.edges) || attr.complicate(&mut self.edges)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShrinkStructure {
    VertexWithDegree,
    Vertex(usize),
    Edge(usize),
}

#[derive(Debug, Clone, Default)]
struct Removed {
    vertices: FxHashSet<usize>,
    edges: FxHashSet<usize>,
}

#[derive(Debug, Clone)]
struct ShrinkStructureState {
    current: Removed,
    high: Option<Removed>,
    command: Option<ShrinkStructure>,
}

impl ShrinkStructureState {
    fn new() -> Self {
        Self {
            current: Removed::default(),
            high: None,
            command: Some(ShrinkStructure::VertexWithDegree),
        }
    }

    fn simplify<E>(&mut self, vertex_count: usize, edges: &[(usize, usize, E)]) -> bool {
        let command = match self.command {
            Some(command) => command,
            None => return false,
        };

        if self.current.vertices.len() == vertex_count {
            // Empty graph.
            return false;
        }

        self.high = Some(self.current.clone());

        match command {
            ShrinkStructure::VertexWithDegree => {
                let degrees = self.degrees(vertex_count, edges);
                let min_degree = (0..vertex_count)
                    .filter(|&v| self.vertex_exists(v))
                    .map(|v| degrees[v])
                    .min()
                    .unwrap_or_default();

                let remove = (0..vertex_count)
                    .filter(|&v| self.vertex_exists(v) && degrees[v] == min_degree)
                    .collect::<Vec<_>>();

                self.current.vertices.extend(remove);
            }
            ShrinkStructure::Vertex(v) => {
                self.command = self.next_command(vertex_count, edges);
                self.current.vertices.insert(v);
            }
            ShrinkStructure::Edge(e) => {
                self.command = self.next_command(vertex_count, edges);
                self.current.edges.insert(e);
            }
        }

        true
    }

    fn complicate<E>(&mut self, vertex_count: usize, edges: &[(usize, usize, E)]) -> bool {
        self.current = match self.high.take() {
            Some(high) => high,
            None => return false,
        };

        if self.command == Some(ShrinkStructure::VertexWithDegree) {
            self.command = self.next_command(vertex_count, edges);
        }

        true
    }

    fn degrees<E>(&self, vertex_count: usize, edges: &[(usize, usize, E)]) -> Vec<usize> {
        let mut degrees = vec![0; vertex_count];

        for (e, &(src, dst, _)) in edges.iter().enumerate() {
            if self.edge_exists(e, (src, dst)) {
                degrees[src] += 1;
                degrees[dst] += 1;
            }
        }

        degrees
    }

    fn vertex_exists(&self, v: usize) -> bool {
        !self.current.vertices.contains(&v)
    }

    fn edge_exists(&self, e: usize, (src, dst): (usize, usize)) -> bool {
        !(self.current.vertices.contains(&src)
            || self.current.vertices.contains(&dst)
            || self.current.edges.contains(&e))
    }

    fn next_edge<E>(&self, from: usize, edges: &[(usize, usize, E)]) -> Option<ShrinkStructure> {
        (from..edges.len())
            .find(|&e| {
                let (src, dst, _) = edges[e];
                self.edge_exists(e, (src, dst))
            })
            .map(ShrinkStructure::Edge)
    }

    fn next_command<E>(
        &self,
        vertex_count: usize,
        edges: &[(usize, usize, E)],
    ) -> Option<ShrinkStructure> {
        match self.command? {
            ShrinkStructure::VertexWithDegree => (0..vertex_count)
                .find(|&v| self.vertex_exists(v))
                .map(ShrinkStructure::Vertex),
            ShrinkStructure::Vertex(v) => ((v + 1)..vertex_count)
                .find(|&w| self.vertex_exists(w))
                .map(ShrinkStructure::Vertex)
                .or_else(|| self.next_edge(0, edges)),
            ShrinkStructure::Edge(e) => self.next_edge(e + 1, edges),
        }
    }
}

#[derive(Debug, Clone)]
struct ShrinkAttrState {
    next: usize,
    previous: Option<usize>,
}

// The implementation follows VecValueTree from proptest, walking the edges one
// by one.
impl ShrinkAttrState {
    fn new() -> Self {
        Self {
            next: 0,
            previous: None,
        }
    }

    fn simplify<E: ValueTree>(
        &mut self,
        edges: &mut [(usize, usize, E)],
        structure: &ShrinkStructureState,
    ) -> bool {
        while self.next < edges.len() {
            let e = self.next;
            let (src, dst, edge) = &mut edges[e];

            if structure.edge_exists(e, (*src, *dst)) && edge.simplify() {
                self.previous = Some(e);
                return true;
            }

            self.next += 1;
        }

        false
    }

    fn complicate<E: ValueTree>(&mut self, edges: &mut [(usize, usize, E)]) -> bool {
        match self.previous {
            None => false,
            Some(e) => {
                if edges[e].2.complicate() {
                    true
                } else {
                    self.previous = None;
                    false
                }
            }
        }
    }
}
