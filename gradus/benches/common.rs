#![allow(dead_code)]

use fastrand::Rng;
use gradus::core::{id::VertexId, marker::EdgeType};
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_count: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_count,
            p,
        }
    }

    /// Next edge `(v, w)` with `w < v`. Directed graphs generated this way
    /// are acyclic.
    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        // Based on the implementation in gradus::infra::proptest.

        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n { Some((*v, *w)) } else { None }
    }
}

pub fn gradus_random<Ty: EdgeType>(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> gradus::storage::AdjList<u32, Ty> {
    let mut graph = gradus::storage::AdjList::with_vertices(vertex_count);
    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(VertexId::from(u), VertexId::from(v), rng.u32(0..10));
    }

    graph
}

pub fn gradus_random_directed(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> gradus::storage::AdjList<u32, gradus::core::marker::Directed> {
    gradus_random(vertex_count, density, rng)
}

pub fn gradus_random_undirected(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> gradus::storage::AdjList<u32, gradus::core::marker::Undirected> {
    gradus_random(vertex_count, density, rng)
}

pub fn petgraph_random<Ty: petgraph::EdgeType>(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> petgraph::Graph<(), u32, Ty> {
    let mut graph = petgraph::Graph::with_capacity(vertex_count, 0);

    for _ in 0..vertex_count {
        graph.add_node(());
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), rng.u32(0..10));
    }

    graph
}

pub fn petgraph_random_directed(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> petgraph::Graph<(), u32, petgraph::Directed> {
    petgraph_random(vertex_count, density, rng)
}
