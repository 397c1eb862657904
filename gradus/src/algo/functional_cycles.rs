//! Count the cycles of a [functional graph](Functional).
//!
//! Every vertex of a functional graph has exactly one successor, so each
//! weakly connected component contains exactly one cycle with trees hanging
//! into it. The algorithm follows successors from every vertex not resolved
//! yet, tagging the vertices with the walk that discovered them. A walk that
//! runs into its own tag has closed a new cycle; a walk that runs into a
//! foreign tag has joined an already known component. Every vertex is tagged
//! once, so the whole run is linear.
//!
//! # Examples
//!
//! ```
//! use gradus::{algo::FunctionalCycles, core::id::VertexId, storage::Functional};
//!
//! // 0 -> 1 -> 2 -> 0, 3 -> 2, 4 -> 4
//! let graph = Functional::from_successors([1, 2, 0, 2, 4]).unwrap();
//! let cycles = FunctionalCycles::on(&graph).run();
//!
//! assert_eq!(cycles.count(), 2);
//! assert!(cycles.is_on_cycle(VertexId::from(1usize)));
//! assert!(!cycles.is_on_cycle(VertexId::from(3usize)));
//! ```

use log::debug;

use crate::{
    core::id::{IdType, VertexId},
    storage::Functional,
};

/// Cycles of a functional graph and the membership of vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionalCycles {
    cycles: Vec<Vec<VertexId>>,
    cycle_of: Vec<Option<usize>>,
}

impl FunctionalCycles {
    pub fn on(graph: &Functional) -> FunctionalCyclesBuilder<'_> {
        FunctionalCyclesBuilder { graph }
    }

    /// Number of distinct cycles.
    pub fn count(&self) -> usize {
        self.cycles.len()
    }

    /// Cycles in the order of the smallest vertex of their component. Each
    /// cycle starts with the vertex where the discovering walk entered it.
    pub fn iter(&self) -> impl Iterator<Item = &[VertexId]> + '_ {
        self.cycles.iter().map(Vec::as_slice)
    }

    /// Index of the cycle the vertex lies on, `None` for vertices on the
    /// trees leading into cycles.
    pub fn cycle_of(&self, vertex: VertexId) -> Option<usize> {
        self.cycle_of.get(vertex.as_usize()).copied().flatten()
    }

    pub fn is_on_cycle(&self, vertex: VertexId) -> bool {
        self.cycle_of(vertex).is_some()
    }
}

pub struct FunctionalCyclesBuilder<'a> {
    graph: &'a Functional,
}

impl FunctionalCyclesBuilder<'_> {
    pub fn run(self) -> FunctionalCycles {
        let graph = self.graph;
        let n = graph.len();

        let mut tag = vec![None; n];
        let mut cycle_of = vec![None; n];
        let mut cycles = Vec::new();
        let mut walk: Vec<VertexId> = Vec::new();

        for start in 0..n {
            if tag[start].is_some() {
                continue;
            }

            walk.clear();
            let mut curr = VertexId::from_usize(start);

            loop {
                let index = curr.as_usize();

                if let Some(owner) = tag[index] {
                    if owner == start {
                        // The walk closed on itself. The cycle is the suffix of
                        // the walk starting at the revisited vertex.
                        let entry = walk.iter().position(|&v| v == curr).unwrap_or_default();
                        let members = walk.split_off(entry);

                        for v in members.iter() {
                            cycle_of[v.as_usize()] = Some(cycles.len());
                        }

                        cycles.push(members);
                    }

                    break;
                }

                tag[index] = Some(start);
                walk.push(curr);

                match graph.successor(curr) {
                    Some(next) => curr = next,
                    None => break,
                }
            }
        }

        debug!("functional graph with {n} vertices has {} cycles", cycles.len());

        FunctionalCycles { cycles, cycle_of }
    }
}
