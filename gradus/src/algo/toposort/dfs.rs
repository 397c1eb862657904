use log::debug;
use rustc_hash::FxHashMap;

use crate::{
    algo::{cycle::walk_back, Cycle},
    core::{marker::Directed, GraphBase, Neighbors, VertexSet},
    visit::{DfsEvent, DfsEvents, Visitor},
};

use super::{Error, TopoSort};

pub(super) fn dfs<G>(graph: &G) -> Result<TopoSort<G>, Error<G>>
where
    G: GraphBase<EdgeType = Directed> + Neighbors + VertexSet,
{
    let mut order = Vec::with_capacity(graph.vertex_count_hint().unwrap_or_default());
    let mut pred = FxHashMap::default();

    for event in DfsEvents::new(graph).start_all(graph).iter(graph) {
        match event {
            DfsEvent::TreeEdge { from, to, .. } => {
                pred.insert(to, from);
            }
            DfsEvent::BackEdge { from, to, edge } => {
                debug!("toposort: back edge {from:?} -> {to:?}");

                return match walk_back(&pred, from, to) {
                    Some(vertices) => Err(Error::Cycle(Cycle::new(vertices, edge))),
                    None => Err(Error::Stuck {
                        remaining: graph.vertex_count() - order.len(),
                    }),
                };
            }
            DfsEvent::Close { vertex, .. } => order.push(vertex),
            _ => {}
        }
    }

    order.reverse();
    Ok(TopoSort { order })
}
