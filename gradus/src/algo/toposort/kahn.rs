use std::collections::VecDeque;

use log::debug;

use crate::{
    algo::Cycle,
    core::{
        id::{IdType, IntegerIdType},
        marker::{Directed, Direction},
        GraphBase, Neighbors, VertexSet,
    },
};

use super::{Error, TopoSort};

pub(super) fn kahn<G>(graph: &G) -> Result<TopoSort<G>, Error<G>>
where
    G: GraphBase<EdgeType = Directed> + Neighbors + VertexSet,
    G::VertexId: IntegerIdType,
{
    let mut in_deg = vec![0usize; graph.vertex_bound()];
    let mut queue = VecDeque::new();

    for v in graph.vertices_by_id() {
        let deg = graph.degree_directed(&v, Direction::Incoming);
        in_deg[v.as_usize()] = deg;

        if deg == 0 {
            queue.push_back(v);
        }
    }

    let mut order = Vec::with_capacity(graph.vertex_count());

    while let Some(v) = queue.pop_front() {
        for n in graph.neighbors_directed(&v, Direction::Outgoing) {
            let deg = &mut in_deg[n.id.as_usize()];

            // An exhausted degree means the graph reported more outgoing
            // records than incoming ones.
            match deg.checked_sub(1) {
                Some(0) => {
                    *deg = 0;
                    queue.push_back(n.id);
                }
                Some(rest) => *deg = rest,
                None => {
                    return Err(Error::Stuck {
                        remaining: graph.vertex_count() - order.len(),
                    })
                }
            }
        }

        order.push(v);
    }

    let remaining = graph.vertex_count() - order.len();

    if remaining > 0 {
        debug!("kahn: {remaining} vertices left with incoming edges");

        return Err(match Cycle::on(graph).run() {
            Some(cycle) => Error::Cycle(cycle),
            None => Error::Stuck { remaining },
        });
    }

    Ok(TopoSort { order })
}
