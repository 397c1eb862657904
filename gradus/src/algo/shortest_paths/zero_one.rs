use std::collections::{hash_map::Entry, VecDeque};

use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    core::{
        marker::Direction,
        weight::{GetWeight, Weight},
        GraphRef, Neighbors,
    },
    visit::VisitSet,
};

use super::{
    dial::{weight_bits, weight_of},
    Error, ShortestPaths,
};

pub fn zero_one<G, E, W, F>(
    graph: &G,
    sources: Vec<G::VertexId>,
    goal: Option<G::VertexId>,
    edge_weight: &F,
) -> Result<ShortestPaths<W, G>, Error>
where
    G: Neighbors + GraphRef<E>,
    F: GetWeight<E, W>,
    W: Weight,
{
    let mut settled = FxHashSet::default();
    let mut dist = FxHashMap::default();
    let mut pred = FxHashMap::default();
    let mut deque = VecDeque::new();

    for source in sources.iter() {
        if let Entry::Vacant(slot) = dist.entry(source.clone()) {
            slot.insert(W::zero());
            deque.push_back((source.clone(), W::zero()));
        }
    }

    let mut goal_reached = false;

    while let Some((vertex, vertex_dist)) = deque.pop_front() {
        if !settled.visit(vertex.clone()) {
            continue;
        }

        if goal.as_ref() == Some(&vertex) {
            goal_reached = true;
            break;
        }

        for neighbor in graph.neighbors_directed(&vertex, Direction::Outgoing) {
            if settled.is_visited(&neighbor.id) {
                continue;
            }

            let weight = weight_of(graph, &neighbor.edge, edge_weight)?;
            let is_free = weight_bits(&weight, 1)? == 0;
            let next_dist = vertex_dist.clone() + weight;

            match dist.entry(neighbor.id.clone()) {
                Entry::Occupied(mut slot) => {
                    if next_dist >= *slot.get() {
                        continue;
                    }
                    slot.insert(next_dist.clone());
                }
                Entry::Vacant(slot) => {
                    slot.insert(next_dist.clone());
                }
            }

            pred.insert(neighbor.id.clone(), vertex.clone());

            // Zero-weight edges keep the distance, so the vertex goes in front
            // of everything farther.
            if is_free {
                deque.push_front((neighbor.id, next_dist));
            } else {
                deque.push_back((neighbor.id, next_dist));
            }
        }
    }

    if goal.is_some() {
        if !goal_reached {
            return Err(Error::GoalNotReached);
        }

        dist.retain(|vertex, _| settled.contains(vertex));
        pred.retain(|vertex, _| settled.contains(vertex));
    }

    debug!(
        "0-1 bfs from {} sources reached {} vertices",
        sources.len(),
        dist.len()
    );

    Ok(ShortestPaths {
        sources,
        dist,
        pred,
    })
}
