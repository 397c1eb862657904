use std::collections::{hash_map::Entry, VecDeque};

use log::debug;
use rustc_hash::FxHashMap;

use crate::core::{marker::Direction, weight::Weight, Neighbors};

use super::{Error, ShortestPaths};

pub fn bfs<G, W>(
    graph: &G,
    sources: Vec<G::VertexId>,
    goal: Option<G::VertexId>,
    edge_dist: W,
) -> Result<ShortestPaths<W, G>, Error>
where
    G: Neighbors,
    W: Weight,
{
    // The check for unsignedness should eliminate the negativity weight check,
    // because the implementation of `is_unsigned` method is always a constant
    // boolean in practice.
    if !W::is_unsigned() && edge_dist < W::zero() {
        return Err(Error::NegativeWeight);
    }

    let mut dist = FxHashMap::default();
    let mut pred = FxHashMap::default();
    let mut queue = VecDeque::new();

    for source in sources.iter() {
        if let Entry::Vacant(slot) = dist.entry(source.clone()) {
            slot.insert(W::zero());
            queue.push_back((source.clone(), W::zero()));
        }
    }

    let mut goal_reached = false;

    while let Some((vertex, vertex_dist)) = queue.pop_front() {
        if goal.as_ref() == Some(&vertex) {
            goal_reached = true;
            break;
        }

        for neighbor in graph.neighbors_directed(&vertex, Direction::Outgoing) {
            // With equal weights, the first discovery is along a shortest
            // path.
            if let Entry::Vacant(slot) = dist.entry(neighbor.id.clone()) {
                let next_dist = vertex_dist.clone() + edge_dist.clone();
                slot.insert(next_dist.clone());
                pred.insert(neighbor.id.clone(), vertex.clone());
                queue.push_back((neighbor.id, next_dist));
            }
        }
    }

    if goal.is_some() && !goal_reached {
        return Err(Error::GoalNotReached);
    }

    debug!(
        "bfs from {} sources reached {} vertices",
        sources.len(),
        dist.len()
    );

    Ok(ShortestPaths {
        sources,
        dist,
        pred,
    })
}
