use std::collections::hash_map::Entry;

use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    core::{
        marker::Direction,
        weight::{GetWeight, Weight},
        GraphRef, Neighbors,
    },
    visit::VisitSet,
};

use super::{Error, ShortestPaths};

pub fn dial<G, E, W, F>(
    graph: &G,
    sources: Vec<G::VertexId>,
    goal: Option<G::VertexId>,
    edge_weight: &F,
    max_weight: usize,
) -> Result<ShortestPaths<W, G>, Error>
where
    G: Neighbors + GraphRef<E>,
    F: GetWeight<E, W>,
    W: Weight,
{
    let mut ring = Ring::new(max_weight);

    let mut settled = FxHashSet::default();
    let mut dist = FxHashMap::default();
    let mut pred = FxHashMap::default();

    for source in sources.iter() {
        if let Entry::Vacant(slot) = dist.entry(source.clone()) {
            slot.insert(W::zero());
            ring.push(0, (source.clone(), W::zero()));
        }
    }

    let mut cursor = 0usize;
    let mut goal_reached = false;

    'search: while !ring.is_empty() {
        while let Some((vertex, vertex_dist)) = ring.pop(cursor) {
            // A vertex is pushed again whenever its distance improves. Only
            // the first pop carries the final distance.
            if !settled.visit(vertex.clone()) {
                continue;
            }

            if goal.as_ref() == Some(&vertex) {
                goal_reached = true;
                break 'search;
            }

            for neighbor in graph.neighbors_directed(&vertex, Direction::Outgoing) {
                if settled.is_visited(&neighbor.id) {
                    continue;
                }

                let weight = weight_of(graph, &neighbor.edge, edge_weight)?;
                let bits = weight_bits(&weight, max_weight)?;
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

                let key = ring.reserve(cursor, bits)?;
                pred.insert(neighbor.id.clone(), vertex.clone());
                ring.push(key, (neighbor.id, next_dist));
            }
        }

        cursor += 1;
    }

    if goal.is_some() {
        if !goal_reached {
            return Err(Error::GoalNotReached);
        }

        // Distances of vertices not settled before the goal may not be final.
        dist.retain(|vertex, _| settled.contains(vertex));
        pred.retain(|vertex, _| settled.contains(vertex));
    }

    trace!(
        "dial scanned {} distances with {} buckets",
        cursor,
        ring.buckets.len()
    );
    debug!(
        "dial from {} sources reached {} vertices",
        sources.len(),
        dist.len()
    );

    Ok(ShortestPaths {
        sources,
        dist,
        pred,
    })
}

pub(super) fn weight_of<G, E, W, F>(
    graph: &G,
    edge: &G::EdgeId,
    edge_weight: &F,
) -> Result<W, Error>
where
    G: GraphRef<E>,
    F: GetWeight<E, W>,
    W: Weight,
{
    match edge_weight.get_const() {
        Some(weight) => Ok(weight),
        None => graph
            .edge(edge)
            .map(|attr| edge_weight.get(attr))
            .ok_or(Error::EdgeNotAvailable),
    }
}

pub(super) fn weight_bits<W: Weight>(weight: &W, max_weight: usize) -> Result<usize, Error> {
    let bits = weight.to_bits().ok_or(Error::NegativeWeight)?;

    match usize::try_from(bits) {
        Ok(bits) if bits <= max_weight => Ok(bits),
        _ => Err(Error::WeightOutOfRange {
            weight: bits,
            max: max_weight as u64,
        }),
    }
}

/// Circular bucket queue keyed by tentative distance.
///
/// Pending keys lie in `cursor..=cursor + w` where `w` is the largest weight
/// seen so far, so `w + 1` buckets never mix two keys in one bucket. The ring
/// starts with one bucket and grows with the weights actually encountered,
/// never beyond `max_weight + 1`.
struct Ring<T> {
    buckets: Vec<Vec<(usize, T)>>,
    limit: usize,
    pending: usize,
}

impl<T> Ring<T> {
    fn new(max_weight: usize) -> Self {
        Self {
            buckets: vec![Vec::new()],
            limit: max_weight.saturating_add(1),
            pending: 0,
        }
    }

    fn is_empty(&self) -> bool {
        self.pending == 0
    }

    fn push(&mut self, key: usize, item: T) {
        let len = self.buckets.len();
        self.buckets[key % len].push((key, item));
        self.pending += 1;
    }

    fn pop(&mut self, key: usize) -> Option<T> {
        let len = self.buckets.len();
        let (_, item) = self.buckets[key % len].pop()?;
        self.pending -= 1;
        Some(item)
    }

    /// Makes room for an edge of weight `bits` relaxed at `cursor` and returns
    /// the key of its head.
    fn reserve(&mut self, cursor: usize, bits: usize) -> Result<usize, Error> {
        let unavailable = || Error::BucketsUnavailable { weight: bits as u64 };

        let key = cursor.checked_add(bits).ok_or_else(unavailable)?;
        let needed = bits.checked_add(1).ok_or_else(unavailable)?;
        let len = self.buckets.len();

        if needed <= len {
            return Ok(key);
        }

        let grown = len.saturating_mul(2).min(self.limit).max(needed);

        let mut buckets = Vec::new();
        buckets
            .try_reserve_exact(grown)
            .map_err(|_| unavailable())?;
        buckets.resize_with(grown, Vec::new);

        for (key, item) in self.buckets.drain(..).flatten() {
            buckets[key % grown].push((key, item));
        }

        self.buckets = buckets;
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn ring_grows_with_weights() {
        let mut ring = Ring::new(usize::MAX);
        assert_eq!(ring.buckets.len(), 1);

        ring.push(0, 'a');
        let key = ring.reserve(0, 3).unwrap();
        ring.push(key, 'b');
        assert_eq!(ring.buckets.len(), 4);

        let key = ring.reserve(1, 5).unwrap();
        ring.push(key, 'c');
        assert_eq!(ring.buckets.len(), 8);

        assert_eq!(ring.pop(0), Some('a'));
        assert_eq!(ring.pop(1), None);
        assert_eq!(ring.pop(3), Some('b'));
        assert_eq!(ring.pop(6), Some('c'));
        assert!(ring.is_empty());
    }

    #[test]
    fn ring_never_exceeds_limit() {
        let mut ring = Ring::<()>::new(5);

        ring.reserve(0, 3).unwrap();
        assert_eq!(ring.buckets.len(), 4);

        ring.reserve(0, 4).unwrap();
        assert_eq!(ring.buckets.len(), 6);
    }

    #[test]
    fn ring_beyond_address_space() {
        let mut ring = Ring::<()>::new(usize::MAX);

        assert_matches!(
            ring.reserve(0, usize::MAX),
            Err(Error::BucketsUnavailable { .. })
        );
        assert_matches!(
            ring.reserve(usize::MAX, 1),
            Err(Error::BucketsUnavailable { .. })
        );
    }
}
