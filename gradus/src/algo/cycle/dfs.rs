use log::debug;
use rustc_hash::FxHashMap;

use crate::{
    core::{Neighbors, VertexSet},
    visit::{DfsEvent, DfsEvents, Visitor},
};

/// Searches all components and returns the first back edge found, together
/// with the cycle it closes.
pub(super) fn dfs_find<G>(graph: &G) -> Option<(Vec<G::VertexId>, G::EdgeId)>
where
    G: Neighbors + VertexSet,
{
    let mut pred = FxHashMap::default();

    for event in DfsEvents::new(graph).start_all(graph).iter(graph) {
        match event {
            DfsEvent::TreeEdge { from, to, .. } => {
                pred.insert(to, from);
            }
            DfsEvent::BackEdge { from, to, edge } => {
                debug!("back edge {from:?} -> {to:?} closes a cycle");
                return walk_back(&pred, from, to).map(|vertices| (vertices, edge));
            }
            _ => {}
        }
    }

    None
}

/// Builds the cycle closed by the back edge `from -> to` by following the
/// DFS tree from `from` up to its ancestor `to`.
///
/// Returns `None` if `to` is not an ancestor of `from`.
pub(crate) fn walk_back<VI>(pred: &FxHashMap<VI, VI>, from: VI, to: VI) -> Option<Vec<VI>>
where
    VI: Clone + Eq + std::hash::Hash,
{
    let mut vertices = vec![from.clone()];
    let mut curr = from;

    while curr != to {
        curr = pred.get(&curr)?.clone();
        vertices.push(curr.clone());
    }

    vertices.reverse();
    vertices.push(to);

    Some(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_back_to_ancestor() {
        let pred = FxHashMap::from_iter([(1, 0), (2, 1), (3, 2)]);

        assert_eq!(walk_back(&pred, 3, 1), Some(vec![1, 2, 3, 1]));
        assert_eq!(walk_back(&pred, 2, 2), Some(vec![2, 2]));
        assert_eq!(walk_back(&pred, 1, 3), None);
    }
}
