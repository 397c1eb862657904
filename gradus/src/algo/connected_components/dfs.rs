use crate::{
    adapt::Undirect,
    core::{Neighbors, VertexSet},
    visit::{Dfs, VisitSet, Visitor},
};

pub fn dfs<G>(graph: &G) -> Vec<Vec<G::VertexId>>
where
    G: Neighbors + VertexSet,
{
    let undirected = Undirect::new(graph);
    let mut traversal = Dfs::new(&undirected);
    let mut components = Vec::new();

    for root in graph.vertices_by_id() {
        if traversal.visited().is_visited(&root) {
            continue;
        }

        let component = traversal
            .start(root)
            .into_iter(&undirected)
            .collect::<Vec<_>>();

        components.push(component);
    }

    components
}
