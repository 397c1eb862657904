use log::debug;

use crate::{
    adapt::Transpose,
    core::{marker::Directed, GraphBase, Neighbors, VertexSet},
    visit::{Dfs, DfsPostOrder, VisitSet, Visitor},
};

pub fn kosaraju<G>(graph: &G) -> Vec<Vec<G::VertexId>>
where
    G: GraphBase<EdgeType = Directed> + Neighbors + VertexSet,
{
    let mut traversal = DfsPostOrder::new(graph);
    let finished = traversal
        .start_all(graph)
        .into_iter(graph)
        .collect::<Vec<_>>();

    let transposed = Transpose::new(graph);
    let mut traversal = Dfs::new(&transposed);

    let mut components = Vec::new();

    for vertex in finished.into_iter().rev() {
        if traversal.visited().is_visited(&vertex) {
            continue;
        }

        let component = traversal
            .start(vertex)
            .into_iter(&transposed)
            .collect::<Vec<_>>();

        components.push(component);
    }

    debug!("kosaraju: {} strongly connected components", components.len());

    components
}
