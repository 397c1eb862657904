#![no_main]

use libfuzzer_sys::fuzz_target;

use gradus::{
    algo::{Bipartition, ConnectedComponents, Cuts, Cycle, EulerCircuit, ShortestPaths},
    core::{id::VertexId, marker::Undirected, EdgeSet, Neighbors, VertexSet},
    infra::{arbitrary::GrowOpsSeq, testing::check_consistency},
    storage::AdjList,
};

fn adjacent(graph: &AdjList<(), Undirected>, u: VertexId, v: VertexId) -> bool {
    graph.neighbors_undirected(&u).any(|n| n.id == v)
}

fuzz_target!(|ops: GrowOpsSeq<()>| {
    let mut graph = AdjList::<(), Undirected>::new();

    for op in ops {
        op.apply(&mut graph);
    }

    check_consistency(&graph)
        .as_ref()
        .map_err(ToString::to_string)
        .unwrap();

    let Some(source) = graph.vertices_by_id().next() else {
        return;
    };

    let paths = ShortestPaths::on(&graph)
        .unit_weight()
        .bfs()
        .run(source)
        .unwrap();

    for v in graph.vertices_by_id() {
        if let Some(&dist) = paths.dist(v) {
            let path = paths.path_to(v).unwrap();
            assert_eq!(path.len(), dist + 1);
            assert_eq!(path.first(), Some(&source));
            assert_eq!(path.last(), Some(&v));
            assert!(path.windows(2).all(|pair| adjacent(&graph, pair[0], pair[1])));
        }
    }

    if let Some(bipartition) = Bipartition::on(&graph).run() {
        for v in graph.vertices_by_id() {
            for n in graph.neighbors_undirected(&v) {
                assert_ne!(bipartition.side(v), bipartition.side(n.id));
            }
        }
    }

    let components = ConnectedComponents::on(&graph).run();
    let total = components.iter().map(|component| component.len()).sum::<usize>();
    assert_eq!(total, graph.vertex_count());

    if let Some(cycle) = Cycle::on(&graph).run() {
        let vertices = cycle.vertices();
        assert_eq!(vertices.first(), vertices.last());
        assert!(vertices.windows(2).all(|pair| adjacent(&graph, pair[0], pair[1])));
    }

    let cuts = Cuts::on(&graph).run();
    for bridge in cuts.bridges() {
        let (u, v) = graph.endpoints(bridge).unwrap();
        assert_ne!(u, v, "self-loop reported as a bridge");
    }

    if let Ok(circuit) = EulerCircuit::on(&graph).run() {
        assert_eq!(circuit.len(), graph.edge_count());
        let vertices = circuit.vertices();
        assert_eq!(vertices.first(), vertices.last());
    }
});
