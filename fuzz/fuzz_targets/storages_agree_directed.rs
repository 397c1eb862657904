#![no_main]

use libfuzzer_sys::fuzz_target;

use gradus::{
    algo::{is_cyclic, ShortestPaths, StronglyConnectedComponents, TopoSort},
    core::{
        error::AddEdgeErrorKind,
        marker::{Directed, Direction},
        EdgeSet, Neighbors, VertexSet,
    },
    infra::{
        arbitrary::{GrowOpResult, GrowOpsSeq},
        testing::check_consistency,
    },
    storage::{AdjList, AdjMatrix},
};

fuzz_target!(|ops: GrowOpsSeq<u8>| {
    let mut adj_list = AdjList::<_, Directed>::new();
    let mut adj_matrix = AdjMatrix::<_, Directed>::new();

    for op in ops {
        let op_result = op.clone().apply(&mut adj_matrix);

        // The matrix rejects multi edges, so the list must not get them
        // either.
        let is_multi_edge = matches!(op_result, GrowOpResult::AddEdge(Err(error)) if error.kind == AddEdgeErrorKind::MultiEdge);

        if !is_multi_edge {
            op.apply(&mut adj_list);
        }
    }

    for (result, label) in [
        (check_consistency(&adj_list), "AdjList"),
        (check_consistency(&adj_matrix), "AdjMatrix"),
    ] {
        if let Err(error) = result {
            panic!("{label} is inconsistent: {error}");
        }
    }

    assert_eq!(adj_list.vertex_count(), adj_matrix.vertex_count());
    assert_eq!(adj_list.edge_count(), adj_matrix.edge_count());

    for v in adj_list.vertices_by_id() {
        for dir in [Direction::Outgoing, Direction::Incoming] {
            assert_eq!(
                adj_list.degree_directed(&v, dir),
                adj_matrix.degree_directed(&v, dir),
                "{dir:?} degree of {v:?}"
            );
        }
    }

    assert_eq!(is_cyclic(&adj_list), is_cyclic(&adj_matrix));
    assert_eq!(
        TopoSort::on(&adj_list).run().is_ok(),
        TopoSort::on(&adj_matrix).run().is_ok()
    );
    assert_eq!(
        StronglyConnectedComponents::on(&adj_list).run().len(),
        StronglyConnectedComponents::on(&adj_matrix).run().len()
    );

    let Some(source) = adj_list.vertices_by_id().next() else {
        return;
    };

    // Sums of small weights would overflow in the weight type itself.
    let weight = |w: &u8| u64::from(*w);
    let from_list = ShortestPaths::on(&adj_list)
        .edge_weight_fn(weight)
        .dial(u8::MAX as usize)
        .run(source);
    let from_matrix = ShortestPaths::on(&adj_matrix)
        .edge_weight_fn(weight)
        .dial(u8::MAX as usize)
        .run(source);

    match (from_list, from_matrix) {
        (Ok(from_list), Ok(from_matrix)) => {
            for v in adj_list.vertices_by_id() {
                assert_eq!(from_list.dist(v), from_matrix.dist(v), "distance to {v:?}");
            }
        }
        (from_list, from_matrix) => panic!(
            "runs disagree: {:?} vs {:?}",
            from_list.err(),
            from_matrix.err()
        ),
    }
});
