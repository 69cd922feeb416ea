#![no_main]

use libfuzzer_sys::fuzz_target;

use undigraph::{
    algo::{is_path_between, ConnectedComponents, Paths},
    infra::{
        arbitrary::Index,
        testing::{check_components, check_consistency, check_paths},
    },
    Graph,
};

fuzz_target!(|input: (Graph, Index, Index)| {
    let (graph, v, w) = input;

    check_consistency(&graph)
        .as_ref()
        .map_err(ToString::to_string)
        .unwrap();

    let components = ConnectedComponents::on(&graph).run();
    check_components(&graph, &components)
        .as_ref()
        .map_err(ToString::to_string)
        .unwrap();

    let n = graph.vertex_count();
    let (Some(v), Some(w)) = (v.get(n), w.get(n)) else {
        return;
    };

    let paths = Paths::on(&graph).run(v).unwrap();
    check_paths(&graph, &paths)
        .as_ref()
        .map_err(ToString::to_string)
        .unwrap();

    assert_eq!(
        is_path_between(&graph, v, w).unwrap(),
        components.connected(v, w)
    );
});
