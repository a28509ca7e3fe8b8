use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use wavefront::gen::{random_edges, GenOptions};
use wavefront::{shortest_paths, shortest_paths_parallel, Graph};

fn build_graph(nodes: usize, edges: usize) -> Graph {
    let opts = GenOptions {
        nodes,
        edges,
        max_weight: 1000,
    };
    let edges = random_edges(&opts, &mut StdRng::seed_from_u64(0xBEEF)).unwrap();
    Graph::from_edges(nodes, &edges).unwrap()
}

fn bench_solvers(c: &mut Criterion) {
    let graph = build_graph(2000, 40_000);

    c.bench_function("sequential_sssp_2k", |b| {
        b.iter(|| black_box(shortest_paths(&graph, 0)));
    });

    for threads in [2, 4, 8] {
        c.bench_function(&format!("parallel_sssp_2k_{threads}t"), |b| {
            b.iter(|| black_box(shortest_paths_parallel(&graph, 0, threads)));
        });
    }
}

criterion_group!(benches, bench_solvers);
criterion_main!(benches);
