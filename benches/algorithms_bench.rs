use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ugraph_wasm::algorithms::{articulation, mst, shortest_path, traversal};
use ugraph_wasm::UnGraph;

/// Square grid with deterministic pseudo-random weights.
fn grid(side: usize) -> UnGraph {
    let labels: Vec<String> = (0..side * side).map(|i| format!("v{i}")).collect();
    let mut g = UnGraph::new(&labels).unwrap();
    let mut seed: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut weight = || {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((seed >> 33) % 100) as i64
    };

    for r in 0..side {
        for c in 0..side {
            let v = r * side + c;
            if c + 1 < side {
                g.add_edge(v, v + 1, weight()).unwrap();
            }
            if r + 1 < side {
                g.add_edge(v, v + side, weight()).unwrap();
            }
        }
    }
    g
}

fn bench_algorithms(c: &mut Criterion) {
    let g = grid(100);

    c.bench_function("bfs_grid_100", |b| b.iter(|| traversal::bfs(&g, black_box(0))));
    c.bench_function("dfs_grid_100", |b| b.iter(|| traversal::dfs(&g, black_box(0))));
    c.bench_function("dijkstra_grid_100", |b| {
        b.iter(|| shortest_path::dijkstra(&g, black_box(0)))
    });
    c.bench_function("prim_grid_100", |b| b.iter(|| mst::prim(&g, black_box(0))));
    c.bench_function("articulation_grid_100", |b| {
        b.iter(|| articulation::articulation_points(&g, black_box(0)))
    });
}

criterion_group!(benches, bench_algorithms);
criterion_main!(benches);
