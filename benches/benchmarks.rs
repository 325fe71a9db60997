criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        building_random_graph,
        counting_graph_components,
        detecting_graph_cycles,
        counting_graph_edges,
        ranking_camel_hands,
        repairing_page_updates,
}

fn building_random_graph(c: &mut criterion::Criterion) {
    c.bench_function("build a random Graph", |b| b.iter(|| Graph::random()));
}

fn counting_graph_components(c: &mut criterion::Criterion) {
    let graph = ring(4096);
    c.bench_function("count components of a 4096-node ring", |b| {
        b.iter(|| graph.count_components())
    });
}

fn detecting_graph_cycles(c: &mut criterion::Criterion) {
    let graph = ring(4096);
    c.bench_function("detect the cycle in a 4096-node ring", |b| {
        b.iter(|| graph.has_cycle())
    });
}

fn counting_graph_edges(c: &mut criterion::Criterion) {
    let graph = ring(4096);
    c.bench_function("count edges of a 4096-node ring", |b| {
        b.iter(|| graph.count_edges())
    });
}

fn ranking_camel_hands(c: &mut criterion::Criterion) {
    let table = (0..1000)
        .map(|bid| Play::from((Hand::random(), bid)))
        .collect::<Table>();
    c.bench_function("rank 1000 random camel Hands", |b| {
        b.iter(|| table.winnings())
    });
}

fn repairing_page_updates(c: &mut criterion::Criterion) {
    let rules = (0..12u32)
        .flat_map(|a| (a + 1..12).map(move |b| Rule::from((a, b))))
        .collect::<Rules>();
    let update = Update::from((0..12u32).rev().collect::<Vec<u32>>());
    c.bench_function("repair a reversed 12-page Update", |b| {
        b.iter(|| update.repaired(&rules))
    });
}

fn ring(n: usize) -> Graph {
    let mut graph = Graph::new();
    for i in 0..n {
        graph.add_edge(&i.to_string(), &((i + 1) % n).to_string(), false);
    }
    graph
}

use puzzlebox::Arbitrary;
use puzzlebox::cards::Hand;
use puzzlebox::cards::Play;
use puzzlebox::cards::Table;
use puzzlebox::graph::Graph;
use puzzlebox::pages::Rule;
use puzzlebox::pages::Rules;
use puzzlebox::pages::Update;
