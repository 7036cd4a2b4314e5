//! 集成测试共享工具
#![allow(dead_code)]

use graphlite::{Graph, GraphConfig, NodeId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 有向带权空图
pub fn directed_weighted() -> Graph<&'static str> {
    Graph::new(GraphConfig::new().with_directed(true).with_weighted(true)).unwrap()
}

/// 无向无权空图
pub fn undirected_unweighted() -> Graph<&'static str> {
    Graph::new(GraphConfig::default()).unwrap()
}

/// 菱形场景: S->A(1), A->B(2), S->B(5), B->T(1)
pub fn diamond() -> (Graph<&'static str>, [NodeId; 4]) {
    let mut graph = directed_weighted();
    let s = graph.add_node("s");
    let a = graph.add_node("a");
    let b = graph.add_node("b");
    let t = graph.add_node("t");
    graph.add_weighted_edge(s, a, 1).unwrap();
    graph.add_weighted_edge(a, b, 2).unwrap();
    graph.add_weighted_edge(s, b, 5).unwrap();
    graph.add_weighted_edge(b, t, 1).unwrap();
    (graph, [s, a, b, t])
}

/// 无向无权链: X - Y - Z
pub fn line() -> (Graph<&'static str>, [NodeId; 3]) {
    let mut graph = undirected_unweighted();
    let x = graph.add_node("x");
    let y = graph.add_node("y");
    let z = graph.add_node("z");
    graph.add_unweighted_edge(x, y).unwrap();
    graph.add_unweighted_edge(y, z).unwrap();
    (graph, [x, y, z])
}

/// 可复现的随机有向带权图
pub fn random_weighted_graph(
    seed: u64,
    node_count: usize,
    edge_attempts: usize,
) -> (Graph<u32>, Vec<NodeId>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph =
        Graph::new(GraphConfig::new().with_directed(true).with_weighted(true)).unwrap();

    let ids: Vec<NodeId> = (0..node_count)
        .map(|index| graph.add_node(index as u32))
        .collect();

    for _ in 0..edge_attempts {
        let from = ids[rng.gen_range(0..node_count)];
        let to = ids[rng.gen_range(0..node_count)];
        if from == to || graph.contains_edge(from, to) {
            continue;
        }
        let weight = rng.gen_range(1..=9);
        graph.add_weighted_edge(from, to, weight).unwrap();
    }

    (graph, ids)
}

/// 沿路径逐边累加权重
pub fn path_weight<T>(graph: &Graph<T>, path: &[NodeId]) -> i64 {
    path.windows(2)
        .map(|pair| graph.edge_weight(pair[0], pair[1]).unwrap())
        .sum()
}
