//! A* 启发式最短路径搜索
//!
//! Dijkstra 堆变体的启发式泛化：入队优先级为 f = g + h，陈旧性
//! 判断仍只看 g；目标节点本身被有效出队时立即提前终止，因为此后
//! 不可能再出现更短的到达路径。启发式由调用方按次注入，引擎只
//! 校验非负，不验证可采纳性。

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use super::path::PathIter;
use super::types::{AStarEntry, SearchStats, ShortestPathTree};
use crate::core::{GraphError, GraphResult, NodeId};
use crate::graph::Graph;

/// 求值启发式函数并校验非负
fn evaluate_heuristic<H>(heuristic: &H, node: NodeId, target: NodeId) -> GraphResult<i64>
where
    H: Fn(NodeId, NodeId) -> i64,
{
    let estimate = heuristic(node, target);
    if estimate < 0 {
        return Err(GraphError::NegativeHeuristic(estimate));
    }
    Ok(estimate)
}

impl<T> Graph<T> {
    /// A* 搜索，返回提前终止前探索到的部分最短路径树
    ///
    /// 只有目标节点的距离与路径保证最优；其余节点可能尚未收敛。
    /// 前置条件与 Dijkstra 相同，另要求目标节点也是图的成员。
    /// 最坏复杂度与 Dijkstra 相同为 O(E log V)，启发式只在可采纳
    /// 且有信息量时改善实际开销。
    pub fn a_star<H>(
        &self,
        source: NodeId,
        target: NodeId,
        heuristic: H,
    ) -> GraphResult<ShortestPathTree>
    where
        H: Fn(NodeId, NodeId) -> i64,
    {
        self.check_search_preconditions(source)?;
        self.node(target)?;

        let mut distances: HashMap<NodeId, i64> = HashMap::new();
        let mut predecessors: HashMap<NodeId, NodeId> = HashMap::new();
        let mut heap: BinaryHeap<Reverse<AStarEntry>> = BinaryHeap::new();
        let mut stats = SearchStats::default();

        let estimate = evaluate_heuristic(&heuristic, source, target)?;
        distances.insert(source, 0);
        predecessors.insert(source, source);
        heap.push(Reverse(AStarEntry {
            f_cost: estimate,
            g_cost: 0,
            node: source,
        }));

        while let Some(Reverse(entry)) = heap.pop() {
            let best = distances.get(&entry.node).copied().unwrap_or(i64::MAX);
            if entry.g_cost > best {
                continue;
            }
            stats.nodes_settled += 1;

            // 目标被有效出队，提前终止
            if entry.node == target {
                break;
            }

            if let Ok(neighbors) = self.neighbors(entry.node) {
                for (neighbor, weight) in neighbors {
                    stats.edges_relaxed += 1;
                    let candidate = entry.g_cost + weight;
                    let improved = distances
                        .get(&neighbor)
                        .map_or(true, |existing| candidate < *existing);
                    if improved {
                        let estimate = evaluate_heuristic(&heuristic, neighbor, target)?;
                        distances.insert(neighbor, candidate);
                        predecessors.insert(neighbor, entry.node);
                        heap.push(Reverse(AStarEntry {
                            f_cost: candidate + estimate,
                            g_cost: candidate,
                            node: neighbor,
                        }));
                    }
                }
            }
        }

        log::debug!(
            "A* 完成: 源 {}, 目标 {}, 有效出队 {} 个节点",
            source,
            target,
            stats.nodes_settled
        );

        Ok(ShortestPathTree {
            source,
            distances,
            predecessors,
            stats,
        })
    }

    /// 两点间最短距离（启发式引导），目标不可达时失败
    pub fn a_star_distance<H>(
        &self,
        source: NodeId,
        target: NodeId,
        heuristic: H,
    ) -> GraphResult<i64>
    where
        H: Fn(NodeId, NodeId) -> i64,
    {
        let tree = self.a_star(source, target, heuristic)?;
        tree.distance_to(target)
            .ok_or(GraphError::Unreachable(source, target))
    }

    /// 两点间最短路径（启发式引导），目标不可达时失败
    pub fn a_star_path<H>(
        &self,
        source: NodeId,
        target: NodeId,
        heuristic: H,
    ) -> GraphResult<PathIter>
    where
        H: Fn(NodeId, NodeId) -> i64,
    {
        let tree = self.a_star(source, target, heuristic)?;
        tree.path_to(target)
            .ok_or(GraphError::Unreachable(source, target))
    }
}
