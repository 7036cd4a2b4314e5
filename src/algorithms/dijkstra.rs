//! Dijkstra 最短路径算法
//!
//! 同一逻辑操作的两个复杂度级别：朴素的全表扫描变体 O(V²)，
//! 与二叉堆优化变体 O(E log V)。两者对相同输入产出完全一致的
//! 距离表（平局时前驱选择可能不同）；对外查询一律构建在堆变体之上。
//!
//! 正确性依赖非负权重，因此两个变体都要求图带权且启用仅正权重策略。

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use super::path::PathIter;
use super::types::{DistanceEntry, SearchStats, ShortestPathTree};
use crate::core::{GraphError, GraphResult, NodeId};
use crate::graph::Graph;

/// 朴素变体内部使用的无穷远哨兵
const INFINITE: i64 = i64::MAX;

/// 在未访问集合中线性扫描距离最小的有限节点
fn min_unvisited(
    unvisited: &HashSet<NodeId>,
    distances: &HashMap<NodeId, i64>,
) -> Option<(NodeId, i64)> {
    unvisited
        .iter()
        .filter_map(|id| distances.get(id).map(|distance| (*id, *distance)))
        .filter(|(_, distance)| *distance != INFINITE)
        .min_by_key(|(id, distance)| (*distance, *id))
}

impl<T> Graph<T> {
    pub(crate) fn check_search_preconditions(&self, source: NodeId) -> GraphResult<()> {
        if !self.config().weighted || !self.config().positive_edges_only {
            return Err(GraphError::SearchPrecondition);
        }
        self.node(source)?;
        Ok(())
    }

    /// 朴素 Dijkstra：反复线性扫描未访问集合取最小距离节点
    ///
    /// 复杂度 O(V²)，重复扫描是主导项，松弛整体贡献 O(E)。
    /// 与 [`Graph::dijkstra`] 对相同输入产出一致的距离表。
    pub fn dijkstra_linear_scan(&self, source: NodeId) -> GraphResult<ShortestPathTree> {
        self.check_search_preconditions(source)?;

        let mut distances: HashMap<NodeId, i64> =
            self.node_ids().map(|id| (id, INFINITE)).collect();
        let mut predecessors: HashMap<NodeId, NodeId> = HashMap::new();
        let mut unvisited: HashSet<NodeId> = self.node_ids().collect();
        let mut stats = SearchStats::default();

        distances.insert(source, 0);
        predecessors.insert(source, source);

        while let Some((current, current_distance)) = min_unvisited(&unvisited, &distances) {
            unvisited.remove(&current);
            stats.nodes_settled += 1;

            if let Ok(neighbors) = self.neighbors(current) {
                for (neighbor, weight) in neighbors {
                    stats.edges_relaxed += 1;
                    let candidate = current_distance + weight;
                    let best = distances.get(&neighbor).copied().unwrap_or(INFINITE);
                    if candidate < best {
                        distances.insert(neighbor, candidate);
                        predecessors.insert(neighbor, current);
                    }
                }
            }
        }

        // 不可达节点的哨兵不进入结果，两个变体的距离表由此逐项可比
        distances.retain(|_, distance| *distance != INFINITE);

        log::debug!(
            "Dijkstra(扫描) 完成: 源 {}, 可达节点 {} 个, 松弛 {} 次",
            source,
            distances.len(),
            stats.edges_relaxed
        );

        Ok(ShortestPathTree {
            source,
            distances,
            predecessors,
            stats,
        })
    }

    /// 堆优化 Dijkstra
    ///
    /// 以 `(源, 0)` 播种最小堆；每次松弛改进推入新条目而非原地
    /// 降低优先级，出队时记录距离落后于当前最优的条目视为陈旧并
    /// 跳过。堆耗尽即终止，复杂度 O(E log V)。
    pub fn dijkstra(&self, source: NodeId) -> GraphResult<ShortestPathTree> {
        self.check_search_preconditions(source)?;

        let mut distances: HashMap<NodeId, i64> = HashMap::new();
        let mut predecessors: HashMap<NodeId, NodeId> = HashMap::new();
        let mut heap: BinaryHeap<Reverse<DistanceEntry>> = BinaryHeap::new();
        let mut stats = SearchStats::default();

        distances.insert(source, 0);
        predecessors.insert(source, source);
        heap.push(Reverse(DistanceEntry {
            distance: 0,
            node: source,
        }));

        while let Some(Reverse(entry)) = heap.pop() {
            let best = distances.get(&entry.node).copied().unwrap_or(INFINITE);
            if entry.distance > best {
                continue;
            }
            stats.nodes_settled += 1;

            if let Ok(neighbors) = self.neighbors(entry.node) {
                for (neighbor, weight) in neighbors {
                    stats.edges_relaxed += 1;
                    let candidate = entry.distance + weight;
                    let improved = distances
                        .get(&neighbor)
                        .map_or(true, |existing| candidate < *existing);
                    if improved {
                        distances.insert(neighbor, candidate);
                        predecessors.insert(neighbor, entry.node);
                        heap.push(Reverse(DistanceEntry {
                            distance: candidate,
                            node: neighbor,
                        }));
                    }
                }
            }
        }

        log::debug!(
            "Dijkstra(堆) 完成: 源 {}, 可达节点 {} 个, 松弛 {} 次",
            source,
            distances.len(),
            stats.edges_relaxed
        );

        Ok(ShortestPathTree {
            source,
            distances,
            predecessors,
            stats,
        })
    }

    /// 两点间最短距离，目标不可达时失败
    pub fn shortest_distance(&self, source: NodeId, target: NodeId) -> GraphResult<i64> {
        self.node(target)?;
        let tree = self.dijkstra(source)?;
        tree.distance_to(target)
            .ok_or(GraphError::Unreachable(source, target))
    }

    /// 单源到全部节点的最短距离，不可达节点为 None
    pub fn shortest_distances(
        &self,
        source: NodeId,
    ) -> GraphResult<HashMap<NodeId, Option<i64>>> {
        let tree = self.dijkstra(source)?;
        Ok(self
            .node_ids()
            .map(|id| (id, tree.distance_to(id)))
            .collect())
    }

    /// 两点间最短路径：从源到目标（含两端）的惰性序列
    ///
    /// 每次调用重新搜索并重建，序列单遍消费。目标不可达时失败。
    pub fn shortest_path(&self, source: NodeId, target: NodeId) -> GraphResult<PathIter> {
        self.node(target)?;
        let tree = self.dijkstra(source)?;
        tree.path_to(target)
            .ok_or(GraphError::Unreachable(source, target))
    }

    /// 单源到全部可达节点的完整路径
    pub fn shortest_paths(
        &self,
        source: NodeId,
    ) -> GraphResult<HashMap<NodeId, Vec<NodeId>>> {
        let tree = self.dijkstra(source)?;
        Ok(tree
            .distances
            .keys()
            .filter_map(|id| tree.path_to(*id).map(|path| (*id, path.collect())))
            .collect())
    }
}
