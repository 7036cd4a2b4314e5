//! 最短路径搜索共享类型
//!
//! 包含堆条目、搜索统计与完整搜索结果的数据结构。

use crate::core::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::path::PathIter;

/// Dijkstra 堆条目：节点与其入队时刻的距离
///
/// 二叉堆无法原地降低已有条目的优先级，每次松弛改进都会推入
/// 新条目，因此堆中可能存在同一节点的多个陈旧条目；出队时记录
/// 距离落后于当前最优者即为陈旧，直接跳过。
/// 派生的 `Ord` 按 (distance, node) 字典序比较，配合
/// `cmp::Reverse` 构成最小堆。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct DistanceEntry {
    pub distance: i64,
    pub node: NodeId,
}

/// A* 堆条目：优先级为 f = g + h，陈旧性判断只看 g
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct AStarEntry {
    pub f_cost: i64,
    pub g_cost: i64,
    pub node: NodeId,
}

/// 搜索统计信息
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// 被有效出队（确定最短距离）的节点数
    pub nodes_settled: usize,
    /// 松弛的出边条数
    pub edges_relaxed: usize,
}

/// 单源最短路径搜索的完整结果
///
/// 距离表只含已发现的节点，缺项即"不可达"哨兵；前驱表中源节点
/// 映射到自身，以区分"就是源点"、"可达非源点"与"不可达（缺项）"。
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    pub(crate) source: NodeId,
    pub(crate) distances: HashMap<NodeId, i64>,
    pub(crate) predecessors: HashMap<NodeId, NodeId>,
    pub(crate) stats: SearchStats,
}

impl ShortestPathTree {
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// 到目标节点的最短距离，不可达时为 None
    pub fn distance_to(&self, target: NodeId) -> Option<i64> {
        self.distances.get(&target).copied()
    }

    pub fn is_reachable(&self, target: NodeId) -> bool {
        self.distances.contains_key(&target)
    }

    /// 重建从源点到目标（含两端）的最短路径，不可达时为 None
    pub fn path_to(&self, target: NodeId) -> Option<PathIter> {
        PathIter::reconstruct(self.source, target, &self.predecessors)
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}
