//! 深度优先遍历
//!
//! 提供两种形式：显式 LIFO 栈的惰性迭代器，以及调用栈递归的
//! 一次性收集变体。两者访问同一可达分量，但调度交错不同：
//! 栈变体出栈时立刻调度全部邻居，递归变体把后续兄弟推迟到
//! 首个兄弟的整棵子树耗尽之后。

use crate::core::{GraphResult, NodeId};
use crate::graph::Graph;
use std::collections::HashSet;

/// 深度优先遍历迭代器
///
/// 与 [`BfsIter`](crate::traversal::BfsIter) 采用相同的访问集纪律，
/// 仅把 FIFO 边界队列换成 LIFO 栈；入栈即标记。
pub struct DfsIter<'a, T> {
    graph: &'a Graph<T>,
    frontier: Vec<NodeId>,
    visited: HashSet<NodeId>,
}

impl<'a, T> DfsIter<'a, T> {
    pub(crate) fn new(graph: &'a Graph<T>, start: NodeId) -> Self {
        let mut visited = HashSet::new();
        visited.insert(start);
        Self {
            graph,
            frontier: vec![start],
            visited,
        }
    }
}

impl<T> Iterator for DfsIter<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.frontier.pop()?;
        if let Ok(neighbors) = self.graph.neighbors(current) {
            for (neighbor, _) in neighbors {
                if self.visited.insert(neighbor) {
                    self.frontier.push(neighbor);
                }
            }
        }
        Some(current)
    }
}

impl<T> Graph<T> {
    /// 从起始节点开始深度优先遍历（显式栈）
    ///
    /// 返回惰性的单遍序列，每次调用都开启一轮全新遍历；
    /// 起始节点不属于当前图时失败。
    pub fn dfs(&self, start: NodeId) -> GraphResult<DfsIter<'_, T>> {
        self.node(start)?;
        Ok(DfsIter::new(self, start))
    }

    /// 递归形式的深度优先遍历，一次性收集完整访问序列
    ///
    /// 深图存在递归深度风险，深度不可控时应优先使用 [`Graph::dfs`]。
    pub fn dfs_recursive(&self, start: NodeId) -> GraphResult<Vec<NodeId>> {
        self.node(start)?;
        let mut visited = HashSet::new();
        let mut order = Vec::new();
        self.dfs_visit(start, &mut visited, &mut order);
        Ok(order)
    }

    fn dfs_visit(&self, current: NodeId, visited: &mut HashSet<NodeId>, order: &mut Vec<NodeId>) {
        visited.insert(current);
        order.push(current);
        if let Ok(neighbors) = self.neighbors(current) {
            for (neighbor, _) in neighbors {
                if !visited.contains(&neighbor) {
                    self.dfs_visit(neighbor, visited, order);
                }
            }
        }
    }
}
