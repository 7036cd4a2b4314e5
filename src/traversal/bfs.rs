//! 广度优先遍历

use crate::core::{GraphResult, NodeId};
use crate::graph::Graph;
use std::collections::{HashSet, VecDeque};

/// 广度优先遍历迭代器
///
/// 每次 `next()` 从 FIFO 边界队列出队一个节点，把它未访问的邻居
/// 标记并入队（入队即标记，避免重复进入边界），随后产出该节点。
/// 边界队列耗尽即终止；可达分量上的总开销为 O(V+E)。
pub struct BfsIter<'a, T> {
    graph: &'a Graph<T>,
    frontier: VecDeque<NodeId>,
    visited: HashSet<NodeId>,
}

impl<'a, T> BfsIter<'a, T> {
    pub(crate) fn new(graph: &'a Graph<T>, start: NodeId) -> Self {
        let mut frontier = VecDeque::new();
        let mut visited = HashSet::new();
        frontier.push_back(start);
        visited.insert(start);
        Self {
            graph,
            frontier,
            visited,
        }
    }
}

impl<T> Iterator for BfsIter<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.frontier.pop_front()?;
        if let Ok(neighbors) = self.graph.neighbors(current) {
            for (neighbor, _) in neighbors {
                if self.visited.insert(neighbor) {
                    self.frontier.push_back(neighbor);
                }
            }
        }
        Some(current)
    }
}

impl<T> Graph<T> {
    /// 从起始节点开始广度优先遍历
    ///
    /// 返回惰性的单遍序列，每次调用都开启一轮全新遍历；
    /// 起始节点不属于当前图时失败。
    pub fn bfs(&self, start: NodeId) -> GraphResult<BfsIter<'_, T>> {
        self.node(start)?;
        Ok(BfsIter::new(self, start))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::GraphError;
    use crate::graph::{Graph, GraphConfig};

    #[test]
    fn test_bfs_requires_member_start() {
        let mut graph = Graph::new(GraphConfig::default()).unwrap();
        let a = graph.add_node("a");
        graph.remove_node(a).unwrap();
        assert!(matches!(graph.bfs(a), Err(GraphError::NodeNotFound(_))));
    }

    #[test]
    fn test_bfs_yields_start_first() {
        let mut graph = Graph::new(GraphConfig::default()).unwrap();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        graph.add_unweighted_edge(a, b).unwrap();

        let mut iter = graph.bfs(a).unwrap();
        assert_eq!(iter.next(), Some(a));
        assert_eq!(iter.next(), Some(b));
        assert_eq!(iter.next(), None);
    }
}
