//! 路径重建模块

use crate::core::NodeId;
use std::collections::HashMap;

/// 最短路径的惰性有限序列，从源点到目标逐节点产出
///
/// 由前驱表从目标回溯到源点再反转得到；每次查询调用都重建一条
/// 独立序列，单遍消费，提前放弃不持有任何资源。
#[derive(Debug, Clone)]
pub struct PathIter {
    nodes: std::vec::IntoIter<NodeId>,
}

impl PathIter {
    /// 沿前驱表回溯重建路径
    ///
    /// 源节点在前驱表中映射到自身，作为回溯的终止标记；
    /// 目标不在前驱表中即不可达。
    pub(crate) fn reconstruct(
        source: NodeId,
        target: NodeId,
        predecessors: &HashMap<NodeId, NodeId>,
    ) -> Option<Self> {
        predecessors.get(&target)?;

        let mut reversed = vec![target];
        let mut current = target;
        while current != source {
            let previous = *predecessors.get(&current)?;
            reversed.push(previous);
            current = previous;
        }
        reversed.reverse();
        Some(Self {
            nodes: reversed.into_iter(),
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }
}

impl Iterator for PathIter {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        self.nodes.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl ExactSizeIterator for PathIter {}
