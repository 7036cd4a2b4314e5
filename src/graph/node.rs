//! 图节点模块

use crate::core::NodeId;
use std::collections::HashMap;

/// 图拥有的节点：负载值 + 邻接表
///
/// 节点不包含任何行为，所有结构变更由所属的图执行；
/// 负载值只是元数据，不参与任何结构不变量。
#[derive(Debug, Clone)]
pub struct Node<T> {
    id: NodeId,
    value: T,
    adjacency: HashMap<NodeId, i64>,
}

impl<T> Node<T> {
    pub(crate) fn new(id: NodeId, value: T) -> Self {
        Self {
            id,
            value,
            adjacency: HashMap::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }

    /// 邻居句柄及对应边权重的迭代器，顺序未定义
    pub fn neighbors(&self) -> impl Iterator<Item = (NodeId, i64)> + '_ {
        self.adjacency.iter().map(|(id, weight)| (*id, *weight))
    }

    /// 出度
    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }

    pub(crate) fn has_edge_to(&self, neighbor: NodeId) -> bool {
        self.adjacency.contains_key(&neighbor)
    }

    pub(crate) fn edge_weight_to(&self, neighbor: NodeId) -> Option<i64> {
        self.adjacency.get(&neighbor).copied()
    }

    pub(crate) fn set_edge(&mut self, neighbor: NodeId, weight: i64) {
        self.adjacency.insert(neighbor, weight);
    }

    pub(crate) fn remove_edge(&mut self, neighbor: NodeId) -> bool {
        self.adjacency.remove(&neighbor).is_some()
    }
}
