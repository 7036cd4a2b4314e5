//! 图结构管理模块
//!
//! 图独占拥有其全部节点，负责维护结构不变量：
//! 无向图的边对称、仅正权重策略、禁止自环、禁止重复边。
//! 所有变更操作都是原子的：先完成全部校验，再触碰邻接表，
//! 因此失败的调用不会留下部分状态。

use std::collections::HashMap;

use super::config::GraphConfig;
use super::node::Node;
use crate::core::{GraphError, GraphResult, NodeId, NodeIdGenerator};

/// 内存图引擎
///
/// 节点集合的成员检查为平均 O(1)；无向图中一条边 A↔B 以
/// {A→B, B→A} 的对称邻接项表示，在 [`Graph::edges_count`] 中只计一次。
#[derive(Debug, Clone)]
pub struct Graph<T> {
    config: GraphConfig,
    nodes: HashMap<NodeId, Node<T>>,
    edge_count: usize,
}

impl<T> Graph<T> {
    /// 按配置创建空图，配置不一致时失败
    pub fn new(config: GraphConfig) -> GraphResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            nodes: HashMap::new(),
            edge_count: 0,
        })
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn nodes_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edges_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// 创建并注册一个新节点，返回其句柄
    ///
    /// 节点只能由所属的图创建；不同节点允许携带相等的负载值。
    pub fn add_node(&mut self, value: T) -> NodeId {
        let id = NodeIdGenerator::instance().next_id();
        self.nodes.insert(id, Node::new(id, value));
        id
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    pub fn contains_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.nodes.get(&from).is_some_and(|node| node.has_edge_to(to))
    }

    pub fn node(&self, id: NodeId) -> GraphResult<&Node<T>> {
        self.nodes.get(&id).ok_or(GraphError::NodeNotFound(id))
    }

    fn node_mut(&mut self, id: NodeId) -> GraphResult<&mut Node<T>> {
        self.nodes.get_mut(&id).ok_or(GraphError::NodeNotFound(id))
    }

    pub fn value(&self, id: NodeId) -> GraphResult<&T> {
        self.node(id).map(Node::value)
    }

    pub fn value_mut(&mut self, id: NodeId) -> GraphResult<&mut T> {
        self.node_mut(id).map(Node::value_mut)
    }

    /// 全部节点句柄的迭代器，顺序未定义
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// 指定节点的邻居迭代器，顺序未定义
    pub fn neighbors(
        &self,
        id: NodeId,
    ) -> GraphResult<impl Iterator<Item = (NodeId, i64)> + '_> {
        self.node(id).map(|node| node.neighbors())
    }

    /// 查询边 `from -> to` 的权重
    pub fn edge_weight(&self, from: NodeId, to: NodeId) -> GraphResult<i64> {
        let node = self.node(from)?;
        self.node(to)?;
        node.edge_weight_to(to)
            .ok_or(GraphError::EdgeNotFound(from, to))
    }

    /// 添加带权边
    ///
    /// 无向图会同时写入对称的镜像邻接项，但边计数只加 1。
    pub fn add_weighted_edge(&mut self, from: NodeId, to: NodeId, weight: i64) -> GraphResult<()> {
        if !self.config.weighted {
            return Err(GraphError::UnsupportedWeightedEdge);
        }
        self.insert_edge(from, to, weight)
    }

    /// 添加无权边，隐式权重为 1
    pub fn add_unweighted_edge(&mut self, from: NodeId, to: NodeId) -> GraphResult<()> {
        if self.config.weighted {
            return Err(GraphError::UnsupportedUnweightedEdge);
        }
        self.insert_edge(from, to, 1)
    }

    fn insert_edge(&mut self, from: NodeId, to: NodeId, weight: i64) -> GraphResult<()> {
        if from == to {
            return Err(GraphError::SelfLoop(from));
        }
        if !self.contains(from) {
            return Err(GraphError::NodeNotFound(from));
        }
        if !self.contains(to) {
            return Err(GraphError::NodeNotFound(to));
        }
        if self.config.positive_edges_only && weight < 1 {
            return Err(GraphError::NonPositiveWeight(weight));
        }
        if self.contains_edge(from, to) {
            return Err(GraphError::DuplicateEdge(from, to));
        }

        // 校验已全部通过，此后不再失败
        if let Some(node) = self.nodes.get_mut(&from) {
            node.set_edge(to, weight);
        }
        if !self.config.directed {
            if let Some(node) = self.nodes.get_mut(&to) {
                node.set_edge(from, weight);
            }
        }
        self.edge_count += 1;
        Ok(())
    }

    /// 移除边 `from -> to`，无向图同时移除镜像项
    pub fn remove_edge(&mut self, from: NodeId, to: NodeId) -> GraphResult<()> {
        if !self.contains(from) {
            return Err(GraphError::NodeNotFound(from));
        }
        if !self.contains(to) {
            return Err(GraphError::NodeNotFound(to));
        }
        if !self.contains_edge(from, to) {
            return Err(GraphError::EdgeNotFound(from, to));
        }

        if let Some(node) = self.nodes.get_mut(&from) {
            node.remove_edge(to);
        }
        if !self.config.directed {
            if let Some(node) = self.nodes.get_mut(&to) {
                node.remove_edge(from);
            }
        }
        self.edge_count -= 1;
        Ok(())
    }

    /// 移除节点及所有触及它的边，返回其负载值
    ///
    /// 无向图中节点自身的邻接表即为全部关联边，按度数一次性扣减；
    /// 有向图先扣减出边，再全表扫描清除指向该节点的入边。
    /// 被移除节点的句柄此后在任何操作中都以成员错误失败。
    pub fn remove_node(&mut self, id: NodeId) -> GraphResult<T> {
        let node = self.nodes.remove(&id).ok_or(GraphError::NodeNotFound(id))?;

        if self.config.directed {
            self.edge_count -= node.degree();
            for other in self.nodes.values_mut() {
                if other.remove_edge(id) {
                    self.edge_count -= 1;
                }
            }
        } else {
            self.edge_count -= node.degree();
            for (neighbor, _) in node.neighbors() {
                if let Some(other) = self.nodes.get_mut(&neighbor) {
                    other.remove_edge(id);
                }
            }
        }

        log::debug!(
            "节点 {} 已移除, 剩余节点 {} 个, 边 {} 条",
            id,
            self.nodes.len(),
            self.edge_count
        );
        Ok(node.into_value())
    }

    /// 清空图，节点与边计数归零
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edge_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn undirected() -> Graph<&'static str> {
        Graph::new(GraphConfig::default()).unwrap()
    }

    fn directed_weighted() -> Graph<&'static str> {
        Graph::new(GraphConfig::new().with_directed(true).with_weighted(true)).unwrap()
    }

    #[test]
    fn test_add_node_registers_membership() {
        let mut graph = undirected();
        let a = graph.add_node("a");
        assert!(graph.contains(a));
        assert_eq!(graph.nodes_count(), 1);
        assert_eq!(graph.edges_count(), 0);
    }

    #[test]
    fn test_equal_values_are_distinct_nodes() {
        let mut graph = undirected();
        let a = graph.add_node("same");
        let b = graph.add_node("same");
        assert_ne!(a, b);
        assert_eq!(graph.nodes_count(), 2);
    }

    #[test]
    fn test_undirected_edge_is_symmetric_but_counted_once() {
        let mut graph = undirected();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        graph.add_unweighted_edge(a, b).unwrap();

        assert!(graph.contains_edge(a, b));
        assert!(graph.contains_edge(b, a));
        assert_eq!(graph.edges_count(), 1);
    }

    #[test]
    fn test_self_loop_is_rejected() {
        let mut graph = directed_weighted();
        let a = graph.add_node("a");
        assert_eq!(
            graph.add_weighted_edge(a, a, 1),
            Err(GraphError::SelfLoop(a))
        );
    }

    #[test]
    fn test_duplicate_edge_is_rejected() {
        let mut graph = directed_weighted();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        graph.add_weighted_edge(a, b, 2).unwrap();
        assert_eq!(
            graph.add_weighted_edge(a, b, 3),
            Err(GraphError::DuplicateEdge(a, b))
        );
        assert_eq!(graph.edges_count(), 1);
        assert_eq!(graph.edge_weight(a, b), Ok(2));
    }

    #[test]
    fn test_weight_policy_is_enforced() {
        let mut graph = directed_weighted();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        assert_eq!(
            graph.add_weighted_edge(a, b, 0),
            Err(GraphError::NonPositiveWeight(0))
        );
        assert_eq!(graph.edges_count(), 0);
    }

    #[test]
    fn test_edge_kind_must_match_graph_kind() {
        let mut weighted = directed_weighted();
        let a = weighted.add_node("a");
        let b = weighted.add_node("b");
        assert_eq!(
            weighted.add_unweighted_edge(a, b),
            Err(GraphError::UnsupportedUnweightedEdge)
        );

        let mut unweighted = undirected();
        let x = unweighted.add_node("x");
        let y = unweighted.add_node("y");
        assert_eq!(
            unweighted.add_weighted_edge(x, y, 2),
            Err(GraphError::UnsupportedWeightedEdge)
        );
    }

    #[test]
    fn test_remove_edge_removes_mirror_entry() {
        let mut graph = undirected();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        graph.add_unweighted_edge(a, b).unwrap();
        graph.remove_edge(b, a).unwrap();

        assert!(!graph.contains_edge(a, b));
        assert!(!graph.contains_edge(b, a));
        assert_eq!(graph.edges_count(), 0);
        assert_eq!(
            graph.remove_edge(a, b),
            Err(GraphError::EdgeNotFound(a, b))
        );
    }

    #[test]
    fn test_removed_node_handle_is_dead() {
        let mut graph = undirected();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        graph.add_unweighted_edge(a, b).unwrap();

        assert_eq!(graph.remove_node(a), Ok("a"));
        assert_eq!(graph.value(a), Err(GraphError::NodeNotFound(a)));
        assert_eq!(
            graph.add_unweighted_edge(a, b),
            Err(GraphError::NodeNotFound(a))
        );
        assert_eq!(graph.nodes_count(), 1);
        assert_eq!(graph.edges_count(), 0);
    }

    #[test]
    fn test_value_mut_updates_payload() {
        let mut graph = Graph::new(GraphConfig::default()).unwrap();
        let a = graph.add_node(1);
        *graph.value_mut(a).unwrap() = 5;
        assert_eq!(graph.value(a), Ok(&5));
    }

    #[test]
    fn test_clear_resets_counts() {
        let mut graph = undirected();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        graph.add_unweighted_edge(a, b).unwrap();

        graph.clear();
        assert!(graph.is_empty());
        assert_eq!(graph.nodes_count(), 0);
        assert_eq!(graph.edges_count(), 0);
        assert!(!graph.contains(a));
    }
}
