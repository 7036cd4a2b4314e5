//! 图配置模块

use crate::core::{GraphError, GraphResult};
use serde::{Deserialize, Serialize};

/// 图的结构配置，构造后不可变
///
/// 默认配置为无向、无权、仅正权重。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// 是否有向
    pub directed: bool,
    /// 是否带权
    pub weighted: bool,
    /// 是否只允许权重 >= 1 的边
    pub positive_edges_only: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directed: false,
            weighted: false,
            positive_edges_only: true,
        }
    }
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    pub fn with_weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    pub fn with_positive_edges_only(mut self, positive_edges_only: bool) -> Self {
        self.positive_edges_only = positive_edges_only;
        self
    }

    /// 校验配置一致性
    ///
    /// 无权图的所有边都是隐式的单位正权重，因此 `weighted == false`
    /// 时必须保持 `positive_edges_only == true`。
    pub fn validate(&self) -> GraphResult<()> {
        if !self.weighted && !self.positive_edges_only {
            return Err(GraphError::InvalidConfig);
        }
        Ok(())
    }
}
