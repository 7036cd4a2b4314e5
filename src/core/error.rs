//! 统一错误处理模块
//!
//! 图引擎的所有失败都是同步且局部的：校验先于修改，
//! 失败的变更不会留下部分状态。调用方自行决定是否以
//! 修正后的参数重试，引擎内部没有重试层。

use crate::core::id::NodeId;
use thiserror::Error;

/// 统一的图引擎错误类型
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("非法图配置: 无权图必须启用仅正权重策略")]
    InvalidConfig,

    #[error("节点 {0} 不属于当前图")]
    NodeNotFound(NodeId),

    #[error("不允许自环边: {0}")]
    SelfLoop(NodeId),

    #[error("边 {0} -> {1} 已存在")]
    DuplicateEdge(NodeId, NodeId),

    #[error("边 {0} -> {1} 不存在")]
    EdgeNotFound(NodeId, NodeId),

    #[error("无权图不支持带权边操作")]
    UnsupportedWeightedEdge,

    #[error("带权图不支持无权边操作")]
    UnsupportedUnweightedEdge,

    #[error("仅正权重图要求权重 >= 1, 实际为 {0}")]
    NonPositiveWeight(i64),

    #[error("最短路径搜索要求带权且仅正权重的图")]
    SearchPrecondition,

    #[error("节点 {0} 无法到达节点 {1}")]
    Unreachable(NodeId, NodeId),

    #[error("启发式函数返回负值: {0}")]
    NegativeHeuristic(i64),
}

/// 统一的结果类型别名
pub type GraphResult<T> = Result<T, GraphError>;
