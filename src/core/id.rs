//! 节点ID模块 - 提供图节点的不透明句柄与ID生成功能

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::OnceLock;

/// 图节点的唯一标识符
///
/// 句柄在进程生命周期内全局唯一：节点被移除后其ID永不复用，
/// 跨图误用的句柄只会命中成员检查失败，不会悄悄指向别的节点。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(i64);

impl NodeId {
    pub(crate) fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// 节点ID生成器 - 单例实现
///
/// 所有图实例共享同一个单调递增计数器。
#[derive(Debug)]
pub struct NodeIdGenerator {
    counter: AtomicI64,
}

impl NodeIdGenerator {
    fn new(init: i64) -> Self {
        Self {
            counter: AtomicI64::new(init),
        }
    }

    /// 获取单例实例
    pub fn instance() -> &'static Self {
        static INSTANCE: OnceLock<NodeIdGenerator> = OnceLock::new();
        INSTANCE.get_or_init(|| NodeIdGenerator::new(0))
    }

    /// 生成下一个节点ID
    pub fn next_id(&self) -> NodeId {
        NodeId::new(self.counter.fetch_add(1, Ordering::SeqCst))
    }

    /// 获取当前计数值
    pub fn current_value(&self) -> i64 {
        self.counter.load(Ordering::SeqCst)
    }
}
