//! 最短路径搜索算法模块
//!
//! 包含经典松弛算法 Dijkstra 的朴素与堆优化两个变体、启发式引导
//! 的 A* 泛化，以及共享的路径重建逻辑。所有搜索都只读图结构，
//! 产出派生的只读结果。

pub mod a_star;
pub mod dijkstra;
pub mod path;
pub mod types;

pub use path::PathIter;
pub use types::{SearchStats, ShortestPathTree};
