//! 图遍历模块
//!
//! 广度优先与深度优先两种可达性遍历，均为惰性单遍序列；
//! 邻接表没有固有顺序，同一张图的两次遍历可能产出不同顺序。

pub mod bfs;
pub mod dfs;

pub use bfs::BfsIter;
pub use dfs::DfsIter;
