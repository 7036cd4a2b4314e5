//! GraphLite - A lightweight in-memory graph engine implemented in Rust
//!
//! This crate provides a node-centric graph engine supporting directed and
//! undirected, weighted and unweighted graphs: structural mutation with
//! cross-cutting invariants (edge symmetry, weight-sign policy, no
//! self-loops, no duplicate edges), lazy breadth-first and depth-first
//! traversal, and single-source shortest-path search (Dijkstra and A*).

pub mod algorithms;
pub mod core;
pub mod graph;
pub mod traversal;

pub use crate::algorithms::{PathIter, SearchStats, ShortestPathTree};
pub use crate::core::{GraphError, GraphResult, NodeId};
pub use crate::graph::{Graph, GraphConfig, Node};
pub use crate::traversal::{BfsIter, DfsIter};
