//! Graph model shared across the isomatch workspace.
//!
//! This crate provides the adjacency-set graph container consumed by the
//! matching engine, the [`Labeled`] contract used for node compatibility,
//! depth-first traversal primitives, and a few generated graph families used
//! by tests and the command-line tool.

pub mod families;
mod graph;
mod label;
mod summary;
pub mod traversal;

pub use crate::graph::*;
pub use crate::label::*;
pub use crate::summary::*;
