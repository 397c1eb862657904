//! Concrete graph representations.
//!
//! [`AdjList`] and [`AdjMatrix`] expose the same capabilities and differ only
//! in cost and in their multi-edge policy. [`Functional`] is a specialized
//! storage for graphs where every vertex has exactly one successor.

pub mod adj_list;
pub mod adj_matrix;
pub mod functional;

mod matrix;

pub use adj_list::AdjList;
pub use adj_matrix::AdjMatrix;
pub use functional::Functional;
