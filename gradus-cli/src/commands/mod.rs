pub mod augment;
pub mod bipartite;
pub mod bounded;
pub mod bridges;
pub mod common;
pub mod components;
pub mod cutpoints;
pub mod cycle;
pub mod digits;
pub mod drains;
pub mod euler;
pub mod functional;
pub mod knight;
pub mod path;
pub mod reversals;
pub mod roads;
pub mod scc;
pub mod slide;
pub mod subway;
pub mod toposort;
pub mod triples;
