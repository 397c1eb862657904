//! Graph abstraction: identifiers, orientation markers and the capability
//! traits implemented by storages, adapters and implicit graphs.

pub mod error;
pub mod id;
pub mod marker;
pub mod weight;

mod base;
mod edges;
mod neighbors;
mod vertices;

pub use base::*;
pub use edges::*;
pub use neighbors::*;
pub use vertices::*;
pub use weight::Weight;
