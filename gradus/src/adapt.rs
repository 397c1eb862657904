//! Zero-copy views changing how a graph is seen by the algorithms.

mod transpose;
mod undirect;

pub use transpose::Transpose;
pub use undirect::Undirect;
