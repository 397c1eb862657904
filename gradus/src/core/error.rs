//! Error types shared by storages and algorithms.
//!
//! Every error in this crate belongs to one [`ErrorKind`], so that callers can
//! react to a class of failures without matching on every algorithm's own
//! error enum.

use std::fmt;

use thiserror::Error;

/// Classification of all failures reported by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or out-of-range input: unknown vertex, edge weight beyond the
    /// configured bound, negative weight.
    InputFormat,
    /// The query has no answer: unreachable goal, a cycle where an order was
    /// requested, missing precondition for an Euler circuit.
    NotFound,
    /// Internal invariant violated. Indicates a bug or an inconsistent graph
    /// implementation.
    Logic,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            ErrorKind::InputFormat => "invalid input",
            ErrorKind::NotFound => "not found",
            ErrorKind::Logic => "logic error",
        };
        f.write_str(kind)
    }
}

/// Vertex index outside of `0..bound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("vertex index {index} out of range for {bound} vertices")]
pub struct IndexError {
    pub index: usize,
    pub bound: usize,
}

impl IndexError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InputFormat
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("adding edge failed: {kind}")]
pub struct AddEdgeError<E> {
    pub attr: E,
    pub kind: AddEdgeErrorKind,
}

impl<E> AddEdgeError<E> {
    pub fn new(attr: E, kind: AddEdgeErrorKind) -> Self {
        Self { attr, kind }
    }

    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InputFormat
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddEdgeErrorKind {
    SourceAbsent,
    DestinationAbsent,
    MultiEdge,
}

impl fmt::Display for AddEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddEdgeErrorKind::SourceAbsent => "source does not exist",
            AddEdgeErrorKind::DestinationAbsent => "destination does not exist",
            AddEdgeErrorKind::MultiEdge => {
                "an edge already exists and the graph does not allow multi edges"
            }
        };
        f.write_str(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let error = AddEdgeError::new(3, AddEdgeErrorKind::DestinationAbsent);
        assert_eq!(
            error.to_string(),
            "adding edge failed: destination does not exist"
        );
        assert_eq!(error.kind(), ErrorKind::InputFormat);

        let error = IndexError { index: 5, bound: 3 };
        assert_eq!(
            error.to_string(),
            "vertex index 5 out of range for 3 vertices"
        );
    }
}
