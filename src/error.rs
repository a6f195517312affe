use std::fmt::{Display, Formatter};

use crate::svotdata::Node;

/// An error that occurred while manipulating or writing a document tree.
///
/// Attribute updates never fail; only structural changes and writes to an
/// external sink can produce an error.
#[derive(Debug)]
pub enum Error {
    /// The operation is only supported on the svg root element.
    NotRoot(Node),
    /// The manipulation would break the tree structure.
    InvalidOperation(String),
    /// Consistency error reported by the underlying arena.
    Arena(indextree::NodeError),
    /// Error writing to the external sink.
    Io(std::io::Error),
}

impl From<indextree::NodeError> for Error {
    #[inline]
    fn from(e: indextree::NodeError) -> Self {
        Error::Arena(e)
    }
}

impl From<std::io::Error> for Error {
    #[inline]
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NotRoot(_) => write!(f, "not the svg root element"),
            Error::InvalidOperation(message) => write!(f, "invalid operation: {}", message),
            Error::Arena(e) => write!(f, "arena error: {}", e),
            Error::Io(e) => write!(f, "io error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Arena(e) => Some(e),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}
