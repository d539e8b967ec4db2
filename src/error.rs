use std::error;
use std::fmt;
use std::result;

/// The errors that tree operations can produce.
///
/// The strict entry points (`insert`, `remove`, `find`, `predecessor`, `successor`, `depth`)
/// report precondition violations through this enum and perform no partial mutation. The
/// `try_` variants convert the same failures into `bool` or `Option` results instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The key being inserted already exists in the tree.
    DuplicateKey,
    /// The operation requires a non-empty tree.
    EmptyTree,
    /// The node argument does not belong to the tree it was passed to.
    WrongTree,
}

pub type Result<T> = result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::DuplicateKey => write!(f, "key already exists in the tree"),
            Error::EmptyTree => write!(f, "operation requires a non-empty tree"),
            Error::WrongTree => write!(f, "node does not belong to this tree"),
        }
    }
}

impl error::Error for Error {}
