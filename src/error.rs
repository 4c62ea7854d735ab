//! Error types for fallible list operations.

use std::fmt;

/// The errors reported by fallible [`List`] operations.
///
/// Every error is reported synchronously at the offending call, and no
/// operation leaves a partial mutation visible after returning one.
///
/// [`List`]: crate::List
///
/// # Examples
///
/// ```
/// use seek_list::{Error, List};
///
/// let mut list: List<i32> = List::new();
/// assert_eq!(list.pop(), Err(Error::Empty));
/// assert_eq!(
///     list.element_at(3),
///     Err(Error::OutOfRange { position: 3, len: 0 }),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A negative length was requested at construction.
    InvalidLength(isize),
    /// A position fell outside the valid range of the list.
    OutOfRange {
        /// The requested position.
        position: usize,
        /// The length of the list at the time of the call.
        len: usize,
    },
    /// The operation would grow the list past [`MAX_LEN`](crate::list::MAX_LEN).
    CapacityExceeded,
    /// The operation requires at least one element.
    Empty,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::InvalidLength(len) => {
                write!(f, "requested length {} is negative", len)
            }
            Error::OutOfRange { position, len } => {
                write!(f, "position {} is out of range for a list of length {}", position, len)
            }
            Error::CapacityExceeded => f.write_str("operation would exceed the maximum list length"),
            Error::Empty => f.write_str("operation requires a non-empty list"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display() {
        assert_eq!(
            Error::InvalidLength(-1).to_string(),
            "requested length -1 is negative"
        );
        assert_eq!(
            Error::OutOfRange { position: 4, len: 4 }.to_string(),
            "position 4 is out of range for a list of length 4"
        );
        assert_eq!(
            Error::CapacityExceeded.to_string(),
            "operation would exceed the maximum list length"
        );
        assert_eq!(Error::Empty.to_string(), "operation requires a non-empty list");
    }
}
