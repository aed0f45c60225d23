use thiserror::Error;

/// Errors raised by views and algorithm constructors.
///
/// Every check happens before any element is read or written, so a returned
/// error never leaves a container partially modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An element position outside `0..count` of a view.
    #[error("index {index} is out of range for a view of {count} elements")]
    IndexOutOfRange { index: usize, count: usize },

    /// A requested offset, count or sample size exceeds what is available.
    #[error("{what} {value} exceeds the available {limit}")]
    OutOfRange {
        what: &'static str,
        value: usize,
        limit: usize,
    },

    /// A shift would move the start of a window outside its container.
    #[error("shifting a window at offset {offset} by {delta} leaves a container of {len} elements")]
    ShiftOutOfRange {
        offset: usize,
        delta: isize,
        len: usize,
    },
}

/// Shorthand for results carrying [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;
