use thiserror::Error;

pub type Result<T> = std::result::Result<T, CollectionError>;

/// Caller-contract violations raised by the collection helpers.
///
/// Absence is never reported here; lookups that may miss return `Option`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("range {start}..{end} out of bounds for sequence of length {len}")]
    InvalidRange {
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("shared sequence is already borrowed")]
    Borrowed,
}
