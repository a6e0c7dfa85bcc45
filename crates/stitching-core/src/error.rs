use crate::Real;
use thiserror::Error;

/// Errors that can occur while selecting or projecting an image subset.
///
/// All variants describe inconsistent inputs or violated index invariants.
/// None of them is recoverable by retrying with the same data.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubsetError {
    /// The flat pairwise match list is not `images * images` long.
    #[error("expected {expected} pairwise matches for {images} images, got {got}")]
    MatchCountMismatch {
        images: usize,
        expected: usize,
        got: usize,
    },
    /// A collection that must run parallel to the image set has another length.
    #[error("{what} has {got} entries, expected {expected}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },
    /// An index does not address an element of the current collection.
    #[error("index {index} is out of range for {len} elements")]
    IndexOutOfRange { index: usize, len: usize },
    /// A keep set names the same image twice.
    #[error("index {index} appears more than once")]
    DuplicateIndex { index: usize },
    /// Delete indices must be strictly ascending for the offset rule to hold.
    #[error("delete indices must be strictly ascending, got {prev} followed by {next}")]
    UnsortedDeleteIndices { prev: usize, next: usize },
    /// The confidence threshold is NaN or infinite.
    #[error("confidence threshold must be finite, got {0}")]
    InvalidThreshold(Real),
}
