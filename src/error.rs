use thiserror::Error;

/// Error types for `ExtendibleArray` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ExtendibleArrayError {
    /// Index is beyond the range accepted by the operation
    #[error("Index out of range: index {index} is beyond array length {length}")]
    IndexOutOfRange {
        /// Index that was accessed
        index: usize,
        /// Current length of the array
        length: usize,
    },
    /// A slot buffer could not be allocated
    #[error("Allocation failure: unable to allocate a buffer of {capacity} slots")]
    AllocationFailure {
        /// Number of slots requested
        capacity: usize,
    },
    /// Operation attempted on an empty array
    #[error("Operation on empty array")]
    EmptyArray,
}
