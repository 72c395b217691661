//! Error handling for the vecset library
//!
//! Allocation failure is the only recoverable failure in this crate; every
//! other misuse (out-of-range positions, zero capacities, a hash function
//! escaping its bucket range) is a contract violation and panics at the
//! call site.

use thiserror::Error;

/// Main error type for the vecset library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// Memory allocation failure, including arithmetic overflow while
    /// computing a buffer layout
    #[error("memory allocation failed: requested {size} bytes")]
    OutOfMemory {
        /// Number of bytes requested
        size: usize,
    },
}

impl ContainerError {
    /// Create an out-of-memory error for the given request size
    pub fn out_of_memory(size: usize) -> Self {
        ContainerError::OutOfMemory { size }
    }
}

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, ContainerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_memory_display() {
        let err = ContainerError::out_of_memory(4096);
        assert_eq!(
            err.to_string(),
            "memory allocation failed: requested 4096 bytes"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            ContainerError::out_of_memory(16),
            ContainerError::OutOfMemory { size: 16 }
        );
    }
}
