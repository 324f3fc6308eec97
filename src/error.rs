//! Error definitions.
use thiserror::Error;

/// Crate-wide error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Occurs during construction when the initial capacity is zero or the load factor lies
    /// outside of `(0, 1]`. No table is produced.
    #[error("Invalid construction argument: {0}.")]
    InvalidConstructionArgument(String),

    /// A dynamically typed key was neither a `String` nor a `&'static str`.
    #[error("Key must be a string.")]
    InvalidKeyType,

    /// A computed bucket index fell outside of the bucket array.
    ///
    /// Means the hash function broke its `[0, capacity)` contract and should be treated as a
    /// defect rather than a recoverable condition.
    #[error("Bucket index {index} is out of range for {bucket_count} buckets.")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of buckets at the time of the lookup.
        bucket_count: usize,
    },

    /// Doubling the bucket array would overflow `usize`.
    #[error("Unable to grow the table past {capacity} buckets.")]
    CapacityOverflow {
        /// Capacity at the moment growth was attempted.
        capacity: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(TableError::InvalidKeyType.to_string(), "Key must be a string.");
        assert_eq!(
            TableError::IndexOutOfRange { index: 17, bucket_count: 16 }.to_string(),
            "Bucket index 17 is out of range for 16 buckets."
        );
        assert_eq!(
            TableError::InvalidConstructionArgument("load factor must be in (0, 1]".into())
                .to_string(),
            "Invalid construction argument: load factor must be in (0, 1]."
        );
    }
}
