//! Construction parameters for [`HashTable`].

use crate::{HashTable, TableError};

/// Number of buckets a table starts with unless told otherwise.
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// Ratio of entries to buckets above which the table grows, unless told otherwise.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Validated-on-build parameters of a [`HashTable`].
///
/// ```rust
/// use chained_table::{HashTable, TableConfig};
///
/// let table: HashTable<u32> = TableConfig::default()
///     .with_initial_capacity(4)
///     .with_load_factor(0.5)
///     .build()?;
/// assert_eq!(table.capacity(), 4);
/// # Ok::<(), chained_table::TableError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    /// Number of buckets allocated at construction, must be positive.
    pub initial_capacity: usize,
    /// Growth threshold, must lie in `(0, 1]`.
    pub load_factor: f64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { initial_capacity: DEFAULT_INITIAL_CAPACITY, load_factor: DEFAULT_LOAD_FACTOR }
    }
}

impl TableConfig {
    /// Creates a configuration from explicit parameters without validating them.
    #[must_use]
    pub fn new(initial_capacity: usize, load_factor: f64) -> Self {
        Self { initial_capacity, load_factor }
    }

    /// Sets the initial number of buckets.
    #[must_use]
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Sets the growth threshold.
    #[must_use]
    pub fn with_load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Checks both parameters.
    ///
    /// # Errors
    ///
    /// [`TableError::InvalidConstructionArgument`] if the capacity is zero or the load factor is
    /// not a number in `(0, 1]`.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.initial_capacity == 0 {
            return Err(TableError::InvalidConstructionArgument(
                "initial capacity must be a positive number".to_string(),
            ));
        }
        if self.load_factor.is_nan() || self.load_factor <= 0.0 || self.load_factor > 1.0 {
            return Err(TableError::InvalidConstructionArgument(format!(
                "load factor must be a number in (0, 1], got {}",
                self.load_factor
            )));
        }
        Ok(())
    }

    /// Builds an empty table from this configuration.
    ///
    /// # Errors
    ///
    /// See [`TableConfig::validate`].
    pub fn build<V>(self) -> Result<HashTable<V>, TableError> {
        HashTable::with_config(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = TableConfig::default();
        assert_eq!(config.initial_capacity, 16);
        assert!((config.load_factor - 0.75).abs() < f64::EPSILON);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let config = TableConfig::new(0, 0.75);
        assert!(matches!(config.validate(), Err(TableError::InvalidConstructionArgument(_))));
    }

    #[test]
    fn test_rejects_out_of_range_load_factor() {
        for load_factor in [0.0, -0.25, 1.5, f64::NAN, f64::INFINITY] {
            let config = TableConfig::default().with_load_factor(load_factor);
            assert!(
                matches!(config.validate(), Err(TableError::InvalidConstructionArgument(_))),
                "load factor {load_factor} was accepted"
            );
        }
    }

    #[test]
    fn test_accepts_full_load_factor() {
        let config = TableConfig::new(1, 1.0);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_build() -> Result<(), TableError> {
        let table = TableConfig::default().with_initial_capacity(8).build::<i32>()?;
        assert_eq!(table.capacity(), 8);
        assert!(table.is_empty());
        Ok(())
    }
}
