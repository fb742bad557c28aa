use thiserror::Error;

/// Errors raised while building a `ChainedTable`
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    #[error("capacity must be at least one bucket, got {0}")]
    InvalidCapacity(usize),
}

pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = TableError::InvalidCapacity(0);
        assert_eq!(err.to_string(), "capacity must be at least one bucket, got 0");
    }
}
