//! Error handling and result types for BTree operations.
//!
//! Lookups and deletions report absence through plain booleans; the types in
//! this module cover configuration errors and the checked `try_*` variants.

/// Error type for B-tree operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BTreeError {
    /// Key not found in the tree.
    KeyNotFound,
    /// Key is already present in the tree.
    DuplicateKey,
    /// Invalid minimum degree or other construction parameter.
    InvalidConfiguration(String),
    /// Internal data structure integrity violation.
    DataIntegrityError(String),
}

impl BTreeError {
    /// Create an InvalidConfiguration error for a rejected minimum degree
    pub fn invalid_min_degree(min_degree: usize, min_required: usize) -> Self {
        Self::InvalidConfiguration(format!(
            "Minimum degree {} is invalid (minimum required: {})",
            min_degree, min_required
        ))
    }

    /// Create an InvalidConfiguration error for a degree whose node capacity overflows
    pub fn min_degree_too_large(min_degree: usize) -> Self {
        Self::InvalidConfiguration(format!(
            "Minimum degree {} is too large (node capacity 2t - 1 overflows usize)",
            min_degree
        ))
    }

    /// Create a DataIntegrityError with context
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrityError(format!("{}: {}", context, details))
    }

    /// Check if this error is a configuration error
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::InvalidConfiguration(_))
    }
}

impl std::fmt::Display for BTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BTreeError::KeyNotFound => write!(f, "Key not found in tree"),
            BTreeError::DuplicateKey => write!(f, "Key already present in tree"),
            BTreeError::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            BTreeError::DataIntegrityError(msg) => write!(f, "Data integrity error: {}", msg),
        }
    }
}

impl std::error::Error for BTreeError {}

/// Public result type for tree operations that may fail
pub type BTreeResult<T> = Result<T, BTreeError>;

/// Result type for tree modification operations
pub type ModifyResult<T> = Result<T, BTreeError>;

/// Result type for tree construction
pub type InitResult<T> = Result<T, BTreeError>;

/// Result extension trait for improved error handling
pub trait BTreeResultExt<T> {
    /// Convert to a BTreeResult with additional context
    fn with_context(self, context: &str) -> BTreeResult<T>;

    /// Convert to a BTreeResult with operation context
    fn with_operation(self, operation: &str) -> BTreeResult<T>;
}

impl<T> BTreeResultExt<T> for Result<T, BTreeError> {
    fn with_context(self, context: &str) -> BTreeResult<T> {
        self.map_err(|e| match e {
            BTreeError::KeyNotFound => BTreeError::KeyNotFound,
            BTreeError::DuplicateKey => BTreeError::DuplicateKey,
            BTreeError::InvalidConfiguration(msg) => {
                BTreeError::InvalidConfiguration(format!("{}: {}", context, msg))
            }
            BTreeError::DataIntegrityError(msg) => BTreeError::data_integrity(context, &msg),
        })
    }

    fn with_operation(self, operation: &str) -> BTreeResult<T> {
        self.with_context(&format!("Operation '{}'", operation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(BTreeError::KeyNotFound.to_string(), "Key not found in tree");
        assert_eq!(
            BTreeError::invalid_min_degree(1, 2).to_string(),
            "Invalid configuration: Minimum degree 1 is invalid (minimum required: 2)"
        );
    }

    #[test]
    fn test_with_context_keeps_unit_variants() {
        let result: BTreeResult<()> = Err(BTreeError::DuplicateKey);
        assert_eq!(result.with_context("insert"), Err(BTreeError::DuplicateKey));
    }

    #[test]
    fn test_with_operation_prefixes_message() {
        let result: BTreeResult<()> = Err(BTreeError::data_integrity("validate", "depth"));
        match result.with_operation("delete") {
            Err(BTreeError::DataIntegrityError(msg)) => {
                assert_eq!(msg, "Operation 'delete': validate: depth");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_is_configuration_error() {
        assert!(BTreeError::invalid_min_degree(0, 2).is_configuration_error());
        assert!(BTreeError::min_degree_too_large(usize::MAX).is_configuration_error());
        assert!(!BTreeError::KeyNotFound.is_configuration_error());
    }
}
