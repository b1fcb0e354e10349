//! Error handling and result types for BstMap operations.
//!
//! Plain lookups and removals report absence through `Option`. The checked
//! variants (`get_item`, `try_remove`, `try_insert`, bulk construction) return
//! these errors instead, so callers can propagate them with `?`.

use thiserror::Error;

/// Error type for binary search tree operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BstError {
    /// Key not found in the tree.
    #[error("key not found in tree")]
    KeyNotFound,
    /// Operation needs at least one entry.
    #[error("tree is empty")]
    EmptyTree,
    /// Input to an ordered build is not strictly ascending by key.
    #[error("entries are not in strictly ascending key order at index {index}")]
    UnorderedEntries { index: usize },
    /// A positional value does not fit the value type.
    #[error("position {index} does not fit in a value")]
    ValueOverflow { index: usize },
    /// Internal data structure integrity violation.
    #[error("data integrity error: {0}")]
    DataIntegrityError(String),
    /// Arena and tree disagree about which nodes are live.
    #[error("arena error: {0}")]
    ArenaError(String),
    /// Tree corruption detected.
    #[error("corrupted tree: {0}")]
    CorruptedTree(String),
}

impl BstError {
    /// Create a DataIntegrityError with context
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrityError(format!("{}: {}", context, details))
    }

    /// Create an ArenaError with context
    pub fn arena_error(operation: &str, details: &str) -> Self {
        Self::ArenaError(format!("{} failed: {}", operation, details))
    }

    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} corruption: {}", component, details))
    }

    /// Check if this error reports a missing key or an empty tree
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound | Self::EmptyTree)
    }

    /// Check if this error reports broken internal invariants
    pub fn is_integrity_error(&self) -> bool {
        matches!(
            self,
            Self::DataIntegrityError(_) | Self::ArenaError(_) | Self::CorruptedTree(_)
        )
    }
}

/// Public result type for tree operations that may fail
pub type BstResult<T> = Result<T, BstError>;

/// Result type for key lookup operations
pub type KeyResult<T> = Result<T, BstError>;

/// Result type for tree modification operations
pub type ModifyResult<T> = Result<T, BstError>;

/// Result type for tree construction
pub type InitResult<T> = Result<T, BstError>;

/// Result extension trait for attaching context to tree errors
pub trait BstResultExt<T> {
    /// Prefix the error message with additional context
    fn with_context(self, context: &str) -> BstResult<T>;

    /// Prefix the error message with the name of the failing operation
    fn with_operation(self, operation: &str) -> BstResult<T>;

    /// Log the error and continue with the default value
    fn or_default_with_log(self) -> T
    where
        T: Default;
}

impl<T> BstResultExt<T> for Result<T, BstError> {
    fn with_context(self, context: &str) -> BstResult<T> {
        self.map_err(|e| match e {
            BstError::DataIntegrityError(msg) => BstError::data_integrity(context, &msg),
            BstError::ArenaError(msg) => BstError::arena_error(context, &msg),
            BstError::CorruptedTree(msg) => BstError::corrupted_tree(context, &msg),
            // Structured variants carry no free-form message to extend.
            other => other,
        })
    }

    fn with_operation(self, operation: &str) -> BstResult<T> {
        self.with_context(&format!("Operation '{}'", operation))
    }

    fn or_default_with_log(self) -> T
    where
        T: Default,
    {
        match self {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "tree operation failed, using default");
                T::default()
            }
        }
    }
}
