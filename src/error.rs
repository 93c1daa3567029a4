//! Error kinds shared by the collections and the stack built on them.

/// Failure of a collection or stack operation.
///
/// Every error is raised synchronously to the immediate caller; nothing in
/// this crate retries or recovers internally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    /// A constructor or operation received a structurally invalid parameter.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// An absent element was offered for storage.
    #[error("collections do not store absent values")]
    NullValue,

    /// A position fell outside `[0, bound)`.
    #[error("index {index} out of range, must be within [0, {bound})")]
    IndexOutOfRange {
        /// The rejected position.
        index: usize,
        /// Exclusive upper limit that applied to the operation.
        bound: usize,
    },

    /// The operation is not backed by real storage.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    /// `pop` or `peek` on a stack with no elements.
    #[error("stack is empty")]
    EmptyStack,
}

impl CollectionError {
    pub(crate) fn check_index(index: usize, bound: usize) -> Result<(), Self> {
        if index < bound {
            Ok(())
        } else {
            Err(Self::IndexOutOfRange { index, bound })
        }
    }
}
