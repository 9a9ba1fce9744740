//! Error type shared by all strided-linalg crates.

/// Errors that can occur during strided-linalg operations.
///
/// Shape and argument preconditions surface here. Indexing outside a
/// container or view panics instead, like slice indexing does.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StridedError {
    #[error("shape mismatch: {0:?} vs {1:?}")]
    ShapeMismatch(Vec<usize>, Vec<usize>),

    #[error("matrix must be square, got {rows}x{cols}")]
    NonSquare { rows: usize, cols: usize },

    #[error("{0} requires a non-empty operand")]
    Empty(&'static str),

    #[error("bad argument: {0}")]
    BadArgument(String),

    #[error("view exceeds the bounds of its storage")]
    OffsetOverflow,

    #[error("matrix is singular: U({pivot},{pivot}) is exactly zero")]
    Singular { pivot: usize },

    #[error("argument {arg} of {routine} had an illegal value")]
    Lapack { routine: &'static str, arg: i32 },
}

impl StridedError {
    /// Short category tag (`bad_size`, `bad_argument`, ...).
    pub fn tag(&self) -> &'static str {
        match self {
            StridedError::ShapeMismatch(..)
            | StridedError::NonSquare { .. }
            | StridedError::Empty(_) => "bad_size",
            StridedError::BadArgument(_) => "bad_argument",
            StridedError::OffsetOverflow => "bad_index",
            StridedError::Singular { .. } => "singular",
            StridedError::Lapack { .. } => "lapack",
        }
    }
}

/// Convenience alias for results in strided-linalg.
pub type Result<T> = std::result::Result<T, StridedError>;
