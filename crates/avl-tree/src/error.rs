use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AvlError {
    #[error("EMPTY_TREE")]
    EmptyTree,
    #[error("Height mismatch: expected {expected}, got {actual}")]
    HeightMismatch { expected: i32, actual: i32 },
    #[error("AVL balance violated: factor {factor}")]
    Unbalanced { factor: i32 },
    #[error("Node order violated")]
    OrderViolated,
    #[error("Size mismatch: counted {counted}, tracked {tracked}")]
    SizeMismatch { counted: usize, tracked: usize },
}
