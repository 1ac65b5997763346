use std::fmt;

/// Errors raised at the grid/map boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid description or map array is inconsistent.
    Malformed { reason: String },
    /// A cell index or coordinate falls outside `[0, len)`.
    InvalidIndex { index: isize, len: usize },
}

impl GridError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { reason } => write!(f, "malformed grid: {reason}"),
            Self::InvalidIndex { index, len } => {
                write!(f, "cell index {index} outside map of {len} cells")
            }
        }
    }
}

impl std::error::Error for GridError {}
