use std::fmt;

use tilenav_core::GridError;

/// Errors that stop a path search before or during the search.
///
/// "No path" is not an error: searches return an empty path for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The heuristic name is not one of `manhattan`, `euclidean`,
    /// `diagonal`.
    InvalidHeuristic(String),
    /// The map or an endpoint index is invalid.
    Grid(GridError),
    /// The expansion budget ran out before the destination was reached.
    SearchAborted { expanded: usize },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHeuristic(name) => write!(
                f,
                "unknown heuristic \u{201c}{name}\u{201d} (expected manhattan, euclidean or diagonal)"
            ),
            Self::Grid(err) => write!(f, "{err}"),
            Self::SearchAborted { expanded } => {
                write!(f, "search aborted after expanding {expanded} nodes")
            }
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GridError> for PathError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}
