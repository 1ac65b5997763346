use crate::heuristic::Heuristic;

/// Tunables for [`PathFinder`](crate::PathFinder).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SearchOptions {
    /// Distance estimate towards the destination.
    pub heuristic: Heuristic,
    /// Allow the 4 diagonal steps in addition to the 4 orthogonal ones.
    pub allow_diagonal: bool,
    /// Abort with [`PathError::SearchAborted`](crate::PathError::SearchAborted)
    /// after expanding this many nodes. `None` searches exhaustively.
    pub max_expansions: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            heuristic: Heuristic::Manhattan,
            allow_diagonal: true,
            max_expansions: None,
        }
    }
}

impl SearchOptions {
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_diagonal(mut self, allow: bool) -> Self {
        self.allow_diagonal = allow;
        self
    }

    pub fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn partial_document_uses_defaults() {
        let opts: SearchOptions = serde_json::from_str(r#"{"heuristic":"diagonal"}"#).unwrap();
        assert_eq!(opts.heuristic, Heuristic::Diagonal);
        assert!(opts.allow_diagonal);
        assert_eq!(opts.max_expansions, None);
    }

    #[test]
    fn round_trip() {
        let opts = SearchOptions::default()
            .with_heuristic(Heuristic::Euclidean)
            .with_diagonal(false)
            .with_max_expansions(64);
        let json = serde_json::to_string(&opts).unwrap();
        let back: SearchOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, opts);
    }

    #[test]
    fn unknown_heuristic_is_rejected() {
        assert!(serde_json::from_str::<SearchOptions>(r#"{"heuristic":"chebyshev"}"#).is_err());
    }
}
