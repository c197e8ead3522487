/// Per-call search settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SearchConfig {
    /// Maximum number of nodes to expand before giving up with
    /// [`SearchOutcome::Aborted`](crate::SearchOutcome::Aborted).
    /// `None` searches until the goal is found or the frontier runs dry.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// No expansion ceiling.
    pub const UNBOUNDED: Self = Self {
        max_expansions: None,
    };

    /// Cap the search at `n` node expansions.
    pub fn with_max_expansions(mut self, n: usize) -> Self {
        self.max_expansions = Some(n);
        self
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let cfg: SearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SearchConfig::UNBOUNDED);
        let cfg: SearchConfig = serde_json::from_str(r#"{"max_expansions":50}"#).unwrap();
        assert_eq!(cfg.max_expansions, Some(50));
    }
}
