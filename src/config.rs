#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What happens to a `${` that is still open when the input ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum UnclosedPolicy {
    /// Emit the unfinished text verbatim, exactly as whole-text interpolation does.
    #[default]
    Flush,
    /// Discard it. A lone trailing `$` is still emitted.
    Drop,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Longest still-open span a streaming candidate may hold. One more unit is
    /// looked at: if it closes the reference, the reference is resolved,
    /// otherwise the span is written out as plain text. `None` lets it grow
    /// without bound.
    pub max_lookahead: Option<usize>,
    /// Handling of a reference left open at end of input
    pub unclosed: UnclosedPolicy,
}

impl Config {
    pub const DEFAULT_MAX_LOOKAHEAD: usize = 4096;
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_lookahead: Some(Self::DEFAULT_MAX_LOOKAHEAD),
            unclosed: UnclosedPolicy::Flush,
        }
    }
}
