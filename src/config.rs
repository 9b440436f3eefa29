//! Splitter configuration.
//!
//! ## Threshold Selection
//!
//! A boundary is placed when the similarity between the current segment's
//! accumulated context and the next document drops *below* the threshold:
//!
//! | Threshold | Effect |
//! |-----------|--------|
//! | 0.2 | Permissive: few, large segments |
//! | 0.45 | Default |
//! | 0.7 | Strict: many, small segments |
//!
//! Lowering the threshold merges more documents into fewer segments.

use crate::{Error, Result};

/// Default similarity threshold below which a boundary is placed.
pub const DEFAULT_SCORE_THRESHOLD: f32 = 0.45;

/// Default splitter name.
pub const DEFAULT_NAME: &str = "cumulative_similarity_splitter";

/// Construction-time settings for a splitter.
///
/// ```rust
/// use driftcut::SplitterConfig;
///
/// let config = SplitterConfig::default();
/// assert_eq!(config.score_threshold, 0.45);
/// assert!(config.validate().is_ok());
///
/// let strict = SplitterConfig {
///     score_threshold: 0.7,
///     ..Default::default()
/// };
/// assert_eq!(strict.name, "cumulative_similarity_splitter");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SplitterConfig {
    /// Identifier for this splitter. Not used in any decision.
    pub name: String,
    /// Similarity below which the current segment is closed.
    pub score_threshold: f32,
}

impl SplitterConfig {
    /// Check that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidThreshold`] if the threshold is NaN or infinite.
    pub fn validate(&self) -> Result<()> {
        if self.score_threshold.is_finite() {
            Ok(())
        } else {
            Err(Error::InvalidThreshold(self.score_threshold))
        }
    }
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            score_threshold: DEFAULT_SCORE_THRESHOLD,
        }
    }
}
