//! Cumulative-similarity segmentation.
//!
//! Splits a document sequence where the topic drifts away from everything
//! accumulated so far in the current segment.
//!
//! ## The Idea
//!
//! Pairwise splitters compare each document only with its neighbour, so a
//! slow drift (A → A' → A'' → B) never produces a single sharp drop. Here
//! the *whole* current segment is the context: its documents are
//! concatenated, embedded, and compared with the next document.
//!
//! ```text
//! Documents:   [A] [B] [C] [D]
//!
//! idx 0:  embed("A")          vs embed("B")  → 0.9   keep
//! idx 1:  embed("A\nB")       vs embed("C")  → 0.9   keep
//! idx 2:  embed("A\nB\nC")    vs embed("D")  → 0.2   < 0.45, cut!
//!
//! Result: [A, B, C] (triggered, 0.2) | [D] (trailing)
//! ```
//!
//! After a cut the context restarts at the next document.
//!
//! ## Decision Rule
//!
//! - Cut when `similarity < threshold`. Equality keeps growing the segment.
//! - `NaN` (zero-norm embeddings) never cuts.
//! - Greedy and left-to-right: a boundary, once placed, is never revisited.
//!
//! ## Cost
//!
//! Two single-text embedding calls per decision point, so `2 × (n − 1)` calls
//! for `n` documents. The context is re-embedded as it grows; nothing is
//! cached between iterations.

use tracing::{debug, trace};

use crate::config::{SplitterConfig, DEFAULT_NAME, DEFAULT_SCORE_THRESHOLD};
use crate::{cosine_similarity, Embedder, Error, Result, Segment, Splitter};

/// Separator placed between documents when building the context text.
const CONTEXT_SEPARATOR: &str = "\n";

/// Segmenter comparing accumulated context with the next document.
///
/// ## Example
///
/// ```rust
/// use driftcut::{CumulativeSimSplitter, Embedder};
///
/// /// Embeds by counting the words "cat" and "car".
/// struct Keywords;
///
/// impl Embedder for Keywords {
///     type Error = std::convert::Infallible;
///
///     fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, Self::Error> {
///         Ok(texts
///             .iter()
///             .map(|t| vec![t.matches("cat").count() as f32, t.matches("car").count() as f32])
///             .collect())
///     }
/// }
///
/// let splitter = CumulativeSimSplitter::new(Keywords);
/// let docs = ["my cat", "the cat sleeps", "a red car", "car keys"];
/// let segments = splitter.segment(&docs).unwrap();
///
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].docs, ["my cat", "the cat sleeps"]);
/// assert!(segments[0].is_triggered());
/// assert_eq!(segments[1].docs, ["a red car", "car keys"]);
/// assert!(!segments[1].is_triggered());
/// ```
pub struct CumulativeSimSplitter<E> {
    encoder: E,
    name: String,
    score_threshold: f32,
}

impl<E: Embedder> CumulativeSimSplitter<E> {
    /// Create a splitter with the default name and a threshold of `0.45`.
    #[must_use]
    pub fn new(encoder: E) -> Self {
        Self {
            encoder,
            name: DEFAULT_NAME.to_string(),
            score_threshold: DEFAULT_SCORE_THRESHOLD,
        }
    }

    /// Create a splitter from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidThreshold`] if the configured threshold is
    /// not finite.
    pub fn with_config(encoder: E, config: SplitterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            encoder,
            name: config.name,
            score_threshold: config.score_threshold,
        })
    }

    /// Set the similarity threshold.
    ///
    /// Lower values merge more documents into fewer, larger segments.
    #[must_use]
    pub fn with_threshold(mut self, score_threshold: f32) -> Self {
        self.score_threshold = score_threshold;
        self
    }

    /// Set the splitter name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The splitter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The similarity threshold below which a boundary is placed.
    pub fn score_threshold(&self) -> f32 {
        self.score_threshold
    }

    /// The embedder driving this splitter.
    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    /// Segment an ordered document sequence.
    ///
    /// # Errors
    ///
    /// - [`Error::TooFewDocuments`] if fewer than two documents are given.
    ///   No embedding call is made in that case.
    /// - [`Error::Embedding`] carrying the embedder's own error, unchanged.
    /// - [`Error::EmbeddingCount`] / [`Error::DimensionMismatch`] if the
    ///   embedder breaks its contract.
    pub fn segment<S: AsRef<str>>(&self, docs: &[S]) -> Result<Vec<Segment>> {
        let total = docs.len();
        if total < 2 {
            return Err(Error::TooFewDocuments { count: total });
        }

        debug!(
            splitter = %self.name,
            docs = total,
            threshold = self.score_threshold,
            "segmenting documents"
        );

        let mut segments = Vec::new();
        let mut start = 0;

        for idx in 0..total - 1 {
            let context = if idx == 0 {
                docs[0].as_ref().to_string()
            } else {
                join_context(&docs[start..=idx])
            };
            let next = docs[idx + 1].as_ref();

            let score = self.similarity(&context, next)?;
            trace!(idx, start, score, "compared context with next document");

            if score < self.score_threshold {
                debug!(
                    idx,
                    score,
                    threshold = self.score_threshold,
                    "topic boundary"
                );
                segments.push(Segment::triggered(
                    owned_docs(&docs[start..=idx]),
                    start,
                    score,
                ));
                start = idx + 1;
            }
        }

        if start < total {
            segments.push(Segment::trailing(owned_docs(&docs[start..]), start));
        }

        debug!(segments = segments.len(), "segmentation complete");
        Ok(segments)
    }

    /// Embed both texts with separate calls and compare them.
    fn similarity(&self, context: &str, next: &str) -> Result<f32> {
        let context_vec = self.embed_one(context)?;
        let next_vec = self.embed_one(next)?;

        if context_vec.len() != next_vec.len() {
            return Err(Error::DimensionMismatch {
                context: context_vec.len(),
                next: next_vec.len(),
            });
        }

        Ok(cosine_similarity(&context_vec, &next_vec))
    }

    fn embed_one(&self, text: &str) -> Result<Vec<f32>> {
        let mut vectors = self.encoder.embed(&[text]).map_err(Error::embedding)?;
        if vectors.len() != 1 {
            return Err(Error::EmbeddingCount {
                expected: 1,
                actual: vectors.len(),
            });
        }
        Ok(vectors.swap_remove(0))
    }
}

impl<E: Embedder> Splitter for CumulativeSimSplitter<E> {
    fn name(&self) -> &str {
        &self.name
    }

    fn score_threshold(&self) -> f32 {
        self.score_threshold
    }

    fn split(&self, docs: &[&str]) -> Result<Vec<Segment>> {
        self.segment(docs)
    }
}

impl<E> std::fmt::Debug for CumulativeSimSplitter<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CumulativeSimSplitter")
            .field("name", &self.name)
            .field("score_threshold", &self.score_threshold)
            .finish_non_exhaustive()
    }
}

fn join_context<S: AsRef<str>>(docs: &[S]) -> String {
    docs.iter()
        .map(|d| d.as_ref())
        .collect::<Vec<&str>>()
        .join(CONTEXT_SEPARATOR)
}

fn owned_docs<S: AsRef<str>>(docs: &[S]) -> Vec<String> {
    docs.iter().map(|d| d.as_ref().to_string()).collect()
}
