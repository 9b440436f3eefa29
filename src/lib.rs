//! # driftcut
//!
//! Topic segmentation of document sequences for retrieval pipelines.
//!
//! ## The Problem
//!
//! Retrieval pipelines index "documents", but the units you receive rarely
//! line up with topics. A transcript arrives as speaker turns; an article
//! arrives as paragraphs. One topic spans many turns, and a single
//! paragraph break can hide a topic change.
//!
//! Indexing each unit alone loses context. Indexing the whole thing drowns
//! every topic in every other. What you want is groups of consecutive
//! documents that belong together.
//!
//! ## Cumulative Similarity
//!
//! Walk the sequence once. Keep a growing "current segment". At each step,
//! embed the concatenated segment and the next document, and compare:
//!
//! ```text
//! Documents:   [A] [B] [C] [D]
//!
//! sim("A",       "B") = 0.9   keep
//! sim("A\nB",    "C") = 0.9   keep
//! sim("A\nB\nC", "D") = 0.2   below 0.45, cut
//!
//! Segments:    [A, B, C] | [D]
//! ```
//!
//! Comparing against the *accumulated* context rather than just the
//! previous document makes the test global to the segment: a slow drift
//! that never shows a sharp pairwise drop still pulls the context
//! similarity down.
//!
//! **Weakness**: the context is re-embedded at every step, so cost grows
//! with segment length. The threshold is a hyperparameter.
//!
//! ## Quick Start
//!
//! ```rust
//! use driftcut::{CumulativeSimSplitter, Embedder};
//!
//! /// Toy embedder: one axis per keyword.
//! struct Keywords;
//!
//! impl Embedder for Keywords {
//!     type Error = std::convert::Infallible;
//!
//!     fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, Self::Error> {
//!         Ok(texts
//!             .iter()
//!             .map(|t| {
//!                 ["rust", "tea"]
//!                     .iter()
//!                     .map(|k| t.matches(k).count() as f32)
//!                     .collect()
//!             })
//!             .collect())
//!     }
//! }
//!
//! let docs = [
//!     "rust has traits",
//!     "rust has lifetimes",
//!     "green tea is mild",
//! ];
//!
//! let splitter = CumulativeSimSplitter::new(Keywords).with_threshold(0.45);
//! let segments = splitter.segment(&docs)?;
//!
//! assert_eq!(segments.len(), 2);
//! assert_eq!(segments[0].triggered_score, Some(0.0));
//! assert_eq!(segments[1].docs, ["green tea is mild"]);
//! # Ok::<(), driftcut::Error>(())
//! ```
//!
//! ## Local Models (requires `fastembed` feature)
//!
//! ```rust,ignore
//! use driftcut::{documents, CumulativeSimSplitter, FastEmbedder};
//!
//! let splitter = CumulativeSimSplitter::new(FastEmbedder::new()?);
//! let segments = splitter.segment(&documents::paragraphs(article))?;
//! ```
//!
//! ## Logging
//!
//! Segmentation runs emit `tracing` events: `debug` for each boundary,
//! `trace` for each comparison. Install any subscriber to see them.

mod config;
mod cumulative;
pub mod documents;
mod embed;
mod error;
mod segment;
mod similarity;

#[cfg(feature = "fastembed")]
mod model;

pub use config::{SplitterConfig, DEFAULT_NAME, DEFAULT_SCORE_THRESHOLD};
pub use cumulative::CumulativeSimSplitter;
pub use embed::Embedder;
pub use error::{Error, Result};
pub use segment::Segment;
pub use similarity::cosine_similarity;

#[cfg(feature = "fastembed")]
pub use model::{FastEmbedError, FastEmbedder};

/// A document-sequence splitting strategy.
///
/// Splitters carry a name and a similarity threshold, and turn an ordered
/// list of documents into consecutive [`Segment`]s. The trait is object
/// safe, so pipelines can hold any splitter behind `dyn`:
///
/// ```rust
/// use driftcut::{CumulativeSimSplitter, Embedder, Splitter};
///
/// struct Flat;
///
/// impl Embedder for Flat {
///     type Error = std::convert::Infallible;
///
///     fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, Self::Error> {
///         Ok(texts.iter().map(|_| vec![1.0, 1.0]).collect())
///     }
/// }
///
/// fn describe(splitter: &dyn Splitter, docs: &[&str]) -> String {
///     let segments = splitter.split(docs).unwrap();
///     format!("{}: {} segment(s)", splitter.name(), segments.len())
/// }
///
/// let splitter = CumulativeSimSplitter::new(Flat).with_name("flat");
/// assert_eq!(describe(&splitter, &["a", "b", "c"]), "flat: 1 segment(s)");
/// ```
pub trait Splitter: Send + Sync {
    /// Identifier for this splitter.
    fn name(&self) -> &str;

    /// Similarity below which a boundary is placed.
    fn score_threshold(&self) -> f32;

    /// Split an ordered document sequence into segments.
    ///
    /// # Errors
    ///
    /// Fails on invalid input (fewer than two documents) or when the
    /// underlying embedder fails.
    fn split(&self, docs: &[&str]) -> Result<Vec<Segment>>;
}
