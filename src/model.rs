//! Local embedding model backed by fastembed.
//!
//! Requires the `fastembed` feature. The default model is BGE-small-en
//! (384 dimensions), downloaded on first use.

use crate::{Embedder, Error, Result};

/// Error raised by the fastembed backend.
///
/// The backend's own error is kept as the [`source`](std::error::Error::source).
#[derive(Debug, thiserror::Error)]
#[error("fastembed: {0}")]
pub struct FastEmbedError(#[source] Box<dyn std::error::Error + Send + Sync + 'static>);

/// [`Embedder`] running a fastembed ONNX model in-process.
///
/// ## Example
///
/// ```rust,ignore
/// use driftcut::{CumulativeSimSplitter, FastEmbedder};
///
/// let splitter = CumulativeSimSplitter::new(FastEmbedder::new()?).with_threshold(0.5);
/// let segments = splitter.segment(&paragraphs)?;
/// ```
pub struct FastEmbedder {
    model: fastembed::TextEmbedding,
}

impl FastEmbedder {
    /// Load fastembed's default model.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Model`] if the model fails to download or load.
    pub fn new() -> Result<Self> {
        let model = fastembed::TextEmbedding::try_new(Default::default())
            .map_err(|e| Error::Model(e.to_string()))?;
        Ok(Self { model })
    }

    /// Use an already-loaded model.
    #[must_use]
    pub fn from_model(model: fastembed::TextEmbedding) -> Self {
        Self { model }
    }
}

impl Embedder for FastEmbedder {
    type Error = FastEmbedError;

    fn embed(&self, texts: &[&str]) -> std::result::Result<Vec<Vec<f32>>, Self::Error> {
        self.model
            .embed(texts.to_vec(), None)
            .map_err(|e| FastEmbedError(e.into()))
    }
}

impl std::fmt::Debug for FastEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FastEmbedder").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_keeps_source() {
        let err = FastEmbedError(Box::new(std::io::Error::other("onnx session failed")));
        assert_eq!(err.to_string(), "fastembed: onnx session failed");

        let source = std::error::Error::source(&err).expect("source kept");
        assert_eq!(source.to_string(), "onnx session failed");
        assert!(source.downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn test_error_passes_through_splitter() {
        let err = Error::embedding(FastEmbedError(Box::new(std::io::Error::other("oom"))));
        assert_eq!(err.to_string(), "fastembed: oom");
        assert!(err.embedding_error::<FastEmbedError>().is_some());
    }
}
