//! Error types for driftcut.

/// Errors that can occur during segmentation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Too few documents to compare (at least two are needed).
    #[error(
        "at least two documents are required to determine topic boundaries \
         via similarity comparison (got {count})"
    )]
    TooFewDocuments {
        /// How many documents were supplied.
        count: usize,
    },

    /// The embedder failed. The underlying error is passed through untouched.
    #[error(transparent)]
    Embedding(Box<dyn std::error::Error + Send + Sync + 'static>),

    /// The embedder returned the wrong number of vectors for a call.
    #[error("embedder returned {actual} vectors for {expected} inputs")]
    EmbeddingCount {
        /// Number of texts sent to the embedder.
        expected: usize,
        /// Number of vectors it returned.
        actual: usize,
    },

    /// Context and candidate embeddings have different dimensions.
    #[error("embedding dimension mismatch: context has {context}, next document has {next}")]
    DimensionMismatch {
        /// Dimension of the context embedding.
        context: usize,
        /// Dimension of the next-document embedding.
        next: usize,
    },

    /// Score threshold is NaN or infinite.
    #[error("invalid score threshold: {0} (must be finite)")]
    InvalidThreshold(f32),

    /// Embedding model failed to load.
    #[error("embedding model error: {0}")]
    Model(String),
}

impl Error {
    /// Wrap an embedder's own error.
    pub fn embedding<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Embedding(Box::new(err))
    }

    /// The embedder's original error, if this is an [`Error::Embedding`] of type `E`.
    ///
    /// ```rust
    /// use driftcut::Error;
    ///
    /// let err = Error::embedding(std::io::Error::other("connection reset"));
    /// let io = err.embedding_error::<std::io::Error>().unwrap();
    /// assert_eq!(io.to_string(), "connection reset");
    /// ```
    pub fn embedding_error<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        match self {
            Self::Embedding(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }

    /// Whether this error is an input precondition violation.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::TooFewDocuments { .. })
    }
}

/// Result type for driftcut operations.
pub type Result<T> = std::result::Result<T, Error>;
