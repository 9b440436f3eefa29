//! The embedding capability consumed by splitters.
//!
//! Splitters never compute embeddings themselves. They drive an
//! [`Embedder`], which maps a batch of texts to one vector per text, in
//! order. Model loading, transport, caching and batching all live behind
//! this trait.

use std::sync::Arc;

/// Maps texts to embedding vectors.
///
/// Implementations must return exactly one vector per input text, in the
/// same order. Vectors from one implementation should share a dimension.
///
/// Errors are the implementation's own; splitters pass them to the caller
/// unchanged (see [`crate::Error::Embedding`]).
///
/// ## Example
///
/// ```rust
/// use driftcut::Embedder;
///
/// /// Counts vowels and consonants.
/// struct Letters;
///
/// impl Embedder for Letters {
///     type Error = std::convert::Infallible;
///
///     fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, Self::Error> {
///         Ok(texts
///             .iter()
///             .map(|t| {
///                 let vowels = t.chars().filter(|c| "aeiou".contains(*c)).count();
///                 vec![vowels as f32, (t.len() - vowels) as f32]
///             })
///             .collect())
///     }
/// }
///
/// let vectors = Letters.embed(&["banana", "xyz"]).unwrap();
/// assert_eq!(vectors, vec![vec![3.0, 3.0], vec![0.0, 3.0]]);
/// ```
pub trait Embedder: Send + Sync {
    /// Error raised by the underlying embedding backend.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Embed each text, returning one vector per text in input order.
    fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, Self::Error>;
}

impl<E: Embedder + ?Sized> Embedder for &E {
    type Error = E::Error;

    fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, Self::Error> {
        (**self).embed(texts)
    }
}

impl<E: Embedder + ?Sized> Embedder for Box<E> {
    type Error = E::Error;

    fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, Self::Error> {
        (**self).embed(texts)
    }
}

impl<E: Embedder + ?Sized> Embedder for Arc<E> {
    type Error = E::Error;

    fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, Self::Error> {
        (**self).embed(texts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    struct Lengths;

    impl Embedder for Lengths {
        type Error = Infallible;

        fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, Self::Error> {
            Ok(texts.iter().map(|t| vec![t.len() as f32]).collect())
        }
    }

    fn embed_via<E: Embedder>(embedder: E, text: &str) -> Vec<f32> {
        embedder.embed(&[text]).unwrap().remove(0)
    }

    #[test]
    fn test_forwarding_impls() {
        assert_eq!(embed_via(&Lengths, "abc"), vec![3.0]);
        assert_eq!(embed_via(Box::new(Lengths), "abcd"), vec![4.0]);
        assert_eq!(embed_via(Arc::new(Lengths), "ab"), vec![2.0]);
    }
}
