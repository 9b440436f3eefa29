//! Cosine similarity between embedding vectors.
//!
//! Plain IEEE 754 arithmetic with no guard for zero-length vectors: a zero
//! norm yields `NaN`, and `NaN < threshold` is false, so a degenerate
//! embedding never places a boundary.
//!
//! ```text
//! cos(a, b) = (a · b) / (‖a‖ × ‖b‖)
//! ```

/// Compute the cosine similarity of two vectors.
///
/// Vectors are expected to have the same dimension; extra trailing
/// components of the longer one are ignored.
///
/// ```rust
/// use driftcut::cosine_similarity;
///
/// assert_eq!(cosine_similarity(&[3.0, 4.0], &[4.0, 3.0]), 0.96);
/// assert!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]).is_nan());
/// ```
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    dot / (norm(a) * norm(b))
}

/// Euclidean (L2) norm.
fn norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_vectors() {
        assert_eq!(cosine_similarity(&[1.0, 0.0, 0.0], &[2.0, 0.0, 0.0]), 1.0);
    }

    #[test]
    fn test_orthogonal_vectors() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn test_opposite_vectors() {
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[-1.0, -2.0]), -1.0);
    }

    #[test]
    fn test_zero_vector_is_nan() {
        assert!(cosine_similarity(&[0.0, 0.0], &[0.0, 0.0]).is_nan());
        assert!(cosine_similarity(&[1.0, 1.0], &[0.0, 0.0]).is_nan());
    }

    #[test]
    fn test_nan_never_below_threshold() {
        let sim = cosine_similarity(&[0.0], &[1.0]);
        assert!(!(sim < 0.45));
        assert!(!(sim < f32::INFINITY));
    }
}
