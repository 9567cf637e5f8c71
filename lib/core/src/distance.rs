//! Exact vector distance functions
//!
//! Scalar implementations with split accumulators for better pipelining.
//! Sums are carried in `f64` so that rankings over large catalogs do not
//! depend on `f32` rounding.

/// Dot product of two equal-length slices.
///
/// Returns 0.0 if the lengths differ.
#[inline]
pub fn dot_product(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let mut dot0 = 0.0f64;
    let mut dot1 = 0.0f64;

    let chunks = a.chunks_exact(4);
    let remainder = chunks.remainder().len();

    for (x, y) in chunks.zip(b.chunks_exact(4)) {
        dot0 += f64::from(x[0]) * f64::from(y[0]) + f64::from(x[1]) * f64::from(y[1]);
        dot1 += f64::from(x[2]) * f64::from(y[2]) + f64::from(x[3]) * f64::from(y[3]);
    }

    for i in (a.len() - remainder)..a.len() {
        dot0 += f64::from(a[i]) * f64::from(b[i]);
    }

    dot0 + dot1
}

/// Euclidean norm
#[inline]
pub fn norm(v: &[f32]) -> f64 {
    dot_product(v, v).sqrt()
}

/// Cosine similarity in [-1, 1].
///
/// A zero-norm vector has no direction; its similarity to anything is 0.0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let norm_a = norm(a);
    let norm_b = norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot_product(a, b) / (norm_a * norm_b)).clamp(-1.0, 1.0)
}

/// Cosine distance, `1 - cosine_similarity`, in [0, 2]
#[inline]
pub fn cosine_distance(a: &[f32], b: &[f32]) -> f64 {
    1.0 - cosine_similarity(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_product_with_remainder() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [1.0, 1.0, 1.0, 1.0, 2.0];
        assert!((dot_product(&a, &b) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_dot_product_length_mismatch() {
        assert_eq!(dot_product(&[1.0, 2.0], &[1.0]), 0.0);
    }

    #[test]
    fn test_cosine_identical_and_orthogonal() {
        let a = [0.3, 0.4, 0.5];
        assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-9);
        assert!(cosine_distance(&a, &a).abs() < 1e-9);

        let x = [1.0, 0.0];
        let y = [0.0, 1.0];
        assert!(cosine_similarity(&x, &y).abs() < 1e-9);
        assert!((cosine_distance(&x, &y) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_opposite() {
        let x = [1.0, 2.0];
        let y = [-1.0, -2.0];
        assert!((cosine_distance(&x, &y) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_zero_vector() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_cosine_scale_invariant() {
        let a = [1.0, 2.0, 3.0];
        let b = [2.0, 4.0, 6.0];
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-9);
    }
}
