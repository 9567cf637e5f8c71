use serde::{Deserialize, Serialize};

/// A dense vector of floating point numbers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Vector {
    data: Vec<f32>,
}

impl Vector {
    #[inline]
    #[must_use]
    pub fn new(data: Vec<f32>) -> Self {
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Cosine similarity with another vector (0.0 on dimension mismatch)
    #[inline]
    pub fn cosine_similarity(&self, other: &Vector) -> f64 {
        crate::distance::cosine_similarity(&self.data, &other.data)
    }

    /// Cosine distance, `1 - cosine_similarity`
    #[inline]
    pub fn cosine_distance(&self, other: &Vector) -> f64 {
        crate::distance::cosine_distance(&self.data, &other.data)
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        crate::distance::norm(&self.data)
    }
}

impl From<Vec<f32>> for Vector {
    fn from(data: Vec<f32>) -> Self {
        Vector::new(data)
    }
}

/// Review embedding attached to an item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbeddingVector {
    /// Id of the item this embedding belongs to
    pub id: String,
    pub vector: Vector,
}

impl EmbeddingVector {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, vector: impl Into<Vector>) -> Self {
        Self {
            id: id.into(),
            vector: vector.into(),
        }
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.vector.dim()
    }
}
