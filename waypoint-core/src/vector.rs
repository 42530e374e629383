use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// A single point in embedding space.
/// Wraps `ndarray::Array1<f32>` to match the 32-bit floats the embedding
/// source emits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Embedding(pub Array1<f32>);

impl Embedding {
    /// Number of components.
    pub fn dimensions(&self) -> usize {
        self.0.len()
    }
}

// Deref to the inner array so ndarray methods (`view`, `dot`, indexing) work directly.
impl std::ops::Deref for Embedding {
    type Target = Array1<f32>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for Embedding {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<f32>> for Embedding {
    fn from(vec: Vec<f32>) -> Self {
        Embedding(Array1::from(vec))
    }
}

impl From<Array1<f32>> for Embedding {
    fn from(array: Array1<f32>) -> Self {
        Embedding(array)
    }
}

impl From<Embedding> for Vec<f32> {
    fn from(embedding: Embedding) -> Self {
        embedding.0.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_conversions() {
        let embedding = Embedding::from(vec![0.6, 0.8]);
        assert_eq!(embedding.dimensions(), 2);
        assert_eq!(embedding[1], 0.8);
        let back: Vec<f32> = embedding.into();
        assert_eq!(back, vec![0.6, 0.8]);
    }

    #[test]
    fn test_serializes_as_plain_array_payload() {
        let embedding = Embedding::from(vec![1.0, 0.0]);
        let json = serde_json::to_string(&embedding).unwrap();
        let decoded: Embedding = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, embedding);
    }
}
