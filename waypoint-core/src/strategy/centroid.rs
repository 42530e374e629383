use tracing::debug;

use super::Extrapolate;
use crate::algebra::{mean, normalize, validate_path};
use crate::error::WaypointResult;
use crate::vector::Embedding;

/// Renormalized center of mass of the whole path. Suited to "overall theme"
/// queries rather than directional continuation; insensitive to path order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CentroidStrategy;

impl Extrapolate for CentroidStrategy {
    fn name(&self) -> &'static str {
        "centroid"
    }

    fn extrapolate(&self, path: &[Embedding]) -> WaypointResult<Embedding> {
        let dim = validate_path(path)?;
        debug!(strategy = self.name(), path_len = path.len(), dim, "Extrapolating");
        let center = mean(path.iter().map(|p| p.view()))?;
        Ok(normalize(center.view()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::magnitude;
    use crate::error::WaypointError;

    #[test]
    fn test_centroid_of_two_axes() {
        let path = vec![Embedding::from(vec![1.0, 0.0]), Embedding::from(vec![0.0, 1.0])];
        let result = CentroidStrategy.extrapolate(&path).unwrap();
        let expected = std::f32::consts::FRAC_1_SQRT_2;
        assert!((result[0] - expected).abs() < 1e-6);
        assert!((result[1] - expected).abs() < 1e-6);
    }

    #[test]
    fn test_output_is_unit_length() {
        let path = vec![
            Embedding::from(vec![3.0, 4.0, 0.0]),
            Embedding::from(vec![0.0, 1.0, 1.0]),
            Embedding::from(vec![2.0, 0.0, 5.0]),
        ];
        let result = CentroidStrategy.extrapolate(&path).unwrap();
        assert!((magnitude(result.view()) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_opposite_points_give_zero_vector() {
        // Mean is zero; normalize leaves it as is.
        let path = vec![Embedding::from(vec![1.0, 0.0]), Embedding::from(vec![-1.0, 0.0])];
        let result = CentroidStrategy.extrapolate(&path).unwrap();
        assert_eq!(result, Embedding::from(vec![0.0, 0.0]));
    }

    #[test]
    fn test_empty_path() {
        assert!(matches!(CentroidStrategy.extrapolate(&[]), Err(WaypointError::EmptyPath)));
    }
}
