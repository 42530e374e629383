//! Vector algebra primitives shared by the extrapolation strategies.
//!
//! Every function is pure and allocates its result. Binary operations check
//! that both operands have the same length and return
//! `WaypointError::DimensionMismatch` otherwise.

use ndarray::{Array1, ArrayView1};

use crate::error::{WaypointError, WaypointResult};
use crate::vector::Embedding;

/// Fails with `DimensionMismatch` unless `actual == expected`.
pub fn check_dimensions(expected: usize, actual: usize) -> WaypointResult<()> {
    if expected != actual {
        return Err(WaypointError::DimensionMismatch { expected, actual });
    }
    Ok(())
}

/// Checks that a path is non-empty and that every element shares the
/// dimension of the first one. Returns that dimension.
pub fn validate_path(path: &[Embedding]) -> WaypointResult<usize> {
    let first = path.first().ok_or(WaypointError::EmptyPath)?;
    let dim = first.len();
    for point in &path[1..] {
        check_dimensions(dim, point.len())?;
    }
    Ok(dim)
}

/// Element-wise `a + b`.
pub fn add(a: ArrayView1<f32>, b: ArrayView1<f32>) -> WaypointResult<Array1<f32>> {
    check_dimensions(a.len(), b.len())?;
    Ok(&a + &b)
}

/// Element-wise `a - b`.
pub fn subtract(a: ArrayView1<f32>, b: ArrayView1<f32>) -> WaypointResult<Array1<f32>> {
    check_dimensions(a.len(), b.len())?;
    Ok(&a - &b)
}

/// Multiplies every element by `s`.
pub fn scale(v: ArrayView1<f32>, s: f32) -> Array1<f32> {
    &v * s
}

/// Sum of element-wise products.
pub fn dot(a: ArrayView1<f32>, b: ArrayView1<f32>) -> WaypointResult<f32> {
    check_dimensions(a.len(), b.len())?;
    Ok(a.dot(&b))
}

/// Euclidean (L2) norm.
pub fn magnitude(v: ArrayView1<f32>) -> f32 {
    v.dot(&v).sqrt()
}

/// Scales `v` to unit length. The zero vector is returned unchanged.
pub fn normalize(v: ArrayView1<f32>) -> Array1<f32> {
    let norm = magnitude(v);
    if norm == 0.0 {
        return v.to_owned();
    }
    scale(v, 1.0 / norm)
}

/// Vector of `d` zeros.
pub fn zero(d: usize) -> Array1<f32> {
    Array1::zeros(d)
}

/// Linear interpolation `a + t * (b - a)`. `t` outside `[0, 1]` extrapolates.
pub fn lerp(a: ArrayView1<f32>, b: ArrayView1<f32>, t: f32) -> WaypointResult<Array1<f32>> {
    let step = scale(subtract(b, a)?.view(), t);
    add(a, step.view())
}

/// Arithmetic mean of a set of vectors, summed in iteration order.
///
/// Returns `EmptyInput` when the iterator yields nothing.
pub fn mean<'a, I>(vectors: I) -> WaypointResult<Array1<f32>>
where
    I: IntoIterator<Item = ArrayView1<'a, f32>>,
{
    let mut iter = vectors.into_iter();
    let first = iter.next().ok_or(WaypointError::EmptyInput)?;
    let mut sum = first.to_owned();
    let mut count = 1usize;
    for v in iter {
        check_dimensions(sum.len(), v.len())?;
        sum += &v;
        count += 1;
    }
    let n = count as f32;
    sum.mapv_inplace(|x| x / n);
    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr1;

    const EPS: f32 = 1e-6;

    #[test]
    fn test_add_subtract() {
        let a = arr1(&[1.0, 2.0, 3.0]);
        let b = arr1(&[0.5, -2.0, 1.0]);
        assert_eq!(add(a.view(), b.view()).unwrap(), arr1(&[1.5, 0.0, 4.0]));
        assert_eq!(subtract(a.view(), b.view()).unwrap(), arr1(&[0.5, 4.0, 2.0]));
    }

    #[test]
    fn test_scale_and_dot() {
        let v = arr1(&[1.0, -2.0]);
        assert_eq!(scale(v.view(), -3.0), arr1(&[-3.0, 6.0]));
        let w = arr1(&[4.0, 0.5]);
        assert!((dot(v.view(), w.view()).unwrap() - 3.0).abs() < EPS);
    }

    #[test]
    fn test_magnitude() {
        assert!((magnitude(arr1(&[3.0, 4.0]).view()) - 5.0).abs() < EPS);
        assert_eq!(magnitude(Array1::<f32>::zeros(0).view()), 0.0);
    }

    #[test]
    fn test_normalize() {
        let n = normalize(arr1(&[3.0, 4.0]).view());
        assert!((n[0] - 0.6).abs() < EPS);
        assert!((n[1] - 0.8).abs() < EPS);
        assert!((magnitude(n.view()) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_normalize_zero_vector_is_unchanged() {
        let z = zero(4);
        let n = normalize(z.view());
        assert_eq!(n, z);
        assert!(n.iter().all(|x| x.is_finite()));
    }

    #[test]
    fn test_lerp() {
        let a = arr1(&[0.0, 0.0]);
        let b = arr1(&[2.0, 4.0]);
        assert_eq!(lerp(a.view(), b.view(), 0.5).unwrap(), arr1(&[1.0, 2.0]));
        assert_eq!(lerp(a.view(), b.view(), 0.0).unwrap(), a);
        // Beyond the segment in both directions.
        assert_eq!(lerp(a.view(), b.view(), 1.5).unwrap(), arr1(&[3.0, 6.0]));
        assert_eq!(lerp(a.view(), b.view(), -1.0).unwrap(), arr1(&[-2.0, -4.0]));
    }

    #[test]
    fn test_mean() {
        let vs = [arr1(&[1.0, 0.0]), arr1(&[0.0, 1.0]), arr1(&[2.0, 2.0])];
        let m = mean(vs.iter().map(|v| v.view())).unwrap();
        assert!((m[0] - 1.0).abs() < EPS);
        assert!((m[1] - 1.0).abs() < EPS);
    }

    #[test]
    fn test_mean_empty_input() {
        let vs: Vec<Array1<f32>> = Vec::new();
        assert!(matches!(mean(vs.iter().map(|v| v.view())), Err(WaypointError::EmptyInput)));
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = arr1(&[1.0, 2.0]);
        let b = arr1(&[1.0, 2.0, 3.0]);

        assert!(matches!(add(a.view(), b.view()), Err(WaypointError::DimensionMismatch { expected: 2, actual: 3 })));
        assert!(matches!(subtract(a.view(), b.view()), Err(WaypointError::DimensionMismatch { expected: 2, actual: 3 })));
        assert!(matches!(dot(a.view(), b.view()), Err(WaypointError::DimensionMismatch { expected: 2, actual: 3 })));
        assert!(matches!(lerp(a.view(), b.view(), 0.5), Err(WaypointError::DimensionMismatch { .. })));
        let vs = [a.clone(), b.clone()];
        assert!(matches!(mean(vs.iter().map(|v| v.view())), Err(WaypointError::DimensionMismatch { expected: 2, actual: 3 })));
    }

    #[test]
    fn test_validate_path() {
        let ok = vec![Embedding::from(vec![1.0, 0.0]), Embedding::from(vec![0.0, 1.0])];
        assert_eq!(validate_path(&ok).unwrap(), 2);
        assert!(matches!(validate_path(&[]), Err(WaypointError::EmptyPath)));
        let mixed = vec![Embedding::from(vec![1.0, 0.0]), Embedding::from(vec![0.0, 1.0, 0.0])];
        assert!(matches!(validate_path(&mixed), Err(WaypointError::DimensionMismatch { expected: 2, actual: 3 })));
    }
}
