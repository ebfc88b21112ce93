//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::{Vector2, Vector3};

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Convenient alias for two-dimensional real vectors; in the coil's
/// cylindrical frame `x` carries the radial and `y` the axial coordinate.
pub type R2 = Vector2<Scalar>;
/// Convenient alias for three-dimensional real vectors.
pub type R3 = Vector3<Scalar>;

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_basic() {
        let v = linspace(0.0, 1.0, 5);
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }
}
