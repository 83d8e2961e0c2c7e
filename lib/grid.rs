//! Uniform coordinate mesh over a finite interval.

use ndarray as nd;
use crate::error::ConfigError;

/// An immutable mesh of `n + 1` equally spaced coordinates spanning `[a, b]`.
///
/// Every array in the pipeline is sampled at exactly these coordinates; the
/// mesh is constructed once and shared by reference afterward.
#[derive(Clone, Debug)]
pub struct Grid {
    // interval bounds
    a: f64,
    b: f64,
    // number of subintervals; the mesh holds n + 1 points
    n: usize,
    // coordinate array
    x: nd::Array1<f64>,
    // grid spacing (b - a) / n
    dx: f64,
}

impl Grid {
    /// Create a new `Grid` over `[a, b]` with `n` subintervals (`n + 1` mesh
    /// points).
    ///
    /// Fails if `a >= b` or `n < 2`.
    pub fn new(a: f64, b: f64, n: usize) -> Result<Self, ConfigError> {
        ConfigError::check_interval(a, b)?;
        ConfigError::check_resolution(n)?;
        let x: nd::Array1<f64> = nd::Array1::linspace(a, b, n + 1);
        let dx = (b - a) / n as f64;
        Ok(Self { a, b, n, x, dx })
    }

    /// Get a reference to the coordinate array.
    pub fn get_x(&self) -> &nd::Array1<f64> { &self.x }

    /// Get the grid spacing.
    pub fn get_dx(&self) -> f64 { self.dx }

    /// Get the interval bounds.
    pub fn bounds(&self) -> (f64, f64) { (self.a, self.b) }

    /// Get the number of subintervals.
    pub fn subintervals(&self) -> usize { self.n }

    /// Get the number of mesh points, `n + 1`.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.n + 1 }

    /// Evaluate a potential at every mesh coordinate.
    pub fn sample<F>(&self, V: F) -> nd::Array1<f64>
    where F: FnMut(f64) -> f64
    {
        self.x.mapv(V)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn grid_spacing_and_endpoints() {
        let grid = Grid::new(-5.0, 5.0, 100).unwrap();
        assert_eq!(grid.len(), 101);
        assert_abs_diff_eq!(grid.get_dx(), 0.1, epsilon = 1e-15);
        let x = grid.get_x();
        assert_eq!(x[0], -5.0);
        assert_abs_diff_eq!(x[100], 5.0, epsilon = 1e-12);
    }

    #[test]
    fn grid_rejects_bad_config() {
        assert!(Grid::new(5.0, -5.0, 100).is_err());
        assert!(Grid::new(0.0, 0.0, 100).is_err());
        assert!(Grid::new(-5.0, 5.0, 1).is_err());
    }
}
