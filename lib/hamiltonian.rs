//! Finite-difference discretization of the Hamiltonian operator over a
//! [`Grid`].

use ndarray as nd;
use crate::{ error::ConfigError, grid::Grid, DEF_WALL };

/// Build the dense `(n + 1) × (n + 1)` real symmetric Hamiltonian for a
/// potential sampled on `grid`.
///
/// `m` is the coupling parameter ħ²/mass and must be positive. The matrix is
/// tridiagonal: the second-derivative stencil puts `1/(m δx²)` on the diagonal
/// and `-1/(2 m δx²)` on the two adjacent diagonals, and the potential is
/// added to the diagonal at the interior mesh points.
///
/// The two boundary rows get `wall` added to their diagonal entries instead of
/// the potential. This is a penalty-method approximation of an infinite
/// confining wall at `a` and `b`, not an exact Dirichlet condition; choose the
/// interval wide enough that the eigenfunctions of interest have negligible
/// amplitude near the boundary, or the penalty will visibly distort low-lying
/// eigenvalues. [`DEF_WALL`] matches the reference magnitude of 10⁹.
pub fn build_hamiltonian<F>(grid: &Grid, m: f64, wall: f64, V: F)
    -> Result<nd::Array2<f64>, ConfigError>
where F: FnMut(f64) -> f64
{
    ConfigError::check_coupling(m)?;
    let n = grid.len();
    let dx = grid.get_dx();
    let kin = (m * dx.powi(2)).recip();
    let mut H: nd::Array2<f64> = nd::Array2::from_diag_elem(n, kin);
    H.slice_mut(nd::s![1..n, 0..n - 1]).diag_mut().fill(-kin / 2.0);
    H.slice_mut(nd::s![0..n - 1, 1..n]).diag_mut().fill(-kin / 2.0);
    let Vx = grid.sample(V);
    let mut H_diag = H.diag_mut();
    H_diag.iter_mut().zip(&Vx)
        .skip(1).take(n - 2)
        .for_each(|(Hii, Vi)| { *Hii += *Vi; });
    H[[0, 0]] += wall;
    H[[n - 1, n - 1]] += wall;
    Ok(H)
}

/// Like [`build_hamiltonian`], but take raw interval parameters and construct
/// the [`Grid`] internally.
pub fn build_hamiltonian_over<F>(
    a: f64,
    b: f64,
    n: usize,
    m: f64,
    V: F,
) -> Result<nd::Array2<f64>, ConfigError>
where F: FnMut(f64) -> f64
{
    let grid = Grid::new(a, b, n)?;
    build_hamiltonian(&grid, m, DEF_WALL, V)
}
