//! Dense symmetric eigendecomposition of the Hamiltonian and quadrature
//! normalization of the resulting eigenvectors.

use ndarray as nd;
use ndarray_linalg::{ self as la, EighInto };
use crate::{
    Arr1,
    error::EigenError,
    grid::Grid,
    hamiltonian::build_hamiltonian,
    utils,
};

pub type EigenResult<T> = Result<T, EigenError>;

/// The full set of eigenpairs of a discretized Hamiltonian, normalized so
/// that every eigenvector satisfies ∫|ψ|² dx = 1 under trapezoidal quadrature
/// over the mesh.
///
/// Computed once per (potential, mesh, coupling) configuration and read-only
/// afterward; concurrent reads need no synchronization. Eigenvalues are in
/// ascending order, so index `n` is the `n`-th energy level. Eigenvector sign
/// is unspecified (eigenvectors are defined only up to sign); every consumer
/// in this crate is sign-agnostic.
#[derive(Clone, Debug)]
pub struct Eigenbasis {
    // ascending eigenvalues
    energies: nd::Array1<f64>,
    // eigenvectors, one per column, matching the eigenvalue order
    states: nd::Array2<f64>,
    // mesh spacing the states are normalized against
    dx: f64,
}

impl Eigenbasis {
    /// Get a reference to the eigenvalue array.
    pub fn energies(&self) -> &nd::Array1<f64> { &self.energies }

    /// Get the `n`-th eigenvalue.
    pub fn energy(&self, n: usize) -> f64 { self.energies[n] }

    /// Get a reference to the eigenvector matrix (one state per column).
    pub fn states(&self) -> &nd::Array2<f64> { &self.states }

    /// Get a view of the `n`-th eigenvector.
    pub fn state(&self, n: usize) -> nd::ArrayView1<f64> {
        self.states.column(n)
    }

    /// Get the mesh spacing the basis was solved on.
    pub fn get_dx(&self) -> f64 { self.dx }

    /// Get the number of eigenpairs (equal to the number of mesh points).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.energies.len() }
}

/// Diagonalize a real symmetric Hamiltonian and normalize every eigenvector
/// against the mesh spacing `dx`.
///
/// Uses the symmetric-specialized decomposition (LAPACK `dsyev` family), which
/// guarantees real eigenvalues and returns them in ascending order. A failed
/// decomposition surfaces as [`EigenError::Eigensolve`]; an eigenvector with
/// numerically degenerate norm surfaces as [`EigenError::Degenerate`]. Neither
/// is retried.
pub fn solve_eigen(H: nd::Array2<f64>, dx: f64) -> EigenResult<Eigenbasis> {
    let (energies, mut states): (nd::Array1<f64>, nd::Array2<f64>)
        = H.eigh_into(la::UPLO::Lower)?;
    for mut col in states.axis_iter_mut(nd::Axis(1)) {
        utils::renormalize(&mut col, dx)?;
    }
    Ok(Eigenbasis { energies, states, dx })
}

/// Build the Hamiltonian for a potential over `grid` and diagonalize it in one
/// step.
pub fn solve_grid<F>(grid: &Grid, m: f64, wall: f64, V: F)
    -> EigenResult<Eigenbasis>
where F: FnMut(f64) -> f64
{
    let H = build_hamiltonian(grid, m, wall, V)?;
    solve_eigen(H, grid.get_dx())
}

/// Return a copy of a single eigenvector rescaled so its trapezoidal
/// ∫|ψ|² dx estimate is 1.
pub fn normalize<S>(q: &Arr1<S>, dx: f64) -> EigenResult<nd::Array1<f64>>
where S: nd::Data<Elem = f64>
{
    let out = utils::normalized(q, dx)?;
    Ok(out)
}
