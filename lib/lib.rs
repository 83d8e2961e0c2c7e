#![allow(dead_code, non_snake_case)]

//! Solves the one-dimensional, time-independent Schrödinger equation for a
//! particle confined to a finite interval by dense diagonalization of a
//! finite-difference Hamiltonian, and evolves arbitrary initial states in time
//! by expansion in the resulting eigenbasis.
//!
//! The pipeline is
//! 1. sample a potential on a uniform [`Grid`][grid::Grid],
//! 2. [build][hamiltonian::build_hamiltonian] the discretized Hamiltonian,
//! 3. [diagonalize][solve::solve_eigen] it into a normalized
//!    [`Eigenbasis`][solve::Eigenbasis],
//! 4. [project][spectral::project] the initial state onto the basis,
//! 5. [propagate][spectral::propagate] to any time by attaching a phase
//!    `exp(-i E t / s)` to each expansion coefficient.
//!
//! Steps 1-4 run once per configuration; step 5 is cheap and may be repeated
//! for arbitrary times in any order. See [`docs`] for theoretical background.
//!
//! ```
//! use espace::{
//!     grid::Grid,
//!     potential::{ add, gaussian, harmonic, scale },
//!     solve::solve_grid,
//!     spectral::{ gaussian_packet, project, propagate },
//!     utils::norm_sq,
//! };
//!
//! let grid = Grid::new(-5.0, 5.0, 100).unwrap();
//! let V = scale(20.0, add(scale(0.4, gaussian(0.0, 0.6)), harmonic(0.1)));
//! let basis = solve_grid(&grid, 1.0, espace::DEF_WALL, V).unwrap();
//!
//! let x = grid.get_x();
//! let psi0 = gaussian_packet(x, x[40], 0.5, 0.5);
//! let coeffs = project(&basis, &psi0).unwrap();
//!
//! let q0 = propagate(&basis, &coeffs, 0.0, None, 5.0);
//! let err = (norm_sq(&q0, grid.get_dx()) - norm_sq(&psi0, grid.get_dx())).abs();
//! assert!(err < 1e-6);
//! ```

pub mod error;
pub mod grid;
pub mod potential;
pub mod hamiltonian;
pub mod solve;
pub mod spectral;
pub mod utils;

pub mod docs;

/// Default diagonal penalty applied to the two boundary rows of the
/// Hamiltonian, emulating an infinite confining wall.
pub const DEF_WALL: f64 = 1e9;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
pub type Arr2<S> = ndarray::ArrayBase<S, ndarray::Ix2>;
