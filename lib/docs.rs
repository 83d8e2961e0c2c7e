//! Theoretical background.
//!
//! # Contents
//! - [Discretization](#discretization)
//! - [Boundary penalty](#boundary-penalty)
//! - [Spectral time evolution](#spectral-time-evolution)
//! - [Truncation](#truncation)
//!
//! # Discretization
//! The time-independent Schrödinger equation for a particle of mass *M* in a
//! conservative potential *V*(*x*) reads
//! ```text
//!   m ∂²ψ
//! - - --- + V(x) ψ(x) = E ψ(x),    m := ħ²/M
//!   2 ∂x²
//! ```
//! Dividing the interval [*a*, *b*] into *N* even subintervals of width
//! *δx* = (*b* − *a*)/*N* and replacing the second derivative by its
//! three-point stencil,
//! ```text
//! ∂²ψ     ψ[i+1] - 2 ψ[i] + ψ[i-1]
//! --- │ ≈ ------------------------
//! ∂x² │i            δx²
//! ```
//! turns the operator into a real symmetric, tridiagonal
//! (*N* + 1) × (*N* + 1) matrix with
//! ```text
//! H[i, i]   = 1/(m δx²) + V(a + i δx)
//! H[i, i±1] = -1/(2 m δx²)
//! ```
//! Its eigenpairs are the discrete approximations of the energy levels and
//! stationary states; because the matrix is symmetric, the eigenvalues are
//! guaranteed real and the decomposition may (and must, for stability) use a
//! symmetric-specialized routine. The stencil carries an O(*δx*²) truncation
//! error, so eigenvalues of high-lying states — whose wavefunctions oscillate
//! on the scale of a few grid points — are not to be trusted.
//!
//! # Boundary penalty
//! Rows 0 and *N* add a large constant *w* (default 10⁹) to the diagonal
//! instead of the sampled potential. Any eigenvector with appreciable
//! amplitude at the boundary then picks up an energy of order *w*, so all
//! low-lying states are driven to ≈0 there — an approximation of an infinite
//! confining wall. This is a penalty method, not an exact Dirichlet
//! condition: the boundary unknowns remain in the system, and the penalty
//! shifts low-lying eigenvalues by a small amount that grows as
//! eigenfunctions reach the walls. Callers should pick [*a*, *b*] wide enough
//! that the states of interest decay well before the boundary.
//!
//! # Spectral time evolution
//! The normalized eigenvectors {ψₙ} form a basis of the mesh-sampled state
//! space. Writing an initial state as
//! ```text
//! ψ0(x) = Σₙ cₙ ψₙ(x),    cₙ = ⟨ψₙ|ψ0⟩
//! ```
//! with the inner product taken under the same trapezoidal quadrature used to
//! normalize the basis, the time-dependent Schrödinger equation is solved
//! exactly (within the discretized model) by
//! ```text
//! ψ(x, t) = Σₙ cₙ ψₙ(x) exp(-i Eₙ t / s)
//! ```
//! where *s* converts between eigenvalue units and the phase argument. Each
//! term only rotates in phase, so evaluation at any *t* — negative, zero, or
//! arbitrarily large — costs one pass over the retained modes and accumulates
//! no stepping error, in contrast to grid-stepping integrators.
//!
//! # Truncation
//! Since the cₙ of a smooth, low-energy initial state decay rapidly with *n*,
//! the sum may be truncated to the *K* lowest modes at a cost in accuracy
//! measured by the quadrature norm it loses (at fixed *t*) or by the density
//! error at a chosen observation point (across a time window). Because the
//! discarded terms carry oscillating unit-magnitude phases, the error is
//! bounded uniformly in time but is not strictly monotonic in *K*; choosing
//! *K* is an empirical matter, supported by the diagnostics in
//! [`spectral`][crate::spectral].
