//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! Every error propagates immediately to the caller with no partial result; a
//! partially normalized or partially solved basis would invalidate every
//! downstream computation, so there is no degraded mode and no retry.
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use ndarray_linalg::error::LinalgError;
use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned when a pipeline stage is handed invalid configuration, before any
/// numerical work is started.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Returned when interval bounds are not strictly increasing.
    #[error("interval bounds must satisfy a < b; got a = {0}, b = {1}")]
    BadInterval(f64, f64),

    /// Returned when the interval is divided into fewer than 2 subintervals.
    #[error("mesh resolution must be at least 2 subintervals; got {0}")]
    BadResolution(usize),

    /// Returned when the coupling parameter `m` = ħ²/mass is not positive.
    #[error("coupling parameter must be greater than 0; got {0}")]
    BadCoupling(f64),

    /// Returned when a probe index lies outside the mesh.
    #[error("probe index {probe} is out of range for a mesh of {len} points")]
    BadProbe { probe: usize, len: usize },
}

impl ConfigError {
    pub(crate) fn check_interval(a: f64, b: f64) -> Result<(), Self> {
        (a < b).then_some(()).ok_or(Self::BadInterval(a, b))
    }

    pub(crate) fn check_resolution(n: usize) -> Result<(), Self> {
        (n >= 2).then_some(()).ok_or(Self::BadResolution(n))
    }

    pub(crate) fn check_coupling(m: f64) -> Result<(), Self> {
        (m > 0.0).then_some(()).ok_or(Self::BadCoupling(m))
    }

    pub(crate) fn check_probe(probe: usize, len: usize) -> Result<(), Self> {
        (probe < len).then_some(()).ok_or(Self::BadProbe { probe, len })
    }
}

/// Returned when a wavefunction's quadrature norm is too close to zero to
/// divide by, indicating a malformed or non-physical vector.
#[derive(Debug, Error)]
#[error("wavefunction norm is numerically degenerate; got squared norm {0:e}")]
pub struct DegeneracyError(pub f64);

/// Returned from the solver and spectral pipeline stages.
#[derive(Debug, Error)]
pub enum EigenError {
    /// [`ConfigError`]
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// [`DegeneracyError`]
    #[error("degenerate norm error: {0}")]
    Degenerate(#[from] DegeneracyError),

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),

    /// [`LinalgError`]; a failed symmetric eigendecomposition is fatal and
    /// indicates matrix corruption rather than a transient condition.
    #[error("eigensolve failure: {0}")]
    Eigensolve(#[from] LinalgError),
}
