//! Quadrature helpers shared by the normalizer, the projector, and the
//! truncation diagnostics.
//!
//! All integration in this crate runs through the composite trapezoidal rule
//! with uniform spacing; the normalizer and the projector must agree on the
//! quadrature for the truncated reconstruction to converge as modes are added,
//! so both are built on the functions here.

use std::ops::Add;
use ndarray::{ self as nd, Ix1 };
use ndarray_linalg::Scalar;
use num_traits::{ One, ToPrimitive, Zero };
use crate::error::DegeneracyError;

// squared norms below this are treated as degenerate rather than divided by
const NORM_FLOOR: f64 = 1e-300;

/// Integrate using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Scalar,
{
    let n: usize = y.len();
    let two = A::one() + A::one();
    (dx / two) * (y[0] + two * y.slice(nd::s![1..n - 1]).sum() + y[n - 1])
}

/// Calculate the trapezoidal estimate of ∫|ψ|² dx for a wavefunction sampled
/// over a uniform grid.
///
/// *Panics if `q` has length less than 2*.
pub fn norm_sq<S, A>(q: &nd::ArrayBase<S, Ix1>, dx: A::Real) -> A::Real
where
    S: nd::Data<Elem = A>,
    A: Scalar,
{
    let n: usize = q.len();
    let two = <A as Scalar>::Real::one() + <A as Scalar>::Real::one();
    (dx / two) * (
        q[0].square()
        + two * q.iter().skip(1).take(n - 2).map(|qk| qk.square())
            .fold(<A as Scalar>::Real::zero(), <A as Scalar>::Real::add)
        + q[n - 1].square()
    )
}

/// Calculate the trapezoid-weighted inner product ⟨q|p⟩ of two wavefunctions,
/// conjugating the left argument.
///
/// *Panics if either array has length less than 2*.
pub fn inner<S, T, A>(
    q: &nd::ArrayBase<S, Ix1>,
    p: &nd::ArrayBase<T, Ix1>,
    dx: A::Real,
) -> A
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = A>,
    A: Scalar,
{
    let n: usize = q.len().min(p.len());
    let two = A::one() + A::one();
    (A::from_real(dx) / two) * (
        q[0].conj() * p[0]
        + two * q.iter().zip(p).skip(1).take(n - 2)
            .fold(A::zero(), |acc, (qk, pk)| acc + qk.conj() * *pk)
        + q[n - 1].conj() * p[n - 1]
    )
}

/// Rescale a wavefunction in place so that its trapezoidal ∫|ψ|² dx estimate
/// is 1.
///
/// Fails with [`DegeneracyError`] if the squared norm is numerically
/// indistinguishable from zero.
///
/// *Panics if `q` has length less than 2*.
pub fn renormalize<S, A>(q: &mut nd::ArrayBase<S, Ix1>, dx: A::Real)
    -> Result<(), DegeneracyError>
where
    S: nd::DataMut<Elem = A>,
    A: Scalar,
{
    let nsq = norm_sq(q, dx);
    let nsq_f64 = nsq.to_f64().unwrap_or(0.0);
    if !(nsq_f64 > NORM_FLOOR) {
        return Err(DegeneracyError(nsq_f64));
    }
    let norm = A::from_real(nsq.sqrt());
    q.iter_mut().for_each(|qk| { *qk /= norm; });
    Ok(())
}

/// Like [`renormalize`], but return a rescaled copy of the wavefunction.
///
/// *Panics if `q` has length less than 2*.
pub fn normalized<S, A>(q: &nd::ArrayBase<S, Ix1>, dx: A::Real)
    -> Result<nd::Array1<A>, DegeneracyError>
where
    S: nd::Data<Elem = A>,
    A: Scalar,
{
    let mut out = q.to_owned();
    renormalize(&mut out, dx)?;
    Ok(out)
}
