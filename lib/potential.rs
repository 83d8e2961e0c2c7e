//! Composable one-dimensional potential primitives.
//!
//! A potential is any `Fn(f64) -> f64`; the constructors here cover the
//! common building blocks and return `Copy` closures so they compose freely:
//!
//! ```
//! use espace::potential::{ add, gaussian, harmonic, scale };
//!
//! // a harmonic trap with a Gaussian bump at the origin
//! let V = scale(20.0, add(scale(0.4, gaussian(0.0, 0.6)), harmonic(0.1)));
//! assert!(V(0.0) > 0.0);
//! assert!((V(3.0) - V(-3.0)).abs() < 1e-12);
//! ```

use std::f64::consts::TAU;

/// Construct a harmonic term `½ k x²`.
pub fn harmonic(k: f64) -> impl Fn(f64) -> f64 + Copy {
    move |x: f64| 0.5 * k * x.powi(2)
}

/// Construct a normalized Gaussian centered at `mu` with width `sigma`,
/// `exp(-(x - mu)² / 2σ²) / √(2πσ²)`.
///
/// Scale by a negative weight to make a well.
pub fn gaussian(mu: f64, sigma: f64) -> impl Fn(f64) -> f64 + Copy {
    let amp = (TAU * sigma.powi(2)).sqrt().recip();
    move |x: f64| amp * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// Scale a potential by a constant factor.
pub fn scale<F>(c: f64, V: F) -> impl Fn(f64) -> f64 + Copy
where F: Fn(f64) -> f64 + Copy
{
    move |x: f64| c * V(x)
}

/// Sum two potentials pointwise.
pub fn add<F, G>(V: F, W: G) -> impl Fn(f64) -> f64 + Copy
where
    F: Fn(f64) -> f64 + Copy,
    G: Fn(f64) -> f64 + Copy,
{
    move |x: f64| V(x) + W(x)
}
