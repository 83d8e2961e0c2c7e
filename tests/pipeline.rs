//! End-to-end tests of the eigenbasis pipeline: a Gaussian well on top of a
//! harmonic trap, solved on [-5, 5] with 100 subintervals, then a moving
//! Gaussian packet projected onto the basis and evolved in time.

use approx::{ assert_abs_diff_eq, assert_relative_eq };
use ndarray as nd;
use num_complex::Complex64 as C64;
use espace::{
    DEF_WALL,
    grid::Grid,
    potential::{ add, gaussian, harmonic, scale },
    solve::{ Eigenbasis, normalize, solve_grid },
    spectral::{
        Expansion,
        gaussian_packet,
        prob_density,
        project,
        propagate,
        truncation_norm_error,
        truncation_probe_error,
    },
    utils::{ inner, norm_sq, normalized },
};

const SCALE: f64 = 5.0;

fn well_grid() -> Grid { Grid::new(-5.0, 5.0, 100).unwrap() }

fn well_basis(grid: &Grid) -> Eigenbasis {
    let V = scale(20.0, add(scale(0.4, gaussian(0.0, 0.6)), harmonic(0.1)));
    solve_grid(grid, 1.0, DEF_WALL, V).unwrap()
}

// the worked example initial state: a packet centered at mesh index
// ⌊0.4 (N + 1)⌋ with width 0.5 and momentum 0.5, unit-normalized
fn packet(grid: &Grid) -> nd::Array1<C64> {
    let x = grid.get_x();
    let mu = x[(x.len() as f64 * 0.4) as usize];
    let q = gaussian_packet(x, mu, 0.5, 0.5);
    normalized(&q, grid.get_dx()).unwrap()
}

#[test]
fn test_well_spectrum() {
    let grid = well_grid();
    let basis = well_basis(&grid);
    assert_eq!(basis.len(), 101);
    assert_eq!(basis.energies().len(), 101);
    assert_eq!(basis.states().dim(), (101, 101));
    assert!(basis.energy(0) > 0.0);
    assert!(basis.energy(0) < basis.energy(1));
}

#[test]
fn test_states_are_unit_normalized() {
    let grid = well_grid();
    let basis = well_basis(&grid);
    for n in 0..basis.len() {
        assert_relative_eq!(
            norm_sq(&basis.state(n), grid.get_dx()),
            1.0,
            epsilon = 1e-9,
        );
    }
}

#[test]
fn test_states_are_orthonormal_under_quadrature() {
    let grid = well_grid();
    let basis = well_basis(&grid);
    let dx = grid.get_dx();
    for m in [0, 3, 10] {
        for n in [0, 3, 10] {
            let expected = if m == n { 1.0 } else { 0.0 };
            let overlap: f64 = inner(&basis.state(m), &basis.state(n), dx);
            assert_abs_diff_eq!(overlap, expected, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_normalize_interface() {
    let grid = well_grid();
    let x = grid.get_x();
    let q = x.mapv(|xk| (-xk * xk).exp());
    let qn = normalize(&q, grid.get_dx()).unwrap();
    assert_relative_eq!(norm_sq(&qn, grid.get_dx()), 1.0, epsilon = 1e-12);

    let zero: nd::Array1<f64> = nd::Array1::zeros(grid.len());
    assert!(normalize(&zero, grid.get_dx()).is_err());
}

#[test]
fn test_completeness_of_projection() {
    let grid = well_grid();
    let basis = well_basis(&grid);
    let psi0 = packet(&grid);
    let coeffs = project(&basis, &psi0).unwrap();
    let total: f64 = coeffs.iter().map(|cn| cn.norm_sqr()).sum();
    assert_relative_eq!(total, 1.0, epsilon = 1e-9);
}

#[test]
fn test_projection_rejects_length_mismatch() {
    let grid = well_grid();
    let basis = well_basis(&grid);
    let short: nd::Array1<C64> = nd::Array1::zeros(50);
    assert!(project(&basis, &short).is_err());
}

#[test]
fn test_round_trip_at_t_zero() {
    let grid = well_grid();
    let basis = well_basis(&grid);
    let psi0 = packet(&grid);
    let coeffs = project(&basis, &psi0).unwrap();
    let q0 = propagate(&basis, &coeffs, 0.0, None, SCALE);
    for (qk, pk) in q0.iter().zip(&psi0) {
        assert_abs_diff_eq!(qk.re, pk.re, epsilon = 1e-6);
        assert_abs_diff_eq!(qk.im, pk.im, epsilon = 1e-6);
    }
}

#[test]
fn test_propagation_conserves_norm() {
    let grid = well_grid();
    let basis = well_basis(&grid);
    let psi0 = packet(&grid);
    let coeffs = project(&basis, &psi0).unwrap();
    for t in [-17.5, -1.0, 0.0, 3.25, 40.0, 1000.0] {
        let q = propagate(&basis, &coeffs, t, None, SCALE);
        assert_relative_eq!(
            norm_sq(&q, grid.get_dx()),
            1.0,
            epsilon = 1e-9,
        );
    }
}

#[test]
fn test_propagation_is_time_order_independent() {
    let grid = well_grid();
    let basis = well_basis(&grid);
    let psi0 = packet(&grid);
    let coeffs = project(&basis, &psi0).unwrap();
    let a = propagate(&basis, &coeffs, 12.0, None, SCALE);
    let _ = propagate(&basis, &coeffs, -3.0, Some(20), SCALE);
    let b = propagate(&basis, &coeffs, 12.0, None, SCALE);
    assert_eq!(a, b);
}

#[test]
fn test_expansion_wrapper_matches_free_functions() {
    let grid = well_grid();
    let basis = well_basis(&grid);
    let psi0 = packet(&grid);
    let coeffs = project(&basis, &psi0).unwrap();
    let expansion = Expansion::new(basis.clone(), &psi0, SCALE).unwrap();
    assert_eq!(expansion.coeffs(), &coeffs);
    assert_eq!(expansion.at(2.5), propagate(&basis, &coeffs, 2.5, None, SCALE));
    assert_eq!(
        expansion.density_at(2.5, Some(7)),
        prob_density(&propagate(&basis, &coeffs, 2.5, Some(7), SCALE)),
    );
}

#[test]
fn test_truncation_norm_error_sweep() {
    let grid = well_grid();
    let basis = well_basis(&grid);
    let psi0 = packet(&grid);
    let coeffs = project(&basis, &psi0).unwrap();
    let err = truncation_norm_error(&basis, &coeffs, 0.0, SCALE);
    assert_eq!(err.len(), 101);
    // full basis loses nothing
    assert_eq!(err[100], 0.0);
    // the packet's components hit machine precision around K = 40
    assert!(err[60] < 1e-9);
    // decreasing on average: early truncations lose far more mass than late
    let head = err.slice(nd::s![..10]).sum() / 10.0;
    let tail = err.slice(nd::s![90..]).sum() / 11.0;
    assert!(head > tail);
}

#[test]
fn test_truncation_probe_error_stays_bounded() {
    let grid = well_grid();
    let basis = well_basis(&grid);
    let psi0 = packet(&grid);
    let coeffs = project(&basis, &psi0).unwrap();
    let times: nd::Array1<f64> = nd::Array1::linspace(0.0, 100.0, 201);
    let err
        = truncation_probe_error(&basis, &coeffs, 7, 50, &times, SCALE)
        .unwrap();
    assert_eq!(err.len(), times.len());
    // unit-magnitude phases: the error oscillates but cannot diverge with t
    assert!(err.iter().all(|ek| ek.is_finite()));
    let bound = 2.0 * norm_sq(&psi0, grid.get_dx()) / grid.get_dx();
    assert!(err.iter().all(|ek| *ek < bound));
}

#[test]
fn test_probe_out_of_range_is_rejected() {
    let grid = well_grid();
    let basis = well_basis(&grid);
    let psi0 = packet(&grid);
    let coeffs = project(&basis, &psi0).unwrap();
    let times: nd::Array1<f64> = nd::Array1::linspace(0.0, 1.0, 11);
    assert!(
        truncation_probe_error(&basis, &coeffs, 7, 500, &times, SCALE)
            .is_err()
    );
}

#[test]
fn test_truncated_reconstruction_recovers_with_full_k() {
    let grid = well_grid();
    let basis = well_basis(&grid);
    let psi0 = packet(&grid);
    let coeffs = project(&basis, &psi0).unwrap();
    // K beyond the basis size clamps to the full basis
    let full = propagate(&basis, &coeffs, 1.0, None, SCALE);
    let clamped = propagate(&basis, &coeffs, 1.0, Some(5000), SCALE);
    assert_eq!(full, clamped);
}
