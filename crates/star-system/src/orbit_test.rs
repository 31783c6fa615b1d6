use approx::assert_relative_eq;
use nalgebra::Vector3;
use std::f64::consts::{FRAC_PI_2, PI};
use units::constants::{AU, SECONDS_PER_DAY, SOL_MASS};

use crate::orbit::{Orbit, rotate_x, rotate_y, rotate_z};

// ========== Rotations ==========

#[test]
fn test_rotations_are_orthonormal() {
    for m in [rotate_x(0.3), rotate_y(-1.2), rotate_z(2.5)] {
        let product = m * m.transpose();
        assert_relative_eq!(product, nalgebra::Matrix3::identity(), epsilon = 1e-12);
    }
}

#[test]
fn test_rotate_z_quarter_turn() {
    let v = rotate_z(FRAC_PI_2) * Vector3::new(1.0, 0.0, 0.0);
    assert_relative_eq!(v, Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
}

#[test]
fn test_rotate_x_quarter_turn() {
    let v = rotate_x(FRAC_PI_2) * Vector3::new(0.0, 1.0, 0.0);
    assert_relative_eq!(v, Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-12);
}

// ========== Periods ==========

#[test]
fn test_earth_year() {
    let mut orbit = Orbit::default();
    orbit.set_shape_around_primary(AU, SOL_MASS, 0.0167);
    let days = orbit.period() / SECONDS_PER_DAY;
    assert!((days - 365.25).abs() < 1.0, "Expected about a year, got {} days", days);
}

#[test]
fn test_equal_pair_shares_period_with_full_separation() {
    let mut pair = Orbit::default();
    pair.set_shape_around_barycentre(AU, 2.0 * SOL_MASS, SOL_MASS, 0.0);

    let mut single = Orbit::default();
    single.set_shape_around_primary(2.0 * AU, 2.0 * SOL_MASS, 0.0);

    assert_relative_eq!(pair.period(), single.period(), max_relative = 1e-12);
}

#[test]
fn test_unset_orbit_has_no_period() {
    let orbit = Orbit::default();
    assert_eq!(orbit.period(), 0.0);
    assert_eq!(orbit.orbital_position_at_time(1000.0), Vector3::zeros());
}

// ========== Positions ==========

#[test]
fn test_circular_orbit_positions() {
    let mut orbit = Orbit::default();
    orbit.set_shape_around_primary(AU, SOL_MASS, 0.0);
    let period = orbit.period();

    let start = orbit.orbital_position_at_time(0.0);
    assert_relative_eq!(start, Vector3::new(AU, 0.0, 0.0), epsilon = 1.0);

    let half = orbit.orbital_position_at_time(period / 2.0);
    assert_relative_eq!(half.norm(), AU, max_relative = 1e-9);
    assert_relative_eq!(half.x, -AU, max_relative = 1e-9);
}

#[test]
fn test_eccentric_orbit_extremes() {
    let e = 0.5;
    let mut orbit = Orbit::default();
    orbit.set_shape_around_primary(AU, SOL_MASS, e);

    let periapsis = orbit.orbital_position_at_time(0.0).norm();
    let apoapsis = orbit.orbital_position_at_time(orbit.period() / 2.0).norm();
    assert_relative_eq!(periapsis, AU * (1.0 - e), max_relative = 1e-9);
    assert_relative_eq!(apoapsis, AU * (1.0 + e), max_relative = 1e-9);
}

#[test]
fn test_phase_and_plane() {
    let mut orbit = Orbit::default();
    orbit.set_shape_around_primary(AU, SOL_MASS, 0.0);
    orbit.set_phase(PI);
    orbit.set_plane(rotate_x(FRAC_PI_2));

    let p = orbit.orbital_position_at_time(0.0);
    assert_relative_eq!(p.x, -AU, max_relative = 1e-9);
    assert_relative_eq!(orbit.orbital_phase_at_start(), PI);
    assert_eq!(orbit.plane(), &rotate_x(FRAC_PI_2));
}
