//! Tests for flux and surface temperature

use units::Fixed;

use crate::temperature::{energy_per_unit_area, mean_orbital_distance, mean_separation, surface_temperature};

// ========== Energy Tests ==========

#[test]
fn test_sun_at_one_au_is_one_solar_constant() {
    let flux = energy_per_unit_area(Fixed::ONE, 5778, Fixed::ONE);
    // 1/5778 truncates, so the fourth power lands a hair under one
    assert_eq!(flux.raw(), 4294964184);
}

#[test]
fn test_inverse_square_law() {
    let near = energy_per_unit_area(Fixed::ONE, 5778, Fixed::ONE);
    let far = energy_per_unit_area(Fixed::ONE, 5778, Fixed::from_int(2));
    let ratio = near.to_f64() / far.to_f64();
    assert!((ratio - 4.0).abs() < 1e-5, "Expected 4x flux, got {}", ratio);
}

#[test]
fn test_hotter_star_more_flux() {
    let sun = energy_per_unit_area(Fixed::ONE, 5778, Fixed::ONE);
    let hotter = energy_per_unit_area(Fixed::ONE, 7000, Fixed::ONE);
    let bigger = energy_per_unit_area(Fixed::from_int(2), 5778, Fixed::ONE);
    assert!(hotter > sun);
    assert!(bigger > sun);
}

// ========== Surface Temperature Tests ==========

#[test]
fn test_blackbody_temperatures() {
    assert_eq!(surface_temperature(Fixed::ONE, Fixed::ZERO, Fixed::ZERO), 279);

    let earth = energy_per_unit_area(Fixed::ONE, 5778, Fixed::ONE);
    assert_eq!(surface_temperature(earth, Fixed::ZERO, Fixed::ZERO), 277);

    let two_au = energy_per_unit_area(Fixed::ONE, 5778, Fixed::from_int(2));
    assert_eq!(surface_temperature(two_au, Fixed::ZERO, Fixed::ZERO), 197);
}

#[test]
fn test_albedo_cools_greenhouse_warms() {
    let base = surface_temperature(Fixed::ONE, Fixed::ZERO, Fixed::ZERO);
    let bright = surface_temperature(Fixed::ONE, Fixed::from_ratio(3, 10), Fixed::ZERO);
    let warm = surface_temperature(Fixed::ONE, Fixed::ZERO, Fixed::from_ratio(3, 10));
    assert!(bright < base);
    assert!(warm > base);
}

#[test]
fn test_no_flux_is_zero_kelvin() {
    assert_eq!(surface_temperature(Fixed::ZERO, Fixed::ZERO, Fixed::ZERO), 0);
    assert_eq!(surface_temperature(Fixed::ONE, Fixed::ONE, Fixed::ZERO), 0);
}

// ========== Separations ==========

#[test]
fn test_mean_separation_is_larger_semi_major_axis() {
    let a = Fixed::from_int(3);
    let b = Fixed::from_int(5);
    assert_eq!(mean_separation(a, b), b);
    assert_eq!(mean_separation(b, a), b);
    assert_eq!(mean_orbital_distance(a, b), Fixed::from_int(4));
}
