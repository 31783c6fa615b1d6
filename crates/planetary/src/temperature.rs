//! Received stellar flux and black-body surface temperature.
//!
//! Everything here is fixed-point: the temperature feeds habitability and
//! population decisions, so it must be identical on every platform.
//!
//! Flux is measured in solar constants (the flux Earth receives from the Sun),
//! which keeps the intermediate powers small enough for 32 integer bits.

use units::constants::{BLACKBODY_REFERENCE, SOL_TEMPERATURE};
use units::{Fixed, isqrt};

/// Energy per unit area received from a star, in solar constants.
///
/// `(T / T_sun)^4 * R^2 / d^2`, each product floored at 32 fractional bits in
/// this order.
///
/// # Arguments
/// * `star_radius` - Star radius in solar radii
/// * `star_temperature` - Star surface temperature in Kelvin
/// * `distance` - Distance from the star in AU
///
/// # Examples
/// ```
/// use planetary::temperature::energy_per_unit_area;
/// use units::Fixed;
///
/// // the Sun at one AU delivers (almost exactly) one solar constant
/// let flux = energy_per_unit_area(Fixed::ONE, 5778, Fixed::ONE);
/// assert!((flux.to_f64() - 1.0).abs() < 1e-5);
/// ```
pub fn energy_per_unit_area(star_radius: Fixed, star_temperature: i32, distance: Fixed) -> Fixed {
    let temp = Fixed::from_ratio(1, SOL_TEMPERATURE) * star_temperature as i64;
    let emission = temp * temp * temp * temp * star_radius * star_radius;
    emission / (distance * distance)
}

/// Surface temperature in Kelvin for a received flux, bond albedo and
/// greenhouse fraction.
///
/// `T = 279 * (E * (1 - albedo) / (1 - greenhouse))^(1/4)`, where the fourth
/// root is two nested integer square roots of the raw fixed-point value and
/// the final shift removes the remaining 8 fractional bits.
pub fn surface_temperature(energy: Fixed, albedo: Fixed, greenhouse: Fixed) -> i32 {
    let pow4 = energy * (Fixed::ONE - albedo) / (Fixed::ONE - greenhouse);
    if pow4.raw() <= 0 {
        return 0;
    }
    let fourth_root = isqrt(isqrt(pow4.raw() as u128));
    ((BLACKBODY_REFERENCE as u128 * fourth_root) >> 8).min(i32::MAX as u128) as i32
}

/// Characteristic separation of two bodies orbiting the same point:
/// the mean of conjunction (`|a1 - a2|`) and opposition (`a1 + a2`).
pub fn mean_separation(a1: Fixed, a2: Fixed) -> Fixed {
    ((a1 - a2).abs() + (a1 + a2)) >> 1
}

/// Average of an orbit's periapsis and apoapsis.
pub fn mean_orbital_distance(orb_min: Fixed, orb_max: Fixed) -> Fixed {
    (orb_min + orb_max) >> 1
}
