//! Tidal locking of planets and moons close to their parents.
//!
//! Locking time scales as `a^6 * R / (m * M^2)`. The inverse, normalised to
//! the Moon's, decides whether a body is locked (above 10), partially spun
//! down (above 1/100) or untouched.

use serde::{Deserialize, Serialize};
use units::constants::MOON_TIDAL_LOCK;
use units::{Fixed, SUN_MASS_TO_EARTH_MASS};

/// Rotation state of a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spin {
    /// Days.
    pub rotation_period: Fixed,
    /// Radians.
    pub axial_tilt: Fixed,
}

/// Inverse tidal-lock time relative to the Moon.
///
/// The evaluation order keeps every intermediate inside the fixed-point
/// range for realistic inputs. For planet parents the squared semi-major
/// axis is rescaled by solar-to-Earth mass so that `parent_mass` can be in
/// Earth masses while star parents use solar masses.
///
/// # Arguments
/// * `semi_major_axis` - AU
/// * `mass` - Body mass in Earth masses
/// * `parent_mass` - Solar masses when `parent_is_star`, otherwise Earth masses
/// * `radius` - Body radius in Earth radii
pub fn inverse_lock_time(
    semi_major_axis: Fixed,
    mass: Fixed,
    parent_mass: Fixed,
    parent_is_star: bool,
    radius: Fixed,
) -> Fixed {
    let a2 = semi_major_axis * semi_major_axis;
    let scaled_a2 = if parent_is_star {
        a2
    } else {
        a2 * SUN_MASS_TO_EARTH_MASS
    };

    let mut inv = Fixed::ONE;
    inv /= scaled_a2;
    inv *= mass;
    inv /= scaled_a2;
    inv *= parent_mass * parent_mass;
    inv /= radius;
    inv /= a2 * MOON_TIDAL_LOCK;
    inv
}

/// Sidereal orbital period in days from Kepler's third law,
/// `365.25 * sqrt(a^3 / M)` with `M` in solar masses.
///
/// Planet parents pass their mass in Earth masses; the `a^3` factor is then
/// scaled by solar-to-Earth mass before the division to keep precision for
/// small moons.
pub fn orbital_period_days(semi_major_axis: Fixed, parent_mass: Fixed, parent_is_star: bool) -> Fixed {
    if parent_mass <= Fixed::ZERO {
        return Fixed::ZERO;
    }
    let a = semi_major_axis;
    let ratio = if parent_is_star {
        a * a * (a / parent_mass)
    } else {
        a * a * (a * SUN_MASS_TO_EARTH_MASS / parent_mass)
    };
    ratio.sqrt() * Fixed::from_ratio(36_525, 100)
}

/// Apply tidal spin-down to `spin`.
///
/// Above 10 the rotation period equals the orbital period and the axial tilt
/// matches the inclination. Between 1/100 and 10 both are blended with
/// `lambda = x / (1/20 + x)`.
pub fn apply_tidal_lock(
    spin: Spin,
    inverse_lock_time: Fixed,
    orbital_period: Fixed,
    inclination: Fixed,
) -> Spin {
    if inverse_lock_time > Fixed::from_int(10) {
        Spin {
            rotation_period: orbital_period,
            axial_tilt: inclination,
        }
    } else if inverse_lock_time > Fixed::from_ratio(1, 100) {
        let lambda = inverse_lock_time / (Fixed::from_ratio(1, 20) + inverse_lock_time);
        let keep = Fixed::ONE - lambda;
        Spin {
            rotation_period: keep * spin.rotation_period + lambda * orbital_period,
            axial_tilt: keep * spin.axial_tilt + lambda * inclination,
        }
    } else {
        spin
    }
}
