//! Physical and unit-conversion constants shared across the generator.
//!
//! Fixed-point constants are exposed as functions because `FixedF` division
//! is not `const`.

use crate::fixed::Fixed;

/// Earth masses per solar mass.
pub const SUN_MASS_TO_EARTH_MASS: i64 = 332_998;

/// Zero Celsius in hundredths of a Kelvin. Integer temperatures are compared
/// against Celsius bands at this resolution.
pub const CELSIUS_CENTIKELVIN: i64 = 27_315;

/// Kelvin at the solar photosphere; stellar temperatures are normalized by it.
pub const SOL_TEMPERATURE: i64 = 5_778;

/// Black-body reference factor: a unit-flux body with no albedo sits at 279 K.
pub const BLACKBODY_REFERENCE: i64 = 279;

/// Tidal-locking scale factor.
pub const MOON_TIDAL_LOCK: i64 = 6_286;

/// Upper bound of the random commodity price adjustment, in percent.
pub const MAX_COMMODITY_BASE_PRICE_ADJUSTMENT: i64 = 25;

pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const SECONDS_PER_HOUR: f64 = 3_600.0;

pub const AU: f64 = 149_598_000_000.0;
pub const EARTH_RADIUS: f64 = 6_378_135.0;
pub const EARTH_MASS: f64 = 5.9742e24;
pub const SOL_RADIUS: f64 = 6.955e8;
pub const SOL_MASS: f64 = 1.98892e30;
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67428e-11;

/// One Earth radius in astronomical units.
pub fn au_earth_radius() -> Fixed {
    Fixed::from_ratio(3, 65_536)
}

/// One solar radius in astronomical units.
pub fn au_sol_radius() -> Fixed {
    Fixed::from_ratio(126, 27_069)
}

/// π to the precision the orbit planes are laid out with.
pub fn fixed_pi() -> Fixed {
    Fixed::from_ratio(103_993, 33_102)
}
