//! Biosphere eligibility and strength.

use units::{CELSIUS_CENTIKELVIN, Fixed, Random};

/// Star mass (solar) at and above which the system is too young for life.
pub fn life_star_mass_limit() -> Fixed {
    Fixed::from_ratio(5, 2)
}

/// True when `temperature` (Kelvin) lies strictly between `low` and `high`
/// degrees Celsius.
pub fn within_celsius_band(temperature: i32, low: i64, high: i64) -> bool {
    let centikelvin = temperature as i64 * 100;
    centikelvin > CELSIUS_CENTIKELVIN + low * 100 && centikelvin < CELSIUS_CENTIKELVIN + high * 100
}

/// First gate: liquid volatiles present and the average surface temperature
/// in (-60 °C, +200 °C).
pub fn may_host_life(volatile_liquid: Fixed, average_temperature: i32) -> bool {
    volatile_liquid > Fixed::ZERO && within_celsius_band(average_temperature, -60, 200)
}

/// Second gate: the temperatures at apoapsis and periapsis both lie in
/// (-10 °C, +90 °C).
pub fn extremes_habitable(min_temperature: i32, max_temperature: i32) -> bool {
    within_celsius_band(min_temperature, -10, 90) && within_celsius_band(max_temperature, -10, 90)
}

/// How far the most massive star in the system sits below the lifespan
/// limit; zero when at or above it.
pub fn life_multiplier(max_star_mass: Fixed) -> Fixed {
    let limit = life_star_mass_limit();
    if max_star_mass < limit {
        limit - max_star_mass
    } else {
        Fixed::ZERO
    }
}

/// Biosphere fraction: the multiplier times one uniform draw, clamped to
/// `[0, 1]`.
pub fn draw_life(multiplier: Fixed, rng: &mut Random) -> Fixed {
    (multiplier * rng.fixed()).clamp(Fixed::ZERO, Fixed::ONE)
}
