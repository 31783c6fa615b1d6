//! Terrestrial volatile budget, greenhouse feedback and phase partition.
//!
//! Volatiles are tracked as amounts relative to an Earth-like inventory and
//! split into gas, liquid and ice by surface temperature.

use serde::{Deserialize, Serialize};
use units::{Fixed, Random};

/// Surface temperature thresholds (Kelvin) of the greenhouse feedback.
pub const CO2_SUBLIMATION: i32 = 195;
pub const WATER_MELTING: i32 = 273;
pub const WATER_BOILING: i32 = 373;

/// Volatile inventory split by phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volatiles {
    pub gas: Fixed,
    pub liquid: Fixed,
    pub ices: Fixed,
}

impl Volatiles {
    /// Partition `amount` of volatiles at surface temperature `temperature`.
    ///
    /// Gas share is `T / (100 + T)`, the liquid share takes `T / (50 + T)` of
    /// what is left, ice gets the remainder.
    ///
    /// # Examples
    /// ```
    /// use planetary::Volatiles;
    /// use units::Fixed;
    ///
    /// let v = Volatiles::partition(Fixed::ZERO, 288);
    /// assert_eq!(v, Volatiles::default());
    /// ```
    pub fn partition(amount: Fixed, temperature: i32) -> Self {
        let t = Fixed::from_int(temperature as i64);
        let proportion_gas = t / (Fixed::from_int(100) + t);
        let proportion_liquid = (Fixed::ONE - proportion_gas) * (t / (Fixed::from_int(50) + t));
        let proportion_ices = Fixed::ONE - (proportion_gas + proportion_liquid);

        Self {
            gas: proportion_gas * amount,
            liquid: proportion_liquid * amount,
            ices: proportion_ices * amount,
        }
    }

    pub fn total(&self) -> Fixed {
        self.gas + self.liquid + self.ices
    }
}

/// Draw the volatile budget of a terrestrial planet.
///
/// Twice a uniform draw, scaled by mass unless a one-in-three roll keeps it
/// unscaled, and lost entirely when a uniform draw exceeds the mass: small
/// bodies rarely keep an atmosphere.
///
/// Consumes three draws in a fixed order.
pub fn draw_volatile_budget(mass: Fixed, rng: &mut Random) -> Fixed {
    let mut amount = Fixed::from_int(2) * rng.fixed();
    if rng.int32_below(3) != 0 {
        amount *= mass;
    }
    // total atmosphere loss
    if rng.fixed() > mass {
        amount = Fixed::ZERO;
    }
    amount
}

/// Bond albedo and greenhouse fraction for a volatile budget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadiativeBalance {
    pub albedo: Fixed,
    pub greenhouse: Fixed,
}

impl RadiativeBalance {
    /// No atmosphere and a perfectly black surface.
    pub fn blackbody() -> Self {
        Self::default()
    }

    /// Apply the phase-change feedback at black-body temperature
    /// `temperature`.
    ///
    /// Sublimating CO2 and liquid or boiling water thicken the greenhouse;
    /// frozen CO2 and ice brighten the surface instead. Above 7/10 the
    /// greenhouse fraction saturates as `g^4 / (g^4 + 32/311)` so it never
    /// reaches 1.
    pub fn from_volatiles(amount: Fixed, temperature: i32) -> Self {
        let mut greenhouse = Fixed::ZERO;
        let mut albedo = Fixed::ZERO;

        if temperature > CO2_SUBLIMATION {
            greenhouse += amount * Fixed::from_ratio(1, 3);
        } else {
            albedo += Fixed::from_ratio(2, 6);
        }
        if temperature > WATER_MELTING {
            greenhouse += amount * Fixed::from_ratio(1, 5);
        } else {
            albedo += Fixed::from_ratio(3, 6);
        }
        if temperature > WATER_BOILING {
            greenhouse += amount * Fixed::from_ratio(1, 3);
        }

        if greenhouse > Fixed::from_ratio(7, 10) {
            greenhouse *= greenhouse;
            greenhouse *= greenhouse;
            greenhouse = greenhouse / (greenhouse + Fixed::from_ratio(32, 311));
        }

        Self { albedo, greenhouse }
    }
}

/// Bulk properties drawn for every planet and moon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceProperties {
    pub metallicity: Fixed,
    pub volcanicity: Fixed,
    pub atmosphere_oxidizing: Fixed,
}

impl SurfaceProperties {
    /// Metallicity is the host star's base fraction times a uniform draw;
    /// small bodies cool quickly so volcanicity scales with `min(1, mass)`.
    ///
    /// Consumes three draws in a fixed order.
    pub fn draw(star_metallicity: Fixed, mass: Fixed, rng: &mut Random) -> Self {
        let metallicity = star_metallicity * rng.fixed();
        let volcanicity = mass.min(Fixed::ONE) * rng.fixed();
        let atmosphere_oxidizing = rng.fixed();
        Self {
            metallicity,
            volcanicity,
            atmosphere_oxidizing,
        }
    }
}
