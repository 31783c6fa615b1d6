//! Mass-based planet classification and the mass-radius relation.

use serde::{Deserialize, Serialize};
use stellar::BodyType;
use units::{Fixed, Random, SUN_MASS_TO_EARTH_MASS};

/// Earth masses per Jupiter mass, as the thresholds use it.
pub const JUPITER_MASS_IN_EARTHS: i64 = 317;

/// What a freshly created planet-sized body turns out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanetClass {
    /// Above 13 Jupiter masses: deuterium fusion, so effectively a star.
    BrownDwarf,
    GasGiant,
    Terrestrial,
    Asteroid,
}

impl PlanetClass {
    /// Classify by mass in Earth masses.
    ///
    /// # Examples
    /// ```
    /// use planetary::PlanetClass;
    /// use units::Fixed;
    ///
    /// assert_eq!(PlanetClass::from_mass(Fixed::ONE), PlanetClass::Terrestrial);
    /// assert_eq!(PlanetClass::from_mass(Fixed::from_int(300)), PlanetClass::GasGiant);
    /// ```
    pub fn from_mass(mass: Fixed) -> Self {
        if mass > Fixed::from_int(JUPITER_MASS_IN_EARTHS * 13) {
            PlanetClass::BrownDwarf
        } else if mass > Fixed::from_int(6) {
            PlanetClass::GasGiant
        } else if mass > Fixed::from_ratio(1, 15_000) {
            PlanetClass::Terrestrial
        } else {
            PlanetClass::Asteroid
        }
    }

    pub fn body_type(self) -> BodyType {
        match self {
            PlanetClass::BrownDwarf => BodyType::BrownDwarf,
            PlanetClass::GasGiant => BodyType::GasGiant,
            PlanetClass::Terrestrial => BodyType::Terrestrial,
            PlanetClass::Asteroid => BodyType::Asteroid,
        }
    }
}

/// Smallest radius any planet gets, roughly 10 km in Earth radii.
pub fn min_planet_radius() -> Fixed {
    Fixed::from_ratio(1, 630)
}

/// Radius in Earth radii for a mass in Earth masses.
///
/// Piecewise, following measured exoplanet populations:
/// * up to 1 Earth mass: cube-root law, evaluated at 48 fractional bits
/// * below 200 Earth masses: square-root law
/// * from 200 Earth masses: `22.6 * m^-0.0886`, radius shrinks as mass grows
///
/// The result never drops below [`min_planet_radius`].
pub fn radius_from_mass(mass: Fixed) -> Fixed {
    let radius = if mass <= Fixed::ONE {
        mass.convert::<48>().cbrt().convert::<32>()
    } else if mass < Fixed::from_int(200) {
        mass.sqrt()
    } else {
        Fixed::from_ratio(226, 10) * mass.powf(Fixed::from_ratio(-886, 10_000))
    };
    radius.max(min_planet_radius())
}

/// Physical parameters of a planet-sized body that crossed the brown-dwarf
/// mass threshold, in stellar units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrownDwarfConversion {
    /// Solar masses, capped at 65 Jupiter masses.
    pub mass: Fixed,
    /// Solar radii, drawn from the brown-dwarf table.
    pub radius: Fixed,
    /// Kelvin: received-flux temperature plus intrinsic heat.
    pub temperature: i32,
}

/// Convert a too-massive planet into a brown dwarf.
///
/// Draws the intrinsic temperature then the radius from the brown-dwarf table
/// row.
pub fn brown_dwarf_from_planet(
    mass: Fixed,
    blackbody_temperature: i32,
    rng: &mut Random,
) -> BrownDwarfConversion {
    let (temperature, radius) = match BodyType::BrownDwarf.star_info() {
        Some(info) => (
            rng.int32_range(info.temperature.0, info.temperature.1),
            rng.int32_range(info.radius.0, info.radius.1),
        ),
        None => (0, 0),
    };
    let capped = mass.min(Fixed::from_int(JUPITER_MASS_IN_EARTHS * 65));

    BrownDwarfConversion {
        mass: capped / SUN_MASS_TO_EARTH_MASS,
        radius: Fixed::from_ratio(radius as i64, 100),
        temperature: blackbody_temperature.saturating_add(temperature),
    }
}

