//! A single node of a system tree.

use serde::{Deserialize, Serialize};
use std::fmt;
use stellar::{BodyType, SuperType};
use units::constants::{EARTH_MASS, EARTH_RADIUS, GRAVITATIONAL_CONSTANT, SOL_MASS, SOL_RADIUS};
use units::{Fixed, SUN_MASS_TO_EARTH_MASS};

use planetary::{Atmosphere, AtmosphereGas, Rings, Volatiles};

use crate::orbit::Orbit;
use crate::path::SystemPath;

/// Position of a body in its system's arena. Index 0 is always the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BodyIndex(pub u32);

impl BodyIndex {
    pub const ROOT: BodyIndex = BodyIndex(0);

    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BodyIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A gravity point, star, planet, moon or station.
///
/// Stars and gravity points carry mass in solar masses and radius in solar
/// radii; everything else uses Earth masses and Earth radii. Distances are in
/// AU, angles in radians, periods in days and temperatures in Kelvin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    pub index: BodyIndex,
    pub path: SystemPath,
    pub(crate) parent: Option<BodyIndex>,
    pub(crate) children: Vec<BodyIndex>,

    pub name: String,
    pub body_type: BodyType,
    pub seed: u32,

    pub mass: Fixed,
    pub radius: Fixed,

    pub semi_major_axis: Fixed,
    pub eccentricity: Fixed,
    pub orbital_offset: Fixed,
    pub orbital_phase_at_start: Fixed,
    pub inclination: Fixed,
    pub axial_tilt: Fixed,
    pub rotation_period: Fixed,
    pub rotational_phase_at_start: Fixed,
    /// Periapsis and apoapsis around the parent.
    pub orb_min: Fixed,
    pub orb_max: Fixed,

    pub average_temp: i32,
    pub metallicity: Fixed,
    pub volcanicity: Fixed,
    pub volatiles: Volatiles,
    pub atmosphere_oxidizing: Fixed,
    pub life: Fixed,
    pub atmosphere: Atmosphere,
    pub rings: Rings,

    /// Billions of people.
    pub population: Fixed,
    pub agricultural: Fixed,
    pub human_activity: Fixed,

    pub orbit: Orbit,
}

impl Body {
    /// A blank body of the given type. The arena assigns the index.
    pub fn new(path: SystemPath, body_type: BodyType) -> Self {
        Self {
            index: BodyIndex::ROOT,
            path,
            parent: None,
            children: Vec::new(),
            name: String::new(),
            body_type,
            seed: 0,
            mass: Fixed::ZERO,
            radius: Fixed::ZERO,
            semi_major_axis: Fixed::ZERO,
            eccentricity: Fixed::ZERO,
            orbital_offset: Fixed::ZERO,
            orbital_phase_at_start: Fixed::ZERO,
            inclination: Fixed::ZERO,
            axial_tilt: Fixed::ZERO,
            rotation_period: Fixed::ZERO,
            rotational_phase_at_start: Fixed::ZERO,
            orb_min: Fixed::ZERO,
            orb_max: Fixed::ZERO,
            average_temp: 0,
            metallicity: Fixed::ZERO,
            volcanicity: Fixed::ZERO,
            volatiles: Volatiles::default(),
            atmosphere_oxidizing: Fixed::ZERO,
            life: Fixed::ZERO,
            atmosphere: Atmosphere::default(),
            rings: Rings::default(),
            population: Fixed::ZERO,
            agricultural: Fixed::ZERO,
            human_activity: Fixed::ZERO,
            orbit: Orbit::default(),
        }
    }

    pub fn parent(&self) -> Option<BodyIndex> {
        self.parent
    }

    pub fn children(&self) -> &[BodyIndex] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn super_type(&self) -> SuperType {
        self.body_type.super_type()
    }

    pub fn is_star(&self) -> bool {
        self.body_type.is_star()
    }

    pub fn is_gravpoint(&self) -> bool {
        self.body_type == BodyType::GravPoint
    }

    pub fn is_starport(&self) -> bool {
        self.body_type.is_starport()
    }

    pub fn is_planet(&self) -> bool {
        matches!(self.super_type(), SuperType::GasGiant | SuperType::RockyPlanet)
    }

    /// Mass in Earth masses whatever unit the body stores it in.
    pub fn mass_in_earths(&self) -> Fixed {
        if self.super_type() <= SuperType::Star {
            self.mass * SUN_MASS_TO_EARTH_MASS
        } else {
            self.mass
        }
    }

    /// Kilograms, for the orbit interface.
    pub fn mass_kg(&self) -> f64 {
        if self.super_type() <= SuperType::Star {
            self.mass.to_f64() * SOL_MASS
        } else {
            self.mass.to_f64() * EARTH_MASS
        }
    }

    /// Metres, for the orbit interface.
    pub fn radius_m(&self) -> f64 {
        if self.super_type() <= SuperType::Star {
            self.radius.to_f64() * SOL_RADIUS
        } else {
            self.radius.to_f64() * EARTH_RADIUS
        }
    }

    /// Surface gravity in m/s²; zero for point masses.
    pub fn surface_gravity(&self) -> f64 {
        let r = self.radius_m();
        if r <= 0.0 {
            return 0.0;
        }
        GRAVITATIONAL_CONSTANT * self.mass_kg() / (r * r)
    }

    pub fn has_atmosphere(&self) -> bool {
        self.volatiles.gas > Fixed::from_ratio(1, 100)
    }

    /// Whether a ship can skim fuel from the atmosphere: any gas giant, or a
    /// terrestrial world with a hydrogen-rich atmosphere.
    pub fn is_scoopable(&self) -> bool {
        match self.super_type() {
            SuperType::GasGiant => true,
            SuperType::RockyPlanet => {
                self.body_type == BodyType::Terrestrial
                    && self.has_atmosphere()
                    && self.atmosphere_oxidizing > Fixed::from_ratio(3, 10)
                    && self.atmosphere_oxidizing <= Fixed::from_ratio(55, 100)
            }
            _ => false,
        }
    }

    /// Short human-readable description of what the body is.
    pub fn astro_description(&self) -> String {
        match self.body_type {
            BodyType::GasGiant => gas_giant_description(self.mass).to_string(),
            BodyType::Asteroid => "Asteroid".to_string(),
            BodyType::Terrestrial => self.terrestrial_description(),
            BodyType::StarportOrbital => "Orbital starport".to_string(),
            BodyType::StarportSurface => "Starport".to_string(),
            star => star
                .star_info()
                .map(|info| info.description.to_string())
                .unwrap_or_default(),
        }
    }

    fn terrestrial_description(&self) -> String {
        let mut words: Vec<&str> = Vec::new();

        if self.mass > Fixed::from_int(2) {
            words.push("massive");
        } else if self.mass > Fixed::from_ratio(3, 2) {
            words.push("large");
        } else if self.mass < Fixed::from_ratio(1, 10) {
            words.push("tiny");
        } else if self.mass < Fixed::from_ratio(1, 5) {
            words.push("small");
        }

        if self.volcanicity > Fixed::from_ratio(7, 10) {
            words.push("highly volcanic");
        }

        let v = &self.volatiles;
        if v.ices + v.liquid > Fixed::from_ratio(4, 5) {
            words.push(if v.ices > v.liquid { "ice world" } else { "ocean world" });
        } else if v.liquid > Fixed::from_ratio(2, 5) {
            words.push("planet containing large volumes of water");
        } else if v.liquid > Fixed::from_ratio(1, 5) {
            words.push("planet containing some water");
        } else {
            words.push("rocky planet");
        }

        let mut description = words.join(" ");
        if let Some(first) = description.get(..1) {
            description = first.to_uppercase() + &description[1..];
        }

        if !self.has_atmosphere() {
            description.push_str(" with no significant atmosphere");
        } else {
            let thickness = if v.gas < Fixed::from_ratio(1, 5) {
                "a thin"
            } else if v.gas < Fixed::from_int(2) {
                "an"
            } else if v.gas < Fixed::from_int(4) {
                "a thick"
            } else {
                "a very dense"
            };
            let gas = AtmosphereGas::from_oxidizing(self.atmosphere_oxidizing);
            description.push_str(&format!(" with {} {} atmosphere", thickness, gas.formula()));
        }

        if self.life > Fixed::from_ratio(1, 2) {
            description.push_str(" and a highly complex biosphere");
        } else if self.life > Fixed::from_ratio(1, 10) {
            description.push_str(" and an established biosphere");
        } else if self.life > Fixed::ZERO {
            description.push_str(" and a biosphere of simple life");
        }
        description.push('.');
        description
    }
}

fn gas_giant_description(mass: Fixed) -> &'static str {
    if mass > Fixed::from_int(800) {
        "Very large gas giant"
    } else if mass > Fixed::from_int(300) {
        "Large gas giant"
    } else if mass > Fixed::from_int(80) {
        "Medium gas giant"
    } else {
        "Small gas giant"
    }
}
