//! Hand-authored systems.
//!
//! A custom system fixes the tree and every body's type, mass and orbit; the
//! generator still runs the physics, population and station passes over it.
//! Stars carry solar masses and radii, everything else Earth masses and
//! Earth radii.

use serde::{Deserialize, Serialize};
use stellar::BodyType;
use units::Fixed;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomBody {
    pub name: String,
    pub body_type: BodyType,
    pub seed: u32,
    pub mass: Fixed,
    /// Planets without a radius get one from the mass-radius relation.
    pub radius: Option<Fixed>,
    /// Surface temperature in Kelvin; required for stars to shine.
    pub temperature: Option<i32>,
    pub semi_major_axis: Fixed,
    pub eccentricity: Fixed,
    pub inclination: Fixed,
    pub axial_tilt: Fixed,
    /// Days.
    pub rotation_period: Fixed,
    pub children: Vec<CustomBody>,
}

impl CustomBody {
    fn new(name: impl Into<String>, body_type: BodyType, mass: Fixed) -> Self {
        Self {
            name: name.into(),
            body_type,
            seed: 0,
            mass,
            radius: None,
            temperature: None,
            semi_major_axis: Fixed::ZERO,
            eccentricity: Fixed::ZERO,
            inclination: Fixed::ZERO,
            axial_tilt: Fixed::ZERO,
            rotation_period: Fixed::ONE,
            children: Vec::new(),
        }
    }

    pub fn star(name: impl Into<String>, body_type: BodyType, mass: Fixed, radius: Fixed, temperature: i32) -> Self {
        Self {
            radius: Some(radius),
            temperature: Some(temperature),
            ..Self::new(name, body_type, mass)
        }
    }

    /// Barycentre of exactly two children; its mass is their sum.
    pub fn gravpoint(name: impl Into<String>, first: CustomBody, second: CustomBody) -> Self {
        let mass = first.mass + second.mass;
        Self {
            children: vec![first, second],
            ..Self::new(name, BodyType::GravPoint, mass)
        }
    }

    pub fn planet(name: impl Into<String>, body_type: BodyType, mass: Fixed, semi_major_axis: Fixed) -> Self {
        Self {
            semi_major_axis,
            ..Self::new(name, body_type, mass)
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_radius(mut self, radius: Fixed) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn with_eccentricity(mut self, eccentricity: Fixed) -> Self {
        self.eccentricity = eccentricity;
        self
    }

    pub fn with_inclination(mut self, inclination: Fixed) -> Self {
        self.inclination = inclination;
        self
    }

    pub fn with_rotation(mut self, rotation_period: Fixed, axial_tilt: Fixed) -> Self {
        self.rotation_period = rotation_period;
        self.axial_tilt = axial_tilt;
        self
    }

    pub fn with_child(mut self, child: CustomBody) -> Self {
        self.children.push(child);
        self
    }

    /// Periapsis and apoapsis.
    pub fn orbital_range(&self) -> (Fixed, Fixed) {
        let a = self.semi_major_axis;
        let e = self.eccentricity;
        (a - a * e, a + a * e)
    }
}

/// A complete hand-authored system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomSystem {
    pub name: String,
    pub seed: u32,
    pub root: CustomBody,
}

impl CustomSystem {
    pub fn new(name: impl Into<String>, seed: u32, root: CustomBody) -> Self {
        Self {
            name: name.into(),
            seed,
            root,
        }
    }
}
