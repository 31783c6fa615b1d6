//! Atmosphere appearance.
//!
//! Colour and density are render parameters only, so this module works in
//! `f64`. The alpha channel is a fog-depth multiplier rather than a real
//! opacity: dense atmospheres need not become a solid colour.

use serde::{Deserialize, Serialize};
use stellar::BodyType;
use units::Fixed;

/// 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0, 0, 0, 0);
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build from unit-range channels, clamping each to `[0, 1]` first.
    pub fn from_unit(r: f64, g: f64, b: f64, a: u8) -> Self {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0) as u8;
        Self::rgba(channel(r), channel(g), channel(b), a)
    }

    /// Offset each channel by an integer, clamping to `[0, 255]`.
    pub fn jittered(self, dr: i32, dg: i32, db: i32, da: i32) -> Self {
        let channel = |v: u8, d: i32| (v as i32 + d).clamp(0, 255) as u8;
        Self::rgba(
            channel(self.r, dr),
            channel(self.g, dg),
            channel(self.b, db),
            channel(self.a, da),
        )
    }
}

/// The dominant gas of a terrestrial atmosphere, chosen by oxidizing level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AtmosphereGas {
    Oxygen,
    CarbonDioxide,
    CarbonMonoxide,
    Methane,
    Hydrogen,
    Helium,
    Argon,
    Sulfur,
    Nitrogen,
}

impl AtmosphereGas {
    /// Band lower bounds, exclusive, from most to least oxidizing.
    const BANDS: [(i64, i64, AtmosphereGas); 8] = [
        (95, 100, AtmosphereGas::Oxygen),
        (7, 10, AtmosphereGas::CarbonDioxide),
        (65, 100, AtmosphereGas::CarbonMonoxide),
        (55, 100, AtmosphereGas::Methane),
        (3, 10, AtmosphereGas::Hydrogen),
        (2, 10, AtmosphereGas::Helium),
        (15, 100, AtmosphereGas::Argon),
        (1, 10, AtmosphereGas::Sulfur),
    ];

    pub fn from_oxidizing(oxidizing: Fixed) -> Self {
        Self::BANDS
            .iter()
            .find(|(n, d, _)| oxidizing > Fixed::from_ratio(*n, *d))
            .map(|(_, _, gas)| *gas)
            .unwrap_or(AtmosphereGas::Nitrogen)
    }

    pub fn formula(self) -> &'static str {
        match self {
            AtmosphereGas::Oxygen => "O2",
            AtmosphereGas::CarbonDioxide => "CO2",
            AtmosphereGas::CarbonMonoxide => "CO",
            AtmosphereGas::Methane => "CH4",
            AtmosphereGas::Hydrogen => "H",
            AtmosphereGas::Helium => "He",
            AtmosphereGas::Argon => "Ar",
            AtmosphereGas::Sulfur => "S",
            AtmosphereGas::Nitrogen => "N",
        }
    }

    /// Unit-range RGB for an atmosphere of this gas at oxidizing level `atmo`.
    fn rgb(self, atmo: f64) -> (f64, f64, f64) {
        match self {
            AtmosphereGas::Oxygen => (
                1.0 + (0.95 - atmo) * 15.0,
                0.95 + (0.95 - atmo) * 10.0,
                atmo.powi(5),
            ),
            AtmosphereGas::CarbonDioxide => (atmo + 0.05, 1.0 + (0.7 - atmo), 0.8),
            AtmosphereGas::CarbonMonoxide => (1.0 + (0.65 - atmo), 0.8, atmo + 0.25),
            AtmosphereGas::Methane => (
                1.0 + (0.55 - atmo) * 5.0,
                0.35 - (0.55 - atmo) * 5.0,
                0.4,
            ),
            AtmosphereGas::Argon => (
                0.5 - (0.15 - atmo) * 5.0,
                0.0,
                0.5 + (0.15 - atmo) * 5.0,
            ),
            AtmosphereGas::Sulfur => (
                0.8 - (0.1 - atmo) * 4.0,
                1.0,
                0.5 - (0.1 - atmo) * 10.0,
            ),
            AtmosphereGas::Hydrogen | AtmosphereGas::Helium | AtmosphereGas::Nitrogen => {
                (1.0, 1.0, 1.0)
            }
        }
    }
}

/// Render colour and relative density of an atmosphere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Atmosphere {
    pub color: Color,
    pub density: f64,
}

impl Atmosphere {
    /// Pick the atmosphere of a body from its type and volatiles.
    ///
    /// Gas giants get a faint white haze of density 14, asteroids nothing.
    /// Terrestrial planets with more than 0.001 volatile gas are coloured by
    /// their oxidizing band; their density is the volatile gas amount.
    pub fn pick(body_type: BodyType, volatile_gas: Fixed, oxidizing: Fixed) -> Self {
        match body_type {
            BodyType::GasGiant => Self {
                color: Color::rgba(255, 255, 255, 3),
                density: 14.0,
            },
            BodyType::Asteroid => Self::default(),
            _ => {
                let gas = volatile_gas.to_f64();
                let color = if gas > 0.001 {
                    let (r, g, b) = AtmosphereGas::from_oxidizing(oxidizing).rgb(oxidizing.to_f64());
                    Color::from_unit(r, g, b, 255)
                } else {
                    Color::BLACK
                };
                Self {
                    color,
                    density: gas,
                }
            }
        }
    }
}
