use std::fmt;

use serde::{Deserialize, Serialize};

use crate::body_type::BodyType;

/// Harvard spectral class of a star, plus the remnant classes.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpectralType {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
    L,  // Brown dwarfs
    D,  // White dwarf
    WR, // Wolf-Rayet
    BH, // Black hole
}

impl fmt::Display for SpectralType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            SpectralType::O => "O",
            SpectralType::B => "B",
            SpectralType::A => "A",
            SpectralType::F => "F",
            SpectralType::G => "G",
            SpectralType::K => "K",
            SpectralType::M => "M",
            SpectralType::L => "L",
            SpectralType::D => "D",
            SpectralType::WR => "W",
            SpectralType::BH => "BH",
        };
        write!(f, "{}", str)
    }
}

/// Yerkes luminosity class, reduced to the stages the generator produces.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LuminosityClass {
    IAPLUS, // Hypergiants
    IA,     // Supergiants
    III,    // Normal giants
    V,      // Main sequence
    D,      // White dwarf
    BD,     // Brown dwarf
}

impl fmt::Display for LuminosityClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            LuminosityClass::IAPLUS => "Ia+",
            LuminosityClass::IA => "Ia",
            LuminosityClass::III => "III",
            LuminosityClass::V => "V",
            LuminosityClass::D => "D",
            LuminosityClass::BD => "BD",
        };
        write!(f, "{}", str)
    }
}

// The seven O..M ordinals repeat, coolest first, in each evolutionary band.
const BAND_CLASSES: [SpectralType; 7] = [
    SpectralType::M,
    SpectralType::K,
    SpectralType::G,
    SpectralType::F,
    SpectralType::A,
    SpectralType::B,
    SpectralType::O,
];

impl BodyType {
    /// Spectral class of a star; `None` for non-stellar bodies.
    pub fn spectral_type(self) -> Option<SpectralType> {
        let ordinal = self.ordinal();
        match self {
            BodyType::BrownDwarf => Some(SpectralType::L),
            BodyType::WhiteDwarf => Some(SpectralType::D),
            BodyType::StarMWolfRayet | BodyType::StarBWolfRayet | BodyType::StarOWolfRayet => {
                Some(SpectralType::WR)
            }
            t if t.is_black_hole() => Some(SpectralType::BH),
            t if t >= BodyType::StarM && t <= BodyType::StarOHyperGiant => {
                Some(BAND_CLASSES[(ordinal - BodyType::StarM.ordinal()) % BAND_CLASSES.len()])
            }
            _ => None,
        }
    }

    /// Luminosity class of a star; `None` for remnants without one and for
    /// non-stellar bodies.
    pub fn luminosity_class(self) -> Option<LuminosityClass> {
        match self {
            BodyType::BrownDwarf => Some(LuminosityClass::BD),
            BodyType::WhiteDwarf => Some(LuminosityClass::D),
            t if t >= BodyType::StarM && t <= BodyType::StarO => Some(LuminosityClass::V),
            t if t >= BodyType::StarMGiant && t <= BodyType::StarOGiant => {
                Some(LuminosityClass::III)
            }
            t if t >= BodyType::StarMSuperGiant && t <= BodyType::StarOSuperGiant => {
                Some(LuminosityClass::IA)
            }
            t if t >= BodyType::StarMHyperGiant && t <= BodyType::StarOHyperGiant => {
                Some(LuminosityClass::IAPLUS)
            }
            _ => None,
        }
    }

    /// Short catalog designation such as `G V` or `BH`.
    pub fn spectral_designation(self) -> Option<String> {
        let spectral = self.spectral_type()?;
        Some(match self.luminosity_class() {
            Some(LuminosityClass::BD) | Some(LuminosityClass::D) | None => spectral.to_string(),
            Some(class) => format!("{} {}", spectral, class),
        })
    }
}
