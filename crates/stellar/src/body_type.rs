use std::fmt;

use serde::{Deserialize, Serialize};

/// Fine-grained classification of every body a star system can contain.
///
/// The declaration order is significant: ordinals index the per-star tables
/// and star-type comparisons (`<=`) follow it, from the synthetic gravity
/// point through the stars by increasing evolutionary stage and then the
/// planets and starports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BodyType {
    GravPoint,
    BrownDwarf,
    WhiteDwarf,
    StarM,
    StarK,
    StarG,
    StarF,
    StarA,
    StarB,
    StarO,
    StarMGiant,
    StarKGiant,
    StarGGiant,
    StarFGiant,
    StarAGiant,
    StarBGiant,
    StarOGiant,
    StarMSuperGiant,
    StarKSuperGiant,
    StarGSuperGiant,
    StarFSuperGiant,
    StarASuperGiant,
    StarBSuperGiant,
    StarOSuperGiant,
    StarMHyperGiant,
    StarKHyperGiant,
    StarGHyperGiant,
    StarFHyperGiant,
    StarAHyperGiant,
    StarBHyperGiant,
    StarOHyperGiant,
    StarMWolfRayet,
    StarBWolfRayet,
    StarOWolfRayet,
    StellarBlackHole,
    IntermediateMassBlackHole,
    SupermassiveBlackHole,
    GasGiant,
    Asteroid,
    Terrestrial,
    StarportOrbital,
    StarportSurface,
}

/// Coarse classification derived from [`BodyType`].
///
/// Ordered so that `super_type <= SuperType::Star` selects the bodies that
/// have no meaningful Hill sphere and whose masses are stored in solar units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SuperType {
    None,
    Star,
    GasGiant,
    RockyPlanet,
    Starport,
}

impl BodyType {
    pub const COUNT: usize = 42;

    /// First and last star ordinals.
    pub const STAR_MIN: BodyType = BodyType::BrownDwarf;
    pub const STAR_MAX: BodyType = BodyType::SupermassiveBlackHole;

    pub const ALL: [BodyType; Self::COUNT] = [
        BodyType::GravPoint,
        BodyType::BrownDwarf,
        BodyType::WhiteDwarf,
        BodyType::StarM,
        BodyType::StarK,
        BodyType::StarG,
        BodyType::StarF,
        BodyType::StarA,
        BodyType::StarB,
        BodyType::StarO,
        BodyType::StarMGiant,
        BodyType::StarKGiant,
        BodyType::StarGGiant,
        BodyType::StarFGiant,
        BodyType::StarAGiant,
        BodyType::StarBGiant,
        BodyType::StarOGiant,
        BodyType::StarMSuperGiant,
        BodyType::StarKSuperGiant,
        BodyType::StarGSuperGiant,
        BodyType::StarFSuperGiant,
        BodyType::StarASuperGiant,
        BodyType::StarBSuperGiant,
        BodyType::StarOSuperGiant,
        BodyType::StarMHyperGiant,
        BodyType::StarKHyperGiant,
        BodyType::StarGHyperGiant,
        BodyType::StarFHyperGiant,
        BodyType::StarAHyperGiant,
        BodyType::StarBHyperGiant,
        BodyType::StarOHyperGiant,
        BodyType::StarMWolfRayet,
        BodyType::StarBWolfRayet,
        BodyType::StarOWolfRayet,
        BodyType::StellarBlackHole,
        BodyType::IntermediateMassBlackHole,
        BodyType::SupermassiveBlackHole,
        BodyType::GasGiant,
        BodyType::Asteroid,
        BodyType::Terrestrial,
        BodyType::StarportOrbital,
        BodyType::StarportSurface,
    ];

    pub const fn ordinal(self) -> usize {
        self as usize
    }

    pub fn from_ordinal(ordinal: usize) -> Option<BodyType> {
        Self::ALL.get(ordinal).copied()
    }

    pub fn super_type(self) -> SuperType {
        match self {
            BodyType::GravPoint => SuperType::None,
            BodyType::GasGiant => SuperType::GasGiant,
            BodyType::Asteroid | BodyType::Terrestrial => SuperType::RockyPlanet,
            BodyType::StarportOrbital | BodyType::StarportSurface => SuperType::Starport,
            _ => SuperType::Star,
        }
    }

    /// True for every stellar ordinal, brown dwarfs and black holes included.
    pub fn is_star(self) -> bool {
        self.super_type() == SuperType::Star
    }

    /// True for the gravity point and every star: the bodies planets can
    /// orbit directly and whose masses are kept in solar units.
    pub fn is_star_or_gravpoint(self) -> bool {
        self <= BodyType::STAR_MAX
    }

    pub fn is_black_hole(self) -> bool {
        matches!(
            self,
            BodyType::StellarBlackHole
                | BodyType::IntermediateMassBlackHole
                | BodyType::SupermassiveBlackHole
        )
    }

    pub fn is_starport(self) -> bool {
        self.super_type() == SuperType::Starport
    }

    /// Stable upper-case identifier used in dumps and catalogs.
    pub fn name(self) -> &'static str {
        match self {
            BodyType::GravPoint => "GRAVPOINT",
            BodyType::BrownDwarf => "BROWN_DWARF",
            BodyType::WhiteDwarf => "WHITE_DWARF",
            BodyType::StarM => "STAR_M",
            BodyType::StarK => "STAR_K",
            BodyType::StarG => "STAR_G",
            BodyType::StarF => "STAR_F",
            BodyType::StarA => "STAR_A",
            BodyType::StarB => "STAR_B",
            BodyType::StarO => "STAR_O",
            BodyType::StarMGiant => "STAR_M_GIANT",
            BodyType::StarKGiant => "STAR_K_GIANT",
            BodyType::StarGGiant => "STAR_G_GIANT",
            BodyType::StarFGiant => "STAR_F_GIANT",
            BodyType::StarAGiant => "STAR_A_GIANT",
            BodyType::StarBGiant => "STAR_B_GIANT",
            BodyType::StarOGiant => "STAR_O_GIANT",
            BodyType::StarMSuperGiant => "STAR_M_SUPER_GIANT",
            BodyType::StarKSuperGiant => "STAR_K_SUPER_GIANT",
            BodyType::StarGSuperGiant => "STAR_G_SUPER_GIANT",
            BodyType::StarFSuperGiant => "STAR_F_SUPER_GIANT",
            BodyType::StarASuperGiant => "STAR_A_SUPER_GIANT",
            BodyType::StarBSuperGiant => "STAR_B_SUPER_GIANT",
            BodyType::StarOSuperGiant => "STAR_O_SUPER_GIANT",
            BodyType::StarMHyperGiant => "STAR_M_HYPER_GIANT",
            BodyType::StarKHyperGiant => "STAR_K_HYPER_GIANT",
            BodyType::StarGHyperGiant => "STAR_G_HYPER_GIANT",
            BodyType::StarFHyperGiant => "STAR_F_HYPER_GIANT",
            BodyType::StarAHyperGiant => "STAR_A_HYPER_GIANT",
            BodyType::StarBHyperGiant => "STAR_B_HYPER_GIANT",
            BodyType::StarOHyperGiant => "STAR_O_HYPER_GIANT",
            BodyType::StarMWolfRayet => "STAR_M_WF",
            BodyType::StarBWolfRayet => "STAR_B_WF",
            BodyType::StarOWolfRayet => "STAR_O_WF",
            BodyType::StellarBlackHole => "STAR_S_BH",
            BodyType::IntermediateMassBlackHole => "STAR_IM_BH",
            BodyType::SupermassiveBlackHole => "STAR_SM_BH",
            BodyType::GasGiant => "PLANET_GAS_GIANT",
            BodyType::Asteroid => "PLANET_ASTEROID",
            BodyType::Terrestrial => "PLANET_TERRESTRIAL",
            BodyType::StarportOrbital => "STARPORT_ORBITAL",
            BodyType::StarportSurface => "STARPORT_SURFACE",
        }
    }
}

impl fmt::Display for BodyType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for SuperType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            SuperType::None => "NONE",
            SuperType::Star => "STAR",
            SuperType::GasGiant => "GAS_GIANT",
            SuperType::RockyPlanet => "ROCKY_PLANET",
            SuperType::Starport => "STARPORT",
        };
        write!(f, "{}", str)
    }
}
