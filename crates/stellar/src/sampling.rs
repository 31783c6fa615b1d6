use serde::{Deserialize, Serialize};
use units::{Fixed, Random};

use crate::body_type::BodyType;

/// Physical parameters drawn for a star of a given type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarSample {
    /// Solar masses.
    pub mass: Fixed,
    /// Solar radii.
    pub radius: Fixed,
    /// Kelvin.
    pub temperature: i32,
    /// Fraction of the type's base metallicity.
    pub metallicity: Fixed,
}

/// Stellar black holes get at least this radius (solar radii) so that
/// flux and surface-area arithmetic never divides by zero.
pub fn black_hole_min_radius() -> Fixed {
    Fixed::from_ratio(1, 100)
}

/// Draw mass, radius, temperature and metallicity uniformly from the type's
/// table ranges.
///
/// Draw order is radius, mass, temperature, metallicity; callers relying on
/// reproducible streams must not reorder it.
///
/// # Arguments
/// * `body_type` - A stellar body type (brown dwarf through supermassive black hole)
/// * `rng` - Seeded random source
///
/// # Returns
/// The sampled parameters, or `None` when `body_type` is not a star
///
/// # Example
/// ```
/// use stellar::{BodyType, sample_star};
/// use units::{Fixed, Random};
///
/// let mut rng = Random::new(42);
/// let star = sample_star(BodyType::StarG, &mut rng).unwrap();
/// assert!(star.mass >= Fixed::from_ratio(80, 100));
/// assert!(star.mass <= Fixed::from_ratio(110, 100));
/// ```
pub fn sample_star(body_type: BodyType, rng: &mut Random) -> Option<StarSample> {
    if !body_type.is_star() {
        return None;
    }
    let info = body_type.star_info()?;

    let mut radius = Fixed::from_ratio(rng.int32_range(info.radius.0, info.radius.1) as i64, 100);
    let mass = Fixed::from_ratio(rng.int32_range(info.mass.0, info.mass.1) as i64, 100);
    let temperature = rng.int32_range(info.temperature.0, info.temperature.1);
    let metallicity = info.metallicity() * rng.fixed();

    if body_type.is_black_hole() {
        radius = radius.max(black_hole_min_radius());
    }

    Some(StarSample {
        mass,
        radius,
        temperature,
        metallicity,
    })
}

// Cumulative thresholds over a draw in [0, 1_000_000). Anything at or above
// the last threshold is a brown dwarf.
const STAR_TYPE_WEIGHTS: [(u32, BodyType); 35] = [
    (1, BodyType::IntermediateMassBlackHole),
    (3, BodyType::StellarBlackHole),
    (5, BodyType::StarOWolfRayet),
    (8, BodyType::StarBWolfRayet),
    (12, BodyType::StarMWolfRayet),
    (15, BodyType::StarKHyperGiant),
    (18, BodyType::StarGHyperGiant),
    (23, BodyType::StarOHyperGiant),
    (28, BodyType::StarAHyperGiant),
    (33, BodyType::StarFHyperGiant),
    (41, BodyType::StarBHyperGiant),
    (48, BodyType::StarMHyperGiant),
    (58, BodyType::StarKSuperGiant),
    (68, BodyType::StarGSuperGiant),
    (78, BodyType::StarOSuperGiant),
    (88, BodyType::StarASuperGiant),
    (98, BodyType::StarFSuperGiant),
    (108, BodyType::StarBSuperGiant),
    (158, BodyType::StarMSuperGiant),
    (208, BodyType::StarKGiant),
    (250, BodyType::StarGGiant),
    (300, BodyType::StarOGiant),
    (350, BodyType::StarAGiant),
    (400, BodyType::StarFGiant),
    (500, BodyType::StarBGiant),
    (700, BodyType::StarMGiant),
    (800, BodyType::StarO),
    (2000, BodyType::StarB),
    (8000, BodyType::StarA),
    (37300, BodyType::StarF),
    (113300, BodyType::StarG),
    (234300, BodyType::StarK),
    (250000, BodyType::WhiteDwarf),
    (900000, BodyType::StarM),
    (1000000, BodyType::BrownDwarf),
];

/// Map a draw in `[0, 1_000_000)` onto the galactic star-type distribution.
pub fn star_type_for_roll(roll: u32) -> BodyType {
    STAR_TYPE_WEIGHTS
        .iter()
        .find(|(threshold, _)| roll < *threshold)
        .map(|(_, body_type)| *body_type)
        .unwrap_or(BodyType::BrownDwarf)
}

/// Pick the primary star type of a randomly generated system.
pub fn pick_star_type(rng: &mut Random) -> BodyType {
    star_type_for_roll(rng.int32_below(1_000_000))
}

/// Number of stars in a system: 1 (60%), 2 (28%), 3 (8%) or 4 (4%).
pub fn pick_star_count(rng: &mut Random) -> usize {
    match rng.int32_below(100) {
        0..60 => 1,
        60..88 => 2,
        88..96 => 3,
        _ => 4,
    }
}

/// Pick a companion star type no hotter than the primary's main-sequence
/// equivalent: anything from a brown dwarf up to the primary's ordinal,
/// capped at type O.
pub fn pick_companion_type(primary: BodyType, rng: &mut Random) -> BodyType {
    let ceiling = primary.min(BodyType::StarO);
    let ordinal = rng.int32_range(
        BodyType::BrownDwarf.ordinal() as i32,
        ceiling.max(BodyType::BrownDwarf).ordinal() as i32,
    );
    BodyType::from_ordinal(ordinal as usize).unwrap_or(BodyType::BrownDwarf)
}
