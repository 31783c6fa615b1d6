//! Planetary rings.

use serde::{Deserialize, Serialize};
use stellar::BodyType;
use units::{Fixed, Random};

use crate::atmosphere::Color;

/// Offset added to a body seed for its ring generator, so ring draws never
/// correlate with the body's other draws.
pub const RING_SEED_OFFSET: u32 = 965_467;

const RING_COLORS: [Color; 5] = [
    Color::rgba(156, 122, 98, 217), // jupiter-like
    Color::rgba(156, 122, 98, 217), // saturn-like
    Color::rgba(181, 173, 174, 217), // neptune-like
    Color::rgba(130, 122, 98, 217), // uranus-like
    Color::rgba(207, 122, 98, 217), // brown dwarf-like
];

/// Ring system, radii in planet radii. No rings when both radii are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rings {
    pub min_radius: Fixed,
    pub max_radius: Fixed,
    pub base_color: Color,
}

impl Default for Rings {
    fn default() -> Self {
        Self {
            min_radius: Fixed::ZERO,
            max_radius: Fixed::ZERO,
            base_color: Color::WHITE,
        }
    }
}

impl Rings {
    pub fn exists(&self) -> bool {
        self.max_radius > Fixed::ZERO
    }

    /// Pick rings for a body.
    ///
    /// Only gas giants are eligible, with a 50% chance unless `force` is set.
    /// The radii bracket a rigid-satellite Roche limit of about 1.64 planet
    /// radii: inner edge in `[1.10, 1.45]`, outer edge in `[1.50, 1.68642]`.
    pub fn pick(body_type: BodyType, seed: u32, force: bool) -> Self {
        if body_type != BodyType::GasGiant {
            return Self::default();
        }

        let mut rng = Random::new(seed.wrapping_add(RING_SEED_OFFSET));
        // today's forecast: 50% chance of rings
        let die = rng.double();
        if !force && die >= 0.5 {
            return Self::default();
        }

        let base = RING_COLORS[rng.int32_below(RING_COLORS.len() as u32) as usize];
        let dr = rng.int32_range(-20, 20);
        let dg = rng.int32_range(-20, 20);
        let db = rng.int32_range(-20, 10);
        let da = rng.int32_range(-5, 5);

        let inner_min = Fixed::from_ratio(110, 100);
        let inner_max = Fixed::from_ratio(145, 100);
        let outer_min = Fixed::from_ratio(150, 100);
        let outer_max = Fixed::from_ratio(168_642, 100_000);

        let min_radius = inner_min + (inner_max - inner_min) * rng.fixed();
        let max_radius = outer_min + (outer_max - outer_min) * rng.fixed();

        Self {
            min_radius,
            max_radius,
            base_color: base.jittered(dr, dg, db, da),
        }
    }
}
