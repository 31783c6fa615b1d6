//! Naming oracle.
//!
//! The pipeline only asks for names; how they are made is up to the oracle.
//! [`SyllableNames`] is the built-in oracle: words strung together from a
//! fixed syllable table, with a suffix for starports.

use star_system::{BodyIndex, StarSystem, SystemPath};
use stellar::BodyType;
use units::Random;

/// Source of display names.
///
/// Implementations must be pure functions of their arguments and the state
/// of `rng`; repeated calls with an advancing `rng` must be able to produce
/// many distinct names.
pub trait NameOracle {
    fn system_name(&self, path: &SystemPath, rng: &mut Random) -> String;

    /// Name for a body already inserted into `system`.
    fn body_name(&self, system: &StarSystem, body: BodyIndex, rng: &mut Random) -> String;
}

const SYLLABLES: [&str; 40] = [
    "al", "an", "ar", "bel", "cor", "da", "del", "dor", "e", "en", "fa", "gan", "hal", "i", "is",
    "ka", "kel", "la", "lin", "ma", "mor", "na", "nor", "o", "or", "pa", "qua", "ra", "ren", "sa",
    "sol", "ta", "tor", "u", "ul", "va", "ven", "xa", "yr", "zen",
];

const ORBITAL_SUFFIXES: [&str; 6] = ["High", "Station", "Orbital", "Ring", "Dock", "Hub"];

const SURFACE_SUFFIXES: [&str; 6] = ["City", "Base", "Landing", "Town", "Colony", "Outpost"];

/// Syllable-based names, e.g. "Kelmora" or "Dorven High".
#[derive(Debug, Clone, Copy, Default)]
pub struct SyllableNames;

impl SyllableNames {
    fn word(rng: &mut Random, min_syllables: u32, max_syllables: u32) -> String {
        let count = rng.int32_range(min_syllables as i32, max_syllables as i32);
        let mut word = String::new();
        for _ in 0..count {
            word.push_str(SYLLABLES[rng.int32_below(SYLLABLES.len() as u32) as usize]);
        }
        capitalize(&word)
    }
}

impl NameOracle for SyllableNames {
    fn system_name(&self, _path: &SystemPath, rng: &mut Random) -> String {
        Self::word(rng, 2, 3)
    }

    fn body_name(&self, system: &StarSystem, body: BodyIndex, rng: &mut Random) -> String {
        let suffixes = match system.get(body).map(|b| b.body_type) {
            Some(BodyType::StarportOrbital) => &ORBITAL_SUFFIXES,
            Some(BodyType::StarportSurface) => &SURFACE_SUFFIXES,
            _ => return Self::word(rng, 2, 3),
        };
        let base = Self::word(rng, 2, 3);
        let suffix = suffixes[rng.int32_below(suffixes.len() as u32) as usize];
        format!("{} {}", base, suffix)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
