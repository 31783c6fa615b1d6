//! Static per-star-subtype data.
//!
//! One row per stellar [`BodyType`] ordinal from the gravity point through the
//! supermassive black hole. Masses and radii are integer hundredths of the
//! solar value, temperatures are Kelvin.

use units::Fixed;

use crate::body_type::BodyType;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarTypeInfo {
    /// Inclusive mass range in hundredths of a solar mass.
    pub mass: (i32, i32),
    /// Inclusive radius range in hundredths of a solar radius.
    pub radius: (i32, i32),
    /// Inclusive surface temperature range in Kelvin.
    pub temperature: (i32, i32),
    metallicity: (i64, i64),
    /// Sector-map colour.
    pub color: [u8; 3],
    /// Colour as rendered in the system view.
    pub real_color: [u8; 3],
    /// Luminosity in solar units.
    pub luminosity: f64,
    /// Relative sector-map marker size.
    pub scale: f32,
    pub description: &'static str,
}

impl StarTypeInfo {
    /// Base metallicity fraction handed down to bodies orbiting this type.
    pub fn metallicity(&self) -> Fixed {
        Fixed::from_ratio(self.metallicity.0, self.metallicity.1)
    }
}

const fn row(
    mass: (i32, i32),
    radius: (i32, i32),
    temperature: (i32, i32),
    metallicity: (i64, i64),
    color: [u8; 3],
    real_color: [u8; 3],
    luminosity: f64,
    scale: f32,
    description: &'static str,
) -> StarTypeInfo {
    StarTypeInfo {
        mass,
        radius,
        temperature,
        metallicity,
        color,
        real_color,
        luminosity,
        scale,
        description,
    }
}

const RED: [u8; 3] = [255, 51, 0];
const ORANGE: [u8; 3] = [255, 153, 26];
const YELLOW: [u8; 3] = [255, 255, 102];
const PALE_YELLOW: [u8; 3] = [255, 255, 204];
const WHITE: [u8; 3] = [255, 255, 255];
const BLUE: [u8; 3] = [178, 178, 255];
const VIOLET: [u8; 3] = [255, 178, 255];

const REAL_M: [u8; 3] = [255, 128, 51];
const REAL_K: [u8; 3] = [255, 255, 102];
const REAL_G: [u8; 3] = [255, 255, 242];
const REAL_B: [u8; 3] = [204, 204, 255];
const REAL_O: [u8; 3] = [255, 204, 255];

#[rustfmt::skip]
static STAR_TYPES: [StarTypeInfo; BodyType::STAR_MAX.ordinal() + 1] = [
    // gravity point: planets orbiting a barycentre inherit full metallicity
    row((0, 0), (0, 0), (0, 0), (1, 1), [0, 0, 0], [0, 0, 0], 0.0, 0.0, "Gravity point"),
    row((2, 8), (10, 30), (1000, 2000), (9, 10), [128, 0, 0], [128, 0, 0], 0.0003, 0.6, "Brown dwarf sub-stellar object"),
    row((20, 100), (1, 2), (4000, 40000), (5, 10), [102, 102, 204], WHITE, 0.1, 0.5, "White dwarf stellar remnant"),
    // main sequence
    row((10, 47), (30, 60), (2000, 3500), (7, 10), RED, REAL_M, 0.08, 0.7, "Type 'M' red star"),
    row((50, 78), (60, 100), (3500, 5000), (6, 10), ORANGE, REAL_K, 0.38, 0.8, "Type 'K' orange star"),
    row((80, 110), (80, 120), (5000, 6000), (5, 10), YELLOW, REAL_G, 1.2, 0.8, "Type 'G' yellow star"),
    row((115, 170), (110, 150), (6000, 7500), (4, 10), PALE_YELLOW, WHITE, 5.1, 0.9, "Type 'F' white star"),
    row((180, 320), (120, 220), (7500, 10000), (3, 10), WHITE, WHITE, 24.0, 1.0, "Type 'A' hot white star"),
    row((200, 300), (120, 290), (10000, 30000), (2, 10), BLUE, REAL_B, 100.0, 1.1, "Bright type 'B' blue star"),
    row((300, 400), (200, 310), (30000, 60000), (1, 10), VIOLET, REAL_O, 200.0, 1.1, "Hot, massive type 'O' star"),
    // giants
    row((60, 357), (2000, 5000), (2500, 3500), (8, 10), RED, REAL_M, 1000.0, 1.3, "Red giant star"),
    row((125, 500), (1500, 3000), (3500, 5000), (65, 100), ORANGE, REAL_K, 2000.0, 1.2, "Orange giant star"),
    row((200, 800), (1000, 2000), (5000, 6000), (55, 100), YELLOW, REAL_G, 4000.0, 1.2, "Yellow giant star"),
    row((250, 900), (800, 1500), (6000, 7500), (4, 10), PALE_YELLOW, WHITE, 6000.0, 1.2, "White giant star"),
    row((400, 1000), (600, 1000), (7500, 10000), (3, 10), WHITE, WHITE, 8000.0, 1.1, "White giant star"),
    row((500, 1000), (600, 1000), (10000, 30000), (2, 10), BLUE, REAL_B, 9000.0, 1.1, "Blue giant star"),
    row((600, 1200), (600, 1000), (30000, 60000), (1, 10), VIOLET, REAL_O, 12000.0, 1.2, "Hot blue giant star"),
    // supergiants
    row((1050, 5000), (7000, 15000), (2500, 3500), (9, 10), RED, REAL_M, 12000.0, 1.8, "Red supergiant star"),
    row((1100, 5000), (5000, 9000), (3500, 5000), (7, 10), ORANGE, REAL_K, 14000.0, 1.6, "Orange supergiant star"),
    row((1200, 5000), (4000, 8000), (5000, 6000), (6, 10), YELLOW, REAL_G, 18000.0, 1.5, "Yellow supergiant star"),
    row((1500, 6000), (3500, 7000), (6000, 7500), (4, 10), PALE_YELLOW, WHITE, 24000.0, 1.5, "White supergiant star"),
    row((2000, 8000), (3000, 6000), (7500, 10000), (3, 10), WHITE, WHITE, 30000.0, 1.4, "White supergiant star"),
    row((3000, 9000), (2500, 5000), (10000, 30000), (2, 10), BLUE, REAL_B, 50000.0, 1.3, "Blue supergiant star"),
    row((5000, 10000), (2000, 4000), (30000, 60000), (1, 10), VIOLET, REAL_O, 100000.0, 1.3, "Hot blue supergiant star"),
    // hypergiants
    row((5000, 15000), (20000, 40000), (2500, 3500), (1, 1), RED, REAL_M, 125000.0, 2.5, "Red hypergiant star"),
    row((5000, 17000), (17000, 25000), (3500, 5000), (7, 10), ORANGE, REAL_K, 150000.0, 2.2, "Orange hypergiant star"),
    row((5000, 18000), (14000, 20000), (5000, 6000), (6, 10), YELLOW, REAL_G, 175000.0, 2.2, "Yellow hypergiant star"),
    row((5000, 19000), (12000, 17500), (6000, 7500), (4, 10), PALE_YELLOW, WHITE, 200000.0, 2.1, "White hypergiant star"),
    row((5000, 20000), (10000, 15000), (7500, 10000), (3, 10), WHITE, WHITE, 200000.0, 2.1, "White hypergiant star"),
    row((5000, 23000), (6000, 10000), (10000, 30000), (2, 10), BLUE, REAL_B, 200000.0, 2.0, "Blue hypergiant star"),
    row((10000, 30000), (4000, 7000), (30000, 60000), (1, 10), VIOLET, REAL_O, 200000.0, 1.9, "Hot blue hypergiant star"),
    // Wolf-Rayet
    row((2000, 5000), (2500, 5000), (25000, 35000), (1, 1), RED, [255, 153, 153], 50000.0, 1.1, "Wolf-Rayet star, unstable"),
    row((2000, 7500), (2500, 5000), (35000, 45000), (8, 10), BLUE, REAL_B, 100000.0, 1.3, "Wolf-Rayet star, risk of collapse"),
    row((2000, 10000), (2500, 5000), (45000, 60000), (6, 10), VIOLET, REAL_O, 200000.0, 1.6, "Wolf-Rayet star, imminent collapse"),
    // black holes: full metallicity so surrounding rocks are mining hotspots
    row((20, 2000), (0, 0), (10, 24), (1, 1), [76, 178, 76], WHITE, 0.0003, 1.0, "Stellar black hole"),
    row((900000, 1000000), (100, 500), (1, 10), (1, 1), [51, 230, 51], [16, 0, 20], 0.00003, 2.5, "Intermediate-mass black hole"),
    row((2000000, 5000000), (10000, 20000), (10, 24), (1, 1), [0, 255, 0], [10, 0, 16], 0.000003, 4.0, "Supermassive black hole"),
];

impl BodyType {
    /// Table row for stars and the gravity point; `None` for planets and
    /// starports.
    pub fn star_info(self) -> Option<&'static StarTypeInfo> {
        STAR_TYPES.get(self.ordinal())
    }

    /// Metallicity base for bodies orbiting a body of this type. Planets and
    /// starports pass through the full fraction.
    pub fn star_metallicity(self) -> Fixed {
        self.star_info()
            .map(StarTypeInfo::metallicity)
            .unwrap_or(Fixed::ONE)
    }
}
