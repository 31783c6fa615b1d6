//! Integration tests for hand-authored systems.
//!
//! A Sun-like star with an Earth at one AU exercises the physics pass on
//! known inputs.

use planetary::radius_from_mass;
use planetary::temperature::{energy_per_unit_area, surface_temperature};
use star_system::{BodyIndex, StarSystem, SystemPath};
use stellar::BodyType;
use system_generator::physics::blackbody_temperature;
use system_generator::{CustomBody, CustomSystem, GenerationError, GeneratorConfig, SystemGenerator};
use units::Fixed;

fn sol() -> CustomSystem {
    let moon = CustomBody::planet("Moon", BodyType::Asteroid, Fixed::from_ratio(123, 10_000), Fixed::from_ratio(257, 100_000))
        .with_seed(3);
    let earth = CustomBody::planet("Earth", BodyType::Terrestrial, Fixed::ONE, Fixed::ONE)
        .with_seed(1)
        .with_eccentricity(Fixed::from_ratio(167, 10_000))
        .with_rotation(Fixed::ONE, Fixed::from_ratio(41, 100))
        .with_child(moon);
    let jupiter = CustomBody::planet("Jupiter", BodyType::GasGiant, Fixed::from_int(318), Fixed::from_ratio(52, 10))
        .with_seed(2);
    let sun = CustomBody::star("Sol", BodyType::StarG, Fixed::ONE, Fixed::ONE, 5778)
        .with_child(earth)
        .with_child(jupiter);
    CustomSystem::new("Sol", 0, sun)
}

fn generate() -> StarSystem {
    SystemGenerator::new(GeneratorConfig::default())
        .generate_custom(SystemPath::new(0, 0, 0, 0), &sol())
        .unwrap()
}

fn find<'a>(system: &'a StarSystem, name: &str) -> &'a star_system::Body {
    system.bodies().iter().find(|b| b.name == name).unwrap()
}

#[test]
fn names_and_tree_are_kept() {
    let system = generate();
    assert_eq!(system.name(), "Sol");
    assert_eq!(system.stars(), &[BodyIndex::ROOT]);
    let earth = find(&system, "Earth");
    assert_eq!(earth.radius, radius_from_mass(Fixed::ONE));
    assert_eq!(system.body(earth.parent().unwrap()).unwrap().name, "Sol");
    assert_eq!(find(&system, "Jupiter").body_type, BodyType::GasGiant);
}

#[test]
fn earth_blackbody_matches_flux() {
    let system = generate();
    let earth_index = find(&system, "Earth").index;
    let orbit = system_generator::physics::find_star_and_orbital_range(&system, earth_index).unwrap();
    let flux = energy_per_unit_area(Fixed::ONE, 5778, orbit.average_distance());
    let expected = surface_temperature(flux, Fixed::ZERO, Fixed::ZERO);
    assert_eq!(blackbody_temperature(&system, earth_index).unwrap(), expected);
    assert_eq!(expected, 277);
}

#[test]
fn physics_runs_on_every_planet() {
    let system = generate();
    for name in ["Earth", "Moon", "Jupiter"] {
        let body = find(&system, name);
        assert!(body.average_temp > 0, "{} is at absolute zero", name);
        assert!(body.metallicity >= Fixed::ZERO);
    }
    let earth = find(&system, "Earth");
    assert!(earth.life >= Fixed::ZERO && earth.life <= Fixed::ONE);
    if earth.volatiles.liquid == Fixed::ZERO {
        assert_eq!(earth.life, Fixed::ZERO);
    }
}

#[test]
fn custom_generation_is_deterministic() {
    let mut first = Vec::new();
    let mut second = Vec::new();
    generate().dump(&mut first).unwrap();
    generate().dump(&mut second).unwrap();
    assert_eq!(first, second);
}

#[test]
fn populated_custom_bodies_keep_their_names() {
    let system = generate();
    assert!(find(&system, "Earth").index != BodyIndex::ROOT);
    for body in system.bodies() {
        if !body.is_starport() {
            assert!(["Sol", "Earth", "Moon", "Jupiter"].contains(&body.name.as_str()));
        }
    }
}

#[test]
fn planet_root_has_no_star() {
    let rogue = CustomSystem::new(
        "Rogue",
        0,
        CustomBody::planet("Rogue", BodyType::Terrestrial, Fixed::ONE, Fixed::ZERO)
            .with_child(CustomBody::planet("Moonlet", BodyType::Asteroid, Fixed::from_ratio(1, 100), Fixed::from_ratio(1, 400))),
    );
    let result = SystemGenerator::new(GeneratorConfig::default()).generate_custom(SystemPath::new(0, 0, 0, 0), &rogue);
    assert!(matches!(result, Err(GenerationError::MissingPrimary { .. })));
}

#[test]
fn earth_golden_values() {
    let system = generate();
    let earth = find(&system, "Earth");
    assert_eq!(earth.average_temp, 380);
    assert_eq!(earth.radius, Fixed::ONE);
    assert_eq!(earth.life, Fixed::ZERO);
    assert_eq!(earth.metallicity, Fixed::from_raw(0x4250_bcfa));
    assert_eq!(earth.volcanicity, Fixed::from_raw(0x06c9_688d));
    assert_eq!(earth.atmosphere_oxidizing, Fixed::from_raw(0x5cc4_2cd5));
    assert_eq!(earth.volatiles.gas, Fixed::from_raw(0x1_0d9c_27c2));
    assert_eq!(earth.volatiles.liquid, Fixed::from_raw(0x3eb3_32ec));
    assert_eq!(earth.volatiles.ices, Fixed::from_raw(0x083f_fff7));
}

const SOL_DUMP: &str = r#"System (0,0,0,0) "Sol"
  id 828a3c85-dc24-5648-8cf3-d1b3aa87d674
  seed 0
  unexplored false
  faction NONE
  econ type INDUSTRY
  industrial 0.633757 agricultural 0.000000 metallicity 0.500000 human proximity 1.000000
  population 0.907057
  4 bodies, 1 stars, 0 stations
  trade levels:
    HYDROGEN 7
    LIQUID_OXYGEN 1
    METAL_ORE 6
    CARBON_ORE 7
    METAL_ALLOYS -4
    PLASTICS 16
    FRUIT_AND_VEG -4
    ANIMAL_MEAT 0
    LIVE_ANIMALS -3
    LIQUOR 9
    GRAIN 0
    TEXTILES 12
    FERTILIZER -6
    WATER 0
    MEDICINES 8
    CONSUMER_GOODS -14
    COMPUTERS 11
    ROBOTS 4
    PRECIOUS_METALS 0
    INDUSTRIAL_MACHINERY 29
    FARM_MACHINERY -7
    MINING_MACHINERY 8
    AIR_PROCESSORS -23
    SLAVES 0
    HAND_WEAPONS -18
    BATTLE_WEAPONS -8
    NERVE_GAS -10
    NARCOTICS -3
    MILITARY_FUEL -7
    RUBBISH -3
    RADIOACTIVES -7
  (0,0,0,0,0) "Sol" STAR_G seed 0
    class G V
    mass 1.000000 radius 1.000000
    a 0.000000 e 0.000000 orbit [0.000000, 0.000000] incl 0.000000 offset 0.000000 phase 0.000000
    tilt 0.000000 rotation 1.000000 temp 5778K
    (0,0,0,0,1) "Earth" PLANET_TERRESTRIAL seed 1
      mass 1.000000 radius 1.000000
      a 1.000000 e 0.016700 orbit [0.983300, 1.016700] incl 0.000000 offset 0.000000 phase 0.000000
      tilt 0.410000 rotation 1.000000 temp 380K
      metallicity 0.259044 volcanicity 0.026511 volatiles 1.053164/0.244922/0.032227 oxidizing 0.362368 life 0.000000
      (0,0,0,0,3) "Moon" PLANET_ASTEROID seed 3
        mass 0.012300 radius 0.230835
        a 0.002570 e 0.000000 orbit [0.002570, 0.002570] incl 0.000000 offset 0.000000 phase 0.000000
        tilt 0.000000 rotation 23.264588 temp 277K
        metallicity 0.384445 volcanicity 0.008020 volatiles 0.000000/0.000000/0.000000 oxidizing 0.585843 life 0.000000
        population 0.907057 agricultural 0.000000 activity 1.000000
    (0,0,0,0,2) "Jupiter" PLANET_GAS_GIANT seed 2
      mass 318.000000 radius 13.564175
      a 5.200000 e 0.000000 orbit [5.200000, 5.200000] incl 0.000000 offset 0.000000 phase 0.000000
      tilt 0.000000 rotation 1.000000 temp 122K
      metallicity 0.090191 volcanicity 0.370037 volatiles 0.000000/0.000000/0.000000 oxidizing 0.842148 life 0.000000
      rings 1.366123 to 1.644465
"#;

#[test]
fn sol_dump_is_pinned() {
    let config = GeneratorConfig {
        add_stations: false,
        ..GeneratorConfig::default()
    };
    let system = SystemGenerator::new(config)
        .generate_custom(SystemPath::new(0, 0, 0, 0), &sol())
        .unwrap();
    let mut out = Vec::new();
    system.dump(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    for (line, (got, want)) in text.lines().zip(SOL_DUMP.lines()).enumerate() {
        assert_eq!(got, want, "dump differs at line {}", line + 1);
    }
    assert_eq!(text, SOL_DUMP);
}
