//! Tests for station placement

use std::collections::HashSet;
use std::f64::consts::FRAC_PI_2;

use star_system::{Body, BodyIndex, StarSystem, SystemMetadata, SystemPath};
use stellar::BodyType;
use units::{Fixed, Random};

use crate::config::GeneratorConfig;
use crate::context::GenerationContext;
use crate::error::GenerationError;
use crate::names::{NameOracle, SyllableNames};
use crate::stations::{add_stations, position_settlement, unique_station_name};

fn path() -> SystemPath {
    SystemPath::new(0, 0, 0, 2)
}

/// Always answers with the same name.
struct OneName;

impl NameOracle for OneName {
    fn system_name(&self, _path: &SystemPath, _rng: &mut Random) -> String {
        "Same".to_string()
    }

    fn body_name(&self, _system: &StarSystem, _body: BodyIndex, _rng: &mut Random) -> String {
        "Same".to_string()
    }
}

/// The Sun with an inhabited Earth (and a moon) and an empty Mars.
fn system(earth_population: Fixed) -> (StarSystem, BodyIndex, BodyIndex) {
    let mut sun = Body::new(path(), BodyType::StarG);
    sun.mass = Fixed::ONE;
    sun.radius = Fixed::ONE;
    sun.average_temp = 5778;
    let mut system = StarSystem::new(SystemMetadata::from_path(path(), 1), 1, sun);
    system.mark_star(BodyIndex::ROOT).unwrap();

    let mut earth = Body::new(path(), BodyType::Terrestrial);
    earth.mass = Fixed::ONE;
    earth.radius = Fixed::ONE;
    earth.semi_major_axis = Fixed::ONE;
    earth.orb_min = Fixed::ONE;
    earth.orb_max = Fixed::ONE;
    earth.average_temp = 288;
    earth.seed = 31;
    earth.population = earth_population;
    let earth = system.add_child(BodyIndex::ROOT, earth).unwrap();

    let mut moon = Body::new(path(), BodyType::Asteroid);
    moon.mass = Fixed::from_ratio(1, 81);
    moon.semi_major_axis = Fixed::from_ratio(1, 400);
    moon.orb_min = Fixed::from_ratio(1, 400);
    moon.orb_max = Fixed::from_ratio(1, 400);
    system.add_child(earth, moon).unwrap();

    let mut mars = Body::new(path(), BodyType::Terrestrial);
    mars.mass = Fixed::from_ratio(1, 10);
    mars.semi_major_axis = Fixed::from_ratio(3, 2);
    let mars = system.add_child(BodyIndex::ROOT, mars).unwrap();
    (system, earth, mars)
}

fn ctx() -> GenerationContext {
    GenerationContext::new(path(), 1, true)
}

// ========== Placement ==========

#[test]
fn test_populated_world_gets_stations() {
    let (mut system, earth, mars) = system(Fixed::from_int(3));
    let added = add_stations(&mut system, &ctx(), &GeneratorConfig::default(), &SyllableNames).unwrap();

    assert!(added >= 1);
    assert_eq!(added, system.space_stations().len());
    for &station in system.space_stations() {
        let station = system.body(station).unwrap();
        assert!(station.is_starport());
        assert_eq!(station.parent(), Some(earth));
        assert_eq!(station.mass, Fixed::ZERO);
    }
    assert!(system.body(mars).unwrap().children().is_empty());
    system.validate().unwrap();
}

#[test]
fn test_stations_go_before_moons() {
    let (mut system, earth, _) = system(Fixed::from_int(3));
    add_stations(&mut system, &ctx(), &GeneratorConfig::default(), &SyllableNames).unwrap();
    let children = system.body(earth).unwrap().children().to_vec();
    let last = system.body(*children.last().unwrap()).unwrap();
    assert_eq!(last.body_type, BodyType::Asteroid);
    assert!(system.body(children[0]).unwrap().is_starport());
}

#[test]
fn test_orbital_stations_inside_moon_orbit() {
    let (mut system, _, _) = system(Fixed::from_int(3));
    add_stations(&mut system, &ctx(), &GeneratorConfig::default(), &SyllableNames).unwrap();
    for &station in system.space_stations() {
        let station = system.body(station).unwrap();
        if station.body_type == BodyType::StarportOrbital {
            assert_eq!(station.orb_min, station.semi_major_axis);
            assert_eq!(station.orb_max, station.semi_major_axis);
            assert!(station.semi_major_axis < Fixed::from_ratio(1, 800));
            assert_eq!(station.rotation_period, Fixed::from_ratio(1, 3600));
        }
    }
}

#[test]
fn test_station_names_unique() {
    let (mut system, _, _) = system(Fixed::from_int(5));
    add_stations(&mut system, &ctx(), &GeneratorConfig::default(), &SyllableNames).unwrap();
    let names: HashSet<&str> = system
        .space_stations()
        .iter()
        .map(|&s| system.body(s).unwrap().name.as_str())
        .collect();
    assert_eq!(names.len(), system.space_stations().len());
    assert!(names.iter().all(|name| !name.is_empty()));
}

#[test]
fn test_low_population_gets_nothing() {
    let (mut system, _, _) = system(Fixed::from_ratio(1, 10_000));
    let added = add_stations(&mut system, &ctx(), &GeneratorConfig::default(), &SyllableNames).unwrap();
    assert_eq!(added, 0);
    assert!(system.space_stations().is_empty());
}

#[test]
fn test_surface_limit_respected() {
    let config = GeneratorConfig {
        max_surface_stations: 0,
        ..GeneratorConfig::default()
    };
    let (mut system, _, _) = system(Fixed::from_int(3));
    add_stations(&mut system, &ctx(), &config, &SyllableNames).unwrap();
    // at most the one forced surface station
    let surface = system
        .space_stations()
        .iter()
        .filter(|&&s| system.body(s).unwrap().body_type == BodyType::StarportSurface)
        .count();
    assert!(surface <= 1);
    assert!(!system.space_stations().is_empty());
}

#[test]
fn test_placement_is_deterministic() {
    let (mut a, _, _) = system(Fixed::from_int(3));
    let (mut b, _, _) = system(Fixed::from_int(3));
    add_stations(&mut a, &ctx(), &GeneratorConfig::default(), &SyllableNames).unwrap();
    add_stations(&mut b, &ctx(), &GeneratorConfig::default(), &SyllableNames).unwrap();
    let names = |s: &StarSystem| -> Vec<String> {
        s.space_stations()
            .iter()
            .map(|&i| s.body(i).unwrap().name.clone())
            .collect()
    };
    assert_eq!(names(&a), names(&b));
}

// ========== Settlements ==========

#[test]
fn test_settlement_position() {
    let mut station = Body::new(path(), BodyType::StarportSurface);
    station.seed = 1234;
    position_settlement(&mut station);
    let latitude = station.inclination.to_f64();
    assert!((FRAC_PI_2 - 1e-6..FRAC_PI_2 + 1.0).contains(&latitude));
    assert_eq!(station.orbital_offset, units::fixed_pi() / 2);

    let mut again = Body::new(path(), BodyType::StarportSurface);
    again.seed = 1234;
    position_settlement(&mut again);
    assert_eq!(again.inclination, station.inclination);
}

// ========== Naming ==========

#[test]
fn test_name_collisions_exhaust() {
    let (mut system, earth, _) = system(Fixed::from_int(3));
    let mut first = Body::new(path(), BodyType::StarportSurface);
    first.name = "Same".to_string();
    system.add_child_front(earth, first).unwrap();
    let second = system
        .add_child_front(earth, Body::new(path(), BodyType::StarportSurface))
        .unwrap();

    let mut rng = Random::new(1);
    assert_eq!(
        unique_station_name(&system, second, &OneName, &mut rng, 5),
        Err(GenerationError::NameExhausted { body: second, attempts: 5 })
    );
}

#[test]
fn test_first_station_takes_any_name() {
    let (mut system, earth, _) = system(Fixed::from_int(3));
    let only = system
        .add_child_front(earth, Body::new(path(), BodyType::StarportOrbital))
        .unwrap();
    let mut rng = Random::new(1);
    assert_eq!(unique_station_name(&system, only, &OneName, &mut rng, 1).unwrap(), "Same");
}
