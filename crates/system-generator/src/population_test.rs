//! Tests for the population and economy pass

use star_system::{Body, BodyIndex, StarSystem, SystemMetadata, SystemPath};
use stellar::BodyType;
use units::Fixed;

use crate::context::GenerationContext;
use crate::names::SyllableNames;
use crate::population::{agricultural_suitability, is_settleable, populate, starport_population_floor};

fn path(x: i32) -> SystemPath {
    SystemPath::new(x, 0, 0, 1)
}

fn sun(x: i32) -> Body {
    let mut star = Body::new(path(x), BodyType::StarG);
    star.mass = Fixed::ONE;
    star.radius = Fixed::ONE;
    star.average_temp = 5778;
    star
}

fn world(x: i32, name: &str, life: Fixed, metallicity: Fixed, average_temp: i32) -> Body {
    let mut body = Body::new(path(x), BodyType::Terrestrial);
    body.name = name.to_string();
    body.mass = Fixed::ONE;
    body.radius = Fixed::ONE;
    body.semi_major_axis = Fixed::ONE;
    body.orb_min = Fixed::ONE;
    body.orb_max = Fixed::ONE;
    body.life = life;
    body.metallicity = metallicity;
    body.average_temp = average_temp;
    body.seed = 99;
    body
}

/// A living Earth and a barren rock around the Sun, `x` sectors out.
fn system(x: i32) -> (StarSystem, BodyIndex, BodyIndex) {
    let mut system = StarSystem::new(SystemMetadata::from_path(path(x), 1), 1, sun(x));
    system.mark_star(BodyIndex::ROOT).unwrap();
    let earth = system
        .add_child(BodyIndex::ROOT, world(x, "Earth", Fixed::ONE, Fixed::from_ratio(1, 2), 288))
        .unwrap();
    let rock = system
        .add_child(BodyIndex::ROOT, world(x, "Rock", Fixed::ZERO, Fixed::from_ratio(1, 10), 250))
        .unwrap();
    (system, earth, rock)
}

fn ctx(x: i32, explored: bool) -> GenerationContext {
    GenerationContext::new(path(x), 1, explored)
}

// ========== Settlement bounds ==========

#[test]
fn test_settleable_temperatures() {
    assert!(is_settleable(BodyType::Terrestrial, 288));
    assert!(is_settleable(BodyType::Asteroid, 200));
    assert!(is_settleable(BodyType::Terrestrial, 373));
    assert!(!is_settleable(BodyType::Terrestrial, 374));
    assert!(!is_settleable(BodyType::Terrestrial, 99));
    assert!(!is_settleable(BodyType::GasGiant, 288));
    assert!(!is_settleable(BodyType::StarportOrbital, 288));
}

// ========== Agricultural suitability ==========

#[test]
fn test_suitability_counts_whole_degrees() {
    // 290 K is 16.85 °C: eight whole degrees short of 25 °C
    assert_eq!(agricultural_suitability(290, 25, 40), Fixed::ONE - Fixed::from_ratio(8, 40));
    assert_eq!(agricultural_suitability(290, 25, 40), Fixed::from_raw(0xcccc_cccd));
    // 298 K is 24.85 °C, less than a degree short
    assert_eq!(agricultural_suitability(298, 25, 40), Fixed::ONE);
}

#[test]
fn test_suitability_is_clamped() {
    assert_eq!(agricultural_suitability(320, 25, 40), Fixed::ONE);
    assert_eq!(agricultural_suitability(200, 25, 40), Fixed::ZERO);
    assert_eq!(agricultural_suitability(290, 30, 50), Fixed::ONE - Fixed::from_ratio(13, 50));
}

// ========== Population ==========

#[test]
fn test_unexplored_system_is_empty() {
    let (mut system, earth, _) = system(0);
    populate(&mut system, &ctx(0, false), &SyllableNames, true).unwrap();
    assert!(system.unexplored);
    assert_eq!(system.economy.total_population, Fixed::ZERO);
    assert_eq!(system.body(earth).unwrap().population, Fixed::ZERO);
    assert_eq!(system.body(earth).unwrap().name, "Earth");
}

#[test]
fn test_living_world_is_populated() {
    let (mut system, earth, _) = system(0);
    populate(&mut system, &ctx(0, true), &SyllableNames, false).unwrap();
    let earth = system.body(earth).unwrap();
    assert!(earth.population > Fixed::ZERO);
    assert!(earth.agricultural > Fixed::ZERO && earth.agricultural <= Fixed::ONE);
    assert_eq!(earth.human_activity, system.economy.human_proximity);
    assert!(system.economy.agricultural > Fixed::ZERO);
}

#[test]
fn test_total_is_sum_of_bodies() {
    let (mut system, _, _) = system(0);
    populate(&mut system, &ctx(0, true), &SyllableNames, false).unwrap();
    let mut sum = Fixed::ZERO;
    for body in system.bodies() {
        sum += body.population;
    }
    assert_eq!(system.economy.total_population, sum);
}

#[test]
fn test_barren_world_far_out_stays_empty() {
    // human proximity 3/63 this far out, so poor metals are not worth mining
    let (mut system, _, rock) = system(20);
    populate(&mut system, &ctx(20, true), &SyllableNames, false).unwrap();
    let rock = system.body(rock).unwrap();
    assert_eq!(rock.population, Fixed::ZERO);
    assert_eq!(rock.human_activity, Fixed::ZERO);
}

#[test]
fn test_rename_populated_bodies() {
    let (mut kept, earth, _) = system(0);
    populate(&mut kept, &ctx(0, true), &SyllableNames, false).unwrap();
    assert_eq!(kept.body(earth).unwrap().name, "Earth");

    let (mut renamed, earth, _) = system(0);
    populate(&mut renamed, &ctx(0, true), &SyllableNames, true).unwrap();
    assert_ne!(renamed.body(earth).unwrap().name, "Earth");
    // the star is never populated, so never renamed
    assert_eq!(renamed.root().name, kept.root().name);
}

#[test]
fn test_orbital_starport_floor() {
    let (mut system, earth, _) = system(0);
    let mut port = Body::new(path(0), BodyType::StarportOrbital);
    port.average_temp = 0;
    let port = system.add_child_front(earth, port).unwrap();
    populate(&mut system, &ctx(0, true), &SyllableNames, false).unwrap();
    assert_eq!(system.body(port).unwrap().population, starport_population_floor());
}

#[test]
fn test_gravpoint_is_unpopulated() {
    let mut grav = Body::new(path(0), BodyType::GravPoint);
    grav.average_temp = 288;
    let mut system = StarSystem::new(SystemMetadata::from_path(path(0), 1), 1, grav);
    let a = system.add_child(BodyIndex::ROOT, sun(0)).unwrap();
    let b = system.add_child(BodyIndex::ROOT, sun(0)).unwrap();
    system.mark_star(a).unwrap();
    system.mark_star(b).unwrap();
    populate(&mut system, &ctx(0, true), &SyllableNames, false).unwrap();
    assert_eq!(system.root().population, Fixed::ZERO);
}

// ========== Economy ==========

#[test]
fn test_trade_levels_bounded() {
    let (mut system, _, _) = system(0);
    populate(&mut system, &ctx(0, true), &SyllableNames, false).unwrap();
    let max = system.economy.trade_levels.max_magnitude();
    assert!(max > 0);
    assert!(max <= 30, "trade level {} out of range", max);
}

#[test]
fn test_economy_is_deterministic() {
    let (mut a, _, _) = system(0);
    let (mut b, _, _) = system(0);
    populate(&mut a, &ctx(0, true), &SyllableNames, true).unwrap();
    populate(&mut b, &ctx(0, true), &SyllableNames, true).unwrap();
    assert_eq!(a.economy, b.economy);
    assert_eq!(a.economy.econ_type, a.economy.dominant_econ_type());
}
