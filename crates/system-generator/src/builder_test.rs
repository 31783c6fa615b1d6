//! Tests for the body tree builder

use approx::assert_relative_eq;
use planetary::radius_from_mass;
use star_system::{Body, BodyIndex, StarSystem, SystemPath};
use stellar::BodyType;
use units::{Fixed, Random, fixed_pi};

use crate::builder::{
    StarCatalog, build_custom_tree, build_random_tree, classify_planet, disc_density, make_binary_pair,
    make_star, mass_from_disk_area, planet_letters,
};
use crate::context::GenerationContext;
use crate::custom::{CustomBody, CustomSystem};
use crate::error::GenerationError;
use crate::names::SyllableNames;

fn ctx(index: u32) -> GenerationContext {
    GenerationContext::new(SystemPath::new(2, -1, 0, index), 0xabcd_1234, true)
}

// ========== Disc mass ==========

#[test]
fn test_full_disc_area() {
    // b^2 - 2b^3/(3 max) at b = max is max^2 / 3
    let max = Fixed::from_int(3);
    let area = mass_from_disk_area(Fixed::ZERO, max, max);
    assert_relative_eq!(area.to_f64(), 3.0, epsilon = 1e-6);
}

#[test]
fn test_disc_area_clips_to_outer_edge() {
    let max = Fixed::from_int(3);
    assert_eq!(
        mass_from_disk_area(Fixed::ONE, Fixed::from_int(10), max),
        mass_from_disk_area(Fixed::ONE, max, max)
    );
}

#[test]
fn test_disc_area_positive_and_thins_outward() {
    let max = Fixed::from_int(10);
    let inner = mass_from_disk_area(Fixed::ONE, Fixed::from_int(2), max);
    let outer = mass_from_disk_area(Fixed::from_int(9), Fixed::from_int(10), max);
    assert!(inner > Fixed::ZERO);
    assert!(outer > Fixed::ZERO);
    // same width, less material near the edge
    assert!(outer < inner);
}

#[test]
fn test_disc_density_distributes_fraction() {
    let min = Fixed::from_ratio(1, 10);
    let max = Fixed::from_int(20);
    let fraction = Fixed::from_ratio(2, 100);
    let density = disc_density(Fixed::from_int(332_998), min, max, fraction);
    let disc_mass = mass_from_disk_area(min, max, max) * density;
    assert_relative_eq!(disc_mass.to_f64(), 332_998.0 * 0.02, max_relative = 1e-4);
}

// ========== Stars ==========

#[test]
fn test_make_star_draws_from_table() {
    let mut rng = Random::new(1);
    let star = make_star(SystemPath::new(0, 0, 0, 0), BodyType::StarG, &mut rng);
    let info = BodyType::StarG.star_info().unwrap();
    assert!(star.mass >= Fixed::from_ratio(info.mass.0 as i64, 100));
    assert!(star.mass <= Fixed::from_ratio(info.mass.1 as i64, 100));
    assert!(star.average_temp >= info.temperature.0 && star.average_temp <= info.temperature.1);
}

#[test]
fn test_binary_pair_clears_minimum_distance() {
    let path = SystemPath::new(0, 0, 0, 0);
    for seed in 0..20 {
        let mut rng = Random::new(seed);
        let mut a = make_star(path, BodyType::StarG, &mut rng);
        let mut b = make_star(path, BodyType::StarK, &mut rng);
        let min_dist = Fixed::from_int(5);
        make_binary_pair(&mut a, &mut b, min_dist, &mut rng);

        assert!(a.orb_min >= min_dist);
        assert_eq!(a.orb_min, b.orb_min);
        assert_eq!(a.orb_max, b.orb_max);
        assert_eq!(a.semi_major_axis, b.semi_major_axis);
        assert!(a.orb_max >= a.orb_min);
        assert_eq!(b.orbital_phase_at_start, fixed_pi());
        assert_eq!(a.orbital_offset, fixed_pi() / 2);
    }
}

// ========== Planets ==========

#[test]
fn test_planet_letters() {
    assert_eq!(planet_letters(0), "a");
    assert_eq!(planet_letters(25), "z");
    assert_eq!(planet_letters(26), "aa");
    assert_eq!(planet_letters(27), "ab");
}

#[test]
fn test_classify_by_mass() {
    let path = SystemPath::new(0, 0, 0, 0);
    let mut star = Body::new(path, BodyType::StarG);
    star.radius = Fixed::ONE;
    star.average_temp = 5778;
    star.mass = Fixed::ONE;
    let mut system = StarSystem::new(star_system::SystemMetadata::from_path(path, 1), 1, star);
    system.mark_star(BodyIndex::ROOT).unwrap();

    let mut giant = Body::new(path, BodyType::Terrestrial);
    giant.mass = Fixed::from_int(300);
    let giant = system.add_child(BodyIndex::ROOT, giant).unwrap();
    let mut rng = Random::new(4);
    assert!(!classify_planet(&mut system, giant, &mut rng).unwrap());
    let giant = system.body(giant).unwrap();
    assert_eq!(giant.body_type, BodyType::GasGiant);
    assert_eq!(giant.radius, radius_from_mass(Fixed::from_int(300)));
}

#[test]
fn test_classify_brown_dwarf() {
    let path = SystemPath::new(0, 0, 0, 0);
    let mut star = Body::new(path, BodyType::StarG);
    star.radius = Fixed::ONE;
    star.average_temp = 5778;
    star.mass = Fixed::ONE;
    let mut system = StarSystem::new(star_system::SystemMetadata::from_path(path, 1), 1, star);
    system.mark_star(BodyIndex::ROOT).unwrap();

    let mut heavy = Body::new(path, BodyType::Terrestrial);
    heavy.mass = Fixed::from_int(10_000);
    heavy.orb_min = Fixed::from_int(5);
    heavy.orb_max = Fixed::from_int(5);
    let heavy = system.add_child(BodyIndex::ROOT, heavy).unwrap();
    let mut rng = Random::new(4);
    assert!(classify_planet(&mut system, heavy, &mut rng).unwrap());
    let dwarf = system.body(heavy).unwrap();
    assert_eq!(dwarf.body_type, BodyType::BrownDwarf);
    // converted to solar masses
    assert!(dwarf.mass < Fixed::ONE);
    assert!(dwarf.average_temp > 0);
    // disc brown dwarfs are not system stars
    assert_eq!(system.stars(), &[BodyIndex::ROOT]);
}

// ========== Random trees ==========

#[test]
fn test_catalog_is_reproducible() {
    let a = StarCatalog::pick(&ctx(3), &SyllableNames);
    let b = StarCatalog::pick(&ctx(3), &SyllableNames);
    assert_eq!(a, b);
    assert!((1..=4).contains(&a.count));
    assert!(a.types[..a.count].iter().all(|t| t.is_star()));
}

#[test]
fn test_random_trees_are_well_formed() {
    for index in 0..40 {
        let system = build_random_tree(&ctx(index), &SyllableNames).unwrap();
        system.validate().unwrap();

        let catalog = StarCatalog::pick(&ctx(index), &SyllableNames);
        assert_eq!(system.stars().len(), catalog.count);
        assert_eq!(system.name(), catalog.name);
        for &star in system.stars() {
            let star = system.body(star).unwrap();
            assert!(star.name.starts_with(&catalog.name));
        }
        for body in system.bodies() {
            if body.is_gravpoint() {
                assert_eq!(body.children().len(), 2);
            }
            if body.is_planet() {
                assert!(body.orb_max >= body.orb_min);
                assert!(body.mass >= Fixed::ZERO);
            }
        }
    }
}

#[test]
fn test_moons_have_no_moons() {
    for index in 0..40 {
        let system = build_random_tree(&ctx(index), &SyllableNames).unwrap();
        for body in system.bodies() {
            let Some(parent) = body.parent() else { continue };
            let parent = system.body(parent).unwrap();
            if body.is_planet() && parent.is_planet() {
                assert!(body.children().is_empty(), "moon {} has moons", body.name);
            }
        }
    }
}

#[test]
fn test_inclination_drives_orbit_plane() {
    let quarter_turn = fixed_pi() / 2;
    for index in 0..20 {
        let system = build_random_tree(&ctx(index), &SyllableNames).unwrap();
        for body in system.bodies() {
            let Some(parent) = body.parent() else { continue };
            if system.body(parent).unwrap().is_gravpoint() || body.inclination == Fixed::ZERO {
                continue;
            }
            assert!(body.inclination > Fixed::ZERO && body.inclination < quarter_turn);
            // the plane is tipped by exactly the stored inclination
            let plane = body.orbit.plane();
            assert_relative_eq!(plane[(1, 1)], body.inclination.to_f64().sin(), epsilon = 1e-12);
        }
    }
}

#[test]
fn test_random_tree_is_reproducible() {
    let a = build_random_tree(&ctx(7), &SyllableNames).unwrap();
    let b = build_random_tree(&ctx(7), &SyllableNames).unwrap();
    let mut first = Vec::new();
    let mut second = Vec::new();
    a.dump(&mut first).unwrap();
    b.dump(&mut second).unwrap();
    assert_eq!(first, second);
}

// ========== Custom trees ==========

#[test]
fn test_custom_tree_kept_as_written() {
    let earth = CustomBody::planet("Earth", BodyType::Terrestrial, Fixed::ONE, Fixed::ONE)
        .with_child(CustomBody::planet("Moon", BodyType::Asteroid, Fixed::from_ratio(1, 81), Fixed::from_ratio(1, 400)));
    let mars = CustomBody::planet("Mars", BodyType::Terrestrial, Fixed::from_ratio(107, 1000), Fixed::from_ratio(152, 100))
        .with_eccentricity(Fixed::from_ratio(1, 10));
    let sol = CustomBody::star("Sol", BodyType::StarG, Fixed::ONE, Fixed::ONE, 5778)
        .with_child(earth)
        .with_child(mars);
    let system = build_custom_tree(&ctx(0), &CustomSystem::new("Sol", 5, sol)).unwrap();

    system.validate().unwrap();
    assert_eq!(system.len(), 4);
    assert_eq!(system.seed, 5);
    assert_eq!(system.stars(), &[BodyIndex::ROOT]);

    let root = system.root();
    assert_eq!(root.name, "Sol");
    assert_eq!(root.average_temp, 5778);
    let names: Vec<&str> = root
        .children()
        .iter()
        .map(|&c| system.body(c).unwrap().name.as_str())
        .collect();
    assert_eq!(names, ["Earth", "Mars"]);

    let earth = system.body(root.children()[0]).unwrap();
    assert_eq!(earth.radius, radius_from_mass(Fixed::ONE));
    assert_eq!(earth.children().len(), 1);
    let mars = system.body(root.children()[1]).unwrap();
    assert!(mars.orb_min < mars.orb_max);
}

#[test]
fn test_custom_binary_marks_both_stars() {
    let a = CustomBody {
        semi_major_axis: Fixed::from_int(20),
        ..CustomBody::star("A", BodyType::StarG, Fixed::ONE, Fixed::ONE, 5778)
    };
    let b = CustomBody {
        semi_major_axis: Fixed::from_int(20),
        ..CustomBody::star("B", BodyType::StarM, Fixed::from_ratio(1, 5), Fixed::from_ratio(1, 5), 3200)
    };
    let root = CustomBody::gravpoint("A,B", a, b);
    let system = build_custom_tree(&ctx(0), &CustomSystem::new("Pair", 1, root)).unwrap();
    system.validate().unwrap();
    assert_eq!(system.stars().len(), 2);
    assert_eq!(system.root().mass, Fixed::from_ratio(6, 5));
}

#[test]
fn test_custom_root_must_be_a_primary() {
    let rogue = CustomBody::planet("Rogue", BodyType::Terrestrial, Fixed::ONE, Fixed::ZERO);
    let result = build_custom_tree(&ctx(0), &CustomSystem::new("Rogue", 0, rogue));
    assert!(matches!(result, Err(GenerationError::MissingPrimary { body: BodyIndex::ROOT })));

    let port = CustomBody::planet("Drifter", BodyType::StarportOrbital, Fixed::ZERO, Fixed::ZERO);
    let result = build_custom_tree(&ctx(0), &CustomSystem::new("Drifter", 0, port));
    assert!(matches!(result, Err(GenerationError::MissingPrimary { body: BodyIndex::ROOT })));

    let lone = CustomBody::gravpoint(
        "Pair",
        CustomBody::star("A", BodyType::StarK, Fixed::from_ratio(7, 10), Fixed::from_ratio(7, 10), 4500),
        CustomBody::star("B", BodyType::StarM, Fixed::from_ratio(1, 5), Fixed::from_ratio(1, 5), 3200),
    );
    assert!(build_custom_tree(&ctx(0), &CustomSystem::new("Pair", 0, lone)).is_ok());
}
