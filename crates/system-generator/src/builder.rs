//! Body tree builder.
//!
//! Lays out the stars of a system (pairing them under gravity points), walks
//! a planetary disc outward around each star, classifies every planet as it
//! is created and gives planets their moons. All draws come from the system
//! generator in a fixed order, so the tree is a pure function of the
//! context.

use std::f64::consts::{PI, TAU};

use log::warn;
use planetary::{PlanetClass, brown_dwarf_from_planet, radius_from_mass};
use star_system::{Body, BodyIndex, StarSystem, SystemMetadata, SystemPath, rotate_x, rotate_y};
use stellar::{BodyType, SuperType, pick_companion_type, pick_star_count, pick_star_type, sample_star};
use units::constants::AU;
use units::{Fixed, Random, au_earth_radius, au_sol_radius, fixed_pi};

use crate::context::GenerationContext;
use crate::custom::{CustomBody, CustomSystem};
use crate::error::GenerationError;
use crate::names::NameOracle;
use crate::physics::blackbody_temperature;

pub const MAX_STARS: usize = 4;

/// Bound on separation redraws for one pair.
const MAX_PAIR_ATTEMPTS: u32 = 64;

/// Redraws allowed when a companion must be lighter than its primary.
const LIGHTER_STAR_ATTEMPTS: u32 = 16;

/// Each planet starts at least this factor beyond the previous apoapsis.
fn planet_min_separation() -> Fixed {
    Fixed::from_ratio(135, 100)
}

/// What the galaxy knows about a system before it is built: its name, seed
/// and star types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarCatalog {
    pub name: String,
    pub seed: u32,
    /// Between 1 and [`MAX_STARS`].
    pub count: usize,
    /// Only the first `count` entries are meaningful.
    pub types: [BodyType; MAX_STARS],
}

impl StarCatalog {
    pub fn pick(ctx: &GenerationContext, names: &dyn NameOracle) -> Self {
        let mut rng = ctx.stars_rng();
        let count = pick_star_count(&mut rng).clamp(1, MAX_STARS);
        let primary = pick_star_type(&mut rng);
        let mut types = [primary; MAX_STARS];
        for slot in types.iter_mut().take(count).skip(1) {
            *slot = pick_companion_type(primary, &mut rng);
        }
        let seed = rng.int32();
        let name = names.system_name(&ctx.path(), &mut rng);
        Self {
            name,
            seed,
            count,
            types,
        }
    }
}

// ========== Disc mass ==========

/// Disc mass between radii `a` and `b` for a surface density falling
/// linearly to zero at `max`, up to a constant factor.
///
/// `b` is clipped to `max`.
pub fn mass_from_disk_area(a: Fixed, b: Fixed, max: Fixed) -> Fixed {
    let b = b.min(max);
    let k = Fixed::from_int(2) / (3 * max);
    (b * b - k * b * b * b) - (a * a - k * a * a * a)
}

/// Density scale that puts `fraction` of the primary's mass into the disc
/// between `disc_min` and `disc_max`.
pub fn disc_density(primary_mass_in_earths: Fixed, disc_min: Fixed, disc_max: Fixed, fraction: Fixed) -> Fixed {
    let disc_max = disc_max.max(disc_min);
    let total = mass_from_disk_area(disc_min, disc_max, disc_max);
    primary_mass_in_earths * fraction / total
}

// ========== Stars ==========

/// A star of `body_type` with seed, radius, mass, temperature and
/// metallicity drawn in that order.
pub fn make_star(path: SystemPath, body_type: BodyType, rng: &mut Random) -> Body {
    let mut star = Body::new(path, body_type);
    star.seed = rng.int32();
    if let Some(sample) = sample_star(body_type, rng) {
        star.mass = sample.mass;
        star.radius = sample.radius;
        star.average_temp = sample.temperature;
        star.metallicity = sample.metallicity;
    }
    star
}

/// Redraw a companion until it is no heavier than `max_mass`, giving up
/// after a few attempts.
pub fn make_star_lighter_than(path: SystemPath, body_type: BodyType, max_mass: Fixed, rng: &mut Random) -> Body {
    let mut star = make_star(path, body_type, rng);
    for _ in 1..LIGHTER_STAR_ATTEMPTS {
        if star.mass <= max_mass {
            break;
        }
        star = make_star(path, body_type, rng);
    }
    star
}

/// Put `a` and `b` on a shared eccentric orbit around their barycentre with
/// periapsis at least `min_dist` AU.
///
/// The separation is drawn from one of three decades and doubled on every
/// retry until it clears `min_dist`.
pub fn make_binary_pair(a: &mut Body, b: &mut Body, min_dist: Fixed, rng: &mut Random) {
    let total = a.mass + b.mass;
    let a_share = b.mass / total;
    let b_share = a.mass / total;
    let eccentricity = rng.n_fixed(3);

    let mut multiplier: i64 = 1;
    let mut semi_major_axis = Fixed::ZERO;
    let mut separated = false;
    for _ in 0..MAX_PAIR_ATTEMPTS {
        semi_major_axis = match rng.int32_below(3) {
            2 => Fixed::from_ratio(rng.int32_range(100, 10_000) as i64, 100),
            1 => Fixed::from_ratio(rng.int32_range(10, 1_000) as i64, 100),
            _ => Fixed::from_ratio(rng.int32_range(1, 100) as i64, 100),
        };
        semi_major_axis = semi_major_axis * multiplier;
        multiplier = multiplier.saturating_mul(2);
        if semi_major_axis - eccentricity * semi_major_axis >= min_dist {
            separated = true;
            break;
        }
    }
    if !separated {
        warn!(
            "{} and {} never cleared {} AU; keeping {} AU",
            a.name, b.name, min_dist, semi_major_axis
        );
    }

    let orb_min = semi_major_axis - eccentricity * semi_major_axis;
    let orb_max = 2 * semi_major_axis - orb_min;
    for body in [&mut *a, &mut *b] {
        body.eccentricity = eccentricity;
        body.semi_major_axis = semi_major_axis;
        body.orb_min = orb_min;
        body.orb_max = orb_max;
        body.orbital_offset = fixed_pi() / 2;
    }
    b.orbital_phase_at_start = fixed_pi();

    let total_kg = a.mass_kg() + b.mass_kg();
    let e = eccentricity.to_f64();
    let (a_kg, b_kg) = (a.mass_kg(), b.mass_kg());
    a.orbit
        .set_shape_around_barycentre(AU * (semi_major_axis * a_share).to_f64(), total_kg, a_kg, e);
    b.orbit
        .set_shape_around_barycentre(AU * (semi_major_axis * b_share).to_f64(), total_kg, b_kg, e);

    let tilt = -0.5 * PI;
    let turn = rng.double_below(PI);
    a.orbit.set_plane(rotate_y(turn) * rotate_x(tilt));
    b.orbit.set_plane(rotate_y(turn - PI) * rotate_x(tilt));
    b.orbit.set_phase(b.orbital_phase_at_start.to_f64());
}

fn gravpoint(path: SystemPath, name: String, first: &Body, second: &Body) -> Body {
    let mut grav = Body::new(path, BodyType::GravPoint);
    grav.name = name;
    grav.mass = first.mass + second.mass;
    grav
}

/// Separation that keeps two stars' planets clear of each other.
fn pair_min_distance(a: &Body, b: &Body) -> Fixed {
    let factor = Fixed::from_ratio(12, 10);
    (factor * a.radius + factor * b.radius) * au_sol_radius()
}

/// Lay out the stars of `catalog` and return the system holding them.
///
/// One star is the root. Two stars hang under a root gravity point. Three
/// or four stars form an inner pair (kept within 100 AU) and a third star
/// or second pair, both under a root gravity point.
pub fn build_stars(
    ctx: &GenerationContext,
    catalog: &StarCatalog,
    rng: &mut Random,
) -> Result<StarSystem, GenerationError> {
    let path = ctx.path();
    let name = &catalog.name;
    let metadata = SystemMetadata::from_path(path, ctx.universe_seed()).with_name(name.clone());
    let types = catalog.types;

    let mut star0 = make_star(path, types[0], rng);
    if catalog.count == 1 {
        star0.name = name.clone();
        let mut system = StarSystem::new(metadata, catalog.seed, star0);
        system.mark_star(BodyIndex::ROOT)?;
        return Ok(system);
    }

    star0.name = format!("{} A", name);
    let mut star1 = make_star_lighter_than(path, types[1], star0.mass, rng);
    star1.name = format!("{} B", name);
    let min_dist = pair_min_distance(&star0, &star1);
    make_binary_pair(&mut star0, &mut star1, min_dist, rng);

    if catalog.count == 2 {
        let root = gravpoint(path, format!("{} A,B", name), &star0, &star1);
        let mut system = StarSystem::new(metadata, catalog.seed, root);
        let a = system.add_child(BodyIndex::ROOT, star0)?;
        let b = system.add_child(BodyIndex::ROOT, star1)?;
        system.mark_star(a)?;
        system.mark_star(b)?;
        return Ok(system);
    }

    // planets of the inner pair would otherwise run into the outer one
    let mut attempts = 1;
    while star0.orb_max > Fixed::from_int(100) && attempts < MAX_PAIR_ATTEMPTS {
        make_binary_pair(&mut star0, &mut star1, min_dist, rng);
        attempts += 1;
    }
    let mut inner = gravpoint(path, format!("{} A,B", name), &star0, &star1);

    let (mut outer, outer_pair) = if catalog.count == 3 {
        let mut star2 = make_star_lighter_than(path, types[2], star0.mass, rng);
        star2.name = format!("{} C", name);
        (star2, None)
    } else {
        let mut star2 = make_star_lighter_than(path, types[2], star0.mass, rng);
        star2.name = format!("{} C", name);
        let mut star3 = make_star_lighter_than(path, types[3], star2.mass, rng);
        star3.name = format!("{} D", name);
        let min_dist = pair_min_distance(&star2, &star3);
        make_binary_pair(&mut star2, &mut star3, min_dist, rng);
        let grav = gravpoint(path, format!("{} C,D", name), &star2, &star3);
        (grav, Some((star2, star3)))
    };

    let outer_reach = match &outer_pair {
        Some((star2, _)) => star2.orb_max,
        None => outer.orb_max,
    };
    let min_dist = star0.orb_max + outer_reach;
    make_binary_pair(&mut inner, &mut outer, 4 * min_dist, rng);

    let root = gravpoint(path, name.clone(), &inner, &outer);
    let mut system = StarSystem::new(metadata, catalog.seed, root);
    let inner_index = system.add_child(BodyIndex::ROOT, inner)?;
    let a = system.add_child(inner_index, star0)?;
    let b = system.add_child(inner_index, star1)?;
    let outer_index = system.add_child(BodyIndex::ROOT, outer)?;
    system.mark_star(a)?;
    system.mark_star(b)?;
    match outer_pair {
        None => system.mark_star(outer_index)?,
        Some((star2, star3)) => {
            let c = system.add_child(outer_index, star2)?;
            let d = system.add_child(outer_index, star3)?;
            system.mark_star(c)?;
            system.mark_star(d)?;
        }
    }
    Ok(system)
}

// ========== Planets ==========

/// Disc extent and density around a star.
fn star_disc(system: &StarSystem, primary: BodyIndex, rng: &mut Random) -> Result<(Fixed, Fixed, Fixed), GenerationError> {
    let star = system.body(primary)?;
    let (disc_min, mut disc_max) = if star.body_type == BodyType::WhiteDwarf {
        // a white dwarf was once a much larger star of up to ~8 solar masses
        let disc_min = star.radius * 1000 * au_sol_radius();
        let mut disc_max = rng.n_fixed(2) * 100;
        disc_max *= (Fixed::from_ratio(1, 2) + Fixed::from_int(8) * rng.fixed()).sqrt();
        (disc_min, disc_max)
    } else {
        let disc_min = star.radius * 4 * au_sol_radius();
        (disc_min, rng.n_fixed(2) * 100 * star.mass.sqrt())
    };
    let density = rng.fixed() * disc_density(star.mass_in_earths(), disc_min, disc_max, Fixed::from_ratio(2, 100));

    // stay within a tenth of the distance to a binary companion
    if star.parent().is_some() {
        disc_max = disc_max.min(star.orb_min * Fixed::from_ratio(1, 10));
    }
    if system.stars().len() >= 3 {
        if let Some(&inner) = system.root().children().first() {
            disc_max = disc_max.min(Fixed::from_ratio(5, 100) * system.body(inner)?.orb_min);
        }
    }
    Ok((disc_min, disc_max, density))
}

/// Disc extent and density around a planet, bounded by its Hill sphere.
fn moon_disc(system: &StarSystem, primary: BodyIndex, rng: &mut Random) -> Result<(Fixed, Fixed, Fixed), GenerationError> {
    let planet = system.body(primary)?;
    let disc_min = 4 * (planet.radius * au_earth_radius());
    let hill = system.hill_radius(primary)?;
    let disc_max = Fixed::from_int(5000)
        .min(Fixed::from_ratio(1, 20) * hill * planet.orb_min * Fixed::from_ratio(1, 10));
    let density = rng.fixed() * disc_density(planet.mass_in_earths(), disc_min, disc_max, Fixed::from_ratio(1, 500));
    Ok((disc_min, disc_max, density))
}

/// "a".."z", then "aa", "ab" and so on.
pub(crate) fn planet_letters(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        n -= 1;
        letters.push((b'a' + (n % 26) as u8) as char);
        n /= 26;
    }
    letters.iter().rev().collect()
}

/// Settle the type and radius of a freshly created planet from its mass.
/// Returns true when the planet turned out to be a brown dwarf.
pub fn classify_planet(system: &mut StarSystem, index: BodyIndex, rng: &mut Random) -> Result<bool, GenerationError> {
    let mass = system.body(index)?.mass;
    let class = PlanetClass::from_mass(mass);

    if class == PlanetClass::BrownDwarf {
        let blackbody = blackbody_temperature(system, index)?;
        let dwarf = brown_dwarf_from_planet(mass, blackbody, rng);
        let body = system.body_mut(index)?;
        body.body_type = BodyType::BrownDwarf;
        body.mass = dwarf.mass;
        body.radius = dwarf.radius;
        body.average_temp = dwarf.temperature;
        return Ok(true);
    }

    let body = system.body_mut(index)?;
    body.body_type = class.body_type();
    body.radius = radius_from_mass(mass);
    Ok(false)
}

/// Walk a disc outward from `primary`, adding one body per step, then name,
/// classify and (around stars) give moons to each new body.
///
/// Moons get no moons of their own, and planets of a brown dwarf that
/// formed in a disc get none either.
pub fn make_planets_around(
    system: &mut StarSystem,
    primary: BodyIndex,
    allow_moons: bool,
    rng: &mut Random,
) -> Result<(), GenerationError> {
    let path = system.path();
    let super_type = system.body(primary)?.super_type();
    let around_star = super_type <= SuperType::Star;
    let (disc_min, disc_max, density) = if around_star {
        star_disc(system, primary, rng)?
    } else {
        moon_disc(system, primary, rng)?
    };

    let primary_kg = system.body(primary)?.mass_kg();
    let initial_jump = rng.n_fixed(5);
    let mut pos = (Fixed::ONE - initial_jump) * disc_min + initial_jump * disc_max;
    let mut created = Vec::new();

    while pos < disc_max {
        let periapsis = pos + pos * Fixed::from_ratio(1, 2) * rng.n_fixed(2);
        let eccentricity = rng.n_fixed(3);
        let semi_major_axis = periapsis / (Fixed::ONE - eccentricity);
        let apoapsis = 2 * semi_major_axis - periapsis;
        if apoapsis > disc_max {
            break;
        }

        let mut mass = mass_from_disk_area(pos, planet_min_separation() * apoapsis, disc_max);
        mass *= rng.fixed() * density;
        if mass < Fixed::ZERO {
            warn!("planet mass around body {} overflowed; saturating", primary);
            mass = Fixed::MAX;
        }

        let mut planet = Body::new(path, BodyType::Terrestrial);
        planet.eccentricity = eccentricity;
        planet.axial_tilt = Fixed::from_ratio(100, 157) * rng.n_fixed(2);
        planet.semi_major_axis = semi_major_axis;
        planet.seed = rng.int32();
        planet.mass = mass;
        planet.rotation_period = Fixed::from_ratio(rng.int32_range(1, 200) as i64, 24);
        planet
            .orbit
            .set_shape_around_primary(semi_major_axis.to_f64() * AU, primary_kg, eccentricity.to_f64());

        let turn = rng.double_below(TAU);
        let lift = rng.n_fixed(5);
        planet.inclination = fixed_pi() * (lift / 2);
        planet
            .orbit
            .set_plane(rotate_y(turn) * rotate_x(-0.5 * PI + planet.inclination.to_f64()));
        let phase = rng.fixed() * (fixed_pi() * 2);
        planet.orbital_phase_at_start = phase;
        planet.orbit.set_phase(phase.to_f64());
        planet.orb_min = periapsis;
        planet.orb_max = apoapsis;
        created.push(system.add_child(primary, planet)?);

        let next = apoapsis * planet_min_separation();
        if next <= pos {
            break;
        }
        pos = next;
    }

    let primary_name = system.body(primary)?.name.clone();
    let make_moons = around_star && allow_moons;
    for (i, &child) in created.iter().enumerate() {
        let suffix = if around_star {
            planet_letters(i)
        } else {
            (i + 1).to_string()
        };
        system.body_mut(child)?.name = format!("{} {}", primary_name, suffix);
        let became_star = classify_planet(system, child, rng)?;
        if make_moons {
            make_planets_around(system, child, !became_star, rng)?;
        }
    }
    Ok(())
}

/// Build the full tree of a random system: stars, planets and moons.
pub fn build_random_tree(ctx: &GenerationContext, names: &dyn NameOracle) -> Result<StarSystem, GenerationError> {
    let catalog = StarCatalog::pick(ctx, names);
    let mut rng = ctx.system_rng();
    let mut system = build_stars(ctx, &catalog, &mut rng)?;

    for star in system.stars().to_vec() {
        make_planets_around(&mut system, star, true, &mut rng)?;
    }
    Ok(system)
}

// ========== Custom systems ==========

fn custom_body(path: SystemPath, template: &CustomBody) -> Body {
    let mut body = Body::new(path, template.body_type);
    body.name = template.name.clone();
    body.seed = template.seed;
    body.mass = template.mass;
    body.radius = match template.radius {
        Some(radius) => radius,
        None if template.body_type.is_star_or_gravpoint() => Fixed::ZERO,
        None => radius_from_mass(template.mass),
    };
    body.average_temp = template.temperature.unwrap_or(0);
    if template.body_type.is_star() {
        body.metallicity = template.body_type.star_metallicity();
    }
    body.semi_major_axis = template.semi_major_axis;
    body.eccentricity = template.eccentricity;
    body.inclination = template.inclination;
    body.axial_tilt = template.axial_tilt;
    body.rotation_period = template.rotation_period;
    let (orb_min, orb_max) = template.orbital_range();
    body.orb_min = orb_min;
    body.orb_max = orb_max;
    body
}

/// Build the tree of a hand-authored system exactly as written. The root
/// must be a star or a gravity point.
pub fn build_custom_tree(ctx: &GenerationContext, custom: &CustomSystem) -> Result<StarSystem, GenerationError> {
    if !custom.root.body_type.is_star_or_gravpoint() {
        return Err(GenerationError::MissingPrimary { body: BodyIndex::ROOT });
    }
    let path = ctx.path();
    let metadata = SystemMetadata::from_path(path, ctx.universe_seed()).with_name(custom.name.clone());
    let mut system = StarSystem::new(metadata, custom.seed, custom_body(path, &custom.root));
    if custom.root.body_type.is_star() {
        system.mark_star(BodyIndex::ROOT)?;
    }

    let mut queue = std::collections::VecDeque::from([(BodyIndex::ROOT, &custom.root)]);
    while let Some((index, template)) = queue.pop_front() {
        let parent = system.body(index)?;
        let parent_kg = parent.mass_kg();
        let around_barycentre = parent.is_gravpoint();

        for child in &template.children {
            let mut body = custom_body(path, child);
            let a = child.semi_major_axis.to_f64() * AU;
            let e = child.eccentricity.to_f64();
            if around_barycentre {
                let body_kg = body.mass_kg();
                body.orbit.set_shape_around_barycentre(a, parent_kg, body_kg, e);
            } else {
                body.orbit.set_shape_around_primary(a, parent_kg, e);
            }
            body.orbit.set_plane(rotate_x(child.inclination.to_f64()));

            let child_index = system.add_child(index, body)?;
            if child.body_type.is_star() {
                system.mark_star(child_index)?;
            }
            queue.push_back((child_index, child));
        }
    }
    Ok(system)
}
