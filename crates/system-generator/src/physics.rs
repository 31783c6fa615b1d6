//! Planetary physics pass.
//!
//! Runs top-down over every planet and moon once the tree exists: surface
//! properties, volatiles and greenhouse feedback, temperature, biosphere,
//! tidal spin-down, atmosphere and rings. Each body draws from its own
//! generator seeded from the context and the body seed.

use log::debug;
use planetary::biosphere::{draw_life, extremes_habitable, life_multiplier, may_host_life};
use planetary::temperature::{energy_per_unit_area, mean_orbital_distance, mean_separation};
use planetary::tidal::{Spin, apply_tidal_lock, inverse_lock_time, orbital_period_days};
use planetary::{
    Atmosphere, RadiativeBalance, Rings, SurfaceProperties, Volatiles, draw_volatile_budget,
};
use star_system::{BodyIndex, StarSystem};
use stellar::{BodyType, SuperType};
use units::Fixed;

use crate::context::GenerationContext;
use crate::error::GenerationError;

/// Where a body sits relative to the star it ultimately orbits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StellarOrbit {
    /// The nearest ancestor that is a star or gravity point.
    pub star: BodyIndex,
    /// Periapsis and apoapsis of the ancestor (or the body itself) that
    /// orbits `star` directly, in AU.
    pub orb_min: Fixed,
    pub orb_max: Fixed,
}

impl StellarOrbit {
    pub fn average_distance(&self) -> Fixed {
        mean_orbital_distance(self.orb_min, self.orb_max)
    }
}

/// Walk up from `body` to the first star or gravity point. A moon's distance
/// to its star is its planet's orbit, not its own.
pub fn find_star_and_orbital_range(
    system: &StarSystem,
    body: BodyIndex,
) -> Result<StellarOrbit, GenerationError> {
    let mut orbiter = body;
    let mut star = system
        .body(body)?
        .parent()
        .ok_or(GenerationError::MissingPrimary { body })?;

    while system.body(star)?.super_type() > SuperType::Star {
        orbiter = star;
        star = system
            .body(star)?
            .parent()
            .ok_or(GenerationError::MissingPrimary { body })?;
    }

    let orbiter = system.body(orbiter)?;
    Ok(StellarOrbit {
        star,
        orb_min: orbiter.orb_min,
        orb_max: orbiter.orb_max,
    })
}

/// The two bodies just below the lowest common ancestor of `first` and
/// `second`, given their paths to the root (leaf first). When one path ends
/// at the common ancestor, that ancestor itself stands in.
pub(crate) fn divergence(first: &[BodyIndex], second: &[BodyIndex]) -> Option<(BodyIndex, BodyIndex)> {
    if first.is_empty() || second.is_empty() {
        return None;
    }
    let mut f = first.len();
    let mut s = second.len();
    while f > 0 && s > 0 && first[f - 1] == second[s - 1] {
        f -= 1;
        s -= 1;
    }
    Some((first[f.saturating_sub(1)], second[s.saturating_sub(1)]))
}

/// Distance between `primary` (seen from a body `dist_to_primary` away) and
/// another star of the system, using the orbits around their lowest common
/// ancestor. A member of a co-orbiting pair stands in with the mean of its
/// orbital extremes.
fn separation_from_star(
    system: &StarSystem,
    primary: BodyIndex,
    dist_to_primary: Fixed,
    star: BodyIndex,
) -> Result<Fixed, GenerationError> {
    let first = system.path_to_root(primary)?;
    let second = system.path_to_root(star)?;
    let Some((fit, sit)) = divergence(&first, &second) else {
        return Ok(dist_to_primary);
    };
    let fit_body = system.body(fit)?;
    let sit_body = system.body(sit)?;

    let distance = if system.is_co_orbital_with(fit, sit)? {
        mean_orbital_distance(fit_body.orb_min, fit_body.orb_max)
    } else if system.is_co_orbital(sit)? {
        if fit == sit || system.is_ancestor_of(fit, sit)? {
            dist_to_primary
        } else {
            mean_orbital_distance(fit_body.orb_min, fit_body.orb_max)
        }
    } else if system.is_co_orbital(fit)? {
        mean_orbital_distance(sit_body.orb_min, sit_body.orb_max)
    } else {
        mean_separation(fit_body.semi_major_axis, sit_body.semi_major_axis)
    };
    Ok(distance)
}

/// Surface temperature in Kelvin of a body `dist_to_primary` AU from
/// `primary`, summing the flux of every other star in the system.
pub fn surface_temperature(
    system: &StarSystem,
    primary: BodyIndex,
    dist_to_primary: Fixed,
    albedo: Fixed,
    greenhouse: Fixed,
) -> Result<i32, GenerationError> {
    let star = system.body(primary)?;
    let mut energy = energy_per_unit_area(star.radius, star.average_temp, dist_to_primary);

    for &other in system.stars() {
        if other == primary {
            continue;
        }
        let distance = separation_from_star(system, primary, dist_to_primary, other)?;
        let other_star = system.body(other)?;
        energy += energy_per_unit_area(other_star.radius, other_star.average_temp, distance);
    }
    Ok(planetary::temperature::surface_temperature(energy, albedo, greenhouse))
}

/// Black-body temperature at the body's mean distance from its star.
pub fn blackbody_temperature(system: &StarSystem, body: BodyIndex) -> Result<i32, GenerationError> {
    let orbit = find_star_and_orbital_range(system, body)?;
    surface_temperature(system, orbit.star, orbit.average_distance(), Fixed::ZERO, Fixed::ZERO)
}

/// Run the physics pass over every planet and moon, parents first.
pub fn apply_physics(system: &mut StarSystem, ctx: &GenerationContext) -> Result<(), GenerationError> {
    let multiplier = life_multiplier(system.max_star_mass());
    let mut count = 0;
    for index in system.top_down() {
        if system.body(index)?.is_planet() {
            apply_body_physics(system, ctx, index, multiplier)?;
            count += 1;
        }
    }
    debug!("{}: physics for {} planets and moons", ctx.path(), count);
    Ok(())
}

fn apply_body_physics(
    system: &mut StarSystem,
    ctx: &GenerationContext,
    index: BodyIndex,
    life_multiplier: Fixed,
) -> Result<(), GenerationError> {
    let orbit = find_star_and_orbital_range(system, index)?;
    let average = orbit.average_distance();
    let blackbody = surface_temperature(system, orbit.star, average, Fixed::ZERO, Fixed::ZERO)?;

    let body = system.body(index)?;
    let parent_index = body.parent().ok_or(GenerationError::MissingPrimary { body: index })?;
    let parent = system.body(parent_index)?;
    let parent_is_star = parent.body_type.is_star_or_gravpoint();
    let metallicity_base = if parent_is_star {
        parent.body_type.star_metallicity()
    } else {
        let grandparent = parent
            .parent()
            .ok_or(GenerationError::MissingPrimary { body: index })?;
        system.body(grandparent)?.body_type.star_metallicity()
    };

    let body_type = body.body_type;
    let mass = body.mass;
    let seed = body.seed;
    let mut rng = ctx.physics_rng(seed);
    let surface = SurfaceProperties::draw(metallicity_base, mass, &mut rng);

    let mut average_temp = blackbody;
    let mut volatiles = Volatiles::default();
    let mut life = Fixed::ZERO;

    if body_type == BodyType::Terrestrial {
        let amount = draw_volatile_budget(mass, &mut rng);
        let balance = RadiativeBalance::from_volatiles(amount, blackbody);
        average_temp = surface_temperature(system, orbit.star, average, balance.albedo, balance.greenhouse)?;
        volatiles = Volatiles::partition(amount, average_temp);

        if may_host_life(volatiles.liquid, average_temp) {
            let coldest = surface_temperature(system, orbit.star, orbit.orb_max, balance.albedo, balance.greenhouse)?;
            let hottest = surface_temperature(system, orbit.star, orbit.orb_min, balance.albedo, balance.greenhouse)?;
            if extremes_habitable(coldest, hottest) {
                life = draw_life(life_multiplier, &mut rng);
            }
        }
    }

    let inverse_lock = inverse_lock_time(body.semi_major_axis, mass, parent.mass, parent_is_star, body.radius);
    let period = orbital_period_days(body.semi_major_axis, parent.mass, parent_is_star);
    let spin = apply_tidal_lock(
        Spin {
            rotation_period: body.rotation_period,
            axial_tilt: body.axial_tilt,
        },
        inverse_lock,
        period,
        body.inclination,
    );

    let body = system.body_mut(index)?;
    body.average_temp = average_temp;
    body.metallicity = surface.metallicity;
    body.volcanicity = surface.volcanicity;
    body.atmosphere_oxidizing = surface.atmosphere_oxidizing;
    body.volatiles = volatiles;
    body.life = life;
    body.rotation_period = spin.rotation_period;
    body.axial_tilt = spin.axial_tilt;
    body.atmosphere = Atmosphere::pick(body_type, volatiles.gas, surface.atmosphere_oxidizing);
    body.rings = Rings::pick(body_type, seed, false);
    Ok(())
}
