//! Station placement.
//!
//! Top-down over the populated tree: orbital stations in a band between the
//! body's surface and a quarter of its Hill sphere, surface stations at
//! random points on the ground. Every inhabited body ends up with at least
//! one station.

use std::f64::consts::{PI, TAU};

use log::debug;
use nalgebra::Matrix3;
use star_system::{Body, BodyIndex, StarSystem, SystemPath, rotate_y, rotate_z};
use stellar::BodyType;
use units::constants::AU;
use units::{Fixed, Random, au_earth_radius, fixed_pi};

use crate::config::GeneratorConfig;
use crate::context::GenerationContext;
use crate::error::GenerationError;
use crate::names::NameOracle;

/// Bodies below this population get no stations.
pub fn min_station_population() -> Fixed {
    Fixed::from_ratio(1, 1000)
}

/// Naming retries beyond this are worth a log line.
const SLOW_NAMING_ATTEMPTS: u32 = 8;

/// Add stations around every sufficiently populated body. Returns how many
/// were created.
pub fn add_stations(
    system: &mut StarSystem,
    ctx: &GenerationContext,
    config: &GeneratorConfig,
    names: &dyn NameOracle,
) -> Result<usize, GenerationError> {
    let mut added = 0;
    for index in system.top_down() {
        added += add_stations_to_body(system, ctx, config, names, index)?;
    }
    debug!("{}: {} stations", ctx.path(), added);
    Ok(added)
}

fn new_station(path: SystemPath, body_type: BodyType, seed: u32, average_temp: i32) -> Body {
    let mut station = Body::new(path, body_type);
    station.seed = seed;
    station.average_temp = average_temp;
    station.mass = Fixed::ZERO;
    station
}

fn add_stations_to_body(
    system: &mut StarSystem,
    ctx: &GenerationContext,
    config: &GeneratorConfig,
    names: &dyn NameOracle,
    index: BodyIndex,
) -> Result<usize, GenerationError> {
    let body = system.body(index)?;
    if body.population < min_station_population() {
        return Ok(0);
    }

    let path = system.path();
    let population = body.population;
    let average_temp = body.average_temp;
    let body_kg = body.mass_kg();
    let mut orbit_max = Fixed::from_ratio(1, 4) * system.hill_radius(index)?;
    let orbit_min = 4 * (body.radius * au_earth_radius());
    // keep clear of the innermost moon
    if let Some(&first) = body.children().first() {
        orbit_max = orbit_max.min(Fixed::from_ratio(1, 2) * system.body(first)?.orb_min);
    }

    let mut rng = ctx.station_rng(body.seed);
    let mut name_rng = ctx.station_rng(body.seed);
    let mut created = 0;

    let mut budget = population + rng.fixed();
    if orbit_min < orbit_max {
        budget -= rng.fixed();
        let mut count: u32 = 0;
        while budget >= Fixed::ZERO {
            count += 1;
            budget -= rng.fixed();
        }

        let semi_major_axis = orbit_min + (orbit_max - orbit_min) / 4;
        for i in 0..count {
            let mut station = new_station(path, BodyType::StarportOrbital, rng.int32(), average_temp);
            station.rotation_period = Fixed::from_ratio(1, 3600);
            station.semi_major_axis = semi_major_axis;
            station.eccentricity = Fixed::ZERO;
            station.axial_tilt = Fixed::ZERO;
            station.inclination = Fixed::ZERO;
            station.orb_min = semi_major_axis;
            station.orb_max = semi_major_axis;
            station
                .orbit
                .set_shape_around_primary(semi_major_axis.to_f64() * AU, body_kg, 0.0);
            let plane = if count > 1 {
                rotate_z(i as f64 * (PI / (count - 1) as f64))
            } else {
                Matrix3::identity()
            };
            station.orbit.set_plane(plane);

            let station_index = system.add_child_front(index, station)?;
            let name = unique_station_name(system, station_index, names, &mut name_rng, config.max_name_attempts)?;
            system.body_mut(station_index)?.name = name;
            created += 1;
        }
    }

    let mut budget = population + rng.fixed() * 3;
    for _ in 0..config.max_surface_stations {
        budget -= rng.fixed();
        if budget < Fixed::ZERO {
            break;
        }
        add_surface_station(system, index, rng.int32(), average_temp, names, &mut name_rng, config)?;
        created += 1;
    }

    if created == 0 {
        add_surface_station(system, index, rng.int32(), average_temp, names, &mut name_rng, config)?;
        created = 1;
    }
    Ok(created)
}

fn add_surface_station(
    system: &mut StarSystem,
    parent: BodyIndex,
    seed: u32,
    average_temp: i32,
    names: &dyn NameOracle,
    name_rng: &mut Random,
    config: &GeneratorConfig,
) -> Result<BodyIndex, GenerationError> {
    let mut station = new_station(system.path(), BodyType::StarportSurface, seed, average_temp);
    position_settlement(&mut station);
    let index = system.add_child_front(parent, station)?;
    let name = unique_station_name(system, index, names, name_rng, config.max_name_attempts)?;
    system.body_mut(index)?.name = name;
    Ok(index)
}

/// Pick a spot on the parent's surface from the station's own seed. The
/// latitude is stored as the inclination and the longitude as the orbital
/// offset.
pub fn position_settlement(station: &mut Body) {
    let mut rng = Random::new(station.seed);
    let r2 = rng.double();
    let r1 = rng.double();
    station.orbit.set_plane(rotate_z(TAU * r1) * rotate_y(TAU * r2));
    station.inclination = Fixed::from_ratio((r1 * 10_000.0) as i64, 10_000) + fixed_pi() / 2;
    station.orbital_offset = fixed_pi() / 2;
}

/// Ask the oracle for names until one is not used by any other station.
pub fn unique_station_name(
    system: &StarSystem,
    station: BodyIndex,
    names: &dyn NameOracle,
    rng: &mut Random,
    max_attempts: u32,
) -> Result<String, GenerationError> {
    for attempt in 1..=max_attempts {
        let candidate = names.body_name(system, station, rng);
        let taken = system
            .space_stations()
            .iter()
            .filter(|&&other| other != station)
            .filter_map(|&other| system.get(other))
            .any(|other| other.name == candidate);
        if !taken {
            if attempt > SLOW_NAMING_ATTEMPTS {
                debug!("station {} named after {} attempts", station, attempt);
            }
            return Ok(candidate);
        }
    }
    Err(GenerationError::NameExhausted {
        body: station,
        attempts: max_attempts,
    })
}
