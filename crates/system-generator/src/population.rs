//! Population and economy pass.
//!
//! Bottom-up over the finished tree. Each habitable body gets a population
//! from its commodity affinities and pushes supply and demand into the
//! system's trade levels; the system economy is settled once every body has
//! reported.

use log::debug;
use star_system::{BodyIndex, Commodity, EconType, StarSystem, SystemEconomy};
use stellar::BodyType;
use units::constants::MAX_COMMODITY_BASE_PRICE_ADJUSTMENT;
use units::{CELSIUS_CENTIKELVIN, Fixed};

use crate::context::GenerationContext;
use crate::error::GenerationError;
use crate::names::NameOracle;

/// Population every orbital starport carries even on a dead world.
pub fn starport_population_floor() -> Fixed {
    Fixed::from_ratio(1, 100_000)
}

/// Whether a body of `body_type` at `average_temp` Kelvin can be settled.
pub fn is_settleable(body_type: BodyType, average_temp: i32) -> bool {
    let centikelvin = average_temp as i64 * 100;
    let too_hot = centikelvin > CELSIUS_CENTIKELVIN + 10_000;
    let too_cold = average_temp < 100;
    !too_hot && !too_cold && matches!(body_type, BodyType::Terrestrial | BodyType::Asteroid)
}

/// Agricultural suitability of a living world, falling off linearly below
/// `ideal_celsius` over `span_celsius`.
///
/// The shortfall is counted in whole degrees, truncated toward zero.
pub(crate) fn agricultural_suitability(average_temp: i32, ideal_celsius: i64, span_celsius: i64) -> Fixed {
    let deficit = (CELSIUS_CENTIKELVIN + ideal_celsius * 100 - average_temp as i64 * 100) / 100;
    (Fixed::ONE - Fixed::from_ratio(deficit, span_celsius)).clamp(Fixed::ZERO, Fixed::ONE)
}

/// Run the population pass and settle the system economy.
///
/// With `rename` set, every body that ends up populated is renamed through
/// the oracle.
pub fn populate(
    system: &mut StarSystem,
    ctx: &GenerationContext,
    names: &dyn NameOracle,
    rename: bool,
) -> Result<(), GenerationError> {
    system.unexplored = !ctx.is_explored();

    let mut rng = ctx.system_rng();
    let mut economy = SystemEconomy {
        human_proximity: ctx.human_proximity(),
        industrial: rng.fixed(),
        agricultural: Fixed::ZERO,
        metallicity: system.root().body_type.star_metallicity(),
        ..SystemEconomy::default()
    };

    let mut total = Fixed::ZERO;
    for index in system.bottom_up() {
        total += populate_body(system, ctx, names, index, rename, &mut economy)?;
    }
    economy.total_population = total;

    let limit = MAX_COMMODITY_BASE_PRICE_ADJUSTMENT as i32;
    if economy.trade_levels.normalise(limit) {
        for commodity in Commodity::ALL {
            economy.trade_levels.add(commodity, rng.int32_range(-5, 5));
        }
    }
    economy.econ_type = economy.dominant_econ_type();

    debug!(
        "{}: population {} ({})",
        ctx.path(),
        economy.total_population,
        economy.econ_type
    );
    system.economy = economy;
    Ok(())
}

fn set_unpopulated(system: &mut StarSystem, index: BodyIndex, population: Fixed) -> Result<Fixed, GenerationError> {
    let body = system.body_mut(index)?;
    body.population = population;
    body.agricultural = Fixed::ZERO;
    body.human_activity = Fixed::ZERO;
    Ok(population)
}

/// Population of one body, with its trade contributions added to `economy`.
fn populate_body(
    system: &mut StarSystem,
    ctx: &GenerationContext,
    names: &dyn NameOracle,
    index: BodyIndex,
    rename: bool,
    economy: &mut SystemEconomy,
) -> Result<Fixed, GenerationError> {
    let body = system.body(index)?;
    if system.unexplored || body.is_gravpoint() {
        return set_unpopulated(system, index, Fixed::ZERO);
    }

    let body_type = body.body_type;
    let average_temp = body.average_temp;
    let life = body.life;
    let metallicity = body.metallicity;
    let mut rng = ctx.population_rng(body.seed);
    let mut name_rng = ctx.population_rng(body.seed);

    if !is_settleable(body_type, average_temp) {
        let floor = if body_type == BodyType::StarportOrbital {
            starport_population_floor()
        } else {
            Fixed::ZERO
        };
        return set_unpopulated(system, index, floor);
    }

    let agricultural = if life > Fixed::from_ratio(9, 10) {
        let suitability = agricultural_suitability(average_temp, 25, 40);
        economy.agricultural += 2 * suitability;
        suitability
    } else if life > Fixed::from_ratio(1, 2) {
        let suitability = agricultural_suitability(average_temp, 30, 50);
        economy.agricultural += suitability;
        suitability
    } else {
        // nothing to farm and not worth mining
        if metallicity < Fixed::from_ratio(1, 2) && metallicity < Fixed::ONE - economy.human_proximity {
            return set_unpopulated(system, index, Fixed::ZERO);
        }
        Fixed::ZERO
    };

    let mut population = Fixed::ZERO;
    for commodity in Commodity::ALL {
        let info = commodity.info();
        let mut affinity = Fixed::ONE;
        if info.econ_type.contains(EconType::AGRICULTURE) {
            affinity *= 2 * agricultural;
        }
        if info.econ_type.contains(EconType::INDUSTRY) {
            affinity *= economy.industrial;
        }
        if info.econ_type.contains(EconType::MINING) {
            affinity *= metallicity;
        }
        affinity *= rng.fixed();
        if commodity.is_consumable() {
            affinity = affinity * 2;
        }

        population += affinity * economy.human_proximity;
        let amount = (affinity * 256).to_i32();
        economy.trade_levels.add(commodity, -2 * amount);
        for &input in info.inputs {
            economy.trade_levels.add(input, amount);
        }
    }

    if rename && population > Fixed::ZERO {
        let name = names.body_name(system, index, &mut name_rng);
        system.body_mut(index)?.name = name;
    }

    for commodity in Commodity::CONSUMABLES {
        if life > Fixed::from_ratio(1, 2) && commodity.is_self_supplied_with_life() {
            continue;
        }
        economy.trade_levels.add(commodity, rng.int32_range(32, 128));
    }

    // outdoor worlds hold far more people
    let population = Fixed::from_ratio(1, 10) * population + population * agricultural;

    let body = system.body_mut(index)?;
    body.population = population;
    body.agricultural = agricultural;
    body.human_activity = if population > Fixed::ZERO {
        economy.human_proximity
    } else {
        Fixed::ZERO
    };
    Ok(population)
}
