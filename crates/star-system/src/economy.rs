//! Commodity table and per-system trade levels.

use serde::{Deserialize, Serialize};
use std::fmt;
use units::Fixed;

/// Economy categories as a bit set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EconType(u8);

impl EconType {
    pub const NONE: EconType = EconType(0);
    pub const MINING: EconType = EconType(1 << 0);
    pub const AGRICULTURE: EconType = EconType(1 << 1);
    pub const INDUSTRY: EconType = EconType(1 << 2);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: EconType) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    pub const fn union(self, other: EconType) -> EconType {
        EconType(self.0 | other.0)
    }
}

impl fmt::Display for EconType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if *self == EconType::NONE {
            return write!(f, "NONE");
        }
        let names = [
            (EconType::AGRICULTURE, "AGRICULTURE"),
            (EconType::INDUSTRY, "INDUSTRY"),
            (EconType::MINING, "MINING"),
        ];
        let parts: Vec<&str> = names
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}

/// Tradeable goods, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Commodity {
    Hydrogen,
    LiquidOxygen,
    MetalOre,
    CarbonOre,
    MetalAlloys,
    Plastics,
    FruitAndVeg,
    AnimalMeat,
    LiveAnimals,
    Liquor,
    Grain,
    Textiles,
    Fertilizer,
    Water,
    Medicines,
    ConsumerGoods,
    Computers,
    Robots,
    PreciousMetals,
    IndustrialMachinery,
    FarmMachinery,
    MiningMachinery,
    AirProcessors,
    Slaves,
    HandWeapons,
    BattleWeapons,
    NerveGas,
    Narcotics,
    MilitaryFuel,
    Rubbish,
    Radioactives,
}

/// Static economy data for one commodity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommodityInfo {
    pub econ_type: EconType,
    /// At most two inputs consumed by production.
    pub inputs: &'static [Commodity],
}

const fn info(econ_type: EconType, inputs: &'static [Commodity]) -> CommodityInfo {
    CommodityInfo { econ_type, inputs }
}

use Commodity::*;

#[rustfmt::skip]
static COMMODITY_DATA: [CommodityInfo; Commodity::COUNT] = [
    info(EconType::INDUSTRY, &[Water]),                               // hydrogen
    info(EconType::INDUSTRY, &[Water, IndustrialMachinery]),          // liquid oxygen
    info(EconType::MINING, &[MiningMachinery]),                       // metal ore
    info(EconType::MINING, &[MiningMachinery]),                       // carbon ore
    info(EconType::INDUSTRY, &[MetalOre, IndustrialMachinery]),       // metal alloys
    info(EconType::INDUSTRY, &[CarbonOre, IndustrialMachinery]),      // plastics
    info(EconType::AGRICULTURE, &[FarmMachinery, Fertilizer]),        // fruit and veg
    info(EconType::AGRICULTURE, &[FarmMachinery, Fertilizer]),        // animal meat
    info(EconType::AGRICULTURE, &[FarmMachinery, Fertilizer]),        // live animals
    info(EconType::AGRICULTURE, &[FarmMachinery, Fertilizer]),        // liquor
    info(EconType::AGRICULTURE, &[FarmMachinery, Fertilizer]),        // grain
    info(EconType::INDUSTRY, &[Plastics]),                            // textiles
    info(EconType::INDUSTRY, &[CarbonOre]),                           // fertilizer
    info(EconType::MINING, &[MiningMachinery]),                       // water
    info(EconType::INDUSTRY, &[Computers, CarbonOre]),                // medicines
    info(EconType::INDUSTRY, &[Plastics, Textiles]),                  // consumer goods
    info(EconType::INDUSTRY, &[PreciousMetals, IndustrialMachinery]), // computers
    info(EconType::INDUSTRY, &[Plastics, Computers]),                 // robots
    info(EconType::MINING, &[MiningMachinery]),                       // precious metals
    info(EconType::INDUSTRY, &[MetalAlloys, Robots]),                 // industrial machinery
    info(EconType::INDUSTRY, &[MetalAlloys, Robots]),                 // farm machinery
    info(EconType::INDUSTRY, &[MetalAlloys, Robots]),                 // mining machinery
    info(EconType::INDUSTRY, &[Plastics, IndustrialMachinery]),       // air processors
    info(EconType::AGRICULTURE, &[]),                                 // slaves
    info(EconType::INDUSTRY, &[Computers]),                           // hand weapons
    info(EconType::INDUSTRY, &[IndustrialMachinery, MetalAlloys]),    // battle weapons
    info(EconType::INDUSTRY, &[Medicines]),                           // nerve gas
    info(EconType::INDUSTRY, &[Medicines]),                           // narcotics
    info(EconType::INDUSTRY, &[Hydrogen]),                            // military fuel
    info(EconType::INDUSTRY, &[]),                                    // rubbish
    info(EconType::INDUSTRY, &[]),                                    // radioactives
];

impl Commodity {
    pub const COUNT: usize = 31;

    pub const ALL: [Commodity; Self::COUNT] = [
        Hydrogen,
        LiquidOxygen,
        MetalOre,
        CarbonOre,
        MetalAlloys,
        Plastics,
        FruitAndVeg,
        AnimalMeat,
        LiveAnimals,
        Liquor,
        Grain,
        Textiles,
        Fertilizer,
        Water,
        Medicines,
        ConsumerGoods,
        Computers,
        Robots,
        PreciousMetals,
        IndustrialMachinery,
        FarmMachinery,
        MiningMachinery,
        AirProcessors,
        Slaves,
        HandWeapons,
        BattleWeapons,
        NerveGas,
        Narcotics,
        MilitaryFuel,
        Rubbish,
        Radioactives,
    ];

    /// What every settled body consumes.
    pub const CONSUMABLES: [Commodity; 10] = [
        AirProcessors,
        Grain,
        FruitAndVeg,
        AnimalMeat,
        Liquor,
        ConsumerGoods,
        Medicines,
        HandWeapons,
        Narcotics,
        LiquidOxygen,
    ];

    pub const fn ordinal(self) -> usize {
        self as usize
    }

    pub fn info(self) -> &'static CommodityInfo {
        &COMMODITY_DATA[self.ordinal()]
    }

    pub fn is_consumable(self) -> bool {
        Self::CONSUMABLES.contains(&self)
    }

    /// Consumables a world with a rich biosphere provides for itself.
    pub fn is_self_supplied_with_life(self) -> bool {
        matches!(
            self,
            AirProcessors | LiquidOxygen | Grain | FruitAndVeg | AnimalMeat
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            Hydrogen => "HYDROGEN",
            LiquidOxygen => "LIQUID_OXYGEN",
            MetalOre => "METAL_ORE",
            CarbonOre => "CARBON_ORE",
            MetalAlloys => "METAL_ALLOYS",
            Plastics => "PLASTICS",
            FruitAndVeg => "FRUIT_AND_VEG",
            AnimalMeat => "ANIMAL_MEAT",
            LiveAnimals => "LIVE_ANIMALS",
            Liquor => "LIQUOR",
            Grain => "GRAIN",
            Textiles => "TEXTILES",
            Fertilizer => "FERTILIZER",
            Water => "WATER",
            Medicines => "MEDICINES",
            ConsumerGoods => "CONSUMER_GOODS",
            Computers => "COMPUTERS",
            Robots => "ROBOTS",
            PreciousMetals => "PRECIOUS_METALS",
            IndustrialMachinery => "INDUSTRIAL_MACHINERY",
            FarmMachinery => "FARM_MACHINERY",
            MiningMachinery => "MINING_MACHINERY",
            AirProcessors => "AIR_PROCESSORS",
            Slaves => "SLAVES",
            HandWeapons => "HAND_WEAPONS",
            BattleWeapons => "BATTLE_WEAPONS",
            NerveGas => "NERVE_GAS",
            Narcotics => "NARCOTICS",
            MilitaryFuel => "MILITARY_FUEL",
            Rubbish => "RUBBISH",
            Radioactives => "RADIOACTIVES",
        }
    }
}

impl fmt::Display for Commodity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Signed supply/demand bias per commodity. Negative means surplus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeLevels([i32; Commodity::COUNT]);

impl Default for TradeLevels {
    fn default() -> Self {
        Self([0; Commodity::COUNT])
    }
}

impl TradeLevels {
    pub fn get(&self, commodity: Commodity) -> i32 {
        self.0[commodity.ordinal()]
    }

    pub fn set(&mut self, commodity: Commodity, level: i32) {
        self.0[commodity.ordinal()] = level;
    }

    pub fn add(&mut self, commodity: Commodity, delta: i32) {
        let slot = &mut self.0[commodity.ordinal()];
        *slot = slot.saturating_add(delta);
    }

    /// Largest absolute level across all commodities.
    pub fn max_magnitude(&self) -> i32 {
        self.0.iter().map(|level| level.saturating_abs()).max().unwrap_or(0)
    }

    /// Rescale so the largest magnitude becomes `limit`, truncating toward
    /// zero. Leaves an all-zero table untouched and reports whether it
    /// rescaled.
    pub fn normalise(&mut self, limit: i32) -> bool {
        let maximum = self.max_magnitude() as i64;
        if maximum == 0 {
            return false;
        }
        for level in self.0.iter_mut() {
            *level = (*level as i64 * limit as i64 / maximum) as i32;
        }
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (Commodity, i32)> + '_ {
        Commodity::ALL.iter().map(move |c| (*c, self.get(*c)))
    }
}

/// Aggregate economy of a system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemEconomy {
    /// Billions.
    pub total_population: Fixed,
    pub trade_levels: TradeLevels,
    pub industrial: Fixed,
    pub agricultural: Fixed,
    pub metallicity: Fixed,
    /// How close the system is to the human core, in `(0, 1]`.
    pub human_proximity: Fixed,
    pub econ_type: EconType,
}

impl SystemEconomy {
    /// The dominant activity: industry if it beats both mining and
    /// agriculture, otherwise mining if it beats agriculture.
    pub fn dominant_econ_type(&self) -> EconType {
        if self.industrial > self.metallicity && self.industrial > self.agricultural {
            EconType::INDUSTRY
        } else if self.metallicity > self.agricultural {
            EconType::MINING
        } else {
            EconType::AGRICULTURE
        }
    }
}
