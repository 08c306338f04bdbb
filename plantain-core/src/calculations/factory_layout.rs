//! Factory layout design.
//!
//! Two complementary views:
//!
//! * a floor-area split of the total factory size by zone percentage, with
//!   the benefits of the chosen automation level;
//! * a placed layout of sixteen stations for a capacity tier and an
//!   arrangement (U-shape, linear, cellular), with diagram geometry and a
//!   check of the stations against the factory footprint.
//!
//! Station coordinates and sizes are in metres.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::common::{
    HUNDRED, Overflow, checked_div, checked_mul, percent_of, round_whole,
};
use crate::models::ProcessStep;
use Station::*;

/// Width of the diagram canvas in metres.
pub const CANVAS_WIDTH: Decimal = dec!(70);

/// Height of the diagram canvas in metres.
pub const CANVAS_HEIGHT: Decimal = dec!(50);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("factory {name} must be positive, got {value}")]
    InvalidDimension { name: &'static str, value: Decimal },

    #[error("factory size must be non-negative, got {0}")]
    NegativeFactorySize(Decimal),

    #[error(transparent)]
    Overflow(#[from] Overflow),
}

// =============================================================================
// Area allocation
// =============================================================================

const AREA_SHARES: &[(&str, u32)] = &[
    ("Raw Material Storage", 20),
    ("Processing Area", 35),
    ("Packaging Section", 15),
    ("Finished Goods Storage", 20),
    ("Office & Admin", 5),
    ("Utilities & Maintenance", 5),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaAllocation {
    pub name: String,
    pub percent: u32,
    /// Rounded to whole square feet.
    pub square_feet: Decimal,
}

/// Splits a factory floor of `factory_size` square feet into zones.
///
/// # Errors
///
/// Returns [`LayoutError::NegativeFactorySize`] for a negative size and
/// [`LayoutError::Overflow`] when a share exceeds the decimal range.
///
/// ```
/// use rust_decimal_macros::dec;
/// use plantain_core::calculations::factory_layout::area_allocation;
///
/// let areas = area_allocation(dec!(10000)).unwrap();
/// assert_eq!(areas[1].name, "Processing Area");
/// assert_eq!(areas[1].square_feet, dec!(3500));
/// ```
pub fn area_allocation(factory_size: Decimal) -> Result<Vec<AreaAllocation>, LayoutError> {
    if factory_size < Decimal::ZERO {
        return Err(LayoutError::NegativeFactorySize(factory_size));
    }
    AREA_SHARES
        .iter()
        .map(|(name, percent)| -> Result<AreaAllocation, LayoutError> {
            let share = checked_mul(factory_size, Decimal::from(*percent))?;
            Ok(AreaAllocation {
                name: (*name).to_string(),
                percent: *percent,
                square_feet: round_whole(checked_div(share, HUNDRED)?),
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutomationLevel {
    Manual,
    #[default]
    Semi,
    Full,
}

impl AutomationLevel {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manual" => Some(Self::Manual),
            "semi" => Some(Self::Semi),
            "full" => Some(Self::Full),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Manual => "Manual Operations",
            Self::Semi => "Semi-Automated",
            Self::Full => "Fully Automated",
        }
    }

    /// Benefits (or, for manual operation, trade-offs) of the level.
    pub fn benefits(&self) -> &'static [&'static str] {
        match self {
            Self::Full => &[
                "40-50% reduction in labor costs",
                "Consistent product quality",
                "Higher production efficiency",
                "Reduced contamination risk",
            ],
            Self::Semi => &[
                "20-30% reduction in labor costs",
                "Improved product consistency",
                "Moderate efficiency gains",
            ],
            Self::Manual => &[
                "Lower initial investment",
                "Higher labor requirements",
                "Variable product quality",
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EquipmentCategory {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

/// Equipment shopping list grouped by process area.
pub fn equipment_categories() -> &'static [EquipmentCategory] {
    &[
        EquipmentCategory {
            category: "Cleaning & Preparation",
            items: &["Plantain Washer", "Peeling Machine", "Slicing Equipment"],
        },
        EquipmentCategory {
            category: "Processing",
            items: &["Steam Blancher", "Dehydrator/Dryer", "Grinding Mill"],
        },
        EquipmentCategory {
            category: "Packaging",
            items: &["Sieving Machine", "Packaging Machine", "Sealing Equipment"],
        },
        EquipmentCategory {
            category: "Quality Control",
            items: &["Moisture Analyzer", "Testing Laboratory", "Weighing Scales"],
        },
        EquipmentCategory {
            category: "Utilities",
            items: &["Boiler System", "Generator", "Water Treatment Plant"],
        },
    ]
}

// =============================================================================
// Equipment tiers
// =============================================================================

/// Plant throughput tiers with their own equipment sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CapacityTier {
    Kg500,
    Kg1000,
    Kg2000,
    Kg5000,
}

impl CapacityTier {
    pub fn all() -> &'static [CapacityTier] {
        &[Self::Kg500, Self::Kg1000, Self::Kg2000, Self::Kg5000]
    }

    /// Exact tier match; any other capacity sizes like the 1000 kg/day plant.
    pub fn from_capacity(kg_per_day: u32) -> Self {
        match kg_per_day {
            500 => Self::Kg500,
            2000 => Self::Kg2000,
            5000 => Self::Kg5000,
            1000 => Self::Kg1000,
            other => {
                debug!(capacity = other, "no equipment tier for capacity, using 1000 kg/day");
                Self::Kg1000
            }
        }
    }

    pub fn kg_per_day(&self) -> u32 {
        match self {
            Self::Kg500 => 500,
            Self::Kg1000 => 1000,
            Self::Kg2000 => 2000,
            Self::Kg5000 => 5000,
        }
    }

    pub fn equipment(&self) -> &'static EquipmentSet {
        match self {
            Self::Kg500 => &TIER_500,
            Self::Kg1000 => &TIER_1000,
            Self::Kg2000 => &TIER_2000,
            Self::Kg5000 => &TIER_5000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EquipmentSpec {
    pub capacity: &'static str,
    pub width: u32,
    pub height: u32,
    /// Rated power in kW; `None` for unpowered storage.
    pub power_kw: Option<u32>,
    pub throughput_kg_hr: Option<u32>,
}

/// Sizing for the eight process stations of one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EquipmentSet {
    pub raw_storage: EquipmentSpec,
    pub washer: EquipmentSpec,
    pub slicer: EquipmentSpec,
    pub blancher: EquipmentSpec,
    pub dryer: EquipmentSpec,
    pub mill: EquipmentSpec,
    pub sieve: EquipmentSpec,
    pub packaging: EquipmentSpec,
}

const fn storage(
    capacity: &'static str,
    width: u32,
    height: u32,
) -> EquipmentSpec {
    EquipmentSpec {
        capacity,
        width,
        height,
        power_kw: None,
        throughput_kg_hr: None,
    }
}

const fn machine(
    capacity: &'static str,
    width: u32,
    height: u32,
    power_kw: u32,
    throughput_kg_hr: u32,
) -> EquipmentSpec {
    EquipmentSpec {
        capacity,
        width,
        height,
        power_kw: Some(power_kw),
        throughput_kg_hr: Some(throughput_kg_hr),
    }
}

const TIER_500: EquipmentSet = EquipmentSet {
    raw_storage: storage("2 tons", 8, 6),
    washer: machine("100 kg/hr", 4, 3, 2, 100),
    slicer: machine("80 kg/hr", 3, 2, 3, 80),
    blancher: machine("90 kg/hr", 5, 3, 15, 90),
    dryer: machine("60 kg/hr", 8, 4, 25, 60),
    mill: machine("100 kg/hr", 4, 3, 8, 100),
    sieve: machine("120 kg/hr", 3, 2, 2, 120),
    packaging: machine("150 kg/hr", 6, 4, 3, 150),
};

const TIER_1000: EquipmentSet = EquipmentSet {
    raw_storage: storage("4 tons", 10, 8),
    washer: machine("200 kg/hr", 6, 4, 4, 200),
    slicer: machine("150 kg/hr", 4, 3, 5, 150),
    blancher: machine("180 kg/hr", 7, 4, 30, 180),
    dryer: machine("120 kg/hr", 12, 6, 45, 120),
    mill: machine("200 kg/hr", 5, 4, 15, 200),
    sieve: machine("250 kg/hr", 4, 3, 3, 250),
    packaging: machine("300 kg/hr", 8, 5, 5, 300),
};

const TIER_2000: EquipmentSet = EquipmentSet {
    raw_storage: storage("8 tons", 12, 10),
    washer: machine("400 kg/hr", 8, 5, 8, 400),
    slicer: machine("300 kg/hr", 5, 4, 10, 300),
    blancher: machine("350 kg/hr", 10, 5, 60, 350),
    dryer: machine("250 kg/hr", 15, 8, 90, 250),
    mill: machine("400 kg/hr", 6, 5, 25, 400),
    sieve: machine("500 kg/hr", 5, 4, 5, 500),
    packaging: machine("600 kg/hr", 10, 6, 8, 600),
};

const TIER_5000: EquipmentSet = EquipmentSet {
    raw_storage: storage("20 tons", 15, 12),
    washer: machine("1000 kg/hr", 10, 6, 15, 1000),
    slicer: machine("750 kg/hr", 6, 5, 20, 750),
    blancher: machine("850 kg/hr", 12, 6, 120, 850),
    dryer: machine("600 kg/hr", 18, 10, 180, 600),
    mill: machine("1000 kg/hr", 8, 6, 50, 1000),
    sieve: machine("1200 kg/hr", 6, 5, 10, 1200),
    packaging: machine("1500 kg/hr", 12, 8, 15, 1500),
};

// =============================================================================
// Stations and arrangements
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneKind {
    Storage,
    Processing,
    Quality,
    Admin,
    Utility,
    Facility,
    Maintenance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Station {
    RawMaterialStorage,
    WashingStation,
    SlicingMachine,
    BlanchingUnit,
    DryingUnit,
    MillingMachine,
    SievingUnit,
    PackagingStation,
    FinishedGoodsStorage,
    QualityControlLab,
    Office,
    GeneratorHouse,
    WaterTreatment,
    Washroom,
    ElectricalRoom,
    MaintenanceWorkshop,
}

/// Fixed size and rating of a station that does not scale with capacity.
struct FixedStation {
    width: u32,
    height: u32,
    capacity: &'static str,
    power: &'static str,
}

impl Station {
    pub fn name(&self) -> &'static str {
        match self {
            Self::RawMaterialStorage => "Raw Material Storage",
            Self::WashingStation => "Washing Station",
            Self::SlicingMachine => "Slicing Machine",
            Self::BlanchingUnit => "Blanching Unit",
            Self::DryingUnit => "Drying Unit",
            Self::MillingMachine => "Milling Machine",
            Self::SievingUnit => "Sieving Unit",
            Self::PackagingStation => "Packaging Station",
            Self::FinishedGoodsStorage => "Finished Goods Storage",
            Self::QualityControlLab => "Quality Control Lab",
            Self::Office => "Office",
            Self::GeneratorHouse => "Generator House",
            Self::WaterTreatment => "Water Treatment",
            Self::Washroom => "Washroom",
            Self::ElectricalRoom => "Electrical Room",
            Self::MaintenanceWorkshop => "Maintenance Workshop",
        }
    }

    pub fn kind(&self) -> ZoneKind {
        match self {
            Self::RawMaterialStorage | Self::FinishedGoodsStorage => ZoneKind::Storage,
            Self::QualityControlLab => ZoneKind::Quality,
            Self::Office => ZoneKind::Admin,
            Self::GeneratorHouse | Self::WaterTreatment | Self::ElectricalRoom => {
                ZoneKind::Utility
            }
            Self::Washroom => ZoneKind::Facility,
            Self::MaintenanceWorkshop => ZoneKind::Maintenance,
            _ => ZoneKind::Processing,
        }
    }

    /// Equipment sizing for process stations; `None` for fixed stations.
    fn equipment<'a>(
        &self,
        set: &'a EquipmentSet,
    ) -> Option<&'a EquipmentSpec> {
        match self {
            Self::RawMaterialStorage => Some(&set.raw_storage),
            Self::WashingStation => Some(&set.washer),
            Self::SlicingMachine => Some(&set.slicer),
            Self::BlanchingUnit => Some(&set.blancher),
            Self::DryingUnit => Some(&set.dryer),
            Self::MillingMachine => Some(&set.mill),
            Self::SievingUnit => Some(&set.sieve),
            Self::PackagingStation => Some(&set.packaging),
            _ => None,
        }
    }

    fn fixed(&self) -> FixedStation {
        let (width, height, capacity, power) = match self {
            Self::FinishedGoodsStorage => (10, 8, "5 tons", "N/A"),
            Self::QualityControlLab => (8, 6, "50 samples/day", "5 kW"),
            Self::Office => (8, 6, "10 persons", "3 kW"),
            Self::GeneratorHouse => (6, 4, "500 kVA", "Generator"),
            Self::WaterTreatment => (6, 4, "10,000L/day", "8 kW"),
            Self::Washroom => (4, 4, "6 persons", "2 kW"),
            Self::ElectricalRoom => (4, 4, "800A Panel", "Distribution"),
            Self::MaintenanceWorkshop => (6, 4, "Tools & Spare Parts", "5 kW"),
            _ => (0, 0, "N/A", "N/A"),
        };
        FixedStation {
            width,
            height,
            capacity,
            power,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutType {
    #[default]
    UShape,
    Linear,
    Cellular,
}

impl LayoutType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "u-shape" | "ushape" | "u" => Some(Self::UShape),
            "linear" => Some(Self::Linear),
            "cellular" => Some(Self::Cellular),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::UShape => "U-Shape",
            Self::Linear => "Linear",
            Self::Cellular => "Cellular",
        }
    }

    fn positions(&self) -> &'static [(Station, u32, u32); 16] {
        match self {
            Self::UShape => &U_SHAPE,
            Self::Linear => &LINEAR,
            Self::Cellular => &CELLULAR,
        }
    }
}

const U_SHAPE: [(Station, u32, u32); 16] = [
    (RawMaterialStorage, 5, 5),
    (WashingStation, 5, 15),
    (SlicingMachine, 5, 25),
    (BlanchingUnit, 5, 35),
    (DryingUnit, 15, 35),
    (MillingMachine, 30, 35),
    (SievingUnit, 40, 35),
    (PackagingStation, 40, 25),
    (FinishedGoodsStorage, 40, 15),
    (QualityControlLab, 40, 5),
    (Office, 20, 5),
    (GeneratorHouse, 52, 5),
    (WaterTreatment, 52, 15),
    (Washroom, 30, 5),
    (ElectricalRoom, 52, 25),
    (MaintenanceWorkshop, 15, 5),
];

const LINEAR: [(Station, u32, u32); 16] = [
    (RawMaterialStorage, 5, 5),
    (WashingStation, 15, 5),
    (SlicingMachine, 25, 5),
    (BlanchingUnit, 35, 5),
    (DryingUnit, 45, 5),
    (MillingMachine, 55, 5),
    (SievingUnit, 65, 5),
    (PackagingStation, 75, 5),
    (FinishedGoodsStorage, 85, 5),
    (QualityControlLab, 5, 20),
    (Office, 15, 20),
    (GeneratorHouse, 25, 20),
    (WaterTreatment, 35, 20),
    (Washroom, 45, 20),
    (ElectricalRoom, 52, 20),
    (MaintenanceWorkshop, 60, 20),
];

const CELLULAR: [(Station, u32, u32); 16] = [
    (RawMaterialStorage, 5, 5),
    (WashingStation, 5, 15),
    (SlicingMachine, 5, 25),
    (BlanchingUnit, 15, 15),
    (DryingUnit, 25, 15),
    (MillingMachine, 35, 15),
    (SievingUnit, 45, 15),
    (PackagingStation, 55, 15),
    (FinishedGoodsStorage, 65, 15),
    (QualityControlLab, 5, 35),
    (Office, 15, 35),
    (GeneratorHouse, 25, 35),
    (WaterTreatment, 35, 35),
    (Washroom, 45, 35),
    (ElectricalRoom, 52, 35),
    (MaintenanceWorkshop, 60, 35),
];

// =============================================================================
// Layout generation
// =============================================================================

/// Rectangle as percentages of the diagram canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramRect {
    pub left: Decimal,
    pub top: Decimal,
    pub width: Decimal,
    pub height: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedZone {
    pub station: Station,
    pub name: &'static str,
    pub kind: ZoneKind,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub capacity: &'static str,
    pub power: String,
    pub throughput_kg_hr: Option<u32>,
}

impl PlacedZone {
    pub fn area(&self) -> u32 {
        self.width * self.height
    }

    pub fn diagram_rect(&self) -> DiagramRect {
        DiagramRect {
            left: Decimal::from(self.x) / CANVAS_WIDTH * HUNDRED,
            top: Decimal::from(self.y) / CANVAS_HEIGHT * HUNDRED,
            width: Decimal::from(self.width) / CANVAS_WIDTH * HUNDRED,
            height: Decimal::from(self.height) / CANVAS_HEIGHT * HUNDRED,
        }
    }

    fn overflows(
        &self,
        factory_width: Decimal,
        factory_length: Decimal,
    ) -> bool {
        Decimal::from(self.x + self.width) > factory_width
            || Decimal::from(self.y + self.height) > factory_length
    }
}

/// Form values for the placed layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutInput {
    /// Factory width in metres.
    pub factory_width: Decimal,
    /// Factory length in metres.
    pub factory_length: Decimal,
    /// Plant capacity in kg/day.
    pub capacity_kg: u32,
    pub layout_type: LayoutType,
}

impl Default for LayoutInput {
    fn default() -> Self {
        Self {
            factory_width: dec!(60),
            factory_length: dec!(80),
            capacity_kg: 1000,
            layout_type: LayoutType::UShape,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactoryLayout {
    pub layout_type: LayoutType,
    pub tier: CapacityTier,
    pub zones: Vec<PlacedZone>,
    /// Sum of station areas in square metres.
    pub occupied_area: Decimal,
    pub floor_area: Decimal,
    /// Occupied area as a percentage of the factory floor.
    pub utilisation: Decimal,
    /// Names of stations that extend past the factory walls.
    pub overflowing: Vec<&'static str>,
}

fn place(
    station: Station,
    x: u32,
    y: u32,
    set: &EquipmentSet,
) -> PlacedZone {
    let (width, height, capacity, power, throughput_kg_hr) = match station.equipment(set) {
        Some(spec) => (
            spec.width,
            spec.height,
            spec.capacity,
            spec.power_kw
                .map_or_else(|| "N/A".to_string(), |kw| format!("{kw} kW")),
            spec.throughput_kg_hr,
        ),
        None => {
            let fixed = station.fixed();
            (
                fixed.width,
                fixed.height,
                fixed.capacity,
                fixed.power.to_string(),
                None,
            )
        }
    };
    PlacedZone {
        station,
        name: station.name(),
        kind: station.kind(),
        x,
        y,
        width,
        height,
        capacity,
        power,
        throughput_kg_hr,
    }
}

/// Places the sixteen stations for the chosen arrangement and tier.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidDimension`] when the factory width or
/// length is not positive, and [`LayoutError::Overflow`] when the floor
/// area exceeds the decimal range.
///
/// ```
/// use plantain_core::calculations::factory_layout::{generate_layout, LayoutInput};
///
/// let layout = generate_layout(&LayoutInput::default()).unwrap();
/// assert_eq!(layout.zones.len(), 16);
/// assert_eq!(layout.zones[4].name, "Drying Unit");
/// assert_eq!(layout.zones[4].width, 12);
/// ```
pub fn generate_layout(input: &LayoutInput) -> Result<FactoryLayout, LayoutError> {
    for (name, value) in [
        ("width", input.factory_width),
        ("length", input.factory_length),
    ] {
        if value <= Decimal::ZERO {
            return Err(LayoutError::InvalidDimension { name, value });
        }
    }

    let tier = CapacityTier::from_capacity(input.capacity_kg);
    let set = tier.equipment();
    let zones: Vec<PlacedZone> = input
        .layout_type
        .positions()
        .iter()
        .map(|(station, x, y)| place(*station, *x, *y, set))
        .collect();

    let occupied_area: Decimal = zones.iter().map(|z| Decimal::from(z.area())).sum();
    let floor_area = checked_mul(input.factory_width, input.factory_length)?;
    let overflowing: Vec<&'static str> = zones
        .iter()
        .filter(|z| z.overflows(input.factory_width, input.factory_length))
        .map(|z| z.name)
        .collect();

    if !overflowing.is_empty() {
        warn!(
            layout = input.layout_type.label(),
            width = %input.factory_width,
            length = %input.factory_length,
            stations = ?overflowing,
            "stations extend beyond the factory footprint"
        );
    }

    Ok(FactoryLayout {
        layout_type: input.layout_type,
        tier,
        utilisation: percent_of(occupied_area, floor_area)?,
        zones,
        occupied_area,
        floor_area,
        overflowing,
    })
}

const PRODUCTION_STEPS: &[ProcessStep] = &[
    ProcessStep {
        number: 1,
        name: "Raw Material Reception",
        description: "Fresh plantains received and inspected for quality",
    },
    ProcessStep {
        number: 2,
        name: "Cleaning & Washing",
        description: "Remove dirt, debris and sanitize plantains",
    },
    ProcessStep {
        number: 3,
        name: "Peeling",
        description: "Mechanical peeling of plantain skins",
    },
    ProcessStep {
        number: 4,
        name: "Slicing",
        description: "Cut plantains into uniform slices for processing",
    },
    ProcessStep {
        number: 5,
        name: "Blanching",
        description: "Heat treatment to inactivate enzymes and improve texture",
    },
    ProcessStep {
        number: 6,
        name: "Drying",
        description: "Remove moisture content to prevent spoilage",
    },
    ProcessStep {
        number: 7,
        name: "Milling",
        description: "Grind dried plantain chips into fine flour",
    },
    ProcessStep {
        number: 8,
        name: "Sieving",
        description: "Separate flour by particle size for uniformity",
    },
    ProcessStep {
        number: 9,
        name: "Packaging",
        description: "Weigh, seal and label final flour product",
    },
    ProcessStep {
        number: 10,
        name: "Quality Control",
        description: "Test for moisture, microbial content and specifications",
    },
    ProcessStep {
        number: 11,
        name: "Storage",
        description: "Store finished product in controlled environment",
    },
];

/// Production sequence walked through on the factory floor.
pub fn production_steps() -> &'static [ProcessStep] {
    PRODUCTION_STEPS
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::calculations::common::round_half_up;

    // =========================================================================
    // area_allocation tests
    // =========================================================================

    #[test]
    fn area_percentages_sum_to_one_hundred() {
        let total: u32 = AREA_SHARES.iter().map(|(_, p)| p).sum();

        assert_eq!(total, 100);
    }

    #[test]
    fn area_allocation_rounds_each_zone() {
        let result = area_allocation(dec!(1234)).unwrap();

        let feet: Vec<Decimal> = result.iter().map(|a| a.square_feet).collect();
        assert_eq!(
            feet,
            vec![
                dec!(247),
                dec!(432),
                dec!(185),
                dec!(247),
                dec!(62),
                dec!(62)
            ]
        );
    }

    #[test]
    fn area_allocation_rejects_negative_size() {
        assert_eq!(
            area_allocation(dec!(-1)),
            Err(LayoutError::NegativeFactorySize(dec!(-1)))
        );
    }

    #[test]
    fn area_allocation_reports_overflow_for_huge_size() {
        assert_eq!(
            area_allocation(Decimal::MAX),
            Err(LayoutError::Overflow(Overflow))
        );
    }

    #[test]
    fn automation_benefits_differ_by_level() {
        assert_eq!(AutomationLevel::Full.benefits().len(), 4);
        assert_eq!(
            AutomationLevel::Semi.benefits()[0],
            "20-30% reduction in labor costs"
        );
        assert_eq!(AutomationLevel::default(), AutomationLevel::Semi);
    }

    // =========================================================================
    // CapacityTier tests
    // =========================================================================

    #[test]
    fn unknown_capacity_falls_back_to_1000_tier() {
        assert_eq!(CapacityTier::from_capacity(750), CapacityTier::Kg1000);
        assert_eq!(CapacityTier::from_capacity(0), CapacityTier::Kg1000);
        assert_eq!(CapacityTier::from_capacity(5000), CapacityTier::Kg5000);
    }

    #[test]
    fn raw_storage_has_no_power_rating() {
        for tier in CapacityTier::all() {
            assert_eq!(tier.equipment().raw_storage.power_kw, None);
        }
    }

    // =========================================================================
    // generate_layout tests
    // =========================================================================

    #[test]
    fn every_arrangement_places_sixteen_distinct_stations() {
        for layout_type in [LayoutType::UShape, LayoutType::Linear, LayoutType::Cellular] {
            let input = LayoutInput {
                layout_type,
                ..LayoutInput::default()
            };

            let layout = generate_layout(&input).unwrap();

            let stations: HashSet<Station> = layout.zones.iter().map(|z| z.station).collect();
            assert_eq!(stations.len(), 16);
        }
    }

    #[test]
    fn process_stations_take_size_from_tier() {
        let input = LayoutInput {
            capacity_kg: 5000,
            ..LayoutInput::default()
        };

        let layout = generate_layout(&input).unwrap();

        let dryer = &layout.zones[4];
        assert_eq!((dryer.width, dryer.height), (18, 10));
        assert_eq!(dryer.power, "180 kW");
        assert_eq!(dryer.throughput_kg_hr, Some(600));
    }

    #[test]
    fn fixed_stations_ignore_tier() {
        let small = generate_layout(&LayoutInput {
            capacity_kg: 500,
            ..LayoutInput::default()
        })
        .unwrap();

        let office = small.zones.iter().find(|z| z.station == Station::Office).unwrap();
        assert_eq!((office.width, office.height), (8, 6));
        assert_eq!(office.kind, ZoneKind::Admin);
    }

    #[test]
    fn diagram_rect_scales_to_canvas() {
        let layout = generate_layout(&LayoutInput::default()).unwrap();

        let rect = layout.zones[0].diagram_rect();
        assert_eq!(round_half_up(rect.left), dec!(7.14));
        assert_eq!(rect.top, dec!(10));
        assert_eq!(round_half_up(rect.width), dec!(14.29));
        assert_eq!(rect.height, dec!(16));
    }

    #[test]
    fn occupied_area_sums_station_footprints() {
        let layout = generate_layout(&LayoutInput::default()).unwrap();

        // tier 1000: 80+24+12+28+72+20+12+40, fixed: 80+48+48+24+24+16+16+24
        assert_eq!(layout.occupied_area, dec!(568));
        assert_eq!(layout.floor_area, dec!(4800));
    }

    #[test]
    fn u_shape_fits_default_factory() {
        let layout = generate_layout(&LayoutInput::default()).unwrap();

        assert!(layout.overflowing.is_empty());
    }

    #[test]
    fn linear_layout_overflows_narrow_factory() {
        let input = LayoutInput {
            layout_type: LayoutType::Linear,
            ..LayoutInput::default()
        };

        let layout = generate_layout(&input).unwrap();

        assert!(layout.overflowing.contains(&"Finished Goods Storage"));
        assert!(!layout.overflowing.contains(&"Raw Material Storage"));
    }

    #[test]
    fn generate_layout_rejects_zero_width() {
        let input = LayoutInput {
            factory_width: Decimal::ZERO,
            ..LayoutInput::default()
        };

        assert_eq!(
            generate_layout(&input),
            Err(LayoutError::InvalidDimension {
                name: "width",
                value: Decimal::ZERO
            })
        );
    }

    #[test]
    fn generate_layout_reports_overflow_for_huge_floor() {
        let input = LayoutInput {
            factory_width: dec!(100000000000000000),
            factory_length: dec!(100000000000000000),
            ..LayoutInput::default()
        };

        assert_eq!(
            generate_layout(&input),
            Err(LayoutError::Overflow(Overflow))
        );
    }

    #[test]
    fn production_sequence_has_eleven_numbered_steps() {
        let steps = production_steps();

        assert_eq!(steps.len(), 11);
        assert_eq!(steps[2].name, "Peeling");
        assert!(steps.iter().enumerate().all(|(i, s)| s.number == i as u32 + 1));
    }
}
