//! Supplier management: procurement strategy by raw-material scarcity,
//! a generated supplier profile and the directory of known suppliers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::{Level, risk_label};

/// Largest profile that still fits the three-digit supplier ids.
pub const MAX_SUPPLIERS: u32 = 999;

const REGIONS: &[&str] = &["Ogun", "Oyo", "Osun", "Ekiti", "Ondo", "Lagos", "Kwara"];

const SUPPLIER_TYPES: &[&str] = &[
    "Individual Farmers",
    "Cooperatives",
    "Aggregators",
    "Plantation Owners",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SupplierError {
    #[error("supplier count must be between 1 and 999, got {0}")]
    CountOutOfRange(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reliability {
    Medium,
    High,
    VeryHigh,
}

impl Reliability {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }
}

/// Procurement approach for a scarcity level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcurementStrategy {
    pub strategy: &'static str,
    pub risk_level: Level,
    pub recommendations: &'static [&'static str],
    pub contract_terms: &'static str,
}

/// Procurement strategy for the given scarcity. Unassessed scarcity gets
/// the standard approach at low risk.
pub fn procurement_strategy(scarcity: Option<Level>) -> ProcurementStrategy {
    match scarcity {
        Some(Level::Low) => ProcurementStrategy {
            strategy: "Cost-focused procurement with 2-3 primary suppliers",
            risk_level: Level::Low,
            recommendations: &[
                "Focus on price negotiation and bulk discounts",
                "Establish long-term contracts for price stability",
                "Implement quality control standards",
                "Maintain 1-2 backup suppliers",
            ],
            contract_terms: "Annual contracts with quarterly reviews",
        },
        Some(Level::Medium) => ProcurementStrategy {
            strategy: "Diversified supplier base with seasonal planning",
            risk_level: Level::Medium,
            recommendations: &[
                "Maintain 5-7 suppliers across different regions",
                "Implement seasonal inventory planning",
                "Develop storage facilities for peak season procurement",
                "Establish farmer cooperative partnerships",
            ],
            contract_terms: "Flexible 6-month contracts with price adjustment clauses",
        },
        Some(Level::High) => ProcurementStrategy {
            strategy: "Multi-source procurement with vertical integration",
            risk_level: Level::High,
            recommendations: &[
                "Maintain 8-10 suppliers minimum",
                "Consider backward integration (own plantain farms)",
                "Develop alternative raw material sources",
                "Implement advanced inventory management",
                "Establish strategic partnerships with farmers",
            ],
            contract_terms: "Short-term flexible contracts with premium pricing",
        },
        None => ProcurementStrategy {
            strategy: "Standard procurement approach",
            risk_level: Level::Low,
            recommendations: &[
                "Establish primary and backup suppliers",
                "Implement quality standards",
                "Monitor market prices regularly",
            ],
            contract_terms: "Standard annual contracts",
        },
    }
}

/// Supply-side warning signs for a scarcity level.
pub fn supply_indicators(scarcity: Option<Level>) -> &'static [&'static str] {
    match scarcity {
        Some(Level::Low) => &[
            "Abundant raw material supply",
            "Stable pricing expected",
            "Low supply chain disruption risk",
            "Multiple supplier options available",
        ],
        Some(Level::Medium) => &[
            "Seasonal supply variations expected",
            "Price fluctuations likely",
            "Inventory management critical",
            "Contract farming recommended",
        ],
        Some(Level::High) => &[
            "Frequent supply shortages",
            "High price volatility",
            "Production planning challenges",
            "Alternative sources required",
        ],
        None => &[],
    }
}

/// Mitigation steps that apply at every scarcity level.
pub fn mitigation_strategies() -> &'static [&'static str] {
    &[
        "Diversify supplier base across regions",
        "Establish strategic inventory reserves",
        "Implement contract farming programs",
        "Develop alternative raw material sources",
        "Create supplier development initiatives",
    ]
}

/// Acceptance criterion for delivered plantain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterialStandard {
    pub criterion: &'static str,
    pub requirement: &'static str,
}

const MATERIAL_STANDARDS: &[MaterialStandard] = &[
    MaterialStandard {
        criterion: "Plantain maturity",
        requirement: "70-80% ripe",
    },
    MaterialStandard {
        criterion: "Moisture content",
        requirement: "<12%",
    },
    MaterialStandard {
        criterion: "Condition",
        requirement: "No physical damage or diseases",
    },
    MaterialStandard {
        criterion: "Certification",
        requirement: "Organic certification preferred",
    },
    MaterialStandard {
        criterion: "Supply",
        requirement: "Consistent supply capability",
    },
];

pub fn raw_material_standards() -> &'static [MaterialStandard] {
    MATERIAL_STANDARDS
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierProfile {
    pub id: String,
    pub region: String,
    pub supplier_type: String,
    /// Daily supply capacity in kilograms.
    pub capacity_kg: u32,
    pub reliability: Reliability,
}

/// Inclusive-exclusive capacity band `(min, span)` for a scarcity level.
fn capacity_band(scarcity: Option<Level>) -> (u32, u32) {
    match scarcity {
        Some(Level::High) => (50, 200),
        Some(Level::Medium) => (150, 300),
        _ => (200, 500),
    }
}

fn reliability(
    scarcity: Option<Level>,
    index: u32,
) -> Reliability {
    match scarcity {
        Some(Level::High) if index % 2 == 1 => Reliability::Medium,
        Some(Level::High) | Some(Level::Medium) => Reliability::High,
        _ => Reliability::VeryHigh,
    }
}

/// Generates `count` supplier profiles for the scarcity level.
///
/// Regions and supplier types rotate through their lists, and capacities are
/// spread evenly across the scarcity's band so the same inputs always give
/// the same profile.
///
/// # Errors
///
/// Returns [`SupplierError::CountOutOfRange`] for zero or more than
/// [`MAX_SUPPLIERS`] suppliers.
///
/// ```
/// use plantain_core::calculations::supplier::supplier_profile;
/// use plantain_core::Level;
///
/// let profile = supplier_profile(3, Some(Level::Medium)).unwrap();
/// assert_eq!(profile[0].id, "SUP-001");
/// assert_eq!(profile[2].region, "Osun");
/// assert_eq!(profile[1].capacity_kg, 250);
/// ```
pub fn supplier_profile(
    count: u32,
    scarcity: Option<Level>,
) -> Result<Vec<SupplierProfile>, SupplierError> {
    if count == 0 || count > MAX_SUPPLIERS {
        return Err(SupplierError::CountOutOfRange(count));
    }
    let (min, span) = capacity_band(scarcity);
    debug!(count, min, span, "generating supplier profile");

    Ok((1..=count)
        .map(|i| {
            let slot = (i - 1) as usize;
            SupplierProfile {
                id: format!("SUP-{i:03}"),
                region: REGIONS[slot % REGIONS.len()].to_string(),
                supplier_type: SUPPLIER_TYPES[slot % SUPPLIER_TYPES.len()].to_string(),
                capacity_kg: min + (i - 1) * span / count,
                reliability: reliability(scarcity, i),
            }
        })
        .collect())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnownSupplier {
    pub name: &'static str,
    pub location: &'static str,
    pub capacity_kg: u32,
    /// On-time delivery record, in percent.
    pub reliability_percent: u32,
    pub grade: &'static str,
}

pub fn known_suppliers() -> &'static [KnownSupplier] {
    &[
        KnownSupplier {
            name: "Farmland Cooperative",
            location: "Ondo State",
            capacity_kg: 500,
            reliability_percent: 85,
            grade: "Grade A",
        },
        KnownSupplier {
            name: "Green Valley Farms",
            location: "Ogun State",
            capacity_kg: 800,
            reliability_percent: 92,
            grade: "Grade A+",
        },
        KnownSupplier {
            name: "Tropical Harvest Ltd",
            location: "Osun State",
            capacity_kg: 1200,
            reliability_percent: 78,
            grade: "Grade B+",
        },
        KnownSupplier {
            name: "Plantain Growers Union",
            location: "Ekiti State",
            capacity_kg: 300,
            reliability_percent: 88,
            grade: "Grade A",
        },
    ]
}

/// Mean reliability of the known suppliers, in percent.
pub fn average_reliability(suppliers: &[KnownSupplier]) -> Decimal {
    if suppliers.is_empty() {
        return Decimal::ZERO;
    }
    let total: u32 = suppliers.iter().map(|s| s.reliability_percent).sum();
    Decimal::from(total) / Decimal::from(suppliers.len())
}

/// Full supplier analysis for the form values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupplierAnalysis {
    pub scarcity: Option<Level>,
    /// "Low Risk" … "High Risk", or "Not Assessed".
    pub scarcity_label: &'static str,
    pub strategy: ProcurementStrategy,
    pub indicators: &'static [&'static str],
    pub mitigation: &'static [&'static str],
    pub profile: Vec<SupplierProfile>,
    pub known_suppliers: &'static [KnownSupplier],
    pub average_reliability: Decimal,
    pub material_standards: &'static [MaterialStandard],
}

/// Builds the complete supplier analysis.
///
/// # Errors
///
/// Returns [`SupplierError`] if the supplier count is out of range.
pub fn analyze_suppliers(
    count: u32,
    scarcity: Option<Level>,
) -> Result<SupplierAnalysis, SupplierError> {
    let known = known_suppliers();
    Ok(SupplierAnalysis {
        scarcity,
        scarcity_label: risk_label(scarcity),
        strategy: procurement_strategy(scarcity),
        indicators: supply_indicators(scarcity),
        mitigation: mitigation_strategies(),
        profile: supplier_profile(count, scarcity)?,
        known_suppliers: known,
        average_reliability: average_reliability(known),
        material_standards: raw_material_standards(),
    })
}
