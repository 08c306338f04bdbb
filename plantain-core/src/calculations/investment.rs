//! Investment planning for a 1000 kg/day plantain flour plant.
//!
//! Three views of the same decision:
//!
//! | View | What it answers |
//! |------|-----------------|
//! | [`InvestmentPlanner::capital_allocation`] | How should the available capital be split? |
//! | [`InvestmentPlanner::requirements`] | What does the plant actually cost, and is there a funding gap? |
//! | [`staffing`] | Who needs to be hired and what is the monthly payroll? |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use plantain_core::calculations::{InvestmentConfig, InvestmentPlanner};
//!
//! let planner = InvestmentPlanner::new(InvestmentConfig::default());
//! let allocation = planner.capital_allocation(dec!(10000000), false).unwrap();
//!
//! assert_eq!(allocation.land, dec!(2000000));
//! assert_eq!(allocation.total, dec!(10000000));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::common::{Overflow, checked_mul, checked_sub, checked_sum, max};
use crate::models::StaffRole;

/// Errors that can occur during investment calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvestmentError {
    /// An allocation share must be between 0 and 1.
    #[error("allocation share '{name}' must be between 0 and 1, got {value}")]
    InvalidShare { name: &'static str, value: Decimal },

    /// Allocation shares must add up to the whole capital.
    #[error("allocation shares must sum to 1, got {0}")]
    SharesDoNotSumToOne(Decimal),

    /// Land cost per plot must not be negative.
    #[error("land cost per plot must be non-negative, got {0}")]
    InvalidLandCost(Decimal),

    /// Available capital must not be negative.
    #[error("available capital must be non-negative, got {0}")]
    NegativeCapital(Decimal),

    /// Land size must not be negative.
    #[error("land size must be non-negative, got {0}")]
    NegativeLandSize(Decimal),

    #[error(transparent)]
    Overflow(#[from] Overflow),
}

/// Tunable parameters for investment planning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvestmentConfig {
    /// Share of capital set aside for land when none is owned.
    pub land_share: Decimal,
    pub equipment_share: Decimal,
    pub working_capital_share: Decimal,
    pub miscellaneous_share: Decimal,
    /// Purchase price of one plot of land.
    pub land_cost_per_plot: Decimal,
}

impl Default for InvestmentConfig {
    fn default() -> Self {
        Self {
            land_share: dec!(0.2),
            equipment_share: dec!(0.4),
            working_capital_share: dec!(0.3),
            miscellaneous_share: dec!(0.1),
            land_cost_per_plot: dec!(5000000),
        }
    }
}

impl InvestmentConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`InvestmentError`] if any share is outside [0, 1], if the
    /// shares do not sum to exactly 1, or if the land cost is negative.
    pub fn validate(&self) -> Result<(), InvestmentError> {
        let shares = [
            ("land", self.land_share),
            ("equipment", self.equipment_share),
            ("working capital", self.working_capital_share),
            ("miscellaneous", self.miscellaneous_share),
        ];
        for (name, value) in shares {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(InvestmentError::InvalidShare { name, value });
            }
        }
        let sum: Decimal = shares.iter().map(|(_, v)| *v).sum();
        if sum != Decimal::ONE {
            return Err(InvestmentError::SharesDoNotSumToOne(sum));
        }
        if self.land_cost_per_plot < Decimal::ZERO {
            return Err(InvestmentError::InvalidLandCost(self.land_cost_per_plot));
        }
        Ok(())
    }
}

/// Where a factory is to be sited. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactoryLocation {
    Urban,
    Suburban,
    Rural,
    Industrial,
}

impl FactoryLocation {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "urban" => Some(Self::Urban),
            "suburban" => Some(Self::Suburban),
            "rural" => Some(Self::Rural),
            "industrial" => Some(Self::Industrial),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Urban => "Urban Area",
            Self::Suburban => "Suburban Area",
            Self::Rural => "Rural Area",
            Self::Industrial => "Industrial Zone",
        }
    }
}

/// Capital split by proportion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapitalAllocation {
    pub land: Decimal,
    pub equipment: Decimal,
    pub working_capital: Decimal,
    pub miscellaneous: Decimal,
    pub total: Decimal,
}

/// A single line of the itemised plant cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostItem {
    pub label: String,
    pub amount: Decimal,
}

/// Itemised plant cost compared against the available capital.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentRequirements {
    pub items: Vec<CostItem>,
    pub total: Decimal,
    pub capital: Decimal,
    /// Shortfall between the total cost and the capital; never negative.
    pub funding_gap: Decimal,
    pub capital_sufficient: bool,
}

/// One role in the staffing plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffLine {
    pub role: StaffRole,
    pub count: u32,
    /// Monthly salary for all people in this role.
    pub monthly_cost: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffingPlan {
    pub lines: Vec<StaffLine>,
    pub total_staff: u32,
    pub total_monthly_salary: Decimal,
}

/// Fixed equipment and infrastructure prices for a 1000 kg/day plant.
const FIXED_COSTS: &[(&str, Decimal)] = &[
    ("Washing Machine", dec!(2500000)),
    ("Slicing Machine", dec!(1800000)),
    ("Drying System", dec!(8000000)),
    ("Grinding Mill", dec!(3500000)),
    ("Packaging Machine", dec!(2200000)),
    ("Generator", dec!(1500000)),
    ("Water System", dec!(800000)),
    ("Building Construction", dec!(15000000)),
];

const WORKING_CAPITAL: Decimal = dec!(5000000);
const LICENSING: Decimal = dec!(500000);

/// Builds the staffing plan from the fixed role table.
///
/// ```
/// use rust_decimal_macros::dec;
/// use plantain_core::calculations::staffing;
///
/// let plan = staffing();
/// assert_eq!(plan.total_staff, 17);
/// assert_eq!(plan.total_monthly_salary, dec!(1055000));
/// ```
pub fn staffing() -> StaffingPlan {
    let lines: Vec<StaffLine> = StaffRole::all()
        .iter()
        .map(|role| StaffLine {
            role: *role,
            count: role.headcount(),
            monthly_cost: Decimal::from(role.headcount()) * role.monthly_salary(),
        })
        .collect();

    StaffingPlan {
        total_staff: lines.iter().map(|l| l.count).sum(),
        total_monthly_salary: lines.iter().map(|l| l.monthly_cost).sum(),
        lines,
    }
}

/// Calculator for the investment planning module.
#[derive(Debug, Clone, Default)]
pub struct InvestmentPlanner {
    config: InvestmentConfig,
}

impl InvestmentPlanner {
    pub fn new(config: InvestmentConfig) -> Self {
        Self { config }
    }

    /// Splits the available capital into land, equipment, working capital
    /// and miscellaneous buckets.
    ///
    /// Land is only budgeted when the venture does not already own land, so
    /// the total equals the capital exactly in that case and falls short by
    /// the land share otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`InvestmentError`] if the configuration is invalid or the
    /// capital is negative.
    pub fn capital_allocation(
        &self,
        capital: Decimal,
        has_land: bool,
    ) -> Result<CapitalAllocation, InvestmentError> {
        self.config.validate()?;
        if capital < Decimal::ZERO {
            return Err(InvestmentError::NegativeCapital(capital));
        }

        let land = if has_land {
            Decimal::ZERO
        } else {
            capital * self.config.land_share
        };
        let equipment = capital * self.config.equipment_share;
        let working_capital = capital * self.config.working_capital_share;
        let miscellaneous = capital * self.config.miscellaneous_share;

        Ok(CapitalAllocation {
            land,
            equipment,
            working_capital,
            miscellaneous,
            total: land + equipment + working_capital + miscellaneous,
        })
    }

    /// Itemises the plant cost and compares it with the available capital.
    ///
    /// `land_plots` is only charged when `has_land` is false.
    ///
    /// # Errors
    ///
    /// Returns [`InvestmentError`] if the configuration is invalid, an
    /// input is negative, or the land cost exceeds the decimal range.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use plantain_core::calculations::InvestmentPlanner;
    ///
    /// let planner = InvestmentPlanner::default();
    /// let req = planner.requirements(dec!(20000000), true, dec!(1)).unwrap();
    ///
    /// assert_eq!(req.total, dec!(40800000));
    /// assert_eq!(req.funding_gap, dec!(20800000));
    /// assert!(!req.capital_sufficient);
    /// ```
    pub fn requirements(
        &self,
        capital: Decimal,
        has_land: bool,
        land_plots: Decimal,
    ) -> Result<InvestmentRequirements, InvestmentError> {
        self.config.validate()?;
        if capital < Decimal::ZERO {
            return Err(InvestmentError::NegativeCapital(capital));
        }
        if land_plots < Decimal::ZERO {
            return Err(InvestmentError::NegativeLandSize(land_plots));
        }

        let mut items: Vec<CostItem> = FIXED_COSTS
            .iter()
            .map(|(label, amount)| CostItem {
                label: (*label).to_string(),
                amount: *amount,
            })
            .collect();

        if !has_land {
            let land_cost = checked_mul(land_plots, self.config.land_cost_per_plot)?;
            debug!(%land_plots, %land_cost, "budgeting land acquisition");
            items.push(CostItem {
                label: format!("Land Acquisition ({land_plots} plots)"),
                amount: land_cost,
            });
        }
        items.push(CostItem {
            label: "Working Capital".to_string(),
            amount: WORKING_CAPITAL,
        });
        items.push(CostItem {
            label: "Licensing & Permits".to_string(),
            amount: LICENSING,
        });

        let total = checked_sum(items.iter().map(|i| i.amount))?;
        let funding_gap = max(Decimal::ZERO, checked_sub(total, capital)?);
        let capital_sufficient = capital >= total;

        if !capital_sufficient {
            warn!(
                %capital,
                %total,
                %funding_gap,
                "available capital does not cover plant cost"
            );
        }

        Ok(InvestmentRequirements {
            items,
            total,
            capital,
            funding_gap,
            capital_sufficient,
        })
    }
}
