//! Yield-based business case for plantain flour production.
//!
//! Works from the daily plantain intake to flour output, revenue, operating
//! cost, break-even and the effect of currency depreciation.
//!
//! # Calculation Structure
//!
//! | Step | Formula |
//! |------|---------|
//! | Flour yield (kg/day) | capacity ÷ plantain-to-flour ratio (4) |
//! | Daily revenue | yield × selling price |
//! | Monthly / annual revenue | daily × 30, monthly × 12 |
//! | Daily operating cost | capacity × raw cost + utilities + payroll ÷ 30 + maintenance |
//! | Variable cost per kg | daily operating cost ÷ yield |
//! | Contribution margin | price − variable cost per kg |
//! | Break-even units | fixed costs ÷ contribution margin |
//! | Break-even days | break-even units ÷ yield |
//! | Adjusted revenue | annual revenue × (1 + depreciation%) |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use plantain_core::calculations::{BusinessCase, BusinessCaseInput};
//!
//! let case = BusinessCase::default();
//! let result = case.analyze(&BusinessCaseInput {
//!     capacity_kg: dec!(1000),
//!     selling_price: dec!(3500),
//!     depreciation_percent: dec!(15),
//! }).unwrap();
//!
//! assert_eq!(result.flour_yield_kg, dec!(250));
//! assert_eq!(result.annual_revenue, dec!(315000000));
//! assert_eq!(result.adjusted_revenue, dec!(362250000));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::{
    HUNDRED, MAX_PROJECTION_YEARS, Overflow, checked_add, checked_div, checked_mul, checked_sub,
    percent_of,
};
use crate::calculations::investment::staffing;

/// Errors that can occur during business case calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BusinessCaseError {
    /// Kilograms of plantain per kilogram of flour must be positive.
    #[error("plantain to flour ratio must be positive, got {0}")]
    InvalidYieldRatio(Decimal),

    /// Days per month and months per year must be positive.
    #[error("calendar value '{name}' must be positive, got {value}")]
    InvalidCalendar { name: &'static str, value: Decimal },

    /// Cost constants must not be negative.
    #[error("cost '{name}' must be non-negative, got {value}")]
    NegativeCost { name: &'static str, value: Decimal },

    /// At least one target factor is required.
    #[error("target factors must not be empty")]
    NoTargetFactors,

    /// Processing capacity must be positive.
    #[error("processing capacity must be positive, got {0}")]
    InvalidCapacity(Decimal),

    /// Selling price must be positive.
    #[error("selling price must be positive, got {0}")]
    InvalidSellingPrice(Decimal),

    /// The target series is limited to [`MAX_PROJECTION_YEARS`].
    #[error("projection years must be at most {max}, got {years}")]
    TooManyYears { years: u32, max: u32 },

    #[error(transparent)]
    Overflow(#[from] Overflow),
}

/// Cost and conversion constants for the business case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessCaseConfig {
    /// Kilograms of fresh plantain needed for one kilogram of flour.
    pub plantain_per_kg_flour: Decimal,
    /// Price of one kilogram of fresh plantain.
    pub raw_material_cost_per_kg: Decimal,
    pub daily_utility_cost: Decimal,
    pub daily_maintenance_cost: Decimal,
    /// Monthly payroll; defaults to the staffing plan total.
    pub monthly_staff_cost: Decimal,
    /// Total up-front investment recovered by break-even.
    pub fixed_costs: Decimal,
    pub days_per_month: Decimal,
    pub months_per_year: Decimal,
    /// Share of annual revenue targeted in each projection year.
    /// Years beyond the list reuse the last factor.
    pub target_factors: Vec<Decimal>,
    /// Number of years in the target series.
    pub projection_years: u32,
}

impl Default for BusinessCaseConfig {
    fn default() -> Self {
        Self {
            plantain_per_kg_flour: dec!(4),
            raw_material_cost_per_kg: dec!(200),
            daily_utility_cost: dec!(15000),
            daily_maintenance_cost: dec!(5000),
            monthly_staff_cost: staffing().total_monthly_salary,
            fixed_costs: dec!(40000000),
            days_per_month: dec!(30),
            months_per_year: dec!(12),
            target_factors: vec![dec!(0.15), dec!(0.20), dec!(0.25), dec!(0.40)],
            projection_years: 5,
        }
    }
}

impl BusinessCaseConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`BusinessCaseError`] for a non-positive yield ratio or
    /// calendar value, a negative cost, an empty target factor list, or a
    /// target series longer than [`MAX_PROJECTION_YEARS`].
    pub fn validate(&self) -> Result<(), BusinessCaseError> {
        if self.plantain_per_kg_flour <= Decimal::ZERO {
            return Err(BusinessCaseError::InvalidYieldRatio(
                self.plantain_per_kg_flour,
            ));
        }
        for (name, value) in [
            ("days per month", self.days_per_month),
            ("months per year", self.months_per_year),
        ] {
            if value <= Decimal::ZERO {
                return Err(BusinessCaseError::InvalidCalendar { name, value });
            }
        }
        for (name, value) in [
            ("raw material", self.raw_material_cost_per_kg),
            ("utilities", self.daily_utility_cost),
            ("maintenance", self.daily_maintenance_cost),
            ("staff", self.monthly_staff_cost),
            ("fixed", self.fixed_costs),
        ] {
            if value < Decimal::ZERO {
                return Err(BusinessCaseError::NegativeCost { name, value });
            }
        }
        if self.target_factors.is_empty() {
            return Err(BusinessCaseError::NoTargetFactors);
        }
        if self.projection_years > MAX_PROJECTION_YEARS {
            return Err(BusinessCaseError::TooManyYears {
                years: self.projection_years,
                max: MAX_PROJECTION_YEARS,
            });
        }
        Ok(())
    }
}

/// Form values for the business case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessCaseInput {
    /// Fresh plantain processed per day, in kilograms.
    pub capacity_kg: Decimal,
    /// Selling price per kilogram of flour.
    pub selling_price: Decimal,
    /// Expected currency depreciation, in percent.
    pub depreciation_percent: Decimal,
}

impl Default for BusinessCaseInput {
    fn default() -> Self {
        Self {
            capacity_kg: dec!(1000),
            selling_price: dec!(3500),
            depreciation_percent: dec!(15),
        }
    }
}

/// One year of the revenue target series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueTarget {
    pub year: u32,
    pub target: Decimal,
    /// Target inflated by cumulative depreciation (`d% × year`).
    pub adjusted_target: Decimal,
}

/// Result of the business case calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessCaseResult {
    pub capacity_kg: Decimal,
    pub selling_price: Decimal,
    pub flour_yield_kg: Decimal,
    pub daily_revenue: Decimal,
    pub monthly_revenue: Decimal,
    pub annual_revenue: Decimal,
    pub daily_operating_cost: Decimal,
    pub daily_profit: Decimal,
    pub monthly_profit: Decimal,
    pub annual_profit: Decimal,
    /// Daily profit as a percentage of daily revenue.
    pub profit_margin: Decimal,
    pub variable_cost_per_kg: Decimal,
    pub contribution_margin: Decimal,
    /// Kilograms of flour to sell before the fixed costs are recovered.
    /// `None` when each kilogram loses money.
    pub break_even_units: Option<Decimal>,
    pub break_even_days: Option<Decimal>,
    pub depreciation_percent: Decimal,
    pub adjusted_revenue: Decimal,
    pub revenue_impact: Decimal,
    pub targets: Vec<RevenueTarget>,
}

/// Calculator for the yield-based business case.
#[derive(Debug, Clone, Default)]
pub struct BusinessCase {
    config: BusinessCaseConfig,
}

impl BusinessCase {
    pub fn new(config: BusinessCaseConfig) -> Self {
        Self { config }
    }

    /// Runs the full business case.
    ///
    /// # Errors
    ///
    /// Returns [`BusinessCaseError`] if the configuration is invalid, the
    /// capacity or selling price is not positive, or a figure exceeds the
    /// decimal range.
    pub fn analyze(
        &self,
        input: &BusinessCaseInput,
    ) -> Result<BusinessCaseResult, BusinessCaseError> {
        self.config.validate()?;
        if input.capacity_kg <= Decimal::ZERO {
            return Err(BusinessCaseError::InvalidCapacity(input.capacity_kg));
        }
        if input.selling_price <= Decimal::ZERO {
            return Err(BusinessCaseError::InvalidSellingPrice(input.selling_price));
        }

        let cfg = &self.config;
        let flour_yield_kg = checked_div(input.capacity_kg, cfg.plantain_per_kg_flour)?;

        let daily_revenue = checked_mul(flour_yield_kg, input.selling_price)?;
        let monthly_revenue = checked_mul(daily_revenue, cfg.days_per_month)?;
        let annual_revenue = checked_mul(monthly_revenue, cfg.months_per_year)?;

        let daily_operating_cost = self.daily_operating_cost(input.capacity_kg)?;
        let daily_profit = checked_sub(daily_revenue, daily_operating_cost)?;
        let monthly_profit = checked_mul(daily_profit, cfg.days_per_month)?;
        let annual_profit = checked_mul(monthly_profit, cfg.months_per_year)?;
        let profit_margin = percent_of(daily_profit, daily_revenue)?;

        let variable_cost_per_kg = checked_div(daily_operating_cost, flour_yield_kg)?;
        let contribution_margin = checked_sub(input.selling_price, variable_cost_per_kg)?;
        let (break_even_units, break_even_days) =
            self.break_even(contribution_margin, flour_yield_kg)?;

        let depreciation_rate = input.depreciation_percent / HUNDRED;
        let adjusted_revenue = checked_mul(
            annual_revenue,
            checked_add(Decimal::ONE, depreciation_rate)?,
        )?;

        Ok(BusinessCaseResult {
            capacity_kg: input.capacity_kg,
            selling_price: input.selling_price,
            flour_yield_kg,
            daily_revenue,
            monthly_revenue,
            annual_revenue,
            daily_operating_cost,
            daily_profit,
            monthly_profit,
            annual_profit,
            profit_margin,
            variable_cost_per_kg,
            contribution_margin,
            break_even_units,
            break_even_days,
            depreciation_percent: input.depreciation_percent,
            adjusted_revenue,
            revenue_impact: checked_sub(adjusted_revenue, annual_revenue)?,
            targets: self.revenue_targets(annual_revenue, depreciation_rate)?,
        })
    }

    /// Raw plantain, utilities, payroll share and maintenance for one day.
    fn daily_operating_cost(
        &self,
        capacity_kg: Decimal,
    ) -> Result<Decimal, Overflow> {
        let cfg = &self.config;
        let raw_material = checked_mul(capacity_kg, cfg.raw_material_cost_per_kg)?;
        let staff = checked_div(cfg.monthly_staff_cost, cfg.days_per_month)?;
        [cfg.daily_utility_cost, staff, cfg.daily_maintenance_cost]
            .into_iter()
            .try_fold(raw_material, checked_add)
    }

    fn break_even(
        &self,
        contribution_margin: Decimal,
        flour_yield_kg: Decimal,
    ) -> Result<(Option<Decimal>, Option<Decimal>), Overflow> {
        if contribution_margin <= Decimal::ZERO {
            warn!(
                %contribution_margin,
                "selling price does not cover variable cost; no break-even point"
            );
            return Ok((None, None));
        }
        let units = checked_div(self.config.fixed_costs, contribution_margin)?;
        Ok((Some(units), Some(checked_div(units, flour_yield_kg)?)))
    }

    fn revenue_targets(
        &self,
        annual_revenue: Decimal,
        depreciation_rate: Decimal,
    ) -> Result<Vec<RevenueTarget>, Overflow> {
        let factors = &self.config.target_factors;
        (1..=self.config.projection_years)
            .map(|year| -> Result<RevenueTarget, Overflow> {
                let idx = (year as usize - 1).min(factors.len() - 1);
                let target = checked_mul(annual_revenue, factors[idx])?;
                let growth = checked_mul(depreciation_rate, Decimal::from(year))?;
                let adjusted_target = checked_mul(target, checked_add(Decimal::ONE, growth)?)?;
                Ok(RevenueTarget {
                    year,
                    target,
                    adjusted_target,
                })
            })
            .collect()
    }
}
