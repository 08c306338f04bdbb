//! Operating projection: revenue, costs and profit from daily figures,
//! extended over a multi-year horizon.
//!
//! Revenue grows at [`ProjectionConfig::revenue_growth`] per year and costs
//! at [`ProjectionConfig::cost_inflation`], both compounding from year 1.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use plantain_core::calculations::{OperatingInput, OperatingProjection};
//!
//! let input = OperatingInput {
//!     daily_capacity_kg: dec!(1000),
//!     price_per_kg: dec!(500),
//!     currency_factor: dec!(1),
//!     operating_days: dec!(300),
//!     daily_labor_cost: dec!(50000),
//!     daily_utility_cost: dec!(20000),
//!     daily_maintenance_cost: dec!(10000),
//! };
//! let result = OperatingProjection::default().project(&input).unwrap();
//!
//! assert_eq!(result.annual_revenue, dec!(150000000));
//! assert_eq!(result.annual_costs, dec!(24000000));
//! assert_eq!(result.years.len(), 5);
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::common::{
    MAX_PROJECTION_YEARS, Overflow, checked_add, checked_mul, checked_sub, compound, percent_of,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("growth rate '{name}' must be greater than -1, got {value}")]
    InvalidRate { name: &'static str, value: Decimal },

    #[error("projection must cover at least one year")]
    NoYears,

    #[error("projection horizon must be at most {max} years, got {years}")]
    TooManyYears { years: u32, max: u32 },

    #[error("input '{name}' must be non-negative, got {value}")]
    NegativeInput { name: &'static str, value: Decimal },

    #[error(transparent)]
    Overflow(#[from] Overflow),
}

/// Growth assumptions for the multi-year projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Annual revenue growth as a fraction.
    pub revenue_growth: Decimal,
    /// Annual cost inflation as a fraction.
    pub cost_inflation: Decimal,
    pub years: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            revenue_growth: dec!(0.15),
            cost_inflation: dec!(0.08),
            years: 5,
        }
    }
}

impl ProjectionConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError`] if a rate is -100% or lower, or the
    /// horizon is zero years or longer than [`MAX_PROJECTION_YEARS`].
    pub fn validate(&self) -> Result<(), ProjectionError> {
        for (name, value) in [
            ("revenue growth", self.revenue_growth),
            ("cost inflation", self.cost_inflation),
        ] {
            if value <= Decimal::NEGATIVE_ONE {
                return Err(ProjectionError::InvalidRate { name, value });
            }
        }
        if self.years == 0 {
            return Err(ProjectionError::NoYears);
        }
        if self.years > MAX_PROJECTION_YEARS {
            return Err(ProjectionError::TooManyYears {
                years: self.years,
                max: MAX_PROJECTION_YEARS,
            });
        }
        Ok(())
    }
}

/// Daily operating figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingInput {
    pub daily_capacity_kg: Decimal,
    pub price_per_kg: Decimal,
    /// Multiplier applied to revenue for currency movement.
    pub currency_factor: Decimal,
    pub operating_days: Decimal,
    pub daily_labor_cost: Decimal,
    pub daily_utility_cost: Decimal,
    pub daily_maintenance_cost: Decimal,
}

impl Default for OperatingInput {
    fn default() -> Self {
        Self {
            daily_capacity_kg: Decimal::ZERO,
            price_per_kg: Decimal::ZERO,
            currency_factor: Decimal::ONE,
            operating_days: dec!(300),
            daily_labor_cost: Decimal::ZERO,
            daily_utility_cost: Decimal::ZERO,
            daily_maintenance_cost: Decimal::ZERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionYear {
    pub year: u32,
    pub revenue: Decimal,
    pub costs: Decimal,
    pub profit: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingResult {
    pub daily_revenue: Decimal,
    pub annual_revenue: Decimal,
    pub daily_costs: Decimal,
    pub annual_costs: Decimal,
    pub annual_profit: Decimal,
    /// Profit as a percentage of revenue; zero when there is no revenue.
    pub profit_margin: Decimal,
    pub years: Vec<ProjectionYear>,
}

#[derive(Debug, Clone, Default)]
pub struct OperatingProjection {
    config: ProjectionConfig,
}

impl OperatingProjection {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Computes the annual figures and the multi-year series.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError`] if the configuration is invalid, any
    /// input is negative, or a figure grows past the decimal range.
    pub fn project(
        &self,
        input: &OperatingInput,
    ) -> Result<OperatingResult, ProjectionError> {
        self.config.validate()?;
        for (name, value) in [
            ("capacity", input.daily_capacity_kg),
            ("price", input.price_per_kg),
            ("currency factor", input.currency_factor),
            ("operating days", input.operating_days),
            ("labor cost", input.daily_labor_cost),
            ("utility cost", input.daily_utility_cost),
            ("maintenance cost", input.daily_maintenance_cost),
        ] {
            if value < Decimal::ZERO {
                return Err(ProjectionError::NegativeInput { name, value });
            }
        }

        let daily_revenue = checked_mul(
            checked_mul(input.daily_capacity_kg, input.price_per_kg)?,
            input.currency_factor,
        )?;
        let annual_revenue = checked_mul(daily_revenue, input.operating_days)?;
        let daily_costs = checked_add(
            checked_add(input.daily_labor_cost, input.daily_utility_cost)?,
            input.daily_maintenance_cost,
        )?;
        let annual_costs = checked_mul(daily_costs, input.operating_days)?;
        let annual_profit = checked_sub(annual_revenue, annual_costs)?;

        if annual_revenue.is_zero() {
            warn!("annual revenue is zero; profit margin reported as 0");
        }
        let profit_margin = percent_of(annual_profit, annual_revenue)?;

        let years = self.series(annual_revenue, annual_costs)?;
        debug!(
            %annual_revenue,
            %annual_costs,
            years = years.len(),
            "operating projection complete"
        );

        Ok(OperatingResult {
            daily_revenue,
            annual_revenue,
            daily_costs,
            annual_costs,
            annual_profit,
            profit_margin,
            years,
        })
    }

    fn series(
        &self,
        annual_revenue: Decimal,
        annual_costs: Decimal,
    ) -> Result<Vec<ProjectionYear>, Overflow> {
        (1..=self.config.years)
            .map(|year| -> Result<ProjectionYear, Overflow> {
                let revenue = compound(annual_revenue, self.config.revenue_growth, year - 1)?;
                let costs = compound(annual_costs, self.config.cost_inflation, year - 1)?;
                Ok(ProjectionYear {
                    year,
                    revenue,
                    costs,
                    profit: checked_sub(revenue, costs)?,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn test_input() -> OperatingInput {
        OperatingInput {
            daily_capacity_kg: dec!(1000),
            price_per_kg: dec!(500),
            currency_factor: dec!(1),
            operating_days: dec!(300),
            daily_labor_cost: dec!(50000),
            daily_utility_cost: dec!(20000),
            daily_maintenance_cost: dec!(10000),
        }
    }

    // =========================================================================
    // ProjectionConfig::validate tests
    // =========================================================================

    #[test]
    fn validate_accepts_default_config() {
        assert_eq!(ProjectionConfig::default().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_rate_of_minus_one() {
        let config = ProjectionConfig {
            cost_inflation: dec!(-1),
            ..ProjectionConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ProjectionError::InvalidRate {
                name: "cost inflation",
                value: dec!(-1)
            })
        );
    }

    #[test]
    fn validate_rejects_zero_years() {
        let config = ProjectionConfig {
            years: 0,
            ..ProjectionConfig::default()
        };

        assert_eq!(config.validate(), Err(ProjectionError::NoYears));
    }

    #[test]
    fn validate_rejects_horizon_past_fifty_years() {
        let config = ProjectionConfig {
            years: 1000,
            ..ProjectionConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ProjectionError::TooManyYears {
                years: 1000,
                max: 50
            })
        );
    }

    #[test]
    fn validate_accepts_fifty_year_horizon() {
        let config = ProjectionConfig {
            years: 50,
            ..ProjectionConfig::default()
        };

        assert_eq!(config.validate(), Ok(()));
    }

    // =========================================================================
    // project tests
    // =========================================================================

    #[test]
    fn annual_revenue_is_capacity_price_factor_days() {
        let input = OperatingInput {
            currency_factor: dec!(1.2),
            operating_days: dec!(250),
            ..test_input()
        };

        let result = OperatingProjection::default().project(&input).unwrap();

        assert_eq!(result.daily_revenue, dec!(600000));
        assert_eq!(result.annual_revenue, dec!(150000000));
    }

    #[test]
    fn annual_profit_and_margin() {
        let result = OperatingProjection::default().project(&test_input()).unwrap();

        assert_eq!(result.daily_costs, dec!(80000));
        assert_eq!(result.annual_costs, dec!(24000000));
        assert_eq!(result.annual_profit, dec!(126000000));
        assert_eq!(result.profit_margin, dec!(84));
    }

    #[test]
    fn zero_revenue_reports_zero_margin() {
        let input = OperatingInput {
            price_per_kg: Decimal::ZERO,
            ..test_input()
        };

        let result = OperatingProjection::default().project(&input).unwrap();

        assert_eq!(result.profit_margin, Decimal::ZERO);
        assert_eq!(result.annual_profit, dec!(-24000000));
    }

    #[test]
    fn first_year_equals_annual_figures() {
        let result = OperatingProjection::default().project(&test_input()).unwrap();

        let first = &result.years[0];
        assert_eq!(first.year, 1);
        assert_eq!(first.revenue, result.annual_revenue);
        assert_eq!(first.costs, result.annual_costs);
    }

    #[test]
    fn later_years_grow_revenue_and_inflate_costs() {
        let result = OperatingProjection::default().project(&test_input()).unwrap();

        let third = &result.years[2];
        assert_eq!(third.revenue, dec!(198375000));
        assert_eq!(third.costs, dec!(27993600));
        assert_eq!(third.profit, dec!(170381400));
    }

    #[test]
    fn custom_horizon_sets_series_length() {
        let projection = OperatingProjection::new(ProjectionConfig {
            years: 3,
            ..ProjectionConfig::default()
        });

        let result = projection.project(&test_input()).unwrap();

        assert_eq!(result.years.len(), 3);
    }

    #[test]
    fn project_rejects_negative_input() {
        let input = OperatingInput {
            operating_days: dec!(-1),
            ..test_input()
        };

        let result = OperatingProjection::default().project(&input);

        assert_eq!(
            result,
            Err(ProjectionError::NegativeInput {
                name: "operating days",
                value: dec!(-1)
            })
        );
    }

    #[test]
    fn huge_daily_figures_report_overflow() {
        let input = OperatingInput {
            daily_capacity_kg: dec!(100000000000000000),
            price_per_kg: dec!(100000000000000),
            ..test_input()
        };

        let result = OperatingProjection::default().project(&input);

        assert_eq!(
            result,
            Err(ProjectionError::Overflow(Overflow))
        );
    }

    #[test]
    fn runaway_growth_reports_overflow_within_horizon() {
        let projection = OperatingProjection::new(ProjectionConfig {
            revenue_growth: dec!(1000000),
            years: 50,
            ..ProjectionConfig::default()
        });

        let result = projection.project(&test_input());

        assert!(matches!(result, Err(ProjectionError::Overflow(_))));
    }
}
