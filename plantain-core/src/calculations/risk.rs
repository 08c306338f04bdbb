//! Risk assessment across six business risk categories.
//!
//! Each category is rated low / medium / high (or left unassessed). The
//! overall score is the mean of the ordinal scores, where an unassessed
//! category counts as zero.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use plantain_core::Level;
//! use plantain_core::calculations::common::round_half_up;
//! use plantain_core::calculations::risk::{RiskProfile, assess_risk};
//!
//! let assessment = assess_risk(&RiskProfile::default());
//! assert_eq!(round_half_up(assessment.score), dec!(1.83));
//! assert_eq!(assessment.overall, Level::Medium);
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Level, level_score, risk_label};

/// Mean score at or below which the overall risk is low.
pub const LOW_RISK_CEILING: Decimal = dec!(1.5);

/// Mean score at or below which the overall risk is medium.
pub const MEDIUM_RISK_CEILING: Decimal = dec!(2.5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Market,
    SupplyChain,
    Currency,
    Operational,
    Regulatory,
    Financial,
}

impl RiskCategory {
    pub fn all() -> &'static [RiskCategory] {
        &[
            Self::Market,
            Self::SupplyChain,
            Self::Currency,
            Self::Operational,
            Self::Regulatory,
            Self::Financial,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Market => "Market Risk",
            Self::SupplyChain => "Supply Chain Risk",
            Self::Currency => "Currency Risk",
            Self::Operational => "Operational Risk",
            Self::Regulatory => "Regulatory Risk",
            Self::Financial => "Financial Risk",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Market => "Demand fluctuation, competition, price volatility",
            Self::SupplyChain => "Raw material availability, supplier reliability",
            Self::Currency => "Exchange rate fluctuation, inflation impact",
            Self::Operational => "Equipment failure, process disruption, quality issues",
            Self::Regulatory => "Policy changes, compliance requirements",
            Self::Financial => "Cash flow, credit risk, investment returns",
        }
    }

    pub fn mitigation(&self) -> &'static [&'static str] {
        match self {
            Self::Market => &[
                "Diversify product portfolio",
                "Conduct regular market research",
                "Develop flexible pricing strategies",
                "Build strong brand presence",
            ],
            Self::SupplyChain => &[
                "Establish multiple supplier relationships",
                "Implement contract farming",
                "Maintain strategic inventory reserves",
                "Develop local supplier networks",
            ],
            Self::Currency => &[
                "Use foreign exchange hedging",
                "Price products in stable currencies",
                "Implement cost-plus pricing models",
                "Monitor exchange rate trends",
            ],
            Self::Operational => &[
                "Implement preventive maintenance",
                "Train staff on quality procedures",
                "Establish backup systems",
                "Regular equipment upgrades",
            ],
            Self::Regulatory => &[
                "Stay updated on regulations",
                "Maintain compliance documentation",
                "Engage with regulatory bodies",
                "Implement quality standards",
            ],
            Self::Financial => &[
                "Maintain adequate cash reserves",
                "Diversify revenue streams",
                "Monitor financial ratios",
                "Establish credit facilities",
            ],
        }
    }
}

/// Rating for each category. `None` means not assessed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskProfile {
    pub market: Option<Level>,
    pub supply_chain: Option<Level>,
    pub currency: Option<Level>,
    pub operational: Option<Level>,
    pub regulatory: Option<Level>,
    pub financial: Option<Level>,
}

impl Default for RiskProfile {
    fn default() -> Self {
        Self {
            market: Some(Level::Medium),
            supply_chain: Some(Level::Low),
            currency: Some(Level::High),
            operational: Some(Level::Medium),
            regulatory: Some(Level::Low),
            financial: Some(Level::Medium),
        }
    }
}

impl RiskProfile {
    pub fn level(
        &self,
        category: RiskCategory,
    ) -> Option<Level> {
        match category {
            RiskCategory::Market => self.market,
            RiskCategory::SupplyChain => self.supply_chain,
            RiskCategory::Currency => self.currency,
            RiskCategory::Operational => self.operational,
            RiskCategory::Regulatory => self.regulatory,
            RiskCategory::Financial => self.financial,
        }
    }

    pub fn set(
        &mut self,
        category: RiskCategory,
        level: Option<Level>,
    ) {
        let slot = match category {
            RiskCategory::Market => &mut self.market,
            RiskCategory::SupplyChain => &mut self.supply_chain,
            RiskCategory::Currency => &mut self.currency,
            RiskCategory::Operational => &mut self.operational,
            RiskCategory::Regulatory => &mut self.regulatory,
            RiskCategory::Financial => &mut self.financial,
        };
        *slot = level;
    }
}

/// Maps a mean score onto the overall level.
///
/// ```
/// use rust_decimal_macros::dec;
/// use plantain_core::Level;
/// use plantain_core::calculations::risk::overall_level;
///
/// assert_eq!(overall_level(dec!(1.5)), Level::Low);
/// assert_eq!(overall_level(dec!(2.5)), Level::Medium);
/// assert_eq!(overall_level(dec!(2.51)), Level::High);
/// ```
pub fn overall_level(score: Decimal) -> Level {
    if score <= LOW_RISK_CEILING {
        Level::Low
    } else if score <= MEDIUM_RISK_CEILING {
        Level::Medium
    } else {
        Level::High
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryAssessment {
    pub category: RiskCategory,
    pub level: Option<Level>,
    pub label: &'static str,
    pub mitigation: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    pub categories: Vec<CategoryAssessment>,
    /// Mean ordinal score, between 0 and 3.
    pub score: Decimal,
    pub overall: Level,
}

impl RiskAssessment {
    /// Categories rated high, whose mitigation needs attention first.
    pub fn high_risk_categories(&self) -> impl Iterator<Item = &CategoryAssessment> {
        self.categories
            .iter()
            .filter(|c| c.level == Some(Level::High))
    }
}

pub fn assess_risk(profile: &RiskProfile) -> RiskAssessment {
    let categories: Vec<CategoryAssessment> = RiskCategory::all()
        .iter()
        .map(|category| {
            let level = profile.level(*category);
            CategoryAssessment {
                category: *category,
                level,
                label: risk_label(level),
                mitigation: category.mitigation(),
            }
        })
        .collect();

    let total: Decimal = categories.iter().map(|c| level_score(c.level)).sum();
    let score = total / Decimal::from(categories.len());
    let overall = overall_level(score);
    debug!(%score, overall = overall.as_str(), "risk assessed");

    RiskAssessment {
        categories,
        score,
        overall,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonitoringCadence {
    pub cadence: &'static str,
    pub activities: &'static [&'static str],
}

pub fn monitoring_plan() -> &'static [MonitoringCadence] {
    &[
        MonitoringCadence {
            cadence: "Daily Monitoring",
            activities: &[
                "Production quality checks",
                "Equipment performance",
                "Supply chain status",
                "Financial transactions",
            ],
        },
        MonitoringCadence {
            cadence: "Weekly Reviews",
            activities: &[
                "Market price analysis",
                "Supplier performance",
                "Operational efficiency",
                "Regulatory updates",
            ],
        },
        MonitoringCadence {
            cadence: "Monthly Assessment",
            activities: &[
                "Overall risk profile",
                "Strategy effectiveness",
                "Risk tolerance review",
                "Mitigation plan updates",
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::calculations::common::round_half_up;

    fn uniform(level: Option<Level>) -> RiskProfile {
        RiskProfile {
            market: level,
            supply_chain: level,
            currency: level,
            operational: level,
            regulatory: level,
            financial: level,
        }
    }

    #[test]
    fn default_profile_scores_medium() {
        let result = assess_risk(&RiskProfile::default());

        assert_eq!(round_half_up(result.score), dec!(1.83));
        assert_eq!(result.overall, Level::Medium);
    }

    #[test]
    fn all_low_is_low_risk() {
        let result = assess_risk(&uniform(Some(Level::Low)));

        assert_eq!(result.score, Decimal::ONE);
        assert_eq!(result.overall, Level::Low);
    }

    #[test]
    fn all_high_is_high_risk() {
        let result = assess_risk(&uniform(Some(Level::High)));

        assert_eq!(result.score, dec!(3));
        assert_eq!(result.overall, Level::High);
    }

    #[test]
    fn unassessed_categories_pull_score_down() {
        let profile = RiskProfile {
            market: Some(Level::High),
            currency: Some(Level::High),
            ..uniform(None)
        };

        let result = assess_risk(&profile);

        assert_eq!(result.score, Decimal::ONE);
        assert_eq!(result.overall, Level::Low);
        assert_eq!(result.categories[1].label, "Not Assessed");
    }

    #[test]
    fn score_of_exactly_two_and_a_half_is_medium() {
        let profile = RiskProfile {
            market: Some(Level::High),
            supply_chain: Some(Level::High),
            currency: Some(Level::High),
            ..uniform(Some(Level::Medium))
        };

        let result = assess_risk(&profile);

        assert_eq!(result.score, dec!(2.5));
        assert_eq!(result.overall, Level::Medium);
    }

    #[test]
    fn high_risk_categories_lists_only_high() {
        let result = assess_risk(&RiskProfile::default());

        let high: Vec<RiskCategory> = result.high_risk_categories().map(|c| c.category).collect();
        assert_eq!(high, vec![RiskCategory::Currency]);
    }

    #[test]
    fn set_updates_single_category() {
        let mut profile = RiskProfile::default();

        profile.set(RiskCategory::Regulatory, Some(Level::High));

        assert_eq!(profile.level(RiskCategory::Regulatory), Some(Level::High));
        assert_eq!(profile.level(RiskCategory::Market), Some(Level::Medium));
    }

    #[test]
    fn every_category_has_four_mitigation_strategies() {
        for category in RiskCategory::all() {
            assert_eq!(category.mitigation().len(), 4, "{}", category.name());
        }
    }
}
