//! Command-line forms.
//!
//! Each form mirrors one planning screen. Fields are taken as text and
//! converted with the lenient rules in [`crate::utils`]: an empty, invalid or
//! zero number falls back to the field's default.

use std::path::PathBuf;

use chrono::{Datelike, Local};
use clap::Args;
use plantain_core::Level;
use plantain_core::QualityStandard;
use plantain_core::calculations::business_case::BusinessCaseInput;
use plantain_core::calculations::factory_layout::{AutomationLevel, LayoutInput, LayoutType};
use plantain_core::calculations::flowchart::AnalysisLevel;
use plantain_core::calculations::investment::FactoryLocation;
use plantain_core::calculations::market::MarketSegment;
use plantain_core::calculations::progress::{Quarter, Targets};
use plantain_core::calculations::projection::OperatingInput;
use plantain_core::calculations::risk::RiskProfile;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::warn;

use crate::utils::{count_or, decimal_or, parse_optional_decimal, parse_yes_no};

// ─── investment ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Args)]
pub struct InvestmentForm {
    /// Available capital in naira.
    #[arg(long, default_value = "")]
    pub capital: String,

    /// Whether the venture already owns land (yes/no).
    #[arg(long, default_value = "no")]
    pub has_land: String,

    /// Land to buy, in plots.
    #[arg(long, default_value = "1")]
    pub land_size: String,

    /// Factory location: urban, suburban, rural or industrial.
    #[arg(long)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvestmentInput {
    pub capital: Decimal,
    pub has_land: bool,
    pub land_plots: Decimal,
    pub location: Option<FactoryLocation>,
}

impl InvestmentForm {
    pub fn input(&self) -> InvestmentInput {
        InvestmentInput {
            capital: decimal_or(&self.capital, Decimal::ZERO),
            has_land: parse_yes_no(&self.has_land),
            land_plots: decimal_or(&self.land_size, Decimal::ONE),
            location: self.location.as_deref().and_then(|text| {
                let location = FactoryLocation::parse(text);
                if location.is_none() {
                    warn!(input = %text, "unknown factory location");
                }
                location
            }),
        }
    }
}

// ─── business case ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Args)]
pub struct BusinessCaseForm {
    /// Processing capacity in kg of plantain per day.
    #[arg(long, default_value = "1000")]
    pub capacity: String,

    /// Selling price per kg of flour.
    #[arg(long, default_value = "3500")]
    pub price: String,

    /// Expected currency depreciation, in percent.
    #[arg(long, default_value = "15")]
    pub depreciation: String,
}

impl BusinessCaseForm {
    pub fn input(&self) -> BusinessCaseInput {
        BusinessCaseInput {
            capacity_kg: decimal_or(&self.capacity, dec!(1000)),
            selling_price: decimal_or(&self.price, dec!(3500)),
            depreciation_percent: decimal_or(&self.depreciation, dec!(15)),
        }
    }
}

// ─── operating projection ────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Args)]
pub struct ProjectionForm {
    /// Daily production capacity in kg.
    #[arg(long, default_value = "")]
    pub capacity: String,

    /// Price per kg.
    #[arg(long, default_value = "")]
    pub price: String,

    /// Currency conversion factor applied to revenue.
    #[arg(long, default_value = "1")]
    pub currency_factor: String,

    /// Operating days per year.
    #[arg(long, default_value = "300")]
    pub operating_days: String,

    #[arg(long, default_value = "")]
    pub labor_cost: String,

    #[arg(long, default_value = "")]
    pub utility_cost: String,

    #[arg(long, default_value = "")]
    pub maintenance_cost: String,
}

impl ProjectionForm {
    pub fn input(&self) -> OperatingInput {
        OperatingInput {
            daily_capacity_kg: decimal_or(&self.capacity, Decimal::ZERO),
            price_per_kg: decimal_or(&self.price, Decimal::ZERO),
            currency_factor: decimal_or(&self.currency_factor, Decimal::ONE),
            operating_days: decimal_or(&self.operating_days, dec!(300)),
            daily_labor_cost: decimal_or(&self.labor_cost, Decimal::ZERO),
            daily_utility_cost: decimal_or(&self.utility_cost, Decimal::ZERO),
            daily_maintenance_cost: decimal_or(&self.maintenance_cost, Decimal::ZERO),
        }
    }
}

// ─── factory layout ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Args)]
pub struct LayoutForm {
    /// Factory floor area in sq ft, for the area allocation table.
    #[arg(long)]
    pub factory_size: Option<String>,

    /// Factory width in metres.
    #[arg(long, default_value = "60")]
    pub width: String,

    /// Factory length in metres.
    #[arg(long, default_value = "80")]
    pub length: String,

    /// Plant capacity in kg/day: 500, 1000, 2000 or 5000.
    #[arg(long, default_value = "1000")]
    pub capacity: String,

    /// Arrangement: u-shape, linear or cellular.
    #[arg(long, default_value = "u-shape")]
    pub layout: String,

    /// Automation: manual, semi or full.
    #[arg(long, default_value = "semi")]
    pub automation: String,
}

impl LayoutForm {
    pub fn input(&self) -> LayoutInput {
        LayoutInput {
            factory_width: decimal_or(&self.width, dec!(60)),
            factory_length: decimal_or(&self.length, dec!(80)),
            capacity_kg: count_or(&self.capacity, 1000),
            layout_type: LayoutType::parse(&self.layout).unwrap_or_default(),
        }
    }

    /// The area allocation is only shown once a size is entered.
    pub fn factory_size(&self) -> Option<Decimal> {
        self.factory_size
            .as_deref()
            .and_then(parse_optional_decimal)
            .filter(|size| !size.is_zero())
    }

    pub fn automation(&self) -> AutomationLevel {
        AutomationLevel::parse(&self.automation).unwrap_or_default()
    }
}

// ─── suppliers ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Args)]
pub struct SupplierForm {
    /// Raw-material scarcity: low, medium or high. Blank means not assessed.
    #[arg(long, default_value = "")]
    pub scarcity: String,

    /// Number of suppliers to profile.
    #[arg(long, default_value = "5")]
    pub count: String,
}

impl SupplierForm {
    pub fn scarcity(&self) -> Option<Level> {
        Level::parse(&self.scarcity)
    }

    pub fn count(&self) -> u32 {
        count_or(&self.count, 5)
    }
}

// ─── progress ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Args)]
pub struct ProgressForm {
    /// First quarter shown: Q1 to Q4.
    #[arg(long, default_value = "Q1")]
    pub start_quarter: String,

    /// Year of the first quarter. Defaults to the current year.
    #[arg(long)]
    pub year: Option<String>,

    /// Annual revenue target. Applied together with --target-production.
    #[arg(long)]
    pub target_revenue: Option<String>,

    /// Annual production target in kg. Applied together with --target-revenue.
    #[arg(long)]
    pub target_production: Option<String>,

    /// CSV of quarterly actuals to use instead of the baseline.
    #[arg(long)]
    pub actuals: Option<PathBuf>,
}

impl ProgressForm {
    pub fn start_quarter(&self) -> Quarter {
        Quarter::parse(&self.start_quarter).unwrap_or_default()
    }

    pub fn year(&self) -> i32 {
        let current = Local::now().year();
        self.year
            .as_deref()
            .map(|text| {
                text.trim().parse().unwrap_or_else(|e| {
                    warn!(input = %text, "invalid year: {}", e);
                    current
                })
            })
            .unwrap_or(current)
    }

    /// Targets count as submitted only when both are given and non-blank.
    pub fn targets(&self) -> Option<Targets> {
        let defaults = Targets::default();
        let filled = |field: &Option<String>| {
            field
                .as_deref()
                .filter(|value| !value.trim().is_empty())
                .map(str::to_owned)
        };
        match (filled(&self.target_revenue), filled(&self.target_production)) {
            (Some(revenue), Some(production)) => Some(Targets {
                revenue: decimal_or(&revenue, defaults.revenue),
                production: decimal_or(&production, defaults.production),
            }),
            _ => None,
        }
    }
}

// ─── risk ────────────────────────────────────────────────────────────────────

/// Ratings are low, medium or high; any other value leaves the category
/// unassessed. Omitted flags keep the default rating.
#[derive(Debug, Clone, Default, Args)]
pub struct RiskForm {
    #[arg(long)]
    pub market: Option<String>,

    #[arg(long)]
    pub supply_chain: Option<String>,

    #[arg(long)]
    pub currency: Option<String>,

    #[arg(long)]
    pub operational: Option<String>,

    #[arg(long)]
    pub regulatory: Option<String>,

    #[arg(long)]
    pub financial: Option<String>,

    /// List mitigation strategies for every category, not only high ones.
    #[arg(long)]
    pub all_mitigation: bool,
}

impl RiskForm {
    pub fn profile(&self) -> RiskProfile {
        let defaults = RiskProfile::default();
        let rate = |text: &Option<String>, default: Option<Level>| match text {
            Some(text) => Level::parse(text),
            None => default,
        };
        RiskProfile {
            market: rate(&self.market, defaults.market),
            supply_chain: rate(&self.supply_chain, defaults.supply_chain),
            currency: rate(&self.currency, defaults.currency),
            operational: rate(&self.operational, defaults.operational),
            regulatory: rate(&self.regulatory, defaults.regulatory),
            financial: rate(&self.financial, defaults.financial),
        }
    }
}

// ─── selections ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Args)]
pub struct QualityForm {
    /// basic, premium, export or pharmaceutical.
    #[arg(long, default_value = "basic")]
    pub standard: String,
}

impl QualityForm {
    pub fn standard(&self) -> QualityStandard {
        QualityStandard::parse(&self.standard).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct MarketForm {
    /// retail, wholesale, industrial, export or mixed.
    #[arg(long, default_value = "retail")]
    pub segment: String,
}

impl MarketForm {
    pub fn segment(&self) -> MarketSegment {
        MarketSegment::parse(&self.segment).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct FlowchartForm {
    /// Analysis level: plant, factory, enterprise or integrated.
    #[arg(long, default_value = "plant")]
    pub level: String,

    /// Step to mark as active.
    #[arg(long, default_value = "1")]
    pub step: String,

    /// Number of times to advance from the selected step.
    #[arg(long, default_value = "0")]
    pub advance: String,
}

impl FlowchartForm {
    pub fn level(&self) -> AnalysisLevel {
        AnalysisLevel::parse(&self.level).unwrap_or_default()
    }

    pub fn step(&self) -> usize {
        count_or(&self.step, 1) as usize
    }

    pub fn advance(&self) -> u32 {
        count_or(&self.advance, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn investment_blank_capital_is_zero_and_land_defaults_to_one_plot() {
        let form = InvestmentForm {
            has_land: "no".into(),
            land_size: "".into(),
            ..Default::default()
        };

        let input = form.input();

        assert_eq!(input.capital, Decimal::ZERO);
        assert!(!input.has_land);
        assert_eq!(input.land_plots, Decimal::ONE);
        assert_eq!(input.location, None);
    }

    #[test]
    fn investment_parses_location_and_grouped_capital() {
        let form = InvestmentForm {
            capital: "25,000,000".into(),
            has_land: "yes".into(),
            land_size: "2".into(),
            location: Some("rural".into()),
        };

        let input = form.input();

        assert_eq!(input.capital, dec!(25000000));
        assert!(input.has_land);
        assert_eq!(input.location, Some(FactoryLocation::Rural));
    }

    #[test]
    fn business_case_invalid_fields_fall_back() {
        let form = BusinessCaseForm {
            capacity: "plenty".into(),
            price: "0".into(),
            depreciation: "".into(),
        };

        assert_eq!(form.input(), BusinessCaseInput::default());
    }

    #[test]
    fn projection_defaults_factor_and_days() {
        let form = ProjectionForm {
            capacity: "1000".into(),
            price: "500".into(),
            ..Default::default()
        };

        let input = form.input();

        assert_eq!(input.currency_factor, Decimal::ONE);
        assert_eq!(input.operating_days, dec!(300));
        assert_eq!(input.daily_labor_cost, Decimal::ZERO);
    }

    #[test]
    fn layout_unknown_values_use_defaults() {
        let form = LayoutForm {
            width: "".into(),
            length: "".into(),
            capacity: "750".into(),
            layout: "spiral".into(),
            automation: "robots".into(),
            factory_size: Some("".into()),
        };

        let input = form.input();

        assert_eq!(input.factory_width, dec!(60));
        assert_eq!(input.capacity_kg, 750);
        assert_eq!(input.layout_type, LayoutType::UShape);
        assert_eq!(form.automation(), AutomationLevel::Semi);
        assert_eq!(form.factory_size(), None);
    }

    #[test]
    fn supplier_blank_scarcity_is_unassessed() {
        let form = SupplierForm {
            scarcity: "".into(),
            count: "abc".into(),
        };

        assert_eq!(form.scarcity(), None);
        assert_eq!(form.count(), 5);
    }

    #[test]
    fn progress_targets_need_both_fields() {
        let only_revenue = ProgressForm {
            target_revenue: Some("5000000".into()),
            ..Default::default()
        };
        assert_eq!(only_revenue.targets(), None);

        let both = ProgressForm {
            target_revenue: Some("5000000".into()),
            target_production: Some("junk".into()),
            ..Default::default()
        };
        assert_eq!(
            both.targets(),
            Some(Targets {
                revenue: dec!(5000000),
                production: dec!(8000),
            })
        );
    }

    #[test]
    fn progress_blank_target_is_not_submitted() {
        let blank_production = ProgressForm {
            target_revenue: Some("5000000".into()),
            target_production: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(blank_production.targets(), None);

        let empty_revenue = ProgressForm {
            target_revenue: Some(String::new()),
            target_production: Some("9000".into()),
            ..Default::default()
        };
        assert_eq!(empty_revenue.targets(), None);
    }

    #[test]
    fn progress_year_and_quarter_parse() {
        let form = ProgressForm {
            start_quarter: "q3".into(),
            year: Some("2026".into()),
            ..Default::default()
        };

        assert_eq!(form.start_quarter(), Quarter::Q3);
        assert_eq!(form.year(), 2026);
    }

    #[test]
    fn risk_flags_override_defaults_and_unknown_is_unassessed() {
        let form = RiskForm {
            market: Some("high".into()),
            currency: Some("n/a".into()),
            ..Default::default()
        };

        let profile = form.profile();

        assert_eq!(profile.market, Some(Level::High));
        assert_eq!(profile.currency, None);
        assert_eq!(profile.supply_chain, Some(Level::Low));
    }

    #[test]
    fn selections_fall_back_to_first_option() {
        let quality = QualityForm {
            standard: "gold".into(),
        };
        let market = MarketForm {
            segment: "".into(),
        };

        assert_eq!(quality.standard(), QualityStandard::Basic);
        assert_eq!(market.segment(), MarketSegment::Retail);
    }

    #[test]
    fn flowchart_step_and_advance() {
        let form = FlowchartForm {
            level: "enterprise".into(),
            step: "4".into(),
            advance: "2".into(),
        };

        assert_eq!(form.level(), AnalysisLevel::Enterprise);
        assert_eq!(form.step(), 4);
        assert_eq!(form.advance(), 2);
    }
}
