//! Progress tracking: quarterly turnover against targets, summary metrics
//! and operating KPIs.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use plantain_core::calculations::progress::{
//!     Quarter, Targets, apply_targets, baseline_quarters, progress_metrics,
//! };
//!
//! let quarters = baseline_quarters(Quarter::Q1, 2024);
//! let updated = apply_targets(&quarters, &Targets {
//!     revenue: dec!(8000000),
//!     production: dec!(16000),
//! }).unwrap();
//! let metrics = progress_metrics(&updated).unwrap();
//!
//! assert_eq!(updated[0].revenue, dec!(5000000));
//! assert_eq!(metrics.target_achievement, dec!(52.5));
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::common::{
    HUNDRED, Overflow, checked_div, checked_mul, checked_sub, checked_sum, min, percent_of,
    round_whole,
};

/// Revenue target the baseline series was planned against.
pub const BASELINE_REVENUE_TARGET: Decimal = dec!(4000000);

/// Production target the baseline series was planned against.
pub const BASELINE_PRODUCTION_TARGET: Decimal = dec!(8000);

/// KPI attainment at or above this percentage counts as on target.
pub const ON_TARGET_THRESHOLD: Decimal = dec!(95);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProgressError {
    #[error("target '{name}' must be non-negative, got {value}")]
    NegativeTarget { name: &'static str, value: Decimal },

    #[error(transparent)]
    Overflow(#[from] Overflow),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Quarter {
    #[default]
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "Q1" | "1" => Some(Self::Q1),
            "Q2" | "2" => Some(Self::Q2),
            "Q3" | "3" => Some(Self::Q3),
            "Q4" | "4" => Some(Self::Q4),
            _ => None,
        }
    }

    pub fn number(&self) -> u32 {
        match self {
            Self::Q1 => 1,
            Self::Q2 => 2,
            Self::Q3 => 3,
            Self::Q4 => 4,
        }
    }
}

/// `count` consecutive quarter labels starting at `start` in `year`,
/// rolling over into the next year after Q4.
///
/// ```
/// use plantain_core::calculations::progress::{Quarter, quarter_labels};
///
/// assert_eq!(
///     quarter_labels(Quarter::Q3, 2025, 4),
///     vec!["Q3 2025", "Q4 2025", "Q1 2026", "Q2 2026"]
/// );
/// ```
pub fn quarter_labels(
    start: Quarter,
    year: i32,
    count: usize,
) -> Vec<String> {
    let first = start.number() as usize - 1;
    (0..count)
        .map(|offset| {
            let slot = first + offset;
            format!("Q{} {}", slot % 4 + 1, year + (slot / 4) as i32)
        })
        .collect()
}

/// One quarter of turnover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarterRecord {
    pub quarter: String,
    pub revenue: Decimal,
    /// Flour produced, in kilograms.
    pub production: Decimal,
    pub target: Decimal,
    pub expenses: Decimal,
}

const BASELINE: [(Decimal, Decimal, Decimal, Decimal); 4] = [
    (dec!(2500000), dec!(5000), dec!(3000000), dec!(1800000)),
    (dec!(3200000), dec!(6500), dec!(3200000), dec!(2100000)),
    (dec!(3800000), dec!(7200), dec!(3500000), dec!(2300000)),
    (dec!(4200000), dec!(8000), dec!(4000000), dec!(2500000)),
];

/// Four quarters of reference turnover, labelled from `start` and `year`.
pub fn baseline_quarters(
    start: Quarter,
    year: i32,
) -> Vec<QuarterRecord> {
    quarter_labels(start, year, BASELINE.len())
        .into_iter()
        .zip(BASELINE)
        .map(|(quarter, (revenue, production, target, expenses))| QuarterRecord {
            quarter,
            revenue,
            production,
            target,
            expenses,
        })
        .collect()
}

/// Annual targets entered on the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Targets {
    pub revenue: Decimal,
    pub production: Decimal,
}

impl Default for Targets {
    fn default() -> Self {
        Self {
            revenue: BASELINE_REVENUE_TARGET,
            production: BASELINE_PRODUCTION_TARGET,
        }
    }
}

/// Rescales the quarters to the entered targets.
///
/// The final quarter's target becomes the revenue target and the earlier
/// quarters' revenue scales by `target / 4,000,000`; the final quarter keeps
/// its actual revenue. Production in every quarter scales by
/// `target / 8,000`. Scaled values are rounded to whole units.
///
/// # Errors
///
/// Returns [`ProgressError::NegativeTarget`] for a negative target and
/// [`ProgressError::Overflow`] when a scaled value exceeds the decimal range.
pub fn apply_targets(
    quarters: &[QuarterRecord],
    targets: &Targets,
) -> Result<Vec<QuarterRecord>, ProgressError> {
    for (name, value) in [
        ("revenue", targets.revenue),
        ("production", targets.production),
    ] {
        if value < Decimal::ZERO {
            return Err(ProgressError::NegativeTarget { name, value });
        }
    }

    let revenue_multiplier = targets.revenue / BASELINE_REVENUE_TARGET;
    let production_multiplier = targets.production / BASELINE_PRODUCTION_TARGET;
    let last = quarters.len().saturating_sub(1);
    debug!(
        %revenue_multiplier,
        %production_multiplier,
        "applying quarterly targets"
    );

    quarters
        .iter()
        .enumerate()
        .map(|(idx, q)| -> Result<QuarterRecord, ProgressError> {
            let is_last = idx == last;
            Ok(QuarterRecord {
                quarter: q.quarter.clone(),
                revenue: if is_last {
                    q.revenue
                } else {
                    round_whole(checked_mul(q.revenue, revenue_multiplier)?)
                },
                production: round_whole(checked_mul(q.production, production_multiplier)?),
                target: if is_last { targets.revenue } else { q.target },
                expenses: q.expenses,
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressMetrics {
    pub total_revenue: Decimal,
    pub total_production: Decimal,
    /// Mean of the per-quarter profit margins, in percent.
    pub average_profit_margin: Decimal,
    /// Final quarter's revenue against its target, in percent.
    pub target_achievement: Decimal,
    /// Growth from the first to the final quarter, in percent to one place.
    pub growth_rate: Decimal,
}

/// Summary metrics over a quarterly series.
///
/// # Errors
///
/// Returns [`Overflow`] when a total or ratio exceeds the decimal range,
/// which only happens with implausibly large imported figures.
pub fn progress_metrics(quarters: &[QuarterRecord]) -> Result<ProgressMetrics, Overflow> {
    let total_revenue = checked_sum(quarters.iter().map(|q| q.revenue))?;
    let total_production = checked_sum(quarters.iter().map(|q| q.production))?;

    let average_profit_margin = if quarters.is_empty() {
        Decimal::ZERO
    } else {
        let margins = quarters
            .iter()
            .map(|q| percent_of(checked_sub(q.revenue, q.expenses)?, q.revenue))
            .collect::<Result<Vec<_>, _>>()?;
        checked_div(checked_sum(margins)?, Decimal::from(quarters.len()))?
    };

    let target_achievement = match quarters.last() {
        Some(q) => percent_of(q.revenue, q.target)?,
        None => Decimal::ZERO,
    };

    Ok(ProgressMetrics {
        total_revenue,
        total_production,
        average_profit_margin,
        target_achievement,
        growth_rate: growth_rate(quarters)?,
    })
}

fn growth_rate(quarters: &[QuarterRecord]) -> Result<Decimal, Overflow> {
    let (Some(first), Some(last)) = (quarters.first(), quarters.last()) else {
        return Ok(Decimal::ZERO);
    };
    if quarters.len() < 2 {
        return Ok(Decimal::ZERO);
    }
    if first.revenue.is_zero() {
        warn!(quarter = %first.quarter, "first quarter has no revenue; growth reported as 0");
        return Ok(Decimal::ZERO);
    }
    let change = checked_sub(last.revenue, first.revenue)?;
    Ok(percent_of(change, first.revenue)?
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KpiUnit {
    Percent,
    /// Cost in naira, where lower is better.
    Naira,
    OutOfFive,
}

impl KpiUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Percent => "%",
            Self::Naira => "₦",
            Self::OutOfFive => "/5",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kpi {
    pub name: String,
    pub current: Decimal,
    pub target: Decimal,
    pub unit: KpiUnit,
}

impl Kpi {
    /// Progress toward the target in percent. Costs invert the ratio so
    /// that beating a cost target scores above 100.
    ///
    /// A ratio past the decimal range saturates at [`Decimal::MAX`].
    pub fn attainment(&self) -> Decimal {
        let (part, whole) = match self.unit {
            KpiUnit::Naira => (self.target, self.current),
            KpiUnit::Percent | KpiUnit::OutOfFive => (self.current, self.target),
        };
        percent_of(part, whole).unwrap_or(Decimal::MAX)
    }

    pub fn on_target(&self) -> bool {
        self.attainment() >= ON_TARGET_THRESHOLD
    }

    /// Progress bar fill, capped at 100.
    pub fn bar_width(&self) -> Decimal {
        min(self.attainment(), HUNDRED)
    }
}

pub fn kpis() -> Vec<Kpi> {
    [
        ("Production Efficiency", dec!(85), dec!(90), KpiUnit::Percent),
        ("Quality Rating", dec!(92), dec!(95), KpiUnit::Percent),
        ("On-time Delivery", dec!(88), dec!(95), KpiUnit::Percent),
        ("Cost per kg", dec!(450), dec!(400), KpiUnit::Naira),
        ("Customer Satisfaction", dec!(4.2), dec!(4.5), KpiUnit::OutOfFive),
    ]
    .into_iter()
    .map(|(name, current, target, unit)| Kpi {
        name: name.to_string(),
        current,
        target,
        unit,
    })
    .collect()
}

/// Everything the progress module reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub quarters: Vec<QuarterRecord>,
    pub metrics: ProgressMetrics,
    pub kpis: Vec<Kpi>,
    pub targets_applied: bool,
}

/// Applies the targets when given and computes metrics and KPIs.
///
/// # Errors
///
/// Returns [`ProgressError`] if a target is negative or a figure exceeds the
/// decimal range.
pub fn track_progress(
    quarters: Vec<QuarterRecord>,
    targets: Option<&Targets>,
) -> Result<ProgressReport, ProgressError> {
    let quarters = match targets {
        Some(targets) => apply_targets(&quarters, targets)?,
        None => quarters,
    };
    Ok(ProgressReport {
        metrics: progress_metrics(&quarters)?,
        quarters,
        kpis: kpis(),
        targets_applied: targets.is_some(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::calculations::common::round_half_up;

    fn baseline() -> Vec<QuarterRecord> {
        baseline_quarters(Quarter::Q1, 2024)
    }

    // =========================================================================
    // quarter labelling tests
    // =========================================================================

    #[test]
    fn baseline_labels_start_at_requested_quarter() {
        let quarters = baseline_quarters(Quarter::Q2, 2025);

        let labels: Vec<&str> = quarters.iter().map(|q| q.quarter.as_str()).collect();
        assert_eq!(labels, vec!["Q2 2025", "Q3 2025", "Q4 2025", "Q1 2026"]);
    }

    #[test]
    fn quarter_parse_accepts_bare_numbers() {
        assert_eq!(Quarter::parse("q4"), Some(Quarter::Q4));
        assert_eq!(Quarter::parse("3"), Some(Quarter::Q3));
        assert_eq!(Quarter::parse("Q5"), None);
    }

    // =========================================================================
    // progress_metrics tests
    // =========================================================================

    #[test]
    fn baseline_metrics() {
        let result = progress_metrics(&baseline()).unwrap();

        assert_eq!(result.total_revenue, dec!(13700000));
        assert_eq!(result.total_production, dec!(26700));
        assert_eq!(round_half_up(result.average_profit_margin), dec!(35.58));
        assert_eq!(result.target_achievement, dec!(105));
        assert_eq!(result.growth_rate, dec!(68.0));
    }

    #[test]
    fn metrics_of_empty_series_are_zero() {
        let result = progress_metrics(&[]).unwrap();

        assert_eq!(result.total_revenue, Decimal::ZERO);
        assert_eq!(result.average_profit_margin, Decimal::ZERO);
        assert_eq!(result.target_achievement, Decimal::ZERO);
        assert_eq!(result.growth_rate, Decimal::ZERO);
    }

    #[test]
    fn single_quarter_has_no_growth() {
        let result = progress_metrics(&baseline()[..1]).unwrap();

        assert_eq!(result.growth_rate, Decimal::ZERO);
    }

    #[test]
    fn zero_target_reports_zero_achievement() {
        let mut quarters = baseline();
        quarters[3].target = Decimal::ZERO;

        let result = progress_metrics(&quarters).unwrap();

        assert_eq!(result.target_achievement, Decimal::ZERO);
    }

    #[test]
    fn imported_figures_past_decimal_range_report_overflow() {
        let mut quarters = baseline();
        quarters[0].revenue = Decimal::MAX;
        quarters[1].revenue = Decimal::MAX;

        assert_eq!(progress_metrics(&quarters), Err(Overflow));
        assert_eq!(
            track_progress(quarters, None),
            Err(ProgressError::Overflow(Overflow))
        );
    }

    // =========================================================================
    // apply_targets tests
    // =========================================================================

    #[test]
    fn targets_scale_earlier_revenue_and_all_production() {
        let targets = Targets {
            revenue: dec!(8000000),
            production: dec!(16000),
        };

        let result = apply_targets(&baseline(), &targets).unwrap();

        let revenue: Vec<Decimal> = result.iter().map(|q| q.revenue).collect();
        let production: Vec<Decimal> = result.iter().map(|q| q.production).collect();
        assert_eq!(
            revenue,
            vec![dec!(5000000), dec!(6400000), dec!(7600000), dec!(4200000)]
        );
        assert_eq!(
            production,
            vec![dec!(10000), dec!(13000), dec!(14400), dec!(16000)]
        );
        assert_eq!(result[3].target, dec!(8000000));
        assert_eq!(result[0].target, dec!(3000000));
    }

    #[test]
    fn default_targets_leave_baseline_unchanged() {
        let result = apply_targets(&baseline(), &Targets::default()).unwrap();

        assert_eq!(result, baseline());
    }

    #[test]
    fn scaled_values_round_to_whole_units() {
        let targets = Targets {
            revenue: dec!(3000000),
            production: dec!(7000),
        };

        let result = apply_targets(&baseline(), &targets).unwrap();

        assert_eq!(result[0].revenue, dec!(1875000));
        assert_eq!(result[1].production, dec!(5688));
    }

    #[test]
    fn apply_targets_rejects_negative_revenue() {
        let targets = Targets {
            revenue: dec!(-1),
            ..Targets::default()
        };

        assert_eq!(
            apply_targets(&baseline(), &targets),
            Err(ProgressError::NegativeTarget {
                name: "revenue",
                value: dec!(-1)
            })
        );
    }

    #[test]
    fn track_progress_with_targets_recomputes_metrics() {
        let targets = Targets {
            revenue: dec!(8000000),
            production: dec!(16000),
        };

        let result = track_progress(baseline(), Some(&targets)).unwrap();

        assert!(result.targets_applied);
        assert_eq!(result.metrics.target_achievement, dec!(52.5));
        assert_eq!(result.metrics.growth_rate, dec!(-16.0));
    }

    // =========================================================================
    // KPI tests
    // =========================================================================

    #[test]
    fn cost_kpi_inverts_ratio() {
        let cost = kpis().into_iter().find(|k| k.unit == KpiUnit::Naira).unwrap();

        assert_eq!(round_half_up(cost.attainment()), dec!(88.89));
        assert!(!cost.on_target());
    }

    #[test]
    fn only_quality_rating_is_on_target() {
        let on_target: Vec<String> = kpis()
            .into_iter()
            .filter(|k| k.on_target())
            .map(|k| k.name)
            .collect();

        assert_eq!(on_target, vec!["Quality Rating".to_string()]);
    }

    #[test]
    fn bar_width_caps_at_one_hundred() {
        let kpi = Kpi {
            name: "Cost per kg".to_string(),
            current: dec!(300),
            target: dec!(400),
            unit: KpiUnit::Naira,
        };

        assert!(kpi.attainment() > HUNDRED);
        assert_eq!(kpi.bar_width(), HUNDRED);
    }
}
