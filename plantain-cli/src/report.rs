//! Report rendering.
//!
//! Every subcommand builds one report value. [`render`] turns it into either
//! a plain-text report with tables and text bars or pretty-printed JSON.

use std::fmt::{self, Write};

use anyhow::{Context, Result};
use clap::ValueEnum;
use plantain_core::PlanningModule;
use plantain_core::QualityPlan;
use plantain_core::calculations::business_case::BusinessCaseResult;
use plantain_core::calculations::common::{HUNDRED, percent_of, round_half_up};
use plantain_core::calculations::factory_layout::{
    AreaAllocation, AutomationLevel, EquipmentCategory, FactoryLayout,
};
use plantain_core::calculations::flowchart::{LevelDetail, Recommendation, StepStatus};
use plantain_core::calculations::investment::{
    CapitalAllocation, InvestmentRequirements, StaffingPlan,
};
use plantain_core::calculations::market::MarketAnalysis;
use plantain_core::calculations::progress::ProgressReport;
use plantain_core::calculations::projection::OperatingResult;
use plantain_core::calculations::risk::{MonitoringCadence, RiskAssessment};
use plantain_core::calculations::supplier::SupplierAnalysis;
use plantain_core::models::ProcessStep;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::utils::{format_thousands, naira, opt_decimal_display};

/// Width of a full text bar, in characters.
pub const BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A report that can be written as plain text.
pub trait TextReport {
    fn write_text(
        &self,
        out: &mut String,
    ) -> fmt::Result;
}

/// Renders `report` in the requested format.
pub fn render<T>(
    report: &T,
    format: OutputFormat,
) -> Result<String>
where
    T: TextReport + Serialize,
{
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("failed to serialise report")
        }
        OutputFormat::Text => {
            let mut out = String::new();
            report
                .write_text(&mut out)
                .context("failed to format report")?;
            Ok(out)
        }
    }
}

/// A bar of `#` proportional to `value / max`, at most `width` long.
///
/// ```
/// use rust_decimal_macros::dec;
/// use plantain_cli::report::bar;
///
/// assert_eq!(bar(dec!(50), dec!(100), 10), "#####");
/// assert_eq!(bar(dec!(250), dec!(100), 4), "####");
/// ```
pub fn bar(
    value: Decimal,
    max: Decimal,
    width: usize,
) -> String {
    if max <= Decimal::ZERO || value <= Decimal::ZERO {
        return String::new();
    }
    let share = (value / max).min(Decimal::ONE);
    let filled = (share * Decimal::from(width))
        .round()
        .to_usize()
        .unwrap_or(width);
    "#".repeat(filled.min(width))
}

fn heading(
    out: &mut String,
    title: &str,
) -> fmt::Result {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(title.chars().count()))
}

fn section(
    out: &mut String,
    title: &str,
) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "-".repeat(title.chars().count()))
}

fn bullets(
    out: &mut String,
    items: &[&str],
) -> fmt::Result {
    for item in items {
        writeln!(out, "  - {item}")?;
    }
    Ok(())
}

fn percent(value: Decimal) -> String {
    format!("{}%", format_thousands(value))
}

// ─── dashboard ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct ModuleEntry {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModulesReport {
    pub modules: Vec<ModuleEntry>,
}

impl ModulesReport {
    pub fn new() -> Self {
        Self {
            modules: PlanningModule::all()
                .iter()
                .map(|m| ModuleEntry {
                    number: m.number(),
                    title: m.title(),
                    description: m.description(),
                })
                .collect(),
        }
    }
}

impl Default for ModulesReport {
    fn default() -> Self {
        Self::new()
    }
}

impl TextReport for ModulesReport {
    fn write_text(
        &self,
        out: &mut String,
    ) -> fmt::Result {
        heading(out, "Plantain Flour Business Planner")?;
        for module in &self.modules {
            writeln!(out, "{:>2}. {:<28} {}", module.number, module.title, module.description)?;
        }
        Ok(())
    }
}

// ─── investment ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct InvestmentReport {
    pub location: Option<&'static str>,
    pub allocation: CapitalAllocation,
    pub requirements: InvestmentRequirements,
    pub staffing: StaffingPlan,
}

impl TextReport for InvestmentReport {
    fn write_text(
        &self,
        out: &mut String,
    ) -> fmt::Result {
        heading(out, "Investment Planning")?;
        if let Some(location) = self.location {
            writeln!(out, "Location: {location}")?;
        }

        section(out, "Capital Allocation")?;
        let allocation = &self.allocation;
        let rows = [
            ("Land", allocation.land),
            ("Equipment", allocation.equipment),
            ("Working Capital", allocation.working_capital),
            ("Miscellaneous", allocation.miscellaneous),
        ];
        for (label, amount) in rows {
            writeln!(
                out,
                "  {:<18} {:>16}  {}",
                label,
                naira(amount),
                bar(amount, allocation.total, BAR_WIDTH)
            )?;
        }
        writeln!(out, "  {:<18} {:>16}", "Total", naira(allocation.total))?;

        section(out, "Investment Requirements (1000 kg/day)")?;
        let requirements = &self.requirements;
        for item in &requirements.items {
            writeln!(out, "  {:<26} {:>16}", item.label, naira(item.amount))?;
        }
        writeln!(out, "  {:<26} {:>16}", "Total Required", naira(requirements.total))?;
        writeln!(out, "  {:<26} {:>16}", "Available Capital", naira(requirements.capital))?;
        if requirements.capital_sufficient {
            writeln!(out, "  Capital is sufficient.")?;
        } else {
            writeln!(
                out,
                "  {:<26} {:>16}",
                "Funding Gap",
                naira(requirements.funding_gap)
            )?;
        }

        section(out, "Staffing")?;
        for line in &self.staffing.lines {
            writeln!(
                out,
                "  {:<22} {:>3}  {:>12}/month",
                line.role.label(),
                line.count,
                naira(line.monthly_cost)
            )?;
        }
        writeln!(
            out,
            "  {:<22} {:>3}  {:>12}/month",
            "Total",
            self.staffing.total_staff,
            naira(self.staffing.total_monthly_salary)
        )
    }
}

// ─── business case ───────────────────────────────────────────────────────────

impl TextReport for BusinessCaseResult {
    fn write_text(
        &self,
        out: &mut String,
    ) -> fmt::Result {
        heading(out, "Business Case Analysis")?;
        writeln!(
            out,
            "Capacity {} kg/day at {}/kg yields {} kg of flour per day",
            format_thousands(self.capacity_kg),
            naira(self.selling_price),
            format_thousands(self.flour_yield_kg)
        )?;

        section(out, "Revenue and Profit")?;
        writeln!(out, "  {:<10} {:>18} {:>18}", "", "Revenue", "Profit")?;
        for (period, revenue, profit) in [
            ("Daily", self.daily_revenue, self.daily_profit),
            ("Monthly", self.monthly_revenue, self.monthly_profit),
            ("Annual", self.annual_revenue, self.annual_profit),
        ] {
            writeln!(out, "  {:<10} {:>18} {:>18}", period, naira(revenue), naira(profit))?;
        }
        writeln!(out, "  Daily operating cost: {}", naira(self.daily_operating_cost))?;
        writeln!(out, "  Profit margin: {}", percent(self.profit_margin))?;

        section(out, "Break-even")?;
        writeln!(out, "  Variable cost per kg: {}", naira(self.variable_cost_per_kg))?;
        writeln!(out, "  Contribution margin:  {}", naira(self.contribution_margin))?;
        match (self.break_even_units, self.break_even_days) {
            (Some(units), Some(days)) => {
                writeln!(out, "  Break-even units: {} kg", format_thousands(units))?;
                writeln!(out, "  Break-even days:  {}", format_thousands(days))?;
            }
            _ => writeln!(out, "  No break-even: each kg sold loses money.")?,
        }

        section(out, "Currency Depreciation")?;
        writeln!(out, "  Depreciation:     {}", percent(self.depreciation_percent))?;
        writeln!(out, "  Adjusted revenue: {}", naira(self.adjusted_revenue))?;
        writeln!(out, "  Revenue impact:   {}", naira(self.revenue_impact))?;

        section(out, "Revenue Targets")?;
        let max = self
            .targets
            .iter()
            .map(|t| t.adjusted_target)
            .max()
            .unwrap_or_default();
        for target in &self.targets {
            writeln!(
                out,
                "  Year {}  {:>16}  {:>16}  {}",
                target.year,
                naira(target.target),
                naira(target.adjusted_target),
                bar(target.adjusted_target, max, BAR_WIDTH)
            )?;
        }
        Ok(())
    }
}

impl TextReport for OperatingResult {
    fn write_text(
        &self,
        out: &mut String,
    ) -> fmt::Result {
        heading(out, "Operating Projection")?;
        writeln!(out, "  Daily revenue:  {}", naira(self.daily_revenue))?;
        writeln!(out, "  Annual revenue: {}", naira(self.annual_revenue))?;
        writeln!(out, "  Daily costs:    {}", naira(self.daily_costs))?;
        writeln!(out, "  Annual costs:   {}", naira(self.annual_costs))?;
        writeln!(out, "  Annual profit:  {}", naira(self.annual_profit))?;
        writeln!(out, "  Profit margin:  {}", percent(self.profit_margin))?;

        section(out, "Multi-year Projection")?;
        let max = self
            .years
            .iter()
            .map(|y| y.revenue.max(y.costs))
            .max()
            .unwrap_or_default();
        for year in &self.years {
            writeln!(
                out,
                "  Year {:<2} revenue {:>18}  {}",
                year.year,
                naira(year.revenue),
                bar(year.revenue, max, BAR_WIDTH)
            )?;
            writeln!(
                out,
                "          costs   {:>18}  {}",
                naira(year.costs),
                bar(year.costs, max, BAR_WIDTH)
            )?;
            writeln!(out, "          profit  {:>18}", naira(year.profit))?;
        }
        Ok(())
    }
}

// ─── factory layout ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct LayoutReport {
    pub area_allocation: Option<Vec<AreaAllocation>>,
    pub automation: AutomationLevel,
    pub automation_benefits: &'static [&'static str],
    pub equipment_categories: &'static [EquipmentCategory],
    pub layout: FactoryLayout,
    pub production_steps: &'static [ProcessStep],
}

impl TextReport for LayoutReport {
    fn write_text(
        &self,
        out: &mut String,
    ) -> fmt::Result {
        heading(out, "Factory Layout Design")?;

        if let Some(areas) = &self.area_allocation {
            section(out, "Area Allocation")?;
            for area in areas {
                writeln!(
                    out,
                    "  {:<28} {:>3}%  {:>8} sq ft",
                    area.name,
                    area.percent,
                    format_thousands(area.square_feet)
                )?;
            }
        }

        section(out, &format!("Automation: {}", self.automation.label()))?;
        bullets(out, self.automation_benefits)?;

        section(out, "Equipment")?;
        for category in self.equipment_categories {
            writeln!(out, "  {}", category.category)?;
            for item in category.items {
                writeln!(out, "    - {item}")?;
            }
        }

        let layout = &self.layout;
        section(
            out,
            &format!(
                "{} layout, {} kg/day",
                layout.layout_type.label(),
                layout.tier.kg_per_day()
            ),
        )?;
        writeln!(
            out,
            "  {:<24} {:>9} {:>7} {:>14} {:>8} {:>10}",
            "Zone", "Position", "Size", "Capacity", "Power", "Diagram %"
        )?;
        for zone in &layout.zones {
            let rect = zone.diagram_rect();
            writeln!(
                out,
                "  {:<24} {:>9} {:>7} {:>14} {:>8} {:>10}",
                zone.name,
                format!("{},{}", zone.x, zone.y),
                format!("{}x{}", zone.width, zone.height),
                zone.capacity,
                zone.power,
                format!(
                    "{}x{}",
                    round_half_up(rect.width).normalize(),
                    round_half_up(rect.height).normalize()
                )
            )?;
        }
        writeln!(
            out,
            "  Occupied {} m2 of {} m2 ({} utilisation)",
            format_thousands(layout.occupied_area),
            format_thousands(layout.floor_area),
            percent(layout.utilisation)
        )?;
        if !layout.overflowing.is_empty() {
            writeln!(
                out,
                "  Outside the factory bounds: {}",
                layout.overflowing.join(", ")
            )?;
        }

        section(out, "Production Sequence")?;
        for step in self.production_steps {
            writeln!(out, "  {:>2}. {:<26} {}", step.number, step.name, step.description)?;
        }
        Ok(())
    }
}

// ─── suppliers ───────────────────────────────────────────────────────────────

impl TextReport for SupplierAnalysis {
    fn write_text(
        &self,
        out: &mut String,
    ) -> fmt::Result {
        heading(out, "Supplier Management")?;
        writeln!(out, "Scarcity: {}", self.scarcity_label)?;

        section(out, "Procurement Strategy")?;
        writeln!(out, "  {}", self.strategy.strategy)?;
        writeln!(out, "  Risk level: {}", self.strategy.risk_level.title())?;
        writeln!(out, "  Contract terms: {}", self.strategy.contract_terms)?;
        bullets(out, self.strategy.recommendations)?;

        section(out, "Supply Indicators")?;
        bullets(out, self.indicators)?;

        section(out, "Supplier Profile")?;
        let max = self
            .profile
            .iter()
            .map(|s| s.capacity_kg)
            .max()
            .unwrap_or_default();
        for supplier in &self.profile {
            writeln!(
                out,
                "  {:<8} {:<8} {:<16} {:>5} kg/day  {:<10} {}",
                supplier.id,
                supplier.region,
                supplier.supplier_type,
                supplier.capacity_kg,
                supplier.reliability.label(),
                bar(
                    Decimal::from(supplier.capacity_kg),
                    Decimal::from(max),
                    BAR_WIDTH / 2
                )
            )?;
        }

        section(out, "Known Suppliers")?;
        for known in self.known_suppliers {
            writeln!(
                out,
                "  {:<28} {:<12} {:>5} kg/day  {:>3}%  {}",
                known.name,
                known.location,
                known.capacity_kg,
                known.reliability_percent,
                known.grade
            )?;
        }
        writeln!(
            out,
            "  Average reliability: {}",
            percent(self.average_reliability)
        )?;

        section(out, "Raw Material Standards")?;
        for standard in self.material_standards {
            writeln!(out, "  {:<20} {}", standard.criterion, standard.requirement)?;
        }

        section(out, "Risk Mitigation")?;
        bullets(out, self.mitigation)
    }
}

// ─── progress ────────────────────────────────────────────────────────────────

impl TextReport for ProgressReport {
    fn write_text(
        &self,
        out: &mut String,
    ) -> fmt::Result {
        heading(out, "Progress Tracking")?;
        if self.targets_applied {
            writeln!(out, "Targets applied.")?;
        }

        section(out, "Quarterly Performance")?;
        let max = self
            .quarters
            .iter()
            .map(|q| q.revenue.max(q.target))
            .max()
            .unwrap_or_default();
        for quarter in &self.quarters {
            writeln!(
                out,
                "  {:<8} revenue {:>14}  target {:>14}  {}",
                quarter.quarter,
                naira(quarter.revenue),
                naira(quarter.target),
                bar(quarter.revenue, max, BAR_WIDTH / 2)
            )?;
            writeln!(
                out,
                "           production {:>8} kg  expenses {:>14}",
                format_thousands(quarter.production),
                naira(quarter.expenses)
            )?;
        }

        section(out, "Metrics")?;
        let metrics = &self.metrics;
        writeln!(out, "  Total revenue:         {}", naira(metrics.total_revenue))?;
        writeln!(
            out,
            "  Total production:      {} kg",
            format_thousands(metrics.total_production)
        )?;
        writeln!(
            out,
            "  Average profit margin: {}",
            percent(metrics.average_profit_margin)
        )?;
        writeln!(
            out,
            "  Target achievement:    {}",
            percent(metrics.target_achievement)
        )?;
        writeln!(out, "  Growth rate:           {}", percent(metrics.growth_rate))?;

        section(out, "Key Performance Indicators")?;
        for kpi in &self.kpis {
            writeln!(
                out,
                "  {:<24} {:>10} / {:<10} {:<20} {}",
                kpi.name,
                format!("{}{}", format_thousands(kpi.current), kpi.unit.symbol()),
                format!("{}{}", format_thousands(kpi.target), kpi.unit.symbol()),
                bar(kpi.bar_width(), HUNDRED, BAR_WIDTH / 2),
                if kpi.on_target() { "on target" } else { "below target" }
            )?;
        }
        Ok(())
    }
}

// ─── risk ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct RiskReport {
    pub assessment: RiskAssessment,
    pub monitoring: &'static [MonitoringCadence],
    #[serde(skip)]
    pub all_mitigation: bool,
}

impl TextReport for RiskReport {
    fn write_text(
        &self,
        out: &mut String,
    ) -> fmt::Result {
        let assessment = &self.assessment;
        heading(out, "Risk Assessment")?;
        writeln!(
            out,
            "Overall: {} (score {} of 3)",
            assessment.overall.risk_label(),
            format_thousands(assessment.score)
        )?;
        writeln!(out, "  {}", bar(assessment.score, Decimal::from(3), BAR_WIDTH))?;

        section(out, "Categories")?;
        for category in &assessment.categories {
            writeln!(
                out,
                "  {:<18} {:<13} {}",
                category.category.name(),
                category.label,
                category.category.description()
            )?;
        }

        let shown: Vec<_> = if self.all_mitigation {
            assessment.categories.iter().collect()
        } else {
            assessment.high_risk_categories().collect()
        };
        if !shown.is_empty() {
            section(out, "Mitigation Strategies")?;
            for category in shown {
                writeln!(out, "  {}", category.category.name())?;
                for strategy in category.mitigation {
                    writeln!(out, "    - {strategy}")?;
                }
            }
        }

        section(out, "Monitoring Plan")?;
        for cadence in self.monitoring {
            writeln!(out, "  {}", cadence.cadence)?;
            for activity in cadence.activities {
                writeln!(out, "    - {activity}")?;
            }
        }
        Ok(())
    }
}

// ─── quality ─────────────────────────────────────────────────────────────────

impl TextReport for QualityPlan {
    fn write_text(
        &self,
        out: &mut String,
    ) -> fmt::Result {
        let standard = self.standard;
        heading(out, &format!("Quality Control: {}", standard.name))?;
        writeln!(out, "{}", standard.description)?;
        writeln!(out, "Cost: {}", standard.cost)?;
        writeln!(out, "Timeline: {}", standard.timeline)?;

        section(out, "Requirements")?;
        bullets(out, standard.requirements)?;
        section(out, "Benefits")?;
        bullets(out, standard.benefits)?;

        section(out, "Testing Protocols")?;
        for protocol in self.protocols {
            writeln!(
                out,
                "  {:<20} {:<16} {:<28} {}",
                protocol.test, protocol.frequency, protocol.method, protocol.limit
            )?;
        }

        section(out, "Implementation Roadmap")?;
        for phase in self.roadmap {
            writeln!(out, "  Phase {}: {}", phase.phase, phase.name)?;
            bullets(out, phase.tasks)?;
        }
        Ok(())
    }
}

// ─── market ──────────────────────────────────────────────────────────────────

impl TextReport for MarketAnalysis {
    fn write_text(
        &self,
        out: &mut String,
    ) -> fmt::Result {
        let selected = &self.selected;
        heading(out, &format!("Market Analysis: {}", selected.name))?;
        writeln!(out, "{}", selected.description)?;
        writeln!(
            out,
            "Size: ₦{}M  Growth: {}  Competition: {}  Margin: {}",
            format_thousands(selected.size_millions),
            percent(selected.growth_rate * HUNDRED),
            selected.competition,
            selected.margin
        )?;
        writeln!(out, "Strategy: {}", selected.strategy)?;
        writeln!(out, "Channels:")?;
        bullets(out, selected.channels)?;

        section(out, "Market Share")?;
        for share in &self.shares {
            writeln!(
                out,
                "  {:<12} {:>3}%  {}",
                share.name,
                share.percent,
                bar(Decimal::from(share.percent), HUNDRED, BAR_WIDTH)
            )?;
        }

        section(out, "Demand Forecast (₦ millions)")?;
        writeln!(
            out,
            "  {:<6} {:>8} {:>10} {:>11} {:>8} {:>8}",
            "Year", "Retail", "Wholesale", "Industrial", "Export", "Total"
        )?;
        for year in &self.forecast {
            writeln!(
                out,
                "  {:<6} {:>8} {:>10} {:>11} {:>8} {:>8}",
                year.year,
                format_thousands(year.retail),
                format_thousands(year.wholesale),
                format_thousands(year.industrial),
                format_thousands(year.export),
                format_thousands(year.total())
            )?;
        }

        section(out, "Competitors")?;
        for competitor in &self.competitors {
            writeln!(
                out,
                "  {:<24} {:>3}%  + {}  - {}",
                competitor.name, competitor.market_share, competitor.strength, competitor.weakness
            )?;
        }

        section(out, "Market Entry Strategy")?;
        for phase in self.entry_strategy {
            writeln!(out, "  Phase {}: {}", phase.phase, phase.name)?;
            bullets(out, phase.actions)?;
        }
        Ok(())
    }
}

// ─── flowchart ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct FlowStepView {
    pub number: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub status: StepStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlowchartReport {
    pub current_step: usize,
    pub steps: Vec<FlowStepView>,
    pub level: &'static LevelDetail,
    pub recommendations: &'static [Recommendation],
}

impl FlowchartReport {
    /// Share of the chain that is completed, in percent.
    pub fn completion(&self) -> Decimal {
        let completed = self
            .steps
            .iter()
            .filter(|s| s.status == StepStatus::Completed)
            .count();
        // At most eleven steps, so the ratio stays in range.
        percent_of(Decimal::from(completed), Decimal::from(self.steps.len())).unwrap_or_default()
    }
}

impl TextReport for FlowchartReport {
    fn write_text(
        &self,
        out: &mut String,
    ) -> fmt::Result {
        heading(out, "System Flowchart")?;
        for step in &self.steps {
            let marker = match step.status {
                StepStatus::Completed => "[x]",
                StepStatus::Active => "[>]",
                StepStatus::Pending => "[ ]",
            };
            writeln!(out, "  {marker} {:>2}. {:<24} {}", step.number, step.name, step.description)?;
        }
        writeln!(
            out,
            "  {} {}",
            bar(self.completion(), HUNDRED, BAR_WIDTH),
            percent(self.completion())
        )?;

        section(out, self.level.title)?;
        writeln!(out, "  {}", self.level.description)?;
        bullets(out, self.level.items)?;
        for metric in self.level.metrics {
            writeln!(out, "  {}: {}", metric.name, metric.value)?;
        }

        section(out, "Optimization Recommendations")?;
        for recommendation in self.recommendations {
            writeln!(out, "  {}", recommendation.heading)?;
            for item in recommendation.items {
                writeln!(out, "    - {item}")?;
            }
        }
        Ok(())
    }
}

/// One-line break-even summary for the log.
pub fn break_even_summary(result: &BusinessCaseResult) -> String {
    format!(
        "break-even {} kg in {} days",
        opt_decimal_display(&result.break_even_units),
        opt_decimal_display(&result.break_even_days)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use plantain_core::calculations::business_case::{BusinessCase, BusinessCaseInput};
    use plantain_core::calculations::flowchart::{AnalysisLevel, FlowTracker};
    use plantain_core::calculations::market::{MarketSegment, analyze_market};
    use plantain_core::calculations::risk::{RiskProfile, assess_risk, monitoring_plan};
    use plantain_core::calculations::supplier::analyze_suppliers;
    use plantain_core::{Level, QualityStandard, quality_plan};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn flowchart_at(step: usize) -> FlowchartReport {
        let mut tracker = FlowTracker::new();
        tracker.go_to(step).unwrap();
        FlowchartReport {
            current_step: tracker.current(),
            steps: tracker
                .statuses()
                .into_iter()
                .map(|(step, status)| FlowStepView {
                    number: step.number,
                    name: step.name,
                    description: step.description,
                    status,
                })
                .collect(),
            level: AnalysisLevel::Plant.detail(),
            recommendations: &[],
        }
    }

    // =========================================================================
    // bar
    // =========================================================================

    #[test]
    fn bar_is_empty_for_zero_or_negative() {
        assert_eq!(bar(Decimal::ZERO, dec!(100), 10), "");
        assert_eq!(bar(dec!(-5), dec!(100), 10), "");
        assert_eq!(bar(dec!(5), Decimal::ZERO, 10), "");
    }

    #[test]
    fn bar_rounds_to_nearest_cell() {
        assert_eq!(bar(dec!(1), dec!(3), 10), "###");
        assert_eq!(bar(dec!(100), dec!(100), 10), "##########");
    }

    // =========================================================================
    // render
    // =========================================================================

    #[test]
    fn modules_text_lists_all_nine() {
        let text = render(&ModulesReport::new(), OutputFormat::Text).unwrap();

        assert!(text.contains(" 1. Investment Planning"));
        assert!(text.contains(" 9. System Flowchart"));
    }

    #[test]
    fn modules_json_is_an_object_with_nine_entries() {
        let json = render(&ModulesReport::new(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["modules"].as_array().map(Vec::len), Some(9));
        assert_eq!(value["modules"][0]["number"], 1);
    }

    #[test]
    fn business_case_text_reports_missing_break_even() {
        let result = BusinessCase::default()
            .analyze(&BusinessCaseInput {
                selling_price: dec!(100),
                ..Default::default()
            })
            .unwrap();

        let text = render(&result, OutputFormat::Text).unwrap();

        assert!(text.contains("No break-even"));
        assert_eq!(
            break_even_summary(&result),
            "break-even n/a kg in n/a days"
        );
    }

    #[test]
    fn business_case_text_shows_break_even_days() {
        let result = BusinessCase::default()
            .analyze(&BusinessCaseInput::default())
            .unwrap();

        let text = render(&result, OutputFormat::Text).unwrap();

        assert!(text.contains("Break-even days:  64.53"));
        assert!(text.contains("Year 5"));
    }

    #[test]
    fn risk_text_lists_only_high_mitigation_by_default() {
        let report = RiskReport {
            assessment: assess_risk(&RiskProfile::default()),
            monitoring: monitoring_plan(),
            all_mitigation: false,
        };

        let text = render(&report, OutputFormat::Text).unwrap();

        assert!(text.contains("Use foreign exchange hedging"));
        assert!(!text.contains("Diversify product portfolio"));
        assert!(text.contains("Medium Risk"));
    }

    #[test]
    fn risk_text_lists_every_category_on_request() {
        let report = RiskReport {
            assessment: assess_risk(&RiskProfile {
                market: Some(Level::Low),
                ..Default::default()
            }),
            monitoring: monitoring_plan(),
            all_mitigation: true,
        };

        let text = render(&report, OutputFormat::Text).unwrap();

        assert!(text.contains("Diversify product portfolio"));
    }

    #[test]
    fn risk_json_omits_display_flag() {
        let report = RiskReport {
            assessment: assess_risk(&RiskProfile::default()),
            monitoring: monitoring_plan(),
            all_mitigation: true,
        };

        let json = render(&report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value.get("all_mitigation").is_none());
        assert_eq!(value["assessment"]["overall"], "medium");
    }

    #[test]
    fn quality_text_names_standard_and_protocols() {
        let text = render(&quality_plan(QualityStandard::Export), OutputFormat::Text).unwrap();

        assert!(text.starts_with("Quality Control: "));
        assert!(text.contains("Testing Protocols"));
    }

    #[test]
    fn quality_text_lists_roadmap_phases() {
        let text = render(&quality_plan(QualityStandard::Basic), OutputFormat::Text).unwrap();

        assert!(text.contains("Implementation Roadmap"));
        assert!(text.contains("  Phase 1: Foundation\n  - Staff training\n"));
        assert!(text.contains("  Phase 4: Maintenance"));
    }

    #[test]
    fn market_text_ends_with_entry_strategy() {
        let text = render(&analyze_market(MarketSegment::Export), OutputFormat::Text).unwrap();

        assert!(text.contains("Market Entry Strategy"));
        assert!(text.contains("  Phase 3: Market Leadership\n  - Export market penetration\n"));
        assert!(text.contains("   4,372 "));
    }

    #[test]
    fn supplier_text_lists_raw_material_standards() {
        let analysis = analyze_suppliers(2, Some(Level::Low)).unwrap();

        let text = render(&analysis, OutputFormat::Text).unwrap();

        assert!(text.contains("Raw Material Standards"));
        assert!(text.contains("  Moisture content     <12%\n"));
    }

    #[test]
    fn flowchart_marks_statuses() {
        let text = render(&flowchart_at(3), OutputFormat::Text).unwrap();

        assert!(text.contains("[x]  1. Raw Material Reception"));
        assert!(text.contains("[>]  3. Peeling"));
        assert!(text.contains("[ ] 11. Labeling & Storage"));
    }

    #[test]
    fn flowchart_completion_counts_finished_steps() {
        assert_eq!(flowchart_at(1).completion(), Decimal::ZERO);
        assert_eq!(round_half_up(flowchart_at(3).completion()), dec!(18.18));
    }
}
