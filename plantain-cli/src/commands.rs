//! Builds the report for each subcommand from its form and the loaded
//! configuration.

use anyhow::{Context, Result};
use plantain_core::calculations::business_case::{BusinessCase, BusinessCaseResult};
use plantain_core::calculations::factory_layout::{
    area_allocation, equipment_categories, generate_layout, production_steps,
};
use plantain_core::calculations::flowchart::{FlowTracker, optimization_recommendations};
use plantain_core::calculations::investment::{InvestmentPlanner, staffing};
use plantain_core::calculations::market::{MarketAnalysis, analyze_market};
use plantain_core::calculations::progress::{ProgressReport, baseline_quarters, track_progress};
use plantain_core::calculations::projection::{OperatingProjection, OperatingResult};
use plantain_core::calculations::risk::{assess_risk, monitoring_plan};
use plantain_core::calculations::supplier::{SupplierAnalysis, analyze_suppliers};
use plantain_core::{QualityPlan, quality_plan};
use tracing::{debug, info};

use crate::config::PlannerConfig;
use crate::csv_loader;
use crate::forms::{
    BusinessCaseForm, FlowchartForm, InvestmentForm, LayoutForm, MarketForm, ProgressForm,
    ProjectionForm, QualityForm, RiskForm, SupplierForm,
};
use crate::report::{
    FlowStepView, FlowchartReport, InvestmentReport, LayoutReport, RiskReport, break_even_summary,
};

pub fn investment(
    form: &InvestmentForm,
    config: &PlannerConfig,
) -> Result<InvestmentReport> {
    let input = form.input();
    let planner = InvestmentPlanner::new(config.investment.clone());
    let allocation = planner
        .capital_allocation(input.capital, input.has_land)
        .context("capital allocation failed")?;
    let requirements = planner
        .requirements(input.capital, input.has_land, input.land_plots)
        .context("investment requirements failed")?;
    debug!(total = %requirements.total, gap = %requirements.funding_gap, "investment planned");

    Ok(InvestmentReport {
        location: input.location.map(|l| l.label()),
        allocation,
        requirements,
        staffing: staffing(),
    })
}

pub fn business_case(
    form: &BusinessCaseForm,
    config: &PlannerConfig,
) -> Result<BusinessCaseResult> {
    let result = BusinessCase::new(config.business_case.clone())
        .analyze(&form.input())
        .context("business case analysis failed")?;
    info!("{}", break_even_summary(&result));
    Ok(result)
}

pub fn projection(
    form: &ProjectionForm,
    config: &PlannerConfig,
) -> Result<OperatingResult> {
    OperatingProjection::new(config.projection.clone())
        .project(&form.input())
        .context("operating projection failed")
}

pub fn layout(form: &LayoutForm) -> Result<LayoutReport> {
    let area = form
        .factory_size()
        .map(area_allocation)
        .transpose()
        .context("area allocation failed")?;
    let automation = form.automation();
    let layout = generate_layout(&form.input()).context("layout generation failed")?;

    Ok(LayoutReport {
        area_allocation: area,
        automation,
        automation_benefits: automation.benefits(),
        equipment_categories: equipment_categories(),
        layout,
        production_steps: production_steps(),
    })
}

pub fn suppliers(form: &SupplierForm) -> Result<SupplierAnalysis> {
    analyze_suppliers(form.count(), form.scarcity()).context("supplier analysis failed")
}

/// Uses the imported actuals when a CSV is given, otherwise the baseline
/// quarters labelled from the form's starting quarter.
pub fn progress(form: &ProgressForm) -> Result<ProgressReport> {
    let quarters = match &form.actuals {
        Some(path) => csv_loader::load_from_file(path)
            .with_context(|| format!("cannot import actuals from '{}'", path.display()))?,
        None => baseline_quarters(form.start_quarter(), form.year()),
    };
    let targets = form.targets();
    track_progress(quarters, targets.as_ref()).context("progress tracking failed")
}

pub fn risk(form: &RiskForm) -> RiskReport {
    RiskReport {
        assessment: assess_risk(&form.profile()),
        monitoring: monitoring_plan(),
        all_mitigation: form.all_mitigation,
    }
}

pub fn quality(form: &QualityForm) -> QualityPlan {
    quality_plan(form.standard())
}

pub fn market(form: &MarketForm) -> MarketAnalysis {
    analyze_market(form.segment())
}

pub fn flowchart(form: &FlowchartForm) -> Result<FlowchartReport> {
    let mut tracker = FlowTracker::new();
    tracker.go_to(form.step()).context("invalid flowchart step")?;
    for _ in 0..form.advance() {
        tracker.advance();
    }

    Ok(FlowchartReport {
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
        level: form.level().detail(),
        recommendations: optimization_recommendations(),
    })
}
