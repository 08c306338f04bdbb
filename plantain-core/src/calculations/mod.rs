//! Calculators for the nine planning modules.
//!
//! Each submodule is a pure function of its inputs: form values go in,
//! a result struct comes out. Tunable constants live in `*Config` structs
//! that validate themselves before use.

pub mod business_case;
pub mod common;
pub mod factory_layout;
pub mod flowchart;
pub mod investment;
pub mod market;
pub mod progress;
pub mod projection;
pub mod risk;
pub mod supplier;

pub use business_case::{
    BusinessCase, BusinessCaseConfig, BusinessCaseError, BusinessCaseInput, BusinessCaseResult,
};
pub use factory_layout::{FactoryLayout, LayoutError, LayoutInput, LayoutType};
pub use flowchart::{FlowError, FlowTracker};
pub use investment::{InvestmentConfig, InvestmentError, InvestmentPlanner, staffing};
pub use market::{MarketSegment, analyze_market};
pub use progress::{ProgressError, ProgressReport, track_progress};
pub use projection::{
    OperatingInput, OperatingProjection, OperatingResult, ProjectionConfig, ProjectionError,
};
pub use risk::{RiskAssessment, RiskProfile, assess_risk};
pub use supplier::{SupplierAnalysis, SupplierError, analyze_suppliers};
