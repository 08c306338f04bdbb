mod level;
mod module;
mod process;
mod quality_standard;
mod staff;

pub use level::{Level, level_score, risk_label};
pub use module::PlanningModule;
pub use process::ProcessStep;
pub use quality_standard::{
    QualityPlan, QualityStandard, RoadmapPhase, StandardDetail, TestingProtocol,
    implementation_roadmap, quality_plan, testing_protocols,
};
pub use staff::StaffRole;
