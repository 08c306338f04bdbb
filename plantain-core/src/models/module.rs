use serde::{Deserialize, Serialize};

/// The nine planning modules, in dashboard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanningModule {
    InvestmentPlanning,
    BusinessCaseAnalysis,
    FactoryLayoutDesign,
    SupplierManagement,
    ProgressTracking,
    RiskAssessment,
    QualityControl,
    MarketAnalysis,
    SystemFlowchart,
}

impl PlanningModule {
    pub fn all() -> &'static [PlanningModule] {
        &[
            Self::InvestmentPlanning,
            Self::BusinessCaseAnalysis,
            Self::FactoryLayoutDesign,
            Self::SupplierManagement,
            Self::ProgressTracking,
            Self::RiskAssessment,
            Self::QualityControl,
            Self::MarketAnalysis,
            Self::SystemFlowchart,
        ]
    }

    /// One-based position in the module list.
    pub fn number(&self) -> u8 {
        match self {
            Self::InvestmentPlanning => 1,
            Self::BusinessCaseAnalysis => 2,
            Self::FactoryLayoutDesign => 3,
            Self::SupplierManagement => 4,
            Self::ProgressTracking => 5,
            Self::RiskAssessment => 6,
            Self::QualityControl => 7,
            Self::MarketAnalysis => 8,
            Self::SystemFlowchart => 9,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::InvestmentPlanning => "Investment Planning",
            Self::BusinessCaseAnalysis => "Business Case Analysis",
            Self::FactoryLayoutDesign => "Factory Layout Design",
            Self::SupplierManagement => "Supplier Management",
            Self::ProgressTracking => "Progress Tracking",
            Self::RiskAssessment => "Risk Assessment",
            Self::QualityControl => "Quality Control",
            Self::MarketAnalysis => "Market Analysis",
            Self::SystemFlowchart => "System Flowchart",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::InvestmentPlanning => {
                "Available capital, land requirements, equipment and staffing costs"
            }
            Self::BusinessCaseAnalysis => {
                "Processing capacity, selling price, break-even and currency factors"
            }
            Self::FactoryLayoutDesign => "Facility planning and layout generation",
            Self::SupplierManagement => "Supply chain strategy under raw material scarcity",
            Self::ProgressTracking => "Quarterly turnover analysis and KPI monitoring",
            Self::RiskAssessment => {
                "Market, supply chain, currency, operational, regulatory and financial risk"
            }
            Self::QualityControl => "NAFDAC, ISO 22000, HACCP + Organic, pharmaceutical grade",
            Self::MarketAnalysis => "Retail, wholesale, industrial and export demand",
            Self::SystemFlowchart => "Process chain at plant, factory and enterprise level",
        }
    }
}
