use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Staff roles for a 1000 kg/day plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaffRole {
    ProductionManager,
    QualityController,
    MachineOperator,
    GeneralWorker,
    Security,
    Cleaner,
    Accountant,
    SalesMarketing,
}

impl StaffRole {
    pub fn all() -> &'static [StaffRole] {
        &[
            Self::ProductionManager,
            Self::QualityController,
            Self::MachineOperator,
            Self::GeneralWorker,
            Self::Security,
            Self::Cleaner,
            Self::Accountant,
            Self::SalesMarketing,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ProductionManager => "Production Manager",
            Self::QualityController => "Quality Controller",
            Self::MachineOperator => "Machine Operators",
            Self::GeneralWorker => "General Workers",
            Self::Security => "Security",
            Self::Cleaner => "Cleaner",
            Self::Accountant => "Accountant",
            Self::SalesMarketing => "Sales Marketing",
        }
    }

    /// Headcount required for this role.
    pub fn headcount(&self) -> u32 {
        match self {
            Self::ProductionManager => 1,
            Self::QualityController => 1,
            Self::MachineOperator => 4,
            Self::GeneralWorker => 6,
            Self::Security => 2,
            Self::Cleaner => 1,
            Self::Accountant => 1,
            Self::SalesMarketing => 1,
        }
    }

    /// Monthly salary per person in naira.
    pub fn monthly_salary(&self) -> Decimal {
        match self {
            Self::ProductionManager => dec!(150000),
            Self::QualityController => dec!(120000),
            Self::MachineOperator => dec!(60000),
            Self::GeneralWorker => dec!(40000),
            Self::Security => dec!(45000),
            Self::Cleaner => dec!(35000),
            Self::Accountant => dec!(100000),
            Self::SalesMarketing => dec!(80000),
        }
    }
}
