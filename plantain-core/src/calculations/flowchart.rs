//! System flowchart: the processing chain, the four analysis levels and a
//! tracker for stepping through the chain.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::ProcessStep;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlowError {
    #[error("step {step} is out of range, expected 1 to {last}")]
    StepOutOfRange { step: usize, last: usize },
}

const FLOW_STEPS: &[ProcessStep] = &[
    ProcessStep {
        number: 1,
        name: "Raw Material Reception",
        description: "Receive and inspect plantains",
    },
    ProcessStep {
        number: 2,
        name: "Cleaning & Washing",
        description: "Remove dirt and contaminants",
    },
    ProcessStep {
        number: 3,
        name: "Peeling",
        description: "Remove plantain peels",
    },
    ProcessStep {
        number: 4,
        name: "Slicing",
        description: "Cut into uniform pieces",
    },
    ProcessStep {
        number: 5,
        name: "Blanching",
        description: "Steam treatment to preserve nutrients",
    },
    ProcessStep {
        number: 6,
        name: "Drying/Dehydration",
        description: "Remove moisture content",
    },
    ProcessStep {
        number: 7,
        name: "Grinding",
        description: "Convert to fine flour",
    },
    ProcessStep {
        number: 8,
        name: "Sieving",
        description: "Ensure uniform particle size",
    },
    ProcessStep {
        number: 9,
        name: "Quality Testing",
        description: "Check moisture, fineness, purity",
    },
    ProcessStep {
        number: 10,
        name: "Packaging",
        description: "Package in appropriate containers",
    },
    ProcessStep {
        number: 11,
        name: "Labeling & Storage",
        description: "Final product preparation",
    },
];

/// The eleven-step processing chain.
pub fn flow_steps() -> &'static [ProcessStep] {
    FLOW_STEPS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisLevel {
    #[default]
    Plant,
    Factory,
    Enterprise,
    Integrated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelMetric {
    pub name: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelDetail {
    pub level: AnalysisLevel,
    pub title: &'static str,
    pub description: &'static str,
    pub items: &'static [&'static str],
    pub metrics: &'static [LevelMetric],
}

const PLANT: LevelDetail = LevelDetail {
    level: AnalysisLevel::Plant,
    title: "Plant Level Analysis",
    description: "Individual processing equipment and operations",
    items: &[
        "Washing Station Optimization",
        "Peeling Machine Efficiency",
        "Drying System Performance",
        "Grinding Mill Capacity",
        "Quality Control Points",
    ],
    metrics: &[
        LevelMetric { name: "Equipment Efficiency", value: "85%" },
        LevelMetric { name: "Processing Speed", value: "500 kg/hour" },
        LevelMetric { name: "Quality Score", value: "92%" },
    ],
};

const FACTORY: LevelDetail = LevelDetail {
    level: AnalysisLevel::Factory,
    title: "Factory Level Planning",
    description: "Overall facility management and coordination",
    items: &[
        "Production Line Integration",
        "Material Flow Optimization",
        "Waste Management System",
        "Utility Distribution",
        "Safety & Compliance",
    ],
    metrics: &[
        LevelMetric { name: "Overall Efficiency", value: "78%" },
        LevelMetric { name: "Daily Capacity", value: "2,000 kg" },
        LevelMetric { name: "Waste Reduction", value: "15%" },
    ],
};

const ENTERPRISE: LevelDetail = LevelDetail {
    level: AnalysisLevel::Enterprise,
    title: "Enterprise Level Strategy",
    description: "Business-wide planning and management",
    items: &[
        "Supply Chain Management",
        "Market Distribution Strategy",
        "Financial Planning & Control",
        "Human Resource Management",
        "Technology Integration",
    ],
    metrics: &[
        LevelMetric { name: "Market Share", value: "12%" },
        LevelMetric { name: "Revenue Growth", value: "+25%" },
        LevelMetric { name: "ROI", value: "18%" },
    ],
};

const INTEGRATED: LevelDetail = LevelDetail {
    level: AnalysisLevel::Integrated,
    title: "Integrated Business Solution",
    description: "Holistic approach to business optimization",
    items: &[
        "End-to-End Process Automation",
        "Real-time Monitoring Systems",
        "Predictive Maintenance",
        "Customer Relationship Management",
        "Sustainability Initiatives",
    ],
    metrics: &[
        LevelMetric { name: "Automation Level", value: "65%" },
        LevelMetric { name: "System Integration", value: "80%" },
        LevelMetric { name: "Sustainability Score", value: "75%" },
    ],
};

impl AnalysisLevel {
    pub fn all() -> &'static [AnalysisLevel] {
        &[
            Self::Plant,
            Self::Factory,
            Self::Enterprise,
            Self::Integrated,
        ]
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plant" => Some(Self::Plant),
            "factory" => Some(Self::Factory),
            "enterprise" => Some(Self::Enterprise),
            "integrated" => Some(Self::Integrated),
            _ => None,
        }
    }

    pub fn detail(&self) -> &'static LevelDetail {
        match self {
            Self::Plant => &PLANT,
            Self::Factory => &FACTORY,
            Self::Enterprise => &ENTERPRISE,
            Self::Integrated => &INTEGRATED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub heading: &'static str,
    pub items: &'static [&'static str],
}

pub fn optimization_recommendations() -> &'static [Recommendation] {
    &[
        Recommendation {
            heading: "Process Improvements",
            items: &[
                "Implement automated conveyor systems",
                "Install real-time monitoring sensors",
                "Optimize drying temperature profiles",
                "Integrate quality control checkpoints",
            ],
        },
        Recommendation {
            heading: "Technology Integration",
            items: &[
                "Deploy IoT sensors for data collection",
                "Implement predictive maintenance",
                "Use AI for quality assessment",
                "Integrate ERP system for management",
            ],
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

impl StepStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Active => "active",
            Self::Pending => "pending",
        }
    }
}

/// Tracks the active step of the processing chain.
///
/// Steps are numbered from 1. Steps before the current one are completed,
/// the current one is active and the rest are pending.
///
/// ```
/// use plantain_core::calculations::flowchart::{FlowTracker, StepStatus};
///
/// let mut tracker = FlowTracker::new();
/// tracker.go_to(3).unwrap();
/// assert_eq!(tracker.status(2), StepStatus::Completed);
/// assert_eq!(tracker.status(3), StepStatus::Active);
/// assert_eq!(tracker.status(4), StepStatus::Pending);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowTracker {
    current: usize,
    steps: usize,
}

impl Default for FlowTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowTracker {
    pub fn new() -> Self {
        Self {
            current: 1,
            steps: FLOW_STEPS.len(),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> &'static ProcessStep {
        &FLOW_STEPS[self.current - 1]
    }

    /// Starts the flow from the first step.
    pub fn start(&mut self) {
        self.current = 1;
    }

    pub fn reset(&mut self) {
        self.current = 1;
    }

    /// Selects `step` as the active step.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::StepOutOfRange`] when `step` is not a step number.
    pub fn go_to(
        &mut self,
        step: usize,
    ) -> Result<(), FlowError> {
        if step == 0 || step > self.steps {
            return Err(FlowError::StepOutOfRange {
                step,
                last: self.steps,
            });
        }
        self.current = step;
        Ok(())
    }

    /// Moves to the next step, wrapping to the first after the last.
    pub fn advance(&mut self) -> usize {
        self.current = if self.current >= self.steps {
            debug!("flow complete, wrapping to first step");
            1
        } else {
            self.current + 1
        };
        self.current
    }

    pub fn status(
        &self,
        step: usize,
    ) -> StepStatus {
        if step < self.current {
            StepStatus::Completed
        } else if step == self.current {
            StepStatus::Active
        } else {
            StepStatus::Pending
        }
    }

    /// Every step with its status.
    pub fn statuses(&self) -> Vec<(&'static ProcessStep, StepStatus)> {
        FLOW_STEPS
            .iter()
            .map(|s| (s, self.status(s.number as usize)))
            .collect()
    }
}
