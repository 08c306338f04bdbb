//! Quality certification standards, the routine testing protocols and the
//! phased roadmap for putting a quality system in place.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityStandard {
    #[default]
    Basic,
    Premium,
    Export,
    Pharmaceutical,
}

/// Static description of a certification standard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandardDetail {
    pub standard: QualityStandard,
    pub name: &'static str,
    pub description: &'static str,
    pub requirements: &'static [&'static str],
    pub benefits: &'static [&'static str],
    pub cost: &'static str,
    pub timeline: &'static str,
}

/// A recurring laboratory test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestingProtocol {
    pub test: &'static str,
    pub frequency: &'static str,
    pub method: &'static str,
    pub limit: &'static str,
}

const BASIC: StandardDetail = StandardDetail {
    standard: QualityStandard::Basic,
    name: "Basic Quality (NAFDAC Standard)",
    description: "Meets Nigerian food safety requirements",
    requirements: &[
        "Moisture content ≤ 12%",
        "Microbial count within acceptable limits",
        "Free from foreign matter",
        "Proper labeling and packaging",
        "Shelf life documentation",
    ],
    benefits: &[
        "Legal compliance in Nigeria",
        "Basic food safety assurance",
        "Local market acceptance",
        "Cost-effective implementation",
    ],
    cost: "Low",
    timeline: "2-3 months",
};

const PREMIUM: StandardDetail = StandardDetail {
    standard: QualityStandard::Premium,
    name: "Premium Quality (ISO 22000)",
    description: "International food safety management system",
    requirements: &[
        "HACCP implementation",
        "Documented quality management system",
        "Regular internal audits",
        "Staff training programs",
        "Supplier verification",
        "Traceability systems",
    ],
    benefits: &[
        "International market access",
        "Enhanced consumer confidence",
        "Systematic risk management",
        "Continuous improvement",
        "Premium pricing opportunities",
    ],
    cost: "Medium",
    timeline: "6-8 months",
};

const EXPORT: StandardDetail = StandardDetail {
    standard: QualityStandard::Export,
    name: "Export Quality (HACCP + Organic)",
    description: "Highest quality for international export",
    requirements: &[
        "Organic certification",
        "HACCP compliance",
        "Third-party audits",
        "Environmental sustainability",
        "Supply chain verification",
        "International standards compliance",
    ],
    benefits: &[
        "Access to premium export markets",
        "Higher profit margins",
        "Brand differentiation",
        "Environmental sustainability",
        "Long-term market positioning",
    ],
    cost: "High",
    timeline: "12-18 months",
};

const PHARMACEUTICAL: StandardDetail = StandardDetail {
    standard: QualityStandard::Pharmaceutical,
    name: "Pharmaceutical Grade",
    description: "Highest purity for pharmaceutical applications",
    requirements: &[
        "GMP (Good Manufacturing Practice)",
        "Pharmaceutical-grade facilities",
        "Extensive testing protocols",
        "Contamination control",
        "Batch documentation",
        "Regulatory approvals",
    ],
    benefits: &[
        "Pharmaceutical industry sales",
        "Highest profit margins",
        "Specialized market niche",
        "Regulatory compliance",
        "Premium brand positioning",
    ],
    cost: "Very High",
    timeline: "18-24 months",
};

const TESTING_PROTOCOLS: &[TestingProtocol] = &[
    TestingProtocol {
        test: "Moisture Content",
        frequency: "Every batch",
        method: "Oven drying method",
        limit: "≤ 12%",
    },
    TestingProtocol {
        test: "Particle Size",
        frequency: "Daily",
        method: "Sieve analysis",
        limit: "80% pass 100 mesh",
    },
    TestingProtocol {
        test: "Microbial Count",
        frequency: "Weekly",
        method: "Plate count method",
        limit: "< 10⁴ CFU/g",
    },
    TestingProtocol {
        test: "Heavy Metals",
        frequency: "Monthly",
        method: "ICP-MS analysis",
        limit: "Within FDA limits",
    },
    TestingProtocol {
        test: "Pesticide Residue",
        frequency: "Monthly",
        method: "GC-MS analysis",
        limit: "Below MRL",
    },
    TestingProtocol {
        test: "Nutritional Profile",
        frequency: "Quarterly",
        method: "AOAC methods",
        limit: "Label compliance",
    },
];

/// One phase of rolling out the quality system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoadmapPhase {
    pub phase: u8,
    pub name: &'static str,
    pub tasks: &'static [&'static str],
}

const IMPLEMENTATION_ROADMAP: &[RoadmapPhase] = &[
    RoadmapPhase {
        phase: 1,
        name: "Foundation",
        tasks: &[
            "Staff training",
            "Documentation setup",
            "Basic equipment",
            "Initial testing",
        ],
    },
    RoadmapPhase {
        phase: 2,
        name: "Implementation",
        tasks: &[
            "System deployment",
            "Process validation",
            "Internal audits",
            "Corrective actions",
        ],
    },
    RoadmapPhase {
        phase: 3,
        name: "Certification",
        tasks: &[
            "External audits",
            "Certification process",
            "Documentation review",
            "Final approval",
        ],
    },
    RoadmapPhase {
        phase: 4,
        name: "Maintenance",
        tasks: &[
            "Continuous monitoring",
            "Regular reviews",
            "System updates",
            "Re-certification",
        ],
    },
];

impl QualityStandard {
    pub fn all() -> &'static [QualityStandard] {
        &[
            Self::Basic,
            Self::Premium,
            Self::Export,
            Self::Pharmaceutical,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Premium => "premium",
            Self::Export => "export",
            Self::Pharmaceutical => "pharmaceutical",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Some(Self::Basic),
            "premium" => Some(Self::Premium),
            "export" => Some(Self::Export),
            "pharmaceutical" => Some(Self::Pharmaceutical),
            _ => None,
        }
    }

    pub fn detail(&self) -> &'static StandardDetail {
        match self {
            Self::Basic => &BASIC,
            Self::Premium => &PREMIUM,
            Self::Export => &EXPORT,
            Self::Pharmaceutical => &PHARMACEUTICAL,
        }
    }
}

/// Laboratory tests that apply whatever standard is chosen.
pub fn testing_protocols() -> &'static [TestingProtocol] {
    TESTING_PROTOCOLS
}

/// Same four phases whatever standard is targeted.
pub fn implementation_roadmap() -> &'static [RoadmapPhase] {
    IMPLEMENTATION_ROADMAP
}

/// Selected standard plus the routine testing schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualityPlan {
    pub standard: &'static StandardDetail,
    pub protocols: &'static [TestingProtocol],
    pub roadmap: &'static [RoadmapPhase],
}

/// Builds the quality plan for the selected standard.
pub fn quality_plan(standard: QualityStandard) -> QualityPlan {
    QualityPlan {
        standard: standard.detail(),
        protocols: testing_protocols(),
        roadmap: implementation_roadmap(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_standard_detail_matches_its_key() {
        for standard in QualityStandard::all() {
            assert_eq!(standard.detail().standard, *standard);
        }
    }

    #[test]
    fn parse_accepts_known_keys() {
        assert_eq!(
            QualityStandard::parse("Pharmaceutical"),
            Some(QualityStandard::Pharmaceutical)
        );
        assert_eq!(QualityStandard::parse("gold"), None);
    }

    #[test]
    fn default_standard_is_basic_nafdac() {
        let plan = quality_plan(QualityStandard::default());

        assert_eq!(plan.standard.name, "Basic Quality (NAFDAC Standard)");
        assert_eq!(plan.standard.timeline, "2-3 months");
        assert_eq!(plan.protocols.len(), 6);
    }

    #[test]
    fn premium_standard_lists_six_requirements() {
        let detail = QualityStandard::Premium.detail();

        assert_eq!(detail.requirements.len(), 6);
        assert_eq!(detail.cost, "Medium");
    }

    #[test]
    fn roadmap_runs_from_foundation_to_maintenance() {
        let roadmap = quality_plan(QualityStandard::Export).roadmap;

        let names: Vec<&str> = roadmap.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec!["Foundation", "Implementation", "Certification", "Maintenance"]
        );
        assert!(roadmap.iter().all(|p| p.tasks.len() == 4));
        assert_eq!(roadmap[2].tasks[3], "Final approval");
    }
}
