use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Ordinal low / medium / high rating used for risk and scarcity inputs.
///
/// An unrated input is represented as `Option::<Level>::None` and scores 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub fn all() -> &'static [Level] {
        &[Level::Low, Level::Medium, Level::High]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Case-insensitive parse of `low`, `medium` or `high`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Ordinal score: low = 1, medium = 2, high = 3.
    pub fn score(&self) -> Decimal {
        match self {
            Self::Low => Decimal::ONE,
            Self::Medium => Decimal::TWO,
            Self::High => Decimal::from(3),
        }
    }

    /// Human label, e.g. "Medium Risk".
    pub fn risk_label(&self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Score of an optional level; unrated inputs count as zero.
pub fn level_score(level: Option<Level>) -> Decimal {
    level.map(|l| l.score()).unwrap_or(Decimal::ZERO)
}

/// Label of an optional level; unrated inputs read "Not Assessed".
pub fn risk_label(level: Option<Level>) -> &'static str {
    level.map(|l| l.risk_label()).unwrap_or("Not Assessed")
}
