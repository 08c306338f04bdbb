//! Market segments, share split, competitors and the demand forecast.
//!
//! Segment sizes are expressed in millions of naira. The demand forecast is
//! the published five-year table for the four single-channel segments.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketSegment {
    #[default]
    Retail,
    Wholesale,
    Industrial,
    Export,
    Mixed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentProfile {
    pub segment: MarketSegment,
    pub name: &'static str,
    pub description: &'static str,
    /// Market size in millions of naira.
    pub size_millions: Decimal,
    /// Annual growth as a fraction.
    pub growth_rate: Decimal,
    pub competition: &'static str,
    pub margin: &'static str,
    pub channels: &'static [&'static str],
    pub strategy: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketShare {
    pub name: &'static str,
    pub percent: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Competitor {
    pub name: &'static str,
    pub market_share: u32,
    pub strength: &'static str,
    pub weakness: &'static str,
}

/// One forecast year across the four single-channel segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandForecastYear {
    pub year: i32,
    pub retail: Decimal,
    pub wholesale: Decimal,
    pub industrial: Decimal,
    pub export: Decimal,
}

impl DemandForecastYear {
    pub fn total(&self) -> Decimal {
        self.retail + self.wholesale + self.industrial + self.export
    }
}

impl MarketSegment {
    pub fn all() -> &'static [MarketSegment] {
        &[
            Self::Retail,
            Self::Wholesale,
            Self::Industrial,
            Self::Export,
            Self::Mixed,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Retail => "retail",
            Self::Wholesale => "wholesale",
            Self::Industrial => "industrial",
            Self::Export => "export",
            Self::Mixed => "mixed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "retail" => Some(Self::Retail),
            "wholesale" => Some(Self::Wholesale),
            "industrial" => Some(Self::Industrial),
            "export" => Some(Self::Export),
            "mixed" => Some(Self::Mixed),
            _ => None,
        }
    }

    pub fn profile(&self) -> SegmentProfile {
        match self {
            Self::Retail => SegmentProfile {
                segment: *self,
                name: "Retail Consumer",
                description: "Direct sales to end consumers through retail outlets",
                size_millions: dec!(2500),
                growth_rate: dec!(0.15),
                competition: "High",
                margin: "25-35%",
                channels: &[
                    "Supermarkets",
                    "Local stores",
                    "Online platforms",
                    "Farmers markets",
                ],
                strategy: "Brand building, quality assurance, competitive pricing",
            },
            Self::Wholesale => SegmentProfile {
                segment: *self,
                name: "Wholesale Distribution",
                description: "Bulk sales to distributors and retailers",
                size_millions: dec!(1800),
                growth_rate: dec!(0.12),
                competition: "Medium",
                margin: "15-25%",
                channels: &["Distributors", "Wholesalers", "Retail chains", "Food service"],
                strategy: "Volume pricing, logistics optimization, relationship building",
            },
            Self::Industrial => SegmentProfile {
                segment: *self,
                name: "Food Processing Industries",
                description: "B2B sales to food manufacturers and processors",
                size_millions: dec!(3200),
                growth_rate: dec!(0.20),
                competition: "Low",
                margin: "20-30%",
                channels: &[
                    "Bakeries",
                    "Snack manufacturers",
                    "Baby food companies",
                    "Health food producers",
                ],
                strategy: "Consistent quality, bulk supply, technical support",
            },
            Self::Export => SegmentProfile {
                segment: *self,
                name: "Export Market",
                description: "International sales to global markets",
                size_millions: dec!(5500),
                growth_rate: dec!(0.25),
                competition: "Medium",
                margin: "35-50%",
                channels: &[
                    "Export agents",
                    "International distributors",
                    "Direct importers",
                    "E-commerce",
                ],
                strategy: "Quality certification, competitive pricing, reliable supply",
            },
            Self::Mixed => SegmentProfile {
                segment: *self,
                name: "Mixed Portfolio",
                description: "Diversified approach across multiple segments",
                size_millions: dec!(12000),
                growth_rate: dec!(0.18),
                competition: "Varied",
                margin: "25-40%",
                channels: &[
                    "All channels combined",
                    "Risk diversification",
                    "Market penetration",
                ],
                strategy: "Portfolio management, segment optimization, risk mitigation",
            },
        }
    }
}

/// Current split of plantain flour sales across segments.
pub fn market_shares() -> Vec<MarketShare> {
    vec![
        MarketShare {
            name: "Retail Consumer",
            percent: 20,
        },
        MarketShare {
            name: "Wholesale",
            percent: 15,
        },
        MarketShare {
            name: "Industrial",
            percent: 25,
        },
        MarketShare {
            name: "Export",
            percent: 35,
        },
        MarketShare {
            name: "Others",
            percent: 5,
        },
    ]
}

pub fn competitors() -> Vec<Competitor> {
    vec![
        Competitor {
            name: "Company A",
            market_share: 25,
            strength: "Brand recognition",
            weakness: "High prices",
        },
        Competitor {
            name: "Company B",
            market_share: 20,
            strength: "Distribution network",
            weakness: "Quality issues",
        },
        Competitor {
            name: "Company C",
            market_share: 15,
            strength: "Cost leadership",
            weakness: "Limited variety",
        },
        Competitor {
            name: "Company D",
            market_share: 12,
            strength: "Export focus",
            weakness: "Local presence",
        },
        Competitor {
            name: "Others",
            market_share: 28,
            strength: "Various",
            weakness: "Fragmented",
        },
    ]
}

/// A stage of the market entry plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryPhase {
    pub phase: u8,
    pub name: &'static str,
    pub actions: &'static [&'static str],
}

const ENTRY_STRATEGY: &[EntryPhase] = &[
    EntryPhase {
        phase: 1,
        name: "Market Entry",
        actions: &[
            "Focus on retail consumer segment",
            "Build brand awareness",
            "Establish distribution network",
            "Competitive pricing strategy",
        ],
    },
    EntryPhase {
        phase: 2,
        name: "Market Expansion",
        actions: &[
            "Enter industrial segment",
            "Develop wholesale channels",
            "Scale production capacity",
            "Quality certifications",
        ],
    },
    EntryPhase {
        phase: 3,
        name: "Market Leadership",
        actions: &[
            "Export market penetration",
            "Premium product lines",
            "Strategic partnerships",
            "Market dominance",
        ],
    },
];

/// Retail first, then industrial and wholesale, then export.
pub fn market_entry_strategy() -> &'static [EntryPhase] {
    ENTRY_STRATEGY
}

// year, retail, wholesale, industrial, export
const DEMAND_FORECAST: &[(i32, Decimal, Decimal, Decimal, Decimal)] = &[
    (2024, dec!(2500), dec!(1800), dec!(3200), dec!(5500)),
    (2025, dec!(2875), dec!(2016), dec!(3840), dec!(6875)),
    (2026, dec!(3306), dec!(2258), dec!(4608), dec!(8594)),
    (2027, dec!(3802), dec!(2529), dec!(5530), dec!(10742)),
    (2028, dec!(4372), dec!(2833), dec!(6636), dec!(13428)),
];

/// Five-year demand forecast in millions of naira.
///
/// ```
/// use rust_decimal_macros::dec;
/// use plantain_core::calculations::market::demand_forecast;
///
/// let forecast = demand_forecast();
/// assert_eq!(forecast[0].retail, dec!(2500));
/// assert_eq!(forecast[1].export, dec!(6875));
/// ```
pub fn demand_forecast() -> Vec<DemandForecastYear> {
    DEMAND_FORECAST
        .iter()
        .map(|&(year, retail, wholesale, industrial, export)| DemandForecastYear {
            year,
            retail,
            wholesale,
            industrial,
            export,
        })
        .collect()
}

/// Everything the market module shows for one selected segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketAnalysis {
    pub selected: SegmentProfile,
    pub shares: Vec<MarketShare>,
    pub forecast: Vec<DemandForecastYear>,
    pub competitors: Vec<Competitor>,
    pub entry_strategy: &'static [EntryPhase],
}

pub fn analyze_market(segment: MarketSegment) -> MarketAnalysis {
    MarketAnalysis {
        selected: segment.profile(),
        shares: market_shares(),
        forecast: demand_forecast(),
        competitors: competitors(),
        entry_strategy: market_entry_strategy(),
    }
}
