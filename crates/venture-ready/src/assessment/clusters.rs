use serde::Serialize;

/// Static peer-group band over the 0-999 total score range.
///
/// The five bands are contiguous and exhaustive: every integer score maps to
/// exactly one band. Reference data only; never mutated by user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterBand {
    pub name: &'static str,
    /// Inclusive lower bound.
    pub floor: u16,
    /// Inclusive upper bound.
    pub ceiling: u16,
    pub description: &'static str,
    pub percentile: u8,
    pub typical_stage: &'static str,
    pub success_rate: &'static str,
    pub example_sectors: &'static [&'static str],
}

pub const CLUSTER_BANDS: [ClusterBand; 5] = [
    ClusterBand {
        name: "Foundation Builders",
        floor: 0,
        ceiling: 349,
        description: "Early concepts still assembling the basics investors screen for",
        percentile: 20,
        typical_stage: "pre-seed",
        success_rate: "8% reach a first institutional round",
        example_sectors: &["consumer apps", "services", "early deep tech"],
    },
    ClusterBand {
        name: "Development Stage",
        floor: 350,
        ceiling: 499,
        description: "Working product taking shape with first signs of commitment",
        percentile: 40,
        typical_stage: "pre-seed to seed",
        success_rate: "18% reach a first institutional round",
        example_sectors: &["saas", "marketplaces", "fintech"],
    },
    ClusterBand {
        name: "Growth Candidates",
        floor: 500,
        ceiling: 649,
        description: "Validated offer with early revenue and a committed team",
        percentile: 60,
        typical_stage: "seed",
        success_rate: "34% close their target round",
        example_sectors: &["saas", "healthtech", "climate"],
    },
    ClusterBand {
        name: "Scaling Accelerators",
        floor: 650,
        ceiling: 799,
        description: "Repeatable traction and structured financials ready to scale",
        percentile: 80,
        typical_stage: "seed to series A",
        success_rate: "55% close their target round",
        example_sectors: &["b2b saas", "fintech", "logistics"],
    },
    ClusterBand {
        name: "Investment Ready Leaders",
        floor: 800,
        ceiling: 999,
        description: "Metrics, team, and momentum at the level lead investors expect",
        percentile: 95,
        typical_stage: "series A and beyond",
        success_rate: "78% close their target round",
        example_sectors: &["b2b saas", "ai infrastructure", "biotech"],
    },
];

/// Returns the unique band containing the total score. Sector and stage
/// hints are not part of the banding rule yet, so the lookup is total over
/// the score alone.
pub fn band_for(total_score: u16) -> &'static ClusterBand {
    let capped = total_score.min(999);
    CLUSTER_BANDS
        .iter()
        .find(|band| capped >= band.floor && capped <= band.ceiling)
        .unwrap_or(&CLUSTER_BANDS[0])
}
