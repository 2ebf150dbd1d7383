use serde::{Deserialize, Serialize};

/// User-customizable weights combining the four category scores into the
/// 0-999 total. At most one profile is the default per founder; saving
/// overwrites the previous one (last writer wins).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringProfile {
    pub business_idea: f64,
    pub financials: f64,
    pub team: f64,
    pub traction: f64,
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self {
            business_idea: 0.30,
            financials: 0.25,
            team: 0.25,
            traction: 0.20,
        }
    }
}

impl ScoringProfile {
    /// Renormalizes the weights to sum to 1.0.
    ///
    /// An all-zero profile is returned unchanged; dividing by a zero sum
    /// would poison every weight, and the aggregator treats the degenerate
    /// profile as scoring everything to the floor.
    pub fn normalized(&self) -> Self {
        let sum = self.business_idea + self.financials + self.team + self.traction;
        if sum.abs() < f64::EPSILON || (sum - 1.0).abs() < 1e-9 {
            return *self;
        }

        Self {
            business_idea: self.business_idea / sum,
            financials: self.financials / sum,
            team: self.team / sum,
            traction: self.traction / sum,
        }
    }

    /// Blends the four category scores into the bounded total.
    ///
    /// Full marks across all categories must land exactly on the 999
    /// ceiling; all zeroes must land on 0.
    pub fn total_score(&self, business_idea: u8, financials: u8, team: u8, traction: u8) -> u16 {
        let weights = self.normalized();
        let blended = weights.business_idea * f64::from(business_idea) / 100.0
            + weights.financials * f64::from(financials) / 100.0
            + weights.team * f64::from(team) / 100.0
            + weights.traction * f64::from(traction) / 100.0;

        let total = (999.0 * blended + 0.5).floor();
        total.clamp(0.0, 999.0) as u16
    }
}
