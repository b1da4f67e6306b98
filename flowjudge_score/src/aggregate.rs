// Aggregation: combines the four checker scores into one total.
//
// The total is a weighted sum of the keyword, rhyme, rhythm and meaning
// scores, rounded and clamped to 0-100, paired with a four-tier verdict
// message. Keyword use and rhyme dominate the default weights.
//
// Weights are validated whenever they are built or deserialized: each must
// be finite and in [0, 1], and together they must sum to 1.0, so a total
// can never leave the 0-100 range.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::distance::percent;
use crate::error::JudgeError;
use crate::result::{ScoreResult, TotalScore, Verdict};

/// Tolerance when checking that weights sum to 1.0.
const WEIGHT_SUM_EPSILON: f64 = 1e-9;

/// Relative importance of each checker in the total. Sums to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWeights")]
pub struct ScoringWeights {
    keyword: f64,
    rhyme: f64,
    rhythm: f64,
    meaning: f64,
}

/// Unvalidated weights as they appear in a config file.
#[derive(Debug, Deserialize)]
struct RawWeights {
    keyword: f64,
    rhyme: f64,
    rhythm: f64,
    meaning: f64,
}

impl TryFrom<RawWeights> for ScoringWeights {
    type Error = JudgeError;

    fn try_from(raw: RawWeights) -> Result<Self, Self::Error> {
        ScoringWeights::new(raw.keyword, raw.rhyme, raw.rhythm, raw.meaning)
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        ScoringWeights {
            keyword: 0.35,
            rhyme: 0.30,
            rhythm: 0.15,
            meaning: 0.20,
        }
    }
}

impl ScoringWeights {
    /// Build validated weights.
    pub fn new(keyword: f64, rhyme: f64, rhythm: f64, meaning: f64) -> Result<Self, JudgeError> {
        let weights = ScoringWeights {
            keyword,
            rhyme,
            rhythm,
            meaning,
        };
        for (name, value) in weights.named() {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(JudgeError::InvalidWeights(format!(
                    "{name} weight {value} is outside [0, 1]"
                )));
            }
        }
        let sum = weights.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(JudgeError::InvalidWeights(format!(
                "weights sum to {sum}, expected 1.0"
            )));
        }
        Ok(weights)
    }

    pub fn keyword(&self) -> f64 {
        self.keyword
    }

    pub fn rhyme(&self) -> f64 {
        self.rhyme
    }

    pub fn rhythm(&self) -> f64 {
        self.rhythm
    }

    pub fn meaning(&self) -> f64 {
        self.meaning
    }

    pub fn sum(&self) -> f64 {
        self.keyword + self.rhyme + self.rhythm + self.meaning
    }

    fn named(&self) -> [(&'static str, f64); 4] {
        [
            ("keyword", self.keyword),
            ("rhyme", self.rhyme),
            ("rhythm", self.rhythm),
            ("meaning", self.meaning),
        ]
    }
}

/// Combine checker results with the default weights.
pub fn aggregate(
    keyword: ScoreResult,
    rhyme: ScoreResult,
    rhythm: ScoreResult,
    meaning: ScoreResult,
) -> TotalScore {
    aggregate_with(&ScoringWeights::default(), keyword, rhyme, rhythm, meaning)
}

/// Combine checker results with custom weights.
pub fn aggregate_with(
    weights: &ScoringWeights,
    keyword: ScoreResult,
    rhyme: ScoreResult,
    rhythm: ScoreResult,
    meaning: ScoreResult,
) -> TotalScore {
    let weighted = f64::from(keyword.score) * weights.keyword
        + f64::from(rhyme.score) * weights.rhyme
        + f64::from(rhythm.score) * weights.rhythm
        + f64::from(meaning.score) * weights.meaning;
    let total_score = percent(weighted);
    let verdict = Verdict::from_total(total_score);

    debug!(
        keyword = keyword.score,
        rhyme = rhyme.score,
        rhythm = rhythm.score,
        meaning = meaning.score,
        total = total_score,
        ?verdict,
        "aggregated score"
    );

    TotalScore {
        keyword,
        rhyme,
        rhythm,
        meaning,
        total_score,
        final_message: verdict.message().to_string(),
    }
}
