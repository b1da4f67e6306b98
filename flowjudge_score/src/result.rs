// Result records produced by the checkers and the aggregator.
//
// Every score carries a human-readable explanation, including the fallback
// cases ("not enough verses", "too few keywords"). Records own their
// strings so nothing borrows from the transcript once scoring returns.

use serde::{Deserialize, Serialize};

/// Highest score any checker or the aggregate can report.
pub const MAX_SCORE: u8 = 100;

/// One checker's verdict: a 0-100 score and the reason for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u8,
    pub detail: String,
}

impl ScoreResult {
    /// Build a result, clamping `score` to `MAX_SCORE`.
    pub fn new(score: u8, detail: impl Into<String>) -> Self {
        ScoreResult {
            score: score.min(MAX_SCORE),
            detail: detail.into(),
        }
    }
}

/// Qualitative tier of a total score, in increasing order of praise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// 50 or below.
    Close,
    /// Above 50.
    Solid,
    /// Above 75.
    Strong,
    /// Above 90.
    Legendary,
}

impl Verdict {
    pub fn from_total(total: u8) -> Verdict {
        match total {
            91..=u8::MAX => Verdict::Legendary,
            76..=90 => Verdict::Strong,
            51..=75 => Verdict::Solid,
            _ => Verdict::Close,
        }
    }

    /// The closing line shown with a total score.
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Legendary => "Flawless flow! King of the head!",
            Verdict::Strong => "Excellent! You rode the theme like a pro!",
            Verdict::Solid => "Nice work, keep it up!",
            Verdict::Close => "Close! Aim higher next time!",
        }
    }
}

/// The combined result for one transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalScore {
    pub keyword: ScoreResult,
    pub rhyme: ScoreResult,
    pub rhythm: ScoreResult,
    pub meaning: ScoreResult,
    pub total_score: u8,
    pub final_message: String,
}

impl TotalScore {
    pub fn verdict(&self) -> Verdict {
        Verdict::from_total(self.total_score)
    }
}
