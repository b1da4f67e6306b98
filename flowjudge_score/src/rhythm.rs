// Rhythm checker: how evenly the verses are sized in morae.
//
// Each verse's mora count is taken from its kana (kanji carry no reading
// here and count zero). The score is one minus the coefficient of variation
// of those counts: identical verse lengths score 100, a spread as large as
// the mean scores 0.
//
// Two fallbacks: fewer than two verses at all gives 0 (nothing to measure),
// fewer than two verses with countable morae gives 10 (some signal, not
// enough to judge).

use flowjudge_lang::count_morae;

use crate::distance::percent;
use crate::result::ScoreResult;
use crate::verse::split_verses;

/// Score returned when verses exist but too few have countable morae.
pub const INSUFFICIENT_RHYTHM_SCORE: u8 = 10;

/// Population mean and standard deviation of a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spread {
    pub mean: f64,
    pub std_dev: f64,
}

impl Spread {
    /// Returns `None` for an empty sample.
    pub fn of(values: &[usize]) -> Option<Spread> {
        if values.is_empty() {
            return None;
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<usize>() as f64 / n;
        let variance = values
            .iter()
            .map(|&v| (v as f64 - mean).powi(2))
            .sum::<f64>()
            / n;
        Some(Spread {
            mean,
            std_dev: variance.sqrt(),
        })
    }
}

/// Score the rhythmic stability of `text`.
pub fn score_rhythm(text: &str) -> ScoreResult {
    let verses = split_verses(text, 0);
    if verses.len() < 2 {
        return ScoreResult::new(0, "not enough verses to compare");
    }

    let counts: Vec<usize> = verses
        .iter()
        .map(|verse| count_morae(verse))
        .filter(|&count| count > 0)
        .collect();
    if counts.len() < 2 {
        return ScoreResult::new(INSUFFICIENT_RHYTHM_SCORE, "not enough countable verses");
    }

    // At least two positive counts, so the mean is positive.
    let Some(Spread { mean, std_dev }) = Spread::of(&counts) else {
        return ScoreResult::new(INSUFFICIENT_RHYTHM_SCORE, "not enough countable verses");
    };

    // Tiers use the unrounded value.
    let raw = (1.0 - std_dev / mean) * 100.0;
    let score = percent(raw);
    let tier = if raw > 80.0 {
        "very stable rhythm"
    } else if raw > 50.0 {
        "good rhythm"
    } else {
        "rhythm is somewhat unstable"
    };
    ScoreResult::new(
        score,
        format!("mora count per verse averages {mean:.1} (std dev {std_dev:.1}), {tier}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spread_of_empty() {
        assert_eq!(Spread::of(&[]), None);
    }

    #[test]
    fn test_spread_population() {
        let spread = Spread::of(&[2, 4, 4, 4, 5, 5, 7, 9]).unwrap();
        assert!((spread.mean - 5.0).abs() < 1e-9);
        assert!((spread.std_dev - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_verse() {
        let result = score_rhythm("すしをたべる");
        assert_eq!(result.score, 0);
        assert!(result.detail.contains("not enough verses"));
    }

    #[test]
    fn test_not_enough_countable_verses() {
        let result = score_rhythm("赤身、寿司、すし");
        assert_eq!(result.score, 10);
        assert_eq!(result.detail, "not enough countable verses");
    }

    #[test]
    fn test_identical_counts_score_full() {
        let result = score_rhythm("まぐろ、さかな、いわし");
        assert_eq!(result.score, 100);
        assert!(result.detail.contains("std dev 0.0"));
        assert!(result.detail.contains("very stable rhythm"));
    }

    #[test]
    fn test_marks_do_not_count() {
        // ジョーズ and トップ are both 2 morae.
        let result = score_rhythm("ジョーズ\nトップ");
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_uneven_counts() {
        // Counts 2 and 6: mean 4, std dev 2 → 50.
        let result = score_rhythm("トロ、すしをたべる");
        assert_eq!(result.score, 50);
        assert!(result.detail.contains("averages 4.0"));
        assert!(result.detail.contains("rhythm is somewhat unstable"));
    }

    #[test]
    fn test_tier_uses_unrounded_score() {
        // Counts 5, 6, 8: raw score 80.3 rounds to 80 but is above the
        // very-stable threshold.
        let result = score_rhythm("アイウエオ、アイウエオア、アイウエオアイウ");
        assert_eq!(result.score, 80);
        assert!(result.detail.contains("averages 6.3 (std dev 1.2)"));
        assert!(result.detail.contains("very stable rhythm"));
    }

    #[test]
    fn test_good_rhythm_tier() {
        // Counts 4 and 6: mean 5, std dev 1 → 80.
        let result = score_rhythm("さかなだ、すしをたべる");
        assert_eq!(result.score, 80);
        assert!(result.detail.contains("good rhythm"));
    }

    #[test]
    fn test_score_never_negative() {
        // Counts 1, 1, 1, 20: the spread exceeds the mean.
        let result = score_rhythm("ア、イ、ウ、アイウエオアイウエオアイウエオアイウエオ");
        assert_eq!(result.score, 0);
    }
}
