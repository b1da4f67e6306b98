// Keyword checker: how many of the theme's keywords the verse uses.
//
// Each keyword counts once, however often it appears. Matching is a
// case-insensitive substring test, so "dha" in the transcript hits the
// keyword "DHA". The score saturates once `saturation` distinct keywords
// have been used.

use crate::distance::percent;
use crate::result::ScoreResult;

/// Distinct keyword hits needed for a full score.
pub const KEYWORD_SATURATION: usize = 5;

/// How many matched keywords the detail string names.
const LISTED_HITS: usize = 3;

/// Score `text` against `keywords` with the default saturation.
pub fn score_keywords(text: &str, keywords: &[String]) -> ScoreResult {
    score_keywords_with(text, keywords, KEYWORD_SATURATION)
}

/// Score `text` against `keywords`; `saturation` distinct hits give 100.
pub fn score_keywords_with(text: &str, keywords: &[String], saturation: usize) -> ScoreResult {
    if text.is_empty() || keywords.is_empty() {
        return ScoreResult::new(0, "no text or no keywords");
    }

    let haystack = text.to_lowercase();
    let hits: Vec<&str> = keywords
        .iter()
        .filter(|keyword| haystack.contains(&keyword.to_lowercase()))
        .map(String::as_str)
        .collect();

    if hits.is_empty() {
        return ScoreResult::new(0, "no keywords found");
    }

    let score = percent(hits.len() as f64 / saturation.max(1) as f64 * 100.0);
    let listed: Vec<&str> = hits.iter().take(LISTED_HITS).copied().collect();
    let detail = format!(
        "found {} keywords, including {}",
        hits.len(),
        listed.join(", ")
    );
    ScoreResult::new(score, detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_empty_inputs() {
        let kws = keywords(&["トロ"]);
        let result = score_keywords("", &kws);
        assert_eq!(result.score, 0);
        assert_eq!(result.detail, "no text or no keywords");

        let result = score_keywords("トロ", &[]);
        assert_eq!(result.score, 0);
        assert_eq!(result.detail, "no text or no keywords");
    }

    #[test]
    fn test_no_hits() {
        let result = score_keywords("今日は晴れ", &keywords(&["トロ", "寿司"]));
        assert_eq!(result.score, 0);
        assert!(result.detail.contains("no keywords found"));
    }

    #[test]
    fn test_five_hits_is_full_score() {
        let kws = keywords(&["赤身", "トロ", "寿司", "大間", "初競り", "ツナ缶"]);
        let result = score_keywords("赤身とトロの寿司、大間の初競り", &kws);
        assert_eq!(result.score, 100);
        assert!(result.detail.contains("found 5 keywords"));
    }

    #[test]
    fn test_score_saturates() {
        let kws = keywords(&["a", "b", "c", "d", "e", "f", "g"]);
        assert_eq!(score_keywords("abcdefg", &kws).score, 100);
    }

    #[test]
    fn test_repeats_count_once() {
        let result = score_keywords("トロトロトロ", &keywords(&["トロ"]));
        assert_eq!(result.score, 20);
    }

    #[test]
    fn test_case_insensitive() {
        let result = score_keywords("dha is good", &keywords(&["DHA"]));
        assert_eq!(result.score, 20);
    }

    #[test]
    fn test_detail_lists_first_three() {
        let kws = keywords(&["赤身", "トロ", "寿司", "海の幸"]);
        let result = score_keywords("赤身、トロ、寿司を食べる、海の幸を味わう", &kws);
        assert_eq!(result.score, 80);
        assert_eq!(result.detail, "found 4 keywords, including 赤身, トロ, 寿司");
    }

    #[test]
    fn test_custom_saturation() {
        let kws = keywords(&["トロ", "寿司"]);
        assert_eq!(score_keywords_with("トロ寿司", &kws, 2).score, 100);
        assert_eq!(score_keywords_with("トロ", &kws, 3).score, 33);
    }
}
