// Context checker: whether theme keywords are used together.
//
// A positional heuristic, not semantics: every occurrence of every keyword is
// located, occurrences are ordered by position, and each adjacent pair of
// *different* keywords separated by at most `window` chars counts as one
// contextual use. Three such uses give a full score.
//
// Positions are char indices into the transcript. Matching is literal and
// case-insensitive; case folding is done per char so indices line up with
// the original text.

use crate::distance::percent;
use crate::result::ScoreResult;

/// Max chars between the end of one keyword and the start of the next.
pub const CONTEXT_WINDOW: usize = 15;

/// Contextual uses needed for a full score.
pub const CONTEXT_SATURATION: usize = 3;

/// Score returned when fewer than two keyword occurrences exist.
pub const INSUFFICIENT_CONTEXT_SCORE: u8 = 10;

/// One keyword occurrence in the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordHit<'a> {
    pub keyword: &'a str,
    /// Char index of the first matched char.
    pub start: usize,
    /// Length of the keyword in chars.
    pub len: usize,
}

impl KeywordHit<'_> {
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Lowercase a char without changing the char count. Chars whose lowercase
/// form expands to several chars are left as they are.
fn fold(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

fn folded(text: &str) -> Vec<char> {
    text.chars().map(fold).collect()
}

/// Every non-overlapping occurrence of each keyword, sorted by position.
/// Ties keep keyword order.
pub fn find_hits<'a>(text: &str, keywords: &'a [String]) -> Vec<KeywordHit<'a>> {
    let haystack = folded(text);
    let mut hits = Vec::new();

    for keyword in keywords {
        let needle = folded(keyword);
        if needle.is_empty() {
            continue;
        }
        let mut i = 0;
        while i + needle.len() <= haystack.len() {
            if haystack[i..].starts_with(&needle) {
                hits.push(KeywordHit {
                    keyword: keyword.as_str(),
                    start: i,
                    len: needle.len(),
                });
                i += needle.len();
            } else {
                i += 1;
            }
        }
    }

    hits.sort_by_key(|hit| hit.start);
    hits
}

/// Score keyword co-occurrence with the default window and saturation.
pub fn score_meaning(text: &str, keywords: &[String]) -> ScoreResult {
    score_meaning_with(text, keywords, CONTEXT_WINDOW, CONTEXT_SATURATION)
}

/// Score keyword co-occurrence: pairs of different keywords at most `window`
/// chars apart count, `saturation` of them give 100.
pub fn score_meaning_with(
    text: &str,
    keywords: &[String],
    window: usize,
    saturation: usize,
) -> ScoreResult {
    let hits = find_hits(text, keywords);
    if hits.len() < 2 {
        return ScoreResult::new(
            INSUFFICIENT_CONTEXT_SCORE,
            "too few keywords to evaluate context",
        );
    }

    let context_count = hits
        .windows(2)
        .filter(|pair| {
            let (first, second) = (&pair[0], &pair[1]);
            // Overlapping hits have a negative gap and always count as close.
            let close = second.start <= first.end() || second.start - first.end() <= window;
            first.keyword != second.keyword && close
        })
        .count();

    let score = percent(context_count as f64 / saturation.max(1) as f64 * 100.0);
    let detail = if context_count > 0 {
        format!("keywords used in close context {context_count} times")
    } else {
        "keywords appear scattered, little context".to_string()
    };
    ScoreResult::new(score, detail)
}
