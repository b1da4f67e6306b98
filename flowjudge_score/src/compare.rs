// Side-by-side comparison of two readings' vowel skeletons.
//
// Used by the CLI's `--compare` mode to show how close two phrases sound
// before they are dropped into a verse. Both readings go through the same
// extraction as the rhyme checker, so a high similarity here means the pair
// would also score well as verse endings.

use flowjudge_lang::{VowelSkeleton, extract_vowels};
use serde::Serialize;

use crate::distance::{levenshtein, similarity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VowelComparison {
    pub left: VowelSkeleton,
    pub right: VowelSkeleton,
    /// Edit distance between the two skeletons, in vowels.
    pub distance: usize,
    /// 0-100; 100 means identical skeletons (including two empty ones).
    pub similarity: u8,
}

pub fn compare_readings(a: &str, b: &str) -> VowelComparison {
    let left = extract_vowels(a);
    let right = extract_vowels(b);
    let distance = levenshtein(left.as_slice(), right.as_slice());
    let similarity = similarity(distance, left.len(), right.len());
    VowelComparison {
        left,
        right,
        distance,
        similarity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_rhyme() {
        // カマボコ and サカモト both reduce to AAOO.
        let cmp = compare_readings("カマボコ", "サカモト");
        assert_eq!(cmp.left.to_string(), "AAOO");
        assert_eq!(cmp.distance, 0);
        assert_eq!(cmp.similarity, 100);
    }

    #[test]
    fn test_hiragana_matches_katakana() {
        let cmp = compare_readings("まぐろ", "マグロ");
        assert_eq!(cmp.similarity, 100);
    }

    #[test]
    fn test_partial_match() {
        // AAOO vs AAOI: one substitution over four vowels.
        let cmp = compare_readings("カマボコ", "カマボチ");
        assert_eq!(cmp.distance, 1);
        assert_eq!(cmp.similarity, 75);
    }

    #[test]
    fn test_empty_side() {
        let cmp = compare_readings("", "トロ");
        assert_eq!(cmp.distance, 2);
        assert_eq!(cmp.similarity, 0);
    }
}
