// Rhyme checker: how closely consecutive verse endings share vowels.
//
// Japanese rhyme (oin) is judged on vowels, not consonants, so each verse
// ending is reduced to its vowel skeleton and neighbouring skeletons are
// compared by edit-distance similarity. Only the last few chars of each
// verse are used; verses of 2 chars or fewer are too short to carry a rhyme.
//
// Pairs where either ending has no extractable vowels (all kanji, Latin,
// punctuation) are skipped rather than scored as zero.

use flowjudge_lang::extract_vowels;
use tracing::trace;

use crate::distance::{levenshtein, percent, similarity};
use crate::result::ScoreResult;
use crate::verse::{split_verses, tail_chars};

/// Trailing chars of each verse compared for rhyme.
pub const RHYME_TAIL_CHARS: usize = 5;

/// Verses must be longer than this many chars to be compared.
const MIN_RHYME_VERSE_CHARS: usize = 2;

/// Score the rhyme of `text` using the default ending length.
pub fn score_rhyme(text: &str) -> ScoreResult {
    score_rhyme_with(text, RHYME_TAIL_CHARS)
}

/// Score the rhyme of `text`, comparing the last `tail` chars of each verse.
pub fn score_rhyme_with(text: &str, tail: usize) -> ScoreResult {
    let verses = split_verses(text, MIN_RHYME_VERSE_CHARS);
    if verses.len() < 2 {
        return ScoreResult::new(0, "not enough verses to compare");
    }

    let mut total = 0u32;
    let mut pairs = 0u32;

    for pair in verses.windows(2) {
        let left = extract_vowels(tail_chars(pair[0], tail));
        let right = extract_vowels(tail_chars(pair[1], tail));
        if left.is_empty() || right.is_empty() {
            continue;
        }

        let distance = levenshtein(left.as_slice(), right.as_slice());
        let sim = similarity(distance, left.len(), right.len());
        trace!(%left, %right, distance, similarity = sim, "compared verse endings");
        total += u32::from(sim);
        pairs += 1;
    }

    if pairs == 0 {
        return ScoreResult::new(0, "no comparable vowel pairs");
    }

    // Tiers use the unrounded average.
    let average = f64::from(total) / f64::from(pairs);
    let score = percent(average);
    let tier = if average > 80.0 {
        "excellent rhyme"
    } else if average > 50.0 {
        "good rhyme"
    } else {
        "room to improve"
    };
    ScoreResult::new(
        score,
        format!("verse endings share {score}% of their vowels on average, {tier}"),
    )
}
