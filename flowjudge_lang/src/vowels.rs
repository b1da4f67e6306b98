// Vowel-skeleton extraction and mora counting.
//
// `extract_vowels` turns a phonetic reading into the vowel sequence used for
// rhyme comparison. キャット becomes "AO": キ and ャ fuse into one A mora, ッ
// is silent, ト adds O. The reading is normalized first (hiragana folded,
// Latin letters, digits and sentence punctuation stripped), then walked left
// to right with a "last vowel" cursor that ー repeats.
//
// `count_morae` is the rhythm counterpart: it counts only full morae, so
// long-vowel marks, stops and glides do not lengthen a verse.

use crate::kana::{self, KanaClass};
use crate::types::VowelSkeleton;

/// Extract the vowel skeleton of a phonetic reading. Total: unrecognized
/// characters contribute nothing, and the result may be empty.
pub fn extract_vowels(reading: &str) -> VowelSkeleton {
    let mut skeleton = VowelSkeleton::new();

    // The cursor is always the last appended vowel.
    for c in kana::normalize(reading).chars() {
        match kana::classify(c) {
            KanaClass::Mora(vowel) => skeleton.push(vowel),
            KanaClass::Glide(vowel) => {
                // A glide with nothing before it has no mora to fuse with.
                skeleton.replace_last(vowel);
            }
            KanaClass::Prolongation => {
                if let Some(vowel) = skeleton.last() {
                    skeleton.push(vowel);
                }
            }
            KanaClass::Stop | KanaClass::Other => {}
        }
    }

    skeleton
}

/// Number of full morae in `text` (hiragana or katakana). Non-kana
/// characters, ー, ッ and the small glides count zero.
pub fn count_morae(text: &str) -> usize {
    text.chars().filter(|&c| kana::classify(c).is_mora()).count()
}
