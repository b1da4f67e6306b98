// Katakana lookup tables and reading normalization.
//
// Every character of a reading falls into exactly one `KanaClass`. Plain
// morae (the full gojūon grid plus voiced and semi-voiced rows) carry a
// vowel; the small glides ャ/ュ/ョ fuse with the preceding mora; ー holds the
// previous vowel; ッ and everything else are silent for vowel purposes.
//
// Hiragana is folded onto katakana before lookup, so callers may pass either
// script. Tables are plain `match` expressions: read-only, built at compile
// time, no global state.

use crate::types::Vowel;

/// The prolongation mark (chōonpu).
pub const PROLONGATION_MARK: char = 'ー';

/// The small stop mark (sokuon).
pub const STOP_MARK: char = 'ッ';

/// Offset from a hiragana code point to its katakana counterpart.
const HIRAGANA_TO_KATAKANA: u32 = 0x60;

/// What a single (katakana) character contributes to a vowel skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KanaClass {
    /// A full mora with its own vowel (including ン as `Vowel::N`).
    Mora(Vowel),
    /// A small contraction glide; overwrites the previous mora's vowel.
    Glide(Vowel),
    /// ー: repeats the previous vowel.
    Prolongation,
    /// ッ: a geminate stop with no vowel.
    Stop,
    /// Anything else (kanji, punctuation, Latin, small vowels...).
    Other,
}

impl KanaClass {
    /// True when the character counts as one mora for rhythm purposes.
    pub fn is_mora(self) -> bool {
        matches!(self, KanaClass::Mora(_))
    }
}

/// Fold a hiragana character (ぁ..ん) onto katakana. Other characters pass
/// through unchanged.
pub fn to_katakana(c: char) -> char {
    if ('ぁ'..='ん').contains(&c) {
        char::from_u32(c as u32 + HIRAGANA_TO_KATAKANA).unwrap_or(c)
    } else {
        c
    }
}

/// Characters dropped from a reading before vowel extraction: ASCII letters
/// and digits, plus full-width sentence punctuation and quotation brackets.
pub fn is_stripped(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '、' | '。' | '！' | '？' | '「' | '」')
}

/// Fold hiragana to katakana and drop stripped characters.
pub fn normalize(reading: &str) -> String {
    reading
        .chars()
        .map(to_katakana)
        .filter(|&c| !is_stripped(c))
        .collect()
}

/// Classify one character. Hiragana is accepted and folded first.
pub fn classify(c: char) -> KanaClass {
    let c = to_katakana(c);
    if let Some(vowel) = mora_vowel(c) {
        return KanaClass::Mora(vowel);
    }
    match c {
        'ャ' => KanaClass::Glide(Vowel::A),
        'ュ' => KanaClass::Glide(Vowel::U),
        'ョ' => KanaClass::Glide(Vowel::O),
        PROLONGATION_MARK => KanaClass::Prolongation,
        STOP_MARK => KanaClass::Stop,
        _ => KanaClass::Other,
    }
}

/// Vowel of a plain katakana mora, or `None` if `c` is not in the table.
pub fn mora_vowel(c: char) -> Option<Vowel> {
    use Vowel::*;
    let vowel = match c {
        'ア' | 'カ' | 'ガ' | 'サ' | 'ザ' | 'タ' | 'ダ' | 'ナ' | 'ハ' | 'バ' | 'パ' | 'マ' | 'ヤ' | 'ラ'
        | 'ワ' => A,
        'イ' | 'キ' | 'ギ' | 'シ' | 'ジ' | 'チ' | 'ヂ' | 'ニ' | 'ヒ' | 'ビ' | 'ピ' | 'ミ' | 'リ' | 'ヰ' => {
            I
        }
        'ウ' | 'ク' | 'グ' | 'ス' | 'ズ' | 'ツ' | 'ヅ' | 'ヌ' | 'フ' | 'ブ' | 'プ' | 'ム' | 'ユ' | 'ル' => {
            U
        }
        'エ' | 'ケ' | 'ゲ' | 'セ' | 'ゼ' | 'テ' | 'デ' | 'ネ' | 'ヘ' | 'ベ' | 'ペ' | 'メ' | 'レ' | 'ヱ' => {
            E
        }
        'オ' | 'コ' | 'ゴ' | 'ソ' | 'ゾ' | 'ト' | 'ド' | 'ノ' | 'ホ' | 'ボ' | 'ポ' | 'モ' | 'ヨ' | 'ロ'
        | 'ヲ' => O,
        'ン' => N,
        _ => return None,
    };
    Some(vowel)
}
