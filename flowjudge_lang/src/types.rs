// Core language types: vowel symbols, vowel skeletons, and theme identifiers.
//
// These types are shared by the kana tables (`kana.rs`), the extractor
// (`vowels.rs`), the theme book (`lib.rs`), and the scoring crate, which
// compares skeletons of verse endings and looks up keyword lists by theme.
//
// The type hierarchy is:
// - `Vowel` — one mora's vowel sound (A, I, U, E, O) or the moraic nasal (N)
// - `VowelSkeleton` — ordered vowels of a reading, one per mora
// - `ThemeKey` — the closed set of themes a verse can be judged against

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

/// The vowel sound carried by a single mora.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Vowel {
    A,
    I,
    U,
    E,
    O,
    /// The moraic nasal ン, treated as its own vowel-like symbol.
    N,
}

impl Vowel {
    /// Every symbol in skeleton alphabet order.
    pub const ALL: [Vowel; 6] = [Vowel::A, Vowel::I, Vowel::U, Vowel::E, Vowel::O, Vowel::N];

    /// The uppercase letter used when a skeleton is rendered as text.
    pub fn as_char(self) -> char {
        match self {
            Vowel::A => 'A',
            Vowel::I => 'I',
            Vowel::U => 'U',
            Vowel::E => 'E',
            Vowel::O => 'O',
            Vowel::N => 'N',
        }
    }

    /// Inverse of `as_char`.
    pub fn from_char(c: char) -> Option<Vowel> {
        match c {
            'A' => Some(Vowel::A),
            'I' => Some(Vowel::I),
            'U' => Some(Vowel::U),
            'E' => Some(Vowel::E),
            'O' => Some(Vowel::O),
            'N' => Some(Vowel::N),
            _ => None,
        }
    }
}

impl fmt::Display for Vowel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The vowel sequence of a phonetic reading, one symbol per mora.
///
/// Built only by appending or by overwriting the last symbol, so its length
/// never exceeds the number of syllabary characters it was derived from.
/// Renders (and serializes) as a plain string such as `"IUOE"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct VowelSkeleton {
    vowels: Vec<Vowel>,
}

impl VowelSkeleton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, vowel: Vowel) {
        self.vowels.push(vowel);
    }

    /// Overwrite the most recent symbol. Returns false when the skeleton is
    /// empty and nothing was replaced.
    pub fn replace_last(&mut self, vowel: Vowel) -> bool {
        match self.vowels.last_mut() {
            Some(last) => {
                *last = vowel;
                true
            }
            None => false,
        }
    }

    pub fn last(&self) -> Option<Vowel> {
        self.vowels.last().copied()
    }

    pub fn len(&self) -> usize {
        self.vowels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vowels.is_empty()
    }

    pub fn as_slice(&self) -> &[Vowel] {
        &self.vowels
    }
}

impl From<Vec<Vowel>> for VowelSkeleton {
    fn from(vowels: Vec<Vowel>) -> Self {
        Self { vowels }
    }
}

impl FromStr for VowelSkeleton {
    type Err = char;

    /// Parse a rendered skeleton back. The error is the first character
    /// outside the `AIUEON` alphabet.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| Vowel::from_char(c).ok_or(c))
            .collect::<Result<Vec<_>, _>>()
            .map(VowelSkeleton::from)
    }
}

impl fmt::Display for VowelSkeleton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vowel in &self.vowels {
            write!(f, "{vowel}")?;
        }
        Ok(())
    }
}

impl Serialize for VowelSkeleton {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A judging theme. Each theme owns a fixed keyword list in the theme book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKey {
    /// Tuna.
    Maguro,
    /// Sea bream.
    Tai,
    /// Sardine.
    Iwashi,
    /// Shark.
    Same,
}

impl ThemeKey {
    pub const ALL: [ThemeKey; 4] = [ThemeKey::Maguro, ThemeKey::Tai, ThemeKey::Iwashi, ThemeKey::Same];

    /// The identifier used in theme files and on the command line.
    pub fn id(self) -> &'static str {
        match self {
            ThemeKey::Maguro => "maguro",
            ThemeKey::Tai => "tai",
            ThemeKey::Iwashi => "iwashi",
            ThemeKey::Same => "same",
        }
    }

    /// Display name in katakana.
    pub fn label(self) -> &'static str {
        match self {
            ThemeKey::Maguro => "マグロ",
            ThemeKey::Tai => "タイ",
            ThemeKey::Iwashi => "イワシ",
            ThemeKey::Same => "サメ",
        }
    }
}

impl fmt::Display for ThemeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ThemeKey {
    type Err = crate::ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ThemeKey::ALL
            .into_iter()
            .find(|theme| theme.id() == wanted)
            .ok_or_else(|| crate::ThemeError::UnknownTheme(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowel_char_round_trip() {
        for vowel in Vowel::ALL {
            assert_eq!(Vowel::from_char(vowel.as_char()), Some(vowel));
        }
        assert_eq!(Vowel::from_char('a'), None);
    }

    #[test]
    fn test_skeleton_display() {
        let skeleton = VowelSkeleton::from(vec![Vowel::I, Vowel::N, Vowel::O]);
        assert_eq!(skeleton.to_string(), "INO");
        assert_eq!(skeleton.len(), 3);
    }

    #[test]
    fn test_skeleton_replace_last() {
        let mut skeleton = VowelSkeleton::new();
        assert!(!skeleton.replace_last(Vowel::A));
        assert!(skeleton.is_empty());
        assert_eq!(skeleton.last(), None);

        skeleton.push(Vowel::I);
        assert!(skeleton.replace_last(Vowel::O));
        assert_eq!(skeleton.to_string(), "O");
        assert_eq!(skeleton.last(), Some(Vowel::O));
    }

    #[test]
    fn test_skeleton_from_str() {
        let skeleton: VowelSkeleton = "AIUEON".parse().unwrap();
        assert_eq!(skeleton.as_slice(), &Vowel::ALL);
        assert_eq!("AX".parse::<VowelSkeleton>(), Err('X'));
    }

    #[test]
    fn test_skeleton_serializes_as_string() {
        let skeleton: VowelSkeleton = "UO".parse().unwrap();
        assert_eq!(serde_json::to_string(&skeleton).unwrap(), "\"UO\"");
    }

    #[test]
    fn test_theme_key_parse() {
        assert_eq!("maguro".parse::<ThemeKey>().unwrap(), ThemeKey::Maguro);
        assert_eq!(" SAME ".parse::<ThemeKey>().unwrap(), ThemeKey::Same);
        assert!("unagi".parse::<ThemeKey>().is_err());
    }

    #[test]
    fn test_theme_key_serde_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeKey::Iwashi).unwrap(), "\"iwashi\"");
        let parsed: ThemeKey = serde_json::from_str("\"tai\"").unwrap();
        assert_eq!(parsed, ThemeKey::Tai);
    }
}
