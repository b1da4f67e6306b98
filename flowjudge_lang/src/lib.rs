// Shared language crate for Flowjudge.
//
// Provides the phonetic resources the scoring engine needs: katakana lookup
// tables, vowel-skeleton extraction, mora counting, and the theme keyword
// book. No scoring logic lives here.
//
// Architecture:
// - `types.rs`: Core types — `Vowel`, `VowelSkeleton`, `ThemeKey`
// - `kana.rs`: Katakana classification tables and reading normalization
// - `vowels.rs`: `extract_vowels()` and `count_morae()`
// - `lib.rs` (this file): `ThemeBook` — loads and queries theme keyword lists
//
// The theme book is loaded from `data/themes.json` via `ThemeBook::from_json()`
// (JSON string in, typed struct out). `default_themes()` returns a
// process-wide book parsed once from the copy embedded with `include_str!`.
//
// Everything here is pure and deterministic: the tables are `match`
// expressions, the book is immutable after loading, and maps are ordered.

pub mod kana;
pub mod types;
pub mod vowels;

// Re-export key types at crate root for convenience.
pub use types::{ThemeKey, Vowel, VowelSkeleton};
pub use vowels::{count_morae, extract_vowels};

use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Errors raised while loading a theme book or parsing a theme name.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("invalid theme book JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("theme book has no keyword list for '{0}'")]
    MissingTheme(ThemeKey),
    #[error("theme '{0}' contains an empty keyword")]
    EmptyKeyword(ThemeKey),
    #[error("unknown theme '{0}' (expected one of: maguro, tai, iwashi, same)")]
    UnknownTheme(String),
}

/// The top-level JSON structure for the theme file.
#[derive(Debug, serde::Deserialize)]
struct ThemeFile {
    themes: BTreeMap<ThemeKey, Vec<String>>,
}

/// A loaded, read-only mapping from theme to its ordered keyword list.
///
/// Every `ThemeKey` is guaranteed to have an entry, so lookups cannot fail.
/// Keyword order is preserved from the file; checkers report matches in
/// this order.
#[derive(Debug, Clone)]
pub struct ThemeBook {
    themes: BTreeMap<ThemeKey, Vec<String>>,
}

impl ThemeBook {
    /// Parse a theme book from a JSON string.
    ///
    /// Fails if any theme is missing or any keyword is empty (an empty
    /// keyword would match every transcript).
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        let file: ThemeFile = serde_json::from_str(json)?;
        for theme in ThemeKey::ALL {
            let keywords = file.themes.get(&theme).ok_or(ThemeError::MissingTheme(theme))?;
            if keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(ThemeError::EmptyKeyword(theme));
            }
        }
        Ok(ThemeBook { themes: file.themes })
    }

    /// The keyword list for a theme, in file order.
    pub fn keywords(&self, theme: ThemeKey) -> &[String] {
        self.themes.get(&theme).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Themes with their keyword lists, in `ThemeKey` order.
    pub fn iter(&self) -> impl Iterator<Item = (ThemeKey, &[String])> {
        self.themes.iter().map(|(theme, keywords)| (*theme, keywords.as_slice()))
    }
}

static DEFAULT_THEMES: LazyLock<ThemeBook> = LazyLock::new(|| {
    let json = include_str!("../../data/themes.json");
    ThemeBook::from_json(json).expect("embedded themes.json is malformed")
});

/// The theme book embedded at compile time, parsed on first use.
///
/// Panics if the embedded JSON is malformed (should never happen in a
/// released build).
pub fn default_themes() -> &'static ThemeBook {
    &DEFAULT_THEMES
}
