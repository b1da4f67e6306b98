// Flowjudge scoring engine
//
// Scores a Japanese freestyle verse transcript against a theme on four
// independent axes, then folds them into a single 0-100 total with a
// verdict message. All scoring is local, deterministic, and infallible:
// degenerate input (empty text, one verse, no keywords) gets a low score
// and an explanation rather than an error.
//
// Architecture:
// - distance.rs: Levenshtein distance, similarity percentage, rounding helper
// - verse.rs: Verse splitting on Japanese/ASCII punctuation and line breaks
// - keyword.rs: Distinct theme keywords present in the transcript
// - rhyme.rs: Vowel-skeleton similarity of consecutive verse endings
// - rhythm.rs: Consistency of mora counts across verses
// - context.rs: Keyword pairs used close together (contextual use)
// - aggregate.rs: Weighted sum of the four scores + verdict
// - result.rs: `ScoreResult`, `TotalScore`, `Verdict`
// - config.rs: `JudgeConfig` (weights + checker constants), JSON-loadable
// - judge.rs: `Judge` and the top-level `score()` entry point
// - scorer.rs: `Scorer` trait with local rhyme and remote-service variants
// - compare.rs: Vowel comparison of two readings (CLI helper)
// - error.rs: Errors at the config/theme/remote edges
//
// Phonetics (katakana tables, vowel extraction, mora counting) and the
// theme keyword book live in `flowjudge_lang`.

pub mod aggregate;
pub mod compare;
pub mod config;
pub mod context;
pub mod distance;
pub mod error;
pub mod judge;
pub mod keyword;
pub mod result;
pub mod rhyme;
pub mod rhythm;
pub mod scorer;
pub mod verse;

pub use aggregate::{ScoringWeights, aggregate, aggregate_with};
pub use compare::{VowelComparison, compare_readings};
pub use config::JudgeConfig;
pub use error::{JudgeError, TransportError};
pub use judge::{Judge, score};
pub use result::{ScoreResult, TotalScore, Verdict};
pub use scorer::{LocalRhymeScorer, RemoteScorer, RemoteVerdict, RetryPolicy, Scorer, Transport};

pub use flowjudge_lang::{ThemeBook, ThemeKey, extract_vowels};
