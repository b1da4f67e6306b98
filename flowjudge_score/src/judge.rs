// The judge: runs all four checkers on a transcript and aggregates them.
//
// A `Judge` pairs a configuration with a theme book. Scoring is a pure
// function of (config, themes, transcript, theme), so one judge can be
// shared freely across threads; `score_batch` fans independent transcripts
// out over rayon's pool.

use flowjudge_lang::{ThemeBook, ThemeKey, default_themes};
use rayon::prelude::*;
use tracing::debug;

use crate::aggregate::aggregate_with;
use crate::config::JudgeConfig;
use crate::context::score_meaning_with;
use crate::keyword::score_keywords_with;
use crate::result::TotalScore;
use crate::rhyme::score_rhyme_with;
use crate::rhythm::score_rhythm;

#[derive(Debug, Clone)]
pub struct Judge<'t> {
    config: JudgeConfig,
    themes: &'t ThemeBook,
}

impl Default for Judge<'static> {
    fn default() -> Self {
        Judge::new(JudgeConfig::default(), default_themes())
    }
}

impl<'t> Judge<'t> {
    pub fn new(config: JudgeConfig, themes: &'t ThemeBook) -> Self {
        Judge { config, themes }
    }

    pub fn config(&self) -> &JudgeConfig {
        &self.config
    }

    pub fn themes(&self) -> &ThemeBook {
        self.themes
    }

    /// Score one transcript against a theme.
    pub fn score(&self, text: &str, theme: ThemeKey) -> TotalScore {
        let keywords = self.themes.keywords(theme);
        let config = &self.config;

        let keyword = score_keywords_with(text, keywords, config.keyword_saturation);
        let rhyme = score_rhyme_with(text, config.rhyme_tail_chars);
        let rhythm = score_rhythm(text);
        let meaning = score_meaning_with(
            text,
            keywords,
            config.context_window,
            config.context_saturation,
        );

        debug!(
            %theme,
            chars = text.chars().count(),
            keyword = %keyword.detail,
            rhyme = %rhyme.detail,
            rhythm = %rhythm.detail,
            meaning = %meaning.detail,
            "checked transcript"
        );

        aggregate_with(&config.weights, keyword, rhyme, rhythm, meaning)
    }

    /// Score many independent transcripts in parallel. Output order matches
    /// input order.
    pub fn score_batch(&self, entries: &[(String, ThemeKey)]) -> Vec<TotalScore> {
        entries
            .par_iter()
            .map(|(text, theme)| self.score(text, *theme))
            .collect()
    }
}

/// Score a transcript with the embedded themes and default configuration.
pub fn score(text: &str, theme: ThemeKey) -> TotalScore {
    Judge::default().score(text, theme)
}
