// The single-score capability and its two implementations.
//
// A `Scorer` maps a transcript to one `ScoreResult`. Two peers implement it:
//
// - `LocalRhymeScorer`: the in-process vowel-skeleton rhyme checker.
// - `RemoteScorer`: delegates to an external language-model service through a
//   caller-supplied `Transport`, then validates the `{score, reason}` JSON it
//   returns. Retryable transport failures are retried with exponential
//   backoff.
//
// The caller picks one; the engine never falls back from one to the other.
// No network stack lives here: a `Transport` is whatever HTTP client (or test
// double) the caller plugs in.

use std::thread;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::distance::percent;
use crate::error::{JudgeError, TransportError};
use crate::result::ScoreResult;
use crate::rhyme::{RHYME_TAIL_CHARS, score_rhyme_with};

/// Anything that can turn a transcript into a single score.
pub trait Scorer {
    fn score(&self, text: &str) -> Result<ScoreResult, JudgeError>;
}

/// The local rhyme checker exposed as a `Scorer`. Never fails.
#[derive(Debug, Clone, Copy)]
pub struct LocalRhymeScorer {
    pub tail_chars: usize,
}

impl Default for LocalRhymeScorer {
    fn default() -> Self {
        LocalRhymeScorer {
            tail_chars: RHYME_TAIL_CHARS,
        }
    }
}

impl Scorer for LocalRhymeScorer {
    fn score(&self, text: &str) -> Result<ScoreResult, JudgeError> {
        Ok(score_rhyme_with(text, self.tail_chars))
    }
}

/// A verdict returned by a remote scoring service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteVerdict {
    /// Nominally 0-100; clamped when converted.
    pub score: f64,
    /// Why the service chose that score.
    pub reason: String,
}

impl RemoteVerdict {
    /// Parse and validate a `{score, reason}` payload.
    pub fn from_json(json: &str) -> Result<Self, JudgeError> {
        let verdict: RemoteVerdict = serde_json::from_str(json)
            .map_err(|e| JudgeError::MalformedVerdict(e.to_string()))?;
        if !verdict.score.is_finite() {
            return Err(JudgeError::MalformedVerdict(format!(
                "score {} is not a number",
                verdict.score
            )));
        }
        if verdict.reason.trim().is_empty() {
            return Err(JudgeError::MalformedVerdict("reason is empty".to_string()));
        }
        Ok(verdict)
    }
}

impl From<RemoteVerdict> for ScoreResult {
    fn from(verdict: RemoteVerdict) -> Self {
        ScoreResult::new(percent(verdict.score), verdict.reason)
    }
}

/// One round trip to a remote scoring service. Returns the raw JSON verdict.
pub trait Transport {
    fn send(&self, text: &str) -> Result<String, TransportError>;
}

impl<F> Transport for F
where
    F: Fn(&str) -> Result<String, TransportError>,
{
    fn send(&self, text: &str) -> Result<String, TransportError> {
        self(text)
    }
}

/// How often and how patiently to retry a remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub max_attempts: u32,
    /// Delay before the first retry; doubles after each failure.
    pub initial_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_attempts: 5,
            initial_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Delay before retry number `retry` (0-based).
    pub fn delay_for(&self, retry: u32) -> Duration {
        self.initial_delay.saturating_mul(2u32.saturating_pow(retry))
    }
}

/// A `Scorer` backed by a remote service.
#[derive(Debug, Clone)]
pub struct RemoteScorer<T> {
    transport: T,
    policy: RetryPolicy,
}

impl<T: Transport> RemoteScorer<T> {
    pub fn new(transport: T) -> Self {
        Self::with_policy(transport, RetryPolicy::default())
    }

    pub fn with_policy(transport: T, policy: RetryPolicy) -> Self {
        RemoteScorer { transport, policy }
    }

    /// Send with retries. Fatal errors and the last retryable error are
    /// returned as they are.
    fn send_with_backoff(&self, text: &str) -> Result<String, TransportError> {
        let attempts = self.policy.max_attempts.max(1);
        let mut attempt = 0;
        loop {
            match self.transport.send(text) {
                Ok(body) => return Ok(body),
                Err(err) if err.is_retryable() && attempt + 1 < attempts => {
                    let delay = self.policy.delay_for(attempt);
                    warn!(attempt = attempt + 1, ?delay, error = %err, "remote scorer failed, retrying");
                    thread::sleep(delay);
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

impl<T: Transport> Scorer for RemoteScorer<T> {
    fn score(&self, text: &str) -> Result<ScoreResult, JudgeError> {
        let body = self.send_with_backoff(text)?;
        let verdict = RemoteVerdict::from_json(&body)?;
        debug!(score = verdict.score, "remote verdict received");
        Ok(verdict.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn reply(body: &'static str) -> impl Fn(&str) -> Result<String, TransportError> {
        move |_: &str| Ok(body.to_string())
    }

    fn no_wait() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 5,
            initial_delay: Duration::ZERO,
        }
    }

    #[test]
    fn test_local_scorer_matches_checker() {
        let text = "カマボコ\nサカモト";
        let result = LocalRhymeScorer::default().score(text).unwrap();
        assert_eq!(result, crate::rhyme::score_rhyme(text));
    }

    #[test]
    fn test_verdict_from_json() {
        let verdict = RemoteVerdict::from_json(r#"{"score": 72, "reason": "語尾の母音が一致"}"#).unwrap();
        let result = ScoreResult::from(verdict);
        assert_eq!(result.score, 72);
        assert_eq!(result.detail, "語尾の母音が一致");
    }

    #[test]
    fn test_verdict_is_clamped_and_rounded() {
        let high = RemoteVerdict::from_json(r#"{"score": 130, "reason": "x"}"#).unwrap();
        assert_eq!(ScoreResult::from(high).score, 100);
        let frac = RemoteVerdict::from_json(r#"{"score": 64.6, "reason": "x"}"#).unwrap();
        assert_eq!(ScoreResult::from(frac).score, 65);
    }

    #[test]
    fn test_verdict_missing_fields() {
        assert!(matches!(
            RemoteVerdict::from_json(r#"{"score": 50}"#),
            Err(JudgeError::MalformedVerdict(_))
        ));
        assert!(matches!(
            RemoteVerdict::from_json(r#"{"reason": "ok"}"#),
            Err(JudgeError::MalformedVerdict(_))
        ));
        assert!(matches!(
            RemoteVerdict::from_json(r#"{"score": 50, "reason": "  "}"#),
            Err(JudgeError::MalformedVerdict(_))
        ));
    }

    #[test]
    fn test_retry_delays_double() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_for(0), Duration::from_secs(1));
        assert_eq!(policy.delay_for(1), Duration::from_secs(2));
        assert_eq!(policy.delay_for(3), Duration::from_secs(8));
    }

    #[test]
    fn test_remote_scorer_success() {
        let scorer = RemoteScorer::with_policy(reply(r#"{"score": 88, "reason": "great"}"#), no_wait());
        let result = scorer.score("anything").unwrap();
        assert_eq!(result.score, 88);
    }

    #[test]
    fn test_remote_scorer_retries_then_succeeds() {
        let calls = Cell::new(0);
        let transport = |_: &str| -> Result<String, TransportError> {
            calls.set(calls.get() + 1);
            if calls.get() < 3 {
                Err(TransportError::Retryable("503".to_string()))
            } else {
                Ok(r#"{"score": 40, "reason": "ok"}"#.to_string())
            }
        };
        let scorer = RemoteScorer::with_policy(transport, no_wait());
        assert_eq!(scorer.score("x").unwrap().score, 40);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_remote_scorer_gives_up() {
        let calls = Cell::new(0);
        let transport = |_: &str| -> Result<String, TransportError> {
            calls.set(calls.get() + 1);
            Err(TransportError::Retryable("429".to_string()))
        };
        let scorer = RemoteScorer::with_policy(transport, no_wait());
        let err = scorer.score("x").unwrap_err();
        assert!(matches!(err, JudgeError::Transport(TransportError::Retryable(_))));
        assert_eq!(calls.get(), 5);
    }

    #[test]
    fn test_remote_scorer_fatal_is_not_retried() {
        let calls = Cell::new(0);
        let transport = |_: &str| -> Result<String, TransportError> {
            calls.set(calls.get() + 1);
            Err(TransportError::Fatal("400".to_string()))
        };
        let scorer = RemoteScorer::with_policy(transport, no_wait());
        assert!(scorer.score("x").is_err());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_remote_scorer_malformed_body() {
        let scorer = RemoteScorer::with_policy(reply("not json"), no_wait());
        assert!(matches!(
            scorer.score("x"),
            Err(JudgeError::MalformedVerdict(_))
        ));
    }

    #[test]
    fn test_scorers_are_interchangeable() {
        let remote = RemoteScorer::with_policy(reply(r#"{"score": 10, "reason": "r"}"#), no_wait());
        let scorers: Vec<Box<dyn Scorer>> = vec![Box::new(LocalRhymeScorer::default()), Box::new(remote)];
        for scorer in &scorers {
            assert!(scorer.score("カマボコ\nサカモト").is_ok());
        }
    }
}
