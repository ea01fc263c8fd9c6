//! Theme selection for "try a different theme".

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

/// How retry picks the next theme. Exactly one policy is active per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryPolicy {
    /// Uniformly random among the other candidate themes.
    Random,
    /// The candidate after the current theme, wrapping to the first.
    Cyclic,
}

impl RetryPolicy {
    /// Lower-case label used in configuration.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Cyclic => "cyclic",
        }
    }
}

impl fmt::Display for RetryPolicy {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

/// Parse error for [`RetryPolicy`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported retry policy '{value}': valid options are 'random' or 'cyclic'")]
pub struct RetryPolicyParseError {
    value: String,
}

impl FromStr for RetryPolicy {
    type Err = RetryPolicyParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "cyclic" => Ok(Self::Cyclic),
            _ => Err(RetryPolicyParseError {
                value: value.to_owned(),
            }),
        }
    }
}

/// Chooses a theme different from `current`.
///
/// `candidates` is the ordered theme list for the displayed problem. Returns
/// `None` when no candidate other than `current` exists.
pub fn select_retry_theme<R: Rng + ?Sized>(
    policy: RetryPolicy,
    candidates: &[String],
    current: &str,
    rng: &mut R,
) -> Option<String> {
    match policy {
        RetryPolicy::Random => {
            let others: Vec<&String> = candidates
                .iter()
                .filter(|theme| !theme.is_empty() && theme.as_str() != current)
                .collect();
            others.choose(rng).map(|theme| (*theme).clone())
        }
        RetryPolicy::Cyclic => next_cyclic_theme(candidates, current),
    }
}

fn next_cyclic_theme(candidates: &[String], current: &str) -> Option<String> {
    let Some(position) = candidates.iter().position(|theme| theme == current) else {
        return candidates
            .iter()
            .find(|theme| !theme.is_empty())
            .cloned();
    };

    candidates
        .iter()
        .cycle()
        .skip(position.saturating_add(1))
        .take(candidates.len())
        .find(|theme| !theme.is_empty() && theme.as_str() != current)
        .cloned()
}
