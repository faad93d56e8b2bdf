//! Environment value object - a single publish tier
//!
//! Tiers are strictly ordered: `Test < Acceptance < Live`. The order is
//! carried as data (`ORDERED` and `rank`) so cascade rules can walk it.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while naming an environment
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvironmentError {
    /// The token is not one of `test`, `accept`, `live`
    #[error("invalid environment name '{name}' (expected one of: test, accept, live)")]
    InvalidEnvironmentName { name: String },
}

/// A publish environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Environment {
    #[serde(rename = "test")]
    Test,
    #[serde(rename = "accept")]
    Acceptance,
    #[serde(rename = "live")]
    Live,
}

impl Environment {
    /// All environments, lowest rank first
    pub const ORDERED: [Environment; 3] =
        [Environment::Test, Environment::Acceptance, Environment::Live];

    /// Parse the exact token used on the wire.
    ///
    /// Matching is case-sensitive and does not trim: only `test`, `accept`
    /// and `live` are accepted.
    pub fn parse(name: &str) -> Result<Self, EnvironmentError> {
        match name {
            "test" => Ok(Environment::Test),
            "accept" => Ok(Environment::Acceptance),
            "live" => Ok(Environment::Live),
            _ => Err(EnvironmentError::InvalidEnvironmentName {
                name: name.to_string(),
            }),
        }
    }

    /// Position in the promotion order (Test = 0)
    pub fn rank(&self) -> usize {
        match self {
            Environment::Test => 0,
            Environment::Acceptance => 1,
            Environment::Live => 2,
        }
    }

    /// The single flag bit stored in `published_environment`
    pub fn bit(&self) -> u8 {
        match self {
            Environment::Test => 1,
            Environment::Acceptance => 2,
            Environment::Live => 4,
        }
    }

    /// Environments ranked strictly below this one, nearest first
    pub fn below(&self) -> impl Iterator<Item = Environment> {
        Self::ORDERED.into_iter().take(self.rank()).rev()
    }

    /// Token used on the wire and in the store
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Test => "test",
            Environment::Acceptance => "accept",
            Environment::Live => "live",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Environment::Test => "Test",
            Environment::Acceptance => "Acceptance",
            Environment::Live => "Live",
        }
    }
}

impl FromStr for Environment {
    type Err = EnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
