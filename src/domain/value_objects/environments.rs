//! Environments value object - the `published_environment` bitmask
//!
//! A version's bitmask is the OR of zero or more `Environment` bits.

use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

use super::Environment;

/// Set of environments a version is published to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Environments(u8);

impl Environments {
    /// Not published anywhere
    pub const NONE: Environments = Environments(0);

    /// Every known bit
    pub const ALL: Environments = Environments(1 | 2 | 4);

    /// Build from a raw bitmask, rejecting unknown bits
    pub fn from_bits(bits: i32) -> Option<Self> {
        if (0..=i32::from(Self::ALL.0)).contains(&bits) {
            Some(Self(bits as u8))
        } else {
            None
        }
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Membership test: `(value & bit) != 0`
    pub fn contains(&self, environment: Environment) -> bool {
        self.0 & environment.bit() != 0
    }

    pub fn with(self, environment: Environment) -> Self {
        Self(self.0 | environment.bit())
    }

    /// Contained environments, lowest rank first
    pub fn iter(&self) -> impl Iterator<Item = Environment> {
        let bits = *self;
        Environment::ORDERED
            .into_iter()
            .filter(move |env| bits.contains(*env))
    }
}

impl From<Environment> for Environments {
    fn from(environment: Environment) -> Self {
        Self(environment.bit())
    }
}

impl BitOr for Environments {
    type Output = Environments;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOr<Environment> for Environments {
    type Output = Environments;

    fn bitor(self, rhs: Environment) -> Self::Output {
        self.with(rhs)
    }
}

impl BitOrAssign<Environment> for Environments {
    fn bitor_assign(&mut self, rhs: Environment) {
        self.0 |= rhs.bit();
    }
}

impl std::fmt::Display for Environments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        let names: Vec<&str> = self.iter().map(|env| env.as_str()).collect();
        write!(f, "{}", names.join("|"))
    }
}
