//! ItemKind value object - what sort of versioned item is being published
//!
//! - `Template`: a website template
//! - `DynamicContent`: a dynamic content component placed on templates

use serde::{Deserialize, Serialize};

/// Kind of publishable item. Each kind has its own id space and audit trail.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Default,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ItemKind {
    #[default]
    Template,
    DynamicContent,
}

impl ItemKind {
    pub const ALL: [ItemKind; 2] = [ItemKind::Template, ItemKind::DynamicContent];

    /// Token used in the store and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Template => "template",
            ItemKind::DynamicContent => "dynamic-content",
        }
    }

    /// Parse a stored token
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == token)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ItemKind::Template => "Template",
            ItemKind::DynamicContent => "Dynamic content",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
