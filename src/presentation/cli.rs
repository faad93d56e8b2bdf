//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --store, --user, --verbose) are inherited by all subcommands
//! - Environments stay plain strings here so that an invalid name is reported
//!   by the domain with the list of valid ones

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::ItemKind;

/// Wiser - publish template and dynamic content versions across environments
#[derive(Parser, Debug)]
#[command(name = "wiser")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (NDJSON events / JSON documents)
    #[arg(long, global = true)]
    pub json: bool,

    /// Publish store file (default: .wiser/publish.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// User recorded in the audit trail
    #[arg(long, global = true)]
    pub user: Option<String>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Publish a version to an environment (lower environments follow)
    Publish {
        /// Item kind
        #[arg(value_enum)]
        kind: ItemKind,

        /// Item id
        id: u64,

        /// Version to publish
        version: u32,

        /// Target environment: test, accept or live
        environment: String,

        /// Compute and report, but do not write the store
        #[arg(long)]
        dry_run: bool,
    },

    /// Show which version serves each environment
    Status {
        #[arg(value_enum)]
        kind: ItemKind,
        id: u64,
    },

    /// Show the publish audit trail, newest first
    History {
        #[arg(value_enum)]
        kind: ItemKind,
        id: u64,

        /// Show at most this many records
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Create a new, unpublished version of an item
    NewVersion {
        #[arg(value_enum)]
        kind: ItemKind,
        id: u64,
    },
}
