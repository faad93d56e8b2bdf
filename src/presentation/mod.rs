//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Text and JSON renderers
//!
//! ## Usage
//!
//! ```ignore
//! use wiser::presentation::factory;
//!
//! let use_case = factory::create_publish_use_case(Path::new(".wiser/publish.toml"));
//! let outcome = use_case.execute(&request)?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands};
pub use factory::{
    create_history_use_case, create_publish_use_case, create_status_use_case,
    create_version_use_case,
};
pub use output::TextRenderer;
