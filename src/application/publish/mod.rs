//! Publish Module
//!
//! Orchestrates publishing a version to an environment.
//!
//! ## Structure
//!
//! - `options` - Request type (`PublishRequest`)
//! - `result` - Result type (`PublishOutcome`)
//! - `use_case` - Core use case logic (`PublishUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use wiser::application::publish::{PublishRequest, PublishUseCase};
//!
//! let use_case = PublishUseCase::new(repo);
//! let outcome = use_case.execute(&PublishRequest::new(ItemKind::Template, 42, 5, "live"))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::PublishRequest;
pub use result::PublishOutcome;
pub use use_case::PublishUseCase;
