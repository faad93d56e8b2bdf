//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod publication_calculator;

pub use publication_calculator::{build_audit_log, compute_deltas};
