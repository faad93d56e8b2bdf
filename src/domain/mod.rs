//! Domain Layer
//!
//! The core of Wiser publishing - pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (Environment, Environments, ItemKind)
//! - `entities/` - Snapshot, deltas, audit entries, items and the store
//! - `services/` - The publication calculator
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
