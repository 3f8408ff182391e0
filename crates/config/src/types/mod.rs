//! Type definitions for schema-driven environment validation.
//!
//! Responsibilities:
//! - Define the declared value types and the schema that maps names to them.
//! - Define the coerced value union and the validated result mapping.
//!
//! Does NOT handle:
//! - Reading `.env` files or the process environment (see `loader` module).
//! - Coercion rules (see `validate` module).
//!
//! Invariants:
//! - `Schema` and `ValidatedConfig` iterate in schema declaration order.
//! - `EnvValue` carries exactly one of the three declarable types.

mod schema;
mod validated;
mod value;
mod value_type;

pub use schema::Schema;
pub use validated::ValidatedConfig;
pub use value::EnvValue;
pub use value_type::ValueType;
