//! Schema description types for envbind
//!
//! This crate holds the static reflection substrate shared by the binder, the
//! derive macro and configuration stores: type shapes, field descriptors and
//! the store capability bindings are registered into.

pub mod describe;
pub mod schema;
pub mod store;

// Re-export commonly used types
pub use describe::Describe;
pub use schema::{FieldDescriptor, Record, Shape, OPT_OUT};
pub use store::EnvStore;
