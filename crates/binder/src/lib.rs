//! Environment variable bindings derived from configuration schemas
//!
//! Declare a configuration shape once with `#[derive(Schema)]` and register an
//! environment variable for every configurable leaf field in any store that
//! implements [`EnvStore`].
//!
//! ```ignore
//! #[derive(Schema)]
//! struct Config {
//!     #[envbind(key = "server")]
//!     server: Server,
//! }
//!
//! #[derive(Schema)]
//! struct Server {
//!     #[envbind(key = "port")]
//!     port: u16,
//! }
//!
//! // registers `server.port` <- SERVER_PORT
//! envbind::bind_type::<Config, _>(&mut store);
//! ```

// Lets the derive macro's `::envbind` paths resolve inside this crate too.
extern crate self as envbind;

pub mod binder;
pub mod key;

pub use binder::{bind, bind_shape, bind_type, bind_with_prefix};
pub use envbind_derive::Schema;
pub use envbind_types::{Describe, EnvStore, FieldDescriptor, Record, Shape, OPT_OUT};
pub use key::{env_var_name, join_key};
