//! Derive macro for envbind schemas

use proc_macro::TokenStream;

mod attr;
mod schema;
mod util;

/// Derive `envbind::Describe` for a configuration schema.
///
/// Structs with named fields describe themselves as records. Each field may
/// carry an `#[envbind(...)]` attribute:
///
/// * `key = "segment"` - binding key of the field; fields without one are
///   never bound and, for nested records, never walked.
/// * `env = "false"` - opt the field and its whole subtree out of binding.
/// * `leaf` - bind the field as a single value without inspecting its type,
///   for foreign types that do not implement `Describe`.
///
/// Enums and tuple structs describe themselves as leaves.
#[proc_macro_derive(Schema, attributes(envbind))]
pub fn derive_schema(input: TokenStream) -> TokenStream {
    schema::derive_schema(input.into()).into()
}
