use syn::{Error, Field, Lit, LitStr};

// Same literal as `envbind_types::OPT_OUT`, which a proc-macro crate cannot import.
const OPT_OUT: &str = "false";

///
/// FieldAttrs
///
/// Binding metadata read from `#[envbind(...)]` on a single field.
///

#[derive(Default)]
pub struct FieldAttrs {
    pub key: Option<String>,
    pub env: Option<String>,
    pub leaf: bool,
}

impl FieldAttrs {
    pub fn parse(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in field.attrs.iter().filter(|a| a.path().is_ident("envbind")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("key") {
                    let lit: LitStr = meta.value()?.parse()?;
                    attrs.key = Some(lit.value());
                    Ok(())
                } else if meta.path.is_ident("env") {
                    let lit: Lit = meta.value()?.parse()?;
                    attrs.env = Some(match lit {
                        Lit::Str(s) => s.value(),
                        Lit::Bool(b) => b.value.to_string(),
                        other => {
                            return Err(Error::new_spanned(
                                other,
                                "`env` expects a string or bool literal",
                            ));
                        }
                    });
                    Ok(())
                } else if meta.path.is_ident("leaf") {
                    attrs.leaf = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported envbind attribute, expected `key`, `env` or `leaf`"))
                }
            })?;
        }

        Ok(attrs)
    }

    /// Fields that can never be bound, so their type is left uninspected.
    pub fn is_excluded(&self) -> bool {
        self.env.as_deref() == Some(OPT_OUT) || self.key.as_deref().map_or(true, str::is_empty)
    }

    /// Fields described as leaves without requiring `Describe` on their type.
    pub fn is_uninspected(&self) -> bool {
        self.leaf || self.is_excluded()
    }
}
