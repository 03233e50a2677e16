use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, punctuated::Punctuated, Generics, WhereClause, WherePredicate};

pub fn where_clause_with_bounds(
    where_clause: Option<&WhereClause>,
    bounds: &[WherePredicate],
) -> TokenStream {
    if bounds.is_empty() {
        return where_clause
            .as_ref()
            .map_or_else(|| quote!(), |wc| quote!(#wc));
    }

    // Pushing keeps the separator right whether or not the user's clause
    // ends with a trailing comma.
    let mut wc = where_clause.cloned().unwrap_or_else(|| WhereClause {
        where_token: Default::default(),
        predicates: Punctuated::new(),
    });
    for bound in bounds {
        wc.predicates.push(bound.clone());
    }
    quote!(#wc)
}

// Every type parameter has to describe itself for fields that mention it.
pub fn describe_bounds(generics: &Generics) -> Vec<WherePredicate> {
    generics
        .type_params()
        .map(|param| {
            let ident = &param.ident;
            parse_quote!(#ident: ::envbind::Describe)
        })
        .collect()
}
