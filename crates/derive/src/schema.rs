use crate::{attr::FieldAttrs, util};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Field, Fields};

// derive_schema
pub fn derive_schema(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let bounds = util::describe_bounds(&input.generics);
    let where_clause = util::where_clause_with_bounds(where_clause, &bounds);

    let shape = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => match record_shape(ident, named.named.iter()) {
                Ok(shape) => shape,
                Err(err) => return err.to_compile_error(),
            },
            Fields::Unit => match record_shape(ident, std::iter::empty()) {
                Ok(shape) => shape,
                Err(err) => return err.to_compile_error(),
            },
            Fields::Unnamed(_) => quote!(::envbind::Shape::Leaf),
        },
        Data::Enum(_) => quote!(::envbind::Shape::Leaf),
        Data::Union(_) => {
            let err = Error::new_spanned(ident, "Schema cannot be derived for unions");
            return err.to_compile_error();
        }
    };

    quote! {
        impl #impl_generics ::envbind::Describe for #ident #ty_generics #where_clause {
            fn shape() -> ::envbind::Shape {
                #shape
            }
        }
    }
}

fn record_shape<'a>(
    ident: &syn::Ident,
    fields: impl Iterator<Item = &'a Field>,
) -> syn::Result<TokenStream> {
    let record_name = ident.to_string();
    let descriptors = fields
        .map(field_descriptor)
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(quote! {
        ::envbind::Shape::Record(::envbind::Record::new(
            #record_name,
            ::std::vec![#(#descriptors),*],
        ))
    })
}

fn field_descriptor(field: &Field) -> syn::Result<TokenStream> {
    let attrs = FieldAttrs::parse(field)?;
    let field_ident = field
        .ident
        .as_ref()
        .ok_or_else(|| Error::new_spanned(field, "Schema fields must be named"))?;
    let field_name = field_ident.to_string();
    let field_ty = &field.ty;

    let base = if attrs.is_uninspected() {
        quote!(::envbind::FieldDescriptor::leaf(#field_name))
    } else {
        quote!(::envbind::FieldDescriptor::of::<#field_ty>(#field_name))
    };

    let key = attrs.key.as_ref().map(|key| quote!(.key(#key)));
    let env = attrs.env.as_ref().map(|env| quote!(.env(#env)));

    Ok(quote!(#base #key #env))
}
