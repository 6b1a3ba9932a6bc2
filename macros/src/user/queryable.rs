use std::collections::BTreeSet;

use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_quote, Data, DeriveInput, Fields, Index, LitStr, Member};

use crate::common::FieldOptions;

/// A field that appears in the record view.
struct Exposed {
    name: LitStr,
    member: Member,
}

fn exposed_fields(fields: &Fields) -> syn::Result<Vec<Exposed>> {
    let mut exposed = Vec::new();
    let mut seen = BTreeSet::new();

    for (position, field) in fields.iter().enumerate() {
        let options = FieldOptions::from_attrs(&field.attrs)?;
        if options.skip {
            continue;
        }
        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index::from(position)),
        };
        let name = match (options.rename, &field.ident) {
            (Some(rename), _) => rename,
            (None, Some(ident)) => LitStr::new(&ident.unraw().to_string(), ident.span()),
            (None, None) => LitStr::new(&position.to_string(), Span::call_site()),
        };
        if !seen.insert(name.value()) {
            return Err(syn::Error::new_spanned(
                &name,
                format!("field name `{}` is exposed twice", name.value()),
            ));
        }
        exposed.push(Exposed { name, member });
    }
    Ok(exposed)
}

/// #[derive(Queryable)] implements `Record` and `Query` for a struct.
///
/// Field values are converted with `serde_json::to_value` on demand, so the
/// struct itself does not need to be `Serialize`, only its exposed fields.
pub fn expand_derive_queryable(mut input: DeriveInput) -> syn::Result<TokenStream2> {
    let fields = match &input.data {
        Data::Struct(data) => exposed_fields(&data.fields)?,
        Data::Enum(data) => {
            return Err(syn::Error::new_spanned(
                data.enum_token,
                "Queryable can only be derived for structs",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new_spanned(
                data.union_token,
                "Queryable can only be derived for structs",
            ));
        }
    };

    let params: Vec<_> = input
        .generics
        .type_params()
        .map(|param| param.ident.clone())
        .collect();
    let predicates = &mut input.generics.make_where_clause().predicates;
    for param in &params {
        predicates.push(parse_quote!(#param: ::seqwrap::serde::Serialize));
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let names: Vec<_> = fields.iter().map(|f| &f.name).collect();
    let members: Vec<_> = fields.iter().map(|f| &f.member).collect();

    Ok(quote! {
        impl #impl_generics ::seqwrap::query::Record for #ident #ty_generics #where_clause {
            fn field_names(&self) -> &'static [&'static str] {
                &[#(#names),*]
            }

            fn field(&self, name: &str) -> ::std::option::Option<::seqwrap::serde_json::Value> {
                match name {
                    #( #names => ::seqwrap::serde_json::to_value(&self.#members).ok(), )*
                    _ => ::std::option::Option::None,
                }
            }
        }

        impl #impl_generics ::seqwrap::query::Query for #ident #ty_generics #where_clause {
            fn query(
                &self,
                path: &::seqwrap::query::Path,
                bindings: &::seqwrap::query::Bindings,
            ) -> ::std::option::Option<::std::vec::Vec<::seqwrap::serde_json::Value>> {
                ::std::option::Option::Some(::seqwrap::query::select(self, path, bindings))
            }
        }
    })
}
