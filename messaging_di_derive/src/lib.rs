use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DataStruct, DeriveInput, Field, Fields};

/// Implements `messaging_di::Build` for a struct with named fields or a unit
/// struct.
///
/// Every field is built from the provider, except fields marked `#[state]`,
/// which start out as `Default::default()`.
#[proc_macro_derive(Build, attributes(state))]
pub fn derive_build(input: TokenStream) -> TokenStream {
    let DeriveInput {
        ident,
        generics,
        data,
        ..
    } = parse_macro_input!(input as DeriveInput);

    let fields: Vec<Field> = match data {
        Data::Struct(DataStruct {
            fields: Fields::Named(fields),
            ..
        }) => fields.named.into_iter().collect(),
        Data::Struct(DataStruct {
            fields: Fields::Unit,
            ..
        }) => Vec::new(),
        _ => {
            return quote! {
                ::core::compile_error!("Build requires a struct with named fields or a unit struct");
            }
            .into()
        }
    };

    let (state, injected): (Vec<_>, Vec<_>) = fields.iter().partition(|field| {
        field
            .attrs
            .iter()
            .any(|attr| attr.path().is_ident("state"))
    });

    let params = generics.type_params().map(|x| &x.ident).collect::<Vec<_>>();
    let injected_types = injected.iter().map(|field| &field.ty);
    let injected_idents = injected.iter().map(|field| &field.ident);
    let state_idents = state.iter().map(|field| &field.ident);

    let construct = if fields.is_empty() {
        quote! { Self }
    } else {
        quote! {
            Self {
                #(#injected_idents: ::messaging_di::Build::build(provider),)*
                #(#state_idents: ::core::default::Default::default(),)*
            }
        }
    };

    quote! {
        impl<__P, #(#params),*> ::messaging_di::Build<__P> for #ident<#(#params),*>
        where
            Self: ::core::clone::Clone + 'static,
            __P: ::messaging_di::Provider,
            #(#injected_types: ::messaging_di::Build<__P>,)*
        {
            fn build(provider: &mut __P) -> Self {
                ::messaging_di::cached(provider, |provider| #construct)
            }
        }
    }
    .into()
}
