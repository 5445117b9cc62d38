use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, DeriveInput, Field, ItemFn};

/// Derives `messaging_utils::patch::Patch` for a struct with named fields.
///
/// The generated `<Name>Patch` holds a `PatchValue` for every field not
/// marked `#[no_patch]`. Marked fields always keep their current value.
#[proc_macro_derive(Patch, attributes(no_patch))]
pub fn derive_patch(input: TokenStream) -> TokenStream {
    let DeriveInput {
        vis, ident, data, ..
    } = parse_macro_input!(input as DeriveInput);

    let syn::Data::Struct(syn::DataStruct {
        fields: syn::Fields::Named(fields),
        ..
    }) = data
    else {
        return quote! { ::core::compile_error!("Patch requires a struct with named fields"); }
            .into();
    };

    let patch_ident = format_ident!("{ident}Patch");

    let (patched, fixed): (Vec<&Field>, Vec<&Field>) = fields.named.iter().partition(|field| {
        !field
            .attrs
            .iter()
            .any(|attr| attr.path().is_ident("no_patch"))
    });

    let patch_fields = patched.iter().map(|Field { vis, ident, ty, .. }| {
        quote! { #vis #ident: ::messaging_utils::patch::PatchValue<#ty> }
    });
    let patched_idents = patched.iter().map(|field| &field.ident).collect::<Vec<_>>();
    let fixed_idents = fixed.iter().map(|field| &field.ident).collect::<Vec<_>>();

    quote! {
        #[derive(::core::fmt::Debug, ::core::clone::Clone, ::core::default::Default, ::core::cmp::PartialEq, ::core::cmp::Eq)]
        #vis struct #patch_ident {
            #(#patch_fields),*
        }

        impl ::messaging_utils::patch::Patch for #ident {
            type Patch = #patch_ident;

            fn update(self, patch: Self::Patch) -> Self {
                Self {
                    #(#patched_idents: patch.#patched_idents.update(self.#patched_idents),)*
                    #(#fixed_idents: self.#fixed_idents,)*
                }
            }
        }
    }
    .into()
}

#[proc_macro_attribute]
pub fn trace_instrument(meta: TokenStream, input: TokenStream) -> TokenStream {
    let meta = proc_macro2::TokenStream::from(meta);
    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = parse_macro_input!(input as ItemFn);

    quote! {
        #[::tracing::instrument(ret(level = "trace"), #meta)]
        #(#attrs)*
        #vis #sig {
            ::tracing::trace!("call");
            #block
        }
    }
    .into()
}
