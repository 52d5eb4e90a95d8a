//! Procedural macros for typed-actions

use darling::{FromDeriveInput, FromVariant};
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Container-level attributes for #[derive(ErrorLike)]
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(error_like), supports(struct_any, enum_any))]
struct ErrorLikeOpts {
    ident: syn::Ident,
    generics: syn::Generics,
    data: darling::ast::Data<ErrorLikeVariant, ()>,

    /// Structs only: every value of the type is error-like
    #[darling(default)]
    error: bool,

    /// Enums only: infer error variants from their names
    #[darling(default)]
    infer: bool,
}

/// Variant-level attributes
#[derive(Debug, FromVariant)]
#[darling(attributes(error_like))]
struct ErrorLikeVariant {
    ident: syn::Ident,

    /// Explicitly mark this variant as error-like
    #[darling(default)]
    error: bool,

    /// Exclude from name inference
    #[darling(default)]
    skip: bool,
}

/// Name suffixes that mark a variant as a failure under `#[error_like(infer)]`
const ERROR_SUFFIXES: &[&str] = &["Error", "Failed", "Failure"];

/// Split a PascalCase string into parts
fn split_pascal_case(s: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();

    for ch in s.chars() {
        if ch.is_uppercase() && !current.is_empty() {
            parts.push(current);
            current = String::new();
        }
        current.push(ch);
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

/// Whether a variant name reads as a failure
///
/// The last PascalCase word must be one of [`ERROR_SUFFIXES`], so `Error`,
/// `TimeoutError` and `UploadFailed` match while `Errors` and `ErrorCount`
/// don't.
fn infer_error(name: &str) -> bool {
    split_pascal_case(name)
        .last()
        .is_some_and(|last| ERROR_SUFFIXES.contains(&last.as_str()))
}

/// Derive macro for the ErrorLike trait
///
/// On a struct, `#[error_like(error)]` makes every value error-like; without
/// it, values are never error-like.
///
/// On an enum, variants marked `#[error_like(error)]` are error-like. With
/// `#[error_like(infer)]` on the enum, variants whose name ends in `Error`,
/// `Failed` or `Failure` are also error-like unless marked
/// `#[error_like(skip)]`.
///
/// # Example
/// ```ignore
/// #[derive(ErrorLike)]
/// #[error_like(infer)]
/// enum Upload {
///     Progress(u8),
///     Finished,
///     NetworkError(String),     // inferred
///     #[error_like(error)]
///     Rejected,                 // explicit
///     #[error_like(skip)]
///     RetryAfterFailure,        // not an error despite the name
/// }
///
/// assert!(Upload::NetworkError("reset".into()).is_error_like());
/// assert!(!Upload::RetryAfterFailure.is_error_like());
/// ```
#[proc_macro_derive(ErrorLike, attributes(error_like))]
pub fn derive_error_like(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let opts = match ErrorLikeOpts::from_derive_input(&input) {
        Ok(opts) => opts,
        Err(e) => return e.write_errors().into(),
    };

    let name = &opts.ident;
    let (impl_generics, ty_generics, where_clause) = opts.generics.split_for_impl();

    let body = match &opts.data {
        darling::ast::Data::Struct(_) => {
            if opts.infer {
                return syn::Error::new_spanned(
                    &input.ident,
                    "`infer` only applies to enums; use `#[error_like(error)]` on structs",
                )
                .to_compile_error()
                .into();
            }
            let flag = opts.error;
            quote! { #flag }
        }
        darling::ast::Data::Enum(variants) => {
            if opts.error {
                return syn::Error::new_spanned(
                    &input.ident,
                    "mark individual variants with `#[error_like(error)]` instead",
                )
                .to_compile_error()
                .into();
            }

            let error_variants: Vec<_> = variants
                .iter()
                .filter(|v| v.error || (opts.infer && !v.skip && infer_error(&v.ident.to_string())))
                .map(|v| {
                    let variant = &v.ident;
                    quote! { #name::#variant { .. } }
                })
                .collect();

            if error_variants.is_empty() {
                quote! { false }
            } else {
                quote! { matches!(self, #(#error_variants)|*) }
            }
        }
    };

    let expanded = quote! {
        impl #impl_generics typed_actions::ErrorLike for #name #ty_generics #where_clause {
            fn is_error_like(&self) -> bool {
                #body
            }
        }
    };

    TokenStream::from(expanded)
}
