//! Derive macros for the Taskflow unidirectional architecture
//!
//! This crate provides procedural macros to reduce boilerplate when building
//! screen-local state machines with Taskflow.
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Generates helpers for UI action enums
//!
//! # Example
//!
//! ```ignore
//! use taskflow_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum ListAction {
//!     NameChanged(String),
//!
//!     #[mutation]
//!     RowRemoved { index: usize },
//! }
//!
//! // Generated methods:
//! assert_eq!(ListAction::NameChanged("a".into()).kind(), "name_changed");
//! assert!(ListAction::RowRemoved { index: 0 }.is_mutation());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, parse_macro_input};

/// Derive macro for UI action enums
///
/// Generates helper methods for action enums:
/// - `kind()` - Returns the stable snake_case name of the variant, for use in
///   tracing fields and log lines
/// - `is_mutation()` - Returns true if this variant is marked `#[mutation]`
///
/// # Attributes
///
/// - `#[mutation]` - Mark a variant as one that can change the rendered list
///   (as opposed to input-field or selection changes). Hosts use this to
///   decide when the list itself needs re-rendering.
///
/// # Panics
///
/// This macro will produce a compile error (not a runtime panic) if applied
/// to a non-enum type.
///
/// # Example
///
/// ```ignore
/// #[derive(Action, Clone, Debug)]
/// enum ListAction {
///     /// Keystroke into the input field
///     NameChanged(String),
///
///     /// Removes a row from the list
///     #[mutation]
///     RowRemoved { index: usize },
///
///     /// Commits the input field into the list
///     #[mutation]
///     SubmitPressed,
/// }
///
/// // Usage:
/// let action = ListAction::NameChanged("milk".into());
///
/// assert_eq!(action.kind(), "name_changed");
/// assert!(!action.is_mutation());
/// ```
#[proc_macro_derive(Action, attributes(mutation))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(input, "#[derive(Action)] can only be used on enums")
            .to_compile_error()
            .into();
    };

    // Generate kind() match arms - every variant gets a stable snake_case name
    let kind_arms = data_enum.variants.iter().map(|variant| {
        let variant_name = &variant.ident;
        let kind = to_snake_case(&variant_name.to_string());
        match &variant.fields {
            Fields::Named(_) => quote! { Self::#variant_name { .. } => #kind, },
            Fields::Unnamed(_) => quote! { Self::#variant_name(..) => #kind, },
            Fields::Unit => quote! { Self::#variant_name => #kind, },
        }
    });

    // Generate is_mutation() match arms - explicit true/false per variant,
    // no wildcard, so fully-marked enums don't trip unreachable_patterns
    let is_mutation_arms = data_enum.variants.iter().map(|variant| {
        let variant_name = &variant.ident;
        let marked = has_attribute(&variant.attrs, "mutation");
        match &variant.fields {
            Fields::Named(_) => quote! { Self::#variant_name { .. } => #marked, },
            Fields::Unnamed(_) => quote! { Self::#variant_name(..) => #marked, },
            Fields::Unit => quote! { Self::#variant_name => #marked, },
        }
    });

    let expanded = quote! {
        impl #name {
            /// Returns the stable snake_case name of this action's variant
            #[must_use]
            pub const fn kind(&self) -> &'static str {
                match self {
                    #(#kind_arms)*
                }
            }

            /// Returns true if this action can change the rendered list
            #[must_use]
            pub const fn is_mutation(&self) -> bool {
                match self {
                    #(#is_mutation_arms)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Helper function to check if an attribute list contains a specific attribute
fn has_attribute(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}

/// Convert a CamelCase identifier to snake_case
fn to_snake_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    for (i, ch) in ident.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::to_snake_case;

    #[test]
    fn snake_case_splits_on_uppercase() {
        assert_eq!(to_snake_case("DraftChanged"), "draft_changed");
        assert_eq!(to_snake_case("AddPressed"), "add_pressed");
        assert_eq!(to_snake_case("Save"), "save");
    }
}
