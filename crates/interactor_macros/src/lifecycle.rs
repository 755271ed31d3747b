//! Derive macro for the `Lifecycle` trait.

use darling::ast::Data;
use darling::util::Ignored;
use darling::{FromDeriveInput, FromField};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, Ident, LitStr, parse_macro_input};

use interactor_macro_utils::core_path;

/// Parsed input of the macro.
#[derive(FromDeriveInput)]
#[darling(supports(struct_named))]
struct LifecycleArgs {
    ident: Ident,
    generics: syn::Generics,
    data: Data<Ignored, MarkerField>,
}

/// A field, possibly a capability marker carrying `#[hooks(...)]`.
#[derive(FromField)]
#[darling(attributes(hooks))]
struct MarkerField {
    ty: syn::Type,

    /// Hooks that run before the marker's phase.
    before: Option<LitStr>,

    /// Hooks that run after the marker's phase.
    after: Option<LitStr>,
}

impl MarkerField {
    fn is_marker(&self) -> bool {
        self.before.is_some() || self.after.is_some()
    }
}

/// Implementation of the `#[derive(Lifecycle)]` macro.
///
/// Generates an implementation of `interactor_core::hooks::Lifecycle` for the
/// annotated struct.
///
/// # Example
///
/// ```ignore
/// #[derive(Lifecycle)]
/// struct Counter {
///     value: i64,
///     #[hooks(before = "bump|bump")]
///     execute_hooks: ExecuteHooks,
/// }
///
/// // Generates:
/// impl Lifecycle for Counter {
///     fn hook_decls() -> &'static [HookDecl] {
///         const DECLS: &[HookDecl] = &[HookDecl::new(
///             <ExecuteHooks as PhaseMarker>::PHASE,
///             "bump|bump",
///             "",
///         )];
///         DECLS
///     }
///
///     fn hook(name: &str) -> Option<Hook<Self>> {
///         match name {
///             "bump" => Some(Self::bump as Hook<Self>),
///             _ => None,
///         }
///     }
/// }
/// ```
pub(crate) fn derive_lifecycle(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let args = match LifecycleArgs::from_derive_input(&input) {
        Ok(args) => args,
        Err(err) => return err.write_errors().into(),
    };

    match expand(args) {
        Ok(expanded) => expanded.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(args: LifecycleArgs) -> syn::Result<TokenStream2> {
    let krate = core_path();
    let hooks = quote!(#krate::hooks);

    let fields = args
        .data
        .take_struct()
        .map(|fields| fields.fields)
        .unwrap_or_default();

    let mut decls = Vec::new();
    let mut names: Vec<String> = Vec::new();

    for field in fields.iter().filter(|field| field.is_marker()) {
        let ty = &field.ty;
        let before = declared_list(field.before.as_ref(), &mut names)?;
        let after = declared_list(field.after.as_ref(), &mut names)?;

        decls.push(quote! {
            #hooks::HookDecl::new(<#ty as #hooks::PhaseMarker>::PHASE, #before, #after)
        });
    }

    let lookup = if names.is_empty() {
        quote! {
            let _ = name;
            ::core::option::Option::None
        }
    } else {
        let methods = names
            .iter()
            .map(|name| syn::parse_str::<Ident>(name))
            .collect::<syn::Result<Vec<_>>>()?;
        quote! {
            match name {
                #(#names => ::core::option::Option::Some(Self::#methods as #hooks::Hook<Self>),)*
                _ => ::core::option::Option::None,
            }
        }
    };

    let name = &args.ident;
    let (impl_generics, ty_generics, where_clause) = args.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #hooks::Lifecycle for #name #ty_generics #where_clause {
            fn hook_decls() -> &'static [#hooks::HookDecl] {
                const DECLS: &[#hooks::HookDecl] = &[#(#decls),*];
                DECLS
            }

            fn hook(name: &str) -> ::core::option::Option<#hooks::Hook<Self>> {
                #lookup
            }
        }
    })
}

/// Validates a declared list and records its names, first occurrence only.
///
/// Splitting matches `hooks::marker::split_names`: `|`-separated, trimmed,
/// blank segments ignored.
fn declared_list(list: Option<&LitStr>, names: &mut Vec<String>) -> syn::Result<String> {
    let Some(list) = list else {
        return Ok(String::new());
    };

    let raw = list.value();
    for name in raw.split('|').map(str::trim).filter(|name| !name.is_empty()) {
        if syn::parse_str::<Ident>(name).is_err() {
            return Err(syn::Error::new_spanned(
                list,
                format!("hook name `{name}` is not a valid method identifier"),
            ));
        }
        if !names.iter().any(|known| known == name) {
            names.push(name.to_string());
        }
    }

    Ok(raw)
}
