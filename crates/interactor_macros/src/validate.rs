//! Derive macro for the `Validate` trait.

use proc_macro::TokenStream;
use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::meta::ParseNestedMeta;
use syn::{
    Data, DataStruct, DeriveInput, Expr, ExprLit, ExprUnary, Fields, Lit, UnOp, parse_macro_input,
};

use interactor_macro_utils::core_path;

/// Implementation of the `#[derive(Validate)]` macro.
pub(crate) fn derive_validate(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(expanded) => expanded.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let fields = match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(named),
            ..
        }) => &named.named,
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "#[derive(Validate)] only supports structs with named fields",
            ));
        }
    };

    let krate = core_path();
    let mut checks = Vec::new();

    for field in fields {
        let Some(ident) = &field.ident else {
            continue;
        };
        let name = ident.unraw().to_string();
        let mut rules = Vec::new();
        let mut nested = false;

        for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("validate")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("nested") {
                    nested = true;
                    return Ok(());
                }
                rules.push(parse_rule(&meta, &krate)?);
                Ok(())
            })?;
        }

        if !rules.is_empty() {
            checks.push(quote! {
                checker.field(#name, &self.#ident, &[#(#rules),*]);
            });
        }
        if nested {
            checks.push(quote! {
                checker.nested(#name, &self.#ident);
            });
        }
    }

    if checks.is_empty() {
        checks.push(quote! {
            let _ = checker;
        });
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #krate::validation::Validate for #name #ty_generics #where_clause {
            fn validate_fields(&self, checker: &mut #krate::validation::Checker) {
                #(#checks)*
            }
        }
    })
}

/// Parses one rule of a `#[validate(...)]` list into a `Rule` expression.
fn parse_rule(meta: &ParseNestedMeta<'_>, krate: &TokenStream2) -> syn::Result<TokenStream2> {
    let Some(key) = meta.path.get_ident() else {
        return Err(meta.error("expected a rule name"));
    };
    let rule = quote!(#krate::validation::Rule);

    let expanded = match key.to_string().as_str() {
        "required" => quote!(#rule::Required),
        "omitempty" => quote!(#rule::OmitEmpty),
        "alpha" => quote!(#rule::Alpha),
        "alphanum" => quote!(#rule::Alphanumeric),
        "numeric" => quote!(#rule::Numeric),
        bound @ ("gte" | "gt" | "lte" | "lt" | "min" | "max" | "len") => {
            let variant = format_ident!("{}", variant_name(bound));
            let value = parse_number(meta)?.to_tokens(krate);
            quote!(#rule::#variant(#value))
        }
        cmp @ ("eq" | "ne") => {
            let variant = format_ident!("{}", variant_name(cmp));
            let literal = parse_literal(meta, krate)?;
            quote!(#rule::#variant(#literal))
        }
        "oneof" => {
            let list: syn::LitStr = meta.value()?.parse()?;
            let options: Vec<String> = list
                .value()
                .split_whitespace()
                .map(str::to_string)
                .collect();
            if options.is_empty() {
                return Err(syn::Error::new_spanned(list, "oneof needs at least one option"));
            }
            quote!(#rule::OneOf(&[#(#options),*]))
        }
        other => return Err(meta.error(format!("unknown validation rule `{other}`"))),
    };

    Ok(expanded)
}

fn variant_name(tag: &str) -> &'static str {
    match tag {
        "gte" => "Gte",
        "gt" => "Gt",
        "lte" => "Lte",
        "lt" => "Lt",
        "min" => "Min",
        "max" => "Max",
        "len" => "Len",
        "eq" => "Eq",
        _ => "Ne",
    }
}

/// A numeric rule operand, kept exact for integer literals.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Number {
    Int(i128),
    Uint(u128),
    Float(f64),
}

impl Number {
    fn negate(self) -> Option<Number> {
        match self {
            Number::Uint(n) => 0_i128.checked_sub_unsigned(n).map(Number::Int),
            Number::Int(n) => Some(match n.checked_neg() {
                Some(neg) => Number::Int(neg),
                None => Number::Uint(n.unsigned_abs()),
            }),
            Number::Float(n) => Some(Number::Float(-n)),
        }
    }

    fn to_tokens(self, krate: &TokenStream2) -> TokenStream2 {
        let number = quote!(#krate::validation::Number);
        match self {
            Number::Int(n) => quote!(#number::Int(#n)),
            Number::Uint(n) => quote!(#number::Uint(#n)),
            Number::Float(n) => {
                let value = float_tokens(n);
                quote!(#number::Float(#value))
            }
        }
    }
}

/// Parses `= N` where `N` is an optionally negated integer or float literal.
fn parse_number(meta: &ParseNestedMeta<'_>) -> syn::Result<Number> {
    let expr: Expr = meta.value()?.parse()?;
    number_from_expr(&expr)
}

fn number_from_expr(expr: &Expr) -> syn::Result<Number> {
    let out_of_range = || syn::Error::new_spanned(expr, "numeric literal is out of range");
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(int), ..
        }) => Ok(Number::Uint(int.base10_parse::<u128>()?)),
        Expr::Lit(ExprLit {
            lit: Lit::Float(float),
            ..
        }) => {
            let value = float.base10_parse::<f64>()?;
            if value.is_finite() {
                Ok(Number::Float(value))
            } else {
                Err(out_of_range())
            }
        }
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr: inner,
            ..
        }) => number_from_expr(inner)?.negate().ok_or_else(out_of_range),
        other => Err(syn::Error::new_spanned(other, "expected a numeric literal")),
    }
}

/// Emits `n` as an `f64` literal, with a leading `-` token for negatives.
fn float_tokens(n: f64) -> TokenStream2 {
    let magnitude = Literal::f64_suffixed(n.abs());
    if n.is_sign_negative() {
        quote!(-#magnitude)
    } else {
        quote!(#magnitude)
    }
}

/// Parses `= V` into a `Literal` expression.
fn parse_literal(meta: &ParseNestedMeta<'_>, krate: &TokenStream2) -> syn::Result<TokenStream2> {
    let literal = quote!(#krate::validation::Literal);
    let expr: Expr = meta.value()?.parse()?;

    match &expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(text),
            ..
        }) => Ok(quote!(#literal::Text(#text))),
        Expr::Lit(ExprLit {
            lit: Lit::Bool(flag),
            ..
        }) => {
            let text = flag.value.to_string();
            Ok(quote!(#literal::Text(#text)))
        }
        _ => {
            let value = number_from_expr(&expr)?.to_tokens(krate);
            Ok(quote!(#literal::Number(#value)))
        }
    }
}
