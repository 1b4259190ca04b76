//! `responsive!`: parse a scalar or a breakpoint map and emit the matching
//! `Responsive` constructor.

use std::collections::HashSet;

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{Error, Expr, Ident, LitStr, Result, Token};

// ---------------------------------------------------------------------------
// AST types
// ---------------------------------------------------------------------------

/// One `name: value` entry.
pub(crate) struct Entry {
    pub name: String,
    pub name_span: Span,
    pub value: Expr,
}

pub(crate) enum ResponsiveInput {
    Scalar(Expr),
    PerBreakpoint(Vec<Entry>),
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

impl Parse for ResponsiveInput {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.is_empty() {
            return Err(input.error("expected a value or `breakpoint: value` pairs"));
        }
        if !starts_entry(input) {
            let value: Expr = input.parse()?;
            if !input.is_empty() {
                return Err(input.error("unexpected tokens after scalar value"));
            }
            return Ok(ResponsiveInput::Scalar(value));
        }

        let mut entries: Vec<Entry> = Vec::new();
        let mut seen = HashSet::new();
        while !input.is_empty() {
            let entry = parse_entry(input)?;
            if !seen.insert(entry.name.clone()) {
                return Err(Error::new(
                    entry.name_span,
                    format!("breakpoint `{}` is set twice", entry.name),
                ));
            }
            entries.push(entry);
            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }
        Ok(ResponsiveInput::PerBreakpoint(entries))
    }
}

/// A key followed by a single colon (not a `::` path separator).
fn starts_entry(input: ParseStream) -> bool {
    (input.peek(Ident) || input.peek(LitStr)) && input.peek2(Token![:]) && !input.peek2(Token![::])
}

fn parse_entry(input: ParseStream) -> Result<Entry> {
    let (name, name_span) = if input.peek(LitStr) {
        let lit: LitStr = input.parse()?;
        (lit.value(), lit.span())
    } else {
        let ident: Ident = input.parse()?;
        (ident.to_string(), ident.span())
    };
    if name.is_empty() {
        return Err(Error::new(name_span, "breakpoint name cannot be empty"));
    }
    input.parse::<Token![:]>()?;
    let value: Expr = input.parse()?;
    Ok(Entry {
        name,
        name_span,
        value,
    })
}

// ---------------------------------------------------------------------------
// Code generation
// ---------------------------------------------------------------------------

pub(crate) fn responsive_impl(input: TokenStream) -> Result<TokenStream> {
    let parsed: ResponsiveInput = syn::parse2(input)?;
    Ok(generate(&parsed))
}

fn generate(input: &ResponsiveInput) -> TokenStream {
    match input {
        ResponsiveInput::Scalar(value) => quote! {
            ::breakpoint_grid::props::Responsive::Scalar(#value)
        },
        ResponsiveInput::PerBreakpoint(entries) => {
            let pairs = entries.iter().map(|entry| {
                let name = &entry.name;
                let value = &entry.value;
                quote! { (#name, #value) }
            });
            quote! {
                ::breakpoint_grid::props::Responsive::per_breakpoint([#(#pairs),*])
            }
        }
    }
}
