//! Proc macros for breakpoint-grid: `responsive!` prop literals.
//!
//! This crate is not meant to be used directly. Enable the `macros` feature
//! on `breakpoint-grid`.

use proc_macro::TokenStream;

mod responsive_macro;

/// Build a `Responsive<T>` value.
///
/// # Syntax
///
/// - `responsive!(expr)` is a scalar, applied from the base breakpoint up
/// - `responsive!{ xs: expr, md: expr }` sets explicit breakpoints
///
/// Keys are identifiers or string literals (for names like `"2xl"`). A key
/// given twice is a compile error.
///
/// # Example
///
/// ```ignore
/// let span = responsive!{ xs: 12, md: 6, xl: 4 };
/// let gap = responsive!(GapMode::Bool(true));
/// ```
#[proc_macro]
pub fn responsive(input: TokenStream) -> TokenStream {
    responsive_macro::responsive_impl(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
