//! Media-query assembly.
//!
//! Resolvers produce one fragment per breakpoint; this module merges the
//! fragments of several resolvers and wraps each breakpoint's result in its
//! conditional:
//!
//! ```text
//! index 0      S { F }
//! index > 0    @media Q and (min-width: Npx) { S { F } }
//! width < 0    @media Q { S { F } }
//! ```
//!
//! where `S` is the scope selector, `Q` the configured media query and `N`
//! the breakpoint's minimum width.

use crate::calc::{Fragments, Resolver};
use crate::config::InternalConfig;
use crate::screen::Breakpoint;

/// Scope selector used when none is given.
pub const ROOT_SCOPE: &str = ":root";

/// Wrap `fragment` in the conditional for the breakpoint at `index`.
pub fn media_conditional(
    index: usize,
    breakpoint: &Breakpoint,
    media_query: &str,
    scope: &str,
    fragment: &str,
) -> String {
    let block = format!("{scope} {{ {fragment} }}");
    if index == 0 {
        block
    } else if breakpoint.min_width < 0 {
        format!("@media {media_query} {{ {block} }}")
    } else {
        format!(
            "@media {media_query} and (min-width: {}px) {{ {block} }}",
            breakpoint.min_width
        )
    }
}

/// Concatenate, per breakpoint, the non-empty fragments of every list in
/// order. A breakpoint with nothing to say stays `None`.
pub fn merge_fragments(lists: &[Fragments], len: usize) -> Fragments {
    (0..len)
        .map(|i| {
            let parts: Vec<&str> = lists
                .iter()
                .filter_map(|list| list.get(i).and_then(|f| f.as_deref()))
                .collect();
            (!parts.is_empty()).then(|| parts.join(" "))
        })
        .collect()
}

/// Run every resolver over `props` and wrap each breakpoint's merged
/// fragment in its `:root` conditional.
pub fn merge_media_queries<P>(
    resolvers: &[Resolver<P>],
    props: &P,
    config: &InternalConfig,
) -> Fragments {
    merge_media_queries_scoped(resolvers, props, config, ROOT_SCOPE)
}

/// [`merge_media_queries`] with a custom scope selector.
pub fn merge_media_queries_scoped<P>(
    resolvers: &[Resolver<P>],
    props: &P,
    config: &InternalConfig,
    scope: &str,
) -> Fragments {
    let lists: Vec<Fragments> = resolvers
        .iter()
        .map(|resolve| resolve(props, config))
        .collect();
    wrap(merge_fragments(&lists, config.breakpoints.len()), config, scope)
}

/// Wrap already-merged fragments in their conditionals.
pub(crate) fn wrap(merged: Fragments, config: &InternalConfig, scope: &str) -> Fragments {
    merged
        .into_iter()
        .zip(config.breakpoints.iter())
        .enumerate()
        .map(|(i, (fragment, bp))| {
            fragment.map(|f| media_conditional(i, bp, &config.media_query, scope, &f))
        })
        .collect()
}

/// Join the emitted rules, one per line.
pub fn to_stylesheet(rules: &Fragments) -> String {
    rules
        .iter()
        .flatten()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::elide;
    use pretty_assertions::assert_eq;

    fn bp(min_width: i32) -> Breakpoint {
        Breakpoint {
            name: "bp".into(),
            min_width,
        }
    }

    fn s(css: &str) -> Option<String> {
        Some(css.to_owned())
    }

    // ── Conditionals ─────────────────────────────────────────────────

    #[test]
    fn base_breakpoint_is_unconditioned() {
        assert_eq!(
            media_conditional(0, &bp(0), "only screen", ":root", "order: 1;"),
            ":root { order: 1; }"
        );
    }

    #[test]
    fn later_breakpoints_get_min_width() {
        assert_eq!(
            media_conditional(2, &bp(768), "only screen", ".col", "order: 1;"),
            "@media only screen and (min-width: 768px) { .col { order: 1; } }"
        );
    }

    #[test]
    fn negative_width_drops_the_expression() {
        assert_eq!(
            media_conditional(1, &bp(-1), "print", ":root", "order: 1;"),
            "@media print { :root { order: 1; } }"
        );
    }

    // ── Merging ──────────────────────────────────────────────────────

    #[test]
    fn fragments_concatenate_in_resolver_order() {
        let a = vec![s("a: 1;"), None, s("a: 2;")];
        let b = vec![s("b: 1;"), s("b: 2;"), None];
        let c = vec![None, None, None];
        assert_eq!(
            merge_fragments(&[a, b, c], 3),
            vec![s("a: 1; b: 1;"), s("b: 2;"), s("a: 2;")]
        );
    }

    #[test]
    fn empty_breakpoints_stay_none() {
        assert_eq!(merge_fragments(&[vec![None, None]], 2), vec![None, None]);
        assert_eq!(merge_fragments(&[], 2), vec![None, None]);
    }

    struct Order(i32);

    fn order(props: &Order, config: &InternalConfig) -> Fragments {
        elide(
            (0..config.breakpoints.len())
                .map(|i| Some(format!("order: {};", props.0 + (i as i32 / 3)))),
        )
    }

    fn hidden(_: &Order, config: &InternalConfig) -> Fragments {
        let mut out = vec![None; config.breakpoints.len()];
        out[1] = s("display: none;");
        out
    }

    #[test]
    fn merge_media_queries_wraps_each_breakpoint() {
        let config = InternalConfig::default();
        let resolvers: [Resolver<Order>; 2] = [order, hidden];
        let rules = merge_media_queries(&resolvers, &Order(1), &config);
        assert_eq!(
            rules,
            vec![
                s(":root { order: 1; }"),
                s("@media only screen and (min-width: 576px) { :root { display: none; } }"),
                None,
                s("@media only screen and (min-width: 992px) { :root { order: 2; } }"),
                None,
                None,
            ]
        );
    }

    #[test]
    fn stylesheet_skips_empty_breakpoints() {
        let config = InternalConfig::default();
        let resolvers: [Resolver<Order>; 1] = [order];
        let rules = merge_media_queries_scoped(&resolvers, &Order(0), &config, ".x");
        insta::assert_snapshot!(to_stylesheet(&rules), @r"
        .x { order: 0; }
        @media only screen and (min-width: 992px) { .x { order: 1; } }
        ");
    }
}
