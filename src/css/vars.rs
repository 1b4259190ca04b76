//! CSS custom-property generation.
//!
//! Nested configuration is flattened into one property per leaf, named by the
//! dash-joined path: `debug.screenBadge.color` becomes
//! `--grid-debug-screen-badge-color`. `null` leaves emit nothing.

use serde::Serialize;
use serde_json::Value;

use super::media::{merge_fragments, to_stylesheet, wrap, ROOT_SCOPE};
use crate::calc::{elide, num, px, Fragments};
use crate::config::{ContainerWidth, InternalConfig};

/// Grid variables: base spacing and debug colors at the base breakpoint,
/// columns / gap / container width / container padding per breakpoint.
pub fn generate_grid_vars(config: &InternalConfig, prefix: &str) -> String {
    let len = config.breakpoints.len();
    let base_only = |fragment: String| -> Fragments {
        (0..len)
            .map(|i| (i == 0 && !fragment.is_empty()).then(|| fragment.clone()))
            .collect()
    };
    let per_breakpoint = |name: &str, values: Vec<String>| -> Fragments {
        elide(
            values
                .into_iter()
                .map(|value| Some(format!("--{prefix}-{name}: {value};"))),
        )
    };

    let lists = [
        base_only(format!(
            "--{prefix}-base-spacing: {}rem;",
            num(config.base_spacing)
        )),
        per_breakpoint(
            "columns",
            config.columns.iter().map(u32::to_string).collect(),
        ),
        per_breakpoint(
            "column-gap",
            config.column_gap.iter().map(|&gap| px(gap)).collect(),
        ),
        per_breakpoint(
            "container",
            config
                .container
                .iter()
                .map(|width| match width {
                    ContainerWidth::Fluid => "100%".to_owned(),
                    ContainerWidth::Px(value) => px(*value),
                })
                .collect(),
        ),
        per_breakpoint(
            "container-padding",
            config.container_padding.iter().map(|&p| px(p)).collect(),
        ),
        base_only(object_vars(&format!("{prefix}-debug"), &config.debug)),
    ];

    let merged = merge_fragments(&lists, len);
    to_stylesheet(&wrap(merged, config, ROOT_SCOPE))
}

/// Skeleton variables. The default variant is declared on `:root`; every
/// other variant under `[data-skeleton-variant="NAME"]`, so switching
/// variants is an attribute toggle.
pub fn generate_skeleton_vars(config: &InternalConfig, prefix: &str) -> String {
    let path = format!("{prefix}-skeleton");
    let mut blocks = vec![format!(
        "{ROOT_SCOPE} {{ {} }}",
        object_vars(&path, &config.skeleton_variant(None))
    )];
    blocks.extend(
        config
            .skeleton
            .iter()
            .filter(|(name, _)| **name != config.skeleton_default)
            .map(|(name, variant)| {
                format!(
                    "[data-skeleton-variant=\"{name}\"] {{ {} }}",
                    object_vars(&path, variant)
                )
            }),
    );
    blocks.join("\n")
}

/// The active breakpoint name as a quoted string, one rule per breakpoint.
pub fn generate_screen_size_vars(config: &InternalConfig, prefix: &str) -> String {
    let fragments = config
        .breakpoints
        .names()
        .map(|name| Some(format!("--{prefix}-screen-size: \"{name}\";")))
        .collect();
    to_stylesheet(&wrap(fragments, config, ROOT_SCOPE))
}

fn object_vars<T: Serialize>(path: &str, value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(value) => {
            let mut out = Vec::new();
            walk_vars(path, &value, &mut out);
            out.join(" ")
        }
        Err(err) => {
            tracing::warn!(path, error = %err, "cannot flatten configuration into CSS variables");
            String::new()
        }
    }
}

/// Append a `--path: value;` declaration for every non-null leaf of `value`.
pub fn walk_vars(path: &str, value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Null => {}
        Value::Object(map) => {
            for (key, child) in map {
                walk_vars(&format!("{path}-{}", kebab(key)), child, out);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                walk_vars(&format!("{path}-{index}"), child, out);
            }
        }
        Value::String(s) => out.push(format!("--{path}: {s};")),
        Value::Number(n) => {
            let text = n.as_f64().map(num).unwrap_or_else(|| n.to_string());
            out.push(format!("--{path}: {text};"));
        }
        Value::Bool(b) => out.push(format!("--{path}: {b};")),
    }
}

fn kebab(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::grid::create_config;
    use crate::config::UserConfig;
    use crate::screen::default_order;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn internal(json: &str) -> InternalConfig {
        let user = UserConfig::from_json(json).unwrap();
        create_config(&default_order(), &user, "grid")
            .unwrap()
            .config
            .to_internal()
    }

    // ── Walking ──────────────────────────────────────────────────────

    #[test]
    fn walk_flattens_and_skips_null() {
        let mut out = Vec::new();
        walk_vars(
            "grid-debug",
            &json!({ "screenBadge": { "color": "#fff", "background": null }, "size": 2.0 }),
            &mut out,
        );
        assert_eq!(
            out,
            vec!["--grid-debug-screen-badge-color: #fff;", "--grid-debug-size: 2;"]
        );
    }

    #[test]
    fn kebab_case_keys() {
        assert_eq!(kebab("baseHighlight"), "base-highlight");
        assert_eq!(kebab("col"), "col");
    }

    // ── Grid ─────────────────────────────────────────────────────────

    #[test]
    fn grid_vars_elide_per_breakpoint() {
        let config = internal(
            r#"{
                "columns": { "xs": 4, "md": 12 },
                "container": { "md": 720 },
                "debug": {
                    "container": { "background": null, "outline": null },
                    "row": { "background": null, "outline": null },
                    "col": { "background": null, "outline": null },
                    "spacer": { "background": null, "outline": null },
                    "screenBadge": { "color": null, "background": null }
                }
            }"#,
        );
        insta::assert_snapshot!(generate_grid_vars(&config, "grid"), @r#"
        :root { --grid-base-spacing: 0.25rem; --grid-columns: 4; --grid-column-gap: 24px; --grid-container: 100%; --grid-container-padding: 12px; }
        @media only screen and (min-width: 768px) { :root { --grid-columns: 12; --grid-container: 720px; } }
        "#);
    }

    #[test]
    fn grid_vars_include_debug_colors() {
        let css = generate_grid_vars(&InternalConfig::default(), "grid");
        assert!(css.contains("--grid-debug-col-outline: #ef5350;"));
        assert!(css.contains("--grid-debug-screen-badge-background: #212121;"));
        assert_eq!(css.lines().count(), 1);
    }

    // ── Skeleton ─────────────────────────────────────────────────────

    #[test]
    fn skeleton_default_on_root_others_scoped() {
        let css = generate_skeleton_vars(&InternalConfig::default(), "grid");
        let lines: Vec<&str> = css.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            ":root { --grid-skeleton-animation-delay: 0.05; --grid-skeleton-animation-direction: ltr; \
             --grid-skeleton-animation-duration: 1.5; --grid-skeleton-border-radius: 4px; \
             --grid-skeleton-colors-base: #e2e5e7; --grid-skeleton-colors-base-highlight: #eceff1; \
             --grid-skeleton-colors-highlight: #f8f9fa; }"
        );
        assert!(lines[1].starts_with("[data-skeleton-variant=\"dark\"] { "));
        assert!(lines[1].contains("--grid-skeleton-colors-base: #2a2d31;"));
    }

    // ── Screen size ──────────────────────────────────────────────────

    #[test]
    fn screen_size_per_breakpoint() {
        let css = generate_screen_size_vars(&InternalConfig::default(), "grid");
        insta::assert_snapshot!(css, @r#"
        :root { --grid-screen-size: "xs"; }
        @media only screen and (min-width: 576px) { :root { --grid-screen-size: "sm"; } }
        @media only screen and (min-width: 768px) { :root { --grid-screen-size: "md"; } }
        @media only screen and (min-width: 992px) { :root { --grid-screen-size: "lg"; } }
        @media only screen and (min-width: 1200px) { :root { --grid-screen-size: "xl"; } }
        @media only screen and (min-width: 1400px) { :root { --grid-screen-size: "xxl"; } }
        "#);
    }
}
