//! [`ConfigResolver`]: the configuration-resolution service.
//!
//! One resolver is created at application start and lives as long as the
//! application. It owns:
//!
//! - the merged-config and internal-config caches, keyed by the *identity* of
//!   the theme (`Rc` pointer), not its contents: two equal but distinct themes
//!   get separate entries and separate merges;
//! - the [`ScreenTable`] hand-off, overwritten by every config creation and
//!   read by the breakpoint observer.
//!
//! Entries are never invalidated; [`ConfigResolver::reset`] drops everything.
//! Each entry holds its theme alive, so a pointer can never be reused for a
//! different theme while its entry exists.
//!
//! Single-threaded: state sits behind `RefCell`s and `Rc`s.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::defaults;
use super::grid::{create_config, CreatedConfig, GridConfig, InternalConfig};
use super::user::{Theme, UserConfig};
use super::ConfigError;
use crate::css::vars::generate_screen_size_vars;
use crate::screen::{default_order, ScreenMap, ScreenObserver};

/// Breakpoint order and widths published by the last config creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenTable {
    pub breakpoint_order: Vec<String>,
    pub breakpoints: ScreenMap<i32>,
}

type ThemeKey = usize;

fn theme_key(theme: &Rc<Theme>) -> ThemeKey {
    Rc::as_ptr(theme) as ThemeKey
}

/// Creates, caches and hands off grid configurations.
#[derive(Debug)]
pub struct ConfigResolver {
    order: Vec<String>,
    prefix: String,
    configs: RefCell<HashMap<ThemeKey, (Rc<Theme>, Rc<GridConfig>)>>,
    internals: RefCell<HashMap<ThemeKey, (Rc<Theme>, Rc<InternalConfig>)>>,
    screens: RefCell<Option<ScreenTable>>,
}

impl ConfigResolver {
    /// A resolver over the default breakpoint order (`xs` .. `xxl`).
    pub fn new() -> Self {
        Self {
            order: default_order(),
            prefix: defaults::CSS_VAR_PREFIX.to_owned(),
            configs: RefCell::new(HashMap::new()),
            internals: RefCell::new(HashMap::new()),
            screens: RefCell::new(None),
        }
    }

    /// A resolver over a custom breakpoint order.
    pub fn with_order<S: AsRef<str>>(order: &[S]) -> Result<Self, ConfigError> {
        if order.is_empty() {
            return Err(ConfigError::EmptyBreakpointOrder);
        }
        Ok(Self {
            order: order.iter().map(|s| s.as_ref().to_owned()).collect(),
            ..Self::new()
        })
    }

    /// Use `prefix` for generated CSS variables (builder).
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// The breakpoint order this resolver merges against.
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// The CSS variable prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Merge `user` over the defaults and publish its breakpoints.
    ///
    /// Overwrites the [`ScreenTable`] hand-off. Does not touch the caches.
    pub fn create_config(&self, user: &UserConfig) -> Result<CreatedConfig, ConfigError> {
        let created = create_config(&self.order, user, &self.prefix)?;
        let table = ScreenTable {
            breakpoint_order: created.config.breakpoint_order.clone(),
            breakpoints: created.config.breakpoints.clone(),
        };
        if self.screens.borrow().is_some() {
            tracing::debug!("replacing published breakpoint table");
        }
        *self.screens.borrow_mut() = Some(table);
        Ok(created)
    }

    /// The merged config for `theme`, built on first request.
    ///
    /// Fails with [`ConfigError::MissingGridConfig`] if the theme has no
    /// `grid` key.
    pub fn get_config(&self, theme: &Rc<Theme>) -> Result<Rc<GridConfig>, ConfigError> {
        let key = theme_key(theme);
        if let Some((_, config)) = self.configs.borrow().get(&key) {
            tracing::trace!(key, "grid config cache hit");
            return Ok(Rc::clone(config));
        }

        let user = theme.grid.as_ref().ok_or(ConfigError::MissingGridConfig)?;
        let config = Rc::new(self.create_config(user)?.config);
        tracing::debug!(key, "grid config cache miss, merged");
        self.configs
            .borrow_mut()
            .insert(key, (Rc::clone(theme), Rc::clone(&config)));
        Ok(config)
    }

    /// The breakpoint-normalized config for `theme`, built on first request.
    pub fn get_internal_config(&self, theme: &Rc<Theme>) -> Result<Rc<InternalConfig>, ConfigError> {
        let key = theme_key(theme);
        if let Some((_, internal)) = self.internals.borrow().get(&key) {
            tracing::trace!(key, "internal config cache hit");
            return Ok(Rc::clone(internal));
        }

        let internal = Rc::new(self.get_config(theme)?.to_internal());
        self.internals
            .borrow_mut()
            .insert(key, (Rc::clone(theme), Rc::clone(&internal)));
        Ok(internal)
    }

    /// Every global CSS variable for `theme`: grid, skeleton and screen-size
    /// variables.
    pub fn stylesheet(&self, theme: &Rc<Theme>) -> Result<String, ConfigError> {
        let internal = self.get_internal_config(theme)?;
        Ok([
            crate::css::vars::generate_grid_vars(&internal, &self.prefix),
            crate::css::vars::generate_skeleton_vars(&internal, &self.prefix),
            generate_screen_size_vars(&internal, &self.prefix),
        ]
        .join("\n"))
    }

    /// The breakpoint table published by the last config creation.
    pub fn screens(&self) -> Option<ScreenTable> {
        self.screens.borrow().clone()
    }

    /// An observer over the published breakpoint table, or over the default
    /// breakpoints if no config has been created yet.
    pub fn observer(&self) -> ScreenObserver {
        match self.screens.borrow().as_ref() {
            Some(table) => ScreenObserver::from_table(table),
            None => {
                tracing::debug!("no published breakpoints, observing defaults");
                ScreenObserver::new(InternalConfig::default().breakpoints)
            }
        }
    }

    /// Number of cached merged configs.
    pub fn cached_configs(&self) -> usize {
        self.configs.borrow().len()
    }

    /// Drop every cache entry and the published breakpoint table.
    pub fn reset(&self) {
        self.configs.borrow_mut().clear();
        self.internals.borrow_mut().clear();
        *self.screens.borrow_mut() = None;
    }
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::Responsive;
    use pretty_assertions::assert_eq;

    fn theme(columns: u32) -> Rc<Theme> {
        Rc::new(Theme::with_grid(UserConfig {
            columns: Some(Responsive::Scalar(columns)),
            ..Default::default()
        }))
    }

    // ── Caching ──────────────────────────────────────────────────────

    #[test]
    fn same_theme_hits_cache() {
        let resolver = ConfigResolver::new();
        let theme = theme(12);
        let first = resolver.get_config(&theme).unwrap();
        let second = resolver.get_config(&theme).unwrap();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(resolver.cached_configs(), 1);
    }

    #[test]
    fn equal_but_distinct_themes_get_separate_entries() {
        let resolver = ConfigResolver::new();
        let a = theme(12);
        let b = theme(12);
        let config_a = resolver.get_config(&a).unwrap();
        let config_b = resolver.get_config(&b).unwrap();
        assert_eq!(config_a, config_b);
        assert!(!Rc::ptr_eq(&config_a, &config_b));
        assert_eq!(resolver.cached_configs(), 2);
    }

    #[test]
    fn internal_config_is_cached() {
        let resolver = ConfigResolver::new();
        let theme = theme(8);
        let first = resolver.get_internal_config(&theme).unwrap();
        let second = resolver.get_internal_config(&theme).unwrap();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(first.columns, vec![8; 6]);
    }

    #[test]
    fn missing_grid_key_is_an_error() {
        let resolver = ConfigResolver::new();
        let theme = Rc::new(Theme::default());
        assert!(matches!(
            resolver.get_config(&theme),
            Err(ConfigError::MissingGridConfig)
        ));
        assert!(matches!(
            resolver.get_internal_config(&theme),
            Err(ConfigError::MissingGridConfig)
        ));
    }

    #[test]
    fn reset_clears_everything() {
        let resolver = ConfigResolver::new();
        resolver.get_config(&theme(12)).unwrap();
        assert!(resolver.screens().is_some());
        resolver.reset();
        assert_eq!(resolver.cached_configs(), 0);
        assert!(resolver.screens().is_none());
    }

    // ── Hand-off ─────────────────────────────────────────────────────

    #[test]
    fn create_config_publishes_breakpoints() {
        let resolver = ConfigResolver::new();
        assert!(resolver.screens().is_none());

        let user = UserConfig {
            breakpoints: Some(Responsive::per_breakpoint([("xs", 0), ("md", 800)])),
            ..Default::default()
        };
        resolver.create_config(&user).unwrap();

        let table = resolver.screens().unwrap();
        assert_eq!(table.breakpoint_order, default_order());
        assert_eq!(
            table.breakpoints,
            [("xs".to_string(), 0), ("md".to_string(), 800)]
                .into_iter()
                .collect::<ScreenMap<i32>>()
        );
    }

    #[test]
    fn last_creation_wins() {
        let resolver = ConfigResolver::new();
        resolver.create_config(&UserConfig::default()).unwrap();
        let user = UserConfig {
            breakpoints: Some(Responsive::per_breakpoint([("xs", 0), ("xl", 1000)])),
            ..Default::default()
        };
        resolver.create_config(&user).unwrap();
        assert_eq!(resolver.screens().unwrap().breakpoints.get("xl"), Some(&1000));
    }

    #[test]
    fn observer_reads_published_table() {
        let resolver = ConfigResolver::new();
        let user = UserConfig {
            breakpoints: Some(Responsive::per_breakpoint([("xs", 0), ("sm", 300)])),
            ..Default::default()
        };
        resolver.create_config(&user).unwrap();
        let mut observer = resolver.observer();
        observer.resize(Some(400));
        assert_eq!(observer.current(), Some("xxl"));
    }

    #[test]
    fn observer_without_config_uses_defaults() {
        let mut observer = ConfigResolver::new().observer();
        observer.resize(Some(800));
        assert_eq!(observer.current(), Some("md"));
    }

    // ── Custom order / prefix ────────────────────────────────────────

    #[test]
    fn custom_order_and_prefix() {
        let resolver = ConfigResolver::with_order(&["narrow", "wide"])
            .unwrap()
            .with_prefix("layout");
        let css = resolver.stylesheet(&theme(4)).unwrap();
        assert!(css.contains("--layout-columns: 4;"));
        assert!(css.contains("--layout-screen-size: \"wide\";"));
    }

    #[test]
    fn empty_order_is_rejected() {
        let order: [&str; 0] = [];
        assert!(matches!(
            ConfigResolver::with_order(&order),
            Err(ConfigError::EmptyBreakpointOrder)
        ));
    }
}
