//! Container width and inline padding.

use super::{elide, px, Fragments};
use crate::config::{ContainerWidth, InternalConfig};
use crate::props::{cascade, Responsive, ResponsiveFlag};

/// Props read by the container resolvers.
pub trait ContainerProps {
    /// Forces `width: 100%` everywhere or at the listed breakpoints.
    fn is_fluid(&self) -> Option<&ResponsiveFlag>;
    /// Pixel width overriding the configured container width.
    fn max_width(&self) -> Option<&Responsive<f64>>;
    fn has_no_padding(&self) -> Option<&ResponsiveFlag>;
}

/// Container `width` per breakpoint.
///
/// Fluid (forced, or configured as `fluid`) yields `100%`. Otherwise an
/// explicit max width wins over the configured width.
pub fn calc_container_size<P: ContainerProps + ?Sized>(
    props: &P,
    config: &InternalConfig,
) -> Fragments {
    let bps = &config.breakpoints;
    let max_widths = cascade(props.max_width(), bps);

    let computed = bps.iter().enumerate().map(|(i, bp)| {
        let forced = props.is_fluid().is_some_and(|flag| flag.is_set_at(&bp.name));
        let width = match (forced, config.container[i], max_widths[i]) {
            (true, ..) | (false, ContainerWidth::Fluid, _) => "100%".to_owned(),
            (false, ContainerWidth::Px(_), Some(&max)) => px(max),
            (false, ContainerWidth::Px(configured), None) => px(configured),
        };
        Some(format!("width: {width};"))
    });
    elide(computed)
}

/// Container `padding-inline` per breakpoint, from the configured padding.
pub fn calc_container_padding<P: ContainerProps + ?Sized>(
    props: &P,
    config: &InternalConfig,
) -> Fragments {
    let computed = config
        .breakpoints
        .iter()
        .zip(&config.container_padding)
        .map(|(bp, &padding)| {
            let none = props
                .has_no_padding()
                .is_some_and(|flag| flag.is_set_at(&bp.name));
            let padding = if none { 0.0 } else { padding };
            Some(format!("padding-inline: {};", px(padding)))
        });
    elide(computed)
}
