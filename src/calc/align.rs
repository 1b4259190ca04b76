//! Alignment, justification and order: one declaration per breakpoint, no
//! arithmetic.

use super::{elide, Fragments};
use crate::config::InternalConfig;
use crate::props::{cascade, Responsive};

/// Props read by the alignment resolvers.
pub trait AlignProps {
    /// `align-items` for rows, `align-self` for columns.
    const ALIGN_PROPERTY: &'static str;

    fn align(&self) -> Option<&Responsive<String>> {
        None
    }
    fn justify(&self) -> Option<&Responsive<String>> {
        None
    }
    fn order(&self) -> Option<&Responsive<i32>> {
        None
    }
}

pub fn calc_align<P: AlignProps>(props: &P, config: &InternalConfig) -> Fragments {
    declare(P::ALIGN_PROPERTY, props.align(), config)
}

pub fn calc_justify<P: AlignProps>(props: &P, config: &InternalConfig) -> Fragments {
    declare("justify-content", props.justify(), config)
}

pub fn calc_order<P: AlignProps>(props: &P, config: &InternalConfig) -> Fragments {
    declare("order", props.order(), config)
}

fn declare<T: std::fmt::Display>(
    property: &str,
    value: Option<&Responsive<T>>,
    config: &InternalConfig,
) -> Fragments {
    let computed = cascade(value, &config.breakpoints)
        .into_iter()
        .map(|value| value.map(|v| format!("{property}: {v};")));
    elide(computed)
}
