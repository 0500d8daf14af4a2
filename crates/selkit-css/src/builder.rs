//! Entry points that start a new selector chain.
//!
//! Each function returns a fresh [`CssSelector`] holding one fragment, so
//! chains never share state:
//!
//! ```
//! use selkit_css::builder::id;
//!
//! let selector = id("main").class("container")?.class("editable")?;
//! assert_eq!(selector.stringify(), "#main.container.editable");
//! # Ok::<(), selkit_css::SelectorError>(())
//! ```

use crate::selector::{CssSelector, FragmentKind};

pub use crate::selector::combine;

/// Start a selector with a type selector such as `div`.
#[must_use]
pub fn element(value: impl Into<String>) -> CssSelector {
    CssSelector::with_fragment(FragmentKind::Element, value)
}

/// Start a selector with an id selector, rendered `#value`.
#[must_use]
pub fn id(value: impl Into<String>) -> CssSelector {
    CssSelector::with_fragment(FragmentKind::Id, value)
}

/// Start a selector with a class selector, rendered `.value`.
#[must_use]
pub fn class(value: impl Into<String>) -> CssSelector {
    CssSelector::with_fragment(FragmentKind::Class, value)
}

/// Start a selector with an attribute selector, rendered `[value]`.
#[must_use]
pub fn attr(value: impl Into<String>) -> CssSelector {
    CssSelector::with_fragment(FragmentKind::Attribute, value)
}

/// Start a selector with a pseudo-class, rendered `:value`.
#[must_use]
pub fn pseudo_class(value: impl Into<String>) -> CssSelector {
    CssSelector::with_fragment(FragmentKind::PseudoClass, value)
}

/// Start a selector with a pseudo-element, rendered `::value`.
#[must_use]
pub fn pseudo_element(value: impl Into<String>) -> CssSelector {
    CssSelector::with_fragment(FragmentKind::PseudoElement, value)
}
