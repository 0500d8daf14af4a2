//! CSS selector building for the selkit workspace.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - Element, id, class, attribute, pseudo-class, and pseudo-element fragments
//!   - Fragment order and cardinality checks
//!   - Specificity calculation
//!
//! - **Complex selectors** ([§ 4.3](https://www.w3.org/TR/selectors-4/#complex))
//!   - Descendant, child, next-sibling, and subsequent-sibling combinators
//!   - Arbitrary nesting
//!
//! # Not Yet Implemented
//!
//! - Validation of fragment values (identifiers, attribute syntax)
//! - Selector lists (`a, b`)
//! - Parsing selector strings back into builders

/// Fragment-ordering errors.
pub mod error;
/// Facade functions that start a selector chain.
pub mod builder;
/// Compound and complex selector types.
pub mod selector;

// Re-exports for convenience
pub use builder::{attr, class, element, id, pseudo_class, pseudo_element};
pub use error::{SelectorError, UnknownCombinator};
pub use selector::{
    CombinedSelector, Combinator, CssSelector, FragmentKind, Selector, Specificity, combine,
};
