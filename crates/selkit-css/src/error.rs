//! Errors raised while building selectors.

use thiserror::Error;

use crate::selector::FragmentKind;

/// A rejected selector-building call.
///
/// Both variants are fatal to the chain that produced them: the accumulator
/// is consumed by the failing call and there is nothing to recover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A second element, id, or pseudo-element fragment was supplied.
    #[error(
        "element, id and pseudo-element should not occur more than one time inside the selector (got a second {kind})"
    )]
    DuplicateFragment {
        /// The singleton kind that was already set.
        kind: FragmentKind,
    },

    /// A fragment arrived after a fragment of a later category.
    #[error(
        "selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element ({kind} after {after})"
    )]
    OutOfOrder {
        /// The rejected kind.
        kind: FragmentKind,
        /// The most recently accepted kind, which outranks `kind`.
        after: FragmentKind,
    },
}

impl SelectorError {
    /// The fragment kind whose call was rejected.
    #[must_use]
    pub const fn kind(&self) -> FragmentKind {
        match self {
            Self::DuplicateFragment { kind } | Self::OutOfOrder { kind, .. } => *kind,
        }
    }
}

/// A combinator name or token that is not one of the four CSS combinators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown combinator '{0}' (expected ' ', '>', '+', '~', or their names)")]
pub struct UnknownCombinator(pub String);
