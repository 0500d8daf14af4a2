//! Complex selectors: compound selectors joined by combinators.
//!
//! [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)

use std::fmt;
use std::str::FromStr;

use selkit_common::warning::warn_once;
use serde::{Serialize, Serializer};
use strum_macros::EnumIter;

use super::{CssSelector, Specificity};
use crate::error::UnknownCombinator;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    SubsequentSibling,
}

impl Combinator {
    /// The token written between the two sides.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }

    /// Human-readable name, also accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Descendant => "descendant",
            Self::Child => "child",
            Self::NextSibling => "next-sibling",
            Self::SubsequentSibling => "subsequent-sibling",
        }
    }

    /// Look up a combinator by its exact token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            " " => Some(Self::Descendant),
            ">" => Some(Self::Child),
            "+" => Some(Self::NextSibling),
            "~" => Some(Self::SubsequentSibling),
            _ => None,
        }
    }
}

impl FromStr for Combinator {
    type Err = UnknownCombinator;

    /// Accepts a token (`" "`, `">"`, `"+"`, `"~"`) or a name such as
    /// `next-sibling`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s)
            .or(match s {
                "descendant" => Some(Self::Descendant),
                "child" => Some(Self::Child),
                "next-sibling" => Some(Self::NextSibling),
                "subsequent-sibling" => Some(Self::SubsequentSibling),
                _ => None,
            })
            .ok_or_else(|| UnknownCombinator(s.to_string()))
    }
}

impl AsRef<str> for Combinator {
    fn as_ref(&self) -> &str {
        self.token()
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Any selector that can stand on either side of a combinator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Selector {
    /// A single compound selector.
    Compound(CssSelector),
    /// Two selectors joined by a combinator.
    Complex(CombinedSelector),
}

impl Selector {
    /// Render the selector.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    /// Sum of the specificities of every compound in the tree.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        match self {
            Self::Compound(compound) => compound.specificity(),
            Self::Complex(complex) => complex.specificity(),
        }
    }

    /// Number of compound selectors in the tree.
    #[must_use]
    pub fn compound_count(&self) -> usize {
        match self {
            Self::Compound(_) => 1,
            Self::Complex(complex) => complex.left.compound_count() + complex.right.compound_count(),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compound(compound) => fmt::Display::fmt(compound, f),
            Self::Complex(complex) => fmt::Display::fmt(complex, f),
        }
    }
}

impl From<CssSelector> for Selector {
    fn from(selector: CssSelector) -> Self {
        Self::Compound(selector)
    }
}

impl From<CombinedSelector> for Selector {
    fn from(selector: CombinedSelector) -> Self {
        Self::Complex(selector)
    }
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// Two selectors and the token between them. Either side may itself be a
/// `CombinedSelector`, so chains like `A + B ~ C D` nest to any depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedSelector {
    left: Box<Selector>,
    token: String,
    right: Box<Selector>,
}

impl CombinedSelector {
    /// Left-hand selector.
    #[must_use]
    pub fn left(&self) -> &Selector {
        &self.left
    }

    /// The token exactly as it was supplied.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Right-hand selector.
    #[must_use]
    pub fn right(&self) -> &Selector {
        &self.right
    }

    /// The combinator, if the token is one of the four CSS combinators.
    #[must_use]
    pub fn combinator(&self) -> Option<Combinator> {
        Combinator::from_token(&self.token)
    }

    /// Render as `"{left} {token} {right}"`.
    ///
    /// The descendant token is a space, so it renders with three spaces
    /// between the sides.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    /// Sum of both sides' specificities.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        self.left.specificity() + self.right.specificity()
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.token, self.right)
    }
}

/// Serialized shape of a complex selector.
#[derive(Serialize)]
struct ComplexView<'a> {
    selector: String,
    specificity: Specificity,
    left: &'a Selector,
    token: &'a str,
    right: &'a Selector,
}

impl Serialize for CombinedSelector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ComplexView {
            selector: self.stringify(),
            specificity: self.specificity(),
            left: &self.left,
            token: &self.token,
            right: &self.right,
        }
        .serialize(serializer)
    }
}

/// Join two selectors with a combinator token.
///
/// Any token is accepted and inserted verbatim. Tokens other than the four
/// CSS combinators produce a one-time warning.
///
/// ```
/// use selkit_css::{Combinator, combine, element};
///
/// let selector = combine(
///     element("div").id("main")?,
///     Combinator::NextSibling,
///     element("table").id("data")?,
/// );
/// assert_eq!(selector.stringify(), "div#main + table#data");
/// # Ok::<(), selkit_css::SelectorError>(())
/// ```
#[must_use]
pub fn combine(
    left: impl Into<Selector>,
    token: impl AsRef<str>,
    right: impl Into<Selector>,
) -> CombinedSelector {
    let token = token.as_ref();
    if Combinator::from_token(token).is_none() {
        warn_once(
            "Selector",
            &format!("unknown combinator token '{token}', inserting it verbatim"),
        );
    }
    tracing::trace!(token, "combining selectors");

    CombinedSelector {
        left: Box::new(left.into()),
        token: token.to_string(),
        right: Box::new(right.into()),
    }
}
