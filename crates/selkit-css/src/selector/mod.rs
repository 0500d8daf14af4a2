//! CSS selector building
//!
//! This module assembles compound selectors fragment by fragment and checks
//! that the fragments arrive in the order the
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/) grammar writes them.

pub mod combinator;

use std::fmt;
use std::ops::Add;

use serde::{Serialize, Serializer};
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::SelectorError;

pub use combinator::{CombinedSelector, Combinator, Selector, combine};

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// The categories of simple selector a compound selector can hold, in the
/// order they must appear. The declaration order is the rank order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum FragmentKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `a`, `*`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// "An ID selector is a hash (#, U+0023) immediately followed by the
    /// ID value, which is an identifier."
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// "The class selector is given as a full stop (. U+002E) immediately
    /// followed by an identifier."
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Examples: `[href]`, `[href$=".png"]`
    #[strum(to_string = "attribute", serialize = "attr")]
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Examples: `:focus`, `:nth-of-type(even)`
    PseudoClass,

    /// [CSS Pseudo-Elements Level 4](https://www.w3.org/TR/css-pseudo-4/)
    ///
    /// Examples: `::before`, `::first-line`
    PseudoElement,
}

impl FragmentKind {
    /// Position of this kind in the required fragment order.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Element => 0,
            Self::Id => 1,
            Self::Class => 2,
            Self::Attribute => 3,
            Self::PseudoClass => 4,
            Self::PseudoElement => 5,
        }
    }

    /// Whether at most one fragment of this kind may appear in a compound.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Text written before the fragment value.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Element => "",
            Self::Id => "#",
            Self::Class => ".",
            Self::Attribute => "[",
            Self::PseudoClass => ":",
            Self::PseudoElement => "::",
        }
    }

    /// Text written after the fragment value.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Attribute => "]",
            _ => "",
        }
    }
}

/// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
/// "A selector's specificity is calculated for a given element as follows:
///  - count the number of ID selectors in the selector (= A)
///  - count the number of class selectors, attributes selectors, and pseudo-classes in the selector (= B)
///  - count the number of type selectors and pseudo-elements in the selector (= C)
///
/// Specificities are compared by comparing the three components in order."
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Create a new specificity with (A, B, C) components.
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self(a, b, c)
    }
}

impl Add for Specificity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0, self.1 + rhs.1, self.2 + rhs.2)
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator, and represents a set of simultaneous
/// conditions on a single element."
///
/// An accumulator for one compound selector. Each chained call consumes the
/// selector and hands it back on success, so a rejected call ends the chain:
///
/// ```
/// use selkit_css::element;
///
/// let selector = element("a").attr(r#"href$=".png""#)?.pseudo_class("focus")?;
/// assert_eq!(selector.stringify(), r#"a[href$=".png"]:focus"#);
/// # Ok::<(), selkit_css::SelectorError>(())
/// ```
///
/// Values are stored without their decorations and rendered on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssSelector {
    element: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<String>,
    pseudo_classes: Vec<String>,
    pseudo_element: Option<String>,
    /// Kind of the most recently accepted fragment.
    last: Option<FragmentKind>,
}

impl CssSelector {
    /// An empty selector. Renders as `""`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A selector holding a single fragment.
    ///
    /// A fresh accumulator accepts any first fragment, so this cannot fail.
    pub(crate) fn with_fragment(kind: FragmentKind, value: impl Into<String>) -> Self {
        let mut selector = Self::new();
        selector.accept(kind, value.into());
        selector
    }

    /// Set the type selector.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateFragment`] if an element is already set,
    /// [`SelectorError::OutOfOrder`] if any later fragment was already added.
    pub fn element(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(FragmentKind::Element, value)
    }

    /// Set the id selector, rendered as `#value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateFragment`] if an id is already set,
    /// [`SelectorError::OutOfOrder`] if a class, attribute, or pseudo
    /// fragment was already added.
    pub fn id(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(FragmentKind::Id, value)
    }

    /// Append a class selector, rendered as `.value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if an attribute or pseudo fragment was
    /// already added.
    pub fn class(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(FragmentKind::Class, value)
    }

    /// Append an attribute selector, rendered as `[value]`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if a pseudo fragment was already added.
    pub fn attr(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(FragmentKind::Attribute, value)
    }

    /// Append a pseudo-class, rendered as `:value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if a pseudo-element was already added.
    pub fn pseudo_class(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(FragmentKind::PseudoClass, value)
    }

    /// Set the pseudo-element, rendered as `::value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateFragment`] if a pseudo-element is already set.
    pub fn pseudo_element(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(FragmentKind::PseudoElement, value)
    }

    /// Add a fragment of any kind.
    ///
    /// # Algorithm
    ///
    /// STEP 1: A singleton kind (element, id, pseudo-element) that is already
    /// set is a duplicate.
    ///
    /// STEP 2: A kind ranked strictly below the last accepted kind is out of
    /// order. Equal ranks pass, so classes, attributes, and pseudo-classes
    /// may repeat back to back.
    ///
    /// STEP 3: Store the value and remember `kind` as the last accepted kind.
    ///
    /// # Errors
    ///
    /// See STEP 1 and STEP 2.
    pub fn push(mut self, kind: FragmentKind, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.check(kind)?;
        self.accept(kind, value.into());
        Ok(self)
    }

    fn check(&self, kind: FragmentKind) -> Result<(), SelectorError> {
        // STEP 1
        if kind.is_singleton() && self.has(kind) {
            tracing::debug!(%kind, "rejecting duplicate selector fragment");
            return Err(SelectorError::DuplicateFragment { kind });
        }

        // STEP 2
        if let Some(after) = self.last {
            if kind.rank() < after.rank() {
                tracing::debug!(%kind, %after, "rejecting out-of-order selector fragment");
                return Err(SelectorError::OutOfOrder { kind, after });
            }
        }
        Ok(())
    }

    // STEP 3
    fn accept(&mut self, kind: FragmentKind, value: String) {
        tracing::trace!(%kind, value = %value, "accepting selector fragment");
        match kind {
            FragmentKind::Element => self.element = Some(value),
            FragmentKind::Id => self.id = Some(value),
            FragmentKind::Class => self.classes.push(value),
            FragmentKind::Attribute => self.attributes.push(value),
            FragmentKind::PseudoClass => self.pseudo_classes.push(value),
            FragmentKind::PseudoElement => self.pseudo_element = Some(value),
        }
        self.last = Some(kind);
    }

    /// Whether at least one fragment of `kind` has been added.
    #[must_use]
    pub fn has(&self, kind: FragmentKind) -> bool {
        match kind {
            FragmentKind::Element => self.element.is_some(),
            FragmentKind::Id => self.id.is_some(),
            FragmentKind::Class => !self.classes.is_empty(),
            FragmentKind::Attribute => !self.attributes.is_empty(),
            FragmentKind::PseudoClass => !self.pseudo_classes.is_empty(),
            FragmentKind::PseudoElement => self.pseudo_element.is_some(),
        }
    }

    /// Whether no fragment has been added.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.last.is_none()
    }

    /// The undecorated fragment values, in rendering order.
    pub fn fragments(&self) -> impl Iterator<Item = (FragmentKind, &str)> + '_ {
        fn tagged(kind: FragmentKind, values: &[String]) -> impl Iterator<Item = (FragmentKind, &str)> {
            values.iter().map(move |value| (kind, value.as_str()))
        }

        tagged(FragmentKind::Element, self.element.as_slice())
            .chain(tagged(FragmentKind::Id, self.id.as_slice()))
            .chain(tagged(FragmentKind::Class, &self.classes))
            .chain(tagged(FragmentKind::Attribute, &self.attributes))
            .chain(tagged(FragmentKind::PseudoClass, &self.pseudo_classes))
            .chain(tagged(FragmentKind::PseudoElement, self.pseudo_element.as_slice()))
    }

    /// Render the compound selector, e.g. `div#main.container:hover`.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    /// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
    ///
    /// The universal selector `*` adds nothing.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        self.fragments()
            .fold(Specificity::default(), |acc, (kind, value)| {
                let own = match kind {
                    FragmentKind::Element if value == "*" => Specificity::default(),
                    FragmentKind::Element | FragmentKind::PseudoElement => Specificity::new(0, 0, 1),
                    FragmentKind::Id => Specificity::new(1, 0, 0),
                    FragmentKind::Class | FragmentKind::Attribute | FragmentKind::PseudoClass => {
                        Specificity::new(0, 1, 0)
                    }
                };
                acc + own
            })
    }
}

impl fmt::Display for CssSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (kind, value) in self.fragments() {
            write!(f, "{}{value}{}", kind.prefix(), kind.suffix())?;
        }
        Ok(())
    }
}

/// Serialized shape of one fragment.
#[derive(Serialize)]
struct FragmentView<'a> {
    kind: FragmentKind,
    value: &'a str,
}

/// Serialized shape of a compound selector.
#[derive(Serialize)]
struct CompoundView<'a> {
    selector: String,
    specificity: Specificity,
    fragments: Vec<FragmentView<'a>>,
}

impl Serialize for CssSelector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        CompoundView {
            selector: self.stringify(),
            specificity: self.specificity(),
            fragments: self
                .fragments()
                .map(|(kind, value)| FragmentView { kind, value })
                .collect(),
        }
        .serialize(serializer)
    }
}
