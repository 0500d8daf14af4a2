//! Property tests for fragment ordering and rendering.

use quickcheck_macros::quickcheck;
use selkit_css::{CssSelector, FragmentKind, SelectorError};
use strum::IntoEnumIterator;

/// Build a selector from fragments already in valid order.
fn build(
    element: Option<&String>,
    id: Option<&String>,
    classes: &[String],
    attributes: &[String],
    pseudo_classes: &[String],
    pseudo_element: Option<&String>,
) -> Result<CssSelector, SelectorError> {
    let mut selector = CssSelector::new();
    if let Some(value) = element {
        selector = selector.element(value.as_str())?;
    }
    if let Some(value) = id {
        selector = selector.id(value.as_str())?;
    }
    for value in classes {
        selector = selector.class(value.as_str())?;
    }
    for value in attributes {
        selector = selector.attr(value.as_str())?;
    }
    for value in pseudo_classes {
        selector = selector.pseudo_class(value.as_str())?;
    }
    if let Some(value) = pseudo_element {
        selector = selector.pseudo_element(value.as_str())?;
    }
    Ok(selector)
}

#[quickcheck]
fn valid_order_renders_concatenation(
    element: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<String>,
    pseudo_classes: Vec<String>,
    pseudo_element: Option<String>,
) -> bool {
    let Ok(selector) = build(
        element.as_ref(),
        id.as_ref(),
        &classes,
        &attributes,
        &pseudo_classes,
        pseudo_element.as_ref(),
    ) else {
        return false;
    };

    let mut expected = String::new();
    if let Some(value) = &element {
        expected.push_str(value);
    }
    if let Some(value) = &id {
        expected.push('#');
        expected.push_str(value);
    }
    for value in &classes {
        expected.push('.');
        expected.push_str(value);
    }
    for value in &attributes {
        expected.push('[');
        expected.push_str(value);
        expected.push(']');
    }
    for value in &pseudo_classes {
        expected.push(':');
        expected.push_str(value);
    }
    if let Some(value) = &pseudo_element {
        expected.push_str("::");
        expected.push_str(value);
    }

    selector.stringify() == expected
}

#[quickcheck]
fn fragment_count_matches_calls(classes: Vec<String>, attributes: Vec<String>) -> bool {
    build(None, None, &classes, &attributes, &[], None)
        .map(|selector| selector.fragments().count() == classes.len() + attributes.len())
        .unwrap_or(false)
}

#[test]
fn test_order_gate_over_every_pair() {
    for first in FragmentKind::iter() {
        for second in FragmentKind::iter() {
            let result = CssSelector::new()
                .push(first, "a")
                .and_then(|selector| selector.push(second, "b"));

            if first == second && first.is_singleton() {
                assert_eq!(
                    result,
                    Err(SelectorError::DuplicateFragment { kind: second }),
                    "{first} then {second}"
                );
            } else if second.rank() < first.rank() {
                assert_eq!(
                    result,
                    Err(SelectorError::OutOfOrder {
                        kind: second,
                        after: first,
                    }),
                    "{first} then {second}"
                );
            } else {
                assert!(result.is_ok(), "{first} then {second}");
            }
        }
    }
}
