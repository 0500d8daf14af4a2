//! Command-line selector parts and how they fold into a selector.
//!
//! A part is one of:
//! - `kind=value` - a fragment, e.g. `element=div`, `attr=href$=".png"`
//! - a combinator token or name - ` `, `>`, `+`, `~`, `descendant`, `child`, ...
//! - `@token` - any other token, inserted verbatim

use anyhow::{Context, Result, anyhow, bail};
use selkit_css::{Combinator, CssSelector, FragmentKind, Selector, combine};

/// One parsed command-line part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    /// A fragment added to the current compound selector.
    Fragment(FragmentKind, String),
    /// A combinator token closing the current compound selector.
    Token(String),
}

impl Part {
    /// Parse a single command-line argument.
    ///
    /// # Errors
    ///
    /// Returns an error if the argument is neither a combinator nor a
    /// `kind=value` pair with a known kind.
    pub fn parse(raw: &str) -> Result<Self> {
        if let Some(token) = raw.strip_prefix('@') {
            return Ok(Self::Token(token.to_string()));
        }
        if let Ok(combinator) = raw.parse::<Combinator>() {
            return Ok(Self::Token(combinator.token().to_string()));
        }

        let Some((kind, value)) = raw.split_once('=') else {
            bail!("expected kind=value, a combinator, or @token, got '{raw}'");
        };
        let kind = kind
            .trim()
            .parse::<FragmentKind>()
            .with_context(|| format!("unknown fragment kind '{kind}' in '{raw}'"))?;
        Ok(Self::Fragment(kind, value.to_string()))
    }
}

/// Fold parts left to right into one selector.
///
/// Fragments accumulate into the current compound; each token closes it and
/// combines everything so far with the next compound.
///
/// # Errors
///
/// Returns an error if a fragment is rejected by the builder, a token has no
/// compound on one of its sides, or there are no parts.
pub fn build_selector(parts: &[Part]) -> Result<Selector> {
    let mut chain: Option<(Selector, String)> = None;
    let mut current: Option<CssSelector> = None;

    for part in parts {
        match part {
            Part::Fragment(kind, value) => {
                let compound = current.take().unwrap_or_default();
                let compound = compound
                    .push(*kind, value.as_str())
                    .with_context(|| format!("cannot add {kind} '{value}'"))?;
                current = Some(compound);
            }
            Part::Token(token) => {
                let compound = current
                    .take()
                    .ok_or_else(|| anyhow!("combinator '{token}' has no selector on its left"))?;
                chain = Some((attach(chain, compound), token.clone()));
            }
        }
    }

    match (current, chain) {
        (Some(compound), chain) => Ok(attach(chain, compound)),
        (None, Some((_, token))) => bail!("combinator '{token}' has no selector on its right"),
        (None, None) => bail!("no selector parts given"),
    }
}

fn attach(chain: Option<(Selector, String)>, compound: CssSelector) -> Selector {
    match chain {
        Some((left, token)) => combine(left, token, compound).into(),
        None => compound.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_all(raw: &[&str]) -> Vec<Part> {
        raw.iter().map(|part| Part::parse(part).unwrap()).collect()
    }

    #[test]
    fn test_parse_fragment() {
        assert_eq!(
            Part::parse("element=div").unwrap(),
            Part::Fragment(FragmentKind::Element, "div".to_string())
        );
        assert_eq!(
            Part::parse(r#"attr=href$=".png""#).unwrap(),
            Part::Fragment(FragmentKind::Attribute, r#"href$=".png""#.to_string())
        );
        assert_eq!(
            Part::parse("pseudo-element=before").unwrap(),
            Part::Fragment(FragmentKind::PseudoElement, "before".to_string())
        );
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!(Part::parse(">").unwrap(), Part::Token(">".to_string()));
        assert_eq!(
            Part::parse("descendant").unwrap(),
            Part::Token(" ".to_string())
        );
        assert_eq!(Part::parse("@||").unwrap(), Part::Token("||".to_string()));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Part::parse("div").is_err());
        assert!(Part::parse("tag=div").is_err());
    }

    #[test]
    fn test_build_compound() {
        let parts = parse_all(&["id=main", "class=container", "class=editable"]);
        let selector = build_selector(&parts).unwrap();
        assert_eq!(selector.stringify(), "#main.container.editable");
    }

    #[test]
    fn test_build_chain() {
        let parts = parse_all(&[
            "element=div",
            "id=main",
            "+",
            "element=table",
            "id=data",
            "~",
            "element=tr",
        ]);
        let selector = build_selector(&parts).unwrap();
        assert_eq!(selector.stringify(), "div#main + table#data ~ tr");
        assert_eq!(selector.compound_count(), 3);
    }

    #[test]
    fn test_build_reports_order_errors() {
        let parts = parse_all(&["class=x", "id=main"]);
        let err = build_selector(&parts).unwrap_err();
        assert!(err.to_string().contains("cannot add id 'main'"));
    }

    #[test]
    fn test_build_rejects_dangling_combinators() {
        let err = build_selector(&parse_all(&[">", "element=a"])).unwrap_err();
        assert!(err.to_string().contains("no selector on its left"));

        let err = build_selector(&parse_all(&["element=a", ">"])).unwrap_err();
        assert!(err.to_string().contains("no selector on its right"));

        assert!(build_selector(&[]).is_err());
    }
}
