//! Selkit CLI - build CSS selectors from fragments
//!
//! Usage:
//!   selkit <PARTS>...                 Print the selector
//!   selkit <PARTS>... --specificity   Also print its specificity
//!   selkit <PARTS>... --json          Print the selector tree as JSON
//!
//! Examples:
//!   selkit element=a 'attr=href$=".png"' pseudo-class=focus
//!   selkit element=ul '>' element=li class=active

mod parts;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use selkit_common::warning::warning_count;
use selkit_css::Selector;
use tracing_subscriber::EnvFilter;

use parts::{Part, build_selector};

/// Selkit — build order-checked CSS selectors from the command line
#[derive(Parser, Debug)]
#[command(name = "selkit")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"PARTS:
    kind=value     element, id, class, attr, pseudo-class, pseudo-element
    combinator     ' ', '>', '+', '~' or descendant, child, next-sibling, subsequent-sibling
    @token         any other token, inserted verbatim

EXAMPLES:
    selkit id=main class=container class=editable
    selkit element=div id=main + element=table id=data
    selkit --json element=ul '>' element=li
"#)]
struct Cli {
    /// Fragments and combinators, in selector order
    #[arg(value_name = "PARTS", required = true)]
    parts: Vec<String>,

    /// Print the selector tree as JSON
    #[arg(short, long)]
    json: bool,

    /// Print the (a, b, c) specificity after the selector
    #[arg(short, long)]
    specificity: bool,

    /// Log every accepted and rejected fragment
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", error_line(&err));
            ExitCode::FAILURE
        }
    }
}

/// The `error: ...` line printed before exiting with status 1.
fn error_line(err: &anyhow::Error) -> String {
    format!("{} {err:#}", "error:".red().bold())
}

/// Install a stderr subscriber. `RUST_LOG` overrides the default level.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "trace" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Build the selector described by the command line and render it.
fn run(cli: &Cli) -> Result<String> {
    let parts = cli
        .parts
        .iter()
        .map(|raw| Part::parse(raw))
        .collect::<Result<Vec<_>>>()?;
    let selector = build_selector(&parts)?;
    tracing::debug!(
        compounds = selector.compound_count(),
        warnings = warning_count(),
        "selector built"
    );

    render(&selector, cli.json, cli.specificity)
}

/// Text printed on success: the selector or its JSON tree, optionally
/// followed by a `specificity: (a, b, c)` line.
fn render(selector: &Selector, json: bool, specificity: bool) -> Result<String> {
    let mut output = if json {
        serde_json::to_string_pretty(selector).context("failed to serialize selector")?
    } else {
        selector.stringify()
    };

    if specificity {
        output.push_str(&format!("\nspecificity: {}", selector.specificity()));
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("selkit").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_run_prints_selector() {
        let output = run(&cli(&["element=a", "attr=href", "pseudo-class=focus"])).unwrap();
        assert_eq!(output, "a[href]:focus");
    }

    #[test]
    fn test_run_appends_specificity() {
        let output = run(&cli(&["--specificity", "id=main", "class=container"])).unwrap();
        assert_eq!(output, "#main.container\nspecificity: (1, 1, 0)");
    }

    #[test]
    fn test_run_prints_json_tree() {
        let output = run(&cli(&["--json", "element=ul", ">", "element=li"])).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["type"], "complex");
        assert_eq!(json["selector"], "ul > li");
        assert_eq!(json["left"]["selector"], "ul");
        assert_eq!(json["right"]["fragments"][0]["kind"], "element");
    }

    #[test]
    fn test_run_json_with_specificity() {
        let output = run(&cli(&["-j", "-s", "element=div"])).unwrap();
        let (json, last) = output.rsplit_once('\n').unwrap();
        assert_eq!(last, "specificity: (0, 0, 1)");
        let json: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(json["selector"], "div");
    }

    #[test]
    fn test_run_reports_out_of_order_fragments() {
        let err = run(&cli(&["class=x", "id=main"])).unwrap_err();
        let line = error_line(&err);
        assert!(line.contains("error:"));
        assert!(line.contains("cannot add id 'main'"));
        assert!(line.contains("element, id, class, attribute, pseudo-class, pseudo-element"));
    }

    #[test]
    fn test_missing_parts_is_a_usage_error() {
        assert!(Cli::try_parse_from(["selkit"]).is_err());
    }
}
