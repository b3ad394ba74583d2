//! Kestrel CLI
//!
//! Calculates, compares, and ranks CSS selector specificity.
//!
//! - kestrel calc 'ul#nav li.active > a'      # 1,1,3
//! - kestrel compare '#id' 0,5,0              # 1
//! - kestrel rank styles.txt                  # most specific first

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kestrel_common::warning::{clear_warnings, warn_once};
use kestrel_css::tokenizer::tokenize;
use kestrel_css::{
    Specificity, SpecificityInput, SpecificityResult, calculate, compare, sort_by_specificity,
};
use owo_colors::OwoColorize;

/// Kestrel: CSS selector specificity calculator
#[derive(Parser, Debug)]
#[command(name = "kestrel")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r"EXAMPLES:
    # Specificity of a selector
    kestrel calc 'ul#nav li.active > a'

    # Show what each component contributed
    kestrel calc --parts ':is(#main, .sidebar) > p::first-line'

    # Several selectors as JSON
    kestrel calc --json '#a' '.b' 'c'

    # Compare two selectors, or a selector and a triple
    kestrel compare '#id' '.cls'
    kestrel compare 'div.item' 0,1,1

    # Rank a file with one selector per line
    kestrel rank selectors.txt
")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate the specificity of one or more selectors
    Calc {
        /// Selectors to measure, one per argument
        #[arg(value_name = "SELECTOR", required = true)]
        selectors: Vec<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// List the contribution of every component
        #[arg(long)]
        parts: bool,
    },

    /// Compare two selectors or A,B,C triples; prints -1, 0 or 1
    Compare {
        /// Left-hand side
        #[arg(value_name = "A", allow_hyphen_values = true)]
        a: String,

        /// Right-hand side
        #[arg(value_name = "B", allow_hyphen_values = true)]
        b: String,
    },

    /// Rank the selectors in a file from most to least specific
    Rank {
        /// File with one selector per line
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Calc {
            selectors,
            json,
            parts,
        } => run_calc(&selectors, json, parts),
        Command::Compare { a, b } => run_compare(&a, &b),
        Command::Rank { file, json } => run_rank(&file, json),
    }
}

fn run_calc(selectors: &[String], json: bool, parts: bool) -> Result<()> {
    let results = selectors
        .iter()
        .map(|selector| {
            calculate(selector).with_context(|| format!("invalid selector '{selector}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for result in &results {
        print_result(result);
        if parts {
            print_parts(result);
        }
    }
    Ok(())
}

fn run_compare(a: &str, b: &str) -> Result<()> {
    let ordering = compare(input(a), input(b))
        .with_context(|| format!("cannot compare '{a}' with '{b}'"))?;
    println!("{ordering}");
    Ok(())
}

/// A triple written `A,B,C`, otherwise selector text.
fn input(text: &str) -> SpecificityInput<'_> {
    text.parse::<Specificity>()
        .map_or(SpecificityInput::Selector(text), SpecificityInput::Specificity)
}

fn run_rank(path: &Path, json: bool) -> Result<()> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    clear_warnings();
    let (ranked, skipped) = rank_lines(&source);

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else {
        for (index, result) in ranked.iter().enumerate() {
            print!("{:>4} ", format!("{}.", index + 1).dimmed());
            print_result(result);
        }
    }

    if skipped > 0 {
        eprintln!("{}", format!("{skipped} line(s) skipped").yellow());
    }
    Ok(())
}

/// Calculate each non-blank line once and sort the results, most specific
/// first. Lines that fail to parse are warned about and counted.
fn rank_lines(source: &str) -> (Vec<SpecificityResult>, usize) {
    let mut skipped = 0usize;
    let mut ranked: Vec<SpecificityResult> = source
        .lines()
        .map(str::trim)
        .filter(|line| !is_blank(line))
        .filter_map(|line| match calculate(line) {
            Ok(result) => Some(result),
            Err(err) => {
                skipped += 1;
                warn_once("rank", &format!("skipping '{line}': {err}"));
                None
            }
        })
        .collect();
    sort_by_specificity(&mut ranked);
    (ranked, skipped)
}

/// Empty, or nothing but whitespace and comments.
fn is_blank(line: &str) -> bool {
    tokenize(line)
        .iter()
        .all(|t| t.token.is_whitespace() || t.token.is_eof())
}

fn print_result(result: &SpecificityResult) {
    println!("{}  {}", result.specificity.green().bold(), result.selector);
}

fn print_parts(result: &SpecificityResult) {
    for part in &result.parts {
        println!(
            "    {:<8} {:<24} {}",
            part.specificity.to_string().green(),
            part.selector.as_deref().unwrap_or(""),
            part.rule.as_str().dimmed()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_prefers_triples() {
        assert_eq!(
            input("0, 1,2"),
            SpecificityInput::Specificity(Specificity(0, 1, 2))
        );
        assert_eq!(input("div.a"), SpecificityInput::Selector("div.a"));
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("/* header */"));
        assert!(!is_blank("/* note */ .a"));
    }

    #[test]
    fn test_rank_lines_skips_bad_lines() {
        let source = "a\n\n  #b  \n/* only a comment */\nb,\n.c\nd e\n:is(\n.f\n";
        let (ranked, skipped) = rank_lines(source);
        let order: Vec<_> = ranked.iter().map(|r| r.selector.as_str()).collect();
        assert_eq!(order, ["#b", ".c", ".f", "d e", "a"]);
        assert_eq!(skipped, 2);
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["kestrel", "calc", "--parts", "#a", ".b"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Calc { ref selectors, json: false, parts: true } if selectors.len() == 2
        ));

        let cli = Cli::try_parse_from(["kestrel", "compare", "#a", "0,1,0"]).unwrap();
        assert!(matches!(cli.command, Command::Compare { .. }));

        assert!(Cli::try_parse_from(["kestrel", "calc"]).is_err());
    }
}
