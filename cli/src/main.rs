//! rulefilter CLI — driving adapter for the rulefilter predicates.
//!
//! Subcommands:
//! - `eval <filter> <rules> [--trace]` — print the rules a filter keeps
//! - `check <filter>` — validate a filter config
//! - `namespace <uid>...` — print the namespace of each UID

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rulefilter::{namespace_of, FilterConfig, Rule, RuleRecord};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Filter rule collections by namespace and tags.
#[derive(Parser)]
#[command(name = "rulefilter", version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a filter against a rules file and print the matching UIDs.
    Eval {
        /// Filter config (YAML, or JSON by extension).
        filter: PathBuf,

        /// Rules file: a list of `{uid, tags}` entries (YAML, or JSON by extension).
        rules: PathBuf,

        /// Print the evaluation trace of every rule instead of the matches.
        #[arg(long)]
        trace: bool,
    },

    /// Validate a filter config.
    Check {
        /// Filter config (YAML, or JSON by extension).
        filter: PathBuf,
    },

    /// Print the namespace of each UID.
    Namespace {
        /// Rule UIDs.
        #[arg(required = true)]
        uids: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(io::stderr)
        .init();

    let mut out = io::stdout().lock();
    match cli.command {
        Commands::Eval {
            filter,
            rules,
            trace,
        } => cmd_eval(&filter, &rules, trace, &mut out),
        Commands::Check { filter } => cmd_check(&filter, &mut out),
        Commands::Namespace { uids } => cmd_namespace(&uids, &mut out),
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Commands
// ═══════════════════════════════════════════════════════════════════════════════

const ANONYMOUS: &str = "<anonymous>";

fn cmd_eval(filter: &Path, rules: &Path, trace: bool, out: &mut impl Write) -> Result<()> {
    let predicate = load_filter(filter)?
        .compile()
        .with_context(|| format!("filter \"{}\" is invalid", filter.display()))?;
    let rules = load_rules(rules)?;
    info!(rules = rules.len(), "evaluating filter");

    let mut matched = 0usize;
    for rule in &rules {
        let uid = rule.uid().unwrap_or(ANONYMOUS);
        if trace {
            let result = predicate.evaluate_with_trace(rule);
            writeln!(out, "{uid}")?;
            write!(out, "{result}")?;
        } else if predicate.evaluate(rule) {
            matched += 1;
            writeln!(out, "{uid}")?;
        }
    }
    debug!(matched, "filter evaluated");
    Ok(())
}

fn cmd_check(filter: &Path, out: &mut impl Write) -> Result<()> {
    let predicate = load_filter(filter)?
        .compile()
        .with_context(|| format!("filter \"{}\" is invalid", filter.display()))?;
    writeln!(out, "Filter valid (depth {})", predicate.depth())?;
    Ok(())
}

fn cmd_namespace(uids: &[String], out: &mut impl Write) -> Result<()> {
    for uid in uids {
        let ns = namespace_of(uid).unwrap_or("(none)");
        writeln!(out, "{uid}\t{ns}")?;
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════════
// File loading
// ═══════════════════════════════════════════════════════════════════════════════

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read \"{}\"", path.display()))
}

fn load_filter(path: &Path) -> Result<FilterConfig> {
    let content = read(path)?;
    let config = if is_json(path) {
        FilterConfig::from_json(&content)
    } else {
        // Default to YAML (handles .yaml and .yml)
        FilterConfig::from_yaml(&content)
    };
    config.with_context(|| format!("failed to parse filter \"{}\"", path.display()))
}

fn load_rules(path: &Path) -> Result<Vec<RuleRecord>> {
    let content = read(path)?;
    let context = || format!("failed to parse rules \"{}\"", path.display());
    if is_json(path) {
        serde_json::from_str(&content).with_context(context)
    } else {
        serde_yaml::from_str(&content).with_context(context)
    }
}
