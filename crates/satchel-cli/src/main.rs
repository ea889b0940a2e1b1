// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Satchel CLI: runs the knapsack search strategies on one instance and
//! reports the best profit and visit count of each.
//!
//! Without arguments every strategy runs on a small built-in instance.

mod output;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use satchel_bnb::{
    monitor::{
        composite::CompositeTreeSearchMonitor, log::LogMonitor, node_limit::NodeLimitMonitor,
        time::TimeLimitMonitor,
    },
    strategy::{ParseStrategyError, Strategy, solve_with_monitor},
};
use satchel_model::{item::Item, loading::ProblemLoader, model::Model};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Capacity of the built-in instance.
const SAMPLE_CAPACITY: u64 = 15;

/// `(weight, value)` pairs of the built-in instance.
const SAMPLE_ITEMS: [(u64, u64); 5] = [(12, 4), (2, 2), (1, 2), (1, 1), (4, 10)];

/// Compare branch-and-bound strategies on a 0/1 knapsack instance.
#[derive(Parser, Debug)]
#[command(name = "satchel")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Instance file: "n capacity" followed by n "weight value" pairs.
    /// Runs the built-in sample when omitted.
    #[arg(long, short)]
    instance: Option<PathBuf>,

    /// Strategy to run: all, dfs, bfs or best-first
    #[arg(long, short, default_value = "all")]
    strategy: StrategySelection,

    /// Abort each run after visiting this many nodes
    #[arg(long)]
    node_limit: Option<u64>,

    /// Abort each run after this many milliseconds
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// Log search progress once per second
    #[arg(long)]
    progress: bool,

    /// Print detailed search statistics per run
    #[arg(long)]
    stats: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Enable verbose debug logging
    #[arg(long, short, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(long, short)]
    quiet: bool,
}

/// Either every strategy or a single one parsed by `Strategy::from_str`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StrategySelection {
    All,
    Only(Strategy),
}

impl StrategySelection {
    fn strategies(&self) -> &[Strategy] {
        match self {
            StrategySelection::All => &Strategy::ALL,
            StrategySelection::Only(strategy) => std::slice::from_ref(strategy),
        }
    }
}

impl FromStr for StrategySelection {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(StrategySelection::All)
        } else {
            s.parse().map(StrategySelection::Only)
        }
    }
}

/// Output format options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Default)]
enum OutputFormat {
    /// One report line per strategy
    #[default]
    Text,
    /// Machine-readable JSON report
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else if cli.quiet {
        tracing::Level::WARN
    } else {
        tracing::Level::INFO
    };

    // Logs go to stderr; stdout carries the report.
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let model = load_model(cli.instance.as_deref())?;
    tracing::info!(
        items = model.num_items(),
        capacity = model.capacity(),
        tree_size = %model.tree_size(),
        "instance loaded"
    );

    let outcomes: Vec<_> = cli
        .strategy
        .strategies()
        .iter()
        .map(|&strategy| {
            let mut monitor = build_monitor(cli);
            solve_with_monitor(strategy, &model, &mut monitor)
        })
        .collect();

    for outcome in outcomes.iter().filter(|o| o.is_aborted()) {
        tracing::warn!(
            strategy = outcome.strategy().name(),
            reason = %outcome.termination_reason(),
            "search stopped before proving optimality"
        );
    }

    let rendered = match cli.format {
        OutputFormat::Text => output::render_text(&outcomes, cli.stats),
        OutputFormat::Json => output::render_json(&model, &outcomes, cli.stats)
            .context("failed to serialize the report")?,
    };
    print!("{}", rendered);
    Ok(())
}

fn load_model(path: Option<&Path>) -> Result<Model<u64>> {
    match path {
        Some(path) => ProblemLoader::<u64>::new()
            .from_path(path)
            .with_context(|| format!("failed to load instance from '{}'", path.display())),
        None => Ok(sample_model()),
    }
}

fn sample_model() -> Model<u64> {
    Model::from_items(SAMPLE_CAPACITY, SAMPLE_ITEMS.into_iter().map(Item::from))
}

/// Stop conditions go first so they short-circuit before logging.
fn build_monitor(cli: &Cli) -> CompositeTreeSearchMonitor<'static, u64> {
    let mut monitor = CompositeTreeSearchMonitor::with_capacity(3);
    if let Some(limit) = cli.node_limit {
        monitor.add_monitor(NodeLimitMonitor::<u64>::new(limit));
    }
    if let Some(ms) = cli.time_limit_ms {
        monitor.add_monitor(TimeLimitMonitor::<u64>::new(Duration::from_millis(ms)));
    }
    if cli.progress {
        monitor.add_monitor(LogMonitor::<u64>::default());
    }
    monitor
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_run_every_strategy_on_the_sample() {
        let cli = Cli::try_parse_from(["satchel"]).unwrap();
        assert!(cli.instance.is_none());
        assert_eq!(cli.strategy, StrategySelection::All);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.strategy.strategies(), &Strategy::ALL);

        let model = load_model(None).unwrap();
        assert_eq!(model.capacity(), 15);
        assert_eq!(model.num_items(), 5);
    }

    #[test]
    fn test_parses_limits_and_strategy() {
        let cli = Cli::try_parse_from([
            "satchel",
            "--strategy",
            "best-first",
            "--node-limit",
            "100",
            "--time-limit-ms",
            "250",
            "--format",
            "json",
            "--stats",
        ])
        .unwrap();
        assert_eq!(
            cli.strategy,
            StrategySelection::Only(Strategy::BestFirst)
        );
        assert_eq!(cli.strategy.strategies(), &[Strategy::BestFirst]);
        assert_eq!(cli.node_limit, Some(100));
        assert_eq!(cli.time_limit_ms, Some(250));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.stats);
        assert_eq!(build_monitor(&cli).len(), 2);
    }

    #[test]
    fn test_strategy_accepts_aliases_and_rejects_unknown() {
        let cli = Cli::try_parse_from(["satchel", "-s", "Depth-First"]).unwrap();
        assert_eq!(cli.strategy.strategies(), &[Strategy::DepthFirst]);
        let cli = Cli::try_parse_from(["satchel", "--strategy", "ALL"]).unwrap();
        assert_eq!(cli.strategy, StrategySelection::All);

        let err = Cli::try_parse_from(["satchel", "--strategy", "a-star"]).unwrap_err();
        assert!(err.to_string().contains("unknown search strategy 'a-star'"));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["satchel", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_missing_instance_reports_path() {
        let err = load_model(Some(Path::new("/definitely/not/here.txt"))).unwrap_err();
        assert!(format!("{:#}", err).contains("/definitely/not/here.txt"));
    }

    #[test]
    fn test_node_limit_aborts_every_run() {
        let cli = Cli::try_parse_from(["satchel", "--node-limit", "2"]).unwrap();
        let model = sample_model();
        for &strategy in cli.strategy.strategies() {
            let outcome = solve_with_monitor(strategy, &model, &mut build_monitor(&cli));
            assert!(outcome.is_aborted());
            assert_eq!(outcome.nodes_visited(), 2);
        }
    }
}
