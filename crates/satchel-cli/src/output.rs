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

//! Report rendering for the CLI.

use satchel_bnb::{
    result::{SearchOutcome, TerminationReason},
    stats::SearchStatistics,
};
use satchel_model::model::Model;
use serde::Serialize;
use std::fmt::Write;

/// The complete JSON report.
#[derive(Serialize, Debug)]
struct Report {
    instance: InstanceSummary,
    runs: Vec<RunReport>,
}

#[derive(Serialize, Debug)]
struct InstanceSummary {
    num_items: usize,
    capacity: u64,
    total_weight: u64,
    total_value: u64,
    tree_size: String,
}

#[derive(Serialize, Debug)]
struct RunReport {
    strategy: &'static str,
    max_profit: u64,
    nodes_visited: u64,
    optimal: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    aborted_reason: Option<String>,
    tree_coverage_percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    statistics: Option<StatisticsReport>,
}

#[derive(Serialize, Debug)]
struct StatisticsReport {
    nodes_generated: u64,
    prunings_infeasible: u64,
    prunings_bound: u64,
    improvements: u64,
    max_depth: u64,
    max_frontier_len: u64,
    time_total_ms: f64,
}

impl From<&SearchStatistics> for StatisticsReport {
    fn from(stats: &SearchStatistics) -> Self {
        Self {
            nodes_generated: stats.nodes_generated,
            prunings_infeasible: stats.prunings_infeasible,
            prunings_bound: stats.prunings_bound,
            improvements: stats.improvements,
            max_depth: stats.max_depth,
            max_frontier_len: stats.max_frontier_len,
            time_total_ms: stats.time_total.as_secs_f64() * 1_000.0,
        }
    }
}

/// Renders one `[Name] Max Profit: p, Nodes Visited: n` line per outcome,
/// each optionally followed by its statistics table.
pub fn render_text(outcomes: &[SearchOutcome<u64>], with_stats: bool) -> String {
    let mut out = String::new();
    for outcome in outcomes {
        // Writing into a `String` cannot fail.
        let _ = writeln!(out, "{}", outcome);
        if with_stats {
            let _ = write!(out, "{}", outcome.statistics());
        }
    }
    out
}

/// Renders the pretty-printed JSON report with a trailing newline.
pub fn render_json(
    model: &Model<u64>,
    outcomes: &[SearchOutcome<u64>],
    with_stats: bool,
) -> serde_json::Result<String> {
    let tree_size = model.tree_size();
    let report = Report {
        instance: InstanceSummary {
            num_items: model.num_items(),
            capacity: model.capacity(),
            total_weight: model.total_weight(),
            total_value: model.total_value(),
            tree_size: tree_size.to_string(),
        },
        runs: outcomes
            .iter()
            .map(|outcome| RunReport {
                strategy: outcome.strategy().name(),
                max_profit: outcome.max_profit(),
                nodes_visited: outcome.nodes_visited(),
                optimal: outcome.is_optimal(),
                aborted_reason: match outcome.termination_reason() {
                    TerminationReason::Aborted(reason) => Some(reason.clone()),
                    TerminationReason::OptimalityProven => None,
                },
                tree_coverage_percent: tree_size.coverage(outcome.nodes_visited()),
                statistics: with_stats.then(|| outcome.statistics().into()),
            })
            .collect(),
    };

    let mut json = serde_json::to_string_pretty(&report)?;
    json.push('\n');
    Ok(json)
}
