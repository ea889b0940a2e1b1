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

use crate::{stats::SearchStatistics, strategy::Strategy};

/// Why a search stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The frontier ran empty; the reported profit is the optimum.
    OptimalityProven,
    /// A monitor requested termination (time limit, node limit, etc.).
    /// The string contains information about the reason for abortion.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::OptimalityProven => write!(f, "Optimality Proven"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// Result of one strategy run after termination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<T> {
    strategy: Strategy,
    max_profit: T,
    termination_reason: TerminationReason,
    statistics: SearchStatistics,
}

impl<T> SearchOutcome<T>
where
    T: Copy,
{
    #[inline]
    pub fn optimal(strategy: Strategy, max_profit: T, statistics: SearchStatistics) -> Self {
        Self {
            strategy,
            max_profit,
            termination_reason: TerminationReason::OptimalityProven,
            statistics,
        }
    }

    #[inline]
    pub fn aborted<R>(
        strategy: Strategy,
        max_profit: T,
        reason: R,
        statistics: SearchStatistics,
    ) -> Self
    where
        R: Into<String>,
    {
        Self {
            strategy,
            max_profit,
            termination_reason: TerminationReason::Aborted(reason.into()),
            statistics,
        }
    }

    /// Returns the strategy that produced this outcome.
    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns the best profit found. Optimal unless the search was aborted.
    #[inline]
    pub fn max_profit(&self) -> T {
        self.max_profit
    }

    /// Returns the number of nodes popped from the frontier.
    #[inline]
    pub fn nodes_visited(&self) -> u64 {
        self.statistics.nodes_visited
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    /// Returns the search statistics.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self.termination_reason, TerminationReason::OptimalityProven)
    }

    #[inline]
    pub fn is_aborted(&self) -> bool {
        matches!(self.termination_reason, TerminationReason::Aborted(_))
    }
}

impl<T> std::fmt::Display for SearchOutcome<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] Max Profit: {}, Nodes Visited: {}",
            self.strategy, self.max_profit, self.statistics.nodes_visited
        )?;
        if let TerminationReason::Aborted(reason) = &self.termination_reason {
            write!(f, " (aborted: {})", reason)?;
        }
        Ok(())
    }
}
