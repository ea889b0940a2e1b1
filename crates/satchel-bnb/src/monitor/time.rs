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

use crate::{
    monitor::tree_search_monitor::{PruneReason, SearchCommand, TreeSearchMonitor},
    node::SearchNode,
    stats::SearchStatistics,
    strategy::Strategy,
};
use satchel_model::{model::Model, num::KnapsackNumeric};
use std::marker::PhantomData;
use std::time::{Duration, Instant};

/// A monitor that terminates the search after a specified duration.
///
/// The clock is read only when `nodes_visited & clock_check_mask == 0`
/// to keep the per-node overhead negligible.
#[derive(Debug, Clone)]
pub struct TimeLimitMonitor<T>
where
    T: KnapsackNumeric,
{
    time_limit: Duration,
    start_time: Option<Instant>,
    clock_check_mask: u64,
    _marker: PhantomData<T>,
}

impl<T> TimeLimitMonitor<T>
where
    T: KnapsackNumeric,
{
    /// The default mask checks the clock every 16384 visits.
    pub const DEFAULT_CLOCK_CHECK_MASK: u64 = 0x3FFF;

    /// Creates a new `TimeLimitMonitor` with the default clock check mask.
    pub fn new(time_limit: Duration) -> Self {
        Self {
            time_limit,
            start_time: None,
            clock_check_mask: Self::DEFAULT_CLOCK_CHECK_MASK,
            _marker: PhantomData,
        }
    }

    /// Sets how often the clock is read. Should be a power of two minus one.
    pub fn with_clock_check_mask(mut self, clock_check_mask: u64) -> Self {
        self.clock_check_mask = clock_check_mask;
        self
    }

    #[inline]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }
}

impl<T> TreeSearchMonitor<T> for TimeLimitMonitor<T>
where
    T: KnapsackNumeric,
{
    fn name(&self) -> &str {
        "TimeLimitMonitor"
    }

    fn on_enter_search(
        &mut self,
        _model: &Model<T>,
        _strategy: Strategy,
        _statistics: &SearchStatistics,
    ) {
        self.start_time = Some(Instant::now());
    }

    fn on_exit_search(&mut self, _statistics: &SearchStatistics) {
        self.start_time = None;
    }

    fn search_command(
        &mut self,
        _node: &SearchNode<T>,
        statistics: &SearchStatistics,
    ) -> SearchCommand {
        if (statistics.nodes_visited & self.clock_check_mask) == 0
            && let Some(start) = self.start_time
            && start.elapsed() >= self.time_limit
        {
            return SearchCommand::Terminate(format!(
                "time limit of {:?} exceeded",
                self.time_limit
            ));
        }
        SearchCommand::Continue
    }

    fn on_node_visited(&mut self, _node: &SearchNode<T>, _statistics: &SearchStatistics) {}

    fn on_bound_computed(
        &mut self,
        _node: &SearchNode<T>,
        _bound: f64,
        _statistics: &SearchStatistics,
    ) {
    }

    fn on_prune(
        &mut self,
        _node: &SearchNode<T>,
        _reason: PruneReason,
        _statistics: &SearchStatistics,
    ) {
    }

    fn on_improvement(&mut self, _profit: T, _statistics: &SearchStatistics) {}
}
