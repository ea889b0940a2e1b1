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

use std::time::Duration;

/// Statistics collected during one run of a search strategy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchStatistics {
    /// Total nodes popped from the frontier, pruned ones included.
    pub nodes_visited: u64,
    /// Total child nodes created by expansions.
    pub nodes_generated: u64,
    /// Nodes abandoned because their weight exceeded the capacity.
    pub prunings_infeasible: u64,
    /// Nodes abandoned because their bound could not beat the best profit.
    /// Counts both pop-time and push-time rejections.
    pub prunings_bound: u64,
    /// Number of times the best profit strictly increased.
    pub improvements: u64,
    /// The deepest level reached in the tree.
    pub max_depth: u64,
    /// The largest number of nodes held by the frontier at once.
    pub max_frontier_len: u64,
    /// Total time spent in the search.
    pub time_total: Duration,
}

impl SearchStatistics {
    #[inline]
    pub fn on_node_visited(&mut self) {
        self.nodes_visited = self.nodes_visited.saturating_add(1);
    }

    #[inline]
    pub fn on_node_generated(&mut self) {
        self.nodes_generated = self.nodes_generated.saturating_add(1);
    }

    #[inline]
    pub fn on_nodes_generated(&mut self, count: u64) {
        self.nodes_generated = self.nodes_generated.saturating_add(count);
    }

    #[inline]
    pub fn on_pruning_infeasible(&mut self) {
        self.prunings_infeasible = self.prunings_infeasible.saturating_add(1);
    }

    /// Records a pruning event caused by the bound (either at push or at pop time).
    #[inline]
    pub fn on_pruning_bound(&mut self) {
        self.prunings_bound = self.prunings_bound.saturating_add(1);
    }

    #[inline]
    pub fn on_improvement(&mut self) {
        self.improvements = self.improvements.saturating_add(1);
    }

    #[inline]
    pub fn on_depth_update(&mut self, depth: u64) {
        self.max_depth = self.max_depth.max(depth);
    }

    #[inline]
    pub fn on_frontier_len(&mut self, len: usize) {
        self.max_frontier_len = self.max_frontier_len.max(len as u64);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }

    /// Returns the total number of prunings.
    #[inline]
    pub fn prunings(&self) -> u64 {
        self.prunings_infeasible.saturating_add(self.prunings_bound)
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Satchel Search Statistics:")?;
        writeln!(f, "  Nodes visited:        {}", self.nodes_visited)?;
        writeln!(f, "  Nodes generated:      {}", self.nodes_generated)?;
        writeln!(f, "  Max depth reached:    {}", self.max_depth)?;
        writeln!(f, "  Max frontier length:  {}", self.max_frontier_len)?;
        writeln!(f, "  Infeasible prunings:  {}", self.prunings_infeasible)?;
        writeln!(f, "  Bound prunings:       {}", self.prunings_bound)?;
        writeln!(f, "  Improvements:         {}", self.improvements)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_increment() {
        let mut stats = SearchStatistics::default();
        stats.on_node_visited();
        stats.on_node_visited();
        stats.on_node_generated();
        stats.on_pruning_infeasible();
        stats.on_pruning_bound();
        stats.on_pruning_bound();
        stats.on_improvement();

        assert_eq!(stats.nodes_visited, 2);
        assert_eq!(stats.nodes_generated, 1);
        assert_eq!(stats.prunings_infeasible, 1);
        assert_eq!(stats.prunings_bound, 2);
        assert_eq!(stats.prunings(), 3);
        assert_eq!(stats.improvements, 1);
    }

    #[test]
    fn test_maxima_only_grow() {
        let mut stats = SearchStatistics::default();
        stats.on_depth_update(4);
        stats.on_depth_update(2);
        stats.on_frontier_len(10);
        stats.on_frontier_len(3);
        assert_eq!(stats.max_depth, 4);
        assert_eq!(stats.max_frontier_len, 10);
    }

    #[test]
    fn test_counters_saturate() {
        let mut stats = SearchStatistics {
            nodes_visited: u64::MAX,
            ..Default::default()
        };
        stats.on_node_visited();
        assert_eq!(stats.nodes_visited, u64::MAX);
    }

    #[test]
    fn test_display_lists_counters() {
        let stats = SearchStatistics {
            nodes_visited: 27,
            ..Default::default()
        };
        let text = format!("{}", stats);
        assert!(text.starts_with("Satchel Search Statistics:"));
        assert!(text.contains("Nodes visited:        27"));
    }
}
