//! # Counters describing a branch and bound run
use std::fmt;

use enum_map::{Enum, EnumMap};

/// What happened to a node taken from the queue.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum NodeOutcome {
    /// Discarded without solving, its bound can't beat the incumbent.
    Pruned,
    /// The relaxation was infeasible, unbounded or ran out of pivots.
    NotOptimal,
    /// The relaxation was solved but can't beat the incumbent.
    Dominated,
    /// The relaxation was integral and became the new incumbent.
    Incumbent,
    /// The relaxation was fractional and the node was split.
    Branched,
}

/// Statistics collected during a branch and bound run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    outcomes: EnumMap<NodeOutcome, usize>,
    nodes_explored: usize,
    max_depth: usize,
}

impl SearchStatistics {
    /// Record that a node's relaxation was solved.
    pub fn on_node_explored(&mut self, depth: usize) {
        self.nodes_explored += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    /// Record what happened to a node taken from the queue.
    pub fn record(&mut self, outcome: NodeOutcome) {
        self.outcomes[outcome] += 1;
    }

    /// Number of nodes with an outcome.
    pub fn count(&self, outcome: NodeOutcome) -> usize {
        self.outcomes[outcome]
    }

    /// Number of relaxations solved in the tree, excluding the root relaxation.
    pub fn nodes_explored(&self) -> usize {
        self.nodes_explored
    }

    /// Depth of the deepest explored node.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Branch and bound statistics:")?;
        writeln!(f, "  Nodes explored:     {}", self.nodes_explored)?;
        writeln!(f, "  Max depth reached:  {}", self.max_depth)?;
        for (outcome, count) in &self.outcomes {
            writeln!(f, "  {:<20}{count}", format!("{outcome:?}:"))?;
        }
        Ok(())
    }
}
