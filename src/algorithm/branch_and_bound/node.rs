//! # Nodes of the search tree
//!
//! A node is a box of variable bounds, together with a bound on the objective value that any
//! solution within that box can attain. Open nodes are kept in a priority queue that yields the
//! node with the best bound first.
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use num_traits::Float;

/// A subproblem: the original problem with tightened variable bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct Node<F> {
    /// Objective bound in the minimization frame, inherited from the parent relaxation.
    bound: F,
    lower: Vec<F>,
    upper: Vec<F>,
    depth: usize,
}

impl<F: Float> Node<F> {
    /// The root of the tree: all variables in `[0, inf)`.
    ///
    /// # Arguments
    ///
    /// * `nr_variables`: Number of variables in the problem.
    /// * `bound`: Objective value of the root relaxation, in the minimization frame.
    #[must_use]
    pub fn root(nr_variables: usize, bound: F) -> Self {
        Self {
            bound,
            lower: vec![F::zero(); nr_variables],
            upper: vec![F::infinity(); nr_variables],
            depth: 0,
        }
    }

    /// Split this node on a fractional variable.
    ///
    /// # Arguments
    ///
    /// * `variable`: Index of the variable to branch on.
    /// * `value`: Fractional value of that variable in the relaxation of this node.
    /// * `bound`: Objective value of that relaxation, in the minimization frame.
    ///
    /// # Return value
    ///
    /// The child with `x_variable <= floor(value)` and the child with `x_variable >= ceil(value)`,
    /// in that order.
    #[must_use]
    pub fn branch(&self, variable: usize, value: F, bound: F) -> (Self, Self) {
        debug_assert!(variable < self.lower.len());

        let child = || Self {
            bound,
            lower: self.lower.clone(),
            upper: self.upper.clone(),
            depth: self.depth + 1,
        };

        let mut down = child();
        down.upper[variable] = value.floor();
        let mut up = child();
        up.lower[variable] = value.ceil();

        (down, up)
    }

    /// Objective bound in the minimization frame.
    pub fn bound(&self) -> F {
        self.bound
    }

    /// Lower bound of each variable.
    pub fn lower(&self) -> &[F] {
        &self.lower
    }

    /// Upper bound of each variable, `inf` when absent.
    pub fn upper(&self) -> &[F] {
        &self.upper
    }

    /// Number of branchings between the root and this node.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// Open nodes, best bound first.
///
/// Nodes with equal bounds are returned in insertion order.
#[derive(Debug)]
pub struct NodeQueue<F> {
    heap: BinaryHeap<QueuedNode<F>>,
    /// Sequence number handed to the next pushed node.
    next_sequence: usize,
}

impl<F: Float> NodeQueue<F> {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    /// Add an open node.
    pub fn push(&mut self, node: Node<F>) {
        self.heap.push(QueuedNode { node, sequence: self.next_sequence });
        self.next_sequence += 1;
    }

    /// Remove the node with the smallest bound.
    pub fn pop(&mut self) -> Option<Node<F>> {
        self.heap.pop().map(|queued| queued.node)
    }

    /// Number of open nodes.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether no open nodes remain.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<F: Float> Default for NodeQueue<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
struct QueuedNode<F> {
    node: Node<F>,
    sequence: usize,
}

impl<F: Float> Ord for QueuedNode<F> {
    /// Reversed, such that the max-heap yields the smallest bound, and of those the oldest node.
    fn cmp(&self, other: &Self) -> Ordering {
        other.node.bound.partial_cmp(&self.node.bound)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<F: Float> PartialOrd for QueuedNode<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<F: Float> PartialEq for QueuedNode<F> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<F: Float> Eq for QueuedNode<F> {}
