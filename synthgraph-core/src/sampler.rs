//! Rejection sampling of edges under the rules of a graph type.
//!
//! [`EdgeSampler`] keeps a multiplicity map keyed by the canonical edge, so
//! membership checks stay constant-time, and tracks whether the structural
//! requirements of the type (a repeated pair, a self-loop) have been met.
//! Every generator records its edges through it.

use std::collections::HashMap;

use rand::{Rng, seq::SliceRandom};

use crate::{
    edges::{Edge, EdgeList},
    graph_type::GraphType,
};

/// Accumulates edges for a graph type, enforcing its permissions.
#[derive(Debug)]
pub(crate) struct EdgeSampler {
    graph_type: GraphType,
    edges: EdgeList,
    multiplicity: HashMap<Edge, usize>,
    has_loop: bool,
    has_repeat: bool,
}

impl EdgeSampler {
    pub(crate) fn new(graph_type: GraphType, capacity: usize) -> Self {
        Self {
            graph_type,
            edges: Vec::with_capacity(capacity),
            multiplicity: HashMap::with_capacity(capacity),
            has_loop: false,
            has_repeat: false,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.edges.len()
    }

    pub(crate) const fn has_loop(&self) -> bool {
        self.has_loop
    }

    pub(crate) const fn has_repeat(&self) -> bool {
        self.has_repeat
    }

    pub(crate) fn first(&self) -> Option<Edge> {
        self.edges.first().copied()
    }

    /// Returns `true` when the type permits adding `edge` now.
    fn admits(&self, edge: Edge) -> bool {
        if edge.is_loop() && !self.graph_type.allows_self_loops() {
            return false;
        }
        self.graph_type.allows_multi_edges() || !self.multiplicity.contains_key(&edge)
    }

    /// Records an edge without checking permissions.
    pub(crate) fn push(&mut self, source: usize, target: usize) {
        let edge = Edge::oriented(source, target, self.graph_type.is_directed());
        let count = self.multiplicity.entry(edge).or_insert(0);
        *count += 1;
        self.has_repeat |= *count > 1;
        self.has_loop |= edge.is_loop();
        self.edges.push(edge);
    }

    /// Adds the edge when the type permits it and reports whether it did.
    pub(crate) fn try_push(&mut self, source: usize, target: usize) -> bool {
        let edge = Edge::oriented(source, target, self.graph_type.is_directed());
        if !self.admits(edge) {
            return false;
        }
        self.push(source, target);
        true
    }

    /// Draws pairs from `vertices` until one is accepted.
    ///
    /// Callers guarantee an admissible pair exists; there is no iteration cap.
    pub(crate) fn sample<R: Rng + ?Sized>(&mut self, rng: &mut R, vertices: &[usize]) {
        loop {
            let (Some(&source), Some(&target)) = (vertices.choose(rng), vertices.choose(rng))
            else {
                return;
            };
            if self.try_push(source, target) {
                return;
            }
        }
    }

    /// Number of structural requirements of the type not yet satisfied.
    pub(crate) fn pending(&self) -> usize {
        let loop_pending = self.graph_type.requires_self_loops() && !self.has_loop;
        let repeat_pending = self.graph_type.requires_multi_edges() && !self.has_repeat;
        usize::from(loop_pending) + usize::from(repeat_pending)
    }

    /// Satisfies one outstanding requirement, the self-loop first.
    ///
    /// The loop lands on a uniformly chosen vertex of `vertices`; the repeat
    /// re-appends a uniformly chosen edge already sampled. Returns `false`
    /// when nothing was pending or no edge exists to repeat.
    pub(crate) fn force_requirement<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        vertices: &[usize],
    ) -> bool {
        if self.graph_type.requires_self_loops() && !self.has_loop {
            let Some(&vertex) = vertices.choose(rng) else {
                return false;
            };
            self.push(vertex, vertex);
            return true;
        }
        if self.graph_type.requires_multi_edges() && !self.has_repeat {
            let Some(&edge) = self.edges.choose(rng) else {
                return false;
            };
            self.push(edge.source(), edge.target());
            return true;
        }
        false
    }

    /// Fills the sampler up to `budget` edges over `vertices`.
    ///
    /// Slots are sampled freely while more remain than there are pending
    /// requirements; the final slots force whatever has not occurred
    /// naturally, so the budget is met exactly.
    pub(crate) fn fill<R: Rng + ?Sized>(&mut self, rng: &mut R, vertices: &[usize], budget: usize) {
        while self.len() < budget {
            let remaining = budget - self.len();
            if remaining <= self.pending() && self.force_requirement(rng, vertices) {
                continue;
            }
            self.sample(rng, vertices);
        }
    }

    pub(crate) fn into_edges(self) -> EdgeList {
        self.edges
    }
}
