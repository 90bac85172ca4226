//! Bounded retry loop shared by the randomised generators.
//!
//! An attempt moves through [`Phase::Allocating`], [`Phase::Building`] and
//! [`Phase::Validating`]; a rejection anywhere lands in
//! [`Phase::Retrying`], which either restarts allocation or ends the run
//! with [`GenerationError::AttemptsExhausted`]. No state survives between
//! attempts other than the random stream and the last mismatch.

use std::num::NonZeroUsize;

use rand::Rng;
use tracing::{debug, info};

use crate::{
    edges::{AdjacencyMatrix, EdgeList},
    error::{AttemptResult, GenerationError, Mismatch, Result},
    graph_type::GraphType,
    oracle,
};

/// One randomised construction scheme driven by [`run`].
pub(crate) trait AttemptStrategy {
    /// Attempt-scoped allocation handed from planning to building.
    type Plan;

    /// Allocates resources for one attempt.
    ///
    /// The outer `Result` aborts the run; the inner one rejects only this
    /// attempt.
    fn plan<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<AttemptResult<Self::Plan>>;

    /// Turns a plan into edges.
    fn build<R: Rng + ?Sized>(&mut self, plan: Self::Plan, rng: &mut R) -> EdgeList;
}

/// What an attempt's edges must satisfy to be accepted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Acceptance {
    pub(crate) graph_type: GraphType,
    pub(crate) vertex_count: usize,
    pub(crate) edge_count: usize,
    /// `None` skips the connectivity check.
    pub(crate) component_count: Option<usize>,
}

impl Acceptance {
    /// Returns the first property `edges` violates, if any.
    ///
    /// # Errors
    /// Returns [`GenerationError::InvalidParameters`] when an edge leaves the
    /// vertex range.
    pub(crate) fn check(&self, edges: &EdgeList) -> Result<Option<Mismatch>> {
        if edges.len() != self.edge_count {
            return Ok(Some(Mismatch::EdgeCountMismatch {
                expected: self.edge_count,
                actual: edges.len(),
            }));
        }
        let matrix =
            AdjacencyMatrix::from_edges(self.vertex_count, edges, self.graph_type.is_directed())?;
        let actual = oracle::classify(&matrix);
        if actual != self.graph_type {
            return Ok(Some(Mismatch::TypeMismatch {
                expected: self.graph_type,
                actual,
            }));
        }
        if let Some(expected) = self.component_count {
            let found = oracle::count_components(&matrix);
            if found != expected {
                return Ok(Some(Mismatch::ComponentCountMismatch {
                    expected,
                    actual: found,
                }));
            }
        }
        Ok(None)
    }
}

/// Accepted result of [`run`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Accepted {
    pub(crate) edges: EdgeList,
    pub(crate) attempts: usize,
}

#[derive(Debug)]
enum Phase<P> {
    Allocating,
    Building(P),
    Validating(EdgeList),
    Retrying(Mismatch),
    Accepted(EdgeList),
}

/// Drives `strategy` until an attempt passes `acceptance` or the budget is
/// spent.
///
/// # Errors
/// Propagates hard failures from [`AttemptStrategy::plan`] immediately and
/// returns [`GenerationError::AttemptsExhausted`] with the last mismatch once
/// `max_attempts` attempts have been rejected.
pub(crate) fn run<S, R>(
    strategy: &mut S,
    acceptance: &Acceptance,
    max_attempts: NonZeroUsize,
    rng: &mut R,
) -> Result<Accepted>
where
    S: AttemptStrategy,
    R: Rng + ?Sized,
{
    let mut attempt = 1;
    let mut phase = Phase::Allocating;
    loop {
        phase = match phase {
            Phase::Allocating => match strategy.plan(rng)? {
                Ok(plan) => Phase::Building(plan),
                Err(mismatch) => Phase::Retrying(mismatch),
            },
            Phase::Building(plan) => Phase::Validating(strategy.build(plan, rng)),
            Phase::Validating(edges) => match acceptance.check(&edges)? {
                None => Phase::Accepted(edges),
                Some(mismatch) => Phase::Retrying(mismatch),
            },
            Phase::Retrying(mismatch) => {
                debug!(attempt, reason = %mismatch, "attempt rejected");
                if attempt >= max_attempts.get() {
                    return Err(GenerationError::AttemptsExhausted {
                        attempts: attempt,
                        last_mismatch: mismatch,
                    });
                }
                attempt += 1;
                Phase::Allocating
            }
            Phase::Accepted(edges) => {
                info!(
                    attempts = attempt,
                    edges = edges.len(),
                    graph_type = %acceptance.graph_type,
                    "graph accepted"
                );
                return Ok(Accepted {
                    edges,
                    attempts: attempt,
                });
            }
        };
    }
}
