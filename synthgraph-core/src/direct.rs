//! Generation without a component constraint.
//!
//! Edges are drawn over the whole vertex set under the rules of the graph
//! type. Multigraph and pseudograph types reserve the last slots of the
//! budget for a repeated pair or a self-loop, used only when the draws have
//! not already produced one. The oracle still checks the type and edge
//! count, so a directed draw that happens to be symmetric is retried.

use rand::Rng;
use tracing::{Span, field, instrument};

use crate::{
    edges::EdgeList,
    error::{AttemptResult, Result},
    request::GenerationRequest,
    retry::{self, Acceptance, Accepted, AttemptStrategy},
    sampler::EdgeSampler,
};

struct DirectStrategy<'a> {
    request: &'a GenerationRequest,
    vertices: Vec<usize>,
}

impl AttemptStrategy for DirectStrategy<'_> {
    type Plan = ();

    fn plan<R: Rng + ?Sized>(&mut self, _rng: &mut R) -> Result<AttemptResult<()>> {
        Ok(Ok(()))
    }

    fn build<R: Rng + ?Sized>(&mut self, (): (), rng: &mut R) -> EdgeList {
        let budget = self.request.edge_count();
        let mut sampler = EdgeSampler::new(self.request.graph_type(), budget);
        sampler.fill(rng, &self.vertices, budget);
        sampler.into_edges()
    }
}

#[instrument(
    name = "core.generate_direct",
    err,
    skip(request, rng),
    fields(
        graph_type = %request.graph_type(),
        vertices = request.vertex_count(),
        edges = request.edge_count(),
        attempts = field::Empty,
    ),
)]
pub(crate) fn generate_direct<R: Rng + ?Sized>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<Accepted> {
    let acceptance = Acceptance {
        graph_type: request.graph_type(),
        vertex_count: request.vertex_count(),
        edge_count: request.edge_count(),
        component_count: None,
    };
    let mut strategy = DirectStrategy {
        request,
        vertices: (0..request.vertex_count()).collect(),
    };
    let accepted = retry::run(&mut strategy, &acceptance, request.max_attempts(), rng)?;
    Span::current().record("attempts", accepted.attempts);
    Ok(accepted)
}
