//! Splitting vertex and edge budgets across components.

use rand::Rng;

use crate::{
    bounds::EdgeBounds,
    error::{AttemptResult, GenerationError, Mismatch, Result},
    request::BalancingStrategy,
};

/// Splits `total` into `parts` shares differing by at most one, larger
/// shares first.
fn even_split(total: usize, parts: usize) -> Vec<usize> {
    let Some(share) = total.checked_div(parts) else {
        return Vec::new();
    };
    let remainder = total % parts;
    (0..parts)
        .map(|index| share + usize::from(index < remainder))
        .collect()
}

/// Splits `total` into `parts` equal shares with the whole remainder on the
/// first share.
fn front_loaded_split(total: usize, parts: usize) -> Vec<usize> {
    let Some(share) = total.checked_div(parts) else {
        return Vec::new();
    };
    let mut shares = vec![share; parts];
    if let Some(first) = shares.first_mut() {
        *first += total % parts;
    }
    shares
}

/// Splits `vertex_count` vertices across `component_count` components.
///
/// `Balanced` is deterministic. The random strategies assign every vertex to
/// a uniformly drawn component and reject the attempt when a component is
/// left empty; `PartiallyBalanced` then sorts the shares ascending.
///
/// # Errors
/// Returns [`Mismatch::EmptyComponent`] for the first component a random
/// split leaves without vertices.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use synthgraph_core::{BalancingStrategy, component};
///
/// let mut rng = SmallRng::seed_from_u64(1);
/// let shares = component::allocate_vertices(7, 3, BalancingStrategy::Balanced, &mut rng)?;
/// assert_eq!(shares, vec![3, 2, 2]);
/// # Ok::<(), synthgraph_core::Mismatch>(())
/// ```
pub fn allocate_vertices<R: Rng + ?Sized>(
    vertex_count: usize,
    component_count: usize,
    strategy: BalancingStrategy,
    rng: &mut R,
) -> AttemptResult<Vec<usize>> {
    if strategy == BalancingStrategy::Balanced {
        return Ok(even_split(vertex_count, component_count));
    }

    let mut shares = vec![0; component_count];
    for _ in 0..vertex_count {
        if let Some(share) = shares.get_mut(rng.gen_range(0..component_count.max(1))) {
            *share += 1;
        }
    }
    if let Some(component) = shares.iter().position(|share| *share == 0) {
        return Err(Mismatch::EmptyComponent { component });
    }
    if strategy == BalancingStrategy::PartiallyBalanced {
        shares.sort_unstable();
    }
    Ok(shares)
}

/// Splits `edge_count` edges across components with the given bounds.
///
/// `Balanced` gives every component `edge_count / components` edges, adds
/// the remainder to the first one, and fails outright when a share violates
/// its component's bounds. The random strategies walk the components in order,
/// drawing each share from its bounds while leaving enough for the minimums
/// still to come; the last component takes the remainder.
///
/// # Errors
/// Returns [`GenerationError::InfeasibleAllocation`] when a balanced share
/// does not fit its component.
///
/// The inner result rejects the attempt with [`Mismatch::InsufficientEdges`]
/// when the minimums alone exceed `edge_count`, or
/// [`Mismatch::TailOutOfBounds`] when the remainder does not fit the last
/// component.
pub fn allocate_edges<R: Rng + ?Sized>(
    edge_count: usize,
    bounds: &[EdgeBounds],
    strategy: BalancingStrategy,
    rng: &mut R,
) -> Result<AttemptResult<Vec<usize>>> {
    if strategy == BalancingStrategy::Balanced {
        let shares = front_loaded_split(edge_count, bounds.len());
        for (component, (allocated, limits)) in shares.iter().zip(bounds).enumerate() {
            if !limits.contains(*allocated) {
                return Err(GenerationError::InfeasibleAllocation {
                    component,
                    allocated: *allocated,
                    min: limits.min(),
                    max: limits.max(),
                });
            }
        }
        return Ok(Ok(shares));
    }

    let required: usize = bounds.iter().map(EdgeBounds::min).sum();
    if required > edge_count {
        return Ok(Err(Mismatch::InsufficientEdges {
            required,
            available: edge_count,
        }));
    }

    let Some((last, leading)) = bounds.split_last() else {
        return Ok(Ok(Vec::new()));
    };
    let mut shares = Vec::with_capacity(bounds.len());
    let mut remaining = edge_count;
    let mut tail_min = required;
    for limits in leading {
        tail_min -= limits.min();
        let ceiling = remaining - tail_min;
        let upper = limits.max().map_or(ceiling, |max| max.min(ceiling));
        let share = rng.gen_range(limits.min()..=upper.max(limits.min()));
        shares.push(share);
        remaining -= share;
    }
    if !last.contains(remaining) {
        return Ok(Err(Mismatch::TailOutOfBounds {
            allocated: remaining,
            min: last.min(),
            max: last.max(),
        }));
    }
    shares.push(remaining);

    if strategy == BalancingStrategy::PartiallyBalanced {
        shares.sort_unstable();
    }
    Ok(Ok(shares))
}
