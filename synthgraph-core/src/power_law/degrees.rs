//! Zipf-distributed degree sequences.

use rand::Rng;

use crate::error::{GenerationError, Result};

/// Redraws allowed per degree before falling back to the lower bound.
pub const MAX_REDRAWS: usize = 1_000;

/// Degrees sampled for every vertex.
///
/// Directed sequences always have equal out- and in-degree sums once
/// produced by [`DegreeSampler::sample`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DegreeSequence {
    /// One degree per vertex.
    Undirected(Vec<usize>),
    /// Separate out- and in-degrees per vertex.
    Directed {
        /// Arcs leaving each vertex.
        out_degrees: Vec<usize>,
        /// Arcs entering each vertex.
        in_degrees: Vec<usize>,
    },
}

impl DegreeSequence {
    /// Returns the number of vertices covered.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Undirected(degrees) => degrees.len(),
            Self::Directed { out_degrees, .. } => out_degrees.len(),
        }
    }

    /// Returns `true` when the sequence covers no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of edges the sequence can realise at most.
    ///
    /// Undirected stubs pair up, so an odd remainder is dropped.
    #[must_use]
    pub fn edge_capacity(&self) -> usize {
        match self {
            Self::Undirected(degrees) => degrees.iter().sum::<usize>() / 2,
            Self::Directed { out_degrees, .. } => out_degrees.iter().sum(),
        }
    }
}

/// Runs one round of Devroye's rejection method for a Zipf distribution with
/// exponent `gamma > 1`.
///
/// A Pareto draw is inverted into a candidate, which is accepted with the
/// ratio of the Zipf mass to its continuous envelope. The test is written
/// with the reciprocals of the envelope terms, which stay finite for any
/// exponent. Returns `None` when the round rejects or the candidate exceeds
/// `cap`.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "Zipf sampling is defined over real-valued envelopes"
)]
fn zipf_round<R: Rng + ?Sized>(rng: &mut R, gamma: f64, cap: usize) -> Option<usize> {
    let exponent = gamma - 1.0;
    let uniform: f64 = 1.0 - rng.gen_range(0.0_f64..1.0);
    let acceptance: f64 = rng.gen_range(0.0..1.0);
    let candidate = uniform.powf(-1.0 / exponent).floor();
    if !(1.0..=cap as f64).contains(&candidate) {
        return None;
    }
    let inverse_ratio = (1.0 + 1.0 / candidate).powf(-exponent);
    let inverse_envelope = 2.0_f64.powf(-exponent);
    (acceptance * candidate * (1.0 - inverse_ratio) <= 1.0 - inverse_envelope)
        .then_some(candidate as usize)
}

/// Samples power-law degree sequences within fixed bounds.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use synthgraph_core::power_law::DegreeSampler;
///
/// let sampler = DegreeSampler::new(2.5, 1, 9)?;
/// let mut rng = SmallRng::seed_from_u64(3);
/// let degrees = sampler.sample_sequence(10, &mut rng);
/// assert_eq!(degrees.len(), 10);
/// assert!(degrees.iter().all(|degree| (1..=9).contains(degree)));
/// # Ok::<(), synthgraph_core::GenerationError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DegreeSampler {
    gamma: f64,
    k_min: usize,
    k_max: usize,
}

impl DegreeSampler {
    /// Creates a sampler for exponent `gamma` and degrees in
    /// `[k_min, k_max]`.
    ///
    /// # Errors
    /// Returns [`GenerationError::InvalidParameters`] when `gamma` is not a
    /// finite value above one, `k_min` is zero, or `k_min > k_max`.
    pub fn new(gamma: f64, k_min: usize, k_max: usize) -> Result<Self> {
        if !gamma.is_finite() || gamma <= 1.0 {
            return Err(GenerationError::invalid(format!(
                "power-law exponent must be finite and greater than 1, got {gamma}"
            )));
        }
        if k_min == 0 || k_min > k_max {
            return Err(GenerationError::invalid(format!(
                "degree bounds must satisfy 1 <= k_min <= k_max, got [{k_min}, {k_max}]"
            )));
        }
        Ok(Self {
            gamma,
            k_min,
            k_max,
        })
    }

    /// Returns the exponent.
    #[must_use]
    pub const fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Draws one degree.
    ///
    /// Rejected rounds and values outside `[k_min, k_max]` on either side
    /// share one budget of [`MAX_REDRAWS`] draws; once it is spent the degree
    /// settles on `k_min`.
    pub fn sample_degree<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        (0..MAX_REDRAWS)
            .find_map(|_| {
                zipf_round(rng, self.gamma, self.k_max).filter(|degree| *degree >= self.k_min)
            })
            .unwrap_or(self.k_min)
    }

    /// Draws `vertices` independent degrees.
    pub fn sample_sequence<R: Rng + ?Sized>(&self, vertices: usize, rng: &mut R) -> Vec<usize> {
        (0..vertices).map(|_| self.sample_degree(rng)).collect()
    }

    /// Draws the degree sequence for a graph of `vertices` vertices.
    ///
    /// Directed graphs get independent out- and in-sequences which are then
    /// passed through [`balance`].
    pub fn sample<R: Rng + ?Sized>(
        &self,
        vertices: usize,
        directed: bool,
        rng: &mut R,
    ) -> DegreeSequence {
        if !directed {
            return DegreeSequence::Undirected(self.sample_sequence(vertices, rng));
        }
        let mut out_degrees = self.sample_sequence(vertices, rng);
        let mut in_degrees = self.sample_sequence(vertices, rng);
        balance(&mut out_degrees, &mut in_degrees, rng);
        DegreeSequence::Directed {
            out_degrees,
            in_degrees,
        }
    }
}

/// Equalises the sums of two degree sequences.
///
/// While the sums differ, a uniformly chosen entry of the smaller sequence
/// is incremented, so values only grow and the surplus is spread evenly.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use synthgraph_core::power_law::balance;
///
/// let mut out_degrees = vec![3, 1, 1];
/// let mut in_degrees = vec![1, 1, 1];
/// balance(&mut out_degrees, &mut in_degrees, &mut SmallRng::seed_from_u64(0));
/// assert_eq!(in_degrees.iter().sum::<usize>(), 5);
/// assert_eq!(out_degrees, vec![3, 1, 1]);
/// ```
pub fn balance<R: Rng + ?Sized>(out_degrees: &mut [usize], in_degrees: &mut [usize], rng: &mut R) {
    let out_total: usize = out_degrees.iter().sum();
    let in_total: usize = in_degrees.iter().sum();
    let (deficient, missing) = if out_total < in_total {
        (out_degrees, in_total - out_total)
    } else {
        (in_degrees, out_total - in_total)
    };
    if deficient.is_empty() {
        return;
    }
    for _ in 0..missing {
        let index = rng.gen_range(0..deficient.len());
        if let Some(degree) = deficient.get_mut(index) {
            *degree += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::SmallRng};
    use rstest::rstest;

    #[rstest]
    #[case::gamma_one(1.0, 1, 5)]
    #[case::gamma_nan(f64::NAN, 1, 5)]
    #[case::zero_k_min(2.5, 0, 5)]
    #[case::inverted_bounds(2.5, 6, 5)]
    fn rejects_invalid_parameters(#[case] gamma: f64, #[case] k_min: usize, #[case] k_max: usize) {
        assert!(DegreeSampler::new(gamma, k_min, k_max).is_err());
    }

    #[test]
    fn small_degrees_dominate() {
        let sampler = DegreeSampler::new(2.5, 1, 999).expect("parameters are valid");
        let mut rng = SmallRng::seed_from_u64(8);
        let degrees = sampler.sample_sequence(2_000, &mut rng);
        let ones = degrees.iter().filter(|degree| **degree == 1).count();
        // P(k = 1) is roughly 0.75 for gamma = 2.5.
        assert!(ones > 1_200, "only {ones} vertices drew degree 1");
    }

    #[test]
    fn falls_back_to_the_lower_bound() {
        // Degrees of at least 500 under gamma = 6 are vanishingly rare.
        let sampler = DegreeSampler::new(6.0, 500, 600).expect("parameters are valid");
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(sampler.sample_degree(&mut rng), 500);
    }

    #[rstest]
    #[case::steep(1_100.0)]
    #[case::overflowing_envelope(5_000.0)]
    #[case::near_flat(1.000_001)]
    fn extreme_exponents_still_return_a_degree(#[case] gamma: f64) {
        let sampler = DegreeSampler::new(gamma, 1, 5).expect("parameters are valid");
        let mut rng = SmallRng::seed_from_u64(0);
        let degrees = sampler.sample_sequence(64, &mut rng);
        assert!(degrees.iter().all(|degree| (1..=5).contains(degree)));
    }

    #[test]
    fn steep_exponents_concentrate_on_one() {
        let sampler = DegreeSampler::new(1_100.0, 1, 5).expect("parameters are valid");
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(sampler.sample_degree(&mut rng), 1);
    }

    #[test]
    fn draws_above_the_cap_count_against_the_budget() {
        // Nearly every draw under a flat exponent lands far above k_max = 1.
        let sampler = DegreeSampler::new(1.000_001, 1, 1).expect("parameters are valid");
        let mut rng = SmallRng::seed_from_u64(3);
        assert_eq!(sampler.sample_degree(&mut rng), 1);
    }

    #[test]
    fn directed_sequences_are_balanced() {
        let sampler = DegreeSampler::new(2.2, 1, 49).expect("parameters are valid");
        let mut rng = SmallRng::seed_from_u64(12);
        let DegreeSequence::Directed {
            out_degrees,
            in_degrees,
        } = sampler.sample(50, true, &mut rng)
        else {
            panic!("directed sampling must return two sequences");
        };
        assert_eq!(
            out_degrees.iter().sum::<usize>(),
            in_degrees.iter().sum::<usize>()
        );
    }

    #[test]
    fn balance_only_raises_the_deficient_side() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut out_degrees = vec![1, 1, 1, 1];
        let mut in_degrees = vec![4, 2, 1, 1];
        let before = out_degrees.clone();
        balance(&mut out_degrees, &mut in_degrees, &mut rng);
        assert_eq!(in_degrees, vec![4, 2, 1, 1]);
        assert_eq!(out_degrees.iter().sum::<usize>(), 8);
        assert!(out_degrees.iter().zip(&before).all(|(after, was)| after >= was));
    }

    #[test]
    fn edge_capacity_halves_undirected_stubs() {
        assert_eq!(DegreeSequence::Undirected(vec![3, 2, 2]).edge_capacity(), 3);
    }
}
