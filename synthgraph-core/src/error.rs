//! Error types for the generation engine.
//!
//! [`GenerationError`] is what callers see. [`Mismatch`] describes why a
//! single randomised attempt was rejected; it is consumed by the retry loop
//! and only surfaces as the last-seen reason inside
//! [`GenerationError::AttemptsExhausted`].

use std::fmt;

use thiserror::Error;

use crate::graph_type::GraphType;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Reason a randomised attempt was rejected.
///
/// Mismatches never abort a request on their own; the retry loop records the
/// most recent one and reports it if every attempt fails.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Mismatch {
    /// Random vertex allocation left at least one component without vertices.
    #[error("component {component} received no vertices")]
    EmptyComponent {
        /// Index of the first empty component.
        component: usize,
    },
    /// The random vertex split needs more edges than were requested.
    #[error("the vertex split needs at least {required} edges but only {available} were requested")]
    InsufficientEdges {
        /// Sum of the per-component minimums.
        required: usize,
        /// Requested edge count.
        available: usize,
    },
    /// The remainder handed to the last component fell outside its bounds.
    #[error("last component received {allocated} edges outside [{min}, {}]", display_max(.max))]
    TailOutOfBounds {
        /// Edges left over for the last component.
        allocated: usize,
        /// Minimum edges the component needs to stay connected.
        min: usize,
        /// Maximum edges the component can hold, if bounded.
        max: Option<usize>,
    },
    /// The constructed graph classified as a different type.
    #[error("expected a {expected} graph but built a {actual}")]
    TypeMismatch {
        /// Requested graph type.
        expected: GraphType,
        /// Type reported by the oracle.
        actual: GraphType,
    },
    /// The constructed graph has the wrong number of connected components.
    #[error("expected {expected} connected components but found {actual}")]
    ComponentCountMismatch {
        /// Requested component count.
        expected: usize,
        /// Component count reported by the oracle.
        actual: usize,
    },
    /// The constructed graph has the wrong number of edges.
    #[error("expected {expected} edges but built {actual}")]
    EdgeCountMismatch {
        /// Requested edge count.
        expected: usize,
        /// Edges actually produced.
        actual: usize,
    },
}

fn display_max(max: &Option<usize>) -> String {
    max.map_or_else(|| "inf".to_owned(), |value| value.to_string())
}

/// Error type produced by every generator in this crate.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GenerationError {
    /// A numeric parameter was structurally invalid.
    #[error("invalid generation parameter: {reason}")]
    InvalidParameters {
        /// Description of the offending parameter.
        reason: String,
    },
    /// The numeric graph type code is not recognised.
    #[error("unknown graph type code {code}; expected one of 0, 1, 20, 21, 30, 31")]
    UnknownGraphType {
        /// The rejected code.
        code: u16,
    },
    /// There are not enough vertices to seed every component.
    #[error("{vertex_count} vertices cannot form {component_count} connected components")]
    InsufficientVertices {
        /// Requested vertex count.
        vertex_count: usize,
        /// Requested component count.
        component_count: usize,
    },
    /// The edge count lies outside what the graph type can hold.
    #[error(
        "a {graph_type} graph with these vertex and component counts needs between {min} and {} edges, but {edge_count} were requested",
        display_max(.max)
    )]
    EdgeCountOutOfRange {
        /// Requested graph type.
        graph_type: GraphType,
        /// Requested edge count.
        edge_count: usize,
        /// Smallest admissible edge count.
        min: usize,
        /// Largest admissible edge count, if bounded.
        max: Option<usize>,
    },
    /// A balanced split assigned a component an edge count it cannot hold.
    #[error(
        "balanced allocation gives component {component} {allocated} edges outside [{min}, {}]; adjust the edge count",
        display_max(.max)
    )]
    InfeasibleAllocation {
        /// Index of the offending component.
        component: usize,
        /// Edges allocated to the component.
        allocated: usize,
        /// Minimum edges the component needs.
        min: usize,
        /// Maximum edges the component can hold, if bounded.
        max: Option<usize>,
    },
    /// Every attempt was rejected.
    #[error(
        "no valid graph after {attempts} attempts (last failure: {last_mismatch}); the parameters are likely near-infeasible"
    )]
    AttemptsExhausted {
        /// Number of attempts made.
        attempts: usize,
        /// Reason the final attempt was rejected.
        last_mismatch: Mismatch,
    },
}

define_error_codes! {
    /// Stable codes describing [`GenerationError`] variants.
    enum GenerationErrorCode for GenerationError {
        /// A numeric parameter was structurally invalid.
        InvalidParameters => InvalidParameters { .. } => "GRAPH_INVALID_PARAMETERS",
        /// The numeric graph type code is not recognised.
        UnknownGraphType => UnknownGraphType { .. } => "GRAPH_UNKNOWN_TYPE",
        /// There are not enough vertices to seed every component.
        InsufficientVertices => InsufficientVertices { .. } => "GRAPH_INSUFFICIENT_VERTICES",
        /// The edge count lies outside what the graph type can hold.
        EdgeCountOutOfRange => EdgeCountOutOfRange { .. } => "GRAPH_EDGE_COUNT_OUT_OF_RANGE",
        /// A balanced split assigned a component an edge count it cannot hold.
        InfeasibleAllocation => InfeasibleAllocation { .. } => "GRAPH_INFEASIBLE_ALLOCATION",
        /// Every attempt was rejected.
        AttemptsExhausted => AttemptsExhausted { .. } => "GRAPH_ATTEMPTS_EXHAUSTED",
    }
}

impl GenerationError {
    /// Returns the last rejection reason when the retry budget was exhausted.
    #[must_use]
    pub const fn mismatch(&self) -> Option<&Mismatch> {
        match self {
            Self::AttemptsExhausted { last_mismatch, .. } => Some(last_mismatch),
            _ => None,
        }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParameters {
            reason: reason.into(),
        }
    }
}

/// Convenient alias for results returned by the engine.
pub type Result<T> = core::result::Result<T, GenerationError>;

/// Outcome of one randomised step that may reject the current attempt.
pub type AttemptResult<T> = core::result::Result<T, Mismatch>;
