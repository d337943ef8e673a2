use thiserror::Error;

/// Errors raised while building graphs or calling operations with a narrower
/// precondition than the general query contract.
///
/// Queries on absent nodes never produce an error; they answer with an
/// empty or zero result instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge endpoint is not part of the declared node set.
    #[error("edge {from} -> {to} references undeclared node {node}")]
    UndeclaredNode {
        node: String,
        from: String,
        to: String,
    },

    /// The node was expected to have degree exactly one.
    #[error("node {node} is not a leaf (degree {degree})")]
    NotALeaf { node: String, degree: usize },

    /// A subset operation was given no node of the graph.
    #[error("subset contains no node of the graph")]
    EmptySubset,

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl GraphError {
    pub(crate) fn undeclared<N: std::fmt::Debug>(node: &N, from: &N, to: &N) -> Self {
        Self::UndeclaredNode {
            node: format!("{node:?}"),
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
