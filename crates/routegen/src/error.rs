//! Error types for strict route building.

/// Error from [`RouteNode::build_strict`](crate::RouteNode::build_strict).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RouteError {
    /// A placeholder token survived to the rendered output because no
    /// argument was supplied for it at its own level.
    #[error("unresolved placeholder :{name}")]
    UnresolvedPlaceholder {
        /// Placeholder name, without the `:` marker.
        name: String,
    },
}
