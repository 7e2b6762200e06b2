//! Tree error types.

use intent_core::NodeId;
use thiserror::Error;

/// Errors that can occur while editing or copying a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// A node type has no way to produce a copy of this instance.
    ///
    /// This is a wiring defect in the node catalog, not bad input.
    #[error("Cannot copy {kind} node '{name}': {reason}")]
    CloneConstruction {
        kind: String,
        name: String,
        reason: String,
    },

    /// The child already has a parent; detach it first or use `move_to`.
    #[error("Node {child} is already owned by {owner}")]
    AlreadyOwned { child: NodeId, owner: NodeId },

    /// A node cannot be inserted into its own collection.
    #[error("Node {0} cannot own itself")]
    SelfOwnership(NodeId),

    /// The child is not in the collection.
    #[error("Node {0} not found in collection")]
    ChildNotFound(NodeId),

    /// Field name not in the closed field enumeration.
    #[error("Unknown field: {0}")]
    UnknownField(String),
}

impl TreeError {
    pub fn clone_construction(
        kind: impl Into<String>,
        name: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::CloneConstruction {
            kind: kind.into(),
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
