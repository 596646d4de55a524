//! Error types for tree construction and solving.

use thiserror::Error;

use crate::tree::NodeId;

/// Errors reported by tree mutations and by [`LayoutTree::run`](crate::LayoutTree::run).
///
/// All of these are caller mistakes. The solver itself never fails on a
/// well-formed tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("Node {0} does not belong to this layout tree")]
    InvalidNode(NodeId),

    #[error("Node {0} cannot be inserted relative to itself")]
    SelfInsertion(NodeId),

    #[error("Node {0} is already inserted in the tree")]
    AlreadyInserted(NodeId),

    #[error("Invalid axis index {0}: expected 0 (horizontal) or 1 (vertical)")]
    InvalidAxis(usize),

    #[error("Link cycle detected below node {0}")]
    Cycle(NodeId),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LayoutError>;
