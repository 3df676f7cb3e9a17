//! Error types for tree mutation.

use thiserror::Error;

use crate::node::NodeId;

pub type Result<T> = std::result::Result<T, DomError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("tree already has a root node")]
    AlreadyRooted,

    #[error("parent {0} does not belong to this tree")]
    InvalidParent(NodeId),

    #[error("node {0} does not belong to this tree")]
    InvalidNode(NodeId),
}
