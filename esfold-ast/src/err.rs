use crate::kind::NodeKind;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AstError {
    /// A `type` that names no construct of the grammar. Nothing in the table
    /// can reduce it, so the tree is rejected before any callback runs.
    #[error("AST_ERR => Unsupported node kind: {0}")]
    UnknownKind(String),

    #[error("AST_ERR => Expected {expected}, got: {found}")]
    UnexpectedKind {
        expected: &'static str,
        found: NodeKind,
    },

    #[error("AST_ERR => {kind} is missing field `{field}`")]
    MissingField { kind: NodeKind, field: &'static str },

    #[error("AST_ERR => {kind} has an invalid `{field}` field")]
    InvalidField { kind: NodeKind, field: &'static str },

    #[error("AST_ERR => Expected a node object with a string `type` field")]
    NotANode,
}
