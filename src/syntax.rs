//! External syntax tree model.
//!
//! This is the input side of the converter: the upstream parser (or an adapter
//! around it) builds a [`SyntaxTree`] with [`SyntaxTreeBuilder`], and the
//! converter walks it through copyable [`SyntaxNode`] handles. Semantic facts
//! are not stored here; they come from a [`crate::binding::BindingResolver`]
//! keyed by [`NodeId`].

pub mod kind;
pub mod operators;
pub mod tree;

pub use kind::{Flag, Modifiers, Role, SyntaxKind};
pub use operators::{
    AssignmentOperator, InfixOperator, Operator, PostfixOperator, PrefixOperator, UnknownOperator,
};
pub use tree::{
    LineTable, NodeBuilder, NodeId, SyntaxNode, SyntaxTree, SyntaxTreeBuilder, TreeError,
};
