//! Arena-backed external syntax tree.
//!
//! Nodes are stored flat in a `Vec` and addressed by [`NodeId`]; parent links
//! and root resolution are precomputed when the tree is finished, so neither
//! construction nor position lookups recurse over tree depth.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::kind::{Flag, Modifiers, Role, SyntaxKind};
use super::operators::{
    AssignmentOperator, InfixOperator, Operator, PostfixOperator, PrefixOperator,
};

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Index of a node inside its [`SyntaxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: SyntaxKind,
    start: usize,
    length: usize,
    parent: Option<NodeId>,
    children: Vec<(Role, NodeId)>,
    token: Option<String>,
    operator: Option<Operator>,
    modifiers: Modifiers,
    flags: u8,
    extra_dimensions: u32,
}

impl NodeData {
    fn new(kind: SyntaxKind, start: usize, length: usize) -> Self {
        Self {
            kind,
            start,
            length,
            parent: None,
            children: Vec::new(),
            token: None,
            operator: None,
            modifiers: Modifiers::NONE,
            flags: 0,
            extra_dimensions: 0,
        }
    }
}

/// A finished, read-only external syntax tree.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    nodes: Vec<NodeData>,
    root_of: Vec<NodeId>,
    comments: Vec<NodeId>,
    lines: Option<LineTable>,
}

/// Start offsets of every line of a unit's raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTable {
    starts: Vec<usize>,
    source_len: usize,
}

impl LineTable {
    pub fn from_source(source: &str) -> Self {
        let mut starts = vec![0];
        starts.extend(
            source
                .char_indices()
                .filter(|&(_, ch)| ch == '\n')
                .map(|(idx, _)| idx + 1),
        );
        Self {
            starts,
            source_len: source.len(),
        }
    }

    /// 1-based line containing `offset`, if the offset lies inside the text.
    pub fn line_of(&self, offset: usize) -> Option<u32> {
        if offset > self.source_len {
            return None;
        }
        let line = self.starts.partition_point(|&start| start <= offset);
        u32::try_from(line).ok()
    }
}

/// A tree that could not be finished.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("node {parent:?} refers to child {child:?}, which this builder never produced")]
    UnknownChild { parent: NodeId, child: NodeId },

    #[error("node {child:?} is attached to both {first:?} and {second:?}")]
    AttachedTwice {
        child: NodeId,
        first: NodeId,
        second: NodeId,
    },

    #[error("comment {0:?} was never produced by this builder")]
    UnknownComment(NodeId),

    #[error("a tree holds at most {} nodes", u32::MAX)]
    TooManyNodes,
}

impl SyntaxTree {
    /// Handle for `id`, or `None` if the id does not belong to this tree.
    pub fn get(&self, id: NodeId) -> Option<SyntaxNode<'_>> {
        (id.index() < self.nodes.len()).then_some(SyntaxNode { tree: self, id })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every comment the parser saw, attached or not, in registration order.
    pub fn comments(&self) -> impl Iterator<Item = SyntaxNode<'_>> + '_ {
        self.comments.iter().map(move |&id| SyntaxNode { tree: self, id })
    }

    /// Line table of the unit's raw text, when the tree was built with one.
    pub fn lines(&self) -> Option<&LineTable> {
        self.lines.as_ref()
    }

    fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }
}

/// Copyable handle to one node of a [`SyntaxTree`].
#[derive(Clone, Copy)]
pub struct SyntaxNode<'t> {
    tree: &'t SyntaxTree,
    id: NodeId,
}

impl<'t> SyntaxNode<'t> {
    pub fn id(self) -> NodeId {
        self.id
    }

    pub fn tree(self) -> &'t SyntaxTree {
        self.tree
    }

    pub fn kind(self) -> SyntaxKind {
        self.tree.data(self.id).kind
    }

    pub fn start(self) -> usize {
        self.tree.data(self.id).start
    }

    pub fn length(self) -> usize {
        self.tree.data(self.id).length
    }

    pub fn parent(self) -> Option<SyntaxNode<'t>> {
        self.tree.data(self.id).parent.map(|id| self.with_id(id))
    }

    /// Topmost ancestor of this node (the node itself when detached).
    pub fn root(self) -> SyntaxNode<'t> {
        self.with_id(self.tree.root_of[self.id.index()])
    }

    pub fn token(self) -> Option<&'t str> {
        self.tree.data(self.id).token.as_deref()
    }

    pub fn operator(self) -> Option<Operator> {
        self.tree.data(self.id).operator
    }

    pub fn infix_operator(self) -> Option<InfixOperator> {
        match self.operator()? {
            Operator::Infix(op) => Some(op),
            _ => None,
        }
    }

    pub fn prefix_operator(self) -> Option<PrefixOperator> {
        match self.operator()? {
            Operator::Prefix(op) => Some(op),
            _ => None,
        }
    }

    pub fn postfix_operator(self) -> Option<PostfixOperator> {
        match self.operator()? {
            Operator::Postfix(op) => Some(op),
            _ => None,
        }
    }

    pub fn assignment_operator(self) -> Option<AssignmentOperator> {
        match self.operator()? {
            Operator::Assignment(op) => Some(op),
            _ => None,
        }
    }

    pub fn modifiers(self) -> Modifiers {
        self.tree.data(self.id).modifiers
    }

    pub fn has_flag(self, flag: Flag) -> bool {
        self.tree.data(self.id).flags & flag.bit() != 0
    }

    pub fn extra_dimensions(self) -> u32 {
        self.tree.data(self.id).extra_dimensions
    }

    /// First child in `role`.
    pub fn child(self, role: Role) -> Option<SyntaxNode<'t>> {
        self.children(role).next()
    }

    /// All children in `role`, in source order.
    pub fn children(self, role: Role) -> impl Iterator<Item = SyntaxNode<'t>> + 't {
        let tree = self.tree;
        tree.data(self.id)
            .children
            .iter()
            .filter(move |(r, _)| *r == role)
            .map(move |&(_, id)| SyntaxNode { tree, id })
    }

    fn with_id(self, id: NodeId) -> SyntaxNode<'t> {
        SyntaxNode {
            tree: self.tree,
            id,
        }
    }
}

impl fmt::Debug for SyntaxNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}#{}@{}..{}",
            self.kind(),
            self.id.0,
            self.start(),
            self.start() + self.length()
        )
    }
}

impl PartialEq for SyntaxNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for SyntaxNode<'_> {}

// ============================================================================
// BUILDER
// ============================================================================

/// Bottom-up builder for a [`SyntaxTree`].
///
/// Children are built before their parents; attaching a child records the
/// parent link. Misuse (a child id this builder never returned, a child
/// attached twice) is remembered and reported by [`finish`](Self::finish).
#[derive(Debug, Default)]
pub struct SyntaxTreeBuilder {
    nodes: Vec<NodeData>,
    comments: Vec<NodeId>,
    lines: Option<LineTable>,
    error: Option<TreeError>,
}

impl SyntaxTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder whose line table is derived from `source`.
    pub fn with_source(source: &str) -> Self {
        Self {
            lines: Some(LineTable::from_source(source)),
            ..Self::default()
        }
    }

    /// Starts a node of `kind` covering `start..start + length`.
    pub fn node(&mut self, kind: SyntaxKind, start: usize, length: usize) -> NodeBuilder<'_> {
        NodeBuilder {
            builder: self,
            data: NodeData::new(kind, start, length),
        }
    }

    /// Registers `id` in the unit's comment table.
    pub fn comment(&mut self, id: NodeId) -> &mut Self {
        self.comments.push(id);
        self
    }

    /// Freezes the tree, or reports the first misuse seen while building.
    pub fn finish(self) -> Result<SyntaxTree, TreeError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        if let Some(&comment) = self.comments.iter().find(|id| id.index() >= self.nodes.len()) {
            return Err(TreeError::UnknownComment(comment));
        }
        let root_of = resolve_roots(&self.nodes);
        Ok(SyntaxTree {
            nodes: self.nodes,
            root_of,
            comments: self.comments,
            lines: self.lines,
        })
    }

    fn record(&mut self, error: TreeError) {
        self.error.get_or_insert(error);
    }
}

/// Fluent construction of a single node.
pub struct NodeBuilder<'b> {
    builder: &'b mut SyntaxTreeBuilder,
    data: NodeData,
}

impl NodeBuilder<'_> {
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.data.token = Some(token.into());
        self
    }

    pub fn operator(mut self, operator: impl Into<Operator>) -> Self {
        self.data.operator = Some(operator.into());
        self
    }

    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.data.modifiers = modifiers;
        self
    }

    pub fn flag(mut self, flag: Flag) -> Self {
        self.data.flags |= flag.bit();
        self
    }

    pub fn extra_dimensions(mut self, count: u32) -> Self {
        self.data.extra_dimensions = count;
        self
    }

    pub fn child(mut self, role: Role, id: NodeId) -> Self {
        self.data.children.push((role, id));
        self
    }

    pub fn children(mut self, role: Role, ids: impl IntoIterator<Item = NodeId>) -> Self {
        self.data.children.extend(ids.into_iter().map(|id| (role, id)));
        self
    }

    /// Adds the node and returns its id. An id already handed out by this
    /// builder is the only valid child; anything else fails [`finish`].
    ///
    /// [`finish`]: SyntaxTreeBuilder::finish
    pub fn build(self) -> NodeId {
        let Self { builder, data } = self;
        let Ok(index) = u32::try_from(builder.nodes.len()) else {
            builder.record(TreeError::TooManyNodes);
            return NodeId(u32::MAX);
        };
        let id = NodeId(index);
        for &(_, child) in &data.children {
            let Some(slot) = builder.nodes.get_mut(child.index()) else {
                builder.record(TreeError::UnknownChild { parent: id, child });
                continue;
            };
            match slot.parent {
                Some(first) => builder.record(TreeError::AttachedTwice {
                    child,
                    first,
                    second: id,
                }),
                None => slot.parent = Some(id),
            }
        }
        builder.nodes.push(data);
        id
    }
}

/// Root of every node, computed by walking parent chains with path
/// compression so each node is visited a bounded number of times.
fn resolve_roots(nodes: &[NodeData]) -> Vec<NodeId> {
    let mut root_of: Vec<Option<NodeId>> = vec![None; nodes.len()];
    let mut path = Vec::new();
    for index in 0..nodes.len() {
        let mut current = NodeId(index as u32);
        let root = loop {
            if let Some(root) = root_of[current.index()] {
                break root;
            }
            path.push(current);
            match nodes[current.index()].parent {
                Some(parent) => current = parent,
                None => break current,
            }
        };
        for id in path.drain(..) {
            root_of[id.index()] = Some(root);
        }
    }
    root_of
        .into_iter()
        .enumerate()
        .map(|(index, root)| root.unwrap_or(NodeId(index as u32)))
        .collect()
}
