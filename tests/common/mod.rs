//! # treebridge test fixtures
//!
//! Small builders for external trees and their resolution tables. Offsets are
//! handed out sequentially unless a test places a node explicitly.

#![allow(dead_code)]

use treebridge::ast::{Spanned, TreeNode};
use treebridge::binding::{ConstantValue, ElementKind, ElementRef, ResolutionTable, TypeRef};
use treebridge::syntax::{
    InfixOperator, NodeId, Role, SyntaxKind, SyntaxTree, SyntaxTreeBuilder,
};
use treebridge::{ConvertError, Environment, TreeConverter};

/// An external tree under construction plus the facts resolved for it.
pub struct Fixture {
    pub builder: SyntaxTreeBuilder,
    pub table: ResolutionTable,
    offset: usize,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            builder: SyntaxTreeBuilder::new(),
            table: ResolutionTable::new(),
            offset: 0,
        }
    }

    pub fn with_source(source: &str) -> Self {
        Self {
            builder: SyntaxTreeBuilder::with_source(source),
            table: ResolutionTable::new(),
            offset: 0,
        }
    }

    /// Next free offset; each call claims `length` characters.
    pub fn claim(&mut self, length: usize) -> usize {
        let start = self.offset;
        self.offset += length;
        start
    }

    pub fn name(&mut self, identifier: &str) -> NodeId {
        let start = self.claim(identifier.len());
        self.builder
            .node(SyntaxKind::SimpleName, start, identifier.len())
            .token(identifier)
            .build()
    }

    /// A name resolved to a local variable of type `int`.
    pub fn int_var(&mut self, identifier: &str) -> NodeId {
        let id = self.name(identifier);
        self.table
            .set_type(id, TypeRef::primitive("int"))
            .set_element(id, ElementRef::new(ElementKind::LocalVariable, identifier));
        id
    }

    pub fn int(&mut self, value: i32) -> NodeId {
        let token = value.to_string();
        let start = self.claim(token.len());
        let id = self
            .builder
            .node(SyntaxKind::NumberLiteral, start, token.len())
            .token(token)
            .build();
        self.table
            .set_type(id, TypeRef::primitive("int"))
            .set_constant(id, ConstantValue::Int(value));
        id
    }

    pub fn string(&mut self, token: &str) -> NodeId {
        let start = self.claim(token.len());
        let id = self
            .builder
            .node(SyntaxKind::StringLiteral, start, token.len())
            .token(token)
            .build();
        self.table.set_type(id, TypeRef::declared("java.lang.String"));
        id
    }

    pub fn infix(&mut self, operator: InfixOperator, left: NodeId, right: NodeId) -> NodeId {
        self.infix_extended(operator, left, right, &[])
    }

    pub fn infix_extended(
        &mut self,
        operator: InfixOperator,
        left: NodeId,
        right: NodeId,
        extended: &[NodeId],
    ) -> NodeId {
        let start = self.claim(1);
        let id = self
            .builder
            .node(SyntaxKind::InfixExpression, start, 1)
            .operator(operator)
            .child(Role::LeftOperand, left)
            .child(Role::RightOperand, right)
            .children(Role::ExtendedOperand, extended.iter().copied())
            .build();
        self.table.set_type(id, TypeRef::primitive("int"));
        id
    }

    /// A type node of `kind` resolved to `ty`.
    pub fn type_node(&mut self, kind: SyntaxKind, ty: TypeRef) -> NodeId {
        let length = ty.name().len();
        let start = self.claim(length);
        let id = self.builder.node(kind, start, length).build();
        self.table.set_type(id, ty);
        id
    }

    pub fn simple_type(&mut self, name: &str) -> NodeId {
        self.type_node(SyntaxKind::SimpleType, TypeRef::declared(name))
    }

    pub fn primitive_type(&mut self, name: &str) -> NodeId {
        self.type_node(SyntaxKind::PrimitiveType, TypeRef::primitive(name))
    }

    /// `{ statements }`
    pub fn block(&mut self, statements: &[NodeId]) -> NodeId {
        let start = self.claim(2);
        self.builder
            .node(SyntaxKind::Block, start, 2)
            .children(Role::Statement, statements.iter().copied())
            .build()
    }

    pub fn expression_statement(&mut self, expression: NodeId) -> NodeId {
        let start = self.claim(1);
        self.builder
            .node(SyntaxKind::ExpressionStatement, start, 1)
            .child(Role::Expression, expression)
            .build()
    }

    pub fn finish(self) -> (SyntaxTree, ResolutionTable) {
        (self.builder.finish().expect("fixture tree is well formed"), self.table)
    }
}

/// Converts `id` of `tree` with a default environment over `table`.
pub fn convert(
    tree: &SyntaxTree,
    table: &ResolutionTable,
    id: NodeId,
) -> Result<Spanned<TreeNode>, ConvertError> {
    let env = Environment::new(table);
    let converted = TreeConverter::new(&env).convert(tree.get(id))?;
    Ok(converted.expect("a present node converts to a present result"))
}

/// Finishes the fixture and converts `id`.
pub fn convert_fixture(fixture: Fixture, id: NodeId) -> Result<Spanned<TreeNode>, ConvertError> {
    let (tree, table) = fixture.finish();
    convert(&tree, &table, id)
}
