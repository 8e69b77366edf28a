use serde::{Deserialize, Serialize};

use super::decl::{CatchClause, SingleVariableDeclaration, VariableDeclarationFragment};
use super::expr::{Annotation, SimpleName};
use super::{Decl, Expr, Spanned, Stmt, TypeNode};
use crate::binding::ElementRef;
use crate::syntax::Modifiers;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    Assert {
        expression: Expr,
        message: Option<Expr>,
    },
    Block(Block),
    Break {
        label: Option<Spanned<SimpleName>>,
    },
    ConstructorInvocation {
        constructor: Option<ElementRef>,
        arguments: Vec<Expr>,
    },
    Continue {
        label: Option<Spanned<SimpleName>>,
    },
    Do {
        body: Box<Stmt>,
        expression: Expr,
    },
    Empty,
    EnhancedFor {
        parameter: Spanned<SingleVariableDeclaration>,
        expression: Expr,
        body: Box<Stmt>,
    },
    Expression {
        expression: Expr,
    },
    For {
        initializers: Vec<Expr>,
        expression: Option<Expr>,
        updaters: Vec<Expr>,
        body: Box<Stmt>,
    },
    If {
        expression: Expr,
        then_statement: Box<Stmt>,
        else_statement: Option<Box<Stmt>>,
    },
    Labeled {
        label: Spanned<SimpleName>,
        body: Box<Stmt>,
    },
    Return {
        expression: Option<Expr>,
    },
    SuperConstructorInvocation {
        constructor: Option<ElementRef>,
        expression: Option<Expr>,
        arguments: Vec<Expr>,
    },
    /// `case expr:`, or `default:` when `expression` is absent.
    SwitchCase {
        expression: Option<Expr>,
    },
    Switch {
        expression: Expr,
        statements: Vec<Stmt>,
    },
    Synchronized {
        expression: Expr,
        body: Spanned<Block>,
    },
    Throw {
        expression: Expr,
    },
    Try {
        resources: Vec<Expr>,
        body: Spanned<Block>,
        catch_clauses: Vec<Spanned<CatchClause>>,
        finally: Option<Spanned<Block>>,
    },
    TypeDeclaration {
        declaration: Box<Decl>,
    },
    VariableDeclaration {
        modifiers: Modifiers,
        annotations: Vec<Spanned<Annotation>>,
        type_node: TypeNode,
        fragments: Vec<Spanned<VariableDeclarationFragment>>,
    },
    While {
        expression: Expr,
        body: Box<Stmt>,
    },
}

impl Statement {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Statement::Assert { .. } => "AssertStatement",
            Statement::Block(_) => "Block",
            Statement::Break { .. } => "BreakStatement",
            Statement::ConstructorInvocation { .. } => "ConstructorInvocation",
            Statement::Continue { .. } => "ContinueStatement",
            Statement::Do { .. } => "DoStatement",
            Statement::Empty => "EmptyStatement",
            Statement::EnhancedFor { .. } => "EnhancedForStatement",
            Statement::Expression { .. } => "ExpressionStatement",
            Statement::For { .. } => "ForStatement",
            Statement::If { .. } => "IfStatement",
            Statement::Labeled { .. } => "LabeledStatement",
            Statement::Return { .. } => "ReturnStatement",
            Statement::SuperConstructorInvocation { .. } => "SuperConstructorInvocation",
            Statement::SwitchCase { .. } => "SwitchCase",
            Statement::Switch { .. } => "SwitchStatement",
            Statement::Synchronized { .. } => "SynchronizedStatement",
            Statement::Throw { .. } => "ThrowStatement",
            Statement::Try { .. } => "TryStatement",
            Statement::TypeDeclaration { .. } => "TypeDeclarationStatement",
            Statement::VariableDeclaration { .. } => "VariableDeclarationStatement",
            Statement::While { .. } => "WhileStatement",
        }
    }
}
