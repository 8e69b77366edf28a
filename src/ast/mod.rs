//! Canonical AST produced by the converter.
//!
//! Every node is a typed value wrapped in [`Spanned`], owned by exactly one
//! parent. Resolved facts are stored as shared handles from
//! [`crate::binding`]; they are the only values that may be shared between
//! nodes.

pub mod decl;
pub mod doc;
pub mod expr;
pub mod node;
pub mod position;
pub mod stmt;
pub mod types;
pub mod unit;

pub use decl::{
    AnonymousClassDeclaration, BodyDeclaration, CatchClause, DeclarationHeader, Dimension,
    EnumConstantDeclaration, EnumDeclaration, MethodDeclaration, PackageDeclaration,
    SingleVariableDeclaration, TypeDeclaration, TypeDeclarationCore, VariableDeclaration,
    VariableDeclarationFragment,
};
pub use doc::{Comment, DocElement, Javadoc, TagElement, TextElement};
pub use expr::{
    Annotation, AnnotationKind, ArrayInitializer, Expression, InfixExpression, LambdaBody,
    LambdaExpression, MemberValuePair, Name, QualifiedName, SimpleName,
};
pub use node::TreeNode;
pub use position::{SourcePosition, Spanned};
pub use stmt::{Block, Statement};
pub use types::{ArrayType, Type};
pub use unit::CompilationUnit;

// ============================================================================
// SHORTHANDS
// ============================================================================

pub type Expr = Spanned<Expression>;
pub type Stmt = Spanned<Statement>;
pub type TypeNode = Spanned<Type>;
pub type Decl = Spanned<BodyDeclaration>;
