//! The category-level node produced by generic conversion, and the narrowing
//! accessors builders use to pull a typed child out of it.

use serde::{Deserialize, Serialize};

use super::decl::{
    AnonymousClassDeclaration, BodyDeclaration, CatchClause, Dimension, EnumConstantDeclaration,
    PackageDeclaration, SingleVariableDeclaration, VariableDeclaration,
    VariableDeclarationFragment,
};
use super::doc::{Comment, DocElement, Javadoc, TagElement};
use super::expr::{Annotation, ArrayInitializer, Expression, MemberValuePair, Name, SimpleName};
use super::stmt::{Block, Statement};
use super::types::{ArrayType, Type};
use super::Spanned;
use crate::errors::ConvertError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TreeNode {
    Declaration(BodyDeclaration),
    Statement(Statement),
    Expression(Expression),
    Type(Type),
    Comment(Comment),
    DocElement(DocElement),
    AnonymousClass(AnonymousClassDeclaration),
    CatchClause(CatchClause),
    Dimension(Dimension),
    MemberValuePair(MemberValuePair),
    Package(PackageDeclaration),
    Variable(VariableDeclaration),
}

impl TreeNode {
    pub fn kind_name(&self) -> &'static str {
        match self {
            TreeNode::Declaration(decl) => decl.kind_name(),
            TreeNode::Statement(stmt) => stmt.kind_name(),
            TreeNode::Expression(expr) => expr.kind_name(),
            TreeNode::Type(ty) => ty.kind_name(),
            TreeNode::Comment(comment) => comment.kind_name(),
            TreeNode::DocElement(element) => element.kind_name(),
            TreeNode::AnonymousClass(_) => "AnonymousClassDeclaration",
            TreeNode::CatchClause(_) => "CatchClause",
            TreeNode::Dimension(_) => "Dimension",
            TreeNode::MemberValuePair(_) => "MemberValuePair",
            TreeNode::Package(_) => "PackageDeclaration",
            TreeNode::Variable(var) => var.kind_name(),
        }
    }
}

// ============================================================================
// NARROWING
// ============================================================================

macro_rules! narrow {
    ($(#[$meta:meta])* $name:ident -> $target:ty, $expected:literal, $pat:pat => $out:expr) => {
        $(#[$meta])*
        pub fn $name(self) -> Result<Spanned<$target>, ConvertError> {
            let position = self.position;
            match self.value {
                $pat => Ok(Spanned::new($out, position)),
                other => Err(ConvertError::type_mismatch($expected, other.kind_name(), position)),
            }
        }
    };
}

impl Spanned<TreeNode> {
    narrow!(into_declaration -> BodyDeclaration, "body declaration",
        TreeNode::Declaration(decl) => decl);
    narrow!(into_statement -> Statement, "statement",
        TreeNode::Statement(stmt) => stmt);
    narrow!(into_expression -> Expression, "expression",
        TreeNode::Expression(expr) => expr);
    narrow!(into_type -> Type, "type",
        TreeNode::Type(ty) => ty);
    narrow!(into_comment -> Comment, "comment",
        TreeNode::Comment(comment) => comment);
    narrow!(into_anonymous_class -> AnonymousClassDeclaration, "AnonymousClassDeclaration",
        TreeNode::AnonymousClass(class) => class);
    narrow!(into_catch_clause -> CatchClause, "CatchClause",
        TreeNode::CatchClause(clause) => clause);
    narrow!(into_dimension -> Dimension, "Dimension",
        TreeNode::Dimension(dimension) => dimension);
    narrow!(into_member_value_pair -> MemberValuePair, "MemberValuePair",
        TreeNode::MemberValuePair(pair) => pair);
    narrow!(into_package -> PackageDeclaration, "PackageDeclaration",
        TreeNode::Package(package) => package);
    narrow!(into_variable -> VariableDeclaration, "variable declaration",
        TreeNode::Variable(var) => var);
    narrow!(into_single_variable -> SingleVariableDeclaration, "SingleVariableDeclaration",
        TreeNode::Variable(VariableDeclaration::Single(var)) => var);
    narrow!(into_fragment -> VariableDeclarationFragment, "VariableDeclarationFragment",
        TreeNode::Variable(VariableDeclaration::Fragment(fragment)) => fragment);
    narrow!(into_enum_constant -> EnumConstantDeclaration, "EnumConstantDeclaration",
        TreeNode::Declaration(BodyDeclaration::EnumConstant(constant)) => constant);
    narrow!(into_block -> Block, "Block",
        TreeNode::Statement(Statement::Block(block)) => block);
    narrow!(into_name -> Name, "name",
        TreeNode::Expression(Expression::Name(name)) => name);
    narrow!(into_simple_name -> SimpleName, "SimpleName",
        TreeNode::Expression(Expression::Name(Name::Simple(name))) => name);
    narrow!(into_annotation -> Annotation, "annotation",
        TreeNode::Expression(Expression::Annotation(annotation)) => annotation);
    narrow!(into_array_initializer -> ArrayInitializer, "ArrayInitializer",
        TreeNode::Expression(Expression::ArrayInitializer(init)) => init);
    narrow!(into_array_type -> ArrayType, "ArrayType",
        TreeNode::Type(Type::Array(array)) => array);
    narrow!(into_javadoc -> Javadoc, "Javadoc",
        TreeNode::Comment(Comment::Javadoc(doc)) => doc);
    narrow!(into_tag_element -> TagElement, "TagElement",
        TreeNode::DocElement(DocElement::Tag(tag)) => tag);

    /// A tag fragment: nested tag, text, or a name referenced from the doc.
    pub fn into_doc_fragment(self) -> Result<Spanned<DocElement>, ConvertError> {
        let position = self.position;
        match self.value {
            TreeNode::DocElement(element) => Ok(Spanned::new(element, position)),
            TreeNode::Expression(Expression::Name(name)) => {
                Ok(Spanned::new(DocElement::Name(name), position))
            }
            other => Err(ConvertError::type_mismatch(
                "doc fragment",
                other.kind_name(),
                position,
            )),
        }
    }
}
