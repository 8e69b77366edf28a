//! Expression nodes, names, and annotations.

use serde::{Deserialize, Serialize};

use super::decl::{AnonymousClassDeclaration, VariableDeclaration, VariableDeclarationFragment};
use super::stmt::Block;
use super::types::ArrayType;
use super::{Expr, Spanned, TypeNode};
use crate::binding::{AnnotationRef, ConstantValue, ElementRef, TypeRef};
use crate::syntax::{AssignmentOperator, InfixOperator, Modifiers, PostfixOperator, PrefixOperator};

// ============================================================================
// NAMES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleName {
    pub identifier: String,
    pub element: Option<ElementRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualifiedName {
    pub qualifier: Box<Spanned<Name>>,
    pub name: Spanned<SimpleName>,
    pub element: Option<ElementRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Name {
    Simple(SimpleName),
    Qualified(QualifiedName),
}

impl Name {
    /// Last identifier of the name.
    pub fn simple_identifier(&self) -> &str {
        match self {
            Name::Simple(simple) => &simple.identifier,
            Name::Qualified(qualified) => &qualified.name.value.identifier,
        }
    }

    /// Dotted form, e.g. `java.lang.Object`.
    pub fn full_name(&self) -> String {
        let mut segments = Vec::new();
        let mut current = self;
        loop {
            match current {
                Name::Simple(simple) => {
                    segments.push(simple.identifier.as_str());
                    break;
                }
                Name::Qualified(qualified) => {
                    segments.push(qualified.name.value.identifier.as_str());
                    current = &qualified.qualifier.value;
                }
            }
        }
        segments.reverse();
        segments.join(".")
    }

    pub fn element(&self) -> Option<&ElementRef> {
        match self {
            Name::Simple(simple) => simple.element.as_ref(),
            Name::Qualified(qualified) => qualified.element.as_ref(),
        }
    }
}

// ============================================================================
// ANNOTATIONS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberValuePair {
    pub name: Spanned<SimpleName>,
    pub value: Expr,
}

/// Syntactic shape of an annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnnotationKind {
    /// `@Name`
    Marker,
    /// `@Name(value)`
    SingleMember { value: Box<Expr> },
    /// `@Name(key = value, ...)`
    Normal { values: Vec<Spanned<MemberValuePair>> },
    /// `@Property` or `@Property("attr, attr")`, with the attribute list
    /// already split out of the resolved annotation.
    Property { attributes: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub type_name: Spanned<Name>,
    pub mirror: Option<AnnotationRef>,
    pub constant: Option<ConstantValue>,
    pub kind: AnnotationKind,
}

impl Annotation {
    pub fn is_property(&self) -> bool {
        matches!(self.kind, AnnotationKind::Property { .. })
    }
}

// ============================================================================
// COMPOUND EXPRESSIONS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayInitializer {
    pub ty: TypeRef,
    pub expressions: Vec<Expr>,
    pub constant: Option<ConstantValue>,
}

/// Flattened infix expression: one operator applied left to right over two
/// or more operands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfixExpression {
    pub operator: InfixOperator,
    pub operands: Vec<Expr>,
    pub ty: TypeRef,
    pub constant: Option<ConstantValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LambdaBody {
    Block(Box<Spanned<Block>>),
    Expression(Box<Expr>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LambdaExpression {
    pub parameters: Vec<Spanned<VariableDeclaration>>,
    pub body: LambdaBody,
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    Annotation(Annotation),
    ArrayAccess {
        array: Box<Expr>,
        index: Box<Expr>,
    },
    ArrayCreation {
        type_node: Spanned<ArrayType>,
        dimensions: Vec<Expr>,
        initializer: Option<Spanned<ArrayInitializer>>,
        constant: Option<ConstantValue>,
    },
    ArrayInitializer(ArrayInitializer),
    Assignment {
        operator: AssignmentOperator,
        left: Box<Expr>,
        right: Box<Expr>,
        constant: Option<ConstantValue>,
    },
    BooleanLiteral {
        value: bool,
        ty: TypeRef,
        constant: Option<ConstantValue>,
    },
    Cast {
        type_node: Box<TypeNode>,
        expression: Box<Expr>,
        constant: Option<ConstantValue>,
    },
    CharacterLiteral {
        value: char,
        ty: TypeRef,
        constant: Option<ConstantValue>,
    },
    ClassInstanceCreation {
        constructor: Option<ElementRef>,
        expression: Option<Box<Expr>>,
        type_node: Box<TypeNode>,
        arguments: Vec<Expr>,
        anonymous_class: Option<Spanned<AnonymousClassDeclaration>>,
        ty: TypeRef,
    },
    Conditional {
        expression: Box<Expr>,
        then_expression: Box<Expr>,
        else_expression: Box<Expr>,
        ty: TypeRef,
    },
    CreationReference {
        type_node: Box<TypeNode>,
        method: Option<ElementRef>,
        ty: TypeRef,
    },
    ExpressionMethodReference {
        expression: Box<Expr>,
        name: Spanned<SimpleName>,
        method: Option<ElementRef>,
        ty: TypeRef,
    },
    FieldAccess {
        expression: Box<Expr>,
        name: Spanned<SimpleName>,
        field: Option<ElementRef>,
    },
    Infix(InfixExpression),
    Instanceof {
        left: Box<Expr>,
        right: Box<TypeNode>,
        ty: TypeRef,
    },
    Lambda(LambdaExpression),
    MethodInvocation {
        method: Option<ElementRef>,
        expression: Option<Box<Expr>>,
        name: Spanned<SimpleName>,
        arguments: Vec<Expr>,
        ty: TypeRef,
    },
    Name(Name),
    NullLiteral {
        ty: TypeRef,
    },
    NumberLiteral {
        token: String,
        value: Option<ConstantValue>,
        ty: TypeRef,
    },
    Parenthesized {
        expression: Box<Expr>,
    },
    Postfix {
        operator: PostfixOperator,
        operand: Box<Expr>,
    },
    Prefix {
        operator: PrefixOperator,
        operand: Box<Expr>,
        ty: TypeRef,
    },
    StringLiteral {
        value: String,
        ty: TypeRef,
    },
    SuperFieldAccess {
        qualifier: Option<Box<Spanned<Name>>>,
        name: Spanned<SimpleName>,
        field: Option<ElementRef>,
    },
    SuperMethodInvocation {
        qualifier: Option<Box<Spanned<Name>>>,
        name: Spanned<SimpleName>,
        arguments: Vec<Expr>,
        method: Option<ElementRef>,
        ty: TypeRef,
    },
    SuperMethodReference {
        qualifier: Option<Box<Spanned<Name>>>,
        name: Spanned<SimpleName>,
        method: Option<ElementRef>,
        ty: TypeRef,
    },
    This {
        qualifier: Option<Box<Spanned<Name>>>,
        ty: TypeRef,
    },
    TypeLiteral {
        type_node: Box<TypeNode>,
        ty: TypeRef,
    },
    TypeMethodReference {
        type_node: Box<TypeNode>,
        name: Spanned<SimpleName>,
        method: Option<ElementRef>,
        ty: TypeRef,
    },
    VariableDeclaration {
        modifiers: Modifiers,
        annotations: Vec<Spanned<Annotation>>,
        type_node: Box<TypeNode>,
        fragments: Vec<Spanned<VariableDeclarationFragment>>,
        ty: TypeRef,
    },
}

impl Expression {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expression::Annotation(annotation) => match annotation.kind {
                AnnotationKind::Marker => "MarkerAnnotation",
                AnnotationKind::SingleMember { .. } => "SingleMemberAnnotation",
                AnnotationKind::Normal { .. } => "NormalAnnotation",
                AnnotationKind::Property { .. } => "PropertyAnnotation",
            },
            Expression::ArrayAccess { .. } => "ArrayAccess",
            Expression::ArrayCreation { .. } => "ArrayCreation",
            Expression::ArrayInitializer(_) => "ArrayInitializer",
            Expression::Assignment { .. } => "Assignment",
            Expression::BooleanLiteral { .. } => "BooleanLiteral",
            Expression::Cast { .. } => "CastExpression",
            Expression::CharacterLiteral { .. } => "CharacterLiteral",
            Expression::ClassInstanceCreation { .. } => "ClassInstanceCreation",
            Expression::Conditional { .. } => "ConditionalExpression",
            Expression::CreationReference { .. } => "CreationReference",
            Expression::ExpressionMethodReference { .. } => "ExpressionMethodReference",
            Expression::FieldAccess { .. } => "FieldAccess",
            Expression::Infix(_) => "InfixExpression",
            Expression::Instanceof { .. } => "InstanceofExpression",
            Expression::Lambda(_) => "LambdaExpression",
            Expression::MethodInvocation { .. } => "MethodInvocation",
            Expression::Name(Name::Simple(_)) => "SimpleName",
            Expression::Name(Name::Qualified(_)) => "QualifiedName",
            Expression::NullLiteral { .. } => "NullLiteral",
            Expression::NumberLiteral { .. } => "NumberLiteral",
            Expression::Parenthesized { .. } => "ParenthesizedExpression",
            Expression::Postfix { .. } => "PostfixExpression",
            Expression::Prefix { .. } => "PrefixExpression",
            Expression::StringLiteral { .. } => "StringLiteral",
            Expression::SuperFieldAccess { .. } => "SuperFieldAccess",
            Expression::SuperMethodInvocation { .. } => "SuperMethodInvocation",
            Expression::SuperMethodReference { .. } => "SuperMethodReference",
            Expression::This { .. } => "ThisExpression",
            Expression::TypeLiteral { .. } => "TypeLiteral",
            Expression::TypeMethodReference { .. } => "TypeMethodReference",
            Expression::VariableDeclaration { .. } => "VariableDeclarationExpression",
        }
    }

    /// Compile-time constant attached during conversion, if any.
    pub fn constant(&self) -> Option<&ConstantValue> {
        match self {
            Expression::Annotation(Annotation { constant, .. })
            | Expression::ArrayCreation { constant, .. }
            | Expression::ArrayInitializer(ArrayInitializer { constant, .. })
            | Expression::Assignment { constant, .. }
            | Expression::BooleanLiteral { constant, .. }
            | Expression::Cast { constant, .. }
            | Expression::CharacterLiteral { constant, .. }
            | Expression::Infix(InfixExpression { constant, .. }) => constant.as_ref(),
            Expression::NumberLiteral { value, .. } => value.as_ref(),
            _ => None,
        }
    }
}
