//! Node-kind tags and child roles of the external syntax tree.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// SYNTAX KINDS
// ============================================================================

/// Every node kind the upstream parser can produce.
///
/// The converter matches on this enum exhaustively, so adding a kind here
/// without teaching the dispatcher about it fails to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SyntaxKind {
    AnnotationTypeDeclaration,
    AnnotationTypeMemberDeclaration,
    AnonymousClassDeclaration,
    ArrayAccess,
    ArrayCreation,
    ArrayInitializer,
    ArrayType,
    AssertStatement,
    Assignment,
    Block,
    BlockComment,
    BooleanLiteral,
    BreakStatement,
    CastExpression,
    CatchClause,
    CharacterLiteral,
    ClassInstanceCreation,
    CompilationUnit,
    ConditionalExpression,
    ConstructorInvocation,
    ContinueStatement,
    CreationReference,
    Dimension,
    DoStatement,
    EmptyStatement,
    EnhancedForStatement,
    EnumConstantDeclaration,
    EnumDeclaration,
    ExpressionMethodReference,
    ExpressionStatement,
    FieldAccess,
    FieldDeclaration,
    ForStatement,
    IfStatement,
    ImportDeclaration,
    InfixExpression,
    Initializer,
    InstanceofExpression,
    IntersectionType,
    Javadoc,
    LabeledStatement,
    LambdaExpression,
    LineComment,
    MarkerAnnotation,
    MemberRef,
    MemberValuePair,
    MethodDeclaration,
    MethodInvocation,
    MethodRef,
    MethodRefParameter,
    Modifier,
    NameQualifiedType,
    NormalAnnotation,
    NullLiteral,
    NumberLiteral,
    PackageDeclaration,
    ParameterizedType,
    ParenthesizedExpression,
    PostfixExpression,
    PrefixExpression,
    PrimitiveType,
    QualifiedName,
    QualifiedType,
    ReturnStatement,
    SimpleName,
    SimpleType,
    SingleMemberAnnotation,
    SingleVariableDeclaration,
    StringLiteral,
    SuperConstructorInvocation,
    SuperFieldAccess,
    SuperMethodInvocation,
    SuperMethodReference,
    SwitchCase,
    SwitchStatement,
    SynchronizedStatement,
    TagElement,
    TextElement,
    ThisExpression,
    ThrowStatement,
    TryStatement,
    TypeDeclaration,
    TypeDeclarationStatement,
    TypeLiteral,
    TypeMethodReference,
    TypeParameter,
    UnionType,
    VariableDeclarationExpression,
    VariableDeclarationFragment,
    VariableDeclarationStatement,
    WhileStatement,
    WildcardType,
}

impl SyntaxKind {
    /// All kinds, in declaration order.
    pub const ALL: [SyntaxKind; 92] = [
        SyntaxKind::AnnotationTypeDeclaration,
        SyntaxKind::AnnotationTypeMemberDeclaration,
        SyntaxKind::AnonymousClassDeclaration,
        SyntaxKind::ArrayAccess,
        SyntaxKind::ArrayCreation,
        SyntaxKind::ArrayInitializer,
        SyntaxKind::ArrayType,
        SyntaxKind::AssertStatement,
        SyntaxKind::Assignment,
        SyntaxKind::Block,
        SyntaxKind::BlockComment,
        SyntaxKind::BooleanLiteral,
        SyntaxKind::BreakStatement,
        SyntaxKind::CastExpression,
        SyntaxKind::CatchClause,
        SyntaxKind::CharacterLiteral,
        SyntaxKind::ClassInstanceCreation,
        SyntaxKind::CompilationUnit,
        SyntaxKind::ConditionalExpression,
        SyntaxKind::ConstructorInvocation,
        SyntaxKind::ContinueStatement,
        SyntaxKind::CreationReference,
        SyntaxKind::Dimension,
        SyntaxKind::DoStatement,
        SyntaxKind::EmptyStatement,
        SyntaxKind::EnhancedForStatement,
        SyntaxKind::EnumConstantDeclaration,
        SyntaxKind::EnumDeclaration,
        SyntaxKind::ExpressionMethodReference,
        SyntaxKind::ExpressionStatement,
        SyntaxKind::FieldAccess,
        SyntaxKind::FieldDeclaration,
        SyntaxKind::ForStatement,
        SyntaxKind::IfStatement,
        SyntaxKind::ImportDeclaration,
        SyntaxKind::InfixExpression,
        SyntaxKind::Initializer,
        SyntaxKind::InstanceofExpression,
        SyntaxKind::IntersectionType,
        SyntaxKind::Javadoc,
        SyntaxKind::LabeledStatement,
        SyntaxKind::LambdaExpression,
        SyntaxKind::LineComment,
        SyntaxKind::MarkerAnnotation,
        SyntaxKind::MemberRef,
        SyntaxKind::MemberValuePair,
        SyntaxKind::MethodDeclaration,
        SyntaxKind::MethodInvocation,
        SyntaxKind::MethodRef,
        SyntaxKind::MethodRefParameter,
        SyntaxKind::Modifier,
        SyntaxKind::NameQualifiedType,
        SyntaxKind::NormalAnnotation,
        SyntaxKind::NullLiteral,
        SyntaxKind::NumberLiteral,
        SyntaxKind::PackageDeclaration,
        SyntaxKind::ParameterizedType,
        SyntaxKind::ParenthesizedExpression,
        SyntaxKind::PostfixExpression,
        SyntaxKind::PrefixExpression,
        SyntaxKind::PrimitiveType,
        SyntaxKind::QualifiedName,
        SyntaxKind::QualifiedType,
        SyntaxKind::ReturnStatement,
        SyntaxKind::SimpleName,
        SyntaxKind::SimpleType,
        SyntaxKind::SingleMemberAnnotation,
        SyntaxKind::SingleVariableDeclaration,
        SyntaxKind::StringLiteral,
        SyntaxKind::SuperConstructorInvocation,
        SyntaxKind::SuperFieldAccess,
        SyntaxKind::SuperMethodInvocation,
        SyntaxKind::SuperMethodReference,
        SyntaxKind::SwitchCase,
        SyntaxKind::SwitchStatement,
        SyntaxKind::SynchronizedStatement,
        SyntaxKind::TagElement,
        SyntaxKind::TextElement,
        SyntaxKind::ThisExpression,
        SyntaxKind::ThrowStatement,
        SyntaxKind::TryStatement,
        SyntaxKind::TypeDeclaration,
        SyntaxKind::TypeDeclarationStatement,
        SyntaxKind::TypeLiteral,
        SyntaxKind::TypeMethodReference,
        SyntaxKind::TypeParameter,
        SyntaxKind::UnionType,
        SyntaxKind::VariableDeclarationExpression,
        SyntaxKind::VariableDeclarationFragment,
        SyntaxKind::VariableDeclarationStatement,
        SyntaxKind::WhileStatement,
        SyntaxKind::WildcardType,
    ];

    /// Comment kinds, which the unit records in its comment table.
    pub fn is_comment(self) -> bool {
        matches!(
            self,
            SyntaxKind::BlockComment | SyntaxKind::LineComment | SyntaxKind::Javadoc
        )
    }

    /// Annotation kinds; these are split out of declaration modifier lists.
    pub fn is_annotation(self) -> bool {
        matches!(
            self,
            SyntaxKind::MarkerAnnotation
                | SyntaxKind::NormalAnnotation
                | SyntaxKind::SingleMemberAnnotation
        )
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// ============================================================================
// CHILD ROLES
// ============================================================================

/// Named child slot of an external node.
///
/// Single-valued slots appear at most once on a node; list-valued slots
/// (arguments, statements, body declarations, ...) repeat the role once per
/// element, in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    AnonymousClass,
    Argument,
    Array,
    Annotation,
    Body,
    BodyDeclaration,
    CatchClause,
    Declaration,
    Default,
    Dimension,
    ElementType,
    ElseExpression,
    ElseStatement,
    EnumConstant,
    Exception,
    Expression,
    ExtendedOperand,
    Finally,
    Fragment,
    Index,
    Initializer,
    Javadoc,
    Label,
    LeftHandSide,
    LeftOperand,
    Message,
    Modifier,
    Name,
    Operand,
    Package,
    Parameter,
    Qualifier,
    Resource,
    ReturnType,
    RightHandSide,
    RightOperand,
    Statement,
    Superclass,
    SuperInterface,
    Tag,
    ThenExpression,
    ThenStatement,
    ThrownException,
    Type,
    TypeDeclaration,
    TypeName,
    Updater,
    Value,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// ============================================================================
// NODE FLAGS
// ============================================================================

/// Boolean facts the parser records on a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flag {
    /// `TypeDeclaration` declares an interface.
    Interface,
    /// `MethodDeclaration` declares a constructor.
    Constructor,
    /// `SingleVariableDeclaration` is a variable-arity parameter.
    Varargs,
    /// `BooleanLiteral` value.
    True,
}

impl Flag {
    pub(crate) const fn bit(self) -> u8 {
        match self {
            Flag::Interface => 0b0001,
            Flag::Constructor => 0b0010,
            Flag::Varargs => 0b0100,
            Flag::True => 0b1000,
        }
    }
}

// ============================================================================
// MODIFIERS
// ============================================================================

/// Declaration modifier bitmask, using the conventional flag values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers(pub u32);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const PUBLIC: Modifiers = Modifiers(0x0001);
    pub const PRIVATE: Modifiers = Modifiers(0x0002);
    pub const PROTECTED: Modifiers = Modifiers(0x0004);
    pub const STATIC: Modifiers = Modifiers(0x0008);
    pub const FINAL: Modifiers = Modifiers(0x0010);
    pub const SYNCHRONIZED: Modifiers = Modifiers(0x0020);
    pub const VOLATILE: Modifiers = Modifiers(0x0040);
    pub const TRANSIENT: Modifiers = Modifiers(0x0080);
    pub const NATIVE: Modifiers = Modifiers(0x0100);
    pub const ABSTRACT: Modifiers = Modifiers(0x0400);
    pub const STRICTFP: Modifiers = Modifiers(0x0800);
    pub const DEFAULT: Modifiers = Modifiers(0x1_0000);

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn contains(self, other: Modifiers) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Modifiers) -> Modifiers {
        Modifiers(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_kinds_are_listed_once() {
        let unique: HashSet<_> = SyntaxKind::ALL.iter().collect();
        assert_eq!(unique.len(), SyntaxKind::ALL.len());
    }

    #[test]
    fn modifier_bits_combine() {
        let mods = Modifiers::PUBLIC | Modifiers::STATIC | Modifiers::FINAL;
        assert!(mods.contains(Modifiers::STATIC));
        assert!(!mods.contains(Modifiers::PRIVATE));
        assert_eq!(mods.bits(), 0x19);
    }
}
