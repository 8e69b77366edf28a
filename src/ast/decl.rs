//! Body declarations and the variable/clause nodes that hang off them.

use serde::{Deserialize, Serialize};

use super::doc::Javadoc;
use super::expr::{Annotation, Name, SimpleName};
use super::stmt::Block;
use super::{Decl, Expr, Spanned, TypeNode};
use crate::binding::ElementRef;
use crate::syntax::Modifiers;

/// Modifier bits, annotations, and documentation shared by every body
/// declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DeclarationHeader {
    pub modifiers: Modifiers,
    pub annotations: Vec<Spanned<Annotation>>,
    pub javadoc: Option<Spanned<Javadoc>>,
}

/// Parts common to class, enum, and annotation type declarations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDeclarationCore {
    pub header: DeclarationHeader,
    pub name: Spanned<SimpleName>,
    pub element: Option<ElementRef>,
    pub body_declarations: Vec<Decl>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    pub core: TypeDeclarationCore,
    pub is_interface: bool,
    pub superclass: Option<Box<TypeNode>>,
    pub super_interfaces: Vec<TypeNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDeclaration {
    pub core: TypeDeclarationCore,
    pub super_interfaces: Vec<TypeNode>,
    pub constants: Vec<Spanned<EnumConstantDeclaration>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumConstantDeclaration {
    pub header: DeclarationHeader,
    pub variable: Option<ElementRef>,
    pub constructor: Option<ElementRef>,
    pub name: Spanned<SimpleName>,
    pub arguments: Vec<Expr>,
    pub anonymous_class: Option<Spanned<AnonymousClassDeclaration>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDeclaration {
    pub header: DeclarationHeader,
    pub element: Option<ElementRef>,
    pub is_constructor: bool,
    pub return_type: Option<TypeNode>,
    pub name: Spanned<SimpleName>,
    pub parameters: Vec<Spanned<SingleVariableDeclaration>>,
    pub thrown_exceptions: Vec<TypeNode>,
    pub body: Option<Spanned<Block>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BodyDeclaration {
    AnnotationType(TypeDeclarationCore),
    AnnotationTypeMember {
        header: DeclarationHeader,
        element: Option<ElementRef>,
        name: Spanned<SimpleName>,
        type_node: TypeNode,
        default: Option<Expr>,
    },
    Enum(EnumDeclaration),
    EnumConstant(EnumConstantDeclaration),
    Field {
        header: DeclarationHeader,
        type_node: TypeNode,
        fragments: Vec<Spanned<VariableDeclarationFragment>>,
    },
    Initializer {
        header: DeclarationHeader,
        body: Spanned<Block>,
    },
    Method(MethodDeclaration),
    Type(TypeDeclaration),
}

impl BodyDeclaration {
    pub fn header(&self) -> &DeclarationHeader {
        match self {
            BodyDeclaration::AnnotationType(core) => &core.header,
            BodyDeclaration::Enum(decl) => &decl.core.header,
            BodyDeclaration::Type(decl) => &decl.core.header,
            BodyDeclaration::EnumConstant(decl) => &decl.header,
            BodyDeclaration::Method(decl) => &decl.header,
            BodyDeclaration::AnnotationTypeMember { header, .. }
            | BodyDeclaration::Field { header, .. }
            | BodyDeclaration::Initializer { header, .. } => header,
        }
    }

    /// Shared parts of a type-declaring node; `None` for members.
    pub fn type_core(&self) -> Option<&TypeDeclarationCore> {
        match self {
            BodyDeclaration::AnnotationType(core) => Some(core),
            BodyDeclaration::Enum(decl) => Some(&decl.core),
            BodyDeclaration::Type(decl) => Some(&decl.core),
            _ => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            BodyDeclaration::AnnotationType(_) => "AnnotationTypeDeclaration",
            BodyDeclaration::AnnotationTypeMember { .. } => "AnnotationTypeMemberDeclaration",
            BodyDeclaration::Enum(_) => "EnumDeclaration",
            BodyDeclaration::EnumConstant(_) => "EnumConstantDeclaration",
            BodyDeclaration::Field { .. } => "FieldDeclaration",
            BodyDeclaration::Initializer { .. } => "Initializer",
            BodyDeclaration::Method(_) => "MethodDeclaration",
            BodyDeclaration::Type(_) => "TypeDeclaration",
        }
    }
}

// ============================================================================
// SUPPORTING NODES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnonymousClassDeclaration {
    pub element: Option<ElementRef>,
    pub body_declarations: Vec<Decl>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchClause {
    pub exception: Spanned<SingleVariableDeclaration>,
    pub body: Spanned<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Dimension {
    pub annotations: Vec<Spanned<Annotation>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageDeclaration {
    pub name: Spanned<Name>,
    pub element: Option<ElementRef>,
    pub javadoc: Option<Spanned<Javadoc>>,
    pub annotations: Vec<Spanned<Annotation>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleVariableDeclaration {
    pub modifiers: Modifiers,
    pub annotations: Vec<Spanned<Annotation>>,
    pub type_node: TypeNode,
    pub is_varargs: bool,
    pub name: Spanned<SimpleName>,
    pub extra_dimensions: u32,
    pub initializer: Option<Expr>,
    pub element: Option<ElementRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclarationFragment {
    pub name: Spanned<SimpleName>,
    pub extra_dimensions: u32,
    pub initializer: Option<Expr>,
    pub element: Option<ElementRef>,
}

/// Either form of a declared variable; lambda parameters may use both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VariableDeclaration {
    Single(SingleVariableDeclaration),
    Fragment(VariableDeclarationFragment),
}

impl VariableDeclaration {
    pub fn name(&self) -> &Spanned<SimpleName> {
        match self {
            VariableDeclaration::Single(single) => &single.name,
            VariableDeclaration::Fragment(fragment) => &fragment.name,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            VariableDeclaration::Single(_) => "SingleVariableDeclaration",
            VariableDeclaration::Fragment(_) => "VariableDeclarationFragment",
        }
    }
}
