use serde::{Deserialize, Serialize};

use super::expr::{Annotation, Name, SimpleName};
use super::{Spanned, TypeNode};
use crate::binding::TypeRef;

/// Array type whose component comes from the resolved type, not the syntax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayType {
    pub component: Box<TypeNode>,
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Type {
    Array(ArrayType),
    Intersection {
        types: Vec<TypeNode>,
        ty: TypeRef,
    },
    NameQualified {
        qualifier: Spanned<Name>,
        name: Spanned<SimpleName>,
        annotations: Vec<Spanned<Annotation>>,
        ty: TypeRef,
    },
    Parameterized {
        base: Box<TypeNode>,
        ty: TypeRef,
    },
    Primitive {
        annotations: Vec<Spanned<Annotation>>,
        ty: TypeRef,
    },
    Qualified {
        annotations: Vec<Spanned<Annotation>>,
        ty: TypeRef,
    },
    Simple {
        annotations: Vec<Spanned<Annotation>>,
        ty: TypeRef,
    },
    Union {
        types: Vec<TypeNode>,
        ty: TypeRef,
    },
}

impl Type {
    /// Resolved type this node denotes.
    pub fn type_ref(&self) -> &TypeRef {
        match self {
            Type::Array(ArrayType { ty, .. })
            | Type::Intersection { ty, .. }
            | Type::NameQualified { ty, .. }
            | Type::Parameterized { ty, .. }
            | Type::Primitive { ty, .. }
            | Type::Qualified { ty, .. }
            | Type::Simple { ty, .. }
            | Type::Union { ty, .. } => ty,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Type::Array(_) => "ArrayType",
            Type::Intersection { .. } => "IntersectionType",
            Type::NameQualified { .. } => "NameQualifiedType",
            Type::Parameterized { .. } => "ParameterizedType",
            Type::Primitive { .. } => "PrimitiveType",
            Type::Qualified { .. } => "QualifiedType",
            Type::Simple { .. } => "SimpleType",
            Type::Union { .. } => "UnionType",
        }
    }
}
