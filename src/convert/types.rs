use tracing::debug;

use crate::ast::{Annotation, ArrayType, SourcePosition, Spanned, Type, TypeNode};
use crate::binding::TypeRef;
use crate::errors::Result;
use crate::syntax::{Role, SyntaxNode};

use super::TreeConverter;

/// Type node standing for a resolved type that has no syntax of its own.
/// Every synthesized node shares `position`.
fn synthesized(ty: &TypeRef, position: SourcePosition) -> TypeNode {
    let value = match ty.component_type() {
        Some(component) => Type::Array(ArrayType {
            component: Box::new(synthesized(component, position)),
            ty: ty.clone(),
        }),
        None if ty.is_primitive() => Type::Primitive {
            annotations: Vec::new(),
            ty: ty.clone(),
        },
        None => Type::Simple {
            annotations: Vec::new(),
            ty: ty.clone(),
        },
    };
    Spanned::new(value, position)
}

impl TreeConverter<'_> {
    /// The component comes from the resolved array type rather than the
    /// written element type and dimensions.
    pub(super) fn array_type(&self, node: SyntaxNode<'_>, position: SourcePosition) -> ArrayType {
        let ty = self.type_of(node);
        let component = match ty.component_type() {
            Some(component) => synthesized(component, position),
            None => {
                debug!(offset = node.start(), ty = %ty, "array type without a resolved component");
                synthesized(&TypeRef::unresolved(), position)
            }
        };
        ArrayType {
            component: Box::new(component),
            ty,
        }
    }

    pub(super) fn intersection_type(&self, node: SyntaxNode<'_>) -> Result<Type> {
        Ok(Type::Intersection {
            types: self.list(node, Role::Type, Spanned::into_type)?,
            ty: self.type_of(node),
        })
    }

    pub(super) fn union_type(&self, node: SyntaxNode<'_>) -> Result<Type> {
        Ok(Type::Union {
            types: self.list(node, Role::Type, Spanned::into_type)?,
            ty: self.type_of(node),
        })
    }

    pub(super) fn parameterized_type(&self, node: SyntaxNode<'_>) -> Result<Type> {
        Ok(Type::Parameterized {
            base: Box::new(self.required(node, Role::Type, Spanned::into_type)?),
            ty: self.type_of(node),
        })
    }

    pub(super) fn name_qualified_type(&self, node: SyntaxNode<'_>) -> Result<Type> {
        Ok(Type::NameQualified {
            qualifier: self.required(node, Role::Qualifier, Spanned::into_name)?,
            annotations: self.type_annotations(node)?,
            name: self.required(node, Role::Name, Spanned::into_simple_name)?,
            ty: self.type_of(node),
        })
    }

    pub(super) fn primitive_type(&self, node: SyntaxNode<'_>) -> Result<Type> {
        Ok(Type::Primitive {
            annotations: self.type_annotations(node)?,
            ty: self.type_of(node),
        })
    }

    pub(super) fn qualified_type(&self, node: SyntaxNode<'_>) -> Result<Type> {
        Ok(Type::Qualified {
            annotations: self.type_annotations(node)?,
            ty: self.type_of(node),
        })
    }

    pub(super) fn simple_type(&self, node: SyntaxNode<'_>) -> Result<Type> {
        Ok(Type::Simple {
            annotations: self.type_annotations(node)?,
            ty: self.type_of(node),
        })
    }

    fn type_annotations(&self, node: SyntaxNode<'_>) -> Result<Vec<Spanned<Annotation>>> {
        if !self.env.options.type_annotations {
            return Ok(Vec::new());
        }
        self.list(node, Role::Annotation, Spanned::into_annotation)
    }
}
