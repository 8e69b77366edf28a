use crate::ast::{
    AnonymousClassDeclaration, BodyDeclaration, CatchClause, Dimension, EnumConstantDeclaration,
    EnumDeclaration, MethodDeclaration, PackageDeclaration, SingleVariableDeclaration, Spanned,
    TypeDeclaration, TypeDeclarationCore, VariableDeclaration, VariableDeclarationFragment,
};
use crate::errors::Result;
use crate::syntax::{Flag, Role, SyntaxNode};

use super::TreeConverter;

impl TreeConverter<'_> {
    /// Header, name, element and members shared by class, enum and
    /// annotation type declarations.
    fn type_core(&self, node: SyntaxNode<'_>) -> Result<TypeDeclarationCore> {
        Ok(TypeDeclarationCore {
            header: self.header(node)?,
            name: self.required(node, Role::Name, Spanned::into_simple_name)?,
            element: self.element_of(node),
            body_declarations: self.list(node, Role::BodyDeclaration, Spanned::into_declaration)?,
        })
    }

    pub(super) fn annotation_type_declaration(
        &self,
        node: SyntaxNode<'_>,
    ) -> Result<BodyDeclaration> {
        Ok(BodyDeclaration::AnnotationType(self.type_core(node)?))
    }

    pub(super) fn annotation_type_member(&self, node: SyntaxNode<'_>) -> Result<BodyDeclaration> {
        Ok(BodyDeclaration::AnnotationTypeMember {
            header: self.header(node)?,
            element: self.element_of(node),
            type_node: self.required(node, Role::Type, Spanned::into_type)?,
            name: self.required(node, Role::Name, Spanned::into_simple_name)?,
            default: self.optional(node, Role::Default, Spanned::into_expression)?,
        })
    }

    pub(super) fn enum_declaration(&self, node: SyntaxNode<'_>) -> Result<BodyDeclaration> {
        let core = self.type_core(node)?;
        Ok(BodyDeclaration::Enum(EnumDeclaration {
            core,
            super_interfaces: self.list(node, Role::SuperInterface, Spanned::into_type)?,
            constants: self.list(node, Role::EnumConstant, Spanned::into_enum_constant)?,
        }))
    }

    pub(super) fn enum_constant(&self, node: SyntaxNode<'_>) -> Result<BodyDeclaration> {
        Ok(BodyDeclaration::EnumConstant(EnumConstantDeclaration {
            header: self.header(node)?,
            variable: self.env.resolver.variable_of(node),
            constructor: self.element_of(node),
            name: self.required(node, Role::Name, Spanned::into_simple_name)?,
            arguments: self.list(node, Role::Argument, Spanned::into_expression)?,
            anonymous_class: self.optional(
                node,
                Role::AnonymousClass,
                Spanned::into_anonymous_class,
            )?,
        }))
    }

    pub(super) fn field_declaration(&self, node: SyntaxNode<'_>) -> Result<BodyDeclaration> {
        Ok(BodyDeclaration::Field {
            header: self.header(node)?,
            type_node: self.required(node, Role::Type, Spanned::into_type)?,
            fragments: self.list(node, Role::Fragment, Spanned::into_fragment)?,
        })
    }

    pub(super) fn initializer(&self, node: SyntaxNode<'_>) -> Result<BodyDeclaration> {
        Ok(BodyDeclaration::Initializer {
            header: self.header(node)?,
            body: self.required(node, Role::Body, Spanned::into_block)?,
        })
    }

    pub(super) fn method_declaration(&self, node: SyntaxNode<'_>) -> Result<BodyDeclaration> {
        Ok(BodyDeclaration::Method(MethodDeclaration {
            header: self.header(node)?,
            element: self.element_of(node),
            is_constructor: node.has_flag(Flag::Constructor),
            return_type: self.optional(node, Role::ReturnType, Spanned::into_type)?,
            name: self.required(node, Role::Name, Spanned::into_simple_name)?,
            parameters: self.list(node, Role::Parameter, Spanned::into_single_variable)?,
            thrown_exceptions: self.list(node, Role::ThrownException, Spanned::into_type)?,
            body: self.optional(node, Role::Body, Spanned::into_block)?,
        }))
    }

    pub(super) fn type_declaration(&self, node: SyntaxNode<'_>) -> Result<BodyDeclaration> {
        let core = self.type_core(node)?;
        Ok(BodyDeclaration::Type(TypeDeclaration {
            core,
            is_interface: node.has_flag(Flag::Interface),
            superclass: self
                .optional(node, Role::Superclass, Spanned::into_type)?
                .map(Box::new),
            super_interfaces: self.list(node, Role::SuperInterface, Spanned::into_type)?,
        }))
    }

    pub(super) fn anonymous_class(&self, node: SyntaxNode<'_>) -> Result<AnonymousClassDeclaration> {
        Ok(AnonymousClassDeclaration {
            element: self.element_of(node),
            body_declarations: self.list(node, Role::BodyDeclaration, Spanned::into_declaration)?,
        })
    }

    pub(super) fn catch_clause(&self, node: SyntaxNode<'_>) -> Result<CatchClause> {
        Ok(CatchClause {
            exception: self.required(node, Role::Exception, Spanned::into_single_variable)?,
            body: self.required(node, Role::Body, Spanned::into_block)?,
        })
    }

    pub(super) fn dimension(&self, node: SyntaxNode<'_>) -> Result<Dimension> {
        Ok(Dimension {
            annotations: self.list(node, Role::Annotation, Spanned::into_annotation)?,
        })
    }

    pub(super) fn package_declaration(&self, node: SyntaxNode<'_>) -> Result<PackageDeclaration> {
        Ok(PackageDeclaration {
            javadoc: self.optional(node, Role::Javadoc, Spanned::into_javadoc)?,
            annotations: self.list(node, Role::Annotation, Spanned::into_annotation)?,
            name: self.required(node, Role::Name, Spanned::into_name)?,
            element: self.element_of(node),
        })
    }

    pub(super) fn single_variable(&self, node: SyntaxNode<'_>) -> Result<VariableDeclaration> {
        Ok(VariableDeclaration::Single(SingleVariableDeclaration {
            modifiers: node.modifiers(),
            annotations: self.modifier_annotations(node)?,
            type_node: self.required(node, Role::Type, Spanned::into_type)?,
            is_varargs: node.has_flag(Flag::Varargs),
            name: self.required(node, Role::Name, Spanned::into_simple_name)?,
            extra_dimensions: node.extra_dimensions(),
            initializer: self.optional(node, Role::Initializer, Spanned::into_expression)?,
            element: self.element_of(node),
        }))
    }

    pub(super) fn fragment(&self, node: SyntaxNode<'_>) -> Result<VariableDeclaration> {
        Ok(VariableDeclaration::Fragment(VariableDeclarationFragment {
            name: self.required(node, Role::Name, Spanned::into_simple_name)?,
            extra_dimensions: node.extra_dimensions(),
            initializer: self.optional(node, Role::Initializer, Spanned::into_expression)?,
            element: self.element_of(node),
        }))
    }
}
