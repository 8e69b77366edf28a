use crate::ast::{
    ArrayInitializer, Expression, LambdaBody, LambdaExpression, Name, QualifiedName, SimpleName,
    SourcePosition, Spanned,
};
use crate::errors::{ConvertError, Result};
use crate::syntax::{Role, SyntaxKind, SyntaxNode};

use super::TreeConverter;

impl TreeConverter<'_> {
    // ========================================================================
    // NAMES
    // ========================================================================

    /// The identifier is the node's token; a missing token shows up as an
    /// empty identifier, which validation rejects.
    pub(super) fn simple_name(&self, node: SyntaxNode<'_>) -> SimpleName {
        SimpleName {
            identifier: node.token().unwrap_or_default().to_string(),
            element: self.element_of(node),
        }
    }

    pub(super) fn qualified_name(&self, node: SyntaxNode<'_>) -> Result<Name> {
        Ok(Name::Qualified(QualifiedName {
            qualifier: Box::new(self.required(node, Role::Qualifier, Spanned::into_name)?),
            name: self.required(node, Role::Name, Spanned::into_simple_name)?,
            element: self.element_of(node),
        }))
    }

    // ========================================================================
    // ACCESS AND CALLS
    // ========================================================================

    pub(super) fn array_access(&self, node: SyntaxNode<'_>) -> Result<Expression> {
        Ok(Expression::ArrayAccess {
            array: Box::new(self.required(node, Role::Array, Spanned::into_expression)?),
            index: Box::new(self.required(node, Role::Index, Spanned::into_expression)?),
        })
    }

    pub(super) fn field_access(&self, node: SyntaxNode<'_>) -> Result<Expression> {
        Ok(Expression::FieldAccess {
            expression: Box::new(self.required(node, Role::Expression, Spanned::into_expression)?),
            name: self.required(node, Role::Name, Spanned::into_simple_name)?,
            field: self.element_of(node),
        })
    }

    pub(super) fn super_field_access(&self, node: SyntaxNode<'_>) -> Result<Expression> {
        Ok(Expression::SuperFieldAccess {
            qualifier: self.optional(node, Role::Qualifier, Spanned::into_name)?.map(Box::new),
            name: self.required(node, Role::Name, Spanned::into_simple_name)?,
            field: self.element_of(node),
        })
    }

    pub(super) fn method_invocation(&self, node: SyntaxNode<'_>) -> Result<Expression> {
        Ok(Expression::MethodInvocation {
            method: self.element_of(node),
            expression: self
                .optional(node, Role::Expression, Spanned::into_expression)?
                .map(Box::new),
            name: self.required(node, Role::Name, Spanned::into_simple_name)?,
            arguments: self.list(node, Role::Argument, Spanned::into_expression)?,
            ty: self.type_of(node),
        })
    }

    pub(super) fn super_method_invocation(&self, node: SyntaxNode<'_>) -> Result<Expression> {
        Ok(Expression::SuperMethodInvocation {
            qualifier: self.optional(node, Role::Qualifier, Spanned::into_name)?.map(Box::new),
            name: self.required(node, Role::Name, Spanned::into_simple_name)?,
            arguments: self.list(node, Role::Argument, Spanned::into_expression)?,
            method: self.element_of(node),
            ty: self.type_of(node),
        })
    }

    pub(super) fn class_instance_creation(&self, node: SyntaxNode<'_>) -> Result<Expression> {
        Ok(Expression::ClassInstanceCreation {
            constructor: self.element_of(node),
            expression: self
                .optional(node, Role::Expression, Spanned::into_expression)?
                .map(Box::new),
            type_node: Box::new(self.required(node, Role::Type, Spanned::into_type)?),
            arguments: self.list(node, Role::Argument, Spanned::into_expression)?,
            anonymous_class: self.optional(
                node,
                Role::AnonymousClass,
                Spanned::into_anonymous_class,
            )?,
            ty: self.type_of(node),
        })
    }

    pub(super) fn this_expression(&self, node: SyntaxNode<'_>) -> Result<Expression> {
        Ok(Expression::This {
            qualifier: self.optional(node, Role::Qualifier, Spanned::into_name)?.map(Box::new),
            ty: self.type_of(node),
        })
    }

    // ========================================================================
    // METHOD REFERENCES
    // ========================================================================

    pub(super) fn creation_reference(&self, node: SyntaxNode<'_>) -> Result<Expression> {
        Ok(Expression::CreationReference {
            type_node: Box::new(self.required(node, Role::Type, Spanned::into_type)?),
            method: self.element_of(node),
            ty: self.type_of(node),
        })
    }

    pub(super) fn expression_method_reference(&self, node: SyntaxNode<'_>) -> Result<Expression> {
        Ok(Expression::ExpressionMethodReference {
            expression: Box::new(self.required(node, Role::Expression, Spanned::into_expression)?),
            name: self.required(node, Role::Name, Spanned::into_simple_name)?,
            method: self.element_of(node),
            ty: self.type_of(node),
        })
    }

    pub(super) fn super_method_reference(&self, node: SyntaxNode<'_>) -> Result<Expression> {
        Ok(Expression::SuperMethodReference {
            qualifier: self.optional(node, Role::Qualifier, Spanned::into_name)?.map(Box::new),
            name: self.required(node, Role::Name, Spanned::into_simple_name)?,
            method: self.element_of(node),
            ty: self.type_of(node),
        })
    }

    pub(super) fn type_method_reference(&self, node: SyntaxNode<'_>) -> Result<Expression> {
        Ok(Expression::TypeMethodReference {
            type_node: Box::new(self.required(node, Role::Type, Spanned::into_type)?),
            name: self.required(node, Role::Name, Spanned::into_simple_name)?,
            method: self.element_of(node),
            ty: self.type_of(node),
        })
    }

    // ========================================================================
    // OPERATORS
    // ========================================================================

    pub(super) fn assignment(
        &self,
        node: SyntaxNode<'_>,
        position: SourcePosition,
    ) -> Result<Expression> {
        let operator = node
            .assignment_operator()
            .ok_or_else(|| ConvertError::invalid("Assignment", "missing operator", position))?;
        Ok(Expression::Assignment {
            operator,
            left: Box::new(self.required(node, Role::LeftHandSide, Spanned::into_expression)?),
            right: Box::new(self.required(node, Role::RightHandSide, Spanned::into_expression)?),
            constant: self.constant_of(node),
        })
    }

    pub(super) fn prefix_expression(
        &self,
        node: SyntaxNode<'_>,
        position: SourcePosition,
    ) -> Result<Expression> {
        let operator = node.prefix_operator().ok_or_else(|| {
            ConvertError::invalid("PrefixExpression", "missing operator", position)
        })?;
        Ok(Expression::Prefix {
            operator,
            operand: Box::new(self.required(node, Role::Operand, Spanned::into_expression)?),
            ty: self.type_of(node),
        })
    }

    pub(super) fn postfix_expression(
        &self,
        node: SyntaxNode<'_>,
        position: SourcePosition,
    ) -> Result<Expression> {
        let operator = node.postfix_operator().ok_or_else(|| {
            ConvertError::invalid("PostfixExpression", "missing operator", position)
        })?;
        Ok(Expression::Postfix {
            operator,
            operand: Box::new(self.required(node, Role::Operand, Spanned::into_expression)?),
        })
    }

    pub(super) fn conditional_expression(&self, node: SyntaxNode<'_>) -> Result<Expression> {
        Ok(Expression::Conditional {
            expression: Box::new(self.required(node, Role::Expression, Spanned::into_expression)?),
            then_expression: Box::new(self.required(
                node,
                Role::ThenExpression,
                Spanned::into_expression,
            )?),
            else_expression: Box::new(self.required(
                node,
                Role::ElseExpression,
                Spanned::into_expression,
            )?),
            ty: self.type_of(node),
        })
    }

    pub(super) fn instanceof_expression(&self, node: SyntaxNode<'_>) -> Result<Expression> {
        Ok(Expression::Instanceof {
            left: Box::new(self.required(node, Role::LeftOperand, Spanned::into_expression)?),
            right: Box::new(self.required(node, Role::RightOperand, Spanned::into_type)?),
            ty: self.type_of(node),
        })
    }

    pub(super) fn parenthesized_expression(&self, node: SyntaxNode<'_>) -> Result<Expression> {
        Ok(Expression::Parenthesized {
            expression: Box::new(self.required(node, Role::Expression, Spanned::into_expression)?),
        })
    }

    /// A cast of a lambda retypes the lambda to the cast's target. Resolvers
    /// may give a parameterless lambda cast to an intersection of interfaces
    /// the wrong type, and later stages read the lambda's own type.
    pub(super) fn cast_expression(&self, node: SyntaxNode<'_>) -> Result<Expression> {
        let type_node = self.required(node, Role::Type, Spanned::into_type)?;
        let mut expression = self.required(node, Role::Expression, Spanned::into_expression)?;
        if let Expression::Lambda(lambda) = &mut expression.value {
            lambda.ty = type_node.value.type_ref().clone();
        }
        Ok(Expression::Cast {
            type_node: Box::new(type_node),
            expression: Box::new(expression),
            constant: self.constant_of(node),
        })
    }

    // ========================================================================
    // ARRAYS
    // ========================================================================

    pub(super) fn array_creation(&self, node: SyntaxNode<'_>) -> Result<Expression> {
        Ok(Expression::ArrayCreation {
            type_node: self.required(node, Role::Type, Spanned::into_array_type)?,
            dimensions: self.list(node, Role::Dimension, Spanned::into_expression)?,
            initializer: self.optional(node, Role::Initializer, Spanned::into_array_initializer)?,
            constant: self.constant_of(node),
        })
    }

    pub(super) fn array_initializer(&self, node: SyntaxNode<'_>) -> Result<ArrayInitializer> {
        Ok(ArrayInitializer {
            ty: self.type_of(node),
            expressions: self.list(node, Role::Expression, Spanned::into_expression)?,
            constant: self.constant_of(node),
        })
    }

    // ========================================================================
    // LAMBDAS AND DECLARATIONS
    // ========================================================================

    pub(super) fn lambda_expression(&self, node: SyntaxNode<'_>) -> Result<LambdaExpression> {
        let parameters = self.list(node, Role::Parameter, Spanned::into_variable)?;
        let block_body = node
            .child(Role::Body)
            .is_some_and(|body| body.kind() == SyntaxKind::Block);
        let body = if block_body {
            LambdaBody::Block(Box::new(self.required(node, Role::Body, Spanned::into_block)?))
        } else {
            LambdaBody::Expression(Box::new(self.required(
                node,
                Role::Body,
                Spanned::into_expression,
            )?))
        };
        Ok(LambdaExpression {
            parameters,
            body,
            ty: self.type_of(node),
        })
    }

    pub(super) fn variable_declaration_expression(
        &self,
        node: SyntaxNode<'_>,
    ) -> Result<Expression> {
        Ok(Expression::VariableDeclaration {
            modifiers: node.modifiers(),
            annotations: self.modifier_annotations(node)?,
            type_node: Box::new(self.required(node, Role::Type, Spanned::into_type)?),
            fragments: self.list(node, Role::Fragment, Spanned::into_fragment)?,
            ty: self.type_of(node),
        })
    }

    pub(super) fn type_literal(&self, node: SyntaxNode<'_>) -> Result<Expression> {
        Ok(Expression::TypeLiteral {
            type_node: Box::new(self.required(node, Role::Type, Spanned::into_type)?),
            ty: self.type_of(node),
        })
    }
}
