use crate::ast::{Block, Spanned, Statement};
use crate::errors::Result;
use crate::syntax::{Role, SyntaxNode};

use super::TreeConverter;

impl TreeConverter<'_> {
    pub(super) fn block(&self, node: SyntaxNode<'_>) -> Result<Block> {
        Ok(Block {
            statements: self.list(node, Role::Statement, Spanned::into_statement)?,
        })
    }

    pub(super) fn assert_statement(&self, node: SyntaxNode<'_>) -> Result<Statement> {
        Ok(Statement::Assert {
            expression: self.required(node, Role::Expression, Spanned::into_expression)?,
            message: self.optional(node, Role::Message, Spanned::into_expression)?,
        })
    }

    pub(super) fn break_statement(&self, node: SyntaxNode<'_>) -> Result<Statement> {
        Ok(Statement::Break {
            label: self.optional(node, Role::Label, Spanned::into_simple_name)?,
        })
    }

    pub(super) fn continue_statement(&self, node: SyntaxNode<'_>) -> Result<Statement> {
        Ok(Statement::Continue {
            label: self.optional(node, Role::Label, Spanned::into_simple_name)?,
        })
    }

    pub(super) fn constructor_invocation(&self, node: SyntaxNode<'_>) -> Result<Statement> {
        Ok(Statement::ConstructorInvocation {
            constructor: self.element_of(node),
            arguments: self.list(node, Role::Argument, Spanned::into_expression)?,
        })
    }

    pub(super) fn super_constructor_invocation(&self, node: SyntaxNode<'_>) -> Result<Statement> {
        Ok(Statement::SuperConstructorInvocation {
            constructor: self.element_of(node),
            expression: self.optional(node, Role::Expression, Spanned::into_expression)?,
            arguments: self.list(node, Role::Argument, Spanned::into_expression)?,
        })
    }

    pub(super) fn do_statement(&self, node: SyntaxNode<'_>) -> Result<Statement> {
        Ok(Statement::Do {
            body: Box::new(self.required(node, Role::Body, Spanned::into_statement)?),
            expression: self.required(node, Role::Expression, Spanned::into_expression)?,
        })
    }

    pub(super) fn enhanced_for(&self, node: SyntaxNode<'_>) -> Result<Statement> {
        Ok(Statement::EnhancedFor {
            parameter: self.required(node, Role::Parameter, Spanned::into_single_variable)?,
            expression: self.required(node, Role::Expression, Spanned::into_expression)?,
            body: Box::new(self.required(node, Role::Body, Spanned::into_statement)?),
        })
    }

    pub(super) fn expression_statement(&self, node: SyntaxNode<'_>) -> Result<Statement> {
        Ok(Statement::Expression {
            expression: self.required(node, Role::Expression, Spanned::into_expression)?,
        })
    }

    pub(super) fn for_statement(&self, node: SyntaxNode<'_>) -> Result<Statement> {
        Ok(Statement::For {
            initializers: self.list(node, Role::Initializer, Spanned::into_expression)?,
            expression: self.optional(node, Role::Expression, Spanned::into_expression)?,
            updaters: self.list(node, Role::Updater, Spanned::into_expression)?,
            body: Box::new(self.required(node, Role::Body, Spanned::into_statement)?),
        })
    }

    pub(super) fn if_statement(&self, node: SyntaxNode<'_>) -> Result<Statement> {
        Ok(Statement::If {
            expression: self.required(node, Role::Expression, Spanned::into_expression)?,
            then_statement: Box::new(self.required(
                node,
                Role::ThenStatement,
                Spanned::into_statement,
            )?),
            else_statement: self
                .optional(node, Role::ElseStatement, Spanned::into_statement)?
                .map(Box::new),
        })
    }

    pub(super) fn labeled_statement(&self, node: SyntaxNode<'_>) -> Result<Statement> {
        Ok(Statement::Labeled {
            label: self.required(node, Role::Label, Spanned::into_simple_name)?,
            body: Box::new(self.required(node, Role::Body, Spanned::into_statement)?),
        })
    }

    pub(super) fn return_statement(&self, node: SyntaxNode<'_>) -> Result<Statement> {
        Ok(Statement::Return {
            expression: self.optional(node, Role::Expression, Spanned::into_expression)?,
        })
    }

    /// `default:` is the case without an expression.
    pub(super) fn switch_case(&self, node: SyntaxNode<'_>) -> Result<Statement> {
        Ok(Statement::SwitchCase {
            expression: self.optional(node, Role::Expression, Spanned::into_expression)?,
        })
    }

    pub(super) fn switch_statement(&self, node: SyntaxNode<'_>) -> Result<Statement> {
        Ok(Statement::Switch {
            expression: self.required(node, Role::Expression, Spanned::into_expression)?,
            statements: self.list(node, Role::Statement, Spanned::into_statement)?,
        })
    }

    pub(super) fn synchronized_statement(&self, node: SyntaxNode<'_>) -> Result<Statement> {
        Ok(Statement::Synchronized {
            expression: self.required(node, Role::Expression, Spanned::into_expression)?,
            body: self.required(node, Role::Body, Spanned::into_block)?,
        })
    }

    pub(super) fn throw_statement(&self, node: SyntaxNode<'_>) -> Result<Statement> {
        Ok(Statement::Throw {
            expression: self.required(node, Role::Expression, Spanned::into_expression)?,
        })
    }

    pub(super) fn try_statement(&self, node: SyntaxNode<'_>) -> Result<Statement> {
        Ok(Statement::Try {
            resources: self.list(node, Role::Resource, Spanned::into_expression)?,
            body: self.required(node, Role::Body, Spanned::into_block)?,
            catch_clauses: self.list(node, Role::CatchClause, Spanned::into_catch_clause)?,
            finally: self.optional(node, Role::Finally, Spanned::into_block)?,
        })
    }

    pub(super) fn type_declaration_statement(&self, node: SyntaxNode<'_>) -> Result<Statement> {
        Ok(Statement::TypeDeclaration {
            declaration: Box::new(self.required(
                node,
                Role::Declaration,
                Spanned::into_declaration,
            )?),
        })
    }

    pub(super) fn variable_declaration_statement(&self, node: SyntaxNode<'_>) -> Result<Statement> {
        Ok(Statement::VariableDeclaration {
            modifiers: node.modifiers(),
            annotations: self.modifier_annotations(node)?,
            type_node: self.required(node, Role::Type, Spanned::into_type)?,
            fragments: self.list(node, Role::Fragment, Spanned::into_fragment)?,
        })
    }

    pub(super) fn while_statement(&self, node: SyntaxNode<'_>) -> Result<Statement> {
        Ok(Statement::While {
            expression: self.required(node, Role::Expression, Spanned::into_expression)?,
            body: Box::new(self.required(node, Role::Body, Spanned::into_statement)?),
        })
    }
}
