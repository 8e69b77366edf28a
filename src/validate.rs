//! Structural checks on converted nodes.
//!
//! Required children are checked on the external node before anything is
//! built ([`require`]); counts and cross-field rules are checked on the built
//! node ([`validate`]) before it is returned. Children were validated when they
//! were converted, so both checks only look one level deep.

use crate::ast::{
    BodyDeclaration, CompilationUnit, Expression, MethodDeclaration, Spanned, Statement, TreeNode,
    Type, TypeDeclaration, VariableDeclaration,
};
use crate::convert::position::position_in;
use crate::errors::{ConvertError, Result};
use crate::syntax::{LineTable, Role, SyntaxNode};

/// The child of `node` in `role`, or a `MissingChild` error positioned at
/// `node`. `lines` stands in for a tree built without a line table.
pub fn require<'t>(
    node: SyntaxNode<'t>,
    role: Role,
    lines: Option<&LineTable>,
) -> Result<SyntaxNode<'t>> {
    node.child(role).ok_or_else(|| {
        ConvertError::missing_child(node.kind(), role, position_in(node, lines))
    })
}

/// Checks the rules of a freshly built node.
pub fn validate(node: &Spanned<TreeNode>) -> Result<()> {
    let kind = node.value.kind_name();
    let fail = |detail: &str| Err(ConvertError::invalid(kind, detail, node.position));

    match &node.value {
        TreeNode::Expression(expr) => match expr {
            Expression::Infix(infix) if infix.operands.len() < 2 => {
                fail("needs at least two operands")
            }
            Expression::ArrayCreation {
                dimensions,
                initializer,
                ..
            } if dimensions.is_empty() && initializer.is_none() => {
                fail("needs dimensions or an initializer")
            }
            Expression::VariableDeclaration { fragments, .. } if fragments.is_empty() => {
                fail("declares no variables")
            }
            Expression::Name(name) if name.simple_identifier().is_empty() => {
                fail("empty identifier")
            }
            Expression::NumberLiteral { token, .. } if token.is_empty() => fail("empty token"),
            _ => Ok(()),
        },
        TreeNode::Statement(stmt) => match stmt {
            Statement::VariableDeclaration { fragments, .. } if fragments.is_empty() => {
                fail("declares no variables")
            }
            Statement::Try {
                resources,
                catch_clauses,
                finally,
                ..
            } if resources.is_empty() && catch_clauses.is_empty() && finally.is_none() => {
                fail("needs resources, a catch clause, or a finally block")
            }
            Statement::EnhancedFor { parameter, .. } if parameter.value.initializer.is_some() => {
                fail("loop variable has an initializer")
            }
            _ => Ok(()),
        },
        TreeNode::Type(ty) => match ty {
            Type::Intersection { types, .. } | Type::Union { types, .. } if types.len() < 2 => {
                fail("needs at least two member types")
            }
            _ => Ok(()),
        },
        TreeNode::Declaration(decl) => match decl {
            BodyDeclaration::Field { fragments, .. } if fragments.is_empty() => {
                fail("declares no variables")
            }
            BodyDeclaration::Type(TypeDeclaration {
                is_interface: true,
                superclass: Some(_),
                ..
            }) => fail("an interface cannot have a superclass"),
            BodyDeclaration::Method(method) => validate_method(method).map_or(Ok(()), fail),
            _ => Ok(()),
        },
        TreeNode::CatchClause(clause) if clause.exception.value.initializer.is_some() => {
            fail("exception parameter has an initializer")
        }
        TreeNode::Variable(VariableDeclaration::Single(var))
            if var.name.value.identifier.is_empty() =>
        {
            fail("empty identifier")
        }
        TreeNode::Variable(VariableDeclaration::Fragment(var))
            if var.name.value.identifier.is_empty() =>
        {
            fail("empty identifier")
        }
        _ => Ok(()),
    }
}

fn validate_method(method: &MethodDeclaration) -> Option<&'static str> {
    if method.is_constructor && method.return_type.is_some() {
        return Some("a constructor has no return type");
    }
    let last = method.parameters.len().saturating_sub(1);
    if method
        .parameters
        .iter()
        .enumerate()
        .any(|(i, param)| param.value.is_varargs && i != last)
    {
        return Some("only the last parameter may be variable-arity");
    }
    None
}

/// Checks the unit-level rules.
pub fn validate_unit(unit: &Spanned<CompilationUnit>) -> Result<()> {
    if unit.value.main_type_name.is_empty() {
        return Err(ConvertError::invalid(
            "CompilationUnit",
            "main type name is empty",
            unit.position,
        ));
    }
    Ok(())
}
