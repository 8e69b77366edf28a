//! Operand-chain flattening for infix expressions.
//!
//! Upstream parsers often nest a run like `a + b + c + d` as a left-leaning
//! tree of binary nodes instead of one node with extended operands. Walking
//! that tree recursively costs one native frame per link, which generated
//! code can push past any stack limit. The walk here keeps its own stack of
//! [`ChainFrame`]s on the heap and merges every nested node carrying the same
//! operator into a single operand list.

use tracing::trace;

use crate::ast::{InfixExpression, SourcePosition, Spanned};
use crate::errors::{ConvertError, Result};
use crate::syntax::{InfixOperator, LineTable, Role, SyntaxKind, SyntaxNode};
use crate::validate::require;

use super::TreeConverter;

/// One same-operator node still being visited.
///
/// `cursor` walks -2 (left operand), -1 (right operand), then the extended
/// operands in order.
struct ChainFrame<'t> {
    node: SyntaxNode<'t>,
    cursor: isize,
    extended: Vec<SyntaxNode<'t>>,
}

impl<'t> ChainFrame<'t> {
    fn new(node: SyntaxNode<'t>) -> Self {
        Self {
            node,
            cursor: -2,
            extended: node.children(Role::ExtendedOperand).collect(),
        }
    }

    /// Next operand of this frame, or `None` once it is exhausted.
    fn next_child(&mut self, lines: Option<&LineTable>) -> Result<Option<SyntaxNode<'t>>> {
        let index = self.cursor;
        self.cursor += 1;
        match index {
            -2 => require(self.node, Role::LeftOperand, lines).map(Some),
            -1 => require(self.node, Role::RightOperand, lines).map(Some),
            _ => Ok(usize::try_from(index)
                .ok()
                .and_then(|i| self.extended.get(i).copied())),
        }
    }
}

fn continues_chain(child: SyntaxNode<'_>, operator: InfixOperator) -> bool {
    child.kind() == SyntaxKind::InfixExpression && child.infix_operator() == Some(operator)
}

impl TreeConverter<'_> {
    pub(super) fn infix_expression(
        &self,
        node: SyntaxNode<'_>,
        position: SourcePosition,
    ) -> Result<InfixExpression> {
        let operator = node.infix_operator().ok_or_else(|| {
            ConvertError::invalid("InfixExpression", "missing operator", position)
        })?;

        let mut operands = Vec::new();
        let mut stack = vec![ChainFrame::new(node)];
        let mut frames = 1usize;

        while let Some(frame) = stack.last_mut() {
            let Some(child) = frame.next_child(self.lines)? else {
                stack.pop();
                continue;
            };
            if continues_chain(child, operator) {
                stack.push(ChainFrame::new(child));
                frames += 1;
                continue;
            }
            operands.push(self.convert_node(child).and_then(Spanned::into_expression)?);
        }

        trace!(%operator, operands = operands.len(), frames, "flattened operand chain");

        Ok(InfixExpression {
            operator,
            operands,
            ty: self.type_of(node),
            constant: self.constant_of(node),
        })
    }
}
