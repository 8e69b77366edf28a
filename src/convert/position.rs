use crate::ast::SourcePosition;
use crate::syntax::{LineTable, SyntaxKind, SyntaxNode};

/// Position of an external node: its offsets, plus a line number when the
/// node hangs under a compilation unit.
pub fn position_of(node: SyntaxNode<'_>) -> SourcePosition {
    position_in(node, None)
}

/// Like [`position_of`], with `fallback` supplying lines when the tree was
/// built without a line table.
pub fn position_in(node: SyntaxNode<'_>, fallback: Option<&LineTable>) -> SourcePosition {
    let line = if node.root().kind() == SyntaxKind::CompilationUnit {
        line_in(node, fallback)
    } else {
        None
    };
    SourcePosition::new(node.start(), node.length()).with_line(line)
}

/// Position of a comment relative to its unit. Unattached comments have no
/// unit ancestor, so their line comes straight from the line table.
pub fn comment_position(comment: SyntaxNode<'_>, fallback: Option<&LineTable>) -> SourcePosition {
    let line = line_in(comment, fallback);
    SourcePosition::new(comment.start(), comment.length()).with_line(line)
}

fn line_in(node: SyntaxNode<'_>, fallback: Option<&LineTable>) -> Option<u32> {
    node.tree()
        .lines()
        .or(fallback)
        .and_then(|lines| lines.line_of(node.start()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{Role, SyntaxKind, SyntaxTreeBuilder};

    #[test]
    fn detached_nodes_have_no_line() {
        let mut b = SyntaxTreeBuilder::with_source("a\nb\n");
        let name = b.node(SyntaxKind::SimpleName, 2, 1).token("b").build();
        let tree = b.finish().unwrap();
        let node = tree.get(name).unwrap();
        assert_eq!(position_of(node), SourcePosition::new(2, 1));
    }

    #[test]
    fn nodes_under_a_unit_get_lines() {
        let mut b = SyntaxTreeBuilder::with_source("a\nb\n");
        let name = b.node(SyntaxKind::SimpleName, 2, 1).token("b").build();
        let unit = b.node(SyntaxKind::CompilationUnit, 0, 4).child(Role::Package, name).build();
        let tree = b.finish().unwrap();
        let node = tree.get(name).unwrap();
        assert_eq!(position_of(node).line, Some(2));
        assert_eq!(position_of(tree.get(unit).unwrap()).line, Some(1));
    }

    #[test]
    fn free_comments_use_the_line_table() {
        let mut b = SyntaxTreeBuilder::with_source("// x\nclass A {}\n");
        let comment = b.node(SyntaxKind::LineComment, 0, 4).build();
        b.comment(comment);
        let tree = b.finish().unwrap();
        let node = tree.get(comment).unwrap();
        assert_eq!(position_of(node).line, None);
        assert_eq!(comment_position(node, None).line, Some(1));
    }

    #[test]
    fn fallback_lines_apply_only_under_a_unit() {
        let source = "a\nb\n";
        let mut b = SyntaxTreeBuilder::new();
        let name = b.node(SyntaxKind::SimpleName, 2, 1).token("b").build();
        b.node(SyntaxKind::CompilationUnit, 0, 4).child(Role::Package, name).build();
        let detached = b.node(SyntaxKind::SimpleName, 0, 1).token("a").build();
        let tree = b.finish().unwrap();
        let lines = LineTable::from_source(source);

        let name = tree.get(name).unwrap();
        assert_eq!(position_of(name).line, None);
        assert_eq!(position_in(name, Some(&lines)).line, Some(2));
        assert_eq!(position_in(tree.get(detached).unwrap(), Some(&lines)).line, None);
    }

    #[test]
    fn position_is_stable_across_calls() {
        let mut b = SyntaxTreeBuilder::with_source("x + y");
        let x = b.node(SyntaxKind::SimpleName, 0, 1).token("x").build();
        let tree = b.finish().unwrap();
        let node = tree.get(x).unwrap();
        assert_eq!(position_of(node), position_of(node));
    }
}
