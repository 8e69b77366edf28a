use std::sync::Arc;

use tracing::debug;

use crate::ast::{CompilationUnit, Spanned};
use crate::config::Environment;
use crate::errors::{ConvertError, Result};
use crate::syntax::{LineTable, Role, SyntaxKind, SyntaxNode};
use crate::validate::validate_unit;

use super::position::comment_position;
use super::TreeConverter;

/// Converts a whole compilation unit.
///
/// The unit keeps its path, main type name and raw source. Attached comments
/// (doc blocks owned by a declaration) come through their owners, so only
/// comments parented by nothing or by the unit itself are collected here.
/// Those have no unit ancestor, so their line is looked up in the line table
/// directly.
///
/// Lines come from the tree's own line table; a tree built without one gets a
/// table derived from `source`.
pub fn convert_unit(
    env: &Environment<'_>,
    unit: Option<SyntaxNode<'_>>,
    source_path: &str,
    main_type_name: &str,
    source: &str,
) -> Result<Option<Spanned<CompilationUnit>>> {
    let Some(unit) = unit else {
        return Ok(None);
    };
    let fallback = unit
        .tree()
        .lines()
        .is_none()
        .then(|| LineTable::from_source(source));
    let converter = TreeConverter::new(env).with_fallback_lines(fallback.as_ref());

    let position = converter.position(unit);
    if unit.kind() != SyntaxKind::CompilationUnit {
        return Err(ConvertError::invalid(
            "CompilationUnit",
            format!("expected a compilation unit, found {}", unit.kind()),
            position,
        ));
    }

    debug!(path = source_path, main_type = main_type_name, "converting unit");

    let package = converter.optional(unit, Role::Package, Spanned::into_package)?;
    let types = converter.list(unit, Role::TypeDeclaration, Spanned::into_declaration)?;

    let mut comments = Vec::new();
    if env.options.free_floating_comments {
        for comment in unit.tree().comments() {
            let free = comment.parent().map_or(true, |parent| parent == unit);
            if !free {
                continue;
            }
            let converted = converter.convert_node(comment)?.into_comment()?;
            let at = comment_position(comment, fallback.as_ref());
            comments.push(Spanned::new(converted.value, at));
        }
    }

    debug!(
        path = source_path,
        types = types.len(),
        comments = comments.len(),
        "converted unit"
    );

    let built = Spanned::new(
        CompilationUnit {
            source_path: source_path.to_string(),
            main_type_name: main_type_name.to_string(),
            source: Arc::from(source),
            package,
            types,
            comments,
        },
        position,
    );
    validate_unit(&built)?;
    Ok(Some(built))
}
